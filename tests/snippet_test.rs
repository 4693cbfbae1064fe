use serde_json::json;

use harsnip::targets::{ClientInfo, FnClient, Target, TargetInfo};
use harsnip::{Conversion, GeneratorOptions, HttpSnippet, RegistrationError, TargetRegistry};

/// Registry with an extra `echo` target whose client returns `METHOD url`.
fn registry_with_echo() -> TargetRegistry {
    let mut registry = TargetRegistry::with_defaults();
    registry
        .add_target(
            Target::new(TargetInfo::new("echo", "Echo", ".txt", "line")).with_client(
                FnClient::new(ClientInfo::new("line", "Line"), |request, options| {
                    format!("{}{} {}", options.indent, request.method, request.full_url)
                }),
            ),
        )
        .expect("echo target registers");
    registry
}

fn archive(urls: &[&str]) -> serde_json::Value {
    let entries: Vec<_> = urls
        .iter()
        .map(|url| json!({ "request": { "method": "GET", "url": url } }))
        .collect();
    json!({ "log": { "version": "1.2", "entries": entries } })
}

#[tokio::test]
async fn duplicate_headers_keep_last_value() {
    let snippet = HttpSnippet::new(json!({
        "method": "GET",
        "url": "http://x.test/",
        "headers": [
            { "name": "x-token", "value": "first" },
            { "name": "x-token", "value": "second" },
            { "name": "x-token", "value": "third" }
        ]
    }))
    .await
    .unwrap();

    assert_eq!(snippet.requests()[0].headers_obj["x-token"], "third");
}

#[tokio::test]
async fn duplicate_cookies_keep_first_value() {
    let snippet = HttpSnippet::new(json!({
        "method": "GET",
        "url": "http://x.test/",
        "cookies": [
            { "name": "session", "value": "one" },
            { "name": "session", "value": "two" }
        ]
    }))
    .await
    .unwrap();

    assert_eq!(snippet.requests()[0].cookies_obj["session"], "one");
}

#[tokio::test]
async fn url_query_overrides_query_string() {
    let snippet = HttpSnippet::new(json!({
        "method": "GET",
        "url": "http://x.test/path?a=2",
        "queryString": [{ "name": "a", "value": "1" }]
    }))
    .await
    .unwrap();

    assert_eq!(snippet.requests()[0].query_obj["a"], "2");
}

#[tokio::test]
async fn url_without_query_string_round_trips() {
    let snippet = HttpSnippet::new(json!({ "method": "GET", "url": "http://x.test/p?x=1" }))
        .await
        .unwrap();

    let request = &snippet.requests()[0];
    assert_eq!(request.url, "http://x.test/p");
    assert_eq!(request.full_url, "http://x.test/p?x=1");
}

#[tokio::test]
async fn invalid_json_body_becomes_plain_text() {
    let snippet = HttpSnippet::new(json!({
        "method": "POST",
        "url": "http://x.test/",
        "postData": { "mimeType": "application/json", "text": "{bad json" }
    }))
    .await
    .unwrap();

    let body = &snippet.requests()[0].post_data;
    assert_eq!(body.mime_type, "text/plain");
    assert_eq!(body.text, "{bad json");
}

#[tokio::test]
async fn urlencoded_duplicate_params_keep_last() {
    let snippet = HttpSnippet::new(json!({
        "method": "POST",
        "url": "http://x.test/",
        "postData": {
            "mimeType": "application/x-www-form-urlencoded",
            "params": [{ "name": "a", "value": "1" }, { "name": "a", "value": "2" }]
        }
    }))
    .await
    .unwrap();

    assert_eq!(snippet.requests()[0].post_data.text, "a=2");
}

#[tokio::test]
async fn invalid_entry_aborts_batch() {
    let result = HttpSnippet::new(json!({ "method": "GET" })).await;
    assert!(result.is_err());
}

#[test]
fn add_target_twice_keeps_first_registration() {
    let mut registry = registry_with_echo();

    let again = Target::new(TargetInfo::new("echo", "Echo 2", ".echo", "line")).with_client(
        FnClient::new(ClientInfo::new("line", "Line"), |_, _| String::new()),
    );
    let err = registry.add_target(again).unwrap_err();

    assert!(matches!(err, RegistrationError::DuplicateTarget(_)));
    assert_eq!(registry.extname("echo"), ".txt");
    assert_eq!(registry.get("echo").unwrap().info.title, "Echo");
}

#[test]
fn available_targets_exclude_reserved_keys() {
    let registry = registry_with_echo();

    let targets = registry.available_targets();
    assert!(targets.iter().any(|t| t.key == "echo"));
    for target in targets {
        for client in target.clients.unwrap_or_default() {
            assert_ne!(client.key, "info");
            assert_ne!(client.key, "index");
        }
    }
}

#[tokio::test]
async fn single_request_converts_to_bare_result() {
    let registry = registry_with_echo();
    let snippet = HttpSnippet::new(archive(&["http://a.test/"])).await.unwrap();

    let result = snippet.convert(&registry, "echo", None, None);
    assert_eq!(result, Some(Conversion::Single("  GET http://a.test/".to_string())));
}

#[tokio::test]
async fn many_requests_convert_in_input_order() {
    let registry = registry_with_echo();
    let snippet = HttpSnippet::new(archive(&["http://a.test/", "http://b.test/", "http://c.test/"]))
        .await
        .unwrap();

    let options = GeneratorOptions::new().with_indent("");
    let result = snippet.convert(&registry, "echo", Some("line"), Some(&options));

    assert_eq!(
        result,
        Some(Conversion::Many(vec![
            "GET http://a.test/".to_string(),
            "GET http://b.test/".to_string(),
            "GET http://c.test/".to_string(),
        ]))
    );
}

#[tokio::test]
async fn unknown_target_is_not_an_error() {
    let registry = TargetRegistry::with_defaults();
    let snippet = HttpSnippet::new(archive(&["http://a.test/"])).await.unwrap();

    assert!(snippet.convert(&registry, "cobol", None, None).is_none());
}

#[tokio::test]
async fn unknown_client_uses_target_default() {
    let registry = TargetRegistry::with_defaults();
    let snippet = HttpSnippet::new(archive(&["http://a.test/"])).await.unwrap();

    let Some(Conversion::Single(code)) = snippet.convert(&registry, "shell", Some("nope"), None)
    else {
        panic!("expected a single snippet");
    };
    assert!(code.starts_with("curl --request GET"));
}

#[tokio::test]
async fn client_added_at_runtime_is_dispatched() {
    let mut registry = TargetRegistry::with_defaults();
    registry
        .add_target_client(
            "shell",
            FnClient::new(ClientInfo::new("httpie", "HTTPie"), |request, _| {
                format!("http {} {}", request.method, request.full_url)
            }),
        )
        .unwrap();

    let snippet = HttpSnippet::new(archive(&["http://a.test/"])).await.unwrap();
    let result = snippet.convert(&registry, "shell", Some("httpie"), None);

    assert_eq!(result, Some(Conversion::Single("http GET http://a.test/".to_string())));
}
