use serde_json::{Value, json};

use harsnip::{Conversion, GeneratorOptions, HttpSnippet, TargetRegistry};

async fn render(request: Value, target: &str, client: &str, options: Option<&GeneratorOptions>) -> String {
    let registry = TargetRegistry::with_defaults();
    let snippet = HttpSnippet::new(request).await.unwrap();

    match snippet.convert(&registry, target, Some(client), options) {
        Some(Conversion::Single(code)) => code,
        other => panic!("expected a single snippet, got {other:?}"),
    }
}

#[tokio::test]
async fn curl_json_post_with_cookies() {
    let code = render(
        json!({
            "method": "POST",
            "url": "http://mockbin.com/har?key=value",
            "headers": [{ "name": "content-type", "value": "application/json" }],
            "cookies": [
                { "name": "foo", "value": "bar" },
                { "name": "bar", "value": "baz" }
            ],
            "postData": { "mimeType": "application/json", "text": "{\"foo\":\"bar\"}" }
        }),
        "shell",
        "curl",
        None,
    )
    .await;

    assert_eq!(
        code,
        "curl --request POST \\\n  \
         --url 'http://mockbin.com/har?key=value' \\\n  \
         --header 'content-type: application/json' \\\n  \
         --cookie 'foo=bar; bar=baz' \\\n  \
         --data '{\"foo\":\"bar\"}'"
    );
}

#[tokio::test]
async fn curl_short_flags_for_form_params() {
    let options = GeneratorOptions::new().set("short", true);
    let code = render(
        json!({
            "method": "POST",
            "url": "http://mockbin.com/har",
            "postData": {
                "mimeType": "application/x-www-form-urlencoded",
                "params": [
                    { "name": "foo", "value": "bar" },
                    { "name": "hello", "value": "world" }
                ]
            }
        }),
        "shell",
        "curl",
        Some(&options),
    )
    .await;

    assert_eq!(
        code,
        "curl -X POST \\\n  http://mockbin.com/har \\\n  -d foo=bar \\\n  -d hello=world"
    );
}

#[tokio::test]
async fn curl_multipart_uses_form_flags() {
    let code = render(
        json!({
            "method": "POST",
            "url": "http://mockbin.com/har",
            "postData": {
                "mimeType": "multipart/form-data",
                "params": [
                    { "name": "foo", "value": "bar" },
                    { "name": "file", "fileName": "test/fixtures/files/hello.txt", "contentType": "text/plain" }
                ]
            }
        }),
        "shell",
        "curl",
        None,
    )
    .await;

    assert_eq!(
        code,
        "curl --request POST \\\n  \
         --url http://mockbin.com/har \\\n  \
         --header 'content-type: multipart/form-data; boundary=---011000010111000001101001' \\\n  \
         --form foo=bar \\\n  \
         --form file=@test/fixtures/files/hello.txt"
    );
}

#[tokio::test]
async fn wget_get_with_header() {
    let code = render(
        json!({
            "method": "GET",
            "url": "http://mockbin.com/har",
            "headers": [{ "name": "accept", "value": "application/json" }]
        }),
        "shell",
        "wget",
        None,
    )
    .await;

    assert_eq!(
        code,
        "wget --quiet \\\n  \
         --method GET \\\n  \
         --header 'accept: application/json' \\\n  \
         --output-document \\\n  \
         - http://mockbin.com/har"
    );
}

#[tokio::test]
async fn http1_text_body_gets_host_and_length() {
    let code = render(
        json!({
            "method": "POST",
            "url": "http://mockbin.com/har?foo=bar",
            "headers": [{ "name": "Content-Type", "value": "text/plain" }],
            "postData": { "mimeType": "text/plain", "text": "Hello World" }
        }),
        "http",
        "http1.1",
        None,
    )
    .await;

    assert_eq!(
        code,
        "POST /har?foo=bar HTTP/1.1\r\n\
         Host: mockbin.com\r\n\
         Content-Type: text/plain\r\n\
         Content-Length: 11\r\n\
         \r\n\
         Hello World"
    );
}

#[tokio::test]
async fn python_requests_with_query_and_headers() {
    let options = GeneratorOptions::new().with_indent("    ");
    let code = render(
        json!({
            "method": "GET",
            "url": "http://mockbin.com/har?foo=bar",
            "headers": [{ "name": "accept", "value": "application/json" }]
        }),
        "python",
        "requests",
        Some(&options),
    )
    .await;

    assert_eq!(
        code,
        "import requests\n\
         \n\
         url = \"http://mockbin.com/har\"\n\
         \n\
         querystring = {\"foo\": \"bar\"}\n\
         \n\
         headers = {\n    \"accept\": \"application/json\"\n}\n\
         \n\
         response = requests.request(\"GET\", url, headers=headers, params=querystring)\n\
         \n\
         print(response.text)"
    );
}

#[tokio::test]
async fn fetch_json_body_is_stringified() {
    let code = render(
        json!({
            "method": "POST",
            "url": "http://mockbin.com/har",
            "headers": [{ "name": "content-type", "value": "application/json" }],
            "postData": { "mimeType": "application/json", "text": "{\"a\":1}" }
        }),
        "javascript",
        "fetch",
        None,
    )
    .await;

    assert_eq!(
        code,
        "const url = \"http://mockbin.com/har\";\n\
         const options = {\n  \
         method: \"POST\",\n  \
         headers: {\"content-type\":\"application/json\"},\n  \
         body: JSON.stringify({\"a\":1})\n\
         };\n\
         \n\
         fetch(url, options)\n  \
         .then(res => res.json())\n  \
         .then(json => console.log(json))\n  \
         .catch(err => console.error(err));"
    );
}
