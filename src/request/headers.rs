use super::types::HeadersMap;

/// Look up a header value ignoring the case of its name.
pub fn get_header<'a>(headers: &'a HeadersMap, name: &str) -> Option<&'a str> {
    headers
        .iter()
        .find(|(key, _)| key.eq_ignore_ascii_case(name))
        .map(|(_, value)| value.as_str())
}

/// Return the key, in its original casing, that matches `name` ignoring case.
pub fn get_header_name<'a>(headers: &'a HeadersMap, name: &str) -> Option<&'a str> {
    headers
        .keys()
        .find(|key| key.eq_ignore_ascii_case(name))
        .map(String::as_str)
}

pub fn has_header(headers: &HeadersMap, name: &str) -> bool {
    get_header_name(headers, name).is_some()
}
