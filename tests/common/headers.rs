use bunner_cors_negotiation::Response;

pub fn header_values<'a>(response: &'a Response, name: &str) -> Option<Vec<&'a str>> {
    response
        .headers()
        .get(name)
        .map(|values| values.iter().map(String::as_str).collect())
}

/// Values joined the way they travel on the wire.
pub fn header_value(response: &Response, name: &str) -> Option<String> {
    response.headers().get(name).map(|values| values.join(", "))
}

pub fn has_header(response: &Response, name: &str) -> bool {
    response.headers().contains(name)
}

pub fn cors_header_names(response: &Response) -> Vec<&str> {
    response
        .headers()
        .names()
        .filter(|name| name.starts_with("access-control-"))
        .collect()
}
