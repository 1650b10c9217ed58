use crate::constants::header;
use crate::headers::HeaderMap;
use crate::message::{Request, Response};
use http::header::{HeaderName, HeaderValue};
use tracing::debug;

impl Request {
    /// Copies the method and every readable header occurrence out of an
    /// `http` request head.
    ///
    /// `Access-Control-Request-Headers` is a comma-separated list on the wire;
    /// each element becomes its own value so headers negotiation sees one name
    /// per entry.
    pub fn from_parts(parts: &http::request::Parts) -> Self {
        Self::from_http_headers(parts.method.as_str(), &parts.headers)
    }

    pub fn from_http<B>(request: &http::Request<B>) -> Self {
        Self::from_http_headers(request.method().as_str(), request.headers())
    }

    fn from_http_headers(method: &str, source: &http::HeaderMap) -> Self {
        let mut headers = HeaderMap::with_capacity(source.keys_len());
        for (name, value) in source {
            let Ok(value) = value.to_str() else {
                debug!(header = %name, "skipping non-text header value");
                continue;
            };

            if name.as_str().eq_ignore_ascii_case(header::ACCESS_CONTROL_REQUEST_HEADERS) {
                split_list(value).for_each(|entry| headers.append(name.as_str(), entry));
                if !headers.contains(name.as_str()) {
                    headers.insert(name.as_str(), Vec::<String>::new());
                }
            } else {
                headers.append(name.as_str(), value);
            }
        }

        Self::with_headers(method, headers)
    }
}

impl Response {
    /// Writes this response's headers into `map`, one line per value.
    ///
    /// Entries already in `map` under the same name are replaced. Names or
    /// values that are not valid on the wire are skipped.
    pub fn apply_to(&self, map: &mut http::HeaderMap) {
        for (name, values) in self.headers() {
            let Ok(header_name) = HeaderName::try_from(name.as_str()) else {
                debug!(header = %name, "skipping header name that is not valid on the wire");
                continue;
            };

            map.remove(&header_name);
            for value in values {
                match HeaderValue::from_str(value) {
                    Ok(header_value) => {
                        map.append(header_name.clone(), header_value);
                    }
                    Err(_) => {
                        debug!(header = %name, "skipping header value that is not valid on the wire")
                    }
                }
            }
        }
    }

    pub fn into_http(self) -> Result<http::Response<Vec<u8>>, http::Error> {
        let mut builder = http::Response::builder().status(self.status());
        if let Some(map) = builder.headers_mut() {
            self.apply_to(map);
        }
        builder.body(self.body().to_vec())
    }
}

fn split_list(value: &str) -> impl Iterator<Item = &str> {
    value
        .split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
}
