use serde_json::Value;

#[derive(Debug, Clone, PartialEq)]
/// The subset of an HTTP response that is safe and useful to log.
///
/// Always exactly `{status, status_text, data}`; headers and other raw
/// response fields never appear here.
pub struct LoggableResponse {
    pub status: u16,
    pub status_text: String,
    pub data: Value,
}

#[derive(Debug, Clone, PartialEq)]
/// The raw HTTP response as received from the transport, headers included.
pub struct RawResponse {
    pub status: u16,
    pub status_text: String,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

#[derive(Debug, Clone, PartialEq)]
/// Result of one Brevo call.
///
/// `loggable` is always present. `original` is present if and only if a real
/// network call was made, so it is `None` for mocked calls.
pub struct ResponseEnvelope {
    pub original: Option<RawResponse>,
    pub loggable: LoggableResponse,
}
