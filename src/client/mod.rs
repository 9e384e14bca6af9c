//! Client layer: orchestrates transport calls and maps transport ↔ domain.

use std::error::Error as StdError;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use serde_json::{Value, json};

use crate::domain::{
    ApiKey, EmailAddress, LoggableResponse, RawResponse, ResponseEnvelope, SendEmail, SendSms,
    SenderName, ValidationError,
};
use crate::transport::{EMAIL_PATH, SMS_PATH, encode_email_body, encode_sms_body};

const DEFAULT_BASE_URL: &str = "https://api.brevo.com/v3";
const DEFAULT_FROM_EMAIL_ADDRESS: &str = "test@example.com";
const DEFAULT_FROM_EMAIL_NAME: &str = "Test";
const DEFAULT_FROM_SMS_NAME: &str = "Test";
const MOCK_MESSAGE: &str = "mocked Brevo response";

type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

#[derive(Debug, Clone)]
struct HttpResponse {
    status: u16,
    status_text: String,
    headers: Vec<(String, String)>,
    body: String,
}

trait HttpTransport: Send + Sync {
    fn post_json<'a>(
        &'a self,
        url: &'a str,
        api_key: &'a str,
        body: &'a Value,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>>;
}

#[derive(Debug, Clone)]
struct ReqwestTransport {
    client: reqwest::Client,
}

impl HttpTransport for ReqwestTransport {
    fn post_json<'a>(
        &'a self,
        url: &'a str,
        api_key: &'a str,
        body: &'a Value,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>> {
        Box::pin(async move {
            let response = self
                .client
                .post(url)
                .header("accept", "application/json")
                .header(ApiKey::HEADER, api_key)
                .header("content-type", "application/json")
                .json(body)
                .send()
                .await?;
            let status = response.status().as_u16();
            let status_text = response
                .status()
                .canonical_reason()
                .unwrap_or("")
                .to_owned();
            let headers = response
                .headers()
                .iter()
                .filter_map(|(name, value)| {
                    value
                        .to_str()
                        .ok()
                        .map(|v| (name.as_str().to_owned(), v.to_owned()))
                })
                .collect();
            let body = response.text().await?;
            Ok(HttpResponse {
                status,
                status_text,
                headers,
                body,
            })
        })
    }
}

#[derive(Debug, thiserror::Error)]
/// Errors returned by [`BrevoClient`].
///
/// This error preserves:
/// - configuration failures (calling without an API key outside mock mode),
/// - HTTP-level failures (non-2xx status or transport failures),
/// - validation/parse failures.
pub enum BrevoError {
    /// The client was built without an API key and mock mode is off.
    #[error("Brevo API key not provided")]
    MissingApiKey,

    /// HTTP client / transport failure (DNS, TLS, timeouts, etc).
    #[error("transport error: {0}")]
    Transport(#[source] Box<dyn StdError + Send + Sync>),

    /// Non-successful HTTP status code returned by the server.
    #[error("unexpected HTTP status: {status}")]
    HttpStatus { status: u16, body: Option<String> },

    /// A 2xx response body could not be parsed as JSON.
    #[error("parse error: {0}")]
    Parse(#[source] Box<dyn StdError + Send + Sync>),

    /// One of the domain constructors rejected an invalid value.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),
}

#[derive(Debug, Clone, Default)]
/// Builder for [`BrevoClient`].
///
/// All fields are optional: without an API key the client can only be used in
/// mock mode, and the sender identities fall back to the crate defaults
/// (`test@example.com` / `Test`).
pub struct BrevoClientBuilder {
    api_key: Option<ApiKey>,
    from_email_address: Option<EmailAddress>,
    from_email_name: Option<SenderName>,
    from_sms_name: Option<SenderName>,
    mock: bool,
    base_url: Option<String>,
    timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl BrevoClientBuilder {
    /// Create a builder with no key, no sender overrides, and mock mode off.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the Brevo API key.
    ///
    /// The key is not required at build time; its absence only surfaces as
    /// [`BrevoError::MissingApiKey`] when a non-mock call is made.
    pub fn api_key(mut self, api_key: ApiKey) -> Self {
        self.api_key = Some(api_key);
        self
    }

    /// Set the default sender address for [`BrevoClient::send_email`].
    pub fn from_email_address(mut self, address: EmailAddress) -> Self {
        self.from_email_address = Some(address);
        self
    }

    /// Set the default sender display name for [`BrevoClient::send_email`].
    pub fn from_email_name(mut self, name: SenderName) -> Self {
        self.from_email_name = Some(name);
        self
    }

    /// Set the default sender name for [`BrevoClient::send_sms`].
    pub fn from_sms_name(mut self, name: SenderName) -> Self {
        self.from_sms_name = Some(name);
        self
    }

    /// Toggle mock mode: calls short-circuit with a canned 200 response and
    /// never touch the network.
    pub fn mock(mut self, mock: bool) -> Self {
        self.mock = mock;
        self
    }

    /// Override the Brevo API base URL (default `https://api.brevo.com/v3`).
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Set an HTTP client timeout applied to the entire request.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Override the HTTP `User-Agent` header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Build a [`BrevoClient`].
    pub fn build(self) -> Result<BrevoClient, BrevoError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(user_agent) = self.user_agent {
            builder = builder.user_agent(user_agent);
        }

        let client = builder
            .build()
            .map_err(|err| BrevoError::Transport(Box::new(err)))?;

        Ok(BrevoClient {
            api_key: self.api_key,
            from_email_address: self.from_email_address,
            from_email_name: self.from_email_name,
            from_sms_name: self.from_sms_name,
            mock: self.mock,
            base_url: self
                .base_url
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_owned()),
            http: Arc::new(ReqwestTransport { client }),
        })
    }
}

#[derive(Clone)]
/// High-level Brevo client for transactional email and SMS.
///
/// Each operation issues at most one `POST https://api.brevo.com/v3/{path}`
/// with the `accept`, `api-key`, and `content-type` headers, and returns a
/// [`ResponseEnvelope`] pairing the raw response with its loggable
/// projection. Configuration is read-only after construction, and the client
/// is cheap to clone and safe to call concurrently.
pub struct BrevoClient {
    api_key: Option<ApiKey>,
    from_email_address: Option<EmailAddress>,
    from_email_name: Option<SenderName>,
    from_sms_name: Option<SenderName>,
    mock: bool,
    base_url: String,
    http: Arc<dyn HttpTransport>,
}

impl BrevoClient {
    /// Create a client with an API key and all other settings at their
    /// defaults.
    ///
    /// For sender identities, mock mode, or transport knobs, use
    /// [`BrevoClient::builder`].
    pub fn new(api_key: ApiKey) -> Self {
        Self {
            api_key: Some(api_key),
            from_email_address: None,
            from_email_name: None,
            from_sms_name: None,
            mock: false,
            base_url: DEFAULT_BASE_URL.to_owned(),
            http: Arc::new(ReqwestTransport {
                client: reqwest::Client::new(),
            }),
        }
    }

    /// Start building a client with custom settings.
    pub fn builder() -> BrevoClientBuilder {
        BrevoClientBuilder::new()
    }

    /// Issue a raw authenticated POST to a Brevo endpoint.
    ///
    /// `path` is the endpoint suffix under the base URL (for example
    /// `smtp/email`). In mock mode this returns a canned 200 envelope without
    /// touching the network; otherwise an API key is required.
    ///
    /// Errors:
    /// - [`BrevoError::MissingApiKey`] when no key is configured and mock
    ///   mode is off, raised before any network attempt,
    /// - [`BrevoError::Transport`] for connection-level failures,
    /// - [`BrevoError::HttpStatus`] for non-2xx HTTP responses,
    /// - [`BrevoError::Parse`] when a 2xx body is not valid JSON.
    pub async fn send_request(
        &self,
        path: &str,
        data: Value,
    ) -> Result<ResponseEnvelope, BrevoError> {
        if self.mock {
            return Ok(ResponseEnvelope {
                original: None,
                loggable: LoggableResponse {
                    status: 200,
                    status_text: "OK".to_owned(),
                    data: json!({ "message": MOCK_MESSAGE }),
                },
            });
        }

        let Some(api_key) = self.api_key.as_ref() else {
            return Err(BrevoError::MissingApiKey);
        };

        let url = format!("{}/{}", self.base_url.trim_end_matches('/'), path);
        let response = self
            .http
            .post_json(&url, api_key.as_str(), &data)
            .await
            .map_err(BrevoError::Transport)?;

        if !(200..=299).contains(&response.status) {
            let body = if response.body.trim().is_empty() {
                None
            } else {
                Some(response.body)
            };
            return Err(BrevoError::HttpStatus {
                status: response.status,
                body,
            });
        }

        // Brevo answers every endpoint with JSON; an empty 2xx body maps to
        // null rather than a parse failure.
        let data = if response.body.trim().is_empty() {
            Value::Null
        } else {
            serde_json::from_str(&response.body).map_err(|err| BrevoError::Parse(Box::new(err)))?
        };

        Ok(ResponseEnvelope {
            loggable: LoggableResponse {
                status: response.status,
                status_text: response.status_text.clone(),
                data,
            },
            original: Some(RawResponse {
                status: response.status,
                status_text: response.status_text,
                headers: response.headers,
                body: response.body,
            }),
        })
    }

    /// Send a transactional email through Brevo.
    ///
    /// The sender identity is the configured `from_email_address` /
    /// `from_email_name` pair, falling back to `test@example.com` / `Test`.
    pub async fn send_email(&self, request: SendEmail) -> Result<ResponseEnvelope, BrevoError> {
        let sender_email = self
            .from_email_address
            .as_ref()
            .map(EmailAddress::as_str)
            .unwrap_or(DEFAULT_FROM_EMAIL_ADDRESS);
        let sender_name = self
            .from_email_name
            .as_ref()
            .map(SenderName::as_str)
            .unwrap_or(DEFAULT_FROM_EMAIL_NAME);

        let body = encode_email_body(&request, sender_email, sender_name);
        self.send_request(EMAIL_PATH, body).await
    }

    /// Send a transactional SMS through Brevo.
    ///
    /// The sender name is the configured `from_sms_name`, falling back to
    /// `Test`.
    pub async fn send_sms(&self, request: SendSms) -> Result<ResponseEnvelope, BrevoError> {
        let sender = self
            .from_sms_name
            .as_ref()
            .map(SenderName::as_str)
            .unwrap_or(DEFAULT_FROM_SMS_NAME);

        let body = encode_sms_body(&request, sender);
        self.send_request(SMS_PATH, body).await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use crate::domain::{SendEmail, SendSms};

    use super::*;

    #[derive(Debug, Clone)]
    struct FakeTransport {
        state: Arc<Mutex<FakeTransportState>>,
    }

    #[derive(Debug)]
    struct FakeTransportState {
        calls: usize,
        last_url: Option<String>,
        last_api_key: Option<String>,
        last_body: Option<Value>,
        response_status: u16,
        response_status_text: String,
        response_headers: Vec<(String, String)>,
        response_body: String,
    }

    impl FakeTransport {
        fn new(response_status: u16, response_body: impl Into<String>) -> Self {
            let status_text = match response_status {
                200 => "OK",
                201 => "Created",
                400 => "Bad Request",
                401 => "Unauthorized",
                _ => "",
            };
            Self {
                state: Arc::new(Mutex::new(FakeTransportState {
                    calls: 0,
                    last_url: None,
                    last_api_key: None,
                    last_body: None,
                    response_status,
                    response_status_text: status_text.to_owned(),
                    response_headers: vec![("content-type".to_owned(), "application/json".to_owned())],
                    response_body: response_body.into(),
                })),
            }
        }

        fn calls(&self) -> usize {
            self.state.lock().unwrap().calls
        }

        fn last_request(&self) -> (Option<String>, Option<String>, Option<Value>) {
            let state = self.state.lock().unwrap();
            (
                state.last_url.clone(),
                state.last_api_key.clone(),
                state.last_body.clone(),
            )
        }
    }

    impl HttpTransport for FakeTransport {
        fn post_json<'a>(
            &'a self,
            url: &'a str,
            api_key: &'a str,
            body: &'a Value,
        ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>> {
            Box::pin(async move {
                let response = {
                    let mut state = self.state.lock().unwrap();
                    state.calls += 1;
                    state.last_url = Some(url.to_owned());
                    state.last_api_key = Some(api_key.to_owned());
                    state.last_body = Some(body.clone());
                    HttpResponse {
                        status: state.response_status,
                        status_text: state.response_status_text.clone(),
                        headers: state.response_headers.clone(),
                        body: state.response_body.clone(),
                    }
                };
                Ok(response)
            })
        }
    }

    fn make_client(transport: FakeTransport) -> BrevoClient {
        BrevoClient {
            api_key: Some(ApiKey::new("test_key").unwrap()),
            from_email_address: None,
            from_email_name: None,
            from_sms_name: None,
            mock: false,
            base_url: "https://example.invalid/v3".to_owned(),
            http: Arc::new(transport),
        }
    }

    fn email_request() -> SendEmail {
        SendEmail::from_parts("a@b.com", "S", "<p>H</p>").unwrap()
    }

    fn sms_request() -> SendSms {
        SendSms::from_parts("+10000000000", "hi").unwrap()
    }

    #[tokio::test]
    async fn mock_mode_short_circuits_without_a_network_call() {
        let transport = FakeTransport::new(200, "{}");
        let mut client = make_client(transport.clone());
        client.mock = true;
        client.api_key = None;

        let email = client.send_email(email_request()).await.unwrap();
        let sms = client.send_sms(sms_request()).await.unwrap();

        for envelope in [email, sms] {
            assert!(envelope.original.is_none());
            assert_eq!(envelope.loggable.status, 200);
            assert_eq!(envelope.loggable.status_text, "OK");
            assert_eq!(
                envelope.loggable.data,
                json!({ "message": "mocked Brevo response" })
            );
        }
        assert_eq!(transport.calls(), 0);
    }

    #[tokio::test]
    async fn mock_mode_wins_even_with_a_key_configured() {
        let transport = FakeTransport::new(200, "{}");
        let mut client = make_client(transport.clone());
        client.mock = true;

        let envelope = client.send_email(email_request()).await.unwrap();
        assert!(envelope.original.is_none());
        assert_eq!(transport.calls(), 0);
    }

    #[tokio::test]
    async fn missing_api_key_fails_before_any_network_call() {
        let transport = FakeTransport::new(200, "{}");
        let mut client = make_client(transport.clone());
        client.api_key = None;

        let err = client.send_email(email_request()).await.unwrap_err();
        assert!(matches!(err, BrevoError::MissingApiKey));

        let err = client.send_sms(sms_request()).await.unwrap_err();
        assert!(matches!(err, BrevoError::MissingApiKey));

        assert_eq!(transport.calls(), 0);
    }

    #[tokio::test]
    async fn send_email_posts_expected_body_with_default_sender() {
        let transport = FakeTransport::new(201, r#"{"messageId":"<msg-1>"}"#);
        let client = make_client(transport.clone());

        client.send_email(email_request()).await.unwrap();

        let (url, api_key, body) = transport.last_request();
        assert_eq!(url.as_deref(), Some("https://example.invalid/v3/smtp/email"));
        assert_eq!(api_key.as_deref(), Some("test_key"));
        assert_eq!(
            body.unwrap(),
            json!({
                "subject": "S",
                "htmlContent": "<p>H</p>",
                "sender": { "email": "test@example.com", "name": "Test" },
                "to": [ { "email": "a@b.com" } ],
            })
        );
    }

    #[tokio::test]
    async fn send_email_uses_configured_sender_identity() {
        let transport = FakeTransport::new(201, r#"{"messageId":"<msg-1>"}"#);
        let mut client = make_client(transport.clone());
        client.from_email_address = Some(EmailAddress::new("x@y.com").unwrap());
        client.from_email_name = Some(SenderName::new("X").unwrap());

        client.send_email(email_request()).await.unwrap();

        let (_, _, body) = transport.last_request();
        assert_eq!(
            body.unwrap().get("sender"),
            Some(&json!({ "email": "x@y.com", "name": "X" }))
        );
    }

    #[tokio::test]
    async fn send_sms_posts_expected_body_with_default_sender() {
        let transport = FakeTransport::new(201, r#"{"reference":"ref-1"}"#);
        let client = make_client(transport.clone());

        client.send_sms(sms_request()).await.unwrap();

        let (url, api_key, body) = transport.last_request();
        assert_eq!(
            url.as_deref(),
            Some("https://example.invalid/v3/transactionalSMS/sms")
        );
        assert_eq!(api_key.as_deref(), Some("test_key"));
        assert_eq!(
            body.unwrap(),
            json!({
                "type": "transactional",
                "unicodeEnabled": false,
                "sender": "Test",
                "recipient": "+10000000000",
                "content": "hi",
            })
        );
    }

    #[tokio::test]
    async fn send_sms_uses_configured_sender_name() {
        let transport = FakeTransport::new(201, r#"{"reference":"ref-1"}"#);
        let mut client = make_client(transport.clone());
        client.from_sms_name = Some(SenderName::new("Acme").unwrap());

        client.send_sms(sms_request()).await.unwrap();

        let (_, _, body) = transport.last_request();
        assert_eq!(body.unwrap().get("sender"), Some(&json!("Acme")));
    }

    #[tokio::test]
    async fn successful_call_pairs_raw_response_with_loggable_projection() {
        let transport = FakeTransport::new(201, r#"{"messageId":"<msg-1>"}"#);
        let client = make_client(transport);

        let envelope = client.send_email(email_request()).await.unwrap();

        assert_eq!(envelope.loggable.status, 201);
        assert_eq!(envelope.loggable.status_text, "Created");
        assert_eq!(envelope.loggable.data, json!({ "messageId": "<msg-1>" }));

        let original = envelope.original.expect("real call keeps the raw response");
        assert_eq!(original.status, 201);
        assert_eq!(original.body, r#"{"messageId":"<msg-1>"}"#);
        assert!(!original.headers.is_empty());
    }

    #[tokio::test]
    async fn empty_success_body_maps_to_null_data() {
        let transport = FakeTransport::new(200, "");
        let client = make_client(transport);

        let envelope = client.send_email(email_request()).await.unwrap();
        assert_eq!(envelope.loggable.data, Value::Null);
        assert!(envelope.original.is_some());
    }

    #[tokio::test]
    async fn non_success_http_status_maps_to_error() {
        let transport = FakeTransport::new(401, r#"{"code":"unauthorized"}"#);
        let client = make_client(transport);

        let err = client.send_email(email_request()).await.unwrap_err();
        assert!(matches!(
            err,
            BrevoError::HttpStatus {
                status: 401,
                body: Some(_)
            }
        ));
    }

    #[tokio::test]
    async fn blank_error_body_maps_to_none() {
        let transport = FakeTransport::new(400, "   ");
        let client = make_client(transport);

        let err = client.send_sms(sms_request()).await.unwrap_err();
        assert!(matches!(
            err,
            BrevoError::HttpStatus {
                status: 400,
                body: None
            }
        ));
    }

    #[tokio::test]
    async fn invalid_success_body_maps_to_parse_error() {
        let transport = FakeTransport::new(200, "{ not json }");
        let client = make_client(transport);

        let err = client.send_email(email_request()).await.unwrap_err();
        assert!(matches!(err, BrevoError::Parse(_)));
    }

    #[tokio::test]
    async fn send_request_is_usable_for_arbitrary_endpoints() {
        let transport = FakeTransport::new(200, r#"{"ok":true}"#);
        let client = make_client(transport.clone());

        let envelope = client
            .send_request("smtp/templates", json!({ "name": "welcome" }))
            .await
            .unwrap();
        assert_eq!(envelope.loggable.data, json!({ "ok": true }));

        let (url, _, body) = transport.last_request();
        assert_eq!(
            url.as_deref(),
            Some("https://example.invalid/v3/smtp/templates")
        );
        assert_eq!(body.unwrap(), json!({ "name": "welcome" }));
    }

    #[test]
    fn builder_applies_overrides_and_defaults() {
        let client = BrevoClient::builder()
            .api_key(ApiKey::new("key").unwrap())
            .base_url("https://example.invalid/v3")
            .mock(true)
            .build()
            .unwrap();
        assert_eq!(client.base_url, "https://example.invalid/v3");
        assert!(client.mock);

        let client = BrevoClient::builder().build().unwrap();
        assert_eq!(client.base_url, DEFAULT_BASE_URL);
        assert!(client.api_key.is_none());
        assert!(!client.mock);
    }
}
