use serde::Serialize;
use serde_json::Value;

use crate::domain::SendEmail;

/// Endpoint path suffix for transactional email.
pub const EMAIL_PATH: &str = "smtp/email";

#[derive(Debug, Serialize)]
struct EmailWireBody<'a> {
    subject: &'a str,
    #[serde(rename = "htmlContent")]
    html_content: &'a str,
    sender: WireSender<'a>,
    to: [WireRecipient<'a>; 1],
}

#[derive(Debug, Serialize)]
struct WireSender<'a> {
    email: &'a str,
    name: &'a str,
}

#[derive(Debug, Serialize)]
struct WireRecipient<'a> {
    email: &'a str,
}

/// Encode the `smtp/email` JSON body.
///
/// `sender_email` and `sender_name` are the already-resolved sender identity
/// (configured value or the client default).
pub fn encode_email_body(request: &SendEmail, sender_email: &str, sender_name: &str) -> Value {
    let body = EmailWireBody {
        subject: request.subject().as_str(),
        html_content: request.html().as_str(),
        sender: WireSender {
            email: sender_email,
            name: sender_name,
        },
        to: [WireRecipient {
            email: request.to().as_str(),
        }],
    };
    // Serializing these borrowed structs cannot fail: no maps with non-string
    // keys and no fallible Serialize impls.
    serde_json::to_value(body).unwrap_or(Value::Null)
}
