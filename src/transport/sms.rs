use serde::Serialize;
use serde_json::Value;

use crate::domain::SendSms;

/// Endpoint path suffix for transactional SMS.
pub const SMS_PATH: &str = "transactionalSMS/sms";

#[derive(Debug, Serialize)]
struct SmsWireBody<'a> {
    #[serde(rename = "type")]
    kind: &'static str,
    #[serde(rename = "unicodeEnabled")]
    unicode_enabled: bool,
    sender: &'a str,
    recipient: &'a str,
    content: &'a str,
}

/// Encode the `transactionalSMS/sms` JSON body.
///
/// `sender` is the already-resolved SMS sender name (configured value or the
/// client default). Messages are always sent as `transactional` with unicode
/// disabled, matching the provider defaults this client targets.
pub fn encode_sms_body(request: &SendSms, sender: &str) -> Value {
    let body = SmsWireBody {
        kind: "transactional",
        unicode_enabled: false,
        sender,
        recipient: request.to().as_str(),
        content: request.text().as_str(),
    };
    // Same reasoning as the email body: this serialization cannot fail.
    serde_json::to_value(body).unwrap_or(Value::Null)
}
