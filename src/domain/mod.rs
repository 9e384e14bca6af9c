//! Domain layer: strong types with validation and invariants (no I/O).

mod request;
mod response;
mod validation;
mod value;

pub use request::{SendEmail, SendSms};
pub use response::{LoggableResponse, RawResponse, ResponseEnvelope};
pub use validation::ValidationError;
pub use value::{ApiKey, EmailAddress, HtmlBody, PhoneNumber, SenderName, SmsText, Subject};
