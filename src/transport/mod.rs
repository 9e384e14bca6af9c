//! Transport layer: wire-format details (endpoint paths and JSON bodies).

mod email;
mod sms;

pub use email::{EMAIL_PATH, encode_email_body};
pub use sms::{SMS_PATH, encode_sms_body};
