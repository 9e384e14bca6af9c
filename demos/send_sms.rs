use std::io;

use brevo::{ApiKey, BrevoClient, SendSms};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let api_key = std::env::var("BREVO_API_KEY").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "BREVO_API_KEY environment variable is required",
        )
    })?;
    let to = std::env::var("BREVO_PHONE").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "BREVO_PHONE environment variable is required",
        )
    })?;
    let text = std::env::var("BREVO_MESSAGE")
        .unwrap_or_else(|_| "Hello from the brevo demo.".to_owned());

    let client = BrevoClient::new(ApiKey::new(api_key)?);
    let request = SendSms::from_parts(to, text)?;

    let response = client.send_sms(request).await?;
    println!(
        "status: {} {}, data: {}",
        response.loggable.status, response.loggable.status_text, response.loggable.data
    );

    Ok(())
}
