use std::io;

use smspartner::{
    ClientConfig, MessageText, RawPhoneNumber, SendOptions, SendSms, SmsPartnerClient,
};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let phone_raw = std::env::var("SMSPARTNER_PHONE").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "SMSPARTNER_PHONE environment variable is required",
        )
    })?;
    let message = std::env::var("SMSPARTNER_MESSAGE")
        .unwrap_or_else(|_| "Hello from the smspartner demo.".to_owned());
    let sandbox = std::env::var("SMSPARTNER_SANDBOX").is_ok_and(|value| value == "1");

    let client = SmsPartnerClient::new(ClientConfig::from_env())?;
    let request = SendSms::new(
        vec![RawPhoneNumber::new(phone_raw)?],
        MessageText::new(message)?,
        SendOptions {
            sandbox,
            ..Default::default()
        },
    )?;

    let response = client.send_sms(&request).await?;
    println!(
        "success: {}, message_id: {:?}, cost: {:?} {:?}",
        response.success, response.message_id, response.cost, response.currency
    );

    Ok(())
}
