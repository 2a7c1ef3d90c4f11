use std::io;

use smspartner::{
    ClientConfig, MessageText, RawPhoneNumber, ScheduledDate, SendOptions, SendSms,
    SmsPartnerClient,
};
use tracing_subscriber::EnvFilter;

fn required_env(name: &str) -> Result<String, io::Error> {
    std::env::var(name).map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{name} environment variable is required"),
        )
    })
}

fn parse_env<T: std::str::FromStr>(name: &str) -> Result<T, io::Error> {
    required_env(name)?.trim().parse().map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{name} must be a number"),
        )
    })
}

/// Schedule a message, then cancel it when `SMSPARTNER_CANCEL=1`.
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let phone = RawPhoneNumber::new(required_env("SMSPARTNER_PHONE")?)?;
    let schedule = ScheduledDate::new(
        parse_env("SMSPARTNER_YEAR")?,
        parse_env("SMSPARTNER_MONTH")?,
        parse_env("SMSPARTNER_DAY")?,
        parse_env("SMSPARTNER_HOUR")?,
        parse_env("SMSPARTNER_MINUTE")?,
    )?;

    let client = SmsPartnerClient::new(ClientConfig::from_env())?;
    let request = SendSms::to_one(
        phone,
        MessageText::new("Scheduled hello from the smspartner demo.")?,
        SendOptions {
            schedule: Some(schedule),
            ..Default::default()
        },
    );

    let response = client.send_sms(&request).await?;
    println!(
        "scheduled for {:?}, message_id: {:?}",
        response.scheduled_delivery_date, response.message_id
    );

    let cancel = std::env::var("SMSPARTNER_CANCEL").is_ok_and(|value| value == "1");
    if let (true, Some(message_id)) = (cancel, response.message_id) {
        let cancelled = client.cancel_sms(message_id).await?;
        println!("cancelled: {}, {:?}", cancelled.success, cancelled.message);
    }

    Ok(())
}
