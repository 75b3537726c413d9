use anyhow::{anyhow, Result};
use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

use crate::config::MessagingConfig;

/// Outcome of one successful WhatsApp delivery.
#[derive(Debug, Clone)]
pub struct DeliveryReceipt {
    pub sid: String,
    pub sent_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
struct TwilioMessageResponse {
    sid: String,
}

const TWILIO_API_BASE: &str = "https://api.twilio.com/2010-04-01";

/// Delivers message bodies over the Twilio WhatsApp API.
pub struct Messenger {
    client: Client,
    config: MessagingConfig,
}

impl Messenger {
    pub fn new(config: MessagingConfig) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        Self { client, config }
    }

    fn messages_url(&self) -> String {
        format!(
            "{}/Accounts/{}/Messages.json",
            TWILIO_API_BASE, self.config.account_sid
        )
    }

    /// Send one WhatsApp message. No retries; the caller decides whether a
    /// failed delivery matters.
    pub async fn send_whatsapp(&self, body: &str) -> Result<DeliveryReceipt> {
        let params = [
            ("Body", body.to_string()),
            ("From", whatsapp_address(&self.config.from_number)),
            ("To", whatsapp_address(&self.config.to_number)),
        ];

        let response = self
            .client
            .post(self.messages_url())
            .basic_auth(&self.config.account_sid, Some(&self.config.auth_token))
            .form(&params)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(anyhow!("Twilio API error ({}): {}", status, error_text));
        }

        let message: TwilioMessageResponse = response.json().await?;

        Ok(DeliveryReceipt {
            sid: message.sid,
            sent_at: Utc::now(),
        })
    }
}

fn whatsapp_address(number: &str) -> String {
    format!("whatsapp:{}", number)
}
