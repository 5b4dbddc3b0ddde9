use crate::config::Config;
use crate::errors::AppError;
use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;

/// Канал доставки заявки. Єдина реалізація в продакшені — Telegram,
/// trait потрібен, щоб handler і контролер тестувались без мережі.
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Секрети на місці? Перевіряється на кожен запит, не на старті.
    fn is_configured(&self) -> bool;

    /// Надсилає один HTML-текст. Рівно одна спроба, без ретраїв.
    async fn deliver(&self, text: &str) -> Result<(), AppError>;
}

#[derive(Debug, Serialize)]
struct SendMessageRequest<'a> {
    chat_id: &'a str,
    text: &'a str,
    parse_mode: &'a str,
}

#[derive(Clone)]
pub struct TelegramService {
    client: Client,
    base_url: String,
    token: Option<String>,
    chat_id: Option<String>,
}

impl TelegramService {
    pub fn new(base_url: String, token: Option<String>, chat_id: Option<String>) -> Self {
        Self {
            client: Client::new(),
            base_url,
            token: token.filter(|t| !t.trim().is_empty()),
            chat_id: chat_id.filter(|c| !c.trim().is_empty()),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.effective_telegram_api_base().to_string(),
            config.telegram_bot_token.clone(),
            config.telegram_chat_id.clone(),
        )
    }
}

#[async_trait]
impl Notifier for TelegramService {
    fn is_configured(&self) -> bool {
        self.token.is_some() && self.chat_id.is_some()
    }

    async fn deliver(&self, text: &str) -> Result<(), AppError> {
        let (token, chat_id) = match (&self.token, &self.chat_id) {
            (Some(token), Some(chat_id)) => (token, chat_id),
            _ => return Err(AppError::Misconfigured),
        };

        // Токен живе в URL (схема Bot API), тому URL не логуємо
        let url = format!("{}/bot{}/sendMessage", self.base_url, token);
        let request = SendMessageRequest {
            chat_id,
            text,
            parse_mode: "HTML",
        };

        let response = self
            .client
            .post(&url)
            .json(&request)
            .timeout(std::time::Duration::from_secs(30))
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error reading response body".to_string());
            log::error!("Telegram sendMessage failed: {} - {}", status, error_text);
            return Err(AppError::Upstream {
                details: error_text,
            });
        }

        Ok(())
    }
}
