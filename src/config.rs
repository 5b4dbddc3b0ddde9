use serde::Deserialize;
use url::Url;

pub const DEFAULT_TELEGRAM_API_BASE: &str = "https://api.telegram.org";

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Зовнішній origin розгорнутого relay; admin-cli використовує його
    /// для наскрізної тестової відправки (--via-relay)
    pub public_url: Option<String>,
    pub telegram_bot_token: Option<String>,
    pub telegram_chat_id: Option<String>,
    pub telegram_api_base: Option<String>,
    pub max_body_bytes: Option<usize>,
}

impl Config {
    pub fn from_env() -> Result<Self, config::ConfigError> {
        dotenvy::dotenv().ok();

        let cfg = config::Config::builder()
            .add_source(config::Environment::default())
            .build()?;

        let config: Config = cfg.try_deserialize()?;

        config.validate()?;

        Ok(config)
    }

    /// Валідує конфігурацію на наявність потенційних проблем
    fn validate(&self) -> Result<(), config::ConfigError> {
        if !self
            .host
            .chars()
            .all(|c| c.is_alphanumeric() || ".:-_".contains(c))
        {
            return Err(config::ConfigError::Message(
                "Invalid host format".to_string(),
            ));
        }

        if self.port < 1024 {
            return Err(config::ConfigError::Message(
                "Port must be 1024 or higher for security reasons".to_string(),
            ));
        }

        if let Some(base) = &self.telegram_api_base {
            if Url::parse(base).is_err() {
                return Err(config::ConfigError::Message(format!(
                    "Invalid telegram_api_base URL: {}",
                    base
                )));
            }
        }

        if let Some(public_url) = &self.public_url {
            if Url::parse(public_url).is_err() {
                return Err(config::ConfigError::Message(format!(
                    "Invalid public_url: {}",
                    public_url
                )));
            }
        }

        // Ліміт тіла запиту (якщо вказано): 1KB..10MB, форма завжди маленька
        if let Some(limit) = self.max_body_bytes {
            let min = 1024;
            let max = 10 * 1024 * 1024;
            if limit < min || limit > max {
                return Err(config::ConfigError::Message(format!(
                    "max_body_bytes must be between {} and {} bytes",
                    min, max
                )));
            }
        }

        Ok(())
    }
}

impl Config {
    pub fn effective_max_body_bytes(&self) -> usize {
        self.max_body_bytes.unwrap_or(64 * 1024)
    }

    pub fn effective_telegram_api_base(&self) -> &str {
        self.telegram_api_base
            .as_deref()
            .unwrap_or(DEFAULT_TELEGRAM_API_BASE)
    }

    /// Токен і chat id можуть бути відсутні на старті: тоді кожен запит
    /// завершується помилкою "Server misconfigured", а не панікою.
    pub fn telegram_configured(&self) -> bool {
        matches!(&self.telegram_bot_token, Some(t) if !t.trim().is_empty())
            && matches!(&self.telegram_chat_id, Some(c) if !c.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_config() -> Config {
        Config {
            host: "127.0.0.1".to_string(),
            port: 8080,
            public_url: None,
            telegram_bot_token: None,
            telegram_chat_id: None,
            telegram_api_base: None,
            max_body_bytes: None,
        }
    }

    #[test]
    fn validate_rejects_low_port() {
        let mut config = base_config();
        config.port = 80;
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_bad_api_base() {
        let mut config = base_config();
        config.telegram_api_base = Some("not a url".to_string());
        assert!(config.validate().is_err());
    }

    #[test]
    fn telegram_configured_requires_both_secrets() {
        let mut config = base_config();
        assert!(!config.telegram_configured());

        config.telegram_bot_token = Some("123:abc".to_string());
        assert!(!config.telegram_configured());

        config.telegram_chat_id = Some("-100200300".to_string());
        assert!(config.telegram_configured());

        config.telegram_chat_id = Some("   ".to_string());
        assert!(!config.telegram_configured());
    }

    #[test]
    fn effective_api_base_falls_back_to_default() {
        let config = base_config();
        assert_eq!(
            config.effective_telegram_api_base(),
            DEFAULT_TELEGRAM_API_BASE
        );
    }
}
