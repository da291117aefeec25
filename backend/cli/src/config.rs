use carebridge_core::BridgeError;

pub const DEFAULT_API_BASE_URL: &str = "https://oneliac-api.onrender.com";

/// CareBridge runtime configuration, read once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Telegram bot token; required to serve, optional for API probes.
    pub bot_token: Option<String>,
    /// Base URL of the healthcare-verification API.
    pub api_base_url: String,
    /// Log level
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables with sensible defaults.
    pub fn from_env() -> Self {
        Self {
            bot_token: std::env::var("TELEGRAM_BOT_TOKEN")
                .ok()
                .filter(|t| !t.is_empty()),
            api_base_url: std::env::var("API_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_string()),
            log_level: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        }
    }

    /// The bot token, or a startup-fatal configuration error.
    pub fn require_token(&self) -> Result<String, BridgeError> {
        self.bot_token.clone().ok_or_else(|| {
            BridgeError::Config(
                "TELEGRAM_BOT_TOKEN is not set; get a token from @BotFather on Telegram"
                    .to_string(),
            )
        })
    }
}
