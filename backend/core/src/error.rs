use thiserror::Error;

/// Top-level error type for the CareBridge bot.
///
/// Every variant is contained within the command invocation that produced it;
/// the user gets exactly one reply describing the failure, never a stack trace.
#[derive(Debug, Error)]
pub enum BridgeError {
    #[error("connection error: {0}")]
    Transport(String),

    #[error("API error: {0}")]
    Api(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl BridgeError {
    /// The message string to surface to the user, without the variant prefix.
    pub fn detail(&self) -> String {
        match self {
            BridgeError::Transport(msg) | BridgeError::Api(msg) | BridgeError::Config(msg) => {
                msg.clone()
            }
            BridgeError::Other(err) => err.to_string(),
        }
    }
}
