//! Chat-platform adapters. Telegram is the only channel; the trait is the
//! seam a second platform would implement.

use async_trait::async_trait;

pub mod telegram;

pub use telegram::TelegramAdapter;

/// All channel adapters implement this trait.
#[async_trait]
pub trait ChannelAdapter: Send + Sync {
    /// Human-readable adapter name for logging.
    fn name(&self) -> &str;

    /// Run the adapter's polling loop until shutdown.
    async fn start(&self) -> anyhow::Result<()>;
}
