//! Slash-command detection: identify /commands in inbound messages.

use crate::registry::CommandRegistry;
use crate::types::CommandInvocation;

/// Detect a /command at the start of a message.
///
/// Returns `None` for plain text and for commands the registry does not know,
/// in which case the message falls through to keyword routing. Telegram
/// appends `@botname` to commands sent in group chats; the suffix is
/// tolerated and stripped.
pub fn detect_command(text: &str, registry: &CommandRegistry) -> Option<CommandInvocation> {
    let rest = text.trim().strip_prefix('/')?;
    let mut parts = rest.split_whitespace();
    let first = parts.next()?;
    let name = first.split('@').next()?;
    let spec = registry.find(name)?;

    Some(CommandInvocation {
        name: spec.name.to_string(),
        args: parts.map(str::to_string).collect(),
    })
}
