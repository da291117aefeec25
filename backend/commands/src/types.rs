//! Command dispatch types.

// ---------------------------------------------------------------------------
// Dispatch table entries
// ---------------------------------------------------------------------------

/// What a command does once its arguments check out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    /// Welcome menu with the inline keyboard. No network call.
    Menu,
    /// Help text. No network call.
    Help,
    /// GET /health, classify, render.
    Health,
    /// GET /health + GET /status, render the dashboard.
    Status,
    /// POST /verify-eligibility with a patient reference.
    Eligibility,
    /// POST /validate-prescription with a patient reference.
    Prescription,
}

/// One dispatch-table entry. The table is built once at startup and never
/// mutated afterwards.
#[derive(Debug, Clone)]
pub struct CommandSpec {
    pub name: &'static str,
    pub description: &'static str,
    /// Required positional arguments; fewer short-circuits to a usage reply
    /// before any request is built.
    pub min_args: usize,
    pub kind: CommandKind,
}

/// A detected and parsed command invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandInvocation {
    pub name: String,
    pub args: Vec<String>,
}

// ---------------------------------------------------------------------------
// Callback actions
// ---------------------------------------------------------------------------

/// Inline-button actions attached to the welcome menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallbackAction {
    Eligibility,
    Prescription,
    Status,
    Help,
}

impl CallbackAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            CallbackAction::Eligibility => "eligibility",
            CallbackAction::Prescription => "prescription",
            CallbackAction::Status => "status",
            CallbackAction::Help => "help",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "eligibility" => Some(CallbackAction::Eligibility),
            "prescription" => Some(CallbackAction::Prescription),
            "status" => Some(CallbackAction::Status),
            "help" => Some(CallbackAction::Help),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Responses
// ---------------------------------------------------------------------------

/// Channel-agnostic inline keyboard: rows of buttons. The channel adapter
/// translates this into its platform's markup.
pub type Keyboard = Vec<Vec<Button>>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Button {
    Callback { label: String, action: CallbackAction },
    Url { label: String, url: String },
}

impl Button {
    pub fn callback(label: impl Into<String>, action: CallbackAction) -> Self {
        Button::Callback {
            label: label.into(),
            action,
        }
    }

    pub fn url(label: impl Into<String>, url: impl Into<String>) -> Self {
        Button::Url {
            label: label.into(),
            url: url.into(),
        }
    }
}

/// The reply produced for one inbound message or button press. Exactly one
/// per input, success or failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResponse {
    pub text: String,
    pub keyboard: Option<Keyboard>,
}

impl CommandResponse {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            keyboard: None,
        }
    }

    pub fn with_keyboard(mut self, keyboard: Keyboard) -> Self {
        self.keyboard = Some(keyboard);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn callback_action_round_trips() {
        for action in [
            CallbackAction::Eligibility,
            CallbackAction::Prescription,
            CallbackAction::Status,
            CallbackAction::Help,
        ] {
            assert_eq!(CallbackAction::parse(action.as_str()), Some(action));
        }
        assert_eq!(CallbackAction::parse("unknown"), None);
    }
}
