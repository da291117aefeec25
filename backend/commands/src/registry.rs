//! The command dispatch table.

use crate::types::{CommandKind, CommandSpec};

/// Build the full command table. Defined once at process start, immutable
/// thereafter.
pub fn builtin_commands() -> Vec<CommandSpec> {
    vec![
        CommandSpec {
            name: "start",
            description: "Show the main menu.",
            min_args: 0,
            kind: CommandKind::Menu,
        },
        CommandSpec {
            name: "help",
            description: "Show all commands.",
            min_args: 0,
            kind: CommandKind::Help,
        },
        CommandSpec {
            name: "health",
            description: "Check API status.",
            min_args: 0,
            kind: CommandKind::Health,
        },
        CommandSpec {
            name: "status",
            description: "Show the system status dashboard.",
            min_args: 0,
            kind: CommandKind::Status,
        },
        CommandSpec {
            name: "eligibility",
            description: "Check insurance coverage for a procedure.",
            min_args: 2,
            kind: CommandKind::Eligibility,
        },
        CommandSpec {
            name: "prescription",
            description: "Validate a drug against a patient record.",
            min_args: 2,
            kind: CommandKind::Prescription,
        },
    ]
}

/// Lookup wrapper over the command table.
#[derive(Debug, Clone)]
pub struct CommandRegistry {
    commands: Vec<CommandSpec>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self {
            commands: builtin_commands(),
        }
    }

    pub fn find(&self, name: &str) -> Option<&CommandSpec> {
        self.commands.iter().find(|c| c.name == name)
    }

    pub fn all(&self) -> &[CommandSpec] {
        &self.commands
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verification_commands_require_two_args() {
        let registry = CommandRegistry::new();
        assert_eq!(registry.find("eligibility").unwrap().min_args, 2);
        assert_eq!(registry.find("prescription").unwrap().min_args, 2);
    }

    #[test]
    fn static_commands_require_none() {
        let registry = CommandRegistry::new();
        for name in ["start", "help", "health", "status"] {
            assert_eq!(registry.find(name).unwrap().min_args, 0, "{name}");
        }
    }

    #[test]
    fn unknown_command_is_absent() {
        assert!(CommandRegistry::new().find("bogus").is_none());
    }
}
