pub mod detection;
pub mod dispatch;
pub mod keywords;
pub mod registry;
pub mod render;
pub mod types;

pub use detection::detect_command;
pub use dispatch::Dispatcher;
pub use keywords::{route_text, TextRoute};
pub use registry::{builtin_commands, CommandRegistry};
pub use types::{
    Button, CallbackAction, CommandInvocation, CommandKind, CommandResponse, CommandSpec, Keyboard,
};
