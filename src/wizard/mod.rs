//! The three-step decision wizard: data entry, weight entry, results.

pub mod command;
pub mod session;
pub mod state;

pub use command::{parse_command, CommandError, WizardCommand, HELP_TEXT};
pub use session::SessionState;
pub use state::{
    available_actions, can_compute, can_continue, is_valid_transition, next_step, WizardAction,
    WizardStep, TRANSITIONS,
};
