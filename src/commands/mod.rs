//! CLI command implementations.
//!
//! - **rank**: import (or sample) → weights → compute → report, in one pass
//! - **wizard**: interactive three-step session on stdin/stdout
//! - **template**: write the blank CSV import template
//! - **init**: write a default `.wsmrank.toml`

pub mod init;
pub mod rank;
pub mod template;
pub mod wizard;

pub use init::init_config;
pub use rank::{handle_rank, rank_session, DataSource, RankConfig};
pub use template::export_template;
pub use wizard::{handle_wizard, run_wizard, WizardConfig};
