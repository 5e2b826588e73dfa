//! Configuration loaded from `.wsmrank.toml`.
//!
//! ```toml
//! [weights]
//! distance = 30
//! cost = 25
//! facility = 20
//! rating = 25
//!
//! [output]
//! default_format = "terminal"
//! top = 10
//! ```

mod loader;

pub use loader::{
    directory_ancestors, load_config, load_config_from, parse_and_validate_config,
    user_config_path, CONFIG_FILE_NAME,
};

use crate::io::OutputFormat;
use crate::scoring::WeightPercentages;
use serde::{Deserialize, Serialize};

/// Root configuration structure
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct WsmConfig {
    /// Default criteria weights offered in the weights step (percent)
    #[serde(default)]
    pub weights: Option<WeightPercentages>,

    #[serde(default)]
    pub output: Option<OutputConfig>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub default_format: Option<OutputFormat>,

    /// Show only the first N ranked destinations
    #[serde(default)]
    pub top: Option<usize>,
}

impl WsmConfig {
    pub fn default_weights(&self) -> WeightPercentages {
        self.weights.unwrap_or_default()
    }

    pub fn default_format(&self) -> OutputFormat {
        self.output
            .as_ref()
            .and_then(|o| o.default_format)
            .unwrap_or_default()
    }

    pub fn top(&self) -> Option<usize> {
        self.output.as_ref().and_then(|o| o.top)
    }
}

/// Contents written by `wsmrank init`.
pub const DEFAULT_CONFIG_TOML: &str = r#"# wsmrank configuration

# Default criteria weights in percent; they must total 100.
[weights]
distance = 30
cost = 25
facility = 20
rating = 25

[output]
# terminal, markdown or json
default_format = "terminal"
# top = 10
"#;
