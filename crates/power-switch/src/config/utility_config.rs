use crate::config::default_program;

use serde::{Deserialize, Serialize};

/// Power utility configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UtilityConfig {
    /// Program used to list and activate plans.
    #[serde(default = "default_program")]
    pub program: String,
}

impl Default for UtilityConfig {
    fn default() -> Self {
        Self {
            program: default_program(),
        }
    }
}
