use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Configuration from an optional theme file (`--theme <path>`).
///
/// The only configurable surface is appearance; board behavior has no knobs.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UiConfig {
    /// Hex color overrides keyed by theme slot name, e.g.
    /// `background = "#0C001B"` under `[colors]`
    #[serde(default)]
    pub colors: HashMap<String, String>,
}
