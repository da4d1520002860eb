//! List view configuration.

use serde::{Deserialize, Serialize};
use tick_core::enums::ViewOrder;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ViewConfig {
    /// Display order; task numbers shown to the user follow it.
    #[serde(default)]
    pub order: ViewOrder,
}
