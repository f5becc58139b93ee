use serde::{Deserialize, Serialize};

use super::purchase::Purchase;
use super::settings::Settings;

/// Everything the app holds in memory for one session.
///
/// Purchases are kept in insertion order; nothing ever reorders them.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Session {
    pub purchases: Vec<Purchase>,

    pub settings: Settings,
}
