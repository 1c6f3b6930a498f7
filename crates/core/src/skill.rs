use serde::{Deserialize, Serialize};

use crate::constants::PROCESS_SKILL_TYPE;
use crate::json_utils::lenient_string;

/// A vendor skill as returned by the skills listing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    #[serde(default, deserialize_with = "lenient_string")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: String,
    #[serde(rename = "type", default, deserialize_with = "lenient_string")]
    pub skill_type: String,
}

impl Skill {
    /// Only process skills own transactions.
    #[must_use]
    pub fn is_process(&self) -> bool {
        self.skill_type == PROCESS_SKILL_TYPE
    }
}
