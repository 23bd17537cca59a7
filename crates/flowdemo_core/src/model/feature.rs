//! Feature flag record.
//!
//! Features are seeded at startup; there is no runtime create path. The only
//! mutation is flipping `is_enabled`.

use super::{EpochMillis, Flagged, Record, RecordId};
use serde::{Deserialize, Serialize};

/// A demo feature flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Feature {
    pub id: RecordId,
    pub name: String,
    pub description: String,
    pub is_enabled: bool,
    pub created_at: EpochMillis,
}

impl Record for Feature {
    fn id(&self) -> RecordId {
        self.id
    }

    fn created_at(&self) -> EpochMillis {
        self.created_at
    }
}

impl Flagged for Feature {
    fn toggle_flag(&mut self) {
        self.is_enabled = !self.is_enabled;
    }
}
