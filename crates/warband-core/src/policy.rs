//! Concrete zone PvP-policy data.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::types::{AreaId, ZoneId};
use crate::world::ZonePolicy;

/// Deserializable table of zones and areas where PvP combat is off.
///
/// The host loads this from its bot configuration; an empty table (the
/// default) prohibits nothing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ZonePolicyTable {
    /// Whole zones where PvP is prohibited (sanctuaries, starter zones).
    #[serde(default)]
    pub zones: HashSet<ZoneId>,
    /// Individual sub-areas where PvP is prohibited.
    #[serde(default)]
    pub areas: HashSet<AreaId>,
}

impl ZonePolicy for ZonePolicyTable {
    fn pvp_prohibited(&self, zone: ZoneId, area: AreaId) -> bool {
        self.zones.contains(&zone) || self.areas.contains(&area)
    }
}
