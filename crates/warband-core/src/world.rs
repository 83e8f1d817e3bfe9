//! Collaborator traits for read-only world queries.
//!
//! The targeting engine owns no world state. Everything it inspects —
//! handle resolution, stealth detection, line of sight, battleground
//! classification, zone PvP policy — comes in through these traits, so
//! tests can substitute fakes and the host can wire up the real services.

use crate::types::{AreaId, BattlegroundHandle, UnitHandle, ZoneId};
use crate::unit::{Battleground, Unit};

/// Read-only queries against the world model.
///
/// Every method may legitimately report absence; callers skip and
/// continue, never abort.
pub trait WorldView {
    /// Resolve a handle to a live unit. `None` when the handle is stale or
    /// the unit has left the bot's visibility grid.
    fn resolve(&self, handle: UnitHandle) -> Option<&Unit>;

    /// Whether `observer` can see or detect `target`, accounting for
    /// stealth, invisibility, and detection ranges. Opaque to this crate.
    fn can_see_or_detect(&self, observer: &Unit, target: &Unit) -> bool;

    /// Terrain/object line of sight between two units.
    fn in_line_of_sight(&self, a: &Unit, b: &Unit) -> bool;

    /// Resolve a battleground association to its instance classification.
    fn battleground(&self, handle: BattlegroundHandle) -> Option<&Battleground>;
}

/// Zone-level PvP policy, injected as a capability rather than read from
/// ambient global config.
pub trait ZonePolicy {
    /// Whether PvP combat is prohibited at this zone/area.
    fn pvp_prohibited(&self, zone: ZoneId, area: AreaId) -> bool;
}
