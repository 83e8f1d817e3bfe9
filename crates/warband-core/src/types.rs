//! Identifier newtypes for world objects and lookup keys.

use serde::{Deserialize, Serialize};

/// Opaque handle to a world unit. Resolution through
/// [`crate::world::WorldView::resolve`] may fail — handles go stale when
/// units despawn or leave the visibility grid between ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UnitHandle(pub u64);

/// Arena match team. Units outside an arena carry no team id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TeamId(pub u32);

/// Zone identifier (outdoor zone or instance map section).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ZoneId(pub u32);

/// Sub-area identifier within a zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AreaId(pub u32);

/// Status-effect (aura) spell id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AuraId(pub u32);

/// Handle for a bot's battleground association. Resolved through
/// [`crate::world::WorldView::battleground`]; resolution may fail while
/// the instance is being torn down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BattlegroundHandle(pub u32);
