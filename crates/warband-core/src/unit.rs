//! Unit and bot snapshots consumed by the targeting engine.
//!
//! These are read-only views over state owned by the world model. The
//! engine borrows them for a single selection call and must not retain
//! references across ticks — the underlying units may despawn at any time.

use bitflags::bitflags;
use glam::Vec3;

use crate::enums::{BattlegroundKind, EntityKind, Faction};
use crate::types::{AreaId, AuraId, BattlegroundHandle, TeamId, UnitHandle, ZoneId};

bitflags! {
    /// Per-unit state flag bits relevant to target eligibility.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct UnitFlags: u32 {
        /// Unit cannot be attacked (cutscene actors, flight passengers).
        const NON_ATTACKABLE = 1 << 0;
        /// Second, independent non-attackable bit (spell-applied).
        const NON_ATTACKABLE_2 = 1 << 1;
        /// Unit cannot be targeted through normal selection.
        const NOT_SELECTABLE = 1 << 2;
    }
}

/// Snapshot of a world unit as seen during one selection call.
#[derive(Debug, Clone)]
pub struct Unit {
    pub handle: UnitHandle,
    pub kind: EntityKind,
    pub faction: Faction,
    /// Arena match team; `None` outside an arena.
    pub arena_team: Option<TeamId>,
    /// PvP combat flag is up.
    pub pvp_flagged: bool,
    pub zone: ZoneId,
    pub area: AreaId,
    pub flags: UnitFlags,
    pub health: u32,
    pub position: Vec3,
    /// Active status effects, by spell id.
    pub auras: Vec<AuraId>,
    /// The unit currently attacking this one, if any. Consulted when this
    /// unit is a party member needing assistance.
    pub attacker: Option<UnitHandle>,
}

impl Unit {
    pub fn has_aura(&self, aura: AuraId) -> bool {
        self.auras.contains(&aura)
    }

    pub fn in_arena(&self) -> bool {
        self.arena_team.is_some()
    }

    /// 3D distance to another unit.
    pub fn distance_to(&self, other: &Unit) -> f32 {
        self.position.distance(other.position)
    }

    /// Horizontal distance, ignoring height difference.
    pub fn horizontal_distance_to(&self, other: &Unit) -> f32 {
        self.position.truncate().distance(other.position.truncate())
    }

    /// Height difference magnitude.
    pub fn height_delta_to(&self, other: &Unit) -> f32 {
        (self.position.z - other.position.z).abs()
    }
}

/// Occupied vehicle or siege-weapon seat.
#[derive(Debug, Clone, Copy)]
pub struct VehicleSeat {
    /// The seat's weapon fires without a selected target (siege cannon).
    pub fires_without_target: bool,
}

/// Directed threat relation: `owner` holds threat against the bot.
///
/// Insertion order carries no meaning; the threat scan re-sorts survivors
/// by distance before picking.
#[derive(Debug, Clone, Copy)]
pub struct ThreatRelation {
    pub owner: UnitHandle,
    pub threat: f32,
}

/// A battleground instance's classification.
#[derive(Debug, Clone, Copy)]
pub struct Battleground {
    pub kind: BattlegroundKind,
    /// Underlying concrete kind when `kind` is [`BattlegroundKind::Random`].
    pub resolved: Option<BattlegroundKind>,
}

impl Battleground {
    /// The concrete kind, mapping `Random` through to its assignment.
    /// An unassigned random queue stays `Random` and classifies like any
    /// non-siege battleground.
    pub fn resolved_kind(&self) -> BattlegroundKind {
        match self.kind {
            BattlegroundKind::Random => self.resolved.unwrap_or(BattlegroundKind::Random),
            kind => kind,
        }
    }
}

/// The acting agent: its own unit state plus the combat bookkeeping the
/// selection stages read.
#[derive(Debug, Clone)]
pub struct Bot {
    pub unit: Unit,
    pub vehicle: Option<VehicleSeat>,
    /// Battleground association, if queued into one.
    pub battleground: Option<BattlegroundHandle>,
    /// Current combat victim. Always excluded from fresh selection.
    pub victim: Option<UnitHandle>,
    /// Units currently holding threat against this bot.
    pub threat_list: Vec<ThreatRelation>,
    /// Party member handles, including the bot's own.
    pub party: Vec<UnitHandle>,
}

impl Bot {
    /// Seated in a vehicle that fires without target selection.
    pub fn in_cannon(&self) -> bool {
        self.vehicle.is_some_and(|seat| seat.fires_without_target)
    }

    pub fn is_victim(&self, handle: UnitHandle) -> bool {
        self.victim == Some(handle)
    }
}
