//! Enumeration types used throughout the targeting engine.

use serde::{Deserialize, Serialize};

/// What kind of world entity a unit is.
///
/// The engine-side "is this actually a player" test is a tagged-variant
/// query rather than a runtime downcast; only [`EntityKind::Player`] units
/// are ever valid PvP targets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    Player,
    #[default]
    Creature,
    Pet,
    GameObject,
}

/// World faction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Faction {
    Alliance,
    Horde,
}

/// Battleground classification.
///
/// [`BattlegroundKind::Random`] is a queue-side placeholder that resolves
/// to one of the concrete kinds once the instance is assigned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BattlegroundKind {
    AlteracValley,
    WarsongGulch,
    ArathiBasin,
    EyeOfTheStorm,
    StrandOfTheAncients,
    IsleOfConquest,
    Random,
}
