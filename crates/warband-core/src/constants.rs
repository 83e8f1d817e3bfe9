//! Targeting constants and tuning parameters.
//!
//! Distances are in yards, matching the world model's coordinate scale.

use crate::types::AuraId;

// --- Engagement ranges ---

/// Maximum attack distance in the open world (no battleground).
pub const OPEN_WORLD_ATTACK_RANGE: f32 = 60.0;

/// Default maximum attack distance inside a battleground. Also the
/// fallback when the battleground association cannot be resolved.
pub const BATTLEGROUND_ATTACK_RANGE: f32 = 40.0;

/// Extended attack distance for siege-vehicle combat on Isle of Conquest.
pub const SIEGE_ATTACK_RANGE: f32 = 120.0;

/// Aggro distance for a bot with less health than the candidate.
/// Weak bots only pick fights at close range.
pub const WEAK_AGGRO_RANGE: f32 = 20.0;

// --- Scan gates ---

/// Normal unit visibility distance; threat-table candidates beyond this
/// are ignored.
pub const NORMAL_VISIBILITY_RANGE: f32 = 90.0;

/// Maximum vertical separation for a proximity target outside cannon mode.
pub const MAX_HEIGHT_DELTA: f32 = 30.0;

/// Horizontal radius within which party members are consulted for their
/// attackers.
pub const PARTY_ASSIST_RANGE: f32 = 30.0;

// --- Priority auras ---

/// Warsong Gulch flag carried by an Alliance player; Horde bots drop
/// everything to kill the carrier.
pub const WARSONG_FLAG: AuraId = AuraId(23333);

/// Warsong Gulch flag carried by a Horde player; the Alliance-side
/// priority target.
pub const SILVERWING_FLAG: AuraId = AuraId(23335);

/// Spirit of Redemption: a defeated healer lingering in an untargetable
/// angel form. Nominally alive, never a valid target.
pub const SPIRIT_OF_REDEMPTION: AuraId = AuraId(27827);
