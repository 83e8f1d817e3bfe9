//! The attackable-enemy-player predicate.

use warband_core::constants::SPIRIT_OF_REDEMPTION;
use warband_core::enums::EntityKind;
use warband_core::unit::{Bot, Unit, UnitFlags};
use warband_core::world::{WorldView, ZonePolicy};

/// Whether `candidate` is a legally attackable enemy player for `bot`
/// right now.
///
/// This is the single source of truth for "can this unit be attacked";
/// the proximity scan applies it to every resolved candidate. Pure and
/// deterministic given its inputs.
pub fn is_eligible_enemy<W, P>(bot: &Bot, candidate: &Unit, world: &W, policy: &P) -> bool
where
    W: WorldView + ?Sized,
    P: ZonePolicy + ?Sized,
{
    if candidate.kind != EntityKind::Player {
        return false;
    }

    if !is_hostile_faction(bot, candidate) {
        return false;
    }

    if !candidate.pvp_flagged {
        return false;
    }

    if policy.pvp_prohibited(candidate.zone, candidate.area) {
        return false;
    }

    // Either non-attackable bit disqualifies on its own.
    if candidate
        .flags
        .intersects(UnitFlags::NON_ATTACKABLE | UnitFlags::NON_ATTACKABLE_2)
    {
        return false;
    }

    // Siege cannons fire without target selection, so the selectable flag
    // only matters outside cannon mode.
    if !bot.in_cannon() && candidate.flags.contains(UnitFlags::NOT_SELECTABLE) {
        return false;
    }

    // Mutual-detection gate: the candidate's view of the bot, covering
    // stealth, invisibility, and detection range.
    if !world.can_see_or_detect(candidate, &bot.unit) {
        return false;
    }

    // A defeated healer lingering in Spirit of Redemption is nominally
    // alive but never a valid target.
    if candidate.has_aura(SPIRIT_OF_REDEMPTION) {
        return false;
    }

    true
}

/// Opposing factions, or an arena match placing them on different teams
/// (arenas allow same-faction combat).
fn is_hostile_faction(bot: &Bot, candidate: &Unit) -> bool {
    if bot.unit.faction != candidate.faction {
        return true;
    }

    matches!(
        (bot.unit.arena_team, candidate.arena_team),
        (Some(ours), Some(theirs)) if ours != theirs
    )
}
