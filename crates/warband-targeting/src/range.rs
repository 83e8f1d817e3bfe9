//! Maximum engagement distance by battleground context.

use warband_core::constants::{
    BATTLEGROUND_ATTACK_RANGE, OPEN_WORLD_ATTACK_RANGE, SIEGE_ATTACK_RANGE,
};
use warband_core::enums::BattlegroundKind;
use warband_core::unit::Bot;
use warband_core::world::WorldView;

/// Maximum distance at which the bot will engage a target.
///
/// Open-world bots range widest. Inside a battleground the default is
/// narrower, with one exception: Isle of Conquest siege vehicles shoot
/// across the whole keep approach, so cannon mode there gets the extended
/// range. An association that no longer resolves falls back to the
/// in-instance default.
pub fn max_attack_distance<W>(bot: &Bot, world: &W) -> f32
where
    W: WorldView + ?Sized,
{
    let Some(handle) = bot.battleground else {
        return OPEN_WORLD_ATTACK_RANGE;
    };

    let Some(bg) = world.battleground(handle) else {
        return BATTLEGROUND_ATTACK_RANGE;
    };

    if bg.resolved_kind() == BattlegroundKind::IsleOfConquest && bot.in_cannon() {
        return SIEGE_ATTACK_RANGE;
    }

    BATTLEGROUND_ATTACK_RANGE
}
