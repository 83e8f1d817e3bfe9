//! The three selection stages and their priority composition.
//!
//! Stage order is fixed: units already fighting the bot, then nearby
//! enemies from the spatial index, then whoever is beating on the party.
//! Each stage returns `Some` to stop the chain; absence at every level
//! (stale handle, empty list, no attacker) skips and continues.

use log::{debug, trace};

use warband_core::constants::{
    MAX_HEIGHT_DELTA, NORMAL_VISIBILITY_RANGE, PARTY_ASSIST_RANGE, SILVERWING_FLAG, WARSONG_FLAG,
    WEAK_AGGRO_RANGE,
};
use warband_core::enums::{EntityKind, Faction};
use warband_core::types::{AuraId, UnitHandle};
use warband_core::unit::{Bot, Unit};
use warband_core::world::{WorldView, ZonePolicy};

use crate::eligibility::is_eligible_enemy;
use crate::range::max_attack_distance;

/// Select the best enemy player to engage, or `None` if nobody qualifies.
///
/// Runs the three scans in priority order with first-success semantics;
/// later stages are only consulted when earlier ones come up empty. The
/// returned reference is only valid for the current decision tick.
pub fn select_target<'w, W, P>(
    bot: &Bot,
    nearby: &[UnitHandle],
    world: &'w W,
    policy: &P,
) -> Option<&'w Unit>
where
    W: WorldView + ?Sized,
    P: ZonePolicy + ?Sized,
{
    let target = scan_threat_table(bot, world)
        .or_else(|| scan_nearby_enemies(bot, nearby, world, policy))
        .or_else(|| scan_party_attackers(bot, world));

    if target.is_none() {
        trace!("bot {:?}: no eligible enemy player", bot.unit.handle);
    }

    target
}

/// The enemy flag carrier this faction drops everything for.
fn priority_aura(faction: Faction) -> AuraId {
    match faction {
        Faction::Horde => WARSONG_FLAG,
        Faction::Alliance => SILVERWING_FLAG,
    }
}

/// Stage 1: units the bot is already in combat with.
///
/// Walks the threat table and returns the nearest visible enemy player,
/// except that a flag carrier seen anywhere during the walk wins
/// immediately, whatever its distance.
pub fn scan_threat_table<'w, W>(bot: &Bot, world: &'w W) -> Option<&'w Unit>
where
    W: WorldView + ?Sized,
{
    let flag = priority_aura(bot.unit.faction);
    let mut candidates: Vec<&'w Unit> = Vec::new();

    for relation in &bot.threat_list {
        let Some(owner) = world.resolve(relation.owner) else {
            continue;
        };
        if bot.is_victim(owner.handle) {
            continue;
        }
        if owner.kind != EntityKind::Player {
            continue;
        }
        if !world.can_see_or_detect(owner, &bot.unit) {
            continue;
        }
        if bot.unit.distance_to(owner) > NORMAL_VISIBILITY_RANGE {
            continue;
        }

        if owner.has_aura(flag) {
            debug!("bot {:?}: flag carrier {:?} on threat table", bot.unit.handle, owner.handle);
            return Some(owner);
        }

        candidates.push(owner);
    }

    candidates.sort_by(|a, b| {
        bot.unit
            .distance_to(a)
            .total_cmp(&bot.unit.distance_to(b))
    });

    let nearest = candidates.into_iter().next();
    if let Some(target) = nearest {
        debug!("bot {:?}: engaging {:?} from threat table", bot.unit.handle, target.handle);
    }
    nearest
}

/// Stage 2: nearby enemy players supplied by the spatial index.
///
/// First match in list order wins; no distance sorting. The aggro
/// distance shrinks to [`WEAK_AGGRO_RANGE`] when the bot has less health
/// than the candidate and is not in a cannon — weak bots only pick fights
/// at close range.
pub fn scan_nearby_enemies<'w, W, P>(
    bot: &Bot,
    candidates: &[UnitHandle],
    world: &'w W,
    policy: &P,
) -> Option<&'w Unit>
where
    W: WorldView + ?Sized,
    P: ZonePolicy + ?Sized,
{
    let in_cannon = bot.in_cannon();
    let max_range = max_attack_distance(bot, world);
    let flag = priority_aura(bot.unit.faction);

    for &handle in candidates {
        let Some(target) = world.resolve(handle) else {
            continue;
        };
        if !is_eligible_enemy(bot, target, world, policy) {
            continue;
        }
        if bot.is_victim(target.handle) {
            continue;
        }

        if target.has_aura(flag) {
            debug!("bot {:?}: flag carrier {:?} nearby", bot.unit.handle, target.handle);
            return Some(target);
        }

        let aggro_distance = if in_cannon || bot.unit.health > target.health {
            max_range
        } else {
            WEAK_AGGRO_RANGE
        };
        if bot.unit.distance_to(target) > aggro_distance {
            continue;
        }

        // Cannons lob shells over terrain; everyone else needs the target
        // at a reachable height.
        if world.in_line_of_sight(&bot.unit, target)
            && (in_cannon || bot.unit.height_delta_to(target) < MAX_HEIGHT_DELTA)
        {
            debug!("bot {:?}: engaging nearby {:?}", bot.unit.handle, target.handle);
            return Some(target);
        }
    }

    None
}

/// Stage 3: come to the aid of party members under attack.
///
/// Only allies within [`PARTY_ASSIST_RANGE`] horizontally are consulted;
/// the first qualifying attacker wins.
pub fn scan_party_attackers<'w, W>(bot: &Bot, world: &'w W) -> Option<&'w Unit>
where
    W: WorldView + ?Sized,
{
    let max_range = max_attack_distance(bot, world);

    for &member_handle in &bot.party {
        if member_handle == bot.unit.handle {
            continue;
        }
        let Some(member) = world.resolve(member_handle) else {
            continue;
        };
        if bot.unit.horizontal_distance_to(member) > PARTY_ASSIST_RANGE {
            continue;
        }

        let Some(attacker) = member.attacker.and_then(|h| world.resolve(h)) else {
            continue;
        };
        if attacker.kind != EntityKind::Player {
            continue;
        }
        if bot.unit.distance_to(attacker) > max_range * 2.0 {
            continue;
        }
        if !world.in_line_of_sight(&bot.unit, attacker) {
            continue;
        }
        if bot.is_victim(attacker.handle) {
            continue;
        }
        if !world.can_see_or_detect(attacker, &bot.unit) {
            continue;
        }

        debug!(
            "bot {:?}: assisting {:?} against {:?}",
            bot.unit.handle, member.handle, attacker.handle
        );
        return Some(attacker);
    }

    None
}
