//! PvP target acquisition for WARBAND bots.
//!
//! Implements the per-tick enemy-player selection: a priority-ordered
//! chain of scans over the bot's threat table, the nearby-enemy list, and
//! the party's attackers. Pure functions over plain data — no ECS or
//! server dependency; all world state arrives through the traits in
//! [`warband_core::world`].

pub mod eligibility;
pub mod range;
pub mod select;

pub use warband_core as core;
