//! Core types and definitions for WARBAND bot combat AI.
//!
//! This crate defines the vocabulary shared across the targeting crates:
//! unit snapshots, identifiers, tuning constants, collaborator traits, and
//! the zone PvP-policy table. It has no dependency on the game server or
//! any runtime framework — everything the engine reads comes in through
//! the traits in [`world`].

pub mod constants;
pub mod enums;
pub mod policy;
pub mod types;
pub mod unit;
pub mod world;

#[cfg(test)]
mod tests;
