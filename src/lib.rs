// In: src/lib.rs

//! Poke Battle Engine
//!
//! A turn-based creature battle simulator. Two trainers each pick a roster of
//! creatures from a catalog, then trade attacks round by round until one side
//! has nothing left standing.

// --- MODULE DECLARATIONS ---
pub mod app;
pub mod battle;
pub mod catalog;
pub mod combatant;
pub mod config;
pub mod creature;
pub mod damage;
pub mod errors;
pub mod logging;
pub mod roster;

// --- PUBLIC API RE-EXPORTS ---

// Core battle engine and state.
pub use battle::engine::BattleEngine;
pub use battle::state::{BattleEvent, BattlePhase, BattleState, Outcome, RoundReport, Side, TieBreak};

// Core runtime types for a battle.
pub use catalog::{Catalog, CreatureTemplate};
pub use combatant::Combatant;
pub use creature::{Creature, DamageResult};
pub use damage::{DamageSource, FixedDamage, ScriptedDamage, SeededDamage};
pub use roster::{Roster, ROSTER_SIZE};

pub use config::{ConfigError, GameConfig};

// Crate-specific error and result types.
pub use errors::{
    BattleEngineError, BattleResult, CatalogParseError, CatalogResult, IllegalStateError, SelectionError, SetupError,
};
