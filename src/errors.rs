use crate::battle::state::Side;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the battle engine
#[derive(Debug, Error)]
pub enum BattleEngineError {
    /// A match could not be started with the given combatants
    #[error("Setup error: {0}")]
    Setup(#[from] SetupError),
    /// A roster selection was rejected
    #[error("Selection error: {0}")]
    Selection(#[from] SelectionError),
    /// An engine method was called out of sequence
    #[error("Illegal state: {0}")]
    IllegalState(#[from] IllegalStateError),
    /// The creature catalog could not be loaded
    #[error("Catalog error: {0}")]
    CatalogParse(#[from] CatalogParseError),
}

/// Errors raised when a match is started with unusable combatants
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SetupError {
    /// The roster has no slots at all
    #[error("{side} roster is empty")]
    EmptyRoster { side: Side },
    /// Not every slot of the roster has been filled
    #[error("{side} roster is incomplete ({filled}/{capacity} creatures selected)")]
    IncompleteRoster {
        side: Side,
        filled: usize,
        capacity: usize,
    },
}

/// Errors raised while assembling a roster
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    /// The creature is already in another slot of this roster
    #[error("creature #{key} is already selected in slot {occupied_slot}")]
    DuplicateCreature { key: u32, occupied_slot: usize },
    /// Slot number is outside 1..=capacity
    #[error("slot {slot} is out of range (1..={capacity})")]
    InvalidSlot { slot: usize, capacity: usize },
    /// The catalog has no creature with this key
    #[error("no creature with key #{0} in the catalog")]
    UnknownCreature(u32),
    /// A random roster needs more distinct creatures than the catalog holds
    #[error("catalog holds {available} creatures but the roster needs {required}")]
    CatalogTooSmall { available: usize, required: usize },
}

/// Errors raised when the engine is driven out of sequence
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IllegalStateError {
    /// `start` was called on an engine that already started
    #[error("the match has already started")]
    AlreadyStarted,
    /// A round was requested before `start`
    #[error("the match has not started")]
    NotStarted,
    /// A round was requested after the match concluded
    #[error("the match concluded after round {rounds_played}")]
    MatchConcluded { rounds_played: u32 },
}

/// Errors raised while loading the creature catalog
#[derive(Debug, Error)]
pub enum CatalogParseError {
    /// Row does not have 4 or 6 fields
    #[error("line {line_number}: expected 4 or 6 fields but found {found}: {line:?}")]
    FieldCount {
        line_number: usize,
        found: usize,
        line: String,
    },
    /// A numeric column could not be parsed
    #[error("line {line_number}: invalid {field} {value:?}: {line:?}")]
    InvalidNumber {
        line_number: usize,
        field: &'static str,
        value: String,
        line: String,
    },
    /// Two rows share the same selection key
    #[error("line {line_number}: duplicate creature id {key}: {line:?}")]
    DuplicateKey {
        line_number: usize,
        key: u32,
        line: String,
    },
    /// The portrait file referenced by a row could not be read
    #[error("line {line_number}: cannot read portrait {}: {source}", .path.display())]
    Portrait {
        line_number: usize,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The catalog file itself could not be read
    #[error("cannot read catalog {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The catalog has no creature rows
    #[error("catalog contains no creatures")]
    Empty,
}

/// Type alias for Results using BattleEngineError
pub type BattleResult<T> = Result<T, BattleEngineError>;

/// Type alias for Results using CatalogParseError
pub type CatalogResult<T> = Result<T, CatalogParseError>;
