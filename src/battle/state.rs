use crate::combatant::Combatant;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which combatant. The challenger always acts first in a round.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Challenger,
    Opponent,
}

impl Side {
    pub const BOTH: [Side; 2] = [Side::Challenger, Side::Opponent];

    pub fn index(self) -> usize {
        match self {
            Side::Challenger => 0,
            Side::Opponent => 1,
        }
    }

    pub fn other(self) -> Side {
        match self {
            Side::Challenger => Side::Opponent,
            Side::Opponent => Side::Challenger,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Challenger => write!(f, "challenger"),
            Side::Opponent => write!(f, "opponent"),
        }
    }
}

/// How a round that knocks out both sides' last creatures is scored.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TieBreak {
    /// The side that acted first wins.
    #[default]
    Initiative,
    /// Neither side wins.
    Draw,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Winner(Side),
    Draw,
}

impl Outcome {
    pub fn winner(self) -> Option<Side> {
        match self {
            Outcome::Winner(side) => Some(side),
            Outcome::Draw => None,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BattlePhase {
    NotStarted,
    InProgress,
    Concluded(Outcome),
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub enum BattleEvent {
    RoundStarted {
        round: u32,
    },
    AttackResolved {
        side: Side,
        attacker: String,
        defender: String,
        attack_name: String,
        damage: u16,
        remaining_health: u16,
    },
    CreatureFainted {
        side: Side,
        slot: usize,
        creature: String,
    },
    /// The next undisabled creature steps in after a faint.
    CreatureSentOut {
        side: Side,
        slot: usize,
        creature: String,
    },
    CombatantDefeated {
        side: Side,
    },
    BattleEnded {
        outcome: Outcome,
    },
}

impl BattleEvent {
    /// Formats the event into a human-readable string using battle context.
    /// Returns None for silent events that should not produce user-visible text.
    pub fn format(&self, battle_state: &BattleState) -> Option<String> {
        match self {
            BattleEvent::RoundStarted { round } => Some(format!("=== Round {} ===", round)),
            BattleEvent::AttackResolved {
                side,
                attacker,
                defender,
                attack_name,
                damage,
                remaining_health,
            } => Some(format!(
                "{}'s {} used {}! {} took {} damage ({} HP left).",
                battle_state.combatant(*side).name(),
                attacker,
                attack_name,
                defender,
                damage,
                remaining_health
            )),
            BattleEvent::CreatureFainted { creature, .. } => Some(format!("{} fainted!", creature)),
            BattleEvent::CreatureSentOut { side, creature, .. } => Some(format!(
                "{} sends out {}!",
                battle_state.combatant(*side).name(),
                creature
            )),
            BattleEvent::CombatantDefeated { side } => Some(format!(
                "{} has no creatures left to fight!",
                battle_state.combatant(*side).name()
            )),
            BattleEvent::BattleEnded { outcome } => match outcome {
                Outcome::Winner(side) => Some(format!("{} wins the battle!", battle_state.combatant(*side).name())),
                Outcome::Draw => Some("The battle ended in a draw!".to_string()),
            },
        }
    }
}

/// Collects the events of one round in order.
#[derive(Debug, Default)]
pub struct EventBus {
    events: Vec<BattleEvent>,
}

impl EventBus {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn push(&mut self, event: BattleEvent) {
        self.events.push(event);
    }

    pub fn into_events(self) -> Vec<BattleEvent> {
        self.events
    }
}

/// Everything that happened in one call to `advance_round`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct RoundReport {
    pub round: u32,
    pub events: Vec<BattleEvent>,
    pub outcome: Option<Outcome>,
}

impl RoundReport {
    pub fn is_concluded(&self) -> bool {
        self.outcome.is_some()
    }

    /// Damage dealt by `side` this round, if it attacked.
    pub fn damage_dealt(&self, side: Side) -> Option<u16> {
        self.events.iter().find_map(|event| match event {
            BattleEvent::AttackResolved { side: s, damage, .. } if *s == side => Some(*damage),
            _ => None,
        })
    }

    /// Number of attacks resolved this round (0, 1 or 2).
    pub fn attack_count(&self) -> usize {
        self.events
            .iter()
            .filter(|event| matches!(event, BattleEvent::AttackResolved { .. }))
            .count()
    }

    /// Creatures that fainted this round, as (side, name).
    pub fn fainted(&self) -> Vec<(Side, &str)> {
        self.events
            .iter()
            .filter_map(|event| match event {
                BattleEvent::CreatureFainted { side, creature, .. } => Some((*side, creature.as_str())),
                _ => None,
            })
            .collect()
    }

    /// Print all events in debug format with a custom prefix message.
    pub fn print_debug_with_message(&self, message: &str) {
        println!("{}", message);
        for event in &self.events {
            println!("  {:?}", event);
        }
    }

    /// Formatted lines for every event that has a user-visible message.
    pub fn format_lines(&self, battle_state: &BattleState) -> Vec<String> {
        self.events
            .iter()
            .filter_map(|event| event.format(battle_state))
            .collect()
    }
}

/// Engine-owned state of a started match.
#[derive(Serialize, Debug, Clone)]
pub struct BattleState {
    pub combatants: [Combatant; 2],
    pub round: u32,
    pub phase: BattlePhase,
}

impl BattleState {
    pub fn new(challenger: Combatant, opponent: Combatant) -> Self {
        Self {
            combatants: [challenger, opponent],
            round: 0,
            phase: BattlePhase::InProgress,
        }
    }

    pub fn combatant(&self, side: Side) -> &Combatant {
        &self.combatants[side.index()]
    }

    pub fn outcome(&self) -> Option<Outcome> {
        match self.phase {
            BattlePhase::Concluded(outcome) => Some(outcome),
            _ => None,
        }
    }
}
