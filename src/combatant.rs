use crate::creature::Creature;
use crate::roster::Roster;
use serde::Serialize;

/// One side of a match: a trainer name and the roster they fight with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Combatant {
    name: String,
    roster: Roster,
}

impl Combatant {
    pub fn new(name: impl Into<String>, roster: Roster) -> Self {
        Self {
            name: name.into(),
            roster,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn roster_mut(&mut self) -> &mut Roster {
        &mut self.roster
    }

    /// The creature currently fighting for this side.
    pub fn active_creature(&self) -> Option<&Creature> {
        self.roster.active_creature()
    }

    pub fn active_creature_mut(&mut self) -> Option<&mut Creature> {
        self.roster.active_creature_mut()
    }

    pub fn active_index(&self) -> Option<usize> {
        self.roster.active_index()
    }

    /// True once every creature in the roster is disabled.
    pub fn is_defeated(&self) -> bool {
        !self.roster.has_any_undisabled()
    }
}
