use crate::catalog::Catalog;
use crate::creature::Creature;
use crate::errors::SelectionError;
use rand::seq::{IteratorRandom, SliceRandom};
use rand::Rng;
use serde::Serialize;

/// Number of creatures each combatant brings to a match.
pub const ROSTER_SIZE: usize = 4;

/// A filled roster slot: the catalog key it was picked by and its creature.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RosterSlot {
    pub key: u32,
    pub creature: Creature,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Roster {
    // Index 0 is selection slot 1.
    slots: Vec<Option<RosterSlot>>,
}

impl Default for Roster {
    fn default() -> Self {
        Self::new()
    }
}

impl Roster {
    /// An empty roster with [`ROSTER_SIZE`] slots.
    pub fn new() -> Self {
        Self::with_capacity(ROSTER_SIZE)
    }

    /// An empty roster with `capacity` slots.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: vec![None; capacity],
        }
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Number of slots filled so far.
    pub fn filled(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    /// Fill 1-based `slot` with a fresh instance of catalog entry `key`.
    ///
    /// A key already held by another slot is rejected and the roster is left
    /// unchanged. Selecting into an occupied slot replaces its creature.
    pub fn try_select(&mut self, slot: usize, key: u32, catalog: &Catalog) -> Result<(), SelectionError> {
        if slot == 0 || slot > self.capacity() {
            return Err(SelectionError::InvalidSlot {
                slot,
                capacity: self.capacity(),
            });
        }

        if let Some(occupied_slot) = self.slot_of_key(key).filter(|&other| other != slot) {
            tracing::debug!(key, slot, occupied_slot, "rejected duplicate selection");
            return Err(SelectionError::DuplicateCreature { key, occupied_slot });
        }

        let template = catalog.get(key).ok_or(SelectionError::UnknownCreature(key))?;
        self.slots[slot - 1] = Some(RosterSlot {
            key,
            creature: template.instantiate(),
        });
        tracing::debug!(key, slot, name = %template.name, "selected creature");
        Ok(())
    }

    /// Fill every empty slot with distinct creatures drawn at random from `catalog`.
    pub fn fill_random<R: Rng + ?Sized>(&mut self, catalog: &Catalog, rng: &mut R) -> Result<(), SelectionError> {
        let empty_slots: Vec<usize> = (1..=self.capacity())
            .filter(|&slot| self.slots[slot - 1].is_none())
            .collect();

        let candidates: Vec<u32> = catalog.keys().filter(|&key| self.slot_of_key(key).is_none()).collect();
        if candidates.len() < empty_slots.len() {
            return Err(SelectionError::CatalogTooSmall {
                available: candidates.len(),
                required: empty_slots.len(),
            });
        }

        let mut picks = candidates.into_iter().choose_multiple(rng, empty_slots.len());
        // choose_multiple does not guarantee a random order
        picks.shuffle(rng);

        for (slot, key) in empty_slots.into_iter().zip(picks) {
            self.try_select(slot, key, catalog)?;
        }
        Ok(())
    }

    pub fn is_complete(&self) -> bool {
        self.slots.iter().all(|slot| slot.is_some())
    }

    /// The first undisabled creature in slot order.
    pub fn active_creature(&self) -> Option<&Creature> {
        self.active_index().and_then(|index| self.creature(index))
    }

    pub fn active_creature_mut(&mut self) -> Option<&mut Creature> {
        let index = self.active_index()?;
        self.creature_mut(index)
    }

    /// 0-based index of the active creature.
    pub fn active_index(&self) -> Option<usize> {
        self.slots.iter().position(|slot| {
            slot.as_ref()
                .is_some_and(|filled| !filled.creature.is_disabled())
        })
    }

    pub fn has_any_undisabled(&self) -> bool {
        self.active_index().is_some()
    }

    /// Creature at 0-based `index`, if that slot is filled.
    pub fn creature(&self, index: usize) -> Option<&Creature> {
        self.slots.get(index)?.as_ref().map(|slot| &slot.creature)
    }

    pub fn creature_mut(&mut self, index: usize) -> Option<&mut Creature> {
        self.slots.get_mut(index)?.as_mut().map(|slot| &mut slot.creature)
    }

    /// Filled slots in order.
    pub fn creatures(&self) -> impl Iterator<Item = &Creature> {
        self.slots.iter().flatten().map(|slot| &slot.creature)
    }

    pub fn selected_keys(&self) -> Vec<u32> {
        self.slots.iter().flatten().map(|slot| slot.key).collect()
    }

    pub fn fainted_count(&self) -> usize {
        self.creatures().filter(|creature| creature.is_disabled()).count()
    }

    /// Build a complete roster directly from creatures, keyed by position.
    pub fn from_creatures(creatures: Vec<Creature>) -> Self {
        Self {
            slots: creatures
                .into_iter()
                .enumerate()
                .map(|(i, creature)| {
                    Some(RosterSlot {
                        key: i as u32 + 1,
                        creature,
                    })
                })
                .collect(),
        }
    }

    fn slot_of_key(&self, key: u32) -> Option<usize> {
        self.slots
            .iter()
            .position(|slot| slot.as_ref().is_some_and(|filled| filled.key == key))
            .map(|index| index + 1)
    }
}
