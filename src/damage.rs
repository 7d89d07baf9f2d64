use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::VecDeque;

/// Every attack deals at least this much damage.
pub const DAMAGE_BASE: u16 = 30;
/// Width of the random bonus on top of [`DAMAGE_BASE`]; draws land in `0..DAMAGE_SPREAD`.
pub const DAMAGE_SPREAD: u16 = 30;

/// Source of attack damage.
///
/// The engine takes one at construction so matches can be replayed with a
/// seed, or pinned to exact values in tests.
pub trait DamageSource {
    /// Draw the damage for one attack. `reason` names the attack for tracing.
    fn roll_damage(&mut self, reason: &str) -> u16;
}

impl<D: DamageSource + ?Sized> DamageSource for &mut D {
    fn roll_damage(&mut self, reason: &str) -> u16 {
        (**self).roll_damage(reason)
    }
}

impl<D: DamageSource + ?Sized> DamageSource for Box<D> {
    fn roll_damage(&mut self, reason: &str) -> u16 {
        (**self).roll_damage(reason)
    }
}

/// Uniform damage in `[DAMAGE_BASE, DAMAGE_BASE + DAMAGE_SPREAD)` backed by a seedable RNG.
#[derive(Debug, Clone)]
pub struct SeededDamage {
    rng: StdRng,
}

impl SeededDamage {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Seeded from the operating system; not reproducible.
    pub fn from_os_rng() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }
}

impl DamageSource for SeededDamage {
    fn roll_damage(&mut self, reason: &str) -> u16 {
        let damage = DAMAGE_BASE + self.rng.random_range(0..DAMAGE_SPREAD);
        tracing::trace!(damage, reason, "rolled damage");
        damage
    }
}

/// Always deals the same amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedDamage(pub u16);

impl DamageSource for FixedDamage {
    fn roll_damage(&mut self, _reason: &str) -> u16 {
        self.0
    }
}

/// Replays a fixed list of damage values in order.
#[derive(Debug, Clone, Default)]
pub struct ScriptedDamage {
    rolls: VecDeque<u16>,
}

impl ScriptedDamage {
    pub fn new(rolls: Vec<u16>) -> Self {
        Self {
            rolls: rolls.into(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.rolls.len()
    }
}

impl DamageSource for ScriptedDamage {
    fn roll_damage(&mut self, reason: &str) -> u16 {
        match self.rolls.pop_front() {
            Some(damage) => damage,
            None => panic!(
                "ScriptedDamage exhausted! Tried to get a value for: '{}'. Need more damage rolls.",
                reason
            ),
        }
    }
}
