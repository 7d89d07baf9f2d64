use crate::damage::DamageSource;
use serde::{Deserialize, Serialize};

/// Attack name given to creatures whose catalog row does not name one.
pub const DEFAULT_ATTACK_NAME: &str = "Tackle";

/// Outcome of a single attack as seen by the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DamageResult {
    pub damage: u16,
    pub remaining_health: u16,
    pub target_disabled: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Creature {
    name: String,
    level: u8, // Informational; damage does not scale with it
    max_health: u16,
    current_health: u16,
    attack_name: String,
    is_disabled: bool,
    portrait: Option<String>,
}

impl Creature {
    /// Create a creature at full health.
    pub fn new(name: impl Into<String>, level: u8, health: u16, attack_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            level,
            max_health: health,
            current_health: health,
            attack_name: attack_name.into(),
            is_disabled: health == 0,
            portrait: None,
        }
    }

    pub fn with_portrait(mut self, portrait: impl Into<String>) -> Self {
        self.portrait = Some(portrait.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn level(&self) -> u8 {
        self.level
    }

    pub fn max_health(&self) -> u16 {
        self.max_health
    }

    pub fn current_health(&self) -> u16 {
        self.current_health
    }

    pub fn attack_name(&self) -> &str {
        &self.attack_name
    }

    pub fn portrait(&self) -> Option<&str> {
        self.portrait.as_deref()
    }

    pub fn is_disabled(&self) -> bool {
        self.is_disabled
    }

    /// Attack `target` for a fresh damage draw.
    ///
    /// The attacker is not changed. Callers must not pass a disabled target.
    pub fn resolve_attack<D: DamageSource + ?Sized>(&self, target: &mut Creature, damage_source: &mut D) -> DamageResult {
        debug_assert!(!target.is_disabled(), "{} attacked disabled {}", self.name, target.name);

        let damage = damage_source.roll_damage(&self.attack_name);
        let target_disabled = target.take_damage(damage);

        DamageResult {
            damage,
            remaining_health: target.current_health,
            target_disabled,
        }
    }

    /// Apply damage, clamping health at zero. Returns true if the creature is now disabled.
    pub fn take_damage(&mut self, damage: u16) -> bool {
        self.current_health = self.current_health.saturating_sub(damage);
        if self.current_health == 0 {
            self.is_disabled = true;
        }
        self.is_disabled
    }
}

impl std::fmt::Display for Creature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} (Lv. {}) HP {}/{}",
            self.name, self.level, self.current_health, self.max_health
        )
    }
}
