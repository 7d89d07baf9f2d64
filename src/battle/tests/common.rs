use crate::battle::engine::BattleEngine;
use crate::combatant::Combatant;
use crate::creature::Creature;
use crate::damage::DamageSource;
use crate::errors::BattleResult;
use crate::roster::Roster;

/// A builder for creating test creatures with common defaults.
///
/// # Example
/// ```ignore
/// let creature = TestCreatureBuilder::new("Pikachu").with_health(10).build();
/// ```
pub struct TestCreatureBuilder {
    name: String,
    level: u8,
    health: u16,
    attack_name: String,
    current_health: Option<u16>,
}

impl TestCreatureBuilder {
    /// Creates a new builder with level 10 and 100 health.
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            level: 10,
            health: 100,
            attack_name: "Tackle".to_string(),
            current_health: None,
        }
    }

    /// Sets the max (and starting) health.
    pub fn with_health(mut self, health: u16) -> Self {
        self.health = health;
        self
    }

    pub fn with_level(mut self, level: u8) -> Self {
        self.level = level;
        self
    }

    pub fn with_attack(mut self, attack_name: &str) -> Self {
        self.attack_name = attack_name.to_string();
        self
    }

    /// Starts the creature below max health. Zero builds an already fainted creature.
    pub fn with_current_health(mut self, health: u16) -> Self {
        self.current_health = Some(health);
        self
    }

    pub fn build(self) -> Creature {
        let mut creature = Creature::new(self.name, self.level, self.health, self.attack_name);
        if let Some(current) = self.current_health {
            creature.take_damage(self.health.saturating_sub(current));
        }
        creature
    }
}

/// Creates a combatant whose roster is exactly `team`.
pub fn create_test_combatant(name: &str, team: Vec<Creature>) -> Combatant {
    Combatant::new(name, Roster::from_creatures(team))
}

/// Creates and starts a 1v1 engine.
pub fn create_test_battle<D: DamageSource>(
    challenger_creature: Creature,
    opponent_creature: Creature,
    damage_source: D,
) -> BattleEngine<D> {
    create_team_battle(vec![challenger_creature], vec![opponent_creature], damage_source)
}

/// Creates and starts an engine with full teams on both sides.
pub fn create_team_battle<D: DamageSource>(
    challenger_team: Vec<Creature>,
    opponent_team: Vec<Creature>,
    damage_source: D,
) -> BattleEngine<D> {
    let mut engine = BattleEngine::new(damage_source);
    assert_ok(engine.start(
        create_test_combatant("Ash", challenger_team),
        create_test_combatant("Gary", opponent_team),
    ));
    engine
}

/// Helper function to assert that a Result is Ok and return the value.
/// Provides clear error messages in tests when functions unexpectedly fail.
pub fn assert_ok<T>(result: BattleResult<T>) -> T {
    match result {
        Ok(value) => value,
        Err(err) => panic!("Expected Ok but got error: {}", err),
    }
}
