#[cfg(test)]
mod tests {
    use crate::battle::engine::BattleEngine;
    use crate::battle::state::{RoundReport, Side};
    use crate::battle::tests::common::{assert_ok, create_test_combatant, TestCreatureBuilder};
    use crate::combatant::Combatant;
    use crate::damage::{DamageSource, SeededDamage};
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn team(names: [&str; 4], health: u16) -> Combatant {
        create_test_combatant(
            names[0],
            names
                .iter()
                .map(|name| TestCreatureBuilder::new(name).with_health(health).build())
                .collect(),
        )
    }

    fn play_out<D: DamageSource>(engine: &mut BattleEngine<D>, max_rounds: u32) -> Vec<RoundReport> {
        let mut reports = Vec::new();
        while !engine.is_concluded() {
            assert!(engine.round() < max_rounds, "match did not end within {} rounds", max_rounds);
            reports.push(assert_ok(engine.advance_round()));
        }
        reports
    }

    #[rstest]
    #[case("seed 1", 1)]
    #[case("seed 7", 7)]
    #[case("seed 42", 42)]
    #[case("seed 1234", 1234)]
    fn test_seeded_match_runs_to_completion(#[case] desc: &str, #[case] seed: u64) {
        let mut engine = BattleEngine::new(SeededDamage::from_seed(seed));
        assert_ok(engine.start(
            team(["Pikachu", "Bulbasaur", "Charmander", "Squirtle"], 120),
            team(["Eevee", "Rattata", "Pidgey", "Spearow"], 120),
        ));

        // Every round deals at least 30 damage and there are 8 * 120 health points in play
        let reports = play_out(&mut engine, 8 * 120 / 30 + 1);

        let outcome = engine.outcome().unwrap_or_else(|| panic!("{}: no outcome", desc));
        let winner = outcome.winner().unwrap();
        let state = engine.state().unwrap();
        assert!(!state.combatant(winner).is_defeated(), "{}", desc);
        assert!(state.combatant(winner.other()).is_defeated(), "{}", desc);

        for report in &reports {
            for side in Side::BOTH {
                if let Some(damage) = report.damage_dealt(side) {
                    assert!((30..60).contains(&damage), "{}: damage {}", desc, damage);
                }
            }
        }
        assert_eq!(reports.last().unwrap().outcome, Some(outcome));
        assert_eq!(reports.len() as u32, engine.round());
    }

    #[test]
    fn test_same_seed_replays_same_match() {
        let run = |seed: u64| {
            let mut engine = BattleEngine::new(SeededDamage::from_seed(seed));
            assert_ok(engine.start(
                team(["Pikachu", "Bulbasaur", "Charmander", "Squirtle"], 100),
                team(["Eevee", "Rattata", "Pidgey", "Spearow"], 100),
            ));
            play_out(&mut engine, 100)
        };

        assert_eq!(run(2024), run(2024));
    }

    #[test]
    fn test_health_never_negative_during_match() {
        let mut engine = BattleEngine::new(SeededDamage::from_seed(9));
        assert_ok(engine.start(
            team(["A1", "A2", "A3", "A4"], 45),
            team(["B1", "B2", "B3", "B4"], 45),
        ));

        while !engine.is_concluded() {
            assert_ok(engine.advance_round());
            let state = engine.state().unwrap();
            for combatant in &state.combatants {
                for creature in combatant.roster().creatures() {
                    assert!(creature.current_health() <= creature.max_health());
                    assert_eq!(creature.is_disabled(), creature.current_health() == 0);
                }
            }
        }
    }
}
