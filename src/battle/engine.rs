use crate::battle::state::{BattleEvent, BattlePhase, BattleState, EventBus, Outcome, RoundReport, Side, TieBreak};
use crate::combatant::Combatant;
use crate::damage::DamageSource;
use crate::errors::{BattleResult, IllegalStateError, SetupError};

/// Drives one match from setup to a winner.
///
/// The engine owns both combatants for the whole match. Each call to
/// [`BattleEngine::advance_round`] resolves one full round: the challenger's
/// active creature attacks first, then the opponent's active creature
/// retaliates if the opponent still has a creature standing.
#[derive(Debug)]
pub struct BattleEngine<D: DamageSource> {
    damage_source: D,
    tie_break: TieBreak,
    state: Option<BattleState>,
}

impl<D: DamageSource> BattleEngine<D> {
    pub fn new(damage_source: D) -> Self {
        Self {
            damage_source,
            tie_break: TieBreak::default(),
            state: None,
        }
    }

    pub fn with_tie_break(mut self, tie_break: TieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }

    /// Hand both combatants to the engine and begin the match.
    pub fn start(&mut self, challenger: Combatant, opponent: Combatant) -> BattleResult<()> {
        if self.state.is_some() {
            return Err(IllegalStateError::AlreadyStarted.into());
        }

        validate_roster(Side::Challenger, &challenger)?;
        validate_roster(Side::Opponent, &opponent)?;

        tracing::info!(
            challenger = challenger.name(),
            opponent = opponent.name(),
            "battle started"
        );
        self.state = Some(BattleState::new(challenger, opponent));
        Ok(())
    }

    /// Resolve the next round.
    ///
    /// Fails without touching any state if the match has not started or has
    /// already concluded.
    pub fn advance_round(&mut self) -> BattleResult<RoundReport> {
        let state = self.state.as_mut().ok_or(IllegalStateError::NotStarted)?;
        if let BattlePhase::Concluded(_) = state.phase {
            return Err(IllegalStateError::MatchConcluded {
                rounds_played: state.round,
            }
            .into());
        }

        state.round += 1;
        let mut bus = EventBus::new();
        bus.push(BattleEvent::RoundStarted { round: state.round });

        let both_ready = Side::BOTH
            .iter()
            .all(|&side| state.combatant(side).active_creature().is_some());

        if both_ready {
            resolve_strike(state, Side::Challenger, &mut self.damage_source, &mut bus);

            if state.combatant(Side::Opponent).is_defeated() {
                tracing::debug!(round = state.round, "opponent has nothing left to retaliate with");
            } else {
                resolve_strike(state, Side::Opponent, &mut self.damage_source, &mut bus);
            }
        }

        let outcome = evaluate_outcome(state, self.tie_break, &mut bus);
        if let Some(outcome) = outcome {
            state.phase = BattlePhase::Concluded(outcome);
            bus.push(BattleEvent::BattleEnded { outcome });
            tracing::info!(round = state.round, ?outcome, "battle concluded");
        }

        Ok(RoundReport {
            round: state.round,
            events: bus.into_events(),
            outcome,
        })
    }

    pub fn phase(&self) -> BattlePhase {
        match &self.state {
            Some(state) => state.phase,
            None => BattlePhase::NotStarted,
        }
    }

    /// The result of the match, once it has concluded.
    pub fn outcome(&self) -> Option<Outcome> {
        self.state.as_ref().and_then(BattleState::outcome)
    }

    pub fn is_concluded(&self) -> bool {
        matches!(self.phase(), BattlePhase::Concluded(_))
    }

    /// Rounds resolved so far.
    pub fn round(&self) -> u32 {
        self.state.as_ref().map_or(0, |state| state.round)
    }

    pub fn state(&self) -> Option<&BattleState> {
        self.state.as_ref()
    }

    pub fn combatant(&self, side: Side) -> Option<&Combatant> {
        self.state.as_ref().map(|state| state.combatant(side))
    }

    /// Give the combatants back, e.g. to show final rosters.
    pub fn into_state(self) -> Option<BattleState> {
        self.state
    }
}

fn validate_roster(side: Side, combatant: &Combatant) -> Result<(), SetupError> {
    let roster = combatant.roster();
    if roster.capacity() == 0 {
        return Err(SetupError::EmptyRoster { side });
    }
    if !roster.is_complete() {
        return Err(SetupError::IncompleteRoster {
            side,
            filled: roster.filled(),
            capacity: roster.capacity(),
        });
    }
    Ok(())
}

/// Split the pair into (attacking side, defending side).
fn split_sides(combatants: &mut [Combatant; 2], attacker: Side) -> (&Combatant, &mut Combatant) {
    let [challenger, opponent] = combatants;
    match attacker {
        Side::Challenger => (&*challenger, opponent),
        Side::Opponent => (&*opponent, challenger),
    }
}

/// `attacker_side`'s active creature attacks the other side's active creature.
fn resolve_strike<D: DamageSource + ?Sized>(
    state: &mut BattleState,
    attacker_side: Side,
    damage_source: &mut D,
    bus: &mut EventBus,
) {
    let defender_side = attacker_side.other();
    let (attacker, defender) = split_sides(&mut state.combatants, attacker_side);

    let Some(attacking_creature) = attacker.active_creature() else {
        return;
    };
    let Some(defender_index) = defender.active_index() else {
        return;
    };
    let Some(target) = defender.roster_mut().creature_mut(defender_index) else {
        return;
    };

    let result = attacking_creature.resolve_attack(target, damage_source);
    tracing::debug!(
        side = %attacker_side,
        attacker = attacking_creature.name(),
        defender = target.name(),
        damage = result.damage,
        remaining = result.remaining_health,
        "attack resolved"
    );

    bus.push(BattleEvent::AttackResolved {
        side: attacker_side,
        attacker: attacking_creature.name().to_string(),
        defender: target.name().to_string(),
        attack_name: attacking_creature.attack_name().to_string(),
        damage: result.damage,
        remaining_health: result.remaining_health,
    });

    if result.target_disabled {
        bus.push(BattleEvent::CreatureFainted {
            side: defender_side,
            slot: defender_index + 1,
            creature: target.name().to_string(),
        });

        if let Some(next_index) = defender.active_index() {
            if let Some(next) = defender.roster().creature(next_index) {
                bus.push(BattleEvent::CreatureSentOut {
                    side: defender_side,
                    slot: next_index + 1,
                    creature: next.name().to_string(),
                });
            }
        }
    }
}

fn evaluate_outcome(state: &BattleState, tie_break: TieBreak, bus: &mut EventBus) -> Option<Outcome> {
    let challenger_defeated = state.combatant(Side::Challenger).is_defeated();
    let opponent_defeated = state.combatant(Side::Opponent).is_defeated();

    for side in Side::BOTH {
        if state.combatant(side).is_defeated() {
            bus.push(BattleEvent::CombatantDefeated { side });
        }
    }

    match (challenger_defeated, opponent_defeated) {
        (false, false) => None,
        (false, true) => Some(Outcome::Winner(Side::Challenger)),
        (true, false) => Some(Outcome::Winner(Side::Opponent)),
        (true, true) => Some(match tie_break {
            TieBreak::Initiative => Outcome::Winner(Side::Challenger),
            TieBreak::Draw => Outcome::Draw,
        }),
    }
}
