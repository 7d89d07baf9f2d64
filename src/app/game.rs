use crate::app::presenter::{Presenter, GAME_OVER_BANNER, INTRO_BANNER, THANK_YOU_MESSAGE, TRAINER_SELECTION};
use crate::app::prompter::{PromptError, Prompter};
use crate::battle::engine::BattleEngine;
use crate::battle::state::{Outcome, Side};
use crate::catalog::Catalog;
use crate::combatant::Combatant;
use crate::config::GameConfig;
use crate::damage::SeededDamage;
use crate::errors::{BattleEngineError, SelectionError};
use crate::roster::{Roster, ROSTER_SIZE};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io::{self, BufRead, Write};
use thiserror::Error;

/// Trainers offered before the "create your own" option.
pub const PRESET_TRAINERS: [&str; 3] = ["Ash", "Misty", "Brock"];

#[derive(Debug, Error)]
pub enum GameError {
    #[error(transparent)]
    Prompt(#[from] PromptError),
    #[error("cannot write to the terminal: {0}")]
    Output(#[from] io::Error),
    #[error(transparent)]
    Engine(#[from] BattleEngineError),
}

impl From<SelectionError> for GameError {
    fn from(err: SelectionError) -> Self {
        GameError::Engine(err.into())
    }
}

/// One interactive challenge: pick a trainer, pick a team, fight.
pub struct Game<R: BufRead, W: Write> {
    config: GameConfig,
    catalog: Catalog,
    prompter: Prompter<R, W>,
    presenter: Presenter,
}

impl<R: BufRead, W: Write> Game<R, W> {
    pub fn new(config: GameConfig, catalog: Catalog, prompter: Prompter<R, W>, presenter: Presenter) -> Self {
        Self {
            config,
            catalog,
            prompter,
            presenter,
        }
    }

    /// Play one match from the intro to the thank-you message.
    pub fn run(&mut self) -> Result<Outcome, GameError> {
        self.presenter.banner(self.prompter.output(), INTRO_BANNER)?;

        let trainer_name = self.choose_trainer()?;
        let roster = self.choose_creatures()?;
        let challenger = Combatant::new(trainer_name, roster);
        let opponent = self.build_opponent()?;

        let outcome = self.battle(challenger, opponent)?;

        self.presenter.banner(self.prompter.output(), GAME_OVER_BANNER)?;
        self.presenter.banner(self.prompter.output(), THANK_YOU_MESSAGE)?;
        Ok(outcome)
    }

    pub fn into_prompter(self) -> Prompter<R, W> {
        self.prompter
    }

    fn choose_trainer(&mut self) -> Result<String, GameError> {
        self.presenter.banner(self.prompter.output(), TRAINER_SELECTION)?;

        let choices: Vec<u32> = (1..=PRESET_TRAINERS.len() as u32 + 1).collect();
        let choice = self
            .prompter
            .prompt_key("\t\t What choice would you like to choose: ", &choices)?;

        let name = match PRESET_TRAINERS.get(choice as usize - 1) {
            Some(preset) => preset.to_string(),
            None => self
                .prompter
                .prompt_name("\t\t What is the name of your Trainer: ", self.config.max_name_length)?,
        };
        tracing::info!(trainer = %name, "trainer chosen");
        Ok(name)
    }

    fn choose_creatures(&mut self) -> Result<Roster, GameError> {
        self.presenter.catalog_chart(self.prompter.output(), &self.catalog)?;

        let keys: Vec<u32> = self.catalog.keys().collect();
        let mut roster = Roster::new();

        for slot in 1..=ROSTER_SIZE {
            loop {
                let message = format!("\t Input the Option # to select creature #{}: ", slot);
                let key = self.prompter.prompt_key(&message, &keys)?;

                match roster.try_select(slot, key, &self.catalog) {
                    Ok(()) => break,
                    Err(SelectionError::DuplicateCreature { .. }) => {
                        writeln!(
                            self.prompter.output(),
                            "\n     Can not choose duplicate creature for this challenge.\n"
                        )?;
                    }
                    Err(err) => return Err(err.into()),
                }
            }
        }
        Ok(roster)
    }

    fn build_opponent(&mut self) -> Result<Combatant, GameError> {
        let mut rng = match self.config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let mut roster = Roster::new();
        roster.fill_random(&self.catalog, &mut rng)?;
        tracing::info!(keys = ?roster.selected_keys(), "opponent roster drawn");
        Ok(Combatant::new(self.config.opponent_name.clone(), roster))
    }

    fn battle(&mut self, challenger: Combatant, opponent: Combatant) -> Result<Outcome, GameError> {
        // Offset so damage rolls do not mirror the opponent's roster draw
        let damage = match self.config.seed {
            Some(seed) => SeededDamage::from_seed(seed.wrapping_add(1)),
            None => SeededDamage::from_os_rng(),
        };
        let mut engine = BattleEngine::new(damage).with_tie_break(self.config.tie_break);
        engine.start(challenger, opponent)?;

        if let Some(state) = engine.state() {
            for side in Side::BOTH {
                self.presenter.roster(self.prompter.output(), state.combatant(side))?;
            }
            self.presenter.matchup(self.prompter.output(), state)?;
        }

        loop {
            let report = engine.advance_round()?;
            if let Some(state) = engine.state() {
                self.presenter.round(self.prompter.output(), &report, state)?;
            }
            if let Some(outcome) = report.outcome {
                if let Some(state) = engine.state() {
                    self.presenter.outcome(self.prompter.output(), outcome, state)?;
                }
                return Ok(outcome);
            }
            self.presenter.pause();
        }
    }
}
