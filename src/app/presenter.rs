use crate::battle::state::{BattleState, Outcome, RoundReport, Side};
use crate::catalog::Catalog;
use crate::combatant::Combatant;
use std::io::{self, Write};
use std::thread;
use std::time::Duration;

pub const INTRO_BANNER: &str = include_str!("../../assets/intro.txt");
pub const TRAINER_SELECTION: &str = include_str!("../../assets/trainer_selection.txt");
pub const GAME_OVER_BANNER: &str = include_str!("../../assets/game_over.txt");
pub const THANK_YOU_MESSAGE: &str = include_str!("../../assets/thank_you.txt");

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human readable text.
    #[default]
    Text,
    /// One JSON object per round report.
    Json,
}

/// Renders the match. Owns all pacing; nothing in the engine sleeps.
#[derive(Debug, Clone)]
pub struct Presenter {
    round_delay: Duration,
    format: OutputFormat,
}

impl Presenter {
    pub fn new(round_delay: Duration, format: OutputFormat) -> Self {
        Self { round_delay, format }
    }

    pub fn banner<W: Write>(&self, out: &mut W, banner: &str) -> io::Result<()> {
        if self.format == OutputFormat::Text {
            writeln!(out, "{}", banner)?;
        }
        Ok(())
    }

    /// Table of every creature a trainer can pick.
    pub fn catalog_chart<W: Write>(&self, out: &mut W, catalog: &Catalog) -> io::Result<()> {
        if self.format == OutputFormat::Json {
            return Ok(());
        }
        writeln!(out, "\t {:>3}  {:<12} {:>5} {:>5}  {}", "#", "Name", "Lv", "HP", "Attack")?;
        for template in catalog.templates() {
            writeln!(
                out,
                "\t {:>3}  {:<12} {:>5} {:>5}  {}",
                template.key, template.name, template.level, template.health, template.attack_name
            )?;
        }
        writeln!(out)
    }

    pub fn roster<W: Write>(&self, out: &mut W, combatant: &Combatant) -> io::Result<()> {
        if self.format == OutputFormat::Json {
            return Ok(());
        }
        writeln!(out, "{}'s team:", combatant.name())?;
        for (slot, creature) in combatant.roster().creatures().enumerate() {
            let marker = if creature.is_disabled() { " (fainted)" } else { "" };
            writeln!(out, "  {}. {}{}", slot + 1, creature, marker)?;
        }
        Ok(())
    }

    /// The two creatures about to face each other, with portraits when available.
    pub fn matchup<W: Write>(&self, out: &mut W, state: &BattleState) -> io::Result<()> {
        if self.format == OutputFormat::Json {
            return Ok(());
        }
        for side in Side::BOTH {
            let combatant = state.combatant(side);
            if let Some(creature) = combatant.active_creature() {
                writeln!(out, "{} sends out {}!", combatant.name(), creature)?;
                if let Some(portrait) = creature.portrait() {
                    writeln!(out, "{}", portrait)?;
                }
            }
        }
        Ok(())
    }

    pub fn round<W: Write>(&self, out: &mut W, report: &RoundReport, state: &BattleState) -> io::Result<()> {
        match self.format {
            OutputFormat::Text => {
                for line in report.format_lines(state) {
                    writeln!(out, "  {}", line)?;
                }
                writeln!(out)?;
            }
            OutputFormat::Json => {
                let json = serde_json::to_string(report).map_err(io::Error::other)?;
                writeln!(out, "{}", json)?;
            }
        }
        out.flush()
    }

    pub fn outcome<W: Write>(&self, out: &mut W, outcome: Outcome, state: &BattleState) -> io::Result<()> {
        if self.format == OutputFormat::Json {
            return Ok(());
        }
        match outcome {
            Outcome::Winner(Side::Challenger) => writeln!(
                out,
                "Congratulations {}! You defeated {} in {} rounds.",
                state.combatant(Side::Challenger).name(),
                state.combatant(Side::Opponent).name(),
                state.round
            ),
            Outcome::Winner(Side::Opponent) => writeln!(
                out,
                "{} was defeated by {} after {} rounds. Better luck next time!",
                state.combatant(Side::Challenger).name(),
                state.combatant(Side::Opponent).name(),
                state.round
            ),
            Outcome::Draw => writeln!(out, "Both teams are out after {} rounds. It's a draw!", state.round),
        }
    }

    /// Wait between rounds so the text can be followed.
    pub fn pause(&self) {
        if !self.round_delay.is_zero() {
            thread::sleep(self.round_delay);
        }
    }
}
