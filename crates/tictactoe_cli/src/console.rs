//! Line-oriented game loop: the human types squares, the computer answers.

use crate::profile::Profile;
use anyhow::{Context, Result};
use rand::Rng;
use std::io::{BufRead, Write};
use std::path::PathBuf;
use std::time::Duration;
use tictactoe_core::{Difficulty, Match, MoveSelector, Player, Position};
use tracing::{debug, instrument, warn};

const HELP: &str = "\
Commands:
  1-9 or a name (e.g. center, top-left)  play that square
  new                                    abandon this round and start over
  difficulty <easy|harder|expert>        change the computer's level
  stats                                  show the scoreboard
  help                                   show this text
  quit                                   save and leave";

/// One line of user input, interpreted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// Play a square.
    Play(Position),
    /// Abandon the round.
    NewRound,
    /// Switch difficulty.
    SetDifficulty(Difficulty),
    /// Print the scoreboard.
    Stats,
    /// Print the command list.
    Help,
    /// Leave the game.
    Quit,
}

impl Input {
    /// Interprets a line, returning a message for the user on failure.
    pub fn parse(line: &str) -> Result<Self, String> {
        let line = line.trim();
        let mut words = line.split_whitespace();
        let head = words.next().unwrap_or_default().to_ascii_lowercase();

        match head.as_str() {
            "q" | "quit" | "exit" => Ok(Input::Quit),
            "n" | "new" => Ok(Input::NewRound),
            "stats" | "score" => Ok(Input::Stats),
            "h" | "help" | "?" => Ok(Input::Help),
            "difficulty" | "level" => {
                let name = words
                    .next()
                    .ok_or_else(|| "Usage: difficulty <easy|harder|expert>".to_string())?;
                name.parse()
                    .map(Input::SetDifficulty)
                    .map_err(|_| format!("Unknown difficulty {:?}", name))
            }
            _ => line
                .parse::<Position>()
                .map(Input::Play)
                .map_err(|e| e.to_string()),
        }
    }
}

/// Interactive session against the computer.
pub struct Console<I, O, R> {
    input: I,
    output: O,
    selector: MoveSelector<R>,
    profile: Profile,
    profile_path: Option<PathBuf>,
    think_time: Duration,
    game: Match,
}

impl<I: BufRead, O: Write, R: Rng> Console<I, O, R> {
    /// Creates a session; the human always plays X.
    pub fn new(input: I, output: O, profile: Profile, rng: R) -> Self {
        let selector = MoveSelector::new(*profile.difficulty(), rng);
        let game = Match::new(Player::X, *profile.human_first());
        Self {
            input,
            output,
            selector,
            profile,
            profile_path: None,
            think_time: Duration::ZERO,
            game,
        }
    }

    /// Saves the profile to `path` after every change.
    pub fn with_profile_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.profile_path = Some(path.into());
        self
    }

    /// Pauses before each computer move.
    pub fn with_think_time(mut self, think_time: Duration) -> Self {
        self.think_time = think_time;
        self
    }

    /// Current profile, including counters from this session.
    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    /// Plays rounds until the user quits or input ends.
    ///
    /// # Errors
    ///
    /// Fails on I/O errors and when the profile cannot be saved.
    #[instrument(skip(self))]
    pub fn run(&mut self) -> Result<()> {
        writeln!(
            self.output,
            "Tic-tac-toe: you are {}, the computer is {} ({}).",
            self.game.human(),
            self.game.computer(),
            self.selector.difficulty()
        )?;
        writeln!(self.output, "Type `help` for commands.")?;
        self.announce_opener()?;

        loop {
            if self.game.is_computer_turn() {
                self.computer_turn()?;
                continue;
            }

            self.render()?;
            write!(self.output, "Your move ({}): ", self.game.human())?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                debug!("Input closed");
                writeln!(self.output)?;
                break;
            }

            match Input::parse(&line) {
                Ok(Input::Quit) => break,
                Ok(input) => self.handle(input)?,
                Err(message) => writeln!(self.output, "{}", message)?,
            }
        }

        self.save()?;
        writeln!(self.output, "Final score: {}", self.profile.scoreboard())?;
        self.output.flush()?;
        Ok(())
    }

    fn handle(&mut self, input: Input) -> Result<()> {
        match input {
            Input::Play(pos) => match self.game.play_human(pos) {
                Ok(outcome) if outcome.is_over() => self.finish_round()?,
                Ok(_) => {}
                Err(e) => writeln!(self.output, "{}", e)?,
            },
            Input::NewRound => {
                writeln!(self.output, "Round abandoned.")?;
                self.game.restart(*self.profile.human_first());
                self.announce_opener()?;
            }
            Input::SetDifficulty(difficulty) => {
                self.selector.set_difficulty(difficulty);
                self.profile.set_difficulty(difficulty);
                self.save()?;
                writeln!(self.output, "Difficulty set to {}.", difficulty)?;
            }
            Input::Stats => writeln!(self.output, "{}", self.profile.scoreboard())?,
            Input::Help => writeln!(self.output, "{}", HELP)?,
            Input::Quit => {}
        }
        Ok(())
    }

    fn computer_turn(&mut self) -> Result<()> {
        if !self.think_time.is_zero() {
            std::thread::sleep(self.think_time);
        }
        let (pos, outcome) = self
            .game
            .play_computer(&mut self.selector)
            .context("Computer could not move")?;
        writeln!(self.output, "Computer plays {} ({}).", pos, pos.number())?;
        if outcome.is_over() {
            self.finish_round()?;
        }
        Ok(())
    }

    fn finish_round(&mut self) -> Result<()> {
        self.render()?;
        let outcome = self.game.outcome();
        match self.profile.record(outcome, self.game.human()) {
            Some(result) => writeln!(self.output, "{}", result)?,
            None => warn!(%outcome, "Round finished with an ongoing outcome"),
        }
        writeln!(self.output, "{}", self.profile.scoreboard())?;
        self.save()?;

        self.game.restart(*self.profile.human_first());
        writeln!(self.output)?;
        writeln!(self.output, "New round.")?;
        self.announce_opener()
    }

    fn announce_opener(&mut self) -> Result<()> {
        if self.game.is_computer_turn() {
            writeln!(self.output, "Computer goes first.")?;
        } else {
            writeln!(self.output, "You go first.")?;
        }
        Ok(())
    }

    fn render(&mut self) -> Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "{}", self.game.board())?;
        writeln!(self.output)?;
        Ok(())
    }

    fn save(&self) -> Result<()> {
        if let Some(path) = &self.profile_path {
            self.profile
                .save(path)
                .with_context(|| format!("Saving profile to {}", path.display()))?;
        }
        Ok(())
    }
}
