//! Persisted player profile: difficulty, first mover and scoreboard.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tictactoe_core::{Difficulty, Outcome, Player, RoundResult, Scoreboard};
use tracing::{debug, info, instrument};

/// Profile file used when neither `--profile` nor the environment names one.
pub const DEFAULT_PROFILE_PATH: &str = "tictactoe_profile.toml";

/// Environment variable naming the profile file.
pub const PROFILE_ENV: &str = "TICTACTOE_PROFILE";

/// Settings and counters that survive between runs.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    /// Difficulty of the computer opponent.
    difficulty: Difficulty,

    /// Whether the human opens the next round.
    human_first: bool,

    /// Totals across all recorded rounds.
    scoreboard: Scoreboard,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::default(),
            human_first: true,
            scoreboard: Scoreboard::default(),
        }
    }
}

impl Profile {
    /// Loads the profile at `path`, falling back to defaults when the file
    /// does not exist yet.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ProfileError> {
        let path = path.as_ref();
        if !path.exists() {
            info!("No profile found, using defaults");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .map_err(|e| ProfileError::new(format!("Failed to read profile: {}", e)))?;
        let profile: Self = toml::from_str(&content)
            .map_err(|e| ProfileError::new(format!("Failed to parse profile: {}", e)))?;

        debug!(difficulty = %profile.difficulty, rounds = profile.scoreboard.total(), "Profile loaded");
        Ok(profile)
    }

    /// Writes the profile to `path`, creating parent directories.
    #[instrument(skip(self, path), fields(path = %path.as_ref().display()))]
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ProfileError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| {
                ProfileError::new(format!(
                    "Failed to create directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| ProfileError::new(format!("Failed to serialize profile: {}", e)))?;
        std::fs::write(path, content)
            .map_err(|e| ProfileError::new(format!("Failed to write profile: {}", e)))?;

        debug!("Profile saved");
        Ok(())
    }

    /// Changes the stored difficulty.
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
    }

    /// Counts a finished round and hands the opening move to the other side.
    ///
    /// Ongoing outcomes change nothing.
    #[instrument(skip(self))]
    pub fn record(&mut self, outcome: Outcome, human: Player) -> Option<RoundResult> {
        let result = self.scoreboard.record(outcome, human)?;
        self.human_first = !self.human_first;
        info!(%result, scoreboard = %self.scoreboard, "Round recorded");
        Some(result)
    }

    /// Zeroes the scoreboard, keeping the settings.
    pub fn clear_scores(&mut self) {
        self.scoreboard.clear();
    }
}

/// Picks the profile path: explicit argument, then [`PROFILE_ENV`], then
/// [`DEFAULT_PROFILE_PATH`].
#[instrument]
pub fn resolve_profile_path(explicit: Option<PathBuf>) -> PathBuf {
    explicit
        .or_else(|| std::env::var_os(PROFILE_ENV).map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_PROFILE_PATH))
}

/// Profile load/save error.
#[derive(Debug, Clone, Display, Error)]
#[display("Profile error: {} at {}:{}", message, file, line)]
pub struct ProfileError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ProfileError {
    /// Creates a new profile error with caller location tracking.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
