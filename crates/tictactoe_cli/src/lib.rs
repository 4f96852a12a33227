//! Terminal tic-tac-toe against the computer.
//!
//! - **Profile**: difficulty, first mover and scoreboard persisted as TOML
//! - **Console**: the interactive line-based game loop
//! - **Suggest**: one-shot move suggestions for a given board

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod console;
mod profile;
mod suggest;

pub use console::{Console, Input};
pub use profile::{
    DEFAULT_PROFILE_PATH, PROFILE_ENV, Profile, ProfileError, resolve_profile_path,
};
pub use suggest::{Suggestion, side_to_move, suggest};
