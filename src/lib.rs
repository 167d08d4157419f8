pub mod game;

pub use game::core::{App, ConfigError, GameConfig};
pub use game::run;
