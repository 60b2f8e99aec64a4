pub mod game_mode;
pub mod settings;

pub use game_mode::GameMode;
pub use settings::{ApiSettings, TaggerConfig};
