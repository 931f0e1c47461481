pub mod fallback;
pub mod season;

pub use fallback::{FALLBACK_MESSAGE, fallback_handler};
pub use season::{SEASON_NOT_FOUND, get_season_handler, get_seasons_handler};
