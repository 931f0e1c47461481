use crate::{errors::AppError, models::season::Season};

const SEASONS_JSON: &str = include_str!("../assets/seasons.json");

/// Parses the bundled dataset. Order in the file is the order served by `/seasons`.
pub fn load_seasons() -> Result<Vec<Season>, AppError> {
    parse_seasons(SEASONS_JSON)
}

pub fn parse_seasons(json: &str) -> Result<Vec<Season>, AppError> {
    Ok(serde_json::from_str(json)?)
}

/// First record whose `season` equals `id`. Duplicates are legal; later ones are shadowed.
pub fn find_season(seasons: &[Season], id: i64) -> Option<&Season> {
    seasons.iter().find(|s| s.season == id)
}
