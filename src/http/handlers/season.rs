use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::{
    errors::AppError,
    models::{Season, dataset::find_season},
    state::AppState,
};

pub const SEASON_NOT_FOUND: &str = "no season found with that id";

pub async fn get_seasons_handler(State(state): State<AppState>) -> Json<Arc<Vec<Season>>> {
    Json(state.seasons)
}

pub async fn get_season_handler(
    Path(raw_id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<Season>, (StatusCode, String)> {
    coerce_season_id(&raw_id)
        .and_then(|id| find_season(&state.seasons, id))
        .cloned()
        .map(Json)
        .ok_or_else(|| AppError::NotFound(SEASON_NOT_FOUND.into()).to_response())
}

/// Reads a path segment as a season number.
///
/// Accepts what a loose numeric cast would: surrounding whitespace, a fractional part of
/// zero, exponent notation, unsigned `0x`/`0o`/`0b` literals. Anything that isn't an
/// integral number yields `None`.
pub fn coerce_season_id(raw: &str) -> Option<i64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Some(id) = parse_prefixed(trimmed) {
        return id;
    }

    if let Ok(id) = trimmed.parse::<i64>() {
        return Some(id);
    }

    let value = trimmed.parse::<f64>().ok()?;
    if !value.is_finite() || value.fract() != 0.0 {
        return None;
    }
    if value < i64::MIN as f64 || value >= i64::MAX as f64 {
        return None;
    }

    Some(value as i64)
}

// `Some(None)` means a radix prefix was present but the digits were invalid.
fn parse_prefixed(s: &str) -> Option<Option<i64>> {
    let prefix = s.get(..2)?;
    let radix = match prefix.to_ascii_lowercase().as_str() {
        "0x" => 16,
        "0o" => 8,
        "0b" => 2,
        _ => return None,
    };

    let digits = &s[2..];
    if digits.is_empty() || digits.starts_with(['+', '-']) {
        return Some(None);
    }

    Some(i64::from_str_radix(digits, radix).ok())
}
