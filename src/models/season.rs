use serde::{Deserialize, Serialize};

/// One season of the show. `season` is the lookup key used by `/seasons/{season}`.
///
/// Documents read back from the store also carry an `_id`, which is ignored here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Season {
    pub season: i64,
    pub released: i64,
    pub number_of_contestants: i64,
    pub winner: String,
    pub miss_congeniality: String,
}
