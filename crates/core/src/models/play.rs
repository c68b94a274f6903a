#![allow(missing_docs)]

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One recorded play session. References game and team by id with no
/// integrity enforcement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Play {
    pub id: String,
    pub game_id: String,
    pub team_id: String,
    /// Calendar day of the session (YYYY-MM-DD on the wire).
    pub date: NaiveDate,
    /// Table rating for the session, 0..=5.
    pub rating: u8,
}
