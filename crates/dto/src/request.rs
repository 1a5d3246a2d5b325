use serde::Deserialize;
use serde::Serialize;

/// Raw fields posted by the HTML form. Every field is free text; parsing
/// happens downstream so that malformed numbers surface as 400s.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct SettleForm {
    pub start_blinds: String,
    pub end_blinds: String,
    #[serde(default)]
    pub player_names: String,
    #[serde(default)]
    pub big_blind: String,
}

/// Structured JSON request for programmatic clients.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct SettleBody {
    pub start: Vec<f64>,
    pub end: Vec<f64>,
    #[serde(default)]
    pub names: Option<Vec<String>>,
    #[serde(default)]
    pub unit: Option<f64>,
    #[serde(default)]
    pub priority: Option<String>,
}
