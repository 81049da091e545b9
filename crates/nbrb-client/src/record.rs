use serde::{Deserialize, Serialize};

/// One exchange-rate snapshot as returned by the provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RateRecord {
    #[serde(rename = "Cur_ID")]
    pub id: i64,
    /// ISO date-time string, e.g. `2024-05-02T00:00:00`.
    #[serde(rename = "Date")]
    pub date: String,
    #[serde(rename = "Cur_Abbreviation")]
    pub abbreviation: String,
    /// Number of currency units the rate refers to.
    #[serde(rename = "Cur_Scale")]
    pub scale: i64,
    #[serde(rename = "Cur_Name")]
    pub name: String,
    #[serde(rename = "Cur_OfficialRate")]
    pub official_rate: f64,
}

impl RateRecord {
    /// Official rate as shortest round-trip decimal, always with a fractional part (`3.0`, `3.05`).
    pub fn formatted_rate(&self) -> String {
        serde_json::Number::from_f64(self.official_rate)
            .map(|n| n.to_string())
            .unwrap_or_else(|| self.official_rate.to_string())
    }
}
