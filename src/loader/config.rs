use serde::Deserialize;
use smol_str::SmolStr;

/// Configuration for [`ColumnarLoader`](super::ColumnarLoader) and
/// [`load_json_row`](super::load_json_row).
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LoaderConfig {
    /// Written to `Symbol` on every loaded record when non-empty.
    pub symbol: SmolStr,
    /// Cell separator for columnar rows.
    pub delimiter: char,
    /// Header of the column parsed into `Time`.
    pub time_column: SmolStr,
    /// Header of the column that also feeds `Value`.
    ///
    /// Providers disagree on naming; most daily feeds call it `Close`.
    pub value_column: SmolStr,
    /// `chrono` formats tried after RFC 3339. Date-only formats resolve to
    /// midnight UTC.
    pub time_formats: Vec<String>,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            symbol: SmolStr::default(),
            delimiter: ',',
            time_column: SmolStr::new_static("Date"),
            value_column: SmolStr::new_static("Close"),
            time_formats: vec!["%Y-%m-%d %H:%M:%S".to_string(), "%Y-%m-%d".to_string()],
        }
    }
}

impl LoaderConfig {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn with_symbol(mut self, symbol: impl Into<SmolStr>) -> Self {
        self.symbol = symbol.into();
        self
    }
}
