use std::fmt;

use serde::Deserialize;

/// A fluXis chart as stored in a `.fsc` file.
///
/// Every field is optional; absent values are replaced with defaults when
/// the beatmap is built.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SourceChart {
    #[serde(default)]
    pub metadata: ChartMetadata,
    pub audio_file: Option<String>,
    pub background_file: Option<String>,
    pub accuracy_difficulty: Option<serde_json::Number>,
    pub circle_size: Option<serde_json::Number>,
    pub overall_difficulty: Option<serde_json::Number>,
    pub approach_rate: Option<serde_json::Number>,
    #[serde(default)]
    pub timing_points: Vec<TimingPoint>,
    #[serde(default)]
    pub hit_objects: Vec<HitObject>,
}

impl SourceChart {
    /// Chart title, if the metadata has one.
    pub fn title(&self) -> Option<String> {
        self.metadata.title.as_ref().map(ToString::to_string)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ChartMetadata {
    pub title: Option<FieldValue>,
    pub title_unicode: Option<FieldValue>,
    pub artist: Option<FieldValue>,
    pub artist_unicode: Option<FieldValue>,
    pub mapper: Option<FieldValue>,
    pub difficulty: Option<FieldValue>,
    pub source: Option<FieldValue>,
    pub tags: Option<FieldValue>,
    pub preview_time: Option<FieldValue>,
}

/// A metadata value that may be written as either a string or a number.
///
/// Numbers keep the spelling `serde_json` gives them, so `4` stays `4` and
/// `4.0` stays `4.0`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    Number(serde_json::Number),
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => f.write_str(s),
            Self::Number(n) => write!(f, "{}", n),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TimingPoint {
    pub time: f64,
    pub bpm: Option<f64>,
    pub signature: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct HitObject {
    /// 1-based lane index.
    pub lane: i64,
    pub time: f64,
    pub holdtime: Option<f64>,
}
