use chrono::Datelike;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

static YEAR_RANGE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-9]{1,9})-([0-9]{1,9})$").expect("valid year range pattern")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PopulationSample {
    pub year: i32,
    pub value: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PopulationReport {
    pub mean: u64,
    pub values: Vec<PopulationSample>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PopulationData {
    #[serde(default, rename = "populationCounts")]
    pub population_counts: Vec<PopulationSample>,
}

/// Body of the cities provider's `countries/population` response.
#[derive(Debug, Clone, Deserialize)]
pub struct PopulationResponse {
    #[serde(default)]
    pub data: PopulationData,
}

/// Inclusive year range. `start > end` is allowed and matches nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearRange {
    pub start: i32,
    pub end: i32,
}

impl YearRange {
    pub fn new(start: i32, end: i32) -> Self {
        Self { start, end }
    }

    /// `[0, current calendar year]`, evaluated on every call.
    pub fn up_to_current_year() -> Self {
        Self::new(0, chrono::Local::now().year())
    }

    /// Parses the `XXXX-YYYY` query syntax.
    pub fn parse(raw: &str) -> Option<Self> {
        let caps = YEAR_RANGE_PATTERN.captures(raw)?;
        let start = caps[1].parse().ok()?;
        let end = caps[2].parse().ok()?;
        Some(Self::new(start, end))
    }

    pub fn contains(&self, year: i32) -> bool {
        self.start <= year && year <= self.end
    }
}
