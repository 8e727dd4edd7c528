use std::fmt;

use serde::Serialize;

/// Age range of a conversation relative to the run's reference instant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum AgeBucket {
    #[serde(rename = "last-3-months")]
    LastThreeMonths,
    #[serde(rename = "3-6-months")]
    ThreeToSixMonths,
    #[serde(rename = "6-12-months")]
    SixToTwelveMonths,
    #[serde(rename = "older")]
    Older,
}

impl AgeBucket {
    /// All buckets in emission order (newest first)
    pub const ALL: [AgeBucket; 4] = [
        AgeBucket::LastThreeMonths,
        AgeBucket::ThreeToSixMonths,
        AgeBucket::SixToTwelveMonths,
        AgeBucket::Older,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            AgeBucket::LastThreeMonths => "last-3-months",
            AgeBucket::ThreeToSixMonths => "3-6-months",
            AgeBucket::SixToTwelveMonths => "6-12-months",
            AgeBucket::Older => "older",
        }
    }

    /// Name of the output file for this bucket, e.g. `older.json`
    pub fn file_name(self) -> String {
        format!("{}.json", self.label())
    }

    pub(crate) const fn index(self) -> usize {
        match self {
            AgeBucket::LastThreeMonths => 0,
            AgeBucket::ThreeToSixMonths => 1,
            AgeBucket::SixToTwelveMonths => 2,
            AgeBucket::Older => 3,
        }
    }
}

impl fmt::Display for AgeBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
