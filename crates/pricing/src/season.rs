use core::str::FromStr;

use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};

use plantopedia_core::DomainError;

/// Calendar season.
///
/// Used both as a catalog item's peak-demand period and as the viewing
/// context for pricing. The set is closed and cyclic; there is no total
/// order between seasons.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Season {
    Spring,
    Summer,
    Fall,
    Winter,
}

impl Season {
    /// All seasons, in calendar order starting at spring.
    pub const ALL: [Season; 4] = [Season::Spring, Season::Summer, Season::Fall, Season::Winter];

    pub fn as_str(&self) -> &'static str {
        match self {
            Season::Spring => "spring",
            Season::Summer => "summer",
            Season::Fall => "fall",
            Season::Winter => "winter",
        }
    }

    /// Derive the season for a given instant using fixed month boundaries:
    /// Mar–May spring, Jun–Aug summer, Sep–Nov fall, Dec–Feb winter.
    ///
    /// The reference instant is an explicit parameter (never an ambient
    /// clock read) so callers and tests can supply arbitrary dates.
    pub fn for_date(at: DateTime<Utc>) -> Season {
        match at.month() {
            3..=5 => Season::Spring,
            6..=8 => Season::Summer,
            9..=11 => Season::Fall,
            _ => Season::Winter,
        }
    }
}

impl core::fmt::Display for Season {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Season {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "spring" => Ok(Season::Spring),
            "summer" => Ok(Season::Summer),
            "fall" => Ok(Season::Fall),
            "winter" => Ok(Season::Winter),
            other => Err(DomainError::invalid_enum(format!(
                "season must be one of: spring, summer, fall, winter (got '{other}')"
            ))),
        }
    }
}
