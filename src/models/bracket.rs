//! Age and seniority brackets used to histogram the roster.

use serde::{Deserialize, Serialize};

/// A labelled age range.
///
/// Ages below 20 fall into [`AgeBracket::Twenties`]; the lowest bracket has
/// no lower edge.
///
/// # Example
///
/// ```
/// use promotion_stats::models::AgeBracket;
///
/// assert_eq!(AgeBracket::for_age(29), AgeBracket::Twenties);
/// assert_eq!(AgeBracket::for_age(30).label(), "30-39");
/// assert_eq!(AgeBracket::for_age(71).label(), "60+");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum AgeBracket {
    /// Up to 29 years.
    #[serde(rename = "20-29")]
    Twenties,
    /// 30 to 39 years.
    #[serde(rename = "30-39")]
    Thirties,
    /// 40 to 49 years.
    #[serde(rename = "40-49")]
    Forties,
    /// 50 to 59 years.
    #[serde(rename = "50-59")]
    Fifties,
    /// 60 years and over.
    #[serde(rename = "60+")]
    SixtyPlus,
}

impl AgeBracket {
    /// Returns the bracket containing `age_years`.
    pub fn for_age(age_years: u32) -> Self {
        match age_years {
            0..=29 => Self::Twenties,
            30..=39 => Self::Thirties,
            40..=49 => Self::Forties,
            50..=59 => Self::Fifties,
            _ => Self::SixtyPlus,
        }
    }

    /// Returns the display label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Twenties => "20-29",
            Self::Thirties => "30-39",
            Self::Forties => "40-49",
            Self::Fifties => "50-59",
            Self::SixtyPlus => "60+",
        }
    }
}

/// A labelled range of years since first appointment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SeniorityBracket {
    /// 0 to 4 years.
    #[serde(rename = "0-4")]
    UnderFive,
    /// 5 to 9 years.
    #[serde(rename = "5-9")]
    FiveToNine,
    /// 10 to 14 years.
    #[serde(rename = "10-14")]
    TenToFourteen,
    /// 15 to 19 years.
    #[serde(rename = "15-19")]
    FifteenToNineteen,
    /// 20 years and over.
    #[serde(rename = "20+")]
    TwentyPlus,
}

impl SeniorityBracket {
    /// Returns the bracket containing `seniority_years`.
    pub fn for_seniority(seniority_years: u32) -> Self {
        match seniority_years {
            0..=4 => Self::UnderFive,
            5..=9 => Self::FiveToNine,
            10..=14 => Self::TenToFourteen,
            15..=19 => Self::FifteenToNineteen,
            _ => Self::TwentyPlus,
        }
    }

    /// Returns the display label.
    pub fn label(self) -> &'static str {
        match self {
            Self::UnderFive => "0-4",
            Self::FiveToNine => "5-9",
            Self::TenToFourteen => "10-14",
            Self::FifteenToNineteen => "15-19",
            Self::TwentyPlus => "20+",
        }
    }
}
