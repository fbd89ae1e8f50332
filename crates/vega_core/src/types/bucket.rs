//! Expiry tenor buckets.
//!
//! Maturity buckets used by the P&L breakdown. The order of the variants is
//! the display order and is load-bearing; classification walks the day
//! thresholds first-match-wins.

use super::time::{days_to_expiry, Date};

/// Maturity bucket for an expiry, relative to a reference date.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ExpiryBucket {
    /// Expired or expiring today (days to expiry <= 0)
    Expired,
    /// Up to 30 days
    ZeroToOneMonth,
    /// 31 to 90 days
    OneToThreeMonths,
    /// 91 to 180 days
    ThreeToSixMonths,
    /// 181 to 365 days
    SixToTwelveMonths,
    /// 366 to 730 days
    OneToTwoYears,
    /// Beyond 730 days
    BeyondTwoYears,
}

impl ExpiryBucket {
    /// All buckets in display order.
    pub fn all() -> [Self; 7] {
        [
            Self::Expired,
            Self::ZeroToOneMonth,
            Self::OneToThreeMonths,
            Self::ThreeToSixMonths,
            Self::SixToTwelveMonths,
            Self::OneToTwoYears,
            Self::BeyondTwoYears,
        ]
    }

    /// Classify a day count, first match wins.
    pub fn classify(days: i64) -> Self {
        match days {
            d if d <= 0 => Self::Expired,
            d if d <= 30 => Self::ZeroToOneMonth,
            d if d <= 90 => Self::OneToThreeMonths,
            d if d <= 180 => Self::ThreeToSixMonths,
            d if d <= 365 => Self::SixToTwelveMonths,
            d if d <= 730 => Self::OneToTwoYears,
            _ => Self::BeyondTwoYears,
        }
    }

    /// Classify an expiry date against a reference date.
    pub fn classify_date(expiry: Date, reference: Date) -> Self {
        Self::classify(days_to_expiry(reference, expiry))
    }

    /// Display label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Expired => "Expired",
            Self::ZeroToOneMonth => "0-1M",
            Self::OneToThreeMonths => "1-3M",
            Self::ThreeToSixMonths => "3-6M",
            Self::SixToTwelveMonths => "6-12M",
            Self::OneToTwoYears => "1-2Y",
            Self::BeyondTwoYears => "2Y+",
        }
    }
}

impl std::fmt::Display for ExpiryBucket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
