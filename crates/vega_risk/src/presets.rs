//! Preset historical stress scenarios.
//!
//! Hand-curated daily `(spot return, VIX close)` records for well-known
//! volatility episodes. These are static reference data, versioned with the
//! crate; the replay engine treats them like any other [`ScenarioPath`].

use crate::replay::{ScenarioDay, ScenarioPath};

/// Shipped historical crisis scenarios.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum HistoricalScenario {
    /// COVID-19 crash, February-March 2020
    Covid2020,
    /// "Volmageddon" short-vol unwind, February 2018
    Volmageddon2018,
    /// Post-Lehman cascade, September-October 2008
    Lehman2008,
    /// China devaluation / flash correction, August 2015
    ChinaDeval2015,
}

impl HistoricalScenario {
    /// All scenarios in display order.
    pub fn all() -> [Self; 4] {
        [
            Self::Covid2020,
            Self::Volmageddon2018,
            Self::Lehman2008,
            Self::ChinaDeval2015,
        ]
    }

    /// Display name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Covid2020 => "COVID-19 Crash",
            Self::Volmageddon2018 => "Volmageddon",
            Self::Lehman2008 => "Lehman Aftermath",
            Self::ChinaDeval2015 => "China Devaluation",
        }
    }

    /// Human-readable date range.
    pub fn date_range(&self) -> &'static str {
        match self {
            Self::Covid2020 => "2020-02-21 to 2020-03-24",
            Self::Volmageddon2018 => "2018-02-01 to 2018-02-15",
            Self::Lehman2008 => "2008-09-29 to 2008-10-16",
            Self::ChinaDeval2015 => "2015-08-18 to 2015-08-28",
        }
    }

    /// One-line description of the episode.
    pub fn description(&self) -> &'static str {
        match self {
            Self::Covid2020 => {
                "Fastest 30% drawdown on record; VIX from 17 to the low 80s in a month"
            }
            Self::Volmageddon2018 => {
                "Short-vol product unwind; VIX more than doubled in a single session"
            }
            Self::Lehman2008 => "Post-Lehman liquidation cascade with repeated limit-down days",
            Self::ChinaDeval2015 => "CNY devaluation spillover and the Aug 24 flash correction",
        }
    }

    /// Suggested display colour (hex).
    pub fn color_hint(&self) -> &'static str {
        match self {
            Self::Covid2020 => "#ef4444",
            Self::Volmageddon2018 => "#f59e0b",
            Self::Lehman2008 => "#8b5cf6",
            Self::ChinaDeval2015 => "#10b981",
        }
    }

    /// The daily `(spot return, vix close)` record.
    fn raw_days(&self) -> &'static [(f64, f64)] {
        match self {
            Self::Covid2020 => &[
                (-0.0105, 17.08),
                (-0.0335, 25.03),
                (-0.0303, 27.85),
                (-0.0038, 27.56),
                (-0.0442, 39.16),
                (-0.0082, 40.11),
                (0.0460, 33.42),
                (-0.0281, 36.82),
                (0.0422, 31.99),
                (-0.0339, 39.62),
                (-0.0171, 41.94),
                (-0.0760, 54.46),
                (0.0494, 47.30),
                (-0.0489, 53.90),
                (-0.0951, 75.47),
                (0.0929, 57.83),
                (-0.1198, 82.69),
                (0.0600, 75.91),
                (-0.0518, 76.45),
                (0.0047, 72.00),
                (-0.0434, 66.04),
                (-0.0293, 61.59),
                (0.0938, 61.67),
            ],
            Self::Volmageddon2018 => &[
                (-0.0006, 13.47),
                (-0.0212, 17.31),
                (-0.0410, 37.32),
                (0.0174, 29.98),
                (-0.0050, 27.73),
                (-0.0375, 33.46),
                (0.0149, 29.06),
                (0.0139, 25.61),
                (0.0026, 24.97),
                (0.0134, 19.26),
                (0.0121, 19.13),
            ],
            Self::Lehman2008 => &[
                (-0.0879, 46.72),
                (0.0542, 39.39),
                (-0.0045, 39.81),
                (-0.0403, 45.26),
                (-0.0135, 45.14),
                (-0.0385, 52.05),
                (-0.0574, 53.68),
                (-0.0113, 57.53),
                (-0.0762, 63.92),
                (-0.0118, 69.95),
                (0.1158, 54.99),
                (-0.0053, 55.13),
                (-0.0903, 69.25),
                (0.0425, 67.61),
            ],
            Self::ChinaDeval2015 => &[
                (-0.0026, 13.79),
                (-0.0083, 15.25),
                (-0.0211, 19.14),
                (-0.0319, 28.03),
                (-0.0394, 40.74),
                (-0.0135, 36.02),
                (0.0390, 30.32),
                (0.0243, 26.10),
                (0.0006, 26.05),
            ],
        }
    }

    /// Build the scenario path for the replay engine.
    pub fn path(&self) -> ScenarioPath {
        ScenarioPath {
            name: self.name().to_string(),
            date_range: self.date_range().to_string(),
            description: self.description().to_string(),
            color_hint: self.color_hint().to_string(),
            days: self
                .raw_days()
                .iter()
                .enumerate()
                .map(|(i, &(spot_return, vix))| ScenarioDay {
                    day: i as u32,
                    spot_return,
                    vix,
                })
                .collect(),
        }
    }

    /// Build every shipped scenario path, in display order.
    pub fn all_paths() -> Vec<ScenarioPath> {
        Self::all().iter().map(|s| s.path()).collect()
    }

    /// Look up a scenario by a case-insensitive key (e.g. "covid2020").
    pub fn from_key(key: &str) -> Option<Self> {
        match key.to_lowercase().replace(['-', '_', ' '], "").as_str() {
            "covid2020" | "covid" => Some(Self::Covid2020),
            "volmageddon2018" | "volmageddon" => Some(Self::Volmageddon2018),
            "lehman2008" | "lehman" | "gfc" => Some(Self::Lehman2008),
            "chinadeval2015" | "china2015" | "chinadeval" => Some(Self::ChinaDeval2015),
            _ => None,
        }
    }
}
