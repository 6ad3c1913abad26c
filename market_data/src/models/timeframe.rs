//! Typed bar granularity for requests, series, and resampling targets.
//!
//! A [`Timeframe`] pairs a non-zero amount with a [`TimeframeUnit`]. The
//! representable set is closed: the nine intraday minute steps supported by
//! chart consumers (`1m,3m,5m,10m,15m,30m,60m,120m,240m`) plus `daily`,
//! `weekly`, and `monthly`. [`Display`]/[`FromStr`] round-trip through those
//! spellings, and serde uses the same string form on the wire.
//!
//! [`Display`]: fmt::Display

use std::{fmt, num::NonZeroU32, str::FromStr};

use chrono::Duration;
use serde::{Deserialize, Deserializer, Serialize, Serializer, de};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TimeframeError {
    #[error("Invalid amount for {unit:?}: {message}")]
    InvalidAmount {
        unit: TimeframeUnit,
        message: String,
    },

    #[error("Invalid timeframe: {message}")]
    InvalidInput { message: String },
}

/// Timeframe granularity (calendar-aware where needed, always UTC).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeframeUnit {
    /// UTC minute
    Minute,
    /// UTC day
    Day,
    /// Monday-based calendar week, UTC
    Week,
    /// Calendar month, UTC
    Month,
}

/// A timeframe = amount × unit (e.g., 15-Minute, 1-Week).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Timeframe {
    amount: NonZeroU32,
    unit: TimeframeUnit,
}

/// Minute amounts accepted for intraday bars.
const MINUTE_AMOUNTS: [u32; 9] = [1, 3, 5, 10, 15, 30, 60, 120, 240];

impl Timeframe {
    /// Creates a validated timeframe.
    pub fn new(amount: u32, unit: TimeframeUnit) -> Result<Self, TimeframeError> {
        match unit {
            TimeframeUnit::Minute if !MINUTE_AMOUNTS.contains(&amount) => {
                Err(TimeframeError::InvalidAmount {
                    unit,
                    message: format!("Minute units accept amounts {MINUTE_AMOUNTS:?}, got {amount}"),
                })
            }
            TimeframeUnit::Day | TimeframeUnit::Week | TimeframeUnit::Month if amount != 1 => {
                Err(TimeframeError::InvalidAmount {
                    unit,
                    message: format!("Day, Week and Month units only accept amount 1, got {amount}"),
                })
            }
            _ => Ok(Self {
                // Validation above rejects zero for every unit.
                amount: NonZeroU32::new(amount).ok_or_else(|| TimeframeError::InvalidAmount {
                    unit,
                    message: "amount must be > 0".to_string(),
                })?,
                unit,
            }),
        }
    }

    /// Intraday bars of `amount` minutes.
    pub fn minutes(amount: u32) -> Result<Self, TimeframeError> {
        Self::new(amount, TimeframeUnit::Minute)
    }

    /// One-day bars.
    pub const fn daily() -> Self {
        Self {
            amount: NonZeroU32::MIN,
            unit: TimeframeUnit::Day,
        }
    }

    /// One-week bars (Monday-based).
    pub const fn weekly() -> Self {
        Self {
            amount: NonZeroU32::MIN,
            unit: TimeframeUnit::Week,
        }
    }

    /// One-month calendar bars.
    pub const fn monthly() -> Self {
        Self {
            amount: NonZeroU32::MIN,
            unit: TimeframeUnit::Month,
        }
    }

    pub const fn amount(&self) -> NonZeroU32 {
        self.amount
    }

    pub const fn unit(&self) -> TimeframeUnit {
        self.unit
    }

    /// True for minute-granularity bars.
    pub const fn is_intraday(&self) -> bool {
        matches!(self.unit, TimeframeUnit::Minute)
    }

    /// History span the request layer should fetch so downstream indicators
    /// and week/month aggregation have enough bars to work with: one year of
    /// daily bars, roughly three years for weekly, five for monthly, and the
    /// vendor intraday retention window (60 days) for minute bars.
    pub fn lookback(&self) -> Duration {
        match self.unit {
            TimeframeUnit::Minute => Duration::days(60),
            TimeframeUnit::Day => Duration::days(365),
            TimeframeUnit::Week => Duration::days(3 * 365),
            TimeframeUnit::Month => Duration::days(5 * 365),
        }
    }
}

impl fmt::Display for Timeframe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.unit {
            TimeframeUnit::Minute => write!(f, "{}m", self.amount.get()),
            TimeframeUnit::Day => write!(f, "daily"),
            TimeframeUnit::Week => write!(f, "weekly"),
            TimeframeUnit::Month => write!(f, "monthly"),
        }
    }
}

impl FromStr for Timeframe {
    type Err = TimeframeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "daily" => Ok(Self::daily()),
            "weekly" => Ok(Self::weekly()),
            "monthly" => Ok(Self::monthly()),
            _ => {
                let digits = s.strip_suffix('m').ok_or_else(|| TimeframeError::InvalidInput {
                    message: format!("unknown timeframe: {s}"),
                })?;
                let amount: u32 = digits.parse().map_err(|_| TimeframeError::InvalidInput {
                    message: format!("unknown timeframe: {s}"),
                })?;
                Self::minutes(amount)
            }
        }
    }
}

impl Serialize for Timeframe {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Timeframe {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}
