//! Signal tally: maps an indicator snapshot onto a three-way recommendation.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::indicators::TechnicalIndicators;

/// The discrete trading recommendation. Derived fresh per request, never
/// persisted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Recommendation {
    Buy,
    Sell,
    Hold,
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Recommendation::Buy => write!(f, "buy"),
            Recommendation::Sell => write!(f, "sell"),
            Recommendation::Hold => write!(f, "hold"),
        }
    }
}

/// Tallies buy/sell votes per indicator family.
///
/// Each family casts at most one vote; an absent indicator casts none
/// (absence is not neutral-as-zero). The moving-average family is the
/// exception in that it always votes when both averages are present, with
/// equality counting as a sell. Ties, including the all-absent 0-0 case,
/// resolve to Hold.
pub fn recommend(indicators: &TechnicalIndicators) -> Recommendation {
    let mut buy_votes = 0;
    let mut sell_votes = 0;

    if let Some(rsi) = indicators.rsi {
        if rsi < 30.0 {
            buy_votes += 1;
        } else if rsi > 70.0 {
            sell_votes += 1;
        }
    }

    // Conjunction: the MACD family votes only when line and histogram agree.
    if let (Some(macd), Some(histogram)) = (indicators.macd.macd, indicators.macd.histogram) {
        if macd > 0.0 && histogram > 0.0 {
            buy_votes += 1;
        } else if macd < 0.0 && histogram < 0.0 {
            sell_votes += 1;
        }
    }

    if let (Some(sma_50), Some(sma_200)) = (indicators.sma_50, indicators.sma_200) {
        if sma_50 > sma_200 {
            buy_votes += 1;
        } else {
            sell_votes += 1;
        }
    }

    if buy_votes > sell_votes {
        Recommendation::Buy
    } else if sell_votes > buy_votes {
        Recommendation::Sell
    } else {
        Recommendation::Hold
    }
}
