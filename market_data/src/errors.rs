use thiserror::Error;

use crate::{models::timeframe::TimeframeError, providers::ProviderError};

/// The unified error type for the `market_data` crate.
#[derive(Debug, Error)]
pub enum Error {
    /// An error originating from a data provider (API error, validation,
    /// empty feed).
    #[error(transparent)]
    Provider(#[from] ProviderError),

    /// An invalid or unparsable timeframe.
    #[error(transparent)]
    Timeframe(#[from] TimeframeError),
}
