use market_data::models::timeframe::Timeframe;
use thiserror::Error;

/// The error taxonomy of the analysis core.
///
/// Indicator-level undefined results (insufficient window, 0/0) never show up
/// here: they are recovered locally as absent (`None`) snapshot fields.
/// These variants are the structural failures that abort report generation.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// The (possibly resampled) series holds no bars at all.
    #[error("series is empty")]
    EmptySeries,

    /// The series is too short for report assembly (e.g., no previous close
    /// to compute a percent change against).
    #[error("insufficient data: need at least {needed} bars, got {got}")]
    InsufficientData { needed: usize, got: usize },

    /// A computation whose result is mathematically undefined and cannot be
    /// represented as an absent field (zero-division in percent change).
    #[error("undefined arithmetic: {0}")]
    UndefinedArithmetic(&'static str),

    /// The requested resampling target cannot be produced from the supplied
    /// series granularity. Never silently downgraded.
    #[error("unsupported timeframe: cannot resample {from} bars to {to}")]
    UnsupportedTimeframe { from: Timeframe, to: Timeframe },
}
