pub mod bar;
pub mod bar_series;
pub mod market;
pub mod request_params;
pub mod timeframe;
