//! Technical indicators over daily bars

pub mod rsi;
pub mod volume;

pub use rsi::{latest_rsi, rsi_series, RSI_PERIOD};
pub use volume::{is_volume_spike, VOLUME_SPIKE_RATIO};
