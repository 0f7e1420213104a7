//! Stock Direction Predictor
//!
//! Heuristic next-session direction for a stock ticker from news-headline
//! sentiment, a volume spike flag and RSI extremity. Informational use only.

pub mod client;
pub mod config;
pub mod error;
pub mod indicator;
pub mod market;
pub mod pipeline;
pub mod render;
pub mod sentiment;
pub mod strategy;
pub mod types;
pub mod validator;

#[cfg(test)]
mod error_tests;

pub use pipeline::{Pipeline, Report};
