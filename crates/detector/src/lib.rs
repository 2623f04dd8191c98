//! Signal-detection engine for the whale radar.
//!
//! Pure per-market math lives in [`window`], [`imbalance`] and
//! [`evaluator`]; [`alert`] turns per-market signal lists into one alert;
//! [`scan`] runs a bounded-parallel pass over the configured markets.

pub mod alert;
pub mod evaluator;
pub mod imbalance;
pub mod scan;
pub mod window;

pub use alert::{compose, format_amount, MarketSignals};
pub use evaluator::{evaluate, Thresholds};
pub use imbalance::book_imbalance;
pub use scan::{ScanReport, Scanner};
pub use window::{aggregate_window, WindowTotals};
