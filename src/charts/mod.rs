//! Chart geometry
//!
//! Pure render models for the two summary charts. These modules compute
//! slice angles, scales, gridlines, and legends from the transaction
//! collection; actually putting pixels (or terminal cells) on screen is the
//! job of whatever drawing surface consumes them.

pub mod line;
pub mod pie;

pub use line::{LineChart, TrendPoint, GRID_DIVISIONS, TREND_WINDOW_MONTHS};
pub use pie::{LegendEntry, PieChart, PieSlice, PALETTE_SIZE};
