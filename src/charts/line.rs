//! Monthly trend geometry
//!
//! Plots income and expenses per month over a trailing window. The vertical
//! scale maps the largest value in the window to the top of the plot area,
//! rounded up to the nearest 1000 whole currency units, with evenly spaced
//! gridline levels down to zero.

use crate::models::{Money, Transaction};
use crate::services::ledger::{self, Month};

/// Maximum number of months shown
pub const TREND_WINDOW_MONTHS: usize = 6;

/// Number of equal vertical divisions between zero and the scale maximum
pub const GRID_DIVISIONS: usize = 5;

/// One plotted month
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrendPoint {
    pub month: Month,
    pub income: Money,
    pub expenses: Money,
}

/// Monthly income/expense trend ready for drawing
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LineChart {
    /// Up to [`TREND_WINDOW_MONTHS`] most recent months with data, ascending
    pub points: Vec<TrendPoint>,
    /// Top of the vertical scale
    pub y_max: Money,
}

impl LineChart {
    /// Build the trend from the transaction collection
    ///
    /// With no transaction data at all the chart has no points and the
    /// renderer shows its "no data" state instead.
    pub fn build(transactions: &[Transaction]) -> Self {
        let series = ledger::monthly_series(transactions);
        if series.is_empty() {
            return Self::default();
        }

        let start = series.len().saturating_sub(TREND_WINDOW_MONTHS);
        let points: Vec<TrendPoint> = series[start..]
            .iter()
            .map(|s| TrendPoint {
                month: s.month,
                income: s.income,
                expenses: s.expenses,
            })
            .collect();

        let peak = points
            .iter()
            .flat_map(|p| [p.income, p.expenses])
            .max()
            .unwrap_or_default();

        Self {
            points,
            y_max: round_up_to_thousand(peak),
        }
    }

    /// Whether there is anything to draw
    pub fn has_data(&self) -> bool {
        !self.points.is_empty()
    }

    /// Gridline level values from the top of the scale down to zero
    pub fn grid_levels(&self) -> Vec<Money> {
        let step = self.y_max.cents() / GRID_DIVISIONS as i64;
        (0..=GRID_DIVISIONS)
            .map(|i| Money::from_cents(self.y_max.cents() - step * i as i64))
            .collect()
    }

    /// Abbreviated month labels for the horizontal axis
    pub fn month_labels(&self) -> Vec<&'static str> {
        self.points.iter().map(|p| p.month.label()).collect()
    }
}

/// Round up to the nearest 1000 whole currency units, with a floor of 1000
/// so an all-zero window still gets a usable scale.
fn round_up_to_thousand(amount: Money) -> Money {
    let units = (amount.cents().max(0) + 99) / 100;
    let thousands = (units + 999) / 1000;
    Money::from_major(thousands.max(1) * 1000)
}
