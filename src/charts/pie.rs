//! Pie chart geometry
//!
//! Partitions total expenses by category into proportional slices. Angles are
//! measured in degrees clockwise from the 12 o'clock position; slices are
//! placed consecutively in category enumeration order. The drawing layer maps
//! each slice's palette index onto an actual color.

use crate::models::{Category, Money, Transaction};
use crate::services::ledger;

/// Number of colors in the fixed slice palette
pub const PALETTE_SIZE: usize = 7;

/// One proportional slice of the expense distribution
#[derive(Debug, Clone, PartialEq)]
pub struct PieSlice {
    /// The slice's category
    pub category: Category,
    /// Total spend in the category
    pub amount: Money,
    /// Start angle in degrees, clockwise from 12 o'clock
    pub start_angle: f64,
    /// Angular size in degrees
    pub sweep: f64,
    /// Index into the fixed palette
    pub color_index: usize,
}

impl PieSlice {
    /// End angle in degrees
    pub fn end_angle(&self) -> f64 {
        self.start_angle + self.sweep
    }
}

/// Legend entry for one nonzero category
#[derive(Debug, Clone, PartialEq)]
pub struct LegendEntry {
    pub category: Category,
    /// Share of total expenses, in percent (render with one decimal)
    pub percentage: f64,
    /// Index into the fixed palette, matching the slice
    pub color_index: usize,
}

/// Expense distribution ready for drawing
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PieChart {
    /// Total expenses across all categories
    pub total: Money,
    /// Slices for categories with nonzero spend, consecutive from 12 o'clock
    pub slices: Vec<PieSlice>,
    /// One legend entry per slice
    pub legend: Vec<LegendEntry>,
}

impl PieChart {
    /// Build the expense distribution from the transaction collection
    ///
    /// With zero total expenses the chart has no slices and the renderer
    /// shows its "no data" state instead.
    pub fn build(transactions: &[Transaction]) -> Self {
        let by_category = ledger::expenses_by_category(transactions);
        let total: Money = by_category.iter().map(|(_, amount)| *amount).sum();

        if !total.is_positive() {
            return Self::default();
        }

        let mut slices = Vec::new();
        let mut legend = Vec::new();
        let mut angle = 0.0;

        for (index, (category, amount)) in by_category.into_iter().enumerate() {
            if !amount.is_positive() {
                continue;
            }

            let share = amount.as_major_f64() / total.as_major_f64();
            let sweep = share * 360.0;
            let color_index = index % PALETTE_SIZE;

            slices.push(PieSlice {
                category,
                amount,
                start_angle: angle,
                sweep,
                color_index,
            });
            legend.push(LegendEntry {
                category,
                percentage: share * 100.0,
                color_index,
            });

            angle += sweep;
        }

        Self {
            total,
            slices,
            legend,
        }
    }

    /// Whether there is anything to draw
    pub fn has_data(&self) -> bool {
        !self.slices.is_empty()
    }
}
