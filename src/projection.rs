//! Financial projection: spend versus revenue for one production run.

use crate::config::{
    DEFAULT_PROJECTION_MATERIALS, DEFAULT_PROJECTION_OPERATIONS, DEFAULT_PROJECTION_SALES,
};
use serde::{Deserialize, Serialize};

/// Spend and revenue figures set by the user.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FinanceProjection {
    /// Raw material spend.
    pub materials: f64,
    /// Operational spend (labour, power, machine time).
    pub operations: f64,
    /// Sales revenue.
    pub sales: f64,
}

impl Default for FinanceProjection {
    fn default() -> Self {
        Self {
            materials: DEFAULT_PROJECTION_MATERIALS,
            operations: DEFAULT_PROJECTION_OPERATIONS,
            sales: DEFAULT_PROJECTION_SALES,
        }
    }
}

/// A labelled bar of the projection chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ChartBar {
    pub label: &'static str,
    pub value: f64,
}

impl FinanceProjection {
    pub fn new(materials: f64, operations: f64, sales: f64) -> Self {
        Self {
            materials,
            operations,
            sales,
        }
    }

    /// Capital tied up in the run.
    pub fn capital(&self) -> f64 {
        self.materials + self.operations
    }

    /// Revenue minus capital. Negative for a loss.
    pub fn profit(&self) -> f64 {
        self.sales - self.capital()
    }

    /// Profit as a percentage of sales, 0 when there are no sales.
    pub fn margin_percent(&self) -> f64 {
        if self.sales > 0.0 {
            self.profit() / self.sales * 100.0
        } else {
            0.0
        }
    }

    /// Chart bars; a loss is drawn as a zero profit bar.
    pub fn chart_bars(&self) -> [ChartBar; 4] {
        [
            ChartBar {
                label: "Bahan",
                value: self.materials,
            },
            ChartBar {
                label: "Operasional",
                value: self.operations,
            },
            ChartBar {
                label: "Penjualan",
                value: self.sales,
            },
            ChartBar {
                label: "Laba",
                value: self.profit().max(0.0),
            },
        ]
    }
}
