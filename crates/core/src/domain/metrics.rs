use serde::{Deserialize, Serialize};

/// Point-in-time profit-and-loss triple.
///
/// Snapshots deserialized from the backend carry `net_profit` as the
/// authoritative figure and are never recomputed on ingest; only locally
/// derived snapshots hold the `revenue - expenses` identity by construction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FinancialSnapshot {
    pub revenue: f64,
    pub expenses: f64,
    pub net_profit: f64,
}

impl FinancialSnapshot {
    /// Local derivation: profit is always revenue minus expenses.
    pub fn derived(revenue: f64, expenses: f64) -> Self {
        Self {
            revenue,
            expenses,
            net_profit: revenue - expenses,
        }
    }

    /// Drives the negative styling flag in every rendering surface.
    pub fn has_loss(&self) -> bool {
        self.net_profit < 0.0
    }
}

/// Fractional multiplier offsets applied by the scenario simulator.
/// `0.10` means +10% on the affected figure.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Modifiers {
    #[serde(default)]
    pub revenue_growth: f64,
    #[serde(default)]
    pub expense_change: f64,
}

impl Modifiers {
    /// Slider range advertised by the UI (-20%..+50%). The projector itself
    /// applies any finite value as given; clamping is a caller concern.
    pub const MIN: f64 = -0.20;
    pub const MAX: f64 = 0.50;

    pub fn clamped(self) -> Self {
        Self {
            revenue_growth: self.revenue_growth.clamp(Self::MIN, Self::MAX),
            expense_change: self.expense_change.clamp(Self::MIN, Self::MAX),
        }
    }
}
