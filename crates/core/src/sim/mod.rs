use crate::domain::metrics::{FinancialSnapshot, Modifiers};
use serde::{Deserialize, Serialize};

/// Pairing of an immutable baseline with its modifier-adjusted counterpart.
/// Replaced wholesale whenever the baseline or a modifier changes; no
/// history is retained.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Projection {
    pub original: FinancialSnapshot,
    pub projected: FinancialSnapshot,
}

/// Deterministic what-if arithmetic.
///
/// Pure and total over finite inputs. Modifiers outside the advertised
/// slider range are applied as given; range enforcement belongs to the
/// caller collecting the input.
pub fn project(baseline: &FinancialSnapshot, modifiers: &Modifiers) -> Projection {
    let revenue = baseline.revenue * (1.0 + modifiers.revenue_growth);
    let expenses = baseline.expenses * (1.0 + modifiers.expense_change);

    Projection {
        original: *baseline,
        projected: FinancialSnapshot::derived(revenue, expenses),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_modifiers_reproduce_the_baseline_exactly() {
        let baseline = FinancialSnapshot::derived(123_456.78, 98_765.43);
        let projection = project(&baseline, &Modifiers::default());

        assert_eq!(projection.projected.revenue, baseline.revenue);
        assert_eq!(projection.projected.expenses, baseline.expenses);
        assert_eq!(
            projection.projected.net_profit,
            baseline.revenue - baseline.expenses
        );
        assert_eq!(projection.original, baseline);
    }

    #[test]
    fn growth_and_cuts_scale_each_figure_independently() {
        let baseline = FinancialSnapshot::derived(100_000.0, 80_000.0);
        let modifiers = Modifiers {
            revenue_growth: 0.10,
            expense_change: -0.05,
        };
        let projection = project(&baseline, &modifiers);

        assert_eq!(projection.projected.revenue, 110_000.0);
        assert_eq!(projection.projected.expenses, 76_000.0);
        assert_eq!(projection.projected.net_profit, 34_000.0);
    }

    #[test]
    fn projected_profit_always_equals_revenue_minus_expenses() {
        let baseline = FinancialSnapshot::derived(42_000.0, 39_500.0);
        for (growth, change) in [(-0.20, 0.50), (0.0, 0.0), (0.33, -0.07), (1.25, -0.9)] {
            let projection = project(
                &baseline,
                &Modifiers {
                    revenue_growth: growth,
                    expense_change: change,
                },
            );
            assert_eq!(
                projection.projected.net_profit,
                projection.projected.revenue - projection.projected.expenses
            );
        }
    }

    #[test]
    fn unprofitable_baseline_projects_a_loss() {
        let baseline = FinancialSnapshot::derived(50_000.0, 60_000.0);
        let projection = project(&baseline, &Modifiers::default());

        assert_eq!(projection.projected.net_profit, -10_000.0);
        assert!(projection.projected.has_loss());
    }
}
