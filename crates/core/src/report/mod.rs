pub mod format;
mod pdf;

use crate::domain::metrics::Modifiers;
use crate::sim::Projection;
use anyhow::ensure;
use chrono::NaiveDate;

pub const STRATEGY_HEAD: [&str; 3] = ["Metric", "Adjustment", "Implication"];
pub const FINANCIAL_HEAD: [&str; 3] = ["Category", "Baseline", "Scenario"];

/// Three-section strategy document. Assembly happens fully up front and
/// fails fast on precondition violations, so rendering can never produce a
/// partially blank report.
#[derive(Debug, Clone)]
pub struct StrategyReport {
    pub company_name: String,
    pub generated_on: NaiveDate,
    pub strategy_rows: [[String; 3]; 2],
    pub financial_rows: [[String; 3]; 3],
    pub critique: String,
}

impl StrategyReport {
    pub fn assemble(
        company_name: &str,
        projection: &Projection,
        critique: &str,
        modifiers: &Modifiers,
    ) -> anyhow::Result<Self> {
        ensure!(
            !company_name.trim().is_empty(),
            "company name must be non-empty"
        );
        ensure!(
            !critique.trim().is_empty(),
            "critique text must be non-empty before exporting a report"
        );

        let revenue_pct = format::whole_pct(modifiers.revenue_growth);
        let expense_pct = format::whole_pct(modifiers.expense_change);
        let expense_implication = if modifiers.expense_change > 0.0 {
            "Increase investment"
        } else {
            "Cost cutting / Efficiency"
        };

        let strategy_rows = [
            [
                "Revenue Target".to_string(),
                format!("{revenue_pct}% Growth"),
                "Aggressive expansion / Marketing push".to_string(),
            ],
            [
                "OpEx Adjustment".to_string(),
                format!("{expense_pct}% Change"),
                expense_implication.to_string(),
            ],
        ];

        let financial_rows = [
            financial_row(
                "Revenue",
                projection.original.revenue,
                projection.projected.revenue,
            ),
            financial_row(
                "Expenses",
                projection.original.expenses,
                projection.projected.expenses,
            ),
            financial_row(
                "Net Profit",
                projection.original.net_profit,
                projection.projected.net_profit,
            ),
        ];

        Ok(Self {
            company_name: company_name.trim().to_string(),
            generated_on: chrono::Utc::now().date_naive(),
            strategy_rows,
            financial_rows,
            critique: critique.to_string(),
        })
    }

    /// Whitespace runs in the company name collapse to single underscores:
    /// `"Acme  Corp"` becomes `Acme_Corp_Strategy_Plan.pdf`.
    pub fn suggested_filename(&self) -> String {
        let stem = self
            .company_name
            .split_whitespace()
            .collect::<Vec<_>>()
            .join("_");
        format!("{stem}_Strategy_Plan.pdf")
    }
}

fn financial_row(label: &str, baseline: f64, scenario: f64) -> [String; 3] {
    [
        label.to_string(),
        format::currency(baseline),
        format::currency(scenario),
    ]
}
