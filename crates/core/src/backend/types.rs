use crate::domain::assessment::Assessment;
use crate::domain::company::CompanyProfile;
use crate::domain::metrics::{FinancialSnapshot, Modifiers};
use serde::{Deserialize, Serialize};

/// `POST /upload/{company_id}` response. Metrics are mandatory; the
/// assessment is absent when server-side AI analysis is unavailable.
#[derive(Debug, Clone, Deserialize)]
pub struct AnalysisOutcome {
    pub metrics: FinancialSnapshot,
    #[serde(default)]
    pub assessment: Option<Assessment>,
}

/// `POST /simulate` request body.
#[derive(Debug, Clone, Serialize)]
pub struct SimulationRequest {
    pub base_metrics: FinancialSnapshot,
    pub modifiers: Modifiers,
    pub company_info: CompanyProfile,
}

/// `POST /simulate` response; the projection echoed by the backend is
/// ignored, local arithmetic is authoritative for display.
#[derive(Debug, Clone, Deserialize)]
pub struct SimulationResponse {
    pub ai_analysis: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn analysis_outcome_tolerates_extra_fields_and_missing_assessment() {
        let outcome: AnalysisOutcome = serde_json::from_value(serde_json::json!({
            "status": "success",
            "metrics": {
                "revenue": 100000.0,
                "expenses": 80000.0,
                "net_profit": 20000.0,
                "period_start": "2026-01-01T00:00:00",
                "period_end": "2026-03-31T00:00:00",
            },
        }))
        .unwrap();
        assert_eq!(outcome.metrics.revenue, 100_000.0);
        assert!(outcome.assessment.is_none());
    }

    #[test]
    fn simulation_response_extracts_the_critique() {
        let response: SimulationResponse = serde_json::from_value(serde_json::json!({
            "projection": {"original": {}, "projected": {}},
            "ai_analysis": "Too optimistic.",
        }))
        .unwrap();
        assert_eq!(response.ai_analysis, "Too optimistic.");
    }
}
