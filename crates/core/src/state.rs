use crate::backend::types::AnalysisOutcome;
use crate::domain::assessment::Assessment;
use crate::domain::metrics::{FinancialSnapshot, Modifiers};
use crate::sim::{self, Projection};

/// Per-action request lifecycle. A new request may only start from a
/// non-in-flight state; there is no queueing and no cancellation, the
/// triggering control simply stays disabled until completion.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ActionStatus {
    #[default]
    Idle,
    InFlight,
    Succeeded,
    Failed(String),
}

impl ActionStatus {
    pub fn is_in_flight(&self) -> bool {
        matches!(self, Self::InFlight)
    }
}

/// Single owner of the dashboard's mutable state. Backend results are
/// applied through the transition methods below, each of which replaces
/// its slot wholesale; the live projection is recomputed on every baseline
/// or modifier change, so a stale projection can never outlive its
/// baseline.
#[derive(Debug, Clone, Default)]
pub struct DashboardState {
    pub company_id: Option<i64>,
    pub metrics: Option<FinancialSnapshot>,
    pub assessment: Option<Assessment>,
    pub modifiers: Modifiers,
    pub projection: Option<Projection>,
    pub critique: Option<String>,
    pub upload: ActionStatus,
    pub simulation: ActionStatus,
}

impl DashboardState {
    pub fn set_company(&mut self, company_id: i64) {
        self.company_id = Some(company_id);
    }

    /// Upload requires a company context and no upload already in flight.
    pub fn can_upload(&self) -> bool {
        self.company_id.is_some() && !self.upload.is_in_flight()
    }

    pub fn upload_started(&mut self) {
        self.upload = ActionStatus::InFlight;
    }

    pub fn on_upload_success(&mut self, outcome: AnalysisOutcome) {
        self.metrics = Some(outcome.metrics);
        self.assessment = outcome.assessment;
        self.upload = ActionStatus::Succeeded;
        self.reproject();
    }

    pub fn on_upload_failed(&mut self, reason: impl Into<String>) {
        self.upload = ActionStatus::Failed(reason.into());
    }

    /// Synchronous recompute on every slider change; no debouncing needed
    /// for pure in-memory arithmetic.
    pub fn set_modifiers(&mut self, modifiers: Modifiers) {
        self.modifiers = modifiers;
        self.reproject();
    }

    /// Simulation requires an uploaded baseline and no request in flight.
    pub fn can_simulate(&self) -> bool {
        self.metrics.is_some() && !self.simulation.is_in_flight()
    }

    pub fn simulation_started(&mut self) {
        self.simulation = ActionStatus::InFlight;
    }

    pub fn on_simulation_complete(&mut self, critique: impl Into<String>) {
        self.critique = Some(critique.into());
        self.simulation = ActionStatus::Succeeded;
    }

    pub fn on_simulation_failed(&mut self, reason: impl Into<String>) {
        self.simulation = ActionStatus::Failed(reason.into());
    }

    fn reproject(&mut self) {
        self.projection = self
            .metrics
            .as_ref()
            .map(|baseline| sim::project(baseline, &self.modifiers));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn uploaded_state() -> DashboardState {
        let mut state = DashboardState::default();
        state.set_company(1);
        state.upload_started();
        state.on_upload_success(AnalysisOutcome {
            metrics: FinancialSnapshot::derived(100_000.0, 80_000.0),
            assessment: None,
        });
        state
    }

    #[test]
    fn upload_needs_a_company_and_an_idle_slot() {
        let mut state = DashboardState::default();
        assert!(!state.can_upload());

        state.set_company(1);
        assert!(state.can_upload());

        state.upload_started();
        assert!(!state.can_upload());

        state.on_upload_failed("HTTP 500");
        assert!(state.can_upload());
        assert_eq!(state.upload, ActionStatus::Failed("HTTP 500".into()));
    }

    #[test]
    fn upload_success_replaces_the_slot_and_projects_immediately() {
        let state = uploaded_state();

        assert_eq!(state.upload, ActionStatus::Succeeded);
        let projection = state.projection.unwrap();
        assert_eq!(projection.original.revenue, 100_000.0);
        assert_eq!(projection.projected.net_profit, 20_000.0);
    }

    #[test]
    fn modifier_change_replaces_the_projection() {
        let mut state = uploaded_state();
        let before = state.projection.unwrap();

        state.set_modifiers(Modifiers {
            revenue_growth: 0.10,
            expense_change: -0.05,
        });

        let after = state.projection.unwrap();
        assert_ne!(before, after);
        assert_eq!(after.projected.revenue, 110_000.0);
        assert_eq!(after.projected.expenses, 76_000.0);
        assert_eq!(after.projected.net_profit, 34_000.0);
    }

    #[test]
    fn new_baseline_invalidates_the_old_projection() {
        let mut state = uploaded_state();
        state.set_modifiers(Modifiers {
            revenue_growth: 0.10,
            expense_change: 0.0,
        });

        state.on_upload_success(AnalysisOutcome {
            metrics: FinancialSnapshot::derived(50_000.0, 60_000.0),
            assessment: None,
        });

        let projection = state.projection.unwrap();
        assert_eq!(projection.original.revenue, 50_000.0);
        // Modifiers are retained and applied to the new baseline.
        assert_eq!(projection.projected.revenue, 55_000.0);
    }

    #[test]
    fn no_projection_without_a_baseline() {
        let mut state = DashboardState::default();
        state.set_modifiers(Modifiers {
            revenue_growth: 0.25,
            expense_change: 0.0,
        });
        assert!(state.projection.is_none());
    }

    #[test]
    fn simulation_is_gated_on_a_baseline_and_busy_flag() {
        let state = DashboardState::default();
        assert!(!state.can_simulate());

        let mut state = uploaded_state();
        assert!(state.can_simulate());

        state.simulation_started();
        assert!(!state.can_simulate());

        state.on_simulation_complete("Plan is aggressive but feasible.");
        assert!(state.can_simulate());
        assert_eq!(
            state.critique.as_deref(),
            Some("Plan is aggressive but feasible.")
        );
    }
}
