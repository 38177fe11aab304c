pub mod assessment;
pub mod company;
pub mod metrics;
