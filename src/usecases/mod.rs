//! Application use cases. Orchestrate domain logic via ports.

pub mod plan_service;

pub use plan_service::{PlanOutcome, PlanService};
