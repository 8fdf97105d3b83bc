//! Fluent builder APIs for test scenarios.
//!
//! The [`ScenarioBuilder`] provides a convenient way to construct
//! complete test scenarios with athletes and their split trials.

mod scenario;

pub use scenario::{ScenarioBuilder, ScenarioMetrics, ScenarioResult};
