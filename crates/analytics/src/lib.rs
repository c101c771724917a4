//! # Instructor Analytics Engine
//!
//! This crate computes aggregate performance analytics for an instructor's
//! catalog of courses: enrollment counts, average ratings, revenue splits,
//! and the top performing course.
//!
//! ## Architectural Principles
//!
//! - **Stateless Calculation:** The `SummaryEngine` is a stateless
//!   calculator. Each call is a pure read-then-compute pipeline over the
//!   catalog store passed in, which makes it highly reliable and easy to
//!   test against fixture stores.
//! - **Best-effort over available data:** Enrollment rows whose course or
//!   student reference does not resolve are excluded from every metric
//!   rather than failing the whole computation.
//!
//! ## Public API
//!
//! - `SummaryEngine`: the main struct that contains the aggregation logic.
//! - `InstructorSummary`: the standardized summary shape returned to clients.
//! - `AnalyticsError`: the specific error types that can be returned from this crate.

// Declare the modules that constitute this crate.
pub mod engine;
pub mod error;
pub mod report;

// Re-export the key components to create a clean, public-facing API.
pub use engine::{SummaryEngine, Timeframe};
pub use error::AnalyticsError;
pub use report::{CoursePerformance, InstructorSummary, Revenue, TrendPoint};
