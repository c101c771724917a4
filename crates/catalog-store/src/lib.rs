//! # Catalog Store
//!
//! This crate is the system's entity store: users, courses, and enrollments,
//! held in memory behind indexed lookups. It is the "archive" the analytics
//! engine reads from.
//!
//! ## Architectural Principles
//!
//! - **Explicit handle:** The store is an ordinary value, constructed once
//!   and passed into whatever needs it. There is no process-wide singleton,
//!   which keeps tests deterministic (build a fixture store, query it).
//! - **Read-only after construction:** Entities enter the store through
//!   `CatalogData` (a seeded fixture or a catalog file) and are never mutated
//!   afterwards, so the store can be shared across concurrent requests
//!   without locking.
//! - **Deterministic scan order:** Courses and enrollments are kept in
//!   creation order and every scan preserves it. Downstream tie-breaking
//!   depends on this.
//!
//! ## Public API
//!
//! - `CatalogStore`: the query handle (`find_user_by_id`,
//!   `find_courses_by_instructor`, `find_enrollments_by_course_ids`).
//! - `CatalogData`: the serializable whole-catalog document, with
//!   `load_catalog`/`save_catalog` for JSON files.
//! - `demo_catalog`: the reference fixture used by the `seed` command and the
//!   test suites.
//! - `StoreError`: the specific error types that can be returned from this crate.

// Declare the modules that constitute this crate.
pub mod catalog;
pub mod error;
pub mod seed;
pub mod store;

// Re-export the key components to create a clean, public-facing API.
pub use catalog::{load_catalog, save_catalog, CatalogData};
pub use error::StoreError;
pub use seed::{demo_catalog, demo_instructor_alice, demo_instructor_jane};
pub use store::CatalogStore;
