pub mod error;
pub mod ids;
pub mod structs;

// Re-export the core types to provide a clean public API.
pub use error::CoreError;
pub use ids::EntityId;
pub use structs::{Course, CourseRef, Enrollment, JoinedEnrollment, StudentRef, User};
