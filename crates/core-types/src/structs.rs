use crate::ids::EntityId;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// An identity record. Users are undifferentiated in storage: the same shape
/// represents instructors and students.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: EntityId,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub bio: String,
}

/// A course owned by a single instructor (1:N via `instructor_id`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: EntityId,
    pub title: String,
    pub instructor_id: EntityId,
    /// Unit price in the platform currency; never negative.
    pub price: Decimal,
    pub category: String,
}

/// One student's registration in one course. The student/course pair is kept
/// unique by seeding convention only, not enforced here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Enrollment {
    pub id: EntityId,
    pub student_id: EntityId,
    pub course_id: EntityId,
    /// Completion percentage, 0–100.
    pub progress: u8,
    /// Star rating, 1–5. Required at enrollment time.
    pub rating: u8,
    pub enrollment_date: DateTime<Utc>,
}

/// The course fields embedded into a joined enrollment row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseRef {
    pub id: EntityId,
    pub title: String,
    pub price: Decimal,
}

/// The student fields embedded into a joined enrollment row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentRef {
    pub id: EntityId,
}

/// An enrollment row with its course and student references resolved.
///
/// A reference that does not point at an existing entity is carried as `None`
/// rather than dropping the row; consumers decide how to treat unjoinable
/// rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JoinedEnrollment {
    pub id: EntityId,
    pub progress: u8,
    pub rating: u8,
    pub enrollment_date: DateTime<Utc>,
    pub course: Option<CourseRef>,
    pub student: Option<StudentRef>,
}
