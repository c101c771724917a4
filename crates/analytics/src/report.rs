use core_types::{Course, EntityId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The revenue split for an instructor: gross takings, the platform's fixed
/// 10% cut, and what the instructor keeps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Revenue {
    pub total_gross: Decimal,
    pub platform_fee: Decimal,
    pub net_take_home: Decimal,
}

impl Revenue {
    pub fn zero() -> Self {
        Self {
            total_gross: Decimal::ZERO,
            platform_fee: Decimal::ZERO,
            net_take_home: Decimal::ZERO,
        }
    }
}

/// The complete summary bundle for one instructor.
///
/// This struct is the final output of the `SummaryEngine` and is serialized
/// verbatim into the API's `data` field, so its shape (field names included)
/// is part of the contract consumed by clients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstructorSummary {
    pub instructor_name: String,
    pub total_students: usize,
    pub average_course_rating: Decimal,
    pub top_performing_course: String,
    pub revenue: Revenue,
}

impl InstructorSummary {
    /// The shape returned when the instructor exists but owns no courses.
    /// Not an error: all metrics are zero and the top-course slot carries a
    /// sentinel string.
    pub fn empty(instructor_name: &str) -> Self {
        Self {
            instructor_name: instructor_name.to_string(),
            total_students: 0,
            average_course_rating: Decimal::ZERO,
            top_performing_course: "No courses found".to_string(),
            revenue: Revenue::zero(),
        }
    }

    /// The shape returned when courses exist but none of them has an
    /// enrollment. Distinguished from `empty` only by the top-course slot,
    /// which defaults to the first fetched course's title.
    pub fn no_enrollments(instructor_name: &str, courses: &[Course]) -> Self {
        let top_performing_course = courses
            .first()
            .map(|c| c.title.clone())
            .unwrap_or_else(|| "No courses".to_string());
        Self {
            instructor_name: instructor_name.to_string(),
            total_students: 0,
            average_course_rating: Decimal::ZERO,
            top_performing_course,
            revenue: Revenue::zero(),
        }
    }
}

/// Per-course breakdown served by the course-performance endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoursePerformance {
    pub course_id: EntityId,
    pub title: String,
    pub category: String,
    pub price: Decimal,
    pub enrollment_count: usize,
    pub average_rating: Decimal,
    pub gross_revenue: Decimal,
}

/// One time bucket served by the performance-trends endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendPoint {
    /// `YYYY-MM` for monthly buckets, `YYYY-Www` for weekly ones.
    pub period: String,
    pub enrollments: usize,
    pub gross_revenue: Decimal,
}
