use crate::error::AnalyticsError;
use crate::report::{CoursePerformance, InstructorSummary, Revenue, TrendPoint};
use catalog_store::CatalogStore;
use chrono::Datelike;
use core_types::{Course, EntityId, JoinedEnrollment};
use rust_decimal::{Decimal, RoundingStrategy};
use std::collections::{BTreeMap, HashSet};

/// The platform keeps a fixed 10% cut of gross revenue.
const PLATFORM_FEE_RATE: Decimal = Decimal::from_parts(10, 0, 0, false, 2);

/// Time bucketing for the performance-trends endpoint. Unrecognized query
/// values fall back to monthly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Timeframe {
    #[default]
    Monthly,
    Weekly,
}

impl From<&str> for Timeframe {
    fn from(raw: &str) -> Self {
        match raw {
            "weekly" => Timeframe::Weekly,
            _ => Timeframe::Monthly,
        }
    }
}

/// A stateless calculator for deriving instructor analytics from the catalog.
#[derive(Debug, Default)]
pub struct SummaryEngine {}

impl SummaryEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// The main entry point: computes the summary bundle for one instructor.
    ///
    /// `raw_id` is validated before any store access; a malformed id never
    /// touches the store. The instructor lookup and the course scan are
    /// independent and run concurrently; the enrollment scan waits on the
    /// course list it filters by.
    ///
    /// # Errors
    ///
    /// `InvalidIdentifier` for a malformed id, `NotFound` when no user has
    /// the id. An instructor with no courses or no enrollments is a valid
    /// zero/default summary, not an error.
    pub async fn instructor_summary(
        &self,
        store: &CatalogStore,
        raw_id: &str,
    ) -> Result<InstructorSummary, AnalyticsError> {
        let instructor_id: EntityId = raw_id
            .parse()
            .map_err(|_| AnalyticsError::InvalidIdentifier)?;

        let (instructor, courses) = tokio::join!(
            store.find_user_by_id(&instructor_id),
            store.find_courses_by_instructor(&instructor_id),
        );
        let instructor = instructor?.ok_or(AnalyticsError::NotFound)?;
        let courses = courses?;
        tracing::debug!(
            instructor = %instructor_id,
            courses = courses.len(),
            "Fetched instructor catalog"
        );

        if courses.is_empty() {
            return Ok(InstructorSummary::empty(&instructor.name));
        }

        let course_ids: Vec<EntityId> = courses.iter().map(|c| c.id).collect();
        let enrollments = store.find_enrollments_by_course_ids(&course_ids).await?;
        tracing::debug!(enrollments = enrollments.len(), "Fetched enrollment rows");

        if enrollments.is_empty() {
            return Ok(InstructorSummary::no_enrollments(
                &instructor.name,
                &courses,
            ));
        }

        Ok(self.calculate_statistics(&instructor.name, &courses, &enrollments))
    }

    /// Computes every summary metric over the joined enrollment rows.
    ///
    /// A row whose course or student reference did not resolve is excluded
    /// from all metrics: aggregation is best-effort over the rows that fully
    /// join, and partial failures never propagate to the caller.
    fn calculate_statistics(
        &self,
        instructor_name: &str,
        courses: &[Course],
        enrollments: &[JoinedEnrollment],
    ) -> InstructorSummary {
        let mut unique_students: HashSet<EntityId> = HashSet::new();
        let mut rating_total: u64 = 0;
        let mut rating_count: u64 = 0;
        let mut gross = Decimal::ZERO;
        // Per-course row counts, keyed in first-encountered order so that an
        // equal-count tie resolves to the course seen first in the scan.
        let mut course_counts: Vec<(EntityId, usize)> = Vec::new();

        for row in enrollments {
            let (Some(course), Some(student)) = (&row.course, &row.student) else {
                continue;
            };

            unique_students.insert(student.id);
            rating_total += u64::from(row.rating);
            rating_count += 1;
            gross += course.price;

            match course_counts.iter_mut().find(|(id, _)| *id == course.id) {
                Some((_, count)) => *count += 1,
                None => course_counts.push((course.id, 1)),
            }
        }

        let average_course_rating = if rating_count > 0 {
            (Decimal::from(rating_total) / Decimal::from(rating_count))
                .round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero)
        } else {
            Decimal::ZERO
        };

        // The net is derived from the *rounded* fee, not the raw fraction.
        // Downstream consumers depend on this two-step order bit-exactly.
        let total_gross = round2(gross);
        let platform_fee = round2(total_gross * PLATFORM_FEE_RATE);
        let net_take_home = round2(total_gross - platform_fee);

        let mut top_course_id: Option<EntityId> = None;
        let mut max_enrollments = 0usize;
        for &(course_id, count) in &course_counts {
            if count > max_enrollments {
                max_enrollments = count;
                top_course_id = Some(course_id);
            }
        }
        let top_performing_course = top_course_id
            .and_then(|id| courses.iter().find(|c| c.id == id))
            .or_else(|| courses.first())
            .map(|c| c.title.clone())
            .unwrap_or_else(|| "Unknown".to_string());

        InstructorSummary {
            instructor_name: instructor_name.to_string(),
            total_students: unique_students.len(),
            average_course_rating,
            top_performing_course,
            revenue: Revenue {
                total_gross,
                platform_fee,
                net_take_home,
            },
        }
    }

    /// Per-course breakdown for the course-performance endpoint, in course
    /// creation order. Same id validation and exclusion rules as the summary.
    pub async fn course_performance(
        &self,
        store: &CatalogStore,
        raw_id: &str,
    ) -> Result<Vec<CoursePerformance>, AnalyticsError> {
        let (courses, enrollments) = self.fetch_catalog(store, raw_id).await?;

        let performance = courses
            .iter()
            .map(|course| {
                let rows: Vec<_> = enrollments
                    .iter()
                    .filter(|row| {
                        row.student.is_some()
                            && row.course.as_ref().is_some_and(|c| c.id == course.id)
                    })
                    .collect();
                let count = rows.len();
                let average_rating = if count > 0 {
                    let total: u64 = rows.iter().map(|r| u64::from(r.rating)).sum();
                    (Decimal::from(total) / Decimal::from(count as u64))
                        .round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero)
                } else {
                    Decimal::ZERO
                };
                CoursePerformance {
                    course_id: course.id,
                    title: course.title.clone(),
                    category: course.category.clone(),
                    price: course.price,
                    enrollment_count: count,
                    average_rating,
                    gross_revenue: round2(course.price * Decimal::from(count as u64)),
                }
            })
            .collect();
        Ok(performance)
    }

    /// Enrollment and revenue buckets over time for the trends endpoint,
    /// ascending by period.
    pub async fn performance_trends(
        &self,
        store: &CatalogStore,
        raw_id: &str,
        timeframe: Timeframe,
    ) -> Result<Vec<TrendPoint>, AnalyticsError> {
        let (_, enrollments) = self.fetch_catalog(store, raw_id).await?;

        let mut buckets: BTreeMap<String, (usize, Decimal)> = BTreeMap::new();
        for row in &enrollments {
            let (Some(course), Some(_)) = (&row.course, &row.student) else {
                continue;
            };
            let date = row.enrollment_date;
            let period = match timeframe {
                Timeframe::Monthly => format!("{:04}-{:02}", date.year(), date.month()),
                Timeframe::Weekly => {
                    let week = date.iso_week();
                    format!("{:04}-W{:02}", week.year(), week.week())
                }
            };
            let bucket = buckets.entry(period).or_insert((0, Decimal::ZERO));
            bucket.0 += 1;
            bucket.1 += course.price;
        }

        Ok(buckets
            .into_iter()
            .map(|(period, (enrollments, gross))| TrendPoint {
                period,
                enrollments,
                gross_revenue: round2(gross),
            })
            .collect())
    }

    /// Shared validate-then-fetch step for the informational endpoints:
    /// parses the id, confirms the instructor exists, and returns the
    /// instructor's courses with their joined enrollment rows.
    async fn fetch_catalog(
        &self,
        store: &CatalogStore,
        raw_id: &str,
    ) -> Result<(Vec<Course>, Vec<JoinedEnrollment>), AnalyticsError> {
        let instructor_id: EntityId = raw_id
            .parse()
            .map_err(|_| AnalyticsError::InvalidIdentifier)?;

        let (instructor, courses) = tokio::join!(
            store.find_user_by_id(&instructor_id),
            store.find_courses_by_instructor(&instructor_id),
        );
        instructor?.ok_or(AnalyticsError::NotFound)?;
        let courses = courses?;

        let course_ids: Vec<EntityId> = courses.iter().map(|c| c.id).collect();
        let enrollments = store.find_enrollments_by_course_ids(&course_ids).await?;
        Ok((courses, enrollments))
    }
}

/// Half-up rounding at the cents digit, the policy used for every monetary
/// value in the summary.
fn round2(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}
