use crate::catalog::CatalogData;
use crate::error::StoreError;
use core_types::{Course, CourseRef, Enrollment, EntityId, JoinedEnrollment, StudentRef, User};
use std::collections::{HashMap, HashSet};

/// The `CatalogStore` provides a high-level, application-specific interface
/// to the entity catalog. It encapsulates all index maintenance and join
/// logic behind a small query API.
///
/// The store is immutable after construction; cloning is cheap relative to
/// catalog size only via `Arc` at the call site.
#[derive(Debug, Clone, Default)]
pub struct CatalogStore {
    users: HashMap<EntityId, User>,
    /// All courses in creation order. Scans preserve this order.
    courses: Vec<Course>,
    /// Positions into `courses`, keyed by owning instructor.
    courses_by_instructor: HashMap<EntityId, Vec<usize>>,
    /// All enrollments in creation order. Scans preserve this order, which
    /// is what makes downstream tie-breaking reproducible.
    enrollments: Vec<Enrollment>,
}

impl CatalogStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a store from a catalog document, indexing as it goes.
    pub fn from_data(data: CatalogData) -> Self {
        let mut store = Self::new();
        for user in data.users {
            store.insert_user(user);
        }
        for course in data.courses {
            store.insert_course(course);
        }
        for enrollment in data.enrollments {
            store.insert_enrollment(enrollment);
        }
        store
    }

    pub fn insert_user(&mut self, user: User) {
        self.users.insert(user.id, user);
    }

    pub fn insert_course(&mut self, course: Course) {
        self.courses_by_instructor
            .entry(course.instructor_id)
            .or_default()
            .push(self.courses.len());
        self.courses.push(course);
    }

    pub fn insert_enrollment(&mut self, enrollment: Enrollment) {
        self.enrollments.push(enrollment);
    }

    /// Looks up a single user by id.
    pub async fn find_user_by_id(&self, id: &EntityId) -> Result<Option<User>, StoreError> {
        Ok(self.users.get(id).cloned())
    }

    /// Returns all courses owned by the given instructor, in creation order.
    pub async fn find_courses_by_instructor(
        &self,
        instructor_id: &EntityId,
    ) -> Result<Vec<Course>, StoreError> {
        let courses = self
            .courses_by_instructor
            .get(instructor_id)
            .map(|positions| {
                positions
                    .iter()
                    .map(|&pos| self.courses[pos].clone())
                    .collect()
            })
            .unwrap_or_default();
        Ok(courses)
    }

    /// Returns all enrollments whose course is in `course_ids`, joined with
    /// their owning course and student records.
    ///
    /// Rows come back in enrollment creation order. A reference that does not
    /// resolve is embedded as `None` rather than dropping the row, so callers
    /// can apply their own exclusion policy.
    pub async fn find_enrollments_by_course_ids(
        &self,
        course_ids: &[EntityId],
    ) -> Result<Vec<JoinedEnrollment>, StoreError> {
        let wanted: HashSet<&EntityId> = course_ids.iter().collect();
        let course_index: HashMap<EntityId, &Course> =
            self.courses.iter().map(|c| (c.id, c)).collect();

        let joined = self
            .enrollments
            .iter()
            .filter(|e| wanted.contains(&e.course_id))
            .map(|e| JoinedEnrollment {
                id: e.id,
                progress: e.progress,
                rating: e.rating,
                enrollment_date: e.enrollment_date,
                course: course_index.get(&e.course_id).map(|c| CourseRef {
                    id: c.id,
                    title: c.title.clone(),
                    price: c.price,
                }),
                student: self
                    .users
                    .get(&e.student_id)
                    .map(|s| StudentRef { id: s.id }),
            })
            .collect();
        Ok(joined)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use rust_decimal_macros::dec;

    fn id(n: u8) -> EntityId {
        EntityId::from_bytes([0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, n])
    }

    fn user(n: u8, name: &str) -> User {
        User {
            id: id(n),
            name: name.to_string(),
            email: format!("{name}@example.com"),
            bio: String::new(),
        }
    }

    fn course(n: u8, instructor: u8, title: &str) -> Course {
        Course {
            id: id(n),
            title: title.to_string(),
            instructor_id: id(instructor),
            price: dec!(100),
            category: "Testing".to_string(),
        }
    }

    fn enrollment(n: u8, student: u8, course: u8) -> Enrollment {
        Enrollment {
            id: id(n),
            student_id: id(student),
            course_id: id(course),
            progress: 50,
            rating: 4,
            enrollment_date: Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap(),
        }
    }

    fn fixture() -> CatalogStore {
        let mut store = CatalogStore::new();
        store.insert_user(user(1, "instructor"));
        store.insert_user(user(2, "student"));
        store.insert_course(course(10, 1, "First"));
        store.insert_course(course(11, 1, "Second"));
        store.insert_course(course(12, 9, "Other instructor"));
        store.insert_enrollment(enrollment(20, 2, 11));
        store.insert_enrollment(enrollment(21, 2, 10));
        store.insert_enrollment(enrollment(22, 2, 12));
        store
    }

    #[tokio::test]
    async fn user_lookup_hits_and_misses() {
        let store = fixture();
        assert!(store.find_user_by_id(&id(1)).await.unwrap().is_some());
        assert!(store.find_user_by_id(&id(99)).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn course_scan_is_filtered_and_in_creation_order() {
        let store = fixture();
        let courses = store.find_courses_by_instructor(&id(1)).await.unwrap();
        let titles: Vec<_> = courses.iter().map(|c| c.title.as_str()).collect();
        assert_eq!(titles, vec!["First", "Second"]);

        let none = store.find_courses_by_instructor(&id(42)).await.unwrap();
        assert!(none.is_empty());
    }

    #[tokio::test]
    async fn enrollment_scan_preserves_insertion_order() {
        let store = fixture();
        let rows = store
            .find_enrollments_by_course_ids(&[id(10), id(11)])
            .await
            .unwrap();
        let ids: Vec<_> = rows.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![id(20), id(21)]);
    }

    #[tokio::test]
    async fn join_embeds_course_and_student_refs() {
        let store = fixture();
        let rows = store
            .find_enrollments_by_course_ids(&[id(10)])
            .await
            .unwrap();
        let row = &rows[0];
        assert_eq!(row.course.as_ref().unwrap().title, "First");
        assert_eq!(row.course.as_ref().unwrap().price, dec!(100));
        assert_eq!(row.student.as_ref().unwrap().id, id(2));
    }

    #[tokio::test]
    async fn dangling_student_reference_is_carried_as_none() {
        let mut store = fixture();
        store.insert_enrollment(enrollment(23, 77, 10)); // no such user
        let rows = store
            .find_enrollments_by_course_ids(&[id(10)])
            .await
            .unwrap();
        let dangling = rows.iter().find(|r| r.id == id(23)).unwrap();
        assert!(dangling.course.is_some());
        assert!(dangling.student.is_none());
    }
}
