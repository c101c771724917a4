use crate::catalog::CatalogData;
use chrono::{DateTime, TimeZone, Utc};
use core_types::{Course, Enrollment, EntityId, User};
use rust_decimal_macros::dec;

// Deterministic ids so seeded catalogs are reproducible and the instructor
// ids printed by `insights seed` stay stable across runs.
const KIND_INSTRUCTOR: u8 = 0x01;
const KIND_STUDENT: u8 = 0x02;
const KIND_COURSE: u8 = 0x03;
const KIND_ENROLLMENT: u8 = 0x04;

fn seeded_id(kind: u8, n: u8) -> EntityId {
    EntityId::from_bytes([0x65, 0xed, kind, 0, 0, 0, 0, 0, 0, 0, 0, n])
}

fn day(month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, month, day, 12, 0, 0).unwrap()
}

/// Builds the reference demo catalog: two instructors, five students, and
/// enough enrollments to exercise every summary metric.
///
/// Expected summaries (also printed by the `seed` command):
/// - Jane Doe: 5 students, average rating 4.5, top course
///   "Advanced React 2026", gross 2640 / fee 264 / net 2376.
/// - Alice Johnson: 5 students, average rating 4.4, top course
///   "Python for Beginners", gross 1195 / fee 119.50 / net 1075.50.
pub fn demo_catalog() -> CatalogData {
    let jane = seeded_id(KIND_INSTRUCTOR, 1);
    let alice = seeded_id(KIND_INSTRUCTOR, 2);
    let students: Vec<EntityId> = (1..=5).map(|n| seeded_id(KIND_STUDENT, n)).collect();

    let mut users = vec![
        User {
            id: jane,
            name: "Jane Doe".to_string(),
            email: "jane.doe@paceinstitute.com".to_string(),
            bio: "Senior React Instructor with 10+ years experience".to_string(),
        },
        User {
            id: alice,
            name: "Alice Johnson".to_string(),
            email: "alice.johnson@paceinstitute.com".to_string(),
            bio: "Node.js and Python Instructor".to_string(),
        },
    ];
    for (i, (name, email)) in [
        ("John Smith", "john.smith@email.com"),
        ("Sarah Wilson", "sarah.w@email.com"),
        ("Mike Brown", "mike.b@email.com"),
        ("Emma Davis", "emma.d@email.com"),
        ("Chris Lee", "chris.l@email.com"),
    ]
    .into_iter()
    .enumerate()
    {
        users.push(User {
            id: students[i],
            name: name.to_string(),
            email: email.to_string(),
            bio: "Student".to_string(),
        });
    }

    let react = seeded_id(KIND_COURSE, 1);
    let node = seeded_id(KIND_COURSE, 2);
    let typescript = seeded_id(KIND_COURSE, 3);
    let python = seeded_id(KIND_COURSE, 4);
    let django = seeded_id(KIND_COURSE, 5);

    let courses = vec![
        Course {
            id: react,
            title: "Advanced React 2026".to_string(),
            instructor_id: jane,
            price: dec!(299),
            category: "Frontend Development".to_string(),
        },
        Course {
            id: node,
            title: "Node.js Masterclass".to_string(),
            instructor_id: jane,
            price: dec!(249),
            category: "Backend Development".to_string(),
        },
        Course {
            id: typescript,
            title: "TypeScript Fundamentals".to_string(),
            instructor_id: jane,
            price: dec!(199),
            category: "Programming Languages".to_string(),
        },
        Course {
            id: python,
            title: "Python for Beginners".to_string(),
            instructor_id: alice,
            price: dec!(199),
            category: "Programming Languages".to_string(),
        },
        Course {
            id: django,
            title: "Django Web Framework".to_string(),
            instructor_id: alice,
            price: dec!(299),
            category: "Web Development".to_string(),
        },
    ];

    // (student index, course, progress, rating, enrollment date)
    let rows: Vec<(usize, EntityId, u8, u8, DateTime<Utc>)> = vec![
        // Advanced React, 5 enrollments
        (0, react, 75, 5, day(1, 5)),
        (1, react, 90, 4, day(1, 12)),
        (2, react, 45, 5, day(2, 3)),
        (3, react, 100, 5, day(2, 17)),
        (4, react, 60, 4, day(3, 1)),
        // Node.js Masterclass, 3 enrollments
        (0, node, 30, 4, day(1, 20)),
        (2, node, 85, 5, day(2, 8)),
        (4, node, 20, 4, day(3, 14)),
        // TypeScript Fundamentals, 2 enrollments
        (1, typescript, 95, 5, day(1, 28)),
        (3, typescript, 50, 4, day(2, 22)),
        // Python for Beginners, 3 enrollments
        (0, python, 80, 5, day(1, 9)),
        (2, python, 60, 4, day(2, 11)),
        (4, python, 40, 4, day(3, 2)),
        // Django Web Framework, 2 enrollments
        (1, django, 70, 5, day(1, 15)),
        (3, django, 30, 4, day(2, 25)),
    ];

    let enrollments = rows
        .into_iter()
        .enumerate()
        .map(
            |(n, (student, course_id, progress, rating, enrollment_date))| Enrollment {
                id: seeded_id(KIND_ENROLLMENT, (n + 1) as u8),
                student_id: students[student],
                course_id,
                progress,
                rating,
                enrollment_date,
            },
        )
        .collect();

    CatalogData {
        users,
        courses,
        enrollments,
    }
}

/// The seeded id of the "Jane Doe" demo instructor.
pub fn demo_instructor_jane() -> EntityId {
    seeded_id(KIND_INSTRUCTOR, 1)
}

/// The seeded id of the "Alice Johnson" demo instructor.
pub fn demo_instructor_alice() -> EntityId {
    seeded_id(KIND_INSTRUCTOR, 2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_catalog_has_the_documented_shape() {
        let data = demo_catalog();
        assert_eq!(data.users.len(), 7);
        assert_eq!(data.courses.len(), 5);
        assert_eq!(data.enrollments.len(), 15);

        // Every enrollment resolves against the seeded users and courses.
        for e in &data.enrollments {
            assert!(data.users.iter().any(|u| u.id == e.student_id));
            assert!(data.courses.iter().any(|c| c.id == e.course_id));
        }
    }

    #[test]
    fn seeded_ids_are_stable() {
        assert_eq!(demo_instructor_jane(), demo_catalog().users[0].id);
        assert_eq!(demo_catalog(), demo_catalog());
    }
}
