//! Demo data written on first use.
//!
//! Five problems across wards 12 and 8, and one councillor per ward. Report
//! times are relative to the moment of seeding.

use crate::clock::iso_timestamp;
use crate::models::{Problem, ProblemStatus, Role, User};

const DAY_MS: i64 = 24 * 60 * 60 * 1000;

fn days_ago(now_ms: i64, days: i64) -> String {
    iso_timestamp(now_ms - days * DAY_MS)
}

/// The demo problem set, most recently added first.
pub fn demo_problems(now_ms: i64) -> Vec<Problem> {
    vec![
        Problem {
            id: "1".into(),
            title: "Large pothole on main road".into(),
            category: "Road".into(),
            ward_number: "12".into(),
            location: "MG Road, Near City Mall".into(),
            description: "A large pothole has formed on the main road causing traffic issues and danger to two-wheelers. The pothole is approximately 2 feet wide and 6 inches deep.".into(),
            image_url: Some("https://images.unsplash.com/photo-1515162816999-a0c47dc192f7?w=600".into()),
            status: ProblemStatus::Pending,
            reported_by: "citizen@example.com".into(),
            reported_at: days_ago(now_ms, 2),
            councillor_remarks: None,
        },
        Problem {
            id: "2".into(),
            title: "Garbage overflow at corner".into(),
            category: "Garbage".into(),
            ward_number: "12".into(),
            location: "Sector 5, Block C".into(),
            description: "The garbage bin at the corner has been overflowing for 3 days. Waste is scattered on the road causing hygiene issues.".into(),
            image_url: Some("https://images.unsplash.com/photo-1605600659908-0ef719419d41?w=600".into()),
            status: ProblemStatus::InProgress,
            reported_by: "user2@example.com".into(),
            reported_at: days_ago(now_ms, 5),
            councillor_remarks: Some("Cleaning crew has been dispatched. Will be resolved by tomorrow.".into()),
        },
        Problem {
            id: "3".into(),
            title: "Streetlight not working".into(),
            category: "Electricity".into(),
            ward_number: "8".into(),
            location: "Gandhi Nagar, Lane 3".into(),
            description: "The streetlight near house number 45 has not been working for a week. The area becomes very dark at night.".into(),
            image_url: Some("https://images.unsplash.com/photo-1558618666-fcd25c85cd64?w=600".into()),
            status: ProblemStatus::Resolved,
            reported_by: "user3@example.com".into(),
            reported_at: days_ago(now_ms, 10),
            councillor_remarks: Some("Streetlight has been repaired and is now functional.".into()),
        },
        Problem {
            id: "4".into(),
            title: "Water pipeline leakage".into(),
            category: "Water".into(),
            ward_number: "12".into(),
            location: "Nehru Street, Near Temple".into(),
            description: "Major water pipeline leakage causing water wastage and making the road slippery. Urgent attention needed.".into(),
            image_url: Some("https://images.unsplash.com/photo-1504328345606-18bbc8c9d7d1?w=600".into()),
            status: ProblemStatus::Pending,
            reported_by: "citizen@example.com".into(),
            reported_at: days_ago(now_ms, 1),
            councillor_remarks: None,
        },
        Problem {
            id: "5".into(),
            title: "Blocked drainage causing flooding".into(),
            category: "Drainage".into(),
            ward_number: "8".into(),
            location: "Industrial Area, Phase 2".into(),
            description: "The drainage system is completely blocked causing water logging during rains. Needs immediate cleaning.".into(),
            image_url: Some("https://images.unsplash.com/photo-1446776877081-d282a0f896e2?w=600".into()),
            status: ProblemStatus::InProgress,
            reported_by: "user4@example.com".into(),
            reported_at: days_ago(now_ms, 3),
            councillor_remarks: None,
        },
    ]
}

/// The demo councillors for wards 12 and 8.
pub fn demo_users() -> Vec<User> {
    vec![
        User {
            id: "1".into(),
            email: "councillor@ward12.gov.in".into(),
            name: "Rajesh Kumar".into(),
            role: Role::Councillor,
            ward_number: Some("12".into()),
        },
        User {
            id: "2".into(),
            email: "councillor@ward8.gov.in".into(),
            name: "Priya Sharma".into(),
            role: Role::Councillor,
            ward_number: Some("8".into()),
        },
    ]
}
