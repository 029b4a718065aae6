//! Demo data for local runs and black-box tests.

use chrono::{DateTime, TimeZone, Utc};

use learnhub_auth::{Role, UserProfile};
use learnhub_core::{CourseId, ReviewId, UserId};
use learnhub_reviews::{CourseRef, Rating, Review};

const AVATAR_BASE: &str = "https://images.pexels.com/photos";
const AVATAR_QUERY: &str = "auto=compress&cs=tinysrgb&w=150";

fn avatar(photo: u32) -> String {
    format!("{AVATAR_BASE}/{photo}/pexels-photo-{photo}.jpeg?{AVATAR_QUERY}")
}

pub fn demo_users() -> Vec<UserProfile> {
    [
        ("user_001", "Alice Johnson", Role::INSTRUCTOR, 1239291),
        ("user_002", "Bob Smith", Role::STUDENT, 2379004),
        ("user_003", "Carol Davis", Role::ADMIN, 697509),
        ("user_004", "David Wilson", Role::INSTRUCTOR, 1043471),
        ("user_005", "Emma Brown", Role::STUDENT, 1181686),
        ("user_006", "Frank Miller", Role::STUDENT, 1222271),
        ("user_007", "Grace Lee", Role::STUDENT, 1130626),
        ("user_008", "Henry Chen", Role::STUDENT, 1681010),
    ]
    .into_iter()
    .map(|(id, name, role, photo)| UserProfile::new(id, name, role).with_avatar(avatar(photo)))
    .collect()
}

pub fn demo_courses() -> Vec<CourseRef> {
    vec![
        CourseRef::new("course_001", "Complete Web Development Bootcamp", "user_001"),
        CourseRef::new("course_002", "Data Science with Python", "user_004"),
        CourseRef::new("course_003", "UI/UX Design Fundamentals", "user_001"),
        CourseRef::new("course_004", "Advanced React Development", "user_004"),
    ]
}

fn at(day: u32, hour: u32, min: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, day, hour, min, 0)
        .single()
        .unwrap_or_default()
}

pub fn demo_reviews() -> Vec<Review> {
    let users = demo_users();
    let seeded = [
        (
            "review_001",
            "course_001",
            "user_002",
            5,
            "Outstanding course! The instructor explains everything clearly and the projects are very practical. I learned so much and feel confident building web applications now.",
            12,
            at(20, 14, 30),
        ),
        (
            "review_002",
            "course_001",
            "user_005",
            4,
            "Great course overall. The content is comprehensive and up-to-date. Would have liked more advanced topics covered.",
            8,
            at(18, 10, 15),
        ),
        (
            "review_003",
            "course_001",
            "user_006",
            5,
            "Perfect for beginners! I had zero programming experience and now I can build websites. The step-by-step approach is excellent.",
            15,
            at(22, 16, 45),
        ),
        (
            "review_004",
            "course_002",
            "user_007",
            4,
            "Solid data science course. Good coverage of pandas, matplotlib, and scikit-learn. Could use more real-world datasets.",
            6,
            at(19, 11, 20),
        ),
        (
            "review_005",
            "course_002",
            "user_008",
            5,
            "Excellent instructor and well-structured curriculum. The machine learning section was particularly helpful for my career transition.",
            9,
            at(21, 9, 30),
        ),
        (
            "review_006",
            "course_003",
            "user_002",
            4,
            "Great introduction to UI/UX design. Learned a lot about user research and design principles. More hands-on exercises would be beneficial.",
            7,
            at(17, 13, 15),
        ),
    ];

    seeded
        .into_iter()
        .filter_map(|(id, course, user, stars, comment, helpful, created)| {
            let author = users.iter().find(|u| u.user_id.as_str() == user)?;
            Some(Review {
                review_id: ReviewId::from(id),
                course_id: CourseId::from(course),
                user_id: UserId::from(user),
                user_name: author.name.clone(),
                user_avatar: author.avatar.clone(),
                rating: Rating::new(stars).ok()?,
                comment: Some(comment.to_string()),
                helpful_count: helpful,
                created_at: created,
                updated_at: created,
            })
        })
        .collect()
}
