//! Seed data loaded every time a dashboard is created

use super::{ActivityEntry, ClassRecord};

const SUBJECTS: [&str; 3] = ["Math", "Science", "English"];

/// The three demo classes
pub fn initial_classes() -> Vec<ClassRecord> {
    vec![
        ClassRecord::new("6A", "Class 6-A", 32, 67, &SUBJECTS),
        ClassRecord::new("7B", "Class 7-B", 28, 73, &SUBJECTS),
        ClassRecord::new("8C", "Class 8-C", 35, 61, &SUBJECTS),
    ]
}

fn activity(student: &str, class_tag: &str, description: &str, outcome: &str, time_label: &str) -> ActivityEntry {
    ActivityEntry {
        student: student.to_string(),
        class_tag: class_tag.to_string(),
        description: description.to_string(),
        outcome: outcome.to_string(),
        time_label: time_label.to_string(),
    }
}

/// Sample entries for the recent activity card
pub fn recent_activities() -> Vec<ActivityEntry> {
    vec![
        activity("Ram Kumar", "6A", "Completed Geography Quiz", "85%", "2 hours ago"),
        activity("Priya Singh", "7B", "Started Math Module", "In Progress", "3 hours ago"),
        activity("Amit Patel", "8C", "Achieved Science Badge", "90%", "5 hours ago"),
    ]
}
