//! Class roster model
//!
//! In-memory class records, the quizzes assigned to them and the static
//! activity feed shown on the dashboard.

pub mod fixtures;

use std::fmt;

pub use fixtures::{initial_classes, recent_activities};

/// Short identifier of a class (e.g. "6A")
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ClassId(String);

impl ClassId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl fmt::Display for ClassId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ClassId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// A quiz assigned to a class
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizRecord {
    /// Quiz name as entered by the teacher
    pub name: String,
    /// One of the owning class's subjects
    pub subject: String,
    /// Free-text questions, in the order they were added
    pub questions: Vec<String>,
}

/// A class taught by the signed-in teacher
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassRecord {
    /// Unique class identifier
    pub id: ClassId,
    /// Display label
    pub name: String,
    /// Number of enrolled students
    pub student_count: u32,
    /// Average progress in percent, always within 0..=100
    average_progress: u8,
    /// Subjects taught in this class
    pub subjects: Vec<String>,
    /// Quizzes assigned so far, oldest first
    pub quizzes: Vec<QuizRecord>,
}

impl ClassRecord {
    /// Create a class with no quizzes. Progress above 100 is clamped.
    pub fn new(
        id: impl Into<ClassId>,
        name: impl Into<String>,
        student_count: u32,
        average_progress: u8,
        subjects: &[&str],
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            student_count,
            average_progress: average_progress.min(100),
            subjects: subjects.iter().map(|s| s.to_string()).collect(),
            quizzes: Vec::new(),
        }
    }

    pub fn average_progress(&self) -> u8 {
        self.average_progress
    }

    /// Progress as a fraction for progress bars
    pub fn progress_fraction(&self) -> f32 {
        f32::from(self.average_progress) / 100.0
    }

    pub fn teaches(&self, subject: &str) -> bool {
        self.subjects.iter().any(|s| s == subject)
    }
}

/// Look up a class by id
pub fn find_class<'a>(classes: &'a [ClassRecord], id: &ClassId) -> Option<&'a ClassRecord> {
    classes.iter().find(|c| &c.id == id)
}

/// A read-only entry in the recent activity feed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityEntry {
    pub student: String,
    /// Short class tag, e.g. "6A"
    pub class_tag: String,
    pub description: String,
    /// Score ("85%") or status ("In Progress")
    pub outcome: String,
    /// Relative time label ("2 hours ago")
    pub time_label: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_is_clamped() {
        let class = ClassRecord::new("X", "Class X", 10, 250, &["Math"]);
        assert_eq!(class.average_progress(), 100);
        assert!((class.progress_fraction() - 1.0).abs() < 0.001);
    }

    #[test]
    fn test_new_class_has_no_quizzes() {
        let class = ClassRecord::new("6A", "Class 6-A", 32, 67, &["Math", "Science"]);
        assert!(class.quizzes.is_empty());
        assert!(class.teaches("Science"));
        assert!(!class.teaches("History"));
    }

    #[test]
    fn test_find_class() {
        let classes = initial_classes();
        let found = find_class(&classes, &ClassId::from("7B")).unwrap();
        assert_eq!(found.name, "Class 7-B");
        assert!(find_class(&classes, &ClassId::from("9Z")).is_none());
    }
}
