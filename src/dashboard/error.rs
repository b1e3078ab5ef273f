//! Validation failures raised by dashboard actions

use thiserror::Error;

use crate::roster::ClassId;
use crate::shared::Notification;

/// A precondition for a user action was not met. Never fatal; state is
/// left untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DashboardError {
    /// The action needs a selected class
    #[error("Please select a class first to {purpose}.")]
    NoClassSelected { purpose: &'static str },

    /// The quiz form is incomplete
    #[error("Please fill all fields and add at least 1 question.")]
    MissingInformation,

    /// The id does not belong to any class on the dashboard
    #[error("No class with id {0} exists.")]
    UnknownClass(ClassId),
}

impl DashboardError {
    /// Toast title for this failure
    pub fn title(&self) -> &'static str {
        match self {
            DashboardError::NoClassSelected { .. } => "No Class Selected",
            DashboardError::MissingInformation => "Missing Information",
            DashboardError::UnknownClass(_) => "Unknown Class",
        }
    }
}

impl From<&DashboardError> for Notification {
    fn from(err: &DashboardError) -> Self {
        Notification::error(err.title(), err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_class_selected_message() {
        let err = DashboardError::NoClassSelected { purpose: "view reports" };
        let notification = Notification::from(&err);

        assert_eq!(notification.title, "No Class Selected");
        assert_eq!(notification.description, "Please select a class first to view reports.");
        assert!(notification.is_error());
    }

    #[test]
    fn test_missing_information_message() {
        let notification = Notification::from(&DashboardError::MissingInformation);
        assert_eq!(notification.title, "Missing Information");
        assert!(notification.description.contains("at least 1 question"));
    }
}
