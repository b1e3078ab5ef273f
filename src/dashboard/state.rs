//! Dashboard state management
//!
//! All dashboard data lives in [`DashboardState`]. Views never mutate it
//! directly; they emit [`DashboardAction`]s which are applied one at a time
//! through [`DashboardState::apply`].

use tracing::{debug, info};

use crate::dashboard::error::DashboardError;
use crate::roster::{find_class, initial_classes, recent_activities, ActivityEntry, ClassId, ClassRecord, QuizRecord};
use crate::shared::Notification;

/// Everything a user can do on the dashboard
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DashboardAction {
    SelectClass(ClassId),
    OpenQuizModal,
    SetDraftName(String),
    SetDraftSubject(String),
    SetDraftQuestionText(String),
    AddDraftQuestion,
    SubmitQuiz,
    CancelQuizModal,
    ViewReports,
    ClassAnalytics(ClassId),
    ViewClass(ClassId),
    Schedule,
    Messages,
    AddClass,
}

/// Result of applying an action: an optional confirmation to show
pub type ActionResult = Result<Option<Notification>, DashboardError>;

/// In-progress quiz, only alive while the modal is open
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizDraft {
    /// Class that was selected when the modal opened
    pub target: ClassId,
    pub name: String,
    pub subject: String,
    pub questions: Vec<String>,
    /// Contents of the question input field
    pub current_question: String,
}

impl QuizDraft {
    fn new(target: ClassId) -> Self {
        Self {
            target,
            name: String::new(),
            subject: String::new(),
            questions: Vec::new(),
            current_question: String::new(),
        }
    }
}

/// Quiz modal visibility
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum QuizModal {
    #[default]
    Closed,
    Open(QuizDraft),
}

impl QuizModal {
    pub fn is_open(&self) -> bool {
        matches!(self, QuizModal::Open(_))
    }

    pub fn draft(&self) -> Option<&QuizDraft> {
        match self {
            QuizModal::Open(draft) => Some(draft),
            QuizModal::Closed => None,
        }
    }
}

/// Overall dashboard state
#[derive(Debug, Clone)]
pub struct DashboardState {
    classes: Vec<ClassRecord>,
    activities: Vec<ActivityEntry>,
    selected_class: Option<ClassId>,
    quiz_modal: QuizModal,
}

impl Default for DashboardState {
    fn default() -> Self {
        Self::with_classes(initial_classes())
    }
}

impl DashboardState {
    /// Create a dashboard over the given classes with the demo activity feed
    pub fn with_classes(classes: Vec<ClassRecord>) -> Self {
        Self {
            classes,
            activities: recent_activities(),
            selected_class: None,
            quiz_modal: QuizModal::Closed,
        }
    }

    pub fn classes(&self) -> &[ClassRecord] {
        &self.classes
    }

    pub fn activities(&self) -> &[ActivityEntry] {
        &self.activities
    }

    pub fn selected_class_id(&self) -> Option<&ClassId> {
        self.selected_class.as_ref()
    }

    pub fn selected_class(&self) -> Option<&ClassRecord> {
        self.selected_class
            .as_ref()
            .and_then(|id| find_class(&self.classes, id))
    }

    pub fn quiz_modal(&self) -> &QuizModal {
        &self.quiz_modal
    }

    /// Class the open quiz modal is assigning to
    pub fn quiz_target(&self) -> Option<&ClassRecord> {
        self.quiz_modal
            .draft()
            .and_then(|draft| find_class(&self.classes, &draft.target))
    }

    /// Apply a single action. On error no state has changed.
    pub fn apply(&mut self, action: DashboardAction) -> ActionResult {
        match action {
            DashboardAction::SelectClass(id) => self.select_class(id),
            DashboardAction::OpenQuizModal => self.open_quiz_modal(),
            DashboardAction::SetDraftName(name) => {
                if let QuizModal::Open(draft) = &mut self.quiz_modal {
                    draft.name = name;
                }
                Ok(None)
            }
            DashboardAction::SetDraftSubject(subject) => self.set_draft_subject(subject),
            DashboardAction::SetDraftQuestionText(text) => {
                if let QuizModal::Open(draft) = &mut self.quiz_modal {
                    draft.current_question = text;
                }
                Ok(None)
            }
            DashboardAction::AddDraftQuestion => {
                if let QuizModal::Open(draft) = &mut self.quiz_modal {
                    let text = std::mem::take(&mut draft.current_question);
                    if !text.trim().is_empty() {
                        draft.questions.push(text);
                    }
                }
                Ok(None)
            }
            DashboardAction::SubmitQuiz => self.submit_quiz(),
            DashboardAction::CancelQuizModal => {
                if self.quiz_modal.is_open() {
                    debug!("Quiz modal cancelled");
                }
                self.quiz_modal = QuizModal::Closed;
                Ok(None)
            }
            DashboardAction::ViewReports => {
                let class = self
                    .selected_class()
                    .ok_or(DashboardError::NoClassSelected { purpose: "view reports" })?;
                Ok(Some(Notification::info(
                    "Reports Loading",
                    format!("Loading detailed reports for {}...", class.name),
                )))
            }
            DashboardAction::ClassAnalytics(id) => {
                let class = self.class(&id)?;
                Ok(Some(Notification::info(
                    "Class Analytics",
                    format!("Loading analytics dashboard for {}...", class.name),
                )))
            }
            DashboardAction::ViewClass(id) => {
                let class = self.class(&id)?;
                Ok(Some(Notification::info(
                    "Class Details",
                    format!("Loading detailed view for {}...", class.name),
                )))
            }
            DashboardAction::Schedule => Ok(Some(Notification::info(
                "Schedule Feature",
                "Opening class schedule and calendar...",
            ))),
            DashboardAction::Messages => Ok(Some(Notification::info(
                "Messages",
                "Opening teacher-student messaging system...",
            ))),
            DashboardAction::AddClass => Ok(Some(Notification::info(
                "Add New Class",
                "Opening class creation form...",
            ))),
        }
    }

    fn class(&self, id: &ClassId) -> Result<&ClassRecord, DashboardError> {
        find_class(&self.classes, id).ok_or_else(|| DashboardError::UnknownClass(id.clone()))
    }

    fn select_class(&mut self, id: ClassId) -> ActionResult {
        self.class(&id)?;
        debug!(class = %id, "Class selected");
        self.selected_class = Some(id);
        Ok(None)
    }

    fn open_quiz_modal(&mut self) -> ActionResult {
        let target = self
            .selected_class
            .clone()
            .ok_or(DashboardError::NoClassSelected { purpose: "assign a quiz" })?;
        debug!(class = %target, "Quiz modal opened");
        self.quiz_modal = QuizModal::Open(QuizDraft::new(target));
        Ok(None)
    }

    fn set_draft_subject(&mut self, subject: String) -> ActionResult {
        let QuizModal::Open(draft) = &mut self.quiz_modal else {
            return Ok(None);
        };
        let offered = find_class(&self.classes, &draft.target).is_some_and(|c| c.teaches(&subject));
        if offered {
            draft.subject = subject;
        } else {
            debug!(subject = %subject, class = %draft.target, "Ignoring subject not taught in class");
        }
        Ok(None)
    }

    fn submit_quiz(&mut self) -> ActionResult {
        let QuizModal::Open(draft) = &self.quiz_modal else {
            return Err(DashboardError::MissingInformation);
        };
        let target = self
            .classes
            .iter()
            .position(|c| c.id == draft.target)
            .ok_or(DashboardError::MissingInformation)?;

        if draft.name.is_empty()
            || draft.subject.is_empty()
            || !self.classes[target].teaches(&draft.subject)
            || draft.questions.is_empty()
        {
            return Err(DashboardError::MissingInformation);
        }

        let quiz = QuizRecord {
            name: draft.name.clone(),
            subject: draft.subject.clone(),
            questions: draft.questions.clone(),
        };
        let class = &mut self.classes[target];
        info!(
            class = %class.id,
            quiz = %quiz.name,
            questions = quiz.questions.len(),
            "Quiz assigned"
        );
        let notification = Notification::info(
            "Quiz Created Successfully!",
            format!(
                "Quiz \"{}\" has been assigned to {} for {}.",
                quiz.name, class.name, quiz.subject
            ),
        );
        class.quizzes.push(quiz);
        self.quiz_modal = QuizModal::Closed;
        Ok(Some(notification))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(s: &str) -> ClassId {
        ClassId::from(s)
    }

    fn apply_all(state: &mut DashboardState, actions: Vec<DashboardAction>) {
        for action in actions {
            state.apply(action).unwrap();
        }
    }

    fn open_draft(state: &mut DashboardState, class: &str) {
        apply_all(
            state,
            vec![DashboardAction::SelectClass(id(class)), DashboardAction::OpenQuizModal],
        );
    }

    #[test]
    fn test_last_selection_wins() {
        let mut state = DashboardState::default();
        for class in ["6A", "8C", "7B", "7B", "6A"] {
            state.apply(DashboardAction::SelectClass(id(class))).unwrap();
        }
        assert_eq!(state.selected_class_id(), Some(&id("6A")));
    }

    #[test]
    fn test_select_unknown_class_keeps_selection() {
        let mut state = DashboardState::default();
        state.apply(DashboardAction::SelectClass(id("7B"))).unwrap();

        let err = state.apply(DashboardAction::SelectClass(id("9Z"))).unwrap_err();

        assert_eq!(err, DashboardError::UnknownClass(id("9Z")));
        assert_eq!(state.selected_class_id(), Some(&id("7B")));
    }

    #[test]
    fn test_open_modal_requires_selection() {
        let mut state = DashboardState::default();
        let err = state.apply(DashboardAction::OpenQuizModal).unwrap_err();

        assert_eq!(err, DashboardError::NoClassSelected { purpose: "assign a quiz" });
        assert!(!state.quiz_modal().is_open());
    }

    #[test]
    fn test_open_modal_starts_with_empty_draft() {
        let mut state = DashboardState::default();
        open_draft(&mut state, "8C");

        let draft = state.quiz_modal().draft().unwrap();
        assert_eq!(draft.target, id("8C"));
        assert!(draft.name.is_empty());
        assert!(draft.subject.is_empty());
        assert!(draft.questions.is_empty());
        assert!(draft.current_question.is_empty());
    }

    #[test]
    fn test_submit_appends_quiz_to_selected_class_only() {
        let classes = vec![
            ClassRecord::new("A", "Class A", 20, 50, &["Math", "Science"]),
            ClassRecord::new("B", "Class B", 25, 70, &["Math", "Science"]),
        ];
        let mut state = DashboardState::with_classes(classes);
        let before_other = state.classes()[1].clone();
        let earlier = QuizRecord {
            name: "Warm-up".into(),
            subject: "Science".into(),
            questions: vec!["Q0?".into()],
        };
        state.classes[0].quizzes.push(earlier.clone());

        open_draft(&mut state, "A");
        apply_all(
            &mut state,
            vec![
                DashboardAction::SetDraftName("Unit Test Quiz".into()),
                DashboardAction::SetDraftSubject("Math".into()),
                DashboardAction::SetDraftQuestionText("Q1?".into()),
                DashboardAction::AddDraftQuestion,
                DashboardAction::SetDraftQuestionText("Q2?".into()),
                DashboardAction::AddDraftQuestion,
            ],
        );
        let notification = state.apply(DashboardAction::SubmitQuiz).unwrap().unwrap();

        let expected = QuizRecord {
            name: "Unit Test Quiz".into(),
            subject: "Math".into(),
            questions: vec!["Q1?".into(), "Q2?".into()],
        };
        assert_eq!(state.classes()[0].quizzes, vec![earlier, expected]);
        assert_eq!(state.classes()[1], before_other);
        assert!(!state.quiz_modal().is_open());
        assert_eq!(notification.title, "Quiz Created Successfully!");
        assert_eq!(
            notification.description,
            "Quiz \"Unit Test Quiz\" has been assigned to Class A for Math."
        );
    }

    #[test]
    fn test_submit_without_modal_is_rejected() {
        let mut state = DashboardState::default();
        let before = state.classes().to_vec();

        let err = state.apply(DashboardAction::SubmitQuiz).unwrap_err();

        assert_eq!(err, DashboardError::MissingInformation);
        assert_eq!(state.classes(), before.as_slice());
    }

    #[test]
    fn test_submit_without_questions_is_rejected() {
        let mut state = DashboardState::default();
        open_draft(&mut state, "6A");
        apply_all(
            &mut state,
            vec![
                DashboardAction::SetDraftName("Fractions".into()),
                DashboardAction::SetDraftSubject("Math".into()),
            ],
        );
        let before = state.classes().to_vec();

        let err = state.apply(DashboardAction::SubmitQuiz).unwrap_err();

        assert_eq!(err, DashboardError::MissingInformation);
        assert_eq!(state.classes(), before.as_slice());
        // Draft survives a failed submit
        assert_eq!(state.quiz_modal().draft().unwrap().name, "Fractions");
    }

    #[test]
    fn test_submit_with_empty_name_is_rejected() {
        let mut state = DashboardState::default();
        open_draft(&mut state, "6A");
        apply_all(
            &mut state,
            vec![
                DashboardAction::SetDraftSubject("Math".into()),
                DashboardAction::SetDraftQuestionText("Q1?".into()),
                DashboardAction::AddDraftQuestion,
            ],
        );

        assert_eq!(
            state.apply(DashboardAction::SubmitQuiz).unwrap_err(),
            DashboardError::MissingInformation
        );
        assert!(state.classes()[0].quizzes.is_empty());
    }

    #[test]
    fn test_quiz_name_kept_as_typed() {
        let mut state = DashboardState::default();
        open_draft(&mut state, "6A");
        apply_all(
            &mut state,
            vec![
                DashboardAction::SetDraftName(" Spaced Quiz ".into()),
                DashboardAction::SetDraftSubject("Math".into()),
                DashboardAction::SetDraftQuestionText("Q1?".into()),
                DashboardAction::AddDraftQuestion,
            ],
        );

        let notification = state.apply(DashboardAction::SubmitQuiz).unwrap().unwrap();

        assert_eq!(state.classes()[0].quizzes[0].name, " Spaced Quiz ");
        assert_eq!(
            notification.description,
            "Quiz \" Spaced Quiz \" has been assigned to Class 6-A for Math."
        );
    }

    #[test]
    fn test_subject_outside_class_is_ignored() {
        let mut state = DashboardState::default();
        open_draft(&mut state, "6A");
        state.apply(DashboardAction::SetDraftSubject("History".into())).unwrap();

        assert!(state.quiz_modal().draft().unwrap().subject.is_empty());
    }

    #[test]
    fn test_whitespace_question_is_dropped_and_input_cleared() {
        let mut state = DashboardState::default();
        open_draft(&mut state, "6A");
        apply_all(
            &mut state,
            vec![
                DashboardAction::SetDraftQuestionText("   ".into()),
                DashboardAction::AddDraftQuestion,
            ],
        );

        let draft = state.quiz_modal().draft().unwrap();
        assert!(draft.questions.is_empty());
        assert!(draft.current_question.is_empty());
    }

    #[test]
    fn test_question_kept_as_typed() {
        let mut state = DashboardState::default();
        open_draft(&mut state, "6A");
        apply_all(
            &mut state,
            vec![
                DashboardAction::SetDraftQuestionText(" What is 2+2? ".into()),
                DashboardAction::AddDraftQuestion,
            ],
        );

        assert_eq!(state.quiz_modal().draft().unwrap().questions, vec![" What is 2+2? "]);
    }

    #[test]
    fn test_cancel_discards_draft() {
        let mut state = DashboardState::default();
        open_draft(&mut state, "7B");
        apply_all(
            &mut state,
            vec![
                DashboardAction::SetDraftQuestionText("Q1?".into()),
                DashboardAction::AddDraftQuestion,
                DashboardAction::SetDraftQuestionText("Q2?".into()),
                DashboardAction::AddDraftQuestion,
                DashboardAction::CancelQuizModal,
            ],
        );
        assert!(!state.quiz_modal().is_open());
        assert!(state.classes().iter().all(|c| c.quizzes.is_empty()));

        state.apply(DashboardAction::OpenQuizModal).unwrap();
        assert!(state.quiz_modal().draft().unwrap().questions.is_empty());
    }

    #[test]
    fn test_modal_keeps_class_selected_at_open() {
        let mut state = DashboardState::default();
        open_draft(&mut state, "6A");
        apply_all(
            &mut state,
            vec![
                DashboardAction::SelectClass(id("8C")),
                DashboardAction::SetDraftName("Plants".into()),
                DashboardAction::SetDraftSubject("Science".into()),
                DashboardAction::SetDraftQuestionText("Why are leaves green?".into()),
                DashboardAction::AddDraftQuestion,
                DashboardAction::SubmitQuiz,
            ],
        );

        assert_eq!(state.classes()[0].quizzes.len(), 1);
        assert!(state.classes()[2].quizzes.is_empty());
        assert_eq!(state.selected_class_id(), Some(&id("8C")));
    }

    #[test]
    fn test_draft_edits_ignored_while_closed() {
        let mut state = DashboardState::default();
        state.apply(DashboardAction::SetDraftName("Ghost".into())).unwrap();
        state.apply(DashboardAction::AddDraftQuestion).unwrap();
        assert_eq!(state.quiz_modal(), &QuizModal::Closed);
    }

    #[test]
    fn test_view_reports() {
        let mut state = DashboardState::default();
        assert_eq!(
            state.apply(DashboardAction::ViewReports).unwrap_err(),
            DashboardError::NoClassSelected { purpose: "view reports" }
        );

        state.apply(DashboardAction::SelectClass(id("7B"))).unwrap();
        let notification = state.apply(DashboardAction::ViewReports).unwrap().unwrap();
        assert_eq!(notification.description, "Loading detailed reports for Class 7-B...");
    }

    #[test]
    fn test_class_buttons_do_not_change_selection() {
        let mut state = DashboardState::default();
        let analytics = state.apply(DashboardAction::ClassAnalytics(id("8C"))).unwrap().unwrap();
        let details = state.apply(DashboardAction::ViewClass(id("6A"))).unwrap().unwrap();

        assert_eq!(analytics.description, "Loading analytics dashboard for Class 8-C...");
        assert_eq!(details.title, "Class Details");
        assert!(state.selected_class_id().is_none());
    }

    #[test]
    fn test_unconditional_actions_always_notify() {
        let mut state = DashboardState::default();
        for action in [DashboardAction::Schedule, DashboardAction::Messages, DashboardAction::AddClass] {
            let notification = state.apply(action).unwrap().unwrap();
            assert!(!notification.is_error());
        }
    }
}
