//! Quiz modal - author a quiz and assign it to the class picked at open time

use egui::{Align2, RichText};

use crate::dashboard::state::{DashboardAction, DashboardState, QuizDraft};
use crate::dashboard::theme::{accent_button, ThemeColors};
use crate::roster::ClassRecord;

/// Render the quiz modal if it is open
pub fn render_quiz_modal(ctx: &egui::Context, state: &DashboardState, actions: &mut Vec<DashboardAction>) {
    let (Some(draft), Some(class)) = (state.quiz_modal().draft(), state.quiz_target()) else {
        return;
    };

    egui::Window::new(format!("Assign Quiz to {}", class.name))
        .id(egui::Id::new("quiz_modal"))
        .collapsible(false)
        .resizable(false)
        .anchor(Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
        .default_width(420.0)
        .show(ctx, |ui| {
            render_quiz_form(ui, draft, class, actions);
        });
}

fn render_quiz_form(ui: &mut egui::Ui, draft: &QuizDraft, class: &ClassRecord, actions: &mut Vec<DashboardAction>) {
    ui.label(RichText::new("Quiz Name:").strong());
    let mut name = draft.name.clone();
    if ui
        .add(egui::TextEdit::singleline(&mut name).hint_text("Enter quiz name").desired_width(f32::INFINITY))
        .changed()
    {
        actions.push(DashboardAction::SetDraftName(name));
    }

    ui.add_space(12.0);

    ui.label(RichText::new("Select Subject:").strong());
    let mut subject = draft.subject.clone();
    let selected_text = if subject.is_empty() { "Select subject" } else { subject.as_str() }.to_owned();
    egui::ComboBox::from_id_salt("quiz_subject")
        .selected_text(selected_text)
        .width(ui.available_width())
        .show_ui(ui, |ui| {
            for option in &class.subjects {
                ui.selectable_value(&mut subject, option.clone(), option);
            }
        });
    if subject != draft.subject {
        actions.push(DashboardAction::SetDraftSubject(subject));
    }

    ui.add_space(12.0);

    ui.label(RichText::new("Add Questions:").strong());
    ui.horizontal(|ui| {
        let mut question = draft.current_question.clone();
        let response = ui.add(
            egui::TextEdit::singleline(&mut question)
                .hint_text("Enter a question")
                .desired_width(ui.available_width() - 60.0)
        );
        if response.changed() {
            actions.push(DashboardAction::SetDraftQuestionText(question));
        }
        let submitted = response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
        if ui.button("Add").clicked() || submitted {
            actions.push(DashboardAction::AddDraftQuestion);
        }
    });

    if !draft.questions.is_empty() {
        ui.add_space(8.0);
        egui::Frame::none()
            .fill(ThemeColors::BG_MUTED)
            .rounding(egui::Rounding::same(6.0))
            .inner_margin(10.0)
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.label(RichText::new(format!("Questions ({}):", draft.questions.len())).strong());
                egui::ScrollArea::vertical().max_height(120.0).show(ui, |ui| {
                    for question in &draft.questions {
                        ui.label(format!("• {question}"));
                    }
                });
            });
    }

    ui.add_space(16.0);

    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
        if ui.add(accent_button("Create Quiz", ThemeColors::DASHBOARD_ORANGE)).clicked() {
            actions.push(DashboardAction::SubmitQuiz);
        }
        if ui.button("Cancel").clicked() {
            actions.push(DashboardAction::CancelQuizModal);
        }
    });
}
