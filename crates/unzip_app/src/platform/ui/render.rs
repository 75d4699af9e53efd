use eframe::egui::{self, Button, RichText, TextEdit};
use unzip_core::{AppViewModel, Msg, Severity, TaskState};

use super::constants::*;

/// What the user did during one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiAction {
    Dispatch(Msg),
    BrowseArchive,
    BrowseDestination,
}

pub fn render(ui: &mut egui::Ui, view: &AppViewModel) -> Vec<UiAction> {
    let mut actions = Vec::new();

    egui::Grid::new("paths")
        .num_columns(3)
        .spacing([10.0, 8.0])
        .show(ui, |ui| {
            ui.label(LABEL_ARCHIVE);
            if let Some(text) = path_field(ui, &view.archive_path, view.inputs_enabled) {
                actions.push(UiAction::Dispatch(Msg::ArchivePathChanged(text)));
            }
            if ui
                .add_enabled(view.inputs_enabled, Button::new(BUTTON_BROWSE))
                .clicked()
            {
                actions.push(UiAction::BrowseArchive);
            }
            ui.end_row();

            ui.label(LABEL_DESTINATION);
            if let Some(text) = path_field(ui, &view.destination_path, view.inputs_enabled) {
                actions.push(UiAction::Dispatch(Msg::DestinationPathChanged(text)));
            }
            if ui
                .add_enabled(view.inputs_enabled, Button::new(BUTTON_BROWSE))
                .clicked()
            {
                actions.push(UiAction::BrowseDestination);
            }
            ui.end_row();
        });

    ui.add_space(SECTION_SPACING);
    ui.vertical_centered(|ui| {
        if ui
            .add_enabled(view.inputs_enabled, action_button(BUTTON_START))
            .clicked()
        {
            actions.push(UiAction::Dispatch(Msg::StartClicked));
        }

        ui.add_space(SECTION_SPACING);
        if view.task == TaskState::Running {
            ui.spinner();
        }
        ui.label(
            RichText::new(&view.status.text)
                .size(STATUS_TEXT_SIZE)
                .color(status_color(view.status.severity)),
        );
        ui.add_space(SECTION_SPACING);

        if ui.add(action_button(BUTTON_STOP)).clicked() {
            actions.push(UiAction::Dispatch(Msg::StopClicked));
        }
    });

    actions
}

/// Single-line path editor; returns the new text when the user changed it.
fn path_field(ui: &mut egui::Ui, current: &str, enabled: bool) -> Option<String> {
    let mut text = current.to_string();
    let response = ui.add_enabled(
        enabled,
        TextEdit::singleline(&mut text).desired_width(FIELD_WIDTH),
    );
    response.changed().then_some(text)
}

fn action_button(label: &str) -> Button<'static> {
    Button::new(RichText::new(label.to_string()).strong().size(ACTION_TEXT_SIZE))
        .min_size(ACTION_BUTTON_SIZE)
}

fn status_color(severity: Severity) -> egui::Color32 {
    match severity {
        Severity::Info => STATUS_OK,
        Severity::Error => STATUS_ERROR,
    }
}
