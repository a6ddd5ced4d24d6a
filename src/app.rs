use std::fs;
use std::path::Path;
use std::sync::Arc;

use eframe::{egui, App, CreationContext, Frame};
use egui::{Color32, Key, RichText, ScrollArea, Slider, TextEdit, Ui};
use egui_extras::{Column, TableBuilder};
use log::{debug, error, info, warn};

use crate::config::{Config, Theme};
use crate::models::{
    ActivityLog, Day, SessionState, Stage, CONFIDENCE_RANGE, DURATION_RANGE, FREQUENCY_RANGE,
    WEEKLY_MINUTES_RANGE,
};
use crate::store::{SessionStore, Submission};
use crate::summary::{summarize, CLOSING_LINE};
use crate::views::{
    View, BARRIERS_PROMPT, CARDIO_PROMPT, CONFIDENCE_PROMPT, DURATION_PROMPT, EDUCATION,
    FREQUENCY_PROMPT, STAGE_PROMPT, WEIGHT_PROMPT,
};

const SHORTCUT_KEYS: [Key; 8] = [
    Key::Num1,
    Key::Num2,
    Key::Num3,
    Key::Num4,
    Key::Num5,
    Key::Num6,
    Key::Num7,
    Key::Num8,
];

const NOTICE_COLOR: Color32 = Color32::from_rgb(0x4c, 0xaf, 0x50);

/// Widget values not yet submitted. They survive navigation between pages.
struct Drafts {
    confidence: u32,
    stage: Stage,
    frequency: u32,
    duration: u32,
    cardio_minutes: u32,
    weight_minutes: u32,
    barriers: String,
    activity_log: ActivityLog,
}

impl Drafts {
    fn from_state(state: &SessionState) -> Self {
        Self {
            confidence: state.confidence,
            stage: state.stage,
            frequency: state.exercise_frequency,
            duration: state.exercise_duration,
            cardio_minutes: state.cardio_minutes,
            weight_minutes: state.weight_minutes,
            barriers: state.barriers.clone(),
            activity_log: state.activity_log.clone(),
        }
    }
}

pub struct TrackerApp {
    store: SessionStore,
    view: View,
    drafts: Drafts,
    notice: Option<String>,
    last_recommendation_count: Option<usize>,
    /// Whether one of the text areas held keyboard focus last frame.
    text_edit_focused: bool,
}

impl TrackerApp {
    pub fn new(cc: &CreationContext, config: &Config) -> Self {
        apply_appearance(&cc.egui_ctx, config);

        let store = SessionStore::new();
        let drafts = Drafts::from_state(store.get_state());
        TrackerApp {
            store,
            view: config.start_view,
            drafts,
            notice: None,
            last_recommendation_count: None,
            text_edit_focused: false,
        }
    }

    fn select_view(&mut self, view: View) {
        if view != self.view {
            debug!("Switching view: {:?} -> {:?}", self.view, view);
            self.view = view;
            self.notice = None;
        }
    }

    fn handle_shortcuts(&mut self, ctx: &egui::Context) {
        let pressed = ctx.input(|i| SHORTCUT_KEYS.iter().position(|key| i.key_pressed(*key)));
        if let Some(view) = shortcut_target(pressed, self.text_edit_focused) {
            self.select_view(view);
        }
    }

    fn submit(&mut self, submission: Submission) {
        self.notice = Some(self.store.apply_submission(submission));
    }
}

impl App for TrackerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        self.handle_shortcuts(ctx);
        self.text_edit_focused = false;

        egui::SidePanel::left("navigation")
            .resizable(false)
            .show(ctx, |ui| {
                ui.add_space(10.0);
                ui.heading("Navigation");
                ui.separator();
                let mut selected = self.view;
                for view in View::ALL {
                    ui.radio_value(&mut selected, view, view.title());
                }
                self.select_view(selected);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            ScrollArea::vertical().show(ui, |ui| {
                ui.add_space(10.0);
                ui.heading(self.view.heading());
                let intro = self.view.intro();
                if !intro.is_empty() {
                    ui.label(intro);
                }
                ui.add_space(20.0);

                match self.view {
                    View::Home => {}
                    View::SelfEfficacy => self.show_self_efficacy(ui),
                    View::StagesOfChange => self.show_stages_of_change(ui),
                    View::PhysicalActivity => self.show_physical_activity(ui),
                    View::Barriers => self.show_barriers(ui),
                    View::Education => self.show_education(ui),
                    View::ActivityLog => self.show_activity_log(ui),
                    View::Results => self.show_results(ui),
                }

                if let Some(notice) = &self.notice {
                    ui.add_space(10.0);
                    ui.colored_label(NOTICE_COLOR, notice.as_str());
                }
            });
        });
    }
}

impl TrackerApp {
    fn show_self_efficacy(&mut self, ui: &mut Ui) {
        ui.label(CONFIDENCE_PROMPT);
        ui.add(Slider::new(&mut self.drafts.confidence, CONFIDENCE_RANGE));
        ui.add_space(10.0);
        if ui.button("Submit Self-Efficacy Score").clicked() {
            self.submit(Submission::SelfEfficacy {
                confidence: self.drafts.confidence,
            });
        }
    }

    fn show_stages_of_change(&mut self, ui: &mut Ui) {
        ui.label(STAGE_PROMPT);
        for stage in Stage::ALL {
            ui.radio_value(&mut self.drafts.stage, stage, stage.name());
        }
        ui.add_space(10.0);
        if ui.button("Submit Stage of Change").clicked() {
            self.submit(Submission::StageOfChange {
                stage: self.drafts.stage,
            });
        }
    }

    fn show_physical_activity(&mut self, ui: &mut Ui) {
        let drafts = &mut self.drafts;
        ui.label(FREQUENCY_PROMPT);
        ui.add(Slider::new(&mut drafts.frequency, FREQUENCY_RANGE));
        ui.label(DURATION_PROMPT);
        ui.add(Slider::new(&mut drafts.duration, DURATION_RANGE));
        ui.label(CARDIO_PROMPT);
        ui.add(Slider::new(&mut drafts.cardio_minutes, WEEKLY_MINUTES_RANGE));
        ui.label(WEIGHT_PROMPT);
        ui.add(Slider::new(&mut drafts.weight_minutes, WEEKLY_MINUTES_RANGE));
        ui.add_space(10.0);

        if ui.button("Submit Exercise Data").clicked() {
            let submission = Submission::PhysicalActivity {
                frequency: drafts.frequency,
                duration: drafts.duration,
                cardio_minutes: drafts.cardio_minutes,
                weight_minutes: drafts.weight_minutes,
            };
            self.submit(submission);
        }
    }

    fn show_barriers(&mut self, ui: &mut Ui) {
        ui.label(BARRIERS_PROMPT);
        let response = ui.add(
            TextEdit::multiline(&mut self.drafts.barriers)
                .desired_rows(4)
                .desired_width(f32::INFINITY),
        );
        self.text_edit_focused |= response.has_focus();
        ui.add_space(10.0);
        if ui.button("Submit Barriers").clicked() {
            self.submit(Submission::Barriers {
                text: self.drafts.barriers.clone(),
            });
        }
    }

    fn show_education(&mut self, ui: &mut Ui) {
        for section in EDUCATION {
            ui.label(RichText::new(section.title).strong());
            for bullet in section.bullets {
                ui.label(format!("• {}", bullet));
            }
            ui.add_space(10.0);
        }
    }

    fn show_activity_log(&mut self, ui: &mut Ui) {
        for day in Day::ALL {
            ui.label(format!("{} - Type of Activity & Minutes", day));
            let response = ui.add(
                TextEdit::multiline(self.drafts.activity_log.entry_mut(day))
                    .id_salt(day.name())
                    .desired_rows(2)
                    .desired_width(f32::INFINITY),
            );
            self.text_edit_focused |= response.has_focus();
        }
        ui.add_space(10.0);
        if ui.button("Submit Activity Log").clicked() {
            self.submit(Submission::ActivityLog(self.drafts.activity_log.clone()));
        }
    }

    fn show_results(&mut self, ui: &mut Ui) {
        let summary = summarize(self.store.get_state());

        if self.last_recommendation_count != Some(summary.recommendations.len()) {
            debug!("Results show {} recommendations", summary.recommendations.len());
            self.last_recommendation_count = Some(summary.recommendations.len());
        }

        for line in summary.lines() {
            ui.label(line);
        }

        ui.add_space(10.0);
        ui.label(RichText::new("Weekly Activity Log:").strong());
        let today = Day::today();
        TableBuilder::new(ui)
            .striped(true)
            .vscroll(false)
            .column(Column::initial(140.0))
            .column(Column::remainder())
            .header(24.0, |mut header| {
                header.col(|ui| {
                    ui.strong("Day");
                });
                header.col(|ui| {
                    ui.strong("Type of Activity & Minutes");
                });
            })
            .body(|mut body| {
                for (day, entry) in &summary.activity_log {
                    body.row(22.0, |mut row| {
                        row.set_selected(*day == today);
                        row.col(|ui| {
                            ui.label(day.name());
                        });
                        row.col(|ui| {
                            ui.label(entry.as_str());
                        });
                    });
                }
            });

        ui.add_space(20.0);
        ui.label(RichText::new("Recommendations:").heading());
        for recommendation in &summary.recommendations {
            ui.label(format!("- {}", recommendation));
        }
        ui.label(CLOSING_LINE);

        ui.add_space(10.0);
        if ui.button("Copy summary as JSON").clicked() {
            match summary.to_json() {
                Ok(json) => {
                    ui.ctx().copy_text(json);
                    info!("Copied session summary to clipboard");
                    self.notice = Some("Summary copied to clipboard.".to_string());
                }
                Err(e) => error!("Failed to export summary: {}", e),
            }
        }
    }
}

/// Digits typed into a text area are text, not navigation. Focus on any
/// other widget (a button reached with Tab, a slider) leaves shortcuts on.
fn shortcut_target(pressed: Option<usize>, text_edit_focused: bool) -> Option<View> {
    if text_edit_focused {
        return None;
    }
    pressed.and_then(View::from_index)
}

fn apply_appearance(ctx: &egui::Context, config: &Config) {
    if let Some(path) = &config.font_path {
        match load_font(path) {
            Ok(fonts) => ctx.set_fonts(fonts),
            Err(e) => warn!("Failed to open font file {}: {}", path.display(), e),
        }
    }

    ctx.set_theme(match config.theme {
        Theme::Dark => egui::Theme::Dark,
        Theme::Light => egui::Theme::Light,
    });

    let body = config.body_text_size;
    let heading = config.heading_text_size;
    ctx.all_styles_mut(|style| {
        style.text_styles.insert(
            egui::TextStyle::Body,
            egui::FontId::new(body, egui::FontFamily::Proportional),
        );
        style.text_styles.insert(
            egui::TextStyle::Button,
            egui::FontId::new(body, egui::FontFamily::Proportional),
        );
        style.text_styles.insert(
            egui::TextStyle::Heading,
            egui::FontId::new(heading, egui::FontFamily::Proportional),
        );
    });
}

fn load_font(path: &Path) -> std::io::Result<egui::FontDefinitions> {
    let font_data = fs::read(path)?;

    let mut fonts = egui::FontDefinitions::default();
    fonts.font_data.insert(
        "custom".to_owned(),
        Arc::from(egui::FontData::from_owned(font_data)),
    );
    fonts
        .families
        .insert(egui::FontFamily::Proportional, vec!["custom".to_owned()]);
    fonts
        .families
        .insert(egui::FontFamily::Monospace, vec!["custom".to_owned()]);
    Ok(fonts)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digit_selects_view_by_position() {
        assert_eq!(shortcut_target(Some(2), false), Some(View::StagesOfChange));
        assert_eq!(shortcut_target(Some(7), false), Some(View::Results));
        assert_eq!(shortcut_target(None, false), None);
    }

    #[test]
    fn test_digit_ignored_while_typing() {
        assert_eq!(shortcut_target(Some(2), true), None);
    }

    #[test]
    fn test_non_text_focus_keeps_shortcuts() {
        // a button or slider holding focus leaves the text flag unset
        assert_eq!(shortcut_target(Some(4), false), Some(View::Barriers));
    }
}
