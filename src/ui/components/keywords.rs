// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Role keyword editor: a draft field for comma-separated additions above a
//! wrapped row of removable, click-to-edit chips.
//!
//! All normalization goes through [`KeywordSet`], so what the editor shows is
//! exactly what the selector will match against.

use eframe::egui;

use crate::models::keywords::{DEFAULT_KEYWORDS, KeywordSet};

/// Editor state. The set never holds repeated entries.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeywordsModel {
    keywords: KeywordSet,
    draft: String,
    editing: Option<Edit>,
}

/// Inline edit of the chip at `index`.
#[derive(Clone, Debug, PartialEq, Eq)]
struct Edit {
    index: usize,
    buffer: String,
}

impl Default for KeywordsModel {
    fn default() -> Self {
        Self::from_set(&KeywordSet::parse(DEFAULT_KEYWORDS))
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum KeywordsMsg {
    DraftChanged(String),
    AddDraft,
    StartEdit(usize),
    EditChanged(String),
    CommitEdit,
    CancelEdit,
    Remove(usize),
    ResetDefaults,
    ClearAll,
}

/// Feedback for the status bar; errors also open the notice modal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeywordsEvent {
    pub message: String,
    pub is_error: bool,
}

impl KeywordsEvent {
    fn info(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            is_error: false,
        }
    }

    fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            is_error: true,
        }
    }
}

/// How the current draft would change the set if added now.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DraftPreview {
    pub fresh: Vec<String>,
    pub listed: Vec<String>,
}

impl KeywordsModel {
    pub fn from_set(set: &KeywordSet) -> Self {
        Self {
            keywords: set.deduplicated(),
            draft: String::new(),
            editing: None,
        }
    }

    /// Keyword set handed to the selection pipeline.
    pub fn keyword_set(&self) -> KeywordSet {
        self.keywords.clone()
    }

    /// Split the draft into keywords that would be added and ones already listed.
    pub fn preview_draft(&self) -> DraftPreview {
        let (listed, fresh) = KeywordSet::parse(&self.draft)
            .deduplicated()
            .items()
            .iter()
            .cloned()
            .partition(|kw| self.keywords.contains(kw));
        DraftPreview { fresh, listed }
    }
}

pub fn update(model: &mut KeywordsModel, msg: KeywordsMsg) -> Option<KeywordsEvent> {
    match msg {
        KeywordsMsg::DraftChanged(text) => {
            model.draft = text;
            None
        }
        KeywordsMsg::AddDraft => Some(add_draft(model)),
        KeywordsMsg::StartEdit(index) => {
            model.editing = model.keywords.items().get(index).map(|kw| Edit {
                index,
                buffer: kw.clone(),
            });
            None
        }
        KeywordsMsg::EditChanged(text) => {
            if let Some(edit) = model.editing.as_mut() {
                edit.buffer = text;
            }
            None
        }
        KeywordsMsg::CommitEdit => commit_edit(model),
        KeywordsMsg::CancelEdit => {
            model.editing = None;
            None
        }
        KeywordsMsg::Remove(index) => {
            let removed = model.keywords.remove(index)?;
            model.editing = None;
            Some(KeywordsEvent::info(format!("Removed \"{removed}\".")))
        }
        KeywordsMsg::ResetDefaults => {
            *model = KeywordsModel::default();
            Some(KeywordsEvent::info("Keywords reset to defaults."))
        }
        KeywordsMsg::ClearAll => {
            model.keywords.clear();
            model.editing = None;
            Some(KeywordsEvent::info(
                "Keywords cleared; every address will be ranked alphabetically.",
            ))
        }
    }
}

fn add_draft(model: &mut KeywordsModel) -> KeywordsEvent {
    let DraftPreview { fresh, listed } = model.preview_draft();
    if fresh.is_empty() && listed.is_empty() {
        return KeywordsEvent::info("Type one or more keywords, separated by commas.");
    }
    if fresh.is_empty() {
        return KeywordsEvent::info(format!("Already listed: {}.", listed.join(", ")));
    }

    let message = if listed.is_empty() {
        format!("Added {}.", fresh.join(", "))
    } else {
        format!(
            "Added {}; already listed: {}.",
            fresh.join(", "),
            listed.join(", ")
        )
    };
    model.keywords.extend_unique(fresh);
    model.draft.clear();
    KeywordsEvent::info(message)
}

fn commit_edit(model: &mut KeywordsModel) -> Option<KeywordsEvent> {
    let edit = model.editing.as_ref()?;
    let parsed = KeywordSet::parse(&edit.buffer);
    let keyword = match parsed.items() {
        [] => return Some(KeywordsEvent::error("Keyword cannot be empty.")),
        [single] => single.clone(),
        _ => {
            return Some(KeywordsEvent::error(
                "One keyword per chip; add lists through the field above.",
            ));
        }
    };

    let taken_elsewhere = model
        .keywords
        .items()
        .iter()
        .enumerate()
        .any(|(i, kw)| i != edit.index && *kw == keyword);
    if taken_elsewhere {
        return Some(KeywordsEvent::error(format!(
            "\"{keyword}\" is already listed."
        )));
    }

    model.keywords.replace(edit.index, keyword);
    model.editing = None;
    None
}

/// Render the editor and collect the messages triggered this frame.
pub fn view(ui: &mut egui::Ui, model: &KeywordsModel) -> Vec<KeywordsMsg> {
    let mut msgs = Vec::new();

    ui.horizontal(|ui| {
        ui.strong("Role Filters");
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui
                .add_enabled(
                    !model.keywords.is_empty(),
                    egui::Button::new(egui_phosphor::regular::BROOM),
                )
                .on_hover_text("Remove all keywords")
                .clicked()
            {
                msgs.push(KeywordsMsg::ClearAll);
            }
            if ui
                .button(egui_phosphor::regular::ARROW_COUNTER_CLOCKWISE)
                .on_hover_text(format!("Restore: {DEFAULT_KEYWORDS}"))
                .clicked()
            {
                msgs.push(KeywordsMsg::ResetDefaults);
            }
        });
    });
    ui.label(
        egui::RichText::new("Addresses whose local part contains a keyword are picked first.")
            .small()
            .color(egui::Color32::from_gray(110)),
    );
    ui.add_space(4.0);

    render_draft_row(ui, model, &mut msgs);
    ui.add_space(6.0);

    if model.keywords.is_empty() {
        ui.label(
            egui::RichText::new("No keywords; all addresses count as General.")
                .italics()
                .color(egui::Color32::from_gray(110)),
        );
    } else {
        ui.horizontal_wrapped(|ui| {
            for (index, keyword) in model.keywords.items().iter().enumerate() {
                match &model.editing {
                    Some(edit) if edit.index == index => render_edit_field(ui, edit, &mut msgs),
                    _ => render_chip(ui, index, keyword, &mut msgs),
                }
            }
        });
    }

    msgs
}

fn render_draft_row(ui: &mut egui::Ui, model: &KeywordsModel, msgs: &mut Vec<KeywordsMsg>) {
    let preview = model.preview_draft();

    ui.horizontal(|ui| {
        let mut draft = model.draft.clone();
        let field = ui.add(
            egui::TextEdit::singleline(&mut draft)
                .hint_text("owner, partner, sales")
                .desired_width(ui.available_width() - 36.0),
        );
        if field.changed() {
            msgs.push(KeywordsMsg::DraftChanged(draft));
        }
        let submitted = field.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

        let clicked = ui
            .add_enabled(
                !preview.fresh.is_empty(),
                egui::Button::new(egui_phosphor::regular::PLUS),
            )
            .on_hover_text("Add keywords")
            .clicked();
        if submitted || clicked {
            msgs.push(KeywordsMsg::AddDraft);
        }
    });

    if !preview.listed.is_empty() {
        ui.label(
            egui::RichText::new(format!("Already listed: {}", preview.listed.join(", ")))
                .small()
                .color(egui::Color32::from_rgb(170, 120, 40)),
        );
    }
}

fn render_chip(ui: &mut egui::Ui, index: usize, keyword: &str, msgs: &mut Vec<KeywordsMsg>) {
    egui::Frame::new()
        .fill(ui.visuals().faint_bg_color)
        .stroke(ui.visuals().widgets.noninteractive.bg_stroke)
        .corner_radius(10.0)
        .inner_margin(egui::Margin::symmetric(6, 2))
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.spacing_mut().item_spacing.x = 2.0;
                if ui
                    .add(egui::Label::new(keyword).sense(egui::Sense::click()))
                    .on_hover_text("Click to edit")
                    .clicked()
                {
                    msgs.push(KeywordsMsg::StartEdit(index));
                }
                if ui
                    .add(
                        egui::Button::new(egui::RichText::new(egui_phosphor::regular::X).small())
                            .frame(false),
                    )
                    .on_hover_text("Remove")
                    .clicked()
                {
                    msgs.push(KeywordsMsg::Remove(index));
                }
            });
        });
}

fn render_edit_field(ui: &mut egui::Ui, edit: &Edit, msgs: &mut Vec<KeywordsMsg>) {
    let mut buffer = edit.buffer.clone();
    let field = ui.add(egui::TextEdit::singleline(&mut buffer).desired_width(90.0));
    if field.changed() {
        msgs.push(KeywordsMsg::EditChanged(buffer));
    }

    if ui.input(|i| i.key_pressed(egui::Key::Escape)) {
        msgs.push(KeywordsMsg::CancelEdit);
    } else if field.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
        msgs.push(KeywordsMsg::CommitEdit);
    } else if ui
        .small_button(egui_phosphor::regular::CHECK)
        .on_hover_text("Save")
        .clicked()
    {
        msgs.push(KeywordsMsg::CommitEdit);
    }
}
