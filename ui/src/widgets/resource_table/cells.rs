//! Cell widgets shared by every resource table.
//!
//! Edit cells never write into the draft directly. They return the new value
//! when the user changed it, and the table turns that into a field update on
//! the inline edit controller.

use chrono::NaiveDate;
use egui::{Align, Color32, DragValue, Layout, RichText, TextEdit, Ui};

pub const DATE_FORMAT: &str = "%Y-%m-%d";

#[inline]
pub fn text_cell(ui: &mut Ui, text: &str) {
    ui.add(egui::Label::new(text).truncate());
}

#[inline]
pub fn amount_cell(ui: &mut Ui, amount: f64) {
    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
        ui.label(RichText::new(format!("{amount:.2}")).monospace());
    });
}

#[inline]
pub fn date_cell(ui: &mut Ui, date: Option<NaiveDate>) {
    match date {
        Some(date) => ui.label(date.format(DATE_FORMAT).to_string()),
        None => ui.weak("-"),
    };
}

/// Colored status pill.
#[inline]
pub fn status_cell(ui: &mut Ui, label: &str, color: Color32) {
    ui.label(RichText::new(label).color(color).strong());
}

pub fn text_edit_cell(ui: &mut Ui, value: Option<&str>, hint: &str) -> Option<String> {
    let mut text = value.unwrap_or_default().to_owned();
    let response = ui.add(
        TextEdit::singleline(&mut text)
            .hint_text(hint)
            .desired_width(f32::INFINITY),
    );
    response.changed().then_some(text)
}

pub fn amount_edit_cell(ui: &mut Ui, value: Option<f64>) -> Option<f64> {
    let mut amount = value.unwrap_or_default();
    let response = ui.add(
        DragValue::new(&mut amount)
            .speed(1.0)
            .range(0.0..=f64::MAX)
            .fixed_decimals(2),
    );
    response.changed().then_some(amount)
}

pub fn days_edit_cell(ui: &mut Ui, value: Option<u32>) -> Option<u32> {
    let mut days = value.unwrap_or_default();
    let response = ui.add(DragValue::new(&mut days).range(0..=365).suffix(" d"));
    response.changed().then_some(days)
}

/// Free-text date input. Emits only once the text parses as `YYYY-MM-DD`.
///
/// The partially typed text lives in egui's temp memory next to the value it
/// was typed against, and is reset whenever the draft value changes from
/// elsewhere.
pub fn date_edit_cell(ui: &mut Ui, salt: &str, value: Option<NaiveDate>) -> Option<NaiveDate> {
    let id = ui.id().with(("date_edit", salt));
    let formatted = || {
        value
            .map(|date| date.format(DATE_FORMAT).to_string())
            .unwrap_or_default()
    };
    let mut text = match ui.data(|d| d.get_temp::<(Option<NaiveDate>, String)>(id)) {
        Some((seen, text)) if seen == value => text,
        _ => formatted(),
    };
    let response = ui.add(
        TextEdit::singleline(&mut text)
            .hint_text("YYYY-MM-DD")
            .desired_width(f32::INFINITY),
    );
    let parsed = NaiveDate::parse_from_str(text.trim(), DATE_FORMAT)
        .ok()
        .filter(|date| response.changed() && Some(*date) != value);
    ui.data_mut(|d| d.insert_temp(id, (parsed.or(value), text)));
    parsed
}

/// Drop-down over a closed set of values.
pub fn choice_edit_cell<T: Copy + PartialEq>(
    ui: &mut Ui,
    salt: &str,
    value: Option<T>,
    all: &[T],
    label: impl Fn(&T) -> &'static str,
) -> Option<T> {
    let mut selected = value;
    egui::ComboBox::from_id_salt(ui.id().with(("choice_edit", salt)))
        .selected_text(selected.as_ref().map(&label).unwrap_or("Select…"))
        .show_ui(ui, |ui| {
            for option in all {
                ui.selectable_value(&mut selected, Some(*option), label(option));
            }
        });
    match selected {
        Some(choice) if selected != value => Some(choice),
        _ => None,
    }
}

pub fn toggle_edit_cell(ui: &mut Ui, value: Option<bool>, text: &str) -> Option<bool> {
    let mut checked = value.unwrap_or_default();
    ui.checkbox(&mut checked, text).changed().then_some(checked)
}
