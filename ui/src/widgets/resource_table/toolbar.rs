//! Controls around the table: filters, bulk actions, notices and paging.

use egui::{Button, Color32, RichText, TextEdit, Ui};
use payables_business::{Notice, Pagination};

use super::TableAction;

pub const SEARCH_PARAM: &str = "search";
pub const STATUS_PARAM: &str = "status";

pub struct ToolbarInput<'a> {
    pub new_label: &'a str,
    pub statuses: &'a [&'static str],
    pub selected: usize,
    pub loading: bool,
    pub idle: bool,
}

pub fn render_toolbar<F>(
    ui: &mut Ui,
    input: &ToolbarInput<'_>,
    search: &mut String,
    status: &mut String,
    actions: &mut Vec<TableAction<F>>,
) {
    ui.horizontal(|ui| {
        let response = ui.add(
            TextEdit::singleline(search)
                .hint_text("Search…")
                .desired_width(200.0),
        );
        if response.changed() {
            actions.push(TableAction::Filter(SEARCH_PARAM, search.clone()));
        }

        if !input.statuses.is_empty() {
            let before = status.clone();
            egui::ComboBox::from_id_salt(ui.id().with("status_filter"))
                .selected_text(if status.is_empty() { "All statuses" } else { status.as_str() })
                .show_ui(ui, |ui| {
                    ui.selectable_value(status, String::new(), "All statuses");
                    for option in input.statuses {
                        ui.selectable_value(status, (*option).to_owned(), *option);
                    }
                });
            if *status != before {
                actions.push(TableAction::Filter(STATUS_PARAM, status.clone()));
            }
        }

        if ui.button("Refresh").clicked() {
            actions.push(TableAction::Refresh);
        }
        if input.loading {
            ui.spinner();
        }

        ui.separator();

        if ui
            .add_enabled(input.idle, Button::new(input.new_label))
            .clicked()
        {
            actions.push(TableAction::StartCreate);
        }
        let bulk = Button::new(format!("Delete selected ({})", input.selected));
        if ui.add_enabled(input.selected > 0, bulk).clicked() {
            actions.push(TableAction::BulkDelete);
        }
    });
}

pub fn render_notice<F>(ui: &mut Ui, notice: Option<&Notice>, actions: &mut Vec<TableAction<F>>) {
    let Some(notice) = notice else {
        return;
    };
    let color = if notice.is_error() {
        Color32::RED
    } else {
        Color32::from_rgb(34, 139, 34)
    };
    ui.horizontal(|ui| {
        ui.label(RichText::new(notice.message()).color(color));
        if ui.small_button("Dismiss").clicked() {
            actions.push(TableAction::DismissNotice);
        }
    });
}

pub fn render_pagination<F>(ui: &mut Ui, pagination: &Pagination, actions: &mut Vec<TableAction<F>>) {
    ui.horizontal(|ui| {
        if ui
            .add_enabled(pagination.has_previous, Button::new("Previous"))
            .clicked()
        {
            actions.push(TableAction::GoToPage(pagination.page.saturating_sub(1)));
        }
        ui.label(format!(
            "Page {} · {} total",
            pagination.page, pagination.total_count
        ));
        if ui
            .add_enabled(pagination.has_next, Button::new("Next"))
            .clicked()
        {
            actions.push(TableAction::GoToPage(pagination.page + 1));
        }
    });
}
