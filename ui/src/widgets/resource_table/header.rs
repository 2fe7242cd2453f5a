//! Header row: tri-state select-all box, column titles and resize handles.

use egui::{Checkbox, CursorIcon, Rect, Sense, Ui, pos2};
use egui_extras::TableRow;
use payables_states::TriState;
use ustr::Ustr;

use super::columns::{RESIZE_HANDLE_WIDTH, TableColumn};

/// Pointer activity on a resize handle during this frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ResizeEvent {
    Start {
        key: Ustr,
        min_width: f32,
        pointer_x: f32,
        rendered_width: f32,
    },
    Move(f32),
    End,
    Reset(Ustr),
}

#[derive(Debug, Default)]
pub struct HeaderResult {
    pub toggle_all: bool,
    pub resize: Vec<ResizeEvent>,
}

pub fn render_table_header(
    header: &mut TableRow<'_, '_>,
    columns: &[TableColumn],
    select_state: TriState,
) -> HeaderResult {
    let mut result = HeaderResult::default();

    header.col(|ui| {
        let mut all = select_state == TriState::All;
        let checkbox = Checkbox::without_text(&mut all).indeterminate(select_state == TriState::Some);
        if ui.add(checkbox).on_hover_text("Select page").changed() {
            result.toggle_all = true;
        }
    });

    for column in columns {
        header.col(|ui| {
            ui.strong(column.title);
            render_resize_handle(ui, column, &mut result.resize);
        });
    }

    header.col(|ui| {
        ui.strong("Actions");
    });

    result
}

fn render_resize_handle(ui: &mut Ui, column: &TableColumn, events: &mut Vec<ResizeEvent>) {
    let cell = ui.max_rect();
    let handle = Rect::from_min_max(
        pos2(cell.right() - RESIZE_HANDLE_WIDTH, cell.top()),
        pos2(cell.right(), cell.bottom()),
    );
    let response = ui.interact(
        handle,
        ui.id().with(("column_resize", column.key)),
        Sense::click_and_drag(),
    );

    if response.hovered() || response.dragged() {
        ui.ctx().set_cursor_icon(CursorIcon::ResizeColumn);
        let stroke = ui.visuals().widgets.active.bg_stroke;
        ui.painter()
            .vline(handle.center().x, handle.y_range(), stroke);
    }

    let pointer_x = response.interact_pointer_pos().map(|pos| pos.x);
    if response.double_clicked() {
        events.push(ResizeEvent::Reset(Ustr::from(column.key)));
    } else if response.drag_started() {
        if let Some(pointer_x) = pointer_x {
            events.push(ResizeEvent::Start {
                key: Ustr::from(column.key),
                min_width: column.min_width,
                pointer_x,
                rendered_width: cell.width(),
            });
        }
    } else if response.dragged() {
        if let Some(pointer_x) = pointer_x {
            events.push(ResizeEvent::Move(pointer_x));
        }
    }
    if response.drag_stopped() {
        events.push(ResizeEvent::End);
    }
}
