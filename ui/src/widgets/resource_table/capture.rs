//! egui side of a column drag.
//!
//! egui already keeps delivering drag events to the widget that started the
//! drag, even once the pointer leaves it. What the capture owns is the global
//! override: label text selection is switched off for the whole context while
//! a column is being resized, and the resize cursor is forced every frame.

use egui::{Context, CursorIcon, Id};
use payables_states::PointerCapture;

fn active_id() -> Id {
    Id::new("payables_column_resize_active")
}

/// Whether any column drag currently holds the pointer.
pub fn is_capturing(ctx: &Context) -> bool {
    ctx.data(|d| d.get_temp::<bool>(active_id()).unwrap_or(false))
}

/// Re-applies the resize cursor while a capture is active. Call once per frame.
pub fn apply_cursor(ctx: &Context) {
    if is_capturing(ctx) {
        ctx.set_cursor_icon(CursorIcon::ResizeColumn);
    }
}

pub struct EguiPointerCapture {
    ctx: Context,
    selectable_labels: bool,
    released: bool,
}

impl EguiPointerCapture {
    pub fn acquire(ctx: &Context) -> Self {
        let selectable_labels = ctx.style().interaction.selectable_labels;
        ctx.style_mut(|style| style.interaction.selectable_labels = false);
        ctx.data_mut(|d| d.insert_temp(active_id(), true));
        ctx.set_cursor_icon(CursorIcon::ResizeColumn);
        Self {
            ctx: ctx.clone(),
            selectable_labels,
            released: false,
        }
    }
}

impl PointerCapture for EguiPointerCapture {
    fn release(&mut self) {
        if self.released {
            return;
        }
        self.released = true;
        let selectable_labels = self.selectable_labels;
        self.ctx
            .style_mut(|style| style.interaction.selectable_labels = selectable_labels);
        self.ctx.data_mut(|d| d.remove::<bool>(active_id()));
    }
}
