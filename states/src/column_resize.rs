//! Drag-to-resize column widths.
//!
//! The drag itself runs outside the render cycle: starting a drag records the
//! origin in a plain field (not observed state) and takes ownership of a
//! platform [`PointerCapture`], which stands for the document-scoped pointer
//! listeners plus any global cursor/text-selection override. The capture is
//! owned by a [`DragSession`] guard, so it is released exactly once whether the
//! drag ends with a pointer release, a new drag start, or the controller being
//! dropped mid-drag.

use ustr::{Ustr, UstrMap};

/// Declared layout of one resizable column.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnSpec {
    pub key: Ustr,
    /// `None` means "use the layout default".
    pub initial_width: Option<f32>,
    pub min_width: f32,
}

impl ColumnSpec {
    pub fn new(key: &str, initial_width: Option<f32>, min_width: f32) -> Self {
        Self {
            key: Ustr::from(key),
            initial_width,
            min_width,
        }
    }
}

/// Platform hook held for the lifetime of a drag.
///
/// Acquiring it (attaching listeners, overriding the cursor) is done by
/// whoever constructs it; `release` must undo all of that.
pub trait PointerCapture {
    fn release(&mut self);
}

/// An active drag. Dropping it releases the pointer capture.
pub struct DragSession {
    key: Ustr,
    start_x: f32,
    start_width: f32,
    min_width: f32,
    capture: Box<dyn PointerCapture>,
}

impl DragSession {
    /// Column being dragged.
    pub fn key(&self) -> Ustr {
        self.key
    }

    /// `max(min_width, start_width + (pointer_x - start_x))`.
    pub fn width_at(&self, pointer_x: f32) -> f32 {
        (self.start_width + (pointer_x - self.start_x)).max(self.min_width)
    }
}

impl std::fmt::Debug for DragSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DragSession")
            .field("key", &self.key)
            .field("start_x", &self.start_x)
            .field("start_width", &self.start_width)
            .field("min_width", &self.min_width)
            .finish_non_exhaustive()
    }
}

impl Drop for DragSession {
    fn drop(&mut self) {
        log::debug!("releasing pointer capture for column `{}`", self.key);
        self.capture.release();
    }
}

#[derive(Debug, Default)]
pub struct ColumnResizeController {
    columns: Vec<ColumnSpec>,
    widths: UstrMap<f32>,
    drag: Option<DragSession>,
}

impl ColumnResizeController {
    pub fn new(columns: Vec<ColumnSpec>) -> Self {
        let mut widths = UstrMap::default();
        for column in &columns {
            if let Some(width) = column.initial_width {
                widths.insert(column.key, width.max(column.min_width));
            }
        }
        Self {
            columns,
            widths,
            drag: None,
        }
    }

    /// Declared columns, in display order.
    pub fn columns(&self) -> &[ColumnSpec] {
        &self.columns
    }

    /// Width for `key`, or `None` when the layout default applies.
    pub fn width(&self, key: &str) -> Option<f32> {
        self.widths.get(&Ustr::from(key)).copied()
    }

    /// Width for `key`, falling back to `default`.
    pub fn width_or(&self, key: &str, default: f32) -> f32 {
        self.width(key).unwrap_or(default)
    }

    /// Whether a drag session is active.
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Column currently being dragged.
    pub fn dragging(&self) -> Option<Ustr> {
        self.drag.as_ref().map(DragSession::key)
    }

    /// Begins a drag on `key`'s resize handle.
    ///
    /// `rendered_width` is used as the starting width when the column has no
    /// explicit width yet. Any drag still in progress is torn down first.
    pub fn on_drag_start(
        &mut self,
        key: Ustr,
        min_width: f32,
        pointer_x: f32,
        rendered_width: f32,
        capture: impl PointerCapture + 'static,
    ) {
        if self.drag.take().is_some() {
            log::warn!("drag on `{key}` started while a previous drag was active");
        }
        let start_width = self.widths.get(&key).copied().unwrap_or(rendered_width);
        log::debug!("drag start on `{key}` at x={pointer_x} width={start_width}");
        self.drag = Some(DragSession {
            key,
            start_x: pointer_x,
            start_width,
            min_width,
            capture: Box::new(capture),
        });
    }

    /// Applies a pointer move. Returns the new width when it changed.
    pub fn on_pointer_move(&mut self, pointer_x: f32) -> Option<f32> {
        let session = self.drag.as_ref()?;
        let key = session.key;
        let width = session.width_at(pointer_x);
        let previous = self.widths.insert(key, width);
        (previous != Some(width)).then_some(width)
    }

    /// Ends the drag, releasing the pointer capture.
    pub fn on_pointer_up(&mut self) {
        if let Some(session) = self.drag.take() {
            log::debug!(
                "drag end on `{}` width={:?}",
                session.key,
                self.widths.get(&session.key)
            );
        }
    }

    /// Restores the declared initial width of `key`.
    pub fn reset_width(&mut self, key: &str) {
        let key = Ustr::from(key);
        let declared = self
            .columns
            .iter()
            .find(|column| column.key == key)
            .and_then(|column| column.initial_width.map(|w| w.max(column.min_width)));
        match declared {
            Some(width) => {
                self.widths.insert(key, width);
            }
            None => {
                self.widths.remove(&key);
            }
        }
    }
}
