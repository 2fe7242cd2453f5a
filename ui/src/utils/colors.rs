//! Shared color constants for the UI.

use egui::Color32;

/// Forest green for settled states (approved, paid, active).
pub const COLOR_GREEN: Color32 = Color32::from_rgb(34, 139, 34);

/// Red for failed or rejected states.
pub const COLOR_RED: Color32 = Color32::from_rgb(220, 53, 69);

/// Amber for states still waiting on someone.
pub const COLOR_AMBER: Color32 = Color32::from_rgb(255, 193, 7);

pub const COLOR_GRAY: Color32 = Color32::from_rgb(128, 128, 128);

/// Color of a workflow status label.
pub fn status_color(status: &str) -> Color32 {
    match status {
        "Active" | "Approved" | "Paid" | "Received" | "Reimbursed" => COLOR_GREEN,
        "Pending" => COLOR_AMBER,
        "Failed" | "Rejected" | "Inactive" => COLOR_RED,
        _ => COLOR_GRAY,
    }
}
