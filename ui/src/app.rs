use crate::pages::{self, Route};
use crate::{state::State, widgets};

pub struct PayablesApp {
    pub state: State,
}

impl PayablesApp {
    /// Called once before the first frame.
    pub fn new(state: State) -> Self {
        Self { state }
    }
}

impl eframe::App for PayablesApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            egui::MenuBar::new().ui(ui, |ui| {
                ui.strong("Payables");
                ui.separator();
                widgets::env_version(ui, &self.state.config);
            });
        });

        egui::SidePanel::left("navigation")
            .resizable(false)
            .default_width(160.0)
            .show(ctx, |ui| {
                ui.add_space(8.0);
                for route in Route::ALL {
                    if ui
                        .selectable_label(self.state.route == route, route.title())
                        .clicked()
                    {
                        log::debug!("navigating to {}", route.title());
                        self.state.route = route;
                    }
                }
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            pages::current_page(&mut self.state, ui);
        });
    }
}
