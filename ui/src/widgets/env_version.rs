use egui::{Color32, Response, Ui};
use payables_business::BusinessConfig;

/// Name of the environment this build was compiled for.
pub fn env_name() -> &'static str {
    if cfg!(feature = "env_test") {
        "test"
    } else if cfg!(feature = "env_pr") {
        "pr"
    } else if cfg!(feature = "env_internal") {
        "internal"
    } else if cfg!(feature = "env_nightly") {
        "nightly"
    } else {
        "stable"
    }
}

/// Displays the build environment and the API it talks to, as `env:base-url`.
pub fn env_version(ui: &mut Ui, config: &BusinessConfig) -> Response {
    let env = env_name();

    // Color based on environment
    let color = match env {
        "stable" => Color32::GREEN,
        "nightly" => Color32::from_rgb(255, 165, 0), // Orange
        "pr" => Color32::LIGHT_BLUE,
        "internal" => Color32::YELLOW,
        _ => Color32::from_rgb(200, 200, 200), // Light gray
    };

    ui.colored_label(color, format!("{env}:{}", config.api_base_url))
}

#[cfg(test)]
mod env_version_widget_test {
    use egui_kittest::Harness;
    use kittest::Queryable;
    use payables_business::BusinessConfig;

    #[test]
    fn test_env_version_shows_base_url() {
        let config = BusinessConfig::new("http://localhost:4000".to_owned());
        let mut harness = Harness::new_ui(move |ui| {
            super::env_version(ui, &config);
        });
        harness.step();

        assert!(
            harness
                .query_by_label_contains("http://localhost:4000")
                .is_some(),
            "env_version widget should display the API base url"
        );
    }
}
