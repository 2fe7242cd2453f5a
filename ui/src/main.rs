#![warn(clippy::all, rust_2018_idioms)]
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use anyhow::Context as _;
use payables_business::BusinessConfig;
use payables_ui::state::State;

mod alloc {
    #[global_allocator]
    static MALLOC: mimalloc::MiMalloc = mimalloc::MiMalloc;
}

fn main() -> anyhow::Result<()> {
    // A missing .env is fine; the process environment and build defaults apply.
    let dotenv = dotenvy::dotenv();

    // Log to stderr (if you run with `RUST_LOG=debug`).
    env_logger::Builder::from_env(env_logger::Env::default())
        .filter_module("egui_winit::clipboard", log::LevelFilter::Off)
        .init();

    if let Ok(path) = dotenv {
        log::info!("loaded environment from {}", path.display());
    }

    let config = BusinessConfig::from_env().context("invalid configuration")?;
    log::info!("using API at {}", config.api_url());

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .thread_name("payables-io")
        .build()
        .context("failed to start the tokio runtime")?;

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 760.0])
            .with_min_inner_size([720.0, 420.0]),
        ..Default::default()
    };

    let handle = runtime.handle().clone();
    eframe::run_native(
        "Payables",
        native_options,
        Box::new(move |_cc| {
            let state = State::new(config, handle);
            Ok(Box::new(payables_ui::PayablesApp::new(state)))
        }),
    )
    .map_err(|e| anyhow::anyhow!("eframe failed: {e}"))?;

    runtime.shutdown_timeout(std::time::Duration::from_secs(1));
    Ok(())
}
