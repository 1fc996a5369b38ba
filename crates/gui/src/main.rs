mod app;
mod ui;
mod viewport;

// Re-export library modules so that `crate::state`, `crate::input`, etc.
// resolve to the lib crate types everywhere in the binary.
pub use extrude_grid_lib::clipboard;
pub use extrude_grid_lib::input;
pub use extrude_grid_lib::state;

use app::GridApp;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "extrude_grid=info,extrude_grid_lib=info".into()),
        )
        .init();

    // Parse --load <path> argument
    let initial_blob = parse_load_arg();

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Extrude Grid")
            .with_inner_size([1400.0, 900.0])
            .with_min_inner_size([640.0, 400.0]),
        ..Default::default()
    };

    if let Err(e) = eframe::run_native(
        "extrude-grid",
        native_options,
        Box::new(move |cc| Ok(Box::new(GridApp::new(cc, initial_blob)))),
    ) {
        tracing::error!("Failed to start application: {e}");
    }
}

fn parse_load_arg() -> Option<String> {
    let args: Vec<String> = std::env::args().collect();
    let path = args
        .iter()
        .position(|a| a == "--load")
        .and_then(|i| args.get(i + 1))?;

    match std::fs::read_to_string(path) {
        Ok(blob) => {
            tracing::info!("Read saved grid from {path}");
            Some(blob)
        }
        Err(e) => {
            tracing::error!("Failed to read saved grid {path}: {e}");
            None
        }
    }
}
