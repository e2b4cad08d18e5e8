/**
 * groupdesk Admin Panel - Main Entry Point
 *
 * Native egui window listing groups from the gateway, with search and
 * membership editing.
 */
use std::sync::Arc;

use eframe::egui;
use groupdesk::egui_app::groups::view;
use groupdesk::egui_app::theme::styles;
use groupdesk::egui_app::{Config, GroupListState, HttpGroupApi, ViewCapabilities};

fn main() -> Result<(), eframe::Error> {
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&env_filter))
        .init();

    let config = Config::new();
    tracing::info!("[STARTUP] Using gateway at {}", config.server_url());

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 700.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Group Admin",
        options,
        Box::new(move |cc| {
            styles::apply_global_theme(&cc.egui_ctx);
            Ok(Box::new(GroupDeskApp::new(config)))
        }),
    )
}

/// Main application state
struct GroupDeskApp {
    state: GroupListState,
}

impl GroupDeskApp {
    fn new(config: Config) -> Self {
        let api = Arc::new(HttpGroupApi::new(config));
        let mut state = GroupListState::new(api, ViewCapabilities::default());
        state.load();
        Self { state }
    }
}

impl eframe::App for GroupDeskApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.state.check_pending_operations();

        view::render(ctx, &mut self.state);

        if self.state.is_busy() {
            ctx.request_repaint_after(std::time::Duration::from_millis(100));
        }
    }
}
