#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]
// Entry point kept minimal: logger, localization, window config, run.

use eframe::{egui, egui_wgpu::WgpuConfiguration};

mod app;
mod deck;
mod export;
mod localization;
mod logger;
mod model;
mod types;
mod ui_constants;
mod views;

fn main() -> eframe::Result<()> {
    logger::init();
    // Language follows the system locale; nothing is persisted between runs.
    if let Err(e) = localization::initialize_localization(None) {
        log::error!("Localization initialization failed: {e}");
    }

    let wgpu_options = WgpuConfiguration {
        present_mode: eframe::wgpu::PresentMode::AutoVsync,
        ..Default::default()
    };
    let native_options = eframe::NativeOptions {
        renderer: eframe::Renderer::Wgpu,
        hardware_acceleration: eframe::HardwareAcceleration::Preferred,
        wgpu_options,
        viewport: egui::ViewportBuilder::default()
            .with_title(localization::translate("app-window-title"))
            .with_inner_size([1080.0, 760.0])
            .with_resizable(true),
        ..Default::default()
    };

    let res = eframe::run_native(
        localization::translate("app-window-title").as_str(),
        native_options,
        Box::new(|cc| {
            cc.egui_ctx.set_visuals(egui::Visuals::light());
            Box::new(app::ValueDeckApp::default())
        }),
    );
    if let Err(ref e) = res {
        log::error!("eframe::run_native failed: {e}");
    }
    res
}
