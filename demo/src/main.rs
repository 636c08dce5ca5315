#![warn(clippy::all, rust_2018_idioms)]
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod data;

fn main() -> eframe::Result {
    // Log to stderr (if you run with `RUST_LOG=debug`).
    env_logger::Builder::from_env(env_logger::Env::default()).init();

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 620.0])
            .with_min_inner_size([640.0, 400.0]),
        ..Default::default()
    };

    let users = data::load_users().expect("embedded demo dataset should parse");

    eframe::run_native(
        "Tablegen Demo",
        native_options,
        Box::new(move |_cc| Ok(Box::new(app::DemoApp::new(users)))),
    )
}
