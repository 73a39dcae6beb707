mod app;
mod audio;
mod config;
mod controller;
mod http;
mod logging;
mod playlist;
mod runtime;
mod ui;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    runtime::run()
}
