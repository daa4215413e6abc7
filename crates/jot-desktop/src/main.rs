//! Jot Desktop Application
//!
//! A single-window client for a REST-backed notes service.

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod actions;
mod app;
mod components;
mod state;
mod theme;

use dioxus::desktop::{Config, WindowBuilder};
use jot_core::{ClientConfig, HttpNoteResource};

fn main() {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("jot=debug".parse().expect("valid directive")),
        )
        .init();

    tracing::info!("Starting Jot...");

    let resource = match ClientConfig::from_env().and_then(|config| {
        tracing::info!("Using notes service at {}", config.api_base_url);
        HttpNoteResource::new(&config)
    }) {
        Ok(resource) => resource,
        Err(e) => {
            tracing::error!("Failed to configure notes client: {}", e);
            std::process::exit(1);
        }
    };

    let config = Config::new().with_window(WindowBuilder::new().with_title("Personal Notes"));

    dioxus::LaunchBuilder::new()
        .with_cfg(config)
        .with_context(resource)
        .launch(app::App);
}
