pub mod app;
pub mod config;
pub mod data;
pub mod error;
pub mod fullscreen;
pub mod model;
pub mod session;
pub mod store;
pub mod ui;
pub mod view_models;
#[cfg(target_arch = "wasm32")]
mod web;

pub use app::QuizApp;
