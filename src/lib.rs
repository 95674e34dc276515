// src/lib.rs

pub mod api;
pub mod app;
pub mod chat_log;
pub mod client;
pub mod config;
pub mod constants;
pub mod errors;
pub mod key_handlers;
pub mod logging;
pub mod models;
pub mod status_indicator;
pub mod thinking;
pub mod typewriter;
pub mod ui;

pub use app::App;
pub use client::ChatClient;
pub use errors::{CvChatError, CvChatResult};
