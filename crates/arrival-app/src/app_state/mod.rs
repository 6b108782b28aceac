//! Top-level application state.
//!
//! Implements `winit::application::ApplicationHandler` to drive the main
//! event loop. Coordinates config, the map page webview, the sheet and
//! progress state machines, and background route fetches.

mod bounds;
mod core;
mod event_handler;
mod init;
mod ipc_dispatch;
mod location;
mod page;
mod polling;
mod routes;
mod shutdown;
mod types;


pub use core::ArrivalApp;
