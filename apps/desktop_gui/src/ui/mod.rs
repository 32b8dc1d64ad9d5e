//! UI layer for the desktop quote window.

pub mod app;

pub use app::QuoteApp;
