//! `glassdesk-shell`
//!
//! **Responsibility:** the thin application shell around the inventory model.
//!
//! This crate provides:
//! - Environment-driven configuration
//! - Seed loading (built-in fixture or JSON file)
//! - Platform-selected navigation chrome (native tab strip vs floating tab bar)
//! - A plain-text inventory screen presenter

pub mod bootstrap;
pub mod config;
pub mod navigation;
pub mod screen;

pub use bootstrap::{SeedError, load_inventory};
pub use config::{AppConfig, ConfigError, Platform};
pub use navigation::{FloatingTabBar, NativeTabStrip, Tab, TabChrome, chrome_for};
pub use screen::InventoryScreen;
