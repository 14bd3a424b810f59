//! Build-time configuration for the ESP32-C6 pet tracker
//!
//! The values come from `cfg.toml` (see `cfg.toml.example`), are turned into
//! [`config::CONFIG`] by `build.rs`, and are checked at compile time. An
//! invalid configuration fails the build with a message naming the field.

#![no_std]
#![deny(unsafe_code)]

pub mod config;
pub mod constants;
pub mod endpoint;
pub mod validate;

pub use config::{DeviceConfig, CONFIG};
pub use validate::{Error, Field};
