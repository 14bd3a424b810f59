//! `cfg.toml` parsing and code generation for `build.rs`.

use std::fmt::{self, Write as _};

use serde::Deserialize;

#[derive(Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct RawConfig {
    #[serde(default)]
    pub network: RawNetwork,
    #[serde(default)]
    pub endpoint: RawEndpoint,
    #[serde(default)]
    pub identity: RawIdentity,
    #[serde(default)]
    pub timing: RawTiming,
    #[serde(default)]
    pub pins: RawPins,
    #[serde(default)]
    pub debug: RawDebug,
}

#[derive(Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct RawNetwork {
    pub ssid: Option<String>,
    pub passphrase: Option<String>,
}

#[derive(Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct RawEndpoint {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub path: Option<String>,
}

#[derive(Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct RawIdentity {
    pub pet_id: Option<u32>,
    pub device_id: Option<String>,
    pub pet_name: Option<String>,
}

#[derive(Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct RawTiming {
    pub send_interval_ms: Option<u64>,
    pub gps_debug_interval_ms: Option<u64>,
    pub reconnect_interval_ms: Option<u64>,
    pub gps_timeout_ms: Option<u64>,
}

#[derive(Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct RawPins {
    pub sda_pin: Option<u8>,
    pub scl_pin: Option<u8>,
    pub gps_rx_pin: Option<u8>,
    pub gps_tx_pin: Option<u8>,
    pub gps_baud_rate: Option<u32>,
}

#[derive(Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct RawDebug {
    pub enable_serial_debug: Option<bool>,
    pub enable_gps_debug: Option<bool>,
    pub enable_websocket_debug: Option<bool>,
    pub enable_imu_debug: Option<bool>,
}

// Emits `name: value,` for every key present in the toml file. Strings are
// written with `{:?}` so they land in the generated code as escaped literals.
struct Fields(String);

impl Fields {
    fn text(&mut self, name: &str, value: &Option<String>) -> fmt::Result {
        match value {
            Some(v) => writeln!(self.0, "    {name}: {v:?},"),
            None => Ok(()),
        }
    }

    fn value<T: fmt::Display>(&mut self, name: &str, value: Option<T>) -> fmt::Result {
        match value {
            Some(v) => writeln!(self.0, "    {name}: {v},"),
            None => Ok(()),
        }
    }
}

pub fn parse(toml_str: &str) -> Result<RawConfig, toml::de::Error> {
    toml::from_str(toml_str)
}

/// Renders the `CONFIG` item. Keys absent from `raw` come from `DeviceConfig::DEFAULT`.
pub fn render(raw: &RawConfig) -> Result<String, fmt::Error> {
    let mut f = Fields(String::new());

    f.text("ssid", &raw.network.ssid)?;
    f.text("passphrase", &raw.network.passphrase)?;

    f.text("host", &raw.endpoint.host)?;
    f.value("port", raw.endpoint.port)?;
    f.text("path", &raw.endpoint.path)?;

    f.value("pet_id", raw.identity.pet_id)?;
    f.text("device_id", &raw.identity.device_id)?;
    f.text("pet_name", &raw.identity.pet_name)?;

    f.value("send_interval_ms", raw.timing.send_interval_ms)?;
    f.value("gps_debug_interval_ms", raw.timing.gps_debug_interval_ms)?;
    f.value("reconnect_interval_ms", raw.timing.reconnect_interval_ms)?;
    f.value("gps_timeout_ms", raw.timing.gps_timeout_ms)?;

    f.value("sda_pin", raw.pins.sda_pin)?;
    f.value("scl_pin", raw.pins.scl_pin)?;
    f.value("gps_rx_pin", raw.pins.gps_rx_pin)?;
    f.value("gps_tx_pin", raw.pins.gps_tx_pin)?;
    f.value("gps_baud_rate", raw.pins.gps_baud_rate)?;

    f.value("enable_serial_debug", raw.debug.enable_serial_debug)?;
    f.value("enable_gps_debug", raw.debug.enable_gps_debug)?;
    f.value("enable_websocket_debug", raw.debug.enable_websocket_debug)?;
    f.value("enable_imu_debug", raw.debug.enable_imu_debug)?;

    Ok(format!(
        "pub const CONFIG: DeviceConfig = DeviceConfig {{\n{}    ..DeviceConfig::DEFAULT\n}};\n",
        f.0
    ))
}
