use embassy_time::Duration;
use log::{info, warn};

/// Device configuration, fixed at build time from `cfg.toml`.
///
/// Durations are in milliseconds, pins are ESP32-C6 GPIO numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeviceConfig {
    // Wi-Fi SSID to connect to
    pub ssid: &'static str,

    // Wi-Fi pre-shared key, empty for an open network
    pub passphrase: &'static str,

    // Telemetry server hostname
    pub host: &'static str,

    // Telemetry server port (443 for wss)
    pub port: u16,

    // WebSocket resource path
    pub path: &'static str,

    // Pet identifier reported with every message
    pub pet_id: u32,

    // Stable device identifier
    pub device_id: &'static str,

    // Human readable pet name
    pub pet_name: &'static str,

    // Base telemetry cadence
    pub send_interval_ms: u64,

    // Cadence of GPS diagnostic logs
    pub gps_debug_interval_ms: u64,

    // Minimum gap between WebSocket reconnection attempts
    pub reconnect_interval_ms: u64,

    // Maximum age of a GPS fix before it is considered stale
    pub gps_timeout_ms: u64,

    // I2C data line (MPU6050)
    pub sda_pin: u8,

    // I2C clock line (MPU6050)
    pub scl_pin: u8,

    // UART RX from the GPS receiver
    pub gps_rx_pin: u8,

    // UART TX to the GPS receiver
    pub gps_tx_pin: u8,

    // GPS UART line rate
    pub gps_baud_rate: u32,

    // Master switch for serial logs
    pub enable_serial_debug: bool,

    // Detailed GPS logs
    pub enable_gps_debug: bool,

    // WebSocket logs
    pub enable_websocket_debug: bool,

    // IMU logs (verbose)
    pub enable_imu_debug: bool,
}

impl DeviceConfig {
    /// Values used for every key missing from `cfg.toml`.
    pub const DEFAULT: DeviceConfig = DeviceConfig {
        ssid: "TU_RED_WIFI_AQUI",
        passphrase: "TU_PASSWORD_AQUI",
        host: "pet-tracker-production.up.railway.app",
        port: 443,
        path: "/ws",
        pet_id: 1,
        device_id: "ESP32C6_OPTIMIZED",
        pet_name: "Max",
        send_interval_ms: 8000,
        gps_debug_interval_ms: 15000,
        reconnect_interval_ms: 30000,
        gps_timeout_ms: 15000,
        sda_pin: 6,
        scl_pin: 7,
        gps_rx_pin: 4,
        gps_tx_pin: 5,
        gps_baud_rate: 9600,
        enable_serial_debug: true,
        enable_gps_debug: true,
        enable_websocket_debug: true,
        enable_imu_debug: false,
    };

    pub const fn send_interval(&self) -> Duration {
        Duration::from_millis(self.send_interval_ms)
    }

    pub const fn gps_debug_interval(&self) -> Duration {
        Duration::from_millis(self.gps_debug_interval_ms)
    }

    pub const fn reconnect_interval(&self) -> Duration {
        Duration::from_millis(self.reconnect_interval_ms)
    }

    pub const fn gps_timeout(&self) -> Duration {
        Duration::from_millis(self.gps_timeout_ms)
    }

    /// A fix is usable while it is younger than `gps_timeout`.
    pub fn is_fix_fresh(&self, age: Duration) -> bool {
        age < self.gps_timeout()
    }

    /// Recommended, not enforced: a fix should survive at least one send cycle.
    pub const fn gps_timeout_covers_send_interval(&self) -> bool {
        self.gps_timeout_ms >= self.send_interval_ms
    }

    pub const fn serial_debug(&self) -> bool {
        self.enable_serial_debug
    }

    // Subsystem toggles only take effect with the serial master switch on
    pub const fn gps_debug(&self) -> bool {
        self.enable_serial_debug && self.enable_gps_debug
    }

    pub const fn websocket_debug(&self) -> bool {
        self.enable_serial_debug && self.enable_websocket_debug
    }

    pub const fn imu_debug(&self) -> bool {
        self.enable_serial_debug && self.enable_imu_debug
    }

    /// Logs the configuration at boot. The passphrase is never printed.
    pub fn log_summary(&self) {
        info!("Pet tracker config v{}", crate::constants::VERSION);
        info!(
            "Device {} (pet {} #{})",
            self.device_id, self.pet_name, self.pet_id
        );
        info!(
            "Wi-Fi SSID: {:?}, passphrase: {}",
            self.ssid,
            if self.passphrase.is_empty() { "<none>" } else { "<set>" }
        );
        info!("Endpoint: {}:{}{}", self.host, self.port, self.path);
        info!(
            "Intervals: send={}ms gps_debug={}ms reconnect={}ms gps_timeout={}ms",
            self.send_interval_ms,
            self.gps_debug_interval_ms,
            self.reconnect_interval_ms,
            self.gps_timeout_ms
        );
        info!(
            "Pins: sda={} scl={} gps_rx={} gps_tx={} @ {} baud",
            self.sda_pin, self.scl_pin, self.gps_rx_pin, self.gps_tx_pin, self.gps_baud_rate
        );
        info!(
            "Debug: serial={} gps={} websocket={} imu={}",
            self.serial_debug(),
            self.gps_debug(),
            self.websocket_debug(),
            self.imu_debug()
        );

        if !self.gps_timeout_covers_send_interval() {
            warn!(
                "gps_timeout_ms ({}) is shorter than send_interval_ms ({}), fixes may go stale between sends",
                self.gps_timeout_ms, self.send_interval_ms
            );
        }
    }
}

// config values are generated at compile time
include!(concat!(env!("OUT_DIR"), "/config.rs"));

const _: () = match CONFIG.validate() {
    Ok(()) => (),
    Err(e) => panic!("{}", e.message()),
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_documented_default() {
        let cfg = DeviceConfig::DEFAULT;

        assert_eq!(cfg.ssid, "TU_RED_WIFI_AQUI");
        assert_eq!(cfg.host, "pet-tracker-production.up.railway.app");
        assert_eq!(cfg.port, 443);
        assert_eq!(cfg.path, "/ws");
        assert_eq!(cfg.pet_id, 1);
        assert_eq!(cfg.device_id, "ESP32C6_OPTIMIZED");
        assert_eq!(cfg.pet_name, "Max");
        assert_eq!(cfg.send_interval_ms, 8000);
        assert_eq!(cfg.gps_debug_interval_ms, 15000);
        assert_eq!(cfg.reconnect_interval_ms, 30000);
        assert_eq!(cfg.gps_timeout_ms, 15000);
        assert_eq!(
            (cfg.sda_pin, cfg.scl_pin, cfg.gps_rx_pin, cfg.gps_tx_pin),
            (6, 7, 4, 5)
        );
        assert_eq!(cfg.gps_baud_rate, 9600);
        assert_eq!(
            (
                cfg.enable_serial_debug,
                cfg.enable_gps_debug,
                cfg.enable_websocket_debug,
                cfg.enable_imu_debug
            ),
            (true, true, true, false)
        );
    }

    #[test]
    fn test_generated_config_is_valid() {
        assert_eq!(CONFIG.validate(), Ok(()));
    }

    #[test]
    fn test_generated_config_satisfies_invariants() {
        let pins = [CONFIG.sda_pin, CONFIG.scl_pin, CONFIG.gps_rx_pin, CONFIG.gps_tx_pin];
        for (i, a) in pins.iter().enumerate() {
            for b in &pins[i + 1..] {
                assert_ne!(a, b);
            }
        }

        assert!(CONFIG.port >= 1);
        assert!(CONFIG.path.starts_with('/'));
        assert!(CONFIG.send_interval_ms > 0);
        assert!(CONFIG.gps_debug_interval_ms > 0);
        assert!(CONFIG.reconnect_interval_ms > 0);
        assert!(CONFIG.gps_timeout_ms > 0);
        assert!(CONFIG.pet_id > 0);
        assert!(!CONFIG.device_id.is_empty());
        assert!(!CONFIG.pet_name.is_empty());
        assert!(crate::constants::STANDARD_BAUD_RATES.contains(&CONFIG.gps_baud_rate));
    }

    #[test]
    fn test_device_gps_runs_at_9600() {
        assert_eq!(DeviceConfig::DEFAULT.gps_baud_rate, 9600);
    }

    #[test]
    fn test_durations() {
        let cfg = DeviceConfig::DEFAULT;
        assert_eq!(cfg.send_interval(), Duration::from_secs(8));
        assert_eq!(cfg.gps_debug_interval(), Duration::from_secs(15));
        assert_eq!(cfg.reconnect_interval(), Duration::from_secs(30));
        assert_eq!(cfg.gps_timeout(), Duration::from_millis(15000));
    }

    #[test]
    fn test_fix_freshness() {
        let cfg = DeviceConfig::DEFAULT;
        assert!(cfg.is_fix_fresh(Duration::from_millis(0)));
        assert!(cfg.is_fix_fresh(Duration::from_millis(14_999)));
        assert!(!cfg.is_fix_fresh(Duration::from_millis(15_000)));
        assert!(!cfg.is_fix_fresh(Duration::from_secs(60)));
    }

    #[test]
    fn test_timeout_recommendation() {
        assert!(DeviceConfig::DEFAULT.gps_timeout_covers_send_interval());

        let cfg = DeviceConfig { gps_timeout_ms: 5000, ..DeviceConfig::DEFAULT };
        assert!(!cfg.gps_timeout_covers_send_interval());
        // Only a warning
        assert_eq!(cfg.validate(), Ok(()));
        cfg.log_summary();
    }

    #[test]
    fn test_serial_debug_is_master_switch() {
        let cfg = DeviceConfig::DEFAULT;
        assert!(cfg.serial_debug());
        assert!(cfg.gps_debug());
        assert!(cfg.websocket_debug());
        assert!(!cfg.imu_debug());

        let quiet = DeviceConfig { enable_serial_debug: false, enable_imu_debug: true, ..cfg };
        assert!(!quiet.serial_debug());
        assert!(!quiet.gps_debug());
        assert!(!quiet.websocket_debug());
        assert!(!quiet.imu_debug());
    }
}
