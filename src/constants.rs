/// Current crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Maximum length of a Wi-Fi SSID in octets (IEEE 802.11)
pub const SSID_MAX_LEN: usize = 32;
/// Minimum length of a WPA2 passphrase
pub const PASSPHRASE_MIN_LEN: usize = 8;
/// Maximum length of a WPA2 passphrase
pub const PASSPHRASE_MAX_LEN: usize = 63;

/// Maximum length of a DNS hostname
pub const HOSTNAME_MAX_LEN: usize = 253;
/// Maximum length of a single DNS label
pub const LABEL_MAX_LEN: usize = 63;

/// Port implied by the `wss` scheme
pub const DEFAULT_TLS_PORT: u16 = 443;

/// Capacity of the WebSocket URL buffer
pub const WS_URL_MAX_LEN: usize = 512;

/// Largest interval `embassy_time::Duration::from_millis` accepts without overflow
pub const DURATION_MAX_MS: u64 = u64::MAX / embassy_time::TICK_HZ;

/// Line rates accepted for the GPS UART
pub const STANDARD_BAUD_RATES: [u32; 6] = [4800, 9600, 19200, 38400, 57600, 115200];
