use core::fmt;

use crate::config::DeviceConfig;
use crate::constants::{
    DURATION_MAX_MS, HOSTNAME_MAX_LEN, LABEL_MAX_LEN, PASSPHRASE_MAX_LEN, PASSPHRASE_MIN_LEN,
    SSID_MAX_LEN, STANDARD_BAUD_RATES,
};

/// A configuration key, named as in `cfg.toml`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Ssid,
    Passphrase,
    Host,
    Port,
    Path,
    PetId,
    DeviceId,
    PetName,
    SendIntervalMs,
    GpsDebugIntervalMs,
    ReconnectIntervalMs,
    GpsTimeoutMs,
    SdaPin,
    SclPin,
    GpsRxPin,
    GpsTxPin,
    GpsBaudRate,
}

impl Field {
    pub const fn name(self) -> &'static str {
        match self {
            Field::Ssid => "ssid",
            Field::Passphrase => "passphrase",
            Field::Host => "host",
            Field::Port => "port",
            Field::Path => "path",
            Field::PetId => "pet_id",
            Field::DeviceId => "device_id",
            Field::PetName => "pet_name",
            Field::SendIntervalMs => "send_interval_ms",
            Field::GpsDebugIntervalMs => "gps_debug_interval_ms",
            Field::ReconnectIntervalMs => "reconnect_interval_ms",
            Field::GpsTimeoutMs => "gps_timeout_ms",
            Field::SdaPin => "sda_pin",
            Field::SclPin => "scl_pin",
            Field::GpsRxPin => "gps_rx_pin",
            Field::GpsTxPin => "gps_tx_pin",
            Field::GpsBaudRate => "gps_baud_rate",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    SsidLength,
    PassphraseLength,
    InvalidHostname,
    PortZero,
    InvalidPath,
    PetIdZero,
    DeviceIdEmpty,
    PetNameEmpty,
    ZeroDuration(Field),
    // Too large for `embassy_time::Duration` at the configured tick rate
    DurationTooLong(Field),
    // The first field of the colliding pair, then the second
    PinConflict(Field, Field),
    NonStandardBaudRate,
}

impl Error {
    /// The key to fix in `cfg.toml`
    pub const fn field(self) -> Field {
        match self {
            Error::SsidLength => Field::Ssid,
            Error::PassphraseLength => Field::Passphrase,
            Error::InvalidHostname => Field::Host,
            Error::PortZero => Field::Port,
            Error::InvalidPath => Field::Path,
            Error::PetIdZero => Field::PetId,
            Error::DeviceIdEmpty => Field::DeviceId,
            Error::PetNameEmpty => Field::PetName,
            Error::ZeroDuration(field) => field,
            Error::DurationTooLong(field) => field,
            Error::PinConflict(field, _) => field,
            Error::NonStandardBaudRate => Field::GpsBaudRate,
        }
    }

    /// Static diagnostic, usable from const context.
    pub const fn message(self) -> &'static str {
        match self {
            Error::SsidLength => "ssid must be between 1 and 32 bytes",
            Error::PassphraseLength => "passphrase must be empty or between 8 and 63 bytes",
            Error::InvalidHostname => "host is not a valid DNS hostname",
            Error::PortZero => "port must be between 1 and 65535",
            Error::InvalidPath => "path must be non-empty and start with '/'",
            Error::PetIdZero => "pet_id must be a positive integer",
            Error::DeviceIdEmpty => "device_id must not be empty",
            Error::PetNameEmpty => "pet_name must not be empty",
            Error::ZeroDuration(Field::SendIntervalMs) => "send_interval_ms must be greater than zero",
            Error::ZeroDuration(Field::GpsDebugIntervalMs) => {
                "gps_debug_interval_ms must be greater than zero"
            }
            Error::ZeroDuration(Field::ReconnectIntervalMs) => {
                "reconnect_interval_ms must be greater than zero"
            }
            Error::ZeroDuration(_) => "gps_timeout_ms must be greater than zero",
            Error::DurationTooLong(Field::SendIntervalMs) => {
                "send_interval_ms is too large to be represented as a Duration"
            }
            Error::DurationTooLong(Field::GpsDebugIntervalMs) => {
                "gps_debug_interval_ms is too large to be represented as a Duration"
            }
            Error::DurationTooLong(Field::ReconnectIntervalMs) => {
                "reconnect_interval_ms is too large to be represented as a Duration"
            }
            Error::DurationTooLong(_) => {
                "gps_timeout_ms is too large to be represented as a Duration"
            }
            Error::PinConflict(Field::SdaPin, Field::SclPin) => "sda_pin and scl_pin use the same GPIO",
            Error::PinConflict(Field::SdaPin, Field::GpsRxPin) => {
                "sda_pin and gps_rx_pin use the same GPIO"
            }
            Error::PinConflict(Field::SdaPin, _) => "sda_pin and gps_tx_pin use the same GPIO",
            Error::PinConflict(Field::SclPin, Field::GpsRxPin) => {
                "scl_pin and gps_rx_pin use the same GPIO"
            }
            Error::PinConflict(Field::SclPin, _) => "scl_pin and gps_tx_pin use the same GPIO",
            Error::PinConflict(_, _) => "gps_rx_pin and gps_tx_pin use the same GPIO",
            Error::NonStandardBaudRate => {
                "gps_baud_rate must be one of 4800, 9600, 19200, 38400, 57600, 115200"
            }
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::PinConflict(a, b) => write!(f, "{} and {} use the same GPIO", a.name(), b.name()),
            _ => f.write_str(self.message()),
        }
    }
}

impl DeviceConfig {
    /// Checks every field against its invariant and reports the first violation.
    ///
    /// `const` so the generated [`CONFIG`](crate::config::CONFIG) is checked at
    /// compile time.
    pub const fn validate(&self) -> Result<(), Error> {
        let ssid = self.ssid.len();
        if ssid == 0 || ssid > SSID_MAX_LEN {
            return Err(Error::SsidLength);
        }

        let psk = self.passphrase.len();
        if psk != 0 && (psk < PASSPHRASE_MIN_LEN || psk > PASSPHRASE_MAX_LEN) {
            return Err(Error::PassphraseLength);
        }

        if !is_hostname(self.host) {
            return Err(Error::InvalidHostname);
        }

        if self.port == 0 {
            return Err(Error::PortZero);
        }

        let path = self.path.as_bytes();
        if path.is_empty() || path[0] != b'/' {
            return Err(Error::InvalidPath);
        }

        if self.pet_id == 0 {
            return Err(Error::PetIdZero);
        }
        if self.device_id.is_empty() {
            return Err(Error::DeviceIdEmpty);
        }
        if self.pet_name.is_empty() {
            return Err(Error::PetNameEmpty);
        }

        let durations = [
            (Field::SendIntervalMs, self.send_interval_ms),
            (Field::GpsDebugIntervalMs, self.gps_debug_interval_ms),
            (Field::ReconnectIntervalMs, self.reconnect_interval_ms),
            (Field::GpsTimeoutMs, self.gps_timeout_ms),
        ];
        let mut i = 0;
        while i < durations.len() {
            if durations[i].1 == 0 {
                return Err(Error::ZeroDuration(durations[i].0));
            }
            if durations[i].1 > DURATION_MAX_MS {
                return Err(Error::DurationTooLong(durations[i].0));
            }
            i += 1;
        }

        let pins = [
            (Field::SdaPin, self.sda_pin),
            (Field::SclPin, self.scl_pin),
            (Field::GpsRxPin, self.gps_rx_pin),
            (Field::GpsTxPin, self.gps_tx_pin),
        ];
        let mut i = 0;
        while i < pins.len() {
            let mut j = i + 1;
            while j < pins.len() {
                if pins[i].1 == pins[j].1 {
                    return Err(Error::PinConflict(pins[i].0, pins[j].0));
                }
                j += 1;
            }
            i += 1;
        }

        if !is_standard_baud_rate(self.gps_baud_rate) {
            return Err(Error::NonStandardBaudRate);
        }

        Ok(())
    }
}

const fn is_standard_baud_rate(baud: u32) -> bool {
    let mut i = 0;
    while i < STANDARD_BAUD_RATES.len() {
        if STANDARD_BAUD_RATES[i] == baud {
            return true;
        }
        i += 1;
    }
    false
}

// Dot-separated labels of ASCII letters, digits and '-', no label may start
// or end with '-'. A trailing root dot is not accepted.
const fn is_hostname(host: &str) -> bool {
    let b = host.as_bytes();
    if b.is_empty() || b.len() > HOSTNAME_MAX_LEN {
        return false;
    }

    let mut label_start = 0;
    let mut i = 0;
    while i <= b.len() {
        if i == b.len() || b[i] == b'.' {
            let len = i - label_start;
            if len == 0 || len > LABEL_MAX_LEN {
                return false;
            }
            if b[label_start] == b'-' || b[i - 1] == b'-' {
                return false;
            }
            label_start = i + 1;
        } else if !(b[i].is_ascii_alphanumeric() || b[i] == b'-') {
            return false;
        }
        i += 1;
    }
    true
}
