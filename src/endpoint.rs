use core::fmt::Write;

use heapless::String;

use crate::config::DeviceConfig;
use crate::constants::{DEFAULT_TLS_PORT, WS_URL_MAX_LEN};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    UrlTooLong,
}

/// Builds the `wss://` URL of the telemetry endpoint.
///
/// The port is omitted when it is the scheme default (443).
pub fn ws_url(config: &DeviceConfig) -> Result<String<WS_URL_MAX_LEN>, Error> {
    let mut url = String::new();

    if config.port == DEFAULT_TLS_PORT {
        write!(url, "wss://{}{}", config.host, config.path)
    } else {
        write!(url, "wss://{}:{}{}", config.host, config.port, config.path)
    }
    .map_err(|_| Error::UrlTooLong)?;

    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_url() {
        let url = ws_url(&DeviceConfig::DEFAULT).unwrap();
        assert_eq!(url.as_str(), "wss://pet-tracker-production.up.railway.app/ws");
    }

    #[test]
    fn test_explicit_port() {
        let cfg = DeviceConfig { host: "localhost", port: 3000, ..DeviceConfig::DEFAULT };
        let url = ws_url(&cfg).unwrap();
        assert_eq!(url.as_str(), "wss://localhost:3000/ws");
    }

    #[test]
    fn test_url_too_long() {
        const LONG_PATH: &str = concat!(
            "/aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa",
            "aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa",
            "aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa",
            "aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa",
            "aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa",
        );
        let cfg = DeviceConfig { path: LONG_PATH, ..DeviceConfig::DEFAULT };
        assert!(LONG_PATH.len() > WS_URL_MAX_LEN - cfg.host.len());
        assert_eq!(ws_url(&cfg), Err(Error::UrlTooLong));
    }
}
