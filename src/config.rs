use core::fmt;
use core::str::FromStr;

use heapless::String;
use log::info;

use crate::board::{self, Board, PinMap, Role};
use crate::constants::{ADXL345_I2C_ADDRESS, MAX30102_I2C_ADDRESS, URL_MAX_LEN, VERSION};
use crate::firebase::{self, Channel};

/// Credential that must never end up in logs.
///
/// `Debug` and `Display` print `***`; the value is only reachable through
/// [`Secret::expose`].
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Secret(&'static str);

impl Secret {
    pub const fn new(value: &'static str) -> Self {
        Self(value)
    }

    pub const fn expose(&self) -> &'static str {
        self.0
    }

    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("***")
    }
}

impl fmt::Display for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("***")
    }
}

/// DHT sensor family, numbered like the Arduino DHT library.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DhtType {
    Dht11,
    Dht12,
    /// Also sold as AM2301
    Dht21,
    Dht22,
}

impl DhtType {
    pub const fn model(self) -> u8 {
        match self {
            DhtType::Dht11 => 11,
            DhtType::Dht12 => 12,
            DhtType::Dht21 => 21,
            DhtType::Dht22 => 22,
        }
    }
}

impl FromStr for DhtType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match crate::names::dht_name(s) {
            Some("dht11") => Ok(DhtType::Dht11),
            Some("dht12") => Ok(DhtType::Dht12),
            Some("dht21") => Ok(DhtType::Dht21),
            Some("dht22") => Ok(DhtType::Dht22),
            _ => Err(Error::UnknownDhtType),
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum Error {
    EmptySsid,
    EmptyPassword,
    EmptyHost,
    /// Host was given as a URL (`https://...`) instead of a bare hostname
    HostHasScheme,
    HostHasPath,
    EmptyAuth,
    ZeroReadInterval,
    ZeroSendInterval,
    UnknownDhtType,
    Pin(board::Error),
}

impl From<board::Error> for Error {
    fn from(e: board::Error) -> Self {
        Error::Pin(e)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::EmptySsid => f.write_str("wifi_ssid is empty"),
            Error::EmptyPassword => f.write_str("wifi_password is empty"),
            Error::EmptyHost => f.write_str("firebase_host is empty"),
            Error::HostHasScheme => f.write_str("firebase_host must not include a scheme"),
            Error::HostHasPath => f.write_str("firebase_host must not include a path"),
            Error::EmptyAuth => f.write_str("firebase_auth is empty"),
            Error::ZeroReadInterval => f.write_str("sensor_read_interval_ms must be > 0"),
            Error::ZeroSendInterval => f.write_str("firebase_send_interval_ms must be > 0"),
            Error::UnknownDhtType => f.write_str("unknown DHT type"),
            Error::Pin(e) => write!(f, "invalid pin map: {}", e),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeviceConfig {
    // Hardware target, selects the pin map
    pub board: Board,

    // Wi-Fi SSID to connect to
    pub wifi_ssid: &'static str,

    // Wi-Fi password
    pub wifi_password: Secret,

    // Realtime Database host without scheme, e.g. "sleeptracker-12345.firebaseio.com"
    pub firebase_host: &'static str,

    // Database secret (Project Settings > Service Accounts > Database Secrets)
    pub firebase_auth: Secret,

    // Sensor polling interval in milliseconds
    pub sensor_read_interval_ms: u32,

    // Upload interval in milliseconds (optional, see `send_interval_ms`)
    pub firebase_send_interval_ms: Option<u32>,

    // DHT model wired to the DHT pin
    pub dht_type: DhtType,

    // Pin assignment, always `board.pins()`
    pub pins: PinMap,
}

impl DeviceConfig {
    /// Interval between uploads. Without an explicit send interval every
    /// reading is uploaded.
    pub const fn send_interval_ms(&self) -> u32 {
        match self.firebase_send_interval_ms {
            Some(ms) => ms,
            None => self.sensor_read_interval_ms,
        }
    }

    pub fn validate(&self) -> Result<(), Error> {
        if self.wifi_ssid.trim().is_empty() {
            return Err(Error::EmptySsid);
        }
        if self.wifi_password.is_empty() {
            return Err(Error::EmptyPassword);
        }

        let host = self.firebase_host.trim();
        if host.is_empty() {
            return Err(Error::EmptyHost);
        }
        if host.contains("://") {
            return Err(Error::HostHasScheme);
        }
        if host.contains('/') {
            return Err(Error::HostHasPath);
        }

        if self.firebase_auth.is_empty() {
            return Err(Error::EmptyAuth);
        }
        if self.sensor_read_interval_ms == 0 {
            return Err(Error::ZeroReadInterval);
        }
        if self.firebase_send_interval_ms == Some(0) {
            return Err(Error::ZeroSendInterval);
        }

        self.pins.validate(self.board)?;

        Ok(())
    }

    /// REST endpoint for a database path on the configured host.
    pub fn firebase_url(&self, path: &str) -> Result<String<URL_MAX_LEN>, firebase::Error> {
        firebase::rest_url(self.firebase_host, path, self.firebase_auth.expose())
    }

    pub fn channel_url(&self, channel: Channel) -> Result<String<URL_MAX_LEN>, firebase::Error> {
        self.firebase_url(channel.path())
    }

    pub fn log_summary(&self) {
        info!("Sleep tracker config v{}", VERSION);
        info!("Board: {}", self.board);
        info!("Wi-Fi SSID: {:?}, password: {}", self.wifi_ssid, self.wifi_password);
        info!("Firebase host: {}, auth: {}", self.firebase_host, self.firebase_auth);
        info!(
            "Read interval: {} ms, send interval: {} ms{}",
            self.sensor_read_interval_ms,
            self.send_interval_ms(),
            if self.firebase_send_interval_ms.is_none() {
                " (every reading)"
            } else {
                ""
            }
        );
        info!("DHT type: DHT{}", self.dht_type.model());
        for role in Role::ALL {
            info!("  {}: {}", role.name(), self.pins.get(role));
        }
        info!(
            "I2C devices: ADXL345 @ {:#04x}, MAX30102 @ {:#04x}",
            ADXL345_I2C_ADDRESS, MAX30102_I2C_ADDRESS
        );
    }
}

// config values are generated at compile time
include!(concat!(env!("OUT_DIR"), "/config.rs"));
