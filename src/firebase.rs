//! Realtime Database layout shared with the companion app.
//!
//! Latest readings live under `sleep_tracker/ultimos/<channel>` with a
//! `valor` and a `unidad` child, history under `sleep_tracker/sensores`.
//! The app toggles the buzzer through `sleep_tracker/control/alarma` (0 or 1).

use core::fmt::Write;

use heapless::String;

use crate::constants::URL_MAX_LEN;

pub const BASE_PATH: &str = "sleep_tracker";
pub const LATEST_PATH: &str = "sleep_tracker/ultimos";
pub const SENSORS_PATH: &str = "sleep_tracker/sensores";
pub const CONTROL_PATH: &str = "sleep_tracker/control";
pub const ALARM_PATH: &str = "sleep_tracker/control/alarma";

pub const VALUE_KEY: &str = "valor";
pub const UNIT_KEY: &str = "unidad";

#[derive(Debug, PartialEq, Eq)]
pub enum Error {
    UrlTooLong,
}

/// Sensor channels the firmware publishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    Temperature,
    Humidity,
    Pulse,
    Acceleration,
    Light,
}

impl Channel {
    pub const ALL: [Channel; 5] = [
        Channel::Temperature,
        Channel::Humidity,
        Channel::Pulse,
        Channel::Acceleration,
        Channel::Light,
    ];

    /// Database key under `LATEST_PATH`.
    pub const fn key(self) -> &'static str {
        match self {
            Channel::Temperature => "temperatura",
            Channel::Humidity => "humedad",
            Channel::Pulse => "pulso",
            Channel::Acceleration => "aceleracion",
            Channel::Light => "luz",
        }
    }

    pub const fn unit(self) -> &'static str {
        match self {
            Channel::Temperature => "°C",
            Channel::Humidity => "%",
            Channel::Pulse => "BPM",
            Channel::Acceleration => "g",
            Channel::Light => "%",
        }
    }

    pub const fn path(self) -> &'static str {
        match self {
            Channel::Temperature => "sleep_tracker/ultimos/temperatura",
            Channel::Humidity => "sleep_tracker/ultimos/humedad",
            Channel::Pulse => "sleep_tracker/ultimos/pulso",
            Channel::Acceleration => "sleep_tracker/ultimos/aceleracion",
            Channel::Light => "sleep_tracker/ultimos/luz",
        }
    }
}

// Formats `https://{host}/{path}.json?auth={auth}`.
// Leading and trailing slashes on `path` are dropped.
// Returns `Error::UrlTooLong` if the result does not fit in `URL_MAX_LEN`.
pub fn rest_url(host: &str, path: &str, auth: &str) -> Result<String<URL_MAX_LEN>, Error> {
    let mut url = String::new();
    write!(
        url,
        "https://{}/{}.json?auth={}",
        host.trim(),
        path.trim_matches('/'),
        auth
    )
    .map_err(|_| Error::UrlTooLong)?;
    Ok(url)
}
