// cfg.toml loading and code generation for build.rs. Kept out of build.rs so
// the integration tests can drive it without a cargo build.

use std::{error::Error, fs, io, path::Path};

use serde::Deserialize;

use crate::names;

pub const CONFIG_FILE: &str = "cfg.toml";
pub const TEMPLATE_FILE: &str = "cfg.toml.example";

// Provisioned values take precedence over the file, so real credentials can
// stay out of cfg.toml.
pub const ENV_WIFI_SSID: &str = "SLEEP_TRACKER_WIFI_SSID";
pub const ENV_WIFI_PASSWORD: &str = "SLEEP_TRACKER_WIFI_PASSWORD";
pub const ENV_FIREBASE_HOST: &str = "SLEEP_TRACKER_FIREBASE_HOST";
pub const ENV_FIREBASE_AUTH: &str = "SLEEP_TRACKER_FIREBASE_AUTH";

pub const ENV_OVERRIDES: [&str; 4] = [
    ENV_WIFI_SSID,
    ENV_WIFI_PASSWORD,
    ENV_FIREBASE_HOST,
    ENV_FIREBASE_AUTH,
];

#[derive(Deserialize)]
pub struct RawConfig {
    pub board: String,
    pub wifi_ssid: String,
    pub wifi_password: String,
    pub firebase_host: String,
    pub firebase_auth: String,
    #[serde(default = "default_read_interval")]
    pub sensor_read_interval_ms: u32,
    pub firebase_send_interval_ms: Option<u32>,
    #[serde(default = "default_dht_type")]
    pub dht_type: String,
}

fn default_read_interval() -> u32 {
    2000
}

fn default_dht_type() -> String {
    "dht11".into()
}

pub struct Source {
    pub text: String,
    /// cfg.toml was missing and the placeholder template was read instead
    pub from_template: bool,
}

/// Configuration after parsing, environment overrides and name mapping.
pub struct Resolved {
    pub raw: RawConfig,
    /// Rust path of the `Board` variant, e.g. `Board::NodeMcu`
    pub board: &'static str,
    /// Rust path of the `DhtType` variant
    pub dht_type: &'static str,
    /// Environment variables that replaced a file value
    pub overridden: Vec<&'static str>,
}

pub fn read_source(dir: &Path) -> io::Result<Source> {
    match fs::read_to_string(dir.join(CONFIG_FILE)) {
        Ok(text) => Ok(Source {
            text,
            from_template: false,
        }),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Source {
            text: fs::read_to_string(dir.join(TEMPLATE_FILE))?,
            from_template: true,
        }),
        Err(e) => Err(e),
    }
}

pub fn resolve(
    text: &str,
    lookup: impl Fn(&str) -> Option<String>,
) -> Result<Resolved, Box<dyn Error>> {
    let mut raw: RawConfig = toml::from_str(text)?;

    let mut overridden = Vec::new();
    for name in ENV_OVERRIDES {
        if let Some(value) = lookup(name) {
            let field = match name {
                ENV_WIFI_SSID => &mut raw.wifi_ssid,
                ENV_WIFI_PASSWORD => &mut raw.wifi_password,
                ENV_FIREBASE_HOST => &mut raw.firebase_host,
                _ => &mut raw.firebase_auth,
            };
            *field = value;
            overridden.push(name);
        }
    }

    let board = match names::board_name(&raw.board) {
        Some("generic") => "Board::Generic",
        Some("nodemcu") => "Board::NodeMcu",
        _ => {
            return Err(format!(
                "unknown board {:?}, expected \"generic\" or \"nodemcu\"",
                raw.board
            )
            .into())
        }
    };
    let dht_type = match names::dht_name(&raw.dht_type) {
        Some("dht11") => "DhtType::Dht11",
        Some("dht12") => "DhtType::Dht12",
        Some("dht21") => "DhtType::Dht21",
        Some("dht22") => "DhtType::Dht22",
        _ => return Err(format!("unknown dht_type {:?}", raw.dht_type).into()),
    };
    if raw.sensor_read_interval_ms == 0 {
        return Err("sensor_read_interval_ms must be > 0".into());
    }

    Ok(Resolved {
        raw,
        board,
        dht_type,
        overridden,
    })
}

/// Source of the `CONFIG` constant included by `src/config.rs`.
pub fn generate(resolved: &Resolved) -> String {
    let raw = &resolved.raw;
    format!(
        r#"
        pub const CONFIG: DeviceConfig = DeviceConfig {{
            board: {board},
            wifi_ssid: {ssid:?},
            wifi_password: Secret::new({psk:?}),
            firebase_host: {host:?},
            firebase_auth: Secret::new({auth:?}),
            sensor_read_interval_ms: {read},
            firebase_send_interval_ms: {send:?},
            dht_type: {dht},
            pins: {board}.pins(),
        }};
    "#,
        board = resolved.board,
        ssid = raw.wifi_ssid,
        psk = raw.wifi_password,
        host = raw.firebase_host.trim(),
        auth = raw.firebase_auth,
        read = raw.sensor_read_interval_ms,
        send = raw.firebase_send_interval_ms,
        dht = resolved.dht_type,
    )
}
