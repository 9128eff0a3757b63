use std::{fs, path::PathBuf};

#[path = "../src/names.rs"]
mod names;

#[path = "../build/cfg.rs"]
mod cfg;

const TEMPLATE: &str = include_str!("../cfg.toml.example");

fn no_env(_: &str) -> Option<String> {
    None
}

fn minimal(board: &str, extra: &str) -> String {
    format!(
        "board = {:?}\nwifi_ssid = \"bedroom\"\nwifi_password = \"hunter22\"\n\
         firebase_host = \"sleeptracker-12345.firebaseio.com\"\nfirebase_auth = \"s3cr3t-token\"\n{}",
        board, extra
    )
}

// The commented-out NodeMCU block at the end of the template, uncommented.
fn nodemcu_template() -> String {
    TEMPLATE
        .split_once("# NodeMCU variant")
        .map(|(_, block)| block)
        .unwrap()
        .lines()
        .filter_map(|line| line.strip_prefix('#'))
        .filter(|line| !line.is_empty() && !line.starts_with(' '))
        .map(|line| format!("{}\n", line))
        .collect()
}

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("sleep-tracker-{}-{}", name, std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
fn generic_template_resolves() {
    let resolved = cfg::resolve(TEMPLATE, no_env).unwrap();
    assert_eq!(resolved.board, "Board::Generic");
    assert_eq!(resolved.dht_type, "DhtType::Dht11");
    assert_eq!(resolved.raw.sensor_read_interval_ms, 2000);
    assert_eq!(resolved.raw.firebase_send_interval_ms, Some(5000));
    assert!(resolved.overridden.is_empty());
}

#[test]
fn nodemcu_template_resolves_without_send_interval() {
    let text = nodemcu_template();
    let resolved = cfg::resolve(&text, no_env).unwrap();
    assert_eq!(resolved.board, "Board::NodeMcu");
    assert_eq!(resolved.raw.firebase_send_interval_ms, None);
    assert_eq!(resolved.raw.firebase_host, "your-project.firebaseio.com");

    let code = cfg::generate(&resolved);
    assert!(code.contains("board: Board::NodeMcu,"));
    assert!(code.contains("firebase_send_interval_ms: None,"));
    assert!(code.contains("pins: Board::NodeMcu.pins(),"));
}

#[test]
fn environment_overrides_file_values() {
    let text = minimal("generic", "");
    let resolved = cfg::resolve(&text, |name| match name {
        cfg::ENV_FIREBASE_HOST => Some("provisioned.firebaseio.com".into()),
        cfg::ENV_FIREBASE_AUTH => Some("provisioned-token".into()),
        _ => None,
    })
    .unwrap();

    assert_eq!(resolved.raw.wifi_ssid, "bedroom");
    assert_eq!(resolved.raw.wifi_password, "hunter22");
    assert_eq!(resolved.raw.firebase_host, "provisioned.firebaseio.com");
    assert_eq!(resolved.raw.firebase_auth, "provisioned-token");
    assert_eq!(
        resolved.overridden,
        vec![cfg::ENV_FIREBASE_HOST, cfg::ENV_FIREBASE_AUTH]
    );

    let code = cfg::generate(&resolved);
    assert!(code.contains("Secret::new(\"provisioned-token\")"));
    assert!(!code.contains("s3cr3t-token"));
}

#[test]
fn every_override_variable_is_honoured() {
    let resolved = cfg::resolve(&minimal("generic", ""), |name| Some(format!("{}-value", name))).unwrap();
    assert_eq!(resolved.overridden, cfg::ENV_OVERRIDES.to_vec());
    assert_eq!(resolved.raw.wifi_ssid, format!("{}-value", cfg::ENV_WIFI_SSID));
    assert_eq!(resolved.raw.wifi_password, format!("{}-value", cfg::ENV_WIFI_PASSWORD));
}

#[test]
fn board_and_dht_aliases() {
    let cases = [
        ("esp32", "dht22", "Board::Generic", "DhtType::Dht22"),
        ("ESP8266", "am2301", "Board::NodeMcu", "DhtType::Dht21"),
        ("NodeMCU", "DHT12", "Board::NodeMcu", "DhtType::Dht12"),
    ];
    for (board, dht, board_variant, dht_variant) in cases {
        let text = minimal(board, &format!("dht_type = {:?}\n", dht));
        let resolved = cfg::resolve(&text, no_env).unwrap();
        assert_eq!(resolved.board, board_variant, "{}", board);
        assert_eq!(resolved.dht_type, dht_variant, "{}", dht);
    }
}

#[test]
fn unknown_names_are_rejected() {
    let err = cfg::resolve(&minimal("arduino-uno", ""), no_env).err().unwrap();
    assert!(err.to_string().contains("unknown board"));

    let err = cfg::resolve(&minimal("generic", "dht_type = \"dht33\"\n"), no_env)
        .err()
        .unwrap();
    assert!(err.to_string().contains("unknown dht_type"));
}

#[test]
fn zero_read_interval_is_rejected() {
    let text = minimal("nodemcu", "sensor_read_interval_ms = 0\n");
    let err = cfg::resolve(&text, no_env).err().unwrap();
    assert!(err.to_string().contains("sensor_read_interval_ms"));
}

#[test]
fn defaults_apply_when_omitted() {
    let resolved = cfg::resolve(&minimal("nodemcu", ""), no_env).unwrap();
    assert_eq!(resolved.raw.sensor_read_interval_ms, 2000);
    assert_eq!(resolved.dht_type, "DhtType::Dht11");
    assert_eq!(resolved.raw.firebase_send_interval_ms, None);
}

#[test]
fn missing_config_falls_back_to_template() {
    let dir = scratch_dir("fallback");
    fs::write(dir.join(cfg::TEMPLATE_FILE), "board = \"generic\"\n").unwrap();

    let source = cfg::read_source(&dir).unwrap();
    assert!(source.from_template);
    assert_eq!(source.text, "board = \"generic\"\n");

    fs::write(dir.join(cfg::CONFIG_FILE), "board = \"nodemcu\"\n").unwrap();
    let source = cfg::read_source(&dir).unwrap();
    assert!(!source.from_template);
    assert_eq!(source.text, "board = \"nodemcu\"\n");

    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn missing_template_is_an_error() {
    let dir = scratch_dir("empty");
    assert!(cfg::read_source(&dir).is_err());
    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn shared_names_match_library_parsing() {
    use sleep_tracker_config::{Board, DhtType};

    for name in ["generic", "esp32", "nodemcu", "esp8266", "uno"] {
        assert_eq!(names::board_name(name).is_some(), name.parse::<Board>().is_ok(), "{}", name);
    }
    for name in ["dht11", "dht12", "dht21", "am2301", "dht22", "dht33"] {
        assert_eq!(names::dht_name(name).is_some(), name.parse::<DhtType>().is_ok(), "{}", name);
    }
}
