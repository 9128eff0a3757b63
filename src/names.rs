// Accepted spellings of the board and DHT model names in cfg.toml, mapped to
// their canonical form. Also compiled into build.rs, so it must not depend on
// anything else in the crate.

const BOARD_NAMES: [(&str, &str); 4] = [
    ("generic", "generic"),
    ("esp32", "generic"),
    ("nodemcu", "nodemcu"),
    ("esp8266", "nodemcu"),
];

const DHT_NAMES: [(&str, &str); 5] = [
    ("dht11", "dht11"),
    ("dht12", "dht12"),
    ("dht21", "dht21"),
    ("am2301", "dht21"),
    ("dht22", "dht22"),
];

fn canonical(table: &[(&str, &'static str)], name: &str) -> Option<&'static str> {
    let name = name.trim();
    table
        .iter()
        .find(|(alias, _)| alias.eq_ignore_ascii_case(name))
        .map(|(_, canonical)| *canonical)
}

/// `"generic"` or `"nodemcu"`, case-insensitive, aliases included.
pub fn board_name(name: &str) -> Option<&'static str> {
    canonical(&BOARD_NAMES, name)
}

/// `"dht11"`, `"dht12"`, `"dht21"` or `"dht22"`, case-insensitive, aliases included.
pub fn dht_name(name: &str) -> Option<&'static str> {
    canonical(&DHT_NAMES, name)
}
