use std::{env, error::Error, fs, path::Path};

#[path = "src/names.rs"]
mod names;

#[path = "build/cfg.rs"]
mod cfg;

fn main() -> Result<(), Box<dyn Error>> {
    // Tell Cargo to rerun if toml changes
    println!("cargo:rerun-if-changed={}", cfg::CONFIG_FILE);
    println!("cargo:rerun-if-changed={}", cfg::TEMPLATE_FILE);
    println!("cargo:rerun-if-changed=build/cfg.rs");
    println!("cargo:rerun-if-changed=src/names.rs");
    if Path::new(".env").exists() {
        println!("cargo:rerun-if-changed=.env");
    }

    dotenvy::dotenv().ok();

    // Read and parse
    let source = cfg::read_source(Path::new("."))?;
    if source.from_template {
        println!(
            "cargo:warning={} not found, building with placeholder values from {}",
            cfg::CONFIG_FILE,
            cfg::TEMPLATE_FILE
        );
    }

    let resolved = cfg::resolve(&source.text, |name| {
        println!("cargo:rerun-if-env-changed={}", name);
        env::var(name).ok()
    })?;
    for name in &resolved.overridden {
        println!("cargo:warning={} taken from the environment", name);
    }

    // Generate Rust code
    let out_dir = env::var("OUT_DIR")?;
    let dest_path = Path::new(&out_dir).join("config.rs");
    fs::write(dest_path, cfg::generate(&resolved))?;
    Ok(())
}
