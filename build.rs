use std::{env, error::Error, fs, path::Path};

#[path = "build/codegen.rs"]
mod codegen;

const DEFAULT_CONFIG_PATH: &str = "cfg.toml";

fn main() -> Result<(), Box<dyn Error>> {
    println!("cargo:rerun-if-env-changed=PET_TRACKER_CONFIG");
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=build/codegen.rs");

    let path = env::var("PET_TRACKER_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_PATH.into());

    // Only watch the toml when it exists, a missing watched file reruns every build
    let raw = if Path::new(&path).exists() {
        println!("cargo:rerun-if-changed={path}");
        let toml_str = fs::read_to_string(&path)?;
        codegen::parse(&toml_str).map_err(|e| format!("{path}: {e}"))?
    } else {
        println!("cargo:warning={path} not found, using the default device configuration");
        codegen::RawConfig::default()
    };

    // Generate Rust code
    let code = codegen::render(&raw)?;

    let out_dir = env::var("OUT_DIR")?;
    let dest_path = Path::new(&out_dir).join("config.rs");
    fs::write(dest_path, code)?;
    Ok(())
}
