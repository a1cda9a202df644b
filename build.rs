// Build script - reads config.yaml at compile time and generates gnuplot defaults
// This allows changing defaults during development without editing source code

use std::env;
use std::fs;
use std::path::Path;

fn main() {
    // Tell Cargo to rerun if config.yaml changes
    println!("cargo:rerun-if-changed=src/config.yaml");

    let out_dir = env::var("OUT_DIR").unwrap();
    let dest_path = Path::new(&out_dir).join("compiled_defaults.rs");

    // Try to read config.yaml from src/, fall back to hardcoded defaults if not found
    let config = if Path::new("src/config.yaml").exists() {
        let content = fs::read_to_string("src/config.yaml")
            .expect("Failed to read src/config.yaml");
        parse_config(&content)
    } else {
        CompiledDefaults::default()
    };

    let generated = format!(
        r#"// Auto-generated from config.yaml at compile time
// Do not edit - modify config.yaml and rebuild instead

pub const GNUPLOT_EXE: &str = "{exe}";
pub const WIDTH: u32 = {width};
pub const HEIGHT: u32 = {height};
pub const PERSIST: bool = {persist};
pub const DEBUG: bool = {debug};
pub const SILENT: bool = {silent};
"#,
        exe = config.exe.escape_default(),
        width = config.width,
        height = config.height,
        persist = config.persist,
        debug = config.debug,
        silent = config.silent,
    );

    fs::write(&dest_path, generated).expect("Failed to write compiled defaults");
}

struct CompiledDefaults {
    exe: String,
    width: u32,
    height: u32,
    persist: bool,
    debug: bool,
    silent: bool,
}

impl Default for CompiledDefaults {
    fn default() -> Self {
        Self {
            exe: "gnuplot".to_string(),
            width: 800,
            height: 600,
            persist: false,
            debug: false,
            silent: false,
        }
    }
}

fn parse_config(content: &str) -> CompiledDefaults {
    let mut config = CompiledDefaults::default();

    // Simple YAML parsing (avoiding external dependencies in build script)
    let mut in_gnuplot = false;

    for line in content.lines() {
        let trimmed = line.trim();

        if trimmed.starts_with("gnuplot:") {
            in_gnuplot = true;
            continue;
        }

        // A new top-level key ends the section
        if !trimmed.is_empty()
            && !trimmed.starts_with('#')
            && !line.starts_with(' ')
            && !line.starts_with('\t')
        {
            in_gnuplot = false;
        }

        if !in_gnuplot {
            continue;
        }

        if let Some((key, value)) = parse_kv(trimmed) {
            match key {
                "exe" => config.exe = value.trim_matches('"').trim_matches('\'').to_string(),
                "width" => config.width = value.parse().unwrap_or(800),
                "height" => config.height = value.parse().unwrap_or(600),
                "persist" => config.persist = parse_bool(value),
                "debug" => config.debug = parse_bool(value),
                "silent" => config.silent = parse_bool(value),
                _ => {}
            }
        }
    }

    config
}

fn parse_kv(line: &str) -> Option<(&str, &str)> {
    // Skip comments and empty lines
    if line.starts_with('#') || line.is_empty() {
        return None;
    }

    let colon_pos = line.find(':')?;
    let key = line[..colon_pos].trim();
    let mut value = line[colon_pos + 1..].trim();

    // Remove inline comments
    if let Some(comment_pos) = value.find(" #") {
        value = value[..comment_pos].trim();
    }

    // Skip if value is empty (section header)
    if value.is_empty() {
        return None;
    }

    Some((key, value))
}

fn parse_bool(s: &str) -> bool {
    matches!(s.to_lowercase().as_str(), "true" | "yes" | "1")
}
