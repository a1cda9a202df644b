// Debug script to show what the path utilities report for a path
//
// Usage: probe-path <base> [segment...]
// Set RUST_LOG=toolbox=trace to see the library's own events.

use std::env;
use std::process::ExitCode;
use std::time::UNIX_EPOCH;

use toolbox::utilities::has_glob_meta;
use toolbox::FsPath;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let mut args = env::args().skip(1);
    let Some(base) = args.next() else {
        eprintln!("Usage: probe-path <base> [segment...]");
        return Ok(ExitCode::from(2));
    };
    let segments: Vec<String> = args.collect();

    let path = FsPath::from(base).join(&segments);

    println!("=== PATH ===");
    println!("  joined: {}", path);
    println!("  empty:  {}", path.is_empty());
    println!();

    if has_glob_meta(&path.to_string()) {
        println!("=== GLOB ===");
        let matches = path.glob()?;
        if matches.is_empty() {
            println!("  [NO MATCHES]");
        }
        for (i, matched) in matches.iter().enumerate() {
            println!("  [{}] {}", i, matched);
        }
        return Ok(ExitCode::SUCCESS);
    }

    println!("=== EXISTENCE ===");
    if !path.exists()? {
        println!("  exists: false");
        return Ok(ExitCode::FAILURE);
    }
    println!("  exists: true");
    println!();

    println!("=== FILE INFO ===");
    let meta = path.stat()?;
    println!("  size:      {} bytes", meta.len());
    println!("  directory: {}", meta.is_dir());
    println!("  readonly:  {}", meta.permissions().readonly());
    if let Ok(modified) = meta.modified() {
        let secs = modified
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or_default();
        println!("  modified:  {} (unix seconds)", secs);
    }

    Ok(ExitCode::SUCCESS)
}
