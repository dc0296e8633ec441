//! Dev harness: compiles the wasm bundle and serves the static site.

use std::process::{Command, Stdio};

use anyhow::{bail, Context, Result};
use clap::Parser;

#[derive(Parser, Debug)]
#[command(author, version, about = "Build and serve the scene demo site", long_about = None)]
struct Args {
    /// Port for the local static server
    #[arg(short, long, default_value_t = 8000)]
    port: u16,

    /// Serve existing artifacts without rebuilding the wasm bundle
    #[arg(long)]
    skip_build: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    if !args.skip_build {
        build_wasm()?;
    }

    serve(args.port)
}

fn build_wasm() -> Result<()> {
    log::info!("Building wasm bundle...");
    let status = Command::new("wasm-pack")
        .args([
            "build",
            "scene-wasm",
            "--release",
            "--target",
            "web",
            "--out-dir",
            "../static/pkg",
        ])
        .status()
        .context("failed to run wasm-pack; is it installed?")?;
    if !status.success() {
        bail!("wasm-pack build failed");
    }
    Ok(())
}

fn serve(port: u16) -> Result<()> {
    log::info!("Serving static/ at http://127.0.0.1:{port}");
    let mut server = Command::new("python3")
        .args(["-m", "http.server", &port.to_string(), "--directory", "static"])
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .context("failed to start the static file server")?;

    let status = server.wait().context("static file server exited abnormally")?;
    if !status.success() {
        bail!("static file server exited with {status}");
    }
    Ok(())
}
