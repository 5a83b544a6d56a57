//! Coach Gateway Binary
//!
//! # Usage
//! ```bash
//! coach-gateway [--port 8787] [--host 127.0.0.1] [--config gateway.json] [--verbose]
//! ```

use anyhow::Context;
use clap::Parser;
use coach_gateway::{Gateway, GatewayConfig};
use coach_llm::OpenAIProvider;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

/// Coach Gateway - persona coaching over HTTP
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Port to listen on (overrides the config file)
    #[arg(short, long)]
    port: Option<u16>,

    /// Host to bind to (overrides the config file)
    #[arg(long)]
    host: Option<String>,

    /// JSON configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable verbose debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Initialize logging; RUST_LOG wins over --verbose
    let level = if args.verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    if args.verbose {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .with_thread_ids(true)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .init();
    }

    // Also loads .env, so it runs before the COACH_* overrides are read
    let provider = OpenAIProvider::from_env().context("failed to configure LLM provider")?;

    let mut config = match &args.config {
        Some(path) => GatewayConfig::from_file(&path.to_string_lossy())
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => GatewayConfig::default(),
    };
    config.apply_env_overrides(|key| std::env::var(key).ok());
    if let Some(host) = args.host {
        config = config.with_host(host);
    }
    if let Some(port) = args.port {
        config = config.with_port(port);
    }

    print_banner(&config);

    let gateway = Gateway::new(config, Arc::new(provider));
    gateway.start().await?;

    Ok(())
}

fn print_banner(config: &GatewayConfig) {
    println!();
    println!("╔═══════════════════════════════════════════════════════════════╗");
    println!("║                                                               ║");
    println!("║                  COACH GATEWAY — PERSONAS                     ║");
    println!("║                                                               ║");
    println!("║      Persona coaching with crisis and warning triage          ║");
    println!("║                                                               ║");
    println!("╚═══════════════════════════════════════════════════════════════╝");
    println!();
    println!("📡 HTTP Server");
    println!("   └─ http://{}:{}", config.host, config.port);
    println!();
    println!("🔗 Endpoints");
    println!("   ├─ GET    /health                 — Health check");
    println!("   ├─ GET    /personas               — Available personas");
    println!("   ├─ POST   /sessions               — Start a session");
    println!("   ├─ GET    /sessions/:id           — Session info");
    println!("   ├─ POST   /sessions/:id/messages  — Send a message");
    println!("   ├─ GET    /sessions/:id/history   — Conversation history");
    println!("   ├─ POST   /sessions/:id/reset     — Reset the session");
    println!("   └─ DELETE /sessions/:id           — End the session");
    println!();
    println!("🧠 Models");
    println!("   ├─ reply:   {}", config.models.reply_model);
    println!("   └─ summary: {}", config.models.summary_model);
    println!();
    println!("─────────────────────────────────────────────────────────────────");
    println!("Press Ctrl+C to stop the gateway");
    println!();
}
