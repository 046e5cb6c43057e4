//! tsgen CLI - TypeScript project scaffolder
//!
//! Usage: tsgen [OPTIONS] [PROJECT_NAME]

mod cli;
mod commands;
mod ui;

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::Cli;
use ui::context::UiContext;

fn main() {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    // Replaced by the configured context once config has loaded.
    let mut ctx = UiContext::from_cli(cli.json, cli.color);

    if let Err(err) = run(&cli, &mut ctx) {
        if ctx.json {
            let kind = err
                .downcast_ref::<tsgen::ScaffoldError>()
                .map(|e| e.kind())
                .unwrap_or("error");
            let _ = ui::json::emit(serde_json::json!({
                "event": "error",
                "command": "new",
                "kind": kind,
                "message": format!("{:#}", err),
            }));
        }
        eprint!("{}", ui::error::format_error(&err, &ctx));
        std::process::exit(1);
    }
}

fn run(cli: &Cli, ctx: &mut UiContext) -> anyhow::Result<()> {
    let (config, warnings) = tsgen::config::load(cli.config.as_deref())?;
    *ctx = UiContext::new(cli.json, cli.color, &config);
    commands::new::cmd_new(cli, ctx, &config, &warnings)
}

/// Initialize tracing on stderr; `RUST_LOG` wins over `-v` when set.
fn init_tracing(verbose: u8) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| match verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    });

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}
