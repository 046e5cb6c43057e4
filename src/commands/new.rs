//! New command - generate a TypeScript project
//!
//! Resolves the project name, lays out the project through the scaffolder
//! and reports the result as text or as a JSON event.

use anyhow::{Context, Result};

use tsgen::config::{Config, ConfigWarning};
use tsgen::{
    resolve_project_name, AcceptDefaults, AssetSource, DialoguerPrompter, Prompter,
    ScaffoldOptions, Scaffolder,
};

use crate::cli::Cli;
use crate::ui::context::UiContext;
use crate::ui::primitives::icon::Icon;
use crate::ui::views::success::render_success;

pub fn cmd_new(
    cli: &Cli,
    ui: &UiContext,
    config: &Config,
    warnings: &[ConfigWarning],
) -> Result<()> {
    report_config_warnings(warnings, ui);

    let interactive = DialoguerPrompter::new(ui.color);
    let prompter: &dyn Prompter = if cli.yes {
        &AcceptDefaults
    } else {
        &interactive
    };

    let name = resolve_project_name(
        cli.project_name.as_deref(),
        prompter,
        &config.scaffold.default_project_name,
    )?;

    let cwd = std::env::current_dir().context("Failed to determine the current directory")?;
    let assets_dir = cli
        .assets
        .clone()
        .or_else(|| config.scaffold.assets_dir.clone());
    let assets = AssetSource::from_dir(assets_dir);
    let report = Scaffolder::new(ScaffoldOptions { cwd, assets }).generate(&name)?;

    if ui.json {
        let _ = crate::ui::json::emit(serde_json::json!({
            "event": "complete",
            "command": "new",
            "project": report.project_name,
            "path": report.output_path.display().to_string(),
            "files": report
                .files
                .iter()
                .map(|p| p.display().to_string())
                .collect::<Vec<_>>(),
        }));
    } else {
        print!("{}", render_success(&report, ui));
    }

    Ok(())
}

fn report_config_warnings(warnings: &[ConfigWarning], ui: &UiContext) {
    for warning in warnings {
        tracing::debug!(
            key = %warning.key,
            file = %warning.file.display(),
            "unknown configuration key"
        );
        if ui.json {
            continue;
        }

        let location = match warning.line {
            Some(line) => format!("{}:{}", warning.file.display(), line),
            None => warning.file.display().to_string(),
        };
        let suggestion = warning
            .suggestion
            .as_ref()
            .map(|s| format!(" (did you mean '{}'?)", s))
            .unwrap_or_default();
        eprintln!(
            "{} Unknown config key '{}' in {}{}",
            Icon::Warning.colored(ui.color, ui.unicode),
            warning.key,
            location,
            suggestion
        );
    }
}
