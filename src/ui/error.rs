use tsgen::ScaffoldError;

use crate::ui::context::UiContext;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

/// Format an error for stderr, with a fix hint when one is known.
pub fn format_error(err: &anyhow::Error, ui: &UiContext) -> String {
    let mut out = format!(
        "{} {}\n",
        Icon::Error.colored(ui.color, ui.unicode),
        ColoredText::error(format!("{:#}", err)).render(ui.color)
    );

    if let Some(hint) = err.downcast_ref::<ScaffoldError>().and_then(hint_for) {
        out.push_str(&format!(
            "  {} {}\n",
            Icon::Arrow.colored(ui.color, ui.unicode),
            ColoredText::dim(hint).render(ui.color)
        ));
    }

    out
}

fn hint_for(err: &ScaffoldError) -> Option<&'static str> {
    match err {
        ScaffoldError::MissingProjectName => Some("Pass a name: tsgen <PROJECT_NAME>"),
        ScaffoldError::PromptAborted { .. } => {
            Some("Pass the name as an argument or use --yes to accept the default")
        }
        ScaffoldError::AssetRead { .. } => {
            Some("Check the --assets directory (or TSGEN_ASSETS_DIR) contains every bundled file")
        }
        ScaffoldError::CreateDir { .. } | ScaffoldError::Write { .. } => {
            Some("Check you have write permission in the current directory")
        }
        ScaffoldError::InvalidConfig { .. } => Some("Fix the configuration file and try again"),
        ScaffoldError::TemplateEncoding { .. } => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain() -> UiContext {
        UiContext {
            json: false,
            color: false,
            unicode: false,
        }
    }

    #[test]
    fn missing_name_includes_hint() {
        let err = anyhow::Error::new(ScaffoldError::MissingProjectName);
        let out = format_error(&err, &plain());

        assert_eq!(
            out,
            "[FAIL] project name is not specified\n  [>] Pass a name: tsgen <PROJECT_NAME>\n"
        );
    }

    #[test]
    fn foreign_error_has_no_hint() {
        let err = anyhow::anyhow!("something else");
        let out = format_error(&err, &plain());

        assert_eq!(out, "[FAIL] something else\n");
    }

    #[test]
    fn context_chain_is_kept() {
        let err = anyhow::Error::new(ScaffoldError::MissingProjectName).context("resolving name");
        let out = format_error(&err, &plain());

        assert!(out.starts_with("[FAIL] resolving name: project name is not specified\n"));
        assert!(out.contains("Pass a name"));
    }
}
