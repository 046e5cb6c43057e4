use crate::cli::ColorWhen;
use crate::ui::terminal::{detect_capabilities, TerminalCapabilities};
use tsgen::config::{ColorMode, Config};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiContext {
    pub json: bool,
    pub color: bool,
    pub unicode: bool,
}

impl UiContext {
    pub fn new(json: bool, cli_color: Option<ColorWhen>, config: &Config) -> Self {
        Self::from_caps(json, cli_color, config, detect_capabilities())
    }

    /// Context used before configuration has been loaded (e.g. for early errors).
    pub fn from_cli(json: bool, cli_color: Option<ColorWhen>) -> Self {
        Self::new(json, cli_color, &Config::default())
    }

    pub(crate) fn from_caps(
        json: bool,
        cli_color: Option<ColorWhen>,
        config: &Config,
        caps: TerminalCapabilities,
    ) -> Self {
        let unicode = config.output.unicode && caps.supports_unicode;

        let color = match cli_color {
            Some(ColorWhen::Never) => false,
            Some(ColorWhen::Always) => true,
            Some(ColorWhen::Auto) | None => match config.output.color {
                ColorMode::Never => false,
                ColorMode::Always => true,
                ColorMode::Auto => caps.supports_color && !caps.is_ci,
            },
        };

        Self {
            json,
            color,
            unicode,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tty_caps(is_ci: bool) -> TerminalCapabilities {
        TerminalCapabilities {
            supports_color: true,
            supports_unicode: true,
            is_ci,
        }
    }

    #[test]
    fn auto_uses_terminal_color_support() {
        let ui = UiContext::from_caps(false, None, &Config::default(), tty_caps(false));
        assert!(ui.color);
        assert!(ui.unicode);
    }

    #[test]
    fn ci_defaults_to_no_color_when_auto() {
        let ui = UiContext::from_caps(false, None, &Config::default(), tty_caps(true));
        assert!(!ui.color);
    }

    #[test]
    fn cli_flag_beats_config() {
        let mut config = Config::default();
        config.output.color = ColorMode::Always;

        let ui = UiContext::from_caps(false, Some(ColorWhen::Never), &config, tty_caps(false));
        assert!(!ui.color);

        let ui = UiContext::from_caps(false, Some(ColorWhen::Always), &Config::default(), tty_caps(true));
        assert!(ui.color);
    }

    #[test]
    fn config_can_disable_unicode() {
        let mut config = Config::default();
        config.output.unicode = false;

        let ui = UiContext::from_caps(false, None, &config, tty_caps(false));
        assert!(!ui.unicode);
    }
}
