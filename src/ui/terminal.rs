use is_terminal::IsTerminal;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalCapabilities {
    pub supports_color: bool,
    pub supports_unicode: bool,
    pub is_ci: bool,
}

pub fn detect_capabilities() -> TerminalCapabilities {
    detect_capabilities_impl(
        |key| std::env::var(key).ok(),
        std::io::stdout().is_terminal(),
    )
}

fn detect_capabilities_impl(
    get_env: impl Fn(&str) -> Option<String>,
    is_tty: bool,
) -> TerminalCapabilities {
    let term = get_env("TERM").unwrap_or_default();
    let term_is_dumb = term.eq_ignore_ascii_case("dumb");

    let no_color = get_env("NO_COLOR").is_some();
    let is_ci = is_ci_env(&get_env);

    let supports_color = is_tty && !term_is_dumb && !no_color;
    let supports_unicode = !term_is_dumb && unicode_locale(&get_env);

    TerminalCapabilities {
        supports_color,
        supports_unicode,
        is_ci,
    }
}

fn is_ci_env(get_env: &impl Fn(&str) -> Option<String>) -> bool {
    const KEYS: &[&str] = &[
        "CI",
        "GITHUB_ACTIONS",
        "JENKINS_HOME",
        "BUILDKITE",
        "CIRCLECI",
        "TRAVIS",
        "TEAMCITY_VERSION",
    ];

    KEYS.iter().any(|k| get_env(k).is_some())
}

/// The first non-empty of `LC_ALL`, `LC_CTYPE`, `LANG` decides; with none
/// set, assume a UTF-8 terminal.
fn unicode_locale(get_env: &impl Fn(&str) -> Option<String>) -> bool {
    const KEYS: &[&str] = &["LC_ALL", "LC_CTYPE", "LANG"];
    match KEYS
        .iter()
        .filter_map(|k| get_env(k))
        .find(|v| !v.is_empty())
    {
        Some(locale) => {
            let v = locale.to_lowercase();
            v.contains("utf-8") || v.contains("utf8")
        }
        None => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn caps(env: &[(&str, &str)], is_tty: bool) -> TerminalCapabilities {
        let map: HashMap<String, String> = env
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        detect_capabilities_impl(|k| map.get(k).cloned(), is_tty)
    }

    #[test]
    fn detect_respects_no_color() {
        let c = caps(&[("NO_COLOR", "1"), ("TERM", "xterm-256color")], true);
        assert!(!c.supports_color);
    }

    #[test]
    fn detect_ci_environment() {
        let c = caps(&[("CI", "true"), ("TERM", "xterm-256color")], true);
        assert!(c.is_ci);
    }

    #[test]
    fn detect_term_dumb_disables_enhancements() {
        let c = caps(&[("TERM", "dumb")], true);
        assert!(!c.supports_color);
        assert!(!c.supports_unicode);
    }

    #[test]
    fn detect_non_utf8_locale_disables_unicode() {
        let c = caps(&[("TERM", "xterm"), ("LC_ALL", "C")], true);
        assert!(!c.supports_unicode);

        let c = caps(&[("TERM", "xterm"), ("LANG", "POSIX")], true);
        assert!(!c.supports_unicode);
    }

    #[test]
    fn detect_locale_precedence() {
        let c = caps(
            &[("TERM", "xterm"), ("LC_ALL", "en_US.UTF-8"), ("LANG", "C")],
            true,
        );
        assert!(c.supports_unicode);

        let c = caps(&[("TERM", "xterm"), ("LC_ALL", ""), ("LC_CTYPE", "C.utf8")], true);
        assert!(c.supports_unicode);
    }

    #[test]
    fn detect_pipe_disables_color() {
        let c = caps(&[("TERM", "xterm")], false);
        assert!(!c.supports_color);
        assert!(c.supports_unicode);
    }
}
