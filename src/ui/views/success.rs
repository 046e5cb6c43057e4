use tsgen::ScaffoldReport;

use crate::ui::context::UiContext;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

/// Commands available in a generated project, with what they do.
const NEXT_STEPS: &[(&str, &str)] = &[
    ("'yarn build' or 'npm run build'", "for building typescript"),
    (
        "'yarn watch' or 'npm run watch'",
        "for building and watching typescript files for changes",
    ),
    ("'yarn start' or 'npm run start'", "for starting project"),
    ("'yarn dev' or 'npm run dev'", "for starting project with nodemon"),
    ("'yarn debug' or 'npm run debug'", "for debugging"),
];

pub fn render_success(report: &ScaffoldReport, ui: &UiContext) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "{} {} created {} at {}\n",
        Icon::Success.colored(ui.color, ui.unicode),
        ColoredText::success("Success!").bold().render(ui.color),
        ColoredText::plain(report.project_name.as_str())
            .bold()
            .render(ui.color),
        report.output_path.display()
    ));
    out.push_str(&format!(
        "Inside that directory run {} for installing dependencies.\n",
        ColoredText::info("'yarn' or 'npm i'").render(ui.color)
    ));
    out.push_str("Then you can run these commands:\n");

    for (command, description) in NEXT_STEPS {
        out.push_str(&format!(
            "  {}\n      {}\n",
            ColoredText::info(*command).render(ui.color),
            description
        ));
    }

    out.push('\n');
    out.push_str(&format!(
        "{}\n{}\n",
        ColoredText::success("created with love!").render(ui.color),
        ColoredText::success("happy coding!").render(ui.color)
    ));

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tsgen::ProjectName;

    fn report() -> ScaffoldReport {
        ScaffoldReport {
            project_name: ProjectName::new("demo").unwrap(),
            output_path: PathBuf::from("/work/demo"),
            files: Vec::new(),
        }
    }

    fn ui(color: bool) -> UiContext {
        UiContext {
            json: false,
            color,
            unicode: true,
        }
    }

    #[test]
    fn success_names_project_and_path() {
        let out = render_success(&report(), &ui(false));

        assert!(out.starts_with("✓ Success! created demo at /work/demo\n"));
    }

    #[test]
    fn success_lists_every_next_step() {
        let out = render_success(&report(), &ui(false));

        for script in ["build", "watch", "start", "dev", "debug"] {
            assert!(
                out.contains(&format!("'npm run {}'", script)),
                "missing {} hint",
                script
            );
        }
        assert!(out.contains("'yarn' or 'npm i'"));
    }

    #[test]
    fn plain_output_has_no_escape_codes() {
        assert!(!render_success(&report(), &ui(false)).contains('\u{1b}'));
        assert!(render_success(&report(), &ui(true)).contains('\u{1b}'));
    }
}
