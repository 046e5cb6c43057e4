//! Property tests for placeholder rendering.

use proptest::prelude::*;

use tsgen::{render, TemplateView};

fn identifier() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z][A-Za-z0-9_]{0,12}").unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Rendering never panics on arbitrary input.
    #[test]
    fn property_render_never_panics(
        template in "(?s).{0,256}",
        value in "(?s).{0,32}"
    ) {
        let view = TemplateView::new().with("projName", value);
        let _ = render(&template, &view);
    }

    /// PROPERTY: Text without an opening delimiter is returned unchanged.
    #[test]
    fn property_plain_text_is_identity(
        text in "[^{]{0,256}"
    ) {
        let view = TemplateView::new().with("projName", "x");
        prop_assert_eq!(render(&text, &view), text);
    }

    /// PROPERTY: A placeholder surrounded by plain text is replaced by its value verbatim.
    #[test]
    fn property_placeholder_is_replaced(
        prefix in "[^{}]{0,32}",
        suffix in "[^{}]{0,32}",
        key in identifier(),
        value in "(?s).{0,32}"
    ) {
        let view = TemplateView::new().with(key.clone(), value.clone());
        let template = format!("{}{{{{{}}}}}{}", prefix, key, suffix);
        prop_assert_eq!(render(&template, &view), format!("{}{}{}", prefix, value, suffix));
    }

    /// PROPERTY: Substituted values are never rendered a second time.
    #[test]
    fn property_single_pass(
        key in identifier(),
        other in identifier()
    ) {
        prop_assume!(key != other);
        let nested = format!("{{{{{}}}}}", other);
        let view = TemplateView::new()
            .with(key.clone(), nested.clone())
            .with(other, "expanded");
        prop_assert_eq!(render(&format!("{{{{{}}}}}", key), &view), nested);
    }

    /// PROPERTY: Unknown placeholders render as nothing.
    #[test]
    fn property_unknown_renders_empty(
        key in identifier()
    ) {
        let view = TemplateView::new();
        prop_assert_eq!(render(&format!("[{{{{{}}}}}]", key), &view), "[]");
    }
}
