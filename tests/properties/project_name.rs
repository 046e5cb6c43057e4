//! Property tests for project name validation and output paths.

use std::path::Path;

use proptest::prelude::*;

use tsgen::{ProjectName, ScaffoldError};

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Whitespace-only names are always rejected.
    #[test]
    fn property_blank_names_rejected(
        blank in "[ \t\r\n]{0,16}"
    ) {
        prop_assert!(matches!(ProjectName::new(blank), Err(ScaffoldError::MissingProjectName)));
    }

    /// PROPERTY: Names with visible characters are kept exactly and placed under cwd.
    #[test]
    fn property_names_place_output_under_cwd(
        name in "[A-Za-z0-9._-]{0,24}[A-Za-z0-9]"
    ) {
        let project = ProjectName::new(name.clone()).unwrap();
        prop_assert_eq!(project.as_str(), name.as_str());

        let cwd = Path::new("/work");
        let out = project.output_path(cwd);
        prop_assert_eq!(out.parent(), Some(cwd));
        prop_assert!(out.ends_with(&name));
    }
}
