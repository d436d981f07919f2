use explorer_fs::NormalizedPath;
use proptest::prelude::*;

proptest! {
    #[test]
    fn normalization_is_idempotent(s in "\\PC*") {
        let once = NormalizedPath::new(&s);
        let twice = NormalizedPath::new(once.as_str());
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn normalized_paths_have_no_backslashes_or_dot_segments(s in "[a-z./\\\\]{0,24}") {
        let path = NormalizedPath::new(&s);
        let as_str = path.as_str();

        prop_assert!(!as_str.contains('\\'));
        let body = as_str.strip_prefix("//").unwrap_or(as_str);
        prop_assert!(!body.contains("//"));
        for component in body.split('/').skip_while(|c| c.is_empty()) {
            prop_assert!(component != "." && component != "..");
        }
    }

    #[test]
    fn joined_child_has_parent(base in "/[a-z]{1,8}(/[a-z]{1,8}){0,3}", child in "[a-z]{1,8}") {
        let parent = NormalizedPath::new(&base);
        let joined = parent.join(&child);
        prop_assert_eq!(joined.parent(), Some(parent.clone()));
        prop_assert_eq!(joined.file_name(), Some(child.as_str()));
        prop_assert!(parent.contains(&joined));
    }
}
