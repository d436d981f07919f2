//! Default comparators

use std::cmp::Ordering;

/// Locale-style name compare: case-insensitive first, then lowercase before
/// uppercase.
///
/// Never returns `Equal` for two distinct names.
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| b.cmp(a))
}

/// Directories before files when `folders_first` is set, then
/// [`locale_compare`] on the names.
pub fn folders_first_then_alpha(
    a: (&str, bool),
    b: (&str, bool),
    folders_first: bool,
) -> Ordering {
    type_order(a.1, b.1, folders_first).then_with(|| locale_compare(a.0, b.0))
}

/// Comparator used when restoring a single item: same type split, but a
/// plain case-insensitive compare that treats `Readme` and `README` as equal.
pub fn compare_case_insensitive(
    a: (&str, bool),
    b: (&str, bool),
    folders_first: bool,
) -> Ordering {
    type_order(a.1, b.1, folders_first).then_with(|| a.0.to_lowercase().cmp(&b.0.to_lowercase()))
}

fn type_order(a_dir: bool, b_dir: bool, folders_first: bool) -> Ordering {
    if folders_first {
        b_dir.cmp(&a_dir)
    } else {
        Ordering::Equal
    }
}
