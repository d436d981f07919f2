//! Display order computation

use super::DirectoryEntry;
use super::compare::folders_first_then_alpha;
use super::matcher::TokenMatcher;
use crate::store::RuleStore;
use explorer_fs::NormalizedPath;

/// Orders directory listings using the rules of an injected [`RuleStore`].
#[derive(Debug, Clone, Copy)]
pub struct OrderingEngine<'a> {
    store: &'a RuleStore,
}

impl<'a> OrderingEngine<'a> {
    pub fn new(store: &'a RuleStore) -> Self {
        Self { store }
    }

    /// Order `entries` of `folder` and assign positions.
    pub fn compute_order(
        &self,
        entries: Vec<DirectoryEntry>,
        folder: &NormalizedPath,
    ) -> Vec<DirectoryEntry> {
        let custom = self.store.order_for_folder(folder);
        tracing::debug!(%folder, entries = entries.len(), tokens = custom.len(), "Computing order");
        order_entries(entries, &custom, self.store.default_folders_first())
    }
}

/// Apply a custom order to `entries`.
///
/// Each token takes the first remaining entry it matches, so a wildcard
/// token repeated `n` times places up to `n` entries. Tokens that match
/// nothing are skipped. Entries no token took follow, sorted by
/// [`folders_first_then_alpha`]. Positions are assigned last.
pub fn order_entries(
    entries: Vec<DirectoryEntry>,
    custom: &[String],
    folders_first: bool,
) -> Vec<DirectoryEntry> {
    let mut remaining = entries;
    let mut ordered = Vec::with_capacity(remaining.len());

    for token in custom {
        let matcher = TokenMatcher::new(token);
        if let Some(index) = remaining.iter().position(|e| matcher.matches(&e.name)) {
            let mut entry = remaining.remove(index);
            entry.custom_ordered = true;
            ordered.push(entry);
        }
    }

    for entry in &mut remaining {
        entry.custom_ordered = false;
    }
    sort_default(&mut remaining, folders_first);
    ordered.extend(remaining);

    for (position, entry) in ordered.iter_mut().enumerate() {
        entry.position = position;
    }
    ordered
}

/// Sort by the default comparator in place.
pub fn sort_default(entries: &mut [DirectoryEntry], folders_first: bool) {
    entries.sort_by(|a, b| {
        folders_first_then_alpha(
            (a.name.as_str(), a.is_directory),
            (b.name.as_str(), b.is_directory),
            folders_first,
        )
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn entries(specs: &[(&str, bool)]) -> Vec<DirectoryEntry> {
        let parent = NormalizedPath::new("/proj/src");
        specs
            .iter()
            .map(|(name, dir)| DirectoryEntry::new(*name, *dir, parent.clone()))
            .collect()
    }

    fn names(entries: &[DirectoryEntry]) -> Vec<&str> {
        entries.iter().map(|e| e.name.as_str()).collect()
    }

    fn tokens(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn unmatched_tokens_are_skipped() {
        let result = order_entries(
            entries(&[("b.js", false), ("a.js", false)]),
            &tokens(&["missing.js", "b.js"]),
            true,
        );
        assert_eq!(names(&result), vec!["b.js", "a.js"]);
    }

    #[test]
    fn marks_custom_ordered_entries() {
        let result = order_entries(
            entries(&[("lib", true), ("main.rs", false), ("README.md", false)]),
            &tokens(&["main.rs"]),
            true,
        );

        assert_eq!(names(&result), vec!["main.rs", "lib", "README.md"]);
        let flags: Vec<bool> = result.iter().map(|e| e.custom_ordered).collect();
        assert_eq!(flags, vec![true, false, false]);
        let positions: Vec<usize> = result.iter().map(|e| e.position).collect();
        assert_eq!(positions, vec![0, 1, 2]);
    }

    #[test]
    fn wildcard_takes_first_remaining_in_listing_order() {
        let result = order_entries(
            entries(&[("b.css", false), ("z.jsx", false), ("a.jsx", false)]),
            &tokens(&["*.jsx"]),
            true,
        );
        assert_eq!(names(&result), vec!["z.jsx", "a.jsx", "b.css"]);
    }

    #[test]
    fn remainder_keeps_folders_first_off() {
        let result = order_entries(
            entries(&[("zeta", true), ("alpha.txt", false)]),
            &[],
            false,
        );
        assert_eq!(names(&result), vec!["alpha.txt", "zeta"]);
    }
}
