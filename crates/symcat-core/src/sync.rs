//! Bidirectional synchronization between a catalog and the external
//! define-symbol setting.
//!
//! [`revert`] pulls the external ground truth into the catalog; [`apply`]
//! pushes the catalog's enabled symbols back out through a [`SettingsStore`].
//! Both are plain synchronous traversals of the entry list. Revert cannot
//! fail and never removes entries; apply isolates failures per target group.

use crate::catalog::Catalog;
use crate::config::SyncPolicy;
use crate::parse::{join_defines, parse_defines};
use crate::store::{SettingsStore, StoreError, TargetGroup};
use crate::symbol::{Symbol, SymbolStyle};

/// What a revert changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RevertOutcome {
    /// An enabled state flipped or an entry was appended.
    pub changed: bool,
    /// Previously-unknown names appended as new enabled entries.
    pub added: usize,
}

/// Per-group result of an apply pass. Non-concrete groups never appear here;
/// they are skipped, not failed.
#[derive(Debug)]
pub struct GroupWriteResult {
    pub group: TargetGroup,
    pub error: Option<StoreError>,
}

impl GroupWriteResult {
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}

/// Pull an external define string into the catalog.
///
/// Every flag-bearing entry's enabled state is set to whether its name is in
/// the active set parsed from `external_value`; active names with no
/// matching entry (exact-name match, any style) are appended as enabled
/// Symbol entries with empty descriptions, in the first-occurrence order of
/// the external value. Entries are never removed. Idempotent: reverting the
/// same value twice reports no change the second time.
///
/// When the policy makes a non-Symbol style flag-bearing and exclusive, the
/// last entry of that style (in catalog order) named in the active set wins
/// and its style siblings are forced off.
pub fn revert(catalog: &mut Catalog, external_value: &str, policy: &SyncPolicy) -> RevertOutcome {
    let active = parse_defines(external_value);
    let mut outcome = RevertOutcome::default();

    let symbols = catalog.entries_mut();

    // Decide the full enabled pattern before touching anything, so the
    // exclusivity pass cannot make a repeated revert look like a change.
    let mut desired: Vec<bool> = symbols
        .iter()
        .map(|s| !s.name.is_empty() && active.contains(&s.name))
        .collect();

    if policy.exclusive_groups && policy.headers_are_flags {
        let winner = symbols
            .iter()
            .enumerate()
            .rev()
            .find(|(i, s)| s.style == SymbolStyle::Header && desired[*i])
            .map(|(i, _)| i);
        if let Some(winner) = winner {
            for (i, symbol) in symbols.iter().enumerate() {
                if symbol.style == SymbolStyle::Header && i != winner {
                    desired[i] = false;
                }
            }
        }
    }

    for (i, symbol) in symbols.iter_mut().enumerate() {
        if !symbol.is_flag_bearing(policy) {
            continue;
        }
        if symbol.enabled != desired[i] {
            symbol.enabled = desired[i];
            outcome.changed = true;
        }
    }

    // Names the catalog has never seen, in external-value order.
    for name in &active {
        if symbols.iter().all(|s| s.name != *name) {
            symbols.push(Symbol::new(name.clone()).with_enabled(true));
            outcome.added += 1;
            outcome.changed = true;
        }
    }

    if outcome.changed {
        catalog.mark_dirty();
    }
    tracing::debug!(
        "revert: {} active names, {} entries appended",
        active.len(),
        outcome.added
    );
    outcome
}

/// Push the catalog's enabled symbols to the external store.
///
/// The define string is built from [`Catalog::active_names`] (distinct,
/// display order) and written to each requested group; an empty `groups`
/// slice resolves to everything the store enumerates. Non-concrete groups
/// are skipped. Each group is cleared and then written, so backends that
/// merge define strings end up with a clean overwrite. A failing group is
/// recorded in its [`GroupWriteResult`] and logged, and the remaining groups
/// still receive the define string.
pub fn apply(
    catalog: &Catalog,
    store: &dyn SettingsStore,
    groups: &[TargetGroup],
    policy: &SyncPolicy,
) -> Vec<GroupWriteResult> {
    let define_string = join_defines(catalog.active_names(policy));

    let groups: Vec<TargetGroup> = if groups.is_empty() {
        store.groups()
    } else {
        groups.to_vec()
    };

    let mut results = Vec::with_capacity(groups.len());
    for group in groups {
        if !group.is_concrete() {
            continue;
        }
        let error = store
            .set_defines(&group, "")
            .and_then(|_| store.set_defines(&group, &define_string))
            .err();
        match &error {
            Some(e) => tracing::warn!("apply: write to group {} failed: {}", group, e),
            None => tracing::debug!("apply: group {} <- {:?}", group, define_string),
        }
        results.push(GroupWriteResult { group, error });
    }
    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    #[test]
    fn revert_does_not_enable_headers_by_default() {
        let mut catalog = Catalog::from_symbols(vec![Symbol::header("FOO")]);
        let outcome = revert(&mut catalog, "FOO", &SyncPolicy::default());

        // The header's name matches, so no new entry is appended, but a
        // label-only header gains no enabled state either.
        assert_eq!(catalog.len(), 1);
        assert!(!catalog.symbols()[0].enabled);
        assert_eq!(outcome.added, 0);
        assert!(!outcome.changed);
    }

    #[test]
    fn revert_header_name_blocks_append() {
        let mut catalog = Catalog::from_symbols(vec![Symbol::header("Networking")]);
        revert(&mut catalog, "Networking;NET_DEBUG", &SyncPolicy::default());

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.symbols()[1].name, "NET_DEBUG");
        assert!(catalog.symbols()[1].enabled);
    }

    #[test]
    fn revert_marks_dirty_only_on_change() {
        let mut catalog = Catalog::from_symbols(vec![Symbol::new("FOO").with_enabled(true)]);
        assert!(!catalog.is_dirty());

        let outcome = revert(&mut catalog, "FOO", &SyncPolicy::default());
        assert!(!outcome.changed);
        assert!(!catalog.is_dirty());

        let outcome = revert(&mut catalog, "", &SyncPolicy::default());
        assert!(outcome.changed);
        assert!(catalog.is_dirty());
    }

    #[test]
    fn apply_skips_empty_names() {
        let catalog = Catalog::from_symbols(vec![
            Symbol::new("").with_enabled(true),
            Symbol::new("A").with_enabled(true),
        ]);
        let group = TargetGroup::new("Standalone", 1);
        let store = MemoryStore::new(vec![group.clone()]);

        apply(&catalog, &store, &[], &SyncPolicy::default());
        assert_eq!(store.defines(&group).unwrap(), "A");
    }

    #[test]
    fn apply_writes_empty_string_for_empty_catalog() {
        let catalog = Catalog::new();
        let group = TargetGroup::new("Standalone", 1);
        let store = MemoryStore::new(vec![group.clone()]);
        store.set_defines(&group, "STALE").unwrap();

        let results = apply(&catalog, &store, &[], &SyncPolicy::default());
        assert!(results.iter().all(GroupWriteResult::is_ok));
        assert_eq!(store.defines(&group).unwrap(), "");
    }
}
