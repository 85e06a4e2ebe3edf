//! The ordered symbol catalog.

use serde::{Deserialize, Serialize};

use crate::config::SyncPolicy;
use crate::symbol::{Symbol, SymbolStyle};

/// An ordered, human-curated collection of define symbols.
///
/// Order is display order only; synchronization is set-based over enabled
/// names. The catalog owns entry lifetimes: entries appear through [`add`]
/// or through [`revert`] (for names known only to the external setting) and
/// leave only through [`remove`].
///
/// Serializes as a bare ordered list of entries. The dirty flag is
/// session-local and never persisted; the persistence collaborator reads it
/// to decide when to save and clears it afterwards.
///
/// [`add`]: Catalog::add
/// [`remove`]: Catalog::remove
/// [`revert`]: crate::sync::revert
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    symbols: Vec<Symbol>,
    #[serde(skip)]
    dirty: bool,
}

impl Catalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog from an existing entry list. Starts clean.
    pub fn from_symbols(symbols: Vec<Symbol>) -> Self {
        Self {
            symbols,
            dirty: false,
        }
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Entries in display order.
    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Symbol> {
        self.symbols.iter()
    }

    /// Append an entry. No uniqueness check is performed here; the editing
    /// surface owns what it adds, and revert performs its own exact-name
    /// check before appending.
    pub fn add(&mut self, symbol: Symbol) {
        self.symbols.push(symbol);
        self.dirty = true;
    }

    /// Remove the first entry structurally equal to `symbol`. Returns false
    /// if no such entry exists.
    pub fn remove(&mut self, symbol: &Symbol) -> bool {
        match self.symbols.iter().position(|s| s == symbol) {
            Some(idx) => {
                self.symbols.remove(idx);
                self.dirty = true;
                true
            }
            None => false,
        }
    }

    /// First entry with the given name, any style.
    pub fn find_by_name(&self, name: &str) -> Option<&Symbol> {
        self.symbols.iter().find(|s| s.name == name)
    }

    /// Mutable access to the first entry with the given name. Handing out
    /// the reference marks the catalog dirty, since the editing surface uses
    /// this for in-place edits.
    pub fn find_by_name_mut(&mut self, name: &str) -> Option<&mut Symbol> {
        let found = self.symbols.iter_mut().find(|s| s.name == name);
        if found.is_some() {
            self.dirty = true;
        }
        found
    }

    /// Distinct non-empty names of enabled flag-bearing entries, in display
    /// order with the first occurrence winning.
    pub fn active_names(&self, policy: &SyncPolicy) -> Vec<String> {
        let mut names: Vec<String> = Vec::new();
        for symbol in &self.symbols {
            if !symbol.enabled || symbol.name.is_empty() || !symbol.is_flag_bearing(policy) {
                continue;
            }
            if names.iter().any(|n| *n == symbol.name) {
                continue;
            }
            names.push(symbol.name.clone());
        }
        names
    }

    /// Enable or disable the named entry, the interactive toggle entry
    /// point. When the policy makes a non-Symbol style both flag-bearing and
    /// exclusive, enabling one entry disables its style siblings in the same
    /// call. Returns false if no flag-bearing entry has that name.
    pub fn set_enabled(&mut self, name: &str, enabled: bool, policy: &SyncPolicy) -> bool {
        if name.is_empty() {
            return false;
        }
        let Some(idx) = self
            .symbols
            .iter()
            .position(|s| s.name == name && s.is_flag_bearing(policy))
        else {
            return false;
        };

        if self.symbols[idx].enabled != enabled {
            self.symbols[idx].enabled = enabled;
            self.dirty = true;
        }

        let style = self.symbols[idx].style;
        if enabled && policy.exclusive_groups && style != SymbolStyle::Symbol {
            for (i, symbol) in self.symbols.iter_mut().enumerate() {
                if i != idx && symbol.style == style && symbol.enabled {
                    symbol.enabled = false;
                    self.dirty = true;
                }
            }
        }
        true
    }

    /// Whether the catalog has unsaved mutations.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Flag the catalog as mutated, for edits made outside its methods.
    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Clear the dirty flag after a successful save.
    pub fn clear_dirty(&mut self) {
        self.dirty = false;
    }

    /// Raw entry access for the synchronizer, which tracks its own changes
    /// and marks dirty once at the end.
    pub(crate) fn entries_mut(&mut self) -> &mut Vec<Symbol> {
        &mut self.symbols
    }
}
