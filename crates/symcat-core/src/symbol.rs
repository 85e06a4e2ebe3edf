//! Core symbol types.

use serde::{Deserialize, Serialize};

use crate::config::SyncPolicy;

/// Visual style of a catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum SymbolStyle {
    /// A real define symbol with an enabled checkbox.
    #[default]
    Symbol,
    /// A purely visual divider; carries no name or enabled state.
    Separator,
    /// A labeled section marker.
    Header,
}

/// A catalog entry: a named boolean define symbol plus display metadata.
///
/// `description` is display-only and never affects synchronization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Symbol {
    pub style: SymbolStyle,
    pub enabled: bool,
    pub name: String,
    pub description: String,
}

impl Symbol {
    /// Create a disabled define symbol with an empty description.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            style: SymbolStyle::Symbol,
            enabled: false,
            name: name.into(),
            description: String::new(),
        }
    }

    /// Create a section header with the given label.
    pub fn header(label: impl Into<String>) -> Self {
        Self {
            style: SymbolStyle::Header,
            enabled: false,
            name: label.into(),
            description: String::new(),
        }
    }

    /// Create a visual divider.
    pub fn separator() -> Self {
        Self {
            style: SymbolStyle::Separator,
            enabled: false,
            name: String::new(),
            description: String::new(),
        }
    }

    /// Builder-style enabled state, mostly for assembling catalogs in tests.
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Builder-style description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Whether this entry carries an enabled state under the given policy.
    ///
    /// Symbol entries always do; separators never do; headers only when the
    /// policy opts them in.
    pub fn is_flag_bearing(&self, policy: &SyncPolicy) -> bool {
        match self.style {
            SymbolStyle::Symbol => true,
            SymbolStyle::Separator => false,
            SymbolStyle::Header => policy.headers_are_flags,
        }
    }
}
