//! External build-settings collaborator.

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::sync::Mutex;

use serde::{Deserialize, Serialize};

/// One build configuration whose define string can be read and written
/// independently. Keys are opaque to the catalog; the ordinal and obsolete
/// marker come from the backing build system's enumeration.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TargetGroup {
    pub name: String,
    pub ordinal: i32,
    pub obsolete: bool,
}

impl TargetGroup {
    pub fn new(name: impl Into<String>, ordinal: i32) -> Self {
        Self {
            name: name.into(),
            ordinal,
            obsolete: false,
        }
    }

    pub fn obsolete(name: impl Into<String>, ordinal: i32) -> Self {
        Self {
            name: name.into(),
            ordinal,
            obsolete: true,
        }
    }

    /// Sentinel (`ordinal <= 0`) and obsolete groups carry no concrete
    /// meaning and are skipped when applying.
    pub fn is_concrete(&self) -> bool {
        self.ordinal > 0 && !self.obsolete
    }
}

impl fmt::Display for TargetGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// The trait settings backends implement.
pub trait SettingsStore: Send + Sync {
    /// Enumerate every target group the backend knows, including
    /// non-concrete ones.
    fn groups(&self) -> Vec<TargetGroup>;

    /// Read the current define string for a group.
    fn defines(&self, group: &TargetGroup) -> Result<String, StoreError>;

    /// Overwrite the define string for a group.
    fn set_defines(&self, group: &TargetGroup, value: &str) -> Result<(), StoreError>;
}

/// Errors from a settings backend.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Unknown target group: {0}")]
    UnknownGroup(String),

    #[error("Write rejected for group {group}: {message}")]
    WriteRejected { group: String, message: String },

    #[error("Backend error: {0}")]
    Backend(String),
}

#[derive(Default)]
struct MemoryStoreInner {
    groups: Vec<TargetGroup>,
    defines: HashMap<String, String>,
    failing: HashSet<String>,
    writes: Vec<(String, String)>,
}

/// In-memory settings store for tests and embedders without a real build
/// backend. Records every write and supports per-group failure injection so
/// partial-failure behavior is assertable.
#[derive(Default)]
pub struct MemoryStore {
    inner: Mutex<MemoryStoreInner>,
}

impl MemoryStore {
    pub fn new(groups: Vec<TargetGroup>) -> Self {
        Self {
            inner: Mutex::new(MemoryStoreInner {
                groups,
                ..MemoryStoreInner::default()
            }),
        }
    }

    /// Make every write to the named group fail from now on.
    pub fn fail_writes(&self, group_name: &str) {
        let mut inner = self.inner.lock().unwrap();
        inner.failing.insert(group_name.to_string());
    }

    /// Every `(group name, value)` write accepted so far, in call order.
    pub fn writes(&self) -> Vec<(String, String)> {
        self.inner.lock().unwrap().writes.clone()
    }
}

impl SettingsStore for MemoryStore {
    fn groups(&self) -> Vec<TargetGroup> {
        self.inner.lock().unwrap().groups.clone()
    }

    fn defines(&self, group: &TargetGroup) -> Result<String, StoreError> {
        let inner = self.inner.lock().unwrap();
        if !inner.groups.iter().any(|g| g.name == group.name) {
            return Err(StoreError::UnknownGroup(group.name.clone()));
        }
        Ok(inner.defines.get(&group.name).cloned().unwrap_or_default())
    }

    fn set_defines(&self, group: &TargetGroup, value: &str) -> Result<(), StoreError> {
        let mut inner = self.inner.lock().unwrap();
        if !inner.groups.iter().any(|g| g.name == group.name) {
            return Err(StoreError::UnknownGroup(group.name.clone()));
        }
        if inner.failing.contains(&group.name) {
            return Err(StoreError::WriteRejected {
                group: group.name.clone(),
                message: "injected failure".to_string(),
            });
        }
        inner.defines.insert(group.name.clone(), value.to_string());
        inner
            .writes
            .push((group.name.clone(), value.to_string()));
        Ok(())
    }
}
