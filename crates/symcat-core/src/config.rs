//! Synchronization policy knobs.

use serde::{Deserialize, Serialize};

/// Policy controlling which styles carry an enabled state and how non-Symbol
/// flag groups behave during sync and interactive toggling.
///
/// Both knobs default to off, matching the tool variant where headers are
/// labels only and no radio-group behavior exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct SyncPolicy {
    /// Header entries keep an enabled state of their own and take part in
    /// synchronization like ordinary symbols.
    pub headers_are_flags: bool,
    /// Flag-bearing non-Symbol styles act as single-select groups: enabling
    /// one entry disables its style siblings.
    pub exclusive_groups: bool,
}
