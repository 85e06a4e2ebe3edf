//! symcat-core: define-symbol catalog models and build-settings sync.
//!
//! A project keeps a human-curated catalog of named boolean define symbols
//! (plus headers and separators for display) that must stay in step with the
//! flat `;`-joined define string its build system reads, one string per
//! target group. Two synchronization directions keep them aligned:
//!
//! - **Revert**: external string → catalog. Enables/disables known entries
//!   and appends entries for active names the catalog has never seen.
//! - **Apply**: catalog → external store. Clear-then-write to every concrete
//!   target group, with per-group failure isolation.
//!
//! The external build backend is an injected [`SettingsStore`];
//! [`MemoryStore`] backs tests and embedders without a real backend.

pub mod catalog;
pub mod config;
pub mod parse;
pub mod persist;
pub mod store;
pub mod symbol;
pub mod sync;

pub use catalog::*;
pub use config::*;
pub use parse::*;
pub use persist::*;
pub use store::*;
pub use symbol::*;
pub use sync::*;
