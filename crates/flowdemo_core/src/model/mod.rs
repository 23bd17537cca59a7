//! Record shapes held by the in-memory stores.
//!
//! # Responsibility
//! - Define the canonical `User` and `Feature` records and their payloads.
//! - Describe the capabilities a store needs from a record via small traits.
//!
//! # Invariants
//! - `id` and `created_at` are assigned once by the store and never change.
//! - Records are owned by exactly one store; callers only ever see clones.

pub mod feature;
pub mod user;

/// Identifier assigned by a store. Always strictly positive.
pub type RecordId = u64;

/// Unix epoch milliseconds.
pub type EpochMillis = i64;

/// Minimal identity contract every stored record satisfies.
pub trait Record: Clone {
    fn id(&self) -> RecordId;
    fn created_at(&self) -> EpochMillis;
}

/// Records that can be built from a caller payload at runtime.
pub trait Creatable: Record {
    /// Caller-supplied fields, excluding identity and creation timestamp.
    type Draft;

    fn from_draft(id: RecordId, created_at: EpochMillis, draft: Self::Draft) -> Self;
}

/// Records that accept partial in-place updates.
pub trait Patchable: Record {
    type Patch;

    /// Merges `patch` over `self`. Must not touch `id` or `created_at`.
    fn apply_patch(&mut self, patch: Self::Patch);
}

/// Records carrying a single boolean switch.
pub trait Flagged: Record {
    fn toggle_flag(&mut self);
}

/// Returns the current wall-clock time in epoch milliseconds.
///
/// Falls back to `0` if the system clock reports a time before the epoch.
pub fn now_epoch_ms() -> EpochMillis {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|elapsed| i64::try_from(elapsed.as_millis()).unwrap_or(i64::MAX))
        .unwrap_or(0)
}
