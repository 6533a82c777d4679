//! Store notification events
//!
//! Broadcast to the UI layer for transient notifications (toasts). These are
//! advisory: the authoritative error state lives in the collections
//! themselves.

/// User-visible notifications emitted by the dispatch pipeline.
#[derive(Debug, Clone, PartialEq)]
pub enum StoreEvent {
    /// A mutation completed (update, delete, create, membership change)
    MutationSucceeded { description: String },
    /// A request settled with an error; `message` is toast-ready
    RequestFailed { message: String },
    /// The backend rejected the session token (401)
    SessionExpired,
}
