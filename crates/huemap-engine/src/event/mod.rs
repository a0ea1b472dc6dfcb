//! Publish/subscribe plumbing.
//!
//! The bus is an owned value passed by reference to whoever publishes, not
//! process-wide state. Observers are shared handles so the same observer can
//! be detached later by identity.

mod bus;

pub use bus::{Event, EventBus, Observer};
