//! Asynchronous gallery loading.
//!
//! Loading is fire-and-forget: the manifest and each model are requested
//! through the asset server and observed by polling their load state every
//! frame. There is no cancellation, timeout or retry; a load that never
//! resolves simply leaves its view empty, and every other system treats an
//! unset model as a no-op.

/// Manifest polling, view creation, model spawning and tinting.
pub mod model_loader;
