//! Shared scene contents. Every view renders the same world through its own
//! camera; models that must not overlap are separated along the view axis by
//! their configured depth offset.

/// Lighting rig shared by all views.
pub mod lighting;
