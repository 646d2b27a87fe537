//! Per-view cameras and viewport layout.
//!
//! Each view renders the shared scene through its own perspective camera,
//! clipped to a column of the window surface. The layout is re-derived from
//! the live window size every frame, so a camera's aspect ratio can never go
//! stale between a resize and the next render.

/// Camera spawning and per-frame viewport/aspect maintenance.
pub mod view_camera;
