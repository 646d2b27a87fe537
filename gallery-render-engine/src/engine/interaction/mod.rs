//! Pointer and touch interaction for the gallery views.
//!
//! One drag gesture is active at a time and targets exactly the view under
//! the pointer at press time; other views keep their rotation. Releasing
//! the button or lifting the touch anywhere ends the gesture, including
//! outside the window, so a drag can never get stuck.

/// Drag state and the press/move/release systems.
pub mod drag_rotate;
