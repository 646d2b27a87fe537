use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use std::f32::consts::TAU;

use crate::constants::DRAG_SENSITIVITY;
use crate::engine::assets::gallery_manifest::{TiltMode, ViewConfig};
use crate::engine::view::ViewSet;
use crate::engine::viewport::ViewRegion;

/// Transient record of an in-progress rotation gesture.
#[derive(Resource, Default)]
pub struct DragState {
    pub active: bool,
    /// Index of the targeted view while a drag is active.
    pub target: Option<usize>,
}

impl DragState {
    pub fn clear(&mut self) {
        self.active = false;
        self.target = None;
    }
}

/// Current pointer position in physical pixels, preferring an active touch
/// point over the mouse cursor.
fn pointer_position(window: &Window, touches: &Touches) -> Option<Vec2> {
    if let Some(touch) = touches.first_pressed_position() {
        return Some(touch * window.scale_factor());
    }
    window.physical_cursor_position()
}

/// Starts a drag when a press lands inside some view's region. Presses
/// outside every region are ignored.
pub fn begin_drag(
    mut drag: ResMut<DragState>,
    view_set: Res<ViewSet>,
    windows: Query<&Window, With<PrimaryWindow>>,
    mouse: Res<ButtonInput<MouseButton>>,
    touches: Res<Touches>,
) {
    if !mouse.just_pressed(MouseButton::Left) && !touches.any_just_pressed() {
        return;
    }
    let Ok(window) = windows.single() else {
        return;
    };
    let Some(position) = pointer_position(window, &touches) else {
        return;
    };
    if let Some(index) = view_set.view_at(position) {
        drag.active = true;
        drag.target = Some(index);
    }
}

/// Maps the current pointer position to an absolute model rotation while a
/// drag is active. A view whose model has not loaded ignores the gesture.
pub fn apply_drag(
    drag: Res<DragState>,
    view_set: Res<ViewSet>,
    windows: Query<&Window, With<PrimaryWindow>>,
    touches: Res<Touches>,
    mut transforms: Query<&mut Transform>,
) {
    if !drag.active {
        return;
    }
    let Some(index) = drag.target else {
        return;
    };
    let Some(slot) = view_set.views.get(index) else {
        return;
    };
    let Some(root) = slot.model_root() else {
        return;
    };
    let Ok(window) = windows.single() else {
        return;
    };
    let Some(position) = pointer_position(window, &touches) else {
        return;
    };
    if let Ok(mut transform) = transforms.get_mut(root) {
        transform.rotation = drag_rotation(position, slot.region, &slot.config);
    }
}

/// Ends the gesture on any release or cancel, wherever it happens. Clearing
/// is unconditional: a release with no active drag is a no-op.
pub fn end_drag(
    mut drag: ResMut<DragState>,
    mouse: Res<ButtonInput<MouseButton>>,
    touches: Res<Touches>,
) {
    if mouse.just_released(MouseButton::Left)
        || touches.any_just_released()
        || touches.any_just_canceled()
    {
        drag.clear();
    }
}

/// Rotation for a pointer position over a region. Both axes are normalised
/// to [-0.5, 0.5] within the region and scaled by the sensitivity over a
/// full turn; the position alone determines the angles, so replaying the
/// same pointer position always lands on the same rotation. Views with an
/// offset tilt mode keep their configured tilt as a pitch baseline.
pub fn drag_rotation(pointer: Vec2, region: ViewRegion, config: &ViewConfig) -> Quat {
    let offset = region.normalized_offset(pointer);
    let yaw = offset.x * DRAG_SENSITIVITY * TAU;
    let mut pitch = offset.y * DRAG_SENSITIVITY * TAU;
    if config.tilt_mode == TiltMode::Offset {
        pitch += config.tilt;
    }
    Quat::from_euler(EulerRot::YXZ, yaw, pitch, 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::assets::gallery_manifest::GalleryManifest;
    use std::f32::consts::FRAC_PI_2;

    fn config(tilt: f32, tilt_mode: TiltMode) -> ViewConfig {
        let mut config = GalleryManifest::fallback().views[0].clone();
        config.tilt = tilt;
        config.tilt_mode = tilt_mode;
        config
    }

    #[test]
    fn region_centre_is_the_rest_rotation() {
        let region = ViewRegion::new(0, 0, 800, 600);
        let rotation = drag_rotation(Vec2::new(400.0, 300.0), region, &config(0.3, TiltMode::Absolute));
        assert!(rotation.angle_between(Quat::IDENTITY) < 1e-6);
    }

    #[test]
    fn right_edge_yields_a_quarter_turn() {
        let region = ViewRegion::new(0, 0, 800, 600);
        let rotation = drag_rotation(Vec2::new(800.0, 300.0), region, &config(0.0, TiltMode::Absolute));
        let expected = Quat::from_euler(EulerRot::YXZ, FRAC_PI_2, 0.0, 0.0);
        assert!(rotation.angle_between(expected) < 1e-6);
    }

    #[test]
    fn mapping_is_memoryless() {
        let region = ViewRegion::new(100, 0, 600, 600);
        let config = config(-0.4, TiltMode::Offset);
        let pointer = Vec2::new(512.0, 97.0);

        let first = drag_rotation(pointer, region, &config);
        let after_detour = drag_rotation(Vec2::new(700.0, 599.0), region, &config);
        let second = drag_rotation(pointer, region, &config);

        assert_eq!(first, second);
        assert_ne!(first, after_detour);
    }

    #[test]
    fn offset_tilt_mode_keeps_the_configured_baseline() {
        let region = ViewRegion::new(0, 0, 800, 600);
        let tilt = -0.7;

        let centred = drag_rotation(Vec2::new(400.0, 300.0), region, &config(tilt, TiltMode::Offset));
        let expected = Quat::from_euler(EulerRot::YXZ, 0.0, tilt, 0.0);
        assert!(centred.angle_between(expected) < 1e-6);

        let absolute = drag_rotation(Vec2::new(400.0, 300.0), region, &config(tilt, TiltMode::Absolute));
        assert!(absolute.angle_between(Quat::IDENTITY) < 1e-6);
    }

    #[test]
    fn pointer_outside_the_region_saturates_at_the_edge() {
        let region = ViewRegion::new(0, 0, 800, 600);
        let config = config(0.0, TiltMode::Absolute);

        let at_edge = drag_rotation(Vec2::new(800.0, 600.0), region, &config);
        let far_out = drag_rotation(Vec2::new(5000.0, 4000.0), region, &config);
        assert_eq!(at_edge, far_out);
    }
}
