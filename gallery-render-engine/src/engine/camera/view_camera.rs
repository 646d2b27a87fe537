use bevy::prelude::*;
use bevy::render::camera::Viewport;
use bevy::window::PrimaryWindow;

use crate::constants::{CAMERA_FAR, CAMERA_FOV, CAMERA_NEAR};
use crate::engine::assets::gallery_manifest::ViewConfig;
use crate::engine::view::ViewSet;
use crate::engine::viewport::column_layout;

/// Spawns the camera for one view column, looking down the view axis from
/// the configured distance. The aspect ratio starts at 1.0 and is corrected
/// by `sync_viewports` before the first render.
pub fn spawn_view_camera(commands: &mut Commands, order: usize, config: &ViewConfig) -> Entity {
    commands
        .spawn((
            Camera3d::default(),
            Camera {
                order: order as isize,
                ..default()
            },
            Projection::Perspective(PerspectiveProjection {
                fov: CAMERA_FOV,
                aspect_ratio: 1.0,
                near: CAMERA_NEAR,
                far: CAMERA_FAR,
            }),
            Transform::from_xyz(0.0, 0.0, config.camera_distance + config.depth_offset),
        ))
        .id()
}

/// Re-derives every view's region from the current window surface, then
/// pushes the viewport rectangle and aspect ratio into its camera. A view
/// whose region has no visible area is deactivated for the frame, and a
/// zero-sized region keeps the previous aspect until the layout settles.
pub fn sync_viewports(
    mut view_set: ResMut<ViewSet>,
    windows: Query<&Window, With<PrimaryWindow>>,
    mut cameras: Query<(&mut Camera, &mut Projection)>,
) {
    let Ok(window) = windows.single() else {
        return;
    };
    let surface = UVec2::new(window.physical_width(), window.physical_height());

    let regions = column_layout(surface, view_set.views.len());
    for (slot, region) in view_set.views.iter_mut().zip(regions) {
        slot.region = region;
        let Ok((mut camera, mut projection)) = cameras.get_mut(slot.camera) else {
            continue;
        };

        let Some(clamped) = region.clamped_to(surface) else {
            camera.is_active = false;
            continue;
        };

        camera.is_active = true;
        camera.viewport = Some(Viewport {
            physical_position: clamped.position,
            physical_size: clamped.size,
            ..default()
        });
        if let Some(aspect) = clamped.aspect() {
            if let Projection::Perspective(perspective) = &mut *projection {
                perspective.aspect_ratio = aspect;
            }
        }
    }
}
