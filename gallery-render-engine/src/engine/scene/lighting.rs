use bevy::prelude::*;

use crate::constants::{AMBIENT_BRIGHTNESS, DIRECTIONAL_ILLUMINANCE};

/// Spawns the shared lighting rig once: an ambient term plus one
/// directional key light angled in from above, enough for the flat-tinted
/// models the gallery shows.
pub fn setup_scene(mut commands: Commands) {
    commands.insert_resource(AmbientLight {
        color: Color::WHITE,
        brightness: AMBIENT_BRIGHTNESS,
        ..default()
    });

    commands.spawn((
        DirectionalLight {
            illuminance: DIRECTIONAL_ILLUMINANCE,
            shadows_enabled: false,
            ..default()
        },
        Transform::from_xyz(5.0, 10.0, 5.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));
}
