use bevy::asset::{LoadState, RecursiveDependencyLoadState};
use bevy::gltf::GltfAssetLabel;
use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::constants::{
    INITIAL_YAW, MANIFEST_PATH, MATERIAL_METALLIC, MATERIAL_ROUGHNESS, MODEL_SCALE,
};
use crate::engine::assets::gallery_manifest::GalleryManifest;
use crate::engine::camera::view_camera::spawn_view_camera;
use crate::engine::view::{ModelState, ViewSet, ViewSlot};
use crate::engine::viewport::ViewRegion;

/// Tracks the gallery manifest from request to resolution.
#[derive(Resource, Default)]
pub struct ManifestLoader {
    pub handle: Option<Handle<GalleryManifest>>,
    pub resolved: bool,
}

/// Requests the gallery manifest, then creates the views once it resolves.
/// A manifest that fails to load falls back to the built-in gallery so the
/// application still starts with something on screen.
pub fn load_manifest(
    mut loader: ResMut<ManifestLoader>,
    mut view_set: ResMut<ViewSet>,
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    manifests: Res<Assets<GalleryManifest>>,
) {
    if loader.handle.is_none() {
        info!("loading gallery manifest from {MANIFEST_PATH}");
        loader.handle = Some(asset_server.load(MANIFEST_PATH));
        return;
    }
    if loader.resolved {
        return;
    }
    let Some(handle) = loader.handle.clone() else {
        return;
    };

    if let Some(manifest) = manifests.get(&handle) {
        create_views(&mut commands, &asset_server, manifest, &mut view_set);
        loader.resolved = true;
    } else if let LoadState::Failed(err) = asset_server.load_state(handle.id()) {
        error!("gallery manifest failed to load ({err}), using the built-in gallery");
        create_views(
            &mut commands,
            &asset_server,
            &GalleryManifest::fallback(),
            &mut view_set,
        );
        loader.resolved = true;
    }
}

/// Builds one view per valid manifest entry: the camera exists immediately,
/// the model arrives whenever its load resolves.
fn create_views(
    commands: &mut Commands,
    asset_server: &AssetServer,
    manifest: &GalleryManifest,
    view_set: &mut ViewSet,
) {
    for config in manifest.valid_views() {
        let order = view_set.views.len();
        let camera = spawn_view_camera(commands, order, &config);
        let scene = asset_server.load(GltfAssetLabel::Scene(0).from_asset(config.model.clone()));
        info!("view '{}': loading model {}", config.id, config.model);

        view_set.views.push(ViewSlot {
            config,
            camera,
            region: ViewRegion::default(),
            scene,
            model: ModelState::Loading,
        });
    }
}

/// Polls pending model loads. A resolved scene is spawned with the
/// configured scale, tilt and depth offset; a failed load marks only its
/// own view and leaves a visible note in that view's region.
pub fn spawn_loaded_models(
    mut view_set: ResMut<ViewSet>,
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    windows: Query<&Window, With<PrimaryWindow>>,
) {
    let scale_factor = windows
        .single()
        .map(|window| window.scale_factor())
        .unwrap_or(1.0);
    for (index, slot) in view_set.views.iter_mut().enumerate() {
        if slot.model != ModelState::Loading {
            continue;
        }
        match asset_server.recursive_dependency_load_state(slot.scene.id()) {
            RecursiveDependencyLoadState::Loaded => {
                let rotation = Quat::from_euler(EulerRot::YXZ, INITIAL_YAW, slot.config.tilt, 0.0);
                let root = commands
                    .spawn((
                        SceneRoot(slot.scene.clone()),
                        Transform::from_translation(Vec3::new(0.0, 0.0, slot.config.depth_offset))
                            .with_scale(Vec3::splat(MODEL_SCALE))
                            .with_rotation(rotation),
                    ))
                    .id();
                slot.model = ModelState::Active {
                    root,
                    styled: false,
                };
                info!("view '{}': model ready", slot.config.id);
            }
            RecursiveDependencyLoadState::Failed(err) => {
                error!(
                    "view '{}': model {} failed to load: {err}",
                    slot.config.id, slot.config.model
                );
                slot.model = ModelState::Failed;
                spawn_load_placeholder(&mut commands, slot, index, scale_factor);
            }
            _ => {}
        }
    }
}

/// Replaces every mesh material under a freshly spawned model with the
/// view's flat tint. Mesh entities appear a frame or two after the scene
/// root spawns, so this retries until at least one mesh has been restyled.
pub fn restyle_models(
    mut view_set: ResMut<ViewSet>,
    mut commands: Commands,
    mut materials: ResMut<Assets<StandardMaterial>>,
    children: Query<&Children>,
    mesh_materials: Query<(), With<MeshMaterial3d<StandardMaterial>>>,
) {
    for slot in view_set.views.iter_mut() {
        let ModelState::Active {
            root,
            styled: false,
        } = slot.model
        else {
            continue;
        };

        let meshes: Vec<Entity> = children
            .iter_descendants(root)
            .filter(|entity| mesh_materials.get(*entity).is_ok())
            .collect();
        if meshes.is_empty() {
            continue;
        }

        let tinted = materials.add(StandardMaterial {
            base_color: slot.config.tint_color().with_alpha(slot.config.opacity),
            metallic: MATERIAL_METALLIC,
            perceptual_roughness: MATERIAL_ROUGHNESS,
            alpha_mode: AlphaMode::Blend,
            ..default()
        });
        for entity in meshes {
            commands.entity(entity).insert(MeshMaterial3d(tinted.clone()));
        }
        slot.model = ModelState::Active { root, styled: true };
    }
}

/// Margin between a region's corner and its failure note (logical px).
const PLACEHOLDER_MARGIN: f32 = 12.0;

/// Marks the failure note of one view so the layout sync can keep it over
/// that view's region.
#[derive(Component)]
pub struct LoadPlaceholder {
    pub view: usize,
}

/// Where a view's failure note sits, in logical pixels. Regions are tracked
/// in physical pixels while UI nodes are positioned in logical ones, so the
/// window scale factor divides out here.
pub fn placeholder_offset(region: ViewRegion, scale_factor: f32) -> Vec2 {
    region.position.as_vec2() / scale_factor + Vec2::splat(PLACEHOLDER_MARGIN)
}

/// User-visible note over a view whose model never arrived.
fn spawn_load_placeholder(commands: &mut Commands, slot: &ViewSlot, view: usize, scale_factor: f32) {
    let offset = placeholder_offset(slot.region, scale_factor);
    commands.spawn((
        Text::new(format!("{}: model unavailable", slot.config.id)),
        TextFont {
            font_size: 16.0,
            ..default()
        },
        TextColor(Color::srgb(1.0, 0.0, 0.0)),
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(offset.x),
            top: Val::Px(offset.y),
            ..default()
        },
        LoadPlaceholder { view },
    ));
}

/// Keeps failure notes over their view's current region as the window
/// resizes or the scale factor changes.
pub fn sync_placeholders(
    view_set: Res<ViewSet>,
    windows: Query<&Window, With<PrimaryWindow>>,
    mut placeholders: Query<(&LoadPlaceholder, &mut Node)>,
) {
    let Ok(window) = windows.single() else {
        return;
    };
    let scale_factor = window.scale_factor();
    for (placeholder, mut node) in placeholders.iter_mut() {
        let Some(slot) = view_set.views.get(placeholder.view) else {
            continue;
        };
        let offset = placeholder_offset(slot.region, scale_factor);
        node.left = Val::Px(offset.x);
        node.top = Val::Px(offset.y);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholder_offset_converts_physical_regions_to_logical() {
        // Right-hand column of an 800-logical-px window at scale factor 2:
        // the region starts at physical x = 800, logical x = 400.
        let region = ViewRegion::new(800, 0, 800, 1200);
        let offset = placeholder_offset(region, 2.0);
        assert_eq!(offset, Vec2::new(412.0, 12.0));
        assert!(offset.x < 800.0);
    }

    #[test]
    fn placeholder_offset_is_unscaled_at_factor_one() {
        let region = ViewRegion::new(400, 0, 400, 600);
        assert_eq!(placeholder_offset(region, 1.0), Vec2::new(412.0, 12.0));
    }
}
