//! Multi-viewport interactive model gallery.
//!
//! Renders one or more glTF models in a shared window, each through its own
//! camera and viewport column. Dragging with the mouse or a touch point
//! rotates the model under the pointer; the layout follows the window size.
//! View configuration comes from a JSON manifest loaded as a Bevy asset.

use bevy::asset::AssetMetaCheck;
use bevy::prelude::*;
use bevy::window::PresentMode;
use bevy_common_assets::json::JsonAssetPlugin;

pub mod constants;
pub mod engine;

use engine::assets::gallery_manifest::GalleryManifest;
use engine::camera::view_camera::sync_viewports;
use engine::interaction::drag_rotate::{DragState, apply_drag, begin_drag, end_drag};
use engine::loading::model_loader::{
    ManifestLoader, load_manifest, restyle_models, spawn_loaded_models, sync_placeholders,
};
use engine::scene::lighting::setup_scene;
use engine::view::ViewSet;

/// Create the gallery application with manifest-driven view setup
pub fn create_app() -> App {
    let mut app = App::new();

    app.add_plugins(create_default_plugins())
        .add_plugins(JsonAssetPlugin::<GalleryManifest>::new(&["json"]))
        .insert_resource(ClearColor(Color::NONE))
        .init_resource::<ViewSet>()
        .init_resource::<ManifestLoader>()
        .init_resource::<DragState>()
        .add_systems(Startup, setup_scene)
        .add_systems(
            Update,
            (
                load_manifest,
                spawn_loaded_models,
                restyle_models,
                (sync_viewports, sync_placeholders).chain(),
                (begin_drag, apply_drag, end_drag).chain(),
            ),
        );

    app
}

fn create_default_plugins() -> impl PluginGroup {
    let window_config = WindowPlugin {
        primary_window: Some(create_window_config()),
        ..default()
    };

    let asset_config = AssetPlugin {
        meta_check: AssetMetaCheck::Never,
        ..default()
    };

    DefaultPlugins.set(window_config).set(asset_config)
}

fn create_window_config() -> Window {
    #[cfg(target_arch = "wasm32")]
    {
        Window {
            canvas: Some("#gallery".into()),
            fit_canvas_to_parent: true,
            present_mode: PresentMode::AutoVsync,
            ..default()
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        Window {
            title: "Model Gallery".into(),
            present_mode: PresentMode::AutoVsync,
            ..default()
        }
    }
}
