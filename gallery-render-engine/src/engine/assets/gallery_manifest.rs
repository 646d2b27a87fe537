use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::f32::consts::FRAC_PI_3;

/// How vertical drag interacts with a view's configured tilt: either the
/// pointer sets the pitch directly, or the configured tilt stays in as a
/// baseline the drag offsets from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TiltMode {
    /// The pointer position alone determines the pitch.
    #[default]
    Absolute,
    /// The drag pitch is added on top of the configured tilt.
    Offset,
}

/// One view entry of the gallery manifest. Mirrors JSON structure exactly.
/// Supplied once at startup; there is no runtime add/remove of views.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViewConfig {
    /// Short name used in logs and the load-failure placeholder.
    pub id: String,
    /// Asset path of the glTF binary to display.
    pub model: String,
    /// Camera distance along the view axis.
    #[serde(default = "default_camera_distance")]
    pub camera_distance: f32,
    /// Flat tint applied to every mesh, as a CSS hex colour.
    #[serde(default = "default_tint")]
    pub tint: String,
    /// Target opacity of the tinted material.
    #[serde(default = "default_opacity")]
    pub opacity: f32,
    /// Initial tilt around the horizontal axis (radians).
    #[serde(default)]
    pub tilt: f32,
    /// Translation along the view axis so models sharing the scene never
    /// overlap; the camera moves out by the same amount.
    #[serde(default)]
    pub depth_offset: f32,
    #[serde(default)]
    pub tilt_mode: TiltMode,
}

impl ViewConfig {
    /// Parsed tint colour; an invalid hex string falls back to white so the
    /// view still renders.
    pub fn tint_color(&self) -> Color {
        match Srgba::hex(&self.tint) {
            Ok(srgba) => Color::from(srgba),
            Err(_) => {
                warn!(
                    "view '{}': invalid tint '{}', falling back to white",
                    self.id, self.tint
                );
                Color::WHITE
            }
        }
    }
}

/// Complete gallery configuration as a Bevy asset. Mirrors JSON structure
/// exactly and is loaded once; edits on disk are not picked up at runtime.
#[derive(Asset, Debug, Clone, Serialize, Deserialize, TypePath)]
pub struct GalleryManifest {
    pub views: Vec<ViewConfig>,
}

impl GalleryManifest {
    /// Entries that can actually produce a view. An entry without a model
    /// path is dropped here, with a log line, so no half-initialised view
    /// ever reaches the render or drag systems.
    pub fn valid_views(&self) -> Vec<ViewConfig> {
        self.views
            .iter()
            .filter(|config| {
                if config.model.is_empty() {
                    warn!("view '{}' has no model path, skipping", config.id);
                    return false;
                }
                true
            })
            .cloned()
            .collect()
    }

    /// Built-in two-view gallery used when the manifest asset fails to
    /// load: one wide shot and one close-up, visually distinct.
    pub fn fallback() -> Self {
        Self {
            views: vec![
                ViewConfig {
                    id: "artwork".into(),
                    model: "models/artwork.glb".into(),
                    camera_distance: 250.0,
                    tint: "#fc5858".into(),
                    opacity: 0.6,
                    tilt: 0.0,
                    depth_offset: 0.0,
                    tilt_mode: TiltMode::Absolute,
                },
                ViewConfig {
                    id: "studio".into(),
                    model: "models/studio.glb".into(),
                    camera_distance: 60.0,
                    tint: "#0061ff".into(),
                    opacity: 0.9,
                    tilt: -FRAC_PI_3,
                    depth_offset: 10000.0,
                    tilt_mode: TiltMode::Offset,
                },
            ],
        }
    }
}

fn default_camera_distance() -> f32 {
    250.0
}

fn default_tint() -> String {
    "#ffffff".into()
}

fn default_opacity() -> f32 {
    1.0
}
