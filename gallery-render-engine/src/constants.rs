/// Shared tuning for the gallery viewer.

/// Gallery manifest path, relative to the assets root.
pub const MANIFEST_PATH: &str = "gallery.json";

/// Fraction of a full turn covered by dragging across a whole region.
pub const DRAG_SENSITIVITY: f32 = 0.5;

/// Uniform scale applied to every loaded model.
pub const MODEL_SCALE: f32 = 500.0;

/// Yaw every model starts with so it faces the camera slightly turned (radians).
pub const INITIAL_YAW: f32 = std::f32::consts::FRAC_PI_4;

/// Vertical field of view shared by all view cameras (radians).
pub const CAMERA_FOV: f32 = 75.0 * std::f32::consts::PI / 180.0;

/// Near clip plane for view cameras.
pub const CAMERA_NEAR: f32 = 0.01;

/// Far clip plane for view cameras; large enough to keep depth-offset views visible.
pub const CAMERA_FAR: f32 = 20000.0;

/// Metallic factor of the flat tint applied to loaded models.
pub const MATERIAL_METALLIC: f32 = 0.1;

/// Perceptual roughness of the flat tint applied to loaded models.
pub const MATERIAL_ROUGHNESS: f32 = 0.8;

/// Ambient light brightness for the shared scene.
pub const AMBIENT_BRIGHTNESS: f32 = 300.0;

/// Directional key light illuminance (lux).
pub const DIRECTIONAL_ILLUMINANCE: f32 = 5000.0;
