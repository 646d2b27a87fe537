use bevy::prelude::*;

use crate::engine::assets::gallery_manifest::ViewConfig;
use crate::engine::viewport::ViewRegion;

/// Lifecycle state of a view's model. It transitions exactly once, from
/// `Loading` to either `Active` (scene spawned) or `Failed` (load error),
/// and is never cleared or replaced afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelState {
    Loading,
    Active {
        root: Entity,
        /// Whether the flat tint has been pushed onto the model's meshes.
        styled: bool,
    },
    Failed,
}

/// One region+camera+model triple managed by the controller.
pub struct ViewSlot {
    pub config: ViewConfig,
    pub camera: Entity,
    /// Current screen region; re-derived from the window every frame.
    pub region: ViewRegion,
    pub scene: Handle<Scene>,
    pub model: ModelState,
}

impl ViewSlot {
    /// Root entity of the loaded model, if it has arrived.
    pub fn model_root(&self) -> Option<Entity> {
        match self.model {
            ModelState::Active { root, .. } => Some(root),
            _ => None,
        }
    }
}

/// Every view in column order. The set is static once the manifest has
/// resolved; no view is ever removed.
#[derive(Resource, Default)]
pub struct ViewSet {
    pub views: Vec<ViewSlot>,
}

impl ViewSet {
    /// Spatial lookup: index of the view whose region contains the given
    /// physical-pixel point.
    pub fn view_at(&self, point: Vec2) -> Option<usize> {
        self.views
            .iter()
            .position(|view| view.region.contains(point))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::assets::gallery_manifest::GalleryManifest;

    fn slot(region: ViewRegion) -> ViewSlot {
        ViewSlot {
            config: GalleryManifest::fallback().views[0].clone(),
            camera: Entity::PLACEHOLDER,
            region,
            scene: Handle::default(),
            model: ModelState::Loading,
        }
    }

    #[test]
    fn view_lookup_by_point() {
        let set = ViewSet {
            views: vec![
                slot(ViewRegion::new(0, 0, 400, 600)),
                slot(ViewRegion::new(400, 0, 400, 600)),
            ],
        };

        assert_eq!(set.view_at(Vec2::new(10.0, 10.0)), Some(0));
        assert_eq!(set.view_at(Vec2::new(410.0, 10.0)), Some(1));
        assert_eq!(set.view_at(Vec2::new(900.0, 10.0)), None);
    }

    #[test]
    fn loading_and_failed_views_have_no_model_root() {
        let mut view = slot(ViewRegion::default());
        assert_eq!(view.model_root(), None);

        view.model = ModelState::Failed;
        assert_eq!(view.model_root(), None);

        let root = Entity::PLACEHOLDER;
        view.model = ModelState::Active {
            root,
            styled: false,
        };
        assert_eq!(view.model_root(), Some(root));
    }
}
