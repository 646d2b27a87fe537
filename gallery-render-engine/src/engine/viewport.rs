use bevy::prelude::*;

/// Screen rectangle a view renders into, in physical (device) pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ViewRegion {
    pub position: UVec2,
    pub size: UVec2,
}

impl ViewRegion {
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            position: UVec2::new(x, y),
            size: UVec2::new(width, height),
        }
    }

    /// Width/height ratio, or `None` while either dimension is zero.
    /// Callers keep the previous aspect until the layout settles.
    pub fn aspect(&self) -> Option<f32> {
        if self.size.x == 0 || self.size.y == 0 {
            return None;
        }
        Some(self.size.x as f32 / self.size.y as f32)
    }

    /// Whether a physical-pixel point falls inside the region.
    pub fn contains(&self, point: Vec2) -> bool {
        let min = self.position.as_vec2();
        let max = (self.position + self.size).as_vec2();
        point.x >= min.x && point.x < max.x && point.y >= min.y && point.y < max.y
    }

    /// Region clipped to the drawing surface; `None` when no visible area
    /// remains, so the caller can skip the view for this frame.
    pub fn clamped_to(&self, surface: UVec2) -> Option<ViewRegion> {
        let min = self.position.min(surface);
        let max = (self.position + self.size).min(surface);
        let size = max - min;
        if size.x == 0 || size.y == 0 {
            return None;
        }
        Some(ViewRegion {
            position: min,
            size,
        })
    }

    /// Pointer offset within the region, mapped to [-0.5, 0.5] per axis and
    /// clamped there once the pointer leaves the rectangle mid-drag.
    pub fn normalized_offset(&self, point: Vec2) -> Vec2 {
        let size = self.size.as_vec2();
        let offset = point - self.position.as_vec2();
        Vec2::new(
            normalized_axis(offset.x, size.x),
            normalized_axis(offset.y, size.y),
        )
    }
}

fn normalized_axis(offset: f32, extent: f32) -> f32 {
    if extent == 0.0 {
        return 0.0;
    }
    (offset / extent - 0.5).clamp(-0.5, 0.5)
}

/// Splits the surface into `count` equal-width, full-height columns, one per
/// view. The last column absorbs the integer-division remainder so together
/// they cover the whole surface.
pub fn column_layout(surface: UVec2, count: usize) -> Vec<ViewRegion> {
    if count == 0 {
        return Vec::new();
    }
    let count = count as u32;
    let width = surface.x / count;
    (0..count)
        .map(|index| {
            let x = index * width;
            let column_width = if index == count - 1 {
                surface.x - x
            } else {
                width
            };
            ViewRegion::new(x, 0, column_width, surface.y)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn columns_cover_the_surface() {
        let surface = UVec2::new(1300, 600);
        let regions = column_layout(surface, 3);

        assert_eq!(regions.len(), 3);
        assert_eq!(regions[0], ViewRegion::new(0, 0, 433, 600));
        assert_eq!(regions[1], ViewRegion::new(433, 0, 433, 600));
        assert_eq!(regions[2], ViewRegion::new(866, 0, 434, 600));

        let total: u32 = regions.iter().map(|r| r.size.x).sum();
        assert_eq!(total, surface.x);
    }

    #[test]
    fn two_columns_split_evenly_and_never_overlap() {
        let regions = column_layout(UVec2::new(800, 600), 2);
        assert_eq!(regions[0], ViewRegion::new(0, 0, 400, 600));
        assert_eq!(regions[1], ViewRegion::new(400, 0, 400, 600));

        assert!(regions[0].contains(Vec2::new(399.0, 10.0)));
        assert!(!regions[0].contains(Vec2::new(400.0, 10.0)));
        assert!(regions[1].contains(Vec2::new(400.0, 10.0)));
    }

    #[test]
    fn zero_width_surface_yields_no_usable_region() {
        let surface = UVec2::new(0, 600);
        let regions = column_layout(surface, 2);

        for region in regions {
            assert_eq!(region.aspect(), None);
            assert_eq!(region.clamped_to(surface), None);
        }
    }

    #[test]
    fn aspect_matches_region_dimensions() {
        let region = ViewRegion::new(0, 0, 400, 600);
        assert_eq!(region.aspect(), Some(400.0 / 600.0));
        assert_eq!(ViewRegion::new(0, 0, 400, 0).aspect(), None);
    }

    #[test]
    fn clamping_clips_partially_visible_regions() {
        let surface = UVec2::new(600, 600);
        let region = ViewRegion::new(500, 0, 200, 600);

        let clamped = region.clamped_to(surface).unwrap();
        assert_eq!(clamped, ViewRegion::new(500, 0, 100, 600));
    }

    #[test]
    fn fully_offscreen_region_is_skipped() {
        let surface = UVec2::new(600, 600);
        let region = ViewRegion::new(700, 0, 200, 600);
        assert_eq!(region.clamped_to(surface), None);
    }

    #[test]
    fn normalized_offset_spans_the_region() {
        let region = ViewRegion::new(100, 0, 200, 100);

        assert_eq!(region.normalized_offset(Vec2::new(200.0, 50.0)), Vec2::ZERO);
        assert_eq!(
            region.normalized_offset(Vec2::new(100.0, 0.0)),
            Vec2::new(-0.5, -0.5)
        );
        assert_eq!(
            region.normalized_offset(Vec2::new(300.0, 100.0)),
            Vec2::new(0.5, 0.5)
        );
    }

    #[test]
    fn normalized_offset_clamps_outside_the_region() {
        let region = ViewRegion::new(100, 0, 200, 100);
        assert_eq!(
            region.normalized_offset(Vec2::new(1000.0, -400.0)),
            Vec2::new(0.5, -0.5)
        );
    }
}
