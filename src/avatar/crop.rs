use crate::avatar::error::AvatarError;

/// Smallest crop edge the editor allows, in displayed pixels.
pub const MIN_CROP_SIZE: f64 = 32.0;

/// Fraction of the shorter displayed edge used by the initial selection.
pub const DEFAULT_CROP_FRACTION: f64 = 0.8;

/// Width and height of an image, either as rendered on screen or as decoded.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Dimensions {
    pub width: f64,
    pub height: f64,
}

impl Dimensions {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn shorter_side(&self) -> f64 {
        self.width.min(self.height)
    }

    /// Scales `natural` down (never up) so it fits inside a `max_edge` square,
    /// preserving aspect ratio. The editor renders the preview at exactly this size.
    pub fn fit_within(natural: (u32, u32), max_edge: f64) -> Self {
        let (width, height) = (natural.0 as f64, natural.1 as f64);
        if width <= 0.0 || height <= 0.0 {
            return Self::new(0.0, 0.0);
        }

        let scale = (max_edge / width).min(max_edge / height).min(1.0);
        Self::new(width * scale, height * scale)
    }
}

/// Rectangle in decoded source pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SourceRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

/// Square selection over the displayed image.
///
/// Coordinates are in displayed (CSS) pixels relative to the top-left corner of the
/// rendered preview. Every constructor and mutator returns a region that lies fully
/// inside the bounds it was given.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CropRegion {
    pub x: f64,
    pub y: f64,
    pub size: f64,
}

impl CropRegion {
    /// Initial selection: centered, covering [`DEFAULT_CROP_FRACTION`] of the shorter edge.
    pub fn centered(bounds: Dimensions) -> Self {
        let size = bounds.shorter_side() * DEFAULT_CROP_FRACTION;

        Self {
            x: (bounds.width - size) / 2.0,
            y: (bounds.height - size) / 2.0,
            size,
        }
        .clamped(bounds)
    }

    pub fn center(&self) -> (f64, f64) {
        (self.x + self.size / 2.0, self.y + self.size / 2.0)
    }

    /// Forces the region to be no larger than the shorter edge and to lie within
    /// `[0, width - size] x [0, height - size]`.
    pub fn clamped(self, bounds: Dimensions) -> Self {
        let max_size = bounds.shorter_side().max(0.0);
        let size = self.size.clamp(MIN_CROP_SIZE.min(max_size), max_size);

        Self {
            x: self.x.clamp(0.0, bounds.width - size),
            y: self.y.clamp(0.0, bounds.height - size),
            size,
        }
    }

    /// Resizes around the current center.
    ///
    /// The center never moves. The new size is capped at the largest square that fits
    /// around the center, so growing next to an edge stops at the edge instead of
    /// shifting the selection. A non-finite size leaves the region unchanged.
    pub fn resized(self, new_size: f64, bounds: Dimensions) -> Self {
        let current = self.clamped(bounds);
        if !new_size.is_finite() {
            return current;
        }
        let (cx, cy) = current.center();

        let max_size = 2.0
            * cx.min(cy)
                .min(bounds.width - cx)
                .min(bounds.height - cy)
                .max(0.0);
        let size = new_size.clamp(MIN_CROP_SIZE.min(max_size), max_size);

        Self {
            x: cx - size / 2.0,
            y: cy - size / 2.0,
            size,
        }
    }

    /// Drags the region by a pointer delta, stopping at the image edges.
    pub fn moved_by(self, dx: f64, dy: f64, bounds: Dimensions) -> Self {
        if !dx.is_finite() || !dy.is_finite() {
            return self.clamped(bounds);
        }

        Self {
            x: self.x + dx,
            y: self.y + dy,
            size: self.size,
        }
        .clamped(bounds)
    }

    /// Whether a displayed-pixel point lies inside the region.
    pub fn contains(&self, px: f64, py: f64) -> bool {
        px >= self.x && px <= self.x + self.size && py >= self.y && py <= self.y + self.size
    }

    /// Maps the selection onto decoded source pixels.
    ///
    /// Each axis is scaled independently by `natural / displayed`, since a letterboxed
    /// preview may not preserve the exact aspect ratio. The result is clamped to the
    /// source image.
    ///
    /// # Returns
    /// - `Ok(SourceRect)` - Non-empty rectangle inside the source image
    /// - `Err(AvatarError::EmptyCrop)` - The displayed size is zero or the mapping is empty
    pub fn to_source_rect(
        &self,
        displayed: Dimensions,
        natural: (u32, u32),
    ) -> Result<SourceRect, AvatarError> {
        if displayed.width <= 0.0 || displayed.height <= 0.0 {
            return Err(AvatarError::EmptyCrop);
        }

        let region = self.clamped(displayed);
        let scale_x = natural.0 as f64 / displayed.width;
        let scale_y = natural.1 as f64 / displayed.height;

        let x = ((region.x * scale_x).round() as u32).min(natural.0);
        let y = ((region.y * scale_y).round() as u32).min(natural.1);
        let width = ((region.size * scale_x).round() as u32).min(natural.0 - x);
        let height = ((region.size * scale_y).round() as u32).min(natural.1 - y);

        if width == 0 || height == 0 {
            return Err(AvatarError::EmptyCrop);
        }

        Ok(SourceRect {
            x,
            y,
            width,
            height,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    fn assert_in_bounds(region: &CropRegion, bounds: Dimensions) {
        assert!(region.x >= -EPSILON, "x {} < 0", region.x);
        assert!(region.y >= -EPSILON, "y {} < 0", region.y);
        assert!(
            region.x <= bounds.width - region.size + EPSILON,
            "x {} beyond {}",
            region.x,
            bounds.width - region.size
        );
        assert!(
            region.y <= bounds.height - region.size + EPSILON,
            "y {} beyond {}",
            region.y,
            bounds.height - region.size
        );
    }

    #[test]
    fn centered_default_is_square_and_centered() {
        let bounds = Dimensions::new(400.0, 300.0);

        let region = CropRegion::centered(bounds);

        assert!((region.size - 240.0).abs() < EPSILON);
        assert!((region.x - 80.0).abs() < EPSILON);
        assert!((region.y - 30.0).abs() < EPSILON);
        let (cx, cy) = region.center();
        assert!((cx - 200.0).abs() < EPSILON);
        assert!((cy - 150.0).abs() < EPSILON);
    }

    #[test]
    fn resize_keeps_center_fixed() {
        let bounds = Dimensions::new(400.0, 300.0);
        let region = CropRegion {
            x: 100.0,
            y: 50.0,
            size: 100.0,
        };

        for new_size in [40.0, 80.0, 150.0, 199.0] {
            let resized = region.resized(new_size, bounds);
            let (cx, cy) = resized.center();

            assert!((cx - 150.0).abs() < EPSILON);
            assert!((cy - 100.0).abs() < EPSILON);
            assert!((resized.size - new_size).abs() < EPSILON);
            assert_in_bounds(&resized, bounds);
        }
    }

    #[test]
    fn resize_near_edge_caps_size_instead_of_moving() {
        let bounds = Dimensions::new(400.0, 300.0);
        let region = CropRegion {
            x: 0.0,
            y: 0.0,
            size: 60.0,
        };

        let resized = region.resized(250.0, bounds);

        assert_eq!(resized.center(), (30.0, 30.0));
        assert!((resized.size - 60.0).abs() < EPSILON);
        assert_in_bounds(&resized, bounds);
    }

    #[test]
    fn resize_never_goes_below_minimum() {
        let bounds = Dimensions::new(400.0, 300.0);
        let region = CropRegion::centered(bounds);

        let resized = region.resized(1.0, bounds);

        assert!((resized.size - MIN_CROP_SIZE).abs() < EPSILON);
        let (cx, cy) = resized.center();
        let (ox, oy) = region.center();
        assert!((cx - ox).abs() < EPSILON);
        assert!((cy - oy).abs() < EPSILON);
    }

    #[test]
    fn non_finite_input_leaves_region_in_bounds() {
        let bounds = Dimensions::new(400.0, 300.0);
        let region = CropRegion::centered(bounds);

        for size in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let resized = region.resized(size, bounds);
            assert_eq!(resized, region, "size {}", size);
        }

        let moved = region.moved_by(f64::NAN, 10.0, bounds);
        assert_eq!(moved, region);
        assert_in_bounds(&moved, bounds);
    }

    #[test]
    fn resize_stays_in_bounds_for_many_positions() {
        let bounds = Dimensions::new(320.0, 180.0);

        for step in 0..20 {
            let region = CropRegion {
                x: step as f64 * 13.0,
                y: step as f64 * 7.0,
                size: 50.0,
            }
            .clamped(bounds);

            for new_size in [10.0, 60.0, 120.0, 500.0] {
                let resized = region.resized(new_size, bounds);
                assert_in_bounds(&resized, bounds);
                let (cx, cy) = resized.center();
                let (ox, oy) = region.center();
                assert!((cx - ox).abs() < EPSILON && (cy - oy).abs() < EPSILON);
            }
        }
    }

    #[test]
    fn drag_stops_at_edges() {
        let bounds = Dimensions::new(400.0, 300.0);
        let region = CropRegion {
            x: 100.0,
            y: 100.0,
            size: 100.0,
        };

        let moved = region.moved_by(1_000.0, -1_000.0, bounds);

        assert_eq!(moved.x, 300.0);
        assert_eq!(moved.y, 0.0);
        assert_eq!(moved.size, 100.0);
    }

    #[test]
    fn clamp_shrinks_oversized_region() {
        let bounds = Dimensions::new(200.0, 100.0);
        let region = CropRegion {
            x: -50.0,
            y: 20.0,
            size: 500.0,
        };

        let clamped = region.clamped(bounds);

        assert_eq!(clamped.size, 100.0);
        assert_in_bounds(&clamped, bounds);
    }

    #[test]
    fn maps_to_source_pixels_per_axis() {
        let displayed = Dimensions::new(400.0, 300.0);
        let region = CropRegion {
            x: 160.0,
            y: 110.0,
            size: 80.0,
        };

        let rect = region.to_source_rect(displayed, (4000, 3000)).unwrap();

        assert_eq!(
            rect,
            SourceRect {
                x: 1600,
                y: 1100,
                width: 800,
                height: 800
            }
        );
    }

    #[test]
    fn letterboxed_display_scales_axes_independently() {
        // Preview squashed horizontally: 1000x500 source shown at 250x250.
        let displayed = Dimensions::new(250.0, 250.0);
        let region = CropRegion {
            x: 0.0,
            y: 0.0,
            size: 100.0,
        };

        let rect = region.to_source_rect(displayed, (1000, 500)).unwrap();

        assert_eq!(rect.width, 400);
        assert_eq!(rect.height, 200);
    }

    #[test]
    fn source_rect_never_exceeds_image() {
        let displayed = Dimensions::new(333.0, 333.0);
        let region = CropRegion {
            x: 233.0,
            y: 233.0,
            size: 100.0,
        };

        let rect = region.to_source_rect(displayed, (1001, 999)).unwrap();

        assert!(rect.x + rect.width <= 1001);
        assert!(rect.y + rect.height <= 999);
    }

    #[test]
    fn zero_sized_display_is_rejected() {
        let region = CropRegion {
            x: 0.0,
            y: 0.0,
            size: 10.0,
        };

        let result = region.to_source_rect(Dimensions::new(0.0, 0.0), (100, 100));

        assert!(matches!(result, Err(AvatarError::EmptyCrop)));
    }

    #[test]
    fn fit_within_preserves_aspect_and_never_upscales() {
        let fitted = Dimensions::fit_within((4000, 3000), 400.0);
        assert_eq!(fitted, Dimensions::new(400.0, 300.0));

        let small = Dimensions::fit_within((120, 80), 400.0);
        assert_eq!(small, Dimensions::new(120.0, 80.0));
    }
}
