/// Smallest thumb the scrollbar will draw, in px.
pub const MIN_THUMB_PX: f64 = 50.0;

/// Margin between the track and the viewport edge, top and bottom.
pub const TRACK_MARGIN_PX: f64 = 8.0;

/// Thumb size and travel for one document/viewport geometry.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollbarGeometry {
    pub thumb_height: f64,
    pub travel: f64,
    pub limit: f64,
}

impl ScrollbarGeometry {
    /// `None` when the document fits in the viewport: nothing to scroll, no
    /// thumb to draw.
    pub fn compute(
        viewport_height: f64,
        document_height: f64,
        track_height: f64,
        min_thumb: f64,
    ) -> Option<Self> {
        if !(viewport_height.is_finite() && document_height.is_finite())
            || document_height <= viewport_height
            || viewport_height <= 0.0
        {
            return None;
        }
        let ratio = viewport_height / document_height;
        let thumb_height = (viewport_height * ratio).max(min_thumb);
        Some(Self {
            thumb_height,
            travel: (track_height - thumb_height).max(0.0),
            limit: document_height - viewport_height,
        })
    }

    /// Geometry for a track spanning the viewport minus its margins.
    pub fn for_viewport(viewport_height: f64, document_height: f64) -> Option<Self> {
        Self::compute(
            viewport_height,
            document_height,
            viewport_height - TRACK_MARGIN_PX * 2.0,
            MIN_THUMB_PX,
        )
    }

    /// Thumb offset within the track for a document scroll offset.
    pub fn thumb_offset(&self, scroll: f64) -> f64 {
        let progress = (scroll / self.limit).clamp(0.0, 1.0);
        progress * self.travel
    }

    /// Document scroll offset that puts the thumb at `offset`.
    pub fn scroll_for_thumb(&self, offset: f64) -> f64 {
        if self.travel <= 0.0 {
            return 0.0;
        }
        let offset = offset.clamp(0.0, self.travel);
        offset / self.travel * self.limit
    }
}

/// Pointer capture taken on pointer-down over the thumb.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ThumbDrag {
    pub pointer_start: f64,
    pub thumb_start: f64,
}

impl ThumbDrag {
    pub fn begin(pointer_y: f64, thumb_offset: f64) -> Self {
        Self {
            pointer_start: pointer_y,
            thumb_start: thumb_offset,
        }
    }

    /// New thumb offset for the pointer now at `pointer_y`.
    pub fn offset_for(&self, pointer_y: f64, travel: f64) -> f64 {
        (self.thumb_start + pointer_y - self.pointer_start).clamp(0.0, travel.max(0.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thumb_never_below_minimum() {
        for document_height in [1_000.0, 10_000.0, 1_000_000.0] {
            let geometry = ScrollbarGeometry::for_viewport(900.0, document_height)
                .expect("document longer than viewport");
            assert!(geometry.thumb_height >= MIN_THUMB_PX);
        }
        let long = ScrollbarGeometry::for_viewport(900.0, 100_000.0).unwrap();
        assert_eq!(long.thumb_height, MIN_THUMB_PX);
    }

    #[test]
    fn proportional_thumb_for_short_documents() {
        let geometry = ScrollbarGeometry::compute(800.0, 1600.0, 784.0, 50.0).unwrap();
        assert_eq!(geometry.thumb_height, 400.0);
        assert_eq!(geometry.travel, 384.0);
        assert_eq!(geometry.limit, 800.0);
    }

    #[test]
    fn no_thumb_when_document_fits() {
        assert!(ScrollbarGeometry::for_viewport(900.0, 900.0).is_none());
        assert!(ScrollbarGeometry::for_viewport(900.0, 400.0).is_none());
        assert!(ScrollbarGeometry::for_viewport(0.0, 400.0).is_none());
    }

    #[test]
    fn thumb_tracks_scroll() {
        let geometry = ScrollbarGeometry::compute(800.0, 4800.0, 784.0, 50.0).unwrap();
        assert_eq!(geometry.thumb_offset(0.0), 0.0);
        assert_eq!(geometry.thumb_offset(geometry.limit), geometry.travel);
        assert_eq!(geometry.thumb_offset(geometry.limit * 3.0), geometry.travel);
        assert_eq!(geometry.thumb_offset(-40.0), 0.0);
    }

    #[test]
    fn dragging_to_half_travel_scrolls_half_the_limit() {
        let geometry = ScrollbarGeometry::for_viewport(900.0, 6000.0).unwrap();
        let drag = ThumbDrag::begin(100.0, 0.0);
        let offset = drag.offset_for(100.0 + geometry.travel / 2.0, geometry.travel);
        let scroll = geometry.scroll_for_thumb(offset);
        assert!((scroll - (6000.0 - 900.0) / 2.0).abs() < 1e-9);
    }

    #[test]
    fn drag_is_clamped_to_the_track() {
        let drag = ThumbDrag::begin(300.0, 120.0);
        assert_eq!(drag.offset_for(0.0, 500.0), 0.0);
        assert_eq!(drag.offset_for(2000.0, 500.0), 500.0);
        assert_eq!(drag.offset_for(330.0, 500.0), 150.0);
    }
}
