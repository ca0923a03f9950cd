//! Display metrics: the host-supplied inputs to registry construction.

/// Display metrics supplied by the host at registry construction.
///
/// Lengths are in content units, the device-independent unit every resolved
/// region is expressed in, except for `pixel_width`/`pixel_height` which
/// count physical device pixels. The struct itself performs no validation;
/// [`RegionRegistry::new`](crate::RegionRegistry::new) rejects degenerate
/// metrics.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DisplayMetrics {
    /// Total stage width in content units.
    pub stage_width: f64,
    /// Total stage height in content units.
    pub stage_height: f64,
    /// Top inset (status bar or equivalent) in content units, 0 if none.
    pub status_bar_height: f64,
    /// Physical pixel width of the device or viewport.
    pub pixel_width: f64,
    /// Physical pixel height of the device or viewport.
    pub pixel_height: f64,
}

impl DisplayMetrics {
    /// Create metrics with no top inset.
    pub const fn new(
        stage_width: f64,
        stage_height: f64,
        pixel_width: f64,
        pixel_height: f64,
    ) -> Self {
        Self {
            stage_width,
            stage_height,
            status_bar_height: 0.0,
            pixel_width,
            pixel_height,
        }
    }

    /// Set the top inset height.
    #[must_use]
    pub const fn with_status_bar(mut self, height: f64) -> Self {
        self.status_bar_height = height;
        self
    }

    /// Metrics for the same display rotated a quarter turn: stage and pixel
    /// extents swapped, inset kept at the (new) top.
    #[must_use]
    pub const fn rotated(&self) -> Self {
        Self {
            stage_width: self.stage_height,
            stage_height: self.stage_width,
            status_bar_height: self.status_bar_height,
            pixel_width: self.pixel_height,
            pixel_height: self.pixel_width,
        }
    }
}
