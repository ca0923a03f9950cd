//! Region: a named rectangle with resolved absolute coordinates.

/// A resolved layout region.
///
/// All lengths and coordinates are in content units. Every field is derived
/// from the center point and size by [`Region::from_center`], so the edge,
/// center, aspect, and percentage fields are consistent by construction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Region {
    /// Width in content units, strictly positive.
    pub width: f64,
    /// Height in content units, strictly positive.
    pub height: f64,
    /// Absolute top edge.
    pub top: f64,
    /// Absolute right edge.
    pub right: f64,
    /// Absolute bottom edge.
    pub bottom: f64,
    /// Absolute left edge.
    pub left: f64,
    /// Absolute horizontal center, the midpoint of `[left, right]`.
    pub x_center: f64,
    /// Absolute vertical center, the midpoint of `[top, bottom]`.
    pub y_center: f64,
    /// One percent of `width`. Sibling regions size and pad themselves by
    /// multiplying a percentage by this. The `pixels` base region is the
    /// one exception: there this holds the pixel-to-content scale instead.
    pub x_pct: f64,
    /// One percent of `height` (same `pixels` exception as `x_pct`).
    pub y_pct: f64,
    /// `width / height`.
    pub aspect: f64,
    /// `aspect <= 1`.
    pub is_portrait: bool,
    /// `false` for the built-in `screen`, `stage`, and `pixels` regions;
    /// only user-defined regions may be adjusted or removed.
    pub is_user_defined: bool,
}

impl Region {
    /// Build a region from its center point and size, deriving every other
    /// field. Callers guarantee `width` and `height` are strictly positive
    /// and all inputs are finite.
    pub(crate) fn from_center(
        x_center: f64,
        y_center: f64,
        width: f64,
        height: f64,
        is_user_defined: bool,
    ) -> Self {
        let aspect = width / height;
        Self {
            width,
            height,
            top: y_center - height / 2.0,
            right: x_center + width / 2.0,
            bottom: y_center + height / 2.0,
            left: x_center - width / 2.0,
            x_center,
            y_center,
            x_pct: width * 0.01,
            y_pct: height * 0.01,
            aspect,
            is_portrait: aspect <= 1.0,
            is_user_defined,
        }
    }
}

impl std::fmt::Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[{:.1},{:.1} {:.1}x{:.1}]",
            self.left, self.top, self.width, self.height
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_from_center_derives_edges() {
        let r = Region::from_center(50.0, 40.0, 20.0, 10.0, true);
        assert!((r.left - 40.0).abs() < EPS);
        assert!((r.right - 60.0).abs() < EPS);
        assert!((r.top - 35.0).abs() < EPS);
        assert!((r.bottom - 45.0).abs() < EPS);
        assert!((r.right - r.left - r.width).abs() < EPS);
        assert!((r.bottom - r.top - r.height).abs() < EPS);
    }

    #[test]
    fn test_from_center_derives_metadata() {
        let r = Region::from_center(0.0, 0.0, 20.0, 10.0, false);
        assert!((r.aspect - 2.0).abs() < EPS);
        assert!(!r.is_portrait);
        assert!((r.x_pct - 0.2).abs() < EPS);
        assert!((r.y_pct - 0.1).abs() < EPS);
        assert!(!r.is_user_defined);

        let square = Region::from_center(0.0, 0.0, 10.0, 10.0, true);
        assert!(square.is_portrait); // aspect == 1 counts as portrait
    }

    #[test]
    fn test_display_format() {
        let r = Region::from_center(50.0, 40.0, 20.0, 10.0, true);
        assert_eq!(format!("{r}"), "[40.0,35.0 20.0x10.0]");
    }
}
