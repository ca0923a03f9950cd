//! Declarative option records for region creation and adjustment.
//!
//! These are plain data: [`RegionSpec`] describes a region to create and
//! [`RegionAdjust`] a mutation to apply. Both serialize with the wire
//! names the registry documents (`sizeTo`, `positionTo`, `padTo`,
//! lowercase anchor keywords), so they can be read straight from JSON or
//! TOML configuration. Omitted optional fields take the documented
//! defaults.

use serde::{Deserialize, Serialize};

/// Horizontal anchor keyword: how the new region is placed against the
/// position reference along the x axis.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Horizontal {
    /// Entirely left of the reference: right edge `padding.right` left of
    /// the reference's left edge.
    Before,
    /// Inside, flush left: left edge `padding.left` right of the
    /// reference's left edge.
    Left,
    /// Centered on the reference; padding is ignored.
    #[default]
    Center,
    /// Inside, flush right: right edge `padding.right` left of the
    /// reference's right edge.
    Right,
    /// Entirely right of the reference: left edge `padding.left` right of
    /// the reference's right edge.
    After,
}

/// Vertical anchor keyword, mirroring [`Horizontal`] along the y axis.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Vertical {
    /// Entirely above the reference: bottom edge `padding.bottom` above
    /// the reference's top edge.
    Above,
    /// Inside, flush to the top: top edge `padding.top` below the
    /// reference's top edge.
    Top,
    /// Centered on the reference; padding is ignored.
    #[default]
    Center,
    /// Inside, flush to the bottom: bottom edge `padding.bottom` above the
    /// reference's bottom edge.
    Bottom,
    /// Entirely below the reference: top edge `padding.top` below the
    /// reference's bottom edge.
    Below,
}

/// Padding for each side, as percentages of the pad reference's
/// `x_pct`/`y_pct`. All sides default to 0.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Padding {
    /// Inset from the reference's top edge, in `pad_to.y_pct` units.
    pub top: f64,
    /// Inset from the reference's right edge, in `pad_to.x_pct` units.
    pub right: f64,
    /// Inset from the reference's bottom edge, in `pad_to.y_pct` units.
    pub bottom: f64,
    /// Inset from the reference's left edge, in `pad_to.x_pct` units.
    pub left: f64,
}

/// Declarative description of a region to create with
/// [`RegionRegistry::add_region`](crate::RegionRegistry::add_region).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RegionSpec {
    /// Identifier for the new region. Required and must be unused.
    pub id: Option<String>,
    /// Region whose `x_pct`/`y_pct` scale `width`/`height`.
    /// Defaults to `"stage"`.
    pub size_to: Option<String>,
    /// Width as a percentage of the size reference. Defaults to 100.
    pub width: f64,
    /// Height as a percentage of the size reference. Defaults to 100.
    pub height: f64,
    /// Region the anchors position against. Defaults to `size_to`.
    pub position_to: Option<String>,
    /// Horizontal anchor keyword. Defaults to `center`.
    pub horizontal: Horizontal,
    /// Vertical anchor keyword. Defaults to `center`.
    pub vertical: Vertical,
    /// Region whose `x_pct`/`y_pct` scale the padding percentages.
    /// Defaults to `size_to`.
    pub pad_to: Option<String>,
    /// Per-side padding percentages. Defaults to 0 on every side.
    pub padding: Padding,
}

impl Default for RegionSpec {
    fn default() -> Self {
        Self {
            id: None,
            size_to: None,
            width: 100.0,
            height: 100.0,
            position_to: None,
            horizontal: Horizontal::Center,
            vertical: Vertical::Center,
            pad_to: None,
            padding: Padding::default(),
        }
    }
}

impl RegionSpec {
    /// Create a spec for the given identifier with all defaults: full size
    /// of the stage, centered on it, no padding.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            ..Self::default()
        }
    }

    /// Set the size reference region.
    #[must_use]
    pub fn size_to(mut self, id: impl Into<String>) -> Self {
        self.size_to = Some(id.into());
        self
    }

    /// Set the width percentage.
    #[must_use]
    pub fn width(mut self, pct: f64) -> Self {
        self.width = pct;
        self
    }

    /// Set the height percentage.
    #[must_use]
    pub fn height(mut self, pct: f64) -> Self {
        self.height = pct;
        self
    }

    /// Set the position reference region.
    #[must_use]
    pub fn position_to(mut self, id: impl Into<String>) -> Self {
        self.position_to = Some(id.into());
        self
    }

    /// Set the horizontal anchor.
    #[must_use]
    pub fn horizontal(mut self, anchor: Horizontal) -> Self {
        self.horizontal = anchor;
        self
    }

    /// Set the vertical anchor.
    #[must_use]
    pub fn vertical(mut self, anchor: Vertical) -> Self {
        self.vertical = anchor;
        self
    }

    /// Set the padding reference region.
    #[must_use]
    pub fn pad_to(mut self, id: impl Into<String>) -> Self {
        self.pad_to = Some(id.into());
        self
    }

    /// Set the per-side padding percentages.
    #[must_use]
    pub fn padding(mut self, padding: Padding) -> Self {
        self.padding = padding;
        self
    }
}

/// Declarative mutation for
/// [`RegionRegistry::adjust_region`](crate::RegionRegistry::adjust_region).
///
/// Omitted fields keep the region's current values. Only size and center
/// can change; the region is not re-anchored.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RegionAdjust {
    /// Identifier of the region to adjust. Required; must name a
    /// user-defined region.
    pub id: Option<String>,
    /// New width in content units.
    pub width: Option<f64>,
    /// New height in content units.
    pub height: Option<f64>,
    /// New horizontal center.
    pub x_center: Option<f64>,
    /// New vertical center.
    pub y_center: Option<f64>,
}

impl RegionAdjust {
    /// Create an adjustment for the given identifier with no changes yet.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            ..Self::default()
        }
    }

    /// Set a new width.
    #[must_use]
    pub fn width(mut self, width: f64) -> Self {
        self.width = Some(width);
        self
    }

    /// Set a new height.
    #[must_use]
    pub fn height(mut self, height: f64) -> Self {
        self.height = Some(height);
        self
    }

    /// Set a new horizontal center.
    #[must_use]
    pub fn x_center(mut self, x: f64) -> Self {
        self.x_center = Some(x);
        self
    }

    /// Set a new vertical center.
    #[must_use]
    pub fn y_center(mut self, y: f64) -> Self {
        self.y_center = Some(y);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spec_defaults() {
        let spec = RegionSpec::new("header");
        assert_eq!(spec.id.as_deref(), Some("header"));
        assert_eq!(spec.size_to, None);
        assert_eq!(spec.width, 100.0);
        assert_eq!(spec.height, 100.0);
        assert_eq!(spec.horizontal, Horizontal::Center);
        assert_eq!(spec.vertical, Vertical::Center);
        assert_eq!(spec.padding, Padding::default());
    }

    #[test]
    fn test_spec_wire_names() {
        let spec: RegionSpec = serde_json::from_str(
            r#"{
                "id": "sidebar",
                "sizeTo": "stage",
                "width": 25,
                "positionTo": "header",
                "horizontal": "left",
                "vertical": "below",
                "padTo": "screen",
                "padding": { "top": 2, "left": 1 }
            }"#,
        )
        .unwrap();
        assert_eq!(spec.id.as_deref(), Some("sidebar"));
        assert_eq!(spec.size_to.as_deref(), Some("stage"));
        assert_eq!(spec.width, 25.0);
        assert_eq!(spec.height, 100.0); // omitted, default
        assert_eq!(spec.position_to.as_deref(), Some("header"));
        assert_eq!(spec.horizontal, Horizontal::Left);
        assert_eq!(spec.vertical, Vertical::Below);
        assert_eq!(spec.pad_to.as_deref(), Some("screen"));
        assert_eq!(spec.padding.top, 2.0);
        assert_eq!(spec.padding.left, 1.0);
        assert_eq!(spec.padding.right, 0.0);
    }

    #[test]
    fn test_adjust_wire_names() {
        let adj: RegionAdjust =
            serde_json::from_str(r#"{"id": "body", "xCenter": 160, "height": 40}"#).unwrap();
        assert_eq!(adj.id.as_deref(), Some("body"));
        assert_eq!(adj.x_center, Some(160.0));
        assert_eq!(adj.y_center, None);
        assert_eq!(adj.width, None);
        assert_eq!(adj.height, Some(40.0));
    }

    #[test]
    fn test_unknown_anchor_keyword_rejected() {
        let result: Result<RegionSpec, _> =
            serde_json::from_str(r#"{"id": "x", "horizontal": "middle"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_builder_chain() {
        let spec = RegionSpec::new("footer")
            .size_to("stage")
            .height(8.0)
            .vertical(Vertical::Bottom)
            .padding(Padding {
                bottom: 1.0,
                ..Padding::default()
            });
        assert_eq!(spec.height, 8.0);
        assert_eq!(spec.vertical, Vertical::Bottom);
        assert_eq!(spec.padding.bottom, 1.0);
    }
}
