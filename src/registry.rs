//! Region registry: bootstrap and the resolution operations.
//!
//! A [`RegionRegistry`] is built once from host display metrics and then
//! grown by [`add_region`](RegionRegistry::add_region). Every operation is
//! synchronous and resolves against regions that already exist, so the
//! identifier dependency graph is acyclic by construction. The natural
//! pattern for reacting to display changes (resize, rotation) is to drop
//! the registry and rebuild it from fresh metrics rather than patch it in
//! place.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use crate::error::LayoutError;
use crate::metrics::DisplayMetrics;
use crate::region::Region;
use crate::spec::{Horizontal, Padding, RegionAdjust, RegionSpec, Vertical};

/// Identifier of the base region spanning the full display.
pub const SCREEN: &str = "screen";

/// Identifier of the base region below the top inset. Default size,
/// position, and padding reference for new regions.
pub const STAGE: &str = "stage";

/// Identifier of the base region sized in physical pixel counts.
///
/// Unlike every other region, its `x_pct`/`y_pct` hold the
/// pixel-to-content scale (see [`RegionRegistry::pixel_size`]) rather than
/// 1% of its own size, so a literal pixel count times `pixels.x_pct` is a
/// length in content units. Intentional; do not normalize.
pub const PIXELS: &str = "pixels";

/// Keyed container of resolved regions plus the pixel-to-content scale.
///
/// Always contains the three base regions after construction. A registry
/// is a plain owned value with no global state; a process may hold several
/// at once.
#[derive(Clone, Debug)]
pub struct RegionRegistry {
    /// All regions, base and user-defined, keyed by identifier.
    regions: HashMap<String, Region>,
    /// Content units per physical device pixel. Kept beside the map so
    /// metadata never collides with a region identifier.
    pixel_size: f64,
}

impl RegionRegistry {
    /// Bootstrap a registry from host display metrics.
    ///
    /// Creates `screen` (the full display), `stage` (`screen` minus the
    /// top inset), and `pixels` (physical pixel counts oriented to match
    /// the screen), and derives the pixel-to-content scale.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if any extent is non-finite or non-positive, or
    /// if the inset is negative or does not leave the stage a positive
    /// height.
    pub fn new(metrics: &DisplayMetrics) -> Result<Self, LayoutError> {
        let DisplayMetrics {
            stage_width: width,
            stage_height: height,
            status_bar_height: inset,
            pixel_width,
            pixel_height,
        } = *metrics;

        for (name, value) in [
            ("stage_width", width),
            ("stage_height", height),
            ("pixel_width", pixel_width),
            ("pixel_height", pixel_height),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(LayoutError::InvalidArgument(format!(
                    "{name} must be finite and positive, got {value}"
                )));
            }
        }
        if !inset.is_finite() || inset < 0.0 || inset >= height {
            return Err(LayoutError::InvalidArgument(format!(
                "status_bar_height must be in [0, stage_height), got {inset}"
            )));
        }

        let screen = Region::from_center(width / 2.0, height / 2.0, width, height, false);

        let stage_height = height - inset;
        let stage = Region::from_center(
            width / 2.0,
            inset + stage_height / 2.0,
            width,
            stage_height,
            false,
        );

        // Content units per physical pixel along the dominant axis. Exact
        // everywhere only for square pixels.
        let pixel_size = width.max(height) / pixel_height.max(pixel_width);

        // Orient the pixel counts to match the screen: smaller count on the
        // axis the screen is narrower on.
        let (px_w, px_h) = if screen.is_portrait {
            (pixel_width.min(pixel_height), pixel_width.max(pixel_height))
        } else {
            (pixel_width.max(pixel_height), pixel_width.min(pixel_height))
        };
        let mut pixels = Region::from_center(px_w / 2.0, px_h / 2.0, px_w, px_h, false);
        // Special case: both percent fields carry the pixel-to-content
        // scale so `n * pixels.x_pct` converts a pixel count directly.
        pixels.x_pct = pixel_size;
        pixels.y_pct = pixel_size;

        log::debug!(
            "bootstrap: screen {screen}, stage {stage}, pixels {pixels}, pixel_size {pixel_size}"
        );

        let mut regions = HashMap::new();
        regions.insert(SCREEN.to_owned(), screen);
        regions.insert(STAGE.to_owned(), stage);
        regions.insert(PIXELS.to_owned(), pixels);
        Ok(Self {
            regions,
            pixel_size,
        })
    }

    /// Resolve and insert a new user-defined region.
    ///
    /// Size is a percentage of the `size_to` region, position comes from
    /// the two anchors against the `position_to` region, and padding is
    /// scaled by the `pad_to` region's percent fields. See [`RegionSpec`]
    /// for the defaults. Returns the stored region.
    ///
    /// On any error the registry is unmodified.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` for a missing or duplicate id or malformed
    /// numbers; `NotFound` if a referenced region does not exist.
    pub fn add_region(&mut self, spec: &RegionSpec) -> Result<&Region, LayoutError> {
        let id = spec
            .id
            .as_deref()
            .ok_or_else(|| LayoutError::InvalidArgument("region spec is missing an id".into()))?;
        if self.regions.contains_key(id) {
            return Err(LayoutError::InvalidArgument(format!(
                "region id {id:?} is already registered"
            )));
        }
        for (name, pct) in [("width", spec.width), ("height", spec.height)] {
            if !pct.is_finite() || pct <= 0.0 {
                return Err(LayoutError::InvalidArgument(format!(
                    "{name} percentage must be finite and positive, got {pct}"
                )));
            }
        }
        let Padding {
            top,
            right,
            bottom,
            left,
        } = spec.padding;
        for (name, value) in [
            ("padding.top", top),
            ("padding.right", right),
            ("padding.bottom", bottom),
            ("padding.left", left),
        ] {
            if !value.is_finite() {
                return Err(LayoutError::InvalidArgument(format!(
                    "{name} must be finite, got {value}"
                )));
            }
        }

        let size_to = spec.size_to.as_deref().unwrap_or(STAGE);
        let position_to = spec.position_to.as_deref().unwrap_or(size_to);
        let pad_to = spec.pad_to.as_deref().unwrap_or(size_to);

        let size_ref = self.lookup(size_to)?;
        let pos = self.lookup(position_to)?;
        let pad = self.lookup(pad_to)?;

        let width = spec.width * size_ref.x_pct;
        let height = spec.height * size_ref.y_pct;

        let x_center = match spec.horizontal {
            Horizontal::Before => pos.left - right * pad.x_pct - width / 2.0,
            Horizontal::Left => pos.left + left * pad.x_pct + width / 2.0,
            Horizontal::Center => pos.x_center,
            Horizontal::Right => pos.right - right * pad.x_pct - width / 2.0,
            Horizontal::After => pos.right + left * pad.x_pct + width / 2.0,
        };
        let y_center = match spec.vertical {
            Vertical::Above => pos.top - bottom * pad.y_pct - height / 2.0,
            Vertical::Top => pos.top + top * pad.y_pct + height / 2.0,
            Vertical::Center => pos.y_center,
            Vertical::Bottom => pos.bottom - bottom * pad.y_pct - height / 2.0,
            Vertical::Below => pos.bottom + top * pad.y_pct + height / 2.0,
        };

        let region = Region::from_center(x_center, y_center, width, height, true);
        log::debug!("add_region {id:?}: {region}");

        match self.regions.entry(id.to_owned()) {
            Entry::Occupied(_) => Err(LayoutError::InvalidArgument(format!(
                "region id {id:?} is already registered"
            ))),
            Entry::Vacant(slot) => Ok(slot.insert(region)),
        }
    }

    /// Overwrite a user-defined region's size and/or center in place.
    ///
    /// Omitted fields keep their current values; edges, aspect, and the
    /// percent fields are recomputed from the result. Anchors are not
    /// re-resolved, and regions created relative to this one are not
    /// touched; callers who need propagation re-create the dependents.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` for a missing id or malformed numbers; `NotFound`
    /// if the id is absent; `InvalidOperation` for a base region.
    pub fn adjust_region(&mut self, adjust: &RegionAdjust) -> Result<&Region, LayoutError> {
        let id = adjust
            .id
            .as_deref()
            .ok_or_else(|| LayoutError::InvalidArgument("adjust spec is missing an id".into()))?;

        match self.regions.entry(id.to_owned()) {
            Entry::Vacant(_) => Err(LayoutError::NotFound(id.to_owned())),
            Entry::Occupied(mut slot) => {
                if !slot.get().is_user_defined {
                    return Err(LayoutError::InvalidOperation(format!(
                        "base region {id:?} cannot be adjusted"
                    )));
                }
                let current = *slot.get();
                let width = adjust.width.unwrap_or(current.width);
                let height = adjust.height.unwrap_or(current.height);
                let x_center = adjust.x_center.unwrap_or(current.x_center);
                let y_center = adjust.y_center.unwrap_or(current.y_center);
                for (name, value) in [("width", width), ("height", height)] {
                    if !value.is_finite() || value <= 0.0 {
                        return Err(LayoutError::InvalidArgument(format!(
                            "{name} must be finite and positive, got {value}"
                        )));
                    }
                }
                for (name, value) in [("x_center", x_center), ("y_center", y_center)] {
                    if !value.is_finite() {
                        return Err(LayoutError::InvalidArgument(format!(
                            "{name} must be finite, got {value}"
                        )));
                    }
                }
                let region = Region::from_center(x_center, y_center, width, height, true);
                log::debug!("adjust_region {id:?}: {current} -> {region}");
                *slot.get_mut() = region;
                Ok(slot.into_mut())
            }
        }
    }

    /// Delete a user-defined region, returning its last-resolved state.
    ///
    /// Regions that were positioned relative to the removed one keep their
    /// resolved coordinates; nothing cascades.
    ///
    /// # Errors
    ///
    /// `NotFound` if the id is absent; `InvalidOperation` for a base
    /// region.
    pub fn remove_region(&mut self, id: &str) -> Result<Region, LayoutError> {
        match self.regions.entry(id.to_owned()) {
            Entry::Vacant(_) => Err(LayoutError::NotFound(id.to_owned())),
            Entry::Occupied(slot) => {
                if !slot.get().is_user_defined {
                    return Err(LayoutError::InvalidOperation(format!(
                        "base region {id:?} cannot be removed"
                    )));
                }
                log::debug!("remove_region {id:?}");
                Ok(slot.remove())
            }
        }
    }

    /// Get a region by identifier.
    pub fn get(&self, id: &str) -> Option<&Region> {
        self.regions.get(id)
    }

    /// Check whether an identifier is registered.
    pub fn contains(&self, id: &str) -> bool {
        self.regions.contains_key(id)
    }

    /// Number of regions, base regions included.
    pub fn len(&self) -> usize {
        self.regions.len()
    }

    /// Always `false`: the three base regions cannot be removed.
    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    /// Iterate over all `(identifier, region)` pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Region)> {
        self.regions.iter().map(|(id, region)| (id.as_str(), region))
    }

    /// Content units per physical device pixel.
    pub const fn pixel_size(&self) -> f64 {
        self.pixel_size
    }

    /// The `screen` base region.
    pub fn screen(&self) -> &Region {
        self.base(SCREEN)
    }

    /// The `stage` base region.
    pub fn stage(&self) -> &Region {
        self.base(STAGE)
    }

    /// The `pixels` base region.
    pub fn pixels(&self) -> &Region {
        self.base(PIXELS)
    }

    /// Lookup that reports a missing reference as `NotFound`.
    fn lookup(&self, id: &str) -> Result<&Region, LayoutError> {
        self.regions
            .get(id)
            .ok_or_else(|| LayoutError::NotFound(id.to_owned()))
    }

    /// Base regions are inserted at construction and can never be removed.
    fn base(&self, id: &str) -> &Region {
        self.regions
            .get(id)
            .expect("base region present from construction")
    }
}
