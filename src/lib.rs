//! # Regionry
//!
//! Resolution-independent relative layout regions.
//!
//! Regionry resolves named rectangular regions in a 2-D content-unit
//! coordinate space. Each new region is described declaratively (sized as
//! a percentage of an existing region, anchored to an edge or center of
//! another, padded in a third's units) and resolved immediately to
//! absolute coordinates that are invariant across physical device
//! resolutions.
//!
//! ## Core Concepts
//!
//! - **Content units**: all coordinates are device-independent; a single
//!   `pixel_size` scale converts physical pixel counts when needed
//! - **Base regions**: `screen`, `stage` (screen minus the top inset), and
//!   `pixels` are bootstrapped from host display metrics and never change
//! - **One-hop dependencies**: a region may only reference regions created
//!   before it, so resolution is a single synchronous pass
//! - **Rebuild, don't patch**: on a resize or rotation, drop the registry
//!   and rebuild it from fresh metrics
//!
//! ## Example
//!
//! ```rust,ignore
//! use regionry::{DisplayMetrics, RegionRegistry, RegionSpec, Vertical};
//!
//! let metrics = DisplayMetrics::new(320.0, 480.0, 640.0, 960.0).with_status_bar(20.0);
//! let mut layout = RegionRegistry::new(&metrics)?;
//!
//! // A header taking the top 10% of the stage.
//! layout.add_region(&RegionSpec::new("header").height(10.0).vertical(Vertical::Top))?;
//! let header = layout.get("header").unwrap();
//! println!("header spans y {}..{}", header.top, header.bottom);
//! ```

#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod error;
pub mod metrics;
pub mod region;
pub mod registry;
pub mod spec;

// Re-exports for convenience
pub use error::LayoutError;
pub use metrics::DisplayMetrics;
pub use region::Region;
pub use registry::{RegionRegistry, PIXELS, SCREEN, STAGE};
pub use spec::{Horizontal, Padding, RegionAdjust, RegionSpec, Vertical};
