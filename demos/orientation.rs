//! Orientation demo: build a layout, then rebuild it for a rotated display.
//!
//! The registry is a plain value; reacting to an orientation change means
//! discarding it and bootstrapping a new one from the rotated metrics, then
//! re-creating the same declarative regions against it.

use regionry::{
    DisplayMetrics, LayoutError, Padding, RegionRegistry, RegionSpec, Vertical,
};

/// Declare the app's regions against a freshly bootstrapped registry.
fn build_layout(metrics: &DisplayMetrics) -> Result<RegionRegistry, LayoutError> {
    let mut layout = RegionRegistry::new(metrics)?;

    layout.add_region(
        &RegionSpec::new("header")
            .height(10.0)
            .vertical(Vertical::Top),
    )?;
    layout.add_region(
        &RegionSpec::new("body")
            .height(80.0)
            .position_to("header")
            .vertical(Vertical::Below)
            .padding(Padding {
                top: 1.0,
                ..Padding::default()
            }),
    )?;
    layout.add_region(
        &RegionSpec::new("footer")
            .height(8.0)
            .vertical(Vertical::Bottom),
    )?;

    Ok(layout)
}

fn report(title: &str, layout: &RegionRegistry) {
    println!("{title}");
    println!("{}", "=".repeat(title.len()));
    println!(
        "screen {}  stage {}  pixel_size {:.3}",
        layout.screen(),
        layout.stage(),
        layout.pixel_size()
    );
    for id in ["header", "body", "footer"] {
        if let Some(region) = layout.get(id) {
            println!(
                "{id:>8}: {region}  center ({:.1}, {:.1})  aspect {:.2}",
                region.x_center, region.y_center, region.aspect
            );
        }
    }
    println!();
}

fn main() -> Result<(), LayoutError> {
    env_logger::init();

    let portrait = DisplayMetrics::new(320.0, 480.0, 640.0, 960.0).with_status_bar(20.0);
    let layout = build_layout(&portrait)?;
    report("Portrait", &layout);

    // Rotation: throw the registry away and rebuild against the rotated
    // metrics. Nothing is patched in place.
    drop(layout);
    let layout = build_layout(&portrait.rotated())?;
    report("Landscape", &layout);

    Ok(())
}
