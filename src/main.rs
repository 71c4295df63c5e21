//! anchorkit demo CLI
//!
//! Builds a small constraint scene (two boxes separated by three equal-width
//! layout guides, a pinned backdrop and a centered badge), solves it at the
//! requested canvas size, and prints either the guide overlay SVG or a dump
//! of the solved frames.

use std::path::PathBuf;
use std::process;

use clap::Parser;

use anchorkit::{
    render_guide_overlay, Anchorable, Attribute, ConstraintOptions, EdgeInsets, EngineError,
    LayoutEngine, LayoutGuide, MarginUse, OverlayConfig, OverlayStyle, Relation, View,
};

#[derive(Parser)]
#[command(name = "anchorkit-demo")]
#[command(about = "Render a demo constraint layout and its guide overlay")]
struct Cli {
    /// Canvas width
    #[arg(long, default_value_t = 420.0)]
    width: f64,

    /// Canvas height
    #[arg(long, default_value_t = 640.0)]
    height: f64,

    /// Style file for overlay colors (TOML format)
    #[arg(short, long)]
    style: Option<PathBuf>,

    /// Print solved frames instead of the overlay SVG
    #[arg(short, long)]
    frames: bool,

    /// Also outline subview frames in the overlay
    #[arg(long)]
    views: bool,

    /// Disable the dash-phase animation
    #[arg(long)]
    no_animation: bool,
}

fn main() {
    let cli = Cli::parse();

    let style = match &cli.style {
        Some(path) => match OverlayStyle::from_file(path) {
            Ok(style) => style,
            Err(e) => {
                eprintln!("Error loading style '{}': {}", path.display(), e);
                process::exit(1);
            }
        },
        None => OverlayStyle::default(),
    };

    let root = build_scene();
    let mut engine = LayoutEngine::new();

    if let Err(e) = constrain_scene(&mut engine, &root, cli.width, cli.height) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
    engine.solve();

    if cli.frames {
        print_frames(&root, &engine, 0);
    } else {
        let config = OverlayConfig::default()
            .with_animated(!cli.no_animation)
            .with_views(cli.views);
        println!("{}", render_guide_overlay(&root, &engine, &config, &style));
    }
}

/// Assemble the demo view hierarchy
fn build_scene() -> View {
    let mut root = View::new("root").with_margins(EdgeInsets::uniform(16.0));
    root.add_subview(View::new("backdrop"));
    root.add_subview(View::new("upper"));
    root.add_subview(View::new("lower"));
    root.add_subview(View::new("badge"));
    root.add_layout_guide(LayoutGuide::new("left_gutter"));
    root.add_layout_guide(LayoutGuide::new("middle_gutter"));
    root.add_layout_guide(LayoutGuide::new("right_gutter"));
    root
}

/// Constrain the demo scene at the given canvas size
fn constrain_scene(
    engine: &mut LayoutEngine,
    root: &View,
    width: f64,
    height: f64,
) -> Result<(), EngineError> {
    let opts = ConstraintOptions::default();

    let backdrop = root.subview("backdrop").expect("scene view");
    let upper = root.subview("upper").expect("scene view");
    let lower = root.subview("lower").expect("scene view");
    let badge = root.subview("badge").expect("scene view");
    let left = root.layout_guide("left_gutter").expect("scene guide");
    let middle = root.layout_guide("middle_gutter").expect("scene guide");
    let right = root.layout_guide("right_gutter").expect("scene guide");

    engine.suggest_origin(root, 0.0, 0.0)?;
    engine.suggest_size(root, width, height)?;

    // Backdrop fills the root, margin edge to margin edge.
    engine.pin_to_container(backdrop, EdgeInsets::ZERO, MarginUse::default(), opts)?;

    // Horizontal chain: margin, gutter, upper box, gutter, lower box,
    // gutter, margin.
    engine.align(
        root,
        Attribute::LeadingMargin,
        Relation::Equal,
        left,
        Attribute::Leading,
        0.0,
        opts,
    )?;
    engine.align(
        left,
        Attribute::Trailing,
        Relation::Equal,
        upper,
        Attribute::Leading,
        0.0,
        opts,
    )?;
    engine.align(
        upper,
        Attribute::Trailing,
        Relation::Equal,
        middle,
        Attribute::Leading,
        0.0,
        opts,
    )?;
    engine.align(
        middle,
        Attribute::Trailing,
        Relation::Equal,
        lower,
        Attribute::Leading,
        0.0,
        opts,
    )?;
    engine.align(
        lower,
        Attribute::Trailing,
        Relation::Equal,
        right,
        Attribute::Leading,
        0.0,
        opts,
    )?;
    engine.align(
        right,
        Attribute::Trailing,
        Relation::Equal,
        root,
        Attribute::TrailingMargin,
        0.0,
        opts,
    )?;

    // All three gutters share one width.
    engine.constrain_size_to(Attribute::Width, middle, Relation::Equal, left, 1.0, 0.0, opts)?;
    engine.constrain_size_to(Attribute::Width, middle, Relation::Equal, right, 1.0, 0.0, opts)?;

    // Box proportions.
    engine.constrain_aspect_ratio(upper, Relation::Equal, 1.0, opts)?;
    engine.constrain_aspect_ratio(lower, Relation::Equal, 2.0, opts)?;
    engine.constrain_size(Attribute::Height, upper, Relation::Equal, 100.0, opts)?;
    engine.constrain_size_to(Attribute::Height, upper, Relation::Equal, lower, 1.5, 20.0, opts)?;

    // Vertical placement: upper hangs below the top margin, lower trails it.
    engine.align(
        upper,
        Attribute::Top,
        Relation::Equal,
        root,
        Attribute::TopMargin,
        50.0,
        opts,
    )?;
    engine.place_above(upper, lower, Relation::Equal, 100.0, opts)?;

    // Gutters span from the upper box's top to the lower box's bottom.
    for gutter in [left, middle, right] {
        engine.align(
            gutter,
            Attribute::Top,
            Relation::Equal,
            upper,
            Attribute::Top,
            0.0,
            opts,
        )?;
        engine.align(
            gutter,
            Attribute::Bottom,
            Relation::Equal,
            lower,
            Attribute::Bottom,
            0.0,
            opts,
        )?;
    }

    // An 80x80 badge centered within the root's margins.
    engine.constrain_size(Attribute::Width, badge, Relation::Equal, 80.0, opts)?;
    engine.constrain_size(Attribute::Height, badge, Relation::Equal, 80.0, opts)?;
    engine.center_in_container(badge, MarginUse::default(), opts)?;

    Ok(())
}

/// Print the solved frame of every view and guide, indented by depth
fn print_frames(view: &View, engine: &LayoutEngine, depth: usize) {
    let indent = "  ".repeat(depth);
    let frame = engine.frame_of(view);
    println!(
        "{}[{}] x={:.1} y={:.1} w={:.1} h={:.1}",
        indent,
        view.name(),
        frame.x,
        frame.y,
        frame.width,
        frame.height
    );
    for guide in view.layout_guides() {
        let frame = engine.frame_of(guide);
        println!(
            "{}  ({}) x={:.1} y={:.1} w={:.1} h={:.1}",
            indent,
            guide.name(),
            frame.x,
            frame.y,
            frame.width,
            frame.height
        );
    }
    for child in view.subviews() {
        print_frames(child, engine, depth + 1);
    }
}
