use std::collections::BTreeMap;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use vgdraw_engine::canvas::{Canvas, Picture};
use vgdraw_engine::coords::Vec2;
use vgdraw_engine::logging::{init_logging, LoggingConfig};
use vgdraw_engine::paint::{names, GradientStop, Rgba8};
use vgdraw_engine::raster::{RasterCall, RecordingRasterizer};

const WIDTH: u32 = 1024;
const HEIGHT: u32 = 768;

/// Draws a sample picture into the recording rasterizer.
#[derive(Debug, Parser)]
#[command(name = "vgdraw-studio", version)]
struct Args {
    /// Image file placed in the lower-left corner.
    #[arg(long)]
    image: Option<PathBuf>,

    /// Ask the rasterizer to save the finished picture here.
    #[arg(long)]
    save: Option<PathBuf>,

    /// Fail on an unreadable image instead of drawing a placeholder.
    #[arg(long)]
    strict: bool,
}

fn main() -> Result<()> {
    init_logging(LoggingConfig { timestamps: false, ..Default::default() });
    let args = Args::parse();

    let mut canvas = Canvas::new(RecordingRasterizer::new());
    {
        let mut pic = canvas.begin_with_background(WIDTH, HEIGHT, "white", None);

        banner(&mut pic);
        swatches(&mut pic);
        shapes(&mut pic);

        let image = args.image.clone().unwrap_or_else(|| "missing.png".into());
        if args.strict {
            pic.try_image(40.0, 40.0, &image)
                .with_context(|| format!("placing {}", image.display()))?;
        } else {
            pic.image(40.0, 40.0, 240, 160, &image);
        }

        match &args.save {
            Some(path) => pic.end_and_save(path),
            None => pic.end(),
        }
    }

    report(canvas.rasterizer().calls());
    Ok(())
}

/// Title strip over a horizontal gradient.
fn banner(pic: &mut Picture<'_, RecordingRasterizer>) {
    let top = HEIGHT as f32 - 120.0;
    let stops = [
        GradientStop::new(0.0, Rgba8::rgb(25, 25, 112)),
        GradientStop::new(0.5, Rgba8::new(65, 105, 225, 200)),
        GradientStop::new(1.0, Rgba8::rgb(135, 206, 250)),
    ];
    pic.fill_linear_gradient(0.0, top, WIDTH as f32, top, &stops);
    pic.rect(0.0, top, WIDTH as f32, 120.0);

    pic.fill_color("white", None);
    pic.text_mid(WIDTH as f32 / 2.0, top + 50.0, "vgdraw studio", "sans", 48);
}

/// One square per named color, clipped to a panel.
fn swatches(pic: &mut Picture<'_, RecordingRasterizer>) {
    const CELL: f32 = 24.0;
    const COLUMNS: usize = 21;
    let (x0, y0) = (320.0, 200.0);

    pic.clip_rect(x0 as i32, y0 as i32, (CELL * COLUMNS as f32) as i32, 200);
    for (i, (name, _)) in names::names().enumerate() {
        let (col, row) = (i % COLUMNS, i / COLUMNS);
        pic.fill_color(name, None);
        pic.rect(x0 + col as f32 * CELL, y0 + row as f32 * CELL, CELL - 2.0, CELL - 2.0);
    }
    pic.clip_end();
}

fn shapes(pic: &mut Picture<'_, RecordingRasterizer>) {
    pic.stroke_color("rgb(70,130,180)", None);
    pic.stroke_width(4.0);
    pic.line(40.0, 460.0, 280.0, 520.0);

    let radial = [
        GradientStop::new(0.0, Rgba8::rgb(255, 255, 255)),
        GradientStop::new(1.0, Rgba8::rgb(255, 99, 71)),
    ];
    pic.fill_radial_gradient(880.0, 420.0, 860.0, 440.0, 80.0, &radial);
    pic.circle(880.0, 420.0, 80.0);

    pic.fill_color("olivedrab", Some(0.6));
    pic.round_rect(40.0, 560.0, 200.0, 60.0, 16.0, 16.0);
    pic.ellipse(880.0, 160.0, 160.0, 80.0);

    pic.stroke_color("crimson", None);
    pic.quad_bezier(Vec2::new(320.0, 460.0), Vec2::new(480.0, 600.0), Vec2::new(640.0, 460.0));
    pic.cubic_bezier(
        Vec2::new(320.0, 440.0),
        Vec2::new(400.0, 360.0),
        Vec2::new(560.0, 520.0),
        Vec2::new(640.0, 440.0),
    );
    pic.arc(760.0, 600.0, 100.0, 100.0, 0.0, 270.0);

    pic.fill_color("gold", None);
    let triangle = [(700.0, 40.0), (760.0, 140.0), (820.0, 40.0)].map(Vec2::from);
    let zigzag = [(840.0, 40.0), (880.0, 120.0), (920.0, 40.0)].map(Vec2::from);
    pic.polygon(&triangle);
    pic.polyline(&zigzag);

    pic.translate(40.0, 680.0);
    pic.rotate(-5.0);
    pic.fill_color("dimgray", None);
    let caption = "immediate mode";
    let width = pic.text_width(caption, "serif", 20);
    pic.text(0.0, 0.0, caption, "serif", 20);
    pic.text_end(width + 200.0, 0.0, "end aligned", "mono", 14);
}

/// Summarizes the recorded call stream by call kind.
fn report(calls: &[RasterCall]) {
    let mut kinds: BTreeMap<&'static str, usize> = BTreeMap::new();
    for call in calls {
        *kinds.entry(kind(call)).or_default() += 1;
    }

    log::info!("{} rasterizer calls", calls.len());
    for (kind, n) in kinds {
        println!("  {kind:<18} {n:>5}");
    }
}

fn kind(call: &RasterCall) -> &'static str {
    match call {
        RasterCall::BeginPicture { .. } => "begin",
        RasterCall::EndPicture | RasterCall::EndPictureAndSave(_) => "end",
        RasterCall::Background { .. } => "background",
        RasterCall::SetFill { .. } => "fill",
        RasterCall::SetStroke { .. } => "stroke",
        RasterCall::SetStrokeWidth(_) => "stroke-width",
        RasterCall::SetLinearGradient { .. } => "linear-gradient",
        RasterCall::SetRadialGradient { .. } => "radial-gradient",
        RasterCall::UploadImage { .. } => "image",
        RasterCall::Text { .. } => "text",
        RasterCall::PushClip { .. } | RasterCall::PopClip => "clip",
        RasterCall::Transform(_) => "transform",
        _ => "shape",
    }
}
