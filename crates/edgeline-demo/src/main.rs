use anyhow::{bail, Context};
use edgeline_engine::logging::{init_logging, LoggingConfig};
use edgeline_ui::prelude::*;

/// Command-line options.
///
/// `edgeline-demo [TOP RIGHT BOTTOM LEFT] [--steps N] [--log FILTER]`
///
/// Each color is `#rrggbb`, `#rrggbbaa`, or `-` to leave that edge out.
struct DemoArgs {
    border: EdgeLineBorder,
    steps: u32,
    log_filter: Option<String>,
}

impl DemoArgs {
    fn parse(args: impl IntoIterator<Item = String>) -> anyhow::Result<Self> {
        let mut colors = Vec::new();
        let mut steps = 4;
        let mut log_filter = None;

        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            if arg == "--steps" {
                let value = args.next().context("--steps needs a value")?;
                steps = value
                    .parse()
                    .with_context(|| format!("--steps expects a positive integer, got {value:?}"))?;
                if steps == 0 {
                    bail!("--steps must be at least 1");
                }
            } else if arg == "--log" {
                log_filter = Some(args.next().context("--log needs a filter")?);
            } else if arg == "-" {
                colors.push(None);
            } else {
                let color = arg
                    .parse::<Color>()
                    .with_context(|| format!("edge color #{}", colors.len() + 1))?;
                colors.push(Some(color));
            }
        }

        let border = match colors.as_slice() {
            [] => EdgeLineBorder::new()
                .with_top(Color::from_srgb_u8(0xe0, 0x40, 0x40, 0xff))
                .with_left(Color::from_srgb_u8(0x40, 0x60, 0xe0, 0xff)),
            &[top, right, bottom, left] => EdgeLineBorder::from_edges(top, right, bottom, left),
            other => bail!("expected 0 or 4 edge colors, got {}", other.len()),
        };

        Ok(Self { border, steps, log_filter })
    }
}

fn describe(cmd: &DrawCmd) -> String {
    let shape = match cmd {
        DrawCmd::Line(c) => format!(
            "line   ({:.1}, {:.1}) -> ({:.1}, {:.1})  {:?}",
            c.from.x, c.from.y, c.to.x, c.to.y, c.paint.color
        ),
        DrawCmd::Rect(c) => format!("rect   {:?}  {:?}", c.rect, c.paint.style),
        DrawCmd::RoundedRect(c) => format!("rrect  {:?}  {:?}", c.rect, c.radii),
        DrawCmd::Circle(c) => format!("circle r={:.1}", c.radius),
        DrawCmd::Path(c) => format!("path   {} elements", c.path.elements().len()),
    };
    match cmd.paint().style {
        PaintStyle::Fill => format!("{shape}  fill"),
        PaintStyle::Stroke { width } if width == 0.0 => format!("{shape}  hairline"),
        PaintStyle::Stroke { width } => format!("{shape}  stroke {width:.1}"),
    }
}

fn main() -> anyhow::Result<()> {
    let args = DemoArgs::parse(std::env::args().skip(1))?;
    init_logging(match &args.log_filter {
        Some(filter) => LoggingConfig::with_filter(filter.as_str()),
        None => LoggingConfig::default(),
    });
    log::info!("edge line border: {:?}", args.border);

    let rect = Rect::new(0.0, 0.0, 120.0, 40.0);
    let start = Decoration::new()
        .background(Color::from_srgb_u8(0x18, 0x18, 0x1c, 0xff))
        .border(BoxBorder::symmetric(
            BorderSide::new(Color::WHITE, 2.0),
            BorderSide::new(Color::from_srgb_u8(0x90, 0x90, 0x98, 0xff), 1.0),
        ));
    let end = Decoration::new()
        .background(Color::from_srgb_u8(0x18, 0x18, 0x1c, 0xff))
        .border(args.border);

    println!();
    println!("  box border  ->  edge line border   ({} steps)", args.steps);
    println!();

    let mut draw_list = DrawList::new();
    for step in 0..=args.steps {
        let t = step as f32 / args.steps as f32;
        let frame = Decoration::lerp(&start, &end, t);

        draw_list.clear();
        frame.paint(&mut Painter::new(&mut draw_list), rect);

        println!("  t = {t:.2}  insets {:?}", frame.shape_border().map(ShapeBorder::dimensions));
        for cmd in draw_list.items() {
            println!("    {}", describe(cmd));
        }
    }

    // Blending from a box border keeps the box variant all the way to t = 1,
    // so paint the target itself once for comparison.
    draw_list.clear();
    end.paint(&mut Painter::new(&mut draw_list), rect);
    println!();
    println!("  target");
    for cmd in draw_list.items() {
        println!("    {}", describe(cmd));
    }
    println!();

    Ok(())
}
