use std::io::{self, Write};

use anyhow::Result;
use clap::{Parser, Subcommand};
use serde::Serialize;
use shapes2d::shapes::rand::{draw_pair, ReplayToken, SampleCfg};
use shapes2d::{GeomCfg, Pentagon, Point, Shape, ShapeError, Square};
use tracing_subscriber::fmt::SubscriberBuilder;

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Square/pentagon overlap demo")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Build the fixed square and pentagon, move them, and report overlap
    Demo {
        /// Square translation as DX,DY
        #[arg(long, default_value = "1,1", value_parser = parse_delta, allow_hyphen_values = true)]
        square_delta: (f64, f64),
        /// Pentagon translation as DX,DY
        #[arg(long, default_value = "2,2", value_parser = parse_delta, allow_hyphen_values = true)]
        pentagon_delta: (f64, f64),
        /// Collinearity slack for the orientation test (0 = exact)
        #[arg(long = "eps", default_value = "0", value_parser = parse_eps)]
        cfg: GeomCfg,
        /// Print a JSON report instead of text
        #[arg(long)]
        json: bool,
    },
    /// Draw random square/pentagon pairs and report overlap for each
    Sample {
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = 10)]
        count: u64,
        #[arg(long = "eps", default_value = "0", value_parser = parse_eps)]
        cfg: GeomCfg,
    },
}

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(io::stderr)
        .init();
    let cmd = Cmd::parse();
    let mut out = io::stdout().lock();
    let res = match cmd.action {
        Action::Demo {
            square_delta,
            pentagon_delta,
            cfg,
            json,
        } => {
            let args = DemoArgs {
                square_delta,
                pentagon_delta,
                cfg,
            };
            if json {
                demo_json(&args, &mut out)
            } else {
                demo_text(&args, &mut out)
            }
        }
        Action::Sample { seed, count, cfg } => sample(seed, count, cfg, &mut out),
    };
    report_shape_error(res, &mut out)
}

/// Shape errors become a single printed line; anything else propagates.
fn report_shape_error(res: Result<()>, out: &mut impl Write) -> Result<()> {
    match res {
        Err(err) => match err.downcast_ref::<ShapeError>() {
            Some(shape_err) => {
                tracing::warn!(error = %shape_err, "shape_error");
                writeln!(out, "error: {shape_err}")?;
                Ok(())
            }
            None => Err(err),
        },
        ok => ok,
    }
}

fn parse_eps(s: &str) -> Result<GeomCfg, String> {
    let eps = s
        .trim()
        .parse::<f64>()
        .map_err(|e| format!("invalid eps {s:?}: {e}"))?;
    GeomCfg::with_eps(eps).map_err(|e| e.to_string())
}

fn parse_delta(s: &str) -> Result<(f64, f64), String> {
    let (dx, dy) = s
        .split_once(',')
        .ok_or_else(|| format!("expected DX,DY, got {s:?}"))?;
    let parse = |v: &str| {
        v.trim()
            .parse::<f64>()
            .map_err(|e| format!("invalid delta component {v:?}: {e}"))
    };
    Ok((parse(dx)?, parse(dy)?))
}

struct DemoArgs {
    square_delta: (f64, f64),
    pentagon_delta: (f64, f64),
    cfg: GeomCfg,
}

fn demo_shapes() -> Result<(Square, Pentagon), ShapeError> {
    let square = Square::new("square1", Point::new(2.0, 2.0)?, 4.0)?;
    let vertices = [(0.0, 0.0), (3.0, 0.0), (5.0, 2.0), (2.0, 4.0), (1.0, 2.0)]
        .into_iter()
        .map(|(x, y)| Point::new(x, y))
        .collect::<Result<Vec<_>, _>>()?;
    let pentagon = Pentagon::new("pentagon1", vertices)?;
    Ok((square, pentagon))
}

fn demo_text(args: &DemoArgs, out: &mut impl Write) -> Result<()> {
    tracing::info!(
        square_delta = ?args.square_delta,
        pentagon_delta = ?args.pentagon_delta,
        eps = args.cfg.eps_orient,
        "demo"
    );
    let (mut square, mut pentagon) = demo_shapes()?;
    writeln!(out, "Square before move:")?;
    writeln!(out, "{square}")?;
    writeln!(out, "Pentagon before move:")?;
    writeln!(out, "{pentagon}")?;

    let (sdx, sdy) = args.square_delta;
    let (pdx, pdy) = args.pentagon_delta;
    square.translate(sdx, sdy)?;
    pentagon.translate(pdx, pdy)?;

    writeln!(out)?;
    writeln!(out, "Square after move:")?;
    writeln!(out, "{square}")?;
    writeln!(out, "Pentagon after move:")?;
    writeln!(out, "{pentagon}")?;

    let hit = square.intersects_with(&pentagon, args.cfg)?;
    tracing::debug!(hit, "intersects");
    writeln!(out)?;
    if hit {
        writeln!(out, "The square intersects the pentagon.")?;
    } else {
        writeln!(out, "The square does not intersect the pentagon.")?;
    }
    Ok(())
}

#[derive(Serialize)]
struct ShapeView {
    identifier: String,
    kind: String,
    vertices: Vec<[f64; 2]>,
}

impl ShapeView {
    fn of(shape: &Shape) -> Self {
        Self {
            identifier: shape.identifier().to_string(),
            kind: shape.kind().to_string(),
            vertices: shape.vertices().iter().map(|v| [v.x, v.y]).collect(),
        }
    }
}

#[derive(Serialize)]
struct DemoReport {
    before: [ShapeView; 2],
    after: [ShapeView; 2],
    eps: f64,
    intersects: bool,
}

fn demo_json(args: &DemoArgs, out: &mut impl Write) -> Result<()> {
    tracing::info!(eps = args.cfg.eps_orient, "demo_json");
    let (square, pentagon) = demo_shapes()?;
    let mut a = Shape::from(square);
    let mut b = Shape::from(pentagon);
    let before = [ShapeView::of(&a), ShapeView::of(&b)];
    a.translate(args.square_delta.0, args.square_delta.1)?;
    b.translate(args.pentagon_delta.0, args.pentagon_delta.1)?;
    let report = DemoReport {
        before,
        after: [ShapeView::of(&a), ShapeView::of(&b)],
        eps: args.cfg.eps_orient,
        intersects: a.intersects_with(&b, args.cfg)?,
    };
    writeln!(out, "{}", serde_json::to_string_pretty(&report)?)?;
    Ok(())
}

fn sample(seed: u64, count: u64, cfg: GeomCfg, out: &mut impl Write) -> Result<()> {
    tracing::info!(seed, count, eps = cfg.eps_orient, "sample");
    let mut hits = 0u64;
    for index in 0..count {
        let (square, pentagon) = draw_pair(SampleCfg::default(), ReplayToken { seed, index })?;
        let hit = square.intersects_with(&pentagon, cfg)?;
        hits += u64::from(hit);
        writeln!(out, "{square}")?;
        writeln!(out, "{pentagon}")?;
        writeln!(out, "  intersects: {hit}")?;
    }
    tracing::info!(hits, misses = count - hits, "sample_done");
    Ok(())
}
