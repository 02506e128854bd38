//! Random squares and pentagons (radial jitter + replay tokens).
//!
//! Purpose
//! - Deterministic, indexable draws for benches and randomized checks of the
//!   overlap test.
//!
//! Model
//! - Squares: center uniform in `[-center_extent, center_extent]²`, side
//!   uniform in `[side_min, side_max]`.
//! - Pentagons: five equally spaced angles with bounded angular jitter and a
//!   per-vertex radius in `[radius_min, radius_max]` around a uniform center.
//!   Angles stay sorted, so the result is star-shaped around its center and
//!   its boundary never self-intersects.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG.
//!   Squares and pentagons draw from separate streams of the same token, so
//!   each gets its own sequence and `draw_pair` equals two single draws.

use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::{Pentagon, Square, PENTAGON_VERTICES};
use crate::error::Result;
use crate::geom2::Point;

/// Sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct SampleCfg {
    /// Half-extent of the box centers are drawn from. If <=0, centers sit at the origin.
    pub center_extent: f64,
    pub side_min: f64,
    pub side_max: f64,
    pub radius_min: f64,
    pub radius_max: f64,
    /// Angular jitter as a fraction of the base spacing Δ=2π/5. Clamped to [0, 0.49].
    pub angle_jitter_frac: f64,
}

impl Default for SampleCfg {
    fn default() -> Self {
        Self {
            center_extent: 5.0,
            side_min: 1.0,
            side_max: 4.0,
            radius_min: 0.5,
            radius_max: 3.0,
            angle_jitter_frac: 0.3,
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    /// RNG for one `stream` of this token; the stream id is mixed into the seed.
    #[inline]
    fn to_std_rng(self, stream: u64) -> StdRng {
        // SplitMix64-style mixing, cheap and stable.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15) ^ stream));
        StdRng::seed_from_u64(k)
    }
}

const SQUARE_STREAM: u64 = 0;
const PENTAGON_STREAM: u64 = 1;

#[inline]
fn uniform<R: Rng>(rng: &mut R, lo: f64, hi: f64) -> f64 {
    if hi > lo {
        rng.gen_range(lo..=hi)
    } else {
        lo
    }
}

fn draw_center<R: Rng>(rng: &mut R, extent: f64) -> Result<Point> {
    let e = extent.max(0.0);
    Point::new(uniform(rng, -e, e), uniform(rng, -e, e))
}

/// Draw a random axis-aligned square. Fails only if `cfg` yields a
/// non-positive or non-finite side.
pub fn draw_square(cfg: SampleCfg, tok: ReplayToken) -> Result<Square> {
    let mut rng = tok.to_std_rng(SQUARE_STREAM);
    let center = draw_center(&mut rng, cfg.center_extent)?;
    let side = uniform(&mut rng, cfg.side_min, cfg.side_max);
    Square::new(format!("square-{}-{}", tok.seed, tok.index), center, side)
}

/// Draw a random star-shaped pentagon.
pub fn draw_pentagon(cfg: SampleCfg, tok: ReplayToken) -> Result<Pentagon> {
    let mut rng = tok.to_std_rng(PENTAGON_STREAM);
    let center = draw_center(&mut rng, cfg.center_extent)?.to_vec2();
    let aj = cfg.angle_jitter_frac.clamp(0.0, 0.49);
    let r_lo = cfg.radius_min.max(1e-9);
    let r_hi = cfg.radius_max.max(r_lo);
    let delta = 2.0 * std::f64::consts::PI / (PENTAGON_VERTICES as f64);
    let phase = rng.gen::<f64>() * 2.0 * std::f64::consts::PI;
    let vertices = (0..PENTAGON_VERTICES)
        .map(|k| {
            let jitter = (rng.gen::<f64>() * 2.0 - 1.0) * aj * delta;
            let th = phase + (k as f64) * delta + jitter;
            let r = uniform(&mut rng, r_lo, r_hi);
            let v = center + Vector2::new(th.cos(), th.sin()) * r;
            Point::try_from(v)
        })
        .collect::<Result<Vec<_>>>()?;
    Pentagon::new(format!("pentagon-{}-{}", tok.seed, tok.index), vertices)
}

/// Draw a square and a pentagon from the same token.
pub fn draw_pair(cfg: SampleCfg, tok: ReplayToken) -> Result<(Square, Pentagon)> {
    Ok((draw_square(cfg, tok)?, draw_pentagon(cfg, tok)?))
}
