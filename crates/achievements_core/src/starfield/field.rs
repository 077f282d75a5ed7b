//! Star state, depth advance and projection.

use log::warn;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Depth span a star travels before it is recycled.
pub const DEPTH_RANGE: f64 = 1000.0;
/// Stars at or below this depth are pushed back by [`DEPTH_RANGE`].
pub const WRAP_THRESHOLD: f64 = 1.0;
/// Perspective scale applied to depth during projection.
pub const PROJECTION_SCALE: f64 = 0.001;

const SPAWN_HALF_WIDTH: i32 = 800;
const SPAWN_HALF_HEIGHT: i32 = 450;

/// Tunables for one starfield instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StarfieldConfig {
    pub star_count: usize,
    /// Depth units travelled per elapsed millisecond. Negative or non-finite
    /// values are treated as `0` when a field is built.
    pub speed_factor: f64,
    pub star_color: [u8; 3],
}

impl Default for StarfieldConfig {
    fn default() -> Self {
        Self {
            star_count: 5000,
            speed_factor: 0.05,
            star_color: [255, 255, 255],
        }
    }
}

/// Drawable area in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    fn contains(&self, x: f64, y: f64) -> bool {
        x >= 0.0 && x < self.width && y >= 0.0 && y < self.height
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Star {
    pub id: u32,
    pub x: i32,
    pub y: i32,
    pub z: f64,
}

/// Projected star for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StarSprite {
    pub id: u32,
    pub x: f64,
    pub y: f64,
    /// `1 - (z / 1000)^2`, clamped to `[0, 1]`.
    pub brightness: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Starfield {
    stars: Vec<Star>,
    speed_factor: f64,
    star_color: [u8; 3],
}

impl Starfield {
    /// Seeds `config.star_count` stars uniformly inside the spawn box.
    pub fn seeded<R: Rng>(config: &StarfieldConfig, rng: &mut R) -> Self {
        let stars = (0..config.star_count)
            .map(|index| Star {
                id: index as u32,
                x: rng.gen_range(-SPAWN_HALF_WIDTH..SPAWN_HALF_WIDTH),
                y: rng.gen_range(-SPAWN_HALF_HEIGHT..SPAWN_HALF_HEIGHT),
                z: f64::from(rng.gen_range(1..=DEPTH_RANGE as i32)),
            })
            .collect();
        Self {
            stars,
            speed_factor: sanitize_speed(config.speed_factor),
            star_color: config.star_color,
        }
    }

    /// Builds a field from explicit stars, e.g. for replaying a known state.
    pub fn from_stars(stars: Vec<Star>, speed_factor: f64) -> Self {
        Self {
            stars,
            speed_factor: sanitize_speed(speed_factor),
            star_color: StarfieldConfig::default().star_color,
        }
    }

    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    pub fn speed_factor(&self) -> f64 {
        self.speed_factor
    }

    pub fn star_color(&self) -> [u8; 3] {
        self.star_color
    }

    /// Moves every star toward the viewer by `elapsed_ms * speed_factor`.
    ///
    /// Non-finite or negative elapsed times are ignored.
    pub fn advance(&mut self, elapsed_ms: f64) {
        if !elapsed_ms.is_finite() || elapsed_ms <= 0.0 {
            return;
        }
        let distance = elapsed_ms * self.speed_factor;
        if !distance.is_finite() || distance <= 0.0 {
            return;
        }
        for star in &mut self.stars {
            star.z = advance_depth(star.z, distance);
        }
    }

    /// Projects live stars into `viewport`, dropping off-screen ones.
    pub fn project(&self, viewport: Viewport) -> Vec<StarSprite> {
        self.stars
            .iter()
            .filter_map(|star| project_star(star, viewport))
            .collect()
    }
}

/// Returns the new depth after moving `distance` closer, recycling stars
/// that pass the threshold as many times as needed.
///
/// Whole laps are reduced away before the subtraction, so the result is
/// exact regardless of how large `distance` is.
pub fn advance_depth(z: f64, distance: f64) -> f64 {
    let moved = z - distance;
    if moved > WRAP_THRESHOLD {
        return moved;
    }
    let step = distance.rem_euclid(DEPTH_RANGE);
    let offset = (z - step - WRAP_THRESHOLD).rem_euclid(DEPTH_RANGE);
    // rem_euclid may round up to the modulus itself.
    if offset <= 0.0 || offset >= DEPTH_RANGE {
        WRAP_THRESHOLD + DEPTH_RANGE
    } else {
        WRAP_THRESHOLD + offset
    }
}

fn sanitize_speed(speed_factor: f64) -> f64 {
    if speed_factor.is_finite() && speed_factor >= 0.0 {
        return speed_factor;
    }
    warn!(
        "event=starfield_config module=starfield status=clamped speed_factor={}",
        speed_factor
    );
    0.0
}

fn project_star(star: &Star, viewport: Viewport) -> Option<StarSprite> {
    if star.z <= 0.0 {
        return None;
    }
    let depth = star.z * PROJECTION_SCALE;
    let x = viewport.width / 2.0 + f64::from(star.x) / depth;
    let y = viewport.height / 2.0 + f64::from(star.y) / depth;
    if !viewport.contains(x, y) {
        return None;
    }
    let distance = star.z / DEPTH_RANGE;
    Some(StarSprite {
        id: star.id,
        x,
        y,
        brightness: (1.0 - distance * distance).clamp(0.0, 1.0),
    })
}

#[cfg(test)]
mod tests {
    use super::{advance_depth, Star, Starfield, StarfieldConfig, Viewport};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn advance_without_wrap_subtracts_distance() {
        assert_eq!(advance_depth(500.0, 120.0), 380.0);
    }

    #[test]
    fn advance_wraps_once_past_threshold() {
        assert_eq!(advance_depth(500.0, 600.0), 900.0);
        assert_eq!(advance_depth(2.0, 1.0), 1001.0);
    }

    #[test]
    fn advance_wraps_repeatedly_for_large_jumps() {
        assert_eq!(advance_depth(500.0, 2600.0), 900.0);
    }

    #[test]
    fn huge_distances_keep_exact_depth() {
        assert_eq!(advance_depth(500.0, 1e17), 500.0);
        assert_eq!(advance_depth(500.0, 1e18), 500.0);
        assert_eq!(advance_depth(500.0, 1e20), 500.0);
        let depth = advance_depth(1.5, f64::MAX);
        assert!(depth > 1.0 && depth <= 1001.0, "depth out of range: {depth}");
    }

    #[test]
    fn invalid_speed_factor_freezes_the_field() {
        let config: StarfieldConfig =
            serde_json::from_value(serde_json::json!({ "star_count": 1, "speed_factor": -1.0 }))
                .unwrap();
        let mut field = Starfield::seeded(&config, &mut StdRng::seed_from_u64(1));
        assert_eq!(field.speed_factor(), 0.0);
        let start = field.stars()[0].z;
        for _ in 0..10 {
            field.advance(1000.0);
        }
        assert_eq!(field.stars()[0].z, start);

        let replay = Starfield::from_stars(vec![Star { id: 0, x: 0, y: 0, z: 10.0 }], f64::NAN);
        assert_eq!(replay.speed_factor(), 0.0);
    }

    #[test]
    fn seeded_stars_stay_inside_spawn_box() {
        let config = StarfieldConfig {
            star_count: 256,
            ..StarfieldConfig::default()
        };
        let field = Starfield::seeded(&config, &mut StdRng::seed_from_u64(7));
        assert_eq!(field.stars().len(), 256);
        for star in field.stars() {
            assert!((-800..800).contains(&star.x));
            assert!((-450..450).contains(&star.y));
            assert!(star.z > 0.0 && star.z <= 1000.0);
        }
    }

    #[test]
    fn projection_culls_but_keeps_stars() {
        let field = Starfield::from_stars(
            vec![
                Star { id: 0, x: 0, y: 0, z: 500.0 },
                Star { id: 1, x: 800, y: 0, z: 10.0 },
            ],
            0.05,
        );
        let sprites = field.project(Viewport::new(400.0, 800.0));
        assert_eq!(sprites.len(), 1);
        assert_eq!(sprites[0].id, 0);
        assert_eq!(sprites[0].x, 200.0);
        assert_eq!(sprites[0].y, 400.0);
        assert!((sprites[0].brightness - 0.75).abs() < 1e-9);
        assert_eq!(field.stars().len(), 2);
    }

    #[test]
    fn advance_ignores_invalid_elapsed_time() {
        let mut field = Starfield::from_stars(vec![Star { id: 0, x: 1, y: 1, z: 300.0 }], 1.0);
        field.advance(f64::NAN);
        field.advance(-5.0);
        assert_eq!(field.stars()[0].z, 300.0);
    }
}
