//! Decorative rotating point cloud.
//!
//! Points are drawn once, uniformly inside a cube, and then only ever
//! rotated as a rigid body. The rotation is a function of elapsed time so
//! the motion looks the same at any frame rate.

use rand::Rng;
use std::f64::consts::FRAC_PI_4;

pub const DEFAULT_STAR_COUNT: usize = 5000;
/// Half-size of the cube the points are scattered in
pub const DEFAULT_EXTENT: f32 = 10.0;

/// Radians per second about the x axis
pub const RATE_X: f64 = 1.0 / 10.0;
/// Radians per second about the y axis
pub const RATE_Y: f64 = 1.0 / 15.0;
/// Fixed tilt of the whole field about z
pub const TILT_Z: f64 = FRAC_PI_4;

/// World-space point size before depth attenuation
pub const POINT_SIZE: f64 = 0.02;

pub type Point3 = [f32; 3];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rotation {
    pub x: f64,
    pub y: f64,
}

/// Rotation of the field after `elapsed_secs` seconds.
pub fn rotation_at(elapsed_secs: f64) -> Rotation {
    Rotation {
        x: elapsed_secs * RATE_X,
        y: elapsed_secs * RATE_Y,
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Starfield {
    points: Vec<Point3>,
}

impl Starfield {
    /// Scatter `count` points uniformly in `[-extent, extent]^3`.
    pub fn generate<R: Rng>(count: usize, extent: f32, rng: &mut R) -> Self {
        let mut axis = || (rng.r#gen::<f32>() * 2.0 - 1.0) * extent;
        let points = (0..count).map(|_| [axis(), axis(), axis()]).collect();
        Self { points }
    }

    pub fn random(count: usize, extent: f32) -> Self {
        Self::generate(count, extent, &mut rand::thread_rng())
    }

    pub fn points(&self) -> &[Point3] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Project every point for the frame at `elapsed_secs`.
    pub fn frame<'a>(
        &'a self,
        elapsed_secs: f64,
        camera: &'a Camera,
        viewport: Viewport,
    ) -> impl Iterator<Item = ScreenPoint> + 'a {
        let rotation = rotation_at(elapsed_secs);
        self.points
            .iter()
            .filter_map(move |p| camera.project(transform(*p, rotation), viewport))
    }
}

/// Rotate a point by the field's spin, then by the fixed tilt.
///
/// Matches an XYZ Euler rotation on the points nested inside a group tilted
/// about z.
pub fn transform(p: Point3, rotation: Rotation) -> [f64; 3] {
    let [x, y, z] = p.map(f64::from);

    // spin about y
    let (sy, cy) = rotation.y.sin_cos();
    let (x, z) = (x * cy + z * sy, -x * sy + z * cy);

    // spin about x
    let (sx, cx) = rotation.x.sin_cos();
    let (y, z) = (y * cx - z * sx, y * sx + z * cx);

    // group tilt about z
    let (sz, cz) = TILT_Z.sin_cos();
    let (x, y) = (x * cz - y * sz, x * sz + y * cz);

    [x, y, z]
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenPoint {
    pub x: f64,
    pub y: f64,
    pub size: f64,
}

/// Perspective camera on the z axis looking toward -z.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub z: f64,
    pub fov_deg: f64,
    pub near: f64,
    pub far: f64,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            z: 1.0,
            fov_deg: 60.0,
            near: 0.1,
            far: 1000.0,
        }
    }
}

impl Camera {
    /// Map a world point to canvas pixels. Points outside the near/far
    /// range yield `None`; nothing else is culled.
    pub fn project(&self, world: [f64; 3], viewport: Viewport) -> Option<ScreenPoint> {
        let depth = self.z - world[2];
        if depth < self.near || depth > self.far || viewport.height <= 0.0 {
            return None;
        }

        let focal = 1.0 / (self.fov_deg.to_radians() / 2.0).tan();
        let aspect = viewport.width / viewport.height;
        let ndc_x = world[0] / depth * focal / aspect;
        let ndc_y = world[1] / depth * focal;

        Some(ScreenPoint {
            x: (ndc_x + 1.0) / 2.0 * viewport.width,
            y: (1.0 - ndc_y) / 2.0 * viewport.height,
            size: POINT_SIZE * (viewport.height / 2.0) / depth,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    const EPS: f64 = 1e-9;

    fn seeded(count: usize) -> Starfield {
        Starfield::generate(count, DEFAULT_EXTENT, &mut StdRng::seed_from_u64(7))
    }

    #[test]
    fn test_points_stay_inside_cube() {
        let field = seeded(DEFAULT_STAR_COUNT);
        assert_eq!(field.len(), DEFAULT_STAR_COUNT);
        for p in field.points() {
            assert!(p.iter().all(|c| c.abs() <= DEFAULT_EXTENT));
        }
    }

    #[test]
    fn test_rotation_is_linear_in_time() {
        for t in [0.0, 0.016, 1.0, 12.5, 3600.0] {
            let r = rotation_at(t);
            assert!((r.x - t / 10.0).abs() < EPS);
            assert!((r.y - t / 15.0).abs() < EPS);
        }
    }

    #[test]
    fn test_rotation_is_independent_of_frame_rate() {
        let fast: f64 = (0..120).map(|_| 1.0 / 120.0).sum();
        let slow: f64 = (0..30).map(|_| 1.0 / 30.0).sum();
        let a = rotation_at(fast);
        let b = rotation_at(slow);
        assert!((a.x - b.x).abs() < 1e-9);
        assert!((a.y - b.y).abs() < 1e-9);
    }

    #[test]
    fn test_frames_do_not_mutate_points() {
        let field = seeded(256);
        let before = field.points().to_vec();
        let camera = Camera::default();
        let viewport = Viewport { width: 800.0, height: 600.0 };
        for frame in 0..10 {
            let _ = field.frame(frame as f64 / 60.0, &camera, viewport).count();
        }
        assert_eq!(field.points(), before.as_slice());
    }

    #[test]
    fn test_transform_is_rigid() {
        let field = seeded(64);
        let rotation = rotation_at(7.3);
        for p in field.points() {
            let original: f64 = p.iter().map(|c| f64::from(*c).powi(2)).sum();
            let moved: f64 = transform(*p, rotation).iter().map(|c| c.powi(2)).sum();
            assert!((original - moved).abs() < 1e-6);
        }
    }

    #[test]
    fn test_tilt_applies_at_rest() {
        let [x, y, z] = transform([1.0, 0.0, 0.0], rotation_at(0.0));
        let half = std::f64::consts::FRAC_1_SQRT_2;
        assert!((x - half).abs() < 1e-6);
        assert!((y - half).abs() < 1e-6);
        assert!(z.abs() < 1e-6);
    }

    #[test]
    fn test_projection_centers_axis_point() {
        let camera = Camera::default();
        let viewport = Viewport { width: 800.0, height: 600.0 };
        let p = camera.project([0.0, 0.0, -1.0], viewport).unwrap();
        assert!((p.x - 400.0).abs() < EPS);
        assert!((p.y - 300.0).abs() < EPS);
        // depth 2 => 0.02 * 300 / 2
        assert!((p.size - 3.0).abs() < EPS);
    }

    #[test]
    fn test_projection_skips_points_behind_camera() {
        let camera = Camera::default();
        let viewport = Viewport { width: 800.0, height: 600.0 };
        assert!(camera.project([0.0, 0.0, 0.95], viewport).is_none());
        assert!(camera.project([0.0, 0.0, 5.0], viewport).is_none());
    }

    #[test]
    fn test_generation_is_seed_deterministic() {
        assert_eq!(seeded(32), seeded(32));
    }
}
