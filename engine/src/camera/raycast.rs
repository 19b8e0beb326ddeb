//! Raycast Module
//!
//! Builds world-space rays from screen coordinates so a pointer position can
//! be intersected with the terrain.

use glam::Vec3;

/// A half-line starting at `origin` heading along a unit `direction`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    /// Create a ray; `direction` is normalized here.
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction: direction.normalize_or_zero(),
        }
    }

    /// Point at distance `t` along the ray.
    #[inline]
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }

    pub fn is_valid(&self) -> bool {
        self.origin.is_finite() && self.direction.is_finite() && self.direction != Vec3::ZERO
    }

    /// Intersection with the horizontal plane `y = height`, if in front of
    /// the origin.
    pub fn intersect_plane(&self, height: f32) -> Option<Vec3> {
        if self.direction.y.abs() < 1e-4 {
            // Ray is parallel to plane
            return None;
        }
        let t = (height - self.origin.y) / self.direction.y;
        (t >= 0.0).then(|| self.at(t))
    }
}

/// Ray through a screen point for a perspective camera.
///
/// # Arguments
/// * `camera_pos` - Camera position in world space
/// * `camera_target` - Point the camera is looking at
/// * `uv` - Normalized screen coordinates (0-1, 0-1) where (0,0) is bottom-left
/// * `aspect_ratio` - Screen aspect ratio (width / height)
/// * `fov` - Vertical field of view in radians
pub fn screen_ray(
    camera_pos: Vec3,
    camera_target: Vec3,
    uv: (f32, f32),
    aspect_ratio: f32,
    fov: f32,
) -> Ray {
    let ndc = (uv.0 * 2.0 - 1.0, uv.1 * 2.0 - 1.0);
    let half_fov = (fov * 0.5).tan();

    let forward = (camera_target - camera_pos).normalize_or_zero();

    // Looking straight up or down - use world X as reference
    let (right, up) = if forward.y.abs() > 0.99 {
        let right = Vec3::X;
        (right, right.cross(forward).normalize())
    } else {
        let right = forward.cross(Vec3::Y).normalize();
        (right, right.cross(forward))
    };

    let direction = forward + right * ndc.0 * aspect_ratio * half_fov + up * ndc.1 * half_fov;
    Ray::new(camera_pos, direction)
}

/// Viewport parameters for building screen rays
#[derive(Clone, Copy, Debug)]
pub struct RaycastConfig {
    /// Screen aspect ratio (width / height)
    pub aspect_ratio: f32,
    /// Vertical field of view in radians
    pub fov: f32,
}

impl Default for RaycastConfig {
    fn default() -> Self {
        Self {
            aspect_ratio: 16.0 / 9.0,
            fov: 75.0_f32.to_radians(),
        }
    }
}

impl RaycastConfig {
    /// Create a new raycast config with the given aspect ratio
    pub fn with_aspect(aspect_ratio: f32) -> Self {
        Self {
            aspect_ratio,
            ..Default::default()
        }
    }

    /// Screen ray using this config
    pub fn screen_ray(&self, camera_pos: Vec3, camera_target: Vec3, uv: (f32, f32)) -> Ray {
        screen_ray(camera_pos, camera_target, uv, self.aspect_ratio, self.fov)
    }
}
