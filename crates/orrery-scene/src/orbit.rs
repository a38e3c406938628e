//! Sun/earth/moon orbital clock.
//!
//! Wall-clock time is scaled by `time_scale` into simulated seconds and
//! then into days. Each angle advances by `TAU * days / period_days` and is
//! kept in `[0, TAU)`.

use std::f32::consts::{FRAC_PI_2, TAU};

use glam::{Mat4, Vec3};
use orrery_config::SceneConfig;

pub const SECONDS_PER_DAY: f32 = 86_400.0;

/// Model matrices for the three named bodies.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyTransforms {
    pub sun: Mat4,
    pub earth: Mat4,
    pub moon: Mat4,
}

impl BodyTransforms {
    /// Matrix for a body by name, `None` for bodies without orbital motion.
    pub fn for_body(&self, name: &str) -> Option<Mat4> {
        match name {
            "sun" => Some(self.sun),
            "earth" => Some(self.earth),
            "moon" => Some(self.moon),
            _ => None,
        }
    }
}

/// Accumulated angles plus the constants that drive them.
#[derive(Debug, Clone, PartialEq)]
pub struct OrbitalState {
    config: SceneConfig,
    /// Earth's spin about its own (tilted) axis, radians.
    pub earth_rotation: f32,
    /// Earth's position angle around the sun, radians.
    pub earth_orbit: f32,
    /// Moon's position angle around earth, radians.
    pub moon_orbit: f32,
    /// Total simulated days since the start.
    pub elapsed_days: f64,
}

impl OrbitalState {
    pub fn new(config: &SceneConfig) -> Self {
        Self {
            config: config.clone(),
            earth_rotation: 0.0,
            earth_orbit: 0.0,
            moon_orbit: 0.0,
            elapsed_days: 0.0,
        }
    }

    /// Advance by `dt_seconds` of wall time.
    pub fn advance(&mut self, dt_seconds: f32) {
        let days = dt_seconds * self.config.time_scale / SECONDS_PER_DAY;
        self.elapsed_days += f64::from(days);
        self.earth_rotation = step_angle(
            self.earth_rotation,
            days,
            self.config.days_per_earth_rotation,
        );
        self.earth_orbit = step_angle(self.earth_orbit, days, self.config.days_per_earth_year);
        self.moon_orbit = step_angle(self.moon_orbit, days, self.config.days_per_moon_orbit);
    }

    /// Earth's center in world space.
    pub fn earth_position(&self) -> Vec3 {
        let r = self.config.earth_orbit_radius;
        Vec3::new(r * self.earth_orbit.cos(), 0.0, r * self.earth_orbit.sin())
    }

    /// Moon's center in world space.
    pub fn moon_position(&self) -> Vec3 {
        let d = self.config.moon_orbit_distance;
        self.earth_position() + Vec3::new(d * self.moon_orbit.cos(), 0.0, d * self.moon_orbit.sin())
    }

    /// Current model matrices.
    ///
    /// Earth is tilted about X and then spun about its own Y. The moon's Y
    /// rotation keeps the same face toward earth.
    pub fn transforms(&self) -> BodyTransforms {
        let sun = Mat4::from_scale(Vec3::splat(self.config.sun_scale));

        let earth_pos = self.earth_position();
        let earth = Mat4::from_translation(earth_pos)
            * Mat4::from_rotation_x(self.config.axial_tilt_deg.to_radians())
            * Mat4::from_rotation_y(self.earth_rotation);

        let moon_pos = self.moon_position();
        let to_earth = earth_pos - moon_pos;
        // Rotating by θ about Y moves a direction's xz angle by -θ, so
        // local -Z (angle -π/2) lands on the earthward angle.
        let facing = -to_earth.z.atan2(to_earth.x) - FRAC_PI_2;
        let moon = Mat4::from_translation(moon_pos)
            * Mat4::from_scale(Vec3::splat(self.config.moon_scale))
            * Mat4::from_rotation_y(facing);

        BodyTransforms { sun, earth, moon }
    }
}

fn step_angle(angle: f32, days: f32, period_days: f32) -> f32 {
    if period_days <= 0.0 || !period_days.is_finite() {
        return angle;
    }
    (angle + TAU * days / period_days).rem_euclid(TAU)
}
