use glam::Vec3;

pub const ROTATION_SPEED: f32 = 0.01;
pub const ZOOM_STEP: f32 = 1.1;
pub const MIN_DISTANCE: f32 = 2.0;
pub const MAX_DISTANCE: f32 = 10.0;
pub const MIN_PHI: f32 = 0.1;
pub const MAX_PHI: f32 = std::f32::consts::PI - 0.1;
/// Vertical field of view in degrees
pub const FOV_DEGREES: f32 = 75.0;

const INITIAL_POSITION: Vec3 = Vec3::new(3.0, 3.0, 3.0);

/// Camera orbiting the origin on a sphere
///
/// `theta` is the azimuth measured from +Z towards +X, `phi` the polar angle from +Y.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitCamera {
    pub target: Vec3,
    pub theta: f32,
    pub phi: f32,
    pub distance: f32,
}

impl OrbitCamera {
    pub fn new() -> Self {
        let distance = INITIAL_POSITION.length();
        Self {
            target: Vec3::ZERO,
            theta: INITIAL_POSITION.x.atan2(INITIAL_POSITION.z),
            phi: (INITIAL_POSITION.y / distance).acos(),
            distance,
        }
    }

    pub fn position(&self) -> Vec3 {
        self.target
            + self.distance
                * Vec3::new(
                    self.phi.sin() * self.theta.sin(),
                    self.phi.cos(),
                    self.phi.sin() * self.theta.cos(),
                )
    }

    pub fn forward(&self) -> Vec3 {
        (self.target - self.position()).normalize()
    }

    pub fn right(&self) -> Vec3 {
        self.forward().cross(Vec3::Y).normalize()
    }

    pub fn up(&self) -> Vec3 {
        self.right().cross(self.forward())
    }

    pub fn fov(&self) -> f32 {
        FOV_DEGREES.to_radians()
    }

    /// Mouse drag in pixels
    pub fn rotate(&mut self, dx: f32, dy: f32) {
        self.theta -= dx * ROTATION_SPEED;
        self.phi = (self.phi + dy * ROTATION_SPEED).clamp(MIN_PHI, MAX_PHI);
    }

    /// Wheel step: positive `delta_y` (scrolling down) moves away
    pub fn zoom(&mut self, delta_y: f32) {
        if delta_y == 0.0 {
            return;
        }
        let factor = if delta_y > 0.0 { ZOOM_STEP } else { 0.9 };
        self.distance = (self.distance * factor).clamp(MIN_DISTANCE, MAX_DISTANCE);
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self::new()
    }
}
