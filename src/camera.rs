use glam::{Mat4, Quat, Vec3};
use winit::event::KeyEvent;
use winit::keyboard::{KeyCode, PhysicalKey};

pub const CAMERA_SPEED: f32 = 0.5;
pub const CAMERA_ROTATION_SPEED: f32 = 0.02;

/// Per-demo starting placement
#[derive(Debug, Clone, Copy)]
pub struct CameraConfig {
    pub position: Vec3,
    pub target: Vec3,
    pub fovy_degrees: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, 0.0, 100.0),
            target: Vec3::ZERO,
            fovy_degrees: 45.0,
            znear: 0.1,
            zfar: 500.0,
        }
    }
}

#[derive(Default, Clone, Copy)]
pub struct MovementState {
    pub forward: bool,
    pub backward: bool,
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
    pub rotate_left: bool,
    pub rotate_right: bool,
}

impl MovementState {
    const fn to_direction(&self, positive: bool, negative: bool) -> f32 {
        match (positive, negative) {
            (true, false) => 1.0,
            (false, true) => -1.0,
            _ => 0.0,
        }
    }

    const fn velocity(&self) -> (f32, f32, f32) {
        (
            self.to_direction(self.forward, self.backward),
            self.to_direction(self.right, self.left),
            self.to_direction(self.up, self.down),
        )
    }

    const fn rotation_velocity(&self) -> f32 {
        self.to_direction(self.rotate_right, self.rotate_left)
    }
}

/// Perspective camera with simple fly controls.
pub struct Camera {
    pub position: Vec3,
    pub target: Vec3,
    pub fovy: f32,
    pub znear: f32,
    pub zfar: f32,
    pub movement: MovementState,
}

impl Camera {
    pub fn new(config: CameraConfig) -> Self {
        Self {
            position: config.position,
            target: config.target,
            fovy: config.fovy_degrees.to_radians(),
            znear: config.znear,
            zfar: config.zfar,
            movement: MovementState::default(),
        }
    }

    pub fn forward(&self) -> Vec3 {
        (self.target - self.position).normalize_or(Vec3::NEG_Z)
    }

    pub fn right(&self) -> Vec3 {
        self.forward().cross(Vec3::Y).normalize_or(Vec3::X)
    }

    /// Apply one tick of keyboard movement: translation moves position and
    /// target together, yaw swings the target around the position.
    pub fn update(&mut self) {
        let (fwd, right_dir, up_dir) = self.movement.velocity();

        let displacement = self.forward() * fwd * CAMERA_SPEED
            + self.right() * right_dir * CAMERA_SPEED
            + Vec3::Y * up_dir * CAMERA_SPEED;

        self.position += displacement;
        self.target += displacement;

        let yaw = -self.movement.rotation_velocity() * CAMERA_ROTATION_SPEED;
        if yaw != 0.0 {
            let offset = self.target - self.position;
            self.target = self.position + Quat::from_rotation_y(yaw) * offset;
        }
    }

    pub fn view_projection(&self, aspect: f32) -> Mat4 {
        let proj = Mat4::perspective_rh(self.fovy, aspect, self.znear, self.zfar);
        let view = Mat4::look_at_rh(self.position, self.target, Vec3::Y);
        proj * view
    }

    pub fn process_keyboard(&mut self, event: &KeyEvent) {
        let is_pressed = event.state.is_pressed();
        if let PhysicalKey::Code(keycode) = event.physical_key {
            match keycode {
                KeyCode::KeyW => self.movement.forward = is_pressed,
                KeyCode::KeyS => self.movement.backward = is_pressed,
                KeyCode::KeyA => self.movement.left = is_pressed,
                KeyCode::KeyD => self.movement.right = is_pressed,
                KeyCode::Space => self.movement.up = is_pressed,
                KeyCode::ShiftLeft => self.movement.down = is_pressed,
                KeyCode::KeyQ => self.movement.rotate_left = is_pressed,
                KeyCode::KeyE => self.movement.rotate_right = is_pressed,
                _ => {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forward_points_at_target() {
        let camera = Camera::new(CameraConfig::default());
        assert!((camera.forward() - Vec3::NEG_Z).length() < 1e-6);
    }

    #[test]
    fn translation_preserves_view_direction() {
        let mut camera = Camera::new(CameraConfig::default());
        let before = camera.forward();

        camera.movement.forward = true;
        camera.update();

        assert!((camera.forward() - before).length() < 1e-6);
        assert!(camera.position.z < 100.0);
    }

    #[test]
    fn yaw_keeps_target_distance() {
        let mut camera = Camera::new(CameraConfig::default());
        let dist = (camera.target - camera.position).length();

        camera.movement.rotate_right = true;
        camera.update();

        let after = (camera.target - camera.position).length();
        assert!((after - dist).abs() < 1e-4);
    }
}
