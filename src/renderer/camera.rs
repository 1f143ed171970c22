//! Orbiting demo camera
//!
//! The eye circles the origin about +Y and the objects' plane turns with it,
//! so the bounce region stays facing the viewer.

use glam::{Mat4, Vec2, Vec3};

use crate::settings::CameraConfig;
use crate::sim::BoundsProjector;
use crate::{plane_to_world, rotate_about_y};

/// Camera snapshot for one frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitCamera {
    /// Orbit angle about +Y (radians)
    pub angle: f32,
    pub eye: Vec3,
    pub view: Mat4,
    pub projection: Mat4,
    pub view_proj: Mat4,
}

impl OrbitCamera {
    /// Camera at `time` seconds into the run
    pub fn at_time(config: &CameraConfig, time: f32) -> Self {
        let angle = time * config.rotation_speed;
        let eye = rotate_about_y(Vec3::from(config.eye), angle);
        let view = Mat4::look_at_rh(eye, Vec3::ZERO, Vec3::Y);
        let projection = Mat4::perspective_rh_gl(config.fov, config.aspect, config.near, config.far);
        Self {
            angle,
            eye,
            view,
            projection,
            view_proj: projection * view,
        }
    }

    /// Plane position in world space for this frame
    #[inline]
    pub fn world_position(&self, position: Vec2) -> Vec3 {
        plane_to_world(position, self.angle)
    }

    /// Inverse view-projection for skybox ray lookups
    pub fn skybox_view_proj_inverse(&self) -> Mat4 {
        self.view_proj.inverse()
    }
}

/// Normalized device `xy` of the object's origin
impl BoundsProjector for OrbitCamera {
    fn project(&self, position: Vec2) -> Vec2 {
        self.view_proj
            .project_point3(self.world_position(position))
            .truncate()
    }
}
