//! Per-object draw parameters

use bytemuck::{Pod, Zeroable};
use glam::Mat4;

use super::camera::OrbitCamera;
use crate::sim::MovableObject;

/// Everything a backend needs to draw one object, laid out for upload
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct ObjectInstance {
    pub model: [[f32; 4]; 4],
    pub model_view_projection: [[f32; 4]; 4],
    /// Surface tiling (`textureSize` in the shader)
    pub texture_repeat: f32,
    /// Rendered scale (`objectSize` in the shader)
    pub object_scale: f32,
    pub texture_index: u32,
    pub _pad: u32,
}

impl ObjectInstance {
    pub fn from_object(object: &MovableObject, camera: &OrbitCamera, size_factor: f32) -> Self {
        let model = model_matrix(object, camera);
        Self {
            model: model.to_cols_array_2d(),
            model_view_projection: (camera.view_proj * model).to_cols_array_2d(),
            texture_repeat: object.texture_repeat,
            object_scale: object.render_scale(size_factor),
            texture_index: object.texture_index as u32,
            _pad: 0,
        }
    }

    /// Raw bytes of a batch, ready for a buffer write
    pub fn as_bytes(instances: &[ObjectInstance]) -> &[u8] {
        bytemuck::cast_slice(instances)
    }
}

/// Translate to the orbiting world position, then spin about X and Z
pub fn model_matrix(object: &MovableObject, camera: &OrbitCamera) -> Mat4 {
    Mat4::from_translation(camera.world_position(object.position))
        * Mat4::from_rotation_x(object.rotation.x)
        * Mat4::from_rotation_z(object.rotation.y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::{CameraConfig, SeedObject};
    use glam::{Vec2, Vec3};

    #[test]
    fn test_instance_fields() {
        let mut obj = MovableObject::from_seed(1, &SeedObject::default());
        obj.position = Vec2::new(0.5, -0.25);
        obj.texture_repeat = 3.0;
        let cam = OrbitCamera::at_time(&CameraConfig::default(), 0.0);

        let inst = ObjectInstance::from_object(&obj, &cam, 0.1);
        assert!((inst.object_scale - 0.4).abs() < 1e-6);
        assert_eq!(inst.texture_repeat, 3.0);
        assert_eq!(inst.texture_index, 4);

        let model = Mat4::from_cols_array_2d(&inst.model);
        let origin = model.transform_point3(Vec3::ZERO);
        assert!((origin - Vec3::new(0.5, -0.25, 0.0)).length() < 1e-6);
    }

    #[test]
    fn test_instance_layout() {
        assert_eq!(std::mem::size_of::<ObjectInstance>(), 144);
        let cam = OrbitCamera::at_time(&CameraConfig::default(), 0.0);
        let obj = MovableObject::from_seed(1, &SeedObject::default());
        let batch = [ObjectInstance::from_object(&obj, &cam, 0.1); 3];
        assert_eq!(ObjectInstance::as_bytes(&batch).len(), 3 * 144);
    }

    #[test]
    fn test_mvp_origin_matches_bound() {
        use crate::sim::BoundsProjector;

        let mut obj = MovableObject::from_seed(1, &SeedObject::default());
        obj.position = Vec2::new(1.2, 0.7);
        obj.rotation = Vec2::new(0.3, 2.0);
        let cam = OrbitCamera::at_time(&CameraConfig::default(), 8.0);
        let inst = ObjectInstance::from_object(&obj, &cam, 0.1);

        let mvp = Mat4::from_cols_array_2d(&inst.model_view_projection);
        let ndc = mvp.project_point3(Vec3::ZERO).truncate();
        assert!((ndc - cam.project(obj.position)).length() < 1e-4);
    }
}
