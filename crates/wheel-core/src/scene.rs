//! Pure scene description consumed by the renderer.
//!
//! The composer reads the slot layout only for palette and opacity, and the
//! animated [`WheelTransform`] for the group placement.

use crate::animator::WheelTransform;
use crate::config::ViewerConfig;
use crate::constants::*;
use crate::layout::{LayoutCache, SlotAssignment};
use crate::palettes::{hex_to_linear, palette};
use glam::{EulerRot, Mat4, Vec3};
use smallvec::SmallVec;

/// Simple right-handed perspective camera looking down -Z, with a
/// three.js-style zoom that narrows the field of view.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub forward: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub zoom: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    pub fn new(aspect: f32, zoom: f32) -> Self {
        Self {
            eye: CAMERA_POSITION,
            forward: Vec3::NEG_Z,
            up: Vec3::Y,
            aspect,
            fovy_radians: CAMERA_FOV_DEG.to_radians(),
            zoom,
            znear: CAMERA_NEAR,
            zfar: CAMERA_FAR,
        }
    }

    pub fn effective_fovy(&self) -> f32 {
        2.0 * ((self.fovy_radians * 0.5).tan() / self.zoom.max(1e-3)).atan()
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.effective_fovy(), self.aspect, self.znear, self.zfar)
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_to_rh(self.eye, self.forward, self.up)
    }

    pub fn view_proj(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}

/// One colored quad: a unit square in the XY plane placed by `model`.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct QuadInstance {
    pub model: [[f32; 4]; 4],
    /// Linear RGB plus opacity.
    pub color: [f32; 4],
}

pub type QuadList = SmallVec<[QuadInstance; NUM * PALETTE_STRIPES]>;

#[derive(Clone, Debug)]
pub struct Floor {
    pub model: Mat4,
    pub color: [f32; 3],
    pub mirror: f32,
    pub mix_strength: f32,
    pub normal_scale: f32,
    /// Plane height in scene-root space, used to mirror the wheel.
    pub height: f32,
}

#[derive(Clone, Debug)]
pub struct SpotLight {
    pub position: Vec3,
    pub intensity: f32,
    pub angle: f32,
    pub distance: f32,
}

#[derive(Clone, Debug)]
pub struct Scene {
    pub camera: Camera,
    pub background: [f32; 3],
    pub fog_near: f32,
    pub fog_far: f32,
    pub ambient_intensity: f32,
    pub spot: SpotLight,
    pub floor: Floor,
    /// Wheel screens sorted back to front.
    pub screens: QuadList,
    /// Screens mirrored below the floor plane.
    pub reflections: QuadList,
    /// Stand-in box for the centerpiece model.
    pub model: QuadList,
}

pub struct SceneComposer {
    cache: LayoutCache,
    zoom: f32,
}

impl SceneComposer {
    pub fn new(config: &ViewerConfig) -> Self {
        Self {
            cache: LayoutCache::new(),
            zoom: config.camera_zoom,
        }
    }

    pub fn compose(&mut self, index: i64, transform: WheelTransform, aspect: f32) -> Scene {
        let camera = Camera::new(aspect.max(1e-3), self.zoom);
        let root = scene_root();
        let floor = floor_desc(&root);
        let wheel = root * wheel_matrix(transform);
        let mirror = root * reflect_y(floor.height) * wheel_matrix(transform);

        let slots = self.cache.get(index);
        let mut screens = QuadList::new();
        let mut reflections = QuadList::new();
        for slot in slots.iter() {
            push_screen(&mut screens, wheel, slot, 1.0);
            push_screen(&mut reflections, mirror, slot, floor.mirror);
        }
        sort_back_to_front(&mut screens, &camera);
        sort_back_to_front(&mut reflections, &camera);

        Scene {
            camera,
            background: hex_to_linear(BACKGROUND_COLOR),
            fog_near: FOG_NEAR,
            fog_far: FOG_FAR,
            ambient_intensity: AMBIENT_INTENSITY,
            spot: SpotLight {
                position: SPOT_POSITION,
                intensity: SPOT_INTENSITY,
                angle: SPOT_ANGLE,
                distance: SPOT_DISTANCE,
            },
            floor,
            screens,
            reflections,
            model: model_box(&root),
        }
    }
}

#[inline]
pub fn scene_root() -> Mat4 {
    Mat4::from_euler(
        EulerRot::XYZ,
        SCENE_ROTATION.x,
        SCENE_ROTATION.y,
        SCENE_ROTATION.z,
    )
}

/// Outer group (position + Y rotation) then the inner X spin.
#[inline]
pub fn wheel_matrix(t: WheelTransform) -> Mat4 {
    Mat4::from_translation(Vec3::new(t.pos_x, 0.0, t.pos_z))
        * Mat4::from_rotation_y(t.rot_y)
        * Mat4::from_rotation_x(t.rot_x)
}

#[inline]
pub fn reflect_y(height: f32) -> Mat4 {
    Mat4::from_translation(Vec3::new(0.0, height, 0.0))
        * Mat4::from_scale(Vec3::new(1.0, -1.0, 1.0))
        * Mat4::from_translation(Vec3::new(0.0, -height, 0.0))
}

fn floor_desc(root: &Mat4) -> Floor {
    let model = *root
        * Mat4::from_translation(FLOOR_POSITION)
        * Mat4::from_rotation_x(-std::f32::consts::FRAC_PI_2)
        * Mat4::from_scale(Vec3::new(FLOOR_SIZE, FLOOR_SIZE, 1.0));
    Floor {
        model,
        color: hex_to_linear(FLOOR_COLOR),
        mirror: FLOOR_MIRROR,
        mix_strength: FLOOR_MIX_STRENGTH,
        normal_scale: FLOOR_NORMAL_SCALE,
        height: FLOOR_POSITION.y,
    }
}

fn push_screen(out: &mut QuadList, group: Mat4, slot: &SlotAssignment, alpha_scale: f32) {
    let screen = group
        * Mat4::from_translation(slot.position)
        * Mat4::from_rotation_x(slot.rotation_x);
    let colors = palette(slot.palette_id).linear();
    let stripe_w = SCREEN_WIDTH / PALETTE_STRIPES as f32;
    for (j, rgb) in colors.iter().enumerate() {
        let x = -SCREEN_WIDTH * 0.5 + (j as f32 + 0.5) * stripe_w;
        let model = screen
            * Mat4::from_translation(Vec3::new(x, 0.0, 0.0))
            * Mat4::from_scale(Vec3::new(stripe_w, SCREEN_HEIGHT, 1.0));
        out.push(QuadInstance {
            model: model.to_cols_array_2d(),
            color: [rgb[0], rgb[1], rgb[2], slot.opacity * alpha_scale],
        });
    }
}

fn model_box(root: &Mat4) -> QuadList {
    let base = *root * Mat4::from_translation(MODEL_POSITION) * Mat4::from_scale(Vec3::splat(MODEL_SCALE));
    let half = 0.5;
    let faces = [
        Mat4::from_translation(Vec3::new(0.0, 0.0, half)),
        Mat4::from_translation(Vec3::new(0.0, 0.0, -half)) * Mat4::from_rotation_y(std::f32::consts::PI),
        Mat4::from_translation(Vec3::new(half, 0.0, 0.0)) * Mat4::from_rotation_y(std::f32::consts::FRAC_PI_2),
        Mat4::from_translation(Vec3::new(-half, 0.0, 0.0)) * Mat4::from_rotation_y(-std::f32::consts::FRAC_PI_2),
        Mat4::from_translation(Vec3::new(0.0, half, 0.0)) * Mat4::from_rotation_x(-std::f32::consts::FRAC_PI_2),
        Mat4::from_translation(Vec3::new(0.0, -half, 0.0)) * Mat4::from_rotation_x(std::f32::consts::FRAC_PI_2),
    ];
    let shade = hex_to_linear(0x2b2b2b);
    faces
        .iter()
        .map(|f| QuadInstance {
            model: (base * *f).to_cols_array_2d(),
            color: [shade[0], shade[1], shade[2], 1.0],
        })
        .collect()
}

fn sort_back_to_front(quads: &mut QuadList, camera: &Camera) {
    let view = camera.view_matrix();
    let depth = |q: &QuadInstance| {
        let center = Mat4::from_cols_array_2d(&q.model).transform_point3(Vec3::ZERO);
        view.transform_point3(center).z
    };
    quads.sort_by(|a, b| depth(a).total_cmp(&depth(b)));
}
