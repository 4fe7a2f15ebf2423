// Host-side tests for scene composition.

use glam::{Mat4, Vec3};
use wheel_core::*;

fn closed_transform() -> WheelTransform {
    WheelTransform {
        pos_x: POS_X_CLOSED,
        pos_z: POS_Z_CLOSED,
        rot_y: ROT_Y_CLOSED,
        rot_x: 0.0,
    }
}

#[test]
fn composes_one_stripe_per_palette_color_per_slot() {
    let mut composer = SceneComposer::new(&ViewerConfig::default());
    let scene = composer.compose(0, closed_transform(), 16.0 / 9.0);
    assert_eq!(scene.screens.len(), NUM * PALETTE_STRIPES);
    assert_eq!(scene.reflections.len(), NUM * PALETTE_STRIPES);
    assert_eq!(scene.model.len(), 6);
}

#[test]
fn screen_opacity_follows_layout() {
    let mut composer = SceneComposer::new(&ViewerConfig::default());
    let idx = 5;
    let scene = composer.compose(idx, closed_transform(), 1.0);
    let mut expected: Vec<f32> = layout(idx)
        .iter()
        .flat_map(|s| std::iter::repeat(s.opacity).take(PALETTE_STRIPES))
        .collect();
    let mut got: Vec<f32> = scene.screens.iter().map(|q| q.color[3]).collect();
    expected.sort_by(f32::total_cmp);
    got.sort_by(f32::total_cmp);
    assert_eq!(got, expected);

    let mirrored_max = scene
        .reflections
        .iter()
        .map(|q| q.color[3])
        .fold(0.0_f32, f32::max);
    assert!((mirrored_max - FLOOR_MIRROR).abs() < 1e-6);
}

#[test]
fn screens_are_sorted_back_to_front() {
    let mut composer = SceneComposer::new(&ViewerConfig::default());
    let scene = composer.compose(3, closed_transform(), 1.5);
    let view = scene.camera.view_matrix();
    let depths: Vec<f32> = scene
        .screens
        .iter()
        .map(|q| {
            let c = Mat4::from_cols_array_2d(&q.model).transform_point3(Vec3::ZERO);
            view.transform_point3(c).z
        })
        .collect();
    for pair in depths.windows(2) {
        assert!(pair[0] <= pair[1]);
    }
}

#[test]
fn reflection_mirrors_about_floor_plane() {
    let m = reflect_y(-2.0);
    let p = m.transform_point3(Vec3::new(1.0, 0.0, 3.0));
    assert!((p - Vec3::new(1.0, -4.0, 3.0)).length() < 1e-5);
    let on_plane = m.transform_point3(Vec3::new(5.0, -2.0, 0.0));
    assert!((on_plane - Vec3::new(5.0, -2.0, 0.0)).length() < 1e-5);
}

#[test]
fn mobile_zoom_widens_the_view() {
    let desktop = Camera::new(1.0, CAMERA_ZOOM_DESKTOP);
    let mobile = Camera::new(1.0, CAMERA_ZOOM_MOBILE);
    assert!(mobile.effective_fovy() > desktop.effective_fovy());
    assert!((mobile.effective_fovy() - CAMERA_FOV_DEG.to_radians()).abs() < 1e-5);
}

#[test]
fn wheel_matrix_applies_group_translation() {
    let t = WheelTransform {
        pos_x: 2.0,
        pos_z: -4.0,
        rot_y: 0.0,
        rot_x: 0.0,
    };
    let origin = wheel_matrix(t).transform_point3(Vec3::ZERO);
    assert!((origin - Vec3::new(2.0, 0.0, -4.0)).length() < 1e-6);
}

#[test]
fn palettes_wrap_and_convert_to_linear() {
    assert_eq!(palette(MAX_INDEX + 1), palette(1));
    assert_eq!(palette(3).id, 3);
    assert_eq!(hex_to_srgb(0xff8000), [1.0, 128.0 / 255.0, 0.0]);
    let lin = hex_to_linear(0xffffff);
    assert!(lin.iter().all(|c| (c - 1.0).abs() < 1e-5));
    assert_eq!(hex_to_linear(0x000000), [0.0, 0.0, 0.0]);
    for (i, a) in PALETTES.iter().enumerate() {
        for (j, b) in PALETTES.iter().enumerate() {
            if i != j {
                assert_ne!(a, b, "palettes {i} and {j} are identical");
            }
        }
    }
}
