// Host-side tests for the palette layout projection.

use wheel_core::*;

fn colors(idx: i64) -> Vec<usize> {
    layout(idx).iter().map(|s| s.palette_id).collect()
}

fn alphas(idx: i64) -> Vec<f32> {
    layout(idx).iter().map(|s| s.opacity).collect()
}

/// Undo the rotation applied by `layout`.
fn unrotate<T: Clone>(v: &[T], idx: i64) -> Vec<T> {
    let mut out = v.to_vec();
    out.rotate_left(rotation_offset(idx));
    out
}

#[test]
fn unrotated_window_at_zero_wraps_below_zero() {
    assert_eq!(unrotated_colors(0), [9, 10, 11, 0, 1, 2, 3]);
    assert_eq!(colors(0), vec![9, 10, 11, 0, 1, 2, 3]);
}

#[test]
fn index_two_rotates_right_by_two() {
    assert_eq!(unrotated_colors(2), [11, 0, 1, 2, 3, 4, 5]);
    assert_eq!(colors(2), vec![4, 5, 11, 0, 1, 2, 3]);
}

#[test]
fn layout_always_has_num_slots_in_palette_range() {
    for idx in -200..200 {
        let l = layout(idx);
        assert_eq!(l.len(), NUM);
        for s in l.iter() {
            assert!(s.palette_id < MAX_INDEX);
            assert!((0.0..=1.0).contains(&s.opacity));
        }
    }
}

#[test]
fn unrotated_colors_form_contiguous_window() {
    for idx in [-1_000_003_i64, -25, -13, -7, -1, 0, 1, 6, 7, 11, 12, 99, 1_000_000_007] {
        let window = unrotate(&colors(idx), idx);
        for pair in window.windows(2) {
            assert_eq!((pair[0] + 1) % MAX_INDEX, pair[1], "idx {idx}: {window:?}");
        }
        assert_eq!(window[CENTER_SLOT], centered_palette(idx));
    }
}

#[test]
fn layout_is_deterministic() {
    for idx in [-9, 0, 3, 42] {
        assert_eq!(layout(idx), layout(idx));
    }
}

#[test]
fn unrotated_alpha_is_symmetric_with_single_peak() {
    let a = unrotated_alpha();
    for i in 0..NUM {
        assert!((a[i] - a[NUM - 1 - i]).abs() < 1e-6);
    }
    assert_eq!(a[CENTER_SLOT], 1.0);
    assert!(a[0] < 0.01 && a[NUM - 1] < 0.01);
    let peaks = a.iter().filter(|&&x| x == 1.0).count();
    assert_eq!(peaks, 1);
    for i in 0..CENTER_SLOT {
        assert!(a[i] < a[i + 1]);
    }
}

#[test]
fn highlighted_slot_carries_peak_and_centered_palette() {
    for idx in -30..30 {
        let l = layout(idx);
        let hi = highlighted_slot(idx);
        assert_eq!(l[hi].opacity, 1.0);
        assert_eq!(l[hi].palette_id, centered_palette(idx));
        let peaks = l.iter().filter(|s| s.opacity == 1.0).count();
        assert_eq!(peaks, 1, "idx {idx}");
    }
}

#[test]
fn adding_num_keeps_alpha_and_shifts_window() {
    for idx in [-8_i64, -1, 0, 5, 20] {
        assert_eq!(alphas(idx), alphas(idx + NUM as i64));
        let a = unrotate(&colors(idx), idx);
        let b = unrotate(&colors(idx + NUM as i64), idx + NUM as i64);
        let shifted: Vec<usize> = a.iter().map(|c| (c + NUM) % MAX_INDEX).collect();
        assert_eq!(b, shifted);
    }
}

#[test]
fn negative_indices_keep_highlight_facing_the_same_way() {
    // The X spin turns slot i by -2*pi*idx/NUM; the highlighted slot's
    // on-screen angle must not depend on idx.
    let facing = |idx: i64| (highlighted_slot(idx) as i64 - idx).rem_euclid(NUM as i64);
    for idx in -50..50 {
        assert_eq!(facing(idx), facing(0), "idx {idx}");
    }
}

#[test]
fn slot_positions_are_fixed_on_the_circle() {
    let a = layout(0);
    let b = layout(123);
    for i in 0..NUM {
        assert_eq!(a[i].position, b[i].position);
        assert!((a[i].position.length() - WHEEL_RADIUS).abs() < 1e-5);
        assert_eq!(a[i].position.x, 0.0);
    }
    assert!((slot_position(0) - glam::Vec3::new(0.0, 0.0, -WHEEL_RADIUS)).length() < 1e-6);
}

#[test]
fn ease_curve_endpoints_and_midpoint() {
    assert_eq!(ease_in_out_expo(0.0), 0.0);
    assert_eq!(ease_in_out_expo(1.0), 1.0);
    assert!((ease_in_out_expo(0.5) - 0.5).abs() < 1e-6);
    assert!(ease_in_out_expo(0.2) < 0.01);
    assert!(ease_in_out_expo(0.8) > 0.99);
}

#[test]
fn layout_cache_matches_direct_layout() {
    let mut cache = LayoutCache::new();
    assert!(cache.is_empty());
    for idx in [-100_i64, -1, 0, 1, 84, 85, 1000] {
        assert_eq!(*cache.get(idx), layout(idx));
    }
    // 0 and 84 share a key, as do 1 and 85.
    assert_eq!(LAYOUT_PERIOD, 84);
    assert_eq!(cache.len(), 5);
}
