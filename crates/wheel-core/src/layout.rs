//! Pure projection of the rotation index onto the fixed wheel slots.
//!
//! Slot positions never move. Only the palette id and opacity assigned to each
//! slot depend on the index: the unrotated window of palettes centered on the
//! index is rotated right by `index mod NUM`, which keeps the highlighted
//! slot facing the same way while the wheel group spins about X.

use crate::constants::{MAX_INDEX, NUM, WHEEL_RADIUS};
use fnv::FnvHashMap;
use glam::Vec3;
use std::f32::consts::TAU;

/// Slot that carries peak opacity before rotation.
pub const CENTER_SLOT: usize = NUM / 2;

/// `layout(i) == layout(i + LAYOUT_PERIOD)` for every index.
pub const LAYOUT_PERIOD: usize = lcm(NUM, MAX_INDEX);

const fn gcd(a: usize, b: usize) -> usize {
    if b == 0 {
        a
    } else {
        gcd(b, a % b)
    }
}

const fn lcm(a: usize, b: usize) -> usize {
    a / gcd(a, b) * b
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SlotAssignment {
    pub position: Vec3,
    /// Tilt that keeps the screen tangent to the wheel.
    pub rotation_x: f32,
    pub palette_id: usize,
    pub opacity: f32,
}

pub type SlotLayout = [SlotAssignment; NUM];

#[inline]
pub fn ease_in_out_expo(x: f32) -> f32 {
    if x <= 0.0 {
        0.0
    } else if x >= 1.0 {
        1.0
    } else if x < 0.5 {
        (20.0 * x - 10.0).exp2() / 2.0
    } else {
        (2.0 - (-20.0 * x + 10.0).exp2()) / 2.0
    }
}

#[inline]
pub fn rotation_offset(index: i64) -> usize {
    index.rem_euclid(NUM as i64) as usize
}

/// Palette shown in the highlighted slot.
#[inline]
pub fn centered_palette(index: i64) -> usize {
    index.rem_euclid(MAX_INDEX as i64) as usize
}

#[inline]
pub fn slot_angle(slot: usize) -> f32 {
    TAU * slot as f32 / NUM as f32
}

#[inline]
pub fn slot_position(slot: usize) -> Vec3 {
    let a = slot_angle(slot);
    Vec3::new(0.0, -WHEEL_RADIUS * a.sin(), -WHEEL_RADIUS * a.cos())
}

/// Contiguous window of palette ids, before rotation, wrapping over `MAX_INDEX`.
pub fn unrotated_colors(index: i64) -> [usize; NUM] {
    let base = centered_palette(index);
    let back = CENTER_SLOT % MAX_INDEX;
    std::array::from_fn(|i| (base + MAX_INDEX - back + i) % MAX_INDEX)
}

/// Symmetric opacity falloff, peak 1.0 at [`CENTER_SLOT`].
pub fn unrotated_alpha() -> [f32; NUM] {
    std::array::from_fn(|i| {
        let d = (i as f32 - CENTER_SLOT as f32).abs();
        ease_in_out_expo(1.0 - 2.0 * d / NUM as f32)
    })
}

pub fn layout(index: i64) -> SlotLayout {
    let shift = rotation_offset(index);
    let mut colors = unrotated_colors(index);
    let mut alpha = unrotated_alpha();
    colors.rotate_right(shift);
    alpha.rotate_right(shift);
    std::array::from_fn(|i| SlotAssignment {
        position: slot_position(i),
        rotation_x: -slot_angle(i),
        palette_id: colors[i],
        opacity: alpha[i],
    })
}

/// Slot currently carrying the peak opacity.
#[inline]
pub fn highlighted_slot(index: i64) -> usize {
    (CENTER_SLOT + rotation_offset(index)) % NUM
}

/// Memoizes [`layout`] over one period of the index.
#[derive(Default)]
pub struct LayoutCache {
    entries: FnvHashMap<usize, SlotLayout>,
}

impl LayoutCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&mut self, index: i64) -> &SlotLayout {
        let key = index.rem_euclid(LAYOUT_PERIOD as i64) as usize;
        self.entries.entry(key).or_insert_with(|| layout(key as i64))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
