//! Fixed palette table shown on the wheel screens.

use crate::constants::{MAX_INDEX, PALETTE_STRIPES};

/// Base sRGB palettes (0xRRGGBB). One row per palette id; update here only.
pub const PALETTES: [[u32; PALETTE_STRIPES]; MAX_INDEX] = [
    [0x264653, 0x2a9d8f, 0xe9c46a, 0xf4a261, 0xe76f51],
    [0x003049, 0xd62828, 0xf77f00, 0xfcbf49, 0xeae2b7],
    [0x0b132b, 0x1c2541, 0x3a506b, 0x5bc0be, 0x6fffe9],
    [0xcdb4db, 0xffc8dd, 0xffafcc, 0xbde0fe, 0xa2d2ff],
    [0x606c38, 0x283618, 0xfefae0, 0xdda15e, 0xbc6c25],
    [0x8ecae6, 0x219ebc, 0x023047, 0xffb703, 0xfb8500],
    [0xef476f, 0xffd166, 0x06d6a0, 0x118ab2, 0x073b4c],
    [0x000000, 0x14213d, 0xfca311, 0xe5e5e5, 0xffffff],
    [0x3d5a80, 0x98c1d9, 0xe0fbfc, 0xee6c4d, 0x293241],
    [0x5f0f40, 0x9a031e, 0xfb8b24, 0xe36414, 0x0f4c5c],
    [0xf72585, 0x7209b7, 0x3a0ca3, 0x4361ee, 0x4cc9f0],
    [0xd8e2dc, 0xffe5d9, 0xffcad4, 0xf4acb7, 0x9d8189],
];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Palette {
    pub id: usize,
    pub colors: [u32; PALETTE_STRIPES],
}

impl Palette {
    /// Stripe colors in linear RGB, ready for the GPU.
    pub fn linear(&self) -> [[f32; 3]; PALETTE_STRIPES] {
        self.colors.map(hex_to_linear)
    }
}

/// Palette for an arbitrary id, wrapping around the table.
#[inline]
pub fn palette(id: usize) -> Palette {
    let id = id % MAX_INDEX;
    Palette {
        id,
        colors: PALETTES[id],
    }
}

#[inline]
pub fn hex_to_srgb(hex: u32) -> [f32; 3] {
    [
        ((hex >> 16) & 0xff) as f32 / 255.0,
        ((hex >> 8) & 0xff) as f32 / 255.0,
        (hex & 0xff) as f32 / 255.0,
    ]
}

#[inline]
pub fn srgb_to_linear(c: f32) -> f32 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

#[inline]
pub fn hex_to_linear(hex: u32) -> [f32; 3] {
    hex_to_srgb(hex).map(srgb_to_linear)
}
