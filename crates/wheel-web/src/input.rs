use web_sys as web;

const DOM_DELTA_LINE: u32 = 1;
const DOM_DELTA_PAGE: u32 = 2;

/// Running wheel offset in css pixels, the `y` fed to the gesture mapper.
#[derive(Default, Clone, Copy, Debug)]
pub struct ScrollOffset {
    pub y: f32,
}

impl ScrollOffset {
    #[inline]
    pub fn add(&mut self, delta_px: f32) -> f32 {
        if delta_px.is_finite() {
            self.y += delta_px;
        }
        self.y
    }
}

/// Press state for telling clicks from drags.
#[derive(Default, Clone, Copy, Debug)]
pub struct PressState {
    pub active: bool,
    pub start_x: f32,
    pub start_y: f32,
    pub moved: bool,
}

impl PressState {
    #[inline]
    pub fn begin(&mut self, x: f32, y: f32) {
        *self = Self {
            active: true,
            start_x: x,
            start_y: y,
            moved: false,
        };
    }

    #[inline]
    pub fn track(&mut self, x: f32, y: f32, slop_px: f32) {
        if self.active && !self.moved {
            let dx = x - self.start_x;
            let dy = y - self.start_y;
            self.moved = dx * dx + dy * dy > slop_px * slop_px;
        }
    }

    /// Ends the press; true when it never left the slop radius.
    #[inline]
    pub fn end(&mut self) -> bool {
        let click = self.active && !self.moved;
        self.active = false;
        click
    }
}

#[inline]
pub fn normalize_wheel_delta(delta: f64, delta_mode: u32, line_px: f32, page_px: f32) -> f32 {
    let d = delta as f32;
    match delta_mode {
        DOM_DELTA_LINE => d * line_px,
        DOM_DELTA_PAGE => d * page_px,
        _ => d,
    }
}

#[inline]
pub fn wheel_delta_px(ev: &web::WheelEvent, line_px: f32, page_px: f32) -> f32 {
    normalize_wheel_delta(ev.delta_y(), ev.delta_mode(), line_px, page_px)
}

#[inline]
pub fn pointer_client_xy(ev: &web::PointerEvent) -> [f32; 2] {
    [ev.client_x() as f32, ev.client_y() as f32]
}
