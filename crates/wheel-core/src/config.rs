//! Runtime viewer configuration derived from the host environment.

use crate::constants::{BUCKET_SIZE, CAMERA_ZOOM_DESKTOP, CAMERA_ZOOM_MOBILE};
use crate::error::WheelError;
use crate::share::parse_share_fragment;
use crate::spring::SpringConfig;

const MOBILE_MARKERS: [&str; 4] = ["iphone", "ipad", "ipod", "android"];

#[inline]
pub fn is_mobile_user_agent(user_agent: &str) -> bool {
    let ua = user_agent.to_ascii_lowercase();
    MOBILE_MARKERS.iter().any(|m| ua.contains(m))
}

#[derive(Clone, Debug, PartialEq)]
pub struct ViewerConfig {
    pub mobile: bool,
    /// Touch drags step the wheel; only enabled on mobile.
    pub drag_enabled: bool,
    pub camera_zoom: f32,
    pub bucket_size: f32,
    pub spring: SpringConfig,
    pub initial_index: i64,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            mobile: false,
            drag_enabled: false,
            camera_zoom: CAMERA_ZOOM_DESKTOP,
            bucket_size: BUCKET_SIZE,
            spring: SpringConfig::default(),
            initial_index: 0,
        }
    }
}

impl ViewerConfig {
    pub fn for_user_agent(user_agent: &str) -> Self {
        let mobile = is_mobile_user_agent(user_agent);
        Self {
            mobile,
            drag_enabled: mobile,
            camera_zoom: if mobile {
                CAMERA_ZOOM_MOBILE
            } else {
                CAMERA_ZOOM_DESKTOP
            },
            ..Self::default()
        }
    }

    /// Restore the wheel index from a URL fragment; an empty fragment keeps 0
    /// and a malformed one is logged and ignored.
    pub fn with_fragment(mut self, fragment: &str) -> Self {
        if fragment.is_empty() || fragment == "#" {
            return self;
        }
        match parse_share_fragment(fragment) {
            Ok(index) => self.initial_index = index,
            Err(e) => log::warn!("[config] ignoring fragment: {}", e),
        }
        self
    }

    pub fn validate(&self) -> Result<(), WheelError> {
        if !(self.bucket_size.is_finite() && self.bucket_size > 0.0) {
            return Err(WheelError::InvalidBucketSize(self.bucket_size));
        }
        if !(self.camera_zoom.is_finite() && self.camera_zoom > 0.0) {
            return Err(WheelError::InvalidZoom(self.camera_zoom));
        }
        self.spring.validate()
    }
}
