// DOM hooks and browser input tuning for the web frontend.

// Element ids expected in index.html
pub const CANVAS_ID: &str = "app-canvas";
pub const SHARE_LINK_ID: &str = "share-link";
pub const COPIED_MESSAGE_ID: &str = "copied-message";

// WheelEvent.deltaMode scaling
pub const LINE_HEIGHT_PX: f32 = 16.0;

// Pointer travel (css px) under which a press/release counts as a click
pub const CLICK_SLOP_PX: f32 = 6.0;
