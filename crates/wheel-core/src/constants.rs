use glam::Vec3;

// Shared layout/animation tuning constants used by the core and the web frontend.

// Wheel geometry
pub const NUM: usize = 7; // visible slots on the wheel
pub const MAX_INDEX: usize = 12; // distinct palettes
pub const WHEEL_RADIUS: f32 = 2.0; // slot circle radius (world units)

// Gesture quantization
pub const BUCKET_SIZE: f32 = 50.0; // pixels of offset per wheel step

// Wheel group placement; each pair is (open, closed)
pub const ROT_Y_OPEN: f32 = std::f32::consts::FRAC_PI_4;
pub const ROT_Y_CLOSED: f32 = std::f32::consts::FRAC_PI_2;
pub const POS_X_OPEN: f32 = 2.0;
pub const POS_X_CLOSED: f32 = -3.0;
pub const POS_Z_OPEN: f32 = -4.0;
pub const POS_Z_CLOSED: f32 = -1.9;

// Spring defaults (tension/friction/mass)
pub const SPRING_TENSION: f32 = 170.0;
pub const SPRING_FRICTION: f32 = 26.0;
pub const SPRING_MASS: f32 = 1.0;
pub const SPRING_PRECISION: f32 = 0.001;
pub const SPRING_SUBSTEP_SEC: f32 = 0.001;
pub const SPRING_MAX_DT_SEC: f32 = 0.064; // clamp after tab switches

// Screens
pub const SCREEN_WIDTH: f32 = 1.6;
pub const SCREEN_HEIGHT: f32 = 0.9;
pub const PALETTE_STRIPES: usize = 5;

// Scene root transform and model placement
pub const SCENE_ROTATION: Vec3 = Vec3::new(std::f32::consts::PI / 8.0, -std::f32::consts::PI / 3.2, 0.0);
pub const MODEL_POSITION: Vec3 = Vec3::new(-2.5, -2.5, 0.0);
pub const MODEL_SCALE: f32 = 1.8;

// Camera
pub const CAMERA_FOV_DEG: f32 = 20.0;
pub const CAMERA_FAR: f32 = 100.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_POSITION: Vec3 = Vec3::new(0.0, -10.0, 50.0);
pub const CAMERA_ZOOM_DESKTOP: f32 = 1.5;
pub const CAMERA_ZOOM_MOBILE: f32 = 1.0;

// Floor
pub const FLOOR_SIZE: f32 = 30.0;
pub const FLOOR_POSITION: Vec3 = Vec3::new(3.0, -2.53, -1.0);
pub const FLOOR_COLOR: u32 = 0x333333;
pub const FLOOR_MIRROR: f32 = 0.5;
pub const FLOOR_MIX_STRENGTH: f32 = 5.0;
pub const FLOOR_NORMAL_SCALE: f32 = 0.1;
pub const FLOOR_ROUGHNESS_URL: &str = "/roughness_floor.jpeg";
pub const FLOOR_NORMAL_URL: &str = "/normal_floor.jpeg";

// Background and fog
pub const BACKGROUND_COLOR: u32 = 0x101010;
pub const FOG_NEAR: f32 = 50.0;
pub const FOG_FAR: f32 = 60.0;

// Lights
pub const AMBIENT_INTENSITY: f32 = 4.0;
pub const SPOT_POSITION: Vec3 = Vec3::new(10.0, 0.0, 10.0);
pub const SPOT_INTENSITY: f32 = 2.0;
pub const SPOT_ANGLE: f32 = 0.3;
pub const SPOT_DISTANCE: f32 = 30.0;

// Share link
pub const COPIED_MESSAGE_MS: i32 = 2000;
