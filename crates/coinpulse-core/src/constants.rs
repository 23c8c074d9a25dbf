use glam::Vec3;

// Shared visual tuning constants used by the web frontend.
// Values are visually tuned and may change between revisions.

// Pointer / scroll surface
pub const HERO_ELEMENT_ID: &str = "vault-hero";
pub const HERO_TRACK_ELEMENT_ID: &str = "vault-hero-track";

// Camera
pub const CAMERA_FOV_DEG: f32 = 50.0;
pub const CAMERA_BASE_Z: f32 = 8.0; // eye distance on landscape viewports
pub const CAMERA_PORTRAIT_SCALE: f32 = 4.0; // extra depth per unit of 1/aspect when portrait
pub const CAMERA_PARALLAX_X: f32 = 1.5;
pub const CAMERA_PARALLAX_Y: f32 = 1.0;
pub const CAMERA_SMOOTHING: f32 = 0.05; // fraction of remaining distance per frame

// Door timeline
pub const DOOR_SMOOTHING: f32 = 0.1;
pub const DOOR_CLOSE_END: f32 = 0.3; // progress at which the doors are fully shut
pub const DOOR_OPEN_WIDTH: f32 = 1.0; // world units each door travels when fully open
pub const VAULT_EXIT_LIFT: f32 = 7.0; // world units the vault rises by the end of the track

// Vault asset layout
pub const DOOR_LEFT_NAME: &str = "door_left";
pub const DOOR_RIGHT_NAME: &str = "door_right";
pub const DOOR_SIZE: Vec3 = Vec3::new(1.0, 4.0, 0.5);
pub const DOOR_COLOR: [f32; 3] = [0.106, 0.122, 0.165]; // #1b1f2a

// Backdrop grid
pub const GRID_DEPTH_Z: f32 = -25.0;
pub const GRID_OVERLAP_PX: f32 = 64.0; // must match the hero's fog overlap in CSS
pub const GRID_MIN_WIDTH: f32 = 100.0;

// Flashlight defaults
pub const FLASHLIGHT_RADIUS: f32 = 300.0;
pub const FLASHLIGHT_OPACITY: f32 = 0.9;
pub const FLASHLIGHT_SHARPNESS: f32 = 0.5;

// Reveal-on-scroll trigger line as a fraction of viewport height
pub const REVEAL_TRIGGER: f32 = 0.85;

// Post-processing defaults
pub const BLOOM_STRENGTH: f32 = 0.9;
pub const BLOOM_THRESHOLD: f32 = 0.6;

// Scene lighting: ambient, cyan point, magenta rim, white directional
pub const LIGHT_INTENSITIES: [f32; 4] = [0.6, 3.0, 1.0, 1.0];
pub const SCENE_CLEAR_COLOR: [f64; 4] = [0.0, 0.0, 0.0, 1.0];
pub const EXPOSURE: f32 = 1.0;
