use glam::Vec3;

// Player dimensions and physics
pub const STAND_HEIGHT: f32 = 100.0;
pub const CROUCH_HEIGHT: f32 = 50.0;
pub const COLLISION_RADIUS: f32 = 20.0;
pub const MOVE_SPEED: f32 = 5.0;
pub const GRAVITY: f32 = -0.8;
pub const JUMP_FORCE: f32 = 15.0;
pub const MAX_AIR_JUMPS: u32 = 1;
pub const CROUCH_JUMP_SCALE: f32 = 0.6;
pub const WALL_JUMP_SCALE: f32 = 0.9;

// Integration is normalized to a 60 FPS step so tuning numbers read as
// per-frame quantities regardless of the real frame rate.
pub const FRAME_RATE_BASE: f32 = 60.0;
pub const MAX_FRAME_DT: f32 = 0.1; // clamp a stalled frame to this
pub const HEIGHT_SMOOTHING: f32 = 0.2; // crouch/stand height convergence per base frame
pub const COYOTE_TIME: f32 = 0.1;

// Wall running
pub const WALL_RUN_MAX_TIME: f32 = 1.5;
pub const WALL_PROBE_DISTANCE: f32 = 15.0; // beyond the collision radius
pub const WALL_PROBE_RADIUS: f32 = 5.0;
pub const WALL_RUN_FALL_SPEED: f32 = -2.0;
pub const WALL_RUN_SPEED_SCALE: f32 = 1.2;

// Collision and floor queries
pub const STANDING_MARGIN: f32 = 10.0; // lets the player stand on an edge without jitter
pub const CEILING_MARGIN: f32 = 5.0;
pub const NO_FLOOR_Y: f32 = -1000.0; // sentinel: nothing below, free fall
pub const CHECKPOINT_BAND: f32 = 150.0; // vertical tolerance above a checkpoint top
pub const HAZARD_BAND: f32 = 150.0;
pub const GOAL_BAND: f32 = 50.0;

// Death and respawn
pub const DEATH_Y: f32 = -100.0;
pub const OFF_AREA_FALL_TOLERANCE: f32 = 10.0;
pub const SPAWN: Vec3 = Vec3::new(-350.0, 100.0, -320.0);
pub const CHECKPOINT_POPUP_TIME: f32 = 2.0;

// Camera and look
pub const MOUSE_SENSITIVITY: f32 = 0.003;
pub const FOV_DEGREES: f32 = 60.0;
pub const RENDER_DISTANCE: f32 = 3000.0;
pub const NEAR_PLANE: f32 = 0.1;
pub const CAMERA_DISTANCE: f32 = 150.0;
pub const CAMERA_DISTANCE_MAX: f32 = 400.0;
pub const CAMERA_SCROLL_SCALE: f32 = 10.0;
pub const FIRST_PERSON_THRESHOLD: f32 = 20.0;
pub const EYE_HEIGHT_FRACTION: f32 = 0.4;
pub const CENTER_HEIGHT_FRACTION: f32 = 0.5;
pub const PITCH_LIMIT: f32 = std::f32::consts::FRAC_PI_2 - 0.01;

// Play area
pub const AREA_CELLS: u32 = 40;
pub const AREA_CELL_SIZE: f32 = 20.0;

// Projectiles
pub const ARROW_LENGTH: f32 = 60.0;
pub const ARROW_RADIUS: f32 = 8.0;
pub const ARROW_DESPAWN_Z: f32 = -450.0;
pub const CROUCH_HITBOX_SCALE: f32 = 0.5;
pub const MIN_FIRE_INTERVAL: f32 = 0.3;
pub const LAUNCHER_Z: f32 = 100.0;
