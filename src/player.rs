//! Player locomotion: a frame-driven state machine over grounded, airborne,
//! coyote-window and wall-running states.
//!
//! `position.y` is head-relative: a player standing on a surface at height
//! `f` has `position.y == f + height`. The integration order inside
//! [`Player::advance`] is load-bearing for game feel and must not be
//! reshuffled.

use glam::Vec3;

use crate::bounds::PlayArea;
use crate::camera::CameraRig;
use crate::config::*;
use crate::course::Course;
use crate::input::TickInput;
use crate::stats::RunStats;

/// What happened during one tick, for collaborators to react to.
#[derive(Debug, Clone, Copy, Default)]
pub struct TickEvents {
    pub landed: bool,
    pub died: bool,
    pub checkpoint: Option<usize>,
    pub reached_goal: bool,
}

pub struct Player {
    pub position: Vec3,
    pub yaw: f32,
    pub pitch: f32,
    spawn: Vec3,
    vertical_velocity: f32,
    grounded: bool,
    coyote_timer: f32,
    height: f32,
    crouching: bool,
    collision_radius: f32,

    // Wall running
    wall_running: bool,
    wall_run_side: i8,
    wall_run_timer: f32,
    wall_run_key: bool,

    // Air jump resource, refilled on landing
    air_jumps_left: u32,
    max_air_jumps: u32,

    // Hazard contact latch: one death per continuous contact
    hazard_contact: bool,

    // Tunables, settable at any time; take effect on the next tick
    speed: f32,
    gravity: f32,
    jump_force: f32,
    sensitivity: f32,
    fov: f32,
    render_distance: f32,
    camera_distance: f32,

    stats: RunStats,
}

impl Player {
    pub fn new(spawn: Vec3) -> Self {
        Self {
            position: spawn,
            yaw: 0.0,
            pitch: 0.3, // look down slightly at the player
            spawn,
            vertical_velocity: 0.0,
            grounded: false,
            coyote_timer: 0.0,
            height: STAND_HEIGHT,
            crouching: false,
            collision_radius: COLLISION_RADIUS,
            wall_running: false,
            wall_run_side: 0,
            wall_run_timer: 0.0,
            wall_run_key: false,
            air_jumps_left: MAX_AIR_JUMPS,
            max_air_jumps: MAX_AIR_JUMPS,
            hazard_contact: false,
            speed: MOVE_SPEED,
            gravity: GRAVITY,
            jump_force: JUMP_FORCE,
            sensitivity: MOUSE_SENSITIVITY,
            fov: FOV_DEGREES,
            render_distance: RENDER_DISTANCE,
            camera_distance: CAMERA_DISTANCE,
            stats: RunStats::new(),
        }
    }

    /// Horizontal forward direction from yaw only, so looking up or down
    /// never changes ground speed.
    pub fn forward(&self) -> Vec3 {
        Vec3::new(self.yaw.cos(), 0.0, self.yaw.sin())
    }

    /// Full view direction including pitch.
    pub fn view_vector(&self) -> Vec3 {
        Vec3::new(
            self.yaw.cos() * self.pitch.cos(),
            self.pitch.sin(),
            self.yaw.sin() * self.pitch.cos(),
        )
    }

    pub fn rotate(&mut self, dx: f32, dy: f32) {
        self.yaw += dx * self.sensitivity;
        // Inverted: pull down to look down
        self.pitch = (self.pitch - dy * self.sensitivity).clamp(-PITCH_LIMIT, PITCH_LIMIT);
    }

    /// One simulation tick. `dt` is already clamped by the caller.
    pub fn advance(
        &mut self,
        dt: f32,
        course: &Course,
        area: &PlayArea,
        dev_mode: bool,
    ) -> TickEvents {
        let mut events = TickEvents::default();
        let time_scale = dt * FRAME_RATE_BASE;

        self.stats.tick(dt);

        // Crouch/stand height converges identically at any frame rate.
        let target_height = if self.crouching {
            CROUCH_HEIGHT
        } else {
            STAND_HEIGHT
        };
        let lerp = 1.0 - (1.0 - HEIGHT_SMOOTHING).powf(time_scale);
        self.height += (target_height - self.height) * lerp;

        self.update_wall_run(dt, time_scale, course);

        if self.wall_running {
            // Descent is pinned, never accelerated, while on the wall.
            self.vertical_velocity = self.vertical_velocity.max(WALL_RUN_FALL_SPEED);
        } else {
            self.vertical_velocity += self.gravity * time_scale;
        }

        let mut new_y = self.position.y + self.vertical_velocity * time_scale;

        // Ceiling: cancel upward motion when the head would enter a solid.
        if self.vertical_velocity > 0.0 {
            let head = Vec3::new(
                self.position.x,
                self.position.y + self.height + CEILING_MARGIN,
                self.position.z,
            );
            if course.check_collision(head, self.collision_radius) {
                self.vertical_velocity = 0.0;
                new_y = self.position.y;
            }
        }

        let floor_y = self.floor_candidate(course, area, dev_mode);

        self.position.y = new_y;

        if self.position.y <= floor_y + self.height {
            self.position.y = floor_y + self.height;
            self.vertical_velocity = 0.0;
            if !self.grounded {
                // The single landing transition: refill the air jump resource.
                self.grounded = true;
                self.air_jumps_left = self.max_air_jumps;
                events.landed = true;
            }
            self.coyote_timer = COYOTE_TIME;
        } else if self.coyote_timer > 0.0 {
            // Coyote window: off the ledge but still grounded for jump
            // eligibility.
            self.coyote_timer -= dt;
            self.grounded = true;
        } else {
            self.grounded = false;
        }

        if !dev_mode {
            let out = area.is_out_of_bounds(self.position.x, self.position.z);
            let fell = self.position.y < DEATH_Y
                || (out && self.position.y < self.spawn.y - OFF_AREA_FALL_TOLERANCE);

            let on_hazard = course.is_on_hazard(self.position);
            let hazard_hit = on_hazard && !self.hazard_contact;
            self.hazard_contact = on_hazard;

            if fell || hazard_hit {
                self.respawn(course);
                events.died = true;
            }
        }

        if let Some(index) = course.checkpoint_index_at(self.position) {
            if self.stats.is_new_checkpoint(index) {
                self.stats.record_checkpoint(index);
                log::info!("checkpoint {} reached", index + 1);
                events.checkpoint = Some(index);
            }
        }
        self.stats.tick_popup(dt);

        // The goal band is measured from the platform top, so test the feet.
        let feet = self.position - Vec3::new(0.0, self.height, 0.0);
        if course.is_on_goal(feet) && !self.stats.finished {
            self.stats.stop_timer();
            log::info!(
                "goal reached in {:.2}s, {} deaths",
                self.stats.time,
                self.stats.deaths
            );
            events.reached_goal = true;
        }

        events
    }

    fn update_wall_run(&mut self, dt: f32, time_scale: f32, course: &Course) {
        if self.wall_run_key && !self.grounded {
            let forward = self.forward();
            let right = forward.cross(Vec3::Y).normalize_or_zero();
            let probe = self.collision_radius + WALL_PROBE_DISTANCE;

            let left_wall =
                course.check_collision(self.position - right * probe, WALL_PROBE_RADIUS);
            let right_wall =
                course.check_collision(self.position + right * probe, WALL_PROBE_RADIUS);

            if (left_wall || right_wall)
                && self.wall_run_timer < WALL_RUN_MAX_TIME
                && self.vertical_velocity <= 0.0
            {
                if !self.wall_running {
                    self.wall_running = true;
                    // Side is latched on entry and held until the run ends.
                    self.wall_run_side = if right_wall { 1 } else { -1 };
                }
                self.wall_run_timer += dt;
                self.vertical_velocity = WALL_RUN_FALL_SPEED;

                let push = self.speed * WALL_RUN_SPEED_SCALE * time_scale;
                self.position.x += forward.x * push;
                self.position.z += forward.z * push;
            } else {
                self.end_wall_run();
            }
        } else {
            self.end_wall_run();
        }

        if self.grounded {
            self.wall_run_timer = 0.0;
            self.end_wall_run();
        }
    }

    fn end_wall_run(&mut self) {
        self.wall_running = false;
        self.wall_run_side = 0;
    }

    /// Floor the player can land on this tick. In bounds the ground plane at
    /// 0 always exists; out of bounds only obstacle platforms do, and with
    /// nothing below the sentinel means free fall. Dev mode forces a
    /// universal floor instead.
    fn floor_candidate(&self, course: &Course, area: &PlayArea, dev_mode: bool) -> f32 {
        let obstacle_floor =
            course.floor_height_at(self.position.x, self.position.z, self.position.y);

        let mut floor_y = if dev_mode { 0.0 } else { NO_FLOOR_Y };
        if !area.is_out_of_bounds(self.position.x, self.position.z) {
            floor_y = obstacle_floor.max(0.0);
        } else if obstacle_floor > 0.0 {
            floor_y = obstacle_floor;
        }
        floor_y
    }

    /// Horizontal movement, resolved once per tick and axis-separately: the X
    /// and Z displacements are attempted independently so a blocked axis
    /// still lets the other slide along the wall.
    pub fn move_horizontal(&mut self, input: &TickInput, course: &Course, dt: f32) {
        let forward = self.forward();
        let right = forward.cross(Vec3::Y).normalize_or_zero();
        let frame_speed = self.speed * dt * FRAME_RATE_BASE;

        let mut step = Vec3::ZERO;
        if input.forward {
            step += forward * frame_speed;
        }
        if input.backward {
            step -= forward * frame_speed;
        }
        if input.right {
            step += right * frame_speed;
        }
        if input.left {
            step -= right * frame_speed;
        }

        let try_x = Vec3::new(self.position.x + step.x, self.position.y, self.position.z);
        if !course.check_collision(try_x, self.collision_radius) {
            self.position.x = try_x.x;
        }

        let try_z = Vec3::new(self.position.x, self.position.y, self.position.z + step.z);
        if !course.check_collision(try_z, self.collision_radius) {
            self.position.z = try_z.z;
        }
    }

    /// Jump dispatch: wall jump while wall-running, normal jump while
    /// grounded (or inside the coyote window), otherwise an air jump if the
    /// resource is available.
    pub fn jump(&mut self) {
        if self.wall_running {
            self.vertical_velocity = self.jump_force * WALL_JUMP_SCALE;
            self.end_wall_run();
            self.wall_run_timer = 0.0;
            self.grounded = false;
            self.coyote_timer = 0.0;
            return;
        }

        if self.grounded && !self.crouching {
            self.vertical_velocity = self.jump_force;
            self.grounded = false;
            self.coyote_timer = 0.0;
        } else if !self.grounded && self.air_jumps_left > 0 {
            self.vertical_velocity = self.jump_force;
            self.air_jumps_left -= 1;
        }
    }

    /// Lower impulse, but usable while crouched.
    pub fn crouch_jump(&mut self) {
        if self.grounded && self.crouching {
            self.vertical_velocity = self.jump_force * CROUCH_JUMP_SCALE;
            self.grounded = false;
            self.coyote_timer = 0.0;
        }
    }

    pub fn set_crouch(&mut self, crouch: bool) {
        self.crouching = crouch;
    }

    pub fn set_wall_run_key(&mut self, held: bool) {
        self.wall_run_key = held;
        if !held {
            self.end_wall_run();
            self.wall_run_timer = 0.0;
        }
    }

    /// Teleport to the last checkpoint (or spawn) and count the death.
    pub fn respawn(&mut self, course: &Course) {
        let target = self
            .stats
            .last_checkpoint
            .and_then(|i| course.checkpoint_position(i))
            .unwrap_or(self.spawn);

        self.position = target;
        self.vertical_velocity = 0.0;
        self.grounded = false;
        self.stats.record_death();
        log::info!("respawned at {:?} ({} deaths)", target, self.stats.deaths);
    }

    /// Back to spawn without counting a death.
    pub fn reset_position(&mut self) {
        self.position = self.spawn;
        self.vertical_velocity = 0.0;
        self.grounded = false;
    }

    pub fn reset_stats(&mut self) {
        self.stats.reset();
    }

    // Configuration, effective on the next tick.

    pub fn set_physics(&mut self, speed: f32, gravity: f32, jump_force: f32) {
        self.speed = speed;
        self.gravity = gravity;
        self.jump_force = jump_force;
    }

    pub fn set_sensitivity(&mut self, sensitivity: f32) {
        self.sensitivity = sensitivity;
    }

    pub fn set_fov(&mut self, fov_degrees: f32) {
        self.fov = fov_degrees;
    }

    pub fn set_render_distance(&mut self, distance: f32) {
        self.render_distance = distance;
    }

    pub fn set_max_air_jumps(&mut self, count: i32) {
        // A negative configured maximum means none. Lowering the maximum
        // also surrenders any resource already held this airborne cycle.
        self.max_air_jumps = count.max(0) as u32;
        self.air_jumps_left = self.air_jumps_left.min(self.max_air_jumps);
    }

    /// Scroll up zooms in; distance 0 is valid and means first person.
    pub fn adjust_camera_distance(&mut self, delta: f32) {
        self.camera_distance =
            (self.camera_distance - delta * CAMERA_SCROLL_SCALE).clamp(0.0, CAMERA_DISTANCE_MAX);
    }

    /// Camera placement for this frame. Below the first-person threshold the
    /// composition switches discretely from a trailing orbit to an eye-level
    /// view along the look direction.
    pub fn camera(&self) -> CameraRig {
        let view = self.view_vector();

        if self.camera_distance < FIRST_PERSON_THRESHOLD {
            let eye = self.position + Vec3::new(0.0, self.height * EYE_HEIGHT_FRACTION, 0.0);
            CameraRig {
                eye,
                target: eye + view * 100.0,
            }
        } else {
            let center = self.position + Vec3::new(0.0, self.height * CENTER_HEIGHT_FRACTION, 0.0);
            CameraRig {
                eye: center - view * self.camera_distance,
                target: center,
            }
        }
    }

    pub fn projection_matrix(&self, aspect: f32) -> glam::Mat4 {
        CameraRig::projection_matrix(self.fov, aspect, self.render_distance)
    }

    // Read-only accessors for rendering and HUD collaborators.

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn is_crouching(&self) -> bool {
        self.crouching
    }

    pub fn collision_radius(&self) -> f32 {
        self.collision_radius
    }

    pub fn is_grounded(&self) -> bool {
        self.grounded
    }

    pub fn is_wall_running(&self) -> bool {
        self.wall_running
    }

    pub fn wall_run_side(&self) -> i8 {
        self.wall_run_side
    }

    pub fn vertical_velocity(&self) -> f32 {
        self.vertical_velocity
    }

    pub fn air_jumps_left(&self) -> u32 {
        self.air_jumps_left
    }

    pub fn spawn_point(&self) -> Vec3 {
        self.spawn
    }

    pub fn camera_distance(&self) -> f32 {
        self.camera_distance
    }

    pub fn stats(&self) -> &RunStats {
        &self.stats
    }

    pub fn stats_mut(&mut self) -> &mut RunStats {
        &mut self.stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::course::{Volume, VolumeKind};

    const DT: f32 = 1.0 / 60.0;

    fn solid(x: f32, y: f32, z: f32, w: f32, h: f32, d: f32) -> Volume {
        Volume::new(Vec3::new(x, y, z), w, h, d, [0.5; 3])
    }

    fn far_goal() -> Volume {
        solid(100_000.0, 0.0, 0.0, 10.0, 10.0, 10.0).with_kind(VolumeKind::Goal)
    }

    fn empty_course() -> Course {
        Course::new(vec![], vec![], vec![], far_goal())
    }

    fn course_with(solids: Vec<Volume>) -> Course {
        Course::new(solids, vec![], vec![], far_goal())
    }

    fn tick_n(player: &mut Player, course: &Course, area: &PlayArea, n: usize) {
        for _ in 0..n {
            player.advance(DT, course, area, false);
        }
    }

    #[test]
    fn settles_on_ground_plane() {
        let course = empty_course();
        let area = PlayArea::default();
        let mut player = Player::new(Vec3::new(0.0, 130.0, 0.0));

        player.advance(DT, &course, &area, false);
        assert!(!player.is_grounded());
        assert!(player.vertical_velocity() < 0.0);

        tick_n(&mut player, &course, &area, 300);
        assert_eq!(player.position.y, STAND_HEIGHT);
        assert!(player.is_grounded());
        assert_eq!(player.vertical_velocity(), 0.0);
    }

    #[test]
    fn lands_on_highest_platform_top() {
        let course = course_with(vec![
            solid(0.0, 0.0, 0.0, 200.0, 30.0, 200.0),
            solid(0.0, 0.0, 0.0, 200.0, 60.0, 200.0),
        ]);
        let area = PlayArea::default();
        let mut player = Player::new(Vec3::new(0.0, 300.0, 0.0));
        tick_n(&mut player, &course, &area, 300);
        assert_eq!(player.position.y, 60.0 + STAND_HEIGHT);
    }

    #[test]
    fn slides_along_wall_when_moving_diagonally() {
        // Wall ahead on +X; forward (+X) is blocked, strafe (+Z) is free.
        let course = course_with(vec![solid(40.0, 0.0, 0.0, 20.0, 300.0, 2000.0)]);
        let area = PlayArea::default();
        let mut player = Player::new(Vec3::new(0.0, 100.0, 0.0));
        player.yaw = 0.0;

        let mut input = TickInput::new();
        input.forward = true;
        input.right = true;

        let mut last_z = player.position.z;
        for _ in 0..20 {
            player.advance(DT, &course, &area, false);
            player.move_horizontal(&input, &course, DT);
            assert!(player.position.z > last_z, "lateral motion must continue");
            last_z = player.position.z;
        }
        // Box face at x = 30, radius 20: never penetrates past x = 10.
        assert!(player.position.x <= 10.0 + 1e-3);
        assert!(player.position.x > 0.0, "moved up to the wall first");
    }

    #[test]
    fn coyote_window_allows_a_late_jump() {
        let course = course_with(vec![solid(0.0, 0.0, 0.0, 100.0, 100.0, 100.0)]);
        let area = PlayArea::default();
        let mut player = Player::new(Vec3::new(0.0, 250.0, 0.0));
        player.set_max_air_jumps(0);
        tick_n(&mut player, &course, &area, 120);
        assert_eq!(player.position.y, 200.0);

        // Step off the platform; the ground plane is far below.
        player.position.x = 300.0;
        tick_n(&mut player, &course, &area, 3); // 0.05 s, within the window
        assert!(player.is_grounded(), "coyote window keeps jump eligibility");
        player.jump();
        assert_eq!(player.vertical_velocity(), JUMP_FORCE);
    }

    #[test]
    fn coyote_window_expires() {
        let course = course_with(vec![solid(0.0, 0.0, 0.0, 100.0, 100.0, 100.0)]);
        let area = PlayArea::default();
        let mut player = Player::new(Vec3::new(0.0, 250.0, 0.0));
        player.set_max_air_jumps(0);
        tick_n(&mut player, &course, &area, 120);

        player.position.x = 300.0;
        tick_n(&mut player, &course, &area, 8); // ~0.13 s, past the window
        assert!(!player.is_grounded());
        let falling = player.vertical_velocity();
        player.jump();
        assert_eq!(player.vertical_velocity(), falling, "no jump after expiry");
    }

    #[test]
    fn air_jump_resource_resets_only_on_landing() {
        let course = empty_course();
        let area = PlayArea::default();
        let mut player = Player::new(Vec3::new(0.0, 130.0, 0.0));
        tick_n(&mut player, &course, &area, 60);
        assert!(player.is_grounded());

        player.jump();
        assert_eq!(player.air_jumps_left(), 1);
        tick_n(&mut player, &course, &area, 5);
        assert!(!player.is_grounded());

        player.jump(); // air jump
        assert_eq!(player.air_jumps_left(), 0);
        assert_eq!(player.vertical_velocity(), JUMP_FORCE);

        tick_n(&mut player, &course, &area, 2);
        let before = player.vertical_velocity();
        player.jump(); // resource exhausted
        assert_eq!(player.vertical_velocity(), before);
        assert_eq!(player.air_jumps_left(), 0);

        let mut landed = false;
        for _ in 0..600 {
            if player.advance(DT, &course, &area, false).landed {
                landed = true;
                break;
            }
        }
        assert!(landed);
        assert_eq!(player.air_jumps_left(), 1);
    }

    #[test]
    fn lowering_max_air_jumps_applies_mid_air() {
        let course = empty_course();
        let area = PlayArea::default();
        let mut player = Player::new(Vec3::new(0.0, 100.0, 0.0));
        player.advance(DT, &course, &area, false);
        assert!(player.is_grounded());

        player.jump();
        player.advance(DT, &course, &area, false);
        assert!(!player.is_grounded());
        assert_eq!(player.air_jumps_left(), 1);

        player.set_max_air_jumps(0);
        assert_eq!(player.air_jumps_left(), 0);

        // With no resource left the press does nothing.
        let before = player.vertical_velocity();
        player.jump();
        assert_eq!(player.vertical_velocity(), before);
        assert!(player.vertical_velocity() < JUMP_FORCE);
    }

    #[test]
    fn crouch_jump_uses_reduced_impulse() {
        let course = empty_course();
        let area = PlayArea::default();
        let mut player = Player::new(Vec3::new(0.0, 130.0, 0.0));
        tick_n(&mut player, &course, &area, 60);

        player.set_crouch(true);
        player.jump();
        assert_eq!(
            player.vertical_velocity(),
            0.0,
            "normal jump refused while crouched"
        );
        player.crouch_jump();
        assert_eq!(player.vertical_velocity(), JUMP_FORCE * CROUCH_JUMP_SCALE);
    }

    #[test]
    fn ceiling_cancels_upward_motion() {
        let course = course_with(vec![solid(0.0, 190.0, 0.0, 400.0, 50.0, 400.0)]);
        let area = PlayArea::default();
        let mut player = Player::new(Vec3::new(0.0, 100.0, 0.0));
        tick_n(&mut player, &course, &area, 10);
        assert!(player.is_grounded());

        player.jump();
        tick_n(&mut player, &course, &area, 2);
        assert_eq!(player.position.y, STAND_HEIGHT, "head bonk keeps the player down");
        assert!(player.is_grounded());
    }

    #[test]
    fn checkpoint_progress_is_monotonic_and_targets_respawn() {
        let cp = |x: f32| solid(x, 0.0, 0.0, 50.0, 5.0, 50.0).with_kind(VolumeKind::Checkpoint);
        let hazard = solid(600.0, 0.0, 0.0, 40.0, 5.0, 40.0).with_kind(VolumeKind::Hazard);
        let course = Course::new(vec![], vec![cp(0.0), cp(300.0)], vec![hazard], far_goal());
        let area = PlayArea::new(100, 20.0); // wide enough to stay in bounds

        let mut player = Player::new(Vec3::new(-200.0, 100.0, 0.0));

        // Reach the second checkpoint first.
        player.position = Vec3::new(300.0, 105.0, 0.0);
        let events = player.advance(DT, &course, &area, false);
        assert_eq!(events.checkpoint, Some(1));
        assert_eq!(player.stats().last_checkpoint, Some(1));

        // Backtracking over the first checkpoint is not progress.
        player.position = Vec3::new(0.0, 105.0, 0.0);
        let events = player.advance(DT, &course, &area, false);
        assert_eq!(events.checkpoint, None);
        assert_eq!(player.stats().last_checkpoint, Some(1));

        // Death sends the player to checkpoint 1, not spawn.
        player.position = Vec3::new(600.0, 105.0, 0.0);
        let events = player.advance(DT, &course, &area, false);
        assert!(events.died);
        assert_eq!(player.stats().deaths, 1);
        assert_eq!(player.position, Vec3::new(300.0, 5.0 + STAND_HEIGHT, 0.0));
    }

    #[test]
    fn hazard_contact_counts_one_death_per_entry() {
        // Spawn sits on the hazard, so the respawn lands back in contact:
        // the latch must keep the count at one.
        let hazard = solid(0.0, 0.0, 0.0, 40.0, 5.0, 40.0).with_kind(VolumeKind::Hazard);
        let course = Course::new(vec![], vec![], vec![hazard], far_goal());
        let area = PlayArea::default();

        let mut player = Player::new(Vec3::new(0.0, 105.0, 0.0));
        let events = player.advance(DT, &course, &area, false);
        assert!(events.died);
        assert_eq!(player.stats().deaths, 1);

        for _ in 0..10 {
            let events = player.advance(DT, &course, &area, false);
            assert!(!events.died, "continuous contact must not re-count");
        }
        assert_eq!(player.stats().deaths, 1);
    }

    #[test]
    fn wall_run_pins_descent_and_pushes_forward() {
        // Wall to the player's right (+Z when yaw = 0), within probe reach.
        let course = course_with(vec![solid(0.0, 0.0, 45.0, 4000.0, 400.0, 20.0)]);
        let area = PlayArea::new(400, 20.0);
        let mut player = Player::new(Vec3::new(0.0, 300.0, 0.0));
        player.yaw = 0.0;
        player.set_wall_run_key(true);

        player.advance(DT, &course, &area, false);
        assert!(player.is_wall_running());
        assert_eq!(player.wall_run_side(), 1);
        assert_eq!(player.vertical_velocity(), WALL_RUN_FALL_SPEED);

        let x_before = player.position.x;
        player.advance(DT, &course, &area, false);
        assert!(player.position.x > x_before, "pushed along the wall");

        player.jump();
        assert!(!player.is_wall_running());
        assert_eq!(player.vertical_velocity(), JUMP_FORCE * WALL_JUMP_SCALE);
        assert_eq!(player.wall_run_side(), 0);
    }

    #[test]
    fn wall_run_ends_when_timer_expires() {
        let course = course_with(vec![solid(0.0, 0.0, 45.0, 100_000.0, 4000.0, 20.0)]);
        let area = PlayArea::new(10_000, 20.0);
        let mut player = Player::new(Vec3::new(0.0, 2000.0, 0.0));
        player.set_wall_run_key(true);

        // 1.5 s at 60 Hz is 90 ticks; give it a few extra.
        tick_n(&mut player, &course, &area, 95);
        assert!(!player.is_wall_running());
    }

    #[test]
    fn releasing_the_key_ends_the_wall_run() {
        let course = course_with(vec![solid(0.0, 0.0, 45.0, 4000.0, 400.0, 20.0)]);
        let area = PlayArea::new(400, 20.0);
        let mut player = Player::new(Vec3::new(0.0, 300.0, 0.0));
        player.set_wall_run_key(true);
        player.advance(DT, &course, &area, false);
        assert!(player.is_wall_running());

        player.set_wall_run_key(false);
        assert!(!player.is_wall_running());
        player.advance(DT, &course, &area, false);
        assert!(!player.is_wall_running());
    }

    #[test]
    fn dev_mode_provides_a_floor_and_suppresses_death() {
        let course = empty_course();
        let area = PlayArea::default();
        // Far out of bounds: without dev mode this is a guaranteed respawn.
        let mut player = Player::new(Vec3::new(5000.0, 130.0, 0.0));
        for _ in 0..300 {
            player.advance(DT, &course, &area, true);
        }
        assert_eq!(player.position.y, STAND_HEIGHT);
        assert_eq!(player.stats().deaths, 0);
    }

    #[test]
    fn out_of_bounds_fall_respawns() {
        let course = empty_course();
        let area = PlayArea::default();
        let mut player = Player::new(Vec3::new(0.0, 100.0, 0.0));
        player.position.x = 2000.0;

        let mut died = false;
        for _ in 0..120 {
            if player.advance(DT, &course, &area, false).died {
                died = true;
                break;
            }
        }
        assert!(died);
        assert_eq!(player.position, player.spawn_point());
        assert_eq!(player.stats().deaths, 1);
    }

    #[test]
    fn crouch_height_converges_frame_rate_independently() {
        let course = empty_course();
        let area = PlayArea::default();

        let mut slow = Player::new(Vec3::new(0.0, 130.0, 0.0));
        let mut fast = Player::new(Vec3::new(0.0, 130.0, 0.0));
        slow.set_crouch(true);
        fast.set_crouch(true);

        slow.advance(1.0 / 30.0, &course, &area, true);
        fast.advance(1.0 / 60.0, &course, &area, true);
        fast.advance(1.0 / 60.0, &course, &area, true);

        assert!((slow.height() - fast.height()).abs() < 1e-3);
        assert!(slow.height() < STAND_HEIGHT);
        assert!(slow.height() > CROUCH_HEIGHT);
    }

    #[test]
    fn pitch_stays_clear_of_the_poles() {
        let mut player = Player::new(Vec3::ZERO);
        player.rotate(0.0, -100_000.0);
        assert!(player.pitch <= PITCH_LIMIT);
        player.rotate(0.0, 100_000.0);
        assert!(player.pitch >= -PITCH_LIMIT);
    }

    #[test]
    fn camera_switches_composition_at_the_threshold() {
        let mut player = Player::new(Vec3::new(0.0, 100.0, 0.0));
        player.pitch = 0.0;

        // Default distance: trailing orbit looking at the player's center.
        let third = player.camera();
        let center =
            player.position + Vec3::new(0.0, player.height() * CENTER_HEIGHT_FRACTION, 0.0);
        assert_eq!(third.target, center);
        assert!((third.eye - center).length() > FIRST_PERSON_THRESHOLD);

        // Zoom all the way in: eye-level view along the look vector.
        player.adjust_camera_distance(100.0);
        assert_eq!(player.camera_distance(), 0.0);
        let first = player.camera();
        let eye = player.position + Vec3::new(0.0, player.height() * EYE_HEIGHT_FRACTION, 0.0);
        assert_eq!(first.eye, eye);
    }

    #[test]
    fn goal_contact_finishes_the_run_once() {
        let goal = solid(0.0, 0.0, 0.0, 100.0, 10.0, 100.0).with_kind(VolumeKind::Goal);
        let course = Course::new(vec![], vec![], vec![], goal);
        let area = PlayArea::default();

        let mut player = Player::new(Vec3::new(0.0, 115.0, 0.0));
        player.stats_mut().toggle_timer();

        let events = player.advance(DT, &course, &area, false);
        assert!(events.reached_goal);
        assert!(player.stats().finished);
        assert!(!player.stats().running);

        let events = player.advance(DT, &course, &area, false);
        assert!(!events.reached_goal, "finish fires once");
    }
}
