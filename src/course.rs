use glam::Vec3;

use crate::config::*;

/// What a volume means to the simulation. Only `Solid` volumes block lateral
/// movement; checkpoint and hazard volumes are walk-through so reward and
/// danger zones never get in the way.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VolumeKind {
    Solid,
    Checkpoint,
    Hazard,
    Goal,
}

/// An axis-aligned box. `pos.x`/`pos.z` are the footprint centre, `pos.y` is
/// the base: the vertical extent is `[pos.y, pos.y + height]`.
#[derive(Debug, Clone, Copy)]
pub struct Volume {
    pub pos: Vec3,
    pub width: f32,
    pub height: f32,
    pub depth: f32,
    pub color: [f32; 3],
    pub kind: VolumeKind,
}

impl Volume {
    pub fn new(pos: Vec3, width: f32, height: f32, depth: f32, color: [f32; 3]) -> Self {
        Self {
            pos,
            width,
            height,
            depth,
            color,
            kind: VolumeKind::Solid,
        }
    }

    pub fn with_kind(mut self, kind: VolumeKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn top(&self) -> f32 {
        self.pos.y + self.height
    }

    /// Sphere-vs-box test via the closest point on the box. Strict inequality:
    /// exact tangency does not count as a collision.
    pub fn intersects_sphere(&self, center: Vec3, radius: f32) -> bool {
        let half_w = self.width / 2.0;
        let half_d = self.depth / 2.0;

        let closest = Vec3::new(
            center.x.clamp(self.pos.x - half_w, self.pos.x + half_w),
            center.y.clamp(self.pos.y, self.pos.y + self.height),
            center.z.clamp(self.pos.z - half_d, self.pos.z + half_d),
        );

        (center - closest).length_squared() < radius * radius
    }

    fn footprint_contains(&self, x: f32, z: f32, margin: f32) -> bool {
        let half_w = self.width / 2.0 + margin;
        let half_d = self.depth / 2.0 + margin;
        x >= self.pos.x - half_w
            && x <= self.pos.x + half_w
            && z >= self.pos.z - half_d
            && z <= self.pos.z + half_d
    }

    /// True when (x,z) is over the volume and `y` lies in `[top, top + band]`.
    /// The band absorbs the head-relative player Y coordinate.
    fn band_contains(&self, p: Vec3, band: f32) -> bool {
        self.footprint_contains(p.x, p.z, 0.0) && p.y >= self.top() && p.y <= self.top() + band
    }
}

/// Static obstacle geometry: solids, ordered checkpoints, hazard plates and a
/// single goal platform. Immutable after construction, so it can be shared
/// read-only across any number of players.
pub struct Course {
    solids: Vec<Volume>,
    checkpoints: Vec<Volume>,
    hazards: Vec<Volume>,
    goal: Volume,
}

impl Course {
    /// The goal platform is also collidable and standable, so it joins the
    /// solid list in addition to answering `is_on_goal`.
    pub fn new(
        mut solids: Vec<Volume>,
        checkpoints: Vec<Volume>,
        hazards: Vec<Volume>,
        goal: Volume,
    ) -> Self {
        solids.push(goal);
        Self {
            solids,
            checkpoints,
            hazards,
            goal,
        }
    }

    /// True if the sphere overlaps any solid volume.
    pub fn check_collision(&self, p: Vec3, radius: f32) -> bool {
        self.solids.iter().any(|v| v.intersects_sphere(p, radius))
    }

    /// Highest standable top under the player at (x,z). Every volume kind has
    /// a physical top the player can stand on, even the walk-through ones;
    /// only tops at or below `current_y` qualify. Returns 0 when nothing
    /// qualifies (ground-plane default).
    pub fn floor_height_at(&self, x: f32, z: f32, current_y: f32) -> f32 {
        let mut max_floor = 0.0f32;

        let candidates = self
            .solids
            .iter()
            .chain(self.checkpoints.iter())
            .chain(self.hazards.iter());

        for v in candidates {
            if v.footprint_contains(x, z, STANDING_MARGIN) {
                let top = v.top();
                if current_y >= top && top > max_floor {
                    max_floor = top;
                }
            }
        }

        max_floor
    }

    /// Index of the checkpoint the player is standing on, if any. Order in the
    /// checkpoint list defines course progression.
    pub fn checkpoint_index_at(&self, p: Vec3) -> Option<usize> {
        self.checkpoints
            .iter()
            .position(|cp| cp.band_contains(p, CHECKPOINT_BAND))
    }

    pub fn is_on_hazard(&self, p: Vec3) -> bool {
        self.hazards.iter().any(|h| h.band_contains(p, HAZARD_BAND))
    }

    pub fn is_on_goal(&self, p: Vec3) -> bool {
        self.goal.band_contains(p, GOAL_BAND)
    }

    /// Respawn point for a checkpoint: its centre horizontally, its top plus
    /// the stand height vertically so the player's feet land on the surface.
    pub fn checkpoint_position(&self, index: usize) -> Option<Vec3> {
        self.checkpoints
            .get(index)
            .map(|cp| Vec3::new(cp.pos.x, cp.top() + STAND_HEIGHT, cp.pos.z))
    }

    pub fn solids(&self) -> &[Volume] {
        &self.solids
    }

    pub fn checkpoints(&self) -> &[Volume] {
        &self.checkpoints
    }

    pub fn hazards(&self) -> &[Volume] {
        &self.hazards
    }

    pub fn goal(&self) -> &Volume {
        &self.goal
    }

    /// The stock parkour course: seventeen sections running along the edge of
    /// the play area, from basic jumps through crouch tunnels, zigzag walls
    /// and wall-run gauntlets to the goal platform.
    pub fn parkour() -> Self {
        let course_z = -320.0;

        let gray = [0.5, 0.5, 0.5];
        let red = [0.8, 0.3, 0.3];
        let green = [0.6, 0.8, 0.3];
        let blue = [0.3, 0.6, 0.8];
        let orange = [0.9, 0.5, 0.2];
        let purple = [0.7, 0.4, 0.9];
        let teal = [0.4, 0.7, 0.7];
        let violet = [0.5, 0.3, 0.7];
        let wall_blue = [0.2, 0.5, 0.9];
        let deep_blue = [0.3, 0.4, 0.8];
        let amber = [0.8, 0.6, 0.3];
        let hazard_gray = [0.4, 0.4, 0.4];

        let b = |x: f32, y: f32, z: f32, w: f32, h: f32, d: f32, c: [f32; 3]| {
            Volume::new(Vec3::new(x, y, z), w, h, d, c)
        };

        let solids = vec![
            // Starting platform
            b(-350.0, -10.0, course_z, 100.0, 10.0, 80.0, gray),
            // Basic jumps, progressively higher
            b(-220.0, 0.0, course_z, 30.0, 25.0, 60.0, red),
            b(-150.0, 0.0, course_z, 30.0, 30.0, 60.0, red),
            b(-80.0, 0.0, course_z, 30.0, 35.0, 60.0, red),
            b(-10.0, 0.0, course_z, 30.0, 40.0, 60.0, red),
            // Crouch tunnel
            b(80.0, 55.0, course_z, 100.0, 30.0, 80.0, green),
            // Zigzag walls
            b(200.0, 0.0, course_z - 35.0, 25.0, 70.0, 40.0, blue),
            b(260.0, 0.0, course_z + 35.0, 25.0, 70.0, 40.0, blue),
            b(320.0, 0.0, course_z - 35.0, 25.0, 70.0, 40.0, blue),
            b(380.0, 0.0, course_z + 35.0, 25.0, 70.0, 40.0, blue),
            // Platform jumps
            b(480.0, 0.0, course_z - 30.0, 50.0, 40.0, 50.0, orange),
            b(560.0, 0.0, course_z + 30.0, 50.0, 50.0, 50.0, orange),
            b(640.0, 0.0, course_z - 30.0, 50.0, 60.0, 50.0, orange),
            b(720.0, 0.0, course_z, 50.0, 70.0, 50.0, orange),
            // Double crouch
            b(870.0, 55.0, course_z - 25.0, 80.0, 30.0, 50.0, green),
            b(970.0, 55.0, course_z + 25.0, 80.0, 30.0, 50.0, green),
            // Narrow corridor
            b(1100.0, 0.0, course_z - 50.0, 120.0, 90.0, 25.0, purple),
            b(1100.0, 0.0, course_z + 50.0, 120.0, 90.0, 25.0, purple),
            // Staircase up
            b(1230.0, 0.0, course_z, 40.0, 20.0, 60.0, teal),
            b(1290.0, 0.0, course_z, 40.0, 40.0, 60.0, teal),
            b(1350.0, 0.0, course_z, 40.0, 60.0, 60.0, teal),
            b(1410.0, 0.0, course_z, 40.0, 80.0, 60.0, teal),
            // High platform run
            b(1530.0, 0.0, course_z, 200.0, 80.0, 70.0, violet),
            // Landing zone after the drop
            b(1700.0, -10.0, course_z, 80.0, 10.0, 80.0, gray),
            // More jump barriers
            b(1800.0, 0.0, course_z, 30.0, 45.0, 60.0, red),
            b(1880.0, 0.0, course_z, 30.0, 50.0, 60.0, red),
            b(1960.0, 0.0, course_z, 30.0, 55.0, 60.0, red),
            // Crouch + jump combo
            b(2070.0, 55.0, course_z, 60.0, 30.0, 70.0, green),
            b(2160.0, 0.0, course_z, 30.0, 40.0, 60.0, red),
            b(2230.0, 55.0, course_z, 60.0, 30.0, 70.0, green),
            b(2320.0, 0.0, course_z, 30.0, 45.0, 60.0, red),
            // Final gauntlet: tight zigzag with crouch ceilings
            b(2430.0, 0.0, course_z - 40.0, 20.0, 80.0, 30.0, blue),
            b(2430.0, 55.0, course_z + 10.0, 60.0, 30.0, 60.0, green),
            b(2510.0, 0.0, course_z + 40.0, 20.0, 80.0, 30.0, blue),
            b(2510.0, 55.0, course_z - 10.0, 60.0, 30.0, 60.0, green),
            // Wall run section: gap too wide to jump normally
            b(2620.0, 0.0, course_z - 50.0, 15.0, 150.0, 120.0, wall_blue),
            b(2620.0, 0.0, course_z + 50.0, 15.0, 150.0, 120.0, wall_blue),
            b(2720.0, 0.0, course_z, 60.0, 40.0, 60.0, amber),
            // Crouch jump section: low ceiling over a gap
            b(2800.0, 0.0, course_z, 80.0, 30.0, 80.0, gray),
            b(2800.0, 75.0, course_z, 100.0, 20.0, 100.0, [0.6, 0.3, 0.3]),
            b(2920.0, 0.0, course_z, 60.0, 30.0, 60.0, gray),
            // Extended wall run gauntlet
            b(3020.0, 0.0, course_z - 55.0, 20.0, 180.0, 100.0, deep_blue),
            b(3150.0, 0.0, course_z + 55.0, 20.0, 180.0, 100.0, deep_blue),
            b(3280.0, 0.0, course_z - 55.0, 20.0, 180.0, 100.0, deep_blue),
            b(3350.0, 0.0, course_z, 60.0, 50.0, 60.0, amber),
            // Crouch tunnel gauntlet with turns
            b(3450.0, 55.0, course_z, 150.0, 30.0, 60.0, green),
            b(3620.0, 55.0, course_z - 30.0, 100.0, 30.0, 60.0, green),
            b(3720.0, 55.0, course_z - 60.0, 80.0, 30.0, 60.0, green),
            // Mixed challenge
            b(3850.0, 0.0, course_z - 40.0, 30.0, 50.0, 60.0, red),
            b(3930.0, 55.0, course_z, 60.0, 30.0, 80.0, green),
            b(4010.0, 0.0, course_z + 40.0, 30.0, 55.0, 60.0, red),
            b(4100.0, 0.0, course_z - 60.0, 15.0, 160.0, 100.0, wall_blue),
            b(4100.0, 0.0, course_z + 60.0, 15.0, 160.0, 100.0, wall_blue),
            b(4200.0, 0.0, course_z, 60.0, 45.0, 60.0, amber),
        ];

        let checkpoint = [0.2, 0.9, 0.3];
        let checkpoints = vec![
            b(800.0, 0.0, course_z, 50.0, 5.0, 50.0, checkpoint).with_kind(VolumeKind::Checkpoint),
            b(1600.0, 80.0, course_z, 50.0, 5.0, 50.0, checkpoint).with_kind(VolumeKind::Checkpoint),
        ];

        let hz = |x: f32, y: f32, w: f32, h: f32, d: f32| {
            b(x, y, course_z, w, h, d, hazard_gray).with_kind(VolumeKind::Hazard)
        };
        let hazards = vec![
            hz(40.0, -5.0, 35.0, 5.0, 60.0),
            hz(430.0, -5.0, 35.0, 5.0, 60.0),
            hz(1030.0, -5.0, 35.0, 5.0, 60.0),
            hz(1760.0, -5.0, 35.0, 5.0, 60.0),
            hz(2670.0, -15.0, 60.0, 10.0, 60.0),
            hz(3085.0, -15.0, 50.0, 10.0, 60.0),
            hz(3215.0, -15.0, 50.0, 10.0, 60.0),
            hz(4100.0, -15.0, 60.0, 10.0, 80.0),
        ];

        let goal = b(4350.0, -10.0, course_z, 150.0, 10.0, 100.0, [0.2, 0.9, 0.2])
            .with_kind(VolumeKind::Goal);

        Self::new(solids, checkpoints, hazards, goal)
    }
}
