use glam::Vec3;
use web_time::Instant;

use crate::bounds::PlayArea;
use crate::config::{MAX_FRAME_DT, SPAWN};
use crate::course::Course;
use crate::input::TickInput;
use crate::player::{Player, TickEvents};
use crate::projectile::ArrowField;

/// One running game: the course, the play area, the player and the arrow
/// field, advanced together once per frame. The host owns windowing and
/// rendering and feeds a [`TickInput`] per frame.
pub struct Session {
    course: Course,
    area: PlayArea,
    player: Player,
    arrows: Option<ArrowField>,
    pub dev_mode: bool,
    last_update: Instant,
}

impl Session {
    pub fn new(course: Course, area: PlayArea, spawn: Vec3) -> Self {
        Self {
            course,
            area,
            player: Player::new(spawn),
            arrows: None,
            dev_mode: false,
            last_update: Instant::now(),
        }
    }

    /// The stock parkour run with its arrow gauntlet.
    pub fn parkour() -> Self {
        let mut session = Self::new(Course::parkour(), PlayArea::default(), SPAWN);
        session.arrows = Some(ArrowField::gauntlet());
        session
    }

    pub fn set_arrow_field(&mut self, field: ArrowField) {
        self.arrows = Some(field);
    }

    /// Frame entry point: derives dt from wall-clock time and ticks.
    pub fn update(&mut self, input: &mut TickInput) -> TickEvents {
        let now = Instant::now();
        let dt = now.duration_since(self.last_update).as_secs_f32();
        self.last_update = now;
        self.step(dt, input)
    }

    /// Deterministic tick with an explicit dt, clamped so a stalled frame
    /// cannot launch the player through geometry. Look input is consumed,
    /// the jump edge is dispatched crouch-aware, then locomotion, horizontal
    /// movement and the arrow field advance in that order.
    pub fn step(&mut self, dt: f32, input: &mut TickInput) -> TickEvents {
        let dt = dt.min(MAX_FRAME_DT);

        let (dx, dy) = input.consume_mouse_delta();
        self.player.rotate(dx, dy);

        self.player.set_crouch(input.crouch);
        self.player.set_wall_run_key(input.wall_run);

        if input.take_jump() {
            if self.player.is_crouching() && self.player.is_grounded() {
                self.player.crouch_jump();
            } else {
                self.player.jump();
            }
        }

        let mut events = self.player.advance(dt, &self.course, &self.area, self.dev_mode);
        self.player.move_horizontal(input, &self.course, dt);

        if let Some(arrows) = &mut self.arrows {
            arrows.update(dt);
            let hit = arrows.hits_player(
                self.player.position,
                self.player.collision_radius(),
                self.player.height(),
                self.player.is_crouching(),
            );
            if hit && !self.dev_mode {
                self.player.respawn(&self.course);
                events.died = true;
            }
        }

        events
    }

    pub fn toggle_timer(&mut self) {
        self.player.stats_mut().toggle_timer();
    }

    /// Fresh run on the same course: back to spawn, stats cleared, arrows
    /// swept and launcher phases rewound.
    pub fn reset_run(&mut self) {
        self.player.reset_position();
        self.player.reset_stats();
        if let Some(arrows) = &mut self.arrows {
            arrows.reset();
        }
        log::info!("run reset");
    }

    pub fn set_difficulty(&mut self, speed_multiplier: f32, rate_multiplier: f32) {
        if let Some(arrows) = &mut self.arrows {
            arrows.set_difficulty(speed_multiplier, rate_multiplier);
        }
    }

    pub fn course(&self) -> &Course {
        &self.course
    }

    pub fn area(&self) -> &PlayArea {
        &self.area
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn player_mut(&mut self) -> &mut Player {
        &mut self.player
    }

    pub fn arrows(&self) -> Option<&ArrowField> {
        self.arrows.as_ref()
    }
}
