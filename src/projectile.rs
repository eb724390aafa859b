use glam::Vec3;
use rand::Rng;

use crate::config::{
    ARROW_DESPAWN_Z, ARROW_LENGTH, ARROW_RADIUS, CROUCH_HITBOX_SCALE, LAUNCHER_Z,
    MIN_FIRE_INTERVAL,
};

/// A fixed emplacement that fires arrows along -Z toward the course on a
/// repeating interval. Difficulty scaling always rederives from the base
/// numbers so repeated adjustments do not compound.
#[derive(Debug, Clone)]
pub struct Launcher {
    pub pos: Vec3,
    base_interval: f32,
    base_speed: f32,
    fire_interval: f32,
    arrow_speed: f32,
    timer: f32,
}

impl Launcher {
    pub fn new(pos: Vec3, fire_interval: f32, arrow_speed: f32) -> Self {
        Self {
            pos,
            base_interval: fire_interval,
            base_speed: arrow_speed,
            fire_interval,
            arrow_speed,
            timer: 0.0,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Arrow {
    pub pos: Vec3,
    speed: f32,
}

/// All launchers and in-flight arrows. The field advances on the frame tick
/// and answers the player hit query; it never mutates the player itself.
#[derive(Debug, Clone, Default)]
pub struct ArrowField {
    launchers: Vec<Launcher>,
    arrows: Vec<Arrow>,
}

impl ArrowField {
    pub fn new(launchers: Vec<Launcher>) -> Self {
        Self {
            launchers,
            arrows: Vec::new(),
        }
    }

    /// The stock layout covering the later course sections, two crossfire
    /// pairs included. Phases are jittered so the volleys do not sync up.
    pub fn gauntlet() -> Self {
        let mut rng = rand::rng();
        let mut launchers = vec![
            Launcher::new(Vec3::new(-150.0, 30.0, LAUNCHER_Z), 2.0, 500.0),
            Launcher::new(Vec3::new(260.0, 50.0, LAUNCHER_Z), 1.8, 550.0),
            Launcher::new(Vec3::new(560.0, 60.0, LAUNCHER_Z), 1.5, 600.0),
            Launcher::new(Vec3::new(1050.0, 90.0, LAUNCHER_Z), 1.2, 650.0),
            Launcher::new(Vec3::new(1300.0, 40.0, LAUNCHER_Z), 2.5, 500.0),
            Launcher::new(Vec3::new(1300.0, 100.0, LAUNCHER_Z), 2.5, 500.0),
            Launcher::new(Vec3::new(1480.0, 95.0, LAUNCHER_Z), 1.0, 700.0),
            Launcher::new(Vec3::new(1750.0, 35.0, LAUNCHER_Z), 1.5, 600.0),
            Launcher::new(Vec3::new(2110.0, 30.0, LAUNCHER_Z), 2.0, 550.0),
            Launcher::new(Vec3::new(2180.0, 90.0, LAUNCHER_Z), 2.0, 550.0),
            Launcher::new(Vec3::new(2420.0, 40.0, LAUNCHER_Z), 0.8, 750.0),
            Launcher::new(Vec3::new(2500.0, 95.0, LAUNCHER_Z), 0.8, 750.0),
        ];
        for launcher in &mut launchers {
            launcher.timer = rng.random_range(0.0..launcher.fire_interval);
        }
        Self::new(launchers)
    }

    pub fn update(&mut self, dt: f32) {
        for launcher in &mut self.launchers {
            launcher.timer += dt;
            if launcher.timer >= launcher.fire_interval {
                self.arrows.push(Arrow {
                    pos: launcher.pos,
                    speed: launcher.arrow_speed,
                });
                launcher.timer = 0.0;
            }
        }
        for arrow in &mut self.arrows {
            arrow.pos.z -= arrow.speed * dt;
        }
        self.arrows.retain(|a| a.pos.z >= ARROW_DESPAWN_Z);
    }

    /// Cylinder-vs-arrow overlap against a player whose y is head height.
    /// Crouching keeps the feet in place and lowers the top of the hitbox.
    pub fn hits_player(&self, pos: Vec3, radius: f32, height: f32, crouching: bool) -> bool {
        let bottom = pos.y - height;
        let top = if crouching {
            bottom + height * CROUCH_HITBOX_SCALE
        } else {
            pos.y
        };
        self.arrows.iter().any(|arrow| {
            if (arrow.pos.x - pos.x).abs() > radius + ARROW_RADIUS {
                return false;
            }
            // The shaft extends mostly behind the tip.
            let front = arrow.pos.z - ARROW_LENGTH * 0.3;
            let back = arrow.pos.z + ARROW_LENGTH * 0.7;
            if pos.z - radius > back || pos.z + radius < front {
                return false;
            }
            arrow.pos.y - ARROW_RADIUS <= top && arrow.pos.y + ARROW_RADIUS >= bottom
        })
    }

    pub fn set_difficulty(&mut self, speed_multiplier: f32, rate_multiplier: f32) {
        for launcher in &mut self.launchers {
            launcher.fire_interval = (launcher.base_interval / rate_multiplier).max(MIN_FIRE_INTERVAL);
            launcher.arrow_speed = launcher.base_speed * speed_multiplier;
        }
    }

    pub fn reset(&mut self) {
        self.arrows.clear();
        for launcher in &mut self.launchers {
            launcher.timer = 0.0;
        }
    }

    pub fn active_count(&self) -> usize {
        self.arrows.len()
    }

    pub fn arrows(&self) -> &[Arrow] {
        &self.arrows
    }

    pub fn launchers(&self) -> &[Launcher] {
        &self.launchers
    }
}
