use crate::config::CHECKPOINT_POPUP_TIME;

/// Run statistics: elapsed timer, death counter and checkpoint progress.
/// Mutated only by the locomotion tick; HUD and leaderboard collaborators
/// read it through the accessors on [`crate::Player`].
#[derive(Debug, Clone, Default)]
pub struct RunStats {
    pub time: f32,
    pub running: bool,
    pub finished: bool,
    pub deaths: u32,
    pub last_checkpoint: Option<usize>,
    pub popup_message: String,
    pub popup_time: f32,
}

impl RunStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tick(&mut self, dt: f32) {
        if self.running {
            self.time += dt;
        }
    }

    pub fn tick_popup(&mut self, dt: f32) {
        if self.popup_time > 0.0 {
            self.popup_time -= dt;
        }
    }

    /// Toggling has no effect once the run is finished.
    pub fn toggle_timer(&mut self) {
        if !self.finished {
            self.running = !self.running;
        }
    }

    pub fn stop_timer(&mut self) {
        self.running = false;
        self.finished = true;
    }

    pub fn record_death(&mut self) {
        self.deaths += 1;
    }

    pub fn record_checkpoint(&mut self, index: usize) {
        self.last_checkpoint = Some(index);
        self.popup_time = CHECKPOINT_POPUP_TIME;
        self.popup_message = format!("Checkpoint {} reached!", index + 1);
    }

    /// True only for checkpoints past the current progress; backtracking over
    /// an earlier checkpoint never counts as new.
    pub fn is_new_checkpoint(&self, index: usize) -> bool {
        match self.last_checkpoint {
            None => true,
            Some(last) => index > last,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timer_only_advances_while_running() {
        let mut stats = RunStats::new();
        stats.tick(1.0);
        assert_eq!(stats.time, 0.0);
        stats.toggle_timer();
        stats.tick(1.5);
        assert_eq!(stats.time, 1.5);
    }

    #[test]
    fn finished_timer_cannot_be_restarted() {
        let mut stats = RunStats::new();
        stats.toggle_timer();
        stats.stop_timer();
        stats.toggle_timer();
        assert!(!stats.running);
        assert!(stats.finished);
    }

    #[test]
    fn checkpoint_progress_is_monotonic() {
        let mut stats = RunStats::new();
        assert!(stats.is_new_checkpoint(0));
        stats.record_checkpoint(1);
        assert!(!stats.is_new_checkpoint(0));
        assert!(!stats.is_new_checkpoint(1));
        assert!(stats.is_new_checkpoint(2));
    }

    #[test]
    fn popup_counts_down() {
        let mut stats = RunStats::new();
        stats.record_checkpoint(0);
        assert_eq!(stats.popup_time, CHECKPOINT_POPUP_TIME);
        assert_eq!(stats.popup_message, "Checkpoint 1 reached!");
        stats.tick_popup(CHECKPOINT_POPUP_TIME);
        assert!(stats.popup_time <= 0.0);
    }
}
