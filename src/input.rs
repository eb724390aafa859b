/// Per-tick input intent, filled in by the host from whatever windowing layer
/// it uses. Movement, crouch and wall-run are level-triggered; jump is an
/// edge that is consumed by the tick that handles it, and the mouse delta
/// accumulates between ticks.
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    pub forward: bool,
    pub backward: bool,
    pub left: bool,
    pub right: bool,
    pub crouch: bool,
    pub wall_run: bool,
    jump_pressed: bool,
    mouse_delta: (f32, f32),
}

impl TickInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press_jump(&mut self) {
        self.jump_pressed = true;
    }

    pub fn take_jump(&mut self) -> bool {
        std::mem::take(&mut self.jump_pressed)
    }

    pub fn add_mouse_delta(&mut self, dx: f32, dy: f32) {
        self.mouse_delta.0 += dx;
        self.mouse_delta.1 += dy;
    }

    pub fn consume_mouse_delta(&mut self) -> (f32, f32) {
        std::mem::take(&mut self.mouse_delta)
    }
}
