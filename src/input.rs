//! Per-frame input queries
//!
//! Device handling (gamepad, touch zones, debouncing) lives outside the core;
//! it reports which logical keys are down each frame and [`InputState`]
//! derives the edge-triggered queries.

/// Logical keys the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Left,
    Right,
    Up,
    Down,
    Enter,
    Space,
}

impl Key {
    pub const COUNT: usize = 6;

    pub const ALL: [Key; Key::COUNT] = [
        Key::Left,
        Key::Right,
        Key::Up,
        Key::Down,
        Key::Enter,
        Key::Space,
    ];

    #[inline]
    fn index(self) -> usize {
        self as usize
    }

    pub fn is_direction(self) -> bool {
        matches!(self, Key::Left | Key::Right | Key::Up | Key::Down)
    }
}

/// Input queries available to a game state during one frame
pub trait InputSource {
    /// Key is down this frame
    fn held(&self, key: Key) -> bool;
    /// Key went down this frame
    fn just_pressed(&self, key: Key) -> bool;
    /// Touch input is the active control scheme
    fn touch_enabled(&self) -> bool;
    /// A touch on the play area is down this frame
    fn touch_active(&self) -> bool;
    /// A touch on the play area started this frame
    fn touch_just_started(&self) -> bool;

    /// Enter or Space held
    fn action_held(&self) -> bool {
        self.held(Key::Enter) || self.held(Key::Space)
    }

    /// Enter or Space went down this frame
    fn action_just_pressed(&self) -> bool {
        self.just_pressed(Key::Enter) || self.just_pressed(Key::Space)
    }

    /// Confirm edge used by menus: action key or a fresh touch
    fn confirm_pressed(&self) -> bool {
        self.action_just_pressed() || self.touch_just_started()
    }

    /// Level-triggered request to fast-forward a scrolling screen
    fn fast_forward(&self) -> bool {
        self.action_held() || self.touch_active()
    }
}

/// Snapshot of the logical keys for one frame, plus the previous frame's keys
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputState {
    pressed: [bool; Key::COUNT],
    prev_pressed: [bool; Key::COUNT],
    touch_enabled: bool,
    touching: bool,
    prev_touching: bool,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new frame with the keys currently down
    pub fn update(&mut self, down: &[Key], touching: bool) {
        self.prev_pressed = self.pressed;
        self.pressed = [false; Key::COUNT];
        for &key in down {
            self.pressed[key.index()] = true;
        }
        self.prev_touching = self.touching;
        self.touching = touching;
        if touching {
            self.touch_enabled = true;
        }
    }

    pub fn set_touch_enabled(&mut self, enabled: bool) {
        self.touch_enabled = enabled;
    }
}

impl InputSource for InputState {
    fn held(&self, key: Key) -> bool {
        self.pressed[key.index()]
    }

    fn just_pressed(&self, key: Key) -> bool {
        self.pressed[key.index()] && !self.prev_pressed[key.index()]
    }

    fn touch_enabled(&self) -> bool {
        self.touch_enabled
    }

    fn touch_active(&self) -> bool {
        self.touching
    }

    fn touch_just_started(&self) -> bool {
        self.touching && !self.prev_touching
    }
}
