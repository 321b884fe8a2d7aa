//! Rolling wrist trail for coarse movement detection
//!
//! Stores the last 30 wrist positions (~1 s at 30 fps) and reports the
//! dominant direction when the hand has travelled far enough.

/// Number of frames in the motion window
pub const TRAIL_SIZE: usize = 30;

/// Frames required before any movement is reported
pub const MIN_TRAIL_FRAMES: usize = 5;

/// Oldest-to-newest displacement (normalized image units) that counts as a move
pub const MOVE_THRESHOLD: f32 = 0.2;

/// Direction of travel in image space (+x right, +y down)
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Movement {
    Left,
    Right,
    Up,
    Down,
}

impl Movement {
    pub fn as_str(&self) -> &'static str {
        match self {
            Movement::Left => "MOVE_LEFT",
            Movement::Right => "MOVE_RIGHT",
            Movement::Up => "MOVE_UP",
            Movement::Down => "MOVE_DOWN",
        }
    }
}

/// Rolling buffer that keeps the last 30 wrist positions in chronological order
#[derive(Clone, Debug)]
pub struct WristTrail {
    /// Circular buffer of (x, y)
    data: [(f32, f32); TRAIL_SIZE],

    /// Next slot to write
    write_index: usize,

    /// Whether the buffer has wrapped at least once
    filled: bool,
}

impl WristTrail {
    pub fn new() -> Self {
        Self {
            data: [(0.0, 0.0); TRAIL_SIZE],
            write_index: 0,
            filled: false,
        }
    }

    pub fn push(&mut self, wrist: (f32, f32)) {
        self.data[self.write_index] = wrist;
        self.write_index = (self.write_index + 1) % TRAIL_SIZE;

        if self.write_index == 0 {
            self.filled = true;
        }
    }

    pub fn frame_count(&self) -> usize {
        if self.filled {
            TRAIL_SIZE
        } else {
            self.write_index
        }
    }

    fn oldest(&self) -> Option<(f32, f32)> {
        match self.frame_count() {
            0 => None,
            _ if self.filled => Some(self.data[self.write_index]),
            _ => Some(self.data[0]),
        }
    }

    fn newest(&self) -> Option<(f32, f32)> {
        match self.frame_count() {
            0 => None,
            _ => Some(self.data[(self.write_index + TRAIL_SIZE - 1) % TRAIL_SIZE]),
        }
    }

    /// Horizontal travel is checked first, then vertical
    pub fn movement(&self) -> Option<Movement> {
        if self.frame_count() < MIN_TRAIL_FRAMES {
            return None;
        }
        let (x0, y0) = self.oldest()?;
        let (x1, y1) = self.newest()?;
        let (dx, dy) = (x1 - x0, y1 - y0);

        if dx.abs() > MOVE_THRESHOLD {
            Some(if dx > 0.0 { Movement::Right } else { Movement::Left })
        } else if dy.abs() > MOVE_THRESHOLD {
            Some(if dy > 0.0 { Movement::Down } else { Movement::Up })
        } else {
            None
        }
    }

    pub fn clear(&mut self) {
        self.data = [(0.0, 0.0); TRAIL_SIZE];
        self.write_index = 0;
        self.filled = false;
    }
}

impl Default for WristTrail {
    fn default() -> Self {
        Self::new()
    }
}
