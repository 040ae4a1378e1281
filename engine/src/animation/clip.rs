//! Sprite-sheet clip player.
//!
//! Only the frame bookkeeping is kept; drawing belongs to the host.

use glam::Vec2;

/// Frame-index player for one sprite-sheet clip.
///
/// Frames advance once per `1 / speed` seconds. Reaching the last frame takes
/// one more interval to finish, after which the clip stays on its last frame
/// and reports inactive.
#[derive(Debug, Clone, PartialEq)]
pub struct Animation {
    frame_size: Vec2,
    sheet_columns: usize,
    sheet_rows: usize,
    frame_index: usize,
    active: bool,
    frame_interval: f32,
    elapsed: f32,
    /// Draw offset relative to the owner position
    pub offset: Vec2,
}

impl Animation {
    /// `speed` is in frames per second; values below 1 are raised to 1.
    pub fn new(frame_size: Vec2, sheet_columns: usize, sheet_rows: usize, speed: u32) -> Self {
        Self {
            frame_size,
            sheet_columns: sheet_columns.max(1),
            sheet_rows: sheet_rows.max(1),
            frame_index: 0,
            active: false,
            frame_interval: 1.0 / speed.max(1) as f32,
            elapsed: 0.0,
            offset: Vec2::ZERO,
        }
    }

    pub fn frame_size(&self) -> Vec2 {
        self.frame_size
    }

    pub fn frame_count(&self) -> usize {
        self.sheet_columns * self.sheet_rows
    }

    pub fn last_frame(&self) -> usize {
        self.frame_count() - 1
    }

    pub fn frame_index(&self) -> usize {
        self.frame_index
    }

    /// Seconds each frame stays on screen.
    pub fn frame_interval(&self) -> f32 {
        self.frame_interval
    }

    /// True while the clip is still playing.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Jump to a frame without changing the playing flag. Clamped to the sheet.
    pub fn set_frame_index(&mut self, index: usize) {
        self.frame_index = index.min(self.last_frame());
    }

    /// Start playing from `index` (clamped to the sheet).
    pub fn play_from_frame_index(&mut self, index: usize) {
        self.set_frame_index(index);
        self.active = true;
        self.elapsed = 0.0;
    }

    /// Stop playing and stay on the current frame.
    pub fn stop(&mut self) {
        self.active = false;
        self.elapsed = 0.0;
    }

    /// Advance the clip by `dt` seconds.
    pub fn update(&mut self, dt: f32) {
        if !self.active || !dt.is_finite() || dt <= 0.0 {
            return;
        }

        self.elapsed += dt;
        while self.elapsed >= self.frame_interval {
            self.elapsed -= self.frame_interval;
            if self.frame_index >= self.last_frame() {
                self.frame_index = self.last_frame();
                self.stop();
                break;
            }
            self.frame_index += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clip(columns: usize, rows: usize, speed: u32) -> Animation {
        Animation::new(Vec2::new(75.0, 60.0), columns, rows, speed)
    }

    #[test]
    fn test_frame_count_spans_sheet() {
        let mut a = clip(10, 3, 30);
        assert_eq!(a.frame_count(), 30);
        assert_eq!(a.last_frame(), 29);
        a.set_frame_index(13);
        assert_eq!(a.frame_index(), 13);
    }

    #[test]
    fn test_set_frame_index_clamps() {
        let mut a = clip(18, 1, 30);
        a.set_frame_index(40);
        assert_eq!(a.frame_index(), 17);
        assert!(!a.is_active());
    }

    #[test]
    fn test_update_advances_per_interval() {
        let mut a = clip(10, 1, 10);
        a.play_from_frame_index(0);
        a.update(0.04);
        assert_eq!(a.frame_index(), 0);
        a.update(0.07);
        assert_eq!(a.frame_index(), 1);
        a.update(0.3);
        assert_eq!(a.frame_index(), 4);
    }

    #[test]
    fn test_clip_finishes_one_interval_after_last_frame() {
        let mut a = clip(4, 1, 10);
        a.play_from_frame_index(0);
        // 3 advances to reach frame 3
        a.update(0.35);
        assert_eq!(a.frame_index(), 3);
        assert!(a.is_active());
        a.update(0.1);
        assert!(!a.is_active());
        assert_eq!(a.frame_index(), 3);
    }

    #[test]
    fn test_zero_delta_does_nothing() {
        let mut a = clip(4, 1, 10);
        a.play_from_frame_index(1);
        let before = a.clone();
        a.update(0.0);
        assert_eq!(a, before);
    }

    #[test]
    fn test_non_finite_delta_does_nothing() {
        let mut a = clip(4, 1, 10);
        a.play_from_frame_index(1);
        let before = a.clone();
        a.update(f32::NAN);
        a.update(f32::INFINITY);
        assert_eq!(a, before);
        a.update(0.1);
        assert_eq!(a.frame_index(), 2);
    }

    #[test]
    fn test_inactive_clip_does_not_advance() {
        let mut a = clip(4, 1, 10);
        a.update(1.0);
        assert_eq!(a.frame_index(), 0);
    }

    #[test]
    fn test_zero_speed_is_raised() {
        let a = clip(4, 1, 0);
        assert_eq!(a.frame_interval(), 1.0);
    }
}
