//! One Euro Filter - adaptive low-pass filter for landmark jitter
//!
//! Smooth when the hand is still (reduces jitter), responsive when it moves.
//! Applied per landmark before classification when enabled.

use std::f32::consts::PI;

use serde::{Deserialize, Serialize};

use super::landmarks::{HandLandmark, HandPose, LANDMARK_COUNT};

/// Tuning for [`HandSmoother`]
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct SmoothingConfig {
    /// Minimum cutoff frequency (Hz) - lower = smoother at rest
    pub min_cutoff: f32,
    /// Speed coefficient - higher = less lag during fast motion
    pub beta: f32,
}

impl Default for SmoothingConfig {
    fn default() -> Self {
        Self {
            min_cutoff: 1.0,
            beta: 0.15,
        }
    }
}

/// Adaptive low-pass filter for a single scalar
#[derive(Clone, Debug)]
pub struct OneEuroFilter {
    min_cutoff: f32,
    beta: f32,
    /// Derivative cutoff frequency (Hz)
    d_cutoff: f32,

    // State
    x_prev: f32,
    dx_prev: f32,
    t_prev: f64,
    initialized: bool,
}

impl OneEuroFilter {
    pub fn new(min_cutoff: f32, beta: f32) -> Self {
        Self {
            min_cutoff,
            beta,
            d_cutoff: 1.0,
            x_prev: 0.0,
            dx_prev: 0.0,
            t_prev: 0.0,
            initialized: false,
        }
    }

    fn smoothing_factor(t_e: f32, cutoff: f32) -> f32 {
        let r = 2.0 * PI * cutoff * t_e;
        r / (r + 1.0)
    }

    /// Filter a single value
    ///
    /// - `t`: timestamp in seconds
    /// - `x`: raw input value
    pub fn filter(&mut self, t: f64, x: f32) -> f32 {
        if !self.initialized {
            self.x_prev = x;
            self.t_prev = t;
            self.initialized = true;
            return x;
        }

        let t_e = (t - self.t_prev) as f32;
        if t_e <= 0.0 {
            return self.x_prev;
        }

        // 1. Estimate derivative
        let a_d = Self::smoothing_factor(t_e, self.d_cutoff);
        let dx = (x - self.x_prev) / t_e;
        let dx_hat = a_d * dx + (1.0 - a_d) * self.dx_prev;

        // 2. Adaptive cutoff: more smoothing when slow, less when fast
        let cutoff = self.min_cutoff + self.beta * dx_hat.abs();
        let a = Self::smoothing_factor(t_e, cutoff);

        // 3. Apply filter
        let x_hat = a * x + (1.0 - a) * self.x_prev;

        self.x_prev = x_hat;
        self.dx_prev = dx_hat;
        self.t_prev = t;

        x_hat
    }

    pub fn reset(&mut self) {
        self.initialized = false;
        self.dx_prev = 0.0;
    }
}

/// Pair of One Euro Filters for a 2D position
#[derive(Clone, Debug)]
pub struct OneEuroFilter2D {
    pub x: OneEuroFilter,
    pub y: OneEuroFilter,
}

impl OneEuroFilter2D {
    pub fn new(config: SmoothingConfig) -> Self {
        Self {
            x: OneEuroFilter::new(config.min_cutoff, config.beta),
            y: OneEuroFilter::new(config.min_cutoff, config.beta),
        }
    }

    pub fn filter(&mut self, t: f64, pos: (f32, f32)) -> (f32, f32) {
        (self.x.filter(t, pos.0), self.y.filter(t, pos.1))
    }

    pub fn reset(&mut self) {
        self.x.reset();
        self.y.reset();
    }
}

/// Per-landmark smoothing for a whole hand. Depth passes through untouched.
#[derive(Clone, Debug)]
pub struct HandSmoother {
    filters: Vec<OneEuroFilter2D>,
}

impl HandSmoother {
    pub fn new(config: SmoothingConfig) -> Self {
        Self {
            filters: (0..LANDMARK_COUNT).map(|_| OneEuroFilter2D::new(config)).collect(),
        }
    }

    /// Smooth one frame; `now_ms` is the frame timestamp in milliseconds
    pub fn apply(&mut self, pose: &HandPose, now_ms: u64) -> HandPose {
        let t = now_ms as f64 / 1000.0;
        let mut smoothed = *pose;
        for (landmark, filter) in smoothed.landmarks.iter_mut().zip(self.filters.iter_mut()) {
            let (x, y) = filter.filter(t, (landmark.x, landmark.y));
            *landmark = HandLandmark::new(x, y, landmark.z);
        }
        smoothed
    }

    pub fn reset(&mut self) {
        for filter in self.filters.iter_mut() {
            filter.reset();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_sample_passes_through() {
        let mut filter = OneEuroFilter::new(1.0, 0.15);
        assert_eq!(filter.filter(0.0, 0.7), 0.7);
    }

    #[test]
    fn test_step_is_damped_then_converges() {
        let mut filter = OneEuroFilter::new(1.0, 0.0);
        filter.filter(0.0, 0.0);
        let first = filter.filter(1.0 / 30.0, 1.0);
        assert!(first > 0.0 && first < 1.0, "step should be damped, got {}", first);

        let mut last = first;
        for i in 2..300 {
            last = filter.filter(i as f64 / 30.0, 1.0);
        }
        assert!((last - 1.0).abs() < 1e-3, "should converge, got {}", last);
    }

    #[test]
    fn test_non_increasing_time_holds_value() {
        let mut filter = OneEuroFilter::new(1.0, 0.15);
        filter.filter(1.0, 0.2);
        assert_eq!(filter.filter(1.0, 0.9), 0.2);
    }

    #[test]
    fn test_hand_smoother_keeps_depth() {
        let mut smoother = HandSmoother::new(SmoothingConfig::default());
        let pose = HandPose::new([HandLandmark::new(0.5, 0.5, -0.3); LANDMARK_COUNT]);
        smoother.apply(&pose, 0);
        let moved = pose.map(|lm| HandLandmark::new(lm.x + 0.1, lm.y, lm.z));
        let out = smoother.apply(&moved, 33);
        assert!(out.landmarks[0].x > 0.5 && out.landmarks[0].x < 0.6);
        assert_eq!(out.landmarks[0].z, -0.3);
    }

    #[test]
    fn test_reset_forgets_history() {
        let mut smoother = HandSmoother::new(SmoothingConfig::default());
        let a = HandPose::new([HandLandmark::new(0.1, 0.1, 0.0); LANDMARK_COUNT]);
        let b = HandPose::new([HandLandmark::new(0.9, 0.9, 0.0); LANDMARK_COUNT]);
        smoother.apply(&a, 0);
        smoother.reset();
        assert_eq!(smoother.apply(&b, 33), b);
    }
}
