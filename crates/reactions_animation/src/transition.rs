//! Delayed, speed-scaled spring transitions
//!
//! A [`Transition`] describes *how* a value moves to a new target: which
//! spring drives it, how long to wait before it starts, and how fast the
//! spring clock runs. An [`AnimatedProperty`] holds one animated value and
//! applies transitions to it as its owner retargets it.
//!
//! ```rust
//! use reactions_animation::{AnimatedProperty, SpringConfig, Transition};
//!
//! let mut scale = AnimatedProperty::new(0.01);
//! let reveal = Transition::spring(SpringConfig::from_response(0.55, 0.5))
//!     .speed(1.5)
//!     .delay(0.07);
//!
//! scale.animate_to(1.0, reveal);
//! scale.step(0.05);
//! assert_eq!(scale.value(), 0.01); // still waiting out the delay
//! ```

use tracing::trace;

use crate::spring::{Spring, SpringConfig};

/// Largest simulation step; longer frames are split so stiff springs stay stable
const MAX_STEP: f32 = 1.0 / 120.0;

/// How a value travels to a new target
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transition {
    /// Spring driving the motion
    pub spring: SpringConfig,
    /// Seconds to wait before the motion starts
    pub delay: f32,
    /// Multiplier applied to the spring clock (2.0 plays twice as fast)
    pub speed: f32,
}

impl Transition {
    /// A transition driven by `spring`, starting immediately at normal speed
    pub fn spring(spring: SpringConfig) -> Self {
        Self {
            spring,
            delay: 0.0,
            speed: 1.0,
        }
    }

    /// Set the start delay in seconds
    pub fn delay(mut self, seconds: f32) -> Self {
        self.delay = seconds.max(0.0);
        self
    }

    /// Set the playback speed multiplier
    pub fn speed(mut self, speed: f32) -> Self {
        self.speed = speed.max(0.0);
        self
    }
}

impl Default for Transition {
    fn default() -> Self {
        Self::spring(SpringConfig::default())
    }
}

/// Per-index start delays for elements that reveal one after another
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stagger {
    /// Delay between consecutive elements, in seconds
    pub step: f32,
}

impl Stagger {
    pub fn new(step: f32) -> Self {
        Self {
            step: step.max(0.0),
        }
    }

    /// Delay in seconds for the element at `index`
    pub fn delay_for_index(&self, index: usize) -> f32 {
        self.step * index as f32
    }

    /// Apply this stagger's delay for `index` to a base transition
    pub fn apply(&self, index: usize, base: Transition) -> Transition {
        base.delay(self.delay_for_index(index))
    }
}

/// A single animated scalar driven by spring transitions
#[derive(Clone, Copy, Debug)]
pub struct AnimatedProperty {
    spring: Spring,
    /// Target waiting for its delay to elapse
    pending: Option<f32>,
    delay_remaining: f32,
    speed: f32,
}

impl AnimatedProperty {
    /// A unit-range value at rest at `initial`
    pub fn new(initial: f32) -> Self {
        Self::from_spring(Spring::unit(SpringConfig::default(), initial))
    }

    /// Wrap an existing spring (keeps its rest thresholds)
    pub fn from_spring(spring: Spring) -> Self {
        Self {
            spring,
            pending: None,
            delay_remaining: 0.0,
            speed: 1.0,
        }
    }

    /// Current animated value
    pub fn value(&self) -> f32 {
        self.spring.value()
    }

    /// Where the value is headed, including a target still waiting on its delay
    pub fn target(&self) -> f32 {
        self.pending.unwrap_or_else(|| self.spring.target())
    }

    /// Whether a delayed target has not started moving yet
    pub fn is_waiting(&self) -> bool {
        self.pending.is_some()
    }

    /// Whether the value is still changing or about to
    pub fn is_animating(&self) -> bool {
        self.pending.is_some() || !self.spring.is_settled()
    }

    /// Retarget the value using `transition`
    ///
    /// A retarget replaces any pending one; motion already in flight keeps
    /// its velocity once the new delay elapses.
    pub fn animate_to(&mut self, target: f32, transition: Transition) {
        self.spring.set_config(transition.spring);
        self.speed = transition.speed;
        if transition.delay > 0.0 {
            self.pending = Some(target);
            self.delay_remaining = transition.delay;
        } else {
            self.pending = None;
            self.delay_remaining = 0.0;
            self.spring.set_target(target);
        }
    }

    /// Advance by `dt` seconds of wall-clock time
    pub fn step(&mut self, dt: f32) {
        let mut dt = dt.max(0.0);

        if let Some(target) = self.pending {
            if dt < self.delay_remaining {
                self.delay_remaining -= dt;
                return;
            }
            dt -= self.delay_remaining;
            self.delay_remaining = 0.0;
            self.pending = None;
            self.spring.set_target(target);
            trace!(to = target, "delayed transition started");
        }

        let mut remaining = dt * self.speed;
        while remaining > 0.0 {
            let step = remaining.min(MAX_STEP);
            self.spring.step(step);
            remaining -= step;
        }
    }
}
