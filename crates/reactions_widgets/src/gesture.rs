//! Gesture recognizers for press-and-drag interactions
//!
//! Two recognizers watch the same pointer stream side by side:
//!
//! - [`LongPressRecognizer`] begins on contact and is recognized once the
//!   contact has been held long enough without drifting away
//! - [`DragRecognizer`] reports every position from first contact (minimum
//!   distance zero) until the contact lifts
//!
//! Neither blocks the other; the owner decides what each outcome means.

use reactions_core::Point;
use reactions_platform::{PointerEvent, PointerPhase};

/// Slack for accumulated frame times landing a hair under the threshold
const DURATION_EPSILON: f32 = 1e-4;

/// Long-press recognizer states
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LongPressState {
    /// No contact
    #[default]
    Idle,
    /// Contact held, threshold not reached yet
    Pending,
    /// Threshold reached while held
    Recognized,
    /// Contact drifted too far or lifted early; waits for the contact to end
    Failed,
}

/// Long-press outcomes reported to the owner
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LongPressEvent {
    /// Contact started; the press may still become a long press
    Began,
    /// The contact was held for the full duration
    Recognized,
    /// The press ended or drifted before the duration elapsed
    Failed,
}

/// Recognizes a contact held in place for a minimum duration
#[derive(Clone, Debug)]
pub struct LongPressRecognizer {
    min_duration: f32,
    tolerance: f32,
    origin: Option<Point>,
    elapsed: f32,
    state: LongPressState,
}

impl LongPressRecognizer {
    pub fn new(min_duration: f32, tolerance: f32) -> Self {
        Self {
            min_duration,
            tolerance,
            origin: None,
            elapsed: 0.0,
            state: LongPressState::Idle,
        }
    }

    pub fn state(&self) -> LongPressState {
        self.state
    }

    pub fn reset(&mut self) {
        self.origin = None;
        self.elapsed = 0.0;
        self.state = LongPressState::Idle;
    }

    /// Feed a pointer event
    pub fn handle(&mut self, event: &PointerEvent) -> Option<LongPressEvent> {
        match (event.phase, self.state) {
            (PointerPhase::Down, LongPressState::Idle) => {
                self.origin = event.position;
                self.elapsed = 0.0;
                self.state = LongPressState::Pending;
                Some(LongPressEvent::Began)
            }
            (PointerPhase::Moved, LongPressState::Pending) => {
                let drifted = match (self.origin, event.position) {
                    (Some(origin), Some(position)) => {
                        origin.distance_to(position) > self.tolerance
                    }
                    _ => false,
                };
                if drifted {
                    self.state = LongPressState::Failed;
                    Some(LongPressEvent::Failed)
                } else {
                    None
                }
            }
            (PointerPhase::Up | PointerPhase::Cancelled, LongPressState::Pending) => {
                self.reset();
                Some(LongPressEvent::Failed)
            }
            (PointerPhase::Up | PointerPhase::Cancelled, _) => {
                self.reset();
                None
            }
            _ => None,
        }
    }

    /// Advance the hold timer by `dt` seconds
    pub fn update(&mut self, dt: f32) -> Option<LongPressEvent> {
        if self.state != LongPressState::Pending {
            return None;
        }

        self.elapsed += dt.max(0.0);
        if self.elapsed + DURATION_EPSILON >= self.min_duration {
            self.state = LongPressState::Recognized;
            Some(LongPressEvent::Recognized)
        } else {
            None
        }
    }
}

/// Drag outcomes reported to the owner
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DragEvent {
    /// Contact started at this location
    Began(Point),
    /// Contact moved to this location
    Changed(Point),
    /// Contact lifted at this location
    Ended(Point),
    /// The platform took the contact away
    Cancelled,
}

/// Tracks a contact from touch-down to lift with no minimum distance
#[derive(Clone, Debug, Default)]
pub struct DragRecognizer {
    /// Last known contact location; `None` while no contact is held
    location: Option<Point>,
}

impl DragRecognizer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        self.location.is_some()
    }

    /// Feed a pointer event
    pub fn handle(&mut self, event: &PointerEvent) -> Option<DragEvent> {
        match (event.phase, event.position) {
            (PointerPhase::Down, Some(position)) if !self.is_active() => {
                self.location = Some(position);
                Some(DragEvent::Began(position))
            }
            (PointerPhase::Moved, Some(position)) if self.is_active() => {
                self.location = Some(position);
                Some(DragEvent::Changed(position))
            }
            (PointerPhase::Up, position) => {
                let last = self.location.take()?;
                Some(DragEvent::Ended(position.unwrap_or(last)))
            }
            (PointerPhase::Cancelled, _) => {
                self.location.take()?;
                Some(DragEvent::Cancelled)
            }
            _ => None,
        }
    }
}
