//! Input event types for mouse and touch, and single-pointer tracking

use reactions_core::Point;
use tracing::trace;

/// Input events
#[derive(Clone, Debug)]
pub enum InputEvent {
    /// Mouse event
    Mouse(MouseEvent),
    /// Touch event (mobile/touchscreen)
    Touch(TouchEvent),
}

// ============================================================================
// Mouse Events
// ============================================================================

/// Mouse events
#[derive(Clone, Debug)]
pub enum MouseEvent {
    /// Mouse moved to position
    Moved {
        /// X position in window coordinates
        x: f32,
        /// Y position in window coordinates
        y: f32,
    },
    /// Mouse button pressed
    ButtonPressed {
        /// Which button was pressed
        button: MouseButton,
        /// X position when pressed
        x: f32,
        /// Y position when pressed
        y: f32,
    },
    /// Mouse button released
    ButtonReleased {
        /// Which button was released
        button: MouseButton,
        /// X position when released
        x: f32,
        /// Y position when released
        y: f32,
    },
    /// Mouse left the window
    Left,
}

/// Mouse buttons
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Left mouse button
    Left,
    /// Right mouse button
    Right,
    /// Middle mouse button (scroll wheel click)
    Middle,
    /// Other button with index
    Other(u16),
}

// ============================================================================
// Touch Events
// ============================================================================

/// Touch events for touchscreens
#[derive(Clone, Debug)]
pub enum TouchEvent {
    /// A touch started
    Started {
        /// Unique identifier for this touch
        id: u64,
        /// X position in window coordinates
        x: f32,
        /// Y position in window coordinates
        y: f32,
        /// Touch pressure (0.0 - 1.0)
        pressure: f32,
    },
    /// A touch moved
    Moved {
        /// Unique identifier for this touch
        id: u64,
        /// X position in window coordinates
        x: f32,
        /// Y position in window coordinates
        y: f32,
        /// Touch pressure (0.0 - 1.0)
        pressure: f32,
    },
    /// A touch ended
    Ended {
        /// Unique identifier for this touch
        id: u64,
        /// X position when ended
        x: f32,
        /// Y position when ended
        y: f32,
    },
    /// A touch was cancelled (e.g., by system gesture)
    Cancelled {
        /// Unique identifier for this touch
        id: u64,
    },
}

impl TouchEvent {
    /// Get the touch ID
    pub fn id(&self) -> u64 {
        match self {
            TouchEvent::Started { id, .. } => *id,
            TouchEvent::Moved { id, .. } => *id,
            TouchEvent::Ended { id, .. } => *id,
            TouchEvent::Cancelled { id } => *id,
        }
    }

    /// Get the position (returns None for Cancelled)
    pub fn position(&self) -> Option<(f32, f32)> {
        match self {
            TouchEvent::Started { x, y, .. } => Some((*x, *y)),
            TouchEvent::Moved { x, y, .. } => Some((*x, *y)),
            TouchEvent::Ended { x, y, .. } => Some((*x, *y)),
            TouchEvent::Cancelled { .. } => None,
        }
    }
}

// ============================================================================
// Pointer Events
// ============================================================================

/// Phase of a single-pointer interaction
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PointerPhase {
    /// Contact started (finger down, primary button pressed)
    Down,
    /// Contact moved while held
    Moved,
    /// Contact lifted
    Up,
    /// The platform took the contact away (system gesture, pointer left)
    Cancelled,
}

/// A device-independent pointer event
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerEvent {
    pub phase: PointerPhase,
    /// Window position; `None` only for [`PointerPhase::Cancelled`]
    pub position: Option<Point>,
}

impl PointerEvent {
    pub fn down(position: Point) -> Self {
        Self {
            phase: PointerPhase::Down,
            position: Some(position),
        }
    }

    pub fn moved(position: Point) -> Self {
        Self {
            phase: PointerPhase::Moved,
            position: Some(position),
        }
    }

    pub fn up(position: Point) -> Self {
        Self {
            phase: PointerPhase::Up,
            position: Some(position),
        }
    }

    pub fn cancelled() -> Self {
        Self {
            phase: PointerPhase::Cancelled,
            position: None,
        }
    }
}

/// Which physical contact is being followed
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum TrackedContact {
    Mouse,
    Touch(u64),
}

/// Follows exactly one pointer through a raw input stream
///
/// The first primary-button press or touch becomes the tracked contact;
/// everything from other buttons or touches is dropped until it ends.
/// Mouse movement with no button held is ignored.
#[derive(Clone, Debug, Default)]
pub struct PointerTracker {
    active: Option<TrackedContact>,
}

impl PointerTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a contact is currently held
    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    /// Translate a raw input event into a pointer event for the tracked contact
    pub fn track(&mut self, event: &InputEvent) -> Option<PointerEvent> {
        match event {
            InputEvent::Mouse(mouse) => self.track_mouse(mouse),
            InputEvent::Touch(touch) => self.track_touch(touch),
        }
    }

    fn track_mouse(&mut self, event: &MouseEvent) -> Option<PointerEvent> {
        let tracking_mouse = self.active == Some(TrackedContact::Mouse);
        match *event {
            MouseEvent::ButtonPressed {
                button: MouseButton::Left,
                x,
                y,
            } if self.active.is_none() => {
                self.active = Some(TrackedContact::Mouse);
                Some(PointerEvent::down(Point::new(x, y)))
            }
            MouseEvent::Moved { x, y } if tracking_mouse => {
                Some(PointerEvent::moved(Point::new(x, y)))
            }
            MouseEvent::ButtonReleased {
                button: MouseButton::Left,
                x,
                y,
            } if tracking_mouse => {
                self.active = None;
                Some(PointerEvent::up(Point::new(x, y)))
            }
            MouseEvent::Left if tracking_mouse => {
                self.active = None;
                Some(PointerEvent::cancelled())
            }
            _ => None,
        }
    }

    fn track_touch(&mut self, event: &TouchEvent) -> Option<PointerEvent> {
        let id = event.id();
        let tracked = self.active == Some(TrackedContact::Touch(id));
        match *event {
            TouchEvent::Started { x, y, .. } if self.active.is_none() => {
                self.active = Some(TrackedContact::Touch(id));
                Some(PointerEvent::down(Point::new(x, y)))
            }
            TouchEvent::Moved { x, y, .. } if tracked => {
                Some(PointerEvent::moved(Point::new(x, y)))
            }
            TouchEvent::Ended { x, y, .. } if tracked => {
                self.active = None;
                Some(PointerEvent::up(Point::new(x, y)))
            }
            TouchEvent::Cancelled { .. } if tracked => {
                self.active = None;
                Some(PointerEvent::cancelled())
            }
            _ => {
                trace!(id, "ignoring untracked touch");
                None
            }
        }
    }
}
