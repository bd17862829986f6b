//! Reactions Platform Abstraction Layer
//!
//! Platform-agnostic types for the two things the picker needs from its host:
//!
//! - [`InputEvent`] - mouse and touch input as delivered by the windowing
//!   backend, plus [`PointerTracker`] which follows a single pointer through
//!   it and yields [`PointerEvent`]s
//! - [`HapticFeedback`] - the tactile pulse collaborator
//!
//! # Example
//!
//! ```rust
//! use reactions_platform::*;
//!
//! let mut tracker = PointerTracker::new();
//! let down = InputEvent::Touch(TouchEvent::Started { id: 7, x: 10.0, y: 20.0, pressure: 1.0 });
//!
//! let pointer = tracker.track(&down).unwrap();
//! assert_eq!(pointer.phase, PointerPhase::Down);
//! ```

mod haptics;
mod input;

// Re-export all public types
pub use haptics::{HapticFeedback, ImpactStyle, NoopHaptics, SharedHaptics};
pub use input::{
    InputEvent, MouseButton, MouseEvent, PointerEvent, PointerPhase, PointerTracker, TouchEvent,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::haptics::{HapticFeedback, ImpactStyle, NoopHaptics, SharedHaptics};
    pub use crate::input::{
        InputEvent, MouseButton, MouseEvent, PointerEvent, PointerPhase, PointerTracker,
        TouchEvent,
    };
}
