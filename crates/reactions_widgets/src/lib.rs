//! Reactions Widget Library
//!
//! A "hold and drag to react" picker, the popover behind a social like
//! button: press and hold the trigger, a row of reactions springs into view,
//! drag across it, and let go over the one you want.
//!
//! # Architecture
//!
//! 1. **FSM-Driven Gestures**: the picker moves through
//!    `Idle -> Pressing -> Expanded -> Idle`, driven by a long-press
//!    recognizer and a drag recognizer that watch the same pointer stream.
//!
//! 2. **Explicit Hover Mediation**: the picker owns one hover flag per
//!    reaction and lends each [`ReactionItem`] its own slot on every pointer
//!    update. Items detect their hover edge themselves and pulse haptics
//!    exactly once per entry.
//!
//! 3. **Spring Animations**: the row reveals with a staggered spring and
//!    hover/press feedback eases on quick springs, all stepped by
//!    [`ReactionPicker::update`].
//!
//! # Example
//!
//! ```ignore
//! use reactions_widgets::prelude::*;
//!
//! let mut picker = ReactionPicker::new(
//!     [("star.fill", "Star"), ("pencil", "Pencil")],
//!     None,
//!     |reaction| println!("{}", reaction.label()),
//! )?
//! .with_haptics(platform_haptics);
//!
//! picker.layout_stacked(Point::new(20.0, 300.0), 250.0);
//!
//! // Each frame
//! for event in input_events {
//!     picker.handle_input(&event);
//! }
//! picker.update(dt);
//! render(&picker.visuals());
//! ```

pub mod config;
pub mod error;
pub mod gesture;
pub mod picker;
pub mod reaction;

pub use config::PickerConfig;
pub use error::{PickerError, Result};
pub use gesture::{
    DragEvent, DragRecognizer, LongPressEvent, LongPressRecognizer, LongPressState,
};
pub use picker::{ButtonVisual, CommitCallback, GestureState, PickerVisuals, ReactionPicker};
pub use reaction::{ReactionDefinition, ReactionItem, ReactionVisual, SymbolId};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::config::PickerConfig;
    pub use crate::error::PickerError;
    pub use crate::picker::{GestureState, PickerVisuals, ReactionPicker};
    pub use crate::reaction::{ReactionDefinition, SymbolId};
    pub use reactions_core::{Point, Rect};
    pub use reactions_platform::{HapticFeedback, ImpactStyle, InputEvent, PointerEvent};
}
