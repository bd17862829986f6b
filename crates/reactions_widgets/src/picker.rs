//! Reaction picker with FSM-driven press-and-drag selection
//!
//! The ReactionPicker widget provides:
//! - Long press on the trigger to reveal a row of reactions
//! - Drag across the row to highlight the reaction under the pointer
//! - Release to commit the highlighted reaction through a callback
//! - Staggered spring entrance and hover feedback with haptic pulses
//!
//! # Gesture states
//!
//! ```text
//! Idle --down on button--> Pressing --held 300ms--> Expanded --up--> (commit) --> Idle
//!                    |                        |
//!                    +--up / cancel-----------+--cancel--> Idle (no commit)
//! ```
//!
//! A long-press recognizer owns the `Pressing -> Expanded` edge and a drag
//! recognizer owns pointer tracking and the release. Both see every event.
//!
//! # Example
//!
//! ```rust
//! use reactions_core::{Point, Rect};
//! use reactions_platform::PointerEvent;
//! use reactions_widgets::ReactionPicker;
//!
//! let mut picker = ReactionPicker::new(
//!     [("star.fill", "Star"), ("pencil", "Pencil")],
//!     None,
//!     |reaction| println!("picked {}", reaction.label()),
//! )
//! .unwrap();
//! picker.layout(Rect::new(0.0, 0.0, 100.0, 75.0), Rect::new(0.0, 82.0, 110.0, 50.0));
//!
//! picker.handle_pointer(PointerEvent::down(Point::new(20.0, 100.0)));
//! picker.update(0.3);
//! picker.handle_pointer(PointerEvent::moved(Point::new(75.0, 40.0)));
//! picker.handle_pointer(PointerEvent::up(Point::new(75.0, 40.0)));
//!
//! assert_eq!(picker.selected_reaction().map(|r| r.label()), Some("Pencil"));
//! ```

use std::fmt;
use std::sync::Arc;

use reactions_animation::AnimatedProperty;
use reactions_core::{Point, Rect};
use reactions_platform::{
    ImpactStyle, InputEvent, NoopHaptics, PointerEvent, PointerPhase, PointerTracker,
    SharedHaptics,
};
use smallvec::SmallVec;
use tracing::{debug, trace};

use crate::config::PickerConfig;
use crate::error::{PickerError, Result};
use crate::gesture::{DragEvent, DragRecognizer, LongPressEvent, LongPressRecognizer};
use crate::reaction::{ReactionDefinition, ReactionItem, ReactionVisual, SymbolId};

/// Callback invoked with the committed reaction
pub type CommitCallback = Box<dyn FnMut(ReactionDefinition) + Send>;

/// Picker gesture states
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GestureState {
    /// Nothing held, row hidden
    #[default]
    Idle,
    /// Pointer held, waiting for the long-press threshold
    Pressing,
    /// Row revealed; releasing commits the hovered reaction
    Expanded,
}

/// What a renderer needs to draw the trigger button
#[derive(Clone, Debug, PartialEq)]
pub struct ButtonVisual {
    pub icon: SymbolId,
    pub label: String,
    pub bounds: Option<Rect>,
    pub opacity: f32,
    pub scale: f32,
}

/// Render snapshot of the whole picker
#[derive(Clone, Debug, PartialEq)]
pub struct PickerVisuals {
    /// Row background opacity
    pub row_opacity: f32,
    pub row_bounds: Option<Rect>,
    pub reactions: Vec<ReactionVisual>,
    pub button: ButtonVisual,
}

/// Hold-and-drag reaction picker
pub struct ReactionPicker {
    config: PickerConfig,
    items: SmallVec<[ReactionItem; 8]>,
    /// One slot per item; items only ever receive their own slot
    hover_flags: SmallVec<[bool; 8]>,
    pointer_position: Option<Point>,
    state: GestureState,
    is_pressing: bool,
    selected: Option<ReactionDefinition>,
    on_commit: CommitCallback,
    haptics: SharedHaptics,
    tracker: PointerTracker,
    long_press: LongPressRecognizer,
    drag: DragRecognizer,
    row_bounds: Option<Rect>,
    button_bounds: Option<Rect>,
    row_opacity: AnimatedProperty,
    button_opacity: AnimatedProperty,
    button_scale: AnimatedProperty,
}

impl ReactionPicker {
    /// Create a picker with the default configuration
    ///
    /// `reactions` are `(icon, label)` pairs in display order. `default_index`
    /// preselects one of them for the trigger button.
    pub fn new<I, S, L, F>(reactions: I, default_index: Option<usize>, on_commit: F) -> Result<Self>
    where
        I: IntoIterator<Item = (S, L)>,
        S: Into<SymbolId>,
        L: Into<String>,
        F: FnMut(ReactionDefinition) + Send + 'static,
    {
        Self::with_config(PickerConfig::default(), reactions, default_index, on_commit)
    }

    /// Create a picker with a custom configuration
    pub fn with_config<I, S, L, F>(
        config: PickerConfig,
        reactions: I,
        default_index: Option<usize>,
        on_commit: F,
    ) -> Result<Self>
    where
        I: IntoIterator<Item = (S, L)>,
        S: Into<SymbolId>,
        L: Into<String>,
        F: FnMut(ReactionDefinition) + Send + 'static,
    {
        let items: SmallVec<[ReactionItem; 8]> = reactions
            .into_iter()
            .enumerate()
            .map(|(index, (icon, label))| {
                ReactionItem::new(ReactionDefinition::new(icon, label, index), &config)
            })
            .collect();

        if items.is_empty() {
            return Err(PickerError::EmptyReactions);
        }

        let selected = match default_index {
            Some(index) => match items.get(index) {
                Some(item) => Some(item.definition().clone()),
                None => {
                    return Err(PickerError::DefaultOutOfRange {
                        index,
                        len: items.len(),
                    })
                }
            },
            None => None,
        };

        debug!(
            reactions = items.len(),
            default = ?default_index,
            "reaction picker created"
        );

        let hover_flags = SmallVec::from_elem(false, items.len());
        let long_press =
            LongPressRecognizer::new(config.long_press_duration, config.long_press_tolerance);

        Ok(Self {
            items,
            hover_flags,
            pointer_position: None,
            state: GestureState::Idle,
            is_pressing: false,
            selected,
            on_commit: Box::new(on_commit),
            haptics: Arc::new(NoopHaptics),
            tracker: PointerTracker::new(),
            long_press,
            drag: DragRecognizer::new(),
            row_bounds: None,
            button_bounds: None,
            row_opacity: AnimatedProperty::new(0.0),
            button_opacity: AnimatedProperty::new(1.0),
            button_scale: AnimatedProperty::new(1.0),
            config,
        })
    }

    /// Use `haptics` for tactile pulses
    pub fn with_haptics(mut self, haptics: SharedHaptics) -> Self {
        self.haptics = haptics;
        self
    }

    pub fn set_haptics(&mut self, haptics: SharedHaptics) {
        self.haptics = haptics;
    }

    pub fn config(&self) -> &PickerConfig {
        &self.config
    }

    // =========================================================================
    // Layout
    // =========================================================================

    /// Place the reaction row and the trigger button
    ///
    /// The row is split into equal-width slots in reaction order.
    pub fn layout(&mut self, row: Rect, button: Rect) {
        let slots: SmallVec<[Rect; 8]> = row.columns(self.items.len()).collect();
        for (item, slot) in self.items.iter_mut().zip(slots) {
            item.set_bounds(slot);
        }
        self.row_bounds = Some(row);
        self.button_bounds = Some(button);
    }

    /// Stack the row above the button starting at `origin`
    pub fn layout_stacked(&mut self, origin: Point, row_width: f32) {
        let row = Rect::new(origin.x, origin.y, row_width, self.config.row_height);
        let button = Rect::new(
            origin.x,
            row.max_y() + self.config.row_spacing,
            self.config.button_size.width,
            self.config.button_size.height,
        );
        self.layout(row, button);
    }

    /// Set one reaction's rect directly, for hosts with their own layout
    pub fn set_item_bounds(&mut self, index: usize, bounds: Rect) -> Result<()> {
        let len = self.items.len();
        let item = self
            .items
            .get_mut(index)
            .ok_or(PickerError::ItemOutOfRange { index, len })?;
        item.set_bounds(bounds);

        self.row_bounds = Some(match self.row_bounds {
            Some(row) => row.union(&bounds),
            None => bounds,
        });
        Ok(())
    }

    /// Place the trigger button
    pub fn set_button_bounds(&mut self, bounds: Rect) {
        self.button_bounds = Some(bounds);
    }

    /// Whether a press at `point` can start a gesture
    ///
    /// Gestures start on the trigger button only; the row is hidden until the
    /// press expands it. Before the button is placed every point qualifies.
    pub fn in_trigger_region(&self, point: Point) -> bool {
        self.button_bounds.map_or(true, |button| button.contains(point))
    }

    // =========================================================================
    // Event Handling
    // =========================================================================

    /// Handle a raw platform input event
    ///
    /// Only one pointer is followed at a time; see [`PointerTracker`].
    pub fn handle_input(&mut self, event: &InputEvent) {
        if let Some(pointer) = self.tracker.track(event) {
            self.handle_pointer(pointer);
        }
    }

    /// Handle a pointer event
    pub fn handle_pointer(&mut self, event: PointerEvent) {
        if event.phase == PointerPhase::Down {
            let accepted = self.state == GestureState::Idle
                && !self.drag.is_active()
                && event.position.is_some_and(|p| self.in_trigger_region(p));
            if !accepted {
                trace!(position = ?event.position, "ignoring press off the trigger");
                return;
            }
        }

        if let Some(outcome) = self.long_press.handle(&event) {
            self.on_long_press(outcome);
        }
        if let Some(outcome) = self.drag.handle(&event) {
            self.on_drag(outcome);
        }
    }

    fn on_long_press(&mut self, outcome: LongPressEvent) {
        match outcome {
            LongPressEvent::Began => {
                debug!("press began");
                self.state = GestureState::Pressing;
                self.haptics.impact(ImpactStyle::Light);
            }
            LongPressEvent::Recognized => self.expand(),
            LongPressEvent::Failed => {
                debug!(state = ?self.state, "long press failed");
            }
        }
    }

    fn on_drag(&mut self, outcome: DragEvent) {
        match outcome {
            DragEvent::Began(position) | DragEvent::Changed(position) => {
                self.set_pressing(true);
                self.set_pointer(Some(position));
            }
            DragEvent::Ended(_) => {
                let commit = self.state == GestureState::Expanded;
                self.finish(commit);
            }
            DragEvent::Cancelled => self.finish(false),
        }
    }

    /// Advance timers and animations (call each frame)
    ///
    /// Animations step before the hold timer, so a reveal triggered by this
    /// frame starts moving on the next one.
    pub fn update(&mut self, dt: f32) {
        self.row_opacity.step(dt);
        self.button_opacity.step(dt);
        self.button_scale.step(dt);
        for item in &mut self.items {
            item.update(dt);
        }

        if let Some(outcome) = self.long_press.update(dt) {
            self.on_long_press(outcome);
        }
    }

    /// Whether any animation is still running
    pub fn is_animating(&self) -> bool {
        self.row_opacity.is_animating()
            || self.button_opacity.is_animating()
            || self.button_scale.is_animating()
            || self.items.iter().any(ReactionItem::is_animating)
    }

    // =========================================================================
    // Internal
    // =========================================================================

    fn expand(&mut self) {
        if self.state != GestureState::Pressing {
            return;
        }
        debug!(reactions = self.items.len(), "reaction row expanded");
        self.state = GestureState::Expanded;

        self.row_opacity
            .animate_to(1.0, self.config.feedback_transition());
        for item in &mut self.items {
            item.reveal(&self.config);
        }
    }

    fn collapse(&mut self) {
        self.row_opacity
            .animate_to(0.0, self.config.feedback_transition());
        for item in &mut self.items {
            item.hide(&self.config);
        }
    }

    fn set_pressing(&mut self, pressing: bool) {
        if self.is_pressing == pressing {
            return;
        }
        self.is_pressing = pressing;

        let transition = self.config.feedback_transition();
        let (opacity, scale) = if pressing {
            (self.config.pressed_opacity, self.config.pressed_scale)
        } else {
            (1.0, 1.0)
        };
        self.button_opacity.animate_to(opacity, transition);
        self.button_scale.animate_to(scale, transition);
    }

    /// Store the pointer and fan it out to every reaction in index order
    fn set_pointer(&mut self, position: Option<Point>) {
        self.pointer_position = position;
        trace!(?position, "pointer fan-out");

        let haptics = &*self.haptics;
        for (item, slot) in self.items.iter_mut().zip(self.hover_flags.iter_mut()) {
            item.update_hover(position, slot, haptics, &self.config);
        }
    }

    /// End the gesture, committing the hovered reaction when `commit` is set
    fn finish(&mut self, commit: bool) {
        let hovered = self.selected_index();
        let was_expanded = self.state == GestureState::Expanded;

        self.set_pointer(None);
        self.set_pressing(false);
        if was_expanded {
            self.collapse();
        }
        self.state = GestureState::Idle;
        self.long_press.reset();

        if !commit {
            debug!("gesture cancelled");
            return;
        }

        match hovered {
            Some(index) => {
                let reaction = self.items[index].definition().clone();
                debug!(index, label = reaction.label(), "reaction committed");
                self.selected = Some(reaction.clone());
                (self.on_commit)(reaction);
            }
            None => debug!("released with no reaction hovered"),
        }
    }

    // =========================================================================
    // State Queries
    // =========================================================================

    pub fn state(&self) -> GestureState {
        self.state
    }

    pub fn is_expanded(&self) -> bool {
        self.state == GestureState::Expanded
    }

    /// Whether the trigger shows pressed feedback
    pub fn is_pressing(&self) -> bool {
        self.is_pressing
    }

    pub fn pointer_position(&self) -> Option<Point> {
        self.pointer_position
    }

    pub fn hover_flags(&self) -> &[bool] {
        &self.hover_flags
    }

    /// Index of the hovered reaction; the first one wins if several overlap
    pub fn selected_index(&self) -> Option<usize> {
        self.hover_flags.iter().position(|&hovered| hovered)
    }

    /// The sticky selection shown on the trigger
    pub fn selected_reaction(&self) -> Option<&ReactionDefinition> {
        self.selected.as_ref()
    }

    pub fn reactions(&self) -> impl Iterator<Item = &ReactionDefinition> + '_ {
        self.items.iter().map(ReactionItem::definition)
    }

    pub fn item(&self, index: usize) -> Option<&ReactionItem> {
        self.items.get(index)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Render snapshot of the current frame
    pub fn visuals(&self) -> PickerVisuals {
        let (icon, label) = match &self.selected {
            Some(reaction) => (reaction.icon().clone(), reaction.label().to_string()),
            None => (
                SymbolId::new(self.config.placeholder_icon.as_str()),
                self.config.placeholder_label.clone(),
            ),
        };

        PickerVisuals {
            row_opacity: self.row_opacity.value(),
            row_bounds: self.row_bounds,
            reactions: self
                .items
                .iter()
                .zip(self.hover_flags.iter())
                .map(|(item, &hovered)| item.visual(hovered, &self.config))
                .collect(),
            button: ButtonVisual {
                icon,
                label,
                bounds: self.button_bounds,
                opacity: self.button_opacity.value(),
                scale: self.button_scale.value(),
            },
        }
    }
}

impl fmt::Debug for ReactionPicker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReactionPicker")
            .field("reactions", &self.items.len())
            .field("state", &self.state)
            .field("is_pressing", &self.is_pressing)
            .field("pointer_position", &self.pointer_position)
            .field("hover_flags", &self.hover_flags)
            .field("selected", &self.selected)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reactions_platform::{MouseButton, MouseEvent, TouchEvent};
    use std::sync::Mutex;

    type Commits = Arc<Mutex<Vec<ReactionDefinition>>>;
    type Pulses = Arc<Mutex<Vec<ImpactStyle>>>;

    fn picker(default_index: Option<usize>) -> (ReactionPicker, Commits, Pulses) {
        let commits: Commits = Arc::default();
        let pulses: Pulses = Arc::default();
        let sink = commits.clone();
        let pulse_sink = pulses.clone();

        let mut picker = ReactionPicker::new(
            [("star.fill", "Star"), ("pencil", "Pencil"), ("scribble", "Bolt")],
            default_index,
            move |reaction| sink.lock().unwrap().push(reaction),
        )
        .unwrap()
        .with_haptics(Arc::new(move |style: ImpactStyle| {
            pulse_sink.lock().unwrap().push(style)
        }));

        // Row of three 50pt slots above a button
        picker.layout(
            Rect::new(0.0, 0.0, 150.0, 75.0),
            Rect::new(0.0, 82.0, 110.0, 50.0),
        );
        (picker, commits, pulses)
    }

    const BUTTON: Point = Point::new(20.0, 100.0);

    #[test]
    fn test_construction_errors() {
        let empty: [(&str, &str); 0] = [];
        assert_eq!(
            ReactionPicker::new(empty, None, |_| {}).unwrap_err(),
            PickerError::EmptyReactions
        );
        assert_eq!(
            ReactionPicker::new([("star", "Star")], Some(1), |_| {}).unwrap_err(),
            PickerError::DefaultOutOfRange { index: 1, len: 1 }
        );
    }

    #[test]
    fn test_initial_state() {
        let (picker, _, _) = picker(Some(2));

        assert_eq!(picker.state(), GestureState::Idle);
        assert_eq!(picker.hover_flags(), &[false, false, false]);
        assert_eq!(picker.pointer_position(), None);
        assert_eq!(picker.selected_reaction().map(|r| r.index()), Some(2));
        assert_eq!(picker.len(), 3);

        let labels: Vec<&str> = picker.reactions().map(|r| r.label()).collect();
        assert_eq!(labels, vec!["Star", "Pencil", "Bolt"]);
    }

    #[test]
    fn test_press_pulses_and_shows_feedback() {
        let (mut picker, _, pulses) = picker(None);

        picker.handle_pointer(PointerEvent::down(BUTTON));

        assert_eq!(picker.state(), GestureState::Pressing);
        assert!(picker.is_pressing());
        assert_eq!(picker.pointer_position(), Some(BUTTON));
        assert_eq!(*pulses.lock().unwrap(), vec![ImpactStyle::Light]);
        assert!(!picker.is_expanded());

        picker.update(0.3);
        assert!(picker.is_expanded());
    }

    #[test]
    fn test_press_outside_ignored() {
        let (mut picker, _, pulses) = picker(None);

        picker.handle_pointer(PointerEvent::down(Point::new(500.0, 500.0)));
        picker.update(1.0);

        assert_eq!(picker.state(), GestureState::Idle);
        assert!(!picker.is_pressing());
        assert!(pulses.lock().unwrap().is_empty());
    }

    #[test]
    fn test_press_on_hidden_row_ignored() {
        let (mut picker, commits, pulses) = picker(None);
        assert_eq!(picker.visuals().row_opacity, 0.0);

        // Over the star slot while the row is still hidden
        let hidden_star = Point::new(25.0, 40.0);
        picker.handle_pointer(PointerEvent::down(hidden_star));
        picker.update(0.3);
        picker.handle_pointer(PointerEvent::up(hidden_star));

        assert_eq!(picker.state(), GestureState::Idle);
        assert_eq!(picker.hover_flags(), &[false, false, false]);
        assert!(commits.lock().unwrap().is_empty());
        assert!(pulses.lock().unwrap().is_empty());
    }

    #[test]
    fn test_unplaced_picker_accepts_any_press() {
        let mut picker =
            ReactionPicker::new([("star.fill", "Star")], None, |_| {}).unwrap();
        assert!(picker.in_trigger_region(Point::new(-500.0, 900.0)));

        picker.handle_pointer(PointerEvent::down(Point::new(-500.0, 900.0)));
        assert_eq!(picker.state(), GestureState::Pressing);
    }

    #[test]
    fn test_commit_resets_state() {
        let (mut picker, commits, _) = picker(None);

        picker.handle_pointer(PointerEvent::down(BUTTON));
        picker.update(0.35);
        picker.handle_pointer(PointerEvent::moved(Point::new(75.0, 40.0)));
        assert_eq!(picker.hover_flags(), &[false, true, false]);
        assert_eq!(picker.selected_index(), Some(1));

        picker.handle_pointer(PointerEvent::up(Point::new(75.0, 40.0)));

        assert_eq!(picker.state(), GestureState::Idle);
        assert!(!picker.is_pressing());
        assert_eq!(picker.pointer_position(), None);
        assert_eq!(picker.hover_flags(), &[false, false, false]);
        assert_eq!(picker.selected_reaction().map(|r| r.label()), Some("Pencil"));
        assert_eq!(commits.lock().unwrap().len(), 1);
    }

    #[test]
    fn test_overlap_first_match_wins() {
        let (mut picker, commits, _) = picker(None);
        picker
            .set_item_bounds(2, Rect::new(40.0, 0.0, 30.0, 75.0))
            .unwrap();

        picker.handle_pointer(PointerEvent::down(BUTTON));
        picker.update(0.3);
        picker.handle_pointer(PointerEvent::moved(Point::new(60.0, 30.0)));
        assert_eq!(picker.hover_flags(), &[false, true, true]);

        picker.handle_pointer(PointerEvent::up(Point::new(60.0, 30.0)));
        assert_eq!(commits.lock().unwrap()[0].index(), 1);
    }

    #[test]
    fn test_set_item_bounds_out_of_range() {
        let (mut picker, _, _) = picker(None);
        assert_eq!(
            picker.set_item_bounds(3, Rect::ZERO),
            Err(PickerError::ItemOutOfRange { index: 3, len: 3 })
        );
    }

    #[test]
    fn test_raw_input_events() {
        let (mut picker, commits, _) = picker(None);

        picker.handle_input(&InputEvent::Mouse(MouseEvent::ButtonPressed {
            button: MouseButton::Left,
            x: BUTTON.x,
            y: BUTTON.y,
        }));
        picker.update(0.3);

        // A second finger is ignored while the mouse is held
        picker.handle_input(&InputEvent::Touch(TouchEvent::Started {
            id: 1,
            x: 125.0,
            y: 40.0,
            pressure: 1.0,
        }));
        assert_eq!(picker.hover_flags(), &[false, false, false]);

        picker.handle_input(&InputEvent::Mouse(MouseEvent::Moved { x: 25.0, y: 40.0 }));
        picker.handle_input(&InputEvent::Mouse(MouseEvent::ButtonReleased {
            button: MouseButton::Left,
            x: 25.0,
            y: 40.0,
        }));

        let commits = commits.lock().unwrap();
        assert_eq!(commits.len(), 1);
        assert_eq!(commits[0].label(), "Star");
    }

    #[test]
    fn test_visuals() {
        let (mut picker, _, _) = picker(None);

        let idle = picker.visuals();
        assert_eq!(idle.row_opacity, 0.0);
        assert_eq!(idle.button.icon.as_str(), "paperplane");
        assert_eq!(idle.button.label, "React");
        assert!(idle.reactions.iter().all(|r| r.scale == 0.01));
        assert_eq!(idle.reactions[1].bounds, Rect::new(50.0, 0.0, 50.0, 75.0));

        picker.handle_pointer(PointerEvent::down(BUTTON));
        for _ in 0..90 {
            picker.update(1.0 / 60.0);
        }
        picker.handle_pointer(PointerEvent::moved(Point::new(125.0, 40.0)));
        for _ in 0..60 {
            picker.update(1.0 / 60.0);
        }

        let open = picker.visuals();
        assert!((open.row_opacity - 1.0).abs() < 0.01);
        assert!((open.button.opacity - 0.5).abs() < 0.01);
        assert!((open.button.scale - 0.95).abs() < 0.01);
        assert!(open.reactions[2].label_visible);
        assert!(!open.reactions[0].label_visible);

        picker.handle_pointer(PointerEvent::up(Point::new(125.0, 40.0)));
        let committed = picker.visuals();
        assert_eq!(committed.button.icon.as_str(), "scribble");
        assert_eq!(committed.button.label, "Bolt");
    }

    #[test]
    fn test_collapse_returns_to_hidden() {
        let (mut picker, _, _) = picker(None);

        picker.handle_pointer(PointerEvent::down(BUTTON));
        picker.update(0.3);
        picker.handle_pointer(PointerEvent::up(BUTTON));

        for _ in 0..300 {
            picker.update(1.0 / 60.0);
        }

        assert!(!picker.is_animating());
        let visuals = picker.visuals();
        assert!(visuals.row_opacity.abs() < 0.01);
        for reaction in &visuals.reactions {
            assert!((reaction.scale - 0.01).abs() < 0.005);
        }
        assert!((visuals.button.opacity - 1.0).abs() < 0.01);
    }
}
