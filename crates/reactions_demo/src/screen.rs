//! The host screen: five reactions, a callback, and a scripted gesture

use std::sync::{Arc, Mutex};

use reactions_core::Point;
use reactions_platform::{HapticFeedback, ImpactStyle, InputEvent, MouseButton, MouseEvent};
use reactions_widgets::{ReactionDefinition, ReactionPicker, Result};
use tracing::{debug, info};

/// Reactions offered by the screen, in display order
pub const REACTIONS: [(&str, &str); 5] = [
    ("star.fill", "Star"),
    ("pencil", "Pencil"),
    ("scribble", "Bolt"),
    ("heart.text.square.fill", "Letter"),
    ("sun.min.fill", "Sun"),
];

const FRAME: f32 = 1.0 / 60.0;
const ORIGIN: Point = Point::new(20.0, 300.0);
const ROW_WIDTH: f32 = 250.0;

/// Haptics stand-in that writes each pulse to the log
struct LoggedHaptics;

impl HapticFeedback for LoggedHaptics {
    fn impact(&self, style: ImpactStyle) {
        debug!(?style, "haptic pulse");
    }
}

/// Screen hosting a single reaction picker
pub struct ReactionScreen {
    picker: ReactionPicker,
    committed: Arc<Mutex<Vec<ReactionDefinition>>>,
}

impl ReactionScreen {
    pub fn new(default_index: Option<usize>) -> Result<Self> {
        let committed: Arc<Mutex<Vec<ReactionDefinition>>> = Arc::default();
        let sink = committed.clone();

        let mut picker = ReactionPicker::new(REACTIONS, default_index, move |reaction| {
            info!(label = reaction.label(), icon = %reaction.icon(), "reaction picked");
            if let Ok(mut committed) = sink.lock() {
                committed.push(reaction);
            }
        })?
        .with_haptics(Arc::new(LoggedHaptics));
        picker.layout_stacked(ORIGIN, ROW_WIDTH);

        Ok(Self { picker, committed })
    }

    pub fn picker(&self) -> &ReactionPicker {
        &self.picker
    }

    /// Everything the callback has received so far
    pub fn committed(&self) -> Vec<ReactionDefinition> {
        self.committed
            .lock()
            .map(|committed| committed.clone())
            .unwrap_or_default()
    }

    /// Center of the reaction at `index` in window coordinates
    fn reaction_center(&self, index: usize) -> Option<Point> {
        self.picker.item(index).map(|item| item.bounds().center())
    }

    fn button_center(&self) -> Point {
        self.picker
            .visuals()
            .button
            .bounds
            .map(|bounds| bounds.center())
            .unwrap_or(ORIGIN)
    }

    fn send(&mut self, event: MouseEvent) {
        self.picker.handle_input(&InputEvent::Mouse(event));
        self.picker.update(FRAME);
    }

    fn settle(&mut self) {
        let mut frames = 0;
        while self.picker.is_animating() && frames < 600 {
            self.picker.update(FRAME);
            frames += 1;
        }
        debug!(frames, "animations settled");
    }

    /// Press the trigger, hold it open, sweep across the row to `hover`, and
    /// let go there
    ///
    /// With no `hover` the pointer comes back to the trigger before lifting,
    /// which leaves the selection unchanged.
    pub fn run_gesture(&mut self, hover: Option<usize>) {
        let start = self.button_center();
        self.send(MouseEvent::ButtonPressed {
            button: MouseButton::Left,
            x: start.x,
            y: start.y,
        });

        let hold_frames = (self.picker.config().long_press_duration / FRAME).ceil() as usize + 1;
        for _ in 0..hold_frames {
            self.picker.update(FRAME);
        }
        info!(expanded = self.picker.is_expanded(), "held trigger");

        // Sweep from the first reaction to the target one
        let last = hover.unwrap_or(0).min(self.picker.len() - 1);
        for index in 0..=last {
            if let Some(center) = self.reaction_center(index) {
                self.send(MouseEvent::Moved {
                    x: center.x,
                    y: center.y,
                });
                debug!(index, hovered = ?self.picker.selected_index(), "sweep");
            }
        }

        let end = match hover {
            Some(index) => self.reaction_center(index).unwrap_or(start),
            None => start,
        };
        self.send(MouseEvent::Moved { x: end.x, y: end.y });
        self.send(MouseEvent::ButtonReleased {
            button: MouseButton::Left,
            x: end.x,
            y: end.y,
        });
        self.settle();

        let button = self.picker.visuals().button;
        info!(icon = %button.icon, label = %button.label, "trigger shows");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_screen_layout() {
        let screen = ReactionScreen::new(None).unwrap();
        let picker = screen.picker();

        assert_eq!(picker.len(), 5);
        assert_eq!(screen.reaction_center(0), Some(Point::new(45.0, 337.5)));
        assert_eq!(screen.button_center(), Point::new(75.0, 407.0));
    }

    #[test]
    fn test_gesture_commits_hovered() {
        let mut screen = ReactionScreen::new(None).unwrap();
        screen.run_gesture(Some(3));

        let committed = screen.committed();
        assert_eq!(committed.len(), 1);
        assert_eq!(committed[0].label(), "Letter");
        assert_eq!(screen.picker().visuals().button.label, "Letter");
    }

    #[test]
    fn test_gesture_without_hover_keeps_default() {
        let mut screen = ReactionScreen::new(Some(4)).unwrap();
        screen.run_gesture(None);

        assert!(screen.committed().is_empty());
        assert_eq!(screen.picker().visuals().button.label, "Sun");
    }

    #[test]
    fn test_invalid_default() {
        assert!(ReactionScreen::new(Some(5)).is_err());
    }
}
