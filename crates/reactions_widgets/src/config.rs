//! Reaction picker configuration

use reactions_animation::{SpringConfig, Stagger, Transition};
use reactions_core::{Color, Size};

/// Reaction picker configuration
///
/// Timing, motion, and appearance knobs. The defaults reproduce the classic
/// "hold the like button" popover.
#[derive(Clone, Debug)]
pub struct PickerConfig {
    /// Seconds the pointer must stay down before the row expands
    pub long_press_duration: f32,
    /// Distance the pointer may travel before the long press fails
    pub long_press_tolerance: f32,
    /// Delay between consecutive reactions appearing
    pub stagger: Stagger,
    /// Spring used by the staggered reveal
    pub reveal_spring: SpringConfig,
    /// Playback speed of the reveal spring
    pub reveal_speed: f32,
    /// Spring for hover, press, and fade feedback
    pub feedback_spring: SpringConfig,
    /// Reaction scale while the row is hidden (kept above zero so layout stays valid)
    pub hidden_scale: f32,
    /// Reaction scale while hovered
    pub hovered_scale: f32,
    /// Vertical offset of a hovered reaction (negative lifts it up)
    pub hovered_offset: f32,
    /// Icon color when not hovered
    pub idle_color: Color,
    /// Icon and label capsule color while hovered
    pub hovered_color: Color,
    /// Trigger button opacity while pressed
    pub pressed_opacity: f32,
    /// Trigger button scale while pressed
    pub pressed_scale: f32,
    /// Height of the reaction row
    pub row_height: f32,
    /// Gap between the reaction row and the trigger button
    pub row_spacing: f32,
    /// Size of the trigger button, padding included
    pub button_size: Size,
    /// Icon shown on the trigger before anything is selected
    pub placeholder_icon: String,
    /// Label shown on the trigger before anything is selected
    pub placeholder_label: String,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            long_press_duration: 0.3,
            long_press_tolerance: 10.0,
            stagger: Stagger::new(0.07),
            reveal_spring: SpringConfig::from_response(0.55, 0.5),
            reveal_speed: 1.5,
            feedback_spring: SpringConfig::snappy(),
            hidden_scale: 0.01,
            hovered_scale: 1.5,
            hovered_offset: -30.0,
            idle_color: Color::BLACK,
            hovered_color: Color::PURPLE,
            pressed_opacity: 0.5,
            pressed_scale: 0.95,
            row_height: 75.0,
            row_spacing: 7.0,
            button_size: Size::new(110.0, 50.0),
            placeholder_icon: "paperplane".to_string(),
            placeholder_label: "React".to_string(),
        }
    }
}

impl PickerConfig {
    /// Create a new picker config
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the long-press threshold in seconds
    pub fn long_press_duration(mut self, seconds: f32) -> Self {
        self.long_press_duration = seconds.max(0.0);
        self
    }

    /// Set how far the pointer may drift before the long press fails
    pub fn long_press_tolerance(mut self, distance: f32) -> Self {
        self.long_press_tolerance = distance.max(0.0);
        self
    }

    /// Set the delay between consecutive reactions appearing
    pub fn stagger(mut self, seconds: f32) -> Self {
        self.stagger = Stagger::new(seconds);
        self
    }

    /// Set the reveal spring and its playback speed
    pub fn reveal(mut self, spring: SpringConfig, speed: f32) -> Self {
        self.reveal_spring = spring;
        self.reveal_speed = speed;
        self
    }

    /// Set the hovered appearance
    pub fn hovered(mut self, scale: f32, offset: f32, color: Color) -> Self {
        self.hovered_scale = scale;
        self.hovered_offset = offset;
        self.hovered_color = color;
        self
    }

    /// Set the placeholder shown on the trigger before a selection exists
    pub fn placeholder(mut self, icon: impl Into<String>, label: impl Into<String>) -> Self {
        self.placeholder_icon = icon.into();
        self.placeholder_label = label.into();
        self
    }

    /// Transition for the reaction at `index` entering or leaving the row
    pub fn reveal_transition(&self, index: usize) -> Transition {
        self.stagger.apply(
            index,
            Transition::spring(self.reveal_spring).speed(self.reveal_speed),
        )
    }

    /// Transition for hover, press, and fade feedback
    pub fn feedback_transition(&self) -> Transition {
        Transition::spring(self.feedback_spring)
    }
}
