//! A single selectable reaction
//!
//! A [`ReactionItem`] decides whether the pointer is over it and drives its
//! own hover animations. It does not own its hover flag: the picker lends
//! each item exactly its own slot on every pointer update, so an item can
//! only ever write its own entry.

use std::fmt;

use reactions_animation::{AnimatedProperty, Spring, SpringConfig};
use reactions_core::{Color, Point, Rect};
use reactions_platform::{HapticFeedback, ImpactStyle};
use tracing::trace;

use crate::config::PickerConfig;

/// Symbolic icon name resolved by the host's icon renderer (e.g. `"star.fill"`)
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SymbolId(String);

impl SymbolId {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for SymbolId {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for SymbolId {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl fmt::Display for SymbolId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// An immutable reaction choice and its position in the row
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ReactionDefinition {
    icon: SymbolId,
    label: String,
    index: usize,
}

impl ReactionDefinition {
    pub fn new(icon: impl Into<SymbolId>, label: impl Into<String>, index: usize) -> Self {
        Self {
            icon: icon.into(),
            label: label.into(),
            index,
        }
    }

    pub fn icon(&self) -> &SymbolId {
        &self.icon
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Position in the picker's row
    pub fn index(&self) -> usize {
        self.index
    }
}

/// What a renderer needs to draw one reaction
#[derive(Clone, Debug, PartialEq)]
pub struct ReactionVisual {
    pub icon: SymbolId,
    pub label: String,
    /// Layout rect (unaffected by scale and offset)
    pub bounds: Rect,
    /// Combined reveal and hover scale
    pub scale: f32,
    /// Vertical offset from the layout rect
    pub offset_y: f32,
    /// Icon tint
    pub color: Color,
    /// Whether the label capsule is shown
    pub label_visible: bool,
}

/// One reaction in the row
#[derive(Clone, Debug)]
pub struct ReactionItem {
    definition: ReactionDefinition,
    bounds: Rect,
    /// Entrance scale, hidden_scale <-> 1.0
    reveal: AnimatedProperty,
    /// Hover scale, 1.0 <-> hovered_scale
    hover_scale: AnimatedProperty,
    /// Hover lift in points
    hover_offset: AnimatedProperty,
    /// Mix from idle to hovered color
    tint: AnimatedProperty,
}

impl ReactionItem {
    pub fn new(definition: ReactionDefinition, config: &PickerConfig) -> Self {
        Self {
            definition,
            bounds: Rect::ZERO,
            reveal: AnimatedProperty::new(config.hidden_scale),
            hover_scale: AnimatedProperty::new(1.0),
            hover_offset: AnimatedProperty::from_spring(Spring::new(SpringConfig::default(), 0.0)),
            tint: AnimatedProperty::new(0.0),
        }
    }

    pub fn definition(&self) -> &ReactionDefinition {
        &self.definition
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    pub fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
    }

    /// Whether `pointer` is over this reaction; no pointer is never inside
    pub fn hit_test(&self, pointer: Option<Point>) -> bool {
        pointer.is_some_and(|p| self.bounds.contains(p))
    }

    /// Recompute hover for a new pointer position and write it to `slot`
    ///
    /// Pulses `haptics` once on the transition into the hovered state; staying
    /// inside across further updates does not pulse again.
    pub fn update_hover(
        &mut self,
        pointer: Option<Point>,
        slot: &mut bool,
        haptics: &dyn HapticFeedback,
        config: &PickerConfig,
    ) -> bool {
        let was_inside = *slot;
        let is_inside = self.hit_test(pointer);

        if is_inside != was_inside {
            if is_inside {
                haptics.impact(ImpactStyle::Light);
            }
            trace!(
                index = self.definition.index,
                label = %self.definition.label,
                hovered = is_inside,
                "reaction hover changed"
            );
            self.animate_hover(is_inside, config);
        }

        *slot = is_inside;
        is_inside
    }

    fn animate_hover(&mut self, hovered: bool, config: &PickerConfig) {
        let transition = config.feedback_transition();
        let (scale, offset, tint) = if hovered {
            (config.hovered_scale, config.hovered_offset, 1.0)
        } else {
            (1.0, 0.0, 0.0)
        };
        self.hover_scale.animate_to(scale, transition);
        self.hover_offset.animate_to(offset, transition);
        self.tint.animate_to(tint, transition);
    }

    /// Start the staggered entrance
    pub fn reveal(&mut self, config: &PickerConfig) {
        self.reveal
            .animate_to(1.0, config.reveal_transition(self.definition.index));
    }

    /// Shrink back to the hidden scale with the same stagger
    pub fn hide(&mut self, config: &PickerConfig) {
        self.reveal.animate_to(
            config.hidden_scale,
            config.reveal_transition(self.definition.index),
        );
    }

    /// Current entrance scale
    pub fn reveal_scale(&self) -> f32 {
        self.reveal.value()
    }

    pub fn is_animating(&self) -> bool {
        self.reveal.is_animating()
            || self.hover_scale.is_animating()
            || self.hover_offset.is_animating()
            || self.tint.is_animating()
    }

    /// Step animations (call each frame)
    pub fn update(&mut self, dt: f32) {
        self.reveal.step(dt);
        self.hover_scale.step(dt);
        self.hover_offset.step(dt);
        self.tint.step(dt);
    }

    /// Snapshot for rendering, given this item's current hover flag
    pub fn visual(&self, hovered: bool, config: &PickerConfig) -> ReactionVisual {
        ReactionVisual {
            icon: self.definition.icon.clone(),
            label: self.definition.label.clone(),
            bounds: self.bounds,
            scale: self.reveal.value() * self.hover_scale.value(),
            offset_y: self.hover_offset.value(),
            color: Color::lerp(&config.idle_color, &config.hovered_color, self.tint.value()),
            label_visible: hovered,
        }
    }
}
