//! Haptic feedback collaborator

use std::sync::Arc;

use tracing::trace;

/// Strength of a tactile pulse
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ImpactStyle {
    /// Subtle tick, used for selection changes
    #[default]
    Light,
    /// Noticeable bump
    Medium,
    /// Strong thud
    Heavy,
}

/// Emits tactile pulses
///
/// Implemented by each platform backend. Calls are fire-and-forget: a device
/// without haptic hardware simply does nothing.
pub trait HapticFeedback: Send + Sync {
    /// Emit a single impact pulse
    fn impact(&self, style: ImpactStyle);
}

/// Haptics handle shared between a widget and its children
pub type SharedHaptics = Arc<dyn HapticFeedback>;

/// Haptics for platforms without a tactile engine
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopHaptics;

impl HapticFeedback for NoopHaptics {
    fn impact(&self, style: ImpactStyle) {
        trace!(?style, "haptic impact (no-op)");
    }
}

impl<F> HapticFeedback for F
where
    F: Fn(ImpactStyle) + Send + Sync,
{
    fn impact(&self, style: ImpactStyle) {
        self(style)
    }
}
