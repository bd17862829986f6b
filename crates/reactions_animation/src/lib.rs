//! Reactions Animation System
//!
//! Spring physics and staggered transitions.
//!
//! # Features
//!
//! - **Spring Physics**: RK4-integrated springs with stiffness, damping, mass
//! - **Response Springs**: springs described by response time and damping
//!   fraction, as most platform animation APIs describe them
//! - **Transitions**: a spring plus a start delay and a playback speed
//! - **Stagger**: per-index start delays for rows of elements that reveal
//!   one after another
//!
//! Animations are stepped by the owner once per frame with the elapsed time.

pub mod spring;
pub mod transition;

pub use spring::{Spring, SpringConfig};
pub use transition::{AnimatedProperty, Stagger, Transition};
