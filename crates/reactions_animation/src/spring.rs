//! Spring physics animation
//!
//! RK4-integrated spring physics for smooth, natural animations.
//! Supports preset configurations, custom spring parameters, and springs
//! described by response time and damping fraction.

use std::f32::consts::PI;

/// Configuration for a spring animation
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringConfig {
    pub stiffness: f32,
    pub damping: f32,
    pub mass: f32,
}

impl SpringConfig {
    /// Create a unit-mass spring from its response and damping fraction
    ///
    /// `response` is the period of the undamped oscillation in seconds and
    /// `damping_fraction` is the ratio to critical damping (1.0 settles
    /// without overshoot, lower values bounce).
    pub fn from_response(response: f32, damping_fraction: f32) -> Self {
        let response = response.max(f32::EPSILON);
        let omega = 2.0 * PI / response;
        Self {
            stiffness: omega * omega,
            damping: 4.0 * PI * damping_fraction / response,
            mass: 1.0,
        }
    }

    /// A gentle, slow spring (good for page transitions)
    pub fn gentle() -> Self {
        Self {
            stiffness: 120.0,
            damping: 14.0,
            mass: 1.0,
        }
    }

    /// A wobbly spring with overshoot (good for playful UI)
    pub fn wobbly() -> Self {
        Self {
            stiffness: 180.0,
            damping: 12.0,
            mass: 1.0,
        }
    }

    /// A stiff, snappy spring (good for buttons)
    pub fn stiff() -> Self {
        Self {
            stiffness: 400.0,
            damping: 30.0,
            mass: 1.0,
        }
    }

    /// A very stiff spring with minimal oscillation (good for quick responses)
    pub fn snappy() -> Self {
        Self {
            stiffness: 600.0,
            damping: 40.0,
            mass: 1.0,
        }
    }

    /// Calculate critical damping for this spring's stiffness and mass
    pub fn critical_damping(&self) -> f32 {
        2.0 * (self.stiffness * self.mass).sqrt()
    }

    /// Ratio of this spring's damping to critical damping
    pub fn damping_fraction(&self) -> f32 {
        self.damping / self.critical_damping()
    }

    /// Check if the spring is underdamped (will oscillate)
    pub fn is_underdamped(&self) -> bool {
        self.damping < self.critical_damping()
    }

    /// Check if the spring is critically damped (no oscillation, fastest settling)
    pub fn is_critically_damped(&self) -> bool {
        (self.damping - self.critical_damping()).abs() < 0.01
    }
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self::stiff()
    }
}

/// A spring-based animator
#[derive(Clone, Copy, Debug)]
pub struct Spring {
    config: SpringConfig,
    value: f32,
    velocity: f32,
    target: f32,
    rest_epsilon: f32,
    rest_velocity: f32,
}

impl Spring {
    /// Being within 0.5px and under 5px/s is imperceptible for positions
    const PIXEL_EPSILON: f32 = 0.5;
    const PIXEL_VELOCITY_EPSILON: f32 = 5.0;

    /// Thresholds for unit-range values such as scale and opacity
    const UNIT_EPSILON: f32 = 0.001;
    const UNIT_VELOCITY_EPSILON: f32 = 0.01;

    /// Create a spring at rest, settling with pixel-sized thresholds
    pub fn new(config: SpringConfig, initial: f32) -> Self {
        Self {
            config,
            value: initial,
            velocity: 0.0,
            target: initial,
            rest_epsilon: Self::PIXEL_EPSILON,
            rest_velocity: Self::PIXEL_VELOCITY_EPSILON,
        }
    }

    /// Create a spring for unit-range values (scale, opacity, mix factors)
    pub fn unit(config: SpringConfig, initial: f32) -> Self {
        Self::new(config, initial)
            .with_rest_thresholds(Self::UNIT_EPSILON, Self::UNIT_VELOCITY_EPSILON)
    }

    /// Override the distance and velocity under which the spring is at rest
    pub fn with_rest_thresholds(mut self, epsilon: f32, velocity: f32) -> Self {
        self.rest_epsilon = epsilon;
        self.rest_velocity = velocity;
        self
    }

    /// Swap the spring parameters, keeping value and velocity
    pub fn set_config(&mut self, config: SpringConfig) {
        self.config = config;
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    pub fn target(&self) -> f32 {
        self.target
    }

    pub fn set_target(&mut self, target: f32) {
        self.target = target;
    }

    /// Check if the spring has settled (within epsilon of target with minimal velocity)
    pub fn is_settled(&self) -> bool {
        (self.value - self.target).abs() < self.rest_epsilon
            && self.velocity.abs() < self.rest_velocity
    }

    /// Step the spring simulation using RK4 integration
    pub fn step(&mut self, dt: f32) {
        if self.is_settled() {
            self.value = self.target;
            self.velocity = 0.0;
            return;
        }

        let k1_v = self.acceleration(self.value, self.velocity);
        let k1_x = self.velocity;

        let k2_v = self.acceleration(
            self.value + k1_x * dt * 0.5,
            self.velocity + k1_v * dt * 0.5,
        );
        let k2_x = self.velocity + k1_v * dt * 0.5;

        let k3_v = self.acceleration(
            self.value + k2_x * dt * 0.5,
            self.velocity + k2_v * dt * 0.5,
        );
        let k3_x = self.velocity + k2_v * dt * 0.5;

        let k4_v = self.acceleration(self.value + k3_x * dt, self.velocity + k3_v * dt);
        let k4_x = self.velocity + k3_v * dt;

        self.velocity += (k1_v + 2.0 * k2_v + 2.0 * k3_v + k4_v) * dt / 6.0;
        self.value += (k1_x + 2.0 * k2_x + 2.0 * k3_x + k4_x) * dt / 6.0;
    }

    fn acceleration(&self, x: f32, v: f32) -> f32 {
        let spring_force = -self.config.stiffness * (x - self.target);
        let damping_force = -self.config.damping * v;
        (spring_force + damping_force) / self.config.mass
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spring_settles_to_target() {
        let mut spring = Spring::new(SpringConfig::stiff(), 0.0);
        spring.set_target(100.0);

        // Simulate for 2 seconds at 60fps
        for _ in 0..120 {
            spring.step(1.0 / 60.0);
        }

        assert!(spring.is_settled());
        assert!((spring.value() - 100.0).abs() < 0.01);
    }

    #[test]
    fn test_spring_inherits_velocity() {
        let mut spring = Spring::new(SpringConfig::wobbly(), 0.0);
        spring.set_target(100.0);

        for _ in 0..10 {
            spring.step(1.0 / 60.0);
        }

        let velocity = spring.velocity();
        assert!(velocity > 0.0);

        // Change target mid-flight - velocity should continue
        spring.set_target(50.0);
        assert_eq!(spring.velocity(), velocity);
    }

    #[test]
    fn test_spring_presets() {
        assert!(SpringConfig::wobbly().is_underdamped());
        assert!(SpringConfig::gentle().is_underdamped());
        assert!(SpringConfig::stiff().is_underdamped());
    }

    #[test]
    fn test_from_response_damping_fraction() {
        let config = SpringConfig::from_response(0.55, 0.5);
        assert!((config.damping_fraction() - 0.5).abs() < 1e-4);
        assert!(config.is_underdamped());

        let critical = SpringConfig::from_response(0.3, 1.0);
        assert!(critical.is_critically_damped());
    }

    #[test]
    fn test_unit_spring_does_not_snap_early() {
        // A pixel-threshold spring would call 0.6 -> 1.0 settled immediately
        let mut pixel = Spring::new(SpringConfig::snappy(), 0.6);
        pixel.set_target(1.0);
        assert!(pixel.is_settled());

        let mut unit = Spring::unit(SpringConfig::snappy(), 0.6);
        unit.set_target(1.0);
        assert!(!unit.is_settled());

        for _ in 0..120 {
            unit.step(1.0 / 60.0);
        }
        assert!(unit.is_settled());
        assert!((unit.value() - 1.0).abs() < 0.001);
    }

    #[test]
    fn test_underdamped_unit_spring_overshoots() {
        let mut spring = Spring::unit(SpringConfig::from_response(0.55, 0.5), 0.01);
        spring.set_target(1.0);

        let mut peak: f32 = 0.0;
        for _ in 0..180 {
            spring.step(1.0 / 60.0);
            peak = peak.max(spring.value());
        }

        assert!(peak > 1.0, "damping fraction 0.5 should overshoot");
        assert!(spring.is_settled());
    }

    #[test]
    fn test_spring_rk4_stability() {
        let mut spring = Spring::new(SpringConfig::stiff(), 0.0);
        spring.set_target(1000.0);

        for _ in 0..100 {
            spring.step(0.1);
            assert!(spring.value() < 2000.0);
            assert!(spring.value() > -500.0);
        }
    }
}
