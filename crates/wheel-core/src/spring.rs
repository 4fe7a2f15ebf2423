//! Damped spring used for every animated wheel transform.

use crate::constants::{
    SPRING_FRICTION, SPRING_MASS, SPRING_MAX_DT_SEC, SPRING_PRECISION, SPRING_SUBSTEP_SEC,
    SPRING_TENSION,
};
use crate::error::WheelError;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringConfig {
    pub tension: f32,
    pub friction: f32,
    pub mass: f32,
    /// Displacement and speed below which the spring snaps to rest.
    pub precision: f32,
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self {
            tension: SPRING_TENSION,
            friction: SPRING_FRICTION,
            mass: SPRING_MASS,
            precision: SPRING_PRECISION,
        }
    }
}

impl SpringConfig {
    pub fn validate(&self) -> Result<(), WheelError> {
        let fields = [
            ("tension", self.tension),
            ("friction", self.friction),
            ("mass", self.mass),
            ("precision", self.precision),
        ];
        for (field, value) in fields {
            if !(value.is_finite() && value > 0.0) {
                return Err(WheelError::InvalidSpring { field, value });
            }
        }
        Ok(())
    }

    /// 1.0 is critical damping.
    pub fn damping_ratio(&self) -> f32 {
        self.friction / (2.0 * (self.tension * self.mass).sqrt())
    }
}

#[derive(Clone, Debug)]
pub struct Spring {
    value: f32,
    velocity: f32,
    target: f32,
    config: SpringConfig,
    settled: bool,
}

impl Spring {
    /// A spring at rest on `value`.
    pub fn new(value: f32, config: SpringConfig) -> Self {
        Self {
            value,
            velocity: 0.0,
            target: value,
            config,
            settled: true,
        }
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

    pub fn is_settled(&self) -> bool {
        self.settled
    }

    pub fn set_target(&mut self, target: f32) {
        self.target = target;
        self.settled = self.at_rest();
        if self.settled {
            self.value = target;
            self.velocity = 0.0;
        }
    }

    /// Jump to `value` with no motion.
    pub fn snap(&mut self, value: f32) {
        self.value = value;
        self.target = value;
        self.velocity = 0.0;
        self.settled = true;
    }

    /// Advance by `dt_sec`; returns true once the spring is at rest.
    pub fn step(&mut self, dt_sec: f32) -> bool {
        if self.settled {
            return true;
        }
        let dt = dt_sec.clamp(0.0, SPRING_MAX_DT_SEC);
        let substeps = (dt / SPRING_SUBSTEP_SEC).ceil().max(1.0) as u32;
        let h = dt / substeps as f32;
        let k = self.config.tension;
        let c = self.config.friction;
        let m = self.config.mass;
        for _ in 0..substeps {
            let accel = (-k * (self.value - self.target) - c * self.velocity) / m;
            self.velocity += accel * h;
            self.value += self.velocity * h;
        }
        if self.at_rest() {
            self.value = self.target;
            self.velocity = 0.0;
            self.settled = true;
        }
        self.settled
    }

    fn at_rest(&self) -> bool {
        (self.value - self.target).abs() < self.config.precision
            && self.velocity.abs() < self.config.precision
    }
}
