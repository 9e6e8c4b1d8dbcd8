use crate::core::body::Body;

/// Trait describing a global force that nudges a body's velocity once per substep.
pub trait ForceGenerator: Send + Sync {
    fn apply(&self, body: &mut Body);
}

/// Constant downward pull. Velocity is "up positive", so gravity decrements `v.y`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GravityForce {
    pub strength: f32,
}

impl GravityForce {
    pub fn new(strength: f32) -> Self {
        Self { strength }
    }
}

impl ForceGenerator for GravityForce {
    fn apply(&self, body: &mut Body) {
        body.velocity.y -= self.strength;
    }
}

/// Horizontal push. There is no off switch; a calm frame passes a speed of zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindForce {
    pub speed: f32,
}

impl WindForce {
    pub fn new(speed: f32) -> Self {
        Self { speed }
    }
}

impl ForceGenerator for WindForce {
    fn apply(&self, body: &mut Body) {
        body.velocity.x += self.speed;
    }
}

/// The per-frame force environment: optional gravity followed by wind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Environment {
    pub gravity: Option<GravityForce>,
    pub wind: WindForce,
}

impl Environment {
    pub fn new(gravity_enabled: bool, gravity: f32, wind_speed: f32) -> Self {
        Self {
            gravity: gravity_enabled.then(|| GravityForce::new(gravity)),
            wind: WindForce::new(wind_speed),
        }
    }

    /// No gravity, no wind.
    pub fn calm() -> Self {
        Self {
            gravity: None,
            wind: WindForce::new(0.0),
        }
    }
}

impl ForceGenerator for Environment {
    fn apply(&self, body: &mut Body) {
        if let Some(gravity) = &self.gravity {
            gravity.apply(body);
        }
        self.wind.apply(body);
    }
}
