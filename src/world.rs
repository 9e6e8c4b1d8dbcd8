pub mod metrics;
pub mod spawner;

pub use metrics::{CircleSprite, SimulationMetrics};
pub use spawner::{SpawnRequest, Spawner};

use std::time::Instant;

use glam::Vec2;
use log::{debug, warn};

use crate::{
    collision::CollisionPass,
    config::SimulationConfig,
    core::body::{Body, BodyId},
    dynamics::{BoundaryPolicy, Environment, Integrator},
    error::Result,
    utils::{
        logging::{warn_if_step_budget_exceeded, ScopedTimer},
        profiling::{SectionTimer, StepProfile},
    },
};

/// Control inputs the shell gathers once per visible frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameInput {
    pub gravity_enabled: bool,
    pub wind_speed: f32,
    pub spawn: Option<SpawnRequest>,
}

impl Default for FrameInput {
    fn default() -> Self {
        Self {
            gravity_enabled: true,
            wind_speed: 0.0,
            spawn: None,
        }
    }
}

/// Owns the bodies and advances them one visible frame at a time.
///
/// Each `step` runs a fixed number of substeps of collision resolution followed
/// by force integration, using a nominal frame delta. The solver is coupled to
/// the caller's tick rate, not wall-clock time.
#[derive(Debug, Clone)]
pub struct Simulator {
    config: SimulationConfig,
    bodies: Vec<Body>,
    spawner: Spawner,
    collision: CollisionPass,
    integrator: Integrator,
    profile: StepProfile,
    capacity_reported: bool,
}

impl Default for Simulator {
    fn default() -> Self {
        Self::from_validated(SimulationConfig::default())
    }
}

impl Simulator {
    pub fn new(config: SimulationConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::from_validated(config))
    }

    /// `config` must have passed `validate`, which bounds `capacity`.
    fn from_validated(config: SimulationConfig) -> Self {
        let dt = config.substep_delta();
        let boundary = BoundaryPolicy::new(config.bounds, config.wall_mode);

        Self {
            bodies: Vec::with_capacity(config.capacity),
            spawner: Spawner::new(&config),
            collision: CollisionPass::new(dt),
            integrator: Integrator::new(dt, boundary),
            profile: StepProfile::default(),
            capacity_reported: false,
            config,
        }
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Enables or disables the rayon-backed integration pass (`parallel` feature).
    pub fn set_parallel_enabled(&mut self, enabled: bool) {
        self.integrator.set_parallel(enabled);
    }

    pub fn parallel_enabled(&self) -> bool {
        self.integrator.parallel()
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.config.capacity
    }

    pub fn is_full(&self) -> bool {
        self.bodies.len() >= self.config.capacity
    }

    /// Read-only view of the live bodies, in spawn order.
    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    pub fn body(&self, id: BodyId) -> Option<&Body> {
        self.bodies.get(id.index())
    }

    /// Adds the scripted ambient body for the current count.
    pub fn spawn_ambient(&mut self) -> Option<BodyId> {
        let body = self.spawner.ambient_body(self.bodies.len());
        self.insert(body)
    }

    /// Adds a user body with the shared radius and elasticity.
    ///
    /// Returns `None` at capacity or when the mass is not a positive finite number.
    pub fn spawn_at(&mut self, position: Vec2, velocity: Vec2, mass: f32) -> Option<BodyId> {
        self.spawn_request(&SpawnRequest::new(position, velocity, mass))
    }

    /// The once-per-frame spawn: a user request takes the slot the ambient body
    /// would have used this frame instead of adding a second body. An invalid
    /// request falls back to the ambient body, so one body is added per frame
    /// until capacity.
    pub fn spawn_if_requested(&mut self, request: Option<SpawnRequest>) -> Option<BodyId> {
        match request {
            Some(request) if request.is_valid() => self.spawn_request(&request),
            Some(request) => {
                warn!("Invalid spawn request {request:?}; spawning the ambient body instead");
                self.spawn_ambient()
            }
            None => self.spawn_ambient(),
        }
    }

    fn spawn_request(&mut self, request: &SpawnRequest) -> Option<BodyId> {
        if !request.is_valid() {
            warn!("Ignoring spawn request with invalid state: {request:?}");
            return None;
        }
        let body = self.spawner.user_body(request);
        self.insert(body)
    }

    fn insert(&mut self, body: Body) -> Option<BodyId> {
        if self.is_full() {
            if !self.capacity_reported {
                debug!(
                    "Capacity of {} bodies reached; spawns are now ignored",
                    self.config.capacity
                );
                self.capacity_reported = true;
            }
            return None;
        }

        let id = BodyId::new(self.bodies.len());
        debug!("Spawned {:?} body {} at {:?}", body.kind, id.index(), body.position);
        self.bodies.push(body);
        Some(id)
    }

    /// Advances one visible frame.
    pub fn step(&mut self, gravity_enabled: bool, wind_speed: f32) {
        let _timer = ScopedTimer::new("simulator::step", self.bodies.len());
        let started = Instant::now();

        let environment = Environment::new(
            gravity_enabled,
            self.config.gravity,
            self.clamp_wind(wind_speed),
        );

        let mut profile = StepProfile {
            substeps: self.config.substeps,
            body_count: self.bodies.len(),
            ..StepProfile::default()
        };

        for _ in 0..self.config.substeps {
            {
                let _section = SectionTimer::new(&mut profile.collision_time);
                profile.contact_count += self.collision.run(&mut self.bodies);
            }
            {
                let _section = SectionTimer::new(&mut profile.integration_time);
                self.integrator.step(&mut self.bodies, &environment);
            }
        }

        // The last substep's move may leave bodies past a wall; settle them before reads.
        self.integrator.boundary.apply_all(&mut self.bodies);

        profile.total_time = started.elapsed();
        if let Some(budget_ms) = self.config.step_budget_ms {
            warn_if_step_budget_exceeded(profile.total_time, budget_ms, profile.body_count);
        }
        self.profile = profile;
    }

    /// Spawns per the frame's request, then steps. Returns the spawned body, if any.
    pub fn advance(&mut self, input: &FrameInput) -> Option<BodyId> {
        let spawned = self.spawn_if_requested(input.spawn);
        self.step(input.gravity_enabled, input.wind_speed);
        spawned
    }

    fn clamp_wind(&self, wind_speed: f32) -> f32 {
        let limit = self.config.max_wind_speed;
        if !wind_speed.is_finite() {
            warn!("Non-finite wind speed {wind_speed}; using 0");
            return 0.0;
        }
        if wind_speed.abs() > limit {
            warn!("Wind speed {wind_speed} clamped to ±{limit}");
            return wind_speed.clamp(-limit, limit);
        }
        wind_speed
    }

    pub fn metrics(&self) -> SimulationMetrics {
        SimulationMetrics::from_bodies(&self.bodies, self.config.capacity)
    }

    /// Whole-pixel circles for the renderer, in body order.
    pub fn sprites(&self) -> impl Iterator<Item = CircleSprite> + '_ {
        self.bodies.iter().map(CircleSprite::from)
    }

    pub fn last_profile(&self) -> &StepProfile {
        &self.profile
    }
}
