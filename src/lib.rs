pub mod simulation;
pub mod configuration;
pub mod benchmark;

pub use simulation::states::{Body, BodyKind, CollisionOutcome, System, Frame, NVec3, NState, G, find_by_label};
pub use simulation::data::{solar_system, EARTH_LABEL};
pub use simulation::params::Parameters;
pub use simulation::forces::{Acceleration, AccelSet, NewtonianGravity};
pub use simulation::integrator::rk4_step;
pub use simulation::collision::apply_impulse;
pub use simulation::engine::{Model, RunSummary};
pub use simulation::scenario::build_scenario;

pub use configuration::config::{ScenarioConfig, ParametersConfig, DartConfig, PopulationConfig, AsteroidClassConfig};

pub use benchmark::benchmark::{bench_gravity, bench_step};
