pub mod states;
pub mod data;
pub mod params;
pub mod engine;
pub mod forces;
pub mod integrator;
pub mod collision;
pub mod scenario;
