//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One update per frame, no wall-clock time
//! - All randomness from the seeded random table, in fixed call order
//! - No rendering or platform dependencies beyond the adapter traits

pub mod angle;
pub mod effects;
pub mod rng;
pub mod state;
pub mod tick;

pub use angle::{Angle, TrigTables};
pub use effects::Effect;
pub use rng::RandomTable;
pub use state::{GameData, InputState, Nebula, Phase};
pub use tick::{enter_phase, update};
