//! Bingo simulation harness.
//!
//! Drives the game core across many trials and across a Cartesian grid of
//! configurations, persisting one record per grid point:
//!
//! ```text
//! draw + generate ──► validate ──► run_game (count) ──► run_sweep ──► store
//! ```
//!
//! All randomness comes from a single seeded ChaCha8 RNG, so a sweep is
//! fully reproducible from its seed.

pub mod driver;
pub mod report;
pub mod store;
pub mod sweep;

pub use driver::run_game;
pub use store::{SimulationRecord, SimulationStore, StoreError};
pub use sweep::{run_sweep, SweepGrid};
