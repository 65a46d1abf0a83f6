//! Simulated code playground.
//!
//! This is a demo, not an interpreter: output is synthesised from print
//! statements found in the source. Front-ends must label results as simulated.

pub mod history;
pub mod runner;
pub mod session;
pub mod simulator;
pub mod templates;

pub use history::ExecutionHistory;
pub use runner::{CodeRunner, DelayRange, SimulatedRunner};
pub use session::{run_once, spawn_execution, Playground};
pub use simulator::{simulate, SimulationError};
pub use templates::default_code;
