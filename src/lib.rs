//! Discrete logarithm solvers over tiny elliptic-curve groups.
//!
//! Three independent algorithms solve `Q = x * P` in a group of known prime
//! order: exhaustive scan ([`brute_force`]), meet-in-the-middle ([`bsgs`])
//! and a randomized collision walk ([`pollard_rho`]). The [`sweep`] harness
//! cross-validates a solver over every element of the group in parallel and
//! reports aggregate step counts.
//!
//! [`seed_check`] is a standalone utility: the X9.62 verifiably-random
//! domain-parameter check for published curves. It shares nothing with the
//! solvers beyond living in the same crate.

pub mod brute_force;
pub mod bsgs;
pub mod curve;
pub mod errors;
pub mod pollard_rho;
pub mod seed_check;
pub mod sweep;
pub mod traits;
pub mod utils;

pub use errors::DlogError;
pub use traits::{DlogProblem, DlogSolution, DlogSolver};
