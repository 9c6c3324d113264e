//! The rules layer: ray traversal, move legality, capture, termination.
//!
//! Every function here is a pure function of an immutable board snapshot.
//! That is what licenses the optional parallelism (`parallel` feature): the
//! per-direction and per-player computations share no mutable state and
//! their results merge by set union or short-circuiting `||`, both
//! order-independent.

pub mod capture;
pub mod legality;
pub mod outcome;
pub mod ray;

pub use capture::apply_ply;
pub use legality::{has_any_move, legal_moves, probe};
pub use outcome::{outcome, Outcome};
pub use ray::Ray;
