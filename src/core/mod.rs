//! Ambient infrastructure shared by the game engines.
//!
//! The games themselves are independent of each other; the only thing they
//! have in common is the injected RNG defined here.

pub mod rng;

pub use rng::GameRng;
