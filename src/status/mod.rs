// Status & achievement engine — converts raw activity counters into badges.
//
// Pure functions only: no I/O, no shared mutable state, no async. Callers
// assemble an ActivitySnapshot (plus optional per-scope ranks from the
// leaderboard) and get freshly allocated StatusDescriptors back. Safe to
// call concurrently; every call reads only static tables and its inputs.

pub mod model;
pub mod resolve;
pub mod template;
pub mod tiers;
