//! Warband - turn-based battles between historical civilizations
//!
//! Armies are built from civilization presets, improved with gold
//! (training and transformation), and thrown at each other in
//! deterministic strength-comparison battles. The library never
//! prints; rendering and input belong to the binary shell.

pub mod army;
pub mod core;
pub mod engine;
pub mod history;
pub mod session;
