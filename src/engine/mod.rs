//! Action engine - the three operations that change army state
//!
//! Train and transform spend gold on a single unit; battle pits two
//! armies against each other. Each operation is an atomic state
//! transition: preconditions are checked up front and a failure leaves
//! both armies untouched.

pub mod actions;
pub mod battle;
pub mod outcome;

pub use actions::{train, transform, TrainReport, TransformReport};
pub use battle::{battle, DEFEAT_UNIT_LOSSES, DRAW_UNIT_LOSSES, VICTORY_GOLD};
pub use outcome::{BattleOutcome, BattleResultTag};
