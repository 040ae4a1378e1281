//! Players Module
//!
//! Controllers that drive a catapult: drag input for the human side and a
//! random shooter for the AI side.

pub mod ai;
pub mod human;

pub use ai::AiController;
pub use human::HumanController;
