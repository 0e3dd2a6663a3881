pub mod credits;
pub mod interaction;
