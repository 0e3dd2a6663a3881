pub mod discord;
pub mod root;
