pub mod credits_client;
pub mod verifier;
