use serenity::all::Colour;

pub mod error;
pub mod middleware;
pub mod structs;
pub mod utility;

pub const USER_AGENT: &str = concat!(
    "DiscordBot (https://desktop.vision, ",
    env!("CARGO_PKG_VERSION"),
    ")"
);

pub const SIGNATURE_HEADER: &str = "x-signature-ed25519";
pub const TIMESTAMP_HEADER: &str = "x-signature-timestamp";
pub const API_KEY_HEADER: &str = "x-api-key";

/// Discord interaction payloads are a few kilobytes; anything larger is refused unread.
pub const MAX_INTERACTION_BODY_BYTES: usize = 256 * 1024;

pub const DEFAULT_CREDITS_ENDPOINT: &str = "https://desktop.vision/api/credits";
pub const DEFAULT_CREDIT_KIND: &str = "hourly";

/// Replies for balances at or below this amount are only shown to the invoking user.
pub const EPHEMERAL_CREDITS_THRESHOLD: f64 = 100.0;
pub const EPHEMERAL_FLAG: u64 = 64;

pub const SHOP_FOOTER: &str = "Want more play time? Visit https://desktop.vision/app/#/shop";
pub const CREDITS_UNAVAILABLE_MESSAGE: &str =
    "The credits service could not be reached right now. Please try again in a few minutes.";
pub const UNKNOWN_USER_MESSAGE: &str =
    "Could not determine which Discord user invoked this command.";

pub const UNKNOWN_TYPE_ERROR: &str = "Unknown Type";
pub const INVALID_PAYLOAD_ERROR: &str = "Invalid interaction payload";
pub const NOT_FOUND_MESSAGE: &str = "Not Found.";

pub const EMBED_COLOR: Colour = Colour::new(0x0099FF);
