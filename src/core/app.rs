//! Application identity from Cargo.toml.
//!
//! Single source of truth for the app name, version, and the attribution
//! values sent with completion requests.

/// Application name (from Cargo.toml `package.name`).
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Application version (from Cargo.toml `package.version`).
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Referrer origin sent as `HTTP-Referer` on completion requests. Used by
/// the vendor for attribution only; not required for correctness.
pub const REFERER: &str = "https://github.com/textscrub/textscrub";

/// Application title sent as `X-Title` on completion requests.
pub const TITLE: &str = "textscrub";
