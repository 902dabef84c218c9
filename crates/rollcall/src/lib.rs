//! Facade crate for Rollcall features and shared modules.
//! Re-exports domain/kernel primitives and assembles the client pieces.
//! Keep this crate thin: it should compose other crates, not implement business logic.
//!
//! ## Usage
//! - Depend on `rollcall` and call [`init`] with a loaded [`AppConfig`].
//! - The returned [`Client`] carries the submitter and the scan feed the UI wires up.

pub use rollcall_attendance as attendance;
pub use rollcall_domain as domain;
pub use rollcall_kernel as kernel;
pub use rollcall_registration as registration;

use rollcall_attendance::ScanFeed;
use rollcall_domain::config::AppConfig;
use rollcall_registration::SimulatedSubmitter;

/// Feature registry for runtime introspection.
pub mod features {
    /// Build-time enabled features.
    pub const ENABLED: &[&str] = &["registration", "attendance"];

    #[must_use]
    pub fn is_enabled(name: &str) -> bool {
        ENABLED.contains(&name)
    }
}

/// The assembled client-side services.
#[derive(Debug, Clone)]
pub struct Client {
    /// Stand-in submission backend; the only "network" this client has.
    pub submitter: SimulatedSubmitter,
    /// Callback surface for the external QR decoder.
    pub scan_feed: ScanFeed,
}

/// Wires the client services from configuration.
#[must_use]
pub fn init(config: &AppConfig) -> Client {
    Client {
        submitter: SimulatedSubmitter::from_config(&config.submission),
        scan_feed: ScanFeed::new(),
    }
}
