//! Kernel utilities shared across slices.
//! Keep this crate lightweight; it provides config loading and receipt-ID helpers.
//!
//! ## Receipt IDs
//! Use [`receipt_id`] for URL-safe, unambiguous identifiers:
//! ```rust
//! let id = rollcall_kernel::receipt_id();
//! assert_eq!(id.len(), 12);
//! ```
//!
//! ## Config loading
//! ```rust,no_run
//! use rollcall_domain::config::AppConfig;
//! use rollcall_kernel::config::load_config;
//!
//! let cfg: AppConfig = load_config(None::<&str>).unwrap();
//! ```

pub mod config;

use rollcall_domain::constants::RECEIPT_ID_LENGTH;

// Alphabet excludes visually ambiguous characters (I, O, l, 0, 1).
const RECEIPT_ALPHABET: &[char; 55] = &[
    '2', '3', '4', '5', '6', '7', '8', '9', 'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'J', 'K', 'L',
    'M', 'N', 'P', 'Q', 'R', 'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z', 'a', 'b', 'c', 'd', 'e', 'f',
    'g', 'h', 'j', 'k', 'm', 'n', 'p', 'q', 'r', 's', 't', 'u', 'v', 'w', 'x', 'y', 'z',
];

/// Generates an unambiguous receipt identifier.
///
/// Receipt IDs end up on screens and in log lines, so the alphabet skips
/// characters that are easy to misread.
#[must_use]
pub fn receipt_id() -> String {
    nanoid::nanoid!(RECEIPT_ID_LENGTH, RECEIPT_ALPHABET)
}

/// Returns `true` when every character of `id` belongs to the receipt alphabet.
#[must_use]
pub fn is_receipt_id(id: &str) -> bool {
    id.len() == RECEIPT_ID_LENGTH && id.chars().all(|ch| RECEIPT_ALPHABET.contains(&ch))
}
