//! Authentication state injected into the site header.

use serde::{Deserialize, Serialize};

/// Whether the visitor is logged in.
///
/// The storefront reads this from the session and hands it to the header;
/// nothing else consults the login flag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthSession {
    pub logged_in: bool,
}

impl AuthSession {
    #[must_use]
    pub const fn logged_in() -> Self {
        Self { logged_in: true }
    }

    #[must_use]
    pub const fn guest() -> Self {
        Self { logged_in: false }
    }
}
