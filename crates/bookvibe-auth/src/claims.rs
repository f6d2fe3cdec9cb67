//! Claims carried by an access token.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Identity fields supplied by the caller at issuance.
pub type IdentityPayload = Map<String, Value>;

/// Registered claims that the issuer owns and never takes from the payload.
const RESERVED_CLAIMS: [&str; 2] = ["exp", "iat"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    #[serde(flatten)]
    pub payload: IdentityPayload,
    /// Token expiration timestamp (Unix timestamp)
    pub exp: usize,
    /// Token issued-at timestamp (Unix timestamp)
    pub iat: usize,
}

impl Claims {
    pub fn new(mut payload: IdentityPayload, issued_at: usize, lifetime_secs: usize) -> Self {
        for reserved in RESERVED_CLAIMS {
            payload.remove(reserved);
        }

        Self {
            payload,
            exp: issued_at + lifetime_secs,
            iat: issued_at,
        }
    }

    /// The `email` claim, when the payload carried one as a string.
    pub fn email(&self) -> Option<&str> {
        self.payload.get("email").and_then(Value::as_str)
    }
}
