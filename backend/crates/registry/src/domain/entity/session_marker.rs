//! Session Marker
//!
//! The value a successful login produces. The core only promises this
//! association exists; binding it into a cookie (or any other session
//! mechanism) is the transport layer's business.

use kernel::id::ClientId;

/// Ephemeral association produced by a successful authentication
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionMarker {
    /// Authenticated client's record ID
    pub client_id: ClientId,
    /// Display name for the session
    pub client_name: String,
}

impl SessionMarker {
    pub fn new(client_id: ClientId, client_name: impl Into<String>) -> Self {
        Self {
            client_id,
            client_name: client_name.into(),
        }
    }
}
