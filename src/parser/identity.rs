//! Peer identity metadata supplied by secure transports.

/// Identity metadata for the remote peer of a secure connection.
///
/// The engine never performs a TLS handshake itself. A secure-transport
/// collaborator that has completed one can describe the session here and
/// attach it to the parsed request with [`Request::with_peer`]; handlers and
/// middleware treat the contents as opaque.
///
/// [`Request::with_peer`]: crate::parser::Request::with_peer
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PeerIdentity {
    /// Subject of the peer certificate, if one was presented.
    pub subject: Option<String>,
    /// Issuer of the peer certificate, if one was presented.
    pub issuer: Option<String>,
    /// Negotiated protocol version, e.g. "TLSv1.3".
    pub protocol: Option<String>,
}
