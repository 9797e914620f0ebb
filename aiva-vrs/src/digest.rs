//! Digest computation.
//!
//! A canonical form is serialized into a `:`-separated byte string, hashed
//! with SHA-512 and truncated to 24 bytes (sha512t24u). The text form is the
//! unpadded base64url encoding of those bytes, always 32 characters.
//!
//! Serialization layout:
//!
//! ```text
//! GRCh38:           <sequence_key>:<position>:<ref>:<alt>
//! other assemblies: <assembly>:<sequence_key>:<position>:<ref>:<alt>
//! ```
//!
//! No field can contain `:` (chromosome tokens, decimal positions, `ACGTN`
//! alleles and assembly names all exclude it), and the two layouts differ in
//! field count, so distinct canonical forms never serialize to the same
//! bytes. The GRCh38 layout predates assembly qualification and is kept so
//! that published identifiers stay valid. Any change here is a breaking
//! change to every identifier ever issued.

use arrayvec::ArrayString;
use sha2::{Digest as _, Sha512};

use crate::models::{CanonicalForm, DIGEST_LEN, DIGEST_TEXT_LEN};

const SEPARATOR: u8 = b':';

/// A truncated SHA-512 digest of a canonical variant. Opaque.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Digest([u8; DIGEST_LEN]);

impl Digest {
    pub(crate) fn from_bytes(bytes: [u8; DIGEST_LEN]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; DIGEST_LEN] {
        &self.0
    }

    /// Unpadded base64url text, exactly 32 characters.
    pub fn to_text(&self) -> ArrayString<DIGEST_TEXT_LEN> {
        let encoded = base64_url::encode(&self.0);
        let mut text = ArrayString::new();
        // 24 bytes always encode to 32 characters
        for c in encoded.chars().take(DIGEST_TEXT_LEN) {
            text.push(c);
        }
        text
    }
}

impl std::fmt::Display for Digest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_text())
    }
}

/// Reusable digest writer that avoids per-call allocations.
///
/// Holds a scratch buffer for the serialized canonical form. For hot loops
/// (batch generation) keep one writer per thread; for one-off calls use
/// [`digest`].
pub struct DigestWriter {
    buf: Vec<u8>,
}

impl Default for DigestWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl DigestWriter {
    pub fn new() -> Self {
        Self {
            buf: Vec::with_capacity(128),
        }
    }

    /// Serialize `canonical` into the scratch buffer and return the bytes.
    pub fn serialize(&mut self, canonical: &CanonicalForm) -> &[u8] {
        self.buf.clear();
        if !canonical.assembly().is_primary() {
            self.buf
                .extend_from_slice(canonical.assembly().as_str().as_bytes());
            self.buf.push(SEPARATOR);
        }
        self.buf.extend_from_slice(canonical.sequence_key().as_bytes());
        self.buf.push(SEPARATOR);
        self.buf
            .extend_from_slice(itoa::Buffer::new().format(canonical.position()).as_bytes());
        self.buf.push(SEPARATOR);
        self.buf.extend_from_slice(canonical.reference().as_bytes());
        self.buf.push(SEPARATOR);
        self.buf.extend_from_slice(canonical.alternate().as_bytes());
        &self.buf
    }

    /// Compute the digest of a canonical form.
    pub fn digest(&mut self, canonical: &CanonicalForm) -> Digest {
        self.serialize(canonical);
        Digest(sha512_truncated(&self.buf))
    }
}

/// SHA-512 truncated to 24 bytes. Stack-allocated hasher.
#[inline]
fn sha512_truncated(data: &[u8]) -> [u8; DIGEST_LEN] {
    let hash = Sha512::digest(data);
    let mut out = [0u8; DIGEST_LEN];
    out.copy_from_slice(&hash[..DIGEST_LEN]);
    out
}

/// SHA-512 truncated to 24 bytes, base64url-encoded without padding.
pub fn sha512t24u(data: &[u8]) -> String {
    base64_url::encode(&sha512_truncated(data))
}

/// Compute the digest of a canonical form.
pub fn digest(canonical: &CanonicalForm) -> Digest {
    DigestWriter::new().digest(canonical)
}
