//! Messages for signatures and hash-to-curve.

use alloc::vec::Vec;
use blake2::Digest;

/// Tag for raw, unhashed messages.
const TAG_RAW: u8 = 0x52;

/// Tag for pre-hashed messages, followed by the hash function name.
const TAG_PREHASHED: u8 = 0x48;

/// Hash functions which can be used to pre-hash messages.
///
/// Only the name is used: it is injected in the signed data so that a
/// signature over a hash value cannot be reused for a raw message or for
/// another hash function. Names are lowercase without punctuation.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum HashName {
    /// SHA-224
    Sha224,
    /// SHA-256
    Sha256,
    /// SHA-384
    Sha384,
    /// SHA-512
    Sha512,
    /// SHA-512/224
    Sha512_224,
    /// SHA-512/256
    Sha512_256,
    /// SHA3-224
    Sha3_224,
    /// SHA3-256
    Sha3_256,
    /// SHA3-384
    Sha3_384,
    /// SHA3-512
    Sha3_512,
    /// BLAKE2b
    Blake2b,
    /// BLAKE2s
    Blake2s,
}

impl HashName {
    /// Name of the hash function, e.g. `"sha512256"` for SHA-512/256.
    pub fn as_str(self) -> &'static str {
        match self {
            HashName::Sha224 => "sha224",
            HashName::Sha256 => "sha256",
            HashName::Sha384 => "sha384",
            HashName::Sha512 => "sha512",
            HashName::Sha512_224 => "sha512224",
            HashName::Sha512_256 => "sha512256",
            HashName::Sha3_224 => "sha3224",
            HashName::Sha3_256 => "sha3256",
            HashName::Sha3_384 => "sha3384",
            HashName::Sha3_512 => "sha3512",
            HashName::Blake2b => "blake2b",
            HashName::Blake2s => "blake2s",
        }
    }

    /// Name of the hash function as bytes.
    pub fn as_bytes(self) -> &'static [u8] {
        self.as_str().as_bytes()
    }
}

/// A message, raw or pre-hashed, in the form that is signed or hashed to
/// the group.
///
/// The prepared form is `0x52 || data` for raw data and
/// `0x48 || name || 0x00 || hash value` for pre-hashed data.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct PreparedMessage<'a> {
    hash_name: Option<&'a [u8]>,
    data: &'a [u8],
}

impl<'a> PreparedMessage<'a> {
    /// Raw, unhashed message.
    pub fn raw(data: &'a [u8]) -> Self {
        Self {
            hash_name: None,
            data,
        }
    }

    /// Hash value computed with a known hash function.
    pub fn prehashed(hash: HashName, hash_value: &'a [u8]) -> Self {
        Self {
            hash_name: Some(hash.as_bytes()),
            data: hash_value,
        }
    }

    /// Hash value computed with a hash function identified by an arbitrary
    /// name. An empty name means that `data` is a raw message.
    pub fn with_hash_name(name: &'a [u8], data: &'a [u8]) -> Self {
        Self {
            hash_name: (!name.is_empty()).then_some(name),
            data,
        }
    }

    /// Name of the hash function, or `None` for raw messages.
    pub fn hash_name(&self) -> Option<&'a [u8]> {
        self.hash_name
    }

    /// Raw message or hash value.
    pub fn data(&self) -> &'a [u8] {
        self.data
    }

    /// Feed the prepared form into a hasher.
    pub(crate) fn update_digest<D: Digest>(&self, hasher: &mut D) {
        match self.hash_name {
            None => Digest::update(hasher, [TAG_RAW]),
            Some(name) => {
                Digest::update(hasher, [TAG_PREHASHED]);
                Digest::update(hasher, name);
                Digest::update(hasher, [0x00]);
            }
        }
        Digest::update(hasher, self.data);
    }

    /// The prepared form as bytes.
    pub fn to_vec(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.data.len() + 2 + self.hash_name.map_or(0, <[u8]>::len));
        match self.hash_name {
            None => out.push(TAG_RAW),
            Some(name) => {
                out.push(TAG_PREHASHED);
                out.extend_from_slice(name);
                out.push(0x00);
            }
        }
        out.extend_from_slice(self.data);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::{HashName, PreparedMessage};
    use blake2::{Blake2s256, Digest};

    #[test]
    fn raw_message() {
        let m = PreparedMessage::raw(b"abc");
        assert_eq!(m.to_vec(), b"Rabc");
        assert_eq!(PreparedMessage::with_hash_name(b"", b"abc"), m);
    }

    #[test]
    fn prehashed_message() {
        let m = PreparedMessage::prehashed(HashName::Sha3_256, &[1, 2]);
        assert_eq!(m.to_vec(), b"Hsha3256\x00\x01\x02");
        assert_eq!(PreparedMessage::with_hash_name(b"sha3256", &[1, 2]), m);
    }

    #[test]
    fn digest_matches_bytes() {
        for m in [
            PreparedMessage::raw(b"sample"),
            PreparedMessage::prehashed(HashName::Blake2b, b"value"),
        ] {
            let mut hasher = Blake2s256::new();
            m.update_digest(&mut hasher);
            assert_eq!(hasher.finalize(), Blake2s256::digest(m.to_vec()));
        }
    }

    #[test]
    fn names() {
        assert_eq!(HashName::Sha512_224.as_str(), "sha512224");
        assert_eq!(HashName::Blake2s.as_bytes(), b"blake2s");
    }
}
