//! Hashing messages to the jq255 groups.

use crate::{Curve, Point, PreparedMessage};
use blake2::{Blake2s256, Digest};

/// Domain bytes of the two independent field elements.
const TAG_FIRST: u8 = 0x01;
const TAG_SECOND: u8 = 0x02;

impl Curve {
    /// Hash a prepared message to a group element.
    ///
    /// The message is hashed twice with BLAKE2s under distinct one-byte
    /// prefixes; each digest is reduced into the base field and mapped to the
    /// group, and the two images are added. The output can be any group
    /// element, including the neutral element.
    pub fn hash_to_curve(&'static self, message: &PreparedMessage<'_>) -> Point {
        let p1 = self.map_to_curve_bytes(&tagged_digest(TAG_FIRST, message));
        let p2 = self.map_to_curve_bytes(&tagged_digest(TAG_SECOND, message));
        p1.add_unchecked(&p2)
    }
}

fn tagged_digest(tag: u8, message: &PreparedMessage<'_>) -> [u8; 32] {
    let mut hasher = Blake2s256::new();
    hasher.update([tag]);
    message.update_digest(&mut hasher);
    hasher.finalize().into()
}
