//! The XOR message codec.
//!
//! Messages are trimmed, UTF-8 encoded, zero-padded, and XOR-ed with a
//! repeating fixed key before they are packed. This obscures the bytes on
//! the wire; it is **not** encryption and must never be treated as such.
//!
//! # Example
//!
//! ```
//! use packrs::XorCodec;
//!
//! let codec = XorCodec::default();
//! let encoded = codec.encode("  hello  ");
//!
//! // Trimmed to "hello" (5 bytes), padded by 5 % 8 = 5 zero bytes.
//! assert_eq!(encoded.len(), 10);
//!
//! // XOR is an involution: decoding restores the trimmed bytes.
//! assert_eq!(&codec.decode(&encoded)[..5], b"hello");
//! ```

use bytes::Bytes;

/// Length of the XOR key in bytes.
pub const KEY_LEN: usize = 8;

/// The default obfuscation key.
pub const DEFAULT_KEY: [u8; KEY_LEN] = [0x00, 0x53, 0x65, 0x63, 0x72, 0x65, 0x74, 0x00];

/// A repeating-key XOR codec for message obfuscation.
///
/// The key is injected at construction and immutable afterwards, so codecs
/// with different keys can coexist and be swapped in tests.
///
/// # Padding
///
/// Before the XOR pass the trimmed UTF-8 bytes are extended with
/// `len % KEY_LEN` zero bytes (none when the length is already a key
/// multiple). Because `0 ^ k == k`, the padded tail of an encoded message
/// equals the corresponding key bytes verbatim. Decoders must account for
/// this rather than expecting a zeroed tail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct XorCodec {
    key: [u8; KEY_LEN],
}

impl XorCodec {
    /// Creates a codec with the given key.
    pub const fn new(key: [u8; KEY_LEN]) -> Self {
        Self { key }
    }

    /// Returns the key this codec was built with.
    pub fn key(&self) -> &[u8; KEY_LEN] {
        &self.key
    }

    /// Encodes a message: trim, UTF-8, zero-pad, XOR with the repeating key.
    ///
    /// Deterministic for a given message and key; never fails. The output
    /// length is the trimmed UTF-8 length plus `len % KEY_LEN` padding bytes.
    ///
    /// # Example
    ///
    /// ```
    /// use packrs::XorCodec;
    ///
    /// let codec = XorCodec::default();
    /// // 8 bytes, already a key multiple: no padding added.
    /// assert_eq!(codec.encode("yeskimos").len(), 8);
    /// ```
    pub fn encode(&self, message: &str) -> Bytes {
        let trimmed = message.trim();
        let mut out = trimmed.as_bytes().to_vec();

        // Pad with zero bytes; the XOR pass below covers them too.
        let padding = out.len() % KEY_LEN;
        if padding != 0 {
            out.resize(out.len() + padding, 0);
        }

        for (i, byte) in out.iter_mut().enumerate() {
            *byte ^= self.key[i % KEY_LEN];
        }

        Bytes::from(out)
    }

    /// Re-applies the key to encoded bytes.
    ///
    /// XOR with the same key is its own inverse, so this restores the
    /// trimmed message bytes followed by the zero padding. Callers that know
    /// the original length truncate the result themselves.
    pub fn decode(&self, data: &[u8]) -> Vec<u8> {
        data.iter()
            .enumerate()
            .map(|(i, &byte)| byte ^ self.key[i % KEY_LEN])
            .collect()
    }
}

impl Default for XorCodec {
    fn default() -> Self {
        Self::new(DEFAULT_KEY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trims_before_encoding() {
        let codec = XorCodec::default();
        assert_eq!(codec.encode("  hi  "), codec.encode("hi"));
    }

    #[test]
    fn test_key_multiple_gets_no_padding() {
        let codec = XorCodec::default();
        // 16 bytes, 16 % 8 == 0
        assert_eq!(codec.encode("sixteen--chars!!").len(), 16);
    }

    #[test]
    fn test_padding_adds_len_mod_key_len() {
        let codec = XorCodec::default();
        // 5 bytes: 5 % 8 == 5 padding bytes, total 10
        assert_eq!(codec.encode("hello").len(), 10);
        // 12 bytes: 12 % 8 == 4 padding bytes, total 16
        assert_eq!(codec.encode("twelve-chars").len(), 16);
    }

    #[test]
    fn test_padded_tail_equals_key_bytes() {
        let codec = XorCodec::default();
        // 12 message bytes + 4 padding bytes; the padding lands on key
        // positions 12 % 8 = 4 through 7 and comes out as the key itself.
        let encoded = codec.encode("twelve-chars");
        assert_eq!(&encoded[12..], &DEFAULT_KEY[4..8]);
    }

    #[test]
    fn test_encode_is_deterministic() {
        let codec = XorCodec::default();
        assert_eq!(codec.encode("same input"), codec.encode("same input"));
    }

    #[test]
    fn test_decode_inverts_encode() {
        let codec = XorCodec::default();
        let message = "round trips just fine";
        let encoded = codec.encode(message);
        let decoded = codec.decode(&encoded);
        assert_eq!(&decoded[..message.len()], message.as_bytes());
    }

    #[test]
    fn test_custom_key() {
        let codec = XorCodec::new([0xFF; KEY_LEN]);
        let encoded = codec.encode("aaaaaaaa");
        assert_eq!(encoded[0], b'a' ^ 0xFF);
    }

    #[test]
    fn test_first_key_byte_is_zero_passthrough() {
        // DEFAULT_KEY starts with 0x00, so bytes at key offset 0 survive.
        let codec = XorCodec::default();
        let encoded = codec.encode("x");
        assert_eq!(encoded[0], b'x');
    }

    #[test]
    fn test_unicode_encodes_utf8_bytes() {
        let codec = XorCodec::default();
        // "héllo" is 6 UTF-8 bytes: 6 % 8 == 6 padding bytes, total 12
        assert_eq!(codec.encode("héllo").len(), 12);
    }
}
