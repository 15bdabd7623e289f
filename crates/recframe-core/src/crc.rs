//! Masked CRC32C Checksums
//!
//! Record frames are guarded by CRC32C (Castagnoli) checksums, but the raw
//! CRC is never stored directly. It first passes through a fixed
//! rotate-and-add transform:
//!
//! ```text
//! masked = rotl32(crc, 17) + 0xA282EAD8   (mod 2^32)
//! ```
//!
//! ## Why Mask At All?
//!
//! A CRC of data that itself contains CRCs tends to produce degenerate
//! values, and some corruption patterns preserve a plain CRC. Rotating the
//! bits and adding a constant makes the stored value look nothing like a
//! CRC of the same bytes, so those patterns no longer slip through.
//!
//! The transform is invertible: `unmask(mask(c)) == c` for every `c`, which
//! is what allows a reader to recover the raw CRC when verifying.
//!
//! ## Usage
//! ```ignore
//! let stored = masked_crc32c(payload);        // value written to disk
//! let raw = unmask(stored);                   // recover the plain CRC32C
//! assert_eq!(raw, crc32c::crc32c(payload));
//! ```

/// Constant added after the rotate step of the mask transform.
pub const MASK_DELTA: u32 = 0xA282_EAD8;

/// Mask a raw CRC32C value for storage.
///
/// The rotate is `(crc >> 15) | (crc << 17)` in wrapping u32 arithmetic,
/// i.e. a 17-bit left rotation.
pub fn mask(crc: u32) -> u32 {
    crc.rotate_left(17).wrapping_add(MASK_DELTA)
}

/// Invert [`mask`]: subtract the delta, rotate back.
pub fn unmask(masked: u32) -> u32 {
    masked.wrapping_sub(MASK_DELTA).rotate_right(17)
}

/// CRC32C of `data`, masked for storage.
pub fn masked_crc32c(data: &[u8]) -> u32 {
    mask(crc32c::crc32c(data))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_zero() {
        // rotl32(0, 17) == 0, so masking zero yields the bare delta
        assert_eq!(mask(0), 0xA282_EAD8);
    }

    #[test]
    fn test_mask_known_crc() {
        // crc32c("123456789") is the standard Castagnoli check value
        let crc = crc32c::crc32c(b"123456789");
        assert_eq!(crc, 0xE306_9283);
        assert_eq!(mask(crc), 0xC78A_B0E5);
    }

    #[test]
    fn test_masked_crc32c_empty() {
        // crc32c of the empty string is 0
        assert_eq!(masked_crc32c(b""), 0xA282_EAD8);
    }

    #[test]
    fn test_unmask_inverts_mask() {
        let values = [
            0u32,
            1,
            0xE306_9283,
            0xA282_EAD8,
            0x7FFF_FFFF,
            0x8000_0000,
            u32::MAX,
        ];
        for c in values {
            assert_eq!(unmask(mask(c)), c, "failed for {c:#010x}");
        }
    }

    #[test]
    fn test_mask_unmask_exhaustive_sample() {
        // Stride across the full u32 range rather than testing all 4B values
        let mut c = 0u32;
        loop {
            assert_eq!(unmask(mask(c)), c);
            match c.checked_add(65_537) {
                Some(next) => c = next,
                None => break,
            }
        }
    }

    #[test]
    fn test_mask_is_not_identity() {
        for c in [0u32, 42, 0xDEAD_BEEF, u32::MAX] {
            assert_ne!(mask(c), c);
        }
    }
}
