//! Little-endian integer packing used by the header codec.

/// Pack a u16 as 2 little-endian bytes.
pub fn pack_u16(value: u16) -> [u8; 2] {
    value.to_le_bytes()
}

/// Pack a u32 as 4 little-endian bytes.
pub fn pack_u32(value: u32) -> [u8; 4] {
    value.to_le_bytes()
}

/// Inverse of [`pack_u16`].
pub fn unpack_u16(bytes: [u8; 2]) -> u16 {
    u16::from_le_bytes(bytes)
}

/// Inverse of [`pack_u32`].
pub fn unpack_u32(bytes: [u8; 4]) -> u32 {
    u32::from_le_bytes(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn packing_is_little_endian() {
        assert_eq!(pack_u16(0x4D42), *b"BM");
        assert_eq!(pack_u32(0x1234_5678), [0x78, 0x56, 0x34, 0x12]);
    }

    #[test]
    fn unpack_inverts_pack() {
        for v in [0u16, 1, 0x00FF, 0xFF00, 0x4D42, u16::MAX] {
            assert_eq!(unpack_u16(pack_u16(v)), v);
        }
        for v in [0u32, 54, 0x0001_0000, 0xDEAD_BEEF, u32::MAX] {
            assert_eq!(unpack_u32(pack_u32(v)), v);
        }
    }
}
