/// Reflected IEEE 802.3 polynomial.
const POLYNOMIAL: u32 = 0xEDB8_8320;

/// Byte-indexed lookup table, built at compile time and shared read-only.
static CRC32_TABLE: [u32; 256] = build_table();

const fn build_table() -> [u32; 256] {
    let mut table = [0u32; 256];
    let mut i = 0;
    while i < 256 {
        let mut crc = i as u32;
        let mut bit = 0;
        while bit < 8 {
            crc = if crc & 1 != 0 {
                (crc >> 1) ^ POLYNOMIAL
            } else {
                crc >> 1
            };
            bit += 1;
        }
        table[i] = crc;
        i += 1;
    }
    table
}

/// Compute the CRC32 (IEEE) of a byte slice.
///
/// This is the checksum ZIP readers recompute for every member, so it must
/// match bit for bit: initial value `0xFFFFFFFF`, reflected input, final XOR
/// with `0xFFFFFFFF`.
#[inline]
pub fn crc32(data: &[u8]) -> u32 {
    crc32_chunk(data, 0)
}

/// Continue a CRC32 from a previous value.
fn crc32_chunk(data: &[u8], prev: u32) -> u32 {
    let mut crc = !prev;
    for &byte in data {
        crc = CRC32_TABLE[((crc ^ u32::from(byte)) & 0xFF) as usize] ^ (crc >> 8);
    }
    !crc
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck_macros::quickcheck;
    use rstest::rstest;

    #[test]
    fn test_crc() {
        // Test known CRC32 value
        let data = b"EU4txt\nchecksum=\"ced5411e2d4a5ec724595c2c4f1b7347\"";
        assert_eq!(crc32(data), 1702863696);

        // Test incremental CRC32
        let full = crc32(b"hello world");
        let incremental = crc32_chunk(b" world", crc32(b"hello"));
        assert_eq!(full, incremental);
    }

    #[rstest]
    #[case(b"", 0x0000_0000)]
    #[case(b"a", 0xE8B7_BE43)]
    #[case(b"abc", 0x3524_41C2)]
    #[case(b"123456789", 0xCBF4_3926)]
    #[case(b"The quick brown fox jumps over the lazy dog", 0x414F_A339)]
    fn test_check_values(#[case] input: &[u8], #[case] expected: u32) {
        assert_eq!(crc32(input), expected);
    }

    #[test]
    fn test_table_entries() {
        assert_eq!(CRC32_TABLE[0], 0);
        assert_eq!(CRC32_TABLE[1], 0x7707_3096);
        assert_eq!(CRC32_TABLE[255], 0x2D02_EF8D);
    }

    #[quickcheck]
    fn matches_crc32fast(data: Vec<u8>) -> bool {
        crc32(&data) == crc32fast::hash(&data)
    }

    #[quickcheck]
    fn chunking_is_transparent(data: Vec<u8>, split: usize) -> bool {
        let split = if data.is_empty() { 0 } else { split % data.len() };
        let (head, tail) = data.split_at(split);
        crc32_chunk(tail, crc32(head)) == crc32(&data)
    }
}
