/// Packs runs of `bit` fields, eight per octet, least significant bit first.
pub struct BitPacker;

impl BitPacker {
    pub const fn packed_len(count: usize) -> usize {
        (count + 7) / 8
    }

    pub fn pack(bits: &[bool]) -> Vec<u8> {
        bits.chunks(8)
            .map(|chunk| {
                chunk.iter()
                    .enumerate()
                    .fold(0u8, |byte, (index, bit)| if *bit { byte | (1 << index) } else { byte })
            })
            .collect()
    }

    /// Reads `count` bits starting at bit 0. `None` when `count` exceeds 8.
    pub fn unpack(byte: u8, count: usize) -> Option<Vec<bool>> {
        if count > 8 {
            return None;
        }

        Some((0..count).map(|index| (byte & (1 << index)) != 0).collect())
    }

    /// Reads a run of `count` bits spread over consecutive octets. `None`
    /// when `bytes` holds fewer than `packed_len(count)` octets.
    pub fn unpack_all(bytes: &[u8], count: usize) -> Option<Vec<bool>> {
        if bytes.len() < BitPacker::packed_len(count) {
            return None;
        }

        let mut result = Vec::with_capacity(count);
        for (index, byte) in bytes.iter().take(BitPacker::packed_len(count)).enumerate() {
            result.extend(BitPacker::unpack(*byte, (count - index * 8).min(8))?);
        }

        Some(result)
    }
}
