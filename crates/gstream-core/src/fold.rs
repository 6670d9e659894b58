//! XOR folding: 256 bits in, 128 bits out.
//!
//! `output_bit[i] = bits[i] XOR bits[i + 128]` for `i in 0..128`, packed
//! most-significant-bit first. Because [`SelectedBits`] already uses the same
//! MSB-first packing, bit `i` and bit `i + 128` share a byte position, and the
//! fold reduces to XOR-ing the two 16-byte halves of the packed buffer.

use crate::select::SelectedBits;
use crate::types::{Output, OUTPUT_LEN};

/// XOR the first 16 bytes of a 32-byte buffer with the last 16.
pub fn fold_halves(bytes: &[u8; 2 * OUTPUT_LEN]) -> [u8; OUTPUT_LEN] {
    let (first, second) = bytes.split_at(OUTPUT_LEN);
    let mut out = [0u8; OUTPUT_LEN];
    for (o, (a, b)) in out.iter_mut().zip(first.iter().zip(second)) {
        *o = a ^ b;
    }
    out
}

/// Fold 256 selected bits into one output block.
pub fn fold(bits: &SelectedBits) -> Output {
    Output(fold_halves(bits.as_packed()))
}
