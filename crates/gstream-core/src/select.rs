//! Bit selection: filter ratchet output down to exactly 256 bits.
//!
//! Each byte of a ratchet block is tested with a fixed predicate: the byte is
//! accepted when its bit 1 equals its bit 2, and an accepted byte contributes
//! its bit 0. About half the bytes pass, so a 32-byte block yields around 16
//! bits and an output needs roughly 16 ratchet steps. The exact number varies
//! per output; callers must not assume it.
//!
//! Collection stops at the 256th accepted bit, even in the middle of a block.
//! The remaining bytes of that block are discarded, but the block still
//! counted as a ratchet step.

use std::fmt;

use crate::ratchet::{Counter, HashChain};
use crate::types::State;

/// Number of bits gathered per output.
pub const SELECTED_BITS: usize = 256;

const PACKED_LEN: usize = SELECTED_BITS / 8;

/// The selection predicate: bit 1 equals bit 2.
#[inline]
pub const fn accept(byte: u8) -> bool {
    (byte >> 1) & 1 == (byte >> 2) & 1
}

/// The bit an accepted byte contributes: bit 0.
#[inline]
pub const fn selected_bit(byte: u8) -> u8 {
    byte & 1
}

/// Exactly 256 selected bits, packed most-significant-bit first.
///
/// Bit `i` of the sequence lives in byte `i / 8` at position `7 - i % 8`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct SelectedBits([u8; PACKED_LEN]);

impl SelectedBits {
    /// Wrap an already packed buffer.
    pub const fn from_packed(packed: [u8; PACKED_LEN]) -> Self {
        Self(packed)
    }

    /// Build from one value per bit (each 0 or 1).
    ///
    /// Returns `None` unless there are exactly 256 values, all 0 or 1.
    pub fn from_bits(bits: &[u8]) -> Option<Self> {
        if bits.len() != SELECTED_BITS || bits.iter().any(|&b| b > 1) {
            return None;
        }
        let mut acc = BitAccumulator::new();
        for &bit in bits {
            acc.push(bit);
        }
        Some(Self(acc.buf))
    }

    /// Bit `index` of the sequence (0 or 1).
    ///
    /// # Panics
    ///
    /// Panics if `index >= 256`.
    pub fn bit(&self, index: usize) -> u8 {
        (self.0[index / 8] >> (7 - index % 8)) & 1
    }

    /// The packed bytes.
    pub const fn as_packed(&self) -> &[u8; PACKED_LEN] {
        &self.0
    }

    /// Iterate the bits in sequence order.
    pub fn iter(&self) -> impl Iterator<Item = u8> + '_ {
        (0..SELECTED_BITS).map(move |i| self.bit(i))
    }
}

impl fmt::Debug for SelectedBits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SelectedBits({})", hex::encode(self.0))
    }
}

/// Fixed-capacity MSB-first bit packer.
struct BitAccumulator {
    buf: [u8; PACKED_LEN],
    len: usize,
}

impl BitAccumulator {
    fn new() -> Self {
        Self {
            buf: [0u8; PACKED_LEN],
            len: 0,
        }
    }

    /// Append a bit; returns true once the buffer is full.
    fn push(&mut self, bit: u8) -> bool {
        if bit != 0 {
            self.buf[self.len / 8] |= 0x80 >> (self.len % 8);
        }
        self.len += 1;
        self.len == SELECTED_BITS
    }
}

/// The result of one selection pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    /// The 256 selected bits.
    pub bits: SelectedBits,
    /// Ratchet steps consumed to gather them.
    pub blocks: usize,
}

/// Gather 256 bits by stepping `chain` until enough bytes are accepted.
///
/// Always terminates: each step yields fresh hash output, and about half of
/// its bytes pass the predicate.
pub fn collect_from_chain(chain: &mut HashChain) -> Selection {
    let mut acc = BitAccumulator::new();
    let mut blocks = 0;

    loop {
        let entropy = chain.step();
        blocks += 1;

        for &byte in entropy.as_bytes() {
            if accept(byte) && acc.push(selected_bit(byte)) {
                return Selection {
                    bits: SelectedBits(acc.buf),
                    blocks,
                };
            }
        }
    }
}

/// Functional form: gather 256 bits starting at `(state, counter)` and return
/// them with the advanced position.
pub fn collect_256_bits(state: State, counter: Counter) -> (SelectedBits, State, Counter) {
    let mut chain = HashChain::new(state, counter);
    let selection = collect_from_chain(&mut chain);
    let (state, counter) = chain.into_parts();
    (selection.bits, state, counter)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ratchet::ratchet;
    use crate::seed::GOLDEN_RATIO_SEED;
    use proptest::prelude::*;

    /// Straightforward list-based selection to compare against.
    fn reference_collect(mut state: State, mut counter: Counter) -> (Vec<u8>, State, Counter) {
        let mut bits = Vec::new();
        while bits.len() < SELECTED_BITS {
            state = ratchet(&state, &counter);
            counter.increment();
            for &byte in state.as_bytes() {
                if (byte >> 1) & 1 == (byte >> 2) & 1 {
                    bits.push(byte & 1);
                    if bits.len() == SELECTED_BITS {
                        break;
                    }
                }
            }
        }
        (bits, state, counter)
    }

    #[test]
    fn test_accept_predicate_table() {
        // bits 2..1: 00 and 11 pass, 01 and 10 fail
        assert!(accept(0b000));
        assert!(accept(0b001));
        assert!(!accept(0b010));
        assert!(!accept(0b011));
        assert!(!accept(0b100));
        assert!(!accept(0b101));
        assert!(accept(0b110));
        assert!(accept(0b111));
        // high bits are ignored
        assert_eq!(accept(0xF8), accept(0x00));
    }

    #[test]
    fn test_accept_passes_half_of_all_bytes() {
        let passed = (0u8..=255).filter(|&b| accept(b)).count();
        assert_eq!(passed, 128);
    }

    #[test]
    fn test_selected_bit() {
        assert_eq!(selected_bit(0b0000_0111), 1);
        assert_eq!(selected_bit(0b0000_0110), 0);
    }

    #[test]
    fn test_from_bits_packs_msb_first() {
        let mut raw = vec![0u8; SELECTED_BITS];
        raw[0] = 1;
        raw[9] = 1;
        raw[255] = 1;
        let bits = SelectedBits::from_bits(&raw).unwrap();
        assert_eq!(bits.as_packed()[0], 0x80);
        assert_eq!(bits.as_packed()[1], 0x40);
        assert_eq!(bits.as_packed()[31], 0x01);
        assert_eq!(bits.bit(9), 1);
        assert_eq!(bits.bit(10), 0);
        assert_eq!(bits.iter().collect::<Vec<_>>(), raw);
    }

    #[test]
    fn test_from_bits_rejects_bad_input() {
        assert!(SelectedBits::from_bits(&[0u8; 255]).is_none());
        let mut raw = vec![0u8; SELECTED_BITS];
        raw[3] = 2;
        assert!(SelectedBits::from_bits(&raw).is_none());
    }

    #[test]
    fn test_first_selection_from_reference_seed() {
        let mut chain = HashChain::from_seed(&GOLDEN_RATIO_SEED);
        let selection = collect_from_chain(&mut chain);

        // The reference stream needs 17 ratchet steps for its first output.
        assert_eq!(selection.blocks, 17);
        assert_eq!(chain.counter().to_u64(), Some(17));

        let start = HashChain::from_seed(&GOLDEN_RATIO_SEED);
        let (expected, state, counter) = reference_collect(*start.state(), Counter::zero());
        assert_eq!(selection.bits.iter().collect::<Vec<_>>(), expected);
        assert_eq!(chain.state(), &state);
        assert_eq!(chain.counter(), &counter);
    }

    #[test]
    fn test_functional_form_matches_chain() {
        let state = State::from_bytes([0x24; 32]);
        let (bits, next_state, next_counter) = collect_256_bits(state, Counter::from_u64(99));

        let mut chain = HashChain::new(state, Counter::from_u64(99));
        let selection = collect_from_chain(&mut chain);
        assert_eq!(bits, selection.bits);
        assert_eq!(&next_state, chain.state());
        assert_eq!(&next_counter, chain.counter());
    }

    proptest! {
        #[test]
        fn test_selection_matches_reference(state in any::<[u8; 32]>(), start in 0u64..1_000_000) {
            let state = State::from_bytes(state);
            let counter = Counter::from_u64(start);

            let (bits, s1, c1) = collect_256_bits(state, counter.clone());
            let (expected, s2, c2) = reference_collect(state, counter.clone());

            prop_assert_eq!(bits.iter().collect::<Vec<_>>(), expected);
            prop_assert_eq!(s1, s2);
            prop_assert!(c1 > counter);
            prop_assert_eq!(c1, c2);
        }
    }
}
