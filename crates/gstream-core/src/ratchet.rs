//! The state ratchet: a one-way SHA-256 hash chain driven by a counter.
//!
//! `State_{k+1} = SHA256(State_k || decimal(Counter_k))`
//!
//! The counter is concatenated as its base-10 ASCII text with no length
//! prefix and no fixed width. That encoding is part of the wire contract:
//! any reimplementation has to hash exactly the same bytes.

use std::cmp::Ordering;
use std::fmt;

use crate::crypto::Sha256Hash;
use crate::types::State;

/// An unbounded non-negative counter stored as its decimal digits.
///
/// Keeping the ASCII form directly means the hash input never depends on a
/// machine integer width, and incrementing is a carry over a short buffer.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Counter {
    /// ASCII digits, most significant first, no leading zeros (except "0").
    digits: Vec<u8>,
}

impl Counter {
    /// The counter value 0.
    pub fn zero() -> Self {
        Self { digits: vec![b'0'] }
    }

    /// Create from a machine integer.
    pub fn from_u64(value: u64) -> Self {
        Self {
            digits: value.to_string().into_bytes(),
        }
    }

    /// Parse a decimal string. Leading zeros are dropped.
    ///
    /// Returns `None` if the string is empty or contains a non-digit.
    pub fn from_decimal(s: &str) -> Option<Self> {
        if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        let trimmed = s.trim_start_matches('0');
        if trimmed.is_empty() {
            return Some(Self::zero());
        }
        Some(Self {
            digits: trimmed.as_bytes().to_vec(),
        })
    }

    /// Add one in place.
    pub fn increment(&mut self) {
        for digit in self.digits.iter_mut().rev() {
            if *digit == b'9' {
                *digit = b'0';
            } else {
                *digit += 1;
                return;
            }
        }
        // Every digit was 9.
        self.digits.insert(0, b'1');
    }

    /// The exact bytes fed to the hash: the decimal ASCII representation.
    pub fn as_decimal_bytes(&self) -> &[u8] {
        &self.digits
    }

    /// The value as a `u64`, if it fits.
    pub fn to_u64(&self) -> Option<u64> {
        std::str::from_utf8(&self.digits).ok()?.parse().ok()
    }

    /// Number of decimal digits.
    pub fn digit_count(&self) -> usize {
        self.digits.len()
    }

    pub fn is_zero(&self) -> bool {
        self.digits == b"0"
    }
}

impl Default for Counter {
    fn default() -> Self {
        Self::zero()
    }
}

impl Ord for Counter {
    fn cmp(&self, other: &Self) -> Ordering {
        self.digits
            .len()
            .cmp(&other.digits.len())
            .then_with(|| self.digits.cmp(&other.digits))
    }
}

impl PartialOrd for Counter {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Counter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Digits are always ASCII.
        f.write_str(&String::from_utf8_lossy(&self.digits))
    }
}

impl fmt::Debug for Counter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Counter({})", self)
    }
}

impl From<u64> for Counter {
    fn from(value: u64) -> Self {
        Self::from_u64(value)
    }
}

/// Hash a state with an arbitrary suffix.
///
/// This is the raw step shared by every protocol variant; the variants differ
/// only in how they encode the counter.
pub fn ratchet_bytes(state: &State, suffix: &[u8]) -> State {
    State(Sha256Hash::hash_concat(state.as_bytes(), suffix).0)
}

/// One ratchet step: `SHA256(state || decimal(counter))`.
pub fn ratchet(state: &State, counter: &Counter) -> State {
    ratchet_bytes(state, counter.as_decimal_bytes())
}

/// A hash chain position: the exclusively owned `(State, Counter)` pair.
///
/// `step` is the only mutation path. It replaces the state with the ratchet
/// output and increments the counter, so a pair is never reused.
#[derive(Clone, PartialEq, Eq)]
pub struct HashChain {
    state: State,
    counter: Counter,
}

impl HashChain {
    /// Start a chain at an explicit position.
    pub fn new(state: State, counter: Counter) -> Self {
        Self { state, counter }
    }

    /// Start a chain at `(SHA256(seed), 0)`.
    pub fn from_seed(seed: &[u8]) -> Self {
        Self::new(State(Sha256Hash::hash(seed).0), Counter::zero())
    }

    /// Advance one step and return the new state.
    pub fn step(&mut self) -> State {
        self.state = ratchet(&self.state, &self.counter);
        self.counter.increment();
        self.state
    }

    /// Current state.
    pub fn state(&self) -> &State {
        &self.state
    }

    /// Counter value that the next step will hash.
    pub fn counter(&self) -> &Counter {
        &self.counter
    }

    /// Give up ownership of the position.
    pub fn into_parts(self) -> (State, Counter) {
        (self.state, self.counter)
    }
}

impl fmt::Debug for HashChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HashChain")
            .field("state", &self.state)
            .field("counter", &self.counter)
            .finish()
    }
}
