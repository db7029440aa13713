//! Identifier generation for scene elements.
//!
//! Element construction takes the generator as an explicit capability so
//! tests can supply deterministic ids while the editor session uses random
//! ones.

/// Source of unique element identifiers within a session.
pub trait IdGen {
    /// Produce the next identifier. Must never repeat within one session.
    fn next_id(&mut self) -> String;
}

/// Production generator: random uuid4-shaped identifiers.
#[derive(Clone, Copy, Debug, Default)]
pub struct RandomIdGen;

impl IdGen for RandomIdGen {
    fn next_id(&mut self) -> String {
        let mut bytes = rand::random::<u128>().to_be_bytes();
        // uuid v4 version and variant nibbles
        bytes[6] = (bytes[6] & 0x0f) | 0x40;
        bytes[8] = (bytes[8] & 0x3f) | 0x80;
        let h: Vec<String> = bytes.iter().map(|b| format!("{b:02x}")).collect();
        format!(
            "{}-{}-{}-{}-{}",
            h[0..4].concat(),
            h[4..6].concat(),
            h[6..8].concat(),
            h[8..10].concat(),
            h[10..16].concat(),
        )
    }
}

/// Deterministic generator for tests: `prefix-0`, `prefix-1`, ...
#[derive(Clone, Debug)]
pub struct SequentialIdGen {
    prefix: String,
    counter: u64,
}

impl SequentialIdGen {
    /// Build a generator with the given id prefix.
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            counter: 0,
        }
    }
}

impl IdGen for SequentialIdGen {
    fn next_id(&mut self) -> String {
        let id = format!("{}-{}", self.prefix, self.counter);
        self.counter += 1;
        id
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/ident.rs"]
mod tests;
