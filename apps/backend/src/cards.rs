//! Card/target source contract and a deterministic in-memory deck.
//!
//! The engine never interprets a token; it only needs presence/absence of a
//! next card and the decrementing remaining count.

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Opaque identifier for the current round's target, supplied by the source.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundToken(pub String);

/// Source of round targets.
///
/// `remaining()` must decrease by exactly one per successful `draw_next()`
/// and never increase.
pub trait CardSource: Send {
    /// Draw the next target, or `None` when the source is exhausted.
    fn draw_next(&mut self) -> Option<RoundToken>;
    fn remaining(&self) -> u32;
    fn total(&self) -> u32;
}

/// In-memory token deck with deterministic seeded ordering.
pub struct TokenDeck {
    tokens: Vec<RoundToken>,
    drawn: usize,
}

impl TokenDeck {
    pub fn new(tokens: Vec<RoundToken>) -> Self {
        Self { tokens, drawn: 0 }
    }

    /// Build a deck of `count` generated tokens, shuffled deterministically.
    ///
    /// Same seed, same order. All randomness for a game flows from the seed
    /// supplied at creation.
    pub fn seeded(count: u32, seed: u64) -> Self {
        let mut tokens: Vec<RoundToken> = (0..count)
            .map(|n| RoundToken(format!("target-{n:02}")))
            .collect();
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        tokens.shuffle(&mut rng);
        Self::new(tokens)
    }
}

impl CardSource for TokenDeck {
    fn draw_next(&mut self) -> Option<RoundToken> {
        let token = self.tokens.get(self.drawn).cloned()?;
        self.drawn += 1;
        Some(token)
    }

    fn remaining(&self) -> u32 {
        (self.tokens.len() - self.drawn) as u32
    }

    fn total(&self) -> u32 {
        self.tokens.len() as u32
    }
}
