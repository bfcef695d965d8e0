use std::iter::FusedIterator;

use rand::Rng;
use rand::rngs::ThreadRng;
use serde::{Deserialize, Serialize};

use crate::config::HueConfig;
use crate::hash::color_index;

pub const DEFAULT_MAX_ATTEMPTS: u32 = 10_000;
pub const DEFAULT_FLIP_PROBABILITY: f64 = 0.5;

/// A case-variation of the input and the color index it hashes to.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariationResult {
    pub variation: String,
    pub color: usize,
}

/// Searches for one case-variation of `input` per palette color, using the
/// thread-local RNG.
pub fn search<'a>(input: &'a str, config: &'a HueConfig) -> Variations<'a, ThreadRng> {
    search_with_rng(input, config, rand::rng())
}

/// Like [`search`], drawing case flips from `rng`.
pub fn search_with_rng<'a, R: Rng>(
    input: &'a str,
    config: &'a HueConfig,
    rng: R,
) -> Variations<'a, R> {
    Variations {
        input,
        config,
        rng,
        seen: vec![false; config.color_count()],
        found: 0,
        attempts: 0,
        state: State::Fresh,
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum State {
    Fresh,
    Searching,
    Done,
}

/// Lazy, single-pass sequence of [`VariationResult`]s.
///
/// The first item is always the input itself. Every later item is a random
/// case-variation whose color has not been yielded yet. The sequence ends
/// once every color was found or the attempt ceiling is spent.
#[derive(Debug)]
pub struct Variations<'a, R> {
    input: &'a str,
    config: &'a HueConfig,
    rng: R,
    seen: Vec<bool>,
    found: usize,
    attempts: u32,
    state: State,
}

impl<R: Rng> Variations<'_, R> {
    /// Randomized variations generated so far. Never exceeds the configured
    /// ceiling.
    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    /// Distinct colors yielded so far.
    pub fn found(&self) -> usize {
        self.found
    }

    fn mark(&mut self, color: usize) -> bool {
        let fresh = !self.seen[color];
        if fresh {
            self.seen[color] = true;
            self.found += 1;
        }
        fresh
    }

    fn candidate(&mut self) -> String {
        let p = self.config.flip_probability;
        let input = self.input;
        input
            .chars()
            .map(|c| {
                if self.rng.random::<f64>() < p {
                    flip_case(c)
                } else {
                    c
                }
            })
            .collect()
    }

    fn finish(&mut self) {
        self.state = State::Done;
        tracing::debug!(
            found = self.found,
            colors = self.config.color_count(),
            attempts = self.attempts,
            "variation search finished"
        );
    }
}

impl<R: Rng> Iterator for Variations<'_, R> {
    type Item = VariationResult;

    fn next(&mut self) -> Option<Self::Item> {
        match self.state {
            State::Done => None,
            State::Fresh => {
                let color = color_index(self.input, self.config);
                self.mark(color);
                self.state = State::Searching;
                if !has_flippable_case(self.input) {
                    tracing::debug!("no casing to vary, skipping search");
                    self.finish();
                } else if self.found == self.config.color_count() {
                    self.finish();
                }
                Some(VariationResult {
                    variation: self.input.to_owned(),
                    color,
                })
            }
            State::Searching => {
                while self.attempts < self.config.max_attempts {
                    self.attempts += 1;
                    let variation = self.candidate();
                    let color = color_index(&variation, self.config);
                    if self.mark(color) {
                        tracing::trace!(color, attempts = self.attempts, "found new color");
                        if self.found == self.config.color_count() {
                            self.finish();
                        }
                        return Some(VariationResult { variation, color });
                    }
                }
                self.finish();
                None
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.state {
            State::Fresh => (1, Some(self.config.color_count())),
            State::Searching => (0, Some(self.config.color_count() - self.found)),
            State::Done => (0, Some(0)),
        }
    }
}

impl<R: Rng> FusedIterator for Variations<'_, R> {}

/// Swaps the case of `c`. Characters without a single-character counterpart
/// in the other case are returned unchanged.
fn flip_case(c: char) -> char {
    let flipped = if c.is_uppercase() {
        single(c.to_lowercase())
    } else {
        single(c.to_uppercase())
    };
    flipped.unwrap_or(c)
}

fn single(mut mapping: impl Iterator<Item = char>) -> Option<char> {
    match (mapping.next(), mapping.next()) {
        (Some(f), None) => Some(f),
        _ => None,
    }
}

fn has_flippable_case(input: &str) -> bool {
    input.chars().any(|c| flip_case(c) != c)
}
