//! Scramble-to-reveal headline effect.
//!
//! Every tick redraws the unresolved characters from the alphabet and lets the
//! resolution front advance one eighth of a character. Characters resolve
//! strictly left to right and never revert.

use rand::Rng;

pub const DEFAULT_ALPHABET: &str =
    "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789!@#$%^&*()";
pub const TICKS_PER_CHAR: usize = 8;
pub const DEFAULT_TICK_MS: u64 = 40;

#[derive(Debug, Clone)]
pub struct DecodeText {
    target: Vec<char>,
    alphabet: Vec<char>,
    iteration: usize,
    display: String,
    decoding: bool,
}

impl DecodeText {
    pub fn new(target: &str, alphabet: &str) -> Self {
        let target: Vec<char> = target.chars().collect();
        let mut alphabet: Vec<char> = alphabet.chars().collect();
        if alphabet.is_empty() {
            alphabet = DEFAULT_ALPHABET.chars().collect();
        }
        let decoding = !target.is_empty();
        let display = if decoding {
            " ".repeat(target.len())
        } else {
            String::new()
        };
        DecodeText {
            target,
            alphabet,
            iteration: 0,
            display,
            decoding,
        }
    }

    /// Already resolved; used when motion is reduced.
    pub fn finished(target: &str) -> Self {
        let mut decode = Self::new(target, DEFAULT_ALPHABET);
        decode.finish();
        decode
    }

    pub fn display_text(&self) -> &str {
        &self.display
    }

    pub fn is_decoding(&self) -> bool {
        self.decoding
    }

    pub fn iteration(&self) -> usize {
        self.iteration
    }

    pub fn max_iterations(&self) -> usize {
        self.target.len() * TICKS_PER_CHAR
    }

    /// Number of leading characters currently shown in their final form.
    pub fn resolved_len(&self) -> usize {
        if !self.decoding {
            return self.target.len();
        }
        self.iteration
            .saturating_sub(1)
            .div_ceil(TICKS_PER_CHAR)
            .min(self.target.len())
    }

    /// Advance one tick; returns whether decoding is still running.
    pub fn tick<R: Rng>(&mut self, rng: &mut R) -> bool {
        if !self.decoding {
            return false;
        }
        let iteration = self.iteration;
        self.display = self
            .target
            .iter()
            .enumerate()
            .map(|(index, ch)| {
                if index * TICKS_PER_CHAR < iteration {
                    *ch
                } else {
                    self.alphabet[rng.gen_range(0..self.alphabet.len())]
                }
            })
            .collect();

        self.iteration += 1;
        if self.iteration >= self.max_iterations() {
            self.finish();
        }
        self.decoding
    }

    pub fn finish(&mut self) {
        self.display = self.target.iter().collect();
        self.decoding = false;
        self.iteration = self.iteration.max(self.max_iterations());
    }
}
