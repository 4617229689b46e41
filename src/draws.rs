//! Random sources for map construction
//!
//! The builder asks for two things: a terrain draw in `0..DRAW_RANGE` and a
//! uniform pick among candidate parents. Tests replay fixed sequences.

use rand::Rng;

use crate::transitions::DRAW_RANGE;

/// Source of the random choices made while building a map.
pub trait DrawSource {
    /// Draw a value in `0..DRAW_RANGE`.
    fn terrain_draw(&mut self) -> u8;

    /// Pick an index in `0..count`. `count` is never zero.
    fn pick(&mut self, count: usize) -> usize;
}

/// Draws taken from any `rand` generator.
pub struct RandomDraws<R> {
    rng: R,
}

impl<R: Rng> RandomDraws<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> DrawSource for RandomDraws<R> {
    fn terrain_draw(&mut self) -> u8 {
        self.rng.gen_range(0..DRAW_RANGE)
    }

    fn pick(&mut self, count: usize) -> usize {
        self.rng.gen_range(0..count)
    }
}

/// Replays recorded draws and picks in order.
///
/// Each sequence wraps around when exhausted; an empty sequence yields 0.
/// Values are reduced into range.
#[derive(Clone, Debug, Default)]
pub struct ScriptedDraws {
    draws: Vec<u8>,
    picks: Vec<usize>,
    next_draw: usize,
    next_pick: usize,
}

impl ScriptedDraws {
    pub fn new(draws: Vec<u8>, picks: Vec<usize>) -> Self {
        Self {
            draws,
            picks,
            next_draw: 0,
            next_pick: 0,
        }
    }

    /// Terrain draws only; every pick takes the first candidate.
    pub fn from_draws(draws: Vec<u8>) -> Self {
        Self::new(draws, Vec::new())
    }

    pub fn draws_consumed(&self) -> usize {
        self.next_draw
    }

    pub fn picks_consumed(&self) -> usize {
        self.next_pick
    }
}

impl DrawSource for ScriptedDraws {
    fn terrain_draw(&mut self) -> u8 {
        if self.draws.is_empty() {
            return 0;
        }
        let value = self.draws[self.next_draw % self.draws.len()];
        self.next_draw += 1;
        value % DRAW_RANGE
    }

    fn pick(&mut self, count: usize) -> usize {
        if self.picks.is_empty() {
            return 0;
        }
        let value = self.picks[self.next_pick % self.picks.len()];
        self.next_pick += 1;
        value % count
    }
}
