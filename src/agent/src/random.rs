use common::model::game::Move;
use rand::{rngs::StdRng, seq::IndexedRandom, Rng, SeedableRng};

/// Randomness consumed by the opponent.
pub trait RandomSource {
    /// Uniform pick over the three moves.
    fn any_move(&mut self) -> Move;

    /// Uniform integer in `1..=100`.
    fn roll_percent(&mut self) -> u8;
}

/// Adapts any `rand` generator.
pub struct RngSource<R> {
    rng: R,
}

impl<R: Rng> RngSource<R> {
    pub fn new(rng: R) -> Self {
        RngSource { rng }
    }
}

impl RngSource<StdRng> {
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_os_rng())
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn any_move(&mut self) -> Move {
        *Move::ALL
            .choose(&mut self.rng)
            .unwrap_or(&Move::Rock)
    }

    fn roll_percent(&mut self) -> u8 {
        self.rng.random_range(1..=100)
    }
}

/// Replays fixed sequences of draws, wrapping around when exhausted.
/// An empty move script yields `Rock`; an empty roll script yields 100.
#[derive(Debug, Clone, Default)]
pub struct ScriptedSource {
    moves: Vec<Move>,
    rolls: Vec<u8>,
    next_move: usize,
    next_roll: usize,
}

impl ScriptedSource {
    pub fn new(moves: Vec<Move>, rolls: Vec<u8>) -> Self {
        ScriptedSource {
            moves,
            rolls,
            next_move: 0,
            next_roll: 0,
        }
    }

    pub fn moves(moves: Vec<Move>) -> Self {
        Self::new(moves, Vec::new())
    }

    /// How many moves have been drawn so far.
    pub fn moves_drawn(&self) -> usize {
        self.next_move
    }
}

impl RandomSource for ScriptedSource {
    fn any_move(&mut self) -> Move {
        let drawn = match self.moves.len() {
            0 => Move::Rock,
            n => self.moves[self.next_move % n],
        };
        self.next_move += 1;
        drawn
    }

    fn roll_percent(&mut self) -> u8 {
        let drawn = match self.rolls.len() {
            0 => 100,
            n => self.rolls[self.next_roll % n].clamp(1, 100),
        };
        self.next_roll += 1;
        drawn
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_sources_agree() {
        let mut a = RngSource::seeded(7);
        let mut b = RngSource::seeded(7);
        for _ in 0..32 {
            assert_eq!(a.any_move(), b.any_move());
            assert_eq!(a.roll_percent(), b.roll_percent());
        }
    }

    #[test]
    fn rolls_stay_in_range() {
        let mut source = RngSource::seeded(99);
        for _ in 0..1000 {
            let roll = source.roll_percent();
            assert!((1..=100).contains(&roll), "roll {roll}");
        }
    }

    #[test]
    fn scripted_source_wraps() {
        let mut source = ScriptedSource::new(vec![Move::Paper, Move::Scissors], vec![3]);
        assert_eq!(source.any_move(), Move::Paper);
        assert_eq!(source.any_move(), Move::Scissors);
        assert_eq!(source.any_move(), Move::Paper);
        assert_eq!(source.moves_drawn(), 3);
        assert_eq!(source.roll_percent(), 3);
        assert_eq!(source.roll_percent(), 3);
    }

    #[test]
    fn empty_script_has_fixed_fallbacks() {
        let mut source = ScriptedSource::default();
        assert_eq!(source.any_move(), Move::Rock);
        assert_eq!(source.roll_percent(), 100);
    }
}
