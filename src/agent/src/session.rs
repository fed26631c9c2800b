use common::{
    model::{
        game::{Move, RoundRecord},
        id::Id,
    },
    GameError, Result,
};
use tracing::{debug, info};

use crate::{
    history::{MatchHistory, Stats},
    random::RandomSource,
    strategy::{AdaptiveStrategy, Percent, Strategy},
};

/// State of one match: the opponent, its randomness, and everything played so far.
/// Owned by whoever drives the game and lent to each round.
pub struct MatchSession {
    id: Id,
    strategy: Box<dyn Strategy>,
    randomness: Percent,
    history: MatchHistory,
    rng: Box<dyn RandomSource>,
}

impl MatchSession {
    pub fn new(randomness: Percent, rng: Box<dyn RandomSource>) -> Self {
        Self::with_strategy(Box::new(AdaptiveStrategy), randomness, rng)
    }

    pub fn with_strategy(
        strategy: Box<dyn Strategy>,
        randomness: Percent,
        rng: Box<dyn RandomSource>,
    ) -> Self {
        let session = MatchSession {
            id: Id::new(),
            strategy,
            randomness,
            history: MatchHistory::new(),
            rng,
        };
        info!(session = %session.id, randomness = randomness.value(), "Match started");
        session
    }

    /// Plays one round against the opponent and records it.
    /// Rejected input leaves the history untouched.
    pub fn play_round<M>(&mut self, human_move: M) -> Result<RoundRecord>
    where
        M: TryInto<Move>,
        GameError: From<M::Error>,
    {
        let human_move: Move = human_move.try_into()?;
        let computer_move =
            self.strategy
                .make_move(&self.history, self.randomness, self.rng.as_mut());
        let record = RoundRecord::new(human_move, computer_move);
        self.history.append(record);
        debug!(
            session = %self.id,
            round = self.history.len(),
            human = %human_move,
            computer = %computer_move,
            outcome = ?record.outcome(),
            "Round played"
        );
        Ok(record)
    }

    pub fn id(&self) -> Id {
        self.id
    }

    pub fn randomness(&self) -> Percent {
        self.randomness
    }

    pub fn history(&self) -> &MatchHistory {
        &self.history
    }

    pub fn stats(&self) -> Stats {
        self.history.stats()
    }
}

#[cfg(test)]
mod tests {
    use common::model::game::{beats, Outcome};

    use super::*;
    use crate::random::{RngSource, ScriptedSource};

    struct OnlyRock {}
    impl Strategy for OnlyRock {
        fn make_move(&self, _: &MatchHistory, _: Percent, _: &mut dyn RandomSource) -> Move {
            Move::Rock
        }
    }

    fn scripted(moves: Vec<Move>) -> MatchSession {
        MatchSession::new(Percent::ZERO, Box::new(ScriptedSource::moves(moves)))
    }

    #[test]
    fn counts_agree_after_every_round() {
        let mut session = MatchSession::new(Percent::default(), Box::new(RngSource::seeded(11)));
        assert_eq!(session.history().len(), 0);
        assert_eq!(session.stats().total(), 0);
        for n in 1..=50usize {
            session.play_round(Move::ALL[n % 3]).unwrap();
            let stats = session.stats();
            assert_eq!(session.history().len(), n);
            assert_eq!(stats.total() as usize, n);
            assert_eq!(stats, session.history().recount());
        }
    }

    #[test]
    fn invalid_move_does_not_touch_history() {
        let mut session = scripted(vec![Move::Rock]);
        session.play_round("paper").unwrap();
        let before = session.stats();

        assert_eq!(
            session.play_round("spock"),
            Err(GameError::InvalidMove("spock".to_owned()))
        );
        assert_eq!(session.play_round(7u8), Err(GameError::InvalidMove("7".to_owned())));
        assert_eq!(session.history().len(), 1);
        assert_eq!(session.stats(), before);
    }

    #[test]
    fn custom_strategy_is_used() {
        let mut session = MatchSession::with_strategy(
            Box::new(OnlyRock {}),
            Percent::ZERO,
            Box::new(ScriptedSource::default()),
        );
        for _ in 0..3 {
            let record = session.play_round(Move::Paper).unwrap();
            assert_eq!(record.computer_move(), Move::Rock);
        }
        assert_eq!(session.stats().wins, 3);
    }

    #[test]
    fn two_round_match() {
        let mut session = scripted(vec![Move::Rock]);

        let first = session.play_round(Move::Paper).unwrap();
        assert_eq!(first.computer_move(), Move::Rock);
        assert_eq!(first.outcome(), Outcome::HumanWin);
        assert_eq!(session.history().len(), 1);
        assert_eq!(session.stats().wins, 1);

        // Human won with paper, so the opponent expects paper again.
        let second = session.play_round(Move::Rock).unwrap();
        assert_eq!(second.computer_move(), beats(Move::Paper));
        assert_eq!(second.outcome(), Outcome::HumanWin);
        assert_eq!(session.stats().wins, 2);
        assert_eq!(session.history().last(), Some(&second));
    }
}
