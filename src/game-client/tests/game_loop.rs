use std::time::Duration;

use agent::{MatchSession, Percent, RngSource};
use common::model::game::Move;
use game_client::{
    input::{InputBatch, Key, ScriptedInput},
    layout::Layout,
    render::RecordingSink,
    runner::{GameLoop, StopReason},
    scene::SceneKind,
};

fn long_match(layout: &Layout, rounds: usize) -> Vec<InputBatch> {
    let mut batches = vec![InputBatch::key(Key::Char('s'))];
    for round in 0..rounds {
        let choice = Move::ALL[(round * 7 + round / 3) % 3];
        batches.push(InputBatch::click(layout.region(choice).center()));
        batches.push(InputBatch::default());
        batches.push(InputBatch::click(layout.new_round.center()));
    }
    batches
}

#[tokio::test]
async fn counters_hold_over_a_long_seeded_match() {
    let layout = Layout::default();
    let rounds = 40;
    let mut session = MatchSession::new(
        Percent::try_from(20u32).unwrap(),
        Box::new(RngSource::seeded(2020)),
    );
    let mut game = GameLoop::new(
        ScriptedInput::new(long_match(&layout, rounds)),
        RecordingSink::new(),
        layout,
        Duration::from_millis(1),
    );

    let summary = game
        .run(&mut session, std::future::pending())
        .await
        .unwrap();

    assert_eq!(summary.reason, StopReason::QuitRequested);
    assert_eq!(summary.last_scene, SceneKind::Selection);
    assert_eq!(summary.ticks as usize, 1 + rounds * 3);
    assert_eq!(session.history().len(), rounds);
    assert_eq!(session.stats().total() as usize, rounds);
    assert_eq!(session.stats(), session.history().recount());
    assert_eq!(game.sink().frames().len(), 1 + rounds * 3);
}

#[tokio::test]
async fn same_seed_same_match() {
    let layout = Layout::for_surface(120, 40).unwrap();
    let mut outcomes = Vec::new();
    for _ in 0..2 {
        let mut session = MatchSession::new(Percent::default(), Box::new(RngSource::seeded(7)));
        let mut game = GameLoop::new(
            ScriptedInput::new(long_match(&layout, 12)),
            RecordingSink::new(),
            layout.clone(),
            Duration::from_millis(1),
        );
        game.run(&mut session, std::future::pending()).await.unwrap();
        outcomes.push(session.history().iter().copied().collect::<Vec<_>>());
    }
    assert_eq!(outcomes[0], outcomes[1]);
}
