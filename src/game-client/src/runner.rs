use std::{future::Future, time::Duration};

use agent::MatchSession;
use tokio::time::{self, MissedTickBehavior};
use tracing::{debug, info};

use crate::{
    error::Result,
    input::{InputBatch, InputSource},
    layout::Layout,
    render::RenderSink,
    scene::{Scene, SceneKind},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// The player quit from the result screen.
    Terminated,
    /// The input source reported a quit request.
    QuitRequested,
    /// The shutdown future completed.
    Shutdown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub ticks: u64,
    pub reason: StopReason,
    pub last_scene: SceneKind,
}

/// One tick's worth of scene work: interpret, transition, draw.
pub fn advance(
    scene: Scene,
    batch: &InputBatch,
    layout: &Layout,
    session: &mut MatchSession,
    sink: &mut dyn RenderSink,
) -> Result<Scene> {
    let event = scene.input(batch, layout);
    let next = scene.update(event, session)?;
    if !next.is_terminated() {
        next.render(session, layout, sink)?;
    }
    Ok(next)
}

pub struct GameLoop<I, R> {
    input: I,
    sink: R,
    layout: Layout,
    tick: Duration,
}

impl<I, R> GameLoop<I, R>
where
    I: InputSource,
    R: RenderSink,
{
    pub fn new(input: I, sink: R, layout: Layout, tick: Duration) -> Self {
        GameLoop {
            input,
            sink,
            layout,
            tick,
        }
    }

    /// Runs from the start screen until the player quits or `shutdown` resolves.
    pub async fn run<F>(&mut self, session: &mut MatchSession, shutdown: F) -> Result<RunSummary>
    where
        F: Future<Output = ()>,
    {
        tokio::pin!(shutdown);
        let mut interval = time::interval(self.tick);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

        let mut scene = Scene::Start;
        let mut ticks = 0;
        info!(session = %session.id(), "Game loop started");
        let reason = loop {
            tokio::select! {
                biased;
                _ = &mut shutdown => break StopReason::Shutdown,
                _ = interval.tick() => {}
            }

            let batch = self.input.poll()?;
            if batch.quit {
                break StopReason::QuitRequested;
            }
            ticks += 1;
            scene = advance(scene, &batch, &self.layout, session, &mut self.sink)?;
            if scene.is_terminated() {
                break StopReason::Terminated;
            }
        };

        let summary = RunSummary {
            ticks,
            reason,
            last_scene: scene.kind(),
        };
        debug!(?summary, "Game loop stopped");
        Ok(summary)
    }

    pub fn input(&self) -> &I {
        &self.input
    }

    pub fn sink(&self) -> &R {
        &self.sink
    }
}

#[cfg(test)]
mod tests {
    use agent::{Percent, ScriptedSource};
    use common::model::game::Move;

    use super::*;
    use crate::{input::ScriptedInput, render::RecordingSink};

    fn session() -> MatchSession {
        MatchSession::new(Percent::ZERO, Box::new(ScriptedSource::moves(vec![Move::Rock])))
    }

    fn game(batches: Vec<InputBatch>) -> GameLoop<ScriptedInput, RecordingSink> {
        GameLoop::new(
            ScriptedInput::new(batches),
            RecordingSink::new(),
            Layout::default(),
            Duration::from_millis(1),
        )
    }

    #[test]
    fn advance_skips_drawing_a_finished_game() {
        let layout = Layout::default();
        let mut session = session();
        let mut sink = RecordingSink::new();
        let scene = Scene::Resolve {
            record: session.play_round(Move::Rock).unwrap(),
        };
        let next = advance(
            scene,
            &InputBatch::click(layout.quit.center()),
            &layout,
            &mut session,
            &mut sink,
        )
        .unwrap();
        assert!(next.is_terminated());
        assert!(sink.frames().is_empty());
    }

    #[tokio::test]
    async fn quit_request_stops_before_the_batch_is_used() {
        let layout = Layout::default();
        let mut session = session();
        let poisoned = InputBatch {
            releases: vec![layout.region(Move::Paper).center()],
            quit: true,
            ..Default::default()
        };
        let mut game = game(vec![InputBatch::key(crate::input::Key::Enter), poisoned]);

        let summary = game.run(&mut session, std::future::pending()).await.unwrap();
        assert_eq!(summary.reason, StopReason::QuitRequested);
        assert_eq!(summary.ticks, 1);
        assert_eq!(summary.last_scene, SceneKind::Selection);
        assert!(session.history().is_empty());
    }

    #[tokio::test]
    async fn shutdown_wins_over_pending_ticks() {
        let mut session = session();
        let mut game = game(vec![InputBatch::default(); 5]);
        let summary = game.run(&mut session, async {}).await.unwrap();
        assert_eq!(summary.reason, StopReason::Shutdown);
        assert_eq!(summary.ticks, 0);
        assert_eq!(game.input().polled(), 0);
    }

    #[tokio::test]
    async fn full_round_then_quit() {
        let layout = Layout::default();
        let mut session = session();
        let mut game = game(vec![
            InputBatch::default(),
            InputBatch::key(crate::input::Key::Space),
            InputBatch::click(layout.region(Move::Paper).center()),
            InputBatch::click(layout.quit.center()),
            InputBatch::key(crate::input::Key::Enter),
        ]);

        let summary = game.run(&mut session, std::future::pending()).await.unwrap();
        assert_eq!(summary.reason, StopReason::Terminated);
        assert_eq!(summary.ticks, 4);
        assert_eq!(summary.last_scene, SceneKind::Terminated);
        assert_eq!(game.input().remaining(), 1);
        assert_eq!(session.stats().wins, 1);
        assert!(game.sink().last_frame_contains("You win!"));
    }
}
