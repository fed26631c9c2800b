use std::io;

use agent::MatchSession;
use common::model::game::{Move, Outcome, RoundRecord};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::{
    error::Result,
    input::InputBatch,
    layout::{HitRegion, Layout},
    render::{RenderSink, Tone},
};

/// The screen currently in charge of input and drawing.
#[derive(Debug, Clone, PartialEq)]
pub enum Scene {
    Start,
    Selection,
    Resolve { record: RoundRecord },
    Terminated,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneKind {
    Start,
    Selection,
    Resolve,
    Terminated,
}

/// What a scene understood from one input batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneEvent {
    Begin,
    Chose(Move),
    NewRound,
    Quit,
}

impl Scene {
    pub fn kind(&self) -> SceneKind {
        match self {
            Scene::Start => SceneKind::Start,
            Scene::Selection => SceneKind::Selection,
            Scene::Resolve { .. } => SceneKind::Resolve,
            Scene::Terminated => SceneKind::Terminated,
        }
    }

    pub fn is_terminated(&self) -> bool {
        matches!(self, Scene::Terminated)
    }

    /// Interprets one batch against the regions of this scene.
    pub fn input(&self, batch: &InputBatch, layout: &Layout) -> Option<SceneEvent> {
        match self {
            Scene::Start => {
                let active = !batch.keys.is_empty() || !batch.releases.is_empty();
                active.then_some(SceneEvent::Begin)
            }
            Scene::Selection => {
                let choice = batch.releases.iter().find_map(|point| {
                    layout
                        .moves
                        .iter()
                        .find(|(_, region)| region.contains_point(*point))
                        .map(|(choice, _)| *choice)
                });
                if choice.is_none() && !batch.releases.is_empty() {
                    debug!(clicks = batch.releases.len(), "Clicks missed every move");
                }
                choice.map(SceneEvent::Chose)
            }
            // Quit wins when both buttons are hit in the same batch.
            Scene::Resolve { .. } => {
                let hit = |region: &dyn HitRegion| {
                    batch.releases.iter().any(|p| region.contains_point(*p))
                };
                if hit(&layout.quit) {
                    Some(SceneEvent::Quit)
                } else if hit(&layout.new_round) {
                    Some(SceneEvent::NewRound)
                } else {
                    None
                }
            }
            Scene::Terminated => None,
        }
    }

    /// Applies an event and returns the scene that is active afterwards.
    pub fn update(self, event: Option<SceneEvent>, session: &mut MatchSession) -> Result<Scene> {
        let next = match (self, event) {
            (Scene::Start, Some(SceneEvent::Begin)) => Scene::Selection,
            (Scene::Selection, Some(SceneEvent::Chose(choice))) => {
                let record = session.play_round(choice)?;
                Scene::Resolve { record }
            }
            (Scene::Resolve { .. }, Some(SceneEvent::NewRound)) => Scene::Selection,
            (Scene::Resolve { .. }, Some(SceneEvent::Quit)) => Scene::Terminated,
            (scene, None) => return Ok(scene),
            (scene, Some(event)) => {
                debug!(scene = ?scene.kind(), ?event, "Event does not apply to scene");
                return Ok(scene);
            }
        };
        info!(scene = ?next.kind(), round = session.history().len(), "Scene changed");
        Ok(next)
    }

    pub fn render(
        &self,
        session: &MatchSession,
        layout: &Layout,
        sink: &mut dyn RenderSink,
    ) -> io::Result<()> {
        sink.clear()?;
        match self {
            Scene::Start => {
                sink.text(layout.offset(0.0, -100.0), "ROCK, PAPER & SCISSORS!", Tone::Plain)?;
                sink.text(layout.offset(0.0, 100.0), "Press any key to start", Tone::Accent)?;
            }
            Scene::Selection => {
                for (choice, region) in &layout.moves {
                    sink.region(*region, choice.name())?;
                }
                render_scoreboard(session, layout, sink)?;
            }
            Scene::Resolve { record } => {
                render_scoreboard(session, layout, sink)?;
                render_result(record, layout, sink)?;
                sink.region(layout.new_round, "New round")?;
                sink.region(layout.quit, "Quit")?;
            }
            Scene::Terminated => {}
        }
        sink.present()
    }
}

fn render_scoreboard(
    session: &MatchSession,
    layout: &Layout,
    sink: &mut dyn RenderSink,
) -> io::Result<()> {
    let stats = session.stats();
    // Top-right corner, one line per counter.
    let line = |row: f32| layout.offset(250.0, -220.0 + row * 20.0);
    sink.text(line(0.0), &format!("Wins: {}", stats.wins), Tone::Good)?;
    sink.text(line(1.0), &format!("Ties: {}", stats.ties), Tone::Plain)?;
    sink.text(line(2.0), &format!("Losses: {}", stats.losses), Tone::Bad)
}

fn render_result(record: &RoundRecord, layout: &Layout, sink: &mut dyn RenderSink) -> io::Result<()> {
    sink.text(layout.offset(-150.0, -50.0), "You chose", Tone::Plain)?;
    sink.text(layout.offset(-150.0, 0.0), record.human_move().name(), Tone::Accent)?;
    sink.text(layout.offset(150.0, -50.0), "Computer chose", Tone::Plain)?;
    sink.text(layout.offset(150.0, 0.0), record.computer_move().name(), Tone::Accent)?;
    let (verdict, tone) = match record.outcome() {
        Outcome::HumanWin => ("You win!", Tone::Good),
        Outcome::Tie => ("Tie!", Tone::Plain),
        Outcome::ComputerWin => ("You lose!", Tone::Bad),
    };
    sink.text(layout.offset(0.0, 60.0), verdict, tone)
}
