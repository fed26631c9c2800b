use common::{model::game::Move, GameError};
use itertools::Itertools;
use serde::{Deserialize, Serialize};

// Reference surface the offsets below are expressed in.
const REFERENCE_SIZE: (f32, f32) = (640.0, 480.0);
const MOVE_OFFSETS: [f32; 3] = [-150.0, 0.0, 150.0];
const MOVE_SIZE: (f32, f32) = (90.0, 90.0);
const BUTTON_SIZE: (f32, f32) = (150.0, 50.0);
const NEW_ROUND_OFFSET: (f32, f32) = (-120.0, 150.0);
const QUIT_OFFSET: (f32, f32) = (120.0, 150.0);

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Point {
    pub x: u16,
    pub y: u16,
}

impl Point {
    pub fn new(x: u16, y: u16) -> Self {
        Point { x, y }
    }
}

pub trait HitRegion {
    fn contains_point(&self, point: Point) -> bool;
}

/// Axis-aligned rectangle, half-open on the right and bottom edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl Rect {
    fn centered(cx: f32, cy: f32, width: f32, height: f32) -> Self {
        let width = width.round().max(1.0);
        let height = height.round().max(1.0);
        Rect {
            x: (cx - width / 2.0).round().max(0.0) as u16,
            y: (cy - height / 2.0).round().max(0.0) as u16,
            width: width as u16,
            height: height as u16,
        }
    }

    pub fn right(&self) -> u16 {
        self.x.saturating_add(self.width)
    }

    pub fn bottom(&self) -> u16 {
        self.y.saturating_add(self.height)
    }

    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2, self.y + self.height / 2)
    }

    pub fn intersects(&self, other: &Rect) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }
}

impl HitRegion for Rect {
    fn contains_point(&self, point: Point) -> bool {
        (self.x..self.right()).contains(&point.x) && (self.y..self.bottom()).contains(&point.y)
    }
}

/// Where every clickable element sits on a surface of the given size.
#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    pub width: u16,
    pub height: u16,
    pub moves: [(Move, Rect); 3],
    pub new_round: Rect,
    pub quit: Rect,
}

impl Layout {
    /// Scales the reference positions onto a `width` x `height` surface.
    /// Fails if the surface is too small to keep the regions apart.
    pub fn for_surface(width: u16, height: u16) -> Result<Self, GameError> {
        let sx = width as f32 / REFERENCE_SIZE.0;
        let sy = height as f32 / REFERENCE_SIZE.1;
        let (cx, cy) = (width as f32 / 2.0, height as f32 / 2.0);
        let at = |(dx, dy): (f32, f32), (w, h): (f32, f32)| {
            Rect::centered(cx + dx * sx, cy + dy * sy, w * sx, h * sy)
        };

        let moves = [0, 1, 2].map(|i| (Move::ALL[i], at((MOVE_OFFSETS[i], 0.0), MOVE_SIZE)));
        let layout = Layout {
            width,
            height,
            moves,
            new_round: at(NEW_ROUND_OFFSET, BUTTON_SIZE),
            quit: at(QUIT_OFFSET, BUTTON_SIZE),
        };
        layout.validate()?;
        Ok(layout)
    }

    /// Offset from the centre, scaled like the regions are.
    pub fn offset(&self, dx: f32, dy: f32) -> Point {
        let sx = self.width as f32 / REFERENCE_SIZE.0;
        let sy = self.height as f32 / REFERENCE_SIZE.1;
        let x = (self.width as f32 / 2.0 + dx * sx).round().max(0.0);
        let y = (self.height as f32 / 2.0 + dy * sy).round().max(0.0);
        Point::new(x as u16, y as u16)
    }

    pub fn region(&self, choice: Move) -> Rect {
        self.moves
            .iter()
            .find(|(m, _)| *m == choice)
            .map(|(_, rect)| *rect)
            .unwrap_or(self.moves[0].1)
    }

    fn named(&self) -> Vec<(String, Rect)> {
        self.moves
            .iter()
            .map(|(m, rect)| (m.to_string(), *rect))
            .chain([
                ("new round".to_owned(), self.new_round),
                ("quit".to_owned(), self.quit),
            ])
            .collect()
    }

    fn validate(&self) -> Result<(), GameError> {
        let named = self.named();
        match named
            .iter()
            .tuple_combinations()
            .find(|((_, a), (_, b))| a.intersects(b))
        {
            Some(((a, _), (b, _))) => Err(GameError::OverlappingRegions(a.clone(), b.clone())),
            None => Ok(()),
        }
    }
}

impl Default for Layout {
    fn default() -> Self {
        let (width, height) = REFERENCE_SIZE;
        Layout::for_surface(width as u16, height as u16)
            .expect("reference layout has disjoint regions")
    }
}
