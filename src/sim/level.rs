//! Level plans and parsing
//!
//! A plan is a block of text where every character is one grid cell:
//!
//! ```text
//! ......................
//! ..#................#..
//! ..#..............=.#..
//! ..#.........o.o....#..
//! ..#.@......#####...#..
//! ..#####............#..
//! ......#++++++++++++#..
//! ......##############..
//! ......................
//! ```
//!
//! A [`Legend`] maps each character either to a background [`Tile`] or to
//! an actor constructor. Parsing is a single scan, left to right and top to
//! bottom, that fills the tile grid and collects the starting actors.

use std::collections::HashMap;
use std::error::Error;
use std::fmt::{self, Display};
use std::sync::LazyLock;

use rand::RngCore;
use serde::{Deserialize, Serialize};

use super::actor::{Actor, ActorFactory, ActorKind, spawn_coin, spawn_lava, spawn_player};
use super::vector::Vector;

/// Static background cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Tile {
    #[default]
    Empty,
    Wall,
    Lava,
}

impl Tile {
    /// Name used for CSS classes
    pub fn as_str(&self) -> &'static str {
        match self {
            Tile::Empty => "empty",
            Tile::Wall => "wall",
            Tile::Lava => "lava",
        }
    }
}

/// Why a plan has no usable grid shape
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlanDefect {
    /// Nothing but whitespace
    Empty,
    /// A row whose length differs from the first row
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LevelError {
    MalformedPlan(PlanDefect),
    UnknownTile { ch: char, x: usize, y: usize },
    InvalidActorVariant { kind: ActorKind, ch: char },
}

impl Display for LevelError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            LevelError::MalformedPlan(PlanDefect::Empty) => write!(f, "Malformed plan: no rows"),
            LevelError::MalformedPlan(PlanDefect::RaggedRow {
                row,
                expected,
                found,
            }) => write!(
                f,
                "Malformed plan: row {} has {} cells, expected {}",
                row, found, expected
            ),
            LevelError::UnknownTile { ch, x, y } => {
                write!(f, "Unknown tile character {:?} at ({}, {})", ch, x, y)
            }
            LevelError::InvalidActorVariant { kind, ch } => {
                write!(f, "Character {:?} does not name a {} variant", ch, kind.as_str())
            }
        }
    }
}

impl Error for LevelError {}

/// What a plan character stands for
#[derive(Clone, Copy)]
pub enum LegendEntry {
    Tile(Tile),
    Actor(ActorFactory),
}

impl fmt::Debug for LegendEntry {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            LegendEntry::Tile(tile) => f.debug_tuple("Tile").field(tile).finish(),
            LegendEntry::Actor(_) => f.write_str("Actor(..)"),
        }
    }
}

/// Character to tile/actor dispatch table
#[derive(Debug, Clone, Default)]
pub struct Legend {
    entries: HashMap<char, LegendEntry>,
}

static STANDARD_LEGEND: LazyLock<Legend> = LazyLock::new(|| {
    Legend::new()
        // Background
        .with_tile('.', Tile::Empty)
        .with_tile('#', Tile::Wall)
        .with_tile('+', Tile::Lava)
        // Actors
        .with_actor('@', spawn_player)
        .with_actor('o', spawn_coin)
        .with_actor('=', spawn_lava)
        .with_actor('|', spawn_lava)
        .with_actor('v', spawn_lava)
});

impl Legend {
    /// Empty legend (every character unknown)
    pub fn new() -> Self {
        Self::default()
    }

    /// The shared built-in legend
    pub fn standard() -> &'static Legend {
        &STANDARD_LEGEND
    }

    pub fn with_tile(mut self, ch: char, tile: Tile) -> Self {
        self.entries.insert(ch, LegendEntry::Tile(tile));
        self
    }

    pub fn with_actor(mut self, ch: char, factory: ActorFactory) -> Self {
        self.entries.insert(ch, LegendEntry::Actor(factory));
        self
    }

    pub fn get(&self, ch: char) -> Option<LegendEntry> {
        self.entries.get(&ch).copied()
    }
}

/// Plan rows with blank lines at either end dropped. Rows in between are
/// kept as written, spaces included.
fn grid_lines(plan: &str) -> Vec<&str> {
    let lines: Vec<&str> = plan.lines().collect();
    let is_blank = |line: &&str| line.trim().is_empty();
    match (
        lines.iter().position(|l| !is_blank(l)),
        lines.iter().rposition(|l| !is_blank(l)),
    ) {
        (Some(first), Some(last)) => lines[first..=last].to_vec(),
        _ => Vec::new(),
    }
}

/// A parsed level: background grid plus starting actors. Read-only once built,
/// and only built by parsing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Level {
    pub width: usize,
    pub height: usize,
    /// `rows[y][x]`; actor cells are `Tile::Empty`
    rows: Vec<Vec<Tile>>,
    /// Actors in scan order
    start_actors: Vec<Actor>,
}

impl Level {
    /// Parse a plan with the standard legend
    pub fn parse<R: RngCore>(plan: &str, rng: &mut R) -> Result<Self, LevelError> {
        Self::parse_with(plan, Legend::standard(), rng)
    }

    /// Parse a plan with a caller-supplied legend. Fails on the first bad
    /// row or character; there is no partial result.
    pub fn parse_with<R: RngCore>(
        plan: &str,
        legend: &Legend,
        rng: &mut R,
    ) -> Result<Self, LevelError> {
        let lines = grid_lines(plan);
        let width = match lines.first() {
            Some(first) => first.chars().count(),
            None => return Err(LevelError::MalformedPlan(PlanDefect::Empty)),
        };
        let height = lines.len();

        let mut rows = Vec::with_capacity(height);
        let mut start_actors = Vec::new();

        for (y, line) in lines.iter().enumerate() {
            let found = line.chars().count();
            if found != width {
                return Err(LevelError::MalformedPlan(PlanDefect::RaggedRow {
                    row: y,
                    expected: width,
                    found,
                }));
            }

            let mut row = Vec::with_capacity(width);
            for (x, ch) in line.chars().enumerate() {
                match legend.get(ch) {
                    Some(LegendEntry::Tile(tile)) => row.push(tile),
                    Some(LegendEntry::Actor(factory)) => {
                        let cell = Vector::new(x as f32, y as f32);
                        start_actors.push(factory(cell, ch, &mut *rng)?);
                        row.push(Tile::Empty);
                    }
                    None => return Err(LevelError::UnknownTile { ch, x, y }),
                }
            }
            rows.push(row);
        }

        log::debug!(
            "Parsed level: {} by {}, {} actors",
            width,
            height,
            start_actors.len()
        );

        Ok(Self {
            width,
            height,
            rows,
            start_actors,
        })
    }

    /// Background tile at a grid cell
    pub fn tile_at(&self, x: usize, y: usize) -> Option<Tile> {
        self.rows.get(y).and_then(|row| row.get(x)).copied()
    }

    pub fn rows(&self) -> &[Vec<Tile>] {
        &self.rows
    }

    pub fn start_actors(&self) -> &[Actor] {
        &self.start_actors
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::levels::SIMPLE_LEVEL_PLAN;
    use crate::sim::actor::{Coin, Lava, Player};
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn rng() -> Pcg32 {
        Pcg32::seed_from_u64(12345)
    }

    #[test]
    fn test_small_plan() {
        let level = Level::parse("@.o\n...", &mut rng()).unwrap();
        assert_eq!(level.width, 3);
        assert_eq!(level.height, 2);
        assert_eq!(level.rows(), &[vec![Tile::Empty; 3], vec![Tile::Empty; 3]]);

        let actors = level.start_actors();
        assert_eq!(actors.len(), 2);
        assert!(matches!(
            &actors[0],
            Actor::Player(Player { pos, .. }) if *pos == Vector::new(0.0, -0.5)
        ));
        match &actors[1] {
            Actor::Coin(coin) => {
                assert!((coin.pos.x - 2.2).abs() < 0.0001);
                assert!((coin.pos.y - 0.1).abs() < 0.0001);
            }
            other => panic!("expected coin, got {:?}", other),
        }
    }

    #[test]
    fn test_simple_level() {
        let level = Level::parse(SIMPLE_LEVEL_PLAN, &mut rng()).unwrap();
        assert_eq!((level.width, level.height), (22, 9));

        assert_eq!(level.tile_at(2, 1), Some(Tile::Wall));
        assert_eq!(level.tile_at(7, 6), Some(Tile::Lava));
        assert_eq!(level.tile_at(0, 0), Some(Tile::Empty));
        assert_eq!(level.tile_at(22, 0), None);

        let kinds: Vec<ActorKind> = level.start_actors().iter().map(Actor::kind).collect();
        assert_eq!(
            kinds,
            vec![ActorKind::Lava, ActorKind::Coin, ActorKind::Coin, ActorKind::Player]
        );
        // Actor cells stay empty in the background
        assert_eq!(level.tile_at(17, 2), Some(Tile::Empty));
        assert_eq!(level.tile_at(4, 4), Some(Tile::Empty));
    }

    #[test]
    fn test_lava_actors_from_plan() {
        let level = Level::parse("=|v", &mut rng()).unwrap();
        let lava: Vec<&Lava> = level
            .start_actors()
            .iter()
            .filter_map(|a| match a {
                Actor::Lava(l) => Some(l),
                _ => None,
            })
            .collect();
        assert_eq!(lava.len(), 3);
        assert_eq!(lava[0].speed, Vector::new(2.0, 0.0));
        assert_eq!(lava[0].reset, None);
        assert_eq!(lava[1].speed, Vector::new(0.0, 2.0));
        assert_eq!(lava[1].reset, None);
        assert_eq!(lava[2].speed, Vector::new(0.0, 3.0));
        assert_eq!(lava[2].reset, Some(Vector::new(2.0, 0.0)));
    }

    #[test]
    fn test_surrounding_blank_lines_trimmed() {
        let level = Level::parse("\n\n..#\n#..\n\n", &mut rng()).unwrap();
        assert_eq!((level.width, level.height), (3, 2));
    }

    #[test]
    fn test_crlf_rows() {
        let level = Level::parse("..\r\n#.", &mut rng()).unwrap();
        assert_eq!((level.width, level.height), (2, 2));
        assert_eq!(level.tile_at(0, 1), Some(Tile::Wall));
    }

    #[test]
    fn test_space_cells_kept_by_custom_legend() {
        let legend = Legend::new()
            .with_tile(' ', Tile::Empty)
            .with_actor('P', spawn_player);

        let level = Level::parse_with(" P", &legend, &mut rng()).unwrap();
        assert_eq!(level.width, 2);
        assert_eq!(level.start_actors()[0].pos(), Vector::new(1.0, -0.5));

        let level = Level::parse_with("P \nP ", &legend, &mut rng()).unwrap();
        assert_eq!((level.width, level.height), (2, 2));
        assert_eq!(level.start_actors().len(), 2);
    }

    #[test]
    fn test_leading_space_is_unknown_tile() {
        let err = Level::parse("  ..\n..", &mut rng()).unwrap_err();
        assert_eq!(err, LevelError::UnknownTile { ch: ' ', x: 0, y: 0 });
    }

    #[test]
    fn test_ragged_row_rejected() {
        let err = Level::parse("...\n..\n...", &mut rng()).unwrap_err();
        assert_eq!(
            err,
            LevelError::MalformedPlan(PlanDefect::RaggedRow {
                row: 1,
                expected: 3,
                found: 2
            })
        );
    }

    #[test]
    fn test_empty_plan_rejected() {
        for plan in ["", "   \n\n  "] {
            assert_eq!(
                Level::parse(plan, &mut rng()),
                Err(LevelError::MalformedPlan(PlanDefect::Empty))
            );
        }
    }

    #[test]
    fn test_unknown_tile_rejected() {
        let err = Level::parse("..\n.?", &mut rng()).unwrap_err();
        assert_eq!(err, LevelError::UnknownTile { ch: '?', x: 1, y: 1 });
        assert_eq!(err.to_string(), "Unknown tile character '?' at (1, 1)");
    }

    #[test]
    fn test_misconfigured_lava_entry() {
        let legend = Legend::new().with_tile('.', Tile::Empty).with_actor('~', spawn_lava);
        let err = Level::parse_with(".~", &legend, &mut rng()).unwrap_err();
        assert_eq!(
            err,
            LevelError::InvalidActorVariant {
                kind: ActorKind::Lava,
                ch: '~'
            }
        );
    }

    #[test]
    fn test_custom_legend() {
        let legend = Legend::new()
            .with_tile(' ', Tile::Empty)
            .with_tile('X', Tile::Wall)
            .with_actor('P', spawn_player);
        let level = Level::parse_with("X P", &legend, &mut rng()).unwrap();
        assert_eq!(level.rows()[0], vec![Tile::Wall, Tile::Empty, Tile::Empty]);
        assert_eq!(level.start_actors().len(), 1);
        // Standard characters mean nothing to a custom legend
        assert!(Level::parse_with("#", &legend, &mut rng()).is_err());
    }

    #[test]
    fn test_reparse_is_stable() {
        let a = Level::parse(SIMPLE_LEVEL_PLAN, &mut Pcg32::seed_from_u64(1)).unwrap();
        let b = Level::parse(SIMPLE_LEVEL_PLAN, &mut Pcg32::seed_from_u64(2)).unwrap();
        assert_eq!(a.rows(), b.rows());
        for (x, y) in a.start_actors().iter().zip(b.start_actors()) {
            assert_eq!(x.kind(), y.kind());
            assert_eq!(x.pos(), y.pos());
            match (x, y) {
                (Actor::Player(p), Actor::Player(q)) => assert_eq!(p.speed, q.speed),
                (Actor::Lava(p), Actor::Lava(q)) => assert_eq!(p.speed, q.speed),
                (Actor::Coin(Coin { base_pos: p, .. }), Actor::Coin(Coin { base_pos: q, .. })) => {
                    assert_eq!(p, q)
                }
                _ => unreachable!(),
            }
        }

        // Same seed reproduces the wobble too
        let c = Level::parse(SIMPLE_LEVEL_PLAN, &mut Pcg32::seed_from_u64(1)).unwrap();
        assert_eq!(a, c);
    }

    proptest! {
        #[test]
        fn prop_grid_shape_and_actor_count(
            rows in (1usize..12, 1usize..24).prop_flat_map(|(h, w)| {
                prop::collection::vec(
                    prop::collection::vec(prop::sample::select(vec!['.', '#', '+', '@', 'o', '=', '|', 'v']), w),
                    h,
                )
            })
        ) {
            let plan: String = rows
                .iter()
                .map(|r| r.iter().collect::<String>())
                .collect::<Vec<_>>()
                .join("\n");
            let level = Level::parse(&plan, &mut rng()).unwrap();

            prop_assert_eq!(level.height, rows.len());
            prop_assert_eq!(level.width, rows[0].len());
            prop_assert!(level.rows().iter().all(|r| r.len() == level.width));

            let mut actor_cells = 0;
            for (y, row) in rows.iter().enumerate() {
                for (x, ch) in row.iter().enumerate() {
                    if matches!(ch, '@' | 'o' | '=' | '|' | 'v') {
                        actor_cells += 1;
                        prop_assert_eq!(level.tile_at(x, y), Some(Tile::Empty));
                    }
                }
            }
            prop_assert_eq!(level.start_actors().len(), actor_cells);
        }

        #[test]
        fn prop_player_spawn_offset(x in 0usize..20, y in 0usize..10) {
            let mut plan = vec![vec!['.'; 20]; 10];
            plan[y][x] = '@';
            let plan: Vec<String> = plan.into_iter().map(|r| r.into_iter().collect()).collect();
            let level = Level::parse(&plan.join("\n"), &mut rng()).unwrap();
            prop_assert_eq!(level.start_actors()[0].pos(), Vector::new(x as f32, y as f32 - 0.5));
        }
    }
}
