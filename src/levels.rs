//! Built-in level plans
//!
//! Legend: `.` empty, `#` wall, `+` static lava, `@` player start,
//! `o` coin, `=` lava moving sideways, `|` lava moving up and down,
//! `v` dripping lava.

pub const SIMPLE_LEVEL_PLAN: &str = "
......................
..#................#..
..#..............=.#..
..#.........o.o....#..
..#.@......#####...#..
..#####............#..
......#++++++++++++#..
......##############..
......................";

pub const DRIP_LEVEL_PLAN: &str = "
..........................
..#..........v.........#..
..#....................#..
..#.....o......o....o..#..
..#...####...####..###.#..
..#.@..................#..
..######++++++++++######..
.......################...";

pub const TOWER_LEVEL_PLAN: &str = "
..............
..#...o....#..
..#..###...#..
..#|.....o.#..
..#....###.#..
..#.o.....|#..
..#.###....#..
..#.....=..#..
..#@.......#..
..#########+..";

/// Named plans in play order
pub const BUILTIN_LEVELS: &[(&str, &str)] = &[
    ("Simple", SIMPLE_LEVEL_PLAN),
    ("Drip", DRIP_LEVEL_PLAN),
    ("Tower", TOWER_LEVEL_PLAN),
];
