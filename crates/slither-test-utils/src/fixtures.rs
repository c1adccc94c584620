//! Reusable simulation configurations.
//!
//! - [`single_snake`]: one snake on an otherwise empty grid.
//! - [`periodic_pair`]: two snakes near the seams of a small torus.
//! - [`crowded_config`]: a small bounded grid packed with short snakes.

use slither_core::Direction;
use slither_engine::{SimConfig, SnakeSpec};
use slither_space::Topology;

/// One snake of `length` with its head at `head`, facing `direction`.
pub fn single_snake(
    bounds: (i32, i32),
    topology: Topology,
    head: (i32, i32),
    length: u32,
    direction: Direction,
) -> SimConfig {
    SimConfig {
        xmax: bounds.0,
        ymax: bounds.1,
        topology,
        step_limit: 200,
        snakes: vec![SnakeSpec::new(head, length, direction)],
    }
}

/// Two snakes straddling the seams of a 6x6 torus.
///
/// Snake 0 lies along the x seam (its tail wraps past `x = 0`), snake 1
/// along the y seam. Small enough that both seams are crossed often.
pub fn periodic_pair(step_limit: u64) -> SimConfig {
    SimConfig {
        xmax: 6,
        ymax: 6,
        topology: Topology::Periodic,
        step_limit,
        snakes: vec![
            SnakeSpec::new((1, 2), 3, Direction::East),
            SnakeSpec::new((4, 1), 2, Direction::North),
        ],
    }
}

/// `rows` rows of short vertical snakes on a bounded grid.
///
/// Every other column holds a length-1 snake facing north, so the grid is
/// about half covered and snakes trap each other quickly.
pub fn crowded_config(rows: i32, step_limit: u64) -> SimConfig {
    let xmax = 9;
    let ymax = rows * 3 - 1;
    let mut snakes = Vec::new();
    for row in 0..rows {
        for x in (0..=xmax).step_by(2) {
            snakes.push(SnakeSpec::new((x, row * 3 + 1), 1, Direction::North));
        }
    }
    SimConfig {
        xmax,
        ymax,
        topology: Topology::Bounded,
        step_limit,
        snakes,
    }
}
