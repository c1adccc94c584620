//! Scenario presets and rendering helpers for benchmarks and examples.
//!
//! - [`stardust_scenario`]: six named snakes on a 30x30 torus, 400 steps
//! - [`crowded_scenario`]: many short snakes packed onto a bounded grid
//! - [`ascii_frame`]: text rendering of a [`Frame`], one row per line

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use slither_core::{Cell, Direction};
use slither_engine::{Frame, SimConfig, SnakeSpec};
use slither_space::Topology;

/// Six snakes of mixed length on a 30x30 periodic grid.
///
/// Runs for at most 400 steps. Heads, in movement order:
/// `(10,10)` north, `(15,12)` south, `(19,15)` west, `(1,5)` west,
/// `(20,25)` east, `(20,6)` south.
pub fn stardust_scenario() -> SimConfig {
    SimConfig {
        xmax: 30,
        ymax: 30,
        topology: Topology::Periodic,
        step_limit: 400,
        snakes: vec![
            SnakeSpec::new((10, 10), 9, Direction::North).with_appearance('o', "k"),
            SnakeSpec::new((15, 12), 6, Direction::South).with_appearance('o', "khaki"),
            SnakeSpec::new((19, 15), 7, Direction::West).with_appearance('o', "lightgray"),
            SnakeSpec::new((1, 5), 8, Direction::West).with_appearance('o', "r"),
            SnakeSpec::new((20, 25), 7, Direction::East).with_appearance('o', "g"),
            SnakeSpec::new((20, 6), 3, Direction::South).with_appearance('o', "slategrey"),
        ],
    }
}

/// `n` length-2 snakes on a bounded grid ten columns of snakes wide.
///
/// Snakes stand upright in every other column, in bands of four rows, so
/// about a third of the grid starts covered. `n = 0` yields a config that
/// fails validation with no snakes.
pub fn crowded_scenario(n: usize) -> SimConfig {
    const COLUMNS: usize = 10;
    let bands = n.div_ceil(COLUMNS).max(1);
    let snakes = (0..n)
        .map(|k| {
            let x = (k % COLUMNS) as i32 * 2;
            let y = (k / COLUMNS) as i32 * 4 + 2;
            SnakeSpec::new((x, y), 2, Direction::North)
        })
        .collect();
    SimConfig {
        xmax: (COLUMNS * 2 - 1) as i32,
        ymax: (bands * 4 - 1) as i32,
        topology: Topology::Bounded,
        step_limit: 1000,
        snakes,
    }
}

/// Render `frame` as text, highest `y` first.
///
/// Heads are drawn with their snake's symbol, bodies with `*`, free cells
/// with `.`. Periodic planes draw each cell once, at its canonical label.
pub fn ascii_frame(frame: &Frame<'_>) -> String {
    let plane = frame.plane;
    let (w, h) = match plane.topology() {
        Topology::Bounded => (plane.xmax() + 1, plane.ymax() + 1),
        Topology::Periodic => (plane.xmax(), plane.ymax()),
    };
    let mut rows = vec![vec!['.'; w as usize]; h as usize];
    for snake in frame.snakes {
        for (i, &Cell { x, y }) in snake.trail().iter().enumerate() {
            rows[y as usize][x as usize] = if i == 0 {
                snake.appearance().symbol
            } else {
                '*'
            };
        }
    }
    let mut out = String::with_capacity(((w + 1) * h) as usize);
    for row in rows.iter().rev() {
        out.extend(row.iter());
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use slither_engine::Simulation;

    #[test]
    fn stardust_scenario_validates() {
        let config = stardust_scenario();
        config.validate().unwrap();
        assert_eq!(config.snakes.len(), 6);
    }

    #[test]
    fn stardust_trails_are_disjoint() {
        let sim = Simulation::new(stardust_scenario()).unwrap();
        let covered: usize = sim.snakes().iter().map(|s| s.trail().len()).sum();
        assert_eq!(sim.occupancy().occupied_count(), covered);
    }

    #[test]
    fn crowded_scenario_validates() {
        for n in [1, 9, 10, 11, 40] {
            let config = crowded_scenario(n);
            config.validate().unwrap();
            assert_eq!(config.snakes.len(), n);
        }
    }

    #[test]
    fn crowded_scenario_empty_is_rejected() {
        assert!(crowded_scenario(0).validate().is_err());
    }

    #[test]
    fn ascii_frame_draws_heads_and_bodies() {
        let config = SimConfig {
            xmax: 2,
            ymax: 2,
            topology: Topology::Bounded,
            step_limit: 0,
            snakes: vec![SnakeSpec::new((0, 2), 1, Direction::North).with_appearance('@', "r")],
        };
        let sim = Simulation::new(config).unwrap();
        assert_eq!(ascii_frame(&sim.frame()), "@..\n*..\n...\n");
    }

    #[test]
    fn ascii_frame_periodic_uses_canonical_cells() {
        let config = SimConfig {
            xmax: 3,
            ymax: 3,
            topology: Topology::Periodic,
            step_limit: 0,
            snakes: vec![SnakeSpec::new((3, 1), 1, Direction::East)],
        };
        let sim = Simulation::new(config).unwrap();
        // Head (3,1) is stored as (0,1); its tail is (2,1).
        assert_eq!(ascii_frame(&sim.frame()), "...\no.*\n...\n");
    }
}
