use std::collections::BTreeSet;

use crate::patterns::{BEACON, BLINKER, BLOCK, GLIDER, PULSAR, TOAD};
use crate::{Grid, Life, Pattern, advance, pattern_grid};

fn live_set(grid: &Grid) -> BTreeSet<(usize, usize)> {
    grid.iter_live().collect()
}

fn shifted(cells: &BTreeSet<(usize, usize)>, dr: usize, dc: usize, size: usize) -> BTreeSet<(usize, usize)> {
    cells
        .iter()
        .map(|&(r, c)| ((r + dr) % size, (c + dc) % size))
        .collect()
}

fn assert_period(pattern: &Pattern, size: usize, period: u64) {
    let start = pattern_grid(size, pattern, 3, 3).unwrap();
    let mut life = Life::new(start.clone());
    for generation in 1..period {
        life.advance();
        assert_ne!(life.grid(), &start, "{} repeated early at {generation}", pattern.name());
    }
    life.advance();
    assert_eq!(life.grid(), &start, "{} period {period}\n{}", pattern.name(), life.grid());
}

#[test]
fn test_cgol_glider() {
    let start = pattern_grid(20, &GLIDER, 1, 1).unwrap();
    let mut life = Life::new(start.clone());
    for _ in 0..4 {
        life.advance();
        assert_eq!(life.grid().population(), 5);
    }
    println!("{}", life.grid());
    assert_eq!(live_set(life.grid()), shifted(&live_set(&start), 1, 1, 20));
}

#[test]
fn test_glider_wraps_around() {
    // 4 * 20 generations carry the glider once around the torus.
    let start = pattern_grid(20, &GLIDER, 1, 1).unwrap();
    let mut life = Life::new(start.clone());
    for _ in 0..80 {
        life.advance();
    }
    assert_eq!(life.grid(), &start);
}

#[test]
fn test_block_is_still() {
    let start = pattern_grid(12, &BLOCK, 5, 5).unwrap();
    let mut life = Life::new(start.clone());
    for _ in 0..10 {
        assert_eq!(life.advance(), &start);
    }
}

#[test]
fn test_oscillators() {
    assert_period(&BLINKER, 12, 2);
    assert_period(&TOAD, 12, 2);
    assert_period(&BEACON, 12, 2);
    assert_period(&PULSAR, 20, 3);
}

#[test]
fn test_pure_and_stateful_agree() {
    let start = pattern_grid(16, &GLIDER, 2, 5).unwrap();
    let mut life = Life::new(start.clone());
    let mut grid = start;
    for _ in 0..12 {
        grid = advance(&grid);
        assert_eq!(life.advance(), &grid);
    }
}
