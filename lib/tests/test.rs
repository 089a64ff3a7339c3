use lifesim_lib::{
    count_neighbors, decode_onto, encode, resize, step, BoundaryMode, Config, Grid, Seed,
    Status, ALIVE, DEAD,
};
use proptest::prelude::*;
use rand::{rngs::StdRng, SeedableRng};
use std::error::Error;

const MODES: [BoundaryMode; 2] = [BoundaryMode::Periodic, BoundaryMode::Bounded];

fn blinker() -> Grid {
    let mut grid = Grid::blank(5, 5);
    for x in 1..4 {
        grid.set(x, 2, ALIVE);
    }
    grid
}

fn transposed(grid: &Grid) -> Grid {
    let mut result = Grid::blank(grid.height(), grid.width());
    for x in 0..grid.width() {
        for y in 0..grid.height() {
            result.set(y, x, grid.get(x, y));
        }
    }
    result
}

#[test]
fn empty_grid_is_fixed() {
    for boundary in MODES {
        let grid = Grid::blank(7, 4);
        let next = step(&grid, boundary);
        assert!(!next.changed);
        assert!(next.grid.is_empty());
    }
}

#[test]
fn block_is_still() {
    for size in [3, 4, 9] {
        let mut grid = Grid::blank(size, size);
        for (x, y) in [(0, 0), (0, 1), (1, 0), (1, 1)] {
            grid.set(x, y, ALIVE);
        }
        let next = step(&grid, BoundaryMode::Periodic);
        assert!(!next.changed, "block on a {0}x{0} torus", size);
        assert_eq!(next.grid, grid);
    }
}

#[test]
fn blinker_never_converges() {
    let horizontal = blinker();
    let vertical = transposed(&horizontal);
    let mut grid = horizontal.clone();
    for i in 0..10 {
        let (next, changed) = step(&grid, BoundaryMode::Periodic).into_parts();
        assert!(changed);
        let expected = if i % 2 == 0 { &vertical } else { &horizontal };
        assert_eq!(&next, expected);
        grid = next;
    }
}

#[test]
fn blinker_simulation_keeps_running() -> Result<(), Box<dyn Error>> {
    let mut sim = Config::new(5, 5)
        .set_boundary(BoundaryMode::Periodic)
        .set_seed("blinker")
        .simulation()?;
    sim.start();
    for _ in 0..20 {
        assert_eq!(sim.tick(), Status::Running);
    }
    assert_eq!(sim.generation(), 20);
    Ok(())
}

#[test]
fn l_tromino_becomes_block() {
    let grid = Grid::from_rows(&[[ALIVE, ALIVE, DEAD], [ALIVE, DEAD, DEAD], [DEAD, DEAD, DEAD]]);
    let next = step(&grid, BoundaryMode::Bounded);
    assert!(next.changed);
    assert_eq!(
        next.grid,
        Grid::from_rows(&[[ALIVE, ALIVE, DEAD], [ALIVE, ALIVE, DEAD], [DEAD, DEAD, DEAD]])
    );
    assert!(!step(&next.grid, BoundaryMode::Bounded).changed);
}

#[test]
fn corner_is_neighbor_of_corner_on_torus() {
    let (width, height) = (6, 4);
    let mut grid = Grid::blank(width, height);
    grid.set(0, 0, ALIVE);
    let corner = (width - 1, height - 1);
    assert_eq!(count_neighbors(&grid, BoundaryMode::Periodic, corner), 1);
    assert_eq!(count_neighbors(&grid, BoundaryMode::Bounded, corner), 0);
}

#[test]
fn round_trip_extremes() {
    let mut full = Grid::blank(4, 6);
    for x in 0..4 {
        for y in 0..6 {
            full.set(x, y, ALIVE);
        }
    }
    for grid in [Grid::blank(4, 6), full] {
        let mut decoded = Grid::blank(4, 6);
        decode_onto(&mut decoded, &encode(&grid));
        assert_eq!(decoded, grid);
    }
}

#[test]
fn shrink_and_grow() -> Result<(), Box<dyn Error>> {
    let mut rng = StdRng::seed_from_u64(2024);
    let grid = Grid::random_with_rng(8, 6, 0.5, &mut rng)?;

    let small = resize(&grid, 5, 3);
    for x in 0..5 {
        for y in 0..3 {
            assert_eq!(small.get(x, y), grid.get(x, y));
        }
    }

    let large = resize(&grid, 12, 10);
    for x in 0..12 {
        for y in 0..10 {
            let expected = grid.get_cell((x, y)).unwrap_or(DEAD);
            assert_eq!(large.get(x, y), expected);
        }
    }
    Ok(())
}

#[test]
fn seeds() -> Result<(), Box<dyn Error>> {
    let grid = "random@1".parse::<Seed>()?.grid(3, 2)?;
    assert_eq!(grid.cell_count(), 6);
    let grid = "glider".parse::<Seed>()?.grid(10, 10)?;
    assert_eq!(grid.cell_count(), 5);
    assert!("random@-0.1".parse::<Seed>().is_err());
    assert!(Config::new(0, 10).simulation().is_err());
    Ok(())
}

#[test]
fn glider_crashes_into_the_wall() -> Result<(), Box<dyn Error>> {
    let mut sim = Config::new(8, 8).set_seed("glider").simulation()?;
    sim.start();
    let mut ticks = 0;
    while sim.tick() == Status::Running {
        ticks += 1;
        assert!(ticks < 100, "glider should settle into a block");
    }
    assert_eq!(sim.status(), Status::Converged);
    assert_eq!(sim.grid().cell_count(), 4);
    Ok(())
}

fn grids() -> impl Strategy<Value = Grid> {
    (1..12i32, 1..12i32).prop_flat_map(|(width, height)| {
        prop::collection::vec(any::<bool>(), (width * height) as usize).prop_map(move |cells| {
            let mut grid = Grid::blank(width, height);
            for (i, alive) in cells.into_iter().enumerate() {
                let i = i as i32;
                grid.set(i / height, i % height, alive.into());
            }
            grid
        })
    })
}

proptest! {
    #[test]
    fn codec_round_trip(grid in grids()) {
        let mut decoded = Grid::blank(grid.width(), grid.height());
        decode_onto(&mut decoded, &encode(&grid));
        prop_assert_eq!(decoded, grid);
    }

    #[test]
    fn resize_back_and_forth(grid in grids(), width in 1..12i32, height in 1..12i32) {
        let resized = resize(&grid, width, height);
        let back = resize(&resized, grid.width(), grid.height());
        for x in 0..grid.width() {
            for y in 0..grid.height() {
                let expected = if x < width && y < height { grid.get(x, y) } else { DEAD };
                prop_assert_eq!(back.get(x, y), expected);
            }
        }
    }
}
