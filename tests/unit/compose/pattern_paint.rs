use super::*;
use crate::{compose::plan::DrawOp, pattern::automaton::Grid};

fn ones_grid(width: usize, rows: usize) -> Grid {
    Grid::from_cells(width, vec![1u8; width * rows]).unwrap()
}

fn dots(ops: &[DrawOp]) -> Vec<(Point, f64, f32)> {
    ops.iter()
        .map(|op| match op {
            DrawOp::FillCircle {
                center,
                radius,
                opacity,
                ..
            } => (*center, *radius, *opacity),
            other => panic!("unexpected op {other:?}"),
        })
        .collect()
}

#[test]
fn only_the_fading_wedge_is_drawn() {
    let grid = ones_grid(10, 5);
    let canvas = Canvas {
        width: 300,
        height: 300,
    };
    let mut ops = Vec::new();
    paint_grid(&grid, canvas, 100.0, &mut ops).unwrap();

    let mut expected = 0usize;
    for row in 0..5usize {
        for cell in 0..10usize {
            let product = (1.0 - cell as f64 / 10.0) * (row as f64 / 5.0);
            if product < 0.15 {
                expected += 1;
            }
        }
    }
    assert_eq!(ops.len(), expected);
    // Row 0 always qualifies (product 0), the far column of late rows never
    // does.
    assert!(expected >= 10);
    assert!(expected < 50);
}

#[test]
fn dead_cells_are_never_drawn() {
    let grid = Grid::from_cells(4, vec![0u8; 16]).unwrap();
    let canvas = Canvas {
        width: 100,
        height: 100,
    };
    let mut ops = Vec::new();
    paint_grid(&grid, canvas, 40.0, &mut ops).unwrap();
    assert!(ops.is_empty());
}

#[test]
fn alpha_stays_within_the_fixed_bounds() {
    let grid = ones_grid(10, 5);
    let canvas = Canvas {
        width: 300,
        height: 300,
    };
    let mut ops = Vec::new();
    paint_grid(&grid, canvas, 100.0, &mut ops).unwrap();

    for (_, _, opacity) in dots(&ops) {
        assert!((0.15..=0.65).contains(&opacity));
    }
    // The first emitted dot is (row 0, cell 0): product 0, the most opaque
    // corner of the wedge.
    let (_, _, first_alpha) = dots(&ops)[0];
    assert!((first_alpha - 0.65).abs() < 1e-6);
}

#[test]
fn dots_anchor_to_the_bottom_right() {
    let grid = ones_grid(10, 5);
    let canvas = Canvas {
        width: 300,
        height: 300,
    };
    let fill_height = 100.0;
    let cell_size = fill_height / 10.0;
    let mut ops = Vec::new();
    paint_grid(&grid, canvas, fill_height, &mut ops).unwrap();

    let (center, radius, _) = dots(&ops)[0];
    assert_eq!(center, Point::new(300.0 + cell_size / 2.0, 200.0 + cell_size / 2.0));
    assert!((radius - cell_size / 2.0).abs() < 1e-9);
}

#[test]
fn non_positive_fill_height_is_rejected() {
    let grid = ones_grid(4, 2);
    let canvas = Canvas {
        width: 100,
        height: 100,
    };
    let mut ops = Vec::new();
    assert!(paint_grid(&grid, canvas, 0.0, &mut ops).is_err());
}
