//! Sequential cycles against a straightforward rendition of the same
//! greedy algorithm over plain nested vectors.

use proptest::collection::vec;
use proptest::prelude::*;
use seamshrink::{CarveConfig, GreedySeamFinder, Grid, GridView, SeamCarver, SeamFinder};

type Rows = Vec<Vec<Vec<u8>>>;

fn to_rows(width: usize, channels: usize, packed: &[u8]) -> Rows {
    packed
        .chunks(width * channels)
        .map(|row| row.chunks(channels).map(|px| px.to_vec()).collect())
        .collect()
}

fn flatten(rows: &Rows) -> Vec<u8> {
    rows.iter().flatten().flatten().cloned().collect()
}

fn gradient(p: &[u8], q: &[u8]) -> f32 {
    p.iter()
        .zip(q)
        .map(|(&a, &b)| {
            let d = f32::from(b) - f32::from(a);
            d * d
        })
        .fold(0.0, |acc, d| acc + d)
}

// Index of the smallest of `values`, first one on ties.
fn first_minimum(values: &[f32]) -> usize {
    let mut best = 0;
    for (i, v) in values.iter().enumerate() {
        if *v < values[best] {
            best = i;
        }
    }
    best
}

fn reference_cycle(rows: &mut Rows) {
    let (h, w) = (rows.len(), rows[0].len());
    let mut energy = vec![vec![1.0f32; w]; h];
    for y in 1..h - 1 {
        for x in 1..w - 1 {
            let vertical = gradient(&rows[y - 1][x], &rows[y + 1][x]);
            energy[y][x] = vertical + gradient(&rows[y][x - 1], &rows[y][x + 1]);
        }
    }
    for row in energy.iter_mut() {
        row[0] = f32::INFINITY;
        row[w - 1] = f32::INFINITY;
    }

    let mut step = vec![vec![0i64; w]; h];
    for y in 1..h - 1 {
        for x in 1..w - 1 {
            let above = [energy[y - 1][x - 1], energy[y - 1][x], energy[y - 1][x + 1]];
            step[y][x] = first_minimum(&above) as i64 - 1;
        }
    }

    let walk = |start: usize| -> (f32, Vec<usize>) {
        let mut x = start as i64;
        let mut total = 0.0;
        let mut path = Vec::new();
        for y in 0..h {
            path.push(x as usize);
            total += energy[y][x as usize];
            x = (x + step[y][x as usize]).max(0).min(w as i64 - 1);
        }
        (total, path)
    };

    let totals: Vec<f32> = (0..w).map(|s| walk(s).0).collect();
    let (_, path) = walk(first_minimum(&totals));
    for (row, x) in rows.iter_mut().zip(path) {
        row.remove(x);
    }
}

fn image_and_cycles() -> impl Strategy<Value = (u32, u32, u32, Vec<u8>, u32)> {
    (3u32..12, 3u32..9, prop_oneof![Just(1u32), Just(3u32)]).prop_flat_map(|(w, h, c)| {
        (
            Just(w),
            Just(h),
            Just(c),
            vec(any::<u8>(), (w * h * c) as usize),
            0..=w - 3,
        )
    })
}

proptest! {
    #[test]
    fn sequential_cycles_match_the_reference((w, h, c, pixels, k) in image_and_cycles()) {
        let grid = Grid::from_packed(w, h, c, &pixels).unwrap();
        let mut carver = SeamCarver::new(grid, CarveConfig::default()).unwrap();
        let mut rows = to_rows(w as usize, c as usize, &pixels);

        for _ in 0..k {
            carver.carve_once().unwrap();
            reference_cycle(&mut rows);
            prop_assert_eq!(carver.image().to_packed(), flatten(&rows));
        }
    }

    #[test]
    fn k_cycles_remove_k_columns((w, h, c, pixels, k) in image_and_cycles()) {
        let grid = Grid::from_packed(w, h, c, &pixels).unwrap();
        let mut carver = SeamCarver::new(grid, CarveConfig::default()).unwrap();
        carver.request_removal(k).unwrap();
        prop_assert_eq!(carver.run_to_completion().unwrap(), w - k);
        prop_assert_eq!(carver.height(), h);
        prop_assert_eq!(carver.image().pitch(), w * c);
    }

    #[test]
    fn every_row_loses_exactly_one_pixel_along_a_connected_seam(
        (w, h, c, pixels, _k) in image_and_cycles()
    ) {
        prop_assume!(w > 3);
        let grid = Grid::from_packed(w, h, c, &pixels).unwrap();
        let mut carver = SeamCarver::new(grid, CarveConfig::default()).unwrap();

        carver.analyze().unwrap();
        let seam = {
            let finder = GreedySeamFinder::new(carver.energy(), carver.directions());
            finder.seam_path(finder.find_minimum_seam())
        };
        prop_assert_eq!(seam.len(), h as usize);
        for step in seam.windows(2) {
            prop_assert!((i64::from(step[1]) - i64::from(step[0])).abs() <= 1);
        }

        carver.carve_once().unwrap();
        let before = to_rows(w as usize, c as usize, &pixels);
        let after = to_rows(w as usize - 1, c as usize, &carver.image().to_packed());
        for ((old, new), &x) in before.iter().zip(&after).zip(&seam) {
            let mut expected = old.clone();
            expected.remove(x as usize);
            prop_assert_eq!(&expected, new);
        }
    }
}
