//! Random face configurations.
//!
//! Randomness is always supplied by the caller, so a seeded generator gives
//! a reproducible cube.

use crate::{CubeConfig, FaceGrid, CAPACITIES, FACE_COUNT};
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::trace;

/// Grid of `len` cells with exactly `active` of them set, in uniformly random order.
fn shuffled_face<R: Rng + ?Sized>(rng: &mut R, len: usize, active: usize) -> Vec<bool> {
    let mut cells: Vec<bool> = (0..len).map(|i| i < active).collect();
    cells.shuffle(rng);
    cells
}

fn build<R: Rng + ?Sized>(
    rng: &mut R,
    capacities: &[usize; FACE_COUNT],
    mut active_count: impl FnMut(&mut R, usize) -> usize,
) -> CubeConfig {
    let faces = capacities
        .iter()
        .enumerate()
        .map(|(i, &capacity)| {
            let active = active_count(rng, i);
            trace!(face = i, capacity, active, "generated face");
            let cells = shuffled_face(rng, capacity, active);
            FaceGrid::new(i, cells).expect("capacities are valid grid lengths")
        })
        .collect();
    CubeConfig::from_grids(faces)
}

/// Draws a fresh primary cube.
#[derive(Debug, Clone, Copy, Default)]
pub struct FaceConfigGenerator;

impl FaceConfigGenerator {
    pub fn new() -> Self {
        Self
    }

    /// Each face gets `0..=capacity` active cells, uniformly, then a uniform shuffle.
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> CubeConfig {
        build(rng, &CAPACITIES, |rng, i| rng.gen_range(0..=CAPACITIES[i]))
    }
}

/// Draws a secondary cube whose per-face active counts fit in what the
/// primary leaves free.
///
/// Only counts are constrained. Cell positions are shuffled independently,
/// so the two cubes may still overlap spatially.
#[derive(Debug, Clone, Copy, Default)]
pub struct IntersectionConfigGenerator;

impl IntersectionConfigGenerator {
    pub fn new() -> Self {
        Self
    }

    pub fn derive_secondary<R: Rng + ?Sized>(
        &self,
        primary: &CubeConfig,
        rng: &mut R,
    ) -> CubeConfig {
        let occupied = primary.active_counts();
        build(rng, &CAPACITIES, |rng, i| {
            // A full face leaves the single value 0
            let width = (CAPACITIES[i] + 1).saturating_sub(occupied[i]).max(1);
            rng.gen_range(0..width)
        })
    }
}
