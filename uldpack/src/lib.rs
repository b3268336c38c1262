#![doc = document_features::document_features!()]
//! Placement search, overlap and stability checks and fitness scoring for packing cuboid items into ULD containers

/// Geometric primitives and the overlap predicate
pub mod geometry;

/// Items, containers and the solutions built from them
pub mod entities;

/// Stability check and fitness scoring of solutions
pub mod eval;

/// Randomized greedy construction of candidate solutions
pub mod construct;

/// Importing instances into and exporting solutions out of this library
pub mod io;

/// Helper functions which do not belong to any specific module
pub mod util;
