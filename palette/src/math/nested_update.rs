// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Immutable array surgery with structural sharing.
//!
//! Every function here takes a slice and returns a brand new [`Vec`] (or [`None`] if an
//! index is out of bounds), leaving the input untouched. Elements are cloned, which for
//! the [`Arc`] wrapped rows and cells of a grid is just a reference count bump: the new
//! sequence points at the *same* allocations as the old one for every element that was
//! not addressed. Renderers rely on this to detect "did this row change" with
//! [`Arc::ptr_eq`].
//!
//! The palette grid has a fixed rank of 2 (hue row, shade column), so [`replace_cell`]
//! is two explicit nested [`replace_at`] calls rather than a depth driven recursion.
//!
//! ```text
//!   old grid                  new grid after replace_cell((1, 2))
//!   ┌──────────┐              ┌──────────┐
//!   │ row 0 ───┼──── shared ──┼─▶ row 0  │
//!   │ row 1    │              │ row 1'   │  new row, cells 0, 1, 3.. shared
//!   │ row 2 ───┼──── shared ──┼─▶ row 2  │
//!   └──────────┘              └──────────┘
//! ```

use std::sync::Arc;

/// A row of shared cells. Rows are immutable once built.
pub type SharedRow<T> = Arc<[Arc<T>]>;

/// Address of a single cell in a rank 2 grid: `hue` selects the row, `shade` selects the
/// column.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct GridCoord {
    pub hue: usize,
    pub shade: usize,
}

impl GridCoord {
    #[must_use]
    pub fn new(hue: usize, shade: usize) -> Self { Self { hue, shade } }
}

impl From<(usize, usize)> for GridCoord {
    fn from((hue, shade): (usize, usize)) -> Self { Self { hue, shade } }
}

/// Copy of `items` with the element at `index` replaced by `updater(&old)`.
#[must_use]
pub fn replace_at<T: Clone>(
    items: &[T],
    index: usize,
    updater: impl FnOnce(&T) -> T,
) -> Option<Vec<T>> {
    let old = items.get(index)?;
    let new = updater(old);
    let mut acc = items.to_vec();
    acc[index] = new;
    Some(acc)
}

/// Copy of `items` without the element at `index`.
#[must_use]
pub fn remove_at<T: Clone>(items: &[T], index: usize) -> Option<Vec<T>> {
    if index >= items.len() {
        return None;
    }
    let mut acc = items.to_vec();
    acc.remove(index);
    Some(acc)
}

/// Copy of `items` with the elements at `from` and `to` exchanged. This is a pairwise
/// swap, not a move: everything between the two indices stays where it is.
#[must_use]
pub fn swap_at<T: Clone>(items: &[T], from: usize, to: usize) -> Option<Vec<T>> {
    if from >= items.len() || to >= items.len() {
        return None;
    }
    let mut acc = items.to_vec();
    acc.swap(from, to);
    Some(acc)
}

/// Copy of `grid` with the single cell at `coord` replaced by `updater(&old_cell)`.
///
/// Only two new allocations are made: the outer sequence, and the addressed row. All
/// other rows, and all other cells of the addressed row, are shared with `grid`.
#[must_use]
pub fn replace_cell<T>(
    grid: &[SharedRow<T>],
    coord: GridCoord,
    updater: impl FnOnce(&T) -> T,
) -> Option<Vec<SharedRow<T>>> {
    let row = grid.get(coord.hue)?;
    let new_row = replace_at(&row[..], coord.shade, |cell| Arc::new(updater(cell.as_ref())))?;
    replace_at(grid, coord.hue, move |_| <SharedRow<T>>::from(new_row))
}

/// Copy of `grid` with the column at `index` removed from every row.
#[must_use]
pub fn remove_column<T>(grid: &[SharedRow<T>], index: usize) -> Option<Vec<SharedRow<T>>> {
    grid.iter()
        .map(|row| remove_at(&row[..], index).map(<SharedRow<T>>::from))
        .collect()
}

/// Copy of `grid` with columns `from` and `to` swapped in every row.
#[must_use]
pub fn swap_columns<T>(
    grid: &[SharedRow<T>],
    from: usize,
    to: usize,
) -> Option<Vec<SharedRow<T>>> {
    grid.iter()
        .map(|row| swap_at(&row[..], from, to).map(<SharedRow<T>>::from))
        .collect()
}
