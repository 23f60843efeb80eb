use super::Matrix;

enum MinorRef<'a> {
    Base(&'a Matrix),
    Nested(&'a MinorView<'a>),
}

/// Read-only lens over a matrix (or another view) with at most one row and
/// one column conceptually removed.
///
/// Cell lookups remap indices past the removed line and recurse to the base
/// matrix, so nesting a view per recursion level costs O(depth) structure
/// instead of materializing a submatrix copy at every step. Views borrow
/// their parent and never outlive the caller's stack frame.
pub struct MinorView<'a> {
    reference: MinorRef<'a>,
    removed_row: Option<usize>,
    removed_column: Option<usize>,
    rows: usize,
    columns: usize,
}

impl<'a> MinorView<'a> {
    /// Top-level view over a matrix. `None` on an axis removes nothing,
    /// which is how a full determinant starts.
    pub fn of_matrix(
        matrix: &'a Matrix,
        removed_row: Option<usize>,
        removed_column: Option<usize>,
    ) -> MinorView<'a> {
        MinorView {
            reference: MinorRef::Base(matrix),
            removed_row,
            removed_column,
            rows: effective(matrix.rows(), removed_row),
            columns: effective(matrix.columns(), removed_column),
        }
    }

    /// View nested one level deeper over a parent view.
    pub fn of_minor(
        parent: &'a MinorView<'a>,
        removed_row: Option<usize>,
        removed_column: Option<usize>,
    ) -> MinorView<'a> {
        MinorView {
            reference: MinorRef::Nested(parent),
            removed_row,
            removed_column,
            rows: effective(parent.rows, removed_row),
            columns: effective(parent.columns, removed_column),
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Cell lookup in the view's own coordinate space.
    ///
    /// # Panics
    ///
    /// Panics when `(i, j)` lies outside the effective dimensions.
    pub fn get(&self, i: usize, j: usize) -> f64 {
        assert!(
            i < self.rows && j < self.columns,
            "cell ({i}, {j}) out of bounds for {}x{} minor view",
            self.rows,
            self.columns,
        );

        let parent_i = skip_removed(i, self.removed_row);
        let parent_j = skip_removed(j, self.removed_column);

        match self.reference {
            MinorRef::Base(matrix) => matrix[(parent_i, parent_j)],
            MinorRef::Nested(parent) => parent.get(parent_i, parent_j),
        }
    }
}

fn effective(parent_extent: usize, removed: Option<usize>) -> usize {
    if removed.is_some() {
        parent_extent - 1
    } else {
        parent_extent
    }
}

fn skip_removed(index: usize, removed: Option<usize>) -> usize {
    match removed {
        Some(removed) if index >= removed => index + 1,
        _ => index,
    }
}
