//! # Dense matrix
//!
//! Row-major storage for the Simplex tableau. All rows have the same length, fixed at creation.
use std::ops::{Index, IndexMut};
use std::slice::Iter;

use num_traits::Zero;

use crate::data::number_types::traits::OrderedField;

/// Uses a `Vec<Vec<F>>` as underlying data structure. Dimensions are fixed at creation.
#[derive(Clone, Debug, PartialEq)]
pub struct Dense<F> {
    data: Vec<Vec<F>>,
    nr_columns: usize,
}

impl<F> Dense<F> {
    /// Create a dense matrix of zero's of dimension `nr_rows` x `nr_columns`.
    pub fn zeros(nr_rows: usize, nr_columns: usize) -> Self
    where
        F: Zero + Clone,
    {
        Self {
            data: vec![vec![F::zero(); nr_columns]; nr_rows],
            nr_columns,
        }
    }

    /// Get the value at coordinate (`i`, `j`).
    pub fn get(&self, i: usize, j: usize) -> &F {
        debug_assert!(i < self.nr_rows());
        debug_assert!(j < self.nr_columns);

        &self.data[i][j]
    }

    /// Get all values in row `i` of this matrix.
    pub fn row(&self, i: usize) -> &[F] {
        debug_assert!(i < self.nr_rows());

        &self.data[i]
    }

    /// Iterate over the rows of this matrix.
    pub fn rows(&self) -> Iter<'_, Vec<F>> {
        self.data.iter()
    }

    /// Get the number of rows in this matrix.
    pub fn nr_rows(&self) -> usize {
        self.data.len()
    }

    /// Get the number of columns in this matrix.
    pub fn nr_columns(&self) -> usize {
        self.nr_columns
    }
}

impl<F: OrderedField> Dense<F> {
    /// Divide every value in row `i` by `divisor`.
    pub fn divide_row(&mut self, i: usize, divisor: &F) {
        debug_assert!(i < self.nr_rows());
        debug_assert!(divisor != &F::zero());

        for value in self.data[i].iter_mut() {
            *value = value.clone() / divisor.clone();
        }
    }

    /// Subtract a multiple of row `read_row` from row `write_row`.
    pub fn mul_sub_rows(&mut self, read_row: usize, write_row: usize, factor: &F) {
        debug_assert!(read_row < self.nr_rows());
        debug_assert!(write_row < self.nr_rows());
        debug_assert_ne!(read_row, write_row);

        // Split to hold a shared and an exclusive borrow at the same time
        let (read, write) = if read_row < write_row {
            let (head, tail) = self.data.split_at_mut(write_row);
            (&head[read_row], &mut tail[0])
        } else {
            let (head, tail) = self.data.split_at_mut(read_row);
            (&tail[0], &mut head[write_row])
        };

        for (target, source) in write.iter_mut().zip(read.iter()) {
            *target = target.clone() - factor.clone() * source.clone();
        }
    }
}

impl<F> Index<(usize, usize)> for Dense<F> {
    type Output = F;

    fn index(&self, (i, j): (usize, usize)) -> &Self::Output {
        self.get(i, j)
    }
}

impl<F> IndexMut<(usize, usize)> for Dense<F> {
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut Self::Output {
        debug_assert!(i < self.nr_rows());
        debug_assert!(j < self.nr_columns);

        &mut self.data[i][j]
    }
}
