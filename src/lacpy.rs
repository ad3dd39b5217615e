//! Convenience entry points over the strided kernel.
//!
//! The historical routine this crate generalizes exposed a single
//! leading-dimension stride per matrix; [`lacpy`] keeps that calling
//! convention as a thin adapter that derives the two element strides from a
//! [`Layout`] plus a leading dimension. [`lacpy_strided`] is the fully
//! general flat-argument form taking raw shape/stride/offset metadata, as an
//! ndarray-like describer would hand it over. Both delegate to the one
//! kernel; neither is a separate algorithm.
//!
//! Extents arrive as signed integers here because the describers being
//! mirrored allow negative values; negative extents are rejected, they are
//! not empty shapes.

use crate::ops::copy_into;
use crate::view::{MatrixView, MatrixViewMut};
use crate::{CopyError, Result};

/// Memory layout for matrices addressed by a single leading dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Layout {
    /// Row-major (C-style): elements in a row are contiguous.
    #[default]
    RowMajor,
    /// Column-major (Fortran-style): elements in a column are contiguous.
    ColMajor,
}

impl Layout {
    /// Minimum leading dimension for an `rows` x `cols` matrix, per the
    /// historical convention of at least one.
    #[inline]
    pub fn min_leading_dim(self, rows: usize, cols: usize) -> usize {
        match self {
            Layout::RowMajor => cols.max(1),
            Layout::ColMajor => rows.max(1),
        }
    }

    /// Element strides `[rows, cols]` implied by this layout and a leading
    /// dimension.
    #[inline]
    pub fn strides(self, ld: usize) -> [isize; 2] {
        match self {
            Layout::RowMajor => [ld as isize, 1],
            Layout::ColMajor => [1, ld as isize],
        }
    }
}

/// Copy an `m` x `n` matrix `a` into `b`, both addressed through a layout
/// and a leading dimension.
///
/// # Errors
/// - [`CopyError::NegativeExtent`] if `m < 0` or `n < 0`
/// - [`CopyError::BadLeadingDim`] if a leading dimension is below the
///   extent it has to span (or below one)
/// - [`CopyError::OffsetOverflow`] if a buffer is too small for the
///   described matrix
pub fn lacpy<T: Clone>(
    layout: Layout,
    m: isize,
    n: isize,
    a: &[T],
    lda: isize,
    b: &mut [T],
    ldb: isize,
) -> Result<()> {
    let (rows, cols) = checked_extents(m, n)?;
    let lda = checked_leading_dim(layout, rows, cols, lda)?;
    let ldb = checked_leading_dim(layout, rows, cols, ldb)?;

    let src = MatrixView::new(a, [rows, cols], layout.strides(lda), 0)?;
    let mut dst = MatrixViewMut::new(b, [rows, cols], layout.strides(ldb), 0)?;
    copy_into(&mut dst, &src)
}

/// Copy an `m` x `n` matrix between two independently laid out views given
/// as raw shape/stride/offset metadata.
///
/// `sa0`/`sa1` and `sb0`/`sb1` are the per-axis element strides of `a` and
/// `b`; `oa`/`ob` are the linear indices of each logical `(0, 0)` element.
///
/// # Errors
/// Same as [`lacpy`], plus [`CopyError::ZeroStride`] for a zero stride on
/// an axis with extent above one.
#[allow(clippy::too_many_arguments)]
pub fn lacpy_strided<T: Clone>(
    m: isize,
    n: isize,
    a: &[T],
    sa0: isize,
    sa1: isize,
    oa: usize,
    b: &mut [T],
    sb0: isize,
    sb1: isize,
    ob: usize,
) -> Result<()> {
    let (rows, cols) = checked_extents(m, n)?;
    let src = MatrixView::new(a, [rows, cols], [sa0, sa1], oa)?;
    let mut dst = MatrixViewMut::new(b, [rows, cols], [sb0, sb1], ob)?;
    copy_into(&mut dst, &src)
}

fn checked_extents(m: isize, n: isize) -> Result<(usize, usize)> {
    if m < 0 || n < 0 {
        return Err(CopyError::NegativeExtent { rows: m, cols: n });
    }
    Ok((m as usize, n as usize))
}

fn checked_leading_dim(layout: Layout, rows: usize, cols: usize, ld: isize) -> Result<usize> {
    let min = layout.min_leading_dim(rows, cols);
    if ld < min as isize {
        return Err(CopyError::BadLeadingDim { ld, min });
    }
    Ok(ld as usize)
}
