//! Layout-agnostic strided copy kernels for 2-D matrix views.
//!
//! This crate generalizes the classical LAPACK matrix-copy routine (`?lacpy`,
//! historically restricted to a single column-major leading dimension) into a
//! single data-driven kernel over strided views: arbitrary signed element
//! strides, arbitrary base offsets, and non-contiguous sub-matrix views on
//! both sides of the copy. Row-major and column-major are not separate code
//! paths; they fall out of which axis carries the unit-magnitude stride.
//!
//! # Core Types
//!
//! - [`MatrixView`] / [`MatrixViewMut`]: zero-copy strided views over existing
//!   data
//! - [`LoopOrder`]: which view's access pattern dominates the iteration-order
//!   choice
//!
//! # Primary API
//!
//! - [`copy_into`]: copy one view into another, iteration order chosen from
//!   stride magnitudes
//! - [`copy_into_pod`]: bitwise-copy specialization for [`bytemuck::Pod`]
//!   element types
//! - [`lacpy`]: leading-dimension convenience entry in the style of the
//!   historical routine
//! - [`lacpy_strided`]: flat-argument entry taking raw shape/stride/offset
//!   metadata
//!
//! # Example
//!
//! ```rust
//! use matcopy_rs::{copy_into, MatrixView, MatrixViewMut};
//!
//! // Row-major 3x2 source [[1,2],[3,4],[5,6]].
//! let a = vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
//! let mut b = vec![0.0; 6];
//!
//! let src: MatrixView<'_, f64> = MatrixView::new(&a, [3, 2], [2, 1], 0).unwrap();
//! // Column-major destination over the same logical shape.
//! let mut dst: MatrixViewMut<'_, f64> = MatrixViewMut::new(&mut b, [3, 2], [1, 3], 0).unwrap();
//!
//! copy_into(&mut dst, &src).unwrap();
//! assert_eq!(b, vec![1.0, 3.0, 5.0, 2.0, 4.0, 6.0]);
//! ```
//!
//! # Cache behavior
//!
//! The kernel assigns the axis with the smallest weighted stride magnitude to
//! the innermost loop, so whichever view dominates bandwidth is walked
//! sequentially. When source and destination disagree on their contiguous
//! axis, the destination wins by default ([`LoopOrder::FavorDestination`])
//! since writes tend to be the bottleneck; see [`copy_into_with_order`] to
//! override. Jointly contiguous views collapse to a single slice copy, and
//! jointly fusible views collapse to one flat strided lane.

mod fuse;
mod kernel;
mod lacpy;
mod ops;
mod order;
pub mod view;

pub use lacpy::{lacpy, lacpy_strided, Layout};
pub use ops::{copy_into, copy_into_pod, copy_into_pod_with_order, copy_into_with_order};
pub use order::LoopOrder;
pub use view::{Axis, MatrixView, MatrixViewMut};

/// Errors that can occur while building matrix views or copying between them.
#[derive(Debug, thiserror::Error)]
pub enum CopyError {
    /// Source and destination views disagree on their dimensions.
    #[error("shape mismatch: {0:?} vs {1:?}")]
    ShapeMismatch([usize; 2], [usize; 2]),

    /// Zero stride on an axis with more than one element would alias
    /// distinct logical elements onto one address.
    #[error("invalid stride 0 for axis {axis:?}")]
    ZeroStride { axis: Axis },

    /// Negative extent supplied through a signed-extent entry point.
    #[error("negative extent: rows={rows}, cols={cols}")]
    NegativeExtent { rows: isize, cols: isize },

    /// A reachable element index falls outside the backing buffer.
    #[error("offset overflow while computing element index")]
    OffsetOverflow,

    /// Leading dimension smaller than the extent it has to span.
    #[error("leading dimension {ld} below minimum {min}")]
    BadLeadingDim { ld: isize, min: usize },
}

/// Result type for matrix copy operations.
pub type Result<T> = std::result::Result<T, CopyError>;
