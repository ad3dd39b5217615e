//! Axis fusion: collapsing a 2-D iteration into a single strided lane.
//!
//! Two axes fuse when the outer axis continues the inner axis's sweep in
//! memory, `stride[outer] == extent[inner] * stride[inner]`, for *both*
//! views at once. A fused copy runs as one flat lane, and a fused lane with
//! unit steps on both sides degrades further into a plain slice copy.

use crate::view::Axis;

/// A single flat lane equivalent to the full 2-D iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Lane {
    pub(crate) len: usize,
    pub(crate) dst_step: isize,
    pub(crate) src_step: isize,
}

/// Try to collapse the 2-D iteration over `dims` into one lane, given the
/// chosen inner axis. Covers the degenerate single-row/single-column shapes
/// as well as genuinely fusible stride pairs.
///
/// Returns `None` when two nested loops are required. Callers are expected
/// to have handled empty shapes already.
pub(crate) fn fuse_lanes(
    dims: [usize; 2],
    dst_strides: [isize; 2],
    src_strides: [isize; 2],
    inner: Axis,
) -> Option<Lane> {
    let outer = inner.other();
    let (i, o) = (inner.index(), outer.index());

    if dims[o] == 1 {
        return Some(Lane {
            len: dims[i],
            dst_step: dst_strides[i],
            src_step: src_strides[i],
        });
    }
    if dims[i] == 1 {
        return Some(Lane {
            len: dims[o],
            dst_step: dst_strides[o],
            src_step: src_strides[o],
        });
    }

    let extent = dims[i] as isize;
    if dst_strides[o] == extent * dst_strides[i] && src_strides[o] == extent * src_strides[i] {
        return Some(Lane {
            len: dims[0] * dims[1],
            dst_step: dst_strides[i],
            src_step: src_strides[i],
        });
    }

    None
}
