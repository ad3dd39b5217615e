//! Copy-plan construction and the pointer-walk loops.
//!
//! A plan reduces the two views to the cheapest iteration shape before any
//! element is touched: nothing at all for empty views, one flat lane when
//! the axes fuse, or two nested loops with per-view inner/outer pointer
//! increments. The outer increments are pre-rebased, `stride_slow -
//! extent_fast * stride_fast`, so the running offsets advance without
//! re-deriving positions from loop indices.

use crate::fuse::{fuse_lanes, Lane};
use crate::order::{choose_inner_axis, LoopOrder};
use crate::view::Axis;
use crate::{CopyError, Result};

/// Per-view pointer increments for the nested-loop walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct AxisSteps {
    /// Increment per inner-loop element.
    pub(crate) inner: isize,
    /// Increment after an inner sweep, already rebased to the start of the
    /// next lane.
    pub(crate) outer: isize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CopyPlan {
    /// Nothing to do: one of the dimensions is zero.
    Empty,
    /// The whole iteration is a single strided lane.
    Lane(Lane),
    /// Two nested loops, inner axis chosen by stride magnitude.
    Loops {
        inner_len: usize,
        outer_len: usize,
        dst: AxisSteps,
        src: AxisSteps,
    },
}

pub(crate) fn build_plan(
    dims: [usize; 2],
    dst_strides: [isize; 2],
    src_strides: [isize; 2],
    order: LoopOrder,
) -> CopyPlan {
    if dims[0] == 0 || dims[1] == 0 {
        return CopyPlan::Empty;
    }

    let inner = choose_inner_axis(dims, dst_strides, src_strides, order);
    if let Some(lane) = fuse_lanes(dims, dst_strides, src_strides, inner) {
        return CopyPlan::Lane(lane);
    }

    let outer = inner.other();
    let (i, o) = (inner.index(), outer.index());
    let inner_len = dims[i];
    let outer_len = dims[o];
    let rebase = |strides: [isize; 2]| AxisSteps {
        inner: strides[i],
        outer: strides[o] - inner_len as isize * strides[i],
    };

    CopyPlan::Loops {
        inner_len,
        outer_len,
        dst: rebase(dst_strides),
        src: rebase(src_strides),
    }
}

/// Walk one strided lane, copying element by element.
///
/// Offsets are tracked as integers and turned into pointers only at access
/// time, so the running position may pass outside the buffers between
/// elements without ever materializing an out-of-bounds pointer.
///
/// # Safety
/// Every index `k*dst_step` into `dst` and `k*src_step` into `src` for
/// `k < len` must be valid for the respective access, and the two regions
/// must not overlap. View construction guarantees this for plans built from
/// validated views over distinct buffers.
pub(crate) unsafe fn copy_lane<T: Clone>(
    dst: *mut T,
    src: *const T,
    len: usize,
    dst_step: isize,
    src_step: isize,
) {
    let mut ib = 0isize;
    let mut ia = 0isize;
    for _ in 0..len {
        *dst.offset(ib) = (*src.offset(ia)).clone();
        ib += dst_step;
        ia += src_step;
    }
}

/// Walk both offsets in lock-step across the two nested loops.
///
/// # Safety
/// Same contract as [`copy_lane`], over every index the plan reaches.
pub(crate) unsafe fn copy_loops<T: Clone>(
    dst: *mut T,
    src: *const T,
    inner_len: usize,
    outer_len: usize,
    dst_steps: AxisSteps,
    src_steps: AxisSteps,
) {
    let mut ib = 0isize;
    let mut ia = 0isize;
    for _ in 0..outer_len {
        for _ in 0..inner_len {
            *dst.offset(ib) = (*src.offset(ia)).clone();
            ib += dst_steps.inner;
            ia += src_steps.inner;
        }
        ib += dst_steps.outer;
        ia += src_steps.outer;
    }
}

pub(crate) fn ensure_same_shape(a: [usize; 2], b: [usize; 2]) -> Result<()> {
    if a != b {
        return Err(CopyError::ShapeMismatch(a, b));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plan_empty() {
        let plan = build_plan([0, 5], [5, 1], [5, 1], LoopOrder::default());
        assert_eq!(plan, CopyPlan::Empty);
    }

    #[test]
    fn test_plan_contiguous_fuses() {
        let plan = build_plan([3, 4], [4, 1], [4, 1], LoopOrder::default());
        assert_eq!(
            plan,
            CopyPlan::Lane(Lane {
                len: 12,
                dst_step: 1,
                src_step: 1
            })
        );
    }

    #[test]
    fn test_plan_mixed_layout_loops() {
        // Destination row-major, source column-major: inner loop follows
        // the destination's unit-stride axis, source pays the price.
        let plan = build_plan([3, 4], [4, 1], [1, 3], LoopOrder::FavorDestination);
        assert_eq!(
            plan,
            CopyPlan::Loops {
                inner_len: 4,
                outer_len: 3,
                dst: AxisSteps { inner: 1, outer: 0 },
                src: AxisSteps {
                    inner: 3,
                    outer: -11
                },
            }
        );
    }

    #[test]
    fn test_plan_rebase_with_padding() {
        // 3x3 window inside 5-wide rows: after a 3-element sweep the
        // pointer advances by the 2 padding elements.
        let plan = build_plan([3, 3], [5, 1], [5, 1], LoopOrder::default());
        assert_eq!(
            plan,
            CopyPlan::Loops {
                inner_len: 3,
                outer_len: 3,
                dst: AxisSteps { inner: 1, outer: 2 },
                src: AxisSteps { inner: 1, outer: 2 },
            }
        );
    }

    #[test]
    fn test_copy_loops_walks_every_element_once() {
        // 2x3 row-major source into a 2x3 column-major destination.
        let src_buf = vec![1, 2, 3, 4, 5, 6];
        let mut dst_buf = vec![0; 6];
        let plan = build_plan([2, 3], [1, 2], [3, 1], LoopOrder::default());
        match plan {
            CopyPlan::Loops {
                inner_len,
                outer_len,
                dst,
                src,
            } => unsafe {
                copy_loops(
                    dst_buf.as_mut_ptr(),
                    src_buf.as_ptr(),
                    inner_len,
                    outer_len,
                    dst,
                    src,
                );
            },
            other => panic!("expected nested loops, got {other:?}"),
        }
        assert_eq!(dst_buf, vec![1, 4, 2, 5, 3, 6]);
    }
}
