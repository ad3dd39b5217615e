use crate::kernel::{build_plan, copy_lane, copy_loops, ensure_same_shape, CopyPlan};
use crate::order::LoopOrder;
use crate::view::{MatrixView, MatrixViewMut};
use crate::Result;
use bytemuck::Pod;

#[inline]
fn trace_enabled() -> bool {
    matches!(std::env::var("MATCOPY_TRACE"), Ok(ref v) if v == "1")
}

/// Copy every logical element of `src` into `dest`.
///
/// The iteration order is chosen from the stride magnitudes of both views
/// (destination favored, see [`LoopOrder`]) so the bandwidth-dominating view
/// is walked sequentially. Element values are copied verbatim, NaN and
/// infinities included.
///
/// # Errors
/// Returns [`CopyError::ShapeMismatch`](crate::CopyError::ShapeMismatch) if
/// the views disagree on `rows` or `cols`. Errors are raised before any
/// element is touched; there is no partial-copy state.
///
/// Empty views (either dimension zero) are a no-op: `dest`'s buffer is left
/// completely untouched.
pub fn copy_into<T: Clone>(dest: &mut MatrixViewMut<'_, T>, src: &MatrixView<'_, T>) -> Result<()> {
    copy_into_with_order(dest, src, LoopOrder::default())
}

/// [`copy_into`] with an explicit loop-order policy.
pub fn copy_into_with_order<T: Clone>(
    dest: &mut MatrixViewMut<'_, T>,
    src: &MatrixView<'_, T>,
    order: LoopOrder,
) -> Result<()> {
    ensure_same_shape(dest.dims(), src.dims())?;
    let plan = build_plan(dest.dims(), dest.strides(), src.strides(), order);

    match plan {
        CopyPlan::Empty => Ok(()),
        CopyPlan::Lane(lane) if lane.dst_step == 1 && lane.src_step == 1 => {
            if trace_enabled() {
                eprintln!(
                    "copy_into: contiguous fast path dims={:?} dst_strides={:?} src_strides={:?}",
                    dest.dims(),
                    dest.strides(),
                    src.strides()
                );
            }
            let src_lane = src.lane(lane.len);
            dest.lane_mut(lane.len).clone_from_slice(src_lane);
            Ok(())
        }
        CopyPlan::Lane(lane) => {
            if trace_enabled() {
                eprintln!(
                    "copy_into: fused lane len={} dst_step={} src_step={}",
                    lane.len, lane.dst_step, lane.src_step
                );
            }
            unsafe {
                copy_lane(
                    dest.as_mut_ptr(),
                    src.as_ptr(),
                    lane.len,
                    lane.dst_step,
                    lane.src_step,
                );
            }
            Ok(())
        }
        CopyPlan::Loops {
            inner_len,
            outer_len,
            dst: dst_steps,
            src: src_steps,
        } => {
            if trace_enabled() {
                eprintln!(
                    "copy_into: nested loops inner_len={} outer_len={} dst_strides={:?} src_strides={:?}",
                    inner_len,
                    outer_len,
                    dest.strides(),
                    src.strides()
                );
            }
            unsafe {
                copy_loops(
                    dest.as_mut_ptr(),
                    src.as_ptr(),
                    inner_len,
                    outer_len,
                    dst_steps,
                    src_steps,
                );
            }
            Ok(())
        }
    }
}

/// POD-specialized copy.
///
/// Same contract as [`copy_into`], for element types where bitwise copies
/// are valid. The jointly contiguous fast path runs as one byte-level
/// `copy_from_slice` instead of a per-element clone.
pub fn copy_into_pod<T: Pod>(dest: &mut MatrixViewMut<'_, T>, src: &MatrixView<'_, T>) -> Result<()> {
    copy_into_pod_with_order(dest, src, LoopOrder::default())
}

/// [`copy_into_pod`] with an explicit loop-order policy.
pub fn copy_into_pod_with_order<T: Pod>(
    dest: &mut MatrixViewMut<'_, T>,
    src: &MatrixView<'_, T>,
    order: LoopOrder,
) -> Result<()> {
    ensure_same_shape(dest.dims(), src.dims())?;
    let plan = build_plan(dest.dims(), dest.strides(), src.strides(), order);

    match plan {
        CopyPlan::Empty => Ok(()),
        CopyPlan::Lane(lane) if lane.dst_step == 1 && lane.src_step == 1 => {
            if trace_enabled() {
                eprintln!(
                    "copy_into_pod: contiguous memcpy dims={:?} dst_strides={:?} src_strides={:?}",
                    dest.dims(),
                    dest.strides(),
                    src.strides()
                );
            }
            let dst_bytes: &mut [u8] = bytemuck::cast_slice_mut(dest.lane_mut(lane.len));
            let src_bytes: &[u8] = bytemuck::cast_slice(src.lane(lane.len));
            dst_bytes.copy_from_slice(src_bytes);
            Ok(())
        }
        CopyPlan::Lane(lane) => {
            unsafe {
                copy_lane(
                    dest.as_mut_ptr(),
                    src.as_ptr(),
                    lane.len,
                    lane.dst_step,
                    lane.src_step,
                );
            }
            Ok(())
        }
        CopyPlan::Loops {
            inner_len,
            outer_len,
            dst: dst_steps,
            src: src_steps,
        } => {
            unsafe {
                copy_loops(
                    dest.as_mut_ptr(),
                    src.as_ptr(),
                    inner_len,
                    outer_len,
                    dst_steps,
                    src_steps,
                );
            }
            Ok(())
        }
    }
}
