use crate::view::Axis;

/// Which view's access pattern dominates the loop-order choice when source
/// and destination disagree on their contiguous axis.
///
/// The kernel must iterate the same logical axis pair for both views, so
/// only one of them can get its preferred inner axis. The default favors
/// the destination: writes tend to dominate bandwidth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoopOrder {
    /// Weight destination strides 2x when scoring axes (default).
    #[default]
    FavorDestination,
    /// Weight source strides 2x.
    FavorSource,
}

impl LoopOrder {
    #[inline]
    fn weights(self) -> (usize, usize) {
        match self {
            LoopOrder::FavorDestination => (2, 1),
            LoopOrder::FavorSource => (1, 2),
        }
    }
}

/// Pick the axis for the innermost loop: the one with the smaller weighted
/// stride magnitude across both views. Axes with extent <= 1 never win the
/// inner slot, their stride is irrelevant to locality.
pub(crate) fn choose_inner_axis(
    dims: [usize; 2],
    dst_strides: [isize; 2],
    src_strides: [isize; 2],
    order: LoopOrder,
) -> Axis {
    if dims[0] <= 1 {
        return Axis::Cols;
    }
    if dims[1] <= 1 {
        return Axis::Rows;
    }

    let (dst_weight, src_weight) = order.weights();
    let score = |axis: usize| {
        dst_weight
            .saturating_mul(dst_strides[axis].unsigned_abs())
            .saturating_add(src_weight.saturating_mul(src_strides[axis].unsigned_abs()))
    };

    if score(0) < score(1) {
        Axis::Rows
    } else {
        Axis::Cols
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_agreeing_layouts() {
        // Both row-major: columns vary fastest.
        let axis = choose_inner_axis([4, 5], [5, 1], [5, 1], LoopOrder::FavorDestination);
        assert_eq!(axis, Axis::Cols);

        // Both column-major: rows vary fastest.
        let axis = choose_inner_axis([4, 5], [1, 4], [1, 4], LoopOrder::FavorDestination);
        assert_eq!(axis, Axis::Rows);
    }

    #[test]
    fn test_mixed_layouts_follow_policy() {
        // Destination row-major, source column-major.
        let dst = [5isize, 1];
        let src = [1isize, 4];

        let axis = choose_inner_axis([4, 5], dst, src, LoopOrder::FavorDestination);
        assert_eq!(axis, Axis::Cols);

        let axis = choose_inner_axis([4, 5], dst, src, LoopOrder::FavorSource);
        assert_eq!(axis, Axis::Rows);
    }

    #[test]
    fn test_negative_strides_score_by_magnitude() {
        let axis = choose_inner_axis([4, 5], [5, -1], [-5, 1], LoopOrder::FavorDestination);
        assert_eq!(axis, Axis::Cols);
    }

    #[test]
    fn test_degenerate_axis_never_inner() {
        // Single row: the column axis is the only real loop.
        let axis = choose_inner_axis([1, 5], [0, 7], [0, 7], LoopOrder::FavorDestination);
        assert_eq!(axis, Axis::Cols);

        // Single column.
        let axis = choose_inner_axis([5, 1], [1, 0], [1, 0], LoopOrder::FavorDestination);
        assert_eq!(axis, Axis::Rows);
    }
}
