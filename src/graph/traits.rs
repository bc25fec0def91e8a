use std::fmt::Debug;
use num_traits::Zero;
use ordered_float::OrderedFloat;

/// Edge weight usable by the shortest path engines.
///
/// Weights must be totally ordered and have a zero. A path length that does
/// not fit in the type is reported as `None` by [`checked_sum`](Weight::checked_sum).
pub trait Weight: Copy + Ord + Debug + Zero {
    /// Adds two path lengths, `None` on overflow.
    fn checked_sum(self, rhs: Self) -> Option<Self>;

    /// Returns true if this value may be used as an edge weight.
    fn is_admissible(&self) -> bool {
        *self >= Self::zero()
    }
}

macro_rules! impl_integer_weight {
    ($($t:ty),*) => {
        $(
            impl Weight for $t {
                #[inline]
                fn checked_sum(self, rhs: Self) -> Option<Self> {
                    self.checked_add(rhs)
                }
            }
        )*
    };
}

impl_integer_weight!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

macro_rules! impl_float_weight {
    ($($t:ty),*) => {
        $(
            impl Weight for OrderedFloat<$t> {
                #[inline]
                fn checked_sum(self, rhs: Self) -> Option<Self> {
                    // Overflow goes to infinity, which still orders correctly
                    Some(self + rhs)
                }

                fn is_admissible(&self) -> bool {
                    !self.0.is_nan() && self.0 >= 0.0
                }
            }
        )*
    };
}

impl_float_weight!(f32, f64);

/// Trait representing a weighted directed graph with dense vertex indices
pub trait Graph<W>: Debug
where
    W: Weight,
{
    /// Returns the number of vertices in the graph
    fn vertex_count(&self) -> usize;

    /// Returns the number of edges in the graph
    fn edge_count(&self) -> usize;

    /// Returns the outgoing edges `(target, weight)` of a vertex in insertion order.
    /// Unknown vertices have no edges.
    fn neighbors(&self, vertex: usize) -> &[(usize, W)];

    /// Returns true if the vertex exists in the graph
    fn has_vertex(&self, vertex: usize) -> bool {
        vertex < self.vertex_count()
    }
}
