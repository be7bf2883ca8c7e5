use std::fmt;

use bitvec::prelude::*;
use bitvec::slice::IterOnes;

use super::EdgeStore;

/// Edge store that keeps a dense `n × n` adjacency matrix.
///
/// Membership checks are `O(1)`. Iterating over the neighbours of a vertex
/// scans its whole row.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AdjacencyMatrix {
    vertex_count: usize,
    /// Row-major bits, `(u, v)` lives at `u * vertex_count + v`.
    bits: BitVec,
}

impl AdjacencyMatrix {
    /// The row of `vertex` in the adjacency matrix.
    #[inline]
    pub fn row(&self, vertex: usize) -> &BitSlice {
        let start = vertex * self.vertex_count;
        &self.bits[start..start + self.vertex_count]
    }

    #[inline]
    fn cell(&self, u: usize, v: usize) -> usize {
        debug_assert!(u < self.vertex_count && v < self.vertex_count);
        u * self.vertex_count + v
    }
}

impl EdgeStore for AdjacencyMatrix {
    type Neighbours<'a> = IterOnes<'a, usize, Lsb0>;

    fn try_with_vertices(vertex_count: usize) -> Option<Self> {
        let cells = vertex_count
            .checked_mul(vertex_count)
            .filter(|&cells| cells <= BitSlice::<usize, Lsb0>::MAX_BITS)?;

        Some(Self {
            vertex_count,
            bits: bitvec![0; cells],
        })
    }

    #[inline]
    fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    fn insert(&mut self, u: usize, v: usize) -> bool {
        let (uv, vu) = (self.cell(u, v), self.cell(v, u));
        if self.bits[uv] {
            return false;
        }
        self.bits.set(uv, true);
        self.bits.set(vu, true);
        true
    }

    fn remove(&mut self, u: usize, v: usize) -> bool {
        let (uv, vu) = (self.cell(u, v), self.cell(v, u));
        if !self.bits[uv] {
            return false;
        }
        self.bits.set(uv, false);
        self.bits.set(vu, false);
        true
    }

    #[inline]
    fn contains(&self, u: usize, v: usize) -> bool {
        self.bits[self.cell(u, v)]
    }

    #[inline]
    fn degree(&self, vertex: usize) -> usize {
        self.row(vertex).count_ones()
    }

    #[inline]
    fn neighbours(&self, vertex: usize) -> Self::Neighbours<'_> {
        self.row(vertex).iter_ones()
    }

    fn fmt_row(&self, vertex: usize, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for bit in self.row(vertex).iter().by_vals() {
            write!(f, " {}", u8::from(bit))?;
        }
        Ok(())
    }

    #[inline]
    fn has_edges(&self) -> bool {
        self.bits.any()
    }

    #[inline]
    fn edge_count(&self) -> usize {
        self.bits.count_ones() / 2
    }
}
