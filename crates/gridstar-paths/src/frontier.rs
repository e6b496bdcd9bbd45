use std::collections::BinaryHeap;

use gridstar_core::Position;

// ---------------------------------------------------------------------------
// Search tree
// ---------------------------------------------------------------------------

/// A search-tree node. Lives in a [`Tree`] arena and points at its parent
/// by index.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Node {
    pub(crate) pos: Position,
    /// Flat grid index of `pos`.
    pub(crate) cell: usize,
    pub(crate) parent: Option<usize>,
    pub(crate) g: u64,
    pub(crate) h: u64,
}

impl Node {
    #[inline]
    pub(crate) fn f(&self) -> u64 {
        self.g.saturating_add(self.h)
    }
}

/// Arena of every node created during one search. Parent links only ever
/// point at lower indices, so they cannot form a cycle.
#[derive(Default)]
pub(crate) struct Tree {
    nodes: Vec<Node>,
}

impl Tree {
    /// Append a node and return its index.
    pub(crate) fn push(&mut self, node: Node) -> usize {
        debug_assert!(node.parent.is_none_or(|p| p < self.nodes.len()));
        self.nodes.push(node);
        self.nodes.len() - 1
    }

    #[inline]
    pub(crate) fn get(&self, idx: usize) -> &Node {
        &self.nodes[idx]
    }

    pub(crate) fn len(&self) -> usize {
        self.nodes.len()
    }

    #[cfg(test)]
    pub(crate) fn iter(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter()
    }

    /// Walk parent links from `idx` back to the root and return the
    /// positions in root-first order.
    pub(crate) fn path_to(&self, idx: usize) -> Vec<Position> {
        let mut path = Vec::new();
        let mut cur = Some(idx);
        while let Some(i) = cur {
            let n = &self.nodes[i];
            path.push(n.pos);
            cur = n.parent;
        }
        path.reverse();
        path
    }
}

// ---------------------------------------------------------------------------
// Frontier
// ---------------------------------------------------------------------------

/// Reference into the tree, ordered by `f` then by insertion order for use
/// in `BinaryHeap`.
///
/// Tree indices are handed out in insertion order, so `idx` doubles as the
/// insertion sequence number.
#[derive(Clone, Copy, Eq, PartialEq, Debug)]
pub(crate) struct NodeRef {
    pub(crate) idx: usize,
    pub(crate) f: u64,
}

impl Ord for NodeRef {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest (f, idx) first.
        other.f.cmp(&self.f).then_with(|| other.idx.cmp(&self.idx))
    }
}

impl PartialOrd for NodeRef {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// The open set: a priority queue of tree nodes plus, per grid cell, the
/// lowest `g` ever queued there.
pub(crate) struct Frontier {
    open: BinaryHeap<NodeRef>,
    best_g: Vec<u64>,
    peak: usize,
}

impl Frontier {
    pub(crate) fn new(cells: usize) -> Self {
        Self {
            open: BinaryHeap::new(),
            best_g: vec![u64::MAX; cells],
            peak: 0,
        }
    }

    /// Queue tree node `idx`.
    pub(crate) fn push(&mut self, idx: usize, node: &Node) {
        let best = &mut self.best_g[node.cell];
        *best = (*best).min(node.g);
        self.open.push(NodeRef { idx, f: node.f() });
        self.peak = self.peak.max(self.open.len());
    }

    /// Pop the entry with the lowest `f`, earliest inserted on ties.
    #[inline]
    pub(crate) fn pop(&mut self) -> Option<usize> {
        self.open.pop().map(|r| r.idx)
    }

    /// Lowest `g` queued for `cell`, if any.
    ///
    /// Not lowered again once entries are popped; callers only consult it
    /// for cells that have never been expanded, whose entries are all
    /// still queued.
    #[inline]
    pub(crate) fn best_g(&self, cell: usize) -> Option<u64> {
        let g = self.best_g[cell];
        (g != u64::MAX).then_some(g)
    }

    pub(crate) fn len(&self) -> usize {
        self.open.len()
    }

    pub(crate) fn peak(&self) -> usize {
        self.peak
    }

    #[cfg(test)]
    pub(crate) fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.open.iter().map(|r| r.idx)
    }
}
