/// Sentinel distance meaning "not reached".
pub const UNREACHABLE: i32 = i32::MAX;

/// Search bookkeeping for one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NodeState {
    /// Best known number of steps from the start, or [`UNREACHABLE`].
    pub distance: i32,
    /// Whether the cell has been settled.
    pub visited: bool,
    /// Row-major index of the cell this distance was reached from.
    pub previous: Option<usize>,
}

impl Default for NodeState {
    fn default() -> Self {
        Self {
            distance: UNREACHABLE,
            visited: false,
            previous: None,
        }
    }
}

// ---------------------------------------------------------------------------
// SearchState
// ---------------------------------------------------------------------------

/// Per-search state table, indexed by row-major cell index.
///
/// Every search starts from a fresh table, so nothing carries over from a
/// previous search on the same grid. Predecessors are stored as indices into
/// the same table.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchState {
    pub(crate) nodes: Vec<NodeState>,
}

impl SearchState {
    /// A table of `len` unreached, unvisited nodes.
    pub fn new(len: usize) -> Self {
        Self {
            nodes: vec![NodeState::default(); len],
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// All nodes in row-major order.
    #[inline]
    pub fn nodes(&self) -> &[NodeState] {
        &self.nodes
    }

    #[inline]
    pub fn node(&self, idx: usize) -> Option<&NodeState> {
        self.nodes.get(idx)
    }

    /// Distance of node `idx`; [`UNREACHABLE`] if out of range.
    #[inline]
    pub fn distance(&self, idx: usize) -> i32 {
        self.nodes.get(idx).map_or(UNREACHABLE, |n| n.distance)
    }

    #[inline]
    pub fn is_visited(&self, idx: usize) -> bool {
        self.nodes.get(idx).is_some_and(|n| n.visited)
    }

    #[inline]
    pub fn previous(&self, idx: usize) -> Option<usize> {
        self.nodes.get(idx).and_then(|n| n.previous)
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn state_round_trip() {
        let mut s = SearchState::new(3);
        s.nodes[0] = NodeState {
            distance: 0,
            visited: true,
            previous: None,
        };
        s.nodes[1] = NodeState {
            distance: 1,
            visited: false,
            previous: Some(0),
        };
        let json = serde_json::to_string(&s).unwrap();
        let back: SearchState = serde_json::from_str(&json).unwrap();
        assert_eq!(s, back);
    }
}
