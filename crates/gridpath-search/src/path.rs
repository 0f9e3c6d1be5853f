use crate::state::SearchState;

/// Walk the predecessor links back from `finish` and return the chain of
/// indices ordered from its root to `finish`.
///
/// After a search that settled `finish`, the chain starts at the start cell
/// and has `distance(finish) + 1` entries. If `finish` was never reached it
/// has no predecessor and the result is just `[finish]`.
pub fn reconstruct_path(state: &SearchState, finish: usize) -> Vec<usize> {
    let mut path = Vec::new();
    let mut cur = Some(finish);
    while let Some(i) = cur {
        path.push(i);
        // A chain longer than the table can only come from a cycle.
        if path.len() > state.len() {
            break;
        }
        cur = state.previous(i);
    }
    path.reverse();
    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::NodeState;

    fn chain(links: &[(usize, Option<usize>, i32)], len: usize) -> SearchState {
        let mut s = SearchState::new(len);
        for &(i, previous, distance) in links {
            s.nodes[i] = NodeState {
                distance,
                visited: true,
                previous,
            };
        }
        s
    }

    #[test]
    fn follows_links_to_root() {
        let s = chain(&[(0, None, 0), (1, Some(0), 1), (4, Some(1), 2), (5, Some(4), 3)], 6);
        assert_eq!(reconstruct_path(&s, 5), vec![0, 1, 4, 5]);
        assert_eq!(reconstruct_path(&s, 5).len() as i32, s.distance(5) + 1);
    }

    #[test]
    fn unreached_finish_is_single_cell() {
        let s = SearchState::new(4);
        assert_eq!(reconstruct_path(&s, 3), vec![3]);
    }

    #[test]
    fn cyclic_table_terminates() {
        let mut s = SearchState::new(2);
        s.nodes[0].previous = Some(1);
        s.nodes[1].previous = Some(0);
        assert_eq!(reconstruct_path(&s, 0).len(), 3);
    }
}
