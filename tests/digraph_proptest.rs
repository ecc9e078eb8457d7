use digraph::{Digraph, UNREACHABLE};
use petgraph::algo::dijkstra;
use petgraph::graphmap::DiGraphMap;
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Operation {
    AddVertex(u8),
    AddEdge(u8, u8),
    RemoveVertex(u8),
    RemoveEdge(u8, u8),
}

fn operation() -> impl Strategy<Value = Operation> {
    prop_oneof![
        (0u8..12).prop_map(Operation::AddVertex),
        (0u8..12, 0u8..12).prop_map(|(a, b)| Operation::AddEdge(a, b)),
        (0u8..12).prop_map(Operation::RemoveVertex),
        (0u8..12, 0u8..12).prop_map(|(a, b)| Operation::RemoveEdge(a, b)),
    ]
}

/// Insertion-ordered reference model: one `(vertex, successors)` entry per vertex.
#[derive(Default)]
struct Model {
    rows: Vec<(u8, Vec<u8>)>,
}

impl Model {
    fn row(&mut self, v: u8) -> &mut Vec<u8> {
        let i = match self.rows.iter().position(|(x, _)| *x == v) {
            Some(i) => i,
            None => {
                self.rows.push((v, Vec::new()));
                self.rows.len() - 1
            }
        };
        &mut self.rows[i].1
    }

    fn apply(&mut self, op: &Operation) {
        match *op {
            Operation::AddVertex(v) => {
                self.row(v);
            }
            Operation::AddEdge(a, b) => {
                self.row(a);
                self.row(b);
                let row = self.row(a);
                if !row.contains(&b) {
                    row.push(b);
                }
            }
            Operation::RemoveVertex(v) => {
                self.rows.retain(|(x, _)| *x != v);
                for (_, row) in &mut self.rows {
                    row.retain(|&t| t != v);
                }
            }
            Operation::RemoveEdge(a, b) => {
                if let Some((_, row)) = self.rows.iter_mut().find(|(x, _)| *x == a) {
                    row.retain(|&t| t != b);
                }
            }
        }
    }
}

fn build(ops: &[Operation]) -> Digraph<u8> {
    let mut g = Digraph::new();
    for op in ops {
        match *op {
            Operation::AddVertex(v) => {
                g.add_vertex(v);
            }
            Operation::AddEdge(a, b) => {
                g.add_edge(a, b);
            }
            Operation::RemoveVertex(v) => {
                g.remove_vertex(&v);
            }
            Operation::RemoveEdge(a, b) => {
                g.remove_edge(&a, &b);
            }
        }
    }
    g
}

proptest! {
    #[test]
    fn test_store_matches_model(ops in proptest::collection::vec(operation(), 1..80)) {
        let g = build(&ops);
        let mut model = Model::default();
        for op in &ops {
            model.apply(op);
        }

        prop_assert_eq!(g.vertex_count(), model.rows.len());
        prop_assert_eq!(g.edge_count(), model.rows.iter().map(|(_, r)| r.len()).sum::<usize>());
        prop_assert_eq!(g.is_empty(), model.rows.is_empty());

        let order: Vec<u8> = g.vertices().copied().collect();
        let expected: Vec<u8> = model.rows.iter().map(|(v, _)| *v).collect();
        prop_assert_eq!(order, expected);

        for (v, row) in &model.rows {
            let adj: Vec<u8> = g.adjacent_to(v).copied().collect();
            prop_assert_eq!(&adj, row);
            prop_assert_eq!(g.degree(v), Ok(row.len()));
        }
    }

    #[test]
    fn test_distances_match_petgraph(ops in proptest::collection::vec(operation(), 1..80)) {
        let g = build(&ops);

        let mut oracle = DiGraphMap::<u8, ()>::new();
        for v in g.vertices() {
            oracle.add_node(*v);
        }
        for (a, b) in g.edges() {
            oracle.add_edge(*a, *b, ());
        }

        for &a in g.vertices() {
            let dist = dijkstra(&oracle, a, None, |_| 1usize);
            for &b in g.vertices() {
                let expected = dist.get(&b).copied();
                prop_assert_eq!(g.shortest_distance(&a, &b), expected);
                prop_assert_eq!(g.path_length(&a, &b), expected.unwrap_or(UNREACHABLE));
                prop_assert_eq!(g.has_path(&a, &b), expected.is_some());

                let path = g.get_path(&a, &b);
                match expected {
                    None => prop_assert!(path.is_empty()),
                    Some(0) => prop_assert_eq!(path, vec![&a, &a]),
                    Some(d) => {
                        prop_assert_eq!(path.len(), d + 1);
                        prop_assert_eq!(*path[0], a);
                        prop_assert_eq!(*path[d], b);
                        for pair in path.windows(2) {
                            prop_assert!(g.has_edge(pair[0], pair[1]));
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn test_replay_is_equal(ops in proptest::collection::vec(operation(), 1..80)) {
        let g = build(&ops);

        let mut forward = Digraph::new();
        for v in g.vertices() {
            forward.add_vertex(*v);
        }
        forward.extend(g.edges().map(|(a, b)| (*a, *b)));
        prop_assert!(g == forward);
        prop_assert_eq!(g.to_string(), forward.to_string());

        // Reversed insertion history: same structure, different order.
        let mut reversed = Digraph::new();
        let edges: Vec<(u8, u8)> = g.edges().map(|(a, b)| (*a, *b)).collect();
        for &(a, b) in edges.iter().rev() {
            reversed.add_edge(a, b);
        }
        for v in g.vertices().rev() {
            reversed.add_vertex(*v);
        }
        prop_assert!(g == reversed);
        prop_assert!(g.vertices_consistent_with(&reversed));
    }
}
