//! Directed reachability over the flow's edge list.

use std::collections::{HashMap, HashSet};

use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::Bfs;

use crate::flow::FlowEdge;

/// Compute every node id reachable from any of `start_ids` by following
/// edges in the source→target direction.
///
/// The traversal only knows ids, not the authoritative node set: an edge
/// endpoint that names no real node is still followed, so the returned set
/// can contain ids outside the flow's node list. Callers cross-check against
/// the nodes they actually hold. Cycles terminate via BFS visited marking;
/// an empty start set yields an empty result.
pub fn reachable_from<'a, I>(start_ids: I, edges: &'a [FlowEdge]) -> HashSet<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut graph: DiGraph<&'a str, ()> = DiGraph::new();
    let mut indices: HashMap<&'a str, NodeIndex> = HashMap::new();

    let mut index_of = |graph: &mut DiGraph<&'a str, ()>, id: &'a str| {
        *indices.entry(id).or_insert_with(|| graph.add_node(id))
    };

    let mut start_indices = Vec::new();
    for id in start_ids {
        start_indices.push(index_of(&mut graph, id));
    }
    for edge in edges {
        let s = index_of(&mut graph, &edge.source);
        let t = index_of(&mut graph, &edge.target);
        graph.add_edge(s, t, ());
    }

    let mut reachable = HashSet::new();
    for start in start_indices {
        if reachable.contains(graph[start]) {
            continue;
        }
        let mut bfs = Bfs::new(&graph, start);
        while let Some(nx) = bfs.next(&graph) {
            reachable.insert(graph[nx].to_string());
        }
    }

    reachable
}
