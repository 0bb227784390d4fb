use std::fmt::Debug;

use proptest::{
    arbitrary::any,
    collection::vec,
    strategy::Strategy,
};

use crate::core::LabelGraph;

/// Vertices and edges of a random graph, independent of the engine. Build it
/// into a concrete graph with [`build`](GraphRecipe::build).
#[derive(Debug, Clone)]
pub struct GraphRecipe<T> {
    vertices: Vec<T>,
    edges: Vec<(T, T)>,
}

impl<T: PartialEq + Clone> GraphRecipe<T> {
    fn new(labels: Vec<T>, edges: Vec<(usize, usize)>) -> Self {
        let mut vertices = Vec::with_capacity(labels.len());
        for label in labels {
            if !vertices.contains(&label) {
                vertices.push(label);
            }
        }

        let edges = if vertices.is_empty() {
            Vec::new()
        } else {
            let n = vertices.len();
            edges
                .into_iter()
                .map(|(src, dst)| (vertices[src % n].clone(), vertices[dst % n].clone()))
                .collect()
        };

        Self { vertices, edges }
    }

    pub fn vertices(&self) -> &[T] {
        &self.vertices
    }

    /// Inserts the vertices and then the edges into given graph. Repeated
    /// edges are skipped.
    pub fn build<G: LabelGraph<T>>(&self, graph: G) -> G {
        self.build_from(graph, self.vertices.iter(), self.edges.iter())
    }

    /// Like [`build`](GraphRecipe::build), but inserts vertices and edges in
    /// the reverse order.
    pub fn build_reversed<G: LabelGraph<T>>(&self, graph: G) -> G {
        self.build_from(graph, self.vertices.iter().rev(), self.edges.iter().rev())
    }

    fn build_from<'a, G, V, E>(&self, mut graph: G, vertices: V, edges: E) -> G
    where
        T: 'a,
        G: LabelGraph<T>,
        V: Iterator<Item = &'a T>,
        E: Iterator<Item = &'a (T, T)>,
    {
        for vertex in vertices {
            let _ = graph.add_vertex(vertex.clone());
        }

        for (src, dst) in edges {
            let _ = graph.add_edge(src, dst);
        }

        graph
    }
}

/// Strategy for random graph recipes with at most `max_vertices` vertices
/// and `max_edges` edge insertions.
pub fn graph_recipe<S>(
    vertex: S,
    max_vertices: usize,
    max_edges: usize,
) -> impl Strategy<Value = GraphRecipe<S::Value>>
where
    S: Strategy,
    S::Value: PartialEq + Clone + Debug,
{
    (
        vec(vertex, 0..=max_vertices),
        vec((any::<usize>(), any::<usize>()), 0..=max_edges),
    )
        .prop_map(|(vertices, edges)| GraphRecipe::new(vertices, edges))
}

/// Strategy for a graph built from a random recipe into the graph returned
/// by `create`.
pub fn graph_strategy<S, G>(vertex: S, create: fn() -> G) -> impl Strategy<Value = G>
where
    S: Strategy,
    S::Value: PartialEq + Clone + Debug,
    G: LabelGraph<S::Value> + Debug,
{
    graph_recipe(vertex, 32, 128).prop_map(move |recipe| recipe.build(create()))
}
