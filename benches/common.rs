#![allow(dead_code)]

use fastrand::Rng;
use sgl::core::LabelGraph;

pub const RANDOM_SEED: u64 = 0xef6f79ed30ba75a;

/// Generates pairs `(v, w)` with `w < v < vertex_bound`, each with
/// probability `p`, in increasing order.
pub struct RandomEdges {
    v: usize,
    w: usize,
    n: usize,
    p: f32,
}

impl RandomEdges {
    pub fn new(vertex_bound: usize, p: f32) -> Self {
        Self {
            v: 1,
            w: usize::MAX,
            n: vertex_bound,
            p,
        }
    }

    pub fn next_edge(&mut self, rng: &mut Rng) -> Option<(usize, usize)> {
        let Self { v, w, .. } = self;
        let n = self.n;
        let p = self.p;

        if *v >= n {
            return None;
        }

        let r = rng.f32();
        *w = w.wrapping_add(1) + ((1.0 - r).log10() / (1.0 - p).log10()).floor() as usize;

        while *w >= *v && *v < n {
            *w -= *v;
            *v += 1;
        }

        if *v < n { Some((*v, *w)) } else { None }
    }
}

pub fn random_graph<G: LabelGraph<usize>>(
    mut graph: G,
    vertex_count: usize,
    density: f32,
    rng: &mut Rng,
) -> G {
    for v in 0..vertex_count {
        graph.add_vertex(v).unwrap();
    }

    let mut edges = RandomEdges::new(vertex_count, density);

    while let Some((u, v)) = edges.next_edge(rng) {
        if rng.bool() {
            graph.add_edge(&u, &v).unwrap();
        } else {
            graph.add_edge(&v, &u).unwrap();
        }
    }

    graph
}
