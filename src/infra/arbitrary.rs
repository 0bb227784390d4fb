use std::fmt;

use arbitrary::{Arbitrary, Unstructured};

use crate::core::{Error, LabelGraph, Result};

/// Position of a vertex in the current vertex list of a graph, taken modulo
/// its length.
#[derive(Debug, Arbitrary, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Index(pub usize);

impl Index {
    pub fn get(&self, m: usize) -> Option<usize> {
        if m > 0 {
            Some(self.0 % m)
        } else {
            None
        }
    }

    pub fn map(self, m: usize) -> Option<Index> {
        self.get(m).map(Index)
    }

    fn resolve<T: Clone>(&self, vertices: &[T]) -> Result<T> {
        self.get(vertices.len())
            .map(|i| vertices[i].clone())
            .ok_or(Error::VertexNotFound)
    }
}

#[derive(Debug, Arbitrary, Clone)]
pub enum MutOp<T> {
    AddVertex(T),
    DeleteVertex(Index),
    DeleteVertexLabel(T),
    Clear,
    AddEdge(Index, Index),
    DeleteEdge(Index, Index),
    ClearEdges,
}

impl<T: PartialEq + Clone> MutOp<T> {
    /// Applies the operation and returns its outcome. Operations on an empty
    /// graph that address a vertex by index fail with
    /// [`VertexNotFound`](Error::VertexNotFound).
    pub fn apply<G: LabelGraph<T> + ?Sized>(self, graph: &mut G) -> Result<()> {
        let vertices = graph.vertices();

        match self {
            MutOp::AddVertex(label) => graph.add_vertex(label),
            MutOp::DeleteVertex(index) => graph.delete_vertex(&index.resolve(&vertices)?),
            MutOp::DeleteVertexLabel(label) => graph.delete_vertex(&label),
            MutOp::Clear => {
                graph.clear();
                Ok(())
            }
            MutOp::AddEdge(src, dst) => {
                graph.add_edge(&src.resolve(&vertices)?, &dst.resolve(&vertices)?)
            }
            MutOp::DeleteEdge(src, dst) => {
                graph.delete_edge(&src.resolve(&vertices)?, &dst.resolve(&vertices)?)
            }
            MutOp::ClearEdges => {
                graph.clear_edges();
                Ok(())
            }
        }
    }
}

pub struct MutOpsSeq<T>(pub Vec<MutOp<T>>);

impl<T> IntoIterator for MutOpsSeq<T> {
    type Item = MutOp<T>;
    type IntoIter = std::vec::IntoIter<MutOp<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<T> MutOpsSeq<T> {
    /// Applies the operations and prints them as a sequence of calls, so that
    /// a failing fuzz input can be turned into a test.
    pub fn replay<G>(self, graph: &mut G)
    where
        T: PartialEq + Clone + fmt::Debug,
        G: LabelGraph<T> + ?Sized,
    {
        println!("let mut graph;");
        println!();

        for op in self {
            let vertices = graph.vertices();

            match &op {
                MutOp::AddVertex(label) => println!("graph.add_vertex({label:?});"),
                MutOp::DeleteVertex(index) => {
                    if let Ok(label) = index.resolve(&vertices) {
                        println!("graph.delete_vertex(&{label:?});");
                    }
                }
                MutOp::DeleteVertexLabel(label) => println!("graph.delete_vertex(&{label:?});"),
                MutOp::Clear => println!("graph.clear();"),
                MutOp::AddEdge(src, dst) => {
                    if let (Ok(src), Ok(dst)) = (src.resolve(&vertices), dst.resolve(&vertices)) {
                        println!("graph.add_edge(&{src:?}, &{dst:?});");
                    }
                }
                MutOp::DeleteEdge(src, dst) => {
                    if let (Ok(src), Ok(dst)) = (src.resolve(&vertices), dst.resolve(&vertices)) {
                        println!("graph.delete_edge(&{src:?}, &{dst:?});");
                    }
                }
                MutOp::ClearEdges => println!("graph.clear_edges();"),
            }

            let _ = op.apply(graph);
        }

        println!();
        println!("check_consistency(&graph).unwrap();");
    }
}

impl<T: fmt::Debug> fmt::Debug for MutOpsSeq<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "MutOpsSeq(vec![")?;

        for op in self.0.iter() {
            writeln!(f, "    MutOp::{:?},", op)?;
        }

        writeln!(f, "])")?;
        writeln!(f, ".replay(&mut graph);")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum OpKind {
    AddVertex,
    AddEdge,
    DeleteVertex,
    DeleteVertexLabel,
    DeleteEdge,
    Clear,
    ClearEdges,
}

impl<'a, T> Arbitrary<'a> for MutOpsSeq<T>
where
    T: Arbitrary<'a>,
{
    fn arbitrary(u: &mut Unstructured<'a>) -> arbitrary::Result<Self> {
        let n_target = u.int_in_range(4..=100)?;
        let total = u.len();

        let mut n = 0usize;
        let mut seq = Vec::with_capacity(n_target);

        while !u.is_empty() {
            let rv = (n as f64 / n_target as f64).min(1.0);
            let r = (total - u.len()) as f64 / total as f64;

            let op = match arbitrary_op(u, rv, r) {
                Ok(op) => op,
                Err(_) => break,
            };

            match op {
                MutOp::AddVertex(_) => n += 1,
                MutOp::DeleteVertex(_) | MutOp::DeleteVertexLabel(_) => n = n.saturating_sub(1),
                MutOp::Clear => n = 0,
                _ => {}
            }

            seq.push(op);
        }

        Ok(MutOpsSeq(seq))
    }
}

fn arbitrary_op<'a, T>(u: &mut Unstructured<'a>, rv: f64, r: f64) -> arbitrary::Result<MutOp<T>>
where
    T: Arbitrary<'a>,
{
    // Vertices are added eagerly at the beginning, later mostly edges.
    let wv = non_linear_decrease(0.6 * rv + 0.4 * r);

    u.choose_weighted(
        &[
            OpKind::AddVertex,
            OpKind::AddEdge,
            OpKind::DeleteVertex,
            OpKind::DeleteVertexLabel,
            OpKind::DeleteEdge,
            OpKind::Clear,
            OpKind::ClearEdges,
        ],
        &[wv, 1.0, (1.0 - wv) * 0.2, 0.05, 0.3, 0.01, 0.01],
    )
    .and_then(|kind| match kind {
        OpKind::AddVertex => Ok(MutOp::AddVertex(u.arbitrary()?)),
        OpKind::AddEdge => Ok(MutOp::AddEdge(u.arbitrary()?, u.arbitrary()?)),
        OpKind::DeleteVertex => Ok(MutOp::DeleteVertex(u.arbitrary()?)),
        OpKind::DeleteVertexLabel => Ok(MutOp::DeleteVertexLabel(u.arbitrary()?)),
        OpKind::DeleteEdge => Ok(MutOp::DeleteEdge(u.arbitrary()?, u.arbitrary()?)),
        OpKind::Clear => Ok(MutOp::Clear),
        OpKind::ClearEdges => Ok(MutOp::ClearEdges),
    })
}

trait UnstructuredExt {
    fn nice_f64(&mut self) -> arbitrary::Result<f64>;
    fn choose_weighted<'b, T>(
        &mut self,
        choices: &'b [T],
        weights: &'b [f64],
    ) -> arbitrary::Result<&'b T>;
}

impl<'a> UnstructuredExt for Unstructured<'a> {
    fn nice_f64(&mut self) -> arbitrary::Result<f64> {
        const RESOLUTION: u8 = 100;
        let int = self.int_in_range(0..=RESOLUTION)?;
        Ok(int as f64 / RESOLUTION as f64)
    }

    fn choose_weighted<'b, T>(
        &mut self,
        choices: &'b [T],
        weights: &'b [f64],
    ) -> arbitrary::Result<&'b T> {
        if choices.is_empty() || choices.len() != weights.len() {
            return Err(arbitrary::Error::EmptyChoose);
        }

        let weight_sum = weights.iter().copied().sum::<f64>();
        let bound = self.nice_f64()? * weight_sum;

        let mut acc = 0.0;
        for (choice, weight) in choices.iter().zip(weights.iter().copied()) {
            acc += weight;

            if acc >= bound {
                return Ok(choice);
            }
        }

        // Rounding errors.
        Ok(&choices[choices.len() - 1])
    }
}

// f(0) = 1, f(1) ~= 0.152
fn non_linear_decrease(x: f64) -> f64 {
    1.0 / (x + 1.0).powf(std::f64::consts::E)
}
