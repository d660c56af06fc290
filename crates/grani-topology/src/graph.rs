//! Undirected coupling graphs over qubit indices.

use petgraph::algo::connected_components;
use petgraph::graph::UnGraph;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::error::{TopologyError, TopologyResult};

/// An undirected, simple graph describing which qubit pairs support a
/// direct two-qubit interaction.
///
/// Edges are stored in canonical `(lo, hi)` form, so the graph is symmetric
/// by construction: `contains(a, b)` and `contains(b, a)` always agree.
/// Adapters that need a directed rendering use [`CouplingGraph::directed_edges`].
///
/// A coupling graph is built once by a generator and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawCoupling", into = "RawCoupling")]
pub struct CouplingGraph {
    num_qubits: u32,
    edges: FxHashSet<(u32, u32)>,
}

/// Wire form: sorted edge list, stable across serializations.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct RawCoupling {
    num_qubits: u32,
    edges: Vec<(u32, u32)>,
}

impl From<CouplingGraph> for RawCoupling {
    fn from(graph: CouplingGraph) -> Self {
        let edges = graph.sorted_edges();
        Self {
            num_qubits: graph.num_qubits,
            edges,
        }
    }
}

impl TryFrom<RawCoupling> for CouplingGraph {
    type Error = TopologyError;

    fn try_from(raw: RawCoupling) -> TopologyResult<Self> {
        CouplingGraph::from_edges(raw.num_qubits, raw.edges)
    }
}

impl CouplingGraph {
    /// Build a coupling graph from an edge list.
    ///
    /// Edges are normalized to `(lo, hi)` and deduplicated, so both
    /// directed and undirected inputs are accepted. Self-loops and
    /// out-of-range endpoints are rejected.
    pub fn from_edges(
        num_qubits: u32,
        edges: impl IntoIterator<Item = (u32, u32)>,
    ) -> TopologyResult<Self> {
        let mut set = FxHashSet::default();
        for (a, b) in edges {
            if a == b {
                return Err(TopologyError::SelfLoop(a));
            }
            if a >= num_qubits || b >= num_qubits {
                return Err(TopologyError::EdgeOutOfRange(a, b, num_qubits));
            }
            set.insert((a.min(b), a.max(b)));
        }
        Ok(Self {
            num_qubits,
            edges: set,
        })
    }

    /// Number of qubits (nodes) in the graph.
    pub fn num_qubits(&self) -> u32 {
        self.num_qubits
    }

    /// Number of undirected edges.
    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    /// Check whether two qubits are directly coupled, in either order.
    pub fn contains(&self, a: u32, b: u32) -> bool {
        self.edges.contains(&(a.min(b), a.max(b)))
    }

    /// Iterate over the canonical `(lo, hi)` edges.
    pub fn edges(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        self.edges.iter().copied()
    }

    /// Canonical edges sorted lexicographically.
    pub fn sorted_edges(&self) -> Vec<(u32, u32)> {
        let mut edges: Vec<_> = self.edges.iter().copied().collect();
        edges.sort_unstable();
        edges
    }

    /// Iterate over all edges in both orientations.
    ///
    /// This is the rendering required by ecosystems whose coupling maps
    /// are directed: every `(a, b)` is followed by `(b, a)`.
    pub fn directed_edges(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        self.edges.iter().flat_map(|&(a, b)| [(a, b), (b, a)])
    }

    /// Neighbors of a qubit, sorted ascending.
    pub fn neighbors(&self, qubit: u32) -> Vec<u32> {
        let mut out: Vec<u32> = self
            .edges
            .iter()
            .filter_map(|&(a, b)| {
                if a == qubit {
                    Some(b)
                } else if b == qubit {
                    Some(a)
                } else {
                    None
                }
            })
            .collect();
        out.sort_unstable();
        out
    }

    /// Number of edges incident on a qubit.
    pub fn degree(&self, qubit: u32) -> usize {
        self.edges
            .iter()
            .filter(|&&(a, b)| a == qubit || b == qubit)
            .count()
    }

    /// Whether every qubit can reach every other qubit.
    ///
    /// The empty graph and the single-node graph are considered connected.
    pub fn is_connected(&self) -> bool {
        if self.num_qubits <= 1 {
            return true;
        }
        let mut graph = UnGraph::<(), ()>::default();
        let nodes: Vec<_> = (0..self.num_qubits).map(|_| graph.add_node(())).collect();
        for &(a, b) in &self.edges {
            graph.add_edge(nodes[a as usize], nodes[b as usize], ());
        }
        connected_components(&graph) == 1
    }

    /// Whether the graph is complete on its qubit count.
    ///
    /// A complete coupling graph imposes no routing constraint, so
    /// validators skip the edge-membership check for it.
    pub fn is_complete(&self) -> bool {
        let n = self.num_qubits as usize;
        self.edges.len() == n * n.saturating_sub(1) / 2
    }
}
