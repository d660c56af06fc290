//! Deterministic coupling-graph generators.
//!
//! Every generator is a pure function of the requested minimum qubit count.
//! Most families only realize specific node counts exactly, so the generated
//! graph may contain more qubits than requested, never fewer.

use tracing::debug;

use crate::error::{TopologyError, TopologyResult};
use crate::family::TopologyFamily;
use crate::graph::CouplingGraph;

/// A generated topology: the realized qubit count plus its coupling graph.
///
/// `coupling` is `None` for the all-to-all family, which downstream
/// adapters render as an unrestricted device.
#[derive(Debug, Clone)]
pub struct GeneratedTopology {
    /// The family this topology was generated from.
    pub family: TopologyFamily,
    /// Realized number of qubits, at least the requested minimum.
    pub num_qubits: u32,
    /// The coupling graph, or `None` for all-to-all connectivity.
    pub coupling: Option<CouplingGraph>,
}

/// Generate a coupling graph with at least `min_qubits` qubits on the
/// given topology family.
pub fn generate(min_qubits: u32, family: TopologyFamily) -> TopologyResult<GeneratedTopology> {
    if min_qubits == 0 {
        return Err(TopologyError::InvalidQubitCount(min_qubits));
    }
    let (num_qubits, coupling) = match family {
        TopologyFamily::Square => {
            let dim = (f64::from(min_qubits)).sqrt().ceil() as u32;
            let num = dim
                .checked_mul(dim)
                .ok_or(TopologyError::QubitCountOverflow(min_qubits))?;
            (num, Some(grid(dim, dim)?))
        }
        TopologyFamily::HeavyHex => {
            let dim = heavy_hex_dim(min_qubits);
            let graph = heavy_hex(dim)?;
            (graph.num_qubits(), Some(graph))
        }
        TopologyFamily::Linear => (min_qubits, Some(linear(min_qubits)?)),
        TopologyFamily::Tree => {
            let levels = tree_levels(min_qubits);
            let graph = tree(levels)?;
            (graph.num_qubits(), Some(graph))
        }
        TopologyFamily::Torus => {
            let graph = torus(min_qubits)?;
            (graph.num_qubits(), Some(graph))
        }
        TopologyFamily::AllToAll => (min_qubits, None),
    };
    debug!(
        family = %family,
        min_qubits,
        num_qubits,
        edges = coupling.as_ref().map(CouplingGraph::num_edges),
        "generated topology"
    );
    Ok(GeneratedTopology {
        family,
        num_qubits,
        coupling,
    })
}

/// Build a `rows × cols` grid graph with 4-neighbor coupling, row-major
/// qubit indices, no wraparound.
pub fn grid(rows: u32, cols: u32) -> TopologyResult<CouplingGraph> {
    let num_qubits = rows
        .checked_mul(cols)
        .ok_or(TopologyError::QubitCountOverflow(rows.max(cols)))?;
    let mut edges = vec![];
    for r in 0..rows {
        for c in 0..cols {
            let idx = r * cols + c;
            if c + 1 < cols {
                edges.push((idx, idx + 1));
            }
            if r + 1 < rows {
                edges.push((idx, idx + cols));
            }
        }
    }
    CouplingGraph::from_edges(num_qubits, edges)
}

/// Build a path graph on exactly `n` qubits.
pub fn linear(n: u32) -> TopologyResult<CouplingGraph> {
    let edges: Vec<_> = (0..n.saturating_sub(1)).map(|i| (i, i + 1)).collect();
    CouplingGraph::from_edges(n, edges)
}

/// Smallest odd lattice distance `d` whose heavy-hex node count
/// `(5d² − 2d − 1) / 2` is at least `min_qubits`.
///
/// Solved on the continuous relaxation `5d² − 2d − 1 − 2·min_qubits = 0`
/// (quadratic formula), then the ceiling is bumped up to odd.
pub fn heavy_hex_dim(min_qubits: u32) -> u32 {
    let m = f64::from(min_qubits);
    let root = (1.0 + (1.0 + 5.0 * (1.0 + 2.0 * m)).sqrt()) / 5.0;
    let mut dim = root.ceil() as u32;
    dim = dim.max(1);
    if dim % 2 == 0 {
        dim += 1;
    }
    dim
}

/// Number of nodes in the heavy-hex lattice of distance `d`, or `None`
/// when the count overflows `u32`.
pub fn heavy_hex_nodes(d: u32) -> Option<u32> {
    // (5d² − 2d − 1) / 2
    let five_d_sq = d.checked_mul(d)?.checked_mul(5)?;
    Some(five_d_sq.checked_sub(2 * d + 1)? / 2)
}

/// Build the heavy-hex lattice of odd distance `d`.
///
/// The lattice is the hexagonal code layout: a `d × d` row-major block of
/// data qubits whose columns are chained through flag qubits, one flag on
/// every vertical link. Bulk syndrome qubits each bridge two horizontally
/// adjacent flags, staggered by flag row so that no flag carries more
/// than one syndrome; `(d − 1)/2` weight-two boundary syndromes on each
/// of the top and bottom data rows bridge two adjacent data qubits
/// directly. Every qubit ends up with degree at most 3.
///
/// Node counts: `d²` data, `(d² − 1)/2` syndrome, `d(d − 1)` flag, for a
/// total of `(5d² − 2d − 1)/2`.
pub fn heavy_hex(d: u32) -> TopologyResult<CouplingGraph> {
    debug_assert!(d % 2 == 1, "heavy-hex distance must be odd");
    let num_qubits = heavy_hex_nodes(d).ok_or(TopologyError::QubitCountOverflow(d))?;
    let num_data = d * d;
    let num_syndrome = (num_data - 1) / 2;
    let syn_base = num_data;
    let flag_base = num_data + num_syndrome;
    let data = |row: u32, col: u32| row * d + col;
    // Flag (row, col) sits on the vertical link below data qubit (row, col).
    let flag = |row: u32, col: u32| flag_base + row * d + col;

    let mut edges = vec![];
    for row in 0..d.saturating_sub(1) {
        for col in 0..d {
            edges.push((data(row, col), flag(row, col)));
            edges.push((flag(row, col), data(row + 1, col)));
        }
    }

    let per_row = (d - 1) / 2;
    let mut syndrome = syn_base;
    // Weight-two checks along the top data row.
    for i in 0..per_row {
        edges.push((syndrome, data(0, 2 * i)));
        edges.push((syndrome, data(0, 2 * i + 1)));
        syndrome += 1;
    }
    // Bulk checks bridge neighboring flags, alternating the column offset
    // per flag row so the column pairs tile in a brick pattern.
    for row in 0..d.saturating_sub(1) {
        let offset = if row % 2 == 0 { 1 } else { 0 };
        for i in 0..per_row {
            let col = 2 * i + offset;
            edges.push((syndrome, flag(row, col)));
            edges.push((syndrome, flag(row, col + 1)));
            syndrome += 1;
        }
    }
    // Weight-two checks along the bottom data row, offset from the top.
    for i in 0..per_row {
        edges.push((syndrome, data(d - 1, 2 * i + 1)));
        edges.push((syndrome, data(d - 1, 2 * i + 2)));
        syndrome += 1;
    }
    debug_assert_eq!(syndrome, syn_base + num_syndrome);

    CouplingGraph::from_edges(num_qubits, edges)
}

/// Tree depth realizing at least `min_qubits` nodes: the complete binary
/// tree of depth `levels` has `2^(levels+1) − 1` nodes.
pub fn tree_levels(min_qubits: u32) -> u32 {
    // ceil(log2(min_qubits + 1)) − 1, computed without floats. Widened
    // so the request u32::MAX still resolves instead of overflowing.
    (u64::from(min_qubits) + 1).next_power_of_two().trailing_zeros() - 1
}

/// Build a complete binary tree of the given depth.
///
/// Layer `k` holds `2^k` nodes; node `i > 0` couples to its parent
/// `(i − 1) / 2`. Depth 0 is the single-node tree.
pub fn tree(levels: u32) -> TopologyResult<CouplingGraph> {
    let num_qubits = 1u64
        .checked_shl(levels.saturating_add(1))
        .and_then(|nodes| u32::try_from(nodes - 1).ok())
        .ok_or(TopologyError::QubitCountOverflow(levels))?;
    let edges: Vec<_> = (1..num_qubits).map(|i| ((i - 1) / 2, i)).collect();
    CouplingGraph::from_edges(num_qubits, edges)
}

/// Build a torus with at least `min_qubits` qubits.
///
/// `little = ceil(sqrt(min_qubits / 3))` rings of qubits are laid out
/// around a big dimension of `3 · little` rings. Consecutive rings couple
/// with wraparound; within each ring the end qubit couples back to the
/// ring start, with the interior chain only present for `little > 2`.
/// Downstream edge-count assertions depend on this exact emission, so the
/// degenerate small-ring cases are preserved rather than generalized.
pub fn torus(min_qubits: u32) -> TopologyResult<CouplingGraph> {
    let little = (f64::from(min_qubits) / 3.0).sqrt().ceil() as u32;
    let big = 3 * little;
    let num_qubits = big
        .checked_mul(little)
        .ok_or(TopologyError::QubitCountOverflow(min_qubits))?;

    let mut edges = vec![];
    // Big-dimension couplings: one wraparound cycle per ring position.
    for column in 0..little {
        let mut start = column;
        for idx in 0..big {
            if idx == big - 1 {
                edges.push((start, column));
            } else {
                edges.push((start, start + little));
                start += little;
            }
        }
    }
    // Little-dimension couplings: ends first, then the interior chain.
    for ring in 0..big {
        let start = ring * little;
        if little > 1 {
            edges.push((start, start + little - 1));
        }
        if little > 2 {
            for qubit in 0..little - 1 {
                edges.push((start + qubit, start + qubit + 1));
            }
        }
    }
    CouplingGraph::from_edges(num_qubits, edges)
}
