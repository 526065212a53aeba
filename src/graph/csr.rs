//! Compressed Sparse Row (CSR) sentence graph
//!
//! CSR is optimized for iteration over neighbors, which is exactly what rank
//! propagation needs on every round. Only non-zero similarities become edges,
//! so documents with many unrelated sentences stay cheap to rank.

use super::similarity::SimilarityMatrix;

/// A weighted, undirected sentence graph in Compressed Sparse Row format
#[derive(Debug, Clone)]
pub struct CsrGraph {
    /// Number of nodes (sentences)
    pub num_nodes: usize,
    /// Row pointers: node i's edges are at indices row_ptr[i]..row_ptr[i+1]
    pub row_ptr: Vec<usize>,
    /// Column indices (neighbor sentences) for each edge
    pub col_idx: Vec<u32>,
    /// Edge weights (cosine similarities)
    pub weights: Vec<f64>,
}

impl CsrGraph {
    /// Convert a similarity matrix into CSR format, skipping zero entries and
    /// the diagonal
    pub fn from_similarity(matrix: &SimilarityMatrix) -> Self {
        let num_nodes = matrix.size();
        let mut row_ptr = Vec::with_capacity(num_nodes + 1);
        let mut col_idx = Vec::new();
        let mut weights = Vec::new();

        row_ptr.push(0);

        for node in 0..num_nodes {
            for (neighbor, &weight) in matrix.row(node).iter().enumerate() {
                if neighbor == node || weight == 0.0 {
                    continue;
                }
                col_idx.push(neighbor as u32);
                weights.push(weight);
            }
            row_ptr.push(col_idx.len());
        }

        Self {
            num_nodes,
            row_ptr,
            col_idx,
            weights,
        }
    }

    /// Iterate over neighbors of a node
    pub fn neighbors(&self, node: u32) -> impl Iterator<Item = (u32, f64)> + '_ {
        let start = self.row_ptr[node as usize];
        let end = self.row_ptr[node as usize + 1];
        (start..end).map(move |i| (self.col_idx[i], self.weights[i]))
    }

    /// Number of neighbors of a node
    pub fn degree(&self, node: u32) -> usize {
        self.row_ptr[node as usize + 1] - self.row_ptr[node as usize]
    }

    pub fn is_empty(&self) -> bool {
        self.num_nodes == 0
    }

    /// Total number of edges (counting each undirected edge twice)
    pub fn num_edges(&self) -> usize {
        self.col_idx.len()
    }

    /// Sentences similar to no other sentence
    pub fn isolated_nodes(&self) -> Vec<u32> {
        (0..self.num_nodes as u32)
            .filter(|&n| self.degree(n) == 0)
            .collect()
    }
}

impl Default for CsrGraph {
    fn default() -> Self {
        Self {
            num_nodes: 0,
            row_ptr: vec![0],
            col_idx: Vec::new(),
            weights: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Sentence;
    use crate::vector::VectorSpaceBuilder;

    fn build_test_graph() -> CsrGraph {
        let sentences: Vec<Sentence> = [
            vec!["magma", "lava"],
            vec!["lava", "basalt"],
            vec!["magma", "basalt"],
            vec!["galaxy", "nebula"],
        ]
        .into_iter()
        .enumerate()
        .map(|(i, tokens)| {
            Sentence::new(i, tokens.join(" "), tokens.iter().map(|t| t.to_string()).collect())
        })
        .collect();

        let space = VectorSpaceBuilder::new().build(&sentences);
        CsrGraph::from_similarity(&SimilarityMatrix::from_space(&space))
    }

    #[test]
    fn test_csr_conversion() {
        let csr = build_test_graph();

        assert_eq!(csr.num_nodes, 4);
        assert_eq!(csr.row_ptr.len(), 5);
        // triangle among the first three sentences, counted in both directions
        assert_eq!(csr.num_edges(), 6);
    }

    #[test]
    fn test_neighbor_iteration() {
        let csr = build_test_graph();

        let neighbors: Vec<_> = csr.neighbors(0).collect();
        assert_eq!(neighbors.len(), 2);
        assert!(neighbors.iter().all(|(n, w)| *n != 0 && *w > 0.0));
        assert_eq!(neighbors[0].0, 1);
        assert_eq!(neighbors[1].0, 2);
    }

    #[test]
    fn test_degree_and_symmetric_weights() {
        let csr = build_test_graph();

        assert_eq!(csr.degree(0), 2);
        assert_eq!(csr.degree(3), 0);
        for (neighbor, weight) in csr.neighbors(0) {
            let back = csr.neighbors(neighbor).find(|(n, _)| *n == 0).unwrap();
            assert!((back.1 - weight).abs() < 1e-12);
        }
    }

    #[test]
    fn test_isolated_nodes() {
        let csr = build_test_graph();
        assert_eq!(csr.isolated_nodes(), vec![3]);
    }

    #[test]
    fn test_empty_graph() {
        let csr = CsrGraph::from_similarity(&SimilarityMatrix::zeros(0));

        assert!(csr.is_empty());
        assert_eq!(csr.num_edges(), 0);
    }
}
