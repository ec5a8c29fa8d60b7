use crate::define_index_newtype;

define_index_newtype!(NodeIdx);
define_index_newtype!(SolverIndex);

/// Maps problem nodes to the indices the routing model reasons about.
///
/// Every node gets one index in node order, except a distinct end node which
/// only owns the trailing end index. When the route starts and ends at the
/// same node, that node owns both its regular (start) index and the end index.
#[derive(Debug, Clone)]
pub struct IndexManager {
    index_to_node: Vec<NodeIdx>,
    node_to_index: Vec<SolverIndex>,
    start: SolverIndex,
    end: SolverIndex,
}

impl IndexManager {
    /// Panics when `num_nodes` is zero or `start`/`end` are out of range.
    pub fn new(num_nodes: usize, start: NodeIdx, end: NodeIdx) -> Self {
        assert!(
            start.get() < num_nodes && end.get() < num_nodes,
            "start {start} and end {end} must be nodes of a {num_nodes} node problem"
        );

        let mut index_to_node = Vec::with_capacity(num_nodes + 1);
        let mut node_to_index = vec![SolverIndex::default(); num_nodes];

        for node in (0..num_nodes).map(NodeIdx::new) {
            if node == end && start != end {
                continue;
            }

            node_to_index[node.get()] = SolverIndex::new(index_to_node.len());
            index_to_node.push(node);
        }

        let end_index = SolverIndex::new(index_to_node.len());
        index_to_node.push(end);

        if start != end {
            node_to_index[end.get()] = end_index;
        }

        IndexManager {
            start: node_to_index[start.get()],
            end: end_index,
            index_to_node,
            node_to_index,
        }
    }

    pub fn index_to_node(&self, index: SolverIndex) -> NodeIdx {
        self.index_to_node[index.get()]
    }

    /// For the start node of a closed route this is the start index.
    pub fn node_to_index(&self, node: NodeIdx) -> SolverIndex {
        self.node_to_index[node.get()]
    }

    pub fn start_index(&self) -> SolverIndex {
        self.start
    }

    pub fn end_index(&self) -> SolverIndex {
        self.end
    }

    pub fn is_start(&self, index: SolverIndex) -> bool {
        index == self.start
    }

    pub fn is_end(&self, index: SolverIndex) -> bool {
        index == self.end
    }

    pub fn num_indices(&self) -> usize {
        self.index_to_node.len()
    }

    pub fn num_nodes(&self) -> usize {
        self.node_to_index.len()
    }
}
