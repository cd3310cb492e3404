use std::hash::Hash;

use ahash::AHashMap;

/// Dense identifier of a node interned in a [`NodeTable`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    /// Position of the node in the table's storage.
    pub fn index(self) -> usize {
        self.0
    }
}

/// Where a node is in its search lifecycle.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum NodeStatus {
    /// Generated, but no path to it has been recorded yet.
    Undiscovered,
    /// On the open list with a tentative cost.
    Open,
    /// Expanded.
    Closed,
}

/// Search bookkeeping for a single node.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct NodeRecord {
    /// Cost of the best known path from the start; infinite if none is known.
    pub g: f64,
    /// Heuristic estimate to the goal; NaN until it has been computed.
    pub h: f64,
    /// `g + h`, the node's priority on the open list.
    pub f: f64,
    /// Predecessor on the best known path.
    pub parent: Option<NodeId>,
    /// Lifecycle status.
    pub status: NodeStatus,
}

impl Default for NodeRecord {
    fn default() -> Self {
        NodeRecord {
            g: f64::INFINITY,
            h: f64::NAN,
            f: f64::INFINITY,
            parent: None,
            status: NodeStatus::Undiscovered,
        }
    }
}

/// Interns caller-defined nodes and stores the search state of each one.
///
/// Looking a node up by value costs one hash; everything after that is indexed by [`NodeId`].
pub struct NodeTable<N> {
    ids: AHashMap<N, NodeId>,
    nodes: Vec<N>,
    records: Vec<NodeRecord>,
}

impl<N: Hash + Eq + Clone> NodeTable<N> {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates an empty table with space for at least `capacity` nodes.
    pub fn with_capacity(capacity: usize) -> Self {
        NodeTable {
            ids: AHashMap::with_capacity(capacity),
            nodes: Vec::with_capacity(capacity),
            records: Vec::with_capacity(capacity),
        }
    }

    /// Forgets every node, keeping the allocations.
    pub fn reset(&mut self) {
        self.ids.clear();
        self.nodes.clear();
        self.records.clear();
    }

    /// Number of interned nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if no node has been interned.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns the id of `node`, interning it with a default record if it is new.
    pub fn generate(&mut self, node: N) -> NodeId {
        if let Some(&id) = self.ids.get(&node) {
            return id;
        }
        let id = NodeId(self.nodes.len());
        self.nodes.push(node.clone());
        self.records.push(NodeRecord::default());
        self.ids.insert(node, id);
        id
    }

    /// Returns the id of `node` if it has been interned.
    pub fn get(&self, node: &N) -> Option<NodeId> {
        self.ids.get(node).copied()
    }

    /// The node with the given id.
    pub fn node(&self, id: NodeId) -> &N {
        &self.nodes[id.0]
    }

    /// The search state of the node with the given id.
    pub fn record(&self, id: NodeId) -> &NodeRecord {
        &self.records[id.0]
    }

    /// Mutable access to the search state of the node with the given id.
    pub fn record_mut(&mut self, id: NodeId) -> &mut NodeRecord {
        &mut self.records[id.0]
    }

    /// Iterates over every interned node along with its id and search state.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &N, &NodeRecord)> + '_ {
        self.nodes
            .iter()
            .zip(&self.records)
            .enumerate()
            .map(|(index, (node, record))| (NodeId(index), node, record))
    }

    /// Follows parent links from `id` back to a node without a parent, returning the nodes in
    /// order from that node to `id`.
    pub fn path_to(&self, id: NodeId) -> Vec<N> {
        let mut path = vec![self.nodes[id.0].clone()];
        let mut current = id;
        while let Some(parent) = self.records[current.0].parent {
            path.push(self.nodes[parent.0].clone());
            current = parent;
        }
        path.reverse();
        path
    }
}

impl<N: Hash + Eq + Clone> Default for NodeTable<N> {
    fn default() -> Self {
        Self::new()
    }
}
