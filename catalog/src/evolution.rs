//! Resolved evolution chains.
//!
//! An [`EvolutionTree`] is the display-ready form of the API's raw chain:
//! every node carries its species identity and artwork, and every edge
//! carries the trigger for that evolution step. Only the first recorded
//! detail entry becomes the edge trigger; alternate conditions stay in
//! the wire type for callers that want them.

/// How an evolution step is triggered.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EvolutionTrigger {
    pub min_level: Option<u32>,
    /// Trigger kind as the API names it ("level-up", "use-item", "trade").
    pub kind: Option<String>,
    pub item: Option<String>,
}

impl EvolutionTrigger {
    pub fn is_empty(&self) -> bool {
        self.min_level.is_none() && self.kind.is_none() && self.item.is_none()
    }
}

/// One outgoing evolution step.
#[derive(Debug, Clone, PartialEq)]
pub struct EvolutionEdge {
    pub node: EvolutionTree,
    pub trigger: Option<EvolutionTrigger>,
}

/// A resolved evolution chain node.
#[derive(Debug, Clone, PartialEq)]
pub struct EvolutionTree {
    pub species_id: u32,
    pub species_name: String,
    pub artwork_url: Option<String>,
    /// Children in API order. Empty for a final form.
    pub evolves_to: Vec<EvolutionEdge>,
}

impl EvolutionTree {
    /// Longest node count from this node to a leaf (a lone node is 1).
    pub fn depth(&self) -> usize {
        1 + self
            .evolves_to
            .iter()
            .map(|edge| edge.node.depth())
            .max()
            .unwrap_or(0)
    }

    /// Total number of edges in the tree.
    pub fn edge_count(&self) -> usize {
        self.evolves_to
            .iter()
            .map(|edge| 1 + edge.node.edge_count())
            .sum()
    }

    /// All nodes in pre-order, root first.
    pub fn flatten(&self) -> Vec<&EvolutionTree> {
        let mut nodes = vec![self];
        for edge in &self.evolves_to {
            nodes.extend(edge.node.flatten());
        }
        nodes
    }

    pub fn is_leaf(&self) -> bool {
        self.evolves_to.is_empty()
    }
}
