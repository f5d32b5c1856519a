use crate::search::HeuristicValue;

/// Index of a node inside a [`crate::search::SearchSpace`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    pub(crate) fn new(index: usize) -> Self {
        Self(index)
    }

    #[inline(always)]
    pub fn id(&self) -> usize {
        self.0
    }
}

/// Parent id of the root node.
pub const NO_NODE: NodeId = NodeId(usize::MAX);

/// A [`SearchNode`] pairs a state with the information the search keeps about
/// how it was reached. Nodes are never modified after creation; reaching the
/// same state along another path creates a new node.
#[derive(Debug, Clone)]
pub struct SearchNode<S, A> {
    node_id: NodeId,
    state: S,
    /// G-value of the node, i.e. the cost of the path from the root.
    g: HeuristicValue,
    /// H-value of the node, i.e. the heuristic estimate of the cost to reach
    /// the goal. Uninformed searches leave this at zero.
    h: HeuristicValue,
    /// Number of actions on the path from the root.
    depth: usize,
    /// Action that led to this node, `None` only for the root node.
    action: Option<A>,
    parent_id: NodeId,
}

impl<S, A> SearchNode<S, A> {
    /// Create the root node of a search. For non-root nodes see
    /// [`SearchNode::new_with_parent`].
    pub fn new_without_parent(node_id: NodeId, state: S, h: HeuristicValue) -> Self {
        Self {
            node_id,
            state,
            g: HeuristicValue::from(0.),
            h,
            depth: 0,
            action: None,
            parent_id: NO_NODE,
        }
    }

    pub fn new_with_parent(
        node_id: NodeId,
        state: S,
        parent: &SearchNode<S, A>,
        action: A,
        step_cost: HeuristicValue,
        h: HeuristicValue,
    ) -> Self {
        Self {
            node_id,
            state,
            g: parent.g + step_cost,
            h,
            depth: parent.depth + 1,
            action: Some(action),
            parent_id: parent.node_id,
        }
    }

    #[inline(always)]
    pub fn get_node_id(&self) -> NodeId {
        self.node_id
    }

    #[inline(always)]
    pub fn get_state(&self) -> &S {
        &self.state
    }

    #[inline(always)]
    pub fn get_g(&self) -> HeuristicValue {
        self.g
    }

    #[inline(always)]
    pub fn get_h(&self) -> HeuristicValue {
        self.h
    }

    #[inline(always)]
    pub fn get_f(&self) -> HeuristicValue {
        self.g + self.h
    }

    pub fn get_depth(&self) -> usize {
        self.depth
    }

    pub fn get_action(&self) -> Option<&A> {
        self.action.as_ref()
    }

    pub fn get_parent_id(&self) -> NodeId {
        self.parent_id
    }
}
