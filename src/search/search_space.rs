use crate::search::{HeuristicValue, NodeId, Plan, SearchNode, NO_NODE};
use segvec::{Linear, SegVec};

/// A [`SearchSpace`] owns every node generated during one search. Nodes refer
/// to their parent by id, so a path is a chain of back pointers that is only
/// flattened into a [`Plan`] once a goal is found.
#[derive(Debug)]
pub struct SearchSpace<S, A> {
    root_node_id: NodeId,
    nodes: SegVec<SearchNode<S, A>, Linear>,
}

impl<S: Clone, A: Clone> SearchSpace<S, A> {
    pub fn new(initial_state: S, h: HeuristicValue) -> Self {
        let mut nodes = SegVec::new();
        let root_node_id = NodeId::new(0);
        nodes.push(SearchNode::new_without_parent(root_node_id, initial_state, h));
        Self {
            root_node_id,
            nodes,
        }
    }

    /// Create a child of `parent_id` and return its id.
    pub fn insert_node(
        &mut self,
        state: S,
        action: A,
        step_cost: HeuristicValue,
        h: HeuristicValue,
        parent_id: NodeId,
    ) -> NodeId {
        let node_id = NodeId::new(self.nodes.len());
        let node = {
            let parent = self.get_node(parent_id);
            SearchNode::new_with_parent(node_id, state, parent, action, step_cost, h)
        };
        self.nodes.push(node);
        node_id
    }

    #[inline(always)]
    pub fn get_root_node(&self) -> &SearchNode<S, A> {
        self.get_node(self.root_node_id)
    }

    #[inline(always)]
    pub fn get_node(&self, node_id: NodeId) -> &SearchNode<S, A> {
        self.nodes.get(node_id.id()).expect("Invalid node id")
    }

    #[inline(always)]
    pub fn get_state(&self, node_id: NodeId) -> &S {
        self.get_node(node_id).get_state()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.len() == 0
    }

    /// Walk the back pointers from `goal_id` to the root and return the
    /// actions in root-to-goal order. The root carries no action, so the plan
    /// of the root itself is empty.
    pub fn extract_plan(&self, goal_id: NodeId) -> Plan<A> {
        let mut steps = vec![];
        let mut current_node = self.get_node(goal_id);
        while NO_NODE != current_node.get_parent_id() {
            if let Some(action) = current_node.get_action() {
                steps.push(action.clone());
            }
            current_node = self.get_node(current_node.get_parent_id());
        }
        steps.reverse();
        Plan::new(steps)
    }
}
