use eframe::egui;


#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn from_pos2(p: egui::Pos2) -> Self {
        Self { x: p.x, y: p.y }
    }

    pub fn to_pos2(self) -> egui::Pos2 {
        egui::pos2(self.x, self.y)
    }
}

/// Stable identifier for a state node. Ids are allocated monotonically and
/// never reused, so a transition endpoint can only ever name the node it was
/// created against.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeId(u64);

#[derive(Clone, Debug, PartialEq)]
pub struct Node {
    pub id: NodeId,
    pub pos: Point,
    pub radius: f32,
    pub name: String,
    pub is_initial: bool,
    pub is_final: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Transition {
    pub from: NodeId,
    pub to: NodeId,
    pub label: String,
}

/// The automaton diagram being sketched: state nodes in creation order plus
/// the directed transitions between them.
///
/// Node names are always the contiguous sequence `q0..qN-1` over the live
/// nodes; deletion renumbers the survivors in place.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Diagram {
    pub nodes: Vec<Node>,
    pub transitions: Vec<Transition>,
    next_id: u64,
    name_counter: usize,
}

impl Diagram {
    fn allocate_id(&mut self) -> NodeId {
        let id = self.next_id;
        self.next_id += 1;
        NodeId(id)
    }

    /// Adds a node at `center` and returns its id. The first node into an
    /// empty diagram is always `q0` and restarts the name counter; later
    /// nodes take the next counter value.
    pub fn add_node(&mut self, center: egui::Pos2, radius: f32) -> NodeId {
        let name = if self.nodes.is_empty() {
            self.name_counter = 1;
            "q0".to_string()
        } else {
            let name = format!("q{}", self.name_counter);
            self.name_counter += 1;
            name
        };
        let id = self.allocate_id();
        self.nodes.push(Node {
            id,
            pos: Point::from_pos2(center),
            radius,
            name,
            is_initial: false,
            is_final: false,
        });
        id
    }

    /// Removes a node, every transition touching it, and renumbers the
    /// remaining nodes sequentially in their existing order.
    pub fn remove_node(&mut self, id: NodeId) {
        self.nodes.retain(|n| n.id != id);
        self.transitions.retain(|t| t.from != id && t.to != id);
        for (i, node) in self.nodes.iter_mut().enumerate() {
            node.name = format!("q{i}");
        }
        self.name_counter = self.nodes.len();
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.iter().find(|n| n.id == id)
    }

    pub fn node_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.iter_mut().find(|n| n.id == id)
    }

    /// Appends a transition. The gesture handler guarantees `from != to`;
    /// self-loops are never created through the standard connect gesture.
    pub fn add_transition(&mut self, from: NodeId, to: NodeId, label: impl Into<String>) {
        debug_assert_ne!(from, to);
        self.transitions.push(Transition {
            from,
            to,
            label: label.into(),
        });
    }

    pub fn clear_transitions(&mut self) {
        self.transitions.clear();
    }

    /// Full reset, used when advancing to a new prompt.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.transitions.clear();
        self.name_counter = 0;
    }

    /// Topmost node under `pos`, testing in reverse creation order so the
    /// most recently added node wins on overlap.
    pub fn hit_test(&self, pos: egui::Pos2) -> Option<NodeId> {
        self.nodes
            .iter()
            .rev()
            .find(|n| (pos - n.pos.to_pos2()).length() <= n.radius)
            .map(|n| n.id)
    }

    #[cfg(test)]
    pub fn name_counter(&self) -> usize {
        self.name_counter
    }
}
