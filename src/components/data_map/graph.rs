//! The authoritative node and connection store.

use indexmap::IndexMap;
use kurbo::Point;
use log::debug;

use super::types::{Connection, Node, NodeId};

/// Nodes in insertion order plus the undirected connections between them.
///
/// Every mutation is total: unknown ids, duplicates and self-loops are absorbed
/// as no-ops so a stray UI event can never fail.
#[derive(Clone, Debug, Default)]
pub struct GraphModel {
	nodes: IndexMap<NodeId, Node>,
	connections: Vec<Connection>,
	next_id: u64,
}

impl GraphModel {
	/// An empty graph.
	pub fn new() -> Self {
		Self::default()
	}

	/// Builds a seeded graph.
	///
	/// Duplicate node ids keep the first record. Self-loops and repeated pairs
	/// are dropped; connections to missing nodes are kept and skipped when drawn.
	pub fn from_parts(
		nodes: impl IntoIterator<Item = Node>,
		connections: impl IntoIterator<Item = Connection>,
	) -> Self {
		let mut graph = Self::new();
		for node in nodes {
			if graph.nodes.contains_key(&node.id) {
				debug!("dropping duplicate seeded node {}", node.id);
				continue;
			}
			graph.nodes.insert(node.id.clone(), node);
		}
		for conn in connections {
			if conn.is_self_loop() || graph.connections.contains(&conn) {
				debug!("dropping seeded connection {} - {}", conn.from, conn.to);
				continue;
			}
			graph.connections.push(conn);
		}
		graph
	}

	/// Creates a node under a fresh id and returns that id.
	pub fn add_node(&mut self, position: Point, text: impl Into<String>, is_main: bool) -> NodeId {
		let id = self.fresh_id();
		self.nodes.insert(
			id.clone(),
			Node {
				id: id.clone(),
				position,
				text: text.into(),
				is_main,
			},
		);
		id
	}

	fn fresh_id(&mut self) -> NodeId {
		loop {
			self.next_id += 1;
			let id = NodeId::new(format!("node-{}", self.next_id));
			if !self.nodes.contains_key(&id) {
				return id;
			}
		}
	}

	/// Moves a node. Unknown ids are ignored.
	pub fn update_node_position(&mut self, id: &NodeId, position: Point) {
		match self.nodes.get_mut(id) {
			Some(node) => node.position = position,
			None => debug!("position update for unknown node {id}"),
		}
	}

	/// Replaces a node's label. Unknown ids are ignored.
	pub fn update_node_text(&mut self, id: &NodeId, text: impl Into<String>) {
		match self.nodes.get_mut(id) {
			Some(node) => node.text = text.into(),
			None => debug!("text update for unknown node {id}"),
		}
	}

	/// Connects `a` and `b`. Returns `false` without touching the graph for a
	/// self-loop, an unknown endpoint, or a pair that is already connected.
	pub fn add_connection(&mut self, a: &NodeId, b: &NodeId) -> bool {
		if a == b {
			debug!("rejecting self-loop on {a}");
			return false;
		}
		if !self.nodes.contains_key(a) || !self.nodes.contains_key(b) {
			debug!("rejecting connection {a} - {b}: unknown endpoint");
			return false;
		}
		if self.has_connection(a, b) {
			debug!("rejecting connection {a} - {b}: already present");
			return false;
		}
		self.connections.push(Connection::new(a.clone(), b.clone()));
		true
	}

	/// Removes the connection joining `a` and `b`, whichever order it was stored in.
	pub fn remove_connection(&mut self, a: &NodeId, b: &NodeId) -> bool {
		let before = self.connections.len();
		self.connections.retain(|conn| !conn.joins(a, b));
		before != self.connections.len()
	}

	/// Looks up a node by id.
	pub fn find_node(&self, id: &NodeId) -> Option<&Node> {
		self.nodes.get(id)
	}

	/// Whether `a` and `b` are connected, in either direction.
	pub fn has_connection(&self, a: &NodeId, b: &NodeId) -> bool {
		self.connections.iter().any(|conn| conn.joins(a, b))
	}

	/// Nodes in insertion order.
	pub fn nodes(&self) -> impl Iterator<Item = &Node> {
		self.nodes.values()
	}

	/// Connections in insertion order, dangling ones included.
	pub fn connections(&self) -> &[Connection] {
		&self.connections
	}

	/// Number of nodes.
	pub fn node_count(&self) -> usize {
		self.nodes.len()
	}

	/// Number of stored connections.
	pub fn connection_count(&self) -> usize {
		self.connections.len()
	}
}

#[cfg(test)]
mod tests {
	use std::collections::HashSet;

	use super::*;

	fn two_nodes() -> (GraphModel, NodeId, NodeId) {
		let mut graph = GraphModel::new();
		let a = graph.add_node(Point::new(0.0, 0.0), "A", false);
		let b = graph.add_node(Point::new(100.0, 0.0), "B", false);
		(graph, a, b)
	}

	#[test]
	fn add_node_returns_distinct_ids() {
		let mut graph = GraphModel::new();
		let ids: Vec<_> = (0..50)
			.map(|i| graph.add_node(Point::new(i as f64, 0.0), "n", i % 2 == 0))
			.collect();
		assert_eq!(graph.node_count(), 50);
		assert_eq!(ids.iter().collect::<HashSet<_>>().len(), 50);
	}

	#[test]
	fn fresh_ids_skip_seeded_ids() {
		let mut graph = GraphModel::from_parts([Node::new("node-1", 0.0, 0.0, "seed", true)], []);
		let id = graph.add_node(Point::ZERO, "new", false);
		assert_ne!(id.as_str(), "node-1");
		assert_eq!(graph.node_count(), 2);
		assert_eq!(graph.find_node(&"node-1".into()).map(|n| n.text.as_str()), Some("seed"));
	}

	#[test]
	fn reversed_duplicate_connection_is_rejected() {
		let (mut graph, a, b) = two_nodes();
		assert!(graph.add_connection(&a, &b));
		assert!(!graph.add_connection(&b, &a));
		assert_eq!(graph.connection_count(), 1);
	}

	#[test]
	fn self_loop_is_rejected() {
		let (mut graph, a, _) = two_nodes();
		assert!(!graph.add_connection(&a, &a));
		assert_eq!(graph.connection_count(), 0);
	}

	#[test]
	fn unknown_endpoint_is_rejected() {
		let (mut graph, a, _) = two_nodes();
		assert!(!graph.add_connection(&a, &"ghost".into()));
		assert_eq!(graph.connection_count(), 0);
	}

	#[test]
	fn remove_connection_ignores_stored_order() {
		let (mut graph, a, b) = two_nodes();
		graph.add_connection(&a, &b);
		assert!(graph.remove_connection(&b, &a));
		assert_eq!(graph.connection_count(), 0);
		assert!(!graph.remove_connection(&a, &b));
	}

	#[test]
	fn updates_on_unknown_ids_are_noops() {
		let (mut graph, a, _) = two_nodes();
		let ghost = NodeId::from("ghost");
		graph.update_node_position(&ghost, Point::new(5.0, 5.0));
		graph.update_node_text(&ghost, "boo");
		assert_eq!(graph.node_count(), 2);
		assert_eq!(graph.find_node(&a).map(|n| n.position), Some(Point::new(0.0, 0.0)));
	}

	#[test]
	fn updates_change_only_the_target() {
		let (mut graph, a, b) = two_nodes();
		graph.update_node_position(&a, Point::new(7.0, 8.0));
		graph.update_node_text(&a, "moved");
		let node_a = graph.find_node(&a).cloned();
		assert_eq!(node_a.map(|n| (n.position, n.text)), Some((Point::new(7.0, 8.0), "moved".to_owned())));
		assert_eq!(graph.find_node(&b).map(|n| n.position), Some(Point::new(100.0, 0.0)));
	}

	#[test]
	fn from_parts_keeps_dangling_and_drops_invalid() {
		let graph = GraphModel::from_parts(
			[
				Node::new("a", 0.0, 0.0, "A", true),
				Node::new("b", 1.0, 1.0, "B", false),
				Node::new("a", 9.0, 9.0, "dup", false),
			],
			[
				Connection::new("a", "b"),
				Connection::new("b", "a"),
				Connection::new("a", "a"),
				Connection::new("a", "missing"),
			],
		);
		assert_eq!(graph.node_count(), 2);
		assert_eq!(graph.find_node(&"a".into()).map(|n| n.text.as_str()), Some("A"));
		assert_eq!(graph.connection_count(), 2);
		assert!(graph.has_connection(&"missing".into(), &"a".into()));
	}

	#[test]
	fn nodes_iterate_in_insertion_order() {
		let mut graph = GraphModel::from_parts([Node::new("z", 0.0, 0.0, "Z", false)], []);
		let added = graph.add_node(Point::ZERO, "next", false);
		let order: Vec<_> = graph.nodes().map(|n| n.id.clone()).collect();
		assert_eq!(order, vec![NodeId::from("z"), added]);
	}
}
