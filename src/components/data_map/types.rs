use std::fmt;

use kurbo::Point;

/// Identifier of a node, unique for the lifetime of a graph.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(String);

impl NodeId {
	/// Wraps an existing identifier.
	pub fn new(id: impl Into<String>) -> Self {
		Self(id.into())
	}

	/// The identifier as a string slice.
	pub fn as_str(&self) -> &str {
		&self.0
	}
}

impl fmt::Display for NodeId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

impl From<&str> for NodeId {
	fn from(id: &str) -> Self {
		Self(id.to_owned())
	}
}

impl From<String> for NodeId {
	fn from(id: String) -> Self {
		Self(id)
	}
}

/// A positioned, labeled vertex of the data map.
#[derive(Clone, Debug, PartialEq)]
pub struct Node {
	/// Key of the node within its graph.
	pub id: NodeId,
	/// Center of the node in canvas space.
	pub position: Point,
	/// Label drawn inside the rectangle.
	pub text: String,
	/// Filled presentation. Carries no structural meaning.
	pub is_main: bool,
}

impl Node {
	/// Builds a node record.
	pub fn new(id: impl Into<NodeId>, x: f64, y: f64, text: impl Into<String>, is_main: bool) -> Self {
		Self {
			id: id.into(),
			position: Point::new(x, y),
			text: text.into(),
			is_main,
		}
	}
}

/// An undirected edge between two nodes. `{a, b}` and `{b, a}` are the same edge.
#[derive(Clone, Debug)]
pub struct Connection {
	/// One endpoint.
	pub from: NodeId,
	/// The other endpoint.
	pub to: NodeId,
}

impl Connection {
	/// Builds a connection in the order given; the order carries no meaning.
	pub fn new(from: impl Into<NodeId>, to: impl Into<NodeId>) -> Self {
		Self {
			from: from.into(),
			to: to.into(),
		}
	}

	/// Whether this connection joins `a` and `b`, in either order.
	pub fn joins(&self, a: &NodeId, b: &NodeId) -> bool {
		(&self.from == a && &self.to == b) || (&self.from == b && &self.to == a)
	}

	pub(crate) fn is_self_loop(&self) -> bool {
		self.from == self.to
	}
}

impl PartialEq for Connection {
	fn eq(&self, other: &Self) -> bool {
		self.joins(&other.from, &other.to)
	}
}

impl Eq for Connection {}
