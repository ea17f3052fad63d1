//! Builds the drawable scene from the graph and the transient interaction state.

use kurbo::Point;
use unicode_width::UnicodeWidthStr;

use super::graph::GraphModel;
use super::interaction::Segment;
use super::types::NodeId;

pub const NODE_HEIGHT: f64 = 30.0;
pub const NODE_MIN_WIDTH: f64 = 100.0;
pub const NODE_PADDING_X: f64 = 10.0;
pub const NODE_CORNER_RADIUS: f64 = 4.0;
pub const LABEL_FONT: &str = "Courier New";
pub const LABEL_FONT_SIZE: f64 = 14.0;
/// Advance of one monospace column at [`LABEL_FONT_SIZE`].
pub const LABEL_COLUMN_WIDTH: f64 = LABEL_FONT_SIZE * 0.6;

/// Rendered width of a label in canvas units.
pub fn label_width(text: &str) -> f64 {
	text.width() as f64 * LABEL_COLUMN_WIDTH
}

/// Width of the rectangle around a label, padding and floor applied.
pub fn node_width(text: &str) -> f64 {
	(label_width(text) + 2.0 * NODE_PADDING_X).max(NODE_MIN_WIDTH)
}

#[derive(Clone, Debug, PartialEq)]
pub struct EdgeShape {
	pub from: NodeId,
	pub to: NodeId,
	pub line: Segment,
}

#[derive(Clone, Debug, PartialEq)]
pub struct NodeShape {
	pub id: NodeId,
	pub center: Point,
	pub width: f64,
	pub label: String,
	pub primary: bool,
	/// The label is replaced by an inline editor.
	pub editing: bool,
}

impl NodeShape {
	pub fn height(&self) -> f64 {
		NODE_HEIGHT
	}

	/// Top-left corner of the rectangle, relative to the node center.
	pub fn rect_origin(&self) -> Point {
		Point::new(-self.width / 2.0, -self.height() / 2.0)
	}

	pub fn fill(&self) -> &'static str {
		if self.primary { "black" } else { "white" }
	}

	pub fn text_fill(&self) -> &'static str {
		if self.primary { "white" } else { "black" }
	}
}

/// Everything a backend needs to draw one frame.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Scene {
	pub edges: Vec<EdgeShape>,
	pub transient: Option<Segment>,
	pub nodes: Vec<NodeShape>,
}

impl Scene {
	/// Node ids in paint order. Stable across drags and edits, so views can key rows on them.
	pub fn node_keys(&self) -> Vec<NodeId> {
		self.nodes.iter().map(|node| node.id.clone()).collect()
	}

	/// Endpoint pairs of the drawn edges, in paint order.
	pub fn edge_keys(&self) -> Vec<(NodeId, NodeId)> {
		self.edges
			.iter()
			.map(|edge| (edge.from.clone(), edge.to.clone()))
			.collect()
	}

	pub fn node(&self, id: &NodeId) -> Option<&NodeShape> {
		self.nodes.iter().find(|node| &node.id == id)
	}

	/// The edge stored as `from - to`, in that order.
	pub fn edge(&self, from: &NodeId, to: &NodeId) -> Option<&EdgeShape> {
		self.edges.iter().find(|edge| &edge.from == from && &edge.to == to)
	}
}

/// Lays out the graph. Connections with a missing endpoint are skipped.
pub fn build_scene(graph: &GraphModel, transient: Option<Segment>, editing: Option<&NodeId>) -> Scene {
	let edges = graph
		.connections()
		.iter()
		.filter_map(|conn| {
			let (from, to) = (graph.find_node(&conn.from)?, graph.find_node(&conn.to)?);
			Some(EdgeShape {
				from: conn.from.clone(),
				to: conn.to.clone(),
				line: Segment {
					start: from.position,
					end: to.position,
				},
			})
		})
		.collect();

	let nodes = graph
		.nodes()
		.map(|node| NodeShape {
			id: node.id.clone(),
			center: node.position,
			width: node_width(&node.text),
			label: node.text.clone(),
			primary: node.is_main,
			editing: editing == Some(&node.id),
		})
		.collect();

	Scene {
		edges,
		transient,
		nodes,
	}
}
