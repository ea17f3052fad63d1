//! The pointer gesture state machine: dragging nodes and drawing connections.
//!
//! A gesture starts with a pointer-down on a node while [`Gesture::Idle`]. The
//! Shift modifier is read once at that moment and decides the branch; the
//! machine then stays in that gesture until the pointer is released.

use kurbo::{Point, Vec2};
use log::debug;

use super::graph::GraphModel;
use super::types::{Connection, NodeId};

/// Travel, in canvas units, under which a press and release count as a click.
pub const CLICK_SLOP: f64 = 3.0;

/// The active gesture. Exactly one at a time.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Gesture {
	#[default]
	Idle,
	/// Moving `node`; the node stays at `cursor - grab_offset`.
	Dragging {
		node: NodeId,
		grab_offset: Vec2,
		press: Point,
		travelled: bool,
	},
	/// Drawing a transient line from `source` to `cursor`.
	Connecting { source: NodeId, cursor: Point },
}

/// How a gesture finished.
#[derive(Clone, Debug, PartialEq)]
pub enum GestureEnd {
	/// Nothing was in progress.
	Idle,
	/// Press and release on the same node without travel.
	Clicked(NodeId),
	/// The node was moved, or released away from where it was pressed.
	Dragged(NodeId),
	/// A new connection was committed.
	Connected(Connection),
	/// Released on a node but the connection was refused.
	Rejected,
	/// Released away from any node; nothing committed.
	Abandoned,
}

/// A straight segment in canvas space.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Segment {
	pub start: Point,
	pub end: Point,
}

#[derive(Clone, Debug, Default)]
pub struct PointerController {
	gesture: Gesture,
}

impl PointerController {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn is_idle(&self) -> bool {
		matches!(self.gesture, Gesture::Idle)
	}

	/// Whether `id` takes part in the running gesture.
	pub fn involves(&self, id: &NodeId) -> bool {
		match &self.gesture {
			Gesture::Idle => false,
			Gesture::Dragging { node, .. } => node == id,
			Gesture::Connecting { source, .. } => source == id,
		}
	}

	/// Starts a drag, or a connection when `connect` (Shift) is held.
	///
	/// Ignored unless idle, and for nodes the graph does not know.
	pub fn pointer_down(&mut self, graph: &GraphModel, id: &NodeId, cursor: Point, connect: bool) {
		if !self.is_idle() {
			debug!("pointer down on {id} dropped: gesture in progress");
			return;
		}
		let Some(node) = graph.find_node(id) else {
			return;
		};
		self.gesture = if connect {
			debug!("connecting from {id}");
			Gesture::Connecting {
				source: id.clone(),
				cursor: node.position,
			}
		} else {
			debug!("dragging {id}");
			Gesture::Dragging {
				node: id.clone(),
				grab_offset: cursor - node.position,
				press: cursor,
				travelled: false,
			}
		};
	}

	pub fn pointer_move(&mut self, graph: &mut GraphModel, cursor: Point) {
		match &mut self.gesture {
			Gesture::Idle => {}
			Gesture::Dragging {
				node,
				grab_offset,
				press,
				travelled,
			} => {
				*travelled |= (cursor - *press).hypot() > CLICK_SLOP;
				graph.update_node_position(node, cursor - *grab_offset);
			}
			Gesture::Connecting { cursor: end, .. } => *end = cursor,
		}
	}

	/// Pointer released over `target`.
	pub fn pointer_up_on(&mut self, graph: &mut GraphModel, target: &NodeId) -> GestureEnd {
		match std::mem::take(&mut self.gesture) {
			Gesture::Idle => GestureEnd::Idle,
			Gesture::Dragging { node, travelled, .. } => {
				if !travelled && &node == target {
					GestureEnd::Clicked(node)
				} else {
					GestureEnd::Dragged(node)
				}
			}
			Gesture::Connecting { source, .. } => {
				if &source != target && graph.add_connection(&source, target) {
					debug!("connected {source} - {target}");
					GestureEnd::Connected(Connection::new(source, target.clone()))
				} else {
					GestureEnd::Rejected
				}
			}
		}
	}

	/// Pointer released with no node under it, or the pointer left the canvas.
	pub fn pointer_up(&mut self) -> GestureEnd {
		match std::mem::take(&mut self.gesture) {
			Gesture::Idle => GestureEnd::Idle,
			Gesture::Dragging { node, .. } => GestureEnd::Dragged(node),
			Gesture::Connecting { source, .. } => {
				debug!("connection from {source} abandoned");
				GestureEnd::Abandoned
			}
		}
	}

	/// The not-yet-committed connection line, anchored at the source's current position.
	pub fn transient_line(&self, graph: &GraphModel) -> Option<Segment> {
		let Gesture::Connecting { source, cursor } = &self.gesture else {
			return None;
		};
		graph.find_node(source).map(|node| Segment {
			start: node.position,
			end: *cursor,
		})
	}
}
