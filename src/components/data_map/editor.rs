use log::{debug, info};

use super::graph::GraphModel;
use super::types::NodeId;

/// Tracks the single node whose label is being edited inline.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TextEditor {
	active: Option<NodeId>,
}

impl TextEditor {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn active(&self) -> Option<&NodeId> {
		self.active.as_ref()
	}

	pub fn is_editing(&self, id: &NodeId) -> bool {
		self.active.as_ref() == Some(id)
	}

	/// Puts `id` into edit mode and returns the text to seed the field with.
	///
	/// A previously active node is released without writing its text.
	pub fn begin(&mut self, graph: &GraphModel, id: &NodeId) -> Option<String> {
		let node = graph.find_node(id)?;
		if let Some(previous) = self.active.replace(id.clone()) {
			if &previous != id {
				debug!("edit of {previous} released for {id}");
			}
		}
		Some(node.text.clone())
	}

	/// Writes `value` to the active node and leaves edit mode.
	pub fn commit(&mut self, graph: &mut GraphModel, value: impl Into<String>) -> Option<NodeId> {
		let id = self.active.take()?;
		let value = value.into();
		info!("renamed {id} to {value:?}");
		graph.update_node_text(&id, value);
		Some(id)
	}

	/// Leaves edit mode without writing.
	pub fn cancel(&mut self) {
		self.active = None;
	}
}
