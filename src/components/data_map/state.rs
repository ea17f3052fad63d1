use kurbo::Point;
use log::{debug, info};

use super::config::EditorConfig;
use super::editor::TextEditor;
use super::error::ExportError;
use super::export;
use super::graph::GraphModel;
use super::interaction::{GestureEnd, PointerController};
use super::render::{self, Scene};
use super::types::NodeId;

/// One editing session: the graph plus the interaction state layered on top.
///
/// The owner (a page component) routes every UI event through these methods,
/// one at a time, in arrival order.
#[derive(Clone, Debug, Default)]
pub struct EditorSession {
	graph: GraphModel,
	pointer: PointerController,
	editor: TextEditor,
	config: EditorConfig,
}

impl EditorSession {
	/// Starts a session on `graph` with no gesture and no edit in progress.
	pub fn new(graph: GraphModel, config: EditorConfig) -> Self {
		Self {
			graph,
			pointer: PointerController::new(),
			editor: TextEditor::new(),
			config,
		}
	}

	/// The committed graph.
	pub fn graph(&self) -> &GraphModel {
		&self.graph
	}

	/// The gesture machine.
	pub fn pointer(&self) -> &PointerController {
		&self.pointer
	}

	/// The inline label editor.
	pub fn editor(&self) -> &TextEditor {
		&self.editor
	}

	/// Settings the session was started with.
	pub fn config(&self) -> &EditorConfig {
		&self.config
	}

	/// Adds a node with the configured default text and position.
	pub fn add_node(&mut self, primary: bool) -> NodeId {
		let id = self.graph.add_node(
			self.config.new_node_position,
			self.config.new_node_text.clone(),
			primary,
		);
		info!("added {} node {id}", if primary { "primary" } else { "secondary" });
		id
	}

	/// Opens the inline editor on `id`. Returns the seed text.
	pub fn on_node_click(&mut self, id: &NodeId) -> Option<String> {
		if self.pointer.involves(id) {
			return None;
		}
		self.editor.begin(&self.graph, id)
	}

	/// Deletes the connection between `from` and `to`, if there is one.
	pub fn on_connection_delete(&mut self, from: &NodeId, to: &NodeId) {
		if self.graph.remove_connection(from, to) {
			info!("removed connection {from} - {to}");
		}
	}

	/// Serializes the committed graph.
	pub fn on_export_requested(&self) -> Result<String, ExportError> {
		export::export_svg(&self.graph, &self.config.export)
	}

	/// Press on node `id`. Shift (`connect`) starts a connection instead of a drag.
	///
	/// Ignored while that node's label is being edited.
	pub fn pointer_down(&mut self, id: &NodeId, cursor: Point, connect: bool) {
		if self.editor.is_editing(id) {
			debug!("pointer down on {id} ignored while its label is edited");
			return;
		}
		self.pointer.pointer_down(&self.graph, id, cursor, connect);
	}

	/// Pointer moved to `cursor`, in canvas space.
	pub fn pointer_move(&mut self, cursor: Point) {
		self.pointer.pointer_move(&mut self.graph, cursor);
	}

	/// Release over a node. A click opens the inline editor.
	pub fn pointer_up_on(&mut self, target: &NodeId) -> GestureEnd {
		let end = self.pointer.pointer_up_on(&mut self.graph, target);
		if let GestureEnd::Clicked(id) = &end {
			self.editor.begin(&self.graph, id);
		}
		end
	}

	/// Release with nothing under the pointer.
	pub fn pointer_up(&mut self) -> GestureEnd {
		self.pointer.pointer_up()
	}

	/// The pointer left the canvas mid-gesture.
	pub fn pointer_cancel(&mut self) -> GestureEnd {
		self.pointer.pointer_up()
	}

	/// Writes `text` to the node being edited and closes the editor.
	pub fn commit_edit(&mut self, text: impl Into<String>) -> Option<NodeId> {
		self.editor.commit(&mut self.graph, text)
	}

	/// Closes the editor and keeps the old label.
	pub fn cancel_edit(&mut self) {
		self.editor.cancel();
	}

	/// The frame to draw, transient state included.
	pub fn scene(&self) -> Scene {
		render::build_scene(
			&self.graph,
			self.pointer.transient_line(&self.graph),
			self.editor.active(),
		)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::data_map::types::Node;

	fn session() -> EditorSession {
		EditorSession::new(
			GraphModel::from_parts(
				[
					Node::new("a", 0.0, 0.0, "A", true),
					Node::new("b", 100.0, 0.0, "B", false),
				],
				[],
			),
			EditorConfig::default(),
		)
	}

	#[test]
	fn add_node_uses_configured_defaults() {
		let mut session = session();
		let id = session.add_node(true);
		let node = session.graph().find_node(&id).cloned();
		assert_eq!(
			node.map(|n| (n.position, n.text, n.is_main)),
			Some((Point::new(400.0, 300.0), "New Data Point".to_owned(), true))
		);
	}

	#[test]
	fn click_enters_edit_mode() {
		let mut session = session();
		let a = NodeId::from("a");
		session.pointer_down(&a, Point::new(1.0, 1.0), false);
		assert_eq!(session.pointer_up_on(&a), GestureEnd::Clicked(a.clone()));
		assert!(session.editor().is_editing(&a));
		assert_eq!(session.graph().find_node(&a).map(|n| n.position), Some(Point::ZERO));
		assert!(session.scene().nodes[0].editing);
	}

	#[test]
	fn edited_node_cannot_be_grabbed() {
		let mut session = session();
		let a = NodeId::from("a");
		session.on_node_click(&a);
		session.pointer_down(&a, Point::ZERO, false);
		assert!(session.pointer().is_idle());
		session.pointer_down(&a, Point::ZERO, true);
		assert!(session.pointer().is_idle());
	}

	#[test]
	fn dragged_node_cannot_enter_edit_mode() {
		let mut session = session();
		let a = NodeId::from("a");
		session.pointer_down(&a, Point::ZERO, false);
		assert_eq!(session.on_node_click(&a), None);
		assert_eq!(session.editor().active(), None);
	}

	#[test]
	fn transient_line_shows_in_scene_but_not_in_export() {
		let mut session = session();
		let before = session.on_export_requested().unwrap();
		session.pointer_down(&"a".into(), Point::ZERO, true);
		session.pointer_move(Point::new(60.0, 70.0));
		assert!(session.scene().transient.is_some());
		assert_eq!(session.on_export_requested().unwrap(), before);

		assert_eq!(session.pointer_up(), GestureEnd::Abandoned);
		assert!(session.scene().transient.is_none());
		assert_eq!(session.graph().connection_count(), 0);
	}

	#[test]
	fn export_ignores_the_inline_editor() {
		let mut session = session();
		let before = session.on_export_requested().unwrap();
		session.on_node_click(&"b".into());
		assert_eq!(session.on_export_requested().unwrap(), before);
	}

	#[test]
	fn cancel_ends_the_gesture_like_a_release() {
		let mut session = session();
		session.pointer_down(&"a".into(), Point::ZERO, true);
		assert_eq!(session.pointer_cancel(), GestureEnd::Abandoned);
		assert!(session.pointer().is_idle());
	}

	#[test]
	fn context_menu_deletes_either_direction() {
		let mut session = session();
		let (a, b) = (NodeId::from("a"), NodeId::from("b"));
		session.pointer_down(&a, Point::ZERO, true);
		session.pointer_up_on(&b);
		assert_eq!(session.graph().connection_count(), 1);
		session.on_connection_delete(&b, &a);
		assert_eq!(session.graph().connection_count(), 0);
	}
}
