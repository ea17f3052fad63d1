use data_map_editor::{
	EditorConfig, EditorSession, GestureEnd, GraphModel, Node, NodeId, personal_data_map,
};
use kurbo::Point;

fn ab_session() -> EditorSession {
	EditorSession::new(
		GraphModel::from_parts(
			[
				Node::new("A", 0.0, 0.0, "A", true),
				Node::new("B", 100.0, 0.0, "B", false),
			],
			[],
		),
		EditorConfig::default(),
	)
}

fn connect(session: &mut EditorSession, from: &NodeId, to: &NodeId) -> GestureEnd {
	let start = session.graph().find_node(from).map(|n| n.position).unwrap();
	let end = session.graph().find_node(to).map(|n| n.position).unwrap();
	session.pointer_down(from, start, true);
	session.pointer_move(Point::new((start.x + end.x) / 2.0, start.y + 40.0));
	session.pointer_move(end);
	session.pointer_up_on(to)
}

#[test]
fn connecting_twice_in_opposite_directions_keeps_one_edge() {
	let mut session = ab_session();
	let (a, b) = (NodeId::from("A"), NodeId::from("B"));

	assert!(matches!(connect(&mut session, &a, &b), GestureEnd::Connected(_)));
	assert_eq!(session.graph().connection_count(), 1);
	assert!(session.graph().has_connection(&a, &b));

	assert_eq!(connect(&mut session, &b, &a), GestureEnd::Rejected);
	assert_eq!(session.graph().connection_count(), 1);
	assert!(session.scene().transient.is_none());
}

#[test]
fn drag_then_edit_then_export() {
	let mut session = ab_session();
	let (a, b) = (NodeId::from("A"), NodeId::from("B"));
	connect(&mut session, &a, &b);

	session.pointer_down(&b, Point::new(102.0, 4.0), false);
	session.pointer_move(Point::new(152.0, 84.0));
	assert_eq!(session.pointer_up(), GestureEnd::Dragged(b.clone()));
	assert_eq!(session.graph().find_node(&b).map(|n| n.position), Some(Point::new(150.0, 80.0)));
	assert_eq!(session.graph().find_node(&a).map(|n| n.position), Some(Point::ZERO));

	session.pointer_down(&a, Point::new(1.0, 0.0), false);
	assert_eq!(session.pointer_up_on(&a), GestureEnd::Clicked(a.clone()));
	assert_eq!(session.commit_edit("Alpha & Co"), Some(a.clone()));
	assert_eq!(session.commit_edit("ignored"), None);

	let svg = session.on_export_requested().unwrap();
	assert!(svg.contains(r#"<line x1="0" y1="0" x2="150" y2="80""#));
	assert!(svg.contains(">Alpha &amp; Co</text>"));
	assert!(!svg.contains("ignored"));
}

#[test]
fn new_nodes_get_fresh_ids_next_to_seeded_ones() {
	let mut session = EditorSession::new(personal_data_map(), EditorConfig::default());
	let before = session.graph().node_count();
	let primary = session.add_node(true);
	let secondary = session.add_node(false);
	assert_ne!(primary, secondary);
	assert_eq!(session.graph().node_count(), before + 2);
	assert_eq!(session.graph().find_node(&secondary).map(|n| n.is_main), Some(false));
}

#[test]
fn deleting_a_seeded_connection_from_either_end() {
	let mut session = EditorSession::new(personal_data_map(), EditorConfig::default());
	let (main, bio) = (NodeId::from("main"), NodeId::from("bio"));
	assert!(session.graph().has_connection(&main, &bio));
	session.on_connection_delete(&bio, &main);
	assert!(!session.graph().has_connection(&main, &bio));
	assert_eq!(session.graph().connection_count(), 23);
}

#[test]
fn export_of_seeded_map_is_ordered_and_stable() {
	let session = EditorSession::new(personal_data_map(), EditorConfig::default());
	let first = session.on_export_requested().unwrap();
	let second = session.on_export_requested().unwrap();
	assert_eq!(first, second);

	let children: Vec<_> = first.lines().skip(1).filter(|l| *l != "</svg>").collect();
	assert!(children[0].starts_with("<text"));
	assert!(children[1..25].iter().all(|l| l.starts_with("<line")));
	assert!(children[25..].iter().all(|l| l.starts_with("<g ")));
	assert_eq!(children.len(), 1 + 24 + 25);
}
