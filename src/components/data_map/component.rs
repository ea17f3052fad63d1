use kurbo::Point;
use leptos::prelude::*;
use web_sys::{FocusEvent, KeyboardEvent, MouseEvent};

use super::interaction::Segment;
use super::render::{LABEL_FONT, LABEL_FONT_SIZE, NODE_CORNER_RADIUS, NodeShape, Scene};
use super::state::EditorSession;
use super::transform;
use super::types::NodeId;

type SvgRef = NodeRef<leptos::svg::Svg>;

/// Live SVG view of an [`EditorSession`].
///
/// Plain drag moves a node, Shift + drag draws a connection, a click opens the
/// label editor and a right click on a connection deletes it.
#[component]
pub fn DataMapCanvas(
	/// The session every event is routed through.
	session: RwSignal<EditorSession>,
	/// Canvas height in pixels.
	#[prop(default = 600.0)]
	height: f64,
) -> impl IntoView {
	let svg_ref = SvgRef::new();
	let scene = Memo::new(move |_| session.with(EditorSession::scene));
	// Rows are keyed on ids, so a drag only patches attributes of existing elements.
	let edge_keys = Memo::new(move |_| scene.with(Scene::edge_keys));
	let node_keys = Memo::new(move |_| scene.with(Scene::node_keys));

	let busy = move || session.with_untracked(|s| !s.pointer().is_idle());

	let on_mousemove = move |ev: MouseEvent| {
		if !busy() {
			return;
		}
		let Some(point) = canvas_point(svg_ref, &ev) else {
			return;
		};
		session.update(|s| s.pointer_move(point));
	};

	let on_mouseup = move |_: MouseEvent| {
		if busy() {
			session.update(|s| {
				s.pointer_up();
			});
		}
	};

	let on_mouseleave = move |_: MouseEvent| {
		if busy() {
			session.update(|s| {
				s.pointer_cancel();
			});
		}
	};

	let transient = move || {
		scene.get().transient.map(|line| {
			view! {
				<line
					x1=line.start.x.to_string()
					y1=line.start.y.to_string()
					x2=line.end.x.to_string()
					y2=line.end.y.to_string()
					stroke="black"
					stroke-width="1"
					stroke-dasharray="4"
					pointer-events="none"
				/>
			}
		})
	};

	view! {
		<svg
			node_ref=svg_ref
			class="data-map-canvas"
			width="100%"
			height=height.to_string()
			on:mousemove=on_mousemove
			on:mouseup=on_mouseup
			on:mouseleave=on_mouseleave
		>
			<For
				each=move || edge_keys.get()
				key=|pair| pair.clone()
				children=move |(from, to)| edge_view(from, to, scene, session)
			/>
			{transient}
			<For
				each=move || node_keys.get()
				key=|id| id.clone()
				children=move |id| node_view(id, scene, session, svg_ref)
			/>
		</svg>
	}
}

/// Canvas-space position of `ev`. The screen matrix is read per event; without
/// it the event is skipped.
fn canvas_point(svg_ref: SvgRef, ev: &MouseEvent) -> Option<Point> {
	transform::pointer_to_canvas(svg_ref.get_untracked()?, ev)
}

fn edge_view(
	from: NodeId,
	to: NodeId,
	scene: Memo<Scene>,
	session: RwSignal<EditorSession>,
) -> impl IntoView {
	let line = {
		let (from, to) = (from.clone(), to.clone());
		Memo::new(move |_| {
			scene.with(|s| s.edge(&from, &to).map(|edge| edge.line).unwrap_or_default())
		})
	};
	let coord = move |pick: fn(&Segment) -> f64| move || line.with(pick).to_string();
	let on_contextmenu = move |ev: MouseEvent| {
		ev.prevent_default();
		session.update(|s| s.on_connection_delete(&from, &to));
	};

	view! {
		<line
			class="connection"
			x1=coord(|l| l.start.x)
			y1=coord(|l| l.start.y)
			x2=coord(|l| l.end.x)
			y2=coord(|l| l.end.y)
			stroke="black"
			stroke-width="1"
			style="cursor: move;"
			on:contextmenu=on_contextmenu
		/>
	}
}

fn node_view(
	id: NodeId,
	scene: Memo<Scene>,
	session: RwSignal<EditorSession>,
	svg_ref: SvgRef,
) -> impl IntoView {
	let shape = {
		let id = id.clone();
		Memo::new(move |_| scene.with(|s| s.node(&id).cloned()))
	};
	let editing = Memo::new(move |_| shape.with(|s| s.as_ref().is_some_and(|s| s.editing)));
	let attr = move |read: fn(&NodeShape) -> String| {
		move || shape.with(|s| s.as_ref().map(read).unwrap_or_default())
	};

	let on_mousedown = {
		let id = id.clone();
		move |ev: MouseEvent| {
			if ev.button() != 0 {
				return;
			}
			let Some(point) = canvas_point(svg_ref, &ev) else {
				return;
			};
			session.update(|s| s.pointer_down(&id, point, ev.shift_key()));
		}
	};
	let on_mouseup = move |_: MouseEvent| {
		session.update(|s| {
			s.pointer_up_on(&id);
		});
	};

	// The editor is built once per edit; typing never re-renders it.
	let label = move || {
		if editing.get() {
			match shape.get_untracked() {
				Some(shape) => label_editor(&shape, session).into_any(),
				None => ().into_any(),
			}
		} else {
			view! {
				<text
					x="0"
					y="0"
					dominant-baseline="middle"
					text-anchor="middle"
					fill=attr(|s| s.text_fill().to_owned())
					style=format!("font-family: '{LABEL_FONT}'; font-size: {LABEL_FONT_SIZE}px; user-select: none;")
				>
					{attr(|s| s.label.clone())}
				</text>
			}
			.into_any()
		}
	};

	view! {
		<g
			transform=attr(|s| format!("translate({},{})", s.center.x, s.center.y))
			style="cursor: move;"
			on:mousedown=on_mousedown
			on:mouseup=on_mouseup
		>
			<rect
				x=attr(|s| s.rect_origin().x.to_string())
				y=attr(|s| s.rect_origin().y.to_string())
				width=attr(|s| s.width.to_string())
				height=attr(|s| s.height().to_string())
				fill=attr(|s| s.fill().to_owned())
				stroke="black"
				stroke-width="1"
				rx=NODE_CORNER_RADIUS.to_string()
				ry=NODE_CORNER_RADIUS.to_string()
			/>
			{label}
		</g>
	}
}

/// Inline text field replacing a node label. Enter or blur commits, Escape cancels.
fn label_editor(shape: &NodeShape, session: RwSignal<EditorSession>) -> impl IntoView {
	let input_ref = NodeRef::<leptos::html::Input>::new();
	Effect::new(move |_| {
		if let Some(input) = input_ref.get() {
			let _ = input.focus();
		}
	});

	let commit = move |value: String| {
		session.update(|s| {
			s.commit_edit(value);
		});
	};
	let origin = shape.rect_origin();

	view! {
		<foreignObject
			x=(origin.x + 5.0).to_string()
			y=(origin.y + 3.0).to_string()
			width=(shape.width - 10.0).to_string()
			height=(shape.height() - 6.0).to_string()
		>
			<input
				node_ref=input_ref
				type="text"
				class="node-label-input"
				value=shape.label.clone()
				on:mousedown=|ev: MouseEvent| ev.stop_propagation()
				on:blur=move |ev: FocusEvent| commit(event_target_value(&ev))
				on:keydown=move |ev: KeyboardEvent| match ev.key().as_str() {
					"Enter" => commit(event_target_value(&ev)),
					"Escape" => session.update(EditorSession::cancel_edit),
					_ => {}
				}
			/>
		</foreignObject>
	}
}
