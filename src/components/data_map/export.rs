//! Standalone SVG export of the committed graph.
//!
//! The document holds, in order: the title, one `<line>` per connection and one
//! `<g>` per node. Interaction state (drag, transient line, inline editor) never
//! reaches the output, and the same graph always serializes to the same bytes.

use std::fmt::Write as _;

use log::info;

use super::config::ExportConfig;
use super::error::ExportError;
use super::graph::GraphModel;
use super::render::{self, LABEL_FONT, LABEL_FONT_SIZE, NODE_CORNER_RADIUS, NodeShape};

/// Serializes the committed graph into a standalone SVG document.
pub fn export_svg(graph: &GraphModel, config: &ExportConfig) -> Result<String, ExportError> {
	let scene = render::build_scene(graph, None, None);
	let mut out = String::new();

	writeln!(
		out,
		r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
		w = config.width,
		h = config.height,
	)?;
	writeln!(
		out,
		r#"<text x="{}" y="{}" text-anchor="middle" font-family="{LABEL_FONT}" font-size="{}px">{}</text>"#,
		config.title_position.x,
		config.title_position.y,
		config.title_font_size,
		escape_xml(&config.title),
	)?;

	for edge in &scene.edges {
		let (start, end) = (edge.line.start, edge.line.end);
		writeln!(
			out,
			r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="black" stroke-width="1"/>"#,
			start.x, start.y, end.x, end.y,
		)?;
	}

	for node in &scene.nodes {
		write_node(&mut out, node)?;
	}

	out.push_str("</svg>\n");
	info!(
		"exported {} nodes and {} connections",
		scene.nodes.len(),
		scene.edges.len()
	);
	Ok(out)
}

fn write_node(out: &mut String, node: &NodeShape) -> std::fmt::Result {
	let origin = node.rect_origin();
	writeln!(
		out,
		concat!(
			r#"<g transform="translate({},{})">"#,
			r#"<rect x="{}" y="{}" width="{}" height="{}" fill="{}" stroke="black" stroke-width="1" rx="{r}" ry="{r}"/>"#,
			r#"<text x="0" y="0" dominant-baseline="middle" text-anchor="middle" fill="{}" font-family="{}" font-size="{}px">{}</text>"#,
			"</g>",
		),
		node.center.x,
		node.center.y,
		origin.x,
		origin.y,
		node.width,
		node.height(),
		node.fill(),
		node.text_fill(),
		LABEL_FONT,
		LABEL_FONT_SIZE,
		escape_xml(&node.label),
		r = NODE_CORNER_RADIUS,
	)
}

/// Escapes markup characters. Control characters XML 1.0 cannot carry become spaces.
fn escape_xml(input: &str) -> String {
	input.chars().fold(String::with_capacity(input.len()), |mut out, ch| {
		match ch {
			'&' => out.push_str("&amp;"),
			'<' => out.push_str("&lt;"),
			'>' => out.push_str("&gt;"),
			'"' => out.push_str("&quot;"),
			'\'' => out.push_str("&apos;"),
			'\t' | '\n' | '\r' => out.push(ch),
			c if c.is_ascii_control() && c != '\u{7f}' => out.push(' '),
			c => out.push(c),
		}
		out
	})
}
