use kurbo::Point;

/// Settings for the exported image.
#[derive(Clone, Debug, PartialEq)]
pub struct ExportConfig {
	/// Label written at the top of every export.
	pub title: String,
	pub title_position: Point,
	pub title_font_size: f64,
	pub width: f64,
	pub height: f64,
	/// Name offered for the downloaded file.
	pub file_name: String,
}

impl Default for ExportConfig {
	fn default() -> Self {
		Self {
			title: "My Personal Data Map".into(),
			title_position: Point::new(400.0, 30.0),
			title_font_size: 24.0,
			width: 1100.0,
			height: 600.0,
			file_name: "personal-data-map.svg".into(),
		}
	}
}

/// Settings for an editor session.
#[derive(Clone, Debug, PartialEq)]
pub struct EditorConfig {
	/// Where `add_node` places new nodes.
	pub new_node_position: Point,
	/// Label given to new nodes.
	pub new_node_text: String,
	/// Settings for [`EditorSession::on_export_requested`](super::EditorSession::on_export_requested).
	pub export: ExportConfig,
}

impl Default for EditorConfig {
	fn default() -> Self {
		Self {
			new_node_position: Point::new(400.0, 300.0),
			new_node_text: "New Data Point".into(),
			export: ExportConfig::default(),
		}
	}
}
