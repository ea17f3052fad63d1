use leptos::prelude::*;
use log::error;
use web_sys::MouseEvent;

use crate::components::data_map::{
	Connection, DataMapCanvas, EditorConfig, EditorSession, GraphModel, Node, download_svg,
};

/// The starting map: one main node, six categories and their entries.
pub fn personal_data_map() -> GraphModel {
	let categories: [(&str, f64, f64, &str, [(&str, f64, f64, &str); 3]); 6] = [
		(
			"bio",
			300.0,
			200.0,
			"Biometric Data",
			[
				("height", 250.0, 150.0, "Height: 5'8\""),
				("weight", 400.0, 150.0, "Weight"),
				("dna", 250.0, 250.0, "DNA Profile"),
			],
		),
		(
			"health",
			400.0,
			400.0,
			"Health Data",
			[
				("medical", 450.0, 450.0, "Medical History"),
				("fitness", 300.0, 450.0, "Fitness Data"),
				("allergies", 400.0, 500.0, "Allergies"),
			],
		),
		(
			"financial",
			700.0,
			200.0,
			"Financial Data",
			[
				("bank", 800.0, 150.0, "Bank Accounts"),
				("invest", 750.0, 250.0, "Investments"),
				("crypto", 850.0, 200.0, "Crypto Assets"),
			],
		),
		(
			"digital",
			600.0,
			400.0,
			"Digital Data",
			[
				("social", 600.0, 450.0, "Social Media"),
				("email", 800.0, 450.0, "Email Accounts"),
				("devices", 650.0, 500.0, "Devices"),
			],
		),
		(
			"professional",
			350.0,
			300.0,
			"Professional",
			[
				("education", 200.0, 300.0, "Education"),
				("work", 250.0, 350.0, "Work History"),
				("skills", 200.0, 400.0, "Skills"),
			],
		),
		(
			"personal",
			700.0,
			300.0,
			"Personal Info",
			[
				("identity", 900.0, 300.0, "Identity Docs"),
				("contact", 750.0, 350.0, "Contact Info"),
				("family", 800.0, 400.0, "Family Data"),
			],
		),
	];

	let mut nodes = vec![Node::new("main", 550.0, 300.0, "MY DATA", true)];
	let mut entry_nodes = Vec::new();
	let mut links = Vec::new();
	let mut entry_links = Vec::new();
	for (id, x, y, text, entries) in categories {
		nodes.push(Node::new(id, x, y, text, true));
		links.push(Connection::new("main", id));
		for (entry, ex, ey, etext) in entries {
			entry_nodes.push(Node::new(entry, ex, ey, etext, false));
			entry_links.push(Connection::new(id, entry));
		}
	}
	nodes.extend(entry_nodes);
	links.extend(entry_links);

	GraphModel::from_parts(nodes, links)
}

/// Default Home Page
#[component]
pub fn Home() -> impl IntoView {
	let session = RwSignal::new(EditorSession::new(
		personal_data_map(),
		EditorConfig::default(),
	));
	let export_error = RwSignal::new(None::<String>);

	let add_node = move |primary: bool| {
		session.update(|s| {
			s.add_node(primary);
		});
	};

	let save_svg = move |_: MouseEvent| {
		let result = session.with(|s| {
			let svg = s.on_export_requested()?;
			download_svg(&s.config().export.file_name, &svg)
		});
		match result {
			Ok(()) => export_error.set(None),
			Err(err) => {
				error!("export failed: {err}");
				export_error.set(Some(err.to_string()));
			}
		}
	};

	view! {
		<ErrorBoundary fallback=|errors| {
			view! {
				<h1>"Uh oh! Something went wrong!"</h1>

				<p>"Errors: "</p>
				<ul>
					{move || {
						errors
							.get()
							.into_iter()
							.map(|(_, e)| view! { <li>{e.to_string()}</li> })
							.collect_view()
					}}
				</ul>
			}
		}>

			<div class="data-map-page">
				<h1 class="page-title">"My Data or Your Data ?"</h1>
				<div class="toolbar">
					<p class="subtitle">"Map and organize your personal data categories"</p>
					<div class="buttons">
						<button class="primary" on:click=move |_| add_node(true)>
							"Add Primary Node"
						</button>
						<button class="outline" on:click=move |_| add_node(false)>
							"Add Secondary Node"
						</button>
						<button class="outline" on:click=save_svg>
							"Save as SVG"
						</button>
					</div>
					<p class="hint">"Hold Shift + Drag between nodes to create connections"</p>
					<p class="hint">"Right-click on a connection to delete it"</p>
					{move || export_error.get().map(|msg| view! { <p class="error">{msg}</p> })}
				</div>
				<DataMapCanvas session=session />
			</div>
		</ErrorBoundary>
	}
}
