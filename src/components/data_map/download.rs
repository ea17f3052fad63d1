use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

use super::error::ExportError;

fn js_error(err: JsValue) -> ExportError {
	ExportError::Download(err.as_string().unwrap_or_else(|| format!("{err:?}")))
}

fn missing(what: &str) -> ExportError {
	ExportError::Download(format!("{what} unavailable"))
}

/// Hands `svg` to the browser as a file download named `file_name`.
pub fn download_svg(file_name: &str, svg: &str) -> Result<(), ExportError> {
	let window = web_sys::window().ok_or_else(|| missing("window"))?;
	let document = window.document().ok_or_else(|| missing("document"))?;
	let body = document.body().ok_or_else(|| missing("document body"))?;

	let parts = js_sys::Array::of1(&JsValue::from_str(svg));
	let options = BlobPropertyBag::new();
	options.set_type("image/svg+xml");
	let blob = Blob::new_with_str_sequence_and_options(&parts, &options).map_err(js_error)?;

	let link: HtmlAnchorElement = document
		.create_element("a")
		.map_err(js_error)?
		.dyn_into()
		.map_err(|_| missing("anchor element"))?;
	link.set_download(file_name);
	body.append_child(&link).map_err(js_error)?;

	let clicked = with_object_url(
		|| Url::create_object_url_with_blob(&blob),
		|url| {
			link.set_href(url);
			link.click();
		},
		|url| Url::revoke_object_url(url),
	);
	let detached = body.remove_child(&link).map(drop);
	clicked.and(detached).map_err(js_error)
}

/// Creates a URL, hands it to `visit` and revokes it. Nothing fallible runs
/// between creation and revocation.
fn with_object_url<E>(
	create: impl FnOnce() -> Result<String, E>,
	visit: impl FnOnce(&str),
	revoke: impl FnOnce(&str) -> Result<(), E>,
) -> Result<(), E> {
	let url = create()?;
	visit(&url);
	revoke(&url)
}
