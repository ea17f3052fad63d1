//! Device-to-canvas coordinate mapping.

use kurbo::{Affine, Point};
use wasm_bindgen::JsCast;
use web_sys::{Element, MouseEvent, SvgGraphicsElement};

/// The canvas element's current canvas-to-device matrix `[a b c d e f]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScreenTransform(Affine);

impl ScreenTransform {
	/// Builds the transform from the six SVG matrix coefficients.
	pub fn new(a: f64, b: f64, c: f64, d: f64, e: f64, f: f64) -> Self {
		Self(Affine::new([a, b, c, d, e, f]))
	}

	/// Maps a device point into canvas space, or `None` when the matrix cannot
	/// be inverted.
	pub fn to_canvas(&self, device: Point) -> Option<Point> {
		let det = self.0.determinant();
		if !det.is_finite() || det.abs() < f64::EPSILON {
			return None;
		}
		let canvas = self.0.inverse() * device;
		canvas.is_finite().then_some(canvas)
	}
}

/// Reads the element's screen matrix. Absent while the element is not laid out.
pub fn screen_ctm(element: &SvgGraphicsElement) -> Option<ScreenTransform> {
	let m = element.get_screen_ctm()?;
	Some(ScreenTransform::new(
		m.a() as f64,
		m.b() as f64,
		m.c() as f64,
		m.d() as f64,
		m.e() as f64,
		m.f() as f64,
	))
}

/// Canvas-space position of a mouse event. The matrix is read on every call
/// since resizes and scrolling move the canvas between events.
pub fn pointer_to_canvas(canvas: impl Into<Element>, ev: &MouseEvent) -> Option<Point> {
	let element: Element = canvas.into();
	let graphics = element.dyn_into::<SvgGraphicsElement>().ok()?;
	let transform = screen_ctm(&graphics)?;
	transform.to_canvas(Point::new(ev.client_x() as f64, ev.client_y() as f64))
}
