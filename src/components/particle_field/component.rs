//! Leptos component mounting the particle field on a full-viewport canvas.
//!
//! The canvas sits behind the page and ignores pointer events. The frame
//! callback runs via `requestAnimationFrame`; a window `resize` listener
//! regenerates the field. Both are owned by a single [`Mount`] guard whose
//! `Drop` tears them down together when the component is cleaned up.

use std::rc::Rc;

use leptos::prelude::*;
use log::{debug, info, warn};
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, Window};

use super::backdrop::Backdrop;
use super::frame_loop::AnimationFrameScheduler;
use super::particles::ParticleField;
use super::random::MathRandom;
use super::theme::ParticleStyle;

type BrowserBackdrop = Backdrop<MathRandom, AnimationFrameScheduler>;

/// Live frame loop plus resize listener for one mounted canvas.
struct Mount {
	window: Window,
	backdrop: Rc<BrowserBackdrop>,
	on_resize: Closure<dyn FnMut()>,
}

impl Drop for Mount {
	fn drop(&mut self) {
		self.backdrop.stop();
		self.backdrop.scheduler().release();
		let _ = self
			.window
			.remove_event_listener_with_callback("resize", self.on_resize.as_ref().unchecked_ref());
		debug!("portfolio-backdrop: particle field torn down");
	}
}

fn viewport_size(window: &Window) -> (f64, f64) {
	let read = |v: Result<JsValue, JsValue>| v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
	(read(window.inner_width()), read(window.inner_height()))
}

fn fit_canvas(canvas: &HtmlCanvasElement, width: f64, height: f64) {
	canvas.set_width(width as u32);
	canvas.set_height(height as u32);
}

/// Wire the field to `canvas` and start animating. `None` if the canvas has
/// no 2D context.
fn mount(canvas: HtmlCanvasElement, window: Window, style: ParticleStyle) -> Option<Mount> {
	let mut ctx: CanvasRenderingContext2d = canvas.get_context("2d").ok()??.dyn_into().ok()?;

	let (w, h) = viewport_size(&window);
	fit_canvas(&canvas, w, h);

	let field = ParticleField::new(style, MathRandom);
	let scheduler = AnimationFrameScheduler::new(window.clone());
	let backdrop = Rc::new(Backdrop::new(field, scheduler, w, h));
	info!(
		"portfolio-backdrop: {} particles for {}x{} viewport",
		backdrop.particle_count(),
		w,
		h
	);

	let backdrop_frame = backdrop.clone();
	backdrop
		.scheduler()
		.set_callback(Closure::new(move || {
			backdrop_frame.frame(&mut ctx);
		}));

	let (backdrop_resize, window_resize) = (backdrop.clone(), window.clone());
	let on_resize: Closure<dyn FnMut()> = Closure::new(move || {
		let (nw, nh) = viewport_size(&window_resize);
		fit_canvas(&canvas, nw, nh);
		backdrop_resize.resize(nw, nh);
	});
	let _ = window.add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref());

	backdrop.start();

	Some(Mount {
		window,
		backdrop,
		on_resize,
	})
}

/// Decorative particle backdrop filling the viewport.
///
/// Pass `style` to override the default pale-blue look. A style that fails
/// validation is replaced by the default.
#[component]
pub fn ParticleFieldCanvas(#[prop(optional)] style: Option<ParticleStyle>) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let mounted = StoredValue::new_local(None::<Mount>);
	let style = match style.map(|s| s.validate().map(|()| s)) {
		Some(Ok(style)) => style,
		Some(Err(e)) => {
			warn!("portfolio-backdrop: invalid particle style, using defaults: {}", e);
			ParticleStyle::default()
		}
		None => ParticleStyle::default(),
	};

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let Some(window) = web_sys::window() else {
			return;
		};
		// Drops any previous mount first, so a re-run never leaves a second loop behind.
		mounted.set_value(None);
		mounted.set_value(mount(canvas.into(), window, style.clone()));
	});

	on_cleanup(move || {
		let _ = mounted.try_update_value(Option::take);
	});

	view! {
		<canvas
			node_ref=canvas_ref
			class="particle-field-canvas"
			aria-hidden="true"
			style="position: fixed; inset: 0; display: block; pointer-events: none; z-index: 0;"
		/>
	}
}
