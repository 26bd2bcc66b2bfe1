//! Fixed top navigation with a collapsible mobile menu.
//!
//! Wide viewports get an inline link list. Below the breakpoint the links
//! collapse behind a toggle button, and picking a link closes the menu again.

use leptos::ev;
use leptos::prelude::*;

/// Viewport width (px) at and above which the inline desktop list is shown.
pub const DESKTOP_BREAKPOINT: f64 = 768.0;

/// An in-page navigation target.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
	/// Text shown in the menu.
	pub label: &'static str,
	/// Fragment of the target section, e.g. `#contact`.
	pub href: &'static str,
}

/// How the menu is laid out for a given viewport.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuLayout {
	/// Inline link list, no toggle.
	Desktop,
	/// Toggle button; the link list is shown only while `open`.
	Mobile { open: bool },
}

/// Open/closed state of the mobile menu.
///
/// The state survives crossing the breakpoint: a menu left open on mobile is
/// open again when the viewport shrinks back.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuState {
	open: bool,
}

impl MenuState {
	/// Whether the mobile list is expanded.
	pub fn is_open(&self) -> bool {
		self.open
	}

	/// Open a closed menu, close an open one.
	pub fn toggle(&mut self) {
		self.open = !self.open;
	}

	/// Collapse the menu; no-op when already closed.
	pub fn close(&mut self) {
		self.open = false;
	}

	/// Layout for a viewport `viewport_width` CSS pixels wide.
	pub fn layout(&self, viewport_width: f64) -> MenuLayout {
		if viewport_width >= DESKTOP_BREAKPOINT {
			MenuLayout::Desktop
		} else {
			MenuLayout::Mobile { open: self.open }
		}
	}
}

fn viewport_width() -> f64 {
	web_sys::window()
		.and_then(|w| w.inner_width().ok())
		.and_then(|v| v.as_f64())
		.unwrap_or(DESKTOP_BREAKPOINT)
}

/// Top navigation bar.
#[component]
pub fn NavMenu(
	/// Short brand mark linking back to the top of the page.
	#[prop(into)]
	brand: String,
	links: Vec<NavLink>,
) -> impl IntoView {
	let menu = RwSignal::new(MenuState::default());
	let width = RwSignal::new(viewport_width());

	let resize = window_event_listener(ev::resize, move |_| width.set(viewport_width()));
	on_cleanup(move || resize.remove());

	let body = move || match menu.get().layout(width.get()) {
		MenuLayout::Desktop => view! {
			<ul class="site-nav__links">
				{links
					.iter()
					.map(|link| view! { <li><a href=link.href>{link.label}</a></li> })
					.collect_view()}
			</ul>
		}
		.into_any(),
		MenuLayout::Mobile { open } => view! {
			<button
				class="site-nav__toggle"
				aria-expanded=if open { "true" } else { "false" }
				on:click=move |_| menu.update(MenuState::toggle)
			>
				{if open { "Close" } else { "Menu" }}
			</button>
			{open
				.then(|| {
					view! {
						<ul class="site-nav__mobile">
							{links
								.iter()
								.map(|link| {
									view! {
										<li>
											<a href=link.href on:click=move |_| menu.update(MenuState::close)>
												{link.label}
											</a>
										</li>
									}
								})
								.collect_view()}
						</ul>
					}
				})}
		}
		.into_any(),
	};

	view! {
		<nav class="site-nav">
			<a href="#hero" class="site-nav__brand">{brand}</a>
			{body}
		</nav>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn starts_closed() {
		let menu = MenuState::default();
		assert!(!menu.is_open());
		assert_eq!(menu.layout(375.0), MenuLayout::Mobile { open: false });
	}

	#[test]
	fn toggle_flips_state() {
		let mut menu = MenuState::default();
		menu.toggle();
		assert!(menu.is_open());
		menu.toggle();
		assert!(!menu.is_open());
	}

	#[test]
	fn close_is_idempotent() {
		let mut menu = MenuState::default();
		menu.toggle();
		menu.close();
		menu.close();
		assert!(!menu.is_open());
	}

	#[test]
	fn breakpoint_switches_to_desktop() {
		let mut menu = MenuState::default();
		menu.toggle();
		assert_eq!(menu.layout(767.9), MenuLayout::Mobile { open: true });
		assert_eq!(menu.layout(768.0), MenuLayout::Desktop);
		assert_eq!(menu.layout(1440.0), MenuLayout::Desktop);
	}

	#[test]
	fn open_state_survives_a_trip_through_desktop() {
		let mut menu = MenuState::default();
		menu.toggle();
		assert_eq!(menu.layout(1024.0), MenuLayout::Desktop);
		assert_eq!(menu.layout(400.0), MenuLayout::Mobile { open: true });
	}
}
