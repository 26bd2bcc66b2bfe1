//! portfolio-backdrop: ambient particle backdrop and navigation for a
//! single-page portfolio.
//!
//! This crate provides a WASM-based page shell: a full-viewport decorative
//! particle field drawn on a canvas behind the content, plus the fixed
//! top navigation with its collapsible mobile menu.

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info, warn};
use wasm_bindgen::JsCast;
use web_sys::{HtmlScriptElement, Window};

pub mod components;

pub use components::nav_menu::{NavLink, NavMenu};
pub use components::particle_field::{ParticleFieldCanvas, ParticleStyle};

/// In-page sections linked from the navigation bar.
pub const NAV_LINKS: [NavLink; 6] = [
	NavLink { label: "About", href: "#hero" },
	NavLink { label: "Education", href: "#education" },
	NavLink { label: "Experience", href: "#experience" },
	NavLink { label: "Projects", href: "#projects" },
	NavLink { label: "Skills", href: "#skills" },
	NavLink { label: "Contact", href: "#contact" },
];

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("portfolio-backdrop: logging initialized");
}

/// Parse a particle style override.
///
/// The JSON is either a preset name (`"ember"`) or an object of
/// `ParticleStyle` fields; fields left out keep their defaults. Objects
/// that fail [`ParticleStyle::validate`] are rejected.
pub fn parse_style(json_text: &str) -> Result<ParticleStyle, String> {
	if let Ok(name) = serde_json::from_str::<String>(json_text) {
		return ParticleStyle::by_name(&name).ok_or_else(|| format!("unknown preset {name:?}"));
	}
	let style = serde_json::from_str::<ParticleStyle>(json_text).map_err(|e| e.to_string())?;
	style.validate()?;
	Ok(style)
}

/// Load a particle style override from a script element with id="particle-config".
fn load_style() -> Option<ParticleStyle> {
	let window: Window = web_sys::window()?;
	let document = window.document()?;
	let element = document.get_element_by_id("particle-config")?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	let json_text = script.text().ok()?;

	match parse_style(&json_text) {
		Ok(style) => {
			info!("portfolio-backdrop: loaded particle style override");
			Some(style)
		}
		Err(e) => {
			warn!("portfolio-backdrop: failed to parse particle config: {}", e);
			None
		}
	}
}

/// Main application component.
/// Mounts the particle backdrop behind the navigation bar.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let style = load_style().unwrap_or_default();

	view! {
		<Html attr:lang="en" attr:dir="ltr" attr:data-theme="dark" />
		<Title text="Leon Tan" />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<ParticleFieldCanvas style=style />
		<NavMenu brand="LT" links=NAV_LINKS.to_vec() />
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn preset_name_selects_preset() {
		assert_eq!(parse_style(r#""ember""#), Ok(ParticleStyle::ember()));
	}

	#[test]
	fn unknown_preset_is_rejected() {
		let err = parse_style(r#""neon""#).unwrap_err();
		assert!(err.contains("neon"));
	}

	#[test]
	fn object_overrides_individual_fields() {
		let style = parse_style(r#"{ "wrap_margin": 20 }"#).unwrap();
		assert_eq!(style.wrap_margin, 20.0);
		assert_eq!(style.density, ParticleStyle::default().density);
	}

	#[test]
	fn tiny_density_is_rejected() {
		let err = parse_style(r#"{ "density": 1e-300 }"#).unwrap_err();
		assert!(err.contains("density"));
	}

	#[test]
	fn negative_wrap_margin_is_rejected() {
		let err = parse_style(r#"{ "wrap_margin": -50 }"#).unwrap_err();
		assert!(err.contains("wrap_margin"));
	}

	#[test]
	fn inverted_band_is_rejected() {
		let err = parse_style(r#"{ "velocity_x": { "min": 0.5, "max": -0.5 } }"#).unwrap_err();
		assert!(err.contains("velocity_x"));
	}

	#[test]
	fn malformed_json_is_an_error() {
		assert!(parse_style("{ density: ").is_err());
	}

	#[test]
	fn nav_links_are_in_page_anchors() {
		assert!(NAV_LINKS.iter().all(|l| l.href.starts_with('#')));
		assert_eq!(NAV_LINKS[0].label, "About");
	}
}
