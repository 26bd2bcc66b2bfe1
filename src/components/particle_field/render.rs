//! Drawing the particle field.
//!
//! Each frame clears the whole surface and redraws every particle as a
//! radial glow followed by a solid core. [`Surface`] is the only thing the
//! renderer talks to; the browser implementation draws on a 2D canvas
//! context.

use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::particles::{Particle, ParticleField};
use super::random::RandomSource;
use super::theme::{Color, ParticleStyle};

/// Minimal drawing API needed by the particle field.
pub trait Surface {
	/// Erase the whole `width × height` area.
	fn clear(&mut self, width: f64, height: f64);

	/// Disc of `radius` whose color fades radially from `inner` to `outer`.
	fn fill_radial_glow(&mut self, x: f64, y: f64, radius: f64, inner: Color, outer: Color);

	/// Solid disc of `radius`.
	fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: Color);
}

impl Surface for CanvasRenderingContext2d {
	fn clear(&mut self, width: f64, height: f64) {
		self.clear_rect(0.0, 0.0, width, height);
	}

	fn fill_radial_glow(&mut self, x: f64, y: f64, radius: f64, inner: Color, outer: Color) {
		let Ok(gradient) = self.create_radial_gradient(x, y, 0.0, x, y, radius) else {
			return;
		};
		let _ = gradient.add_color_stop(0.0, &inner.to_css());
		let _ = gradient.add_color_stop(1.0, &outer.to_css());

		#[allow(deprecated)]
		self.set_fill_style(&gradient);
		self.begin_path();
		let _ = self.arc(x, y, radius, 0.0, PI * 2.0);
		self.fill();
	}

	fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: Color) {
		self.set_fill_style_str(&color.to_css());
		self.begin_path();
		let _ = self.arc(x, y, radius, 0.0, PI * 2.0);
		self.fill();
	}
}

/// Clear the surface and redraw every particle in the field.
pub fn render_frame<R: RandomSource>(field: &ParticleField<R>, surface: &mut impl Surface) {
	surface.clear(field.width(), field.height());

	let style = field.style();
	for p in field.particles() {
		draw_particle(p, style, surface);
	}
}

fn draw_particle(p: &Particle, style: &ParticleStyle, surface: &mut impl Surface) {
	surface.fill_radial_glow(
		p.x,
		p.y,
		p.glow_radius,
		style.glow_color.with_alpha(p.opacity * style.glow_alpha),
		style.glow_color.with_alpha(0.0),
	);
	surface.fill_circle(p.x, p.y, p.size, style.core_color.with_alpha(p.opacity));
}

#[cfg(test)]
pub(crate) mod tests {
	use super::*;
	use crate::components::particle_field::random::XorShiftRng;

	/// One recorded draw call.
	#[derive(Clone, Debug, PartialEq)]
	pub enum DrawCall {
		Clear(f64, f64),
		Glow {
			x: f64,
			y: f64,
			radius: f64,
			inner: Color,
			outer: Color,
		},
		Circle {
			x: f64,
			y: f64,
			radius: f64,
			color: Color,
		},
	}

	/// Surface that records instead of drawing.
	#[derive(Debug, Default)]
	pub struct RecordingSurface {
		pub calls: Vec<DrawCall>,
	}

	impl Surface for RecordingSurface {
		fn clear(&mut self, width: f64, height: f64) {
			self.calls.push(DrawCall::Clear(width, height));
		}

		fn fill_radial_glow(&mut self, x: f64, y: f64, radius: f64, inner: Color, outer: Color) {
			self.calls.push(DrawCall::Glow {
				x,
				y,
				radius,
				inner,
				outer,
			});
		}

		fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: Color) {
			self.calls.push(DrawCall::Circle {
				x,
				y,
				radius,
				color,
			});
		}
	}

	fn field(width: f64, height: f64) -> ParticleField<XorShiftRng> {
		let mut field = ParticleField::new(ParticleStyle::default(), XorShiftRng::new(4));
		field.on_viewport_resize(width, height);
		field
	}

	#[test]
	fn frame_clears_then_draws_glow_and_core_per_particle() {
		let f = field(500.0, 500.0);
		let mut surface = RecordingSurface::default();
		render_frame(&f, &mut surface);

		assert_eq!(surface.calls.len(), 1 + 2 * f.particles().len());
		assert_eq!(surface.calls[0], DrawCall::Clear(500.0, 500.0));

		let style = f.style();
		for (p, pair) in f.particles().iter().zip(surface.calls[1..].chunks(2)) {
			assert_eq!(
				pair[0],
				DrawCall::Glow {
					x: p.x,
					y: p.y,
					radius: p.glow_radius,
					inner: style.glow_color.with_alpha(p.opacity * 0.2),
					outer: style.glow_color.with_alpha(0.0),
				}
			);
			assert_eq!(
				pair[1],
				DrawCall::Circle {
					x: p.x,
					y: p.y,
					radius: p.size,
					color: style.core_color.with_alpha(p.opacity),
				}
			);
		}
	}

	#[test]
	fn empty_field_only_clears() {
		let f = field(0.0, 0.0);
		let mut surface = RecordingSurface::default();
		render_frame(&f, &mut surface);
		assert_eq!(surface.calls, vec![DrawCall::Clear(0.0, 0.0)]);
	}
}
