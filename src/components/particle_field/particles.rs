//! Ambient particle field: sampling, drift and edge wraparound.

use log::debug;

use super::random::RandomSource;
use super::theme::ParticleStyle;

/// A single floating particle.
///
/// Only the position moves; everything else is fixed at creation.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
	pub x: f64,
	pub y: f64,
	pub vx: f64,
	pub vy: f64,
	pub size: f64,
	pub opacity: f64,
	pub glow_radius: f64,
}

impl Particle {
	/// Sample a particle somewhere inside a `width × height` viewport.
	pub fn sample(
		style: &ParticleStyle,
		width: f64,
		height: f64,
		rng: &mut dyn RandomSource,
	) -> Self {
		Self {
			x: rng.uniform(0.0, width),
			y: rng.uniform(0.0, height),
			vx: style.velocity_x.sample(rng),
			vy: style.velocity_y.sample(rng) + style.drift_down,
			size: style.size.sample(rng),
			opacity: style.opacity.sample(rng),
			glow_radius: style.glow_radius.sample(rng),
		}
	}

	/// Move one frame and teleport across any edge overshot by more than `margin`.
	pub fn step(&mut self, width: f64, height: f64, margin: f64) {
		self.x = wrap(self.x + self.vx, width, margin);
		self.y = wrap(self.y + self.vy, height, margin);
	}
}

fn wrap(v: f64, extent: f64, margin: f64) -> f64 {
	if v > extent + margin {
		-margin
	} else if v < -margin {
		extent + margin
	} else {
		v
	}
}

/// Owns the particles for one viewport.
///
/// The collection is regenerated wholesale on every resize; particles are
/// never carried over between viewport sizes.
pub struct ParticleField<R> {
	particles: Vec<Particle>,
	style: ParticleStyle,
	rng: R,
	width: f64,
	height: f64,
}

impl<R: RandomSource> ParticleField<R> {
	/// An empty field. Call [`on_viewport_resize`](Self::on_viewport_resize)
	/// with the initial viewport to populate it.
	pub fn new(style: ParticleStyle, rng: R) -> Self {
		Self {
			particles: Vec::new(),
			style,
			rng,
			width: 0.0,
			height: 0.0,
		}
	}

	/// Freshly sampled particles for a `width × height` viewport.
	pub fn initialize(&mut self, width: f64, height: f64) -> Vec<Particle> {
		let count = self.style.particle_count(width, height);
		(0..count)
			.map(|_| Particle::sample(&self.style, width, height, &mut self.rng))
			.collect()
	}

	/// Discard every particle and resample for the new viewport.
	pub fn on_viewport_resize(&mut self, width: f64, height: f64) {
		let (width, height) = (sanitize(width), sanitize(height));
		self.particles = self.initialize(width, height);
		self.width = width;
		self.height = height;
		debug!(
			"portfolio-backdrop: field resized to {}x{}, {} particles",
			width,
			height,
			self.particles.len()
		);
	}

	/// Advance every particle by one frame.
	pub fn advance_frame(&mut self) {
		let margin = self.style.wrap_margin;
		for p in &mut self.particles {
			p.step(self.width, self.height, margin);
		}
	}

	pub fn particles(&self) -> &[Particle] {
		&self.particles
	}

	pub fn style(&self) -> &ParticleStyle {
		&self.style
	}

	pub fn width(&self) -> f64 {
		self.width
	}

	pub fn height(&self) -> f64 {
		self.height
	}
}

/// Hosts report non-negative finite sizes; anything else collapses to an empty viewport.
fn sanitize(extent: f64) -> f64 {
	if extent.is_finite() && extent > 0.0 {
		extent
	} else {
		0.0
	}
}
