//! Visual configuration for the particle field.
//!
//! Holds the color type, the sampling bands each particle draws its initial
//! state from, and a couple of named presets. Every field can be overridden
//! from JSON; missing fields fall back to the default preset.

use serde::Deserialize;

use super::random::RandomSource;

/// RGBA color representation.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
pub struct Color {
	pub r: u8,
	pub g: u8,
	pub b: u8,
	#[serde(default = "opaque")]
	pub a: f64,
}

fn opaque() -> f64 {
	1.0
}

impl Color {
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 1.0 }
	}

	pub fn with_alpha(self, a: f64) -> Self {
		Self { a, ..self }
	}

	/// Lighten the color by a factor (0.0 = unchanged, 1.0 = white)
	pub fn lighten(self, factor: f64) -> Self {
		let f = factor.clamp(0.0, 1.0);
		Self {
			r: (self.r as f64 + (255.0 - self.r as f64) * f) as u8,
			g: (self.g as f64 + (255.0 - self.g as f64) * f) as u8,
			b: (self.b as f64 + (255.0 - self.b as f64) * f) as u8,
			a: self.a,
		}
	}

	/// Always emits the `rgba()` form; gradient stops need the alpha even at 1.0.
	pub fn to_css(self) -> String {
		format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
	}
}

/// Half-open interval `[min, max)` a value is drawn uniformly from.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
pub struct Band {
	pub min: f64,
	pub max: f64,
}

impl Band {
	pub const fn new(min: f64, max: f64) -> Self {
		Self { min, max }
	}

	/// Band of the given half-width centered on zero.
	pub const fn symmetric(half_width: f64) -> Self {
		Self::new(-half_width, half_width)
	}

	pub fn sample(&self, rng: &mut dyn RandomSource) -> f64 {
		rng.uniform(self.min, self.max)
	}

	fn check(&self, name: &str) -> Result<(), String> {
		if !self.min.is_finite() || !self.max.is_finite() {
			return Err(format!("{name}: bounds must be finite"));
		}
		if self.min > self.max {
			return Err(format!("{name}: min {} exceeds max {}", self.min, self.max));
		}
		Ok(())
	}
}

/// Smallest accepted area (px²) per particle.
pub const MIN_DENSITY: f64 = 1_000.0;

/// Upper bound on particles in one field, whatever the viewport.
pub const MAX_PARTICLES: usize = 20_000;

/// Particle field configuration.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct ParticleStyle {
	/// Viewport area (px²) per particle. Larger = sparser field.
	pub density: f64,
	/// Overshoot past an edge before a particle teleports to the opposite side
	pub wrap_margin: f64,
	/// Horizontal per-frame drift
	pub velocity_x: Band,
	/// Vertical per-frame drift, before `drift_down` is added
	pub velocity_y: Band,
	/// Constant downward bias added to every vertical velocity
	pub drift_down: f64,
	/// Core dot radius
	pub size: Band,
	/// Base alpha of core and glow
	pub opacity: Band,
	/// Radius of the soft halo
	pub glow_radius: Band,
	/// Glow center alpha relative to the particle's opacity
	pub glow_alpha: f64,
	/// Halo tint (alpha is replaced per particle)
	pub glow_color: Color,
	/// Core tint (alpha is replaced per particle)
	pub core_color: Color,
}

/// Pale blue used for the halo in the default preset.
const PALE_BLUE: Color = Color::rgb(147, 197, 253);

impl ParticleStyle {
	/// Pale-blue drifting motes (default)
	pub fn default_style() -> Self {
		Self {
			density: 25_000.0,
			wrap_margin: 10.0,
			velocity_x: Band::symmetric(0.15),
			velocity_y: Band::symmetric(0.15),
			drift_down: 0.1,
			size: Band::new(0.5, 2.0),
			opacity: Band::new(0.2, 0.6),
			glow_radius: Band::new(4.0, 10.0),
			glow_alpha: 0.2,
			glow_color: PALE_BLUE,
			core_color: PALE_BLUE.lighten(0.5),
		}
	}

	/// Warm embers rising slowly
	pub fn ember() -> Self {
		let base = Color::rgb(240, 160, 110);
		Self {
			velocity_y: Band::symmetric(0.1),
			drift_down: -0.12,
			glow_radius: Band::new(5.0, 12.0),
			glow_color: base,
			core_color: base.lighten(0.4),
			..Self::default_style()
		}
	}

	/// Look up a preset by name.
	pub fn by_name(name: &str) -> Option<Self> {
		match name {
			"default" => Some(Self::default_style()),
			"ember" => Some(Self::ember()),
			_ => None,
		}
	}

	/// Reject values that would panic or break edge wrapping.
	pub fn validate(&self) -> Result<(), String> {
		if !self.density.is_finite() || self.density < MIN_DENSITY {
			return Err(format!(
				"density {} below minimum {}",
				self.density, MIN_DENSITY
			));
		}
		if !self.wrap_margin.is_finite() || self.wrap_margin < 0.0 {
			return Err(format!(
				"wrap_margin {} must be finite and non-negative",
				self.wrap_margin
			));
		}
		if !self.drift_down.is_finite() || !self.glow_alpha.is_finite() {
			return Err("drift_down and glow_alpha must be finite".to_string());
		}
		self.velocity_x.check("velocity_x")?;
		self.velocity_y.check("velocity_y")?;
		self.size.check("size")?;
		self.opacity.check("opacity")?;
		self.glow_radius.check("glow_radius")?;
		Ok(())
	}

	/// Number of particles for a viewport: `floor(area / density)`, capped
	/// at [`MAX_PARTICLES`].
	pub fn particle_count(&self, width: f64, height: f64) -> usize {
		let area = width * height;
		if !area.is_finite() || area <= 0.0 || self.density.is_nan() || self.density <= 0.0 {
			return 0;
		}
		((area / self.density).floor() as usize).min(MAX_PARTICLES)
	}
}

impl Default for ParticleStyle {
	fn default() -> Self {
		Self::default_style()
	}
}
