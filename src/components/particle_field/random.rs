//! Random sources for particle sampling.
//!
//! Everything the field samples goes through [`RandomSource`], so a seeded
//! generator can stand in for the browser's `Math.random()` in tests.

/// A stream of uniform floats in `[0, 1)`.
pub trait RandomSource {
	fn next_f64(&mut self) -> f64;

	/// Uniform draw from `[min, max)`.
	fn uniform(&mut self, min: f64, max: f64) -> f64 {
		min + self.next_f64() * (max - min)
	}
}

/// Browser `Math.random()`. Only callable on the wasm target.
#[derive(Clone, Copy, Debug, Default)]
pub struct MathRandom;

impl RandomSource for MathRandom {
	fn next_f64(&mut self) -> f64 {
		js_sys::Math::random()
	}
}

/// Seedable pseudo-random number generator (xorshift64).
#[derive(Clone, Debug)]
pub struct XorShiftRng {
	state: u64,
}

impl XorShiftRng {
	pub fn new(seed: u64) -> Self {
		Self {
			// Zero is a fixed point of xorshift.
			state: if seed == 0 { 1 } else { seed },
		}
	}

	fn next_u64(&mut self) -> u64 {
		let mut x = self.state;
		x ^= x << 13;
		x ^= x >> 7;
		x ^= x << 17;
		self.state = x;
		x
	}
}

impl RandomSource for XorShiftRng {
	fn next_f64(&mut self) -> f64 {
		// Top 53 bits fill the mantissa exactly.
		(self.next_u64() >> 11) as f64 * (1.0 / (1u64 << 53) as f64)
	}
}
