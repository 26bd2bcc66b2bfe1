//! The particle field bound to its frame loop.
//!
//! Both entry points (refresh ticks and viewport resizes) go through
//! [`Backdrop`], so once it is stopped neither can touch the field again.

use std::cell::RefCell;

use super::frame_loop::{FrameLoop, FrameScheduler, LoopState};
use super::particles::ParticleField;
use super::random::RandomSource;
use super::render::{Surface, render_frame};

/// A particle field plus the frame loop that drives it.
pub struct Backdrop<R, S> {
	field: RefCell<ParticleField<R>>,
	frame_loop: FrameLoop<S>,
}

impl<R: RandomSource, S: FrameScheduler> Backdrop<R, S> {
	/// Populate `field` for the initial viewport; the loop is not started yet.
	pub fn new(mut field: ParticleField<R>, scheduler: S, width: f64, height: f64) -> Self {
		field.on_viewport_resize(width, height);
		Self {
			field: RefCell::new(field),
			frame_loop: FrameLoop::new(scheduler),
		}
	}

	/// Request the first frame.
	pub fn start(&self) {
		self.frame_loop.start();
	}

	/// Cancel the pending frame; later frames and resizes are ignored.
	pub fn stop(&self) {
		self.frame_loop.stop();
	}

	/// Whether frames currently run.
	pub fn is_running(&self) -> bool {
		self.frame_loop.state() == LoopState::Running
	}

	/// The scheduler frames are requested from.
	pub fn scheduler(&self) -> &S {
		self.frame_loop.scheduler()
	}

	/// Host refresh tick: advance, then redraw. Returns whether anything ran.
	pub fn frame(&self, surface: &mut impl Surface) -> bool {
		self.frame_loop.tick(|| {
			let mut field = self.field.borrow_mut();
			field.advance_frame();
			render_frame(&field, surface);
		})
	}

	/// Host resize notification. Ignored once stopped.
	pub fn resize(&self, width: f64, height: f64) {
		if self.frame_loop.state() == LoopState::Stopped {
			return;
		}
		self.field.borrow_mut().on_viewport_resize(width, height);
	}

	/// Number of particles in the current field.
	pub fn particle_count(&self) -> usize {
		self.field.borrow().particles().len()
	}

	/// Read access to the field, for inspection.
	pub fn with_field<T>(&self, f: impl FnOnce(&ParticleField<R>) -> T) -> T {
		f(&self.field.borrow())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::particle_field::frame_loop::tests::ManualScheduler;
	use crate::components::particle_field::random::XorShiftRng;
	use crate::components::particle_field::render::tests::RecordingSurface;
	use crate::components::particle_field::theme::ParticleStyle;

	fn backdrop(width: f64, height: f64) -> Backdrop<XorShiftRng, ManualScheduler> {
		let field = ParticleField::new(ParticleStyle::default(), XorShiftRng::new(13));
		Backdrop::new(field, ManualScheduler::default(), width, height)
	}

	fn positions(b: &Backdrop<XorShiftRng, ManualScheduler>) -> Vec<(f64, f64)> {
		b.with_field(|f| f.particles().iter().map(|p| (p.x, p.y)).collect())
	}

	#[test]
	fn mount_populates_for_initial_viewport() {
		let b = backdrop(500.0, 500.0);
		assert_eq!(b.particle_count(), 10);
		assert!(!b.is_running());
	}

	#[test]
	fn frames_do_nothing_before_start() {
		let b = backdrop(500.0, 500.0);
		let before = positions(&b);
		let mut surface = RecordingSurface::default();
		assert!(!b.frame(&mut surface));
		assert!(surface.calls.is_empty());
		assert_eq!(positions(&b), before);
	}

	#[test]
	fn running_frames_move_and_draw() {
		let b = backdrop(500.0, 500.0);
		b.start();
		let before = positions(&b);
		let mut surface = RecordingSurface::default();
		b.scheduler().fire();
		assert!(b.frame(&mut surface));
		assert_eq!(surface.calls.len(), 1 + 2 * 10);
		assert_ne!(positions(&b), before);
		assert_eq!(b.scheduler().pending.borrow().len(), 1);
	}

	#[test]
	fn resize_between_frames_is_seen_by_next_frame() {
		let b = backdrop(500.0, 500.0);
		b.start();
		b.resize(1000.0, 500.0);
		assert_eq!(b.particle_count(), 20);

		let mut surface = RecordingSurface::default();
		b.scheduler().fire();
		b.frame(&mut surface);
		assert_eq!(surface.calls.len(), 1 + 2 * 20);
	}

	#[test]
	fn nothing_moves_or_draws_after_stop() {
		let b = backdrop(800.0, 600.0);
		b.start();
		let mut surface = RecordingSurface::default();
		for _ in 0..3 {
			b.scheduler().fire();
			b.frame(&mut surface);
		}
		b.stop();
		assert!(b.scheduler().pending.borrow().is_empty());

		let frozen = positions(&b);
		let drawn = surface.calls.len();
		for _ in 0..10 {
			assert!(!b.frame(&mut surface));
		}
		b.resize(100.0, 100.0);
		assert_eq!(positions(&b), frozen);
		assert_eq!(surface.calls.len(), drawn);
		assert_eq!(b.particle_count(), frozen.len());
	}
}
