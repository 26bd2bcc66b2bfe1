//! Explicit start/stop contract over the host's display refresh scheduler.
//!
//! The host owns timing: it calls back once per display refresh, and the
//! loop re-requests the next refresh only while it is running. Stopping
//! cancels the outstanding request, and any tick the host still delivers
//! afterwards is ignored.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::Window;

/// Host mechanism that invokes the loop's tick once per display frame.
pub trait FrameScheduler {
	/// Ask for one more tick. Returns a handle for cancelling it, or `None`
	/// if the host could not schedule.
	fn request_frame(&self) -> Option<i32>;

	/// Revoke a request made by [`request_frame`](Self::request_frame).
	fn cancel_frame(&self, handle: i32);
}

/// Lifecycle of a [`FrameLoop`]. Moves forward only.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoopState {
	/// Created, no tick requested yet.
	Idle,
	/// Ticks run and re-request the next one.
	Running,
	/// Cancelled; late ticks are ignored.
	Stopped,
}

/// Frame loop driven by a [`FrameScheduler`].
pub struct FrameLoop<S> {
	scheduler: S,
	state: Cell<LoopState>,
	pending: Cell<Option<i32>>,
}

impl<S: FrameScheduler> FrameLoop<S> {
	/// An idle loop; nothing is requested until [`start`](Self::start).
	pub fn new(scheduler: S) -> Self {
		Self {
			scheduler,
			state: Cell::new(LoopState::Idle),
			pending: Cell::new(None),
		}
	}

	/// Current lifecycle state.
	pub fn state(&self) -> LoopState {
		self.state.get()
	}

	/// The scheduler ticks are requested from.
	pub fn scheduler(&self) -> &S {
		&self.scheduler
	}

	/// Register the first tick. A stopped loop stays stopped.
	pub fn start(&self) {
		if self.state.get() != LoopState::Idle {
			return;
		}
		self.state.set(LoopState::Running);
		self.schedule();
	}

	/// Called by the host on each refresh. Runs `frame` and requests the next
	/// tick if the loop is still running; returns whether `frame` ran.
	pub fn tick(&self, frame: impl FnOnce()) -> bool {
		self.pending.set(None);
		if self.state.get() != LoopState::Running {
			return false;
		}
		frame();
		// `frame` may have stopped the loop.
		if self.state.get() == LoopState::Running {
			self.schedule();
		}
		true
	}

	/// Cancel the outstanding request. Safe to call any number of times.
	pub fn stop(&self) {
		self.state.set(LoopState::Stopped);
		if let Some(handle) = self.pending.take() {
			self.scheduler.cancel_frame(handle);
		}
	}

	fn schedule(&self) {
		self.pending.set(self.scheduler.request_frame());
	}
}

/// Tick callback shared between the scheduler and the closure it hands to
/// `requestAnimationFrame`.
pub type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// `requestAnimationFrame`-backed scheduler.
///
/// The callback usually captures the loop that owns this scheduler, so the
/// pair forms a cycle until [`release`](Self::release) drops the closure.
pub struct AnimationFrameScheduler {
	window: Window,
	callback: FrameCallback,
}

impl AnimationFrameScheduler {
	/// Scheduler for `window` with no callback installed yet.
	pub fn new(window: Window) -> Self {
		Self {
			window,
			callback: Rc::new(RefCell::new(None)),
		}
	}

	/// Install the closure invoked on every animation frame.
	pub fn set_callback(&self, callback: Closure<dyn FnMut()>) {
		*self.callback.borrow_mut() = Some(callback);
	}

	/// Drop the frame closure, breaking the loop ↔ closure cycle.
	pub fn release(&self) {
		self.callback.borrow_mut().take();
	}
}

impl FrameScheduler for AnimationFrameScheduler {
	fn request_frame(&self) -> Option<i32> {
		let callback = self.callback.borrow();
		let cb = callback.as_ref()?;
		self.window
			.request_animation_frame(cb.as_ref().unchecked_ref())
			.ok()
	}

	fn cancel_frame(&self, handle: i32) {
		let _ = self.window.cancel_animation_frame(handle);
	}
}
