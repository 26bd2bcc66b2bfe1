//! Ambient particle backdrop.
//!
//! A field of independent light motes drifting slowly downward across the
//! viewport, each drawn as a soft radial glow with a solid core:
//! - Particle count scales with viewport area (one per 25 000 px² by default)
//! - Particles wrap to the opposite edge after a 10px overshoot
//! - The whole field is resampled whenever the viewport is resized
//!
//! # Example
//!
//! ```ignore
//! use portfolio_backdrop::{ParticleFieldCanvas, ParticleStyle};
//!
//! view! { <ParticleFieldCanvas style=ParticleStyle::ember() /> }
//! ```

mod backdrop;
mod component;
mod frame_loop;
mod particles;
pub mod random;
mod render;
pub mod theme;

pub use backdrop::Backdrop;
pub use component::ParticleFieldCanvas;
pub use frame_loop::{FrameLoop, FrameScheduler, LoopState};
pub use particles::{Particle, ParticleField};
pub use render::{Surface, render_frame};
pub use theme::{Band, Color, ParticleStyle};
