//! Page components.

pub mod nav_menu;
pub mod particle_field;
