pub mod display;
pub mod interpolation;
pub mod nearest;
pub mod window;
