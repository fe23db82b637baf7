//! Interactive hand-shape preview on top of `handshape-core`.
//!
//! Owns the time/oscillation source, camera view state, and the resolver
//! lifecycle; hosts supply ticks and input deltas, and read back the posed
//! skeleton plus camera parameters for display. Mesh baking and window
//! chrome are out of scope.

pub mod camera;
pub mod config;
pub mod driver;
pub mod oscillator;

pub use camera::OrbitCamera;
pub use config::PreviewConfig;
pub use driver::PreviewDriver;
pub use oscillator::SweepOscillator;
