// Library crate: exposes testable modules for integration tests and scripted control.
// GUI-specific modules (app, ui, GL rendering) remain in the binary crate.

pub mod clipboard;
pub mod command;
pub mod harness;
pub mod input;
pub mod state;

/// Subset of viewport types needed for headless picking and block sync.
/// The GL renderer and panel stay in the binary crate.
pub mod viewport {
    pub mod camera;
    pub mod mesh;
    pub mod picking;
    pub mod proxies;
}
