//! UI panels around the viewport

pub mod status_bar;
