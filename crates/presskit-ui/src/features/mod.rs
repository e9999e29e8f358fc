//! Page features driven by the loaded configuration.
pub mod carousel;
pub mod language;
pub mod media;
pub mod sections;
