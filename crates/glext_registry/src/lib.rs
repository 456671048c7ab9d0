//! Extension metadata (names, enumerant values, documentation) for the
//! GL, GLX and WGL registries, meant to be fed into a binding generator.

pub mod descriptor;
pub mod extensions;
pub mod registry;

pub use descriptor::*;
pub use extensions::builtin_registry;
pub use registry::*;
