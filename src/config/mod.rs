//! Configuration management

mod defaults;
mod merge;
mod resolver;

pub use defaults::{defaults, reference};
pub use merge::{merge, UnknownProperty};
pub use resolver::{resolve, GaugeOptions, GradientColors, ResolvedConfig};
