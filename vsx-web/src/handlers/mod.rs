pub mod registry;

#[cfg(test)]
mod tests;

pub use registry::*;
