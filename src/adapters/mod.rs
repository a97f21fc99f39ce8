// Adapters layer: concrete sources and collectors a local host wires around a component.

pub mod collector;
pub mod source;
