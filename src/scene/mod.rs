pub mod node;
pub mod object;
pub mod svg;
