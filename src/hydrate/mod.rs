pub mod assembler;
pub mod background;
pub mod contrast;
pub mod flatten;
pub mod logo;
pub mod text;
