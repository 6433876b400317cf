pub mod image;
pub mod playspace;
