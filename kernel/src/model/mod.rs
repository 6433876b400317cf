pub mod playspace;
