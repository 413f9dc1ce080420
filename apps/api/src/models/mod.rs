pub mod location;
pub mod persona;
