pub mod plants;
pub mod system;
