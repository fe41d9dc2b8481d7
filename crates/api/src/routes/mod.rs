pub mod sellers;
pub mod system;
