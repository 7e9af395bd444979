pub mod ballistics;
pub mod bodies;
pub mod window;
