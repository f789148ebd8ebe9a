pub mod camera;
pub mod color;
pub mod config;
pub mod environment;
pub mod error;
pub mod object;
pub mod output;
pub mod parsing;
pub mod ray;
pub mod rectangle;
pub mod render;
pub mod scene;
pub mod sphere;
pub mod surface;
pub mod vector;
