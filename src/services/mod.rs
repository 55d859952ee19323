pub mod color;
pub mod config;
pub mod edge_to_edge;
pub mod immersive;
pub mod insets;
pub mod platform;

pub use edge_to_edge::EdgeToEdge;
