//! 图核心模块
//!
//! 定义顶点、边和图的核心数据结构，以及图上的结构查询

mod edge;
mod graph;
mod matrix;
mod vertex;
mod walk;

pub use edge::Edge;
pub use graph::Graph;
pub use matrix::AdjacencyMatrix;
pub use vertex::Vertex;
