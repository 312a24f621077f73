//! MiniGraph - 内存带权图与经典图算法库
//!
//! 提供：
//! - 顶点、带权（可选有向）边和图的核心数据结构
//! - 结构查询：度、正则性、完全性、子图、连通性、树
//! - 最短路径：Dijkstra、Floyd-Warshall
//! - 最小生成树：Kruskal、Prim
//! - 邻接表文本与 JSON 导入

pub mod algorithm;
pub mod error;
pub mod graph;
pub mod import;
pub mod types;

// 重导出常用类型
pub use algorithm::{DistanceTable, PathFinder, PathResult, SpanningTreeBuilder};
pub use error::{Error, Result};
pub use graph::{AdjacencyMatrix, Edge, Graph, Vertex};
pub use import::{import_adjacency_file, import_adjacency_text, import_json, import_json_file};
pub use types::{VertexKey, Weight, DEFAULT_WEIGHT};

/// 库版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
