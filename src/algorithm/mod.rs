//! 图算法模块
//!
//! 包含最短路径（Dijkstra、Floyd-Warshall）和最小生成树（Kruskal、Prim）算法

mod shortest_path;
mod spanning_tree;

pub use shortest_path::{DistanceTable, PathFinder, PathResult};
pub use spanning_tree::SpanningTreeBuilder;
