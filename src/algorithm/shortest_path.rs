//! 最短路径算法
//!
//! Dijkstra 单源最短路径与 Floyd-Warshall 全源最短路径。
//! 不存在的边视为无穷大权重，不作为错误处理。

use crate::error::{Error, Result};
use crate::graph::{Edge, Graph, Vertex};
use crate::types::{VertexKey, Weight};
use indexmap::IndexMap;
use serde::Serialize;
use std::collections::{HashMap, HashSet};
use tracing::{debug, trace};

/// 全源最短路径表：起点 -> 终点 -> 最小代价（按顶点集合顺序）
pub type DistanceTable<K> = IndexMap<Vertex<K>, IndexMap<Vertex<K>, Weight>>;

/// 路径结果
#[derive(Debug, Clone, Serialize)]
pub struct PathResult<K> {
    /// 路径上的顶点序列
    pub vertices: Vec<Vertex<K>>,
    /// 路径上的边序列
    pub edges: Vec<Edge<K>>,
    /// 路径长度（边数）
    pub length: usize,
    /// 路径总权重
    pub total_weight: Weight,
}

/// Dijkstra 运行结束时的状态
struct DijkstraState<'g, K> {
    /// 每个顶点的最终距离（顶点集合顺序）
    distance: IndexMap<&'g Vertex<K>, Weight>,
    /// 最短路径树中的前驱
    previous: HashMap<&'g Vertex<K>, &'g Vertex<K>>,
}

/// 路径查找器
pub struct PathFinder<'g, K> {
    graph: &'g Graph<K>,
}

impl<'g, K: VertexKey> PathFinder<'g, K> {
    /// 创建路径查找器
    pub fn new(graph: &'g Graph<K>) -> Self {
        Self { graph }
    }

    /// Dijkstra 最短路径代价
    ///
    /// 目标不可达时返回正无穷。
    pub fn dijkstra(&self, source: &Vertex<K>, target: &Vertex<K>) -> Result<Weight> {
        let target = self.lookup(target)?;
        let state = self.run_dijkstra(source)?;
        Ok(state
            .distance
            .get(target)
            .copied()
            .unwrap_or(Weight::INFINITY))
    }

    /// Dijkstra 最短路径（含顶点和边序列）
    ///
    /// 目标不可达时返回 `None`。
    pub fn shortest_path(
        &self,
        source: &Vertex<K>,
        target: &Vertex<K>,
    ) -> Result<Option<PathResult<K>>> {
        let target = self.lookup(target)?;
        let state = self.run_dijkstra(source)?;

        let total_weight = state
            .distance
            .get(target)
            .copied()
            .unwrap_or(Weight::INFINITY);
        if total_weight.is_infinite() {
            return Ok(None);
        }

        // 沿前驱回溯
        let mut vertices = vec![target];
        let mut current = target;
        while let Some(&prev) = state.previous.get(current) {
            vertices.push(prev);
            current = prev;
        }
        vertices.reverse();

        let edges: Vec<Edge<K>> = vertices
            .windows(2)
            .filter_map(|pair| self.graph.edge_towards(pair[0], pair[1]))
            .cloned()
            .collect();

        Ok(Some(PathResult {
            vertices: vertices.into_iter().cloned().collect(),
            length: edges.len(),
            edges,
            total_weight,
        }))
    }

    /// Floyd-Warshall 全源最短路径
    ///
    /// 初始代价取第一条连接该顶点对的边的权重，平行边不合并。
    /// `directed` 为真时每条边按自身方向通行（无向边两个方向都可走），
    /// 否则忽略所有方向。不检测负环。
    pub fn floyd_warshall(&self, directed: bool) -> DistanceTable<K> {
        let vertices = self.graph.vertices();
        let n = vertices.len();

        let mut cost = vec![vec![Weight::INFINITY; n]; n];
        for (i, orig) in vertices.iter().enumerate() {
            for (j, dest) in vertices.iter().enumerate() {
                cost[i][j] = if i == j {
                    0.0
                } else {
                    let edge = if directed {
                        self.graph.edge_towards(orig, dest)
                    } else {
                        self.graph.find_edge(orig, dest, false)
                    };
                    edge.map_or(Weight::INFINITY, Edge::weight)
                };
            }
        }

        for k in 0..n {
            for i in 0..n {
                for j in 0..n {
                    let through = cost[i][k] + cost[k][j];
                    if through < cost[i][j] {
                        cost[i][j] = through;
                    }
                }
            }
        }

        debug!(vertices = n, directed, "floyd-warshall 完成");

        vertices
            .iter()
            .zip(cost)
            .map(|(orig, row)| {
                let row: IndexMap<Vertex<K>, Weight> = vertices.iter().cloned().zip(row).collect();
                (orig.clone(), row)
            })
            .collect()
    }

    /// 在图中查找顶点，返回图内的引用
    fn lookup(&self, v: &Vertex<K>) -> Result<&'g Vertex<K>> {
        let graph: &'g Graph<K> = self.graph;
        graph
            .vertices()
            .get(v)
            .ok_or_else(|| Error::VertexNotFound(v.to_string()))
    }

    fn run_dijkstra(&self, source: &Vertex<K>) -> Result<DijkstraState<'g, K>> {
        let graph: &'g Graph<K> = self.graph;
        let source = self.lookup(source)?;

        // 源点可直达的邻居初始化为该边的权重，其余为无穷大
        let mut distance: IndexMap<&Vertex<K>, Weight> = graph
            .vertices()
            .iter()
            .map(|v| (v, Weight::INFINITY))
            .collect();
        let mut previous = HashMap::new();
        for v in graph.adjacency_list(source) {
            if v == source {
                continue;
            }
            if let Some(edge) = graph.edge_towards(source, v) {
                distance.insert(v, edge.weight());
                previous.insert(v, source);
            }
        }
        distance.insert(source, 0.0);

        let mut finalized: HashSet<&Vertex<K>> = HashSet::with_capacity(graph.vertex_count());
        finalized.insert(source);

        while finalized.len() < graph.vertex_count() {
            // 距离最小的未确定顶点，距离相同取顶点集合中靠前的
            let mut next: Option<(&Vertex<K>, Weight)> = None;
            for (&v, &d) in &distance {
                if finalized.contains(v) {
                    continue;
                }
                if next.map_or(true, |(_, best)| d < best) {
                    next = Some((v, d));
                }
            }
            let Some((w, dw)) = next else {
                break;
            };

            finalized.insert(w);
            trace!(vertex = %w, distance = dw, "dijkstra 确定顶点");

            for v in graph.adjacency_list(w) {
                if finalized.contains(v) {
                    continue;
                }
                if let Some(edge) = graph.edge_towards(w, v) {
                    let candidate = dw + edge.weight();
                    if candidate < distance[v] {
                        distance.insert(v, candidate);
                        previous.insert(v, w);
                    }
                }
            }
        }

        Ok(DijkstraState { distance, previous })
    }
}

impl<K: VertexKey> Graph<K> {
    /// Dijkstra 最短路径代价
    pub fn shortest_path_cost(&self, source: &Vertex<K>, target: &Vertex<K>) -> Result<Weight> {
        PathFinder::new(self).dijkstra(source, target)
    }

    /// Dijkstra 最短路径（含顶点和边序列）
    pub fn shortest_path(
        &self,
        source: &Vertex<K>,
        target: &Vertex<K>,
    ) -> Result<Option<PathResult<K>>> {
        PathFinder::new(self).shortest_path(source, target)
    }

    /// Floyd-Warshall 全源最短路径
    pub fn all_pairs_shortest_paths(&self, directed: bool) -> DistanceTable<K> {
        PathFinder::new(self).floyd_warshall(directed)
    }
}
