//! 最小生成树算法
//!
//! Kruskal 与 Prim，结果都是新的图实例。输入图不连通时返回
//! `Error::DisconnectedGraph`，不返回部分森林。

use crate::error::{Error, Result};
use crate::graph::{Edge, Graph, Vertex};
use crate::types::{VertexKey, Weight};
use indexmap::IndexSet;
use priority_queue::PriorityQueue;
use std::cmp::{Ordering, Reverse};
use tracing::{debug, warn};

/// 候选边的优先级：先比较权重，再比较边在边集合中的位置
#[derive(Debug, Clone, Copy)]
struct FrontierKey {
    weight: Weight,
    position: usize,
}

impl PartialEq for FrontierKey {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FrontierKey {}

impl PartialOrd for FrontierKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.weight
            .total_cmp(&other.weight)
            .then(self.position.cmp(&other.position))
    }
}

/// 并查集（按秩合并 + 路径压缩）
struct DisjointSet {
    parent: Vec<usize>,
    rank: Vec<u8>,
}

impl DisjointSet {
    fn new(size: usize) -> Self {
        Self {
            parent: (0..size).collect(),
            rank: vec![0; size],
        }
    }

    fn find(&mut self, x: usize) -> usize {
        let mut root = x;
        while self.parent[root] != root {
            root = self.parent[root];
        }
        let mut current = x;
        while self.parent[current] != root {
            let next = self.parent[current];
            self.parent[current] = root;
            current = next;
        }
        root
    }

    /// 合并两个集合，已在同一集合时返回 false
    fn union(&mut self, a: usize, b: usize) -> bool {
        let ra = self.find(a);
        let rb = self.find(b);
        if ra == rb {
            return false;
        }
        match self.rank[ra].cmp(&self.rank[rb]) {
            Ordering::Less => self.parent[ra] = rb,
            Ordering::Greater => self.parent[rb] = ra,
            Ordering::Equal => {
                self.parent[rb] = ra;
                self.rank[ra] += 1;
            }
        }
        true
    }
}

/// 最小生成树构建器
pub struct SpanningTreeBuilder<'g, K> {
    graph: &'g Graph<K>,
}

impl<'g, K: VertexKey> SpanningTreeBuilder<'g, K> {
    /// 创建构建器
    pub fn new(graph: &'g Graph<K>) -> Self {
        Self { graph }
    }

    /// Kruskal 算法
    ///
    /// 按权重升序（稳定排序）考察每条边，两个端点尚未连通时接受该边。
    /// 选边时有向边按无向连接处理。树的顶点按首次接受的顺序排列，
    /// 从最轻边的起点开始；有向边组成的结果无法从该顶点到达全部顶点时
    /// 返回 `Error::DisconnectedGraph`。
    pub fn kruskal(&self) -> Result<Graph<K>> {
        let graph = self.graph;

        let mut sorted: Vec<&Edge<K>> = graph.edges().iter().collect();
        sorted.sort_by(|a, b| a.weight().total_cmp(&b.weight()));

        let mut tree_vertices: IndexSet<&Vertex<K>> = IndexSet::new();
        tree_vertices.insert(sorted.first().copied().map_or(graph.first_vertex(), Edge::orig));

        let mut components = DisjointSet::new(graph.vertex_count());
        let mut tree_edges = Vec::new();
        for edge in sorted {
            let (Some(a), Some(b)) = (
                graph.vertices().get_index_of(edge.orig()),
                graph.vertices().get_index_of(edge.dest()),
            ) else {
                continue;
            };
            if components.union(a, b) {
                tree_vertices.insert(edge.orig());
                tree_vertices.insert(edge.dest());
                tree_edges.push(edge.clone());
            }
        }

        self.finish("kruskal", tree_vertices, tree_edges)
    }

    /// Prim 算法
    ///
    /// 从第一个顶点出发，每次取通向未访问顶点的最轻候选边。
    /// 有向边要求起点已访问、终点未访问；无向边要求恰有一个端点已访问。
    pub fn prim(&self) -> Result<Graph<K>> {
        let graph = self.graph;
        let start = graph.first_vertex();

        let mut visited: IndexSet<&Vertex<K>> = IndexSet::new();
        visited.insert(start);

        let mut frontier: PriorityQueue<usize, Reverse<FrontierKey>> = PriorityQueue::new();
        self.fold_edges(start, &mut frontier);

        let mut tree_edges = Vec::new();
        while visited.len() < graph.vertex_count() {
            let Some((position, vertex)) = self.next_frontier_edge(&visited, &mut frontier) else {
                break;
            };
            visited.insert(vertex);
            tree_edges.push(graph.edges()[position].clone());
            self.fold_edges(vertex, &mut frontier);
        }

        self.finish("prim", visited, tree_edges)
    }

    /// 将所有以 `v` 为端点的边加入候选集合
    fn fold_edges(&self, v: &Vertex<K>, frontier: &mut PriorityQueue<usize, Reverse<FrontierKey>>) {
        for (position, edge) in self.graph.edges().iter().enumerate() {
            if edge.touches(v) {
                let key = FrontierKey {
                    weight: edge.weight(),
                    position,
                };
                frontier.push(position, Reverse(key));
            }
        }
    }

    /// 弹出最轻的有效候选边，返回其位置和新到达的顶点
    ///
    /// 两端都已访问的候选边直接丢弃。
    fn next_frontier_edge(
        &self,
        visited: &IndexSet<&Vertex<K>>,
        frontier: &mut PriorityQueue<usize, Reverse<FrontierKey>>,
    ) -> Option<(usize, &'g Vertex<K>)> {
        let graph: &'g Graph<K> = self.graph;
        while let Some((position, _)) = frontier.pop() {
            let edge = &graph.edges()[position];
            let orig_visited = visited.contains(edge.orig());
            let dest_visited = visited.contains(edge.dest());

            let reached = match (orig_visited, dest_visited) {
                (true, false) => Some(edge.dest()),
                (false, true) if !edge.is_directed() => Some(edge.orig()),
                _ => None,
            };
            if let Some(v) = reached {
                return Some((position, v));
            }
        }
        None
    }

    fn finish(
        &self,
        algorithm: &str,
        tree_vertices: IndexSet<&Vertex<K>>,
        tree_edges: Vec<Edge<K>>,
    ) -> Result<Graph<K>> {
        // 覆盖全部顶点的森林不一定连通，还需恰好 n-1 条边
        let total = self.graph.vertex_count();
        if tree_vertices.len() != total || tree_edges.len() + 1 != total {
            warn!(
                algorithm,
                reached = tree_vertices.len(),
                edges = tree_edges.len(),
                total,
                "生成树未连通全部顶点"
            );
            return Err(Error::DisconnectedGraph(format!(
                "{} 得到 {} 条边，无法连通 {} 个顶点",
                algorithm,
                tree_edges.len(),
                total
            )));
        }

        let tree = Graph::new(tree_vertices.into_iter().cloned(), tree_edges)?;
        // 有向边只能顺向遍历，从树的第一个顶点出发未必能到达全部顶点
        if !tree.is_tree() {
            warn!(
                algorithm,
                root = %tree.first_vertex(),
                "有向边无法从根到达全部顶点"
            );
            return Err(Error::DisconnectedGraph(format!(
                "{} 的结果无法从 {} 到达全部顶点",
                algorithm,
                tree.first_vertex()
            )));
        }

        debug!(
            algorithm,
            vertices = tree.vertex_count(),
            edges = tree.edge_count(),
            weight = tree.total_weight(),
            "生成树构建完成"
        );
        Ok(tree)
    }
}

impl<K: VertexKey> Graph<K> {
    /// Kruskal 最小生成树
    pub fn kruskal(&self) -> Result<Graph<K>> {
        SpanningTreeBuilder::new(self).kruskal()
    }

    /// Prim 最小生成树
    pub fn prim(&self) -> Result<Graph<K>> {
        SpanningTreeBuilder::new(self).prim()
    }
}
