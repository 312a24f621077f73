//! 图数据结构
//!
//! 顶点集合与边集合在构造时一次性给定并校验，之后不可变

use super::edge::Edge;
use super::matrix::AdjacencyMatrix;
use super::vertex::Vertex;
use crate::error::{Error, Result};
use crate::types::{VertexKey, Weight};
use indexmap::IndexSet;
use serde::Serialize;
use std::collections::BTreeSet;

/// 图
///
/// 顶点集合保持插入顺序，第一个顶点是连通性检查和 Prim 算法的起点。
#[derive(Debug, Clone, Serialize)]
pub struct Graph<K> {
    /// 顶点集合（有序）
    vertices: IndexSet<Vertex<K>>,
    /// 边集合
    edges: Vec<Edge<K>>,
}

impl<K: VertexKey> Graph<K> {
    /// 由顶点和边创建图
    ///
    /// 顶点集合为空，或任意一条边引用了未声明的顶点时返回错误。
    /// 重复的顶点标识只保留第一次出现。
    pub fn new(
        vertices: impl IntoIterator<Item = Vertex<K>>,
        edges: impl IntoIterator<Item = Edge<K>>,
    ) -> Result<Self> {
        let vertices: IndexSet<Vertex<K>> = vertices.into_iter().collect();
        if vertices.is_empty() {
            return Err(Error::EmptyVertexSet);
        }

        let edges: Vec<Edge<K>> = edges.into_iter().collect();
        for edge in &edges {
            for v in edge.vertices() {
                if !vertices.contains(v) {
                    return Err(Error::UndeclaredVertex(v.to_string()));
                }
            }
        }

        Ok(Self { vertices, edges })
    }

    /// 获取顶点集合
    pub fn vertices(&self) -> &IndexSet<Vertex<K>> {
        &self.vertices
    }

    /// 获取边集合
    pub fn edges(&self) -> &[Edge<K>] {
        &self.edges
    }

    /// 获取顶点数量
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// 获取边数量
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// 第一个顶点（顶点集合非空）
    pub fn first_vertex(&self) -> &Vertex<K> {
        &self.vertices[0]
    }

    /// 顶点是否属于该图
    pub fn contains_vertex(&self, v: &Vertex<K>) -> bool {
        self.vertices.contains(v)
    }

    /// 所有边的权重之和
    pub fn total_weight(&self) -> Weight {
        self.edges.iter().map(Edge::weight).sum()
    }

    // ==================== 关联与邻接 ====================

    /// 两个顶点是否关联于给定边
    pub fn incident(&self, v1: &Vertex<K>, v2: &Vertex<K>, edge: &Edge<K>, directed: bool) -> bool {
        edge.connects(v1, v2, directed)
    }

    /// 两个顶点是否相邻
    pub fn are_adjacent(&self, v1: &Vertex<K>, v2: &Vertex<K>, directed: bool) -> bool {
        self.edges
            .iter()
            .any(|e| self.incident(v1, v2, e, directed))
    }

    /// 顶点的度
    ///
    /// 有向边只在顶点为终点时计数（入度）；无向边在顶点为任一端点时计数，
    /// 自环只计一次。
    pub fn degree(&self, v: &Vertex<K>) -> usize {
        self.edges
            .iter()
            .filter(|e| {
                if e.is_directed() {
                    e.dest() == v
                } else {
                    e.touches(v)
                }
            })
            .count()
    }

    /// 是否为孤立顶点
    pub fn is_isolated(&self, v: &Vertex<K>) -> bool {
        self.degree(v) == 0
    }

    /// 是否为终端顶点
    pub fn is_terminal(&self, v: &Vertex<K>) -> bool {
        self.degree(v) == 1
    }

    /// 图是否正则（所有顶点的度相同）
    pub fn is_regular(&self) -> bool {
        let degrees: BTreeSet<usize> = self.vertices.iter().map(|v| self.degree(v)).collect();
        degrees.len() == 1
    }

    /// 度序列（升序）
    pub fn degree_sequence(&self) -> Vec<usize> {
        let mut degrees: Vec<usize> = self.vertices.iter().map(|v| self.degree(v)).collect();
        degrees.sort_unstable();
        degrees
    }

    /// 图是否完全：正则且每个顶点的度为 n-1
    pub fn is_complete(&self) -> bool {
        self.is_regular() && self.degree(self.first_vertex()) == self.vertex_count() - 1
    }

    /// `other` 是否为该图的子图
    pub fn is_subgraph(&self, other: &Graph<K>) -> bool {
        other.vertices.iter().all(|v| self.vertices.contains(v))
            && other
                .edges
                .iter()
                .all(|theirs| self.edges.iter().any(|mine| theirs == mine))
    }

    /// `other` 是否为该图的真子图（至少少一个顶点或一条边）
    pub fn is_proper_subgraph(&self, other: &Graph<K>) -> bool {
        self.is_subgraph(other)
            && (other.vertex_count() != self.vertex_count()
                || other.edge_count() != self.edge_count())
    }

    /// 顶点的邻接表
    ///
    /// 按边集合顺序收集，去重。有向边只沿出边方向。
    pub fn adjacency_list(&self, v: &Vertex<K>) -> Vec<&Vertex<K>> {
        let mut neighbors: IndexSet<&Vertex<K>> = IndexSet::new();
        for edge in &self.edges {
            if edge.orig() == v {
                neighbors.insert(edge.dest());
            } else if !edge.is_directed() && edge.dest() == v {
                neighbors.insert(edge.orig());
            }
        }
        neighbors.into_iter().collect()
    }

    /// 邻接矩阵
    pub fn adjacency_matrix(&self) -> AdjacencyMatrix<K> {
        AdjacencyMatrix::from_graph(self)
    }
}
