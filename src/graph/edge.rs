//! 边定义
//!
//! 带权边，可选有向

use crate::graph::vertex::Vertex;
use crate::types::{VertexKey, Weight, DEFAULT_WEIGHT};
use serde::{Deserialize, Serialize};
use std::fmt;

/// 边
///
/// 两条边相等当且仅当权重相同，并且：两者都有向时起点、终点分别相同；
/// 否则 `self` 的两个端点都落在 `other` 的端点上。该关系不满足传递性，
/// 对自环也不对称，因此只实现 `PartialEq`。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Edge<K> {
    /// 起点
    orig: Vertex<K>,
    /// 终点
    dest: Vertex<K>,
    /// 权重
    weight: Weight,
    /// 是否有向
    directed: bool,
}

impl<K: VertexKey> Edge<K> {
    /// 创建新边
    pub fn new(orig: Vertex<K>, dest: Vertex<K>, weight: Weight, directed: bool) -> Self {
        Self {
            orig,
            dest,
            weight,
            directed,
        }
    }

    /// 创建无向边
    pub fn undirected(orig: Vertex<K>, dest: Vertex<K>, weight: Weight) -> Self {
        Self::new(orig, dest, weight, false)
    }

    /// 创建有向边
    pub fn directed(orig: Vertex<K>, dest: Vertex<K>, weight: Weight) -> Self {
        Self::new(orig, dest, weight, true)
    }

    /// 创建默认权重的无向边
    pub fn unweighted(orig: Vertex<K>, dest: Vertex<K>) -> Self {
        Self::new(orig, dest, DEFAULT_WEIGHT, false)
    }

    /// 获取起点
    pub fn orig(&self) -> &Vertex<K> {
        &self.orig
    }

    /// 获取终点
    pub fn dest(&self) -> &Vertex<K> {
        &self.dest
    }

    /// 获取权重
    pub fn weight(&self) -> Weight {
        self.weight
    }

    /// 是否有向
    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// 边的端点列表 `[起点, 终点]`
    pub fn vertices(&self) -> [&Vertex<K>; 2] {
        [&self.orig, &self.dest]
    }

    /// 顶点是否为该边的端点之一
    pub fn touches(&self, v: &Vertex<K>) -> bool {
        self.orig == *v || self.dest == *v
    }

    /// 两个顶点是否关联于该边
    ///
    /// 有向模式下要求 `v1` 为起点、`v2` 为终点；否则端点顺序任意。
    pub fn connects(&self, v1: &Vertex<K>, v2: &Vertex<K>, directed: bool) -> bool {
        if directed {
            return self.orig == *v1 && self.dest == *v2;
        }
        (self.orig == *v1 && self.dest == *v2) || (self.orig == *v2 && self.dest == *v1)
    }

    /// 给定一个端点，返回另一个端点
    pub fn opposite(&self, v: &Vertex<K>) -> Option<&Vertex<K>> {
        if self.orig == *v {
            Some(&self.dest)
        } else if self.dest == *v {
            Some(&self.orig)
        } else {
            None
        }
    }
}

impl<K: VertexKey> PartialEq for Edge<K> {
    fn eq(&self, other: &Self) -> bool {
        if self.weight != other.weight {
            return false;
        }
        if self.directed && other.directed {
            return self.orig == other.orig && self.dest == other.dest;
        }
        other.touches(&self.orig) && other.touches(&self.dest)
    }
}

impl<K: fmt::Display> fmt::Display for Edge<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}-{}", self.orig, self.dest, self.weight)
    }
}
