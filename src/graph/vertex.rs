//! 顶点定义
//!
//! 顶点只携带标识，相等、哈希与排序都由标识决定

use crate::types::VertexKey;
use serde::{Deserialize, Serialize};
use std::fmt;

/// 顶点
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Vertex<K> {
    /// 顶点标识
    id: K,
}

impl<K: VertexKey> Vertex<K> {
    /// 创建新顶点
    pub fn new(id: K) -> Self {
        Self { id }
    }

    /// 获取顶点标识
    pub fn id(&self) -> &K {
        &self.id
    }

    /// 取出顶点标识
    pub fn into_id(self) -> K {
        self.id
    }
}

impl<K: VertexKey> From<K> for Vertex<K> {
    fn from(id: K) -> Self {
        Self::new(id)
    }
}

impl From<&str> for Vertex<String> {
    fn from(id: &str) -> Self {
        Self::new(id.to_string())
    }
}

impl<K: fmt::Display> fmt::Display for Vertex<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_vertex_identity() {
        let a1 = Vertex::<String>::from("A");
        let a2 = Vertex::new("A".to_string());
        let b = Vertex::<String>::from("B");

        assert_eq!(a1, a2);
        assert_ne!(a1, b);
        assert!(a1 < b);

        let set: HashSet<_> = [a1, a2, b].into_iter().collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_vertex_into_id() {
        let v = Vertex::new(42u64);
        assert_eq!(v.id(), &42);
        assert_eq!(v.into_id(), 42);

        let named = Vertex::<String>::from("hub");
        assert_eq!(named.into_id(), "hub".to_string());
    }

    #[test]
    fn test_vertex_display() {
        assert_eq!(Vertex::new(7u32).to_string(), "7");
        assert_eq!(Vertex::<String>::from("X").to_string(), "X");
    }

    #[test]
    fn test_vertex_serialization() {
        let v = Vertex::<String>::from("A");

        let json = serde_json::to_string(&v).unwrap();
        assert_eq!(json, "\"A\"");

        let restored: Vertex<String> = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, v);
    }
}
