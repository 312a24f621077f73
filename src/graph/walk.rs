//! 途径、路径、环与连通性

use super::edge::Edge;
use super::graph::Graph;
use super::vertex::Vertex;
use crate::types::VertexKey;
use indexmap::IndexSet;

impl<K: VertexKey> Graph<K> {
    /// 顶点序列是否为途径（相邻顶点两两相邻，不考虑方向）
    pub fn is_walk(&self, seq: &[Vertex<K>]) -> bool {
        seq.len() >= 2
            && seq
                .windows(2)
                .all(|pair| self.are_adjacent(&pair[0], &pair[1], false))
    }

    /// 顶点序列是否为路径（每一步都沿某条边的起点走向终点）
    pub fn is_path(&self, seq: &[Vertex<K>]) -> bool {
        seq.len() >= 2
            && seq
                .windows(2)
                .all(|pair| self.are_adjacent(&pair[0], &pair[1], true))
    }

    /// 顶点序列是否为环：是路径且首尾相同
    pub fn is_cycle(&self, seq: &[Vertex<K>]) -> bool {
        match (seq.first(), seq.last()) {
            (Some(first), Some(last)) => first == last && self.is_path(seq),
            _ => false,
        }
    }

    /// 边序列是否为环
    ///
    /// 先还原顶点序列：第一条边的起点，后接每条边的终点。
    pub fn is_edge_cycle(&self, edges: &[Edge<K>]) -> bool {
        let Some(first) = edges.first() else {
            return false;
        };
        let seq: Vec<Vertex<K>> = std::iter::once(first.orig())
            .chain(edges.iter().map(Edge::dest))
            .cloned()
            .collect();
        self.is_cycle(&seq)
    }

    /// 图是否连通
    ///
    /// 从第一个顶点出发沿邻接表做广度优先遍历，能到达全部顶点即连通。
    pub fn is_connected(&self) -> bool {
        let mut reached: IndexSet<&Vertex<K>> = IndexSet::new();
        reached.insert(self.first_vertex());

        let mut i = 0;
        while let Some(&current) = reached.get_index(i) {
            for neighbor in self.adjacency_list(current) {
                reached.insert(neighbor);
            }
            i += 1;
        }

        reached.len() == self.vertex_count()
    }

    /// 图是否为树：连通且边数为 n-1
    pub fn is_tree(&self) -> bool {
        self.is_connected() && self.edge_count() == self.vertex_count() - 1
    }

    /// `other` 是否为该图的生成树
    pub fn is_spanning_tree(&self, other: &Graph<K>) -> bool {
        self.is_subgraph(other) && other.is_tree()
    }

    /// 查找第一条关联于 (orig, dest) 的边
    pub fn find_edge(&self, orig: &Vertex<K>, dest: &Vertex<K>, directed: bool) -> Option<&Edge<K>> {
        self.edges()
            .iter()
            .find(|e| self.incident(orig, dest, e, directed))
    }

    /// 查找第一条能从 `orig` 走到 `dest` 的边
    ///
    /// 有向边只能沿起点到终点方向走，无向边两个方向都可以。
    /// 与 `adjacency_list` 的方向规则一致。
    pub fn edge_towards(&self, orig: &Vertex<K>, dest: &Vertex<K>) -> Option<&Edge<K>> {
        self.edges()
            .iter()
            .find(|e| e.connects(orig, dest, e.is_directed()))
    }

    /// 顶点的边
    ///
    /// 有向模式下只返回以该顶点为起点的边，否则返回所有以它为端点的边。
    pub fn edges_of(&self, v: &Vertex<K>, directed: bool) -> Vec<&Edge<K>> {
        self.edges()
            .iter()
            .filter(|e| if directed { e.orig() == v } else { e.touches(v) })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(id: &str) -> Vertex<String> {
        Vertex::from(id)
    }

    fn seq(ids: &[&str]) -> Vec<Vertex<String>> {
        ids.iter().map(|id| v(id)).collect()
    }

    /// A -> B -> C -> A 的有向三角形，外加孤立顶点 D
    fn create_directed_triangle() -> Graph<String> {
        Graph::new(
            seq(&["A", "B", "C", "D"]),
            vec![
                Edge::directed(v("A"), v("B"), 1.0),
                Edge::directed(v("B"), v("C"), 2.0),
                Edge::directed(v("C"), v("A"), 3.0),
            ],
        )
        .unwrap()
    }

    fn create_path_graph(edge_count: usize) -> Graph<String> {
        let ids = ["A", "B", "C", "D"];
        let edges = ids
            .windows(2)
            .take(edge_count)
            .map(|pair| Edge::undirected(v(pair[0]), v(pair[1]), 1.0))
            .collect::<Vec<_>>();
        Graph::new(seq(&ids), edges).unwrap()
    }

    #[test]
    fn test_walk_and_path() {
        let graph = create_directed_triangle();

        assert!(graph.is_walk(&seq(&["A", "B", "C"])));
        assert!(graph.is_walk(&seq(&["C", "B", "A"])));
        assert!(graph.is_path(&seq(&["A", "B", "C"])));
        assert!(!graph.is_path(&seq(&["C", "B", "A"])));
        assert!(!graph.is_walk(&seq(&["A", "D"])));
        assert!(!graph.is_walk(&seq(&["A"])));
        assert!(!graph.is_path(&[]));
    }

    #[test]
    fn test_cycle() {
        let graph = create_directed_triangle();

        assert!(graph.is_cycle(&seq(&["A", "B", "C", "A"])));
        assert!(!graph.is_cycle(&seq(&["A", "B", "C"])));
        assert!(!graph.is_cycle(&seq(&["A", "C", "B", "A"])));
        assert!(!graph.is_cycle(&[]));
    }

    #[test]
    fn test_edge_cycle() {
        let graph = create_directed_triangle();
        let edges = graph.edges().to_vec();

        assert!(graph.is_edge_cycle(&edges));
        assert!(!graph.is_edge_cycle(&edges[..2]));
        assert!(!graph.is_edge_cycle(&[]));
    }

    #[test]
    fn test_connectivity_and_tree() {
        let path = create_path_graph(3);
        assert!(path.is_connected());
        assert!(path.is_tree());

        let broken = create_path_graph(2);
        assert!(!broken.is_connected());
        assert!(!broken.is_tree());

        let single = Graph::new(seq(&["A"]), Vec::new()).unwrap();
        assert!(single.is_connected());
        assert!(single.is_tree());
    }

    #[test]
    fn test_connectivity_follows_direction() {
        // 从 B 出发无法回到 A
        let graph = Graph::new(
            seq(&["B", "A"]),
            vec![Edge::directed(v("A"), v("B"), 1.0)],
        )
        .unwrap();
        assert!(!graph.is_connected());
    }

    #[test]
    fn test_spanning_tree() {
        let cycle = Graph::new(
            seq(&["A", "B", "C", "D"]),
            vec![
                Edge::undirected(v("A"), v("B"), 1.0),
                Edge::undirected(v("B"), v("C"), 1.0),
                Edge::undirected(v("C"), v("D"), 1.0),
                Edge::undirected(v("D"), v("A"), 1.0),
            ],
        )
        .unwrap();

        let tree = create_path_graph(3);
        assert!(cycle.is_spanning_tree(&tree));
        assert!(!cycle.is_spanning_tree(&cycle));
        assert!(!cycle.is_spanning_tree(&create_path_graph(2)));
    }

    #[test]
    fn test_find_edge() {
        let graph = create_directed_triangle();

        let e = graph.find_edge(&v("B"), &v("A"), false).unwrap();
        assert_eq!(e.weight(), 1.0);
        assert!(graph.find_edge(&v("B"), &v("A"), true).is_none());
        assert!(graph.find_edge(&v("A"), &v("D"), false).is_none());
    }

    #[test]
    fn test_edge_towards() {
        let graph = Graph::new(
            seq(&["A", "B", "C"]),
            vec![
                Edge::directed(v("B"), v("A"), 1.0),
                Edge::directed(v("A"), v("B"), 10.0),
                Edge::undirected(v("C"), v("B"), 2.0),
            ],
        )
        .unwrap();

        // 跳过方向相反的 B -> A
        assert_eq!(graph.edge_towards(&v("A"), &v("B")).unwrap().weight(), 10.0);
        assert_eq!(graph.edge_towards(&v("B"), &v("A")).unwrap().weight(), 1.0);
        // 无向边两个方向都可走
        assert_eq!(graph.edge_towards(&v("B"), &v("C")).unwrap().weight(), 2.0);
        assert_eq!(graph.edge_towards(&v("C"), &v("B")).unwrap().weight(), 2.0);
        assert!(graph.edge_towards(&v("A"), &v("C")).is_none());
    }

    #[test]
    fn test_edges_of() {
        let graph = create_directed_triangle();

        let outgoing = graph.edges_of(&v("A"), true);
        assert_eq!(outgoing.len(), 1);
        assert_eq!(outgoing[0].dest(), &v("B"));

        assert_eq!(graph.edges_of(&v("A"), false).len(), 2);
        assert!(graph.edges_of(&v("D"), false).is_empty());
    }
}
