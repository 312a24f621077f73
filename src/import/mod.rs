//! 数据导入模块
//!
//! 支持从邻接表文本和 JSON 描述构建图。两种格式都先解析为
//! [`GraphDescription`]，再统一校验并构建 [`Graph`]。
//!
//! 邻接表文本格式（行号从 0 开始）：
//!
//! ```text
//! # Directed
//! False
//! # Vertices
//! A B C D E
//! # Edges: origin destination weight
//! A B 6
//! A C 5
//! ```
//!
//! 第 1 行为 `True`/`False`，第 3 行为空格分隔的顶点，第 5 行起每行一条边。

use crate::error::{Error, Result};
use crate::graph::{Edge, Graph, Vertex};
use crate::types::{Weight, DEFAULT_WEIGHT};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use tracing::debug;

/// 有向标记所在行
const DIRECTED_LINE: usize = 1;
/// 顶点所在行
const VERTICES_LINE: usize = 3;
/// 第一条边所在行
const FIRST_EDGE_LINE: usize = 5;

/// 图描述（导入格式的中间表示）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphDescription {
    /// 所有边是否有向
    #[serde(default)]
    pub directed: bool,
    /// 顶点标识（保持声明顺序）
    pub vertices: Vec<String>,
    /// 边记录
    #[serde(default)]
    pub edges: Vec<EdgeRecord>,
}

/// 边记录
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeRecord {
    pub orig: String,
    pub dest: String,
    #[serde(default = "default_weight")]
    pub weight: Weight,
}

fn default_weight() -> Weight {
    DEFAULT_WEIGHT
}

impl GraphDescription {
    /// 解析邻接表文本
    pub fn parse_adjacency(text: &str) -> Result<Self> {
        let lines: Vec<&str> = text.lines().collect();

        let directed = match lines.get(DIRECTED_LINE).map(|l| l.trim()) {
            Some("True") => true,
            Some("False") => false,
            Some(other) => {
                return Err(Error::malformed(
                    DIRECTED_LINE + 1,
                    format!("有向标记必须为 True 或 False，实际为 {:?}", other),
                ))
            }
            None => return Err(Error::malformed(DIRECTED_LINE + 1, "缺少有向标记行")),
        };

        let vertices: Vec<String> = lines
            .get(VERTICES_LINE)
            .ok_or_else(|| Error::malformed(VERTICES_LINE + 1, "缺少顶点行"))?
            .split_whitespace()
            .map(String::from)
            .collect();
        let declared: HashSet<&str> = vertices.iter().map(String::as_str).collect();

        let mut edges = Vec::new();
        for (index, line) in lines.iter().enumerate().skip(FIRST_EDGE_LINE) {
            let line_no = index + 1;
            if line.trim().is_empty() {
                continue;
            }

            let tokens: Vec<&str> = line.split_whitespace().collect();
            let [orig, dest, weight] = tokens[..] else {
                return Err(Error::malformed(
                    line_no,
                    format!("边需要 3 个字段（起点 终点 权重），实际为 {} 个", tokens.len()),
                ));
            };

            for id in [orig, dest] {
                if !declared.contains(id) {
                    return Err(Error::malformed(line_no, format!("顶点 {} 未声明", id)));
                }
            }

            let weight: Weight = weight
                .parse()
                .map_err(|e| Error::malformed(line_no, format!("无效的权重 {:?}: {}", weight, e)))?;
            if weight.is_nan() {
                return Err(Error::malformed(line_no, "权重不能为 NaN"));
            }

            edges.push(EdgeRecord {
                orig: orig.to_string(),
                dest: dest.to_string(),
                weight,
            });
        }

        debug!(
            directed,
            vertices = vertices.len(),
            edges = edges.len(),
            "邻接表解析完成"
        );

        Ok(Self {
            directed,
            vertices,
            edges,
        })
    }

    /// 解析 JSON 描述
    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text)
            .map_err(|e| Error::Serialization(format!("JSON 解析错误: {}", e)))
    }

    /// 校验并构建图
    pub fn into_graph(self) -> Result<Graph<String>> {
        let directed = self.directed;
        let vertices = self.vertices.into_iter().map(Vertex::new);
        let edges = self.edges.into_iter().map(|record| {
            Edge::new(
                Vertex::new(record.orig),
                Vertex::new(record.dest),
                record.weight,
                directed,
            )
        });
        Graph::new(vertices, edges)
    }
}

/// 从邻接表文本导入
pub fn import_adjacency_text(text: &str) -> Result<Graph<String>> {
    GraphDescription::parse_adjacency(text)?.into_graph()
}

/// 从邻接表文件导入
pub fn import_adjacency_file<P: AsRef<Path>>(path: P) -> Result<Graph<String>> {
    let path = path.as_ref();
    debug!(path = %path.display(), "读取邻接表文件");
    let text = fs::read_to_string(path)?;
    import_adjacency_text(&text)
}

/// 从 JSON 文本导入
pub fn import_json(text: &str) -> Result<Graph<String>> {
    GraphDescription::from_json(text)?.into_graph()
}

/// 从 JSON 文件导入
pub fn import_json_file<P: AsRef<Path>>(path: P) -> Result<Graph<String>> {
    let path = path.as_ref();
    debug!(path = %path.display(), "读取 JSON 图描述文件");
    let text = fs::read_to_string(path)?;
    import_json(&text)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "# Directed
False
# Vertices
A B C D E
# Edges: origin destination weight
A B 6
A C 5
B B 4
B E 3
C E 2
E E 1
";

    fn v(id: &str) -> Vertex<String> {
        Vertex::from(id)
    }

    #[test]
    fn test_parse_sample() {
        let desc = GraphDescription::parse_adjacency(SAMPLE).unwrap();

        assert!(!desc.directed);
        assert_eq!(desc.vertices, ["A", "B", "C", "D", "E"]);
        assert_eq!(desc.edges.len(), 6);
        assert_eq!(
            desc.edges[3],
            EdgeRecord {
                orig: "B".to_string(),
                dest: "E".to_string(),
                weight: 3.0,
            }
        );
    }

    #[test]
    fn test_import_sample() {
        let graph = import_adjacency_text(SAMPLE).unwrap();

        assert_eq!(graph.vertex_count(), 5);
        assert_eq!(graph.edge_count(), 6);
        assert!(graph.edges().iter().all(|e| !e.is_directed()));
        assert!(graph.is_isolated(&v("D")));
        assert!(!graph.is_connected());
    }

    #[test]
    fn test_import_directed() {
        let text = "# Directed\nTrue\n# Vertices\nX Y\n# Edges\nX Y 2.5\n";
        let graph = import_adjacency_text(text).unwrap();

        assert!(graph.edges()[0].is_directed());
        assert_eq!(graph.edges()[0].weight(), 2.5);
        assert_eq!(graph.degree(&v("X")), 0);
        assert_eq!(graph.degree(&v("Y")), 1);
    }

    #[test]
    fn test_crlf_and_blank_lines() {
        let text = "# Directed\r\nFalse\r\n# Vertices\r\nA B\r\n# Edges\r\n\r\nA B 1\r\n\r\n";
        let graph = import_adjacency_text(text).unwrap();
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn test_no_edges() {
        let graph = import_adjacency_text("# Directed\nFalse\n# Vertices\nA\n").unwrap();
        assert_eq!(graph.vertex_count(), 1);
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn test_bad_directed_flag() {
        let err = import_adjacency_text("# Directed\ntrue\n# Vertices\nA\n").unwrap_err();
        assert!(matches!(err, Error::MalformedInput { line: 2, .. }));
    }

    #[test]
    fn test_missing_lines() {
        let err = import_adjacency_text("# Directed\n").unwrap_err();
        assert!(matches!(err, Error::MalformedInput { line: 2, .. }));

        let err = import_adjacency_text("# Directed\nFalse\n# Vertices\n").unwrap_err();
        assert!(matches!(err, Error::MalformedInput { line: 4, .. }));
    }

    #[test]
    fn test_wrong_token_count() {
        let too_few = "# Directed\nFalse\n# Vertices\nA B\n# Edges\nA B\n";
        let err = import_adjacency_text(too_few).unwrap_err();
        assert!(matches!(err, Error::MalformedInput { line: 6, .. }));

        let too_many = "# Directed\nFalse\n# Vertices\nA B\n# Edges\nA B 1\nA B 1 extra\n";
        let err = import_adjacency_text(too_many).unwrap_err();
        assert!(matches!(err, Error::MalformedInput { line: 7, .. }));
    }

    #[test]
    fn test_undeclared_vertex() {
        let text = "# Directed\nFalse\n# Vertices\nA B\n# Edges\nA Z 1\n";
        let err = import_adjacency_text(text).unwrap_err();
        match err {
            Error::MalformedInput { line, reason } => {
                assert_eq!(line, 6);
                assert!(reason.contains('Z'));
            }
            other => panic!("expected MalformedInput, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_weight() {
        let text = "# Directed\nFalse\n# Vertices\nA B\n# Edges\nA B heavy\n";
        assert!(matches!(
            import_adjacency_text(text),
            Err(Error::MalformedInput { line: 6, .. })
        ));

        let text = "# Directed\nFalse\n# Vertices\nA B\n# Edges\nA B NaN\n";
        assert!(matches!(
            import_adjacency_text(text),
            Err(Error::MalformedInput { line: 6, .. })
        ));
    }

    #[test]
    fn test_empty_vertex_line() {
        let err = import_adjacency_text("# Directed\nFalse\n# Vertices\n\n").unwrap_err();
        assert!(matches!(err, Error::EmptyVertexSet));
    }

    #[test]
    fn test_import_json() {
        let json = r#"{
            "directed": false,
            "vertices": ["A", "B", "C"],
            "edges": [
                {"orig": "A", "dest": "B", "weight": 2},
                {"orig": "B", "dest": "C"}
            ]
        }"#;
        let graph = import_json(json).unwrap();

        assert_eq!(graph.edge_count(), 2);
        assert_eq!(graph.edges()[1].weight(), DEFAULT_WEIGHT);
        assert_eq!(graph.shortest_path_cost(&v("A"), &v("C")).unwrap(), 3.0);
    }

    #[test]
    fn test_import_json_errors() {
        assert!(matches!(import_json("{"), Err(Error::Serialization(_))));

        let undeclared = r#"{"vertices": ["A"], "edges": [{"orig": "A", "dest": "B"}]}"#;
        assert!(matches!(
            import_json(undeclared),
            Err(Error::UndeclaredVertex(id)) if id == "B"
        ));
    }
}
