//! 邻接矩阵
//!
//! 表头使用排序后的顶点标识，行标签与列使用顶点集合的原始顺序。

use super::graph::Graph;
use crate::types::VertexKey;
use serde::Serialize;

/// 邻接矩阵
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AdjacencyMatrix<K> {
    /// 表头：升序排列的顶点标识
    header: Vec<K>,
    /// 行标签：原始顺序的顶点标识
    labels: Vec<K>,
    /// `cells[i][j]` 为 1 表示第 j 个顶点在第 i 个顶点的邻接表中
    cells: Vec<Vec<u8>>,
}

impl<K: VertexKey> AdjacencyMatrix<K> {
    /// 由图生成邻接矩阵
    pub fn from_graph(graph: &Graph<K>) -> Self {
        let mut header: Vec<K> = graph.vertices().iter().map(|v| v.id().clone()).collect();
        header.sort();

        let labels: Vec<K> = graph.vertices().iter().map(|v| v.id().clone()).collect();

        let cells = graph
            .vertices()
            .iter()
            .map(|row| {
                let adj = graph.adjacency_list(row);
                graph
                    .vertices()
                    .iter()
                    .map(|col| u8::from(adj.contains(&col)))
                    .collect()
            })
            .collect();

        Self {
            header,
            labels,
            cells,
        }
    }

    /// 表头（升序）
    pub fn header(&self) -> &[K] {
        &self.header
    }

    /// 行标签（顶点集合原始顺序）
    pub fn labels(&self) -> &[K] {
        &self.labels
    }

    /// 矩阵主体
    pub fn cells(&self) -> &[Vec<u8>] {
        &self.cells
    }

    /// 第 `row` 个顶点到第 `col` 个顶点的邻接标记（均按原始顺序）
    pub fn entry(&self, row: usize, col: usize) -> Option<u8> {
        self.cells.get(row)?.get(col).copied()
    }

    /// 带表头和行标签的完整表格
    ///
    /// 第一行为 `0` 加升序表头，其余每行为顶点标识加该行的 0/1 标记。
    pub fn to_table(&self) -> Vec<Vec<String>> {
        let mut table = Vec::with_capacity(self.labels.len() + 1);

        let mut first_row = vec!["0".to_string()];
        first_row.extend(self.header.iter().map(|id| id.to_string()));
        table.push(first_row);

        for (label, row) in self.labels.iter().zip(&self.cells) {
            let mut line = vec![label.to_string()];
            line.extend(row.iter().map(|cell| cell.to_string()));
            table.push(line);
        }

        table
    }
}
