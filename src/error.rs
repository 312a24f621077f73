//! 错误类型定义

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("顶点集合不能为空")]
    EmptyVertexSet,

    #[error("顶点未在顶点集合中声明: {0}")]
    UndeclaredVertex(String),

    #[error("顶点不存在: {0}")]
    VertexNotFound(String),

    #[error("输入格式错误（第 {line} 行）: {reason}")]
    MalformedInput { line: usize, reason: String },

    #[error("图不连通: {0}")]
    DisconnectedGraph(String),

    #[error("序列化错误: {0}")]
    Serialization(String),

    #[error("IO 错误: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// 构造输入格式错误
    pub(crate) fn malformed(line: usize, reason: impl Into<String>) -> Self {
        Error::MalformedInput {
            line,
            reason: reason.into(),
        }
    }
}
