//! 通用类型定义

use std::fmt;
use std::hash::Hash;

/// 边权重
pub type Weight = f64;

/// 未显式给出权重时边的默认权重
pub const DEFAULT_WEIGHT: Weight = 1.0;

/// 顶点标识需要具备的能力：可比较、可哈希、可排序、可打印
///
/// 字符串和整数都满足该约束。
pub trait VertexKey: Clone + Eq + Hash + Ord + fmt::Debug + fmt::Display {}

impl<T> VertexKey for T where T: Clone + Eq + Hash + Ord + fmt::Debug + fmt::Display {}
