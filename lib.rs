//! # 四叉树空间索引
//!
//! 一个可变的、能够自动扩展的四叉树，索引轴对齐矩形，支持插入、点/矩形检索、
//! 删除以及变更订阅。
//!
//! ## 主要特性
//!
//! - 节点超出容量时惰性分裂为四个等大的象限
//! - 跨越多个象限的条目留在父节点，不重复存储
//! - 根节点遇到区域之外的条目时原地扩展为两倍大小，调用方的引用保持不变
//! - 每次顶层插入/删除恰好通知订阅者一次
//!
//! ## 使用示例
//!
//! ```rust
//! use quadtree::{Point, QuadTree, Rectangle};
//!
//! let mut tree = QuadTree::root(Rectangle::new(0.0, 0.0, 100.0, 100.0), 2).unwrap();
//! tree.insert(Rectangle::new(10.0, 10.0, 5.0, 5.0)).unwrap();
//! tree.insert(Rectangle::new(-160.0, -160.0, 5.0, 5.0)).unwrap();
//!
//! assert_eq!(tree.rect(), &Rectangle::new(-150.0, -150.0, 400.0, 400.0));
//! assert_eq!(tree.retrieve(Point::new(10.0, 10.0)).len(), 1);
//! assert_eq!(tree.retrieve_all().len(), 2);
//! ```

pub mod config;
pub mod quadtree;

use std::error::Error;

// 重新导出主要的公共接口
pub use config::{DemoConfig, TreeConfig};
pub use quadtree::{
    Bounded, Change, ExportError, Insertion, Point, QuadTree, QuadTreeError, Quadrant, Query,
    Rectangle, Subscription,
};

pub type Result<T> = std::result::Result<T, Box<dyn Error + Send + Sync>>;
