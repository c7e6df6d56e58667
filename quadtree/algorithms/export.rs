use crate::quadtree::error::ExportError;
use crate::quadtree::node::{QuadTree, Quadrant};
use crate::quadtree::rectangle::Rectangle;
use serde::Serialize;
use std::fs;
use std::path::Path;

/// 用于JSON序列化的树结构
#[derive(Debug, Serialize)]
pub struct TreeVisualization<'a, T> {
    pub capacity: usize,
    pub root: NodeVisualization<'a, T>,
}

/// 用于JSON序列化的节点结构，字段与节点的公开字段一一对应
#[derive(Debug, Serialize)]
pub struct NodeVisualization<'a, T> {
    pub rect: Rectangle,
    pub is_root: bool,
    pub is_leaf: bool,
    /// 直接持有的条目
    pub items: &'a [T],
    pub top_left: Option<Box<NodeVisualization<'a, T>>>,
    pub top_right: Option<Box<NodeVisualization<'a, T>>>,
    pub bottom_left: Option<Box<NodeVisualization<'a, T>>>,
    pub bottom_right: Option<Box<NodeVisualization<'a, T>>>,
}

/// 树结构导出
impl<T: Serialize> QuadTree<T> {
    /// 导出树结构为JSON格式
    ///
    /// 返回包含完整树结构的JSON字符串，用于检查或前端可视化
    pub fn export_to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&self.create_tree_visualization())
    }

    /// 把JSON格式的树结构写入文件
    ///
    /// 先写入临时文件再重命名，确保目标文件不会处于写了一半的状态
    pub fn dump_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ExportError> {
        let path = path.as_ref();
        let temp_path = path.with_extension(format!(
            "{}.tmp",
            path.extension().unwrap_or_default().to_string_lossy()
        ));

        let data = serde_json::to_vec_pretty(&self.create_tree_visualization())?;
        fs::write(&temp_path, data)?;
        fs::rename(temp_path, path)?;

        Ok(())
    }

    /// 创建用于导出的树结构
    pub fn create_tree_visualization(&self) -> TreeVisualization<'_, T> {
        TreeVisualization {
            capacity: self.capacity,
            root: self.create_node_visualization(),
        }
    }

    /// 递归创建节点的导出结构
    fn create_node_visualization(&self) -> NodeVisualization<'_, T> {
        let child = |quadrant: Quadrant| {
            self.child(quadrant)
                .map(|node| Box::new(node.create_node_visualization()))
        };

        NodeVisualization {
            rect: self.rect,
            is_root: self.is_root,
            is_leaf: self.is_leaf,
            items: &self.nodes,
            top_left: child(Quadrant::TopLeft),
            top_right: child(Quadrant::TopRight),
            bottom_left: child(Quadrant::BottomLeft),
            bottom_right: child(Quadrant::BottomRight),
        }
    }
}
