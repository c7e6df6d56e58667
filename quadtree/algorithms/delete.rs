use crate::quadtree::algorithms::subscription::Change;
use crate::quadtree::node::QuadTree;
use crate::quadtree::query::Query;
use crate::quadtree::rectangle::Bounded;
use tracing::debug;

/// 删除操作相关算法
impl<T: Bounded> QuadTree<T> {
    /// 删除所有匹配查询的条目
    ///
    /// - 点查询：删除包含该点的条目
    /// - 矩形查询：删除与该矩形相交的条目
    ///
    /// 删除不会改变树的形状：变空的子节点和条目列表原样保留，不做合并。
    /// 无论是否删除了条目，订阅者都会收到一次携带原始查询的通知。
    ///
    /// # 返回值
    /// 删除的条目数量
    pub fn delete<Q: Into<Query>>(&mut self, query: Q) -> usize {
        let query = query.into();
        let removed = if query.matches(&self.rect) {
            self.delete_recursive(&query)
        } else {
            0
        };

        debug!("Deleted {} items matching {}", removed, query);

        if self.has_subscribers() {
            self.subscribers.notify(&Change::Delete(query));
        }
        removed
    }

    /// 递归删除，剪枝规则与检索相同
    fn delete_recursive(&mut self, query: &Query) -> usize {
        let before = self.nodes.len();
        self.nodes.retain(|item| !query.matches(&item.bounds()));
        let mut removed = before - self.nodes.len();

        // 本节点没有删除任何条目时也继续访问子节点
        for quadrant in self.rect.touched_quadrants(&query.extent()) {
            if let Some(child) = self.children[quadrant.index()].as_deref_mut() {
                removed += child.delete_recursive(query);
            }
        }
        removed
    }
}
