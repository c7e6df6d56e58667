use crate::quadtree::node::QuadTree;
use crate::quadtree::query::Query;
use crate::quadtree::rectangle::Bounded;
use tracing::debug;

/// 检索相关算法
impl<T: Bounded> QuadTree<T> {
    /// 检索匹配查询的条目
    ///
    /// - 点查询：返回包含该点的条目
    /// - 矩形查询：返回与该矩形相交的条目
    ///
    /// 结果顺序固定：本节点的条目，然后依次是右上、左上、右下、左下子树。
    pub fn retrieve<Q: Into<Query>>(&self, query: Q) -> Vec<&T> {
        self.retrieve_with_logging(query, false)
    }

    /// 检索匹配查询的条目，`logging` 为 true 时为每个访问到的节点输出一条调试日志
    pub fn retrieve_with_logging<Q: Into<Query>>(&self, query: Q, logging: bool) -> Vec<&T> {
        let query = query.into();
        let mut results = Vec::new();
        if query.matches(&self.rect) {
            self.search_recursive(&query, logging, true, &mut results);
        }
        results
    }

    /// 粗筛检索（broad phase）
    ///
    /// 只按节点区域剪枝：叶子节点的条目不再逐个检查，直接全部返回，
    /// 内部节点持有的跨象限条目仍然逐个检查。结果是 `retrieve` 的超集，
    /// 适合碰撞检测等后续还会精确判定的场景。
    pub fn retrieve_candidates<Q: Into<Query>>(&self, query: Q) -> Vec<&T> {
        let query = query.into();
        let mut results = Vec::new();
        if query.matches(&self.rect) {
            self.search_recursive(&query, false, false, &mut results);
        }
        results
    }

    /// 递归检索
    ///
    /// 调用方已经确认查询触及本节点。子节点按本节点的中心线剪枝，
    /// 与插入时选择子节点的规则一致。
    ///
    /// # 参数
    /// * `exact` - 为 false 时叶子节点直接返回全部条目
    fn search_recursive<'a>(
        &'a self,
        query: &Query,
        logging: bool,
        exact: bool,
        results: &mut Vec<&'a T>,
    ) {
        if logging {
            if self.nodes.is_empty() {
                debug!("Retrieving from {} with no nodes, trying children", self.rect);
            } else {
                debug!("Retrieving from {} with {} nodes", self.rect, self.nodes.len());
            }
        }

        if self.is_leaf && !exact {
            results.extend(self.nodes.iter());
        } else {
            results.extend(
                self.nodes
                    .iter()
                    .filter(|item| query.matches(&item.bounds())),
            );
        }

        for quadrant in self.rect.touched_quadrants(&query.extent()) {
            if let Some(child) = self.child(quadrant) {
                child.search_recursive(query, logging, exact, results);
            }
        }
    }
}

/// 全量遍历
impl<T> QuadTree<T> {
    /// 返回树中的全部条目，按先序遍历（本节点、右上、左上、右下、左下）
    pub fn retrieve_all(&self) -> Vec<&T> {
        let mut results = Vec::with_capacity(self.nodes.len());
        self.collect_all(&mut results);
        results
    }

    fn collect_all<'a>(&'a self, results: &mut Vec<&'a T>) {
        results.extend(self.nodes.iter());
        for (_, child) in self.children() {
            child.collect_all(results);
        }
    }
}
