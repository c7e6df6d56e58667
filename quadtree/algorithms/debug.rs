use crate::quadtree::node::QuadTree;
use crate::quadtree::rectangle::Bounded;

/// 四叉树调试功能实现
impl<T: Bounded> QuadTree<T> {
    /// 生成树结构的缩进文本，用于调试和日志
    ///
    /// 每个节点一行（象限、区域、节点类型、直接持有的条目数），
    /// 随后每个直接持有的条目一行。
    pub fn render_structure(&self) -> String {
        let mut out = String::new();
        self.render_node(&mut out, 0, "Root");
        out
    }

    fn render_node(&self, out: &mut String, depth: usize, label: &str) {
        let indent = "  ".repeat(depth);
        let kind = if self.is_leaf { "leaf" } else { "branch" };
        out.push_str(&format!(
            "{}{} [{}] {} ({} items)\n",
            indent,
            label,
            self.rect,
            kind,
            self.nodes.len()
        ));

        for (i, item) in self.nodes.iter().enumerate() {
            out.push_str(&format!("{}  [{}] Item: {}\n", indent, i, item.bounds()));
        }

        for (quadrant, child) in self.children() {
            child.render_node(out, depth + 1, &format!("{:?}", quadrant));
        }
    }
}
