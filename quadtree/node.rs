use super::algorithms::subscription::Subscribers;
use super::error::QuadTreeError;
use super::rectangle::Rectangle;
use serde::{Deserialize, Serialize};

/// 子节点所在的象限
///
/// y 轴向下，因此 `Top*` 是 y 较小的一半。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Quadrant {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Quadrant {
    pub const ALL: [Quadrant; 4] = [
        Quadrant::TopLeft,
        Quadrant::TopRight,
        Quadrant::BottomLeft,
        Quadrant::BottomRight,
    ];

    /// 检索、遍历和插入时访问子节点的固定顺序
    pub const TRAVERSAL_ORDER: [Quadrant; 4] = [
        Quadrant::TopRight,
        Quadrant::TopLeft,
        Quadrant::BottomRight,
        Quadrant::BottomLeft,
    ];

    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

/// 四叉树节点
///
/// 每个节点拥有一个区域、最多 `capacity` 个直接持有的条目，以及最多4个子节点。
/// 根节点和内部节点是同一种结构，根节点只是多了 `is_root` 标记：
/// 只有根节点会在收到区域之外的条目时扩展自身。
///
/// 不变量：
/// - `is_leaf` 为 true 当且仅当四个子节点槽位都为空
/// - 分裂后仍留在 `nodes` 中的条目都跨越了本节点的中心线
/// - 四个子节点把父区域四等分，条目归属哪个子节点只由父节点的中心线决定
#[derive(Debug)]
pub struct QuadTree<T> {
    /// 节点区域（中心点 + 宽高）
    pub(crate) rect: Rectangle,

    /// 节点分裂前最多直接持有的条目数
    pub(crate) capacity: usize,

    pub(crate) is_root: bool,

    pub(crate) is_leaf: bool,

    /// 直接持有的条目
    ///
    /// 叶子节点：容量以内的所有条目
    /// 内部节点：跨越多个子象限、无法唯一归属的条目
    pub(crate) nodes: Vec<T>,

    /// 子节点，按 `Quadrant::index()` 存放
    pub(crate) children: [Option<Box<QuadTree<T>>>; 4],

    /// 变更订阅者
    pub(crate) subscribers: Subscribers<T>,
}

impl<T> QuadTree<T> {
    /// 默认区域：以原点为中心的 100x100
    pub const DEFAULT_REGION: Rectangle = Rectangle {
        x: 0.0,
        y: 0.0,
        width: 100.0,
        height: 100.0,
    };

    /// 创建新的四叉树节点
    ///
    /// # 参数
    /// * `rect` - 节点区域，中心必须是有限值，宽高必须为有限正数
    /// * `capacity` - 分裂前最多直接持有的条目数，至少为1
    /// * `is_root` - 是否为根节点，只有根节点可以扩展
    pub fn new(rect: Rectangle, capacity: usize, is_root: bool) -> Result<Self, QuadTreeError> {
        if capacity == 0 {
            return Err(QuadTreeError::InvalidCapacity(capacity));
        }
        if !rect.is_finite() || rect.width <= 0.0 || rect.height <= 0.0 {
            return Err(QuadTreeError::InvalidRegion(rect));
        }

        let mut tree = Self::child_node(rect, capacity);
        tree.is_root = is_root;
        Ok(tree)
    }

    /// 创建根节点
    pub fn root(rect: Rectangle, capacity: usize) -> Result<Self, QuadTreeError> {
        Self::new(rect, capacity, true)
    }

    /// 使用默认区域创建根节点
    pub fn with_capacity(capacity: usize) -> Result<Self, QuadTreeError> {
        Self::root(Self::DEFAULT_REGION, capacity)
    }

    /// 创建空的非根叶子节点（由分裂和扩展内部使用，区域已经过校验）
    pub(crate) fn child_node(rect: Rectangle, capacity: usize) -> Self {
        QuadTree {
            rect,
            capacity,
            is_root: false,
            is_leaf: true,
            nodes: Vec::new(),
            children: Default::default(),
            subscribers: Subscribers::default(),
        }
    }

    /// 节点区域
    pub fn rect(&self) -> &Rectangle {
        &self.rect
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn is_root(&self) -> bool {
        self.is_root
    }

    pub fn is_leaf(&self) -> bool {
        self.is_leaf
    }

    /// 当前节点直接持有的条目
    pub fn items(&self) -> &[T] {
        &self.nodes
    }

    /// 获取指定象限的子节点
    pub fn child(&self, quadrant: Quadrant) -> Option<&QuadTree<T>> {
        self.children[quadrant.index()].as_deref()
    }

    /// 按遍历顺序返回存在的子节点
    pub fn children(&self) -> impl Iterator<Item = (Quadrant, &QuadTree<T>)> {
        Quadrant::TRAVERSAL_ORDER
            .into_iter()
            .filter_map(move |quadrant| self.child(quadrant).map(|child| (quadrant, child)))
    }

    /// 子树中的条目总数
    pub fn len(&self) -> usize {
        self.nodes.len() + self.children().map(|(_, child)| child.len()).sum::<usize>()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// 子树深度，单个叶子节点深度为1
    pub fn depth(&self) -> usize {
        1 + self
            .children()
            .map(|(_, child)| child.depth())
            .max()
            .unwrap_or(0)
    }

    /// 子树中的节点总数（包括自身）
    pub fn node_count(&self) -> usize {
        1 + self
            .children()
            .map(|(_, child)| child.node_count())
            .sum::<usize>()
    }
}
