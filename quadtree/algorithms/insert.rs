use crate::quadtree::algorithms::subscription::{Change, Insertion};
use crate::quadtree::error::QuadTreeError;
use crate::quadtree::node::{QuadTree, Quadrant};
use crate::quadtree::rectangle::{Bounded, Rectangle};
use std::mem;
use tracing::{debug, trace};

/// 单次放置的结果
///
/// 非根节点拒绝区域之外的条目时把条目原样交还给调用方。
/// 根节点总会扩展到包含条目为止，不会产生这个信号。
enum Placement<T> {
    Stored,
    OutOfBounds(T),
}

/// 插入操作相关算法
impl<T> QuadTree<T>
where
    T: Bounded + Clone,
{
    /// 插入单个条目
    ///
    /// 根节点遇到区域之外的条目时会反复扩展直到包含该条目；
    /// 非根节点则返回 `QuadTreeError::OutOfBounds`。
    pub fn insert(&mut self, item: T) -> Result<(), QuadTreeError> {
        let change = self
            .has_subscribers()
            .then(|| Change::Insert(Insertion::Single(item.clone())));

        self.insert_checked(item)?;

        if let Some(change) = change {
            self.subscribers.notify(&change);
        }
        Ok(())
    }

    /// 按顺序逐个插入一批条目
    ///
    /// 批量插入不具备原子性：某个条目失败时，之前的条目保持已插入状态。
    /// 全部成功后只发送一次通知。
    pub fn insert_all<I>(&mut self, items: I) -> Result<(), QuadTreeError>
    where
        I: IntoIterator<Item = T>,
    {
        let items: Vec<T> = items.into_iter().collect();
        let change = self
            .has_subscribers()
            .then(|| Change::Insert(Insertion::Batch(items.clone())));

        for item in items {
            self.insert_checked(item)?;
        }

        if let Some(change) = change {
            self.subscribers.notify(&change);
        }
        Ok(())
    }

    /// 顶层插入：校验条目后放置，并把越界信号转换成错误
    fn insert_checked(&mut self, item: T) -> Result<(), QuadTreeError> {
        let bounds = item.bounds();
        if !bounds.is_finite() {
            return Err(QuadTreeError::NonFiniteItem(bounds));
        }

        match self.place(item)? {
            Placement::Stored => Ok(()),
            Placement::OutOfBounds(_) => Err(QuadTreeError::OutOfBounds {
                item: bounds,
                region: self.rect,
            }),
        }
    }

    /// 把条目放入当前子树
    ///
    /// 只在这里检查节点区域：根节点扩展到包含条目为止，非根节点交还越界的条目。
    fn place(&mut self, item: T) -> Result<Placement<T>, QuadTreeError> {
        let bounds = item.bounds();

        if !self.rect.intersects(&bounds) {
            if !self.is_root {
                return Ok(Placement::OutOfBounds(item));
            }
            // 每次扩展都把区域朝条目方向扩大一倍，有限坐标必然终止
            while !self.rect.intersects(&bounds) {
                self.expand(&bounds);
            }
        }

        self.store(item, false)?;
        Ok(Placement::Stored)
    }

    /// 把已经归属本节点的条目存入子树
    ///
    /// # 参数
    /// * `force` - 跳过容量检查直接存入本节点，仅在分裂时重新分配已有条目使用
    fn store(&mut self, item: T, force: bool) -> Result<(), QuadTreeError> {
        let has_free_capacity = self.nodes.len() < self.capacity;
        if force || (has_free_capacity && self.is_leaf) {
            self.nodes.push(item);
            return Ok(());
        }

        self.subdivide()?;
        self.store_below(item, force)
    }

    /// 按本节点的中心线选择子节点
    ///
    /// 跨越中心线的条目留在本节点。子节点的区域经过浮点舍入，
    /// 相邻子区域之间可能有极小的缝隙，这里只比较中心线。
    fn store_below(&mut self, item: T, force: bool) -> Result<(), QuadTreeError> {
        let bounds = item.bounds();
        let Some(quadrant) = self.single_quadrant(&bounds) else {
            self.nodes.push(item);
            return Ok(());
        };

        match self.children[quadrant.index()].as_deref_mut() {
            Some(child) => child.store(item, force),
            None => Err(QuadTreeError::InvariantViolation {
                item: bounds,
                accepted: 0,
            }),
        }
    }

    /// 分裂节点
    ///
    /// 幂等：已经分裂过的节点直接返回。创建四个子节点后重新分配本节点的条目，
    /// 跨越中心线的条目继续留在本节点，其余条目强制放入对应的子节点。
    pub(crate) fn subdivide(&mut self) -> Result<(), QuadTreeError> {
        if !self.is_leaf {
            return Ok(());
        }

        for quadrant in Quadrant::ALL {
            let region = self.rect.quadrant(quadrant);
            self.children[quadrant.index()] =
                Some(Box::new(QuadTree::child_node(region, self.capacity)));
        }
        self.is_leaf = false;

        let held = mem::take(&mut self.nodes);
        let held_count = held.len();
        for item in held {
            self.store_below(item, true)?;
        }

        trace!(
            "Subdivided {} ({} held, {} retained)",
            self.rect,
            held_count,
            self.nodes.len()
        );
        Ok(())
    }

    /// 条目只触及一个象限时返回该象限
    fn single_quadrant(&self, bounds: &Rectangle) -> Option<Quadrant> {
        let mut touched = self.rect.touched_quadrants(bounds);
        match (touched.next(), touched.next()) {
            (Some(quadrant), None) => Some(quadrant),
            _ => None,
        }
    }
}

/// 扩展方向：旧区域在新区域中所处的象限，以及扩大一倍后的新区域
///
/// 朝 `towards` 的方向扩展，差值为0时按正方向处理。旧区域恰好是新区域的一个象限。
pub(crate) fn expansion_towards(rect: &Rectangle, towards: &Rectangle) -> (Quadrant, Rectangle) {
    let grow_right = towards.x >= rect.x;
    let grow_down = towards.y >= rect.y;

    let slot = match (grow_right, grow_down) {
        (true, true) => Quadrant::TopLeft,
        (false, true) => Quadrant::TopRight,
        (true, false) => Quadrant::BottomLeft,
        (false, false) => Quadrant::BottomRight,
    };

    let dx = if grow_right { rect.width / 2.0 } else { -rect.width / 2.0 };
    let dy = if grow_down { rect.height / 2.0 } else { -rect.height / 2.0 };

    let region = Rectangle::new(rect.x + dx, rect.y + dy, rect.width * 2.0, rect.height * 2.0);
    (slot, region)
}

/// 根节点扩展
impl<T> QuadTree<T> {
    /// 把根节点扩展为原来的两倍大小
    ///
    /// 旧根节点的全部状态（子节点、条目、叶子标记）移动到一个新的非根子节点中，
    /// 根节点对象本身原地变为新的父节点。调用方持有的根引用在任意次扩展之后
    /// 仍然指向整棵树，订阅者也保留在根节点上。非根节点调用时什么都不做。
    pub(crate) fn expand(&mut self, towards: &Rectangle) {
        if !self.is_root {
            return;
        }

        let old_rect = self.rect;
        let (slot, region) = expansion_towards(&old_rect, towards);

        let relocated = QuadTree {
            rect: old_rect,
            capacity: self.capacity,
            is_root: false,
            is_leaf: self.is_leaf,
            nodes: mem::take(&mut self.nodes),
            children: mem::take(&mut self.children),
            subscribers: Default::default(),
        };
        let mut relocated = Some(Box::new(relocated));

        self.rect = region;
        self.is_leaf = false;
        for quadrant in Quadrant::ALL {
            self.children[quadrant.index()] = if quadrant == slot {
                relocated.take()
            } else {
                Some(Box::new(QuadTree::child_node(
                    region.quadrant(quadrant),
                    self.capacity,
                )))
            };
        }

        debug!(
            "Expanded root from {} to {} (old region kept as {:?})",
            old_rect, region, slot
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quadtree::point::Point;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn tree(capacity: usize) -> QuadTree<Rectangle> {
        QuadTree::with_capacity(capacity).unwrap()
    }

    fn child(tree: &QuadTree<Rectangle>, quadrant: Quadrant) -> &QuadTree<Rectangle> {
        tree.child(quadrant).unwrap()
    }

    #[test]
    fn test_insert_single_item_without_subdivision() {
        let mut tree = tree(2);
        tree.insert(Rectangle::new(10.0, 10.0, 5.0, 5.0)).unwrap();

        assert!(tree.is_leaf());
        assert_eq!(tree.items().len(), 1);
        for quadrant in Quadrant::ALL {
            assert!(tree.child(quadrant).is_none());
        }
    }

    #[test]
    fn test_insert_up_to_capacity_creates_no_children() {
        let mut tree = tree(3);
        tree.insert_all(vec![
            Rectangle::new(10.0, 10.0, 5.0, 5.0),
            Rectangle::new(-15.0, 10.0, 5.0, 5.0),
            Rectangle::new(-15.0, -20.0, 5.0, 5.0),
        ])
        .unwrap();

        assert!(tree.is_leaf());
        assert_eq!(tree.items().len(), 3);
        assert_eq!(tree.node_count(), 1);
    }

    #[test]
    fn test_insert_over_capacity_subdivides_into_quadrants() {
        let mut tree = tree(2);
        tree.insert_all(vec![
            Rectangle::new(10.0, 10.0, 5.0, 5.0),
            Rectangle::new(-15.0, 10.0, 5.0, 5.0),
            Rectangle::new(10.0, -10.0, 5.0, 5.0),
            Rectangle::new(-15.0, -10.0, 5.0, 5.0),
        ])
        .unwrap();

        assert!(!tree.is_leaf());
        assert!(tree.items().is_empty());
        assert_eq!(
            child(&tree, Quadrant::BottomRight).items(),
            &[Rectangle::new(10.0, 10.0, 5.0, 5.0)]
        );
        assert_eq!(
            child(&tree, Quadrant::BottomLeft).items(),
            &[Rectangle::new(-15.0, 10.0, 5.0, 5.0)]
        );
        assert_eq!(
            child(&tree, Quadrant::TopRight).items(),
            &[Rectangle::new(10.0, -10.0, 5.0, 5.0)]
        );
        assert_eq!(
            child(&tree, Quadrant::TopLeft).items(),
            &[Rectangle::new(-15.0, -10.0, 5.0, 5.0)]
        );
    }

    #[test]
    fn test_capacity_plus_one_subdivides_exactly_once() {
        let mut tree = tree(3);
        tree.insert_all(vec![
            Rectangle::new(20.0, 20.0, 5.0, 5.0),
            Rectangle::new(-20.0, 20.0, 5.0, 5.0),
            Rectangle::new(20.0, -20.0, 5.0, 5.0),
            Rectangle::new(-20.0, -20.0, 5.0, 5.0),
        ])
        .unwrap();

        assert_eq!(tree.node_count(), 5);
        for (_, child) in tree.children() {
            assert!(child.is_leaf());
            assert_eq!(child.items().len(), 1);
            assert!(child.rect().intersects(&child.items()[0]));
        }
    }

    #[test]
    fn test_spanning_item_is_kept_in_parent() {
        let mut tree = tree(1);
        tree.insert(Rectangle::new(10.0, 10.0, 5.0, 5.0)).unwrap();
        tree.insert(Rectangle::new(5.0, 0.0, 5.0, 5.0)).unwrap();

        assert!(!tree.is_leaf());
        assert_eq!(tree.items(), &[Rectangle::new(5.0, 0.0, 5.0, 5.0)]);
        assert_eq!(child(&tree, Quadrant::BottomRight).items().len(), 1);
        assert!(child(&tree, Quadrant::TopRight).items().is_empty());
        assert!(child(&tree, Quadrant::TopLeft).items().is_empty());
        assert!(child(&tree, Quadrant::BottomLeft).items().is_empty());
    }

    #[test]
    fn test_subdivide_keeps_spanning_items_already_held() {
        let mut tree = tree(1);
        // 横跨中心的条目在分裂时应该留在根节点
        tree.insert(Rectangle::new(0.0, 0.0, 10.0, 10.0)).unwrap();
        tree.insert(Rectangle::new(30.0, 30.0, 5.0, 5.0)).unwrap();

        assert_eq!(tree.items(), &[Rectangle::new(0.0, 0.0, 10.0, 10.0)]);
        assert_eq!(
            child(&tree, Quadrant::BottomRight).items(),
            &[Rectangle::new(30.0, 30.0, 5.0, 5.0)]
        );
    }

    #[test]
    fn test_subdivide_is_idempotent() {
        let mut tree = tree(1);
        tree.insert(Rectangle::new(-30.0, -30.0, 2.0, 2.0)).unwrap();
        tree.subdivide().unwrap();
        let first = child(&tree, Quadrant::TopLeft).rect;
        tree.subdivide().unwrap();

        assert_eq!(child(&tree, Quadrant::TopLeft).rect, first);
        assert_eq!(tree.node_count(), 5);
        assert_eq!(tree.len(), 1);
    }

    #[test]
    fn test_subdivide_children_quarter_region() {
        let mut tree: QuadTree<Rectangle> =
            QuadTree::root(Rectangle::new(10.0, 20.0, 80.0, 40.0), 1).unwrap();
        tree.subdivide().unwrap();

        assert_eq!(child(&tree, Quadrant::TopLeft).rect, Rectangle::new(-10.0, 10.0, 40.0, 20.0));
        assert_eq!(child(&tree, Quadrant::TopRight).rect, Rectangle::new(30.0, 10.0, 40.0, 20.0));
        assert_eq!(child(&tree, Quadrant::BottomLeft).rect, Rectangle::new(-10.0, 30.0, 40.0, 20.0));
        assert_eq!(child(&tree, Quadrant::BottomRight).rect, Rectangle::new(30.0, 30.0, 40.0, 20.0));
        for (_, child) in tree.children() {
            assert_eq!(child.capacity(), 1);
            assert!(!child.is_root());
        }
    }

    #[test]
    fn test_deep_subdivision() {
        let mut tree = tree(1);
        tree.insert_all(vec![
            Rectangle::new(40.0, 40.0, 1.0, 1.0),
            Rectangle::new(45.0, 45.0, 1.0, 1.0),
            Rectangle::new(30.0, 30.0, 1.0, 1.0),
        ])
        .unwrap();

        assert!(tree.depth() > 2);
        assert_eq!(tree.len(), 3);
    }

    #[test]
    fn test_item_between_rounded_child_regions() {
        // 子区域由 x ± width/4 重新计算，舍入后左右子区域之间可能留下缝隙
        let mut rng = StdRng::seed_from_u64(11);
        let mut checked = 0;

        for _ in 0..200_000 {
            if checked == 50 {
                break;
            }
            let region = Rectangle::new(
                rng.gen_range(-1000.0..1000.0),
                rng.gen_range(-1000.0..1000.0),
                rng.gen_range(1.0..1000.0),
                rng.gen_range(1.0..1000.0),
            );
            let top_left = region.quadrant(Quadrant::TopLeft);
            let top_right = region.quadrant(Quadrant::TopRight);
            let x = top_left.right() + (top_right.left() - top_left.right()) / 2.0;
            if !(x > top_left.right() && x < top_right.left()) {
                continue;
            }
            checked += 1;

            let mut tree = QuadTree::root(region, 1).unwrap();
            tree.insert(Rectangle::new(top_left.x, top_left.y, 0.0, 0.0))
                .unwrap();
            let item = Rectangle::new(x, top_left.y, 0.0, 0.0);
            tree.insert(item).unwrap();

            assert!(!tree.is_leaf(), "region {}", region);
            assert_eq!(tree.len(), 2, "region {}", region);
            assert_eq!(tree.retrieve(Point::new(x, top_left.y)), vec![&item]);
            assert_eq!(tree.delete(Point::new(x, top_left.y)), 1);
            assert_eq!(tree.len(), 1);
        }

        assert!(checked > 0);
    }

    #[test]
    fn test_items_on_center_lines_stay_in_parent() {
        let mut tree = tree(1);
        tree.insert(Rectangle::new(-30.0, -30.0, 2.0, 2.0)).unwrap();
        let on_vertical = Rectangle::from_point(Point::new(0.0, 30.0));
        let on_horizontal = Rectangle::from_point(Point::new(-30.0, 0.0));
        tree.insert_all(vec![on_vertical, on_horizontal]).unwrap();

        assert_eq!(tree.items(), &[on_vertical, on_horizontal]);
        assert_eq!(tree.retrieve(Point::new(0.0, 30.0)), vec![&on_vertical]);
    }

    #[test]
    fn test_missing_child_is_invariant_violation() {
        let mut tree = tree(1);
        tree.insert(Rectangle::new(-30.0, -30.0, 2.0, 2.0)).unwrap();
        tree.insert(Rectangle::new(30.0, -30.0, 2.0, 2.0)).unwrap();
        assert!(!tree.is_leaf());

        // 内部节点丢失了一个子节点
        tree.children[Quadrant::BottomRight.index()] = None;
        let before = tree.len();
        let item = Rectangle::new(30.0, 30.0, 2.0, 2.0);

        assert_eq!(
            tree.insert(item).unwrap_err(),
            QuadTreeError::InvariantViolation { item, accepted: 0 }
        );
        assert_eq!(tree.len(), before);
        assert!(tree.items().is_empty());
        assert!(tree.retrieve(Point::new(30.0, 30.0)).is_empty());
    }

    #[test]
    fn test_insert_outside_expands_root() {
        let mut tree = tree(2);
        tree.insert(Rectangle::new(-160.0, -160.0, 5.0, 5.0)).unwrap();

        assert!(tree.is_root());
        assert_eq!(tree.rect(), &Rectangle::new(-150.0, -150.0, 400.0, 400.0));

        let top_left = child(&tree, Quadrant::TopLeft);
        assert_eq!(top_left.len(), 1);
        assert!(top_left.rect().contains(&Point::new(-160.0, -160.0)));
        assert_eq!(tree.len(), 1);
    }

    #[test]
    fn test_expansion_preserves_existing_items() {
        let mut tree = tree(1);
        let existing = vec![
            Rectangle::new(10.0, 10.0, 5.0, 5.0),
            Rectangle::new(-20.0, -20.0, 5.0, 5.0),
            Rectangle::new(0.0, 0.0, 4.0, 4.0),
        ];
        tree.insert_all(existing.clone()).unwrap();
        let before = tree.len();

        tree.insert(Rectangle::new(1000.0, -700.0, 5.0, 5.0)).unwrap();

        assert_eq!(tree.len(), before + 1);
        let all = tree.retrieve_all();
        for item in &existing {
            assert_eq!(all.iter().filter(|&&found| found == item).count(), 1);
        }
        assert!(tree.rect().intersects(&Rectangle::new(1000.0, -700.0, 5.0, 5.0)));
    }

    #[test]
    fn test_expansion_relocates_old_root_as_quadrant() {
        let mut tree = tree(1);
        tree.insert(Rectangle::new(10.0, 10.0, 5.0, 5.0)).unwrap();
        tree.insert(Rectangle::new(-10.0, -10.0, 5.0, 5.0)).unwrap();
        tree.insert(Rectangle::new(120.0, 120.0, 5.0, 5.0)).unwrap();

        assert_eq!(tree.rect(), &Rectangle::new(50.0, 50.0, 200.0, 200.0));
        let relocated = child(&tree, Quadrant::TopLeft);
        assert_eq!(relocated.rect(), &Rectangle::new(0.0, 0.0, 100.0, 100.0));
        assert!(!relocated.is_root());
        assert!(!relocated.is_leaf());
        assert_eq!(relocated.len(), 2);
        assert_eq!(child(&tree, Quadrant::BottomRight).len(), 1);
    }

    #[test]
    fn test_many_expansions() {
        let mut tree = tree(2);
        tree.insert(Rectangle::new(5.0, 5.0, 1.0, 1.0)).unwrap();
        tree.insert(Rectangle::new(-16000.0, -16000.0, 5.0, 5.0)).unwrap();

        // 8次扩展：100 * 2^8
        assert_eq!(tree.rect().width, 25600.0);
        assert_eq!(tree.rect().width, tree.rect().height);
        assert_eq!(tree.len(), 2);
        assert_eq!(tree.retrieve(Point::new(5.0, 5.0)).len(), 1);
    }

    #[test]
    fn test_expansion_of_non_square_region_uses_height() {
        let mut tree: QuadTree<Rectangle> =
            QuadTree::root(Rectangle::new(0.0, 0.0, 100.0, 40.0), 1).unwrap();
        tree.insert(Rectangle::new(0.0, 30.0, 2.0, 2.0)).unwrap();

        assert_eq!(tree.rect(), &Rectangle::new(50.0, 20.0, 200.0, 80.0));
    }

    #[test]
    fn test_expansion_directions() {
        let rect = Rectangle::new(0.0, 0.0, 100.0, 100.0);
        let cases = [
            (Rectangle::new(200.0, 200.0, 1.0, 1.0), Quadrant::TopLeft, (50.0, 50.0)),
            (Rectangle::new(-200.0, 200.0, 1.0, 1.0), Quadrant::TopRight, (-50.0, 50.0)),
            (Rectangle::new(200.0, -200.0, 1.0, 1.0), Quadrant::BottomLeft, (50.0, -50.0)),
            (Rectangle::new(-200.0, -200.0, 1.0, 1.0), Quadrant::BottomRight, (-50.0, -50.0)),
            (Rectangle::new(0.0, 200.0, 1.0, 1.0), Quadrant::TopLeft, (50.0, 50.0)),
            (Rectangle::new(200.0, 0.0, 1.0, 1.0), Quadrant::TopLeft, (50.0, 50.0)),
        ];

        for (towards, expected_slot, (x, y)) in cases {
            let (slot, region) = expansion_towards(&rect, &towards);
            assert_eq!(slot, expected_slot, "towards {}", towards);
            assert_eq!(region, Rectangle::new(x, y, 200.0, 200.0));
            // 旧区域恰好是新区域的一个象限
            assert_eq!(region.quadrant(slot), rect);
        }
    }

    #[test]
    fn test_expansion_center_lines_match_old_edges() {
        // 扩展后的中心线正好落在旧区域的边上，旧区域之内的条目不会越过中心线
        let rect = Rectangle::new(40.81238900788662, -7.3, 906.3817, 17.9);
        let far = 1.0e6;
        let towards = [
            Rectangle::new(far, far, 1.0, 1.0),
            Rectangle::new(-far, far, 1.0, 1.0),
            Rectangle::new(far, -far, 1.0, 1.0),
            Rectangle::new(-far, -far, 1.0, 1.0),
        ];

        for target in towards {
            let (slot, region) = expansion_towards(&rect, &target);
            let edge_x = match slot {
                Quadrant::TopLeft | Quadrant::BottomLeft => rect.right(),
                Quadrant::TopRight | Quadrant::BottomRight => rect.left(),
            };
            let edge_y = match slot {
                Quadrant::TopLeft | Quadrant::TopRight => rect.bottom(),
                Quadrant::BottomLeft | Quadrant::BottomRight => rect.top(),
            };
            assert_eq!(region.x, edge_x, "towards {}", target);
            assert_eq!(region.y, edge_y, "towards {}", target);
        }
    }

    #[test]
    fn test_expand_is_noop_for_non_root() {
        let mut node: QuadTree<Rectangle> =
            QuadTree::new(Rectangle::new(0.0, 0.0, 10.0, 10.0), 1, false).unwrap();
        node.expand(&Rectangle::new(100.0, 100.0, 1.0, 1.0));

        assert_eq!(node.rect(), &Rectangle::new(0.0, 0.0, 10.0, 10.0));
        assert!(node.is_leaf());
    }

    #[test]
    fn test_non_root_rejects_out_of_bounds() {
        let mut node: QuadTree<Rectangle> =
            QuadTree::new(Rectangle::new(0.0, 0.0, 10.0, 10.0), 1, false).unwrap();
        let err = node.insert(Rectangle::new(100.0, 0.0, 1.0, 1.0)).unwrap_err();

        assert_eq!(
            err,
            QuadTreeError::OutOfBounds {
                item: Rectangle::new(100.0, 0.0, 1.0, 1.0),
                region: Rectangle::new(0.0, 0.0, 10.0, 10.0),
            }
        );
        assert!(node.is_empty());
    }

    #[test]
    fn test_non_finite_item_rejected() {
        let mut tree = tree(1);
        let item = Rectangle::new(f64::INFINITY, 0.0, 1.0, 1.0);

        assert_eq!(tree.insert(item).unwrap_err(), QuadTreeError::NonFiniteItem(item));
        assert_eq!(tree.rect(), &QuadTree::<Rectangle>::DEFAULT_REGION);
    }

    #[test]
    fn test_batch_insert_is_not_atomic() {
        let mut node: QuadTree<Rectangle> =
            QuadTree::new(Rectangle::new(0.0, 0.0, 10.0, 10.0), 4, false).unwrap();
        let result = node.insert_all(vec![
            Rectangle::new(1.0, 1.0, 1.0, 1.0),
            Rectangle::new(100.0, 100.0, 1.0, 1.0),
            Rectangle::new(2.0, 2.0, 1.0, 1.0),
        ]);

        assert!(result.is_err());
        assert_eq!(node.items(), &[Rectangle::new(1.0, 1.0, 1.0, 1.0)]);
    }

    #[test]
    fn test_duplicate_items_are_all_kept() {
        let mut tree = tree(1);
        let item = Rectangle::new(20.0, 20.0, 2.0, 2.0);
        tree.insert_all(vec![item; 4]).unwrap();

        assert_eq!(tree.len(), 4);
        assert_eq!(tree.retrieve(Point::new(20.0, 20.0)).len(), 4);
    }
}
