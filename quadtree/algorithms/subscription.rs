use crate::quadtree::node::QuadTree;
use crate::quadtree::query::Query;
use std::fmt;

/// 插入操作的原始参数
#[derive(Debug, Clone, PartialEq)]
pub enum Insertion<T> {
    /// 通过 `insert` 插入的单个条目
    Single(T),
    /// 通过 `insert_all` 插入的一批条目
    Batch(Vec<T>),
}

/// 变更通知
///
/// 通知中携带的是调用方传入的原始参数，而不是删除掉的条目或内部变换后的值。
#[derive(Debug, Clone, PartialEq)]
pub enum Change<T> {
    Insert(Insertion<T>),
    Delete(Query),
}

/// 订阅凭证，用于取消订阅
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Subscription(u64);

pub(crate) type Callback<T> = Box<dyn FnMut(&Change<T>)>;

/// 节点自身持有的订阅者列表
pub(crate) struct Subscribers<T> {
    next_id: u64,
    entries: Vec<(Subscription, Callback<T>)>,
}

impl<T> Default for Subscribers<T> {
    fn default() -> Self {
        Subscribers {
            next_id: 0,
            entries: Vec::new(),
        }
    }
}

impl<T> fmt::Debug for Subscribers<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscribers")
            .field("count", &self.entries.len())
            .finish()
    }
}

impl<T> Subscribers<T> {
    pub(crate) fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    fn add(&mut self, callback: Callback<T>) -> Subscription {
        let subscription = Subscription(self.next_id);
        self.next_id += 1;
        self.entries.push((subscription, callback));
        subscription
    }

    fn remove(&mut self, subscription: Subscription) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(id, _)| *id != subscription);
        self.entries.len() != before
    }

    /// 按注册顺序同步调用所有订阅者
    pub(crate) fn notify(&mut self, change: &Change<T>) {
        for (_, callback) in self.entries.iter_mut() {
            callback(change);
        }
    }
}

/// 变更订阅
impl<T> QuadTree<T> {
    /// 注册变更回调
    ///
    /// 每次顶层的 `insert`/`insert_all`/`delete` 调用完成后，回调恰好被调用一次，
    /// 与内部发生了多少次分裂或扩展无关。
    ///
    /// # 返回值
    /// 订阅凭证，传给 `unsubscribe` 即可移除该回调
    pub fn subscribe<F>(&mut self, callback: F) -> Subscription
    where
        F: FnMut(&Change<T>) + 'static,
    {
        self.subscribers.add(Box::new(callback))
    }

    /// 取消订阅
    ///
    /// 只有第一次调用返回 true，重复取消是无害的。
    pub fn unsubscribe(&mut self, subscription: Subscription) -> bool {
        self.subscribers.remove(subscription)
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    pub(crate) fn has_subscribers(&self) -> bool {
        !self.subscribers.is_empty()
    }
}
