use super::point::Point;
use super::rectangle::Rectangle;
use derive_more::Display;
use serde::{Deserialize, Serialize};

/// 检索/删除的查询条件
///
/// - `Point`：匹配包含该点的几何
/// - `Rectangle`：匹配与该矩形相交的几何
#[derive(Debug, Display, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Query {
    #[display(fmt = "point {}", _0)]
    Point(Point),
    #[display(fmt = "rectangle {}", _0)]
    Rectangle(Rectangle),
}

impl Query {
    /// 判断给定矩形是否满足查询条件
    ///
    /// 同一个判定既用于剪枝（矩形为节点区域），也用于逐个过滤条目。
    pub fn matches(&self, rect: &Rectangle) -> bool {
        match self {
            Query::Point(point) => rect.contains(point),
            Query::Rectangle(query) => rect.intersects(query),
        }
    }

    /// 查询覆盖的范围，点查询是宽高为0的矩形
    pub fn extent(&self) -> Rectangle {
        match self {
            Query::Point(point) => Rectangle::from_point(*point),
            Query::Rectangle(query) => *query,
        }
    }
}

impl From<Point> for Query {
    fn from(point: Point) -> Self {
        Query::Point(point)
    }
}

impl From<Rectangle> for Query {
    fn from(rect: Rectangle) -> Self {
        Query::Rectangle(rect)
    }
}

impl From<&Rectangle> for Query {
    fn from(rect: &Rectangle) -> Self {
        Query::Rectangle(*rect)
    }
}
