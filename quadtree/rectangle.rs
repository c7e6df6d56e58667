use super::node::Quadrant;
use super::point::Point;
use derive_more::Display;
use serde::{Deserialize, Serialize};

/// 轴对齐矩形
///
/// 所有几何（包括节点自身的区域）都以中心点 + 宽高表示，而不是左上角。
/// 坐标系与屏幕一致：y 轴向下，"top" 指 y 较小的一侧。
#[derive(Debug, Display, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[display(fmt = "{},{}: {}x{}", x, y, width, height)]
pub struct Rectangle {
    /// 中心点 x 坐标
    pub x: f64,
    /// 中心点 y 坐标
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rectangle {
    /// 以中心点和宽高创建矩形
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Rectangle {
            x,
            y,
            width,
            height,
        }
    }

    /// 创建以指定点为中心、宽高为0的矩形
    pub fn from_point(point: Point) -> Self {
        Rectangle::new(point.x, point.y, 0.0, 0.0)
    }

    pub fn center(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn left(&self) -> f64 {
        self.x - self.width / 2.0
    }

    pub fn right(&self) -> f64 {
        self.x + self.width / 2.0
    }

    pub fn top(&self) -> f64 {
        self.y - self.height / 2.0
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height / 2.0
    }

    /// 判断点是否落在矩形内（闭区间，边界上的点也算包含）
    pub fn contains(&self, point: &Point) -> bool {
        point.x >= self.left()
            && point.x <= self.right()
            && point.y >= self.top()
            && point.y <= self.bottom()
    }

    /// 判断两个矩形是否相交（边缘接触也算相交）
    pub fn intersects(&self, other: &Rectangle) -> bool {
        !(other.left() > self.right()
            || other.right() < self.left()
            || other.top() > self.bottom()
            || other.bottom() < self.top())
    }

    /// 计算指定象限对应的子矩形
    ///
    /// 子矩形宽高各为原矩形的一半，中心偏移 ±width/4、±height/4，
    /// 四个子矩形恰好拼成原矩形。
    pub fn quadrant(&self, quadrant: Quadrant) -> Rectangle {
        let (dx, dy) = match quadrant {
            Quadrant::TopLeft => (-1.0, -1.0),
            Quadrant::TopRight => (1.0, -1.0),
            Quadrant::BottomLeft => (-1.0, 1.0),
            Quadrant::BottomRight => (1.0, 1.0),
        };

        Rectangle::new(
            self.x + dx * self.width / 4.0,
            self.y + dy * self.height / 4.0,
            self.width / 2.0,
            self.height / 2.0,
        )
    }

    /// 按本矩形的中心线判断 `other` 触及哪些象限，按遍历顺序返回
    ///
    /// 压在中心线上也算触及两侧。只比较中心线，不检查 `other` 是否在本矩形之内。
    pub fn touched_quadrants(&self, other: &Rectangle) -> impl Iterator<Item = Quadrant> {
        let west = other.left() <= self.x;
        let east = other.right() >= self.x;
        let north = other.top() <= self.y;
        let south = other.bottom() >= self.y;

        Quadrant::TRAVERSAL_ORDER
            .into_iter()
            .filter(move |quadrant| match quadrant {
                Quadrant::TopLeft => west && north,
                Quadrant::TopRight => east && north,
                Quadrant::BottomLeft => west && south,
                Quadrant::BottomRight => east && south,
            })
    }

    /// 判断矩形的所有分量是否都是有限值
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.width.is_finite() && self.height.is_finite()
    }
}

/// 可以存入四叉树的条目
///
/// 条目只需要能给出自己的包围矩形；`Rectangle` 本身就是最简单的条目。
pub trait Bounded {
    fn bounds(&self) -> Rectangle;
}

impl Bounded for Rectangle {
    fn bounds(&self) -> Rectangle {
        *self
    }
}
