pub mod algorithms;
pub mod error;
pub mod node;
pub mod point;
pub mod query;
pub mod rectangle;

// 重新导出主要类型
pub use algorithms::export::{NodeVisualization, TreeVisualization};
pub use algorithms::subscription::{Change, Insertion, Subscription};
pub use error::{ExportError, QuadTreeError};
pub use node::{QuadTree, Quadrant};
pub use point::Point;
pub use query::Query;
pub use rectangle::{Bounded, Rectangle};
