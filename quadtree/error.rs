use super::rectangle::Rectangle;

/// 四叉树错误类型
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum QuadTreeError {
    /// 非根节点收到了区域之外的几何。根节点会自动扩展，因此只有
    /// 调用方直接持有非根树时才会看到这个错误。
    #[error("item {item} lies outside node region {region}")]
    OutOfBounds { item: Rectangle, region: Rectangle },

    /// 条目只触及一个子象限，但内部节点上对应的子节点不存在，
    /// 说明树状态已经损坏。条目不会被存入。
    #[error("item {item} was accepted by {accepted} child quadrants, expected exactly 1")]
    InvariantViolation { item: Rectangle, accepted: usize },

    #[error("invalid capacity {0}: a node must hold at least 1 item")]
    InvalidCapacity(usize),

    #[error("invalid region {0}: center must be finite and width/height finite and positive")]
    InvalidRegion(Rectangle),

    #[error("item bounds {0} are not finite")]
    NonFiniteItem(Rectangle),
}

/// 导出错误类型
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}
