// 四叉树算法模块
//
// 这个模块包含四叉树的所有核心算法实现，按功能分解为不同的子模块：
// - insert: 插入、分裂和根节点扩展
// - search: 检索和全量遍历
// - delete: 按查询条件删除
// - subscription: 变更订阅和通知
// - debug: 调试输出
// - export: 导出为JSON文档

pub mod debug;
pub mod delete;
pub mod export;
pub mod insert;
pub mod search;
pub mod subscription;
