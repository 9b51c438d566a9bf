// ==========================================
// 制药生产记录对账系统 - 仓储层错误类型
// ==========================================
// 工具: thiserror 派生宏
// 说明: 核心只做读取,错误面只有集合访问一类;
// 数据形态缺陷不在此建模（宽容读取,缺失等于零贡献）
// ==========================================

use thiserror::Error;

/// 仓储层错误类型
#[derive(Error, Debug)]
pub enum RepositoryError {
    #[error("集合读取失败: collection={collection}, {message}")]
    CollectionReadError { collection: String, message: String },

    #[error("集合连接失败: {0}")]
    ConnectionError(String),

    #[error("内部错误: {0}")]
    InternalError(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl RepositoryError {
    /// 构造集合读取错误
    pub fn read_failed(collection: &str, message: impl Into<String>) -> Self {
        RepositoryError::CollectionReadError {
            collection: collection.to_string(),
            message: message.into(),
        }
    }
}

/// Result 类型别名
pub type RepositoryResult<T> = Result<T, RepositoryError>;
