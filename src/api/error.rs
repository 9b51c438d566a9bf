// ==========================================
// 制药生产记录对账系统 - API 层错误类型
// ==========================================
// 职责: 定义 API 层错误,转换仓储错误为用户可读消息
// 红线: 错误不向调用方抛出 —— API 层把一切失败折叠成
// success:false 的降级响应,这里的类型只在层内流转
// ==========================================

use thiserror::Error;

use crate::repository::RepositoryError;

/// API 层错误类型
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("无效输入: {0}")]
    InvalidInput(String),

    #[error("集合访问失败: {0}")]
    CollectionAccess(String),

    #[error("内部错误: {0}")]
    InternalError(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

// ==========================================
// 从 RepositoryError 转换
// ==========================================
impl From<RepositoryError> for ApiError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::CollectionReadError { .. } => {
                ApiError::CollectionAccess(err.to_string())
            }
            RepositoryError::ConnectionError(msg) => ApiError::CollectionAccess(msg),
            RepositoryError::InternalError(msg) => ApiError::InternalError(msg),
            RepositoryError::Other(err) => ApiError::Other(err),
        }
    }
}

/// Result 类型别名
pub type ApiResult<T> = Result<T, ApiError>;
