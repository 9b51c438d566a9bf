// ==========================================
// 制药生产记录对账系统 - 核心库
// ==========================================
// 系统定位: 批次/配方/领料三方核对引擎 (只读、请求级)
// 红线: 核心不落库、不解析源文件,只消费已解析的集合记录
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 数据仓储层 - 集合只读访问
pub mod repository;

// 引擎层 - 核对规则
pub mod engine;

// 配置层 - 核对参数
pub mod config;

// 日志系统
pub mod logging;

// API 层 - 业务接口
pub mod api;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::types::{BatchTier, CoaStage, MaterialType, ValidationSection};

// 领域实体
pub use domain::{
    BatchEntry, BatchRecord, BatchRequisitionGroup, CoaRecord, FillingDetail, FillingProduct,
    FormulaRecord, MaterialEntry, ProcessDetail, RequisitionMaterial, RequisitionRecord,
};

// 引擎
pub use engine::{
    BatchDedupAggregator, BatchIndex, EligibilityEngine, MaterialCollector, MaterialRef,
    MissingMaterialDetector, ProductCodeResolver, ReconciliationOrchestrator,
    ReconciliationSummarizer, RequisitionCodeIndex, SectionAvailabilityIndex,
};

// 仓储
pub use repository::{InMemorySourceStore, SourceRepositories};

// API
pub use api::{DashboardApi, ValidationApi};

// 配置
pub use config::ValidationConfig;

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "制药生产记录对账系统";
