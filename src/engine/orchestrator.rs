// ==========================================
// 制药生产记录对账系统 - 引擎编排器
// ==========================================
// 用途: 协调一次请求的完整核对流程
// 流程: 并发拉取源集合 -> 建索引(每请求一次) -> 逐 MFC 解析/采集
//       -> 合格过滤 -> 检测 -> 去重聚合 -> 汇总
// 红线: 请求级、只读、无共享可变状态;索引建好后全程复用
// ==========================================

use std::collections::HashSet;

use futures::try_join;
use tracing::{debug, info};

use crate::config::ValidationConfig;
use crate::domain::types::{BatchTier, MaterialType, ValidationSection};
use crate::domain::FormulaRecord;
use crate::engine::batch_index::BatchIndex;
use crate::engine::dedup_aggregator::{BatchDedupAggregator, TierBatchTotals};
use crate::engine::eligibility::EligibilityEngine;
use crate::engine::material_collector::MaterialCollector;
use crate::engine::missing_material::{
    MissingMaterialDetector, MissingMaterialEntry, ValidationIssue,
};
use crate::engine::product_code::ProductCodeResolver;
use crate::engine::section_index::{RequisitionCodeIndex, SectionAvailabilityIndex};
use crate::engine::summary::{
    BatchReconciliationSummary, MaterialCodeSummary, MissingByType, ReconciliationSummarizer,
    UnmatchedBatch,
};
use crate::repository::{RepositoryResult, SourceRepositories};

// ==========================================
// 结果类型（引擎级,未截断;DTO 转换在 API 层）
// ==========================================

/// 区段核对结果
#[derive(Debug, Clone)]
pub struct SectionValidationResult {
    pub section: ValidationSection,
    pub total_mfcs: usize,
    pub total_batches: usize,
    pub batches_with_data: usize,
    pub batches_missing_data: usize,
    pub issues: Vec<ValidationIssue>,
}

/// 全量物料核对结果
#[derive(Debug, Clone)]
pub struct MaterialValidationResult {
    pub total_mfcs: usize,
    pub total_batches: usize,
    pub total_materials_in_mfc: usize,
    pub total_missing_materials: usize,
    pub unique_batches_affected: usize,
    pub missing_by_type: MissingByType,
    pub missing_materials: Vec<MissingMaterialEntry>,
    pub material_code_summary: Vec<MaterialCodeSummary>,
}

/// 驾驶舱分层条目
#[derive(Debug, Clone)]
pub struct MfcTierEntry {
    pub mfc_no: String,
    pub product_name: Option<String>,
    pub product_codes: Vec<String>,
    pub total_batches: usize,
    pub batch_numbers: Vec<String>,
}

/// 驾驶舱总览
#[derive(Debug, Clone)]
pub struct DashboardOverview {
    pub main: Vec<MfcTierEntry>,
    pub low_batch: Vec<MfcTierEntry>,
    pub no_batch: Vec<MfcTierEntry>,
    pub placebo: Vec<MfcTierEntry>,
    pub tier_batch_totals: TierBatchTotals,
    pub batch_reconciliation: BatchReconciliationSummary,
    pub unmatched_batches: Vec<UnmatchedBatch>,
}

// ==========================================
// ReconciliationOrchestrator - 引擎编排器
// ==========================================

pub struct ReconciliationOrchestrator {
    repos: SourceRepositories,
    config: ValidationConfig,
}

impl ReconciliationOrchestrator {
    pub fn new(repos: SourceRepositories, config: ValidationConfig) -> Self {
        Self { repos, config }
    }

    pub fn config(&self) -> &ValidationConfig {
        &self.config
    }

    /// 区段核对: 逐合格 MFC 逐批次查区段数据存在性
    ///
    /// `min_batches` 缺省时取配置值。
    pub async fn validate_section(
        &self,
        section: ValidationSection,
        min_batches: Option<u32>,
    ) -> RepositoryResult<SectionValidationResult> {
        let min_batches = min_batches.unwrap_or(self.config.min_batches);

        // 四类读取互不依赖,并发拉取
        let (formulas, batch_docs, coa_records, requisitions) = try_join!(
            self.repos.formula_repo.load_all(),
            self.repos.batch_repo.load_all(),
            self.repos.coa_repo.load_all(),
            self.repos.requisition_repo.load_all(),
        )?;
        info!(
            section = %section,
            formulas = formulas.len(),
            batch_docs = batch_docs.len(),
            "区段核对开始"
        );

        let index = BatchIndex::build(&batch_docs);
        let availability = SectionAvailabilityIndex::build(section, &coa_records, &requisitions);

        let mut result = SectionValidationResult {
            section,
            total_mfcs: 0,
            total_batches: 0,
            batches_with_data: 0,
            batches_missing_data: 0,
            issues: Vec::new(),
        };

        for mfc in &formulas {
            let codes = ProductCodeResolver::resolve(mfc);
            let profile = EligibilityEngine::aggregate(&codes, &index);
            if !EligibilityEngine::is_qualifying(profile.total_batches, min_batches) {
                continue;
            }

            result.total_mfcs += 1;
            result.total_batches += profile.batch_numbers.len();

            let mfc_no = Self::mfc_no(mfc);
            let issues = MissingMaterialDetector::section_issues(
                &mfc_no,
                mfc.product_name.as_deref(),
                &profile.batch_numbers,
                section,
                &availability,
            );
            result.batches_missing_data += issues.len();
            result.batches_with_data += profile.batch_numbers.len() - issues.len();
            result.issues.extend(issues);
        }

        debug!(
            total_mfcs = result.total_mfcs,
            total_batches = result.total_batches,
            missing = result.batches_missing_data,
            "区段核对完成"
        );
        Ok(result)
    }

    /// 全量物料核对: 逐合格 MFC 逐批次逐物料引用查领料记录
    pub async fn validate_materials(
        &self,
        min_batches: Option<u32>,
        type_filter: Option<MaterialType>,
    ) -> RepositoryResult<MaterialValidationResult> {
        let min_batches = min_batches.unwrap_or(self.config.min_batches);

        let (formulas, batch_docs, requisitions) = try_join!(
            self.repos.formula_repo.load_all(),
            self.repos.batch_repo.load_all(),
            self.repos.requisition_repo.load_all(),
        )?;
        info!(
            formulas = formulas.len(),
            batch_docs = batch_docs.len(),
            requisitions = requisitions.len(),
            "物料核对开始"
        );

        let index = BatchIndex::build(&batch_docs);
        let requisition_codes = RequisitionCodeIndex::build(&requisitions);

        let mut result = MaterialValidationResult {
            total_mfcs: 0,
            total_batches: 0,
            total_materials_in_mfc: 0,
            total_missing_materials: 0,
            unique_batches_affected: 0,
            missing_by_type: MissingByType::default(),
            missing_materials: Vec::new(),
            material_code_summary: Vec::new(),
        };

        for mfc in &formulas {
            let codes = ProductCodeResolver::resolve(mfc);
            let profile = EligibilityEngine::aggregate(&codes, &index);
            if !EligibilityEngine::is_qualifying(profile.total_batches, min_batches) {
                continue;
            }

            let materials = MaterialCollector::collect(mfc);
            let scoped: Vec<_> = match type_filter {
                Some(filter) => materials
                    .iter()
                    .filter(|m| m.material_type == filter)
                    .cloned()
                    .collect(),
                None => materials,
            };

            result.total_mfcs += 1;
            result.total_batches += profile.batch_numbers.len();
            result.total_materials_in_mfc += scoped.len();

            let mfc_no = Self::mfc_no(mfc);
            // scoped 已按类别过滤,检测器侧不再重复过滤
            let entries = MissingMaterialDetector::missing_materials(
                &mfc_no,
                mfc.product_name.as_deref(),
                &profile.batch_numbers,
                &scoped,
                &requisition_codes,
                None,
            );
            result.missing_materials.extend(entries);
        }

        result.total_missing_materials = result.missing_materials.len();
        result.unique_batches_affected =
            ReconciliationSummarizer::unique_batches(&result.missing_materials);
        result.missing_by_type =
            ReconciliationSummarizer::count_by_type(&result.missing_materials);
        result.material_code_summary =
            ReconciliationSummarizer::code_summary(&result.missing_materials);

        debug!(
            total_mfcs = result.total_mfcs,
            missing = result.total_missing_materials,
            "物料核对完成"
        );
        Ok(result)
    }

    /// 驾驶舱总览: 四层分区 + 去重批次总数 + 全局批次对账
    pub async fn dashboard_overview(&self) -> RepositoryResult<DashboardOverview> {
        let (formulas, batch_docs) = try_join!(
            self.repos.formula_repo.load_all(),
            self.repos.batch_repo.load_all(),
        )?;
        info!(
            formulas = formulas.len(),
            batch_docs = batch_docs.len(),
            "驾驶舱总览开始"
        );

        let index = BatchIndex::build(&batch_docs);

        let mut main: Vec<MfcTierEntry> = Vec::new();
        let mut low_batch: Vec<MfcTierEntry> = Vec::new();
        let mut no_batch: Vec<MfcTierEntry> = Vec::new();
        let mut placebo: Vec<MfcTierEntry> = Vec::new();
        // 对账口径: 任何一张 MFC 认领的代码都算"已对上"
        let mut claimed_codes: HashSet<String> = HashSet::new();

        for mfc in &formulas {
            let codes = ProductCodeResolver::resolve(mfc);
            let profile = EligibilityEngine::aggregate(&codes, &index);
            claimed_codes.extend(codes.iter().cloned());

            let entry = MfcTierEntry {
                mfc_no: Self::mfc_no(mfc),
                product_name: mfc.product_name.clone(),
                product_codes: codes,
                total_batches: profile.total_batches,
                batch_numbers: profile.batch_numbers,
            };
            let tier = EligibilityEngine::classify_tier(
                mfc.product_name.as_deref(),
                entry.total_batches,
                &self.config.placebo_keywords,
            );
            match tier {
                BatchTier::Main => main.push(entry),
                BatchTier::LowBatch => low_batch.push(entry),
                BatchTier::NoBatch => no_batch.push(entry),
                BatchTier::Placebo => placebo.push(entry),
            }
        }

        let code_sets =
            |entries: &[MfcTierEntry]| -> Vec<Vec<String>> {
                entries.iter().map(|e| e.product_codes.clone()).collect()
            };
        let tier_batch_totals = BatchDedupAggregator::tally_all(
            &code_sets(&main),
            &code_sets(&low_batch),
            &code_sets(&no_batch),
            &code_sets(&placebo),
            &index,
        );

        let (batch_reconciliation, unmatched_batches) =
            ReconciliationSummarizer::reconcile_batches(&index, &claimed_codes);

        debug!(
            main = main.len(),
            low_batch = low_batch.len(),
            no_batch = no_batch.len(),
            placebo = placebo.len(),
            unmatched = unmatched_batches.len(),
            "驾驶舱总览完成"
        );
        Ok(DashboardOverview {
            main,
            low_batch,
            no_batch,
            placebo,
            tier_batch_totals,
            batch_reconciliation,
            unmatched_batches,
        })
    }

    /// MFC 编号口径: 取 masterCardNo 去空白,缺失回退记录 id
    fn mfc_no(mfc: &FormulaRecord) -> String {
        mfc.master_card_no
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .unwrap_or(&mfc.id)
            .to_string()
    }
}
