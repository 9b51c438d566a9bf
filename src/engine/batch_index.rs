// ==========================================
// 制药生产记录对账系统 - 批次索引
// ==========================================
// 职责: 对批次集合做一次线性扫描,建立
//   产品代码 -> 批次数 / 产品代码 -> 批次明细 两张映射
// 红线: 每个请求只建一次,之后所有组件复用;逐 MFC 重建属于违规
// ==========================================

use std::collections::HashMap;

use crate::domain::BatchRecord;

/// 批次摘要（索引值,不回指源文档）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchSummary {
    pub batch_number: String,
    pub item_name: Option<String>,
}

// ==========================================
// BatchIndex - 批次索引
// ==========================================
#[derive(Debug, Clone, Default)]
pub struct BatchIndex {
    counts: HashMap<String, usize>,
    batches_by_item: HashMap<String, Vec<BatchSummary>>,
}

impl BatchIndex {
    /// 建立索引（单次线性扫描）
    ///
    /// 嵌套数组缺失/条目缺字段的文档贡献零条,不报错。
    pub fn build(records: &[BatchRecord]) -> Self {
        let mut counts: HashMap<String, usize> = HashMap::new();
        let mut batches_by_item: HashMap<String, Vec<BatchSummary>> = HashMap::new();

        for record in records {
            for entry in &record.batches {
                let (Some(item_code), Some(batch_number)) =
                    (&entry.item_code, &entry.batch_number)
                else {
                    continue;
                };
                if item_code.is_empty() || batch_number.is_empty() {
                    continue;
                }

                *counts.entry(item_code.clone()).or_insert(0) += 1;
                batches_by_item
                    .entry(item_code.clone())
                    .or_default()
                    .push(BatchSummary {
                        batch_number: batch_number.clone(),
                        item_name: entry.item_name.clone(),
                    });
            }
        }

        Self {
            counts,
            batches_by_item,
        }
    }

    /// 指定产品代码的批次数（未收录即 0）
    pub fn count_for(&self, item_code: &str) -> usize {
        self.counts.get(item_code).copied().unwrap_or(0)
    }

    /// 指定产品代码的批次明细（未收录即空）
    pub fn batches_for(&self, item_code: &str) -> &[BatchSummary] {
        self.batches_by_item
            .get(item_code)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// 全系统批次总数
    pub fn total_batches(&self) -> usize {
        self.counts.values().sum()
    }

    /// 收录的全部产品代码
    pub fn item_codes(&self) -> impl Iterator<Item = &String> {
        self.counts.keys()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{BatchEntry, BatchRecord};

    fn record(id: &str, entries: Vec<BatchEntry>) -> BatchRecord {
        BatchRecord {
            id: id.to_string(),
            batches: entries,
        }
    }

    #[test]
    fn test_build_跨文档归组() {
        let records = vec![
            record(
                "D1",
                vec![
                    BatchEntry::new("P1", "B1", "产品一"),
                    BatchEntry::new("P2", "B1", "产品二"),
                ],
            ),
            record("D2", vec![BatchEntry::new("P1", "B2", "产品一")]),
        ];
        let index = BatchIndex::build(&records);

        assert_eq!(index.count_for("P1"), 2);
        assert_eq!(index.count_for("P2"), 1);
        assert_eq!(index.count_for("P9"), 0);
        assert_eq!(index.total_batches(), 3);
        // 同一 batchNumber 挂不同 itemCode 是两个批次
        assert_eq!(index.batches_for("P2")[0].batch_number, "B1");
    }

    #[test]
    fn test_counts与明细长度一致() {
        let records = vec![record(
            "D1",
            vec![
                BatchEntry::new("P1", "B1", "n"),
                BatchEntry::new("P1", "B2", "n"),
                BatchEntry::new("P1", "B3", "n"),
            ],
        )];
        let index = BatchIndex::build(&records);
        for code in ["P1"] {
            assert_eq!(index.batches_for(code).len(), index.count_for(code));
        }
    }

    #[test]
    fn test_build_畸形条目零贡献() {
        let records = vec![record(
            "D1",
            vec![
                BatchEntry {
                    item_code: None,
                    batch_number: Some("B1".to_string()),
                    item_name: None,
                },
                BatchEntry {
                    item_code: Some("P1".to_string()),
                    batch_number: None,
                    item_name: None,
                },
                BatchEntry {
                    item_code: Some(String::new()),
                    batch_number: Some("B2".to_string()),
                    item_name: None,
                },
            ],
        )];
        let index = BatchIndex::build(&records);
        assert_eq!(index.total_batches(), 0);
    }
}
