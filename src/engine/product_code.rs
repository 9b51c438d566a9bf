// ==========================================
// 制药生产记录对账系统 - 产品代码解析器
// ==========================================
// 职责: 从一张 MFC 提取其声明的全部产品代码
// 红线: 无状态、无副作用、无 I/O 操作
// ==========================================
// 顺序 = 首次发现顺序（前端列表顺序依赖它）,集合内去重
// 哨兵值 "N/A": 主代码与灌装明细代码剔除;工序灌装产品代码不剔除,
// 该不对称是历史行为,下游报表已对齐,未经产品确认不得"修复"
// ==========================================

use crate::domain::FormulaRecord;

/// 哨兵值: 源文档用它占位"无产品代码"
const SENTINEL_NA: &str = "N/A";

// ==========================================
// ProductCodeResolver - 纯函数工具类
// ==========================================
pub struct ProductCodeResolver;

impl ProductCodeResolver {
    /// 解析一张 MFC 的产品代码集合
    ///
    /// # 规则
    /// 1. 主 productCode（非空且非 "N/A"）
    /// 2. 各灌装明细 productCode（未出现过且非 "N/A"）
    /// 3. 各工序灌装产品 productCode（未出现过;不做 "N/A" 剔除）
    ///
    /// 字段缺失一律视为零贡献。
    pub fn resolve(mfc: &FormulaRecord) -> Vec<String> {
        let mut codes: Vec<String> = Vec::new();

        // 1. 主代码
        if let Some(code) = &mfc.product_code {
            if !code.is_empty() && code != SENTINEL_NA {
                codes.push(code.clone());
            }
        }

        // 2. 灌装明细代码
        for detail in &mfc.filling_details {
            if let Some(code) = &detail.product_code {
                if !code.is_empty() && code != SENTINEL_NA && !codes.contains(code) {
                    codes.push(code.clone());
                }
            }
        }

        // 3. 工序灌装产品代码（此处不剔除 "N/A"）
        for process in &mfc.processes {
            for product in &process.filling_products {
                if let Some(code) = &product.product_code {
                    if !code.is_empty() && !codes.contains(code) {
                        codes.push(code.clone());
                    }
                }
            }
        }

        codes
    }
}
