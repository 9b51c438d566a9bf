// ==========================================
// 制药生产记录对账系统 - MFC 物料采集器
// ==========================================
// 职责: 提取一张 MFC 内嵌的全部物料引用 (代码, 名称, 类别)
// 红线: 跨来源不去重 —— 同一代码出现在配料清单又出现在工序物料里,
// 产出两条引用,逐条独立核对;不同语境可能需要各自的领料行
// ==========================================

use crate::domain::types::MaterialType;
use crate::domain::{FormulaRecord, MaterialEntry};

/// 物料引用（从 MFC 的五处位置派生的元组视图）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaterialRef {
    pub material_code: String,
    pub material_name: Option<String>,
    pub material_type: MaterialType,
}

// ==========================================
// MaterialCollector - 纯函数工具类
// ==========================================
pub struct MaterialCollector;

impl MaterialCollector {
    /// 采集一张 MFC 的全部物料引用
    ///
    /// # 来源与类别（按此顺序拼接）
    /// 1. materials[]                          -> RM
    /// 2. packingMaterials[]                   -> PM
    /// 3. fillingDetails[].packingMaterials[]  -> PPM
    /// 4. processes[].materials[]              -> 按 materialType 判定,兜底 RM
    /// 5. processes[].fillingProducts[].materials[] -> 固定 PPM
    ///
    /// 没有 materialCode 的条目静默跳过。
    pub fn collect(mfc: &FormulaRecord) -> Vec<MaterialRef> {
        let mut refs: Vec<MaterialRef> = Vec::new();

        // 1. 配料原料
        Self::push_all(&mut refs, &mfc.materials, |_| MaterialType::Rm);

        // 2. 包材
        Self::push_all(&mut refs, &mfc.packing_materials, |_| MaterialType::Pm);

        // 3. 灌装明细包材
        for detail in &mfc.filling_details {
            Self::push_all(&mut refs, &detail.packing_materials, |_| MaterialType::Ppm);
        }

        // 4. 工序物料（显式三分支,兜底 RM）
        for process in &mfc.processes {
            Self::push_all(&mut refs, &process.materials, |entry| {
                MaterialType::resolve_process_type(entry.material_type.as_deref())
            });

            // 5. 工序灌装产品物料（固定 PPM,忽略内嵌 materialType）
            for product in &process.filling_products {
                Self::push_all(&mut refs, &product.materials, |_| MaterialType::Ppm);
            }
        }

        refs
    }

    fn push_all(
        refs: &mut Vec<MaterialRef>,
        entries: &[MaterialEntry],
        type_of: impl Fn(&MaterialEntry) -> MaterialType,
    ) {
        for entry in entries {
            let Some(code) = &entry.material_code else {
                continue;
            };
            if code.is_empty() {
                continue;
            }
            refs.push(MaterialRef {
                material_code: code.clone(),
                material_name: entry.material_name.clone(),
                material_type: type_of(entry),
            });
        }
    }
}
