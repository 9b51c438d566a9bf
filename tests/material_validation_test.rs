// ==========================================
// ValidationApi 全量物料核对集成测试
// ==========================================
// 测试范围:
// 1. 逐批次逐物料检测: 缺口定位到 (物料, 批次) 对
// 2. 类别过滤: 过滤作用在 MFC 侧物料引用,不影响领料成员关系
// 3. 汇总口径: missingByType / uniqueBatchesAffected / 代码汇总排序
// 4. 截断: 缺料明细与代码汇总的响应级裁剪
// 5. 参数校验与降级
// ==========================================

mod helpers;

use helpers::api_test_helper::ApiTestEnv;
use helpers::test_data_builder::{batch_doc, process_with, requisition_doc, FormulaBuilder};
use mfc_batch_recon::config::ValidationConfig;
use mfc_batch_recon::domain::{FillingProduct, MaterialEntry};

// ==========================================
// 缺口检测
// ==========================================

#[tokio::test]
async fn test_validate_materials_单物料三批次两缺() {
    let mfc = FormulaBuilder::new("mfc-1")
        .master_card_no("MFC/001")
        .product_name("Amoxicillin 500mg")
        .product_code("P1")
        .material("M1", "API-X")
        .build();
    let batches = batch_doc(
        "bd-1",
        &[("P1", "B1", "x"), ("P1", "B2", "x"), ("P1", "B3", "x")],
    );
    // 只有 B1 领过 M1
    let requisition = requisition_doc("req-1", &[("B1", &[("M1", "RM")])]);

    let env = ApiTestEnv::new(vec![mfc], vec![batches], vec![requisition], vec![]);
    let resp = env.validation_api.validate_materials(None, None).await;

    assert!(resp.success);
    assert_eq!(resp.total_mfcs, 1);
    assert_eq!(resp.total_batches, 3);
    assert_eq!(resp.total_materials_in_mfc, 1);
    assert_eq!(resp.total_missing_materials, 2);
    assert_eq!(resp.unique_batches_affected, 2);
    assert_eq!(resp.missing_by_type.rm, 2);
    assert_eq!(resp.missing_by_type.ppm, 0);
    assert_eq!(resp.missing_by_type.pm, 0);

    let pairs: Vec<(&str, &str)> = resp
        .missing_materials
        .iter()
        .map(|m| (m.material_code.as_str(), m.batch_number.as_str()))
        .collect();
    assert!(pairs.contains(&("M1", "B2")));
    assert!(pairs.contains(&("M1", "B3")));
    assert!(!pairs.contains(&("M1", "B1")));
    assert_eq!(
        resp.missing_materials[0].message,
        format!(
            "Material M1 (API-X) was not found in RM requisition for batch {}",
            resp.missing_materials[0].batch_number
        )
    );

    // 代码汇总: M1 影响 2 个去重批次,出现 2 次
    assert_eq!(resp.material_code_summary.len(), 1);
    assert_eq!(resp.material_code_summary[0].material_code, "M1");
    assert_eq!(resp.material_code_summary[0].affected_batches, 2);
    assert_eq!(resp.material_code_summary[0].occurrences, 2);
}

#[tokio::test]
async fn test_validate_materials_五处来源全检() {
    // RM + PM + 灌装明细 PPM + 工序物料 + 工序灌装产品 PPM
    let mfc = FormulaBuilder::new("mfc-1")
        .master_card_no("MFC/001")
        .product_code("P1")
        .material("M1", "API-X")
        .packing_material("K1", "Carton")
        .filling_detail(None, vec![MaterialEntry::new("F1", "Stopper")])
        .process(process_with(
            vec![MaterialEntry::with_type("W1", "WFI", "PM")],
            vec![FillingProduct {
                product_code: None,
                materials: vec![MaterialEntry::new("V1", "Vial")],
            }],
        ))
        .build();
    let batches = batch_doc(
        "bd-1",
        &[("P1", "B1", "x"), ("P1", "B2", "x"), ("P1", "B3", "x")],
    );
    // B1 全领,B2/B3 什么都没领
    let requisition = requisition_doc(
        "req-1",
        &[(
            "B1",
            &[
                ("M1", "RM"),
                ("K1", "PM"),
                ("F1", "PPM"),
                ("W1", "PM"),
                ("V1", "PPM"),
            ],
        )],
    );

    let env = ApiTestEnv::new(vec![mfc], vec![batches], vec![requisition], vec![]);
    let resp = env.validation_api.validate_materials(None, None).await;

    assert!(resp.success);
    assert_eq!(resp.total_materials_in_mfc, 5);
    // 5 物料 x 2 缺批次
    assert_eq!(resp.total_missing_materials, 10);
    assert_eq!(resp.missing_by_type.rm, 2);
    assert_eq!(resp.missing_by_type.pm, 4); // K1 + 工序 W1(显式 PM)
    assert_eq!(resp.missing_by_type.ppm, 4); // 灌装明细 F1 + 灌装产品 V1
    assert_eq!(resp.unique_batches_affected, 2);
}

// ==========================================
// 类别过滤
// ==========================================

#[tokio::test]
async fn test_validate_materials_类别过滤只看mfc侧() {
    let mfc = FormulaBuilder::new("mfc-1")
        .master_card_no("MFC/001")
        .product_code("P1")
        .material("M1", "API-X")
        .packing_material("K1", "Carton")
        .build();
    let batches = batch_doc(
        "bd-1",
        &[("P1", "B1", "x"), ("P1", "B2", "x"), ("P1", "B3", "x")],
    );
    // B1 以 RM 类别领过 K1: 成员关系不分类别,K1 在 B1 不缺
    let requisition = requisition_doc("req-1", &[("B1", &[("K1", "RM")])]);

    let env = ApiTestEnv::new(vec![mfc], vec![batches], vec![requisition], vec![]);
    let resp = env
        .validation_api
        .validate_materials(None, Some("PM"))
        .await;

    assert!(resp.success);
    // 过滤后只统计 PM 引用
    assert_eq!(resp.total_materials_in_mfc, 1);
    assert_eq!(resp.total_missing_materials, 2);
    assert_eq!(resp.missing_by_type.rm, 0);
    assert_eq!(resp.missing_by_type.pm, 2);
    let batches_hit: Vec<&str> = resp
        .missing_materials
        .iter()
        .map(|m| m.batch_number.as_str())
        .collect();
    assert!(!batches_hit.contains(&"B1"));
}

#[tokio::test]
async fn test_validate_materials_非法类别过滤() {
    let env = ApiTestEnv::new(vec![], vec![], vec![], vec![]);
    let resp = env
        .validation_api
        .validate_materials(None, Some("XX"))
        .await;

    assert!(!resp.success);
    assert_eq!(
        resp.error.as_deref(),
        Some("Invalid materialType 'XX'. Expected one of: RM, PM, PPM.")
    );
    assert_eq!(resp.total_missing_materials, 0);
}

// ==========================================
// 截断
// ==========================================

#[tokio::test]
async fn test_validate_materials_明细与汇总截断() {
    let mfc = FormulaBuilder::new("mfc-1")
        .master_card_no("MFC/001")
        .product_code("P1")
        .material("M1", "a")
        .material("M2", "b")
        .material("M3", "c")
        .build();
    let batches = batch_doc(
        "bd-1",
        &[("P1", "B1", "x"), ("P1", "B2", "x"), ("P1", "B3", "x")],
    );

    let config = ValidationConfig {
        missing_material_cap: 2,
        code_summary_cap: 1,
        ..ValidationConfig::default()
    };
    let env = ApiTestEnv::with_config(vec![mfc], vec![batches], vec![], vec![], config);
    let resp = env.validation_api.validate_materials(None, None).await;

    assert!(resp.success);
    // 总数反映真实缺口,列表被裁剪
    assert_eq!(resp.total_missing_materials, 9);
    assert_eq!(resp.missing_materials.len(), 2);
    assert_eq!(resp.material_code_summary.len(), 1);
}

// ==========================================
// 阈值与降级
// ==========================================

#[tokio::test]
async fn test_validate_materials_不合格mfc跳过() {
    let mfc = FormulaBuilder::new("mfc-1")
        .master_card_no("MFC/001")
        .product_code("P1")
        .material("M1", "a")
        .build();
    let batches = batch_doc("bd-1", &[("P1", "B1", "x")]);

    let env = ApiTestEnv::new(vec![mfc], vec![batches], vec![], vec![]);
    let resp = env.validation_api.validate_materials(None, None).await;

    assert!(resp.success);
    assert_eq!(resp.total_mfcs, 0);
    assert_eq!(resp.total_missing_materials, 0);
}

#[tokio::test]
async fn test_validate_materials_集合失败降级() {
    let env = ApiTestEnv::failing("primary is down");
    let resp = env.validation_api.validate_materials(None, None).await;

    assert!(!resp.success);
    assert_eq!(resp.total_mfcs, 0);
    assert!(resp.missing_materials.is_empty());
    assert!(resp.error.is_some());
}
