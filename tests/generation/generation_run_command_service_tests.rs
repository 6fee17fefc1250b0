use pggen::codegen::domain::{
    model::enums::codegen_domain_error::CodegenDomainError,
    services::generation_run_command_service::GenerationRunCommandService,
};

use crate::support::{
    create_harness, ledger_table, member_table, run_command, session_table, site_table,
};

#[tokio::test]
async fn handle_run_renders_every_template_per_table_in_listing_order() {
    let harness = create_harness(vec![member_table(), site_table()]);

    let report = harness
        .run_service
        .handle_run(run_command(false))
        .await
        .expect("run should succeed");

    assert_eq!(
        harness.renderer.rendered(),
        vec![
            ("table".to_string(), "member".to_string()),
            ("tests".to_string(), "member".to_string()),
            ("table".to_string(), "site".to_string()),
            ("tests".to_string(), "site".to_string()),
        ]
    );
    assert_eq!(report.artifacts.len(), 4);
    assert_eq!(report.artifacts[0].contents, "table:member:returning id");
    assert_eq!(
        report.artifacts[2].contents,
        "table:site:returning domain, memberid"
    );
    assert_eq!(report.generated_table_count(), 2);
    assert!(report.skipped_tables.is_empty());
    assert_eq!(harness.catalog.query_calls(), (1, 2, 2));
}

#[tokio::test]
async fn handle_run_skips_table_with_unknown_type_and_continues() {
    let harness = create_harness(vec![ledger_table(), member_table()]);

    let report = harness
        .run_service
        .handle_run(run_command(false))
        .await
        .expect("run should succeed");

    assert_eq!(report.skipped_tables.len(), 1);
    assert_eq!(report.skipped_tables[0].table.qualified_name(), "billing.ledger");
    assert!(report.skipped_tables[0].reason.contains("money"));
    assert_eq!(report.generated_table_count(), 1);
    assert!(
        harness
            .renderer
            .rendered()
            .iter()
            .all(|(_, table)| table == "member")
    );
}

#[tokio::test]
async fn handle_run_in_strict_mode_aborts_on_unknown_type() {
    let harness = create_harness(vec![member_table(), ledger_table(), session_table()]);

    let result = harness.run_service.handle_run(run_command(true)).await;

    assert!(matches!(
        result,
        Err(CodegenDomainError::UnknownColumnType { .. })
    ));
    assert_eq!(harness.renderer.rendered().len(), 2);
    assert_eq!(harness.catalog.query_calls(), (1, 2, 2));
}

#[tokio::test]
async fn handle_run_aborts_when_catalog_is_unreachable() {
    let harness = create_harness(vec![member_table()]);
    harness.catalog.set_ping_should_fail(true);

    let result = harness.run_service.handle_run(run_command(false)).await;

    assert!(matches!(result, Err(CodegenDomainError::Connectivity(_))));
    assert!(harness.renderer.rendered().is_empty());
}

#[tokio::test]
async fn handle_run_passes_render_errors_through() {
    let harness = create_harness(vec![member_table(), site_table()]);
    harness.renderer.set_fail_for_table("site");

    let result = harness.run_service.handle_run(run_command(false)).await;

    assert!(matches!(result, Err(CodegenDomainError::RenderError(_))));
    assert_eq!(harness.renderer.rendered().len(), 2);
}
