use pggen::codegen::domain::{
    model::{
        entities::table::Table,
        enums::{codegen_domain_error::CodegenDomainError, target_type::TargetType},
        queries::table_context_query::TableContextQuery,
    },
    services::table_context_query_service::TableContextQueryService,
};

use crate::support::{
    create_harness, fixtures::PACKAGE_ROOT, ledger_table, member_table, session_table, site_table,
};

fn query(table: Table) -> TableContextQuery {
    TableContextQuery::new(table, PACKAGE_ROOT.to_string())
}

#[tokio::test]
async fn member_context_has_single_key_and_insert_without_generated_id() {
    let harness = create_harness(vec![member_table()]);

    let context = harness
        .query_service
        .handle_table_context(query(Table::new("public", "member")))
        .await
        .expect("member context");

    assert_eq!(context.schema, "public");
    assert_eq!(context.name, "member");
    assert_eq!(context.package_root, PACKAGE_ROOT);
    assert_eq!(context.primary_key_names, vec!["id"]);
    assert_eq!(
        context.non_primary_key_names,
        vec!["firstname", "lastname", "email", "password"]
    );
    assert_eq!(
        context.clauses.select,
        "select id, firstname, lastname, email, password"
    );
    assert_eq!(
        context.clauses.insert,
        "insert into member (firstname,lastname,email,password) values ($1,$2,$3,$4)"
    );
    assert_eq!(context.clauses.returning, "returning id");
    assert_eq!(context.clauses.primary_key_args, "pk.Id");
    assert_eq!(harness.catalog.query_calls(), (0, 1, 1));
    assert_eq!(harness.catalog.ping_calls(), 2);
}

#[tokio::test]
async fn site_context_numbers_composite_key_in_column_order() {
    let harness = create_harness(vec![site_table()]);

    let context = harness
        .query_service
        .handle_table_context(query(Table::new("public", "site")))
        .await
        .expect("site context");

    assert_eq!(context.primary_key_names, vec!["domain", "memberid"]);
    assert_eq!(context.non_primary_key_names, vec!["role"]);
    assert_eq!(
        context.clauses.primary_key_where,
        "where domain = $1 and memberid = $2"
    );
    assert_eq!(
        context.clauses.primary_key_pointer_args,
        "&pk.Domain, &pk.Memberid"
    );
    assert_eq!(
        context.clauses.update,
        "update site set role = $1 where domain = $2 and memberid = $3"
    );
    assert_eq!(context.clauses.update_args, "s.Role, s.Domain, s.Memberid");
    assert_eq!(
        context.clauses.delete,
        "delete from site where domain = $1 and memberid = $2"
    );
    assert!(context.fields[2].nullable);
}

#[tokio::test]
async fn session_context_collects_time_imports_and_fixtures() {
    let harness = create_harness(vec![session_table()]);

    let context = harness
        .query_service
        .handle_table_context(query(Table::new("public", "session")))
        .await
        .expect("session context");

    assert_eq!(context.imports_needed.paths(), vec!["fmt", "reflect", "time"]);
    assert_eq!(context.test_imports_needed.paths(), vec!["time"]);

    let types = context
        .fields
        .iter()
        .map(|f| f.target_type)
        .collect::<Vec<_>>();
    assert_eq!(
        types,
        vec![
            TargetType::Text,
            TargetType::Int32,
            TargetType::Timestamp,
            TargetType::Timestamp,
            TargetType::Json,
        ]
    );

    let fixture_names = context
        .test_fixture_fields
        .iter()
        .map(|f| f.field_name.as_str())
        .collect::<Vec<_>>();
    assert_eq!(fixture_names, vec!["Token", "Memberid", "Expires", "Attributes"]);
    assert!(context.test_fixture_fields[0].value.starts_with("\"urn:uuid:"));
    assert_eq!(context.test_fixture_fields[1].value, "1");
    assert_eq!(
        context.test_fixture_fields[3].value,
        "`{\"ID\":123,\"Name\":\"Hello, World\"}`"
    );
}

#[tokio::test]
async fn assembling_twice_from_same_catalog_is_byte_identical() {
    let harness = create_harness(vec![member_table(), site_table(), session_table()]);

    for table in [
        Table::new("public", "member"),
        Table::new("public", "site"),
        Table::new("public", "session"),
    ] {
        let first = harness
            .query_service
            .handle_table_context(query(table.clone()))
            .await
            .expect("first context");
        let second = harness
            .query_service
            .handle_table_context(query(table))
            .await
            .expect("second context");

        assert_eq!(first, second);
        assert_eq!(
            serde_json::to_string(&first).expect("serializable"),
            serde_json::to_string(&second).expect("serializable")
        );
    }
}

#[tokio::test]
async fn unknown_column_type_fails_the_table_with_its_identity() {
    let harness = create_harness(vec![ledger_table()]);

    let result = harness
        .query_service
        .handle_table_context(query(Table::new("billing", "ledger")))
        .await;

    match result {
        Err(error @ CodegenDomainError::UnknownColumnType { .. }) => {
            assert!(error.is_table_scoped());
            assert_eq!(
                error.to_string(),
                "column billing.ledger.amount has unknown catalog type: money"
            );
        }
        other => panic!("unexpected result: {other:?}"),
    }
}

#[tokio::test]
async fn failing_probe_surfaces_connectivity_error() {
    let harness = create_harness(vec![member_table()]);
    harness.catalog.set_ping_should_fail(true);

    let result = harness
        .query_service
        .handle_table_context(query(Table::new("public", "member")))
        .await;

    assert!(matches!(result, Err(CodegenDomainError::Connectivity(_))));
    assert_eq!(harness.catalog.query_calls(), (0, 0, 0));
}
