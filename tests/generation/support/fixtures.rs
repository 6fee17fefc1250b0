use pggen::codegen::domain::model::{
    commands::run_generation_command::RunGenerationCommand,
    entities::{column::Column, table::Table, table_constraint::TableConstraint},
};

pub const PACKAGE_ROOT: &str = "pggen";

pub fn column(name: &str, catalog_type: &str, default: &str, nullable: bool) -> Column {
    Column {
        name: name.to_string(),
        default: default.to_string(),
        nullable,
        catalog_type: catalog_type.to_string(),
    }
}

pub fn constraint(column_name: &str, constraint_type: &str) -> TableConstraint {
    TableConstraint {
        column_name: column_name.to_string(),
        constraint_type: constraint_type.to_string(),
        is_deferrable: false,
        is_initially_deferred: false,
    }
}

pub fn member_table() -> (Table, Vec<Column>, Vec<TableConstraint>) {
    (
        Table::new("public", "member"),
        vec![
            column("id", "integer", "nextval('member_id_seq'::regclass)", false),
            column("firstname", "text", "", false),
            column("lastname", "text", "", false),
            column("email", "text", "", false),
            column("password", "text", "", false),
        ],
        vec![constraint("id", "PRIMARY KEY"), constraint("email", "UNIQUE")],
    )
}

pub fn site_table() -> (Table, Vec<Column>, Vec<TableConstraint>) {
    (
        Table::new("public", "site"),
        vec![
            column("domain", "text", "", false),
            column("memberid", "integer", "", false),
            column("role", "text", "", true),
        ],
        vec![
            constraint("memberid", "FOREIGN KEY"),
            constraint("memberid", "PRIMARY KEY"),
            constraint("domain", "PRIMARY KEY"),
        ],
    )
}

pub fn session_table() -> (Table, Vec<Column>, Vec<TableConstraint>) {
    (
        Table::new("public", "session"),
        vec![
            column("token", "character varying", "", false),
            column("memberid", "integer", "", false),
            column("created", "timestamp with time zone", "now()", false),
            column("expires", "timestamp without time zone", "", true),
            column("attributes", "jsonb", "", true),
        ],
        vec![constraint("token", "PRIMARY KEY")],
    )
}

pub fn ledger_table() -> (Table, Vec<Column>, Vec<TableConstraint>) {
    (
        Table::new("billing", "ledger"),
        vec![
            column("id", "bigint", "", false),
            column("amount", "money", "", false),
        ],
        vec![constraint("id", "PRIMARY KEY")],
    )
}

pub fn run_command(strict: bool) -> RunGenerationCommand {
    RunGenerationCommand::new(
        vec!["table".to_string(), "tests".to_string()],
        PACKAGE_ROOT.to_string(),
        strict,
    )
    .expect("valid command")
}
