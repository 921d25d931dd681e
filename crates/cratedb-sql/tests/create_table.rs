use cratedb_core::{
    schema::{Column, TableDefinition},
    stmt::Type,
};
use cratedb_sql::{Serializer, Statement};

use pretty_assertions::assert_eq;

fn serialize(table: &TableDefinition) -> String {
    Serializer::new()
        .serialize(&Statement::create_table(table))
        .unwrap()
}

fn make_table(name: &str, columns: Vec<Column>) -> TableDefinition {
    TableDefinition::new(name, columns)
}

#[test]
fn create_statement_with_primary_key_column() {
    let table = make_table(
        "entity",
        vec![Column::new("longField", Type::Long).primary_key()],
    );

    assert_eq!(
        serialize(&table),
        "create table entity (\"longField\" long primary key)"
    );
}

#[test]
fn create_statement_with_primitive_columns() {
    let table = make_table(
        "entity",
        vec![
            Column::new("stringField", Type::String).primary_key(),
            Column::new("integerField", Type::Integer),
        ],
    );

    assert_eq!(
        serialize(&table),
        "create table entity (\"stringField\" string primary key, \"integerField\" integer)"
    );
}

#[test]
fn create_statement_with_primitive_collection() {
    let table = make_table(
        "entity",
        vec![Column::new("integers", Type::array(Type::Integer))],
    );

    assert_eq!(
        serialize(&table),
        "create table entity (\"integers\" array(integer))"
    );
}

#[test]
fn create_statement_with_map() {
    let table = make_table("entity", vec![Column::new("map", Type::Object)]);

    assert_eq!(serialize(&table), "create table entity (\"map\" object)");
}

#[test]
fn create_statement_with_schemaless_entity_collection() {
    let table = make_table(
        "entity",
        vec![Column::new("maps", Type::array(Type::Object))],
    );

    assert_eq!(
        serialize(&table),
        "create table entity (\"maps\" array(object))"
    );
}

#[test]
fn create_statement_with_nested_entity() {
    let table = make_table(
        "entity",
        vec![
            Column::new("stringField", Type::String),
            Column::new("nestedEntity", Type::Object).with_children(vec![
                Column::new("stringField", Type::String),
                Column::new("integerField", Type::Integer),
            ]),
        ],
    );

    assert_eq!(
        serialize(&table),
        "create table entity (\"stringField\" string, \"nestedEntity\" object as (\
         \"stringField\" string, \"integerField\" integer))"
    );
}

#[test]
fn create_statement_with_entity_array() {
    let table = make_table(
        "entity",
        vec![
            Column::new("stringField", Type::String),
            Column::new("nestedEntities", Type::array(Type::Object)).with_children(vec![
                Column::new("stringField", Type::String),
                Column::new("integerField", Type::Integer),
            ]),
        ],
    );

    assert_eq!(
        serialize(&table),
        "create table entity (\"stringField\" string, \"nestedEntities\" array(\
         object as (\"stringField\" string, \"integerField\" integer)))"
    );
}

#[test]
fn create_statement_with_nested_entity_collection() {
    let nested = Column::new("nested", Type::Object).with_children(vec![
        Column::new("stringField", Type::String),
        Column::new("integerField", Type::Integer),
    ]);

    let table = make_table(
        "entity",
        vec![
            Column::new("stringField", Type::String),
            Column::new("nestedEntities", Type::array(Type::Object))
                .with_children(vec![Column::new("stringField", Type::String), nested]),
        ],
    );

    assert_eq!(
        serialize(&table),
        "create table entity (\"stringField\" string, \"nestedEntities\" array(\
         object as (\"stringField\" string, \"nested\" object as (\
         \"stringField\" string, \"integerField\" integer))))"
    );
}

#[test]
fn serialization_is_idempotent() {
    let table = make_table(
        "entity",
        vec![
            Column::new("stringField", Type::String).primary_key(),
            Column::new("nestedEntity", Type::Object)
                .with_children(vec![Column::new("integerField", Type::Integer)]),
        ],
    );

    assert_eq!(serialize(&table), serialize(&table));
}

#[test]
fn drop_table_statements() {
    let table = make_table("entity", vec![Column::new("stringField", Type::String)]);

    let serializer = Serializer::new();

    let sql = serializer
        .serialize(&Statement::drop_table(&table))
        .unwrap();
    assert_eq!(sql, "drop table entity");

    let sql = serializer
        .serialize(&Statement::drop_table_if_exists(&table))
        .unwrap();
    assert_eq!(sql, "drop table if exists entity");
}

#[test]
fn array_column_cannot_be_primary_key() {
    let table = make_table(
        "entity",
        vec![Column::new("integers", Type::array(Type::Integer)).primary_key()],
    );

    let err = Serializer::new()
        .serialize(&Statement::create_table(&table))
        .unwrap_err();
    assert!(err.is_shape_violation(), "unexpected error: {err}");
}

#[test]
fn nested_array_has_no_keyword() {
    let table = make_table(
        "entity",
        vec![Column::new(
            "matrix",
            Type::array(Type::array(Type::Integer)),
        )],
    );

    let err = Serializer::new()
        .serialize(&Statement::create_table(&table))
        .unwrap_err();
    assert!(err.is_type_mapping(), "unexpected error: {err}");
}

#[test]
fn primitive_column_cannot_have_children() {
    let table = make_table(
        "entity",
        vec![Column::new("stringField", Type::String)
            .with_children(vec![Column::new("integerField", Type::Integer)])],
    );

    let err = Serializer::new()
        .serialize(&Statement::create_table(&table))
        .unwrap_err();
    assert!(err.is_shape_violation(), "unexpected error: {err}");
}

#[test]
fn nesting_depth_is_bounded() {
    let mut column = Column::new("leaf", Type::String);
    for level in 0..40 {
        column = Column::new(format!("level{level}"), Type::Object).with_children(vec![column]);
    }

    let table = make_table("entity", vec![column]);

    let err = Serializer::new()
        .serialize(&Statement::create_table(&table))
        .unwrap_err();
    assert!(err.is_shape_violation(), "unexpected error: {err}");
}
