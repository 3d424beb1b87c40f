use pacul::{
    executor::{
        ExecuteResult, execute, execute_select,
        insert::{Inserter, TableInserter},
    },
    planner::types::Statement,
    types::{error::DatabaseError, page::LEAF_NODE_MAX_CELLS, row::Row},
    utils::mock::{TempDatabase, create_user_row},
};

fn rows(result: ExecuteResult) -> Vec<Row> {
    match result {
        ExecuteResult::Rows(rows) => rows,
        other => panic!("Expected rows, got {:?}", other),
    }
}

#[test]
fn test_insert_then_select() -> Result<(), DatabaseError> {
    let temp_db = TempDatabase::with_prefix("insert_select");
    let mut table = temp_db.open_table()?;
    let inserted: Vec<Row> = (1..=10).map(create_user_row).collect();
    for row in &inserted {
        assert_eq!(
            execute(&Statement::Insert(row.clone()), &mut table)?,
            ExecuteResult::Inserted
        );
    }

    assert_eq!(rows(execute(&Statement::Select, &mut table)?), inserted);
    Ok(())
}

#[test]
fn test_insert_out_of_order_is_sorted() -> Result<(), DatabaseError> {
    let temp_db = TempDatabase::with_prefix("insert_unordered");
    let mut table = temp_db.open_table()?;
    let mut inserter = TableInserter::new(&mut table);
    for id in [5, 1, 4, 2, 3] {
        inserter.insert(&create_user_row(id))?;
    }

    assert_eq!(table.leaf_keys()?, vec![1, 2, 3, 4, 5]);
    let ids: Vec<u32> = rows(execute_select(&mut table)?).iter().map(|row| row.id).collect();
    assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    Ok(())
}

#[test]
fn test_duplicate_key_is_rejected() -> Result<(), DatabaseError> {
    let temp_db = TempDatabase::with_prefix("insert_duplicate");
    let mut table = temp_db.open_table()?;
    let mut inserter = TableInserter::new(&mut table);
    inserter.insert(&Row::new(1, "alice", "a@x.com")?)?;

    let err = inserter
        .insert(&Row::new(1, "mallory", "m@x.com")?)
        .unwrap_err();
    assert!(matches!(err, DatabaseError::DuplicateKey { key: 1 }));
    assert!(err.is_recoverable());

    let stored = rows(execute_select(&mut table)?);
    assert_eq!(stored, vec![Row::new(1, "alice", "a@x.com")?]);
    Ok(())
}

#[test]
fn test_table_full_boundary() -> Result<(), DatabaseError> {
    let temp_db = TempDatabase::with_prefix("insert_full");
    let mut table = temp_db.open_table()?;
    let max = LEAF_NODE_MAX_CELLS as u32;
    let batch: Vec<Row> = (1..=max).map(create_user_row).collect();
    TableInserter::new(&mut table).insert_batch(&batch)?;
    assert_eq!(table.num_rows()?, max);

    let err = TableInserter::new(&mut table)
        .insert(&create_user_row(max + 1))
        .unwrap_err();
    assert!(matches!(err, DatabaseError::LeafFull { page_num: 0 }));
    assert!(err.is_recoverable());

    assert_eq!(table.num_rows()?, max);
    assert_eq!(rows(execute_select(&mut table)?), batch);
    Ok(())
}

#[test]
fn test_full_leaf_reported_before_duplicate() -> Result<(), DatabaseError> {
    let temp_db = TempDatabase::with_prefix("insert_full_dup");
    let mut table = temp_db.open_table()?;
    let max = LEAF_NODE_MAX_CELLS as u32;
    let batch: Vec<Row> = (1..=max).map(create_user_row).collect();
    TableInserter::new(&mut table).insert_batch(&batch)?;

    assert!(matches!(
        TableInserter::new(&mut table).insert(&create_user_row(1)),
        Err(DatabaseError::LeafFull { .. })
    ));
    Ok(())
}

#[test]
fn test_insert_batch_stops_at_first_failure() -> Result<(), DatabaseError> {
    let temp_db = TempDatabase::with_prefix("insert_batch_fail");
    let mut table = temp_db.open_table()?;
    let batch = vec![create_user_row(1), create_user_row(1), create_user_row(2)];

    assert!(matches!(
        TableInserter::new(&mut table).insert_batch(&batch),
        Err(DatabaseError::DuplicateKey { key: 1 })
    ));
    assert_eq!(table.leaf_keys()?, vec![1]);
    Ok(())
}
