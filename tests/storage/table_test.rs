use std::fs;

use pacul::{
    executor::{
        insert::{Inserter, TableInserter},
        scan::{ScanIterator, TableScanner},
    },
    storage::table::Table,
    types::{PAGE_SIZE, error::DatabaseError, page::NodeType, row::Row},
    utils::mock::{TempDatabase, create_user_row},
};

fn scan_all(table: &mut Table) -> Vec<Row> {
    ScanIterator::new(TableScanner::new(table).unwrap())
        .collect::<Result<Vec<_>, _>>()
        .unwrap()
}

#[test]
fn test_open_initializes_root_leaf() {
    let temp_db = TempDatabase::with_prefix("table_open");
    let mut table = temp_db.open_table().unwrap();

    assert_eq!(table.root_page_num(), 0);
    let root = table.root_page().unwrap();
    assert_eq!(root.node_type().unwrap(), NodeType::Leaf);
    assert!(root.is_root());
    assert_eq!(root.num_cells(), 0);
    assert_eq!(table.num_rows().unwrap(), 0);
    assert!(table.leaf_keys().unwrap().is_empty());
}

#[test]
fn test_close_writes_whole_pages() {
    let temp_db = TempDatabase::with_prefix("table_close");
    let mut table = temp_db.open_table().unwrap();
    TableInserter::new(&mut table).insert(&create_user_row(1)).unwrap();
    table.close().unwrap();

    let length = fs::metadata(&temp_db.path).unwrap().len();
    assert_eq!(length, PAGE_SIZE as u64);
}

#[test]
fn test_alice_and_bob_survive_reopen() -> Result<(), DatabaseError> {
    let temp_db = TempDatabase::with_prefix("table_alice_bob");
    let alice = Row::new(1, "alice", "a@x.com")?;
    let bob = Row::new(2, "bob", "b@x.com")?;

    let mut table = temp_db.open_table()?;
    let mut inserter = TableInserter::new(&mut table);
    inserter.insert(&alice)?;
    inserter.insert(&bob)?;
    assert_eq!(scan_all(&mut table), vec![alice.clone(), bob.clone()]);
    table.close()?;

    let mut table = temp_db.open_table()?;
    assert_eq!(scan_all(&mut table), vec![alice, bob]);
    table.close()?;
    Ok(())
}

#[test]
fn test_reopen_does_not_reinitialize() -> Result<(), DatabaseError> {
    let temp_db = TempDatabase::with_prefix("table_reopen");
    let mut table = temp_db.open_table()?;
    TableInserter::new(&mut table).insert_batch(&[create_user_row(3), create_user_row(4)])?;
    table.close()?;

    let mut table = temp_db.open_table()?;
    assert_eq!(table.num_rows()?, 2);
    assert_eq!(table.leaf_keys()?, vec![3, 4]);
    assert!(table.root_page()?.is_root());
    TableInserter::new(&mut table).insert(&create_user_row(5))?;
    table.close()?;

    let mut table = temp_db.open_table()?;
    assert_eq!(table.leaf_keys()?, vec![3, 4, 5]);
    Ok(())
}

#[test]
fn test_open_rejects_corrupt_file() {
    let temp_db = TempDatabase::with_prefix("table_corrupt");
    fs::write(&temp_db.path, b"not a database").unwrap();
    assert!(matches!(
        temp_db.open_table(),
        Err(DatabaseError::CorruptFile { file_length: 14 })
    ));
}
