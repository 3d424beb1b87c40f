use std::ops::Range;

use crate::types::{
    Key, PAGE_SIZE, PageNum,
    error::DatabaseError,
    row::{ROW_SIZE, Row},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeType {
    Internal = 0,
    Leaf = 1,
}

impl NodeType {
    pub fn from_u8(value: u8) -> Result<Self, DatabaseError> {
        match value {
            0 => Ok(NodeType::Internal),
            1 => Ok(NodeType::Leaf),
            _ => Err(DatabaseError::InvalidPageType(value)),
        }
    }

    pub fn as_u8(&self) -> u8 {
        match self {
            NodeType::Internal => 0,
            NodeType::Leaf => 1,
        }
    }
}

/*
 * Leaf Node Layout
 * ┌───────────────────────────────────────────────────────────────┐
 * │ COMMON HEADER (6 bytes)                                       │
 * │  node_type(1) | is_root(1) | parent_pointer(4)                │
 * ├───────────────────────────────────────────────────────────────┤
 * │ LEAF HEADER (4 bytes)                                         │
 * │  num_cells(4)                                                 │
 * ├───────────────────────────────────────────────────────────────┤
 * │ CELLS, sorted by key                                          │
 * │  [key(4) | row(293)] [key(4) | row(293)] ...                  │
 * ├───────────────────────────────────────────────────────────────┤
 * │ unused tail                                                   │
 * └───────────────────────────────────────────────────────────────┘
 */

pub const NODE_TYPE_SIZE: usize = size_of::<u8>();
pub const NODE_TYPE_OFFSET: usize = 0;
pub const IS_ROOT_SIZE: usize = size_of::<u8>();
pub const IS_ROOT_OFFSET: usize = NODE_TYPE_OFFSET + NODE_TYPE_SIZE;
pub const PARENT_POINTER_SIZE: usize = size_of::<u32>();
pub const PARENT_POINTER_OFFSET: usize = IS_ROOT_OFFSET + IS_ROOT_SIZE;
pub const COMMON_NODE_HEADER_SIZE: usize = NODE_TYPE_SIZE + IS_ROOT_SIZE + PARENT_POINTER_SIZE;

pub const LEAF_NODE_NUM_CELLS_SIZE: usize = size_of::<u32>();
pub const LEAF_NODE_NUM_CELLS_OFFSET: usize = COMMON_NODE_HEADER_SIZE;
pub const LEAF_NODE_HEADER_SIZE: usize = COMMON_NODE_HEADER_SIZE + LEAF_NODE_NUM_CELLS_SIZE;

pub const LEAF_NODE_KEY_SIZE: usize = size_of::<u32>();
pub const LEAF_NODE_KEY_OFFSET: usize = 0;
pub const LEAF_NODE_VALUE_SIZE: usize = ROW_SIZE;
pub const LEAF_NODE_VALUE_OFFSET: usize = LEAF_NODE_KEY_OFFSET + LEAF_NODE_KEY_SIZE;
pub const LEAF_NODE_CELL_SIZE: usize = LEAF_NODE_KEY_SIZE + LEAF_NODE_VALUE_SIZE;
pub const LEAF_NODE_SPACE_FOR_CELLS: usize = PAGE_SIZE - LEAF_NODE_HEADER_SIZE;
pub const LEAF_NODE_MAX_CELLS: usize = LEAF_NODE_SPACE_FOR_CELLS / LEAF_NODE_CELL_SIZE;

/// A raw page buffer. An all-zero page has no cells; `initialize_leaf`
/// stamps the leaf header.
pub struct Page {
    data: [u8; PAGE_SIZE],
}

impl Page {
    pub fn new() -> Self {
        Self {
            data: [0; PAGE_SIZE],
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    fn read_u32(&self, offset: usize) -> u32 {
        let mut bytes = [0u8; 4];
        bytes.copy_from_slice(&self.data[offset..offset + 4]);
        u32::from_le_bytes(bytes)
    }

    fn write_u32(&mut self, offset: usize, value: u32) {
        self.data[offset..offset + 4].copy_from_slice(&value.to_le_bytes());
    }

    pub fn node_type(&self) -> Result<NodeType, DatabaseError> {
        NodeType::from_u8(self.data[NODE_TYPE_OFFSET])
    }

    pub fn set_node_type(&mut self, node_type: NodeType) {
        self.data[NODE_TYPE_OFFSET] = node_type.as_u8();
    }

    pub fn is_root(&self) -> bool {
        self.data[IS_ROOT_OFFSET] != 0
    }

    pub fn set_root(&mut self, is_root: bool) {
        self.data[IS_ROOT_OFFSET] = is_root as u8;
    }

    pub fn parent(&self) -> PageNum {
        self.read_u32(PARENT_POINTER_OFFSET)
    }

    pub fn set_parent(&mut self, parent: PageNum) {
        self.write_u32(PARENT_POINTER_OFFSET, parent);
    }

    pub fn num_cells(&self) -> u32 {
        self.read_u32(LEAF_NODE_NUM_CELLS_OFFSET)
    }

    fn set_num_cells(&mut self, num_cells: u32) {
        self.write_u32(LEAF_NODE_NUM_CELLS_OFFSET, num_cells);
    }

    pub fn is_full(&self) -> bool {
        self.num_cells() as usize >= LEAF_NODE_MAX_CELLS
    }

    pub fn initialize_leaf(&mut self) {
        self.set_node_type(NodeType::Leaf);
        self.set_root(false);
        self.set_parent(0);
        self.set_num_cells(0);
    }

    fn cell_range(cell_num: u32) -> Range<usize> {
        let start = LEAF_NODE_HEADER_SIZE + cell_num as usize * LEAF_NODE_CELL_SIZE;
        start..start + LEAF_NODE_CELL_SIZE
    }

    pub fn cell(&self, cell_num: u32) -> &[u8] {
        &self.data[Self::cell_range(cell_num)]
    }

    pub fn key(&self, cell_num: u32) -> Key {
        self.read_u32(Self::cell_range(cell_num).start + LEAF_NODE_KEY_OFFSET)
    }

    fn set_key(&mut self, cell_num: u32, key: Key) {
        self.write_u32(Self::cell_range(cell_num).start + LEAF_NODE_KEY_OFFSET, key);
    }

    pub fn value(&self, cell_num: u32) -> &[u8] {
        let start = Self::cell_range(cell_num).start + LEAF_NODE_VALUE_OFFSET;
        &self.data[start..start + LEAF_NODE_VALUE_SIZE]
    }

    pub fn value_mut(&mut self, cell_num: u32) -> &mut [u8] {
        let start = Self::cell_range(cell_num).start + LEAF_NODE_VALUE_OFFSET;
        &mut self.data[start..start + LEAF_NODE_VALUE_SIZE]
    }

    /// Keys in cell order.
    pub fn keys(&self) -> impl Iterator<Item = Key> + '_ {
        (0..self.num_cells()).map(|cell_num| self.key(cell_num))
    }

    /// Index of the cell holding `key`, or the index it would be inserted at.
    pub fn find_cell(&self, key: Key) -> u32 {
        let mut low = 0;
        let mut high = self.num_cells();
        while low < high {
            let mid = low + (high - low) / 2;
            let key_at_mid = self.key(mid);
            if key == key_at_mid {
                return mid;
            }
            if key < key_at_mid {
                high = mid;
            } else {
                low = mid + 1;
            }
        }
        low
    }

    /// Opens a slot at `cell_num` by shifting later cells right, then writes
    /// the cell. The caller checks `is_full` and picks a sorted position.
    /// `Cursor::insert` reports a bad position or a full leaf as an error.
    pub fn insert_cell(&mut self, cell_num: u32, key: Key, row: &Row) {
        let num_cells = self.num_cells();
        assert!(!self.is_full(), "insert into full leaf");
        assert!(
            cell_num <= num_cells,
            "insert at cell {cell_num} past {num_cells} cells"
        );

        if cell_num < num_cells {
            let shifted = Self::cell_range(cell_num).start..Self::cell_range(num_cells).start;
            let dest = shifted.start + LEAF_NODE_CELL_SIZE;
            self.data.copy_within(shifted, dest);
        }

        self.set_num_cells(num_cells + 1);
        self.set_key(cell_num, key);
        row.serialize(self.value_mut(cell_num));
    }
}

impl Default for Page {
    fn default() -> Self {
        Self::new()
    }
}
