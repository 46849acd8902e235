//! Move-element-and-shift reordering for blocks and sections.

use crate::hub::Block;

/// Whether moving `from` to `to` in a list of `len` items changes anything.
pub fn is_effective_move(len: usize, from: usize, to: usize) -> bool {
    from != to && from < len && to < len
}

/// Return a copy of `items` with the element at `from` moved to `to`.
///
/// Out-of-range indexes and `from == to` return the list unchanged.
pub fn move_item<T: Clone>(items: &[T], from: usize, to: usize) -> Vec<T> {
    let mut out = items.to_vec();
    if is_effective_move(out.len(), from, to) {
        let item = out.remove(from);
        out.insert(to, item);
    }
    out
}

/// Move a block and renumber every block's `sort_order` to `0..n-1`.
pub fn reorder_blocks(blocks: &[Block], from: usize, to: usize) -> Vec<Block> {
    let mut out = move_item(blocks, from, to);
    renumber(&mut out);
    out
}

/// Set each block's `sort_order` to its index.
pub fn renumber(blocks: &mut [Block]) {
    for (i, block) in blocks.iter_mut().enumerate() {
        block.sort_order = i as i32;
    }
}

/// Stable-sort by declared `sort_order`, then renumber.
pub fn sort_and_renumber(blocks: &mut [Block]) {
    blocks.sort_by_key(|b| b.sort_order);
    renumber(blocks);
}
