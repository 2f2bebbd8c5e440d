mod blocks;
mod patch;

pub use blocks::{Block, added_runs, extract_added_blocks};
pub use patch::{PatchLine, added_lines, patch_lines, removed_lines};

#[cfg(test)]
#[path = "diff_tests.rs"]
mod tests;
