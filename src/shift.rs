use crate::table::{Kind, Table};
use tracing::trace;

/// Whether `arguments[index]` is the value of an option that precedes it.
pub fn is_option_argument(arguments: &[&str], index: usize, table: &Table) -> bool {
    if index <= 1 || index >= arguments.len() {
        return false;
    }

    let previous = arguments[index - 1];
    previous.starts_with('-')
        && table
            .find(previous)
            .is_some_and(|found| table.descriptors[found].kind == Kind::Option)
}

/// Moves every free-standing value to the end of `arguments`, keeping the
/// relative order of both the moved values and the remaining tokens.
/// The program name at index 0 never moves.
///
/// Returns the index where the free-standing values start, which is
/// `arguments.len()` when there are none.
pub fn reposition(arguments: &mut [&str], table: &Table) -> usize {
    let mut end = arguments.len();
    let mut index = 1;
    while index < end {
        let token = arguments[index];
        if token.starts_with('-') || is_option_argument(arguments, index, table) {
            index += 1;
            continue;
        }

        // Everything left is free-standing and nothing was moved behind it.
        if end == arguments.len()
            && !arguments[index + 1..end]
                .iter()
                .any(|token| token.starts_with('-'))
        {
            break;
        }

        trace!(token, index, "repositioning free-standing argument");
        arguments[index..].rotate_left(1);
        end -= 1;
    }
    index.min(arguments.len())
}
