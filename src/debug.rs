//! Helpers for Debug impls.

use std::fmt;

/// Write every physical slot of a backing array on one line.
///
/// Slots that don't hold a live element print as `_`, since whatever they
/// contain is stale. The `head` slot (stack top, queue front) is marked `>`.
pub(crate) fn write_slots(
    f: &mut fmt::Formatter<'_>,
    slots: &[i32],
    is_live: impl Fn(usize) -> bool,
    head: Option<usize>,
) -> fmt::Result {
    write!(f, "[")?;
    for (i, value) in slots.iter().enumerate() {
        if i != 0 {
            write!(f, " ")?;
        }
        if head == Some(i) {
            write!(f, ">")?;
        }
        if is_live(i) {
            write!(f, "{value}")?;
        } else {
            write!(f, "_")?;
        }
    }
    write!(f, "]")
}
