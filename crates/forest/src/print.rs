//! Debug rendering of arena trees.

use std::fmt::Debug;

use crate::types::Node;

/// Child printer callback used by [`print_binary`].
pub type PrintChild<'a> = dyn Fn(&str) -> String + 'a;

/// Renders the left and right children of a binary node, one per line,
/// each indented by `tab` and prefixed with an arrow.
pub fn print_binary(tab: &str, children: [Option<&PrintChild<'_>>; 2]) -> String {
    let [left, right] = children;
    let child_tab = format!("{tab}  ");

    let mut out = String::new();
    if let Some(left) = left {
        out.push('\n');
        out.push_str(tab);
        out.push_str("← ");
        out.push_str(&left(&child_tab));
    }
    if let Some(right) = right {
        out.push('\n');
        out.push_str(tab);
        out.push_str("→ ");
        out.push_str(&right(&child_tab));
    }
    out
}

/// Renders the subtree at `node` with `label` producing each node's text.
/// Absent children print as `∅` when their sibling exists.
///
/// Recurses once per level; meant for diagnostics, not for huge trees.
pub fn print_subtree<N, F>(arena: &[N], node: Option<u32>, tab: &str, label: &F) -> String
where
    N: Node,
    F: Fn(&N) -> String,
{
    let Some(i) = node else {
        return "∅".to_string();
    };
    let n = &arena[i as usize];
    let (l, r) = (n.l(), n.r());
    let head = label(n);
    if l.is_none() && r.is_none() {
        return head;
    }
    let left = |tab: &str| print_subtree(arena, l, tab, label);
    let right = |tab: &str| print_subtree(arena, r, tab, label);
    head + &print_binary(tab, [Some(&left), Some(&right)])
}

/// Default label: the value, with `×n` appended when `n > 1`.
pub fn label_with_count<T: Debug>(value: &T, count: usize) -> String {
    if count > 1 {
        format!("{value:?} ×{count}")
    } else {
        format!("{value:?}")
    }
}
