//! Link-walking helpers shared by arena trees.
//!
//! All helpers are iterative and rely on parent back-links, so a degenerate
//! (list-shaped) tree never deepens the call stack.

use crate::types::Node;

/// Leftmost node of the subtree rooted at `root`.
pub fn first<N: Node>(arena: &[N], root: Option<u32>) -> Option<u32> {
    let mut curr = root?;
    while let Some(l) = arena[curr as usize].l() {
        curr = l;
    }
    Some(curr)
}

/// Rightmost node of the subtree rooted at `root`.
pub fn last<N: Node>(arena: &[N], root: Option<u32>) -> Option<u32> {
    let mut curr = root?;
    while let Some(r) = arena[curr as usize].r() {
        curr = r;
    }
    Some(curr)
}

/// In-order successor.
pub fn next<N: Node>(arena: &[N], mut curr: u32) -> Option<u32> {
    if let Some(r) = arena[curr as usize].r() {
        return first(arena, Some(r));
    }

    let mut p = arena[curr as usize].p();
    while let Some(pi) = p {
        if arena[pi as usize].r() == Some(curr) {
            curr = pi;
            p = arena[pi as usize].p();
        } else {
            return Some(pi);
        }
    }
    None
}

/// In-order predecessor.
pub fn prev<N: Node>(arena: &[N], mut curr: u32) -> Option<u32> {
    if let Some(l) = arena[curr as usize].l() {
        return last(arena, Some(l));
    }

    let mut p = arena[curr as usize].p();
    while let Some(pi) = p {
        if arena[pi as usize].l() == Some(curr) {
            curr = pi;
            p = arena[pi as usize].p();
        } else {
            return Some(pi);
        }
    }
    None
}

/// Replaces the subtree at `old` with the subtree at `new` in `old`'s parent
/// slot. Returns the (possibly new) root. `old`'s own links are untouched.
pub fn transplant<N: Node>(
    arena: &mut [N],
    root: Option<u32>,
    old: u32,
    new: Option<u32>,
) -> Option<u32> {
    let parent = arena[old as usize].p();
    if let Some(n) = new {
        arena[n as usize].set_p(parent);
    }
    match parent {
        None => new,
        Some(p) => {
            if arena[p as usize].l() == Some(old) {
                arena[p as usize].set_l(new);
            } else {
                arena[p as usize].set_r(new);
            }
            root
        }
    }
}

/// Number of nodes reachable from `root`.
pub fn size<N: Node>(arena: &[N], root: Option<u32>) -> usize {
    let mut count = 0;
    let mut curr = first(arena, root);
    while let Some(i) = curr {
        count += 1;
        curr = next_within(arena, i, root);
    }
    count
}

/// Longest root-to-leaf path, counted in nodes.
pub fn height<N: Node>(arena: &[N], root: Option<u32>) -> usize {
    let Some(root) = root else {
        return 0;
    };
    let mut best = 0;
    let mut stack = vec![(root, 1usize)];
    while let Some((i, depth)) = stack.pop() {
        best = best.max(depth);
        if let Some(l) = arena[i as usize].l() {
            stack.push((l, depth + 1));
        }
        if let Some(r) = arena[i as usize].r() {
            stack.push((r, depth + 1));
        }
    }
    best
}

/// Successor that does not climb above `root`.
fn next_within<N: Node>(arena: &[N], curr: u32, root: Option<u32>) -> Option<u32> {
    if let Some(r) = arena[curr as usize].r() {
        return first(arena, Some(r));
    }
    let mut curr = curr;
    while Some(curr) != root {
        let p = arena[curr as usize].p()?;
        if arena[p as usize].l() == Some(curr) {
            return Some(p);
        }
        curr = p;
    }
    None
}
