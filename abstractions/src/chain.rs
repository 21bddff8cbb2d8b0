//! Helpers for building and inspecting handler chains.

use std::collections::HashSet;
use std::rc::Rc;

use log::debug;

use crate::{ChainError, HandlerRef};

/// Iterator over the nodes reachable from an entry point, in dispatch order.
///
/// Stops early if a node shows up twice, so a loop made through a raw
/// `set_next` call can't hang the caller.
pub struct Walk<V, R> {
    current: Option<HandlerRef<V, R>>,
    seen: HashSet<*const ()>,
}

impl<V, R> Iterator for Walk<V, R> {
    type Item = HandlerRef<V, R>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.current.take()?;
        let addr = Rc::as_ptr(&node) as *const ();
        if !self.seen.insert(addr) {
            return None;
        }

        self.current = node.borrow().next();
        Some(node)
    }
}

pub fn walk<V, R>(entry: &HandlerRef<V, R>) -> Walk<V, R> {
    Walk {
        current: Some(Rc::clone(entry)),
        seen: HashSet::new(),
    }
}

/// Checked version of `set_next`: links `from > to` unless `from` is
/// already reachable from `to`. Returns `to` on success.
pub fn link<V, R>(
    from: &HandlerRef<V, R>,
    to: HandlerRef<V, R>,
) -> Result<HandlerRef<V, R>, ChainError> {
    if walk(&to).any(|node| Rc::ptr_eq(&node, from)) {
        return Err(ChainError::Cycle {
            from: from.borrow().label().to_owned(),
            to: to.borrow().label().to_owned(),
        });
    }

    debug!("link {} > {}", from.borrow().label(), to.borrow().label());
    let next = from.borrow_mut().set_next(to);
    Ok(next)
}

/// Links the handlers in the given order and returns the head.
pub fn build<V, R>(handlers: Vec<HandlerRef<V, R>>) -> Result<Option<HandlerRef<V, R>>, ChainError> {
    let mut handlers = handlers.into_iter();
    let Some(head) = handlers.next() else {
        return Ok(None);
    };

    let mut tail = Rc::clone(&head);
    for handler in handlers {
        tail = link(&tail, handler)?;
    }

    Ok(Some(head))
}

/// Node `index` steps after `entry`, `entry` itself for 0.
pub fn node_at<V, R>(entry: &HandlerRef<V, R>, index: usize) -> Option<HandlerRef<V, R>> {
    walk(entry).nth(index)
}

pub fn labels<V, R>(entry: &HandlerRef<V, R>) -> Vec<String> {
    walk(entry)
        .map(|node| node.borrow().label().to_owned())
        .collect()
}

/// `A > B > C` rendering of the chain seen from `entry`.
pub fn describe<V, R>(entry: &HandlerRef<V, R>) -> String {
    labels(entry).join(" > ")
}
