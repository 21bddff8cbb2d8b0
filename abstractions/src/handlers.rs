use std::cell::RefCell;
use std::rc::Rc;

use log::{debug, trace};

/// Shared reference to a node of a handler chain.
///
/// A node is held by its predecessor and by whoever built the chain, so any
/// node can be used as an entry point.
pub type HandlerRef<V, R> = Rc<RefCell<dyn Handler<V, R>>>;

/// A link of a chain of responsibility.
///
/// `V` is the request type, `R` the result produced by the handler that
/// accepts the request.
pub trait Handler<V, R> {
    /// Human readable name of the handler.
    fn label(&self) -> &str;

    /// Stores `next` as the successor, replacing any previous one, and
    /// returns it so links can be chained: `a.set_next(b).borrow_mut().set_next(c)`.
    fn set_next(&mut self, next: HandlerRef<V, R>) -> HandlerRef<V, R>;

    fn next(&self) -> Option<HandlerRef<V, R>>;

    /// Unlinks and returns the successor.
    fn take_next(&mut self) -> Option<HandlerRef<V, R>>;

    /// This handler's own answer, without looking at the successors.
    fn serve(&self, request: &V) -> Option<R>;

    /// Serves the request or passes it down the chain.
    ///
    /// `None` means nobody from this node onward accepted the request.
    fn handle(&self, request: V) -> Option<R> {
        match self.serve(&request) {
            Some(result) => Some(result),
            None => dispatch(self.next(), request),
        }
    }
}

/// Walks the chain starting at `entry` until a node serves the request.
///
/// Iterative, so chain length is not bounded by the stack.
pub fn dispatch<V, R>(entry: Option<HandlerRef<V, R>>, request: V) -> Option<R> {
    let mut current = entry;
    while let Some(node) = current {
        let handler = node.borrow();
        trace!("forwarding to {}", handler.label());

        if let Some(result) = handler.serve(&request) {
            return Some(result);
        }
        current = handler.next();
    }

    debug!("chain exhausted, request unhandled");
    None
}

/// Default chaining behaviour shared by concrete handlers.
pub struct Successor<V, R> {
    next: Option<HandlerRef<V, R>>,
}

impl<V, R> Successor<V, R> {
    pub fn new() -> Self {
        Self { next: None }
    }

    pub fn set(&mut self, next: HandlerRef<V, R>) -> HandlerRef<V, R> {
        self.next = Some(Rc::clone(&next));
        next
    }

    pub fn get(&self) -> Option<HandlerRef<V, R>> {
        self.next.as_ref().map(Rc::clone)
    }

    pub fn take(&mut self) -> Option<HandlerRef<V, R>> {
        self.next.take()
    }

    pub fn is_last(&self) -> bool {
        self.next.is_none()
    }

    pub fn forward(&self, request: V) -> Option<R> {
        dispatch(self.get(), request)
    }
}

impl<V, R> Default for Successor<V, R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V, R> Drop for Successor<V, R> {
    // Unlink nodes one by one so dropping a long chain doesn't recurse.
    fn drop(&mut self) {
        let mut next = self.next.take();
        while let Some(node) = next {
            if Rc::strong_count(&node) > 1 {
                break;
            }
            next = match node.try_borrow_mut() {
                Ok(mut handler) => handler.take_next(),
                Err(_) => None,
            };
        }
    }
}
