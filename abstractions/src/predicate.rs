use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use log::{debug, trace};

use crate::{Handler, HandlerRef, Successor};

type Predicate<V> = Box<dyn Fn(&V) -> bool>;
type Responder<V, R> = Box<dyn Fn(&str, &V) -> R>;

/// Handler described by data: a label, a predicate that decides whether the
/// request is accepted and a responder that builds the result.
pub struct PredicateHandler<V, R> {
    label: String,
    predicate: Predicate<V>,
    responder: Responder<V, R>,
    next: Successor<V, R>,
}

impl<V, R> PredicateHandler<V, R> {
    pub fn new<P, F>(label: impl Into<String>, predicate: P, responder: F) -> Self
    where
        P: Fn(&V) -> bool + 'static,
        F: Fn(&str, &V) -> R + 'static,
    {
        Self {
            label: label.into(),
            predicate: Box::new(predicate),
            responder: Box::new(responder),
            next: Successor::new(),
        }
    }

    pub fn accepts(&self, request: &V) -> bool {
        (self.predicate)(request)
    }
}

impl<V: fmt::Debug + 'static, R: 'static> PredicateHandler<V, R> {
    pub fn into_ref(self) -> HandlerRef<V, R> {
        Rc::new(RefCell::new(self))
    }
}

impl<V: fmt::Debug, R> Handler<V, R> for PredicateHandler<V, R> {
    fn label(&self) -> &str {
        &self.label
    }

    fn set_next(&mut self, next: HandlerRef<V, R>) -> HandlerRef<V, R> {
        self.next.set(next)
    }

    fn next(&self) -> Option<HandlerRef<V, R>> {
        self.next.get()
    }

    fn take_next(&mut self) -> Option<HandlerRef<V, R>> {
        self.next.take()
    }

    fn serve(&self, request: &V) -> Option<R> {
        trace!("{}: checking {:?}", self.label, request);

        if !self.accepts(request) {
            return None;
        }

        debug!("{}: accepted {:?}", self.label, request);
        Some((self.responder)(&self.label, request))
    }
}

impl<V, R> fmt::Debug for PredicateHandler<V, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PredicateHandler")
            .field("label", &self.label)
            .field("last", &self.next.is_last())
            .finish()
    }
}
