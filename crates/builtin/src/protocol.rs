//! Capability protocols
//!
//! Structural descriptors named after the protocol they require. Any value,
//! built-in or object, whose capabilities cover the list is a member.

use typeward_contract::combinators::capability;
use typeward_contract::foundation::capability::{
    AENTER, AEXIT, AITER, ANEXT, AWAIT, CALL, CONTAINS, ENTER, EXIT, HASH, ITER, LEN, NEXT,
};

preset! {
    pub fn callable() = "Callable", capability([CALL]).expect("Callable is well formed");

    pub fn iterable() = "Iterable", capability([ITER]).expect("Iterable is well formed");

    /// Iterables that also step with `next`.
    pub fn iterator() = "Iterator", capability([ITER, NEXT]).expect("Iterator is well formed");

    pub fn sized() = "Sized", capability([LEN]).expect("Sized is well formed");

    pub fn container() = "Container",
        capability([CONTAINS]).expect("Container is well formed");

    pub fn hashable() = "Hashable", capability([HASH]).expect("Hashable is well formed");

    pub fn awaitable() = "Awaitable", capability([AWAIT]).expect("Awaitable is well formed");

    pub fn async_iterable() = "AsyncIterable",
        capability([AITER]).expect("AsyncIterable is well formed");

    pub fn async_iterator() = "AsyncIterator",
        capability([AITER, ANEXT]).expect("AsyncIterator is well formed");

    /// Values usable as a scope guard: `enter` and `exit`.
    pub fn context_manager() = "ContextManager",
        capability([ENTER, EXIT]).expect("ContextManager is well formed");

    pub fn async_context_manager() = "AsyncContextManager",
        capability([AENTER, AEXIT]).expect("AsyncContextManager is well formed");
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use typeward_contract::{Class, Function, Object, Value};

    #[derive(Debug)]
    struct Session {
        class: Arc<Class>,
    }

    impl Object for Session {
        fn class(&self) -> &Arc<Class> {
            &self.class
        }
    }

    #[test]
    fn test_builtin_values() {
        assert!(sized().is_member(&Value::str("abc")));
        assert!(iterable().is_member(&Value::set([1])));
        assert!(!hashable().is_member(&Value::list([1])));
        assert!(hashable().is_member(&Value::tuple([1])));
        assert!(!iterator().is_member(&Value::list([1])));
        assert!(container().is_member(&Value::dict([("a", 1)])));
    }

    #[test]
    fn test_functions_are_callable() {
        let f = Value::from(Function::new("noop", |_| Ok(Value::Nil)));
        assert!(callable().is_member(&f));
        assert!(!callable().is_member(&Value::str("noop")));
    }

    #[test]
    fn test_object_capabilities_are_inherited() {
        let resource = Class::new("Resource")
            .with_capability("__enter__")
            .with_capability("__exit__")
            .build();
        let session = Class::new("Session").extends(&resource).build();
        let value = Value::object(Session { class: session });

        assert!(context_manager().is_member(&value));
        assert!(!async_context_manager().is_member(&value));
        assert!(!awaitable().is_member(&value));
    }
}
