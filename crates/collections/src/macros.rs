/// Builds a detached, heap-allocated chain [`Entry`](crate::linked_list::Entry)
macro_rules! boxentry {
    ( $key: expr, $value: expr) => {
        Box::new($crate::linked_list::Entry {
            key: $key.into(),
            value: $value.into(),
            next: None,
        })
    };
}

/// Builds a detached chain [`Entry`](crate::linked_list::Entry), mostly for comparisons in tests
#[cfg(test)]
macro_rules! entry {
    ( $key: expr, $value: expr) => {
        $crate::linked_list::Entry {
            key: $key.into(),
            value: $value.into(),
            next: None,
        }
    };
}
