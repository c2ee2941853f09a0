/// A singly linked bucket chain.
///
/// Every [`Entry`] exclusively owns its successor, so the chain as a whole
/// is owned by whoever holds the `Chain` (normally one bucket slot).
/// New keys are appended at the tail; the head only changes when the first
/// entry is removed.
pub struct Chain {
    head: Option<Box<Entry>>,
    len: usize,
}

impl Default for Chain {
    fn default() -> Self {
        Self::new()
    }
}

impl Chain {
    pub const fn new() -> Self {
        Self { head: None, len: 0 }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Appends a new entry as the tail of the chain.
    ///
    /// Does not check for an existing entry with the same key,
    /// that is up to the table.
    pub fn push_back<K: Into<String>, V: Into<String>>(&mut self, key: K, value: V) {
        self.push_back_boxed(boxentry!(key, value));
    }

    fn push_back_boxed(&mut self, boxed: Box<Entry>) {
        let mut link = &mut self.head;
        while let Some(entry) = link {
            link = &mut entry.next;
        }
        // the entry is fully built before it gets linked
        *link = Some(boxed);
        self.len += 1;
    }

    /// Detaches the head entry and returns it
    pub fn pop_front(&mut self) -> Option<Entry> {
        let mut head = self.head.take()?;
        self.head = head.next.take();
        self.len -= 1;
        Some(*head)
    }

    #[cfg(test)]
    pub fn peek(&self) -> Option<&Entry> {
        self.head.as_deref()
    }

    pub fn find(&self, key: &str) -> Option<&Entry> {
        self.iter().find(|e| e.key == key)
    }

    pub fn find_mut(&mut self, key: &str) -> Option<&mut Entry> {
        let mut link = self.head.as_deref_mut();
        while let Some(entry) = link {
            if entry.key == key {
                return Some(entry);
            }
            link = entry.next.as_deref_mut();
        }
        None
    }

    /// Unlinks the entry holding `key` and hands it back.
    ///
    /// Removing the head moves the slot to the head's successor,
    /// anywhere else the predecessor is spliced onto the successor.
    pub fn remove(&mut self, key: &str) -> Option<Entry> {
        let mut link = &mut self.head;
        while link.as_ref().is_some_and(|e| e.key != key) {
            link = &mut link.as_mut()?.next;
        }

        let mut removed = link.take()?;
        *link = removed.next.take();
        self.len -= 1;
        Some(*removed)
    }

    // [adapters]

    pub fn iter(&self) -> Iter<'_> {
        Iter::new(self)
    }
}

impl Drop for Chain {
    fn drop(&mut self) {
        // unlink one by one, a recursive drop of the boxes can blow the stack on long chains
        let mut curr = self.head.take();
        while let Some(mut entry) = curr {
            curr = entry.next.take();
        }
    }
}

impl std::fmt::Debug for Chain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl IntoIterator for Chain {
    type Item = <IntoIter as Iterator>::Item;
    type IntoIter = IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter(self)
    }
}

pub struct Entry {
    pub(crate) key: String,
    pub(crate) value: String,
    pub(crate) next: Option<Box<Entry>>,
}

impl Entry {
    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// Splits a detached entry into its owned key and value
    pub fn into_pair(self) -> (String, String) {
        (self.key, self.value)
    }
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key && self.value == other.value
    }
}
impl Eq for Entry {}

impl std::fmt::Debug for Entry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "<{}, {}>", self.key, self.value)
    }
}

// [iterators]

pub struct Iter<'a> {
    current: Option<&'a Entry>,
    len: usize,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Entry;
    fn next(&mut self) -> Option<Self::Item> {
        let entry = self.current.take()?;
        self.current = entry.next.as_deref();
        self.len -= 1;
        Some(entry)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<'a> Iter<'a> {
    pub fn new(chain: &'a Chain) -> Self {
        Self {
            current: chain.head.as_deref(),
            len: chain.len,
        }
    }
}

/// Owning iterator, hands out entries head first
pub struct IntoIter(Chain);

impl Iterator for IntoIter {
    type Item = Entry;
    fn next(&mut self) -> Option<Self::Item> {
        self.0.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.0.len, Some(self.0.len))
    }
}
