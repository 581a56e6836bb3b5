
use crate::error::{Error, Result};
use itertools::Itertools;
use std::any::type_name;

#[derive(Debug)]
struct Link {
    value: i32,
    next: Option<Box<Link>>,
}

/// Singly linked list of integers.
///
/// Index operations report [`Error::IndexOutOfRange`] instead of panicking.
#[derive(Default)]
pub struct LinkedList {
    head: Option<Box<Link>>,
    len: usize,
}

impl core::fmt::Debug for LinkedList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct(type_name::<LinkedList>())
            .field("len", &self.len)
            .field("values", &self.iter().collect_vec())
            .finish()
    }
}

impl Drop for LinkedList {
    fn drop(&mut self) {
        let mut cursor = self.head.take();
        while let Some(mut link) = cursor {
            cursor = link.next.take();
        }
    }
}

impl LinkedList {
    pub fn new() -> Self {
        LinkedList::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    fn out_of_range(&self, index: usize) -> Error {
        Error::IndexOutOfRange {
            index,
            len: self.len,
        }
    }

    /// The link slot holding the element at `index`; `index == len` is the empty slot past the tail.
    fn slot(&mut self, index: usize) -> Option<&mut Option<Box<Link>>> {
        let mut cursor = &mut self.head;
        for _ in 0..index {
            cursor = &mut cursor.as_mut()?.next;
        }
        Some(cursor)
    }

    pub fn push_head(&mut self, value: i32) {
        let next = self.head.take();
        self.head = Some(Box::new(Link { value, next }));
        self.len += 1;
    }

    pub fn push_tail(&mut self, value: i32) {
        let mut cursor = &mut self.head;
        while let Some(link) = cursor {
            cursor = &mut link.next;
        }
        *cursor = Some(Box::new(Link { value, next: None }));
        self.len += 1;
    }

    /// Inserts so that `value` ends up at `index`; `index == len` appends.
    pub fn insert(&mut self, index: usize, value: i32) -> Result<()> {
        let len = self.len;
        let slot = self
            .slot(index)
            .filter(|_| index <= len)
            .ok_or(Error::IndexOutOfRange { index, len })?;
        let next = slot.take();
        *slot = Some(Box::new(Link { value, next }));
        self.len += 1;
        Ok(())
    }

    /// Removes and returns the element at `index`.
    pub fn remove(&mut self, index: usize) -> Result<i32> {
        let len = self.len;
        let slot = self
            .slot(index)
            .ok_or(Error::IndexOutOfRange { index, len })?;
        let Link { value, next } = *slot.take().ok_or(Error::IndexOutOfRange { index, len })?;
        *slot = next;
        self.len -= 1;
        Ok(value)
    }

    pub fn pop_head(&mut self) -> Result<i32> {
        self.remove(0)
    }

    pub fn pop_tail(&mut self) -> Result<i32> {
        match self.len.checked_sub(1) {
            Some(last) => self.remove(last),
            None => Err(self.out_of_range(0)),
        }
    }

    /// Removes every element equal to `value` in a single pass, returning how many went.
    pub fn remove_all(&mut self, value: i32) -> Result<usize> {
        let mut removed = 0;
        let mut cursor = &mut self.head;
        loop {
            match cursor {
                Some(link) if link.value == value => {
                    *cursor = link.next.take();
                    removed += 1;
                }
                Some(link) => cursor = &mut link.next,
                None => break,
            }
        }

        self.len -= removed;
        if removed == 0 {
            Err(Error::NotFound(value.to_string()))
        } else {
            Ok(removed)
        }
    }

    pub fn head(&self) -> Option<&i32> {
        self.head.as_deref().map(|link| &link.value)
    }

    pub fn tail(&self) -> Option<&i32> {
        self.iter().last()
    }

    pub fn get(&self, index: usize) -> Result<&i32> {
        self.iter()
            .nth(index)
            .ok_or_else(|| self.out_of_range(index))
    }

    pub fn iter(&self) -> Iter<'_> {
        Iter {
            next: self.head.as_deref(),
        }
    }
}

#[must_use]
pub struct Iter<'a> {
    next: Option<&'a Link>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a i32;

    fn next(&mut self) -> Option<Self::Item> {
        let link = self.next?;
        self.next = link.next.as_deref();
        Some(&link.value)
    }
}

impl<'a> IntoIterator for &'a LinkedList {
    type Item = &'a i32;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<i32> for LinkedList {
    fn from_iter<T: IntoIterator<Item = i32>>(iter: T) -> Self {
        let mut list = LinkedList::new();
        for value in iter.into_iter().collect_vec().into_iter().rev() {
            list.push_head(value);
        }
        list
    }
}

impl std::fmt::Display for LinkedList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.iter().join(" -> "))
    }
}
