use crate::error::{ErrorKind, ParseError};
use std::collections::BTreeMap;
use std::fmt;

/// Handle for a speculative attempt opened with [`State::begin`]
///
/// A handle is not `Clone`, so it is closed by exactly one call to
/// [`State::commit`] or [`State::rollback`].
#[must_use = "a transaction must be committed or rolled back"]
#[derive(Debug, PartialEq, Eq)]
pub struct Transaction(usize);

impl Transaction {
    pub fn new(id: usize) -> Self {
        Transaction(id)
    }

    pub fn id(&self) -> usize {
        self.0
    }
}

/// Mutable cursor over a fixed token stream
///
/// `next` is the only primitive that advances the cursor. `seek_to` and
/// `rollback` move it back to a position that was observed earlier. Errors are
/// built through `trap`, `mismatch` and `eof`, which stamp the current position
/// without moving the cursor.
pub trait State {
    /// The type of items this state iterates over
    type Item;

    /// Current cursor position, `0 <= position <= len`
    fn position(&self) -> usize;

    /// Return the item at the cursor and advance by one
    ///
    /// At the end of the stream this fails with [`ErrorKind::Eof`] and leaves
    /// the position unchanged.
    fn next(&mut self) -> Result<Self::Item, ParseError>;

    /// Move the cursor to `target`, returning false if it lies outside the stream
    fn seek_to(&mut self, target: usize) -> bool;

    /// Open a transaction recording the current position
    fn begin(&mut self) -> Transaction;

    /// Close a transaction, keeping the current position
    fn commit(&mut self, transaction: Transaction);

    /// Close a transaction, restoring the position recorded by `begin`
    fn rollback(&mut self, transaction: Transaction);

    fn trap(&self, message: fmt::Arguments<'_>) -> ParseError {
        ParseError::new(ErrorKind::Trap, self.position(), message.to_string())
    }

    fn mismatch(&self, message: fmt::Arguments<'_>) -> ParseError {
        ParseError::new(ErrorKind::Mismatch, self.position(), message.to_string())
    }

    fn eof(&self) -> ParseError {
        ParseError::new(ErrorKind::Eof, self.position(), "eof")
    }
}

/// The standard in-memory [`State`] over a buffered token sequence
#[derive(Debug, Clone)]
pub struct BasicState<T> {
    buffer: Vec<T>,
    index: usize,
    next_transaction: usize,
    /// Start position of every open transaction, keyed by handle id
    transactions: BTreeMap<usize, usize>,
}

impl<T> BasicState<T> {
    pub fn new(data: impl Into<Vec<T>>) -> Self {
        BasicState {
            buffer: data.into(),
            index: 0,
            next_transaction: 0,
            transactions: BTreeMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Items not yet consumed
    pub fn remaining(&self) -> &[T] {
        &self.buffer[self.index..]
    }

    /// Start position of the earliest transaction that is still open
    ///
    /// Nothing before this position can be needed again by a pending rollback.
    pub fn earliest_open(&self) -> Option<usize> {
        self.transactions.values().copied().min()
    }

    pub fn open_transactions(&self) -> usize {
        self.transactions.len()
    }
}

impl BasicState<char> {
    /// Build a state over the chars of `text`
    pub fn from_text(text: &str) -> Self {
        BasicState::new(text.chars().collect::<Vec<_>>())
    }
}

impl BasicState<u8> {
    pub fn from_bytes(data: &[u8]) -> Self {
        BasicState::new(data)
    }
}

impl<T: Clone> State for BasicState<T> {
    type Item = T;

    fn position(&self) -> usize {
        self.index
    }

    fn next(&mut self) -> Result<T, ParseError> {
        match self.buffer.get(self.index) {
            Some(item) => {
                let item = item.clone();
                self.index += 1;
                Ok(item)
            }
            None => Err(self.eof()),
        }
    }

    fn seek_to(&mut self, target: usize) -> bool {
        if target > self.buffer.len() {
            return false;
        }
        self.index = target;
        true
    }

    fn begin(&mut self) -> Transaction {
        let id = self.next_transaction;
        self.next_transaction += 1;
        self.transactions.insert(id, self.index);
        Transaction::new(id)
    }

    fn commit(&mut self, transaction: Transaction) {
        self.transactions.remove(&transaction.id());
    }

    fn rollback(&mut self, transaction: Transaction) {
        // A handle already discarded by an enclosing rollback is a no-op.
        if !self.transactions.contains_key(&transaction.id()) {
            return;
        }
        // Everything opened after this transaction is abandoned with it.
        let mut abandoned = self.transactions.split_off(&transaction.id());
        if let Some(start) = abandoned.remove(&transaction.id()) {
            self.index = start;
        }
    }
}
