//! Label slots, one per item index.

use alloc::{vec, vec::Vec};
use core::fmt;

use heapless::String;

/// Maximum byte length of a category display name.
pub const CATEGORY_NAME_BYTES: usize = 32;

/// Which of the two categories a decision points at.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Side {
    /// Category 0.
    Left,
    /// Category 1.
    Right,
}

/// Current classification of one item.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub enum Label {
    #[default]
    Unlabeled,
    Category(Side),
}

/// Read or write outside `[0, len)`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct IndexOutOfRange {
    pub index: usize,
    pub len: usize,
}

impl fmt::Display for IndexOutOfRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "label index {} out of range for {} items",
            self.index, self.len
        )
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum CategoryError {
    Empty,
    TooLong { len: usize },
    Duplicate,
}

impl fmt::Display for CategoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("category name is empty"),
            Self::TooLong { len } => write!(
                f,
                "category name is {len} bytes, limit is {CATEGORY_NAME_BYTES}"
            ),
            Self::Duplicate => f.write_str("both categories share the same name"),
        }
    }
}

/// Display names of the two categories, in `[Left, Right]` order.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Categories {
    left: String<CATEGORY_NAME_BYTES>,
    right: String<CATEGORY_NAME_BYTES>,
}

impl Categories {
    pub fn new(left: &str, right: &str) -> Result<Self, CategoryError> {
        if left == right {
            return Err(CategoryError::Duplicate);
        }

        Ok(Self {
            left: category_name(left)?,
            right: category_name(right)?,
        })
    }

    pub fn name(&self, side: Side) -> &str {
        match side {
            Side::Left => self.left.as_str(),
            Side::Right => self.right.as_str(),
        }
    }

    /// Display text of a label; unlabeled items render as the empty string.
    pub fn text(&self, label: Label) -> &str {
        match label {
            Label::Unlabeled => "",
            Label::Category(side) => self.name(side),
        }
    }

    /// Parses a display string back into a label.
    ///
    /// The empty string is [`Label::Unlabeled`]; unknown names yield `None`.
    pub fn label_for(&self, text: &str) -> Option<Label> {
        if text.is_empty() {
            Some(Label::Unlabeled)
        } else if text == self.left.as_str() {
            Some(Label::Category(Side::Left))
        } else if text == self.right.as_str() {
            Some(Label::Category(Side::Right))
        } else {
            None
        }
    }
}

impl Default for Categories {
    fn default() -> Self {
        let mut left = String::new();
        let mut right = String::new();
        let _ = left.push_str("Left");
        let _ = right.push_str("Right");
        Self { left, right }
    }
}

fn category_name(name: &str) -> Result<String<CATEGORY_NAME_BYTES>, CategoryError> {
    if name.trim().is_empty() {
        return Err(CategoryError::Empty);
    }

    let mut out = String::new();
    out.push_str(name)
        .map_err(|_| CategoryError::TooLong { len: name.len() })?;
    Ok(out)
}

/// Per-category counts over a [`LabelStore`].
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct LabelTally {
    pub left: usize,
    pub right: usize,
    pub unlabeled: usize,
}

/// Fixed-length sequence of labels, one slot per item index.
///
/// The length is set at construction and never changes. Writes overwrite the
/// previous value unconditionally.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LabelStore {
    slots: Vec<Label>,
}

impl LabelStore {
    pub fn new(len: usize) -> Self {
        Self {
            slots: vec![Label::Unlabeled; len],
        }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn set(&mut self, index: usize, label: Label) -> Result<(), IndexOutOfRange> {
        let len = self.slots.len();
        let slot = self
            .slots
            .get_mut(index)
            .ok_or(IndexOutOfRange { index, len })?;
        *slot = label;
        Ok(())
    }

    pub fn get(&self, index: usize) -> Result<Label, IndexOutOfRange> {
        self.slots.get(index).copied().ok_or(IndexOutOfRange {
            index,
            len: self.slots.len(),
        })
    }

    pub fn iter(&self) -> impl Iterator<Item = Label> + '_ {
        self.slots.iter().copied()
    }

    pub fn tally(&self) -> LabelTally {
        self.iter().fold(LabelTally::default(), |mut tally, label| {
            match label {
                Label::Unlabeled => tally.unlabeled += 1,
                Label::Category(Side::Left) => tally.left += 1,
                Label::Category(Side::Right) => tally.right += 1,
            }
            tally
        })
    }
}
