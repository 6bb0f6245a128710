//! Generic longest-common-subsequence aligner.
//!
//! Both line-level and word-level diffs run through [`align`]. The backtrack
//! tie-break (unchanged, then added, then removed, walking backwards) makes a
//! replaced element come out as a removal immediately followed by an
//! addition, which is what the line composer pairs into modifications.

/// One step of an edit script, indexing into the two input sequences.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Edit {
    /// `old[old_index]` and `new[new_index]` are equal and kept.
    Unchanged { old_index: usize, new_index: usize },
    /// `new[new_index]` was inserted.
    Added { new_index: usize },
    /// `old[old_index]` was deleted.
    Removed { old_index: usize },
}

impl Edit {
    pub fn old_index(&self) -> Option<usize> {
        match *self {
            Edit::Unchanged { old_index, .. } | Edit::Removed { old_index } => Some(old_index),
            Edit::Added { .. } => None,
        }
    }

    pub fn new_index(&self) -> Option<usize> {
        match *self {
            Edit::Unchanged { new_index, .. } | Edit::Added { new_index } => Some(new_index),
            Edit::Removed { .. } => None,
        }
    }
}

/// LCS length table over two sequences, `(old.len() + 1) x (new.len() + 1)`.
struct LcsTable {
    width: usize,
    cells: Vec<u32>,
}

impl LcsTable {
    fn build<T, F>(old: &[T], new: &[T], eq: &F) -> Self
    where
        F: Fn(&T, &T) -> bool,
    {
        let width = new.len() + 1;
        let mut table = Self {
            width,
            cells: vec![0; (old.len() + 1) * width],
        };
        for i in 1..=old.len() {
            for j in 1..=new.len() {
                let value = if eq(&old[i - 1], &new[j - 1]) {
                    table.get(i - 1, j - 1) + 1
                } else {
                    table.get(i - 1, j).max(table.get(i, j - 1))
                };
                table.cells[i * width + j] = value;
            }
        }
        table
    }

    fn get(&self, i: usize, j: usize) -> u32 {
        self.cells[i * self.width + j]
    }
}

/// Align two sequences and return the edit script in left-to-right order.
///
/// `eq` decides element equality (line text for lines, exact token match for
/// words). Runs in O(m·n) time and space; meant for scene-sized inputs.
pub fn align<T, F>(old: &[T], new: &[T], eq: F) -> Vec<Edit>
where
    F: Fn(&T, &T) -> bool,
{
    let table = LcsTable::build(old, new, &eq);
    let mut edits = Vec::with_capacity(old.len().max(new.len()));
    let (mut i, mut j) = (old.len(), new.len());

    while i > 0 || j > 0 {
        if i > 0 && j > 0 && eq(&old[i - 1], &new[j - 1]) {
            edits.push(Edit::Unchanged {
                old_index: i - 1,
                new_index: j - 1,
            });
            i -= 1;
            j -= 1;
        } else if j > 0 && (i == 0 || table.get(i, j - 1) >= table.get(i - 1, j)) {
            edits.push(Edit::Added { new_index: j - 1 });
            j -= 1;
        } else {
            edits.push(Edit::Removed { old_index: i - 1 });
            i -= 1;
        }
    }

    edits.reverse();
    edits
}

/// [`align`] using `PartialEq`.
pub fn align_eq<T: PartialEq>(old: &[T], new: &[T]) -> Vec<Edit> {
    align(old, new, |a, b| a == b)
}

/// Length of the longest common subsequence under `eq`.
pub fn lcs_len<T, F>(old: &[T], new: &[T], eq: F) -> usize
where
    F: Fn(&T, &T) -> bool,
{
    LcsTable::build(old, new, &eq).get(old.len(), new.len()) as usize
}
