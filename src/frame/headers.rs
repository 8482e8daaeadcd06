/// Transport headers of a call frame, in arrival order.
///
/// Keys are arbitrary byte strings and may repeat; [`Headers::get`] resolves
/// duplicates by returning the value that arrived last. Both keys and values
/// borrow from the frame buffer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Headers<'a> {
    pairs: Vec<(&'a [u8], &'a [u8])>,
}

impl<'a> Headers<'a> {
    pub fn new() -> Self {
        Self { pairs: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            pairs: Vec::with_capacity(capacity),
        }
    }

    pub(crate) fn push(&mut self, key: &'a [u8], value: &'a [u8]) {
        self.pairs.push((key, value));
    }

    /// Number of pairs as they appeared on the wire, duplicates included.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Looks up `key`; with duplicate keys the last one wins.
    pub fn get(&self, key: impl AsRef<[u8]>) -> Option<&'a [u8]> {
        let key = key.as_ref();
        self.pairs
            .iter()
            .rev()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| *v)
    }

    /// Every value recorded for `key`, in arrival order.
    pub fn get_all<'s>(&'s self, key: &'s [u8]) -> impl Iterator<Item = &'a [u8]> + 's {
        self.pairs
            .iter()
            .filter(move |(k, _)| *k == key)
            .map(|(_, v)| *v)
    }

    pub fn contains_key(&self, key: impl AsRef<[u8]>) -> bool {
        self.get(key).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'a [u8], &'a [u8])> + '_ {
        self.pairs.iter().copied()
    }
}

impl<'a, 'h> IntoIterator for &'h Headers<'a> {
    type Item = (&'a [u8], &'a [u8]);
    type IntoIter = std::iter::Copied<std::slice::Iter<'h, (&'a [u8], &'a [u8])>>;

    fn into_iter(self) -> Self::IntoIter {
        self.pairs.iter().copied()
    }
}
