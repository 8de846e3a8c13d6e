use core::fmt;
use core::ops::Deref;

use super::limits::{CONTENT_CAPACITY, LINE_CAPACITY, NAME_CAPACITY, PATH_CAPACITY};

/// A UTF-8 string stored inline with a fixed byte capacity.
///
/// Anything pushed past the capacity is dropped, never split mid-character.
#[derive(Clone, Copy)]
pub struct BoundedStr<const N: usize> {
    buf: [u8; N],
    len: usize,
}

/// Name of a file or directory.
pub type Name = BoundedStr<NAME_CAPACITY>;
/// One line of console input.
pub type Line = BoundedStr<LINE_CAPACITY>;
/// A rendered path or path prefix.
pub type PathBuf = BoundedStr<PATH_CAPACITY>;

impl<const N: usize> BoundedStr<N> {
    pub const fn new() -> Self {
        BoundedStr { buf: [0; N], len: 0 }
    }

    /// Build from a literal in a constant context. `s` has to fit.
    pub const fn literal(s: &str) -> Self {
        let bytes = s.as_bytes();
        assert!(bytes.len() <= N, "literal exceeds capacity");
        let mut buf = [0; N];
        let mut i = 0;
        while i < bytes.len() {
            buf[i] = bytes[i];
            i += 1;
        }
        BoundedStr { buf, len: bytes.len() }
    }

    /// Build from `s`, keeping the longest prefix that fits.
    pub fn truncated(s: &str) -> Self {
        let mut out = Self::new();
        out.push_str(s);
        out
    }

    /// Append as much of `s` as fits. Returns the number of bytes taken.
    pub fn push_str(&mut self, s: &str) -> usize {
        let mut take = s.len().min(N - self.len);
        while !s.is_char_boundary(take) {
            take -= 1;
        }
        self.buf[self.len..self.len + take].copy_from_slice(&s.as_bytes()[..take]);
        self.len += take;
        take
    }

    /// Append one character. Returns false if it does not fit.
    pub fn push(&mut self, c: char) -> bool {
        let mut tmp = [0u8; 4];
        let encoded = c.encode_utf8(&mut tmp);
        if encoded.len() > N - self.len {
            return false;
        }
        self.push_str(encoded);
        true
    }

    pub fn pop(&mut self) -> Option<char> {
        let c = self.as_str().chars().next_back()?;
        self.len -= c.len_utf8();
        Some(c)
    }

    pub fn clear(&mut self) {
        self.len = 0;
    }

    pub fn is_full(&self) -> bool {
        self.len == N
    }

    pub fn as_str(&self) -> &str {
        // Only whole characters are ever copied in.
        core::str::from_utf8(&self.buf[..self.len]).unwrap_or("")
    }
}

impl<const N: usize> Default for BoundedStr<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> Deref for BoundedStr<N> {
    type Target = str;

    fn deref(&self) -> &str {
        self.as_str()
    }
}

impl<const N: usize> PartialEq for BoundedStr<N> {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl<const N: usize> Eq for BoundedStr<N> {}

impl<const N: usize> PartialEq<str> for BoundedStr<N> {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl<const N: usize> PartialEq<&str> for BoundedStr<N> {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl<const N: usize> fmt::Display for BoundedStr<N> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<const N: usize> fmt::Debug for BoundedStr<N> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Debug::fmt(self.as_str(), f)
    }
}

/// Silently truncating, so `write!` into a full buffer still succeeds.
impl<const N: usize> fmt::Write for BoundedStr<N> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.push_str(s);
        Ok(())
    }
}

/// Byte content of a file, capped at [`CONTENT_CAPACITY`].
#[derive(Clone)]
pub struct Content {
    bytes: [u8; CONTENT_CAPACITY],
    len: usize,
}

impl Content {
    pub const EMPTY: Content = Content {
        bytes: [0; CONTENT_CAPACITY],
        len: 0,
    };

    pub fn from_bytes(data: &[u8]) -> Self {
        let mut content = Self::EMPTY;
        content.append(data);
        content
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len]
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_full(&self) -> bool {
        self.len == CONTENT_CAPACITY
    }

    pub fn clear(&mut self) {
        self.len = 0;
    }

    /// Append `data`, dropping whatever exceeds the capacity.
    /// Returns the number of bytes stored.
    pub fn append(&mut self, data: &[u8]) -> usize {
        let take = data.len().min(CONTENT_CAPACITY - self.len);
        self.bytes[self.len..self.len + take].copy_from_slice(&data[..take]);
        self.len += take;
        take
    }

    /// Replace the whole content with `data`, truncated to capacity.
    pub fn replace(&mut self, data: &[u8]) -> usize {
        self.clear();
        self.append(data)
    }
}

impl fmt::Debug for Content {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Content").field("len", &self.len).finish()
    }
}
