/// An add-only arena owning the source text of parsed documents.
///
/// All spans in a parsed tree borrow from a string stored here, so the arena
/// must outlive every tree attached to it. One arena per format call is the
/// expected usage; the whole allocation is reclaimed when it is dropped.
pub struct SourceArena(bumpalo::Bump);
impl SourceArena {
    /// Creates a new, empty arena.
    #[must_use]
    pub fn new() -> Self {
        Self(bumpalo::Bump::new())
    }

    /// Copies a string into the arena and returns a reference to it.
    /// The resulting string lives for the lifetime of the arena.
    ///
    /// # Panics
    /// Will panic if memory allocation fails. Use `try_alloc` for a non-panicking version.
    pub fn alloc(&self, source: impl AsRef<str>) -> &'_ str {
        self.0.alloc_str(source.as_ref())
    }

    /// Copies a string into the arena and returns a reference to it.
    /// The resulting string lives for the lifetime of the arena.
    ///
    /// # Errors
    /// Will return an error if memory allocation fails.
    pub fn try_alloc(&self, source: impl AsRef<str>) -> Result<&'_ str, bumpalo::AllocErr> {
        self.0.try_alloc_str(source.as_ref()).map(|s| &*s)
    }

    /// Returns the number of bytes held by the arena.
    /// May include padding, so this can exceed the sum of all stored string lengths.
    pub fn size(&self) -> usize {
        self.0.allocated_bytes()
    }
}
impl Default for SourceArena {
    fn default() -> Self {
        Self::new()
    }
}
