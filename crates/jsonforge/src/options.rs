/// Configuration options for a single parse call.
///
/// The flags are independent; combine them with struct update syntax.
///
/// # Examples
///
/// ```rust
/// use jsonforge::ParserOptions;
///
/// let options = ParserOptions {
///     allow_fragments: true,
///     ..Default::default()
/// };
/// ```
///
/// # Default
///
/// All options default to `false`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ParserOptions {
    /// Whether to omit null-valued array elements and object members from the
    /// collections handed to the construction callbacks.
    ///
    /// The null values are still parsed and still count toward separator
    /// rules; they are only dropped from the emitted sequence.
    ///
    /// # Default
    ///
    /// `false`
    pub skip_null: bool,

    /// Whether to permit a bare scalar (string, number, boolean, or null) as
    /// the complete document.
    ///
    /// By default only an object or array may stand alone at the root; a
    /// scalar root fails with [`Reason::FragmentedJson`].
    ///
    /// [`Reason::FragmentedJson`]: crate::Reason::FragmentedJson
    ///
    /// # Default
    ///
    /// `false`
    pub allow_fragments: bool,
}
