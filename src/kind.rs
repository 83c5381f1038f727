/*!
# Optwalk: Token Kind.
*/



#[derive(Debug, Clone, Copy, Eq, Hash, PartialEq)]
/// # Token Kind.
///
/// This enum is used to differentiate between the types of raw CLI arguments
/// the [`Parser`](crate::Parser) might encounter.
///
/// Classification is deliberately dumb, and works as follows:
/// * If a token is exactly `--`, it is the end-of-options marker.
/// * If a token begins with `--` and has anything after it, it is a long key.
/// * If a token begins with a single `-` and has anything after it, it is a short cluster.
/// * Everything else — including `""` and a lone `-` — is plain.
///
/// The key variants hold everything _after_ the dash(es).
pub enum TokenKind<'a> {
	/// # Not a Key.
	Plain,

	/// # End of Options (`--`).
	End,

	/// # Short Cluster.
	///
	/// One or more single-character keys smooshed together, e.g. `abc` for
	/// `-abc`.
	Short(&'a str),

	/// # Long Key.
	Long(&'a str),
}

impl<'a> From<&'a str> for TokenKind<'a> {
	#[inline]
	fn from(src: &'a str) -> Self { classify(src) }
}

impl TokenKind<'_> {
	#[must_use]
	/// # Is Plain?
	pub const fn is_plain(&self) -> bool { matches!(self, Self::Plain) }
}



#[must_use]
/// # Classify Token.
///
/// Figure out what kind of thing `token` is. See [`TokenKind`] for the rules.
///
/// ## Examples
///
/// ```
/// use optwalk::{classify, TokenKind};
///
/// assert_eq!(classify("-"), TokenKind::Plain);
/// assert_eq!(classify("--"), TokenKind::End);
/// assert_eq!(classify("-abc"), TokenKind::Short("abc"));
/// assert_eq!(classify("--help"), TokenKind::Long("help"));
/// ```
pub fn classify(token: &str) -> TokenKind<'_> {
	match token.as_bytes() {
		[b'-', b'-'] => TokenKind::End,
		[b'-', b'-', _, ..] => TokenKind::Long(&token[2..]),
		[b'-', _, ..] => TokenKind::Short(&token[1..]),
		_ => TokenKind::Plain,
	}
}

#[must_use]
/// # Consumable Value?
///
/// Returns `true` if `token` may be taken as a value for the preceding key.
///
/// Plain tokens always qualify. When `negative` is set, short clusters
/// beginning with an ASCII digit — `-5`, `-0.25` — qualify too.
pub fn accepts_value(token: &str, negative: bool) -> bool {
	match classify(token) {
		TokenKind::Plain => true,
		TokenKind::Short(s) => negative && s.as_bytes()[0].is_ascii_digit(),
		TokenKind::End | TokenKind::Long(_) => false,
	}
}
