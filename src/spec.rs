/*!
# Optwalk: Option Specification.
*/



/// # No Value Limit.
///
/// Use this as an [`OptionSpec`]'s `max_args` to have it gobble up every
/// consumable value that follows.
pub const UNBOUNDED: usize = usize::MAX;



#[derive(Debug, Clone, Copy, Eq, Hash, PartialEq)]
/// # Option Specification.
///
/// This describes a single recognized option: its short and/or long key, the
/// maximum number of values it may consume, and the caller-defined `Id`
/// passed back to [`Handler::option`](crate::Handler::option) when it matches.
///
/// Options sharing one handler are told apart by their `Id`, so a fieldless
/// enum works nicely; use `usize` if you'd rather just have table positions.
///
/// ## Keys
///
/// A short key must be a printable, non-whitespace character; a long key must
/// be non-empty. Keys failing those checks are ignored (which can leave an
/// option unreachable). Keys are written _without_ their dashes.
///
/// ## Examples
///
/// ```
/// use optwalk::{OptionSpec, UNBOUNDED};
///
/// #[derive(Debug, Clone, Copy, Eq, PartialEq)]
/// enum Opt { Help, Jobs, Files }
///
/// // Tables can be const…
/// const OPTS: [OptionSpec<Opt>; 3] = [
///     OptionSpec::new(Opt::Help, Some('h'), Some("help"), 0),
///     OptionSpec::new(Opt::Jobs, Some('j'), Some("jobs"), 1),
///     OptionSpec::new(Opt::Files, None, Some("files"), UNBOUNDED),
/// ];
///
/// // …or built.
/// let jobs = OptionSpec::flag(Opt::Jobs).with_short('j').with_long("jobs").with_args(1);
/// assert_eq!(OPTS[1], jobs);
/// ```
pub struct OptionSpec<Id> {
	/// # Short Key.
	pub(crate) short: Option<char>,

	/// # Long Key.
	pub(crate) long: Option<&'static str>,

	/// # Value Limit.
	pub(crate) max_args: usize,

	/// # Identifier.
	pub(crate) id: Id,
}

impl<Id> OptionSpec<Id> {
	#[must_use]
	/// # New.
	pub const fn new(
		id: Id,
		short: Option<char>,
		long: Option<&'static str>,
		max_args: usize,
	) -> Self {
		Self { short, long, max_args, id }
	}

	#[must_use]
	/// # New Flag.
	///
	/// Return a keyless, valueless spec, to be fleshed out with the `with_*`
	/// methods.
	pub const fn flag(id: Id) -> Self {
		Self {
			short: None,
			long: None,
			max_args: 0,
			id,
		}
	}

	#[must_use]
	/// # With Short Key.
	pub fn with_short(mut self, key: char) -> Self {
		self.short = Some(key);
		self
	}

	#[must_use]
	/// # With Long Key.
	pub fn with_long(mut self, key: &'static str) -> Self {
		self.long = Some(key);
		self
	}

	#[must_use]
	/// # With Value Limit.
	pub fn with_args(mut self, max: usize) -> Self {
		self.max_args = max;
		self
	}

	#[must_use]
	/// # Unbounded.
	///
	/// Same as `with_args(UNBOUNDED)`.
	pub fn unbounded(self) -> Self { self.with_args(UNBOUNDED) }
}

impl<Id: Copy> OptionSpec<Id> {
	#[must_use]
	/// # Identifier.
	pub const fn id(&self) -> Id { self.id }
}

impl<Id> OptionSpec<Id> {
	#[must_use]
	/// # Usable Short Key.
	///
	/// Return the short key if it is one the parser can actually match.
	pub fn short(&self) -> Option<char> {
		self.short.filter(|c| valid_short(*c))
	}

	#[must_use]
	/// # Usable Long Key.
	pub fn long(&self) -> Option<&'static str> {
		self.long.filter(|s| ! s.is_empty())
	}

	#[must_use]
	/// # Value Limit.
	pub const fn max_args(&self) -> usize { self.max_args }
}



/// # Valid Short Key?
fn valid_short(c: char) -> bool { ! c.is_control() && ! c.is_whitespace() }
