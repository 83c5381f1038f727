/*!
# Optwalk: Parser.

This is where everything comes together: the cursor walks the arguments
left-to-right, each token is classified, keys are looked up in the index and
handed — with any values they're entitled to — to the [`Handler`].

The walk ends the moment any handler method breaks, when the first plain
token or `--` turns up (at which point everything left goes to
[`Handler::positional`]), or when the arguments run out.
*/

use crate::{
	accepts_value,
	classify,
	cursor::Cursor,
	INLINE_OPTIONS,
	OptionIndex,
	OptionSpec,
	OptwalkError,
	Scratch,
	TokenKind,
};
use std::{
	fmt,
	ops::ControlFlow,
};



/// # Flag: Skip First.
///
/// Discard the first argument — usually the program path — without looking
/// at it. Without this flag, the first argument is parsed like any other.
pub const FLAG_SKIP_FIRST: u8 =      0b0000_0001;

/// # Flag: Literal End.
///
/// Treat `--` as a plain token rather than an end-of-options marker. It still
/// stops option parsing — plain tokens always do — but is passed along to
/// [`Handler::positional`] with everything after it.
pub const FLAG_LITERAL_END: u8 =     0b0000_0010;

/// # Flag: Negative Values.
///
/// Allow dash-prefixed tokens whose second character is an ASCII digit, like
/// `-5` or `-0.5`, to be consumed as option values. Without this flag only
/// plain tokens are consumed, and `-5` would be parsed as a (probably
/// unknown) short key.
pub const FLAG_NEGATIVE_VALUES: u8 = 0b0000_0100;



/// # Handler.
///
/// This receives everything the [`Parser`] finds. Each method returns a
/// [`ControlFlow`]; `Continue` keeps the parse going, `Break` stops it
/// immediately and becomes the parse result.
///
/// The handler itself doubles as your state, so stash whatever you need in
/// `self`.
///
/// Argument slices passed to the handler are borrowed straight out of the
/// original vector; nothing is copied.
pub trait Handler<'a, Id, S> {
	/// # Break Value.
	type Break;

	/// # Matched Option.
	///
	/// `args` holds the values consumed for the option, which may be fewer
	/// than its limit. Options found in a bundle like `-abc` never consume
	/// values, so always get an empty slice.
	fn option(&mut self, id: Id, args: &'a [S]) -> ControlFlow<Self::Break>;

	/// # Unrecognized Option.
	fn unknown(&mut self, key: Unknown<'a>) -> ControlFlow<Self::Break>;

	/// # Positional Arguments.
	///
	/// This is called at most once, with everything from the first plain
	/// token (or after `--`) on. Whatever it returns is the parse result.
	fn positional(&mut self, args: &'a [S]) -> ControlFlow<Self::Break>;
}



#[derive(Debug, Clone, Copy, Eq, Hash, PartialEq)]
/// # Unrecognized Option.
///
/// This holds the offending short character or long key (sans dashes).
pub enum Unknown<'a> {
	/// # Short Key.
	Short(char),

	/// # Long Key.
	Long(&'a str),
}

impl fmt::Display for Unknown<'_> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Short(c) => write!(f, "-{c}"),
			Self::Long(s) => write!(f, "--{s}"),
		}
	}
}

impl Unknown<'_> {
	#[must_use]
	/// # Is Long?
	pub const fn is_long(&self) -> bool { matches!(self, Self::Long(_)) }
}



#[derive(Debug, Clone, Copy)]
/// # Parser.
///
/// A `Parser` pairs an option table with a handful of behavioral flags. It
/// holds no other state, so can be used for any number of (even nested)
/// parses.
///
/// ## Flags
///
/// | Flag | Effect |
/// | ---- | ------ |
/// | [`FLAG_SKIP_FIRST`] | Ignore the first argument. |
/// | [`FLAG_LITERAL_END`] | Treat `--` as a plain token. |
/// | [`FLAG_NEGATIVE_VALUES`] | Accept `-5`-style values. |
///
/// ## Examples
///
/// ```
/// use optwalk::{Handler, OptionSpec, Parser, Unknown, FLAG_SKIP_FIRST};
/// use std::ops::ControlFlow;
///
/// #[derive(Debug, Clone, Copy)]
/// enum Opt { Verbose, Jobs }
///
/// const OPTS: [OptionSpec<Opt>; 2] = [
///     OptionSpec::new(Opt::Verbose, Some('v'), Some("verbose"), 0),
///     OptionSpec::new(Opt::Jobs, Some('j'), Some("jobs"), 1),
/// ];
///
/// #[derive(Default)]
/// struct Settings {
///     verbose: bool,
///     jobs: usize,
///     files: Vec<String>,
/// }
///
/// impl<'a> Handler<'a, Opt, String> for Settings {
///     type Break = String;
///
///     fn option(&mut self, id: Opt, args: &'a [String]) -> ControlFlow<String> {
///         match (id, args) {
///             (Opt::Verbose, _) => { self.verbose = true; },
///             (Opt::Jobs, [n]) => match n.parse() {
///                 Ok(n) => { self.jobs = n; },
///                 Err(_) => return ControlFlow::Break(format!("Bad jobs: {n}")),
///             },
///             (Opt::Jobs, _) => return ControlFlow::Break("Missing jobs.".to_owned()),
///         }
///         ControlFlow::Continue(())
///     }
///
///     fn unknown(&mut self, key: Unknown<'a>) -> ControlFlow<String> {
///         ControlFlow::Break(format!("Unknown option: {key}"))
///     }
///
///     fn positional(&mut self, args: &'a [String]) -> ControlFlow<String> {
///         self.files.extend_from_slice(args);
///         ControlFlow::Continue(())
///     }
/// }
///
/// let args: Vec<String> = ["app", "-v", "--jobs", "4", "a.txt", "-b.txt"]
///     .into_iter()
///     .map(String::from)
///     .collect();
///
/// let mut settings = Settings::default();
/// let res = Parser::new(&OPTS, FLAG_SKIP_FIRST).parse(&args, &mut settings);
/// assert_eq!(res, Ok(ControlFlow::Continue(())));
/// assert!(settings.verbose);
/// assert_eq!(settings.jobs, 4);
/// assert_eq!(settings.files, ["a.txt", "-b.txt"]);
/// ```
pub struct Parser<'t, Id> {
	/// # Option Table.
	specs: &'t [OptionSpec<Id>],

	/// # Flags.
	flags: u8,
}

impl<'t, Id> Parser<'t, Id> {
	#[must_use]
	/// # New.
	pub const fn new(specs: &'t [OptionSpec<Id>], flags: u8) -> Self {
		Self { specs, flags }
	}

	#[must_use]
	/// # Option Table.
	pub const fn specs(&self) -> &'t [OptionSpec<Id>] { self.specs }

	#[must_use]
	/// # Flags.
	pub const fn flags(&self) -> u8 { self.flags }
}

impl<Id: Copy> Parser<'_, Id> {
	/// # Parse.
	///
	/// Walk `args`, feeding everything of interest to `handler`. The option
	/// index is built in stack buffers, so tables may contain at most
	/// [`INLINE_OPTIONS`] entries; use [`Parser::parse_in`] for anything
	/// bigger.
	///
	/// The result is whatever the handler broke with, or `Continue` if it
	/// never did.
	///
	/// ## Errors
	///
	/// This will return an error — before calling any handler methods — if
	/// the option table is too big or contains duplicate keys. Such tables
	/// are rejected outright rather than truncated or parsed with an
	/// arbitrary winner among the duplicates.
	pub fn parse<'a, S, H>(&self, args: &'a [S], handler: &mut H)
	-> Result<ControlFlow<H::Break>, OptwalkError>
	where S: AsRef<str>, H: Handler<'a, Id, S> {
		let mut short = [0_usize; INLINE_OPTIONS];
		let mut long = [0_usize; INLINE_OPTIONS];
		self.parse_in(&mut Scratch::new(&mut short, &mut long), args, handler)
	}

	/// # Parse (Custom Scratch).
	///
	/// Same as [`Parser::parse`], but with the option index built in
	/// caller-supplied buffers.
	///
	/// ## Errors
	///
	/// This will return an error — before calling any handler methods — if
	/// the option table is bigger than the scratch or contains duplicate
	/// keys.
	pub fn parse_in<'a, S, H>(
		&self,
		scratch: &mut Scratch<'_>,
		args: &'a [S],
		handler: &mut H,
	) -> Result<ControlFlow<H::Break>, OptwalkError>
	where S: AsRef<str>, H: Handler<'a, Id, S> {
		let index = OptionIndex::build(self.specs, scratch)?;
		let mut walk = Walk {
			cursor: Cursor::new(args),
			index: &index,
			flags: self.flags,
		};

		let res = walk.run(handler);
		if res.is_break() {
			tracing::debug!(pos = walk.cursor.pos(), "option parsing stopped early");
		}
		Ok(res)
	}
}



/// # Walk State.
///
/// Everything a single parse needs, living entirely on its own stack frame.
struct Walk<'a, 'i, Id, S> {
	/// # Arguments.
	cursor: Cursor<'a, S>,

	/// # Option Index.
	index: &'i OptionIndex<'i, Id>,

	/// # Flags.
	flags: u8,
}

impl<'a, Id: Copy, S: AsRef<str>> Walk<'a, '_, Id, S> {
	/// # Run.
	fn run<H>(&mut self, handler: &mut H) -> ControlFlow<H::Break>
	where H: Handler<'a, Id, S> {
		if FLAG_SKIP_FIRST == self.flags & FLAG_SKIP_FIRST {
			// The program path, most likely.
			self.cursor.take();
		}

		while let Some(token) = self.cursor.take() {
			let token = token.as_ref();
			let kind = classify(token);
			tracing::trace!(token, ?kind, "classified argument");

			match kind {
				TokenKind::End if 0 == self.flags & FLAG_LITERAL_END =>
					return handler.positional(self.cursor.rest()),
				TokenKind::Plain | TokenKind::End => {
					self.cursor.put_back();
					return handler.positional(self.cursor.rest());
				},
				TokenKind::Short(cluster) => self.read_short(cluster, handler)?,
				TokenKind::Long(key) => self.read_long(key, handler)?,
			}
		}

		ControlFlow::Continue(())
	}

	/// # Read Short Cluster.
	///
	/// Keys are matched one character at a time. Only a lone key can consume
	/// values; bundled keys get an empty slice no matter their limit.
	fn read_short<H>(&mut self, cluster: &'a str, handler: &mut H)
	-> ControlFlow<H::Break>
	where H: Handler<'a, Id, S> {
		let index = self.index;
		let bundled = cluster.chars().nth(1).is_some();
		for c in cluster.chars() {
			match index.find_short(c) {
				Some((_, spec)) if bundled => handler.option(spec.id(), &[])?,
				Some((_, spec)) => self.dispatch(spec, handler)?,
				None => {
					tracing::debug!(key = %c, "unrecognized short option");
					handler.unknown(Unknown::Short(c))?;
				},
			}
		}

		ControlFlow::Continue(())
	}

	/// # Read Long Key.
	fn read_long<H>(&mut self, key: &'a str, handler: &mut H)
	-> ControlFlow<H::Break>
	where H: Handler<'a, Id, S> {
		if let Some((_, spec)) = self.index.find_long(key) {
			self.dispatch(spec, handler)
		}
		else {
			tracing::debug!(key, "unrecognized long option");
			handler.unknown(Unknown::Long(key))
		}
	}

	/// # Dispatch.
	///
	/// Greedily take up to `max_args` consumable values, then pass the spec
	/// and values along to the handler. The first unconsumable token is put
	/// back for the main loop.
	///
	/// With [`FLAG_LITERAL_END`], `--` is plain, and so consumable like any
	/// other plain token.
	fn dispatch<H>(&mut self, spec: &OptionSpec<Id>, handler: &mut H)
	-> ControlFlow<H::Break>
	where H: Handler<'a, Id, S> {
		let negative = FLAG_NEGATIVE_VALUES == self.flags & FLAG_NEGATIVE_VALUES;
		let literal_end = FLAG_LITERAL_END == self.flags & FLAG_LITERAL_END;
		let start = self.cursor.pos();
		let mut taken = 0;
		while taken < spec.max_args() {
			let Some(next) = self.cursor.take() else { break; };
			let next = next.as_ref();
			if ! (accepts_value(next, negative) || (literal_end && next == "--")) {
				self.cursor.put_back();
				break;
			}
			taken += 1;
		}

		tracing::trace!(taken, max = spec.max_args(), "dispatching option");
		handler.option(spec.id(), self.cursor.since(start))
	}
}
