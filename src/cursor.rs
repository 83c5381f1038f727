/*!
# Optwalk: Argument Cursor.
*/



#[derive(Debug)]
/// # Argument Cursor.
///
/// A forward-only view over the argument vector with exactly one step of
/// lookback: whatever was last taken can be put back, but nothing earlier.
pub(crate) struct Cursor<'a, S> {
	/// # Arguments.
	args: &'a [S],

	/// # Next Position.
	pos: usize,
}

impl<'a, S> Cursor<'a, S> {
	/// # New.
	pub(crate) const fn new(args: &'a [S]) -> Self {
		Self { args, pos: 0 }
	}

	/// # Take.
	///
	/// Return the next argument and advance, or `None` if there isn't one.
	pub(crate) fn take(&mut self) -> Option<&'a S> {
		let args = self.args;
		let next = args.get(self.pos)?;
		self.pos += 1;
		Some(next)
	}

	/// # Put Back.
	///
	/// Undo the most recent [`Cursor::take`].
	pub(crate) fn put_back(&mut self) {
		debug_assert!(0 < self.pos, "Nothing to put back.");
		self.pos = self.pos.saturating_sub(1);
	}

	/// # Position.
	pub(crate) const fn pos(&self) -> usize { self.pos }

	/// # Slice Since.
	///
	/// Return the arguments taken since position `from`.
	pub(crate) fn since(&self, from: usize) -> &'a [S] {
		let args = self.args;
		&args[from..self.pos]
	}

	/// # Remaining Arguments.
	pub(crate) fn rest(&self) -> &'a [S] {
		let args = self.args;
		&args[self.pos..]
	}
}
