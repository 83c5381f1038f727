/*!
# Optwalk: Errors.

These only cover problems with the option _table_. Anything the user types
on the command line — unknown keys, missing values, etc. — is routed to the
[`Handler`](crate::Handler) instead.
*/



#[derive(Debug, Clone, Copy, Eq, PartialEq, thiserror::Error)]
/// # Error!
pub enum OptwalkError {
	/// # Duplicate Long Key.
	#[error("Duplicate long key: --{0}")]
	DuplicateLong(&'static str),

	/// # Duplicate Short Key.
	#[error("Duplicate short key: -{0}")]
	DuplicateShort(char),

	/// # Too Many Options.
	///
	/// The table has more entries than the lookup buffers can hold.
	#[error("Too many options: {options} (capacity {capacity})")]
	TooManyOptions {
		/// # Table Length.
		options: usize,

		/// # Buffer Length.
		capacity: usize,
	},
}

impl OptwalkError {
	#[must_use]
	/// # As String Slice.
	pub const fn as_str(&self) -> &'static str {
		match self {
			Self::DuplicateLong(_) => "Duplicate long key.",
			Self::DuplicateShort(_) => "Duplicate short key.",
			Self::TooManyOptions { .. } => "Too many options.",
		}
	}
}



#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn t_display() {
		assert_eq!(
			OptwalkError::DuplicateLong("help").to_string(),
			"Duplicate long key: --help",
		);
		assert_eq!(
			OptwalkError::DuplicateShort('h').to_string(),
			"Duplicate short key: -h",
		);
		assert_eq!(
			OptwalkError::TooManyOptions { options: 70, capacity: 64 }.to_string(),
			"Too many options: 70 (capacity 64)",
		);
		assert_eq!(OptwalkError::DuplicateShort('x').as_str(), "Duplicate short key.");
	}
}
