/*!
# Optwalk: Option Index.

Key lookups are binary searches against two sorted lists of table positions,
one ordered by short key and one by long key. The lists live in caller-owned
buffers — see [`Scratch`] — so building and searching never touch the heap.
*/

use crate::{
	OptionSpec,
	OptwalkError,
};
use std::cmp::Ordering;



/// # Inline Capacity.
///
/// The largest option table [`Parser::parse`](crate::Parser::parse) can index
/// using its own stack buffers. Bigger tables need
/// [`Parser::parse_in`](crate::Parser::parse_in) and a roomier [`Scratch`].
pub const INLINE_OPTIONS: usize = 64;



#[derive(Debug)]
/// # Scratch Buffers.
///
/// This holds the two buffers an [`OptionIndex`] is built in. Each must have
/// room for one entry per option. Where they live — the stack, an arena, a
/// `Vec` — is up to you.
///
/// A `Scratch` can be reused for any number of parses; each one overwrites
/// whatever was there before.
///
/// ## Examples
///
/// ```
/// use optwalk::Scratch;
///
/// // Two separate buffers.
/// let mut a = [0_usize; 8];
/// let mut b = [0_usize; 8];
/// assert_eq!(Scratch::new(&mut a, &mut b).capacity(), 8);
///
/// // One buffer, split down the middle.
/// let mut buf = vec![0_usize; 200];
/// assert_eq!(Scratch::split(&mut buf).capacity(), 100);
/// ```
pub struct Scratch<'b> {
	/// # Short Buffer.
	short: &'b mut [usize],

	/// # Long Buffer.
	long: &'b mut [usize],
}

impl<'b> Scratch<'b> {
	#[must_use]
	/// # New.
	pub fn new(short: &'b mut [usize], long: &'b mut [usize]) -> Self {
		Self { short, long }
	}

	#[must_use]
	/// # Split.
	///
	/// Divide a single buffer into two equal halves. If the length is odd,
	/// the last slot goes unused.
	pub fn split(buf: &'b mut [usize]) -> Self {
		let half = buf.len() / 2;
		let (short, rest) = buf.split_at_mut(half);
		Self { short, long: &mut rest[..half] }
	}

	#[must_use]
	/// # Capacity.
	///
	/// Return the maximum number of options this scratch can index.
	pub fn capacity(&self) -> usize {
		usize::min(self.short.len(), self.long.len())
	}
}



#[derive(Debug, Clone, Copy)]
/// # Option Index.
///
/// A short-lived lookup structure over an [`OptionSpec`] table, built fresh
/// for every parse and dropped at the end of it.
///
/// ## Examples
///
/// ```
/// use optwalk::{OptionIndex, OptionSpec, Scratch};
///
/// let specs = [
///     OptionSpec::new('v', Some('v'), Some("verbose"), 0),
///     OptionSpec::new('o', Some('o'), None, 1),
/// ];
/// let mut a = [0; 2];
/// let mut b = [0; 2];
/// let mut scratch = Scratch::new(&mut a, &mut b);
/// let index = OptionIndex::build(&specs, &mut scratch).unwrap();
///
/// assert_eq!(index.find_short('o').map(|(pos, _)| pos), Some(1));
/// assert_eq!(index.find_long("verbose").map(|(_, s)| s.id()), Some('v'));
/// assert!(index.find_long("o").is_none());
/// ```
pub struct OptionIndex<'a, Id> {
	/// # Table.
	specs: &'a [OptionSpec<Id>],

	/// # Positions Sorted by Short Key.
	short: &'a [usize],

	/// # Positions Sorted by Long Key.
	long: &'a [usize],
}

impl<'a, Id> OptionIndex<'a, Id> {
	/// # Build.
	///
	/// Sort the table's usable keys into `scratch`. Specs without any usable
	/// key are simply left out.
	///
	/// ## Errors
	///
	/// This will return an error if the table is bigger than the scratch
	/// capacity or declares the same short or long key more than once.
	pub fn build(specs: &'a [OptionSpec<Id>], scratch: &'a mut Scratch<'_>)
	-> Result<Self, OptwalkError> {
		let capacity = scratch.capacity();
		if capacity < specs.len() {
			return Err(OptwalkError::TooManyOptions { options: specs.len(), capacity });
		}

		let short_buf: &'a mut [usize] = &mut *scratch.short;
		let long_buf: &'a mut [usize] = &mut *scratch.long;
		let mut nshort = 0;
		let mut nlong = 0;
		for (i, spec) in specs.iter().enumerate() {
			if spec.short().is_some() {
				short_buf[nshort] = i;
				nshort += 1;
			}
			if spec.long().is_some() {
				long_buf[nlong] = i;
				nlong += 1;
			}
		}

		let short: &'a mut [usize] = &mut short_buf[..nshort];
		short.sort_unstable_by_key(|&i| specs[i].short());
		if let Some(w) = short.windows(2).find(|w| specs[w[0]].short() == specs[w[1]].short()) {
			if let Some(c) = specs[w[0]].short() {
				return Err(OptwalkError::DuplicateShort(c));
			}
		}

		let long: &'a mut [usize] = &mut long_buf[..nlong];
		long.sort_unstable_by_key(|&i| specs[i].long());
		if let Some(w) = long.windows(2).find(|w| specs[w[0]].long() == specs[w[1]].long()) {
			if let Some(s) = specs[w[0]].long() {
				return Err(OptwalkError::DuplicateLong(s));
			}
		}

		tracing::trace!(options = specs.len(), nshort, nlong, "built option index");
		Ok(Self { specs, short, long })
	}

	#[must_use]
	/// # Find Short.
	///
	/// Return the table position and spec for the short key `key`, if any.
	pub fn find_short(&self, key: char) -> Option<(usize, &'a OptionSpec<Id>)> {
		self.find(self.short, |s| s.short().cmp(&Some(key)))
	}

	#[must_use]
	/// # Find Long.
	///
	/// Return the table position and spec for the long key `key`, if any.
	/// Matches are exact; abbreviations are not considered.
	pub fn find_long(&self, key: &str) -> Option<(usize, &'a OptionSpec<Id>)> {
		self.find(self.long, |s| s.long().cmp(&Some(key)))
	}

	/// # Binary Search.
	fn find<F>(&self, sorted: &[usize], cmp: F) -> Option<(usize, &'a OptionSpec<Id>)>
	where F: Fn(&OptionSpec<Id>) -> Ordering {
		let specs = self.specs;
		let pos = sorted.binary_search_by(|&i| cmp(&specs[i])).ok()?;
		let i = sorted[pos];
		Some((i, &specs[i]))
	}
}



#[cfg(test)]
mod test {
	use super::*;
	use crate::UNBOUNDED;

	/// # Test Table.
	fn table() -> [OptionSpec<usize>; 6] {
		[
			OptionSpec::new(0, Some('z'), Some("zebra"), 0),
			OptionSpec::new(1, Some('a'), None, 1),
			OptionSpec::new(2, None, Some("apple"), UNBOUNDED),
			OptionSpec::new(3, Some('M'), Some("apples"), 2),
			OptionSpec::new(4, Some(' '), Some(""), 0), // Unreachable.
			OptionSpec::new(5, Some('ö'), Some("Björk"), 0),
		]
	}

	#[test]
	fn t_find() {
		let specs = table();
		let mut a = [0; INLINE_OPTIONS];
		let mut b = [0; INLINE_OPTIONS];
		let mut scratch = Scratch::new(&mut a, &mut b);
		let index = OptionIndex::build(&specs, &mut scratch).expect("Index failed.");

		// Every usable key should come back to its own spec.
		for (i, spec) in specs.iter().enumerate() {
			if let Some(c) = spec.short() {
				let found = index.find_short(c).expect("Missing short.");
				assert_eq!(found.0, i);
				assert_eq!(found.1, spec);
			}
			if let Some(s) = spec.long() {
				let found = index.find_long(s).expect("Missing long.");
				assert_eq!(found.0, i);
				assert_eq!(found.1, spec);
			}
		}

		// Everything else should miss.
		for c in [' ', 'b', 'm', 'Z', '-', '\0'] {
			assert!(index.find_short(c).is_none(), "Bug: found -{c}.");
		}
		for s in ["", "a", "appl", "applesauce", "Zebra", "bjork", "z"] {
			assert!(index.find_long(s).is_none(), "Bug: found --{s}.");
		}
	}

	#[test]
	fn t_sorted() {
		let specs = table();
		let mut buf = [0; 12];
		let mut scratch = Scratch::split(&mut buf);
		let index = OptionIndex::build(&specs, &mut scratch).expect("Index failed.");

		// Shorts are sorted by ordinal; the space is left out.
		assert_eq!(index.short, &[3, 1, 0, 5]);

		// Longs are sorted bytewise; the empty one is left out.
		assert_eq!(index.long, &[5, 2, 3, 0]);
	}

	#[test]
	fn t_capacity() {
		let specs = table();
		let mut a = [0; 6];
		let mut b = [0; 5];
		let mut scratch = Scratch::new(&mut a, &mut b);
		assert_eq!(scratch.capacity(), 5);
		assert_eq!(
			OptionIndex::build(&specs, &mut scratch).err(),
			Some(OptwalkError::TooManyOptions { options: 6, capacity: 5 }),
		);

		// Odd splits lose a slot.
		let mut buf = [0; 13];
		assert_eq!(Scratch::split(&mut buf).capacity(), 6);

		// An empty table is fine anywhere.
		let mut a: [usize; 0] = [];
		let mut b: [usize; 0] = [];
		let mut scratch = Scratch::new(&mut a, &mut b);
		let specs: [OptionSpec<u8>; 0] = [];
		let index = OptionIndex::build(&specs, &mut scratch)
			.expect("Empty index failed.");
		assert!(index.find_short('a').is_none());
		assert!(index.find_long("a").is_none());
	}

	#[test]
	fn t_duplicates() {
		let mut a = [0; 4];
		let mut b = [0; 4];
		let mut scratch = Scratch::new(&mut a, &mut b);

		let specs = [
			OptionSpec::new(0, Some('a'), Some("one"), 0),
			OptionSpec::new(1, Some('b'), Some("two"), 0),
			OptionSpec::new(2, Some('a'), Some("three"), 0),
		];
		assert_eq!(
			OptionIndex::build(&specs, &mut scratch).err(),
			Some(OptwalkError::DuplicateShort('a')),
		);

		let specs = [
			OptionSpec::new(0, Some('a'), Some("one"), 0),
			OptionSpec::new(1, None, Some("two"), 0),
			OptionSpec::new(2, Some('c'), Some("two"), 0),
		];
		assert_eq!(
			OptionIndex::build(&specs, &mut scratch).err(),
			Some(OptwalkError::DuplicateLong("two")),
		);

		// Sharing a character between a short and a long is not a conflict.
		let specs = [
			OptionSpec::new(0, Some('a'), None, 0),
			OptionSpec::new(1, None, Some("a"), 0),
		];
		assert!(OptionIndex::build(&specs, &mut scratch).is_ok());
	}
}
