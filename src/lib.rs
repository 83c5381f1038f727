/*!
# Optwalk

`Optwalk` is a tiny, callback-driven CLI option parser. Give it an argument
vector, a table of [`OptionSpec`]s, and a [`Handler`], and it will walk the
arguments left-to-right, calling back for every option it finds (along with
any values that option is allowed to take), every option it doesn't
recognize, and — once option parsing stops — whatever positional arguments
remain.

It does not allocate. The lookup structures it needs are built on the stack
for each parse (or in buffers you provide via [`Scratch`]), and the slices
passed to your handler are borrowed straight from the original vector.

Validation, conversion, help screens, error messages and the like are left
_entirely up to you_.



## Parsing Rules

* `--` ends option parsing; everything after it is positional. (See [`FLAG_LITERAL_END`] to disable.)
* `--key` is a long option. Names must match exactly; there is no abbreviation.
* `-k` is a short option; `-abc` is a bundle of three short options.
* Anything else — including `-` and empty strings — is a plain token, and the first one ends option parsing.
* An option may consume up to [`OptionSpec::max_args`] plain tokens that immediately follow it. (See [`FLAG_NEGATIVE_VALUES`] to also allow `-5`-style values.)
* Bundled short options never consume values.
* Any handler method can stop the whole thing by returning [`ControlFlow::Break`](std::ops::ControlFlow::Break).



## Example

See [`Parser`] for a complete example.
*/

#![forbid(unsafe_code)]

#![deny(
	clippy::allow_attributes_without_reason,
	clippy::correctness,
	unreachable_pub,
)]

#![warn(
	clippy::complexity,
	clippy::nursery,
	clippy::pedantic,
	clippy::perf,
	clippy::style,

	clippy::allow_attributes,
	clippy::clone_on_ref_ptr,
	clippy::create_dir,
	clippy::filetype_is_file,
	clippy::format_push_string,
	clippy::get_unwrap,
	clippy::impl_trait_in_params,
	clippy::lossy_float_literal,
	clippy::missing_assert_message,
	clippy::missing_docs_in_private_items,
	clippy::needless_raw_strings,
	clippy::panic_in_result_fn,
	clippy::pub_without_shorthand,
	clippy::rest_pat_in_fully_bound_structs,
	clippy::semicolon_inside_block,
	clippy::str_to_string,
	clippy::string_to_string,
	clippy::todo,
	clippy::undocumented_unsafe_blocks,
	clippy::unneeded_field_pattern,
	clippy::unseparated_literal_suffix,
	clippy::unwrap_in_result,

	macro_use_extern_crate,
	missing_copy_implementations,
	missing_docs,
	non_ascii_idents,
	trivial_casts,
	trivial_numeric_casts,
	unused_crate_dependencies,
	unused_extern_crates,
	unused_import_braces,
)]

#![cfg_attr(docsrs, feature(doc_cfg))]



mod cursor;
mod error;
mod index;
mod kind;
mod parse;
mod spec;

pub use error::OptwalkError;
pub use index::{
	INLINE_OPTIONS,
	OptionIndex,
	Scratch,
};
pub use kind::{
	accepts_value,
	classify,
	TokenKind,
};
pub use parse::{
	FLAG_LITERAL_END,
	FLAG_NEGATIVE_VALUES,
	FLAG_SKIP_FIRST,
	Handler,
	Parser,
	Unknown,
};
pub use spec::{
	OptionSpec,
	UNBOUNDED,
};
