/*!
# Optwalk: Debug

This example parses any arbitrary arguments fed to it against a small option
table and displays the results.

Try something like:
cargo run --example debug -- -vq --jobs 4 -x -1 -2 --nope file.txt
*/

use optwalk::{
	Handler,
	OptionSpec,
	Parser,
	Unknown,
	FLAG_NEGATIVE_VALUES,
	FLAG_SKIP_FIRST,
	UNBOUNDED,
};
use std::ops::ControlFlow;



#[derive(Debug, Clone, Copy)]
/// # Options.
enum Opt {
	Help,
	Jobs,
	Quiet,
	Verbose,
	Extra,
}

/// # Option Table.
const OPTS: [OptionSpec<Opt>; 5] = [
	OptionSpec::new(Opt::Help, Some('h'), Some("help"), 0),
	OptionSpec::new(Opt::Jobs, Some('j'), Some("jobs"), 1),
	OptionSpec::new(Opt::Quiet, Some('q'), Some("quiet"), 0),
	OptionSpec::new(Opt::Verbose, Some('v'), Some("verbose"), 0),
	OptionSpec::new(Opt::Extra, Some('x'), Some("extra"), UNBOUNDED),
];

/// # Printer.
struct Printer;

impl<'a> Handler<'a, Opt, String> for Printer {
	type Break = i32;

	fn option(&mut self, id: Opt, args: &'a [String]) -> ControlFlow<i32> {
		println!("\x1b[2m-----\x1b[0m\n{id:?} {args:?}");
		if matches!(id, Opt::Help) { ControlFlow::Break(0) }
		else { ControlFlow::Continue(()) }
	}

	fn unknown(&mut self, key: Unknown<'a>) -> ControlFlow<i32> {
		println!("\x1b[2m-----\x1b[0m\n\x1b[91mUnknown:\x1b[0m {key}");
		ControlFlow::Continue(())
	}

	fn positional(&mut self, args: &'a [String]) -> ControlFlow<i32> {
		println!("\x1b[2m-----\x1b[0m\nPositional {args:?}");
		ControlFlow::Continue(())
	}
}



fn main() {
	let args: Vec<String> = std::env::args().collect();
	let parser = Parser::new(&OPTS, FLAG_SKIP_FIRST | FLAG_NEGATIVE_VALUES);
	match parser.parse(&args, &mut Printer) {
		Ok(ControlFlow::Continue(())) => println!("\x1b[2m-----\x1b[0m"),
		Ok(ControlFlow::Break(code)) => std::process::exit(code),
		Err(e) => {
			println!("\x1b[1;91mError:\x1b[0m {e}");
			std::process::exit(1);
		},
	}
}
