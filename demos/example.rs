use optscan::prelude::*;
use optscan::{args_lossy, ConsoleReporter, InvalidOptionString, OptionString, Outcome, Scanner, Usage};

fn main() -> Result<(), InvalidOptionString> {
    let args = args_lossy(std::env::args_os());
    let reporter = ConsoleReporter::from_args(&args);
    let options = OptionString::parse(":hva1f:")?;
    let usage = Usage::terminal(reporter.program(), options)
        .help('h', "Display this help text")
        .help('v', "Display the program version number")
        .help('a', "Set the 'a' flag for the program")
        .help('1', "Set the '1' flag for the program")
        .help('f', "Specify the filename to operate on")
        .meta('f', "filename")
        .operands("non-option-arguments", "other arguments not parsed by the scanner");

    // The option string starts with ':', so the scanner stays quiet and errors are reported here.
    let mut scanner = Scanner::new(reporter).with_report_errors(false);

    loop {
        match scanner.scan_next(&args, &options) {
            Outcome::Done => break,
            Outcome::UnknownOption(c) => {
                reporter.print_error_context(format!("Error : unknown option '{c}'"));
                usage.print_usage(&reporter);
            }
            Outcome::MissingValue(c) => {
                reporter.print_error_context(format!("Error : missing argument to option '{c}'"));
                usage.print_usage(&reporter);
            }
            Outcome::Option('h', _) => usage.print_help(scanner.reporter()),
            Outcome::Option('v', _) => println!("Version 1.01"),
            Outcome::Option('a', _) => println!("You supplied the option flag 'a'"),
            Outcome::Option('1', _) => println!("You supplied the option flag '1'"),
            Outcome::Option('f', Some(filename)) => {
                println!("You supplied the filename \"{filename}\"")
            }
            outcome => eprintln!("UNKNOWN RETURN VALUE '{outcome}'"),
        }
    }
    println!();

    let positional = scanner.remaining(&args);

    if !positional.is_empty() {
        println!("non-option argv elements : {}", positional.join(" "));
    }

    Ok(())
}
