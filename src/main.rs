use clap::Parser;
use evalix::{EvaluationContext, evaluate};

/// evalix is an easy to use arithmetic expression evaluator with named
/// constants, functions and a pipe operator.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// The expression to evaluate, e.g. "2 * pi |> sin".
    expression: String,
}

fn main() {
    let args = Args::parse();
    let context = EvaluationContext::with_builtins();

    match evaluate(&args.expression, &context) {
        Ok(value) => println!("{value}"),
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        },
    }
}
