use std::process::ExitCode;

use rpncalc::{Config, RPNEvaluator, ShuntingParser};
use rustyline::error::ReadlineError;
use tracing_subscriber::EnvFilter;

// Expression from the command line, or a single word read at the prompt.
fn read_expression() -> Result<String, String> {
    if std::env::args().len() > 1 {
        return Ok(std::env::args().skip(1).collect::<Vec<String>>().join(" "));
    }
    let mut rl = rustyline::DefaultEditor::new().map_err(|e| e.to_string())?;
    match rl.readline("Enter an infix expression: ") {
        Ok(line) => Ok(line.split_whitespace().next().unwrap_or("").to_string()),
        Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => {
            Err(format!("No expression given"))
        }
        Err(e) => Err(format!("Readline err: {:?}", e)),
    }
}

fn run(config: Config) -> Result<(), String> {
    let input = read_expression()?;
    let rpn = ShuntingParser::new(config).parse_str(&input).map_err(|e| e.to_string())?;
    println!("Postfix (RPN) expression: {}", rpn);
    let result = RPNEvaluator::new(config).eval(&rpn).map_err(|e| e.to_string())?;
    println!("Result: {:.6}", result);
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    match run(Config::default()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
