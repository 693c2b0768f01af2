use std::{
    env,
    fs::read_to_string,
    io::{self, Read, Write},
    process,
    time::Instant,
};

use kaleidoscope::{
    ast::statements::TopLevel,
    display_error,
    lexer::{
        lexer::{tokenize, Lexer},
        tokens::Token,
    },
    parser::{
        lookups::PrecedenceTable,
        parser::{parse, Parser},
    },
};

const USAGE: &str = "usage: kaleidoscope [--tokens] [FILE]";

fn main() {
    let args: Vec<String> = env::args().skip(1).collect();

    match args.as_slice() {
        [] => run_repl(),
        [flag] if flag == "--help" || flag == "-h" => println!("{}", USAGE),
        [flag, file_path] if flag == "--tokens" => dump_tokens(file_path),
        [file_path] if !file_path.starts_with('-') => run_file(file_path),
        _ => {
            eprintln!("Incorrect arguments provided!\n{}", USAGE);
            process::exit(2);
        }
    }
}

/// Reads constructs from stdin one at a time, prompting before each.
fn run_repl() {
    let input = io::stdin().lock().bytes().map_while(Result::ok).map(char::from);
    let mut parser = Parser::new(Lexer::new(input, None), PrecedenceTable::default());

    prompt();
    parser.advance();

    while let Some(result) = parser.parse_top_level() {
        match result {
            Ok(top_level) => report(&top_level),
            Err(error) => display_error(&error, None),
        }

        prompt();
    }

    eprintln!();
}

fn run_file(file_path: &str) {
    let source = read_source(file_path);
    let file_name = file_name(file_path);

    let start = Instant::now();
    let (body, errors) = parse(&source, Some(String::from(file_name)));
    println!("Parsed in {:?}", start.elapsed());

    for top_level in &body {
        report(top_level);
    }

    for error in &errors {
        display_error(error, Some(&source));
    }

    if !errors.is_empty() {
        process::exit(1);
    }
}

fn dump_tokens(file_path: &str) {
    let source = read_source(file_path);

    let start = Instant::now();
    let tokens = tokenize(&source, Some(String::from(file_name(file_path))));
    println!("Tokenized in {:?}", start.elapsed());

    for (token, span) in tokens {
        match token {
            Token::Identifier(_) | Token::Number(_) | Token::Symbol(_) => {
                println!("{} {:?}", span.start, token)
            }
            _ => println!("{} {:?} ()", span.start, token),
        }
    }
}

fn report(top_level: &TopLevel) {
    match top_level {
        TopLevel::Definition(_) => println!("Parsed a function definition."),
        TopLevel::Extern(_) => println!("Parsed an extern."),
        TopLevel::Expression(_) => println!("Parsed a top-level expression."),
    }
    println!("{}", top_level);
}

fn prompt() {
    eprint!("ready> ");
    let _ = io::stderr().flush();
}

fn read_source(file_path: &str) -> String {
    match read_to_string(file_path) {
        Ok(source) => source,
        Err(error) => {
            eprintln!("Failed to read {}: {}", file_path, error);
            process::exit(1);
        }
    }
}

fn file_name(file_path: &str) -> &str {
    file_path.rsplit('/').next().unwrap_or(file_path)
}
