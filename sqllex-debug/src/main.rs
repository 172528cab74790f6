use std::fs;
use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use colored::*;
use sqllexrs::{Lexer, MysqlVersion, Token, TokenKind};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(name = "sqllex-debug")]
#[command(about = "Debugging tool for sqllexrs tokenization")]
struct Cli {
    /// SQL to tokenize; reads stdin when neither this nor --file is given
    input: Option<String>,

    /// Read input from a file
    #[arg(long)]
    file: Option<PathBuf>,

    /// Statement delimiter
    #[arg(long, default_value = ";")]
    delimiter: String,

    /// Emit whitespace runs as tokens
    #[arg(long)]
    keep_whitespace: bool,

    /// Use the MySQL 5.6 word lists instead of 5.5
    #[arg(long)]
    mysql56: bool,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    output: OutputFormat,

    /// Check identifiers for quoting instead of tokenizing
    #[arg(long)]
    quote_check: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let input = match read_input(&cli) {
        Ok(input) => input,
        Err(err) => {
            eprintln!("{} {}", "error:".red().bold(), err);
            return ExitCode::FAILURE;
        }
    };

    let lexer = build_lexer(&cli);

    if cli.quote_check {
        quote_check(&lexer, &input, cli.output);
        return ExitCode::SUCCESS;
    }

    match lexer.tokenize(&input) {
        Ok(tokens) => {
            match cli.output {
                OutputFormat::Text => print_text(&tokens),
                OutputFormat::Json => print_json(&input, &tokens),
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{} {}", "lex error:".red().bold(), err);
            ExitCode::FAILURE
        }
    }
}

fn read_input(cli: &Cli) -> Result<String, String> {
    if let Some(ref input) = cli.input {
        return Ok(input.clone());
    }
    if let Some(ref path) = cli.file {
        return fs::read_to_string(path).map_err(|e| format!("{}: {e}", path.display()));
    }
    let mut buffer = String::new();
    std::io::stdin()
        .read_to_string(&mut buffer)
        .map_err(|e| format!("stdin: {e}"))?;
    Ok(buffer)
}

fn build_lexer(cli: &Cli) -> Lexer {
    let mut lexer = Lexer::new()
        .with_delimiter(cli.delimiter.clone())
        .preserve_whitespace(cli.keep_whitespace);
    if cli.mysql56 {
        lexer = lexer.with_version(MysqlVersion::V5_6);
    }
    lexer
}

// One identifier per line: quoting verdict plus the safely quoted form.
fn quote_check(lexer: &Lexer, input: &str, output: OutputFormat) {
    for identifier in input.lines().filter(|l| !l.trim().is_empty()) {
        let identifier = identifier.trim();
        let needs = lexer.requires_quoting(identifier);
        let quoted = lexer.quote_identifier(identifier);
        match output {
            OutputFormat::Text => {
                let verdict = if needs {
                    "needs quoting".yellow()
                } else {
                    "safe".green()
                };
                println!("{:<32} {:<14} {}", identifier, verdict, quoted);
            }
            OutputFormat::Json => {
                let record = serde_json::json!({
                    "identifier": identifier,
                    "requires_quoting": needs,
                    "quoted": quoted,
                });
                println!("{record}");
            }
        }
    }
}

fn print_text(tokens: &[Token<'_>]) {
    for token in tokens {
        let lexeme = colorize(token);
        println!(
            "{:>5}..{:<5} {:<18} {}{}",
            token.start,
            token.end,
            token.kind.name(),
            lexeme,
            category_suffix(token),
        );
    }
}

fn colorize(token: &Token<'_>) -> ColoredString {
    let lexeme = token.lexeme;
    match token.kind {
        TokenKind::Keyword => lexeme.blue().bold(),
        TokenKind::Function => lexeme.magenta(),
        TokenKind::Type => lexeme.cyan(),
        TokenKind::QuotedIdentifier => lexeme.cyan().italic(),
        TokenKind::StringLiteral => lexeme.green(),
        TokenKind::Number => lexeme.yellow(),
        TokenKind::Comment => lexeme.bright_black(),
        TokenKind::Delimiter => lexeme.red().bold(),
        TokenKind::Identifier | TokenKind::Operator | TokenKind::Whitespace => {
            ColoredString::from(lexeme)
        }
    }
}

fn category_suffix(token: &Token<'_>) -> String {
    let names: Vec<_> = token
        .categories
        .iter_names()
        .map(|(name, _)| name.to_ascii_lowercase())
        .collect();
    if names.is_empty() {
        String::new()
    } else {
        format!("  [{}]", names.join(", ")).bright_black().to_string()
    }
}

fn print_json(input: &str, tokens: &[Token<'_>]) {
    let records: Vec<_> = tokens
        .iter()
        .map(|token| {
            serde_json::json!({
                "kind": token.kind.name(),
                "lexeme": token.lexeme,
                "start": token.start,
                "end": token.end,
                "categories": token
                    .categories
                    .iter_names()
                    .map(|(name, _)| name.to_ascii_lowercase())
                    .collect::<Vec<_>>(),
            })
        })
        .collect();
    let doc = serde_json::json!({
        "input_bytes": input.len(),
        "tokens": records,
    });
    println!("{doc:#}");
}
