use clap::{Parser as ClapParser, Subcommand};
use json_tree::cli::{self, CliError, Command, Options};
use std::io::{self, Read};
use std::path::PathBuf;

#[derive(ClapParser)]
#[command(name = "jtree")]
#[command(about = "jtree - tokenize, parse and inspect JSON documents")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// JSON input (reads from stdin if neither this nor --file is given)
    #[arg(short, long, global = true)]
    input: Option<String>,

    /// Read JSON input from a file
    #[arg(short, long, global = true)]
    file: Option<PathBuf>,

    /// Fail on the first malformed construct instead of truncating silently
    #[arg(long, global = true)]
    strict: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the token stream
    Tokens,

    /// Print the parsed syntax tree
    Ast,

    /// Convert the document and print it as JSON
    Eval {
        /// Pretty-print the output
        #[arg(short, long)]
        pretty: bool,
    },

    /// Print a single field, e.g. `testCase[4].nested`
    Get {
        /// Dot-separated field path with optional [n] indices
        path: String,

        /// Pretty-print the output
        #[arg(short, long)]
        pretty: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    let (command, pretty) = match cli.command {
        Commands::Tokens => (Command::Tokens, false),
        Commands::Ast => (Command::Ast, false),
        Commands::Eval { pretty } => (Command::Eval, pretty),
        Commands::Get { path, pretty } => (Command::Get { path }, pretty),
    };

    let options = Options {
        command,
        input: cli.input,
        file: cli.file,
        pretty,
        strict: cli.strict,
    };

    if let Err(e) = run(options) {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

fn run(mut options: Options) -> Result<(), CliError> {
    if options.input.is_none() && options.file.is_none() && !atty::is(atty::Stream::Stdin) {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        options.input = Some(buffer);
    }

    let output = cli::execute(&options)?;
    println!("{}", output.render(options.pretty)?);
    Ok(())
}
