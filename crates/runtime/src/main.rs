//! Lark CLI
//!
//! Command-line interface for running .lark scripts and the interactive
//! REPL.

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{Shell, generate};
use lark_runtime::{RunConfig, Vm, VmOptions};
use std::io;
use std::path::{Path, PathBuf};
use std::process;

#[derive(Parser)]
#[command(name = "lark")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Lark interpreter - run .lark scripts", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a .lark script
    Run {
        /// Input .lark source file
        input: PathBuf,

        /// Trace the stack and each instruction before dispatch
        #[arg(long)]
        trace: bool,

        /// Disassemble each function's bytecode after compilation
        #[arg(long)]
        print_code: bool,

        /// Path to a run configuration file (TOML)
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Start an interactive session
    Repl {
        /// Trace the stack and each instruction before dispatch
        #[arg(long)]
        trace: bool,

        /// Disassemble each function's bytecode after compilation
        #[arg(long)]
        print_code: bool,
    },

    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            input,
            trace,
            print_code,
            config,
        } => {
            let options = load_options(config.as_deref(), trace, print_code);
            run_script(&input, options);
        }
        Commands::Repl { trace, print_code } => {
            let options = VmOptions {
                trace_execution: trace,
                print_code,
            };
            if let Err(e) = lark_runtime::repl::run(options) {
                eprintln!("Error: {e}");
                process::exit(1);
            }
        }
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "lark", &mut io::stdout());
        }
    }
}

fn load_options(config: Option<&Path>, trace: bool, print_code: bool) -> VmOptions {
    let config = match config {
        Some(path) => match RunConfig::load(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Error: {e}");
                process::exit(1);
            }
        },
        None => RunConfig::default(),
    };
    config.options(trace, print_code)
}

fn run_script(path: &Path, options: VmOptions) {
    let source = match std::fs::read_to_string(path) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("Could not open file \"{}\": {e}", path.display());
            process::exit(74);
        }
    };

    let mut vm = Vm::new();
    vm.set_options(options);
    if let Err(e) = vm.interpret(&source) {
        eprintln!("{e}");
        process::exit(e.exit_code());
    }
}
