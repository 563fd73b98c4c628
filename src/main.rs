//! main.rs
//! Entry point for mls

use meta_ls::config::Config;
use meta_ls::core::{DirTree, effective_width};
use meta_ls::utils::cli::{self, CliAction, ListArgs, handle_args};
use meta_ls::utils::ignore_broken_pipe;

use std::io::{self, BufWriter, Write};
use tracing_subscriber::EnvFilter;

fn main() -> io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let action = match handle_args() {
        Ok(action) => action,
        Err(e) => {
            eprintln!("mls: {}", e);
            eprintln!("Try --help for available options");
            std::process::exit(2);
        }
    };

    match action {
        CliAction::Help => cli::print_help(),
        CliAction::ConfigHelp => cli::print_config_help(),
        CliAction::Version => cli::print_version(),
        CliAction::Init => {
            let path = Config::default_path();
            if let Err(e) = Config::generate_default(&path) {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
            println!("Wrote {}", path.display());
        }
        CliAction::List(args) => run_list(args)?,
    }
    Ok(())
}

fn run_list(args: ListArgs) -> io::Result<()> {
    let config = Config::load();
    let root = match args.root {
        Some(root) => root,
        None => std::env::current_dir()?,
    };
    if !root.is_dir() {
        eprintln!("mls: {}: not a directory", root.display());
        std::process::exit(1);
    }

    let tree = config.general().apply(DirTree::new(root));
    let columns = !args.single_column && (args.width.is_some() || config.layout().columns());
    let width = effective_width(args.width, columns);
    tracing::debug!(root = %tree.root().display(), ?width, "listing");

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let result = config
        .layout()
        .lister(width)
        .list(&args.targets, &tree, &mut out)
        .and_then(|()| out.flush());
    ignore_broken_pipe(result)
}
