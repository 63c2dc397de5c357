//! vitrine - catalog category tree mapper

use std::fs;
use std::process::ExitCode;

use clap::Parser;

use vitrine::{CategoryNode, category_tree, read_catalog};

#[derive(Parser)]
#[command(name = "vitrine")]
#[command(version, about = "Map a catalog category listing to a display tree", long_about = None)]
#[command(after_help = "EXAMPLES:
    vitrine catalog.json                Print the mapped tree as JSON
    vitrine catalog.json -o tree.json   Write the mapped tree to a file
    vitrine -s catalog.json             Show tree statistics only")]
struct Cli {
    /// Catalog API response file (JSON envelope or a bare record array)
    #[arg(value_name = "INPUT")]
    input: String,

    /// Output file (defaults to stdout)
    #[arg(short, long, value_name = "OUTPUT")]
    output: Option<String>,

    /// Pretty-print the JSON output
    #[arg(short, long)]
    pretty: bool,

    /// Show tree statistics without emitting the tree
    #[arg(short, long)]
    summary: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), String> {
    let tree = load_tree(&cli.input).map_err(|e| e.to_string())?;

    if cli.summary {
        show_summary(&cli.input, &tree);
        return Ok(());
    }

    let json = if cli.pretty {
        serde_json::to_string_pretty(&tree)
    } else {
        serde_json::to_string(&tree)
    }
    .map_err(|e| e.to_string())?;

    match &cli.output {
        Some(path) => fs::write(path, json).map_err(|e| e.to_string())?,
        None => println!("{json}"),
    }

    Ok(())
}

fn load_tree(path: &str) -> vitrine::Result<Vec<CategoryNode>> {
    // Tolerate a bare record array alongside the usual response envelope.
    let response = match read_catalog(path) {
        Ok(response) => response,
        Err(envelope_err) => {
            let json = fs::read_to_string(path)?;
            match serde_json::from_str::<Vec<vitrine::Category>>(&json) {
                Ok(records) => vitrine::CatalogResponse {
                    data: Some(records),
                },
                Err(_) => return Err(envelope_err),
            }
        }
    };
    Ok(category_tree(response.data.as_deref()))
}

fn show_summary(path: &str, tree: &[CategoryNode]) {
    fn count(nodes: &[CategoryNode]) -> (usize, usize) {
        let mut total = 0;
        let mut shown = 0;
        for node in nodes {
            total += 1;
            if node.show_on_home {
                shown += 1;
            }
            let (t, s) = count(&node.children);
            total += t;
            shown += s;
        }
        (total, shown)
    }

    let (total, shown) = count(tree);
    println!("File: {path}");
    println!("Top-level categories: {}", tree.len());
    println!("Total categories: {total}");
    println!("Shown on home: {shown}");
}
