use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::LevelFilter;

use ordtree::{BTree, Key, TreeConfig};

#[derive(Parser)]
#[command(author, version, about = "Ordtree - build and inspect an order-5 B-tree")]
struct Cli {
    /// Log every algorithm step
    #[arg(long)]
    debug: bool,

    /// Dump the tree before and after every insert and delete
    #[arg(long)]
    verbose: bool,

    /// Canned case to run; ignored when --insert is given
    #[arg(long, value_enum, default_value_t = Case::Ascending)]
    case: Case,

    /// Comma-separated keys to insert
    #[arg(long, value_delimiter = ',')]
    insert: Vec<Key>,

    /// Comma-separated keys to delete after inserting
    #[arg(long, value_delimiter = ',')]
    delete: Vec<Key>,

    /// Print the level-order node list as JSON instead of text
    #[arg(long)]
    json: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum Case {
    /// Insert 1..=50 in order
    Ascending,
    /// Insert 1..=8, delete 5
    DeleteLeaf,
    /// Insert 9..=4 descending, delete the root key 7
    DeleteRoot,
    /// Insert 1..=17, delete 16 twice
    DeleteTwice,
    /// Insert 1..=5, delete 4 so the root merges away
    Collapse,
}

impl Case {
    fn keys(self) -> (Vec<Key>, Vec<Key>) {
        match self {
            Case::Ascending => ((1..=50).collect(), vec![]),
            Case::DeleteLeaf => ((1..=8).collect(), vec![5]),
            Case::DeleteRoot => ((4..=9).rev().collect(), vec![7]),
            Case::DeleteTwice => ((1..=17).collect(), vec![16, 16]),
            Case::Collapse => ((1..=5).collect(), vec![4]),
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.debug || cli.verbose { LevelFilter::Debug } else { LevelFilter::Warn };
    env_logger::Builder::new().filter_level(level).init();

    let config = TreeConfig::default()
        .with_trace(cli.debug)
        .with_verbose(cli.verbose);

    // --delete keys run after the case's own deletes
    let (inserts, mut deletes) = if cli.insert.is_empty() {
        cli.case.keys()
    } else {
        (cli.insert, Vec::new())
    };
    deletes.extend(cli.delete);

    println!("insert {:?}", inserts);
    let mut tree = BTree::with_config(config);
    for key in inserts {
        if !tree.insert(key) {
            println!("duplicate key {} ignored", key);
        }
    }

    for key in deletes {
        let removed = tree
            .delete(key)
            .with_context(|| format!("deleting key {}", key))?;
        println!("delete {}: {}", key, if removed { "removed" } else { "not present" });
    }

    tree.validate().context("tree failed validation")?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&tree.render())?);
    } else {
        println!("{}", tree);
        println!("height {}, {} keys", tree.height(), tree.len());
    }

    Ok(())
}
