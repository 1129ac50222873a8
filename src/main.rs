//! Command line front end for inspecting translation tables and translating UI trees.

use std::fmt::Display;
use std::io::{
    self,
    Write,
};
use std::path::{
    Path,
    PathBuf,
};

use anyhow::{
    Context,
    Result,
    bail,
};
use clap::{
    Parser,
    Subcommand,
};
use tracing_subscriber::EnvFilter;
use ui_i18n::config::{
    ConfigManager,
    TableMatcher,
};
use ui_i18n::tree::ElementDescription;
use ui_i18n::{
    Element,
    JsonSheetReader,
    Language,
    Localizer,
    Lookup,
    NodeRef,
    TableLoader,
    TranslationTable,
    TreeTranslator,
};

#[derive(Parser)]
#[command(name = "ui-i18n")]
#[command(version, about = "Translate UI text through a multi-language table")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Project root holding `.ui-i18n.json` and the table file
    #[arg(long, global = true, default_value = ".")]
    root: PathBuf,

    /// Table file to load instead of discovering one; `-` reads stdin
    #[arg(long, global = true)]
    table: Option<PathBuf>,

    /// Display language (e.g. Hungarian); detected from the environment if unset
    #[arg(long, global = true)]
    language: Option<Language>,
}

#[derive(Subcommand)]
enum Commands {
    /// Load the table and print the number of entries per language
    Check,

    /// Resolve an identifier in the display language
    Resolve {
        identifier: String,
        /// Variant index
        #[arg(long, default_value_t = 0)]
        index: usize,
        /// Values substituted for `{0}`, `{1}`, ...
        args: Vec<String>,
    },

    /// Translate text from one language into another
    Between {
        #[arg(long)]
        from: Language,
        #[arg(long)]
        to: Language,
        text: String,
    },

    /// Translate a JSON element tree and print the result
    Translate {
        tree: PathBuf,
        /// Restore the tree afterwards and print it again
        #[arg(long)]
        restore: bool,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = ConfigManager::new();
    config
        .load_settings(Some(cli.root.clone()))
        .with_context(|| format!("Failed to load settings from {}", cli.root.display()))?;

    let table = load_table(&config, cli.table.as_deref())?;
    let language = cli.language.unwrap_or_else(|| config.default_language());
    tracing::debug!(%language, "Using display language");

    let mut out = io::stdout().lock();
    match cli.command {
        Commands::Check => check(&mut out, &table)?,
        Commands::Resolve { identifier, index, args } => {
            let localizer = Localizer::new(Lookup::new(table), language);
            let args: Vec<&dyn Display> = args.iter().map(|arg| -> &dyn Display { arg }).collect();
            let text = localizer.resolve_formatted(&identifier, index, &args)?;
            writeln!(out, "{text}")?;
        }
        Commands::Between { from, to, text } => {
            let lookup = Lookup::new(table);
            writeln!(out, "{}", lookup.translate_between(from, &text, to))?;
        }
        Commands::Translate { tree, restore } => {
            translate_tree(&mut out, &Lookup::new(table), language, &tree, restore)?;
        }
    }

    Ok(())
}

fn load_table(config: &ConfigManager, explicit: Option<&Path>) -> Result<TranslationTable> {
    let settings = config.get_settings();
    let loader =
        TableLoader::new(JsonSheetReader).with_temp_extension(&settings.temp_file_extension);

    let path = match explicit {
        Some(path) if path == Path::new("-") => {
            return loader
                .load_stream(&mut io::stdin().lock())
                .context("Failed to load table from stdin");
        }
        Some(path) => path.to_path_buf(),
        None => {
            let root = config.root().unwrap_or_else(|| Path::new("."));
            let matcher = TableMatcher::new(settings)?;
            let mut found = matcher.find_table_files(root);
            if found.is_empty() {
                bail!(
                    "No table file matching '{}' under {}",
                    settings.table_file_pattern,
                    root.display()
                );
            }
            if found.len() > 1 {
                tracing::warn!(count = found.len(), "Several table files found, using the first");
            }
            found.swap_remove(0)
        }
    };

    loader.load_path(&path).with_context(|| format!("Failed to load table {}", path.display()))
}

fn check(out: &mut impl Write, table: &TranslationTable) -> Result<()> {
    for language in table.languages() {
        let count = table.entries_for(language).count();
        writeln!(out, "{language}: {count}")?;
    }
    writeln!(out, "total: {}", table.len())?;
    Ok(())
}

fn translate_tree(
    out: &mut impl Write,
    lookup: &Lookup,
    language: Language,
    tree: &Path,
    restore: bool,
) -> Result<()> {
    let content = std::fs::read_to_string(tree)
        .with_context(|| format!("Failed to read tree {}", tree.display()))?;
    let description: ElementDescription = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse tree {}", tree.display()))?;

    let element = Element::from_description(description);
    let root: NodeRef = element.clone();
    let captures = TreeTranslator::new(lookup, language).translate(&root);
    tracing::info!(changed = captures.len(), "Translated tree");
    write_description(out, &element.describe())?;

    if restore {
        let report = captures.restore();
        tracing::info!(restored = report.restored, skipped = report.skipped, "Restored tree");
        write_description(out, &element.describe())?;
    }

    Ok(())
}

fn write_description(out: &mut impl Write, description: &ElementDescription) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, description)?;
    writeln!(out)?;
    Ok(())
}
