//! Print the table directory and names of a font.
//!
//! With no flags, prints the names that `fontia` copies out of the font.
//! Set `RUST_LOG=debug` to see what the readers skipped or repaired.

use std::{collections::HashSet, str::FromStr};

use fontia::Font;
use fontia_read::{types::Tag, FontRef, TableProvider};

mod print;

use print::Printer;

fn main() -> Result<(), Error> {
    env_logger::init();
    let args = flags::Args::from_env().map_err(|e| Error(e.to_string()))?;
    let stdout = std::io::stdout();
    let mut locked = stdout.lock();
    let mut printer = Printer::new(&mut locked);

    if !(args.tables || args.names || args.all_names) {
        let font = pollster::block_on(Font::load(&args.input)).map_err(Error::new)?;
        return printer.print_font(&font).map_err(Error::new);
    }

    let bytes = std::fs::read(&args.input)
        .map_err(|e| Error(format!("failed to read {}: {e}", args.input.display())))?;
    let font = FontRef::new(&bytes).map_err(Error::new)?;
    if args.tables {
        let filter = TableFilter::from_args(&args)?;
        printer
            .print_directory(font.table_directory(), |tag| filter.should_print(tag))
            .map_err(Error::new)?;
    }
    if args.names || args.all_names {
        let name = font.name().map_err(Error::new)?;
        printer
            .print_names(&name, args.all_names)
            .map_err(Error::new)?;
    }
    Ok(())
}

enum TableFilter {
    All,
    Include(HashSet<Tag>),
    Exclude(HashSet<Tag>),
}

impl TableFilter {
    fn from_args(args: &flags::Args) -> Result<Self, Error> {
        if args.include.is_some() && args.exclude.is_some() {
            return Err(Error::new("pass only one of --include and --exclude"));
        }
        if let Some(tags) = &args.include {
            make_tag_set(tags).map(TableFilter::Include)
        } else if let Some(tags) = &args.exclude {
            make_tag_set(tags).map(TableFilter::Exclude)
        } else {
            Ok(TableFilter::All)
        }
    }

    fn should_print(&self, tag: Tag) -> bool {
        match self {
            TableFilter::All => true,
            TableFilter::Include(tags) => tags.contains(&tag),
            TableFilter::Exclude(tags) => !tags.contains(&tag),
        }
    }
}

/// Parse a space separated list of tags. Short tags are padded with spaces.
fn make_tag_set(inp: &str) -> Result<HashSet<Tag>, Error> {
    inp.split(' ')
        .filter(|raw| !raw.is_empty())
        .map(|raw| match Tag::from_str(&format!("{raw:<4}")) {
            Ok(tag) => Ok(tag),
            Err(e) => Err(Error(format!(
                "Invalid tag '{}': {e}",
                raw.escape_default()
            ))),
        })
        .collect()
}

#[derive(Debug, Clone)]
struct Error(String);

impl Error {
    fn new(t: impl std::fmt::Display) -> Self {
        Self(t.to_string())
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl std::error::Error for Error {}

mod flags {
    use std::path::PathBuf;

    xflags::xflags! {
        /// Print the table directory and names of a font
        cmd args {
            required input: PathBuf
                /// List the table directory.
                optional -t, --tables
                /// With --tables, only list these (space separated) tags.
                optional -i, --include include: String
                /// With --tables, skip these (space separated) tags.
                optional -x, --exclude exclude: String
                /// Print the preferred record for each name id.
                optional -n, --names
                /// Print every decodable name record.
                optional -a, --all-names
        }
    }
}
