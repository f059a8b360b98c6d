//! Formatting for directories and name records.

use std::io::Write;

use ansi_term::{Color, Style};
use fontia::Font;
use fontia_read::{
    tables::name::{Name, NameRecord},
    types::Tag,
    TableDirectory,
};

pub struct Printer<'a> {
    writer: &'a mut (dyn Write + 'a),
    is_tty: bool,
}

impl<'a> Printer<'a> {
    pub fn new(writer: &'a mut (dyn Write + 'a)) -> Self {
        Printer {
            writer,
            is_tty: atty::is(atty::Stream::Stdout),
        }
    }

    #[cfg(test)]
    fn plain(writer: &'a mut (dyn Write + 'a)) -> Self {
        Printer {
            writer,
            is_tty: false,
        }
    }

    pub fn print_font(&mut self, font: &Font) -> std::io::Result<()> {
        for (id, value) in font.names().filter(|(_, value)| !value.is_empty()) {
            let label = id.to_string();
            self.print_with_style(Color::Cyan.into(), |this| {
                write!(this.writer, "{label:>26}")
            })?;
            writeln!(self.writer, "  {value}")?;
        }
        self.print_with_style(Color::Cyan.into(), |this| {
            write!(this.writer, "{:>26}", "outlines")
        })?;
        writeln!(self.writer, "  {:?}", font.outline_format())
    }

    pub fn print_directory(
        &mut self,
        directory: &TableDirectory,
        filter: impl Fn(Tag) -> bool,
    ) -> std::io::Result<()> {
        let max_offset = directory
            .iter()
            .map(|rec| rec.offset())
            .max()
            .unwrap_or_default();
        let offset_pad = hex_width(max_offset);
        writeln!(
            self.writer,
            "sfnt version 0x{:08X} ({:?}), {} tables",
            directory.sfnt_version(),
            directory.outline_format(),
            directory.num_tables()
        )?;
        if directory.len() != directory.num_tables() as usize {
            self.print_note(&format!(
                "{} duplicate records ignored",
                directory.num_tables() as usize - directory.len()
            ))?;
        }
        if !directory.search_params_are_consistent() {
            self.print_note(&format!(
                "stored search params {:?} do not match the table count",
                directory.search_params()
            ))?;
        }

        writeln!(self.writer, "Tag  Offset  Length  Checksum")?;
        writeln!(self.writer, "-------------------------------")?;
        for record in directory.iter().filter(|rec| filter(rec.tag())) {
            writeln!(
                self.writer,
                "{0} 0x{1:02$X} {3:8} 0x{4:08X}",
                record.tag(),
                record.offset(),
                offset_pad,
                record.length(),
                record.checksum()
            )?;
        }
        Ok(())
    }

    pub fn print_names(&mut self, name: &Name, all: bool) -> std::io::Result<()> {
        writeln!(
            self.writer,
            "name version {}, {} names",
            name.version(),
            name.len()
        )?;
        if all {
            for record in name.records() {
                self.print_record(name, record)?;
            }
        } else {
            for record in name.iter() {
                self.print_record(name, record)?;
            }
        }
        for error in name.decode_errors() {
            self.print_note(&format!("skipped: {error}"))?;
        }
        Ok(())
    }

    fn print_record(&mut self, name: &Name, record: &NameRecord) -> std::io::Result<()> {
        let language = match name.language_tag(record) {
            Some(tag) => tag.to_string(),
            None => format!("0x{:04X}", record.language_id()),
        };
        self.print_with_style(Color::Fixed(243).into(), |this| {
            write!(
                this.writer,
                "{:>2} {:>2} {:<8} ",
                record.platform_id().to_u16(),
                record.encoding_id(),
                language
            )
        })?;
        let label = record.name_id().to_string();
        self.print_with_style(Color::Cyan.into(), |this| {
            write!(this.writer, "{label:>26}")
        })?;
        writeln!(self.writer, "  {}", record.value())
    }

    fn print_note(&mut self, note: &str) -> std::io::Result<()> {
        self.print_with_style(Color::Yellow.italic(), |this| write!(this.writer, "note: {note}"))?;
        writeln!(self.writer)
    }

    fn print_with_style(
        &mut self,
        style: Style,
        f: impl FnOnce(&mut Printer) -> std::io::Result<()>,
    ) -> std::io::Result<()> {
        if !self.is_tty {
            f(self)
        } else {
            write!(self.writer, "{}", style.prefix())?;
            f(self)?;
            write!(self.writer, "{}", style.suffix())
        }
    }
}

fn hex_width(val: u32) -> usize {
    match val {
        0..=0xffff => 4usize,
        0x10000..=0xffff_ff => 6,
        0x1000000.. => 8,
    }
}
