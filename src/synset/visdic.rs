//! VisDic XML and one-line text output for synsets.

use std::io::{self, Write};

use crate::synset::synset::{Pointer, Synset};

/// Write the XML declaration, DTD reference and root opening tag.
pub fn write_xml_header<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "<?xml version=\"1.0\" encoding=\"UTF-8\"?>")?;
    writeln!(out, "<!DOCTYPE WNXML SYSTEM \"wnxml.dtd\">")?;
    writeln!(out, "<WNXML>")
}

/// Write the root closing tag.
pub fn write_xml_footer<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "</WNXML>")
}

/// Escape text content and attribute-unsafe quotes.
pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '\'' => escaped.push_str("&apos;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

fn tag(name: &str, text: &str) -> String {
    format!("<{name}>{}</{name}>", escape(text))
}

fn optional_tag(name: &str, text: &str) -> String {
    if text.is_empty() {
        String::new()
    } else {
        tag(name, text)
    }
}

fn write_links<W: Write>(out: &mut W, element: &str, links: &[Pointer]) -> io::Result<()> {
    for link in links {
        write!(
            out,
            "<{element}>{}{}</{element}>",
            escape(&link.target),
            tag("TYPE", &link.relation)
        )?;
    }
    Ok(())
}

impl Synset {
    /// Write the VisDic XML element of this synset, without a trailing newline.
    ///
    /// Internal relations are written as their deduplicated set, so inverse
    /// edges added more than once appear a single time.
    pub fn write_visdic_xml<W: Write>(&self, out: &mut W) -> io::Result<()> {
        write!(
            out,
            "<SYNSET>{}{}{}<SYNONYM>",
            tag("ID", &self.id),
            optional_tag("ID3", &self.id3),
            tag("POS", self.pos.tag())
        )?;
        for synonym in &self.synonyms {
            write!(
                out,
                "<LITERAL>{}{}{}{}</LITERAL>",
                escape(&synonym.literal),
                tag("SENSE", &synonym.sense.to_string()),
                optional_tag("LNOTE", synonym.lnote.as_deref().unwrap_or_default()),
                optional_tag("NUCLEUS", synonym.nucleus.as_deref().unwrap_or_default()),
            )?;
        }
        write!(out, "</SYNONYM>")?;

        write_links(out, "ILR", &self.unique_pointers())?;

        write!(
            out,
            "{}{}",
            optional_tag("DEF", &self.definition),
            optional_tag("BCS", &self.bcs)
        )?;
        for usage in &self.usages {
            write!(out, "{}", tag("USAGE", usage))?;
        }
        for snote in &self.snotes {
            write!(out, "{}", tag("SNOTE", snote))?;
        }
        write!(
            out,
            "{}{}",
            optional_tag("STAMP", &self.stamp),
            optional_tag("DOMAIN", &self.domain)
        )?;
        write_links(out, "SUMO", &self.sumo_links)?;
        write!(
            out,
            "{}{}",
            optional_tag("NL", &self.nl),
            optional_tag("TNL", &self.tnl)
        )?;
        write_links(out, "ELR", &self.elrs)?;
        write_links(out, "ELR3", &self.elrs3)?;
        write_links(out, "EKSZ", &self.eksz_links)?;
        write_links(out, "VFRAME", &self.vframe_links)?;

        write!(out, "</SYNSET>")
    }

    /// Write `<id>  {<literal>:<sense>, ...}  (<definition>)` and a newline.
    pub fn write_str<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "{}", self.summary())
    }

    /// The one-line summary written by [`Synset::write_str`].
    pub fn summary(&self) -> String {
        let senses = self
            .synonyms
            .iter()
            .map(|s| format!("{}:{}", s.literal, s.sense))
            .collect::<Vec<_>>()
            .join(", ");
        format!("{}  {{{}}}  ({})", self.id, senses, self.definition)
    }
}
