//! XML catalog exporter.
//!
//! Produces the document consumed by the notation front end:
//!
//! ```xml
//! <?xml version="1.0" encoding="utf-8"?>
//! <ornaments>
//!   <instrument id="1" name="장구" korean="장구">
//!     <category id="1" name="타법" korean="타법">
//!       <ornament>
//!         <id>1</id>
//!         ...
//!       </ornament>
//!     </category>
//!   </instrument>
//! </ornaments>
//! ```
//!
//! Instruments and categories carry their fields as attributes; ornament
//! fields are child elements with text content. Output is indented by two
//! spaces, holds no blank lines and has no trailing newline.

use crate::error::{CatalogError, Result};
use crate::types::{Catalog, Category, Instrument, Ornament};
use quick_xml::escape::partial_escape;
use quick_xml::events::attributes::Attribute;
use quick_xml::events::{BytesDecl, BytesText, Event};
use quick_xml::Writer;
use std::fs;
use std::io::Write;
use std::path::Path;

/// Default location of the generated catalog.
pub const DEFAULT_OUTPUT_PATH: &str = "Resources/ornaments.xml";

const INDENT_SIZE: usize = 2;

/// Escape an attribute value: markup characters and double quotes.
fn escape_attribute(value: &str) -> String {
    partial_escape(value).replace('"', "&quot;")
}

/// Write an element with `id`, `name` and `korean` attributes.
fn write_entity<W, F>(
    writer: &mut Writer<W>,
    tag: &str,
    attrs: [(&str, String); 3],
    has_children: bool,
    children: F,
) -> quick_xml::Result<()>
where
    W: Write,
    F: FnOnce(&mut Writer<W>) -> quick_xml::Result<()>,
{
    let escaped: Vec<(&str, String)> = attrs
        .iter()
        .map(|(key, value)| (*key, escape_attribute(value)))
        .collect();
    let element = writer.create_element(tag).with_attributes(
        escaped
            .iter()
            .map(|(key, value)| Attribute::from((key.as_bytes(), value.as_bytes()))),
    );
    if has_children {
        element.write_inner_content(children)?;
    } else {
        element.write_empty()?;
    }
    Ok(())
}

fn write_ornament<W: Write>(writer: &mut Writer<W>, ornament: &Ornament) -> quick_xml::Result<()> {
    writer
        .create_element("ornament")
        .write_inner_content(|w| {
            for (field, value) in ornament.fields() {
                // Empty values collapse to a self-closing tag.
                if value.is_empty() {
                    w.create_element(field).write_empty()?;
                } else {
                    w.create_element(field)
                        .write_text_content(BytesText::from_escaped(partial_escape(&value)))?;
                }
            }
            Ok::<(), quick_xml::Error>(())
        })?;
    Ok(())
}

fn write_category<W: Write>(writer: &mut Writer<W>, category: &Category) -> quick_xml::Result<()> {
    write_entity(
        writer,
        "category",
        [
            ("id", category.id.to_string()),
            ("name", category.name.clone()),
            ("korean", category.korean.clone()),
        ],
        !category.ornaments.is_empty(),
        |w| {
            for ornament in &category.ornaments {
                write_ornament(w, ornament)?;
            }
            Ok(())
        },
    )
}

fn write_instrument<W: Write>(
    writer: &mut Writer<W>,
    instrument: &Instrument,
) -> quick_xml::Result<()> {
    write_entity(
        writer,
        "instrument",
        [
            ("id", instrument.id.to_string()),
            ("name", instrument.name.clone()),
            ("korean", instrument.korean.clone()),
        ],
        !instrument.categories.is_empty(),
        |w| {
            for category in &instrument.categories {
                write_category(w, category)?;
            }
            Ok(())
        },
    )
}

/// Drop every line that is empty or whitespace-only.
pub fn strip_blank_lines(text: &str) -> String {
    text.lines()
        .filter(|line| !line.trim().is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render a catalog as a pretty-printed XML document.
pub fn render(catalog: &Catalog) -> Result<String> {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', INDENT_SIZE);
    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)))?;

    if catalog.is_empty() {
        writer.create_element("ornaments").write_empty()?;
    } else {
        writer.create_element("ornaments").write_inner_content(|w| {
            for instrument in &catalog.instruments {
                write_instrument(w, instrument)?;
            }
            Ok::<(), quick_xml::Error>(())
        })?;
    }

    let text = String::from_utf8(writer.into_inner()).map_err(|e| CatalogError::Parse {
        message: e.to_string(),
    })?;
    Ok(strip_blank_lines(&text))
}

/// Render a catalog and write it to `path`, replacing any existing file.
///
/// The parent directory must already exist.
pub fn write_catalog(catalog: &Catalog, path: &Path) -> Result<()> {
    let document = render(catalog)?;
    fs::write(path, document).map_err(|source| CatalogError::OutputWrite {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!(path = %path.display(), "Catalog written");
    Ok(())
}
