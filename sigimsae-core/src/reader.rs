//! Load a generated catalog back into the typed tree.
//!
//! The document is read event by event. Text inside ornament fields is
//! kept verbatim, surrounding spaces included, so names read back exactly
//! as the scanner produced them.

use crate::error::{CatalogError, Result};
use crate::types::{Catalog, Category, Instrument, Ornament};
use quick_xml::events::{BytesStart, Event};
use quick_xml::reader::Reader;
use std::fs;
use std::path::Path;

fn parse_error(message: impl Into<String>) -> CatalogError {
    CatalogError::Parse {
        message: message.into(),
    }
}

fn parse_id(raw: &str, what: &str) -> Result<u32> {
    raw.trim()
        .parse()
        .map_err(|_| parse_error(format!("invalid {} id '{}'", what, raw)))
}

/// Only the literal `true` enables a flag.
fn flag(value: &str) -> bool {
    value.trim() == "true"
}

/// `id`, `name` and `korean` attributes of an instrument or category.
struct EntityAttrs {
    id: u32,
    name: String,
    korean: String,
}

fn entity_attrs(start: &BytesStart, what: &str) -> Result<EntityAttrs> {
    let mut id = None;
    let mut name = None;
    let mut korean = None;

    for attr in start.attributes() {
        let attr = attr.map_err(quick_xml::Error::from)?;
        let value = attr.unescape_value()?.into_owned();
        match attr.key.as_ref() {
            b"id" => id = Some(value),
            b"name" => name = Some(value),
            b"korean" => korean = Some(value),
            _ => {}
        }
    }

    let id = id.ok_or_else(|| parse_error(format!("{} without id", what)))?;
    let name = name.ok_or_else(|| parse_error(format!("{} {} without name", what, id)))?;
    Ok(EntityAttrs {
        id: parse_id(&id, what)?,
        korean: korean.unwrap_or_else(|| name.clone()),
        name,
    })
}

/// Ornament under construction; `id` is required once the element closes.
#[derive(Default)]
struct OrnamentDraft {
    id: Option<u32>,
    ornament: Ornament,
}

impl OrnamentDraft {
    fn set(&mut self, field: &str, value: String) -> Result<()> {
        match field {
            "id" => self.id = Some(parse_id(&value, "ornament")?),
            "name" => self.ornament.name = value,
            "filename" => self.ornament.filename = value,
            "description" => self.ornament.description = value,
            "autoalign" => self.ornament.autoalign = flag(&value),
            "rightColumnOnly" => self.ornament.right_column_only = flag(&value),
            "imagePath" => self.ornament.image_path = value,
            _ => {}
        }
        Ok(())
    }

    fn finish(self) -> Result<Ornament> {
        let id = self
            .id
            .ok_or_else(|| parse_error("ornament without id"))?;
        Ok(Ornament { id, ..self.ornament })
    }
}

/// Parser position while walking the event stream.
#[derive(Default)]
struct Cursor {
    instruments: Vec<Instrument>,
    instrument: Option<Instrument>,
    category: Option<Category>,
    ornament: Option<OrnamentDraft>,
    /// Field element currently open inside an ornament, with its text so far.
    field: Option<(String, String)>,
}

impl Cursor {
    fn open(&mut self, start: &BytesStart) -> Result<()> {
        let tag = String::from_utf8_lossy(start.name().as_ref()).into_owned();

        if self.ornament.is_some() {
            if self.field.is_some() {
                return Err(parse_error(format!("unexpected <{}> inside a field", tag)));
            }
            self.field = Some((tag, String::new()));
            return Ok(());
        }

        match tag.as_str() {
            "ornaments" => {}
            "instrument" => {
                if self.instrument.is_some() {
                    return Err(parse_error("nested <instrument>"));
                }
                let attrs = entity_attrs(start, "instrument")?;
                self.instrument = Some(Instrument {
                    id: attrs.id,
                    name: attrs.name,
                    korean: attrs.korean,
                    categories: Vec::new(),
                });
            }
            "category" => {
                if self.instrument.is_none() || self.category.is_some() {
                    return Err(parse_error("<category> outside an instrument"));
                }
                let attrs = entity_attrs(start, "category")?;
                self.category = Some(Category {
                    id: attrs.id,
                    name: attrs.name,
                    korean: attrs.korean,
                    ornaments: Vec::new(),
                });
            }
            "ornament" => {
                if self.category.is_none() {
                    return Err(parse_error("<ornament> outside a category"));
                }
                self.ornament = Some(OrnamentDraft::default());
            }
            other => return Err(parse_error(format!("unexpected element <{}>", other))),
        }
        Ok(())
    }

    fn text(&mut self, text: &str) {
        if let Some((_, buf)) = self.field.as_mut() {
            buf.push_str(text);
        }
    }

    fn close(&mut self) -> Result<()> {
        if let Some((field, value)) = self.field.take() {
            if let Some(ornament) = self.ornament.as_mut() {
                ornament.set(&field, value)?;
            }
            return Ok(());
        }
        if let Some(draft) = self.ornament.take() {
            let ornament = draft.finish()?;
            if let Some(category) = self.category.as_mut() {
                category.ornaments.push(ornament);
            }
            return Ok(());
        }
        if let Some(category) = self.category.take() {
            if let Some(instrument) = self.instrument.as_mut() {
                instrument.categories.push(category);
            }
            return Ok(());
        }
        if let Some(instrument) = self.instrument.take() {
            self.instruments.push(instrument);
        }
        Ok(())
    }
}

/// Parse a catalog document.
pub fn parse_catalog(xml: &str) -> Result<Catalog> {
    let mut reader = Reader::from_str(xml);
    reader.trim_text(false);

    let mut cursor = Cursor::default();
    let mut seen_root = false;

    loop {
        match reader.read_event()? {
            Event::Start(e) => {
                seen_root = true;
                cursor.open(&e)?;
            }
            Event::Empty(e) => {
                seen_root = true;
                cursor.open(&e)?;
                cursor.close()?;
            }
            Event::End(_) => cursor.close()?,
            Event::Text(t) => cursor.text(&t.unescape()?),
            Event::CData(c) => cursor.text(&String::from_utf8_lossy(&c.into_inner())),
            Event::Eof => break,
            _ => {}
        }
    }

    if !seen_root {
        return Err(parse_error("document has no root element"));
    }
    Ok(Catalog::new(cursor.instruments))
}

/// Read and parse a catalog file.
pub fn read_catalog(path: &Path) -> Result<Catalog> {
    let xml = fs::read_to_string(path)?;
    parse_catalog(&xml).map_err(|e| match e {
        CatalogError::Parse { message } => CatalogError::Parse {
            message: format!("{}: {}", path.display(), message),
        },
        other => other,
    })
}
