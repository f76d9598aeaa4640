//! Colour Chooser XML palette writing
//!
//! ```xml
//! <?xml version="1.0" encoding="utf-8"?>
//! <palette xmlns="http://markembling.info/xmlschema/colourchooser/palette/1">
//!   <colour><name>Go</name><r>0</r><g>173</g><b>216</b><opacity>100</opacity></colour>
//! </palette>
//! ```
//!
//! The body is written without indentation. Text escapes only `&`, `<`
//! and `>`; quotes are left as-is.

use quick_xml::Writer;
use quick_xml::escape::partial_escape;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use std::io::Write;

use super::{PaletteEncoder, PaletteFormat};
use crate::error::Result;
use crate::palette::{ColorRecord, Palette};

/// Default namespace of every element
pub const PALETTE_XML_NS: &str = "http://markembling.info/xmlschema/colourchooser/palette/1";

/// Opacity is always fully opaque
const OPACITY: &str = "100";

/// `.xml` Colour Chooser encoder
#[derive(Debug, Clone, Copy, Default)]
pub struct CcxmlEncoder;

impl PaletteEncoder for CcxmlEncoder {
    fn format(&self) -> PaletteFormat {
        PaletteFormat::Ccxml
    }

    fn encode(&self, palette: &Palette, sink: &mut dyn Write) -> Result<()> {
        let mut writer = Writer::new(sink);

        writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)))?;
        writer.get_mut().write_all(b"\n")?;

        let root = BytesStart::new("palette").with_attributes([("xmlns", PALETTE_XML_NS)]);
        writer.write_event(Event::Start(root))?;

        for record in palette {
            write_colour(&mut writer, record)?;
        }

        writer.write_event(Event::End(BytesEnd::new("palette")))?;
        Ok(())
    }
}

fn write_colour<W: Write>(writer: &mut Writer<W>, record: &ColorRecord) -> Result<()> {
    let [r, g, b] = record.rgb8();

    writer.write_event(Event::Start(BytesStart::new("colour")))?;
    write_text_element(writer, "name", &record.name)?;
    write_text_element(writer, "r", &r.to_string())?;
    write_text_element(writer, "g", &g.to_string())?;
    write_text_element(writer, "b", &b.to_string())?;
    write_text_element(writer, "opacity", OPACITY)?;
    writer.write_event(Event::End(BytesEnd::new("colour")))?;
    Ok(())
}

fn write_text_element<W: Write>(writer: &mut Writer<W>, tag: &str, text: &str) -> Result<()> {
    writer.write_event(Event::Start(BytesStart::new(tag)))?;
    writer.write_event(Event::Text(BytesText::from_escaped(partial_escape(text))))?;
    writer.write_event(Event::End(BytesEnd::new(tag)))?;
    Ok(())
}
