use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};

use crate::error::Result;
use crate::trace::TraceSession;

fn write_text_element<W: Write>(
    writer: &mut Writer<W>,
    name: &str,
    text: &str,
) -> quick_xml::Result<()> {
    writer
        .create_element(name)
        .write_text_content(BytesText::new(text))?;
    Ok(())
}

fn write_session<W: Write>(writer: &mut Writer<W>, session: &TraceSession) -> quick_xml::Result<()> {
    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
    writer.write_event(Event::Start(BytesStart::new("trace")))?;
    writer.write_event(Event::Start(BytesStart::new("info")))?;

    write_text_element(writer, "program", &session.program)?;

    if session.arguments.is_empty() {
        writer.write_event(Event::Empty(BytesStart::new("args")))?;
    } else {
        writer.write_event(Event::Start(BytesStart::new("args")))?;
        for arg in &session.arguments {
            write_text_element(writer, "arg", arg)?;
        }
        writer.write_event(Event::End(BytesEnd::new("args")))?;
    }

    if let Some(code) = session.exit_status {
        write_text_element(writer, "exit_status", &code.to_string())?;
    }
    write_text_element(writer, "elapsed_ms", &session.elapsed_ms().to_string())?;
    write_text_element(writer, "utc_timestamp", &session.utc_timestamp())?;

    writer.write_event(Event::End(BytesEnd::new("info")))?;
    writer.write_event(Event::End(BytesEnd::new("trace")))?;
    Ok(())
}

/// Write the session as an indented UTF-8 XML document.
pub fn write_xml(session: &TraceSession, output: &Path) -> Result<()> {
    let file = File::create(output)?;
    let mut writer = Writer::new_with_indent(BufWriter::new(file), b' ', 2);
    write_session(&mut writer, session)?;

    let mut inner = writer.into_inner();
    inner.write_all(b"\n")?;
    inner.flush()?;
    Ok(())
}
