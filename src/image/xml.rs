use std::fmt::{Display, Formatter, Result, Write};

/// Writes XML through a closure whenever it is displayed
pub(crate) struct XmlProducer<F>(F)
where
    F: Fn(&mut Xml<'_, '_>) -> Result;

impl<F> XmlProducer<F>
where
    F: Fn(&mut Xml<'_, '_>) -> Result,
{
    pub fn new(f: F) -> Self {
        Self(f)
    }
}

impl<F> Display for XmlProducer<F>
where
    F: Fn(&mut Xml<'_, '_>) -> Result,
{
    fn fmt(&self, fmt: &mut Formatter<'_>) -> Result {
        let mut xml = Xml::new(fmt);
        (self.0)(&mut xml)?;
        xml.finish()
    }
}

/// Tracks open elements so that they are closed in order
pub(crate) struct Xml<'a, 'b> {
    writer: &'a mut Formatter<'b>,
    elements: Vec<&'static str>,
    in_tag: bool,
}

impl<'a, 'b> Xml<'a, 'b> {
    pub fn new(writer: &'a mut Formatter<'b>) -> Self {
        Self {
            writer,
            elements: Vec::new(),
            in_tag: false,
        }
    }
}

impl Xml<'_, '_> {
    pub fn open_element(&mut self, name: &'static str) -> Result {
        self.end_tag(true)?;
        self.in_tag = true;
        self.elements.push(name);
        write!(self.writer, "<{}", name)
    }

    pub fn attribute(&mut self, name: &'static str, value: impl Display) -> Result {
        write!(self.writer, r#" {}=""#, name)?;
        write_escaped(self.writer, value)?;
        self.writer.write_char('"')
    }

    pub fn close_element(&mut self) -> Result {
        let name = match self.elements.pop() {
            Some(name) => name,
            None => return Err(std::fmt::Error),
        };
        if self.in_tag {
            self.in_tag = false;
            writeln!(self.writer, "/>")
        } else {
            writeln!(self.writer, "</{}>", name)
        }
    }

    pub fn text(&mut self, text: impl Display) -> Result {
        self.end_tag(false)?;
        write_escaped(self.writer, text)
    }

    pub fn finish(&mut self) -> Result {
        if self.in_tag {
            self.in_tag = false;
            writeln!(self.writer, "/>")?;
            self.elements.pop();
        }
        while let Some(name) = self.elements.pop() {
            writeln!(self.writer, "</{}>", name)?;
        }
        Ok(())
    }

    fn end_tag(&mut self, newline: bool) -> Result {
        if !self.in_tag {
            return Ok(());
        }
        self.in_tag = false;
        if newline {
            writeln!(self.writer, ">")
        } else {
            self.writer.write_char('>')
        }
    }
}

fn write_escaped(writer: &mut Formatter<'_>, value: impl Display) -> Result {
    for c in value.to_string().chars() {
        match c {
            '&' => writer.write_str("&amp;")?,
            '<' => writer.write_str("&lt;")?,
            '>' => writer.write_str("&gt;")?,
            '"' => writer.write_str("&quot;")?,
            c => writer.write_char(c)?,
        }
    }
    Ok(())
}

macro_rules! xml {
    ($($xml:expr $(,)?)?) => {};

    ($xml:expr, open $name:literal $(, $($tail:tt)*)?) => {
        $xml.open_element($name)?;
        $(xml!($xml, $($tail)*))?
    };

    ($xml:expr, $arg_name:literal = $arg_value:expr $(, $($tail:tt)*)?) => {
        $xml.attribute($arg_name, $arg_value)?;
        $(xml!($xml, $($tail)*))?
    };

    ($xml:expr, text = $text:expr $(, $($tail:tt)*)?) => {
        $xml.text($text)?;
        $(xml!($xml, $($tail)*))?
    };

    ($xml:expr, close $(, $($tail:tt)*)?) => {
        $xml.close_element()?;
        $(xml!($xml, $($tail)*))?
    };
}

#[cfg(test)]
mod test {
    use std::fmt::Result;

    use super::{Xml, XmlProducer};

    #[test]
    fn nested_elements() {
        let xml = XmlProducer::new(|xml: &mut Xml<'_, '_>| -> Result {
            xml! {
                xml,
                open "g",
                "class" = "letters",
                open "text",
                "x" = 5,
                text = 'A',
                close,
                open "rect",
                close,
            }
            Ok(())
        });
        assert_eq!(
            "<g class=\"letters\">\n<text x=\"5\">A</text>\n<rect/>\n</g>\n",
            xml.to_string()
        );
    }

    #[test]
    fn escapes_text() {
        let xml = XmlProducer::new(|xml: &mut Xml<'_, '_>| -> Result {
            xml!(xml, open "text", "data-word" = "\"R&D\"", text = "<&>");
            Ok(())
        });
        assert_eq!(
            "<text data-word=\"&quot;R&amp;D&quot;\">&lt;&amp;&gt;</text>\n",
            xml.to_string()
        );
    }
}
