//! Generate SVG images of empty or filled crosswords

use std::fmt::{Display, Result, Write};
use std::fs::File;
use std::io;
use std::io::{BufWriter, Write as ioWrite};
use std::path::Path;

use itertools::Itertools;
use once_cell::sync::Lazy;
use xml::Xml;

use crate::collections::Coord;
use crate::image::xml::XmlProducer;
use crate::puzzle::{Crossword, Solution};

#[macro_use]
mod xml;

// colors
const COLOR_BLOCKED: &str = "black";
const COLOR_CELL_BORDER: &str = "#CCC";
const COLOR_OUTER_BORDER: &str = "black";

// dimensions
const CELL_WIDTH: i32 = 100;
const BORDER_WIDTH_CELL: i32 = 2;
const BORDER_WIDTH_OUTER: i32 = 6;
const OUTER_PAD: i32 = BORDER_WIDTH_OUTER - BORDER_WIDTH_CELL / 2;
const NUMBER_PAD: i32 = BORDER_WIDTH_CELL + CELL_WIDTH / 16;

// font sizes
const FONT_SIZE_LETTER: i32 = 64;
const FONT_SIZE_NUMBER: i32 = 24;

static STYLE: Lazy<String> = Lazy::new(|| {
    format!(
        "\
        text{{\
          font-family:sans-serif\
        }}\
        .number{{\
          font-size:{number_font_size}px\
        }}\
        .letters{{\
          font-size:{letter_font_size}px;\
          text-anchor:middle;\
          text-transform:uppercase\
        }}",
        number_font_size = FONT_SIZE_NUMBER,
        letter_font_size = FONT_SIZE_LETTER,
    )
});

/// Creates an image of a crossword, optionally filled with a solution
pub struct CrosswordImageBuilder<'a> {
    crossword: &'a Crossword,
    solution: Option<&'a Solution>,
}

impl<'a> CrosswordImageBuilder<'a> {
    pub fn new(crossword: &'a Crossword) -> Self {
        Self {
            crossword,
            solution: None,
        }
    }

    pub fn solution(&mut self, solution: &'a Solution) -> &mut Self {
        self.solution = Some(solution);
        self
    }

    pub fn build(&self) -> CrosswordImage<'a> {
        let crossword = self.crossword;
        let cells_width = CELL_WIDTH * crossword.width() as i32;
        let cells_height = CELL_WIDTH * crossword.height() as i32;
        // variables are in grid order so slots starting at the same cell are adjacent
        let numbers = crossword
            .variables()
            .iter()
            .map(|variable| variable.start())
            .dedup()
            .collect();
        let letters = match self.solution {
            Some(solution) => solution
                .letter_grid(crossword)
                .iter_coord()
                .filter_map(|(coord, &letter)| letter.map(|letter| (coord, letter)))
                .collect(),
            None => Vec::new(),
        };
        CrosswordImage {
            crossword,
            numbers,
            letters,
            cells_width,
            cells_height,
            width: cells_width + OUTER_PAD * 2,
            height: cells_height + OUTER_PAD * 2,
        }
    }
}

pub struct CrosswordImage<'a> {
    crossword: &'a Crossword,
    /// cells where a slot starts, numbered from 1 in this order
    numbers: Vec<Coord>,
    letters: Vec<(Coord, char)>,
    cells_width: i32,
    cells_height: i32,
    width: i32,
    height: i32,
}

impl CrosswordImage<'_> {
    pub fn save_svg(&self, path: &Path) -> io::Result<()> {
        let file = File::create(path)?;
        self.write_svg(file)
    }

    pub fn write_svg(&self, writer: impl io::Write) -> io::Result<()> {
        let mut writer = BufWriter::new(writer);
        write!(writer, "{}", self.svg())?;
        writer.flush()?;
        Ok(())
    }

    /// The SVG document as text
    pub fn svg(&self) -> impl Display + '_ {
        XmlProducer::new(move |xml| CrosswordSvgContext { image: self, xml }.write())
    }
}

struct CrosswordSvgContext<'a, 'b, 'c> {
    image: &'a CrosswordImage<'a>,
    xml: &'a mut Xml<'b, 'c>,
}

impl CrosswordSvgContext<'_, '_, '_> {
    fn write(mut self) -> Result {
        self.header()?;
        self.background()?;
        self.blocked_cells()?;
        self.grid()?;
        self.outer_border()?;
        self.numbers()?;
        self.letters()
    }

    fn header(&mut self) -> Result {
        xml! {
            self.xml,
            open "svg",
            "xmlns" = "http://www.w3.org/2000/svg",
            "viewBox" = format!("0 0 {} {}", self.image.width, self.image.height),
            open "style",
            text = STYLE.as_str(),
            close,
        }
        Ok(())
    }

    fn background(&mut self) -> Result {
        xml! {
            self.xml,
            open "rect",
            "x" = OUTER_PAD,
            "y" = OUTER_PAD,
            "width" = self.image.cells_width,
            "height" = self.image.cells_height,
            "fill" = "white",
            close,
        }
        Ok(())
    }

    fn blocked_cells(&mut self) -> Result {
        let crossword = self.image.crossword;
        let mut d = String::new();
        for (coord, &open) in crossword.structure().iter_coord() {
            if !open {
                let (x, y) = cell_position(coord);
                write!(d, "M{},{}h{}v{}h{}z", x, y, CELL_WIDTH, CELL_WIDTH, -CELL_WIDTH)?;
            }
        }
        if d.is_empty() {
            return Ok(());
        }
        xml! {
            self.xml,
            open "path",
            "class" = "blocked",
            "fill" = COLOR_BLOCKED,
            "d" = d,
            close,
        }
        Ok(())
    }

    fn grid(&mut self) -> Result {
        let crossword = self.image.crossword;
        let mut d = String::new();
        for row in 1..crossword.height() {
            let (x, y) = cell_position(Coord::new(row, 0));
            write!(d, "M{},{}h{}", x, y, self.image.cells_width)?;
        }
        for col in 1..crossword.width() {
            let (x, y) = cell_position(Coord::new(0, col));
            write!(d, "M{},{}v{}", x, y, self.image.cells_height)?;
        }
        if d.is_empty() {
            return Ok(());
        }
        xml! {
            self.xml,
            open "path",
            "stroke" = COLOR_CELL_BORDER,
            "stroke-width" = BORDER_WIDTH_CELL,
            "d" = d,
            close,
        }
        Ok(())
    }

    fn outer_border(&mut self) -> Result {
        let x = BORDER_WIDTH_OUTER / 2;
        xml! {
            self.xml,
            open "rect",
            "x" = x,
            "y" = x,
            "width" = self.image.width - BORDER_WIDTH_OUTER,
            "height" = self.image.height - BORDER_WIDTH_OUTER,
            "fill" = "none",
            "stroke" = COLOR_OUTER_BORDER,
            "stroke-width" = BORDER_WIDTH_OUTER,
            "stroke-linejoin" = "round",
            close,
        }
        Ok(())
    }

    fn numbers(&mut self) -> Result {
        if self.image.numbers.is_empty() {
            return Ok(());
        }
        xml!(self.xml, open "g", "class" = "number");
        for (i, &coord) in self.image.numbers.iter().enumerate() {
            let (x, y) = cell_position(coord);
            xml! {
                self.xml,
                open "text",
                "x" = x + NUMBER_PAD,
                "y" = y + NUMBER_PAD,
                "dy" = ".8em",
                text = i + 1,
                close,
            }
        }
        xml!(self.xml, close);
        Ok(())
    }

    fn letters(&mut self) -> Result {
        if self.image.letters.is_empty() {
            return Ok(());
        }
        xml!(self.xml, open "g", "class" = "letters");
        for &(coord, letter) in &self.image.letters {
            let (x, y) = cell_position(coord);
            xml! {
                self.xml,
                open "text",
                "x" = x + CELL_WIDTH / 2,
                "y" = y + CELL_WIDTH / 2,
                "dy" = ".35em",
                text = letter,
                close,
            }
        }
        xml!(self.xml, close);
        Ok(())
    }
}

/// The top left corner of a cell in image units, as (x, y)
fn cell_position(coord: Coord) -> (i32, i32) {
    (
        coord.col() as i32 * CELL_WIDTH + OUTER_PAD,
        coord.row() as i32 * CELL_WIDTH + OUTER_PAD,
    )
}
