use std::collections::HashMap;
use std::io::BufRead;

use anyhow::Context as _;
use thiserror::Error;

use super::line_reader::{classify, Token};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Glyph {
    pub codepoint: u32,
    pub bitmap: [u8; 16],
}

/// Glyphs in first-insertion order, with a codepoint index on the side so a
/// redefinition replaces the earlier entry without moving it.
#[derive(Debug)]
pub struct FontData {
    pub glyphs: Vec<Glyph>,
    index: HashMap<u32, usize>,
}

impl FontData {
    pub fn new() -> Self {
        FontData {
            glyphs: vec![],
            index: HashMap::new(),
        }
    }

    pub fn get(&self, codepoint: u32) -> Option<&Glyph> {
        self.index.get(&codepoint).map(|&slot| &self.glyphs[slot])
    }

    pub fn insert(&mut self, glyph: Glyph) {
        match self.index.get(&glyph.codepoint) {
            Some(&slot) => self.glyphs[slot] = glyph,
            None => {
                self.index.insert(glyph.codepoint, self.glyphs.len());
                self.glyphs.push(glyph);
            }
        }
    }
}

#[derive(Error, Debug)]
pub enum BdfError {
    #[error("invalid ENCODING value {0:?}")]
    InvalidEncoding(String),
    #[error("bitmap row {0:?} too short to hold a byte")]
    RowTooShort(String),
    #[error("bitmap row {0:?} is not hexadecimal")]
    RowNotHex(String),
}

#[derive(Debug, PartialEq, Eq)]
enum State {
    Idle,
    CollectingHeader,
    CollectingBitmap,
}

struct Context {
    state: State,
    codepoint: Option<u32>,
    rows: Vec<String>,
    font_data: FontData,
}

fn start_char(ctx: &mut Context) {
    ctx.state = State::CollectingHeader;
    ctx.codepoint = None;
    ctx.rows.clear();
}

fn encoding(value: &str, ctx: &mut Context) -> anyhow::Result<()> {
    if ctx.state == State::CollectingHeader {
        let code: i32 = value
            .parse()
            .map_err(|_| BdfError::InvalidEncoding(value.to_string()))?;
        // BDF marks unencoded glyphs with -1; wrapped, they stay clear of
        // both export ranges and only count toward the summary total.
        ctx.codepoint = Some(code as u32);
    }
    Ok(())
}

fn bitmap(ctx: &mut Context) {
    if ctx.state != State::Idle {
        ctx.state = State::CollectingBitmap;
        ctx.rows.clear();
    }
}

fn hex_row(row: &str, ctx: &mut Context) {
    if ctx.state == State::CollectingBitmap {
        ctx.rows.push(row.to_string());
    }
}

fn end_char(ctx: &mut Context) -> anyhow::Result<()> {
    match ctx.codepoint {
        Some(codepoint) if !ctx.rows.is_empty() => {
            let mut bitmap = [0u8; 16];
            for (slot, row) in ctx.rows.iter().take(16).enumerate() {
                let byte = row
                    .get(..2)
                    .ok_or_else(|| BdfError::RowTooShort(row.clone()))?;
                bitmap[slot] = u8::from_str_radix(byte, 16)
                    .map_err(|_| BdfError::RowNotHex(row.clone()))?;
            }
            ctx.font_data.insert(Glyph { codepoint, bitmap });
        }
        _ => {
            if ctx.state != State::Idle {
                log::debug!("skipping glyph without bitmap data (codepoint {:?})", ctx.codepoint);
            }
        }
    }
    ctx.state = State::Idle;
    ctx.codepoint = None;
    ctx.rows.clear();
    Ok(())
}

pub fn bdfreader<T: BufRead>(input: T) -> anyhow::Result<FontData> {
    let mut ctx = Context {
        state: State::Idle,
        codepoint: None,
        rows: vec![],
        font_data: FontData::new(),
    };

    for (number, line) in input.lines().enumerate() {
        let line = line.with_context(|| format!("reading line {}", number + 1))?;
        match classify(&line) {
            Token::StartChar => start_char(&mut ctx),
            Token::Encoding(value) => {
                encoding(value, &mut ctx).with_context(|| format!("line {}", number + 1))?;
            }
            Token::Bitmap => bitmap(&mut ctx),
            Token::HexRow(row) => hex_row(row, &mut ctx),
            Token::EndChar => {
                end_char(&mut ctx).with_context(|| format!("line {}", number + 1))?;
            }
            Token::Other => {}
        }
    }

    Ok(ctx.font_data)
}
