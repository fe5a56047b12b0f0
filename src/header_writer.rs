use std::io;
use std::io::Write;

use super::bdf_reader::FontData;

// Printable ASCII and the Cyrillic block; everything else stays out of the
// generated table.
const EXPORT_RANGES: [(u32, u32); 2] = [(32, 126), (0x0400, 0x04FF)];

pub fn is_exported(codepoint: u32) -> bool {
    EXPORT_RANGES
        .iter()
        .any(|&(low, high)| (low..=high).contains(&codepoint))
}

pub fn write_header<T: Write>(output: &mut T, font: &FontData) -> io::Result<()> {
    writeln!(output, "#ifndef SDLFONT_UNICODE_H")?;
    writeln!(output, "#define SDLFONT_UNICODE_H")?;
    writeln!(output)?;
    writeln!(output, "#include <stdint.h>")?;
    writeln!(output)?;
    writeln!(
        output,
        "typedef struct {{ uint32_t codepoint; uint8_t bitmap[16]; }} Glyph;"
    )?;
    writeln!(output)?;
    writeln!(output, "static const Glyph font_data[] = {{")?;

    let exported: Vec<_> = font
        .glyphs
        .iter()
        .filter(|glyph| is_exported(glyph.codepoint))
        .collect();
    for (slot, glyph) in exported.iter().enumerate() {
        let bytes: Vec<String> = glyph
            .bitmap
            .iter()
            .map(|byte| format!("0x{byte:02X}"))
            .collect();
        let separator = if slot + 1 < exported.len() { "," } else { "" };
        writeln!(
            output,
            "    {{0x{:04X}, {{{}}}}}{}",
            glyph.codepoint,
            bytes.join(", "),
            separator
        )?;
    }

    writeln!(output, "}};")?;
    writeln!(output)?;
    writeln!(
        output,
        "static const int font_data_size = sizeof(font_data) / sizeof(font_data[0]);"
    )?;
    writeln!(output, "#endif // SDLFONT_UNICODE_H")?;
    Ok(())
}
