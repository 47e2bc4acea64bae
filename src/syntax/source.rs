/// A zero-based line/column pair. `character` counts chars from the
/// start of the line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LineAndCharacter {
    pub line: u32,
    pub character: u32,
}

/// The text a syntax tree was parsed from.
#[derive(Clone, Debug)]
pub struct SourceFile {
    pub file_name: String,
    text: String,
    /// Byte offset of the first char of every line.
    line_starts: Vec<u32>,
}

impl SourceFile {
    pub fn new(file_name: impl Into<String>, text: impl Into<String>) -> Self {
        let text = text.into();
        let mut line_starts = vec![0];
        for (i, b) in text.bytes().enumerate() {
            if b == b'\n' {
                line_starts.push(i as u32 + 1);
            }
        }
        Self {
            file_name: file_name.into(),
            text,
            line_starts,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn len(&self) -> u32 {
        self.text.len() as u32
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Decode a byte offset. Offsets past the end land on the last line.
    pub fn line_and_character_of_position(&self, offset: u32) -> LineAndCharacter {
        let offset = offset.min(self.len());
        let line = match self.line_starts.binary_search(&offset) {
            Ok(line) => line,
            Err(next) => next - 1,
        };
        let line_start = self.line_starts[line] as usize;
        let prefix = self
            .text
            .get(line_start..offset as usize)
            .unwrap_or_default();
        LineAndCharacter {
            line: line as u32,
            character: prefix.chars().count() as u32,
        }
    }
}
