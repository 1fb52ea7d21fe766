use crate::{Cell, Error, Result};

/// Returns `rows`, `cols` and the row-major vector of cells of the parsed plaintext pattern.
///
/// Lines starting with `!` are comments. Short rows are padded with dead cells.
pub fn parse_plaintext(data: &str) -> Result<(usize, usize, Vec<Cell>)> {
    let mut lines = vec![];
    for (i, line) in data.lines().enumerate() {
        let line = line.trim_end();
        if line.starts_with('!') {
            continue;
        }
        let row = line
            .chars()
            .map(|symbol| match symbol {
                '.' => Ok(Cell::Dead),
                'O' | '*' => Ok(Cell::Alive),
                _ => Err(Error::ParsePattern {
                    line: i + 1,
                    symbol,
                }),
            })
            .collect::<Result<Vec<_>>>()?;
        lines.push(row);
    }
    // trailing blank lines carry no cells
    while lines.last().is_some_and(|row| row.is_empty()) {
        lines.pop();
    }

    let (rows, cols) = (lines.len(), lines.iter().map(Vec::len).max().unwrap_or(0));
    let mut result = Vec::with_capacity(rows * cols);
    for mut row in lines {
        row.resize(cols, Cell::Dead);
        result.extend(row);
    }
    Ok((rows, cols, result))
}
