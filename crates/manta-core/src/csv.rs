//! Hand-rolled CSV record reader for the dataset format.
//!
//! Quoted fields, escaped quotes (`""`) and CR/LF line endings are handled;
//! newlines are legal inside quoted fields. Extra columns are ignored. The
//! reader is deliberately small: the input is one file, parsed once at
//! startup.

use crate::LoadOptions;
use crate::dataset::DataPoint;
use crate::error::{Error, Result};

const COL_X: &str = "x";
const COL_Y: &str = "y";
const COL_CLUSTER: &str = "unitCluster";
const COL_NAME: &str = "unitName";

pub(crate) fn parse_points(text: &str, options: LoadOptions) -> Result<Vec<DataPoint>> {
    let mut records = Records::new(text);

    let Some((_, header)) = records.next_record()? else {
        return Err(Error::Csv {
            line: 1,
            message: "missing header row".to_string(),
        });
    };
    let x_idx = column_index(&header, COL_X)?;
    let y_idx = column_index(&header, COL_Y)?;
    let cluster_idx = column_index(&header, COL_CLUSTER)?;
    let name_idx = column_index(&header, COL_NAME)?;

    let mut points = Vec::new();
    let mut skipped = 0usize;
    while let Some((line, fields)) = records.next_record()? {
        if fields.len() == 1 && fields[0].trim().is_empty() {
            continue;
        }
        match record_to_point(line, &fields, x_idx, y_idx, cluster_idx, name_idx) {
            Ok(point) => points.push(point),
            Err(err) if options.skip_invalid_rows => {
                skipped += 1;
                tracing::debug!(line, error = %err, "skipping invalid CSV record");
            }
            Err(err) => return Err(err),
        }
    }
    if skipped > 0 {
        tracing::debug!(skipped, "lenient load dropped invalid records");
    }
    Ok(points)
}

fn column_index(header: &[String], name: &'static str) -> Result<usize> {
    header
        .iter()
        .position(|h| h.trim().trim_start_matches('\u{feff}') == name)
        .ok_or(Error::MissingColumn { column: name })
}

fn record_to_point(
    line: usize,
    fields: &[String],
    x_idx: usize,
    y_idx: usize,
    cluster_idx: usize,
    name_idx: usize,
) -> Result<DataPoint> {
    let needed = x_idx.max(y_idx).max(cluster_idx).max(name_idx) + 1;
    if fields.len() < needed {
        return Err(Error::Csv {
            line,
            message: format!("expected at least {needed} fields, got {}", fields.len()),
        });
    }

    Ok(DataPoint {
        x: parse_f64(line, COL_X, &fields[x_idx])?,
        y: parse_f64(line, COL_Y, &fields[y_idx])?,
        cluster: fields[cluster_idx].clone(),
        unit_name: fields[name_idx].clone(),
    })
}

fn parse_f64(line: usize, column: &'static str, raw: &str) -> Result<f64> {
    raw.trim()
        .parse::<f64>()
        .map_err(|_| Error::InvalidNumber {
            line,
            column,
            value: raw.to_string(),
        })
}

struct Records<'a> {
    text: &'a str,
    pos: usize,
    line: usize,
}

impl<'a> Records<'a> {
    fn new(text: &'a str) -> Self {
        Self { text, pos: 0, line: 1 }
    }

    /// Returns the next record with the line number it started on, or `None`
    /// at end of input.
    fn next_record(&mut self) -> Result<Option<(usize, Vec<String>)>> {
        let bytes = self.text.as_bytes();
        if self.pos >= bytes.len() {
            return Ok(None);
        }

        let start_line = self.line;
        let mut fields: Vec<String> = Vec::new();
        let mut field = String::new();
        let mut in_quotes = false;

        while self.pos < bytes.len() {
            let b = bytes[self.pos];
            if in_quotes {
                match b {
                    b'"' => {
                        if bytes.get(self.pos + 1) == Some(&b'"') {
                            field.push('"');
                            self.pos += 2;
                        } else {
                            in_quotes = false;
                            self.pos += 1;
                        }
                    }
                    b'\r' => {
                        self.pos += 1;
                    }
                    b'\n' => {
                        field.push('\n');
                        self.line += 1;
                        self.pos += 1;
                    }
                    _ => self.push_char(&mut field),
                }
            } else {
                match b {
                    b',' => {
                        fields.push(std::mem::take(&mut field));
                        self.pos += 1;
                    }
                    b'"' if field.is_empty() => {
                        in_quotes = true;
                        self.pos += 1;
                    }
                    b'\r' => {
                        self.pos += 1;
                        if bytes.get(self.pos) == Some(&b'\n') {
                            self.pos += 1;
                        }
                        self.line += 1;
                        fields.push(field);
                        return Ok(Some((start_line, fields)));
                    }
                    b'\n' => {
                        self.pos += 1;
                        self.line += 1;
                        fields.push(field);
                        return Ok(Some((start_line, fields)));
                    }
                    _ => self.push_char(&mut field),
                }
            }
        }

        if in_quotes {
            return Err(Error::Csv {
                line: start_line,
                message: "unterminated quoted field".to_string(),
            });
        }
        fields.push(field);
        Ok(Some((start_line, fields)))
    }

    fn push_char(&mut self, field: &mut String) {
        if let Some(ch) = self.text[self.pos..].chars().next() {
            field.push(ch);
            self.pos += ch.len_utf8();
        } else {
            self.pos += 1;
        }
    }
}
