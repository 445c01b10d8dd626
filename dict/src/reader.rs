//! Comma-separated address input.
//!
//! The first line of the input is a header and is skipped. Each following line is one record.
//! A field that opens with `"` runs to the next `"` and may contain commas; the quotes are not
//! part of the value. There is no escaping of quotes inside quoted fields.

use std::io::BufRead;

use tracing::trace;

use crate::address::{Address, FIELD_COUNT};
use crate::error::{DictError, Result};

/// Splits one line into at most [`FIELD_COUNT`] fields.
pub fn split_fields(line: &str) -> Vec<String> {
    let bytes = line.as_bytes();
    let mut fields = Vec::with_capacity(FIELD_COUNT);
    let mut in_quotes = false;
    let mut start = 0;
    let mut pos = 0;

    while pos < bytes.len() && fields.len() < FIELD_COUNT {
        match (bytes[pos], in_quotes) {
            (b'"', false) => {
                in_quotes = true;
                pos += 1;
                start = pos;
            }
            (b'"', true) => {
                in_quotes = false;
                fields.push(line[start..pos].to_string());
                pos += 1;
                if bytes.get(pos) == Some(&b',') {
                    pos += 1;
                }
                start = pos;
            }
            (b',', false) => {
                fields.push(line[start..pos].to_string());
                pos += 1;
                start = pos;
            }
            _ => pos += 1,
        }
    }

    if fields.len() < FIELD_COUNT {
        fields.push(line[start..pos].to_string());
    }
    fields
}

/// Reads [`Address`] records from a header-first CSV stream.
pub struct AddressReader<B> {
    inner: B,
    header_consumed: bool,
    key_field: usize,
    line_no: usize,
    buf: Vec<u8>,
}

impl<B: BufRead> AddressReader<B> {
    pub fn new(inner: B, key_field: usize) -> Self {
        Self {
            inner,
            header_consumed: false,
            key_field,
            line_no: 0,
            buf: Vec::new(),
        }
    }

    /// Reads the next line into `buf` without its line ending. `false` at end of input.
    fn next_line(&mut self) -> Result<bool> {
        self.buf.clear();
        if self.inner.read_until(b'\n', &mut self.buf)? == 0 {
            return Ok(false);
        }
        self.line_no += 1;
        if self.buf.last() == Some(&b'\n') {
            self.buf.pop();
            if self.buf.last() == Some(&b'\r') {
                self.buf.pop();
            }
        }
        Ok(true)
    }

    /// The next record, or `None` once the input is exhausted.
    pub fn read_record(&mut self) -> Result<Option<Address>> {
        if !self.header_consumed {
            if !self.next_line()? {
                return Ok(None);
            }
            trace!(header = %String::from_utf8_lossy(&self.buf), "skipping header");
            self.header_consumed = true;
        }

        if !self.next_line()? {
            return Ok(None);
        }
        let line = std::str::from_utf8(&self.buf).map_err(|e| DictError::Format {
            line: self.line_no,
            message: e.to_string(),
        })?;
        Ok(Some(Address::from_fields(split_fields(line), self.key_field)))
    }
}

impl<B: BufRead> Iterator for AddressReader<B> {
    type Item = Result<Address>;

    fn next(&mut self) -> Option<Self::Item> {
        self.read_record().transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::address::DEFAULT_KEY_FIELD;
    use std::io::Cursor;

    #[test]
    fn plain_fields() {
        assert_eq!(split_fields("a,b,c"), vec!["a", "b", "c"]);
        assert_eq!(split_fields("a,,c,"), vec!["a", "", "c", ""]);
        assert_eq!(split_fields(""), vec![""]);
    }

    #[test]
    fn quoted_fields_keep_commas() {
        assert_eq!(
            split_fields(r#"1,"UNIT 2, 10 HIGH ST",VIC"#),
            vec!["1", "UNIT 2, 10 HIGH ST", "VIC"]
        );
        assert_eq!(split_fields(r#""",x"#), vec!["", "x"]);
    }

    #[test]
    fn quoted_field_at_end_of_line() {
        // Nothing follows the closing quote, which still leaves an empty final field.
        assert_eq!(split_fields(r#"a,"b""#), vec!["a", "b", ""]);
    }

    #[test]
    fn extra_fields_are_ignored() {
        let line = (0..50).map(|i| i.to_string()).collect::<Vec<_>>().join(",");
        let fields = split_fields(&line);
        assert_eq!(fields.len(), FIELD_COUNT);
        assert_eq!(fields[FIELD_COUNT - 1], "34");
    }

    #[test]
    fn skips_the_header_once() {
        let input = "PFI,EZI_ADD\n1,ONE ST\r\n2,TWO ST\n3,\"THREE, ST\"";
        let reader = AddressReader::new(Cursor::new(input), DEFAULT_KEY_FIELD);
        let keys: Vec<String> = reader
            .map(|r| r.unwrap().key_str().to_string())
            .collect();
        assert_eq!(keys, vec!["ONE ST", "TWO ST", "THREE, ST"]);
    }

    #[test]
    fn empty_and_header_only_inputs() {
        assert_eq!(AddressReader::new(Cursor::new(""), 1).count(), 0);
        assert_eq!(AddressReader::new(Cursor::new("PFI,EZI_ADD\n"), 1).count(), 0);
    }

    #[test]
    fn blank_lines_are_records() {
        let reader = AddressReader::new(Cursor::new("h\n\n1,A\n"), 1);
        let records: Vec<Address> = reader.map(|r| r.unwrap()).collect();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].key_str(), "");
        assert_eq!(records[1].key_str(), "A");
    }

    #[test]
    fn invalid_utf8_reports_the_line() {
        let input: &[u8] = b"h\n1,ok\n2,\xff\xfe\n";
        let mut reader = AddressReader::new(input, 1);
        assert!(reader.read_record().unwrap().is_some());
        match reader.read_record() {
            Err(DictError::Format { line, .. }) => assert_eq!(line, 3),
            other => panic!("expected a format error, got {other:?}"),
        }
    }
}
