//! Address records and their rendering.
//!
//! A record is a fixed row of [`FIELD_COUNT`] text fields. One of them (by default `EZI_ADD`, the
//! full display address) is the key the dictionary indexes records under.

use std::fmt;

use ptrie::Keyed;

pub const FIELD_COUNT: usize = 35;

/// `EZI_ADD`
pub const DEFAULT_KEY_FIELD: usize = 1;

pub const X_FIELD: usize = 33;
pub const Y_FIELD: usize = 34;

pub const FIELD_NAMES: [&str; FIELD_COUNT] = [
    "PFI", "EZI_ADD", "SRC_VERIF", "PROPSTATUS", "GCODEFEAT", "LOC_DESC", "BLGUNTTYP", "HSAUNITID",
    "BUNIT_PRE1", "BUNIT_ID1", "BUNIT_SUF1", "BUNIT_PRE2", "BUNIT_ID2", "BUNIT_SUF2", "FLOOR_TYPE",
    "FLOOR_NO_1", "FLOOR_NO_2", "BUILDING", "COMPLEX", "HSE_PREF1", "HSE_NUM1", "HSE_SUF1",
    "HSE_PREF2", "HSE_NUM2", "HSE_SUF2", "DISP_NUM1", "ROAD_NAME", "ROAD_TYPE", "RD_SUF",
    "LOCALITY", "STATE", "POSTCODE", "ACCESSTYPE", "x", "y",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Address {
    fields: Box<[String]>,
    key_field: usize,
}

impl Address {
    /// Builds a record from parsed fields. Missing trailing fields are empty and extra ones are
    /// dropped.
    pub fn from_fields<I>(fields: I, key_field: usize) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let mut fields: Vec<String> = fields.into_iter().take(FIELD_COUNT).collect();
        fields.resize_with(FIELD_COUNT, String::new);
        Self {
            fields: fields.into_boxed_slice(),
            key_field,
        }
    }

    pub fn field(&self, index: usize) -> &str {
        self.fields.get(index).map_or("", String::as_str)
    }

    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    /// The field this record is indexed under. Empty when the key column is out of range.
    pub fn key_str(&self) -> &str {
        self.field(self.key_field)
    }

    pub fn key_field(&self) -> usize {
        self.key_field
    }
}

impl Keyed for Address {
    fn key(&self) -> &[u8] {
        self.key_str().as_bytes()
    }
}

// `--> NAME: value || ` for every field; coordinates are printed as fixed 5-decimal numbers.
impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("--> ")?;
        for (index, (name, value)) in FIELD_NAMES.iter().zip(self.fields.iter()).enumerate() {
            if index == X_FIELD || index == Y_FIELD {
                write!(f, "{name}: {:.5} || ", leading_float(value))?;
            } else {
                write!(f, "{name}: {value} || ")?;
            }
        }
        Ok(())
    }
}

/// Parses the longest numeric prefix of `text` (after leading whitespace), or `0.0` when there is
/// none. `"144.96 "` is `144.96`, `"12abc"` is `12.0` and `""` is `0.0`.
pub fn leading_float(text: &str) -> f64 {
    let text = text.trim_start();
    let bytes = text.as_bytes();
    let digits_from = |mut i: usize| {
        while bytes.get(i).is_some_and(u8::is_ascii_digit) {
            i += 1;
        }
        i
    };

    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }
    let int_end = digits_from(end);
    let mut mantissa_end = int_end;
    let mut has_digits = int_end > end;
    if bytes.get(int_end) == Some(&b'.') {
        let frac_end = digits_from(int_end + 1);
        has_digits |= frac_end > int_end + 1;
        mantissa_end = frac_end;
    }
    if !has_digits {
        return 0.0;
    }
    end = mantissa_end;

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp = end + 1;
        if matches!(bytes.get(exp), Some(b'+' | b'-')) {
            exp += 1;
        }
        let exp_end = digits_from(exp);
        if exp_end > exp {
            end = exp_end;
        }
    }

    text[..end].parse().unwrap_or(0.0)
}
