//! Form-to-JSON serialization.
//!
//! Every element under a form carrying a `name` attribute becomes one key.
//! A `data-type` attribute of `int`, `float` or `bool` coerces the value;
//! numbers that fail to parse become `null`. No validation, no nesting.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use serde_json::{Map, Value};

/// Declared coercion of a named field.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FieldType {
    #[default]
    Text,
    Int,
    Float,
    Bool,
}

impl FieldType {
    /// Coercion for a `data-type` attribute value; unknown values keep text.
    #[must_use]
    pub fn from_attr(attr: Option<&str>) -> Self {
        match attr.map(str::trim) {
            Some("int") => Self::Int,
            Some("float") => Self::Float,
            Some("bool") => Self::Bool,
            _ => Self::Text,
        }
    }
}

/// Snapshot of one named element at submission time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormField {
    pub name: String,
    pub value: String,
    pub kind: FieldType,
    pub checked: bool,
}

impl FormField {
    pub fn text(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::typed(name, value, FieldType::Text)
    }

    pub fn typed(name: impl Into<String>, value: impl Into<String>, kind: FieldType) -> Self {
        Self { name: name.into(), value: value.into(), kind, checked: false }
    }

    pub fn checkbox(name: impl Into<String>, checked: bool) -> Self {
        Self { name: name.into(), value: "on".to_owned(), kind: FieldType::Bool, checked }
    }

    /// Value after applying the declared coercion.
    #[must_use]
    pub fn json_value(&self) -> Value {
        match self.kind {
            FieldType::Text => Value::String(self.value.clone()),
            FieldType::Int => int_json(&self.value),
            FieldType::Float => parse_float_prefix(&self.value).map_or(Value::Null, Value::from),
            FieldType::Bool => Value::Bool(self.checked),
        }
    }
}

/// Build the key/value object for a set of fields. Later duplicates win.
#[must_use]
pub fn build_object(fields: &[FormField]) -> Map<String, Value> {
    let mut obj = Map::new();
    for field in fields {
        obj.insert(field.name.clone(), field.json_value());
    }
    obj
}

/// Build the JSON text for a set of fields.
#[must_use]
pub fn build_json(fields: &[FormField]) -> String {
    Value::Object(build_object(fields)).to_string()
}

/// Sign, radix and digit run of the leading integer in `raw`.
fn int_prefix(raw: &str) -> Option<(bool, u32, &str)> {
    let s = raw.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let (radix, digits) = if rest.starts_with("0x") || rest.starts_with("0X") {
        (16, &rest[2..])
    } else {
        (10, rest)
    };
    let end = digits.find(|c: char| !c.is_digit(radix)).unwrap_or(digits.len());
    (end > 0).then(|| (negative, radix, &digits[..end]))
}

/// Leading integer of `raw`: optional whitespace, sign, then decimal digits
/// or `0x` hex digits. Trailing garbage is ignored; `None` past `i64`.
#[must_use]
pub fn parse_int_prefix(raw: &str) -> Option<i64> {
    let (negative, radix, digits) = int_prefix(raw)?;
    let value = i64::from_str_radix(digits, radix).ok()?;
    Some(if negative { -value } else { value })
}

/// JSON value of an `int` field. Digit runs too long for `i64` become the
/// nearest float; only an infinite result is `null`.
#[must_use]
pub fn int_json(raw: &str) -> Value {
    if let Some(value) = parse_int_prefix(raw) {
        return Value::from(value);
    }
    let Some((negative, radix, digits)) = int_prefix(raw) else {
        return Value::Null;
    };
    let magnitude = digits
        .chars()
        .filter_map(|c| c.to_digit(radix))
        .fold(0.0_f64, |acc, d| acc * f64::from(radix) + f64::from(d));
    let value = if negative { -magnitude } else { magnitude };
    if value.is_finite() { Value::from(value) } else { Value::Null }
}

/// Longest leading decimal number of `raw`, with optional fraction and
/// exponent. Non-finite results are rejected.
#[must_use]
pub fn parse_float_prefix(raw: &str) -> Option<f64> {
    let s = raw.trim_start();
    let bytes = s.as_bytes();
    let digits_from = |mut i: usize| {
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        i
    };

    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let int_end = digits_from(end);
    let mut mantissa_digits = int_end - end;
    end = int_end;

    if bytes.get(end) == Some(&b'.') {
        let frac_end = digits_from(end + 1);
        let frac_digits = frac_end - (end + 1);
        if mantissa_digits + frac_digits > 0 {
            mantissa_digits += frac_digits;
            end = frac_end;
        }
    }
    if mantissa_digits == 0 {
        return None;
    }

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

    s[..end].parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Snapshot every named element under `form`.
#[cfg(feature = "csr")]
pub fn collect_fields(form: &web_sys::Element) -> Vec<FormField> {
    use wasm_bindgen::JsCast;

    let Ok(nodes) = form.query_selector_all("*[name]") else {
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<web_sys::Element>().ok())
        .filter_map(|el| field_from_element(&el))
        .collect()
}

#[cfg(feature = "csr")]
fn field_from_element(el: &web_sys::Element) -> Option<FormField> {
    use wasm_bindgen::JsCast;

    let name = el.get_attribute("name")?;
    let kind = FieldType::from_attr(el.get_attribute("data-type").as_deref());
    let (value, checked) = if let Some(input) = el.dyn_ref::<web_sys::HtmlInputElement>() {
        (input.value(), input.checked())
    } else if let Some(select) = el.dyn_ref::<web_sys::HtmlSelectElement>() {
        (select.value(), false)
    } else if let Some(area) = el.dyn_ref::<web_sys::HtmlTextAreaElement>() {
        (area.value(), false)
    } else {
        (el.get_attribute("value").unwrap_or_default(), false)
    };
    Some(FormField { name, value, kind, checked })
}

/// Serialize the form matched by `selector`.
///
/// # Errors
///
/// Returns `MissingElement` when nothing matches, or `Unavailable` outside
/// the browser.
pub fn form_object(selector: &str) -> Result<Map<String, Value>, crate::ConsoleError> {
    #[cfg(feature = "csr")]
    {
        let form = super::dom::query(selector)
            .ok_or_else(|| crate::ConsoleError::MissingElement(selector.to_owned()))?;
        Ok(build_object(&collect_fields(&form)))
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = selector;
        Err(crate::ConsoleError::Unavailable("document"))
    }
}
