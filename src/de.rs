//! Properties deserialization.
//!
//! This module provides the [`Deserializer`] implementation that parses
//! `KEY=VALUE` lines into Rust data structures.
//!
//! ## Overview
//!
//! Decoding is target-type-driven. The input is first split into property
//! lines (blank lines and `#` comments skipped, a non-comment line without
//! `=` rejected), then each line's dotted key path is walked against the
//! target type:
//!
//! - a scalar field consumes the whole path and parses the value text;
//! - a nested record peels its own segment and recurses;
//! - a sequence field takes indexed lines (`k[0]=a`) or a single
//!   comma-separated line (`k=a,b`);
//! - a mapping field takes the full remaining path as the entry key.
//!
//! Keys whose first segment matches no field are silently ignored so that
//! consumers stay forward compatible; see
//! [`PropsOptions::with_deny_unknown_keys`](crate::PropsOptions::with_deny_unknown_keys)
//! to reject them instead. Duplicate keys resolve last-write-wins.
//!
//! ## Usage
//!
//! Most users should use the high-level functions in the crate root:
//!
//! ```rust
//! use serde_props::from_str;
//! use serde::Deserialize;
//!
//! #[derive(Deserialize, Debug, PartialEq)]
//! struct Server { host: String, port: u16 }
//!
//! let server: Server = from_str("host=localhost\nport=8080").unwrap();
//! assert_eq!(server, Server { host: "localhost".into(), port: 8080 });
//! ```

use crate::field::resolve_fields;
use crate::value::parse_bool;
use crate::{Error, PropsOptions, Result};
use indexmap::IndexMap;
use serde::de::value::BorrowedStrDeserializer;
use serde::de::{self, IntoDeserializer, Visitor};
use serde::forward_to_deserialize_any;
use std::collections::BTreeMap;

/// The properties deserializer.
///
/// Parses `KEY=VALUE` text into Rust values implementing `Deserialize`.
/// Created via [`Deserializer::from_str`]. The root target must be a record
/// (struct) or a string-keyed map.
pub struct Deserializer<'de> {
    input: &'de str,
    options: PropsOptions,
}

impl<'de> Deserializer<'de> {
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(input: &'de str) -> Self {
        Self::from_str_with_options(input, PropsOptions::default())
    }

    pub fn from_str_with_options(input: &'de str, options: PropsOptions) -> Self {
        Deserializer { input, options }
    }

    fn root_node(&self) -> Result<Node<'de>> {
        let lines = parse_lines(self.input)?;
        Ok(Node {
            key: String::new(),
            lines: lines
                .into_iter()
                .map(|line| ScopedLine {
                    rest: line.key,
                    index: None,
                    value: line.value,
                })
                .collect(),
            options: self.options.clone(),
        })
    }
}

impl<'de, 'a> de::Deserializer<'de> for &'a mut Deserializer<'de> {
    type Error = Error;

    fn deserialize_any<V>(self, visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        self.root_node()?.deserialize_any(visitor)
    }

    fn deserialize_struct<V>(
        self,
        name: &'static str,
        fields: &'static [&'static str],
        visitor: V,
    ) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        self.root_node()?.deserialize_struct(name, fields, visitor)
    }

    fn deserialize_map<V>(self, visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        self.root_node()?.deserialize_map(visitor)
    }

    fn deserialize_option<V>(self, visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        visitor.visit_some(self)
    }

    fn deserialize_newtype_struct<V>(self, _name: &'static str, visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        visitor.visit_newtype_struct(self)
    }

    fn deserialize_ignored_any<V>(self, visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        visitor.visit_unit()
    }

    forward_to_deserialize_any! {
        bool i8 i16 i32 i64 u8 u16 u32 u64 f32 f64 char str string
        bytes byte_buf unit unit_struct seq tuple tuple_struct
        enum identifier
    }
}

/// A raw property line, after comment and blank-line filtering.
#[derive(Clone, Copy, Debug)]
struct Line<'de> {
    key: &'de str,
    value: &'de str,
}

/// Splits input into property lines.
///
/// Lines are trimmed of surrounding whitespace first, which also absorbs the
/// `\r` of CRLF input. A surviving line without `=` is an error.
fn parse_lines(input: &str) -> Result<Vec<Line<'_>>> {
    let mut lines = Vec::new();
    for (idx, raw) in input.split('\n').enumerate() {
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let eq = match trimmed.find('=') {
            Some(pos) => pos,
            None => return Err(Error::invalid_line(idx + 1, trimmed)),
        };
        lines.push(Line {
            key: trimmed[..eq].trim_end(),
            value: trimmed[eq + 1..].trim_start(),
        });
    }
    Ok(lines)
}

/// A line scoped to some point in the key path: `rest` is what remains of
/// the dotted key, `index` the `[i]` suffix of the segment most recently
/// peeled off by the enclosing record.
#[derive(Clone, Copy)]
struct ScopedLine<'de> {
    rest: &'de str,
    index: Option<usize>,
    value: &'de str,
}

/// Splits a key path into its first segment and the remainder.
fn split_segment(path: &str) -> (&str, &str) {
    match path.find('.') {
        Some(dot) => (&path[..dot], &path[dot + 1..]),
        None => (path, ""),
    }
}

/// Strips a trailing `[i]` index from a segment. Segments whose bracket
/// content is not a number are left untouched and treated as ordinary
/// (unknown) names.
fn split_index(segment: &str) -> (&str, Option<usize>) {
    if let Some(open) = segment.rfind('[') {
        if let Some(inner) = segment[open + 1..].strip_suffix(']') {
            if let Ok(index) = inner.parse::<usize>() {
                return (&segment[..open], Some(index));
            }
        }
    }
    (segment, None)
}

/// A set of lines scoped to one field (or the root record). `key` is the
/// full dotted path so far, used in error messages.
struct Node<'de> {
    key: String,
    lines: Vec<ScopedLine<'de>>,
    options: PropsOptions,
}

impl<'de> Node<'de> {
    fn child_key(&self, segment: &str) -> String {
        if self.key.is_empty() {
            segment.to_string()
        } else {
            format!("{}.{}", self.key, segment)
        }
    }

    /// Resolves this node to a single scalar line: every line must consume
    /// the whole key path, and the last write wins.
    fn last_scalar(&self) -> Result<ScopedLine<'de>> {
        for line in &self.lines {
            if !line.rest.is_empty() {
                return Err(Error::shape_mismatch(
                    &self.key,
                    &format!("path continues with {:?} but the field is a scalar", line.rest),
                ));
            }
            if line.index.is_some() {
                return Err(Error::shape_mismatch(
                    &self.key,
                    "indexed key targets a scalar field",
                ));
            }
        }
        match self.lines.last() {
            Some(line) => Ok(*line),
            None => Err(Error::custom(format!("no value for key {:?}", self.key))),
        }
    }

    fn parse_i64(&self) -> Result<i64> {
        let line = self.last_scalar()?;
        line.value
            .parse()
            .map_err(|_| Error::invalid_value(&self.key, line.value, "integer"))
    }

    fn parse_u64(&self) -> Result<u64> {
        let line = self.last_scalar()?;
        line.value
            .parse()
            .map_err(|_| Error::invalid_value(&self.key, line.value, "unsigned integer"))
    }

    fn parse_f64(&self) -> Result<f64> {
        let line = self.last_scalar()?;
        line.value
            .parse()
            .map_err(|_| Error::invalid_value(&self.key, line.value, "float"))
    }
}

impl<'de> de::Deserializer<'de> for Node<'de> {
    type Error = Error;

    fn deserialize_any<V>(self, visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        // Without a target type to steer by: indexed lines read as a
        // sequence, dotted lines as a mapping, plain lines as a string.
        if self.lines.iter().any(|line| line.index.is_some()) {
            self.deserialize_seq(visitor)
        } else if self.lines.iter().any(|line| !line.rest.is_empty()) {
            self.deserialize_map(visitor)
        } else {
            let line = self.last_scalar()?;
            visitor.visit_borrowed_str(line.value)
        }
    }

    fn deserialize_bool<V>(self, visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        let line = self.last_scalar()?;
        match parse_bool(line.value) {
            Some(b) => visitor.visit_bool(b),
            None => Err(Error::invalid_value(&self.key, line.value, "boolean")),
        }
    }

    fn deserialize_i8<V>(self, visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        visitor.visit_i64(self.parse_i64()?)
    }

    fn deserialize_i16<V>(self, visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        visitor.visit_i64(self.parse_i64()?)
    }

    fn deserialize_i32<V>(self, visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        visitor.visit_i64(self.parse_i64()?)
    }

    fn deserialize_i64<V>(self, visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        visitor.visit_i64(self.parse_i64()?)
    }

    fn deserialize_u8<V>(self, visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        visitor.visit_u64(self.parse_u64()?)
    }

    fn deserialize_u16<V>(self, visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        visitor.visit_u64(self.parse_u64()?)
    }

    fn deserialize_u32<V>(self, visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        visitor.visit_u64(self.parse_u64()?)
    }

    fn deserialize_u64<V>(self, visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        visitor.visit_u64(self.parse_u64()?)
    }

    fn deserialize_f32<V>(self, visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        visitor.visit_f64(self.parse_f64()?)
    }

    fn deserialize_f64<V>(self, visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        visitor.visit_f64(self.parse_f64()?)
    }

    fn deserialize_char<V>(self, visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        let line = self.last_scalar()?;
        let mut chars = line.value.chars();
        match (chars.next(), chars.next()) {
            (Some(ch), None) => visitor.visit_char(ch),
            _ => Err(Error::invalid_value(&self.key, line.value, "character")),
        }
    }

    fn deserialize_str<V>(self, visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        let line = self.last_scalar()?;
        visitor.visit_borrowed_str(line.value)
    }

    fn deserialize_string<V>(self, visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        self.deserialize_str(visitor)
    }

    fn deserialize_bytes<V>(self, _visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        Err(Error::unsupported_type("binary values"))
    }

    fn deserialize_byte_buf<V>(self, _visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        Err(Error::unsupported_type("binary values"))
    }

    fn deserialize_option<V>(self, visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        // The field has at least one line, so it is present.
        visitor.visit_some(self)
    }

    fn deserialize_unit<V>(self, visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        visitor.visit_unit()
    }

    fn deserialize_unit_struct<V>(self, _name: &'static str, visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        visitor.visit_unit()
    }

    fn deserialize_newtype_struct<V>(self, _name: &'static str, visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        visitor.visit_newtype_struct(self)
    }

    fn deserialize_seq<V>(self, visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        for line in &self.lines {
            if !line.rest.is_empty() {
                return Err(Error::shape_mismatch(
                    &self.key,
                    &format!(
                        "path continues with {:?} but the field is a sequence",
                        line.rest
                    ),
                ));
            }
        }

        let indexed = self.lines.iter().any(|line| line.index.is_some());
        let elements: Vec<&'de str> = if indexed {
            if self.lines.iter().any(|line| line.index.is_none()) {
                return Err(Error::shape_mismatch(
                    &self.key,
                    "mixed indexed and comma-separated forms for one sequence",
                ));
            }
            // Later writes to the same index win; elements come back in
            // index order.
            let mut by_index = BTreeMap::new();
            for line in &self.lines {
                if let Some(index) = line.index {
                    by_index.insert(index, line.value);
                }
            }
            by_index.into_values().collect()
        } else {
            // Each non-indexed line replaces the sequence wholesale.
            let line = match self.lines.last() {
                Some(line) => *line,
                None => return Err(Error::custom(format!("no value for key {:?}", self.key))),
            };
            line.value.split(',').map(str::trim).collect()
        };

        visitor.visit_seq(SeqElements {
            key: self.key,
            elements: elements.into_iter(),
        })
    }

    fn deserialize_tuple<V>(self, _len: usize, visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        self.deserialize_seq(visitor)
    }

    fn deserialize_tuple_struct<V>(
        self,
        _name: &'static str,
        _len: usize,
        visitor: V,
    ) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        self.deserialize_seq(visitor)
    }

    fn deserialize_map<V>(self, visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        let mut entries = Vec::with_capacity(self.lines.len());
        for line in &self.lines {
            if line.index.is_some() {
                return Err(Error::shape_mismatch(
                    &self.key,
                    "indexed key targets a mapping field",
                ));
            }
            // The full remainder is the entry key; an exhausted path
            // installs the empty-string entry.
            entries.push((line.rest, line.value));
        }
        visitor.visit_map(MapEntries {
            key: self.key,
            entries: entries.into_iter(),
            pending_value: None,
        })
    }

    fn deserialize_struct<V>(
        self,
        _name: &'static str,
        fields: &'static [&'static str],
        visitor: V,
    ) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        let resolved = resolve_fields(fields);
        let root = self.key.is_empty();
        let mut buckets: IndexMap<&'static str, (&'static str, Vec<ScopedLine<'de>>)> =
            IndexMap::new();

        for line in &self.lines {
            if !root && line.rest.is_empty() {
                return Err(Error::shape_mismatch(
                    &self.key,
                    "value assigned directly to a nested record",
                ));
            }
            if line.index.is_some() {
                return Err(Error::shape_mismatch(
                    &self.key,
                    "indexed key targets a record field",
                ));
            }
            let (segment, rest) = split_segment(line.rest);
            let (name, index) = split_index(segment);

            match resolved.iter().find(|(_, tag)| tag.name == name) {
                Some((raw, tag)) => {
                    buckets
                        .entry(*raw)
                        .or_insert_with(|| (tag.name, Vec::new()))
                        .1
                        .push(ScopedLine {
                            rest,
                            index,
                            value: line.value,
                        });
                }
                None => {
                    if self.options.deny_unknown_keys {
                        return Err(Error::unknown_key(&self.child_key(segment)));
                    }
                    // Forward compatibility: unknown keys are benign.
                }
            }
        }

        let fields: Vec<(&'static str, String, Vec<ScopedLine<'de>>)> = buckets
            .into_iter()
            .map(|(raw, (name, lines))| (raw, self.child_key(name), lines))
            .collect();

        visitor.visit_map(StructFields {
            fields: fields.into_iter(),
            options: self.options,
            pending_value: None,
        })
    }

    fn deserialize_enum<V>(
        self,
        _name: &'static str,
        _variants: &'static [&'static str],
        visitor: V,
    ) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        let line = self.last_scalar()?;
        visitor.visit_enum(line.value.into_deserializer())
    }

    fn deserialize_identifier<V>(self, visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        self.deserialize_str(visitor)
    }

    fn deserialize_ignored_any<V>(self, visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        visitor.visit_unit()
    }
}

/// MapAccess over a record's matched fields.
struct StructFields<'de> {
    fields: std::vec::IntoIter<(&'static str, String, Vec<ScopedLine<'de>>)>,
    options: PropsOptions,
    pending_value: Option<(String, Vec<ScopedLine<'de>>)>,
}

impl<'de> de::MapAccess<'de> for StructFields<'de> {
    type Error = Error;

    fn next_key_seed<K>(&mut self, seed: K) -> Result<Option<K::Value>>
    where
        K: de::DeserializeSeed<'de>,
    {
        match self.fields.next() {
            Some((raw, key, lines)) => {
                self.pending_value = Some((key, lines));
                // Derived impls match on the raw field string, tag and all.
                seed.deserialize(BorrowedStrDeserializer::new(raw)).map(Some)
            }
            None => Ok(None),
        }
    }

    fn next_value_seed<V>(&mut self, seed: V) -> Result<V::Value>
    where
        V: de::DeserializeSeed<'de>,
    {
        let (key, lines) = self
            .pending_value
            .take()
            .ok_or_else(|| Error::custom("next_value_seed called without next_key_seed"))?;
        seed.deserialize(Node {
            key,
            lines,
            options: self.options.clone(),
        })
    }
}

/// MapAccess over a mapping field's entries.
struct MapEntries<'de> {
    key: String,
    entries: std::vec::IntoIter<(&'de str, &'de str)>,
    pending_value: Option<(&'de str, &'de str)>,
}

impl<'de> de::MapAccess<'de> for MapEntries<'de> {
    type Error = Error;

    fn next_key_seed<K>(&mut self, seed: K) -> Result<Option<K::Value>>
    where
        K: de::DeserializeSeed<'de>,
    {
        match self.entries.next() {
            Some((entry_key, value)) => {
                self.pending_value = Some((entry_key, value));
                seed.deserialize(BorrowedStrDeserializer::new(entry_key))
                    .map(Some)
            }
            None => Ok(None),
        }
    }

    fn next_value_seed<V>(&mut self, seed: V) -> Result<V::Value>
    where
        V: de::DeserializeSeed<'de>,
    {
        let (entry_key, value) = self
            .pending_value
            .take()
            .ok_or_else(|| Error::custom("next_value_seed called without next_key_seed"))?;
        let key = if self.key.is_empty() {
            entry_key.to_string()
        } else {
            format!("{}.{}", self.key, entry_key)
        };
        seed.deserialize(Text { key, text: value })
    }
}

/// SeqAccess over a sequence field's element texts.
struct SeqElements<'de> {
    key: String,
    elements: std::vec::IntoIter<&'de str>,
}

impl<'de> de::SeqAccess<'de> for SeqElements<'de> {
    type Error = Error;

    fn next_element_seed<T>(&mut self, seed: T) -> Result<Option<T::Value>>
    where
        T: de::DeserializeSeed<'de>,
    {
        match self.elements.next() {
            Some(text) => seed
                .deserialize(Text {
                    key: self.key.clone(),
                    text,
                })
                .map(Some),
            None => Ok(None),
        }
    }

    fn size_hint(&self) -> Option<usize> {
        Some(self.elements.len())
    }
}

/// A deserializer over one piece of value text: a sequence element or a
/// mapping entry. Custom `Deserialize` impls reached here receive the raw
/// text through `deserialize_str`/`deserialize_any`.
struct Text<'de> {
    key: String,
    text: &'de str,
}

impl<'de> Text<'de> {
    fn parse_i64(&self) -> Result<i64> {
        self.text
            .parse()
            .map_err(|_| Error::invalid_value(&self.key, self.text, "integer"))
    }

    fn parse_u64(&self) -> Result<u64> {
        self.text
            .parse()
            .map_err(|_| Error::invalid_value(&self.key, self.text, "unsigned integer"))
    }

    fn parse_f64(&self) -> Result<f64> {
        self.text
            .parse()
            .map_err(|_| Error::invalid_value(&self.key, self.text, "float"))
    }
}

impl<'de> de::Deserializer<'de> for Text<'de> {
    type Error = Error;

    fn deserialize_any<V>(self, visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        visitor.visit_borrowed_str(self.text)
    }

    fn deserialize_bool<V>(self, visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        match parse_bool(self.text) {
            Some(b) => visitor.visit_bool(b),
            None => Err(Error::invalid_value(&self.key, self.text, "boolean")),
        }
    }

    fn deserialize_i8<V>(self, visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        visitor.visit_i64(self.parse_i64()?)
    }

    fn deserialize_i16<V>(self, visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        visitor.visit_i64(self.parse_i64()?)
    }

    fn deserialize_i32<V>(self, visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        visitor.visit_i64(self.parse_i64()?)
    }

    fn deserialize_i64<V>(self, visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        visitor.visit_i64(self.parse_i64()?)
    }

    fn deserialize_u8<V>(self, visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        visitor.visit_u64(self.parse_u64()?)
    }

    fn deserialize_u16<V>(self, visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        visitor.visit_u64(self.parse_u64()?)
    }

    fn deserialize_u32<V>(self, visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        visitor.visit_u64(self.parse_u64()?)
    }

    fn deserialize_u64<V>(self, visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        visitor.visit_u64(self.parse_u64()?)
    }

    fn deserialize_f32<V>(self, visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        visitor.visit_f64(self.parse_f64()?)
    }

    fn deserialize_f64<V>(self, visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        visitor.visit_f64(self.parse_f64()?)
    }

    fn deserialize_char<V>(self, visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        let mut chars = self.text.chars();
        match (chars.next(), chars.next()) {
            (Some(ch), None) => visitor.visit_char(ch),
            _ => Err(Error::invalid_value(&self.key, self.text, "character")),
        }
    }

    fn deserialize_str<V>(self, visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        visitor.visit_borrowed_str(self.text)
    }

    fn deserialize_string<V>(self, visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        self.deserialize_str(visitor)
    }

    fn deserialize_bytes<V>(self, _visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        Err(Error::unsupported_type("binary values"))
    }

    fn deserialize_byte_buf<V>(self, _visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        Err(Error::unsupported_type("binary values"))
    }

    fn deserialize_option<V>(self, visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        visitor.visit_some(self)
    }

    fn deserialize_unit<V>(self, visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        visitor.visit_unit()
    }

    fn deserialize_unit_struct<V>(self, _name: &'static str, visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        visitor.visit_unit()
    }

    fn deserialize_newtype_struct<V>(self, _name: &'static str, visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        visitor.visit_newtype_struct(self)
    }

    fn deserialize_seq<V>(self, _visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        Err(Error::unsupported_type(&format!(
            "nested sequence at key {:?}",
            self.key
        )))
    }

    fn deserialize_tuple<V>(self, _len: usize, _visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        Err(Error::unsupported_type(&format!(
            "nested sequence at key {:?}",
            self.key
        )))
    }

    fn deserialize_tuple_struct<V>(
        self,
        _name: &'static str,
        _len: usize,
        _visitor: V,
    ) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        Err(Error::unsupported_type(&format!(
            "nested sequence at key {:?}",
            self.key
        )))
    }

    fn deserialize_map<V>(self, _visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        Err(Error::unsupported_type(&format!(
            "nested mapping at key {:?}",
            self.key
        )))
    }

    fn deserialize_struct<V>(
        self,
        _name: &'static str,
        _fields: &'static [&'static str],
        _visitor: V,
    ) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        Err(Error::unsupported_type(&format!(
            "nested record at key {:?}",
            self.key
        )))
    }

    fn deserialize_enum<V>(
        self,
        _name: &'static str,
        _variants: &'static [&'static str],
        visitor: V,
    ) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        visitor.visit_enum(self.text.into_deserializer())
    }

    fn deserialize_identifier<V>(self, visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        self.deserialize_str(visitor)
    }

    fn deserialize_ignored_any<V>(self, visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        visitor.visit_unit()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_lines_skips_comments_and_blanks() {
        let lines = parse_lines("# header\n\nname=x\n   # indented comment\nage=3\n").unwrap();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].key, "name");
        assert_eq!(lines[0].value, "x");
    }

    #[test]
    fn test_parse_lines_trims_crlf() {
        let lines = parse_lines("name=x\r\nage=3\r\n").unwrap();
        assert_eq!(lines[0].value, "x");
        assert_eq!(lines[1].value, "3");
    }

    #[test]
    fn test_parse_lines_rejects_missing_separator() {
        let err = parse_lines("name=x\nbogus\n").unwrap_err();
        assert!(matches!(err, Error::InvalidLine { line: 2, .. }));
    }

    #[test]
    fn test_parse_lines_splits_on_first_equals() {
        let lines = parse_lines("formula=a=b\n").unwrap();
        assert_eq!(lines[0].key, "formula");
        assert_eq!(lines[0].value, "a=b");
    }

    #[test]
    fn test_split_segment_and_index() {
        assert_eq!(split_segment("a.b.c"), ("a", "b.c"));
        assert_eq!(split_segment("a"), ("a", ""));
        assert_eq!(split_index("tags[3]"), ("tags", Some(3)));
        assert_eq!(split_index("tags"), ("tags", None));
        assert_eq!(split_index("tags[x]"), ("tags[x]", None));
    }
}
