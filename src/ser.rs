//! Properties serialization.
//!
//! This module provides the [`Serializer`] implementation that converts Rust
//! data structures into `KEY=VALUE` lines.
//!
//! ## Overview
//!
//! Encoding runs in two phases. Each field is first converted into a
//! [`Value`] tree by [`ValueSerializer`], which is where field tags (name
//! overrides, `omitempty`, the `-` skip marker) are applied. The tree is
//! then walked depth-first, concatenating ancestor key segments with `.`
//! and emitting one line per leaf:
//!
//! - scalar field `k` → `k=value`
//! - nested record `r` → lines keyed `r.field`
//! - mapping `m` → one line `m.entry=value` per entry
//! - sequence `s` → `s[0]=a`, `s[1]=b` (or `s=a,b` with
//!   [`SequenceStyle::CommaJoined`])
//!
//! Record fields emit in declaration order, so output is deterministic for
//! records. Mapping entries follow the source map's iteration order.
//!
//! ## Usage
//!
//! Most users should use the high-level functions in the crate root:
//!
//! ```rust
//! use serde_props::to_string;
//! use serde::Serialize;
//!
//! #[derive(Serialize)]
//! struct Server { host: String, port: u16 }
//!
//! let server = Server { host: "localhost".into(), port: 8080 };
//! assert_eq!(to_string(&server).unwrap(), "host=localhost\nport=8080\n");
//! ```
//!
//! ## Direct Serializer Usage
//!
//! ```rust
//! use serde_props::{PropsOptions, Serializer};
//! use serde::Serialize;
//!
//! #[derive(Serialize)]
//! struct Point { x: i32, y: i32 }
//!
//! let mut serializer = Serializer::new(PropsOptions::default());
//! Point { x: 1, y: 2 }.serialize(&mut serializer).unwrap();
//! assert_eq!(serializer.into_inner(), "x=1\ny=2\n");
//! ```

use crate::field::FieldTag;
use crate::{Error, Number, PropMap, PropsOptions, Result, SequenceStyle, Value};
use serde::{ser, Serialize};

/// The properties serializer.
///
/// Accepts a record (struct) or a string-keyed map at the root and produces
/// `KEY=VALUE` lines. Created via [`Serializer::new`].
pub struct Serializer {
    output: String,
    options: PropsOptions,
}

impl Serializer {
    pub fn new(options: PropsOptions) -> Self {
        Serializer {
            output: String::with_capacity(256),
            options,
        }
    }

    pub fn into_inner(self) -> String {
        self.output
    }

    fn write_leaf(&mut self, key: &str, text: &str) {
        self.output.push_str(key);
        self.output.push('=');
        self.output.push_str(text);
        self.output.push('\n');
    }

    fn write_value(&mut self, key: &str, value: &Value) -> Result<()> {
        match value {
            // Absent values produce no line.
            Value::Null => Ok(()),
            Value::Bool(b) => {
                self.write_leaf(key, if *b { "true" } else { "false" });
                Ok(())
            }
            Value::Number(n) => {
                self.write_leaf(key, &n.to_string());
                Ok(())
            }
            Value::String(s) => {
                self.write_leaf(key, s);
                Ok(())
            }
            Value::Seq(items) => self.write_seq(key, items),
            Value::Record(fields) => {
                for (name, field) in fields {
                    let child = format!("{}.{}", key, name);
                    self.write_value(&child, field)?;
                }
                Ok(())
            }
            Value::Map(entries) => {
                for (entry_key, entry) in entries {
                    let child = format!("{}.{}", key, entry_key);
                    self.write_value(&child, entry)?;
                }
                Ok(())
            }
        }
    }

    fn write_seq(&mut self, key: &str, items: &[Value]) -> Result<()> {
        match self.options.sequence_style {
            SequenceStyle::Indexed => {
                for (i, item) in items.iter().enumerate() {
                    let text = seq_element_text(key, item)?;
                    self.write_leaf(&format!("{}[{}]", key, i), &text);
                }
            }
            SequenceStyle::CommaJoined => {
                // An empty sequence emits no line in either style; `k=`
                // would read back as a single empty-string element.
                if items.is_empty() {
                    return Ok(());
                }
                let mut joined = String::new();
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        joined.push(',');
                    }
                    joined.push_str(&seq_element_text(key, item)?);
                }
                self.write_leaf(key, &joined);
            }
        }
        Ok(())
    }

    fn write_root_entries(&mut self, entries: &[(String, Value)]) -> Result<()> {
        for (key, value) in entries {
            self.write_value(key, value)?;
        }
        Ok(())
    }
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::Bool(b) => Some(if *b { "true" } else { "false" }.to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::String(s) => Some(s.clone()),
        _ => None,
    }
}

fn seq_element_text(key: &str, item: &Value) -> Result<String> {
    scalar_text(item).ok_or_else(|| {
        Error::unsupported_type(&format!(
            "sequence element under key {:?} is not a scalar",
            key
        ))
    })
}

fn root_error<T>(what: &str) -> Result<T> {
    Err(Error::unsupported_type(&format!(
        "top-level value must be a record or mapping, found {}",
        what
    )))
}

impl<'a> ser::Serializer for &'a mut Serializer {
    type Ok = ();
    type Error = Error;

    type SerializeSeq = ser::Impossible<(), Error>;
    type SerializeTuple = ser::Impossible<(), Error>;
    type SerializeTupleStruct = ser::Impossible<(), Error>;
    type SerializeTupleVariant = ser::Impossible<(), Error>;
    type SerializeMap = RootMapSerializer<'a>;
    type SerializeStruct = RootStructSerializer<'a>;
    type SerializeStructVariant = ser::Impossible<(), Error>;

    fn serialize_bool(self, _v: bool) -> Result<Self::Ok> {
        root_error("a boolean")
    }

    fn serialize_i8(self, _v: i8) -> Result<Self::Ok> {
        root_error("an integer")
    }

    fn serialize_i16(self, _v: i16) -> Result<Self::Ok> {
        root_error("an integer")
    }

    fn serialize_i32(self, _v: i32) -> Result<Self::Ok> {
        root_error("an integer")
    }

    fn serialize_i64(self, _v: i64) -> Result<Self::Ok> {
        root_error("an integer")
    }

    fn serialize_u8(self, _v: u8) -> Result<Self::Ok> {
        root_error("an integer")
    }

    fn serialize_u16(self, _v: u16) -> Result<Self::Ok> {
        root_error("an integer")
    }

    fn serialize_u32(self, _v: u32) -> Result<Self::Ok> {
        root_error("an integer")
    }

    fn serialize_u64(self, _v: u64) -> Result<Self::Ok> {
        root_error("an integer")
    }

    fn serialize_f32(self, _v: f32) -> Result<Self::Ok> {
        root_error("a float")
    }

    fn serialize_f64(self, _v: f64) -> Result<Self::Ok> {
        root_error("a float")
    }

    fn serialize_char(self, _v: char) -> Result<Self::Ok> {
        root_error("a character")
    }

    fn serialize_str(self, _v: &str) -> Result<Self::Ok> {
        root_error("a string")
    }

    fn serialize_bytes(self, _v: &[u8]) -> Result<Self::Ok> {
        Err(Error::unsupported_type("binary values"))
    }

    fn serialize_none(self) -> Result<Self::Ok> {
        root_error("none")
    }

    fn serialize_some<T>(self, value: &T) -> Result<Self::Ok>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<Self::Ok> {
        root_error("a unit")
    }

    fn serialize_unit_struct(self, _name: &'static str) -> Result<Self::Ok> {
        root_error("a unit struct")
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
    ) -> Result<Self::Ok> {
        root_error("an enum variant")
    }

    fn serialize_newtype_struct<T>(self, _name: &'static str, value: &T) -> Result<Self::Ok>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T>(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _value: &T,
    ) -> Result<Self::Ok>
    where
        T: ?Sized + Serialize,
    {
        Err(Error::unsupported_type("newtype variants"))
    }

    fn serialize_seq(self, _len: Option<usize>) -> Result<Self::SerializeSeq> {
        root_error("a sequence")
    }

    fn serialize_tuple(self, _len: usize) -> Result<Self::SerializeTuple> {
        root_error("a tuple")
    }

    fn serialize_tuple_struct(
        self,
        _name: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleStruct> {
        root_error("a tuple struct")
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleVariant> {
        Err(Error::unsupported_type("tuple variants"))
    }

    fn serialize_map(self, len: Option<usize>) -> Result<Self::SerializeMap> {
        Ok(RootMapSerializer {
            ser: self,
            entries: Vec::with_capacity(len.unwrap_or(0)),
            current_key: None,
        })
    }

    fn serialize_struct(self, _name: &'static str, len: usize) -> Result<Self::SerializeStruct> {
        Ok(RootStructSerializer {
            ser: self,
            entries: Vec::with_capacity(len),
        })
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeStructVariant> {
        Err(Error::unsupported_type("struct variants"))
    }
}

pub struct RootStructSerializer<'a> {
    ser: &'a mut Serializer,
    entries: Vec<(String, Value)>,
}

impl<'a> ser::SerializeStruct for RootStructSerializer<'a> {
    type Ok = ();
    type Error = Error;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        let tag = FieldTag::parse(key);
        if tag.skip {
            return Ok(());
        }
        let value = to_prop_value(value)?;
        if tag.omit_empty && value.is_empty() {
            return Ok(());
        }
        self.entries.push((tag.name.to_string(), value));
        Ok(())
    }

    fn end(self) -> Result<Self::Ok> {
        self.ser.write_root_entries(&self.entries)
    }
}

pub struct RootMapSerializer<'a> {
    ser: &'a mut Serializer,
    entries: Vec<(String, Value)>,
    current_key: Option<String>,
}

impl<'a> ser::SerializeMap for RootMapSerializer<'a> {
    type Ok = ();
    type Error = Error;

    fn serialize_key<T>(&mut self, key: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        match to_prop_value(key)? {
            Value::String(s) => {
                self.current_key = Some(s);
                Ok(())
            }
            _ => Err(Error::unsupported_type("map keys must be strings")),
        }
    }

    fn serialize_value<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        let key = self
            .current_key
            .take()
            .ok_or_else(|| Error::custom("serialize_value called without serialize_key"))?;
        self.entries.push((key, to_prop_value(value)?));
        Ok(())
    }

    fn end(self) -> Result<Self::Ok> {
        self.ser.write_root_entries(&self.entries)
    }
}

/// A serializer producing [`Value`] trees instead of text.
///
/// This is what [`to_value`](crate::to_value) uses, and what the line
/// serializer runs per field before writing. Field tags are applied here, so
/// a `Value` obtained from a struct already reflects renames, `omitempty`,
/// and skip markers.
pub struct ValueSerializer;

pub struct SerializeSeqValue {
    vec: Vec<Value>,
}

pub struct SerializeMapValue {
    map: PropMap,
    current_key: Option<String>,
}

pub struct SerializeRecordValue {
    record: PropMap,
}

impl ser::Serializer for ValueSerializer {
    type Ok = Value;
    type Error = Error;

    type SerializeSeq = SerializeSeqValue;
    type SerializeTuple = SerializeSeqValue;
    type SerializeTupleStruct = SerializeSeqValue;
    type SerializeTupleVariant = ser::Impossible<Value, Error>;
    type SerializeMap = SerializeMapValue;
    type SerializeStruct = SerializeRecordValue;
    type SerializeStructVariant = ser::Impossible<Value, Error>;

    fn serialize_bool(self, v: bool) -> Result<Value> {
        Ok(Value::Bool(v))
    }

    fn serialize_i8(self, v: i8) -> Result<Value> {
        Ok(Value::Number(Number::Int(v as i64)))
    }

    fn serialize_i16(self, v: i16) -> Result<Value> {
        Ok(Value::Number(Number::Int(v as i64)))
    }

    fn serialize_i32(self, v: i32) -> Result<Value> {
        Ok(Value::Number(Number::Int(v as i64)))
    }

    fn serialize_i64(self, v: i64) -> Result<Value> {
        Ok(Value::Number(Number::Int(v)))
    }

    fn serialize_u8(self, v: u8) -> Result<Value> {
        Ok(Value::Number(Number::UInt(v as u64)))
    }

    fn serialize_u16(self, v: u16) -> Result<Value> {
        Ok(Value::Number(Number::UInt(v as u64)))
    }

    fn serialize_u32(self, v: u32) -> Result<Value> {
        Ok(Value::Number(Number::UInt(v as u64)))
    }

    fn serialize_u64(self, v: u64) -> Result<Value> {
        Ok(Value::Number(Number::UInt(v)))
    }

    fn serialize_f32(self, v: f32) -> Result<Value> {
        Ok(Value::Number(Number::Float(v as f64)))
    }

    fn serialize_f64(self, v: f64) -> Result<Value> {
        Ok(Value::Number(Number::Float(v)))
    }

    fn serialize_char(self, v: char) -> Result<Value> {
        Ok(Value::String(v.to_string()))
    }

    fn serialize_str(self, v: &str) -> Result<Value> {
        Ok(Value::String(v.to_string()))
    }

    fn serialize_bytes(self, _v: &[u8]) -> Result<Value> {
        Err(Error::unsupported_type("binary values"))
    }

    fn serialize_none(self) -> Result<Value> {
        Ok(Value::Null)
    }

    fn serialize_some<T>(self, value: &T) -> Result<Value>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<Value> {
        Ok(Value::Null)
    }

    fn serialize_unit_struct(self, _name: &'static str) -> Result<Value> {
        Ok(Value::Null)
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
    ) -> Result<Value> {
        Ok(Value::String(variant.to_string()))
    }

    fn serialize_newtype_struct<T>(self, _name: &'static str, value: &T) -> Result<Value>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T>(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _value: &T,
    ) -> Result<Value>
    where
        T: ?Sized + Serialize,
    {
        Err(Error::unsupported_type("newtype variants"))
    }

    fn serialize_seq(self, len: Option<usize>) -> Result<SerializeSeqValue> {
        Ok(SerializeSeqValue {
            vec: Vec::with_capacity(len.unwrap_or(0)),
        })
    }

    fn serialize_tuple(self, len: usize) -> Result<SerializeSeqValue> {
        Ok(SerializeSeqValue {
            vec: Vec::with_capacity(len),
        })
    }

    fn serialize_tuple_struct(self, _name: &'static str, len: usize) -> Result<SerializeSeqValue> {
        Ok(SerializeSeqValue {
            vec: Vec::with_capacity(len),
        })
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleVariant> {
        Err(Error::unsupported_type("tuple variants"))
    }

    fn serialize_map(self, len: Option<usize>) -> Result<SerializeMapValue> {
        Ok(SerializeMapValue {
            map: PropMap::with_capacity(len.unwrap_or(0)),
            current_key: None,
        })
    }

    fn serialize_struct(self, _name: &'static str, len: usize) -> Result<SerializeRecordValue> {
        Ok(SerializeRecordValue {
            record: PropMap::with_capacity(len),
        })
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeStructVariant> {
        Err(Error::unsupported_type("struct variants"))
    }
}

impl ser::SerializeSeq for SerializeSeqValue {
    type Ok = Value;
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.vec.push(to_prop_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(Value::Seq(self.vec))
    }
}

impl ser::SerializeTuple for SerializeSeqValue {
    type Ok = Value;
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.vec.push(to_prop_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(Value::Seq(self.vec))
    }
}

impl ser::SerializeTupleStruct for SerializeSeqValue {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.vec.push(to_prop_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(Value::Seq(self.vec))
    }
}

impl ser::SerializeMap for SerializeMapValue {
    type Ok = Value;
    type Error = Error;

    fn serialize_key<T>(&mut self, key: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        match to_prop_value(key)? {
            Value::String(s) => {
                self.current_key = Some(s);
                Ok(())
            }
            _ => Err(Error::unsupported_type("map keys must be strings")),
        }
    }

    fn serialize_value<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        let key = self
            .current_key
            .take()
            .ok_or_else(|| Error::custom("serialize_value called without serialize_key"))?;
        self.map.insert(key, to_prop_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(Value::Map(self.map))
    }
}

impl ser::SerializeStruct for SerializeRecordValue {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        let tag = FieldTag::parse(key);
        if tag.skip {
            return Ok(());
        }
        let value = to_prop_value(value)?;
        if tag.omit_empty && value.is_empty() {
            return Ok(());
        }
        self.record.insert(tag.name.to_string(), value);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(Value::Record(self.record))
    }
}

pub(crate) fn to_prop_value<T: Serialize + ?Sized>(value: &T) -> Result<Value> {
    value.serialize(ValueSerializer)
}
