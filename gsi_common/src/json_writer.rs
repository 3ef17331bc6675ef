/*
 * Copyright © 2025, United States Government, as represented by the Administrator of
 * the National Aeronautics and Space Administration. All rights reserved.
 *
 * The “GSI” software is licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License. You may obtain a copy
 * of the License at http://www.apache.org/licenses/LICENSE-2.0.
 *
 * Unless required by applicable law or agreed to in writing, software distributed under
 * the License is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND,
 * either express or implied. See the License for the specific language governing permissions
 * and limitations under the License.
 */

#![allow(unused)]

use std::fmt::{Write,Display,Debug};

pub enum NumFormat {
    Fp0, Fp1, Fp2, Fp3, Fp4, Fp5
}

/// a simple standalone JSON writer that produces JSON strings from (nested) closures.
/// Useful for conditional serialization that would overstress serde - the Kepler.gl
/// config schema is the prime example (deeply nested, with layer entries that depend
/// on which datasets are present). Use like so:
/// ```
///     use gsi_common::json_writer::JsonWriter;
///     let radius = 12.0;
///
///     let mut w = JsonWriter::new();
///     w.write_object( |w|{
///         w.write_field( "type", "point");
///         w.write_fmt_field( "radius", &format!("{:.1}", radius));
///         w.write_array_field( "colorField", |w|{
///             w.write_value("recommendation");
///         })
///     });
///
///     println!("{}", w.to_string());
/// ```
pub struct JsonWriter {
    buf: String
}

impl JsonWriter {
    pub fn new ()->Self {
        JsonWriter { buf: String::new() }
    }

    pub fn with_capacity (len: usize)->Self {
        JsonWriter { buf: String::with_capacity(len) }
    }

    pub fn clear (&mut self) {
        self.buf.clear();
    }

    pub fn write_object (&mut self, f: impl FnOnce(&mut JsonWriter)) {
        self.check_separator();
        self.buf.write_char('{');
        f (self);
        self.buf.write_char('}');
    }

    pub fn write_object_field (&mut self, prop_name: &str, f: impl FnOnce(&mut JsonWriter)) {
        self.check_separator();
        write!( self.buf, "\"{prop_name}\":");
        self.buf.write_char('{');
        f (self);
        self.buf.write_char('}');
    }

    pub fn write_array (&mut self, f: impl FnOnce(&mut JsonWriter)) {
        self.check_separator();
        self.buf.write_char('[');
        f (self);
        self.buf.write_char(']');
    }

    pub fn write_array_field (&mut self, prop_name: &str, f: impl FnOnce(&mut JsonWriter)) {
        self.check_separator();
        write!( self.buf, "\"{prop_name}\":");
        self.buf.write_char('[');
        f (self);
        self.buf.write_char(']');
    }

    /// write a field whose value is already formatted (numbers, raw JSON)
    pub fn write_fmt_field (&mut self, prop_name: &str, value: &str) {
        self.check_separator();
        write!( self.buf, "\"{prop_name}\":");
        write!( self.buf, "{value}");
    }

    /// this is a catch-all for proper string/number formatting
    pub fn write_field<T:Debug> (&mut self, prop_name: &str, value: T) {
        self.check_separator();
        write!( self.buf, "\"{prop_name}\":");
        write!( self.buf, "{:?}", value);
    }

    pub fn write_f64_field (&mut self, prop_name: &str, value: f64, fmt: NumFormat) {
        self.check_separator();
        write!( self.buf, "\"{prop_name}\":");

        match fmt {
            NumFormat::Fp0 => write!( self.buf, "{:.0}", value),
            NumFormat::Fp1 => write!( self.buf, "{:.1}", value),
            NumFormat::Fp2 => write!( self.buf, "{:.2}", value),
            NumFormat::Fp3 => write!( self.buf, "{:.3}", value),
            NumFormat::Fp4 => write!( self.buf, "{:.4}", value),
            NumFormat::Fp5 => write!( self.buf, "{:.5}", value),
        };
    }

    pub fn write_value<T:Debug> (&mut self, value: T) {
        self.check_separator();
        write!( self.buf, "{value:?}");
    }

    pub fn to_string (self)->String { self.buf }

    pub fn as_str (&self)->&str { self.buf.as_str() }

    pub fn len (&self)->usize {
        self.buf.len()
    }

    pub fn is_empty (&self)->bool {
        self.buf.is_empty()
    }

    #[inline] pub fn check_separator (&mut self) {
        if let Some(b) = self.last_byte() {
            if b != b'{' && b != b'[' && b != b',' && b != b':' {
                self.buf.write_char(',');
            }
        }
    }

    fn last_byte (&self)->Option<u8> {
        let bs = self.buf.as_bytes();
        let len = bs.len();
        if len > 0 {
            Some(bs[len-1])
        } else {
            None
        }
    }
}

impl From<JsonWriter> for String {
    fn from (w: JsonWriter)->String { w.buf }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nested_object () {
        let mut w = JsonWriter::new();
        w.write_object( |w| {
            w.write_field( "id", "point");
            w.write_object_field( "config", |w| {
                w.write_f64_field( "radius", 12.0, NumFormat::Fp1);
                w.write_array_field( "colorRange", |w| {
                    w.write_value("#2ECC71");
                    w.write_value("#E74C3C");
                });
            });
        });

        let s = w.to_string();
        assert_eq!( s, r##"{"id":"point","config":{"radius":12.0,"colorRange":["#2ECC71","#E74C3C"]}}"##);
        // must parse as valid JSON
        let v: serde_json::Value = serde_json::from_str(&s).unwrap();
        assert!( v.is_object());
    }
}
