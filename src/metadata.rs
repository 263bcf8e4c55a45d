//! Translation of a [`DecodeResult`] into a loosely typed, string keyed metadata store.
//!
//! Consumers that aggregate metadata from many kinds of documents usually keep it as
//! `key -> [values]`. [`MetadataSink`] is that boundary: the decoders never touch it, and
//! [`DecodeResult::write_to`] only ever uses [`MetadataSink::set`].

use std::collections::BTreeMap;

use chrono::SecondsFormat;

use crate::object::DecodeResult;

/// Media type of the object
pub const CONTENT_TYPE: &str = "Content-Type";
/// Creation date, RFC 3339 in UTC
pub const CREATED: &str = "dcterms:created";
/// Machine architecture, e.g. `x86-64`
pub const MACHINE_TYPE: &str = "machine:machineType";
/// Word size, `16`, `32` or `64`
pub const ARCHITECTURE_BITS: &str = "machine:architectureBits";
/// `Little` or `Big`
pub const ENDIAN: &str = "machine:endian";
/// Operating system or ABI
pub const PLATFORM: &str = "machine:platform";

/// Something that stores string metadata under string keys
pub trait MetadataSink {
    /// Replace every value of `key` with `value`
    fn set(&mut self, key: &str, value: String);
    /// Append `value` to the values of `key`
    fn add(&mut self, key: &str, value: String);
}

/// An ordered, multi-valued metadata store
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Metadata {
    entries: BTreeMap<String, Vec<String>>,
}

impl Metadata {
    pub fn new() -> Self {
        Default::default()
    }

    /// The first value of `key`
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .get(key)
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Every value of `key`, in insertion order
    pub fn get_all(&self, key: &str) -> &[String] {
        self.entries.get(key).map(Vec::as_slice).unwrap_or(&[])
    }

    /// The keys that have at least one value, sorted
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl MetadataSink for Metadata {
    fn set(&mut self, key: &str, value: String) {
        self.entries.insert(key.to_owned(), vec![value]);
    }

    fn add(&mut self, key: &str, value: String) {
        self.entries.entry(key.to_owned()).or_default().push(value);
    }
}

impl DecodeResult {
    /// Write every field that was decoded into `sink`; unset fields are skipped
    pub fn write_to(&self, sink: &mut dyn MetadataSink) {
        if let Some(content_type) = self.content_type {
            sink.set(CONTENT_TYPE, content_type.to_owned());
        }
        if let Some(platform) = self.platform {
            sink.set(PLATFORM, platform.to_string());
        }
        if let Some(created) = self.created {
            sink.set(CREATED, created.to_rfc3339_opts(SecondsFormat::Secs, true));
        }
        if let Some(machine) = self.architecture.machine {
            sink.set(MACHINE_TYPE, machine.to_string());
        }
        if let Some(bits) = self.architecture.bits {
            sink.set(ARCHITECTURE_BITS, bits.to_string());
        }
        if let Some(endianness) = self.architecture.endianness {
            sink.set(ENDIAN, endianness.to_string());
        }
    }
}
