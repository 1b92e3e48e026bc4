// Sat Oct 17 2026 - Alex

use crate::utils::parse_hex;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// One SDK dump file: class name to class layout description.
///
/// Only the top level has to be a JSON object. Entries that are not shaped
/// like a class, and attribute fields of the wrong type, decode as absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClassDescriptionDocument {
    classes: HashMap<String, ClassDescriptor>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ClassDescriptor {
    #[serde(rename = "Attributes", skip_serializing_if = "Option::is_none")]
    pub attributes: Option<Vec<AttributeDescriptor>>,
}

/// `Offset` and `Size` keep the raw JSON value; anything but a hex string
/// reads as absent when decoded.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AttributeDescriptor {
    #[serde(rename = "Name")]
    pub name: Option<String>,
    #[serde(rename = "Offset", skip_serializing_if = "Option::is_none")]
    pub offset: Option<Value>,
    #[serde(rename = "Size", skip_serializing_if = "Option::is_none")]
    pub size: Option<Value>,
}

impl<'de> Deserialize<'de> for ClassDescriptor {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Ok(ClassDescriptor::from_value(&value))
    }
}

impl ClassDescriptionDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_class(&mut self, name: &str, descriptor: ClassDescriptor) {
        self.classes.insert(name.to_string(), descriptor);
    }

    pub fn get_class(&self, name: &str) -> Option<&ClassDescriptor> {
        self.classes.get(name)
    }

    pub fn class_count(&self) -> usize {
        self.classes.len()
    }

    /// Offset of the first attribute named exactly `key`. Later attributes
    /// with the same name are never consulted.
    pub fn offset_of(&self, class_name: &str, key: &str) -> Option<u64> {
        let attribute = self
            .get_class(class_name)?
            .attributes()
            .iter()
            .find(|a| a.name.as_deref() == Some(key))?;

        attribute.offset_value(class_name)
    }

    /// Size of `class_name`, taken from the first attribute carrying a `Size`
    /// field whatever its name. Dumps store the class size this way, so the
    /// attribute name is ignored on purpose.
    pub fn size_of(&self, class_name: &str) -> Option<u64> {
        let attribute = self
            .get_class(class_name)?
            .attributes()
            .iter()
            .find(|a| a.size.is_some())?;

        attribute.size_value(class_name)
    }
}

impl ClassDescriptor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Non-object values and a non-array `Attributes` give a class with no
    /// attributes. Attribute entries that are not objects are skipped.
    pub fn from_value(value: &Value) -> Self {
        let attributes = value
            .get("Attributes")
            .and_then(Value::as_array)
            .map(|entries| entries.iter().filter_map(AttributeDescriptor::from_value).collect());

        Self { attributes }
    }

    pub fn with_attribute(mut self, attribute: AttributeDescriptor) -> Self {
        self.attributes.get_or_insert_with(Vec::new).push(attribute);
        self
    }

    pub fn attributes(&self) -> &[AttributeDescriptor] {
        self.attributes.as_deref().unwrap_or(&[])
    }
}

impl AttributeDescriptor {
    pub fn new(name: &str) -> Self {
        Self {
            name: Some(name.to_string()),
            offset: None,
            size: None,
        }
    }

    /// `None` when `value` is not an object. A non-string `Name` reads as no
    /// name, and `null` fields read as missing.
    pub fn from_value(value: &Value) -> Option<Self> {
        let fields = value.as_object()?;
        let present = |key: &str| fields.get(key).filter(|v| !v.is_null()).cloned();

        Some(Self {
            name: fields.get("Name").and_then(Value::as_str).map(str::to_string),
            offset: present("Offset"),
            size: present("Size"),
        })
    }

    pub fn with_offset(mut self, offset: &str) -> Self {
        self.offset = Some(Value::String(offset.to_string()));
        self
    }

    pub fn with_size(mut self, size: &str) -> Self {
        self.size = Some(Value::String(size.to_string()));
        self
    }

    pub fn offset_value(&self, class_name: &str) -> Option<u64> {
        decode_field(self.offset.as_ref(), class_name, self.name.as_deref(), "Offset")
    }

    pub fn size_value(&self, class_name: &str) -> Option<u64> {
        decode_field(self.size.as_ref(), class_name, self.name.as_deref(), "Size")
    }
}

fn decode_field(raw: Option<&Value>, class_name: &str, attribute: Option<&str>, field: &str) -> Option<u64> {
    let raw = raw.filter(|v| !v.is_null())?;
    let value = raw.as_str().and_then(parse_hex);
    if value.is_none() {
        log::warn!(
            "Ignoring malformed {} {} on {}.{}",
            field,
            raw,
            class_name,
            attribute.unwrap_or("<unnamed>")
        );
    }
    value
}
