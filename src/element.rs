use quick_xml::events::attributes::Attribute;
use quick_xml::events::BytesStart;

use crate::errors::{Error, Result};

/// An element name plus its attributes, in document order.
///
/// Attribute order is preserved across the rewrite so untouched documents
/// round-trip byte-for-byte apart from the rotated values.
#[derive(Debug, Clone, PartialEq)]
pub struct SvgElement {
    pub name: String,
    attrs: Vec<(String, String)>,
}

impl SvgElement {
    /// Element name with any namespace prefix stripped.
    pub fn local_name(&self) -> &str {
        self.name.rsplit(':').next().unwrap_or(&self.name)
    }

    pub fn get_attr(&self, key: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Insert-or-update; existing attributes keep their position.
    pub fn set_attr(&mut self, key: &str, value: String) {
        if let Some(entry) = self.attrs.iter_mut().find(|(k, _)| k == key) {
            entry.1 = value;
        } else {
            self.attrs.push((key.to_string(), value));
        }
    }

    pub fn has_attrs(&self, keys: &[&str]) -> bool {
        keys.iter().all(|k| self.get_attr(k).is_some())
    }
}

impl TryFrom<&BytesStart<'_>> for SvgElement {
    type Error = Error;

    /// Failures here are low-level XML type errors (bad attribute names,
    /// non-UTF8) rather than anything semantic about SVG.
    fn try_from(e: &BytesStart) -> Result<Self> {
        let name = String::from_utf8(e.name().into_inner().to_vec())?;
        let attrs: Result<Vec<(String, String)>> = e
            .attributes()
            .map(|a| {
                let a = a.map_err(Error::from_err)?;
                let key = String::from_utf8(a.key.into_inner().to_vec())?;
                let value = a.unescape_value().map_err(Error::from_err)?.into_owned();
                Ok((key, value))
            })
            .collect();
        Ok(Self {
            name,
            attrs: attrs?,
        })
    }
}

impl From<SvgElement> for BytesStart<'static> {
    fn from(e: SvgElement) -> Self {
        let mut bs = BytesStart::new(e.name);
        for (k, v) in e.attrs {
            // values were unescaped on read, so must be re-escaped here;
            // the (&str, &str) Attribute constructor escapes the value
            bs.push_attribute(Attribute::from((k.as_str(), v.as_str())));
        }
        bs
    }
}
