//! Elements: components placed on a scheme, carrying poles and attributes.

use std::collections::BTreeMap;

use aw_core::{ElementId, PoleId, SchemeId};

use crate::error::{SchemeError, SchemeResult};

/// Attribute holding the element's designator (e.g. `K1`).
pub const ID_ATTRIBUTE: &str = "Id";

/// Handle to an element, tagged with the scheme that issued it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ElementRef {
    pub scheme: SchemeId,
    pub element: ElementId,
}

/// A component on the diagram.
///
/// Descriptive data lives in a string attribute map; the designator is the
/// `Id` attribute and is never blank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub(crate) id: ElementId,
    pub(crate) scheme: SchemeId,
    pub(crate) attributes: BTreeMap<String, String>,
    pub(crate) poles: Vec<PoleId>,
}

impl Element {
    pub(crate) fn new(id: ElementId, scheme: SchemeId, tag: String) -> SchemeResult<Self> {
        let mut element = Self {
            id,
            scheme,
            attributes: BTreeMap::new(),
            poles: Vec::new(),
        };
        element.set_attribute(ID_ATTRIBUTE, tag)?;
        Ok(element)
    }

    pub fn id(&self) -> ElementId {
        self.id
    }

    pub fn scheme(&self) -> SchemeId {
        self.scheme
    }

    /// The element designator.
    pub fn tag(&self) -> &str {
        self.attribute(ID_ATTRIBUTE).unwrap_or_default()
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    pub fn attributes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attributes
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Set an attribute; an empty value removes it.
    ///
    /// The `Id` attribute rejects blank values.
    pub fn set_attribute(
        &mut self,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> SchemeResult<()> {
        let name = name.into();
        let value = value.into();
        if name == ID_ATTRIBUTE && value.trim().is_empty() {
            return Err(SchemeError::BlankElementId);
        }
        if value.is_empty() {
            self.attributes.remove(&name);
        } else {
            self.attributes.insert(name, value);
        }
        Ok(())
    }

    /// Poles of this element in creation order.
    pub fn poles(&self) -> &[PoleId] {
        &self.poles
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aw_core::Id;

    fn element() -> Element {
        Element::new(Id::from_index(0), SchemeId::new(0), "K1".into()).unwrap()
    }

    #[test]
    fn tag_is_id_attribute() {
        let el = element();
        assert_eq!(el.tag(), "K1");
        assert_eq!(el.attribute("Id"), Some("K1"));
    }

    #[test]
    fn blank_tag_rejected() {
        let err = Element::new(Id::from_index(0), SchemeId::new(0), "  ".into()).unwrap_err();
        assert_eq!(err, SchemeError::BlankElementId);

        let mut el = element();
        assert_eq!(el.set_attribute("Id", ""), Err(SchemeError::BlankElementId));
        assert_eq!(el.tag(), "K1");
    }

    #[test]
    fn empty_value_removes_attribute() {
        let mut el = element();
        el.set_attribute("Type", "relay").unwrap();
        assert_eq!(el.attribute("Type"), Some("relay"));

        el.set_attribute("Type", "").unwrap();
        assert_eq!(el.attribute("Type"), None);
        assert_eq!(el.attributes().count(), 1);
    }
}
