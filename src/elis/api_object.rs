//! Remote resource kinds

use std::fmt;

/// A kind of remote resource, identified by its plural and singular path segment.
///
/// The plural is the collection path (`queues`), the singular is the key under
/// which parent objects reference a single related object (`queue`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ApiObject {
    plural: &'static str,
    singular: Option<&'static str>,
}

impl ApiObject {
    /// Kind whose singular is the plural without trailing `s`
    pub const fn new(plural: &'static str) -> Self {
        Self {
            plural,
            singular: None,
        }
    }

    /// Kind with an irregular singular (`inboxes` -> `inbox`)
    pub const fn with_singular(plural: &'static str, singular: &'static str) -> Self {
        Self {
            plural,
            singular: Some(singular),
        }
    }

    pub fn plural(&self) -> &'static str {
        self.plural
    }

    pub fn singular(&self) -> &'static str {
        self.singular.unwrap_or_else(|| self.plural.trim_end_matches('s'))
    }
}

impl fmt::Display for ApiObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.plural)
    }
}

pub const ORGANIZATIONS: ApiObject = ApiObject::new("organizations");
pub const WORKSPACES: ApiObject = ApiObject::new("workspaces");
pub const QUEUES: ApiObject = ApiObject::new("queues");
pub const INBOXES: ApiObject = ApiObject::with_singular("inboxes", "inbox");
pub const CONNECTORS: ApiObject = ApiObject::new("connectors");
pub const SCHEMAS: ApiObject = ApiObject::new("schemas");
