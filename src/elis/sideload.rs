//! Sideloading: replace reference URLs in parent objects with the referenced objects

use log::debug;
use serde_json::Value;
use std::collections::HashMap;

use crate::elis::query::Query;
use crate::elis::{ApiObject, ElisClient, Object};
use crate::error::Result;

/// A reference field on a parent object
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reference {
    /// `<singular>: url`
    Single(Option<String>),
    /// `<plural>: [url, ...]`
    Many(Vec<Option<String>>),
}

impl Reference {
    /// Read the reference field for `kind`; the singular key wins over the plural one
    pub fn of(object: &Object, kind: ApiObject) -> Option<Self> {
        if let Some(value) = object.get(kind.singular()) {
            return Some(Reference::Single(value.as_str().map(str::to_string)));
        }
        match object.get(kind.plural()) {
            Some(Value::Array(urls)) => Some(Reference::Many(
                urls.iter()
                    .map(|url| url.as_str().map(str::to_string))
                    .collect(),
            )),
            Some(other) => Some(Reference::Single(other.as_str().map(str::to_string))),
            None => None,
        }
    }
}

/// Fetched related objects keyed by their own `url`
pub struct SideloadMap(HashMap<String, Object>);

impl SideloadMap {
    pub fn new(objects: Vec<Object>) -> Self {
        let map = objects
            .into_iter()
            .filter_map(|object| {
                let url = object.get("url")?.as_str()?.to_string();
                Some((url, object))
            })
            .collect();
        Self(map)
    }

    /// Referenced object, or an empty object for unknown references
    fn lookup(&self, url: Option<&str>) -> Value {
        url.and_then(|url| self.0.get(url))
            .cloned()
            .map(Value::Object)
            .unwrap_or_else(|| Value::Object(Object::new()))
    }

    /// Replace `kind`'s reference field on each object in place
    pub fn inject(&self, objects: &mut [Object], kind: ApiObject) {
        for object in objects.iter_mut() {
            match Reference::of(object, kind) {
                Some(Reference::Single(url)) => {
                    let resolved = self.lookup(url.as_deref());
                    let key = if object.contains_key(kind.singular()) {
                        kind.singular()
                    } else {
                        kind.plural()
                    };
                    object.insert(key.to_string(), resolved);
                }
                Some(Reference::Many(urls)) => {
                    let resolved = urls.iter().map(|url| self.lookup(url.as_deref())).collect();
                    object.insert(kind.plural().to_string(), Value::Array(resolved));
                }
                None => {}
            }
        }
    }
}

impl ElisClient {
    /// Resolve references to each kind in `kinds`, in order.
    ///
    /// Every kind is a full-collection fetch; each join is independent of the
    /// ones before it.
    pub async fn sideload(&self, objects: &mut [Object], kinds: &[ApiObject]) -> Result<()> {
        for &kind in kinds {
            let (related, _) = self.get_paginated(kind.plural(), Query::new()).await?;
            debug!("Sideloading {} {}", related.len(), kind);
            SideloadMap::new(related).inject(objects, kind);
        }
        Ok(())
    }
}
