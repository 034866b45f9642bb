//! SVG icon registry. Icons are registered once at startup and looked up by
//! name afterwards; markup is stored as given and never validated.

use serde::Serialize;
use std::collections::HashMap;

/// Default icons available as soon as a registry is constructed.
const DEFAULT_ICONS: [(&str, &str); 6] = [
    (
        "user",
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2">
  <path d="M20 21v-2a4 4 0 0 0-4-4H8a4 4 0 0 0-4 4v2"></path>
  <circle cx="12" cy="7" r="4"></circle>
</svg>"#,
    ),
    (
        "home",
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2">
  <path d="M3 9l9-7 9 7v11a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2z"></path>
  <polyline points="9 22 9 12 15 12 15 22"></polyline>
</svg>"#,
    ),
    (
        "settings",
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2">
  <circle cx="12" cy="12" r="3"></circle>
  <path d="M12 1v6m0 6v6m5.5-11.5l-4.2 4.2m-2.6 2.6l-4.2 4.2m11.5-5.5l-4.2-4.2m-2.6-2.6l-4.2-4.2"></path>
</svg>"#,
    ),
    (
        "plus",
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2">
  <line x1="12" y1="5" x2="12" y2="19"></line>
  <line x1="5" y1="12" x2="19" y2="12"></line>
</svg>"#,
    ),
    (
        "edit",
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2">
  <path d="M11 4H4a2 2 0 0 0-2 2v14a2 2 0 0 0 2 2h14a2 2 0 0 0 2-2v-7"></path>
  <path d="M18.5 2.5a2.121 2.121 0 0 1 3 3L12 15l-4 1 1-4 9.5-9.5z"></path>
</svg>"#,
    ),
    (
        "delete",
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2">
  <polyline points="3 6 5 6 21 6"></polyline>
  <path d="M19 6v14a2 2 0 0 1-2 2H7a2 2 0 0 1-2-2V6m3 0V4a2 2 0 0 1 2-2h4a2 2 0 0 1 2 2v2"></path>
</svg>"#,
    ),
];

/// A registered icon, used when listing or exporting entries.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct IconDefinition {
    pub name: String,
    pub svg: String,
}

#[derive(Clone, Debug)]
pub struct IconRegistry {
    icons: HashMap<String, String>,
}

impl IconRegistry {
    /// Creates a registry pre-populated with the default icons.
    #[must_use]
    pub fn new() -> Self {
        let mut registry = Self {
            icons: HashMap::with_capacity(DEFAULT_ICONS.len()),
        };
        for (name, svg) in DEFAULT_ICONS {
            registry.register(name, svg);
        }
        registry
    }

    /// Registers `svg` under `name`, replacing any previous markup.
    pub fn register(&mut self, name: impl Into<String>, svg: impl Into<String>) {
        self.icons.insert(name.into(), svg.into());
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.icons.get(name).map(String::as_str)
    }

    #[must_use]
    pub fn has(&self, name: &str) -> bool {
        self.icons.contains_key(name)
    }

    /// Registered names in ascending order.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.icons.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    #[must_use]
    pub fn definition(&self, name: &str) -> Option<IconDefinition> {
        self.get(name).map(|svg| IconDefinition {
            name: name.to_string(),
            svg: svg.to_string(),
        })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.icons.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.icons.is_empty()
    }
}

impl Default for IconRegistry {
    fn default() -> Self {
        Self::new()
    }
}
