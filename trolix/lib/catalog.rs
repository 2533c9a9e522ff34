//! Static catalog of operating system templates shown to clients.
//!
//! Templates are display descriptors only. Creating a sandbox never consults them.

use serde::{ser::SerializeMap, Serialize, Serializer};

//--------------------------------------------------------------------------------------------------
// Constants
//--------------------------------------------------------------------------------------------------

/// The built-in templates, in display order.
pub const OS_TEMPLATES: &[OsTemplate] = &[
    OsTemplate::new("kali", "Kali Linux", "🐲", "#00ff41"),
    OsTemplate::new("ubuntu", "Ubuntu Server", "🐧", "#ff6600"),
    OsTemplate::new("windows", "Windows 10", "🪟", "#0078d4"),
    OsTemplate::new("centos", "CentOS", "🔴", "#red"),
    OsTemplate::new("debian", "Debian", "🌀", "#d70a53"),
    OsTemplate::new("arch", "Arch Linux", "⚡", "#1793d1"),
];

//--------------------------------------------------------------------------------------------------
// Types
//--------------------------------------------------------------------------------------------------

/// Display descriptor for an operating system choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OsTemplate {
    /// Catalog key, e.g. `kali`.
    #[serde(skip)]
    pub key: &'static str,

    /// Human readable name.
    pub name: &'static str,

    /// Icon glyph.
    pub icon: &'static str,

    /// Accent color.
    pub color: &'static str,
}

/// The catalog serialized as a `key -> {name, icon, color}` map that keeps display order.
#[derive(Debug, Clone, Copy)]
pub struct OsTemplateCatalog(&'static [OsTemplate]);

//--------------------------------------------------------------------------------------------------
// Methods
//--------------------------------------------------------------------------------------------------

impl OsTemplate {
    /// Creates a template descriptor.
    pub const fn new(
        key: &'static str,
        name: &'static str,
        icon: &'static str,
        color: &'static str,
    ) -> Self {
        Self {
            key,
            name,
            icon,
            color,
        }
    }
}

impl OsTemplateCatalog {
    /// Iterates the templates in display order.
    pub fn iter(&self) -> impl Iterator<Item = &'static OsTemplate> {
        self.0.iter()
    }
}

//--------------------------------------------------------------------------------------------------
// Functions
//--------------------------------------------------------------------------------------------------

/// Returns the built-in template catalog.
pub fn list_os_templates() -> OsTemplateCatalog {
    OsTemplateCatalog(OS_TEMPLATES)
}

//--------------------------------------------------------------------------------------------------
// Trait Implementations
//--------------------------------------------------------------------------------------------------

impl Serialize for OsTemplateCatalog {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for template in self.0 {
            map.serialize_entry(template.key, template)?;
        }
        map.end()
    }
}

//--------------------------------------------------------------------------------------------------
// Tests
//--------------------------------------------------------------------------------------------------
