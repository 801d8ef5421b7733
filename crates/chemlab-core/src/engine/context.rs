use super::config::SessionConfig;
use crate::core::catalog::Catalog;
use crate::core::models::molecule::Molecule;

/// Read-only collaborators every session transition consults.
#[derive(Clone, Copy)]
pub struct SessionContext<'a> {
    pub catalog: &'a Catalog,
    pub config: &'a SessionConfig,
}

impl<'a> SessionContext<'a> {
    pub fn new(catalog: &'a Catalog, config: &'a SessionConfig) -> Self {
        Self { catalog, config }
    }

    pub fn molecule(&self, id: &str) -> Option<&'a Molecule> {
        self.catalog.get(id)
    }
}
