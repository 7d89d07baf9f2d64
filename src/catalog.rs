//! Creature catalog: the pool of creatures a roster is picked from.
//!
//! The catalog file is comma-delimited, one creature per row, in one of two
//! layouts:
//!
//! ```text
//! id,name,level,health
//! id,name,level,health,attack_name,portrait_path
//! ```
//!
//! Portrait paths are resolved against the directory holding the catalog file.

use crate::creature::{Creature, DEFAULT_ATTACK_NAME};
use crate::errors::{CatalogParseError, CatalogResult};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

const SHORT_ROW_FIELDS: usize = 4;
const FULL_ROW_FIELDS: usize = 6;

/// Catalog entry a roster slot is instantiated from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatureTemplate {
    pub key: u32,
    pub name: String,
    pub level: u8,
    pub health: u16,
    pub attack_name: String,
    pub portrait: Option<String>,
}

impl CreatureTemplate {
    /// Build a fresh creature at full health. Each call yields independent state.
    pub fn instantiate(&self) -> Creature {
        let creature = Creature::new(self.name.clone(), self.level, self.health, self.attack_name.clone());
        match &self.portrait {
            Some(portrait) => creature.with_portrait(portrait.clone()),
            None => creature,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Catalog {
    templates: BTreeMap<u32, CreatureTemplate>,
}

impl Catalog {
    /// Load a catalog file, reading any portraits it references.
    pub fn load(path: &Path) -> CatalogResult<Catalog> {
        let content = fs::read_to_string(path).map_err(|source| CatalogParseError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let base_dir = path.parent().unwrap_or_else(|| Path::new("."));
        let catalog = Self::parse(&content, base_dir)?;
        tracing::info!(path = %path.display(), creatures = catalog.len(), "loaded creature catalog");
        Ok(catalog)
    }

    /// Parse catalog text. Portrait paths are joined onto `base_dir`.
    pub fn parse(content: &str, base_dir: &Path) -> CatalogResult<Catalog> {
        let mut templates = BTreeMap::new();

        for (index, raw_line) in content.lines().enumerate() {
            let line_number = index + 1;
            let line = raw_line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let template = parse_row(line, line_number, base_dir)?;
            if templates.contains_key(&template.key) {
                return Err(CatalogParseError::DuplicateKey {
                    line_number,
                    key: template.key,
                    line: line.to_string(),
                });
            }
            tracing::debug!(key = template.key, name = %template.name, "catalog entry");
            templates.insert(template.key, template);
        }

        if templates.is_empty() {
            return Err(CatalogParseError::Empty);
        }

        Ok(Catalog { templates })
    }

    pub fn from_templates(templates: impl IntoIterator<Item = CreatureTemplate>) -> Self {
        Self {
            templates: templates.into_iter().map(|t| (t.key, t)).collect(),
        }
    }

    pub fn get(&self, key: u32) -> Option<&CreatureTemplate> {
        self.templates.get(&key)
    }

    /// Selection keys in ascending order.
    pub fn keys(&self) -> impl Iterator<Item = u32> + '_ {
        self.templates.keys().copied()
    }

    /// Templates in ascending key order.
    pub fn templates(&self) -> impl Iterator<Item = &CreatureTemplate> {
        self.templates.values()
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

fn parse_row(line: &str, line_number: usize, base_dir: &Path) -> CatalogResult<CreatureTemplate> {
    let fields: Vec<&str> = line.split(',').map(str::trim).collect();
    if fields.len() != SHORT_ROW_FIELDS && fields.len() != FULL_ROW_FIELDS {
        return Err(CatalogParseError::FieldCount {
            line_number,
            found: fields.len(),
            line: line.to_string(),
        });
    }

    let key = parse_number::<u32>(fields[0], "id", line, line_number)?;
    let level = parse_number::<u8>(fields[2], "level", line, line_number)?;
    let health = parse_number::<u16>(fields[3], "health", line, line_number)?;

    let (attack_name, portrait) = if fields.len() == FULL_ROW_FIELDS {
        let portrait_path: PathBuf = base_dir.join(fields[5]);
        let portrait = fs::read_to_string(&portrait_path).map_err(|source| CatalogParseError::Portrait {
            line_number,
            path: portrait_path.clone(),
            source,
        })?;
        (fields[4].to_string(), Some(portrait))
    } else {
        (DEFAULT_ATTACK_NAME.to_string(), None)
    };

    Ok(CreatureTemplate {
        key,
        name: fields[1].to_string(),
        level,
        health,
        attack_name,
        portrait,
    })
}

fn parse_number<T: std::str::FromStr>(
    value: &str,
    field: &'static str,
    line: &str,
    line_number: usize,
) -> CatalogResult<T> {
    value.parse::<T>().map_err(|_| CatalogParseError::InvalidNumber {
        line_number,
        field,
        value: value.to_string(),
        line: line.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use std::io::Write;

    #[test]
    fn test_parse_short_rows() {
        let catalog = Catalog::parse("1,Pikachu,12,90\n2,Onix,14,120\n", Path::new(".")).unwrap();

        assert_eq!(catalog.len(), 2);
        let pikachu = catalog.get(1).unwrap();
        assert_eq!(pikachu.name, "Pikachu");
        assert_eq!(pikachu.level, 12);
        assert_eq!(pikachu.health, 90);
        assert_eq!(pikachu.attack_name, DEFAULT_ATTACK_NAME);
        assert_eq!(pikachu.portrait, None);
        assert_eq!(catalog.keys().collect::<Vec<_>>(), vec![1, 2]);
    }

    #[test]
    fn test_parse_skips_blank_and_comment_lines() {
        let content = "# id,name,level,health\n\n3,Eevee,8,70\n   \n";
        let catalog = Catalog::parse(content, Path::new(".")).unwrap();
        assert_eq!(catalog.keys().collect::<Vec<_>>(), vec![3]);
    }

    #[test]
    fn test_five_field_row_is_rejected_with_line_content() {
        let content = "1,Pikachu,12,90\n2,Onix,14,120,Rock Throw\n";
        let err = Catalog::parse(content, Path::new(".")).unwrap_err();

        match &err {
            CatalogParseError::FieldCount { line_number, found, line } => {
                assert_eq!(*line_number, 2);
                assert_eq!(*found, 5);
                assert_eq!(line, "2,Onix,14,120,Rock Throw");
            }
            other => panic!("expected FieldCount, got {:?}", other),
        }
        assert!(err.to_string().contains("2,Onix,14,120,Rock Throw"));
    }

    #[rstest]
    #[case("x,Pikachu,12,90", "id")]
    #[case("1,Pikachu,twelve,90", "level")]
    #[case("1,Pikachu,12,-5", "health")]
    #[case("1,Pikachu,300,90", "level")]
    fn test_non_numeric_columns_are_rejected(#[case] row: &str, #[case] expected_field: &str) {
        let err = Catalog::parse(row, Path::new(".")).unwrap_err();
        match err {
            CatalogParseError::InvalidNumber { field, line, .. } => {
                assert_eq!(field, expected_field);
                assert_eq!(line, row);
            }
            other => panic!("expected InvalidNumber, got {:?}", other),
        }
    }

    #[test]
    fn test_duplicate_ids_are_rejected() {
        let err = Catalog::parse("1,Pikachu,12,90\n1,Raichu,30,120", Path::new(".")).unwrap_err();
        assert!(matches!(err, CatalogParseError::DuplicateKey { key: 1, line_number: 2, .. }));
    }

    #[test]
    fn test_empty_catalog_is_rejected() {
        let err = Catalog::parse("\n# nothing here\n", Path::new(".")).unwrap_err();
        assert!(matches!(err, CatalogParseError::Empty));
    }

    #[test]
    fn test_load_reads_portraits_relative_to_catalog() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("art")).unwrap();
        fs::write(dir.path().join("art/pikachu.txt"), "(\\_/)\n(o.o)\n").unwrap();

        let catalog_path = dir.path().join("creatures.csv");
        let mut file = fs::File::create(&catalog_path).unwrap();
        writeln!(file, "1,Pikachu,12,90,Thunder Shock,art/pikachu.txt").unwrap();
        writeln!(file, "2,Onix,14,120").unwrap();
        drop(file);

        let catalog = Catalog::load(&catalog_path).unwrap();
        let pikachu = catalog.get(1).unwrap();
        assert_eq!(pikachu.attack_name, "Thunder Shock");
        assert_eq!(pikachu.portrait.as_deref(), Some("(\\_/)\n(o.o)\n"));
        assert_eq!(catalog.get(2).unwrap().portrait, None);
    }

    #[test]
    fn test_missing_portrait_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Catalog::parse("1,Pikachu,12,90,Thunder Shock,missing.txt", dir.path()).unwrap_err();
        assert!(matches!(err, CatalogParseError::Portrait { line_number: 1, .. }));
    }

    #[test]
    fn test_missing_catalog_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Catalog::load(&dir.path().join("nope.csv")).unwrap_err();
        assert!(matches!(err, CatalogParseError::Io { .. }));
    }

    #[test]
    fn test_instantiate_yields_independent_creatures() {
        let catalog = Catalog::parse("1,Pikachu,12,90", Path::new(".")).unwrap();
        let template = catalog.get(1).unwrap();

        let mut first = template.instantiate();
        let second = template.instantiate();
        first.take_damage(50);

        assert_eq!(first.current_health(), 40);
        assert_eq!(second.current_health(), 90);
    }
}
