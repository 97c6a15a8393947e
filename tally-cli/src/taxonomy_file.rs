//! Loading and writing the taxonomy file

use anyhow::{Context, Result, bail};
use std::fs;
use std::path::{Path, PathBuf};
use tally_core::Taxonomy;
use tracing::debug;

use crate::state::{default_taxonomy_path, ensure_tally_home};

/// Resolve the taxonomy: explicit path > config path > ~/.tally/taxonomy.toml > built-in.
///
/// An explicitly named file must exist; the home-directory file is optional.
pub fn load_taxonomy(explicit: Option<&Path>) -> Result<Taxonomy> {
    if let Some(p) = explicit {
        if !p.exists() {
            bail!("taxonomy file not found: {}", p.display());
        }
        return read_taxonomy(p);
    }

    let fallback = default_taxonomy_path()?;
    if fallback.exists() {
        return read_taxonomy(&fallback);
    }

    debug!("no taxonomy file, using built-in taxonomy");
    Ok(Taxonomy::default())
}

pub fn read_taxonomy(path: &Path) -> Result<Taxonomy> {
    let s = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let taxonomy = parse_taxonomy(&s, is_json(path))
        .with_context(|| format!("parse {}", path.display()))?;
    debug!(path = %path.display(), "loaded taxonomy");
    Ok(taxonomy)
}

pub fn parse_taxonomy(s: &str, json: bool) -> Result<Taxonomy> {
    let taxonomy: Taxonomy = if json {
        serde_json::from_str(s)?
    } else {
        toml::from_str(s)?
    };
    taxonomy.validate()?;
    Ok(taxonomy)
}

fn is_json(path: &Path) -> bool {
    path.extension()
        .is_some_and(|e| e.eq_ignore_ascii_case("json"))
}

/// Write the built-in taxonomy to ~/.tally/taxonomy.toml unless one exists.
pub fn init_taxonomy() -> Result<PathBuf> {
    let p = ensure_tally_home()?.join("taxonomy.toml");
    if p.exists() {
        println!("Taxonomy already exists: {}", p.display());
        return Ok(p);
    }
    let s = toml::to_string_pretty(&Taxonomy::default()).context("serialize taxonomy")?;
    fs::write(&p, s).with_context(|| format!("write {}", p.display()))?;
    println!("Wrote {}", p.display());
    Ok(p)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tally_core::Bucket;

    #[test]
    fn test_default_taxonomy_survives_toml() {
        let s = toml::to_string_pretty(&Taxonomy::default()).unwrap();
        assert_eq!(parse_taxonomy(&s, false).unwrap(), Taxonomy::default());
    }

    #[test]
    fn test_json_taxonomy() {
        let s = r#"{"buckets":[{"bucket":"Avoids","categories":[{"name":"Habits","subcategories":["Vape"]}]}]}"#;
        let tax = parse_taxonomy(s, true).unwrap();
        assert_eq!(tax.subcategories().next(), Some((Bucket::Avoids, "Vape")));
    }

    #[test]
    fn test_blank_subcategory_is_an_error() {
        let s = "[[buckets]]\nbucket = \"Needs\"\n[[buckets.categories]]\nname = \"Food\"\nsubcategories = [\"\"]\n";
        assert!(parse_taxonomy(s, false).is_err());
    }

    #[test]
    fn test_extension_detection() {
        assert!(is_json(Path::new("tax.JSON")));
        assert!(!is_json(Path::new("tax.toml")));
    }
}
