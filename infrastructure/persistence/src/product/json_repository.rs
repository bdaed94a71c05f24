use std::fs;
use std::path::Path;

use async_trait::async_trait;
use tracing::warn;

use business::domain::errors::RepositoryError;
use business::domain::product::model::Product;
use business::domain::product::repository::ProductRepository;

use super::entity::ProductRecord;

/// Flat-file catalog backend. The file is parsed once at construction and
/// the catalog stays immutable for the process lifetime, so concurrent
/// readers need no locking.
#[derive(Debug)]
pub struct ProductRepositoryJsonFile {
    products: Vec<Product>,
}

impl ProductRepositoryJsonFile {
    pub fn load(path: &Path) -> Result<Self, RepositoryError> {
        let raw = fs::read_to_string(path).map_err(|_| RepositoryError::Persistence)?;
        let items: Vec<serde_json::Value> =
            serde_json::from_str(&raw).map_err(|_| RepositoryError::Persistence)?;

        let mut products = Vec::with_capacity(items.len());
        for item in items {
            match serde_json::from_value::<ProductRecord>(item) {
                Ok(record) => products.push(record.into_domain()),
                Err(err) => warn!("Skipping catalog record with invalid shape: {}", err),
            }
        }

        Ok(Self { products })
    }
}

#[async_trait]
impl ProductRepository for ProductRepositoryJsonFile {
    async fn find_by_name(&self, name: &str) -> Result<Option<Product>, RepositoryError> {
        let lowered = name.trim().to_lowercase();
        Ok(self
            .products
            .iter()
            .find(|p| p.name.to_lowercase() == lowered)
            .cloned())
    }

    async fn find_by_name_partial(&self, name: &str) -> Result<Vec<Product>, RepositoryError> {
        let lowered = name.trim().to_lowercase();
        let words: Vec<&str> = lowered.split_whitespace().collect();
        if words.is_empty() {
            return Ok(vec![]);
        }

        Ok(self
            .products
            .iter()
            .filter(|p| {
                let product_name = p.name.to_lowercase();
                words.iter().all(|word| product_name.contains(word))
            })
            .cloned()
            .collect())
    }

    async fn list_all(&self) -> Result<Vec<Product>, RepositoryError> {
        Ok(self.products.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn write_catalog(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("catalog-{}-{}.json", std::process::id(), name));
        fs::write(&path, contents).unwrap();
        path
    }

    const CATALOG: &str = r#"[
        {
            "id": 101,
            "name": "Samsung Galaxy A57",
            "category": "phone",
            "brand": "Samsung",
            "model": "A57",
            "attributes": {"port_type": "usb_c"},
            "tags": ["phone", "samsung"]
        },
        {
            "id": 203,
            "name": "Samsung 25W USB-C Charger",
            "category": "charger",
            "brand": "Samsung",
            "attributes": {"port_type": "usb_c", "compatible_brand": "Samsung"}
        }
    ]"#;

    #[tokio::test]
    async fn should_find_by_exact_name_ignoring_case() {
        let path = write_catalog("exact", CATALOG);
        let repository = ProductRepositoryJsonFile::load(&path).unwrap();

        let product = repository
            .find_by_name("samsung galaxy a57")
            .await
            .unwrap()
            .unwrap();

        assert_eq!(product.id, 101);
        assert_eq!(product.attribute("port_type"), Some("usb_c"));
    }

    #[tokio::test]
    async fn should_match_partial_names_word_by_word() {
        let path = write_catalog("partial", CATALOG);
        let repository = ProductRepositoryJsonFile::load(&path).unwrap();

        let products = repository
            .find_by_name_partial("samsung charger")
            .await
            .unwrap();

        assert_eq!(products.len(), 1);
        assert_eq!(products[0].id, 203);
    }

    #[tokio::test]
    async fn should_list_all_in_catalog_order() {
        let path = write_catalog("list", CATALOG);
        let repository = ProductRepositoryJsonFile::load(&path).unwrap();

        let ids: Vec<i64> = repository
            .list_all()
            .await
            .unwrap()
            .iter()
            .map(|p| p.id)
            .collect();

        assert_eq!(ids, vec![101, 203]);
    }

    #[tokio::test]
    async fn should_default_missing_optional_fields() {
        let path = write_catalog("defaults", r#"[{"id": 1, "name": "Thing", "category": "cable"}]"#);
        let repository = ProductRepositoryJsonFile::load(&path).unwrap();

        let product = repository.find_by_name("Thing").await.unwrap().unwrap();

        assert!(product.brand.is_none());
        assert!(product.tags.is_empty());
        assert!(product.attributes.is_empty());
    }

    #[tokio::test]
    async fn should_skip_records_with_invalid_shape() {
        let path = write_catalog(
            "invalid-record",
            r#"[{"id": 1, "name": "Thing", "category": "cable"}, {"id": "oops"}]"#,
        );
        let repository = ProductRepositoryJsonFile::load(&path).unwrap();

        assert_eq!(repository.list_all().await.unwrap().len(), 1);
    }

    #[test]
    fn should_fail_to_load_a_missing_file() {
        let result = ProductRepositoryJsonFile::load(Path::new("/nonexistent/catalog.json"));

        assert!(matches!(result.unwrap_err(), RepositoryError::Persistence));
    }

    #[test]
    fn should_fail_to_load_a_file_that_is_not_a_json_array() {
        let path = write_catalog("not-array", r#"{"id": 1}"#);

        let result = ProductRepositoryJsonFile::load(&path);

        assert!(matches!(result.unwrap_err(), RepositoryError::Persistence));
    }
}
