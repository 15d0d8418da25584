use serde::{Deserialize, Serialize};

// Identifiable defines common traits that can be shared by persistent objects
pub trait Identifiable: Sync + Send {
    fn id(&self) -> i64;
}

// Configuration abstracts config options for the bookstore service
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Configuration {
    pub http_port: u16,
    pub default_page_size: usize,
    pub max_page_size: usize,
}

impl Configuration {
    pub fn new() -> Self {
        let http_port = std::env::var("PORT")
            .ok()
            .and_then(|port| port.parse().ok())
            .unwrap_or(8080);
        Configuration {
            http_port,
            default_page_size: 20,
            max_page_size: 100,
        }
    }

    pub fn page_size(&self, requested: Option<usize>) -> usize {
        std::cmp::min(requested.unwrap_or(self.default_page_size), self.max_page_size)
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Configuration::new()
    }
}

#[cfg(test)]
mod tests {
    use crate::core::domain::Configuration;

    #[tokio::test]
    async fn test_should_build_config() {
        let config = Configuration::new();
        assert_eq!(20, config.default_page_size);
        assert_eq!(100, config.max_page_size);
    }

    #[tokio::test]
    async fn test_should_clamp_page_size() {
        let config = Configuration::new();
        assert_eq!(20, config.page_size(None));
        assert_eq!(5, config.page_size(Some(5)));
        assert_eq!(100, config.page_size(Some(5000)));
    }
}
