use thiserror::Error;

/// Rejected `key=value` filter input
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FilterError {
    #[error("unknown filter: {0}")]
    UnknownKey(String),

    #[error("{key} must be a number, got {value:?}")]
    NotANumber { key: String, value: String },
}

/// Search filters for `GET /api/annonces`.
/// Unset fields are left out of the query string.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnnonceFilters {
    pub cat: Option<String>,
    pub ville: Option<String>,
    pub q: Option<String>,
    pub min_prix: Option<i64>,
    pub max_prix: Option<i64>,
    pub badge: Option<String>,
    pub sort: Option<String>,
    pub page: Option<u32>,
}

impl AnnonceFilters {
    /// Build filters from `key=value` pairs, as typed on a command line.
    /// Unknown keys and unparsable numbers are reported by name.
    pub fn from_pairs<'a>(
        pairs: impl IntoIterator<Item = (&'a str, &'a str)>,
    ) -> Result<Self, FilterError> {
        let mut filters = Self::default();
        for (key, value) in pairs {
            let value = value.to_string();
            match key {
                "cat" => filters.cat = Some(value),
                "ville" => filters.ville = Some(value),
                "q" => filters.q = Some(value),
                "min_prix" => filters.min_prix = Some(parse_number(key, &value)?),
                "max_prix" => filters.max_prix = Some(parse_number(key, &value)?),
                "badge" => filters.badge = Some(value),
                "sort" => filters.sort = Some(value),
                "page" => filters.page = Some(parse_number(key, &value)?),
                other => return Err(FilterError::UnknownKey(other.to_string())),
            }
        }
        Ok(filters)
    }
}

fn parse_number<T: std::str::FromStr>(key: &str, value: &str) -> Result<T, FilterError> {
    value.parse().map_err(|_| FilterError::NotANumber {
        key: key.to_string(),
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_pairs() {
        let filters =
            AnnonceFilters::from_pairs([("ville", "Abidjan"), ("max_prix", "50000"), ("page", "2")])
                .unwrap();
        assert_eq!(filters.ville.as_deref(), Some("Abidjan"));
        assert_eq!(filters.max_prix, Some(50_000));
        assert_eq!(filters.page, Some(2));
        assert_eq!(filters.cat, None);
    }

    #[test]
    fn test_from_pairs_rejects_bad_input() {
        assert_eq!(
            AnnonceFilters::from_pairs([("colour", "red")]),
            Err(FilterError::UnknownKey("colour".to_string()))
        );

        let err = AnnonceFilters::from_pairs([("min_prix", "cheap")]).unwrap_err();
        assert!(matches!(err, FilterError::NotANumber { ref key, .. } if key == "min_prix"));
        assert_eq!(err.to_string(), r#"min_prix must be a number, got "cheap""#);
    }
}
