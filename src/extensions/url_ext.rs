use url::Url;

/// Query string lookups that ignore parameters without a value.
pub trait QueryParams {
    fn has_query_param(&self, key: &str) -> bool;

    fn has_query_param_ignore_case(&self, key: &str) -> bool;

    /// Returns a copy with `key` set to `value`, replacing any existing occurrences in place.
    fn with_query_param(&self, key: &str, value: &str) -> Url;
}

impl QueryParams for Url {
    fn has_query_param(&self, key: &str) -> bool {
        self.query_pairs().any(|(k, v)| k == key && !v.is_empty())
    }

    fn has_query_param_ignore_case(&self, key: &str) -> bool {
        self.query_pairs().any(|(k, v)| k.eq_ignore_ascii_case(key) && !v.is_empty())
    }

    fn with_query_param(&self, key: &str, value: &str) -> Url {
        let mut replaced = false;
        let mut pairs = Vec::new();
        for (k, v) in self.query_pairs() {
            if k != key {
                pairs.push((k.into_owned(), v.into_owned()));
            } else if !replaced {
                pairs.push((k.into_owned(), value.to_string()));
                replaced = true;
            }
        }
        if !replaced {
            pairs.push((key.to_string(), value.to_string()));
        }

        let mut url = self.clone();
        url.query_pairs_mut().clear().extend_pairs(pairs);
        url
    }
}
