use urlencoding::encode;

/// Build a query string from key-value pairs
pub fn build_query_string(pairs: &[(String, String)]) -> String {
    let mut first = true;
    let mut out = String::new();
    for (k, v) in pairs {
        if !first {
            out.push('&');
        } else {
            first = false;
        }
        out.push_str(&encode(k));
        out.push('=');
        out.push_str(&encode(v));
    }
    out
}

/// Append encoded pairs to a path, keeping any query it already carries.
/// An empty pair list leaves the path untouched.
pub fn append_query(path: &str, pairs: &[(String, String)]) -> String {
    if pairs.is_empty() {
        return path.to_string();
    }
    let sep = if path.contains('?') { '&' } else { '?' };
    format!("{}{}{}", path, sep, build_query_string(pairs))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(raw: &[(&str, &str)]) -> Vec<(String, String)> {
        raw.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    #[test]
    fn test_build_query_string_encodes_values() {
        let q = build_query_string(&pairs(&[("search", "intel xeon"), ("cpu", "E3-1275&v5")]));
        assert_eq!(q, "search=intel%20xeon&cpu=E3-1275%26v5");
    }

    #[test]
    fn test_append_query_empty_pairs() {
        assert_eq!(append_query("server", &[]), "server");
    }

    #[test]
    fn test_append_query_existing_query() {
        assert_eq!(
            append_query("order/server_market/product?lang=en", &pairs(&[("min_price", "10")])),
            "order/server_market/product?lang=en&min_price=10"
        );
    }
}
