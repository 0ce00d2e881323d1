use wiremock::{Match, Request};

/// Matches requests without the given query parameter.
pub struct MissingQuery<'a>(&'a str);

impl<'a> MissingQuery<'a> {
    pub fn new(query: &'a str) -> Self {
        Self(query)
    }
}

impl Match for MissingQuery<'_> {
    fn matches(&self, request: &Request) -> bool {
        !request.url.query_pairs().any(|(k, _)| k == self.0)
    }
}

/// Matches requests whose query holds exactly `values` for `key`, in order.
pub struct RepeatedQuery<'a> {
    key: &'a str,
    values: Vec<&'a str>,
}

impl<'a> RepeatedQuery<'a> {
    pub fn new(key: &'a str, values: &[&'a str]) -> Self {
        Self {
            key,
            values: values.to_vec(),
        }
    }
}

impl Match for RepeatedQuery<'_> {
    fn matches(&self, request: &Request) -> bool {
        let got: Vec<String> = request
            .url
            .query_pairs()
            .filter(|(k, _)| k == self.key)
            .map(|(_, v)| v.into_owned())
            .collect();
        got == self.values
    }
}
