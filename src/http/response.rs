use crate::config::BODY_PREVIEW_CHARS;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl ProbeResponse {
    /// Case-insensitive header lookup; returns the first match.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    /// Headers whose name contains `fragment`, ignoring case, in response order.
    pub fn headers_containing<'a>(
        &'a self,
        fragment: &'a str,
    ) -> impl Iterator<Item = (&'a str, &'a str)> + 'a {
        let fragment = fragment.to_ascii_lowercase();
        self.headers
            .iter()
            .filter(move |(key, _)| key.to_ascii_lowercase().contains(&fragment))
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }

    /// The body cut to at most `BODY_PREVIEW_CHARS` characters.
    pub fn body_preview(&self) -> &str {
        match self.body.char_indices().nth(BODY_PREVIEW_CHARS) {
            Some((end, _)) => &self.body[..end],
            None => &self.body,
        }
    }
}
