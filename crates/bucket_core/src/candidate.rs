use std::fmt;

use url::Url;

use crate::TargetTemplate;

/// One fully-formed probe URL.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Candidate {
    url: String,
}

impl Candidate {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// First label of the URL host, or `None` when the URL does not parse or
    /// has no host.
    pub fn bucket_name(&self) -> Option<String> {
        let parsed = Url::parse(&self.url).ok()?;
        let label = parsed.host_str()?.split('.').next()?;
        if label.is_empty() {
            None
        } else {
            Some(label.to_string())
        }
    }

    /// Name reported for an accepted probe. Falls back to the raw URL so a
    /// success is never dropped.
    pub fn reported_name(&self) -> String {
        self.bucket_name().unwrap_or_else(|| self.url.clone())
    }
}

impl fmt::Display for Candidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.url)
    }
}

/// Expands every word into its base target plus four variants per modifier.
///
/// Output length is `words.len() * (1 + 4 * modifiers.len())`; repeated words
/// or modifiers produce repeated candidates.
pub fn generate_candidates<W, M>(
    words: &[W],
    modifiers: &[M],
    template: &TargetTemplate,
) -> Vec<Candidate>
where
    W: AsRef<str>,
    M: AsRef<str>,
{
    let mut candidates = Vec::with_capacity(words.len() * (1 + 4 * modifiers.len()));
    for word in words {
        let word = word.as_ref();
        candidates.push(Candidate::new(template.render(word)));
        for modifier in modifiers {
            let modifier = modifier.as_ref();
            for name in [
                format!("{modifier}-{word}"),
                format!("{modifier}{word}"),
                format!("{word}-{modifier}"),
                format!("{word}{modifier}"),
            ] {
                candidates.push(Candidate::new(template.render(&name)));
            }
        }
    }
    candidates
}
