//! Deterministic slug derivation from a project title.

/// Derive a URL-safe slug: lowercase, strip characters that are neither
/// ASCII word characters, whitespace nor hyphens, then turn whitespace
/// runs into single hyphens and collapse hyphen runs.
///
/// `"My Awesome, Project!"` becomes `"my-awesome-project"`. Accented
/// letters are stripped, not transliterated: `"Café Site"` becomes
/// `"caf-site"`.
pub fn derive_slug(title: &str) -> String {
    let lowered = title.to_lowercase();

    let mut slug = String::with_capacity(lowered.len());
    let mut prev_hyphen = false;
    for c in lowered.chars() {
        let mapped = if c.is_whitespace() { '-' } else { c };
        if mapped == '-' {
            if !prev_hyphen {
                slug.push('-');
            }
            prev_hyphen = true;
        } else if mapped.is_ascii_alphanumeric() || mapped == '_' {
            slug.push(mapped);
            prev_hyphen = false;
        }
        // anything else is stripped; a stripped char does not break a
        // hyphen run, matching the strip-then-collapse order
    }

    slug
}
