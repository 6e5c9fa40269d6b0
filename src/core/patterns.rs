use std::collections::HashSet;

use regex::RegexSet;

use crate::error::{AssetError, Result};

/// Names to leave out of an enumeration, parsed from a pipe-separated list
/// such as `"node_modules|.DS_Store|*.map"`.
///
/// Segments without wildcards compare against the whole entry name. `*`
/// matches any run of characters and `?` exactly one; everything else is
/// literal.
#[derive(Debug, Default)]
pub struct ExcludeSet {
    names: HashSet<String>,
    globs: Option<RegexSet>,
}

impl ExcludeSet {
    pub fn parse(pattern: &str) -> Result<Self> {
        let mut names = HashSet::new();
        let mut globs = Vec::new();

        for segment in pattern.split('|').map(str::trim) {
            if segment.is_empty() {
                continue;
            }
            if segment.contains(['*', '?']) {
                globs.push(glob_to_regex(segment));
            } else {
                names.insert(segment.to_owned());
            }
        }

        let globs = if globs.is_empty() {
            None
        } else {
            let set = RegexSet::new(&globs).map_err(|source| AssetError::InvalidPattern {
                pattern: pattern.to_owned(),
                source,
            })?;
            Some(set)
        };

        Ok(Self { names, globs })
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty() && self.globs.is_none()
    }

    #[inline]
    pub fn is_excluded(&self, name: &str) -> bool {
        self.names.contains(name)
            || self
                .globs
                .as_ref()
                .is_some_and(|globs| globs.is_match(name))
    }
}

fn glob_to_regex(glob: &str) -> String {
    let mut out = String::with_capacity(glob.len() * 2 + 6);
    // `*` and `?` must also cover newlines in file names
    out.push_str("(?s)^");

    let mut literal = String::new();
    for c in glob.chars() {
        match c {
            '*' | '?' => {
                out.push_str(&regex::escape(&literal));
                literal.clear();
                out.push_str(if c == '*' { ".*" } else { "." });
            }
            _ => literal.push(c),
        }
    }
    out.push_str(&regex::escape(&literal));

    out.push('$');
    out
}
