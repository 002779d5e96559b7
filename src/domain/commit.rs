/// First non-empty line of a commit body, trimmed.
///
/// Merge commits created by pull requests carry the PR title as the first
/// body line; `None` means the body is empty or whitespace only.
pub fn headline(body: &str) -> Option<&str> {
    body.lines().map(str::trim).find(|line| !line.is_empty())
}
