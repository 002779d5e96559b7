use std::cmp::Ordering;

/// Release tag prefix for a project (e.g., project "api" -> "api-v")
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagPrefix {
    pub prefix: String,
}

impl TagPrefix {
    /// Build the prefix from a project key
    pub fn for_project(project: &str) -> Self {
        TagPrefix {
            prefix: format!("{}-v", project),
        }
    }

    /// Glob matching every tag of the project: `<prefix>*`
    pub fn glob_all(&self) -> String {
        format!("{}*", glob::Pattern::escape(&self.prefix))
    }

    /// Glob matching release candidates only: `<prefix>*-rc*`
    pub fn glob_release_candidates(&self) -> String {
        format!("{}*-rc*", glob::Pattern::escape(&self.prefix))
    }
}

/// Returns true when the tag ends in `-rc<digits>` or `-dev<digits>`.
pub fn is_prerelease(tag: &str) -> bool {
    let without_digits = tag.trim_end_matches(|c: char| c.is_ascii_digit());
    if without_digits.len() == tag.len() {
        return false;
    }

    without_digits.ends_with("-rc") || without_digits.ends_with("-dev")
}

// States of git's `versioncmp`: normal, integral part, fractional part
// (after leading zeros), leading zeros only. Each state spans three slots,
// one per class of the current byte: other, non-zero digit, zero.
const S_N: usize = 0;
const S_I: usize = 3;
const S_F: usize = 6;
const S_Z: usize = 9;

const CMP: i8 = 2;
const LEN: i8 = 3;

#[rustfmt::skip]
const NEXT_STATE: [usize; 12] = [
    /* S_N */ S_N, S_I, S_Z,
    /* S_I */ S_N, S_I, S_I,
    /* S_F */ S_N, S_F, S_F,
    /* S_Z */ S_N, S_F, S_Z,
];

// Indexed by state + class of the left byte, then class of the right byte.
#[rustfmt::skip]
const RESULT_TYPE: [i8; 36] = [
    /*          x/x  x/d  x/0  d/x  d/d  d/0  0/x  0/d  0/0 */
    /* S_N */   CMP, CMP, CMP, CMP, LEN, CMP, CMP, CMP, CMP,
    /* S_I */   CMP, -1,  -1,  1,   LEN, LEN, 1,   LEN, LEN,
    /* S_F */   CMP, CMP, CMP, CMP, CMP, CMP, CMP, CMP, CMP,
    /* S_Z */   CMP, 1,   1,   -1,  CMP, CMP, -1,  CMP, CMP,
];

/// Version-aware comparison of tag names, the order of `git tag --sort=v:refname`.
///
/// Walks both names byte by byte. At the first difference, digit runs compare
/// by length and then by value, and a run with leading zeros is treated as a
/// fraction, so `1.00.1` < `1.0.0`. Otherwise bytes compare as-is, and a name
/// that is a strict prefix of another sorts first (`v1.0.0` < `v1.0.0-rc1`).
/// No `versionsort.suffix` reordering is applied.
pub fn version_cmp(left: &str, right: &str) -> Ordering {
    let (a, b) = (left.as_bytes(), right.as_bytes());

    let mut i = 0;
    let (mut c1, mut c2) = (byte_at(a, 0), byte_at(b, 0));
    let mut state = S_N + class(c1);

    while c1 == c2 {
        if c1 == 0 {
            return Ordering::Equal;
        }
        state = NEXT_STATE[state];
        i += 1;
        c1 = byte_at(a, i);
        c2 = byte_at(b, i);
        state += class(c1);
    }

    match RESULT_TYPE[state * 3 + class(c2)] {
        CMP => c1.cmp(&c2),
        LEN => {
            // The longer digit run wins; equal lengths fall back to the first difference
            let mut j = i + 1;
            while byte_at(a, j).is_ascii_digit() {
                if !byte_at(b, j).is_ascii_digit() {
                    return Ordering::Greater;
                }
                j += 1;
            }
            if byte_at(b, j).is_ascii_digit() {
                Ordering::Less
            } else {
                c1.cmp(&c2)
            }
        }
        fixed if fixed < 0 => Ordering::Less,
        _ => Ordering::Greater,
    }
}

/// Sort tag names highest version first (`--sort=-v:refname`).
pub fn sort_descending(tags: &mut [String]) {
    tags.sort_by(|a, b| version_cmp(b, a));
}

/// Byte at `index`, or NUL past the end
fn byte_at(s: &[u8], index: usize) -> u8 {
    s.get(index).copied().unwrap_or(0)
}

/// 0 for a non-digit, 1 for a non-zero digit, 2 for `0`
fn class(c: u8) -> usize {
    usize::from(c == b'0') + usize::from(c.is_ascii_digit())
}
