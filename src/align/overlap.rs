//! Longest common contiguous token run between two strings.
//!
//! The overlap scan is the aligner's comparison primitive: a brute-force
//! offset scan over whitespace-delimited tokens, quadratic in token count.
//! Page runs are short (a few words) and search segments are sentence-sized,
//! so the quadratic bound is irrelevant in practice.

/// Where an overlap occurred within the *first* argument of [`find_overlap`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlapPosition {
    /// Overlap begins at the first token
    Start,
    /// Overlap ends at the last token but does not begin at the first
    End,
    /// Overlap lies strictly inside
    Middle,
}

/// The longest contiguous run of matching tokens found at any alignment
/// offset between two strings.
#[derive(Debug, Clone, PartialEq)]
pub struct Overlap {
    /// The matching tokens, space-joined
    pub text: String,
    /// Position of the overlap within the first input
    pub position: OverlapPosition,
}

/// Find the longest contiguous token overlap between `first` and `second`.
///
/// Returns `None` when the inputs share no token at all. Ties are resolved
/// in favor of the earliest starting offset in `first`.
///
/// # Examples
///
/// ```
/// use pdf_highlight::align::{find_overlap, OverlapPosition};
///
/// let overlap = find_overlap("the quick brown fox", "quick brown cat").unwrap();
/// assert_eq!(overlap.text, "quick brown");
/// assert_eq!(overlap.position, OverlapPosition::Middle);
///
/// assert!(find_overlap("alpha beta", "gamma delta").is_none());
/// ```
pub fn find_overlap(first: &str, second: &str) -> Option<Overlap> {
    let words1: Vec<&str> = first.split_whitespace().collect();
    let words2: Vec<&str> = second.split_whitespace().collect();

    let mut best: Option<(usize, usize)> = None; // (start in words1, token count)
    let mut max_len = 0;

    for i in 0..words1.len() {
        for j in 0..words2.len() {
            let mut len = 0;
            while i + len < words1.len()
                && j + len < words2.len()
                && words1[i + len] == words2[j + len]
            {
                len += 1;
            }
            if len > max_len {
                max_len = len;
                best = Some((i, len));
            }
        }
    }

    best.map(|(i, len)| {
        let position = if i == 0 {
            OverlapPosition::Start
        } else if i + len == words1.len() {
            OverlapPosition::End
        } else {
            OverlapPosition::Middle
        };
        Overlap {
            text: words1[i..i + len].join(" "),
            position,
        }
    })
}
