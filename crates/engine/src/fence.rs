//! Collision-free code fence selection.
//!
//! A fence is a run of backticks long enough that the same run never occurs
//! inside the fenced content, so embedded Markdown cannot close the block early.

use memchr::memmem;

/// Shortest run accepted by common Markdown renderers.
pub const MIN_FENCE_LEN: usize = 3;

const BACKTICK: &str = "`";

/// A code fence: a backtick run of `len` characters plus an optional language tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fence {
    len: usize,
    tag: String,
}

impl Fence {
    /// Pick the shortest run (starting at [`MIN_FENCE_LEN`]) absent from `content`.
    ///
    /// Terminates after at most `longest backtick run in content + 1` probes,
    /// since a run longer than anything in `content` cannot be found in it.
    #[must_use]
    pub fn select(content: &str, language_tag: &str) -> Self {
        let haystack = content.as_bytes();
        let mut len = MIN_FENCE_LEN;
        loop {
            let run = backtick_run(len);
            if memmem::find(haystack, run.as_bytes()).is_none() {
                break;
            }
            len += 1;
        }
        Self {
            len,
            tag: language_tag.to_owned(),
        }
    }

    /// Number of backticks in the run.
    #[must_use]
    pub const fn run_len(&self) -> usize {
        self.len
    }

    /// Opening line: run immediately followed by the tag, no separator.
    #[must_use]
    pub fn opening(&self) -> String {
        let mut s = backtick_run(self.len);
        s.push_str(&self.tag);
        s
    }

    /// Closing line: the bare run, same length as the opening one.
    #[must_use]
    pub fn closing(&self) -> String {
        backtick_run(self.len)
    }
}

/// Opening fence string for `content`: the selected run followed by `language_tag`.
#[must_use]
pub fn select_fence(content: &str, language_tag: &str) -> String {
    Fence::select(content, language_tag).opening()
}

pub(crate) fn backtick_run(len: usize) -> String {
    BACKTICK.repeat(len)
}
