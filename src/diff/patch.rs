/// Classification of one line of a unified-diff patch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatchLine<'a> {
    /// `+text`, with the marker stripped.
    Added(&'a str),
    /// `-text`, with the marker stripped.
    Removed(&'a str),
    /// ` text`, with the marker stripped.
    Context(&'a str),
    /// `@@ -a,b +c,d @@ ...`
    HunkHeader,
    /// `+++ b/path` and `--- a/path` ahead of the first hunk, or a
    /// `diff --git ...`, `index ...` line.
    FileHeader,
    /// Anything else, e.g. `\ No newline at end of file`. Ignored by every consumer.
    Other,
}

const FILE_HEADER_PREFIXES: &[&str] = &[
    "diff --git ",
    "index ",
    "new file mode",
    "deleted file mode",
    "similarity index",
    "rename from",
    "rename to",
];

impl<'a> PatchLine<'a> {
    /// Classify a line inside a hunk, where `---`/`+++` are ordinary
    /// removals and additions (a removed SQL comment reads `--- note`).
    #[must_use]
    pub fn classify(line: &'a str) -> Self {
        let line = line.strip_suffix('\r').unwrap_or(line);
        if let Some(rest) = line.strip_prefix('+') {
            return Self::Added(rest);
        }
        if let Some(rest) = line.strip_prefix('-') {
            return Self::Removed(rest);
        }
        if line.starts_with("@@") {
            return Self::HunkHeader;
        }
        if let Some(rest) = line.strip_prefix(' ') {
            return Self::Context(rest);
        }
        if line.is_empty() {
            // Some producers drop the space marker on blank context lines.
            return Self::Context(line);
        }
        if FILE_HEADER_PREFIXES.iter().any(|p| line.starts_with(p)) {
            return Self::FileHeader;
        }
        Self::Other
    }

    /// Classify a line ahead of any hunk, where `---`/`+++` name the file pair.
    #[must_use]
    pub fn classify_preamble(line: &'a str) -> Self {
        if line.starts_with("+++ ") || line.starts_with("--- ") {
            return Self::FileHeader;
        }
        Self::classify(line)
    }
}

/// Iterate the classified lines of a patch.
///
/// A `diff --git` header ends the current hunk, so a multi-file patch gets
/// its `---`/`+++` pair read as headers again.
pub fn patch_lines(patch: &str) -> impl Iterator<Item = PatchLine<'_>> {
    let mut in_hunk = false;
    patch.lines().map(move |line| {
        let classified = if in_hunk {
            PatchLine::classify(line)
        } else {
            PatchLine::classify_preamble(line)
        };
        match classified {
            PatchLine::HunkHeader => in_hunk = true,
            PatchLine::FileHeader => in_hunk = false,
            _ => {}
        }
        classified
    })
}

/// Text of every added line, marker stripped.
pub fn added_lines(patch: &str) -> impl Iterator<Item = &str> {
    patch_lines(patch).filter_map(|line| match line {
        PatchLine::Added(text) => Some(text),
        _ => None,
    })
}

/// Text of every removed line, marker stripped.
pub fn removed_lines(patch: &str) -> impl Iterator<Item = &str> {
    patch_lines(patch).filter_map(|line| match line {
        PatchLine::Removed(text) => Some(text),
        _ => None,
    })
}
