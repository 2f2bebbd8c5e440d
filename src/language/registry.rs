use std::collections::HashMap;
use std::path::Path;

use indexmap::IndexMap;

use crate::config::CustomLanguageConfig;

/// Comment markers recognized at the start of a single changed line.
///
/// Diff lines arrive without their surrounding file, so there is no multi-line
/// state: a line counts as a comment when its trimmed text opens or closes a
/// block comment, starts with a line-comment marker, or starts with the
/// block-continuation marker (`*` inside C-style doc blocks).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentSyntax {
    pub line: Vec<String>,
    pub block: Vec<(String, String)>,
    pub continuation: Option<String>,
}

impl CommentSyntax {
    #[must_use]
    pub fn new(line: Vec<&str>, block: Vec<(&str, &str)>) -> Self {
        Self {
            line: line.into_iter().map(String::from).collect(),
            block: block
                .into_iter()
                .map(|(s, e)| (s.to_string(), e.to_string()))
                .collect(),
            continuation: None,
        }
    }

    #[must_use]
    pub fn with_continuation(mut self, marker: &str) -> Self {
        self.continuation = Some(marker.to_string());
        self
    }

    /// `//` line comments plus `/* */` blocks with `*` continuation lines.
    #[must_use]
    pub fn c_style() -> Self {
        Self::new(vec!["//"], vec![("/*", "*/")]).with_continuation("*")
    }

    #[must_use]
    pub fn hash_style() -> Self {
        Self::new(vec!["#"], vec![])
    }

    /// Returns true if `trimmed` (already stripped of surrounding whitespace) is a comment.
    #[must_use]
    pub fn matches(&self, trimmed: &str) -> bool {
        if trimmed.is_empty() {
            return false;
        }
        self.line.iter().any(|prefix| trimmed.starts_with(prefix.as_str()))
            || self.block.iter().any(|(open, close)| {
                trimmed.starts_with(open.as_str()) || trimmed.starts_with(close.as_str())
            })
            || self
                .continuation
                .as_deref()
                .is_some_and(|marker| trimmed.starts_with(marker))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Language {
    pub name: String,
    pub extensions: Vec<String>,
    pub comment_syntax: CommentSyntax,
}

impl Language {
    #[must_use]
    pub fn new(name: &str, extensions: Vec<&str>, comment_syntax: CommentSyntax) -> Self {
        Self {
            name: name.to_string(),
            extensions: extensions.into_iter().map(String::from).collect(),
            comment_syntax,
        }
    }

    /// The entry used for every extension the table does not list.
    #[must_use]
    pub fn fallback() -> Self {
        Self::new(
            "Generic",
            vec![],
            CommentSyntax::new(vec!["//", "#"], vec![("/*", "*/"), ("<!--", "-->")]),
        )
    }
}

/// Static table from normalized (lower-case) file extension to comment syntax.
///
/// Lookup is total: anything unlisted, including files without an extension,
/// resolves to [`Language::fallback`].
#[derive(Debug)]
pub struct LanguageRegistry {
    languages: Vec<Language>,
    extension_map: HashMap<String, usize>,
    fallback: Language,
}

impl LanguageRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self {
            languages: Vec::new(),
            extension_map: HashMap::new(),
            fallback: Language::fallback(),
        }
    }

    pub fn register(&mut self, language: Language) {
        let idx = self.languages.len();
        for ext in &language.extensions {
            self.extension_map.insert(ext.to_ascii_lowercase(), idx);
        }
        self.languages.push(language);
    }

    #[must_use]
    pub fn get_by_extension(&self, ext: &str) -> Option<&Language> {
        self.extension_map
            .get(&ext.to_ascii_lowercase())
            .map(|&idx| &self.languages[idx])
    }

    /// Resolve the language for a repository-relative filename.
    #[must_use]
    pub fn resolve(&self, filename: &str) -> &Language {
        Path::new(filename)
            .extension()
            .and_then(|ext| ext.to_str())
            .and_then(|ext| self.get_by_extension(ext))
            .unwrap_or(&self.fallback)
    }

    /// Classify one line of changed text (without its `+`/`-` prefix).
    #[must_use]
    pub fn is_comment(&self, line: &str, filename: &str) -> bool {
        self.resolve(filename).comment_syntax.matches(line.trim())
    }

    /// Built-in table extended by config-defined languages. Custom entries win
    /// over built-ins for the extensions they claim.
    #[must_use]
    pub fn with_custom_languages(custom: &IndexMap<String, CustomLanguageConfig>) -> Self {
        let mut registry = Self::default();

        for (name, config) in custom {
            let language = Language {
                name: name.clone(),
                extensions: config.extensions.clone(),
                comment_syntax: CommentSyntax {
                    line: config.line_comments.clone(),
                    block: config.block_comments.clone(),
                    continuation: config.continuation.clone(),
                },
            };
            registry.register(language);
        }

        registry
    }
}

impl Default for LanguageRegistry {
    fn default() -> Self {
        let mut registry = Self::new();

        registry.register(Language::new("Rust", vec!["rs"], CommentSyntax::c_style()));
        registry.register(Language::new("Go", vec!["go"], CommentSyntax::c_style()));
        registry.register(Language::new("C", vec!["c", "h"], CommentSyntax::c_style()));
        registry.register(Language::new(
            "C++",
            vec!["cpp", "hpp", "cc", "cxx", "hxx"],
            CommentSyntax::c_style(),
        ));
        registry.register(Language::new("C#", vec!["cs"], CommentSyntax::c_style()));
        registry.register(Language::new("Java", vec!["java"], CommentSyntax::c_style()));
        registry.register(Language::new(
            "Kotlin",
            vec!["kt", "kts"],
            CommentSyntax::c_style(),
        ));
        registry.register(Language::new("Swift", vec!["swift"], CommentSyntax::c_style()));
        registry.register(Language::new(
            "JavaScript",
            vec!["js", "mjs", "cjs", "jsx"],
            CommentSyntax::c_style(),
        ));
        registry.register(Language::new(
            "TypeScript",
            vec!["ts", "mts", "cts", "tsx"],
            CommentSyntax::c_style(),
        ));
        registry.register(Language::new(
            "CSS",
            vec!["css", "scss", "less"],
            CommentSyntax::c_style(),
        ));

        registry.register(Language::new(
            "Python",
            vec!["py", "pyi", "pyw"],
            CommentSyntax::new(vec!["#"], vec![("\"\"\"", "\"\"\""), ("'''", "'''")]),
        ));

        registry.register(Language::new(
            "HTML",
            vec!["html", "htm", "xhtml", "vue", "svelte"],
            CommentSyntax::new(vec![], vec![("<!--", "-->")]),
        ));
        registry.register(Language::new(
            "XML",
            vec!["xml", "xsl", "xsd", "svg", "plist"],
            CommentSyntax::new(vec![], vec![("<!--", "-->")]),
        ));
        registry.register(Language::new(
            "Markdown",
            vec!["md", "markdown"],
            CommentSyntax::new(vec![], vec![("<!--", "-->")]),
        ));

        registry.register(Language::new(
            "SQL",
            vec!["sql"],
            CommentSyntax::new(vec!["--"], vec![("/*", "*/")]),
        ));

        registry.register(Language::new(
            "Shell",
            vec!["sh", "bash", "zsh", "fish"],
            CommentSyntax::hash_style(),
        ));
        registry.register(Language::new(
            "Ruby",
            vec!["rb", "rake", "gemspec"],
            CommentSyntax::new(vec!["#"], vec![("=begin", "=end")]),
        ));
        registry.register(Language::new(
            "PHP",
            vec!["php"],
            CommentSyntax::new(vec!["#", "//"], vec![("/*", "*/")]).with_continuation("*"),
        ));
        registry.register(Language::new(
            "Config",
            vec!["yml", "yaml", "toml", "ini", "cfg", "conf"],
            CommentSyntax::hash_style(),
        ));

        registry
    }
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;
