//! Reference vocabulary: the technology and role terms recognized in job descriptions.
//!
//! The built-in table is the only place these terms are listed. Extra terms are
//! layered on top at startup (`EXTRA_KEYWORDS`) without touching the matching code.

/// Built-in reference terms. All lowercase.
pub const REFERENCE_TERMS: &[&str] = &[
    "javascript",
    "react",
    "node.js",
    "python",
    "java",
    "c++",
    "c#",
    "php",
    "ruby",
    "go",
    "html",
    "css",
    "sql",
    "mongodb",
    "postgresql",
    "mysql",
    "aws",
    "azure",
    "docker",
    "kubernetes",
    "git",
    "agile",
    "scrum",
    "api",
    "rest",
    "graphql",
    "typescript",
    "angular",
    "vue",
    "svelte",
    "machine learning",
    "ai",
    "data science",
    "analytics",
    "frontend",
    "backend",
    "full stack",
    "devops",
    "ci/cd",
    "testing",
    "unit test",
    "integration test",
    "ui/ux",
    "responsive design",
    "mobile",
    "ios",
    "android",
    "flutter",
    "react native",
    "web development",
    "software engineering",
    "programming",
    "coding",
    "development",
    "engineering",
    "architecture",
    "design patterns",
    "microservices",
    "serverless",
    "cloud",
    "database",
    "nosql",
    "redis",
    "elasticsearch",
    "kafka",
    "rabbitmq",
    "nginx",
    "apache",
    "linux",
    "unix",
    "windows",
    "macos",
];

/// An ordered set of lowercase reference terms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vocabulary {
    terms: Vec<String>,
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self {
            terms: REFERENCE_TERMS.iter().map(|t| t.to_string()).collect(),
        }
    }
}

impl Vocabulary {
    /// Adds terms after the built-in ones. Terms are trimmed and lowercased;
    /// blanks and duplicates are skipped.
    pub fn with_extra_terms<I, S>(mut self, extra: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for term in extra {
            let term = term.as_ref().trim().to_lowercase();
            if !term.is_empty() && !self.terms.contains(&term) {
                self.terms.push(term);
            }
        }
        self
    }

    pub fn terms(&self) -> impl Iterator<Item = &str> {
        self.terms.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }
}
