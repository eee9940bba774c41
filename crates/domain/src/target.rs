//! Target registry: the language/library pairs snippets can be rendered for.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A supported language/library pair, identified by a `language/client` id
/// string such as `java/okhttp`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Target {
    /// curl command line
    #[default]
    ShellCurl,
    /// Python with the requests library
    PythonRequests,
    /// JavaScript with the fetch API
    JavascriptFetch,
    /// JavaScript with axios
    JavascriptAxios,
    /// Go with net/http
    GoNative,
    /// Java with OkHttp
    JavaOkhttp,
    /// Java with Unirest
    JavaUnirest,
    /// Kotlin with OkHttp
    KotlinOkhttp,
    /// C# with HttpClient
    CsharpHttpclient,
    /// Ruby with Net::HTTP
    RubyNethttp,
    /// PHP with ext-curl
    PhpCurl,
    /// Swift with URLSession
    SwiftUrlsession,
}

impl Target {
    /// Resolves a `language/client` id string to a target, if known.
    #[must_use]
    pub fn from_id(id: &str) -> Option<Self> {
        Self::all().iter().copied().find(|t| t.id() == id)
    }

    /// The canonical `language/client` id string.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::ShellCurl => "shell/curl",
            Self::PythonRequests => "python/requests",
            Self::JavascriptFetch => "javascript/fetch",
            Self::JavascriptAxios => "javascript/axios",
            Self::GoNative => "go/native",
            Self::JavaOkhttp => "java/okhttp",
            Self::JavaUnirest => "java/unirest",
            Self::KotlinOkhttp => "kotlin/okhttp",
            Self::CsharpHttpclient => "csharp/httpclient",
            Self::RubyNethttp => "ruby/nethttp",
            Self::PhpCurl => "php/curl",
            Self::SwiftUrlsession => "swift/urlsession",
        }
    }

    /// Human-readable name for pickers and listings.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::ShellCurl => "Shell (curl)",
            Self::PythonRequests => "Python (requests)",
            Self::JavascriptFetch => "JavaScript (fetch)",
            Self::JavascriptAxios => "JavaScript (axios)",
            Self::GoNative => "Go (net/http)",
            Self::JavaOkhttp => "Java (OkHttp)",
            Self::JavaUnirest => "Java (Unirest)",
            Self::KotlinOkhttp => "Kotlin (OkHttp)",
            Self::CsharpHttpclient => "C# (HttpClient)",
            Self::RubyNethttp => "Ruby (Net::HTTP)",
            Self::PhpCurl => "PHP (cURL)",
            Self::SwiftUrlsession => "Swift (URLSession)",
        }
    }

    /// Conventional file extension for a saved snippet.
    #[must_use]
    pub const fn file_extension(self) -> &'static str {
        match self {
            Self::ShellCurl => "sh",
            Self::PythonRequests => "py",
            Self::JavascriptFetch | Self::JavascriptAxios => "js",
            Self::GoNative => "go",
            Self::JavaOkhttp | Self::JavaUnirest => "java",
            Self::KotlinOkhttp => "kt",
            Self::CsharpHttpclient => "cs",
            Self::RubyNethttp => "rb",
            Self::PhpCurl => "php",
            Self::SwiftUrlsession => "swift",
        }
    }

    /// All supported targets.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::ShellCurl,
            Self::PythonRequests,
            Self::JavascriptFetch,
            Self::JavascriptAxios,
            Self::GoNative,
            Self::JavaOkhttp,
            Self::JavaUnirest,
            Self::KotlinOkhttp,
            Self::CsharpHttpclient,
            Self::RubyNethttp,
            Self::PhpCurl,
            Self::SwiftUrlsession,
        ]
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn resolves_known_ids() {
        assert_eq!(Target::from_id("java/okhttp"), Some(Target::JavaOkhttp));
        assert_eq!(Target::from_id("shell/curl"), Some(Target::ShellCurl));
    }

    #[test]
    fn rejects_unknown_ids() {
        assert_eq!(Target::from_id("cobol/nonexistent"), None);
        assert_eq!(Target::from_id("java"), None);
        assert_eq!(Target::from_id(""), None);
    }

    #[test]
    fn ids_round_trip() {
        for target in Target::all() {
            assert_eq!(Target::from_id(target.id()), Some(*target));
        }
    }

    #[test]
    fn extensions_are_plausible() {
        assert_eq!(Target::JavaUnirest.file_extension(), "java");
        assert_eq!(Target::KotlinOkhttp.file_extension(), "kt");
        assert_eq!(Target::ShellCurl.file_extension(), "sh");
    }
}
