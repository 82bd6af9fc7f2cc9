//! Named transformation stages over a [`RouteDraft`].
//!
//! Every stage is a pure function: it takes the draft by value and returns a
//! new one. The order in [`STAGES`] is significant, query directories are
//! removed before braces are rewritten.

use crate::types::route::{HttpMethod, QueryParam};
use regex::Regex;
use std::sync::LazyLock;

/// `/[name]/value` pairs anywhere in the working URL.
static QUERY_DIRECTORY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/\[([^/]+)\]/([^/]+)").expect("valid regex"));

const JSON_SUFFIX: &str = ".json";
const DEFAULT_SUFFIX: &str = ".default";
const DEFAULT_STEM: &str = "default";
const METHOD_SEPARATOR: char = '.';

/// Intermediate state of a route while it moves through the stages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteDraft {
    /// Directory part of the fixture path, without leading or trailing `/`
    pub directory: String,
    /// File name contribution to the URL; the raw file name until
    /// [`extract_method`] has run
    pub name: String,
    pub method: HttpMethod,
    /// Working URL; empty until [`assemble_url`] has run
    pub url: String,
    pub query: Vec<QueryParam>,
}

impl RouteDraft {
    /// Start a draft from a path relative to the fixture root.
    ///
    /// Backslashes are treated as separators and a leading `/` or `./` is
    /// ignored.
    pub fn new(relative_path: &str) -> Self {
        let normalized = relative_path.replace('\\', "/");
        let trimmed = normalized.trim_start_matches("./").trim_start_matches('/');
        let (directory, file) = trimmed.rsplit_once('/').unwrap_or(("", trimmed));

        Self {
            directory: directory.trim_matches('/').to_owned(),
            name: file.to_owned(),
            method: HttpMethod::default(),
            url: String::new(),
            query: Vec::new(),
        }
    }
}

/// Settings shared by all stages of one builder.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StageContext {
    /// Normalized URL prefix: empty, or `/segment[/segment...]` with no
    /// trailing slash
    pub mount_root: String,
}

impl StageContext {
    pub fn new(mount_root: &str) -> Self {
        Self {
            mount_root: normalize_mount_root(mount_root),
        }
    }
}

fn normalize_mount_root(mount_root: &str) -> String {
    let trimmed = mount_root.trim().trim_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("/{trimmed}")
    }
}

pub type StageFn = fn(RouteDraft, &StageContext) -> RouteDraft;

/// A named step of the derivation pipeline
#[derive(Clone, Copy)]
pub struct Stage {
    pub name: &'static str,
    pub apply: StageFn,
}

impl std::fmt::Debug for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Stage").field("name", &self.name).finish()
    }
}

pub const STAGES: [Stage; 4] = [
    Stage {
        name: "extract_method",
        apply: extract_method,
    },
    Stage {
        name: "assemble_url",
        apply: assemble_url,
    },
    Stage {
        name: "extract_query_params",
        apply: extract_query_params,
    },
    Stage {
        name: "substitute_path_params",
        apply: substitute_path_params,
    },
];

/// Strip the `.json` / `.default.json` suffix from the file name and take a
/// leading `get`, `post`, `put` or `delete` token as the method.
///
/// The token must be the whole stem or be followed by `.`; anything else
/// (`posts.json`, `postman.json`) leaves the method at GET and the name
/// untouched. Only the file name is inspected, never the directories.
pub fn extract_method(draft: RouteDraft, _ctx: &StageContext) -> RouteDraft {
    let stem = draft.name.strip_suffix(JSON_SUFFIX).unwrap_or(&draft.name);
    let stem = if stem == DEFAULT_STEM {
        ""
    } else {
        stem.strip_suffix(DEFAULT_SUFFIX).unwrap_or(stem)
    };

    let (head, rest) = stem.split_once(METHOD_SEPARATOR).unwrap_or((stem, ""));
    let (method, name) = match HttpMethod::from_token(head) {
        Some(method) => (method, rest.to_owned()),
        None => (HttpMethod::Get, stem.to_owned()),
    };

    RouteDraft {
        method,
        name,
        ..draft
    }
}

/// Join the mount root, the directories and the remaining file name.
pub fn assemble_url(draft: RouteDraft, ctx: &StageContext) -> RouteDraft {
    let mut url = ctx.mount_root.clone();
    for segment in draft
        .directory
        .split('/')
        .chain(std::iter::once(draft.name.as_str()))
        .filter(|s| !s.is_empty())
    {
        url.push('/');
        url.push_str(segment);
    }
    if url.is_empty() {
        url.push('/');
    }

    RouteDraft { url, ..draft }
}

/// Move every `/[name]/value` pair out of the URL into the query list,
/// left to right.
pub fn extract_query_params(draft: RouteDraft, _ctx: &StageContext) -> RouteDraft {
    let mut query = draft.query;
    query.extend(
        QUERY_DIRECTORY
            .captures_iter(&draft.url)
            .map(|caps| QueryParam::new(&caps[1], &caps[2])),
    );

    let url = QUERY_DIRECTORY.replace_all(&draft.url, "").into_owned();
    let url = if url.is_empty() { "/".to_owned() } else { url };

    RouteDraft { url, query, ..draft }
}

/// Rewrite `{name}` into the `:name` placeholder syntax.
///
/// Braces are replaced independently, so an unbalanced `{` still becomes
/// `:` and a stray `}` is dropped.
pub fn substitute_path_params(draft: RouteDraft, _ctx: &StageContext) -> RouteDraft {
    let url = draft.url.replace('{', ":").replace('}', "");
    RouteDraft { url, ..draft }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn draft_with_url(url: &str) -> RouteDraft {
        RouteDraft {
            url: url.to_string(),
            ..RouteDraft::new("")
        }
    }

    #[rstest]
    #[case("users/get.json", "users", "get.json")]
    #[case("/users/get.json", "users", "get.json")]
    #[case("./users/get.json", "users", "get.json")]
    #[case("health.json", "", "health.json")]
    #[case("a\\b\\post.json", "a/b", "post.json")]
    fn test_route_draft_new(#[case] path: &str, #[case] directory: &str, #[case] name: &str) {
        let draft = RouteDraft::new(path);
        assert_eq!(draft.directory, directory);
        assert_eq!(draft.name, name);
        assert_eq!(draft.method, HttpMethod::Get);
        assert!(draft.url.is_empty());
        assert!(draft.query.is_empty());
    }

    #[rstest]
    #[case("/", "")]
    #[case("", "")]
    #[case("/api", "/api")]
    #[case("/api/", "/api")]
    #[case("api/v1", "/api/v1")]
    fn test_stage_context_normalizes_mount_root(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(StageContext::new(input).mount_root, expected);
    }

    #[rstest]
    #[case("get.json", HttpMethod::Get, "")]
    #[case("post.json", HttpMethod::Post, "")]
    #[case("put.json", HttpMethod::Put, "")]
    #[case("delete.json", HttpMethod::Delete, "")]
    #[case("health.json", HttpMethod::Get, "health")]
    #[case("users.default.json", HttpMethod::Get, "users")]
    #[case("default.json", HttpMethod::Get, "")]
    #[case("post.default.json", HttpMethod::Post, "")]
    #[case("post.comments.json", HttpMethod::Post, "comments")]
    #[case("posts.json", HttpMethod::Get, "posts")]
    #[case("postman.json", HttpMethod::Get, "postman")]
    #[case("POST.json", HttpMethod::Get, "POST")]
    #[case("deleted.json", HttpMethod::Get, "deleted")]
    fn test_extract_method(
        #[case] file: &str,
        #[case] method: HttpMethod,
        #[case] name: &str,
    ) {
        let draft = extract_method(RouteDraft::new(file), &StageContext::default());
        assert_eq!(draft.method, method);
        assert_eq!(draft.name, name);
    }

    #[rstest]
    fn test_extract_method_ignores_directories() {
        let draft = extract_method(
            RouteDraft::new("posts/put/get.json"),
            &StageContext::default(),
        );
        assert_eq!(draft.method, HttpMethod::Get);
        assert_eq!(draft.directory, "posts/put");
        assert_eq!(draft.name, "");
    }

    #[rstest]
    #[case("", "", "", "/")]
    #[case("", "", "health", "/health")]
    #[case("", "users/{id}", "", "/users/{id}")]
    #[case("", "users", "profile", "/users/profile")]
    #[case("/api", "", "", "/api")]
    #[case("/api", "users", "", "/api/users")]
    #[case("/api/", "users", "all", "/api/users/all")]
    fn test_assemble_url(
        #[case] mount_root: &str,
        #[case] directory: &str,
        #[case] name: &str,
        #[case] expected: &str,
    ) {
        let draft = RouteDraft {
            directory: directory.to_string(),
            name: name.to_string(),
            ..RouteDraft::new("")
        };
        let draft = assemble_url(draft, &StageContext::new(mount_root));
        assert_eq!(draft.url, expected);
    }

    #[rstest]
    #[case("/items", "/items", &[])]
    #[case("/items/[status]/active", "/items", &[("status", "active")])]
    #[case(
        "/users/[role]/admin/[region]/us",
        "/users",
        &[("role", "admin"), ("region", "us")]
    )]
    #[case("/a/[x]/1/b/[y]/2/c", "/a/b/c", &[("x", "1"), ("y", "2")])]
    #[case("/[page]/2", "/", &[("page", "2")])]
    #[case("/items/[status]", "/items/[status]", &[])]
    #[case("/items/[a]/[b]/2", "/items/2", &[("a", "[b]")])]
    fn test_extract_query_params(
        #[case] url: &str,
        #[case] expected_url: &str,
        #[case] expected_query: &[(&str, &str)],
    ) {
        let draft = extract_query_params(draft_with_url(url), &StageContext::default());
        assert_eq!(draft.url, expected_url);
        let expected: Vec<QueryParam> = expected_query
            .iter()
            .map(|(n, v)| QueryParam::new(*n, *v))
            .collect();
        assert_eq!(draft.query, expected);
    }

    #[rstest]
    #[case("/routes/{userId}", "/routes/:userId")]
    #[case("/a/{b}/c/{d}", "/a/:b/c/:d")]
    #[case("/plain", "/plain")]
    #[case("/open/{id", "/open/:id")]
    #[case("/close/id}", "/close/id")]
    fn test_substitute_path_params(#[case] url: &str, #[case] expected: &str) {
        let draft = substitute_path_params(draft_with_url(url), &StageContext::default());
        assert_eq!(draft.url, expected);
    }

    #[rstest]
    fn test_query_extraction_runs_before_brace_substitution() {
        let names: Vec<&str> = STAGES.iter().map(|s| s.name).collect();
        assert_eq!(
            names,
            [
                "extract_method",
                "assemble_url",
                "extract_query_params",
                "substitute_path_params"
            ]
        );
    }
}
