// GitHub API request descriptor.
// Maps each endpoint variant to the concrete parameters of an outgoing request.

use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};
use reqwest::Method;

use super::transport::Request;

const GITHUB_API_BASE: &str = "https://api.github.com";
const GITHUB_API_VERSION: &str = "2022-11-28";
const USER_AGENT: &str = "ghlist";

/// Characters escaped in a URL path segment. Unreserved characters
/// (ALPHA / DIGIT / "-" / "." / "_" / "~") are left untouched.
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}')
    .add(b'/')
    .add(b'\\')
    .add(b'%')
    .add(b'^')
    .add(b'|')
    .add(b'[')
    .add(b']')
    .add(b'!')
    .add(b'$')
    .add(b'&')
    .add(b'\'')
    .add(b'(')
    .add(b')')
    .add(b'*')
    .add(b'+')
    .add(b',')
    .add(b':')
    .add(b';')
    .add(b'=')
    .add(b'@');

/// One of the two remote operations the client can perform. Immutable once
/// constructed; fully determines the outgoing request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Endpoint {
    /// List users starting after a numeric cursor.
    ListUsers { since: u64, per_page: u32 },
    /// Fetch one user's profile.
    UserDetail { username: String },
}

impl Endpoint {
    /// API host shared by every variant.
    pub fn base_url(&self) -> &'static str {
        GITHUB_API_BASE
    }

    /// HTTP method. Every variant is a read.
    pub fn method(&self) -> Method {
        Method::GET
    }

    /// Request path relative to the base URL. Usernames are escaped as a
    /// single path segment.
    pub fn path(&self) -> String {
        match self {
            Endpoint::ListUsers { .. } => "/users".to_string(),
            Endpoint::UserDetail { username } => {
                format!("/users/{}", utf8_percent_encode(username, PATH_SEGMENT))
            }
        }
    }

    /// Query parameters for this variant.
    pub fn query(&self) -> Vec<(&'static str, String)> {
        match self {
            Endpoint::ListUsers { since, per_page } => vec![
                ("since", since.to_string()),
                ("per_page", per_page.to_string()),
            ],
            Endpoint::UserDetail { .. } => Vec::new(),
        }
    }

    /// Fixed header set, carrying the injected token.
    pub fn headers(&self, token: &str) -> Vec<(&'static str, String)> {
        vec![
            ("Authorization", format!("token {}", token)),
            ("Accept", "application/vnd.github+json".to_string()),
            ("X-GitHub-Api-Version", GITHUB_API_VERSION.to_string()),
            ("User-Agent", USER_AGENT.to_string()),
        ]
    }

    /// Assemble the concrete request handed to the transport.
    pub fn to_request(&self, token: &str) -> Request {
        Request {
            method: self.method(),
            url: format!("{}{}", self.base_url(), self.path()),
            query: self.query(),
            headers: self.headers(token),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_users_path_and_query() {
        let endpoint = Endpoint::ListUsers {
            since: 7,
            per_page: 50,
        };
        assert_eq!(endpoint.path(), "/users");
        assert_eq!(endpoint.method(), Method::GET);
        assert_eq!(
            endpoint.query(),
            vec![("since", "7".to_string()), ("per_page", "50".to_string())]
        );
    }

    #[test]
    fn test_user_detail_path_and_query() {
        let endpoint = Endpoint::UserDetail {
            username: "octocat".to_string(),
        };
        assert_eq!(endpoint.path(), "/users/octocat");
        assert!(endpoint.query().is_empty());
    }

    #[test]
    fn test_username_reserved_characters_are_escaped() {
        let endpoint = Endpoint::UserDetail {
            username: "octo cat/2?x".to_string(),
        };
        assert_eq!(endpoint.path(), "/users/octo%20cat%2F2%3Fx");
    }

    #[test]
    fn test_username_unreserved_characters_pass_through() {
        let endpoint = Endpoint::UserDetail {
            username: "octo-cat_1.2~a".to_string(),
        };
        assert_eq!(endpoint.path(), "/users/octo-cat_1.2~a");
    }

    #[test]
    fn test_headers_carry_injected_token() {
        let endpoint = Endpoint::ListUsers {
            since: 0,
            per_page: 50,
        };
        let headers = endpoint.headers("s3cret");
        assert!(
            headers
                .iter()
                .any(|(name, value)| *name == "Authorization" && value == "token s3cret")
        );
        assert!(headers.iter().any(|(name, _)| *name == "User-Agent"));
    }

    #[test]
    fn test_to_request_builds_absolute_url() {
        let endpoint = Endpoint::UserDetail {
            username: "octocat".to_string(),
        };
        let request = endpoint.to_request("t");
        assert_eq!(request.url, "https://api.github.com/users/octocat");
        assert_eq!(request.method, Method::GET);
    }
}
