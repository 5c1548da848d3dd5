//! A published multiplatform library (`io.github.tyczj:tweedle`) served
//! from `tests/fixtures`, either in memory or through a mockito server.

use mockito::{Matcher, Mock, ServerGuard};

pub const GROUP: &str = "io.github.tyczj";
pub const SEARCH_PATH: &str = "/solrsearch/select";
pub const REPOSITORY_PATH: &str = "/maven2";

pub const SEARCH_RESULT: &str = include_str!("../fixtures/search-result.json");
pub const TWEEDLE_METADATA: &str = include_str!("../fixtures/tyczj/tweedle/maven-metadata.xml");
pub const TWEEDLE_MODULE: &str =
    include_str!("../fixtures/tyczj/tweedle/0.3.4/tweedle-0.3.4.module");
pub const TWEEDLE_ANDROID_MODULE: &str =
    include_str!("../fixtures/tyczj/tweedle-android/0.3.4/tweedle-android-0.3.4.module");
/// Catalog of the fixture with the default version window.
pub const EXPECTED_OUTPUT: &str = include_str!("../fixtures/expected-output.json");

/// Repository paths of the fixture and what they answer.
const ROUTES: &[(&str, usize, &str)] = &[
    (
        "/maven2/io/github/tyczj/tweedle/maven-metadata.xml",
        200,
        TWEEDLE_METADATA,
    ),
    (
        "/maven2/io/github/tyczj/tweedle/0.3.4/tweedle-0.3.4.module",
        200,
        TWEEDLE_MODULE,
    ),
    // Published before the library adopted Gradle module metadata.
    (
        "/maven2/io/github/tyczj/tweedle/0.3.3/tweedle-0.3.3.module",
        404,
        "",
    ),
    (
        "/maven2/io/github/tyczj/tweedle-android/0.3.4/tweedle-android-0.3.4.module",
        200,
        TWEEDLE_ANDROID_MODULE,
    ),
    (
        "/maven2/io/github/tyczj/tweedle-iosarm64/0.3.4/tweedle-iosarm64-0.3.4.module",
        404,
        "",
    ),
];

pub fn search_query(offset: usize, rows: usize) -> Matcher {
    Matcher::AllOf(vec![
        Matcher::UrlEncoded("q".into(), "l:metadata".into()),
        Matcher::UrlEncoded("start".into(), offset.to_string()),
        Matcher::UrlEncoded("rows".into(), rows.to_string()),
    ])
}

fn fixture_mocks(server: &mut ServerGuard, page_size: usize) -> Vec<Mock> {
    let mut mocks = vec![server
        .mock("GET", SEARCH_PATH)
        .match_query(search_query(0, page_size))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(SEARCH_RESULT)];

    for (path, status, body) in ROUTES {
        mocks.push(server.mock("GET", *path).with_status(*status).with_body(*body));
    }
    mocks
}

/// Registers the fixture on a server started with `Server::new()`.
pub fn serve_tweedle(server: &mut ServerGuard, page_size: usize) -> Vec<Mock> {
    fixture_mocks(server, page_size)
        .into_iter()
        .map(Mock::create)
        .collect()
}

/// Registers the fixture on a server started with `Server::new_async()`.
pub async fn serve_tweedle_async(server: &mut ServerGuard, page_size: usize) -> Vec<Mock> {
    let mut created = Vec::new();
    for mock in fixture_mocks(server, page_size) {
        created.push(mock.create_async().await);
    }
    created
}

/// Config file pointing the CLI at `server_url`, without retry delays.
pub fn fixture_config(server_url: &str) -> String {
    format!(
        "search_url: \"{url}{search}\"\nrepository_url: \"{url}{repository}\"\nmax_retries: 1\nretry_delay_ms: 0\n",
        url = server_url,
        search = SEARCH_PATH,
        repository = REPOSITORY_PATH,
    )
}
