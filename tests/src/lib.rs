//! Shared fixtures for the integration tests

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::json;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path},
};

/// A snapshots page with two sections, newest first
pub const SNAPSHOTS_PAGE: &str = "<html>\n<head>\n<link rel=\"stylesheet\" href=\"GitForWindows.css\">\n</head>\n<body>\n\
<h1>Git for Windows snapshots</h1>\n\
<h2 id=\"2023-04-05T00:00:00.000Z\">Wed Apr 05 2023</h2>\n<ul>\n<li>Git for Windows installer: <a href=\"Git-prerelease-2.40.0.2-64-bit.exe\">x64 (64-bit)</a>.</li>\n</ul>\n\n\
<h2 id=\"2023-03-01T00:00:00.000Z\">Wed Mar 01 2023</h2>\n<ul>\n<li>Portable Git: <a href=\"PortableGit-prerelease-2.39.2.1-64-bit.7z.exe\">x64 (64-bit)</a>.</li>\n</ul>\n\
</body>\n</html>\n";

pub const RELEASE_TAG: &str = "v2.40.0.windows.1";

const REPO: &str = "/repos/git-for-windows/git";

/// Writes `content` as `index.html` below `dir`
pub fn write_page(dir: &Path, content: &str) -> std::io::Result<PathBuf> {
    let page = dir.join("index.html");
    fs::write(&page, content)?;
    Ok(page)
}

/// Header ids in document order
pub fn section_ids(content: &str) -> Vec<String> {
    content
        .lines()
        .filter_map(|line| line.strip_prefix("<h2 id=\""))
        .filter_map(|rest| rest.split('"').next())
        .map(str::to_string)
        .collect()
}

async fn mount_json(server: &MockServer, route: &str, body: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path(format!("{REPO}/{route}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

/// Serves an annotated `RELEASE_TAG` committed on 2023-03-14 with
/// installer, portable and MinGit assets plus two unlisted ones
pub async fn mount_release(server: &MockServer) {
    mount_json(
        server,
        &format!("git/ref/tags/{RELEASE_TAG}"),
        json!({ "object": { "sha": "tagsha", "type": "tag" } }),
    )
    .await;
    mount_json(
        server,
        "git/tags/tagsha",
        json!({ "object": { "sha": "2ed3a4ff", "type": "commit" } }),
    )
    .await;
    mount_json(
        server,
        "git/commits/2ed3a4ff",
        json!({ "committer": { "date": "2023-03-14T12:02:41Z" } }),
    )
    .await;

    let download = format!("https://github.com/git-for-windows/git/releases/download/{RELEASE_TAG}");
    let assets: Vec<_> = [
        "Git-2.40.0-64-bit.exe",
        "Git-2.40.0-32-bit.exe",
        "Git-2.40.0-arm64.exe",
        "PortableGit-2.40.0-64-bit.7z.exe",
        "MinGit-2.40.0-64-bit.zip",
        "MinGit-2.40.0-busybox-64-bit.zip",
        "git-2.40.0.tar.bz2",
        "pdbs-for-git-64-bit-2.40.0.1.zip",
    ]
    .iter()
    .map(|name| json!({ "name": name, "browser_download_url": format!("{download}/{name}") }))
    .collect();

    mount_json(
        server,
        &format!("releases/tags/{RELEASE_TAG}"),
        json!({ "tag_name": RELEASE_TAG, "assets": assets }),
    )
    .await;
}
