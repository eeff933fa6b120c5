//! Shared fixtures: a temporary artifact tree and router helpers.

use std::fs;
use std::path::{Path, PathBuf};

use axum::body::{to_bytes, Body};
use axum::http::{HeaderMap, Request, StatusCode};
use axum::Router;
use tempfile::TempDir;
use tower::ServiceExt;

use dashboard_catalog::{
    ArtifactDirectory, ArtifactKind, ArtifactRef, DashboardService, FsArtifactSource, MenuOption,
};
use dashboard_gateway::{DashboardGatewayService, GatewayConfig};

/// A temporary application root with `html/`, `png/` and `excel/`.
pub struct ArtifactTree {
    dir: TempDir,
}

impl ArtifactTree {
    /// Empty artifact directories.
    pub fn empty() -> Self {
        let dir = TempDir::new().unwrap();
        for sub in ["html", "png", "excel"] {
            fs::create_dir(dir.path().join(sub)).unwrap();
        }
        Self { dir }
    }

    /// Every artifact referenced by the menu table is present.
    pub fn complete() -> Self {
        let tree = Self::empty();
        for option in MenuOption::ALL {
            for artifact in option.fixed_artifacts() {
                tree.write_artifact(&artifact);
            }
        }
        tree
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    /// Where `filename` of `kind` lives in this tree.
    pub fn path_of(&self, kind: ArtifactKind, filename: &str) -> PathBuf {
        let sub = match kind {
            ArtifactKind::InteractiveDocument => "html",
            ArtifactKind::StaticImage => "png",
            ArtifactKind::Spreadsheet => "excel",
        };
        self.root().join(sub).join(filename)
    }

    pub fn write_artifact(&self, artifact: &ArtifactRef) {
        let content = match artifact.kind {
            ArtifactKind::InteractiveDocument => format!(
                "<div class=\"plotly\" data-file=\"{}\"></div><script>render()</script>",
                artifact.filename
            )
            .into_bytes(),
            ArtifactKind::StaticImage => b"\x89PNG\r\n\x1a\n".to_vec(),
            ArtifactKind::Spreadsheet => b"PK\x03\x04".to_vec(),
        };
        fs::write(self.path_of(artifact.kind, &artifact.filename), content).unwrap();
    }

    pub fn write_spreadsheet(&self, filename: &str, content: &[u8]) {
        fs::write(self.path_of(ArtifactKind::Spreadsheet, filename), content).unwrap();
    }

    pub fn remove(&self, kind: ArtifactKind, filename: &str) {
        fs::remove_file(self.path_of(kind, filename)).unwrap();
    }

    pub fn catalog(&self) -> DashboardService<FsArtifactSource> {
        DashboardService::new(FsArtifactSource::new(ArtifactDirectory::under(self.root())))
    }

    pub fn gateway(&self) -> DashboardGatewayService {
        let mut config = GatewayConfig::default();
        config.artifacts.root = self.root().to_path_buf();
        DashboardGatewayService::new(config).unwrap()
    }

    pub fn router(&self) -> Router {
        self.gateway().build_router()
    }
}

/// Response pieces of one GET.
pub struct Fetched {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

impl Fetched {
    pub fn text(&self) -> String {
        String::from_utf8(self.body.clone()).unwrap()
    }
}

pub async fn fetch(router: &Router, uri: &str) -> Fetched {
    let response = router
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let body = to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap()
        .to_vec();
    Fetched {
        status,
        headers,
        body,
    }
}
