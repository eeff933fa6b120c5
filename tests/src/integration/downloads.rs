//! # Download Flows
//!
//! Descargas listing and the spreadsheet transfer behind each action.

#[cfg(test)]
mod tests {
    use std::fs;

    use axum::http::{header, StatusCode};
    use dashboard_catalog::{
        ArtifactError, MenuOption, NoticeLevel, PresentationApi, EMPTY_DOWNLOADS_MESSAGE,
        SPREADSHEET_MIME,
    };
    use dashboard_gateway::esc;

    use crate::integration::support::{fetch, ArtifactTree};

    #[test]
    fn test_empty_directory_offers_nothing() {
        let tree = ArtifactTree::empty();
        let view = tree.catalog().present(MenuOption::Descargas);

        assert_eq!(view.downloads().count(), 0);
        assert_eq!(
            view.notices().collect::<Vec<_>>(),
            vec![(NoticeLevel::Info, EMPTY_DOWNLOADS_MESSAGE)]
        );
    }

    #[test]
    fn test_missing_directory_is_empty() {
        let tree = ArtifactTree::empty();
        fs::remove_dir(tree.root().join("excel")).unwrap();

        let view = tree.catalog().present(MenuOption::Descargas);
        assert_eq!(view.downloads().count(), 0);
        assert_eq!(
            view.notices().collect::<Vec<_>>(),
            vec![(NoticeLevel::Info, EMPTY_DOWNLOADS_MESSAGE)]
        );
    }

    #[test]
    fn test_actions_sorted_by_name() {
        let tree = ArtifactTree::empty();
        tree.write_spreadsheet("b.xlsx", b"b");
        tree.write_spreadsheet("a.xlsx", b"a");
        tree.write_spreadsheet("notas.txt", b"no");

        let view = tree.catalog().present(MenuOption::Descargas);
        let names: Vec<_> = view.downloads().map(|a| a.filename.as_str()).collect();
        assert_eq!(names, vec!["a.xlsx", "b.xlsx"]);

        let labels: Vec<_> = view.downloads().map(|a| a.label.as_str()).collect();
        assert_eq!(labels, vec!["Descargar a.xlsx", "Descargar b.xlsx"]);
        assert_eq!(view.notices().count(), 0);
    }

    #[test]
    fn test_download_bytes_identical() {
        let tree = ArtifactTree::empty();
        let bytes: Vec<u8> = (0..=255u8).rev().cycle().take(10_000).collect();
        tree.write_spreadsheet("resultados_pca.xlsx", &bytes);

        let transfer = tree.catalog().download("resultados_pca.xlsx").unwrap();
        assert_eq!(transfer.filename, "resultados_pca.xlsx");
        assert_eq!(transfer.mime, SPREADSHEET_MIME);
        assert_eq!(transfer.content, bytes);
    }

    #[test]
    fn test_download_outside_listing_rejected() {
        let tree = ArtifactTree::empty();
        tree.write_spreadsheet("notas.txt", b"no");

        assert_eq!(
            tree.catalog().download("notas.txt"),
            Err(ArtifactError::NotInCatalog("notas.txt".to_string()))
        );
    }

    #[tokio::test]
    async fn test_page_links_match_listing() {
        let tree = ArtifactTree::empty();
        tree.write_spreadsheet("b.xlsx", b"b");
        tree.write_spreadsheet("a.xlsx", b"a");

        let html = fetch(&tree.router(), "/views/descargas").await.text();
        let a = html.find("href=\"/downloads/a.xlsx\"").unwrap();
        let b = html.find("href=\"/downloads/b.xlsx\"").unwrap();
        assert!(a < b);
        assert!(html.contains(">Descargar a.xlsx</a>"));
    }

    #[tokio::test]
    async fn test_empty_page_shows_info_notice() {
        let tree = ArtifactTree::empty();
        let html = fetch(&tree.router(), "/views/descargas").await.text();

        assert!(html.contains("notice notice-info"));
        assert!(html.contains(&esc(EMPTY_DOWNLOADS_MESSAGE)));
        assert!(!html.contains("class=\"download\""));
    }

    #[tokio::test]
    async fn test_http_transfer_is_byte_identical() {
        let tree = ArtifactTree::empty();
        let bytes: Vec<u8> = (0..=255u8).cycle().take(70_000).collect();
        tree.write_spreadsheet("resultados finales.xlsx", &bytes);
        let router = tree.router();

        let html = fetch(&router, "/views/descargas").await.text();
        assert!(html.contains("href=\"/downloads/resultados%20finales.xlsx\""));

        let response = fetch(&router, "/downloads/resultados%20finales.xlsx").await;
        assert_eq!(response.status, StatusCode::OK);
        assert_eq!(response.headers[header::CONTENT_TYPE], SPREADSHEET_MIME);
        assert!(response.headers[header::CONTENT_DISPOSITION]
            .to_str()
            .unwrap()
            .starts_with("attachment; filename=\"resultados finales.xlsx\""));
        assert_eq!(response.body, bytes);
    }

    #[tokio::test]
    async fn test_removed_spreadsheet_is_404() {
        let tree = ArtifactTree::empty();
        tree.write_spreadsheet("a.xlsx", b"a");
        let router = tree.router();
        assert_eq!(fetch(&router, "/downloads/a.xlsx").await.status, StatusCode::OK);

        fs::remove_file(tree.root().join("excel/a.xlsx")).unwrap();
        assert_eq!(
            fetch(&router, "/downloads/a.xlsx").await.status,
            StatusCode::NOT_FOUND
        );
    }
}
