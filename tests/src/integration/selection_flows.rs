//! # Selection Flows
//!
//! Menu option → selection plan → view model → HTML page, against a real
//! artifact tree on disk.

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use dashboard_catalog::{
        ArtifactKind, MenuOption, NoticeLevel, PresentationApi, ViewBlock,
        STATIC_VERSION_CAPTION,
    };

    use crate::integration::support::{fetch, ArtifactTree};

    // =========================================================================
    // VIEW MODEL
    // =========================================================================

    #[test]
    fn test_complete_tree_has_no_problems() {
        let tree = ArtifactTree::complete();
        let catalog = tree.catalog();

        for option in MenuOption::ALL {
            let view = catalog.present(option);
            assert_eq!(view.problem_count(), 0, "{}", option);
            assert_eq!(view.blocks[0], ViewBlock::Heading(option.heading().to_string()));
        }
    }

    #[test]
    fn test_complete_tree_renders_every_artifact_in_order() {
        let tree = ArtifactTree::complete();
        let catalog = tree.catalog();

        for option in MenuOption::ALL {
            let view = catalog.present(option);
            let rendered: Vec<&str> = view
                .blocks
                .iter()
                .filter_map(|block| match block {
                    ViewBlock::InteractiveDocument { filename, .. }
                    | ViewBlock::StaticImage { filename, .. } => Some(filename.as_str()),
                    _ => None,
                })
                .collect();
            let expected: Vec<String> = option
                .fixed_artifacts()
                .into_iter()
                .map(|a| a.filename)
                .collect();
            assert_eq!(rendered, expected, "{}", option);
        }
    }

    #[test]
    fn test_deleting_any_artifact_yields_exactly_one_notice() {
        for option in MenuOption::ALL {
            for missing in option.fixed_artifacts() {
                let tree = ArtifactTree::complete();
                tree.remove(missing.kind, &missing.filename);
                let path = tree.path_of(missing.kind, &missing.filename);

                let view = tree.catalog().present(option);
                let notices: Vec<_> = view.notices().collect();
                assert_eq!(notices.len(), 1, "{} / {}", option, missing.filename);

                let (level, message) = notices[0];
                let expected_level = match missing.kind {
                    ArtifactKind::InteractiveDocument => NoticeLevel::Error,
                    _ => NoticeLevel::Warning,
                };
                assert_eq!(level, expected_level);
                assert!(
                    message.contains(&path.display().to_string()),
                    "{} does not name {}",
                    message,
                    path.display()
                );

                // The other items of the same option still render
                for other in option.fixed_artifacts() {
                    if other.filename == missing.filename {
                        continue;
                    }
                    assert!(view.blocks.iter().any(|block| matches!(
                        block,
                        ViewBlock::InteractiveDocument { filename, .. }
                        | ViewBlock::StaticImage { filename, .. }
                        if *filename == other.filename
                    )));
                }
            }
        }
    }

    #[test]
    fn test_interactive_and_fallback_are_separated() {
        let tree = ArtifactTree::complete();
        let view = tree.catalog().present(MenuOption::NetworkSesgos);

        assert_eq!(view.blocks.len(), 4);
        assert!(matches!(
            view.blocks[1],
            ViewBlock::InteractiveDocument { .. }
        ));
        assert_eq!(view.blocks[2], ViewBlock::Divider);
        assert_eq!(
            view.blocks[3],
            ViewBlock::StaticImage {
                filename: "01_network_sesgos.png".to_string(),
                caption: Some(STATIC_VERSION_CAPTION.to_string()),
            }
        );
    }

    #[test]
    fn test_empty_tree_is_all_notices_and_no_panic() {
        let tree = ArtifactTree::empty();
        let catalog = tree.catalog();

        for option in MenuOption::ALL {
            let view = catalog.present(option);
            let expected = option.fixed_artifacts().len().max(1);
            assert_eq!(view.notices().count(), expected, "{}", option);
        }
    }

    // =========================================================================
    // HTML PAGES
    // =========================================================================

    #[tokio::test]
    async fn test_every_view_page_is_served_cleanly() {
        let tree = ArtifactTree::complete();
        let router = tree.router();

        for option in MenuOption::ALL {
            let page = fetch(&router, &format!("/views/{}", option.slug())).await;
            assert_eq!(page.status, StatusCode::OK, "{}", option);

            let html = page.text();
            assert!(!html.contains("notice notice-error"), "{}", option);
            assert!(!html.contains("notice notice-warning"), "{}", option);
            assert_eq!(html.matches("class=\"selected\"").count(), 1);
            for listed in MenuOption::ALL {
                assert!(html.contains(&format!("href=\"/views/{}\"", listed.slug())));
            }
        }
    }

    #[tokio::test]
    async fn test_missing_document_page_shows_error_and_fallback() {
        let tree = ArtifactTree::complete();
        tree.remove(ArtifactKind::InteractiveDocument, "11_scatter_matrix.html");

        let page = fetch(&tree.router(), "/views/11-scatter-matrix").await;
        assert_eq!(page.status, StatusCode::OK);

        let html = page.text();
        assert!(html.contains("notice notice-error"));
        assert!(html.contains("<hr>"));
        assert!(html.contains("src=\"/artifacts/png/11_scatter_matrix.png\""));
    }

    #[tokio::test]
    async fn test_rendered_images_are_fetchable() {
        let tree = ArtifactTree::complete();
        let router = tree.router();

        for option in MenuOption::ALL {
            for image in option
                .fixed_artifacts()
                .into_iter()
                .filter(|a| a.kind == ArtifactKind::StaticImage)
            {
                let response = fetch(&router, &format!("/artifacts/png/{}", image.filename)).await;
                assert_eq!(response.status, StatusCode::OK, "{}", image.filename);
                assert_eq!(response.body, b"\x89PNG\r\n\x1a\n");
            }
        }
    }

    #[tokio::test]
    async fn test_same_selection_twice_is_identical() {
        let tree = ArtifactTree::complete();
        let catalog = tree.catalog();
        let router = tree.router();

        for option in MenuOption::ALL {
            assert_eq!(catalog.present(option), catalog.present(option));

            let uri = format!("/views/{}", option.slug());
            let first = fetch(&router, &uri).await.body;
            let second = fetch(&router, &uri).await.body;
            assert_eq!(first, second, "{}", option);
        }
    }

    #[tokio::test]
    async fn test_index_is_first_option() {
        let tree = ArtifactTree::complete();
        let router = tree.router();

        let index = fetch(&router, "/").await;
        let first = fetch(&router, &format!("/views/{}", MenuOption::ALL[0].slug())).await;
        assert_eq!(index.status, StatusCode::OK);
        assert_eq!(index.body, first.body);
    }
}
