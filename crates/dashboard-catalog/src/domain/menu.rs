//! Menu domain model.
//!
//! The sidebar, the URL slugs and the selection router all derive from
//! [`MenuOption::ALL`], so adding or removing a view is a compile-checked
//! change in this file only.

use serde::{Deserialize, Serialize};

use super::artifact::{ArtifactRef, DisplayHeight};

/// Caption attached to the first static fallback image.
pub const STATIC_VERSION_CAPTION: &str = "Versión estática (PNG)";

/// One of the 15 views offered in the sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MenuOption {
    /// 1) Bias network
    NetworkSesgos,
    /// 2) Sankey flows
    SankeyFlujos,
    /// 3) Comparative radar
    RadarComparativo,
    /// 4) Hexbin density, PCA vs PSE
    HexbinPcaPse,
    /// 5) Violin + swarm
    ViolinSwarm,
    /// 6) Parallel coordinates
    CoordenadasParalelas,
    /// 7) Hierarchical treemap
    TreemapJerarquico,
    /// 8) Ridgeline
    Ridgeline,
    /// 9) Correlation matrix
    MatrizCorrelacion,
    /// 10) PCA biplot
    PcaBiplot,
    /// 11) Scatter matrix
    ScatterMatrix,
    /// 12) Quadrant × bias heatmap
    HeatmapCuadrantes,
    /// 13) Comparative boxplots
    BoxplotsComparativos,
    /// 14) Statistical dashboard
    DashboardEstadistico,
    /// Spreadsheet downloads
    Descargas,
}

impl MenuOption {
    /// All options in sidebar order.
    pub const ALL: [MenuOption; 15] = [
        MenuOption::NetworkSesgos,
        MenuOption::SankeyFlujos,
        MenuOption::RadarComparativo,
        MenuOption::HexbinPcaPse,
        MenuOption::ViolinSwarm,
        MenuOption::CoordenadasParalelas,
        MenuOption::TreemapJerarquico,
        MenuOption::Ridgeline,
        MenuOption::MatrizCorrelacion,
        MenuOption::PcaBiplot,
        MenuOption::ScatterMatrix,
        MenuOption::HeatmapCuadrantes,
        MenuOption::BoxplotsComparativos,
        MenuOption::DashboardEstadistico,
        MenuOption::Descargas,
    ];

    /// Option selected when the page is opened without a choice.
    pub const DEFAULT: MenuOption = MenuOption::NetworkSesgos;

    /// Sidebar label.
    pub fn label(&self) -> &'static str {
        match self {
            MenuOption::NetworkSesgos => "1) Network de Sesgos",
            MenuOption::SankeyFlujos => "2) Sankey de Flujos",
            MenuOption::RadarComparativo => "3) Radar Comparativo",
            MenuOption::HexbinPcaPse => "4) Hexbin PCA vs PSE",
            MenuOption::ViolinSwarm => "5) Violin + Swarm",
            MenuOption::CoordenadasParalelas => "6) Coordenadas Paralelas",
            MenuOption::TreemapJerarquico => "7) Treemap Jerárquico",
            MenuOption::Ridgeline => "8) Ridgeline",
            MenuOption::MatrizCorrelacion => "9) Matriz de Correlación",
            MenuOption::PcaBiplot => "10) PCA Biplot",
            MenuOption::ScatterMatrix => "11) Scatter Matrix",
            MenuOption::HeatmapCuadrantes => "12) Heatmap Cuadrantes × Sesgos",
            MenuOption::BoxplotsComparativos => "13) Boxplots Comparativos",
            MenuOption::DashboardEstadistico => "14) Dashboard Estadístico",
            MenuOption::Descargas => "Descargas",
        }
    }

    /// Subheader shown at the top of the main panel.
    pub fn heading(&self) -> &'static str {
        match self {
            MenuOption::CoordenadasParalelas => "6) Coordenadas Paralelas (Plotly Parcoords)",
            MenuOption::MatrizCorrelacion => "9) Matriz de Correlación avanzada",
            MenuOption::BoxplotsComparativos => "13) Boxplots Comparativos (Mann-Whitney)",
            MenuOption::DashboardEstadistico => "14) Dashboard Estadístico Consolidado",
            MenuOption::Descargas => "📥 Descargas (Excel)",
            other => other.label(),
        }
    }

    /// URL slug, ASCII only.
    pub fn slug(&self) -> &'static str {
        match self {
            MenuOption::NetworkSesgos => "01-network-sesgos",
            MenuOption::SankeyFlujos => "02-sankey-flujos",
            MenuOption::RadarComparativo => "03-radar-comparativo",
            MenuOption::HexbinPcaPse => "04-hexbin-pca-pse",
            MenuOption::ViolinSwarm => "05-violin-swarm",
            MenuOption::CoordenadasParalelas => "06-coordenadas-paralelas",
            MenuOption::TreemapJerarquico => "07-treemap-jerarquico",
            MenuOption::Ridgeline => "08-ridgeline",
            MenuOption::MatrizCorrelacion => "09-matriz-correlacion",
            MenuOption::PcaBiplot => "10-pca-biplot",
            MenuOption::ScatterMatrix => "11-scatter-matrix",
            MenuOption::HeatmapCuadrantes => "12-heatmap-cuadrantes-sesgos",
            MenuOption::BoxplotsComparativos => "13-boxplots-comparativos",
            MenuOption::DashboardEstadistico => "14-dashboard-estadistico",
            MenuOption::Descargas => "descargas",
        }
    }

    /// Look an option up by its slug.
    pub fn from_slug(slug: &str) -> Option<MenuOption> {
        Self::ALL.iter().copied().find(|option| option.slug() == slug)
    }

    /// Whether the artifact list is resolved from the spreadsheets directory.
    pub fn is_dynamic(&self) -> bool {
        matches!(self, MenuOption::Descargas)
    }

    /// Fixed artifact list for this option.
    ///
    /// Empty for [`MenuOption::Descargas`], whose list depends on the
    /// contents of the spreadsheets root at render time.
    pub fn fixed_artifacts(&self) -> Vec<ArtifactRef> {
        let standard = DisplayHeight::STANDARD;
        let tall = DisplayHeight::TALL;

        match self {
            MenuOption::NetworkSesgos => vec![
                ArtifactRef::interactive("01_network_sesgos.html", standard),
                ArtifactRef::image("01_network_sesgos.png")
                    .with_caption(STATIC_VERSION_CAPTION),
            ],
            MenuOption::SankeyFlujos => vec![
                ArtifactRef::interactive("02_sankey_flujos.html", standard),
                ArtifactRef::image("02_sankey_flujos.png"),
            ],
            MenuOption::RadarComparativo => vec![
                ArtifactRef::interactive("03_radar_comparativo.html", standard),
                ArtifactRef::image("03_radar_comparativo.png"),
            ],
            MenuOption::HexbinPcaPse => vec![ArtifactRef::image("04_hexbin_densidad.png")],
            MenuOption::ViolinSwarm => vec![ArtifactRef::image("05_violin_swarm.png")],
            MenuOption::CoordenadasParalelas => vec![
                ArtifactRef::interactive("06_parallel_coordinates.html", standard),
                ArtifactRef::image("06_parallel_coordinates.png"),
            ],
            MenuOption::TreemapJerarquico => vec![
                ArtifactRef::interactive("07_treemap_jerarquico.html", standard),
                ArtifactRef::image("07_treemap_jerarquico.png"),
            ],
            MenuOption::Ridgeline => vec![ArtifactRef::image("08_ridgeline_plot.png")],
            MenuOption::MatrizCorrelacion => {
                vec![ArtifactRef::image("09_matriz_correlacion_avanzada.png")]
            }
            MenuOption::PcaBiplot => vec![ArtifactRef::image("10_pca_biplot.png")],
            MenuOption::ScatterMatrix => vec![
                ArtifactRef::interactive("11_scatter_matrix.html", tall),
                ArtifactRef::image("11_scatter_matrix.png"),
            ],
            MenuOption::HeatmapCuadrantes => {
                vec![ArtifactRef::image("12_heatmap_cuadrantes_sesgos.png")]
            }
            MenuOption::BoxplotsComparativos => {
                vec![ArtifactRef::image("13_boxplot_comparativo.png")]
            }
            MenuOption::DashboardEstadistico => vec![
                ArtifactRef::interactive("14_dashboard_estadistico.html", tall),
                ArtifactRef::image("14_dashboard_estadistico.png"),
            ],
            MenuOption::Descargas => Vec::new(),
        }
    }
}

impl std::fmt::Display for MenuOption {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::artifact::ArtifactKind;
    use std::collections::HashSet;

    #[test]
    fn test_fifteen_options_with_unique_slugs() {
        let slugs: HashSet<_> = MenuOption::ALL.iter().map(|o| o.slug()).collect();
        assert_eq!(slugs.len(), 15);
    }

    #[test]
    fn test_slug_round_trip() {
        for option in MenuOption::ALL {
            assert_eq!(MenuOption::from_slug(option.slug()), Some(option));
        }
        assert_eq!(MenuOption::from_slug("99-nope"), None);
    }

    #[test]
    fn test_only_descargas_is_dynamic() {
        let dynamic: Vec<_> = MenuOption::ALL.iter().filter(|o| o.is_dynamic()).collect();
        assert_eq!(dynamic, vec![&MenuOption::Descargas]);
        assert!(MenuOption::Descargas.fixed_artifacts().is_empty());
    }

    #[test]
    fn test_fixed_lists_put_interactive_before_image() {
        for option in MenuOption::ALL.iter().filter(|o| !o.is_dynamic()) {
            let refs = option.fixed_artifacts();
            assert!(!refs.is_empty(), "{option} has no artifacts");
            assert_eq!(refs.last().map(|r| r.kind), Some(ArtifactKind::StaticImage));
            if refs.len() == 2 {
                assert_eq!(refs[0].kind, ArtifactKind::InteractiveDocument);
            }
        }
    }

    #[test]
    fn test_tall_viewports() {
        let height = |option: MenuOption| option.fixed_artifacts()[0].height;
        assert_eq!(height(MenuOption::ScatterMatrix), Some(DisplayHeight::TALL));
        assert_eq!(height(MenuOption::DashboardEstadistico), Some(DisplayHeight::TALL));
        assert_eq!(height(MenuOption::NetworkSesgos), Some(DisplayHeight::STANDARD));
    }

    #[test]
    fn test_headings() {
        assert_eq!(MenuOption::SankeyFlujos.heading(), "2) Sankey de Flujos");
        assert_eq!(
            MenuOption::MatrizCorrelacion.heading(),
            "9) Matriz de Correlación avanzada"
        );
        assert_eq!(MenuOption::Descargas.heading(), "📥 Descargas (Excel)");
    }

    #[test]
    fn test_only_first_image_has_caption() {
        let captioned: Vec<_> = MenuOption::ALL
            .iter()
            .flat_map(|o| o.fixed_artifacts())
            .filter(|r| r.caption.is_some())
            .collect();
        assert_eq!(captioned.len(), 1);
        assert_eq!(captioned[0].filename, "01_network_sesgos.png");
    }
}
