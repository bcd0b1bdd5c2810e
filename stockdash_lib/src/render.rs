//! HTML rendering of a composed [`DashboardPage`].

use tera::{Context, Tera};

use crate::chart::ChartTheme;
use crate::error::DashboardError;
use crate::page::DashboardPage;

const TEMPLATE_NAME: &str = "dashboard.html";
const TEMPLATE: &str = include_str!("../templates/dashboard.html");

pub const PAGE_TITLE: &str = "Stock Data Explorer";
pub const FOOTER: &str = "Stock data provided by Yahoo Finance";

#[derive(Debug, Clone, Copy, Default)]
pub struct RenderOptions {
    pub theme: ChartTheme,
}

/// Compiled page template. Build once and share.
pub struct PageRenderer {
    tera: Tera,
}

impl PageRenderer {
    pub fn new() -> Result<Self, DashboardError> {
        let mut tera = Tera::default();
        tera.add_raw_template(TEMPLATE_NAME, TEMPLATE)?;
        Ok(Self { tera })
    }

    pub fn render(
        &self,
        page: &DashboardPage,
        options: &RenderOptions,
    ) -> Result<String, DashboardError> {
        let mut context = Context::new();
        context.insert("title", PAGE_TITLE);
        context.insert("footer", FOOTER);
        context.insert("theme", &options.theme.to_string());
        context.insert("symbol", &page.query.symbol);
        context.insert("start", &page.query.start_date.to_string());
        context.insert("end", &page.query.end_date.to_string());

        match page.company.ready() {
            Some(panel) => context.insert("columns", &panel.columns),
            None => context.insert("company_error", &page.company.error()),
        }

        match page.chart.ready() {
            Some(figure) => {
                let json = serde_json::to_string(figure)?;
                context.insert("figure_json", &script_safe(&json));
            }
            None => context.insert("chart_error", &page.chart.error()),
        }

        Ok(self.tera.render(TEMPLATE_NAME, &context)?)
    }
}

/// Keep embedded JSON from closing the surrounding `<script>` element.
fn script_safe(json: &str) -> String {
    json.replace("</", "<\\/")
}
