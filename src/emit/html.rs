use crate::core::constants::charts;
use crate::core::error::Result;
use crate::emit::charts::{ChartBundle, ChartSize};
use crate::emit::cut::CutBundle;
use crate::emit::{EmitCut, EmitTable};
use crate::pivot::{CutReport, PivotTable};

/// Element id of the embedded JSON payload
const DATA_ELEMENT_ID: &str = "bench-data";

/// Self-contained HTML page that draws a chart or cut bundle.
///
/// The bundle is embedded as JSON and drawn client side by the Google Charts
/// loader. The generation timestamp comes from the caller, so rendering is a
/// pure function of the inputs.
#[derive(Debug, Clone)]
pub struct HostDocument {
    pub title: String,
    pub generated_at: String,
    pub line_size: ChartSize,
    pub cut_size: ChartSize,
}

impl HostDocument {
    pub fn new<T: Into<String>, G: Into<String>>(title: T, generated_at: G) -> Self {
        Self {
            title: title.into(),
            generated_at: generated_at.into(),
            line_size: ChartSize::line(),
            cut_size: ChartSize::cut(),
        }
    }

    pub fn with_sizes(mut self, line_size: ChartSize, cut_size: ChartSize) -> Self {
        self.line_size = line_size;
        self.cut_size = cut_size;
        self
    }

    /// Page with a throughput and a pause line chart per thread count
    pub fn table_page(&self, bundle: &ChartBundle) -> Result<String> {
        let containers: String = bundle
            .charts
            .iter()
            .map(|chart| {
                format!(
                    r#"
            <div class="chart-row">
                <div class="chart-container" id="{}"></div>
                <div class="chart-container" id="{}"></div>
            </div>"#,
                    escape_html(&chart.throughput.id),
                    escape_html(&chart.pause.id)
                )
            })
            .collect();

        Ok(self.render(&bundle.to_json()?, &containers, Self::table_script()))
    }

    /// Page with the two candlestick charts of one cut
    pub fn cut_page(&self, bundle: &CutBundle) -> Result<String> {
        let containers = format!(
            r#"
            <div class="chart-container" id="{}"></div>
            <div class="chart-container" id="{}"></div>"#,
            escape_html(&bundle.throughput.id),
            escape_html(&bundle.pause.id)
        );

        Ok(self.render(&bundle.to_json()?, &containers, Self::cut_script()))
    }

    fn render(&self, data_json: &str, containers: &str, script: &str) -> String {
        format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <script src="{loader}"></script>
    <style>{css}</style>
</head>
<body>
    <div class="container">
        <div class="header">
            <h1>{title}</h1>
            <p>Generated on {generated_at} by benchreport</p>
        </div>{containers}
    </div>
    <script type="application/json" id="{data_id}">{data}</script>
    <script>{script}</script>
</body>
</html>
"#,
            title = escape_html(&self.title),
            loader = charts::LOADER_URL,
            css = Self::css(),
            generated_at = escape_html(&self.generated_at),
            containers = containers,
            data_id = DATA_ELEMENT_ID,
            data = escape_script(data_json),
            script = script,
        )
    }

    fn css() -> &'static str {
        r#"
        :root {
            --bg-color: #f8fafc;
            --card-bg: #ffffff;
            --border-color: #e2e8f0;
            --text-primary: #1e293b;
            --primary-color: #2563eb;
        }

        * { margin: 0; padding: 0; box-sizing: border-box; }

        body {
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
            background-color: var(--bg-color);
            color: var(--text-primary);
        }

        .container { margin: 0 auto; padding: 2rem; }

        .header {
            margin-bottom: 2rem;
            padding: 1.5rem;
            background: var(--primary-color);
            color: white;
            border-radius: 12px;
        }

        .chart-row { display: flex; flex-wrap: wrap; gap: 1.5rem; }

        .chart-container {
            background: var(--card-bg);
            border: 1px solid var(--border-color);
            border-radius: 12px;
            margin-bottom: 1.5rem;
            padding: 1rem;
        }
        "#
    }

    fn table_script() -> &'static str {
        r#"
        const bundle = JSON.parse(document.getElementById('bench-data').textContent);

        function drawLine(chart) {
            const data = new google.visualization.DataTable();
            chart.columns.forEach(c => data.addColumn(c.type, c.label));
            data.addRows(chart.rows);
            new google.visualization.LineChart(document.getElementById(chart.id)).draw(data, {
                title: chart.title,
                width: chart.width,
                height: chart.height,
                hAxis: { title: chart.h_axis.title, logScale: chart.h_axis.log_scale },
                vAxis: { title: chart.v_axis.title, logScale: chart.v_axis.log_scale },
                legend: { position: 'right' }
            });
        }

        google.charts.load('current', { packages: ['corechart'] });
        google.charts.setOnLoadCallback(function() {
            bundle.charts.forEach(c => { drawLine(c.throughput); drawLine(c.pause); });
        });
        "#
    }

    fn cut_script() -> &'static str {
        r#"
        const bundle = JSON.parse(document.getElementById('bench-data').textContent);

        function drawCandles(chart) {
            const data = new google.visualization.DataTable();
            chart.columns.forEach(c => data.addColumn(c.type, c.label));
            data.addRows(chart.rows);
            new google.visualization.CandlestickChart(document.getElementById(chart.id)).draw(data, {
                title: chart.title,
                width: bundle.width,
                height: bundle.height,
                legend: 'none',
                vAxis: { title: chart.v_axis }
            });
        }

        google.charts.load('current', { packages: ['corechart'] });
        google.charts.setOnLoadCallback(function() {
            drawCandles(bundle.throughput);
            drawCandles(bundle.pause);
        });
        "#
    }
}

impl EmitTable for HostDocument {
    fn emit_table(&self, table: &PivotTable) -> Result<String> {
        self.table_page(&ChartBundle::from_table(table, self.line_size))
    }
}

impl EmitCut for HostDocument {
    fn emit_cut(&self, report: &CutReport) -> Result<String> {
        self.cut_page(&CutBundle::from_report(report, self.cut_size))
    }
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Keeps logger names like `</script>` from closing the data block early.
fn escape_script(json: &str) -> String {
    json.replace("</", "<\\/")
}
