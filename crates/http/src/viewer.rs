//! Server-rendered dashboard HTML.
//!
//! Two pages share one shell: the login form when no session exists, and the
//! dashboard with the fetch form, summaries, charts and the transactions
//! table otherwise. Every interpolated value goes through [`escape_html`];
//! chart data is embedded as JSON via [`script_json`].

use chrono::{Duration, NaiveDate};
use serde::Serialize;
use vantage_dash_core::constants::{DASHBOARD_ROW_LIMIT, DATE_PICKER_LOOKBACK_DAYS};
use vantage_dash_core::{DocSkillSummary, TransactionRecord, TransactionStatus};
use vantage_dash_service::DashboardState;

const TITLE: &str = "ABBYY Vantage Dashboard";
const CHART_JS: &str = r#"<script src="https://cdn.jsdelivr.net/npm/chart.js"></script>"#;
const STRAIGHT_COLOR: &str = "#27ae60";
const MANUAL_COLOR: &str = "#e74c3c";
const DOC_COLORS: [&str; 5] = ["#2e86c1", "#e67e22", "#27ae60", "#8e44ad", "#c0392b"];

/// Table paging, the fetch-form toggle and the export button.
const DASHBOARD_JS: &str = r##"<script>
function exportCSV() { window.location.href = "/export.csv"; }
let currentPage = 0;
const pageSize = 20;
function txRows() { return document.querySelectorAll("#txTable tbody tr"); }
function showPage() {
  txRows().forEach((row, i) => {
    row.style.display = (i >= currentPage * pageSize && i < (currentPage + 1) * pageSize) ? "" : "none";
  });
}
function prevPage() { if (currentPage > 0) { currentPage--; showPage(); } }
function nextPage() { if ((currentPage + 1) * pageSize < txRows().length) { currentPage++; showPage(); } }
function toggleFetch() {
  const form = document.getElementById("fetchForm");
  const arrow = document.getElementById("toggle-arrow");
  const hidden = form.style.display === "none";
  form.style.display = hidden ? "block" : "none";
  arrow.textContent = hidden ? "⬇️" : "➡️";
}
window.addEventListener("load", showPage);
</script>"##;

pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

/// JSON safe to place inside a `<script>` element.
fn script_json<T: Serialize + ?Sized>(value: &T) -> String {
    serde_json::to_string(value).map_or_else(|_| "null".to_owned(), |json| json.replace("</", "<\\/"))
}

pub fn render_page(state: &DashboardState, today: NaiveDate) -> String {
    if state.is_authenticated() {
        render_dashboard(state, today)
    } else {
        render_login(state.last_error.as_deref())
    }
}

fn shell(head_extra: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>{TITLE}</title>
<link rel="stylesheet" href="/static/style.css">
{head_extra}
</head>
<body>
{body}
</body>
</html>
"#
    )
}

fn error_banner(last_error: Option<&str>) -> String {
    last_error
        .map(|message| format!(r#"<div class="error">{}</div>"#, escape_html(message)))
        .unwrap_or_default()
}

fn render_login(last_error: Option<&str>) -> String {
    let body = format!(
        r#"<div class="container">
<h1>{TITLE}</h1>
{banner}
<div class="card">
<h2>Authenticate</h2>
<form method="post" action="/authenticate">
<label>Vantage Host:</label>
<input type="text" name="url" required placeholder="e.g., vantage-us.abbyy.com"><br>
<label>Client ID:</label>
<input type="text" name="client_id" required><br>
<label>Client Secret:</label>
<input type="password" name="client_secret" required><br>
<button type="submit">Authenticate</button>
</form>
</div>
</div>"#,
        banner = error_banner(last_error),
    );
    shell("", &body)
}

fn render_dashboard(state: &DashboardState, today: NaiveDate) -> String {
    let has_results = !state.records.is_empty();
    let connected = state
        .host()
        .map(|host| format!(r#"<div class="info">Connected to {}</div>"#, escape_html(host)))
        .unwrap_or_default();

    let mut body = format!(
        r#"<div class="logout-container">
<form method="post" action="/logout"><button type="submit" class="logout-btn">Logout</button></form>
</div>
<div class="container">
<h1>{TITLE}</h1>
{connected}
{banner}
{fetch}
"#,
        banner = error_banner(state.last_error.as_deref()),
        fetch = render_fetch_form(state, today, has_results),
    );
    if has_results {
        body.push_str(&render_summary(state));
        body.push_str(&render_docskills(&state.docskill_summary));
        body.push_str(&render_transactions(&state.records));
    }
    body.push_str("</div>\n");

    let head = format!("{CHART_JS}\n{DASHBOARD_JS}");
    shell(&head, &body)
}

fn render_fetch_form(state: &DashboardState, today: NaiveDate, collapsed: bool) -> String {
    let skill_options: String = state
        .process_skills()
        .map(|skill| {
            format!(
                r#"<option value="{}">{}</option>"#,
                escape_html(&skill.id),
                escape_html(&skill.name)
            )
        })
        .collect();
    let status_options: String = TransactionStatus::ALL_VARIANTS
        .iter()
        .map(|status| format!(r#"<option value="{status}">{status}</option>"#))
        .collect();
    let min_date = today - Duration::days(DATE_PICKER_LOOKBACK_DAYS);
    let (display, arrow) = if collapsed { ("none", "\u{27A1}\u{FE0F}") } else { ("block", "\u{2B07}\u{FE0F}") };

    format!(
        r#"<div class="card" id="fetchCard">
<div class="section-header" onclick="toggleFetch()">
<h2>Fetch Transactions</h2>
<span id="toggle-arrow" class="toggle-arrow">{arrow}</span>
</div>
<div id="fetchForm" style="display:{display}">
<form method="post" action="/transactions">
<label>Process Skill:</label>
<select name="skill_id" required>{skill_options}</select>
<a href="/skills" class="reload-link">Reload skills</a>
<label>Transaction Status:</label>
<select name="transaction_type">{status_options}</select>
<label>Start Date:</label>
<input type="date" name="start_date" value="{min_date}" min="{min_date}" max="{today}">
<label>End Date:</label>
<input type="date" name="end_date" value="{today}" min="{min_date}" max="{today}">
<label>Page Size (optional):</label>
<input type="number" name="limit" min="1" max="1000">
<button type="submit">Get Transactions</button>
</form>
</div>
</div>
"#
    )
}

fn render_summary(state: &DashboardState) -> String {
    let straight = state.review_summary.straight_through;
    let manual = state.review_summary.with_manual_review;
    format!(
        r#"<div class="grid">
<div class="half">
<h3>Results</h3>
<table class="summary-table">
<tr><td></td><th>Total Transactions</th><td>{total}</td></tr>
<tr><td></td><th>Total Pages Consumed</th><td>{pages}</td></tr>
<tr><td style="color:{STRAIGHT_COLOR}">&#x2B24;</td><th>Straight Through</th><td>{straight}</td></tr>
<tr><td style="color:{MANUAL_COLOR}">&#x2B24;</td><th>Manual Review</th><td>{manual}</td></tr>
</table>
</div>
<div class="half"><canvas id="reviewChart"></canvas></div>
</div>
<script>
new Chart(document.getElementById("reviewChart"), {{
  type: "doughnut",
  data: {{
    labels: ["Straight Through", "Manual Review"],
    datasets: [{{ data: [{straight}, {manual}], backgroundColor: ["{STRAIGHT_COLOR}", "{MANUAL_COLOR}"] }}]
  }},
  options: {{ responsive: true, maintainAspectRatio: false, plugins: {{ legend: {{ display: false }} }} }}
}});
</script>
"#,
        total = state.records.len(),
        pages = state.total_pages(),
    )
}

fn render_docskills(summary: &DocSkillSummary) -> String {
    if summary.is_empty() {
        return String::new();
    }
    let colors: Vec<&str> = DOC_COLORS.iter().copied().cycle().take(summary.len()).collect();
    let labels: Vec<&str> = summary.keys().map(String::as_str).collect();
    let counts: Vec<u64> = summary.values().map(|stats| stats.transaction_count).collect();
    let rows: String = summary
        .iter()
        .zip(&colors)
        .map(|((name, stats), color)| {
            format!(
                r#"<tr><td style="color:{color}">&#x2B24;</td><td>{}</td><td>{}</td><td>{}</td></tr>"#,
                escape_html(name),
                stats.transaction_count,
                stats.page_total
            )
        })
        .collect();

    format!(
        r#"<div class="grid">
<div class="half">
<h3>Document Skills</h3>
<table id="docSkillTable">
<tr><th></th><th>Document Skill</th><th>Documents</th><th>Pages</th></tr>
{rows}
</table>
</div>
<div class="half"><canvas id="docSkillChart"></canvas></div>
</div>
<script>
new Chart(document.getElementById("docSkillChart"), {{
  type: "doughnut",
  data: {{ labels: {labels}, datasets: [{{ data: {counts}, backgroundColor: {colors} }}] }},
  options: {{ responsive: true, maintainAspectRatio: false, plugins: {{ legend: {{ display: false }} }} }}
}});
</script>
"#,
        labels = script_json(&labels),
        counts = script_json(&counts),
        colors = script_json(&colors),
    )
}

fn render_transactions(records: &[TransactionRecord]) -> String {
    let rows: String = records
        .iter()
        .take(DASHBOARD_ROW_LIMIT)
        .map(|record| {
            format!(
                "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>\n",
                escape_html(&record.id),
                escape_html(&record.source_file_name),
                escape_html(&record.status),
                record.page_count,
                escape_html(&record.created),
                record.manual_review_label(),
                escape_html(&record.document_skill_name),
            )
        })
        .collect();

    format!(
        r#"<h3>Transactions</h3>
<table id="txTable">
<thead>
<tr><th>Transaction ID</th><th>Source File</th><th>Status</th><th>Pages</th><th>Created</th><th>Manual Review</th><th>Document Skill</th></tr>
</thead>
<tbody>
{rows}</tbody>
</table>
<div class="table-actions">
<button onclick="exportCSV()">Export to CSV</button>
<button onclick="prevPage()">Prev</button>
<button onclick="nextPage()">Next</button>
</div>
"#
    )
}
