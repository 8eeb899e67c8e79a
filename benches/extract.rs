// benches/extract.rs
use criterion::{Criterion, black_box, criterion_group, criterion_main};

use scout_radar::scrape::{self, segment};
use scout_radar::specs::HtmlPage;

/// Export text with `sections` blocks of `rows` stats each.
fn synthetic_export(sections: usize, rows: usize) -> String {
    let mut out = String::from("Report\n\n--- cite ---\n\nStatistic,Per 90,Percentile");
    for s in 0..sections {
        if s > 0 {
            out.push_str("\n,,");
        }
        for r in 0..rows {
            out.push_str(&format!("\nStat {s}.{r},{}.{:02},{}", r % 7, r % 100, (s * 31 + r * 17) % 100));
        }
    }
    out
}

/// Player page with a commented-out summary table and the export button.
fn synthetic_page(rows: usize) -> String {
    let mut body = String::new();
    for r in 0..rows {
        if r > 0 && r % 10 == 0 {
            body.push_str("<tr class=\"spacer partial_table\"><td colspan=\"3\"></td></tr>\n");
        }
        body.push_str(&format!("<tr><th>Stat {r}</th><td>{}.5</td><td>{}%</td></tr>\n", r % 9, r % 100));
    }
    format!(
        r#"<h1 itemprop="name"><span>Bench Player</span></h1>
<div id="all_scout">
  <div class="current"><a class="sr_preset">vs. Midfielders</a></div>
  <button>Get table as CSV (for Excel)</button>
  <!-- <table id="scout_summary_MF"><caption>Bench</caption><tbody>
{body}</tbody></table> -->
</div>"#
    )
}

fn bench_extract(c: &mut Criterion) {
    let raw = synthetic_export(3, 40);
    c.bench_function("segment_120_rows", |b| {
        b.iter(|| {
            let lines = segment::normalize_lines(black_box(&raw));
            let (stats, splits) = segment::segment(&lines);
            black_box((stats.len(), splits.len()))
        })
    });

    let html = synthetic_page(60);
    c.bench_function("scrape_html_page_60_rows", |b| {
        b.iter(|| {
            let mut page = HtmlPage::parse(black_box(&html));
            let report = scrape::scrape(&mut page);
            black_box(report.map(|r| r.stats.len()))
        })
    });
}

criterion_group!(benches, bench_extract);
criterion_main!(benches);
