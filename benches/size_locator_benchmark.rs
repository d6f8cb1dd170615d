//! Size discovery throughput
//!
//! - Ranked candidate scoring vs. plain pool order on a busy product page
//! - Full FIND_SIZE round trip through the page agent

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use scraper::Html;
use size_advisor_lib::application::{spawn_page_agent, SizeAdvisor};
use size_advisor_lib::domain::UserMeasurements;
use size_advisor_lib::infrastructure::parsing::CandidateScoring;
use size_advisor_lib::infrastructure::{AppConfig, SizeInfoLocator};
use tokio::runtime::Runtime;

/// Product page with navigation noise ahead of the real size chart.
fn product_page() -> String {
    let mut body = String::from("<nav>");
    for i in 0..200 {
        body.push_str(&format!(r#"<a href="/c/{i}">Category {i}</a>"#));
    }
    body.push_str("</nav><div class=\"product-description\">");
    for _ in 0..40 {
        body.push_str("<p>Garment dimensions may vary slightly between batches.</p>");
    }
    body.push_str(
        r#"</div>
        <section id="size-chart">
          <h2>Size chart</h2>
          <table>
            <tr><td>Chest</td><td>38-40 in</td></tr>
            <tr><td>Shoulder</td><td>17</td></tr>
            <tr><td>Length</td><td>28</td></tr>
          </table>
        </section>
        <select name="size"><option>S</option><option>M</option><option>L</option></select>"#,
    );
    format!("<html><body>{body}</body></html>")
}

fn locator_comparison(c: &mut Criterion) {
    let page = product_page();
    let html = Html::parse_document(&page);
    let ranked = SizeInfoLocator::new().unwrap();
    let pool_order = SizeInfoLocator::new()
        .unwrap()
        .with_scoring(CandidateScoring::pool_order());

    c.bench_function("locator - ranked candidates", |b| {
        b.iter(|| black_box(ranked.find_size_information(black_box(&html))))
    });

    c.bench_function("locator - pool order", |b| {
        b.iter(|| black_box(pool_order.find_size_information(black_box(&html))))
    });
}

fn agent_round_trip(c: &mut Criterion) {
    let rt = Runtime::new().unwrap();
    let advisor = SizeAdvisor::from_config(&AppConfig::default()).unwrap();
    let (client, _agent) = rt.block_on(async { spawn_page_agent(advisor, product_page(), 8, None) });

    c.bench_function("page agent - FIND_SIZE round trip", |b| {
        b.to_async(&rt).iter(|| {
            let client = client.clone();
            async move { black_box(client.find_size(UserMeasurements::with_chest(39.0)).await) }
        })
    });
}

criterion_group!(benches, locator_comparison, agent_round_trip);
criterion_main!(benches);
