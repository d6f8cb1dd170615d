//! End-to-end size lookups: real locator plus recommender over saved pages
use rstest::rstest;
use scraper::Html;
use size_advisor_lib::application::{SizeAdvisor, SizeRecommender};
use size_advisor_lib::domain::{ChartMeasurements, RecommendationBasis, SizeInfo, SizeToken, UserMeasurements};
use size_advisor_lib::infrastructure::{AppConfig, SizeInfoLocator};

const PLAIN_PAGE: &str = r#"<html><body>
    <h1>Linen shirt</h1>
    <p>Soft washed fabric with a relaxed collar.</p>
</body></html>"#;

const DROPDOWN_PAGE: &str = r#"<html><body>
    <h1>Merino crew</h1>
    <label for="variant">Choose</label>
    <select id="variant" name="Size">
      <option>Select one</option>
      <option>S</option>
      <option>M</option>
      <option>L</option>
    </select>
</body></html>"#;

const CHART_PAGE: &str = r#"<html><body>
    <div class="size-chart">
      <h3>Size chart</h3>
      <table>
        <tr><td>Chest</td><td>40 in</td></tr>
        <tr><td>Length</td><td>29</td></tr>
      </table>
    </div>
</body></html>"#;

const PROSE_PAGE: &str = r#"<html><body>
    <div class="product-details"><p>Size guide: available in S, M and XL.</p></div>
</body></html>"#;

fn advisor() -> SizeAdvisor {
    SizeAdvisor::from_config(&AppConfig::default()).expect("default parsing config compiles")
}

fn inspect(page: &str) -> SizeInfo {
    advisor().inspect(&Html::parse_document(page))
}

#[test]
fn page_without_sizing_falls_back_to_generic_chart() {
    assert_eq!(inspect(PLAIN_PAGE), SizeInfo::None);

    let recommendation = advisor()
        .find_size(&Html::parse_document(PLAIN_PAGE), &UserMeasurements::with_chest(38.0))
        .unwrap();
    assert_eq!(recommendation.size, SizeToken::M);
    assert_eq!(
        recommendation.explanation,
        "Based on generic size chart (chest measurement)."
    );
}

#[test]
fn size_dropdown_is_used_when_no_region_matches() {
    assert_eq!(
        inspect(DROPDOWN_PAGE),
        SizeInfo::Options {
            sizes: [SizeToken::S, SizeToken::M, SizeToken::L].into_iter().collect()
        }
    );

    let recommendation = advisor()
        .find_size(&Html::parse_document(DROPDOWN_PAGE), &UserMeasurements::with_chest(44.0))
        .unwrap();
    assert_eq!(recommendation.size, SizeToken::L);
    assert_eq!(
        recommendation.explanation,
        "Based on your measurements, we recommend XL, but it's not available. L is the closest available size."
    );
}

#[test]
fn measurement_chart_is_read_from_the_sizing_region() {
    assert_eq!(
        inspect(CHART_PAGE),
        SizeInfo::Measurements {
            data: ChartMeasurements {
                chest: Some(40.0),
                shoulders: None,
                length: Some(29.0),
            }
        }
    );

    let recommendation = advisor()
        .find_size(&Html::parse_document(CHART_PAGE), &UserMeasurements::with_chest(38.0))
        .unwrap();
    assert_eq!(recommendation.size, SizeToken::M);
    assert_eq!(recommendation.basis, RecommendationBasis::SizeChart);
}

#[rstest]
#[case(36.0, SizeToken::S, RecommendationBasis::Available)]
#[case(41.0, SizeToken::M, RecommendationBasis::ClosestAvailable)]
#[case(44.5, SizeToken::XL, RecommendationBasis::Available)]
fn prose_size_list_drives_substitution(
    #[case] chest: f64,
    #[case] expected: SizeToken,
    #[case] basis: RecommendationBasis,
) {
    let html = Html::parse_document(PROSE_PAGE);
    let recommendation = advisor()
        .find_size(&html, &UserMeasurements::with_chest(chest))
        .unwrap();

    assert_eq!(recommendation.size, expected);
    assert_eq!(recommendation.basis, basis);
}

#[test]
fn advisor_accepts_an_injected_locator_and_chart() {
    let advisor = SizeAdvisor::new(SizeInfoLocator::new().unwrap(), SizeRecommender::default());
    let html = Html::parse_document(PROSE_PAGE);

    assert!(matches!(advisor.inspect(&html), SizeInfo::Sizes { .. }));
}
