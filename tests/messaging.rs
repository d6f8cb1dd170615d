//! FIND_SIZE request/response over the page agent
use size_advisor_lib::application::{spawn_page_agent, FindSizeError, SizeAdvisor, SizeMessage, SizeResponse};
use size_advisor_lib::domain::UserMeasurements;
use size_advisor_lib::infrastructure::AppConfig;
use std::time::Duration;

const PAGE: &str = r#"<html><body>
    <section id="size-info">
      <h2>Size guide</h2>
      <table><tr><td>Bust</td><td>36"</td></tr></table>
    </section>
</body></html>"#;

#[test]
fn json_request_is_answered_synchronously() {
    let advisor = SizeAdvisor::from_config(&AppConfig::default()).unwrap();
    let message: SizeMessage =
        serde_json::from_str(r#"{"kind":"FIND_SIZE","measurements":{"chest":35.0}}"#).unwrap();

    let response = advisor.handle_message(PAGE, message).unwrap();
    assert_eq!(
        response,
        SizeResponse {
            size: "S".to_string(),
            explanation: "Based on chest measurements from the size chart.".to_string(),
        }
    );
    assert_eq!(
        response.display_text(),
        "Recommended size: S\nBased on chest measurements from the size chart."
    );
}

#[tokio::test]
async fn concurrent_clients_each_get_one_reply() {
    let advisor = SizeAdvisor::from_config(&AppConfig::default()).unwrap();
    let (client, agent) = spawn_page_agent(advisor, PAGE.to_string(), 2, Some(Duration::from_secs(5)));

    let requests = [31.0, 38.0, 42.0, 47.0].map(|chest| {
        let client = client.clone();
        tokio::spawn(async move { client.find_size(UserMeasurements::with_chest(chest)).await })
    });

    let mut sizes = Vec::new();
    for request in requests {
        sizes.push(request.await.unwrap().unwrap().size);
    }
    assert_eq!(sizes, ["XS", "M", "L", "XXL"]);

    drop(client);
    agent.await.unwrap();
}

#[tokio::test]
async fn missing_chest_comes_back_as_an_error() {
    let advisor = SizeAdvisor::from_config(&AppConfig::default()).unwrap();
    let (client, _agent) = spawn_page_agent(advisor, PAGE.to_string(), 1, None);

    let measurements = UserMeasurements {
        chest: None,
        shoulders: Some(17.0),
        length: None,
    };
    let err = client.find_size(measurements).await.unwrap_err();
    assert!(matches!(err, FindSizeError::Recommendation(_)));
}
