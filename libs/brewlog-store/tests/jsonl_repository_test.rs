use brewlog_domain::{
    BrewLogError, BrewMeasurement, BrewRequest, BrewService, NewCoffee, Row, Table,
    TableRepository,
};
use brewlog_store::JsonLinesRepository;
use tempfile::TempDir;

fn row(pairs: &[(&str, &str)]) -> Row {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[tokio::test]
async fn test_load_missing_table() {
    let dir = TempDir::new().unwrap();
    let repo = JsonLinesRepository::new(dir.path());

    let result = repo.load("Brew Log").await;
    assert!(matches!(result, Err(BrewLogError::TableNotFound(_))));
    assert!(!repo.exists("Brew Log").await.unwrap());
}

#[tokio::test]
async fn test_append_requires_table() {
    let dir = TempDir::new().unwrap();
    let repo = JsonLinesRepository::new(dir.path());

    let result = repo.append("Brewers", row(&[("name", "V60")])).await;
    assert!(matches!(result, Err(BrewLogError::TableNotFound(_))));
}

#[tokio::test]
async fn test_replace_then_append_then_load() {
    let dir = TempDir::new().unwrap();
    let repo = JsonLinesRepository::new(dir.path().join("nested"));

    repo.replace("Brewers", vec![row(&[("id", "1"), ("name", "V60")])])
        .await
        .unwrap();
    repo.append("Brewers", row(&[("id", "2"), ("name", "Kalita Wave")]))
        .await
        .unwrap();

    assert!(repo.exists("Brewers").await.unwrap());
    let rows = repo.load("Brewers").await.unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["name"], "V60");
    assert_eq!(rows[1]["name"], "Kalita Wave");

    let content = std::fs::read_to_string(repo.table_path("Brewers")).unwrap();
    assert_eq!(content.lines().count(), 2);
    assert!(!repo.table_path("Brewers").with_extension("jsonl.tmp").exists());
}

#[tokio::test]
async fn test_replace_overwrites() {
    let dir = TempDir::new().unwrap();
    let repo = JsonLinesRepository::new(dir.path());

    repo.replace("Brewers", vec![row(&[("name", "V60")]), row(&[("name", "Origami")])])
        .await
        .unwrap();
    repo.replace("Brewers", Vec::new()).await.unwrap();

    assert!(repo.load("Brewers").await.unwrap().is_empty());
}

#[tokio::test]
async fn test_load_skips_blank_lines_and_reports_bad_ones() {
    let dir = TempDir::new().unwrap();
    let repo = JsonLinesRepository::new(dir.path());
    let path = repo.table_path("Brewers");

    std::fs::write(&path, "{\"name\":\"V60\"}\n\n{\"name\":\"Chemex\"}\n").unwrap();
    assert_eq!(repo.load("Brewers").await.unwrap().len(), 2);

    std::fs::write(&path, "{\"name\":\"V60\"}\nnot json\n").unwrap();
    match repo.load("Brewers").await {
        Err(BrewLogError::InvalidRow(msg)) => assert!(msg.contains("line 2")),
        other => panic!("expected InvalidRow, got {:?}", other),
    }
}

#[tokio::test]
async fn test_brew_service_over_files() {
    let dir = TempDir::new().unwrap();
    let service = BrewService::with_repository(JsonLinesRepository::new(dir.path()));

    let created = service.provision().await.unwrap();
    assert_eq!(created.len(), Table::ALL.len());

    let coffee = service
        .add_coffee(NewCoffee {
            name: "Kochere".to_string(),
            grams: 250.0,
            ..Default::default()
        })
        .await
        .unwrap();

    let measurement = BrewMeasurement::new(20.0, 0.0, 40.0, 300.0, 256.0);
    let recorded = service
        .record_brew(BrewRequest::new(coffee.id.clone(), measurement))
        .await
        .unwrap();
    assert_eq!(recorded.remaining_g, 230.0);

    // A fresh service sees what the first one wrote
    let reopened = BrewService::with_repository(JsonLinesRepository::new(dir.path()));
    assert!(reopened.provision().await.unwrap().is_empty());
    assert_eq!(reopened.brew_log(false).await.unwrap().len(), 1);
    assert_eq!(
        reopened.find_coffee(&coffee.id).await.unwrap().grams_remaining,
        230.0
    );
}
